//! Request middleware.

mod session;

pub use session::{session_middleware, CurrentSession};
