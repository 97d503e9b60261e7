//! SeaORM entity definitions.
//!
//! These are database-specific entities separate from domain models.

pub mod like;
pub mod tweet;
pub mod user;
