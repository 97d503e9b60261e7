//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Minimum username length
pub const MIN_USERNAME_LENGTH: u64 = 3;

/// Maximum username length
pub const MAX_USERNAME_LENGTH: u64 = 30;

/// Minimum display name length
pub const MIN_NAME_LENGTH: u64 = 1;

/// Maximum display name length
pub const MAX_NAME_LENGTH: u64 = 50;

/// Maximum tweet length in characters
pub const MAX_TWEET_LENGTH: u64 = 280;

// =============================================================================
// Password Hashing
// =============================================================================

/// Default Argon2 iteration count used as the hashing cost factor
pub const DEFAULT_PASSWORD_HASH_COST: u32 = 2;

// =============================================================================
// Authentication
// =============================================================================

/// Default JWT token expiration in hours
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;

/// Longest accepted token lifetime (one year)
pub const MAX_JWT_EXPIRATION_HOURS: i64 = 8760;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Seconds per hour (for token expiration calculation)
pub const SECONDS_PER_HOUR: i64 = 3600;

/// JWT token type identifier
pub const TOKEN_TYPE_BEARER: &str = "Bearer";
