//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement (in characters)
pub const MIN_PASSWORD_LENGTH: usize = 4;

/// Number of digits in a tax id, check digits included
pub const TAX_ID_LENGTH: usize = 14;

/// Characters stripped from a tax id before validation
pub const TAX_ID_PUNCTUATION: &[char] = &['.', '/', '-'];

/// Weights for the first tax id check digit
pub const TAX_ID_WEIGHTS_FIRST: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weights for the second tax id check digit
pub const TAX_ID_WEIGHTS_SECOND: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Email syntax applied to the trimmed input. Word characters are ASCII only.
pub const EMAIL_PATTERN: &str =
    r"^[A-Za-z0-9_+.]+@[A-Za-z0-9_]+\.[A-Za-z0-9_]{2,}(?:\.[A-Za-z0-9_]{2})?$";

/// Earliest accepted vehicle release year
pub const MIN_RELEASE_YEAR: i32 = 1900;

// =============================================================================
// Authentication
// =============================================================================

/// Issuer written into and required from every token
pub const TOKEN_ISSUER: &str = "dealer-marketplace-auth";

/// Token validity window in hours
pub const TOKEN_VALIDITY_HOURS: i64 = 12;

/// Recommended minimum signing secret length
pub const MIN_TOKEN_SECRET_LENGTH: usize = 32;

/// Token type identifier
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

/// Seconds per hour (for token expiration calculation)
pub const SECONDS_PER_HOUR: i64 = 3600;
