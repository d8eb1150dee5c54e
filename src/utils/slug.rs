//! Slug generation and validation.

use crate::error::AppError;
use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

/// Alphabet random slugs are drawn from: digits, lowercase, uppercase.
const SLUG_ALPHABET: &[u8] = b"1234567890abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of a generated slug.
pub const GENERATED_SLUG_LENGTH: usize = 6;

pub const MIN_CUSTOM_SLUG_LENGTH: usize = 2;
pub const MAX_CUSTOM_SLUG_LENGTH: usize = 10;

/// Slugs used by fixed routes and therefore never resolvable as links.
pub const RESERVED_SLUGS: &[&str] = &["create", "health"];

/// Matches slugs that look like static file names (`logo.png`).
static FILE_EXTENSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".+\.[a-zA-Z]+$").expect("file extension regex is valid"));

const ILLEGAL_SLUG_MESSAGE: &str =
    "Illegal length: slug, (>= 2 && <= 10), or not ending with a file extension.";

/// Draws a random slug of [`GENERATED_SLUG_LENGTH`] characters.
///
/// Each character is picked uniformly and independently from the 62 character
/// alphanumeric alphabet. The result is not checked against existing links.
pub fn generate_slug() -> String {
    let mut rng = rand::rng();

    (0..GENERATED_SLUG_LENGTH)
        .map(|_| SLUG_ALPHABET[rng.random_range(0..SLUG_ALPHABET.len())] as char)
        .collect()
}

/// Validates a caller supplied slug.
///
/// # Rules
///
/// - 2 to 10 characters
/// - Must not end in `.` followed by letters (`banner.jpg`)
/// - Must not be a reserved route name
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_slug(slug: &str) -> Result<(), AppError> {
    let length = slug.chars().count();

    if !(MIN_CUSTOM_SLUG_LENGTH..=MAX_CUSTOM_SLUG_LENGTH).contains(&length)
        || FILE_EXTENSION_REGEX.is_match(slug)
    {
        return Err(AppError::bad_request(ILLEGAL_SLUG_MESSAGE));
    }

    if RESERVED_SLUGS.contains(&slug) {
        return Err(AppError::bad_request("This slug is reserved."));
    }

    Ok(())
}
