//! Cast text length checks.

use crate::constants::{MAX_TEXT_LENGTH, TRUNCATION_THRESHOLD};
use crate::error::IntentError;

/// Returns the length of `text` in characters.
#[must_use]
pub fn char_length(text: &str) -> usize {
    text.chars().count()
}

/// Returns true if `text` is accepted but will be cut short in summary views.
///
/// # Examples
///
/// ```
/// use warpcast_intents::text::will_truncate;
///
/// assert!(!will_truncate("gm"));
/// assert!(will_truncate(&"a".repeat(321)));
/// ```
#[must_use]
pub fn will_truncate(text: &str) -> bool {
    let length = char_length(text);
    length > TRUNCATION_THRESHOLD && length <= MAX_TEXT_LENGTH
}

/// Checks the text against the maximum length, logging the truncation advisory.
///
/// Returns the length in characters.
///
/// # Errors
///
/// Returns `IntentError::TextTooLong` if the text exceeds 1024 characters.
pub fn check_text(text: &str) -> Result<usize, IntentError> {
    let length = char_length(text);
    if length > MAX_TEXT_LENGTH {
        return Err(IntentError::TextTooLong {
            max: MAX_TEXT_LENGTH,
            actual: length,
        });
    }

    if length > TRUNCATION_THRESHOLD {
        tracing::warn!(
            length,
            threshold = TRUNCATION_THRESHOLD,
            "cast text is longer than {TRUNCATION_THRESHOLD} characters and will be truncated in summary views"
        );
    }

    Ok(length)
}
