//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use warpcast_intents::prelude::*;
//!
//! let url = composer_url(&ComposeRequest::new("gm")).unwrap();
//! assert_eq!(url, "https://warpcast.com/~/compose?text=gm");
//! ```

pub use crate::{
    // Core types
    CastHash, ComposeRequest, Embed, IntentQuery,
    // Builders
    cast_url_by_hash, composer_url, parse_composer_url, profile_url,
    // Errors
    CastHashError, EmbedError, IntentError,
    // Constants
    CAST_HASH_HEX_DIGITS, CAST_HASH_LENGTH, CAST_HASH_PREFIX, COMPOSER_BASE_URL,
    CONVERSATION_BASE_URL, MAX_EMBEDS, MAX_TEXT_LENGTH, PROFILE_BASE_URL, TRUNCATION_THRESHOLD,
};
