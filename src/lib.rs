//! Builder and validator for Warpcast compose intent URLs.
//!
//! This crate turns a description of a cast into a deep link that pre-fills
//! the Warpcast composer, without calling any API. It also builds profile and
//! conversation links.
//!
//! # Overview
//!
//! Three URL shapes are produced:
//!
//! ```text
//! https://warpcast.com/~/compose?text=<text>&embeds[]=<url>&channelKey=<key>&parentCastHash=<hash>
//! https://warpcast.com/~/profiles/<fid>
//! https://warpcast.com/~/conversations/<hash>
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use warpcast_intents::{ComposeRequest, cast_url_by_hash, composer_url, profile_url};
//!
//! let request = ComposeRequest::new("Hello World!")
//!     .embed("https://events.xyz/events/2223b818")
//!     .channel_key("testinprod");
//!
//! let url = composer_url(&request).unwrap();
//! assert!(url.starts_with("https://warpcast.com/~/compose?text=Hello%20World%21"));
//!
//! assert_eq!(profile_url(9391), "https://warpcast.com/~/profiles/9391");
//!
//! let url = cast_url_by_hash("0x6c48f6fa5060edf19af7ec9fad5028b0ba2e7a3c").unwrap();
//! assert!(url.ends_with("/conversations/0x6c48f6fa5060edf19af7ec9fad5028b0ba2e7a3c"));
//! ```
//!
//! # Validation Rules
//!
//! | Field | Rule |
//! |-------|------|
//! | Text | at most 1024 chars; over 320 logs a truncation warning |
//! | Embeds | at most 2, each an absolute http/https URL |
//! | Channel key | free-form |
//! | Parent cast hash | `0x` + 40 hex digits, any case |
//!
//! Checks run in that order and the first failure is returned.
//!
//! # Logging
//!
//! Events are emitted through [`tracing`]; install a subscriber to see the
//! truncation warning and per-URL debug events.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod cast_hash;
mod constants;
mod embed;
mod error;
mod intent;
pub mod prelude;
mod query;
mod request;
pub mod text;

pub use cast_hash::CastHash;
pub use constants::{
    CAST_HASH_HEX_DIGITS, CAST_HASH_LENGTH, CAST_HASH_PREFIX, COMPOSER_BASE_URL,
    CONVERSATION_BASE_URL, MAX_EMBEDS, MAX_TEXT_LENGTH, PROFILE_BASE_URL, TRUNCATION_THRESHOLD,
};
pub use embed::Embed;
pub use error::{CastHashError, EmbedError, IntentError};
pub use intent::{cast_url_by_hash, composer_url, parse_composer_url, profile_url};
pub use query::IntentQuery;
pub use request::ComposeRequest;
