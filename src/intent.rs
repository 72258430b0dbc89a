//! Builders for Warpcast intent and deep-link URLs.
//!
//! Every function here is pure: it validates its input and either returns a
//! complete URL or an [`IntentError`], never a partial result. Composer
//! requests are validated in the order their parameters are written:
//! text, embeds, channel, parent cast hash.
//!
//! See <https://docs.farcaster.xyz/reference/warpcast/cast-composer-intents>.

use crate::cast_hash::CastHash;
use crate::constants::{COMPOSER_BASE_URL, CONVERSATION_BASE_URL, MAX_EMBEDS, PROFILE_BASE_URL};
use crate::embed::Embed;
use crate::error::IntentError;
use crate::query::IntentQuery;
use crate::request::ComposeRequest;
use crate::text::check_text;

const TEXT_PARAM: &str = "text";
const EMBEDS_PARAM: &str = "embeds[]";
const CHANNEL_KEY_PARAM: &str = "channelKey";
const PARENT_CAST_HASH_PARAM: &str = "parentCastHash";

/// Builds a composer intent URL for the given request.
///
/// Parameters are written in a fixed order: `text`, one `embeds[]` per embed,
/// `channelKey`, then `parentCastHash`. Optional parameters are left out when
/// absent or empty. Text longer than 320 characters is accepted but logs a
/// truncation warning.
///
/// # Errors
///
/// Returns the first of these, checked in order:
/// - `IntentError::TextTooLong` if the text exceeds 1024 characters
/// - `IntentError::TooManyEmbeds` if more than two embeds are given
/// - `IntentError::InvalidEmbedUrl` for the first embed that is not an
///   absolute http/https URL
/// - `IntentError::InvalidHashFormat` if the parent cast hash is malformed
///
/// # Examples
///
/// ```
/// use warpcast_intents::{ComposeRequest, composer_url};
///
/// let request = ComposeRequest::new("Hello World!")
///     .embed("https://events.xyz/events/2223b818")
///     .channel_key("testinprod");
///
/// assert_eq!(
///     composer_url(&request).unwrap(),
///     "https://warpcast.com/~/compose?text=Hello%20World%21\
///      &embeds[]=https%3A%2F%2Fevents.xyz%2Fevents%2F2223b818\
///      &channelKey=testinprod"
/// );
/// ```
pub fn composer_url(request: &ComposeRequest) -> Result<String, IntentError> {
    let (embeds, parent) = validate(request)?;

    let mut query = IntentQuery::new();
    query.append(TEXT_PARAM, request.text.as_str());
    for embed in &embeds {
        query.append(EMBEDS_PARAM, embed.as_str());
    }
    if let Some(channel) = request.channel() {
        query.append(CHANNEL_KEY_PARAM, channel);
    }
    if let Some(parent) = &parent {
        query.append(PARENT_CAST_HASH_PARAM, parent.as_str());
    }

    let url = format!("{COMPOSER_BASE_URL}?{query}");
    tracing::debug!(
        embeds = embeds.len(),
        reply = parent.is_some(),
        url = %url,
        "built composer intent URL"
    );
    Ok(url)
}

/// Builds the profile URL for an account id.
///
/// # Examples
///
/// ```
/// use warpcast_intents::profile_url;
///
/// assert_eq!(profile_url(9391), "https://warpcast.com/~/profiles/9391");
/// ```
#[must_use]
pub fn profile_url(fid: u64) -> String {
    format!("{PROFILE_BASE_URL}/{fid}")
}

/// Builds the conversation URL for a cast.
///
/// The hash is written verbatim; hex digits need no encoding.
///
/// # Errors
///
/// Returns `IntentError::InvalidHashFormat` if `hash` is not `0x` followed by
/// 40 hex digits.
///
/// # Examples
///
/// ```
/// use warpcast_intents::cast_url_by_hash;
///
/// let url = cast_url_by_hash("0x6c48f6fa5060edf19af7ec9fad5028b0ba2e7a3c").unwrap();
/// assert_eq!(
///     url,
///     "https://warpcast.com/~/conversations/0x6c48f6fa5060edf19af7ec9fad5028b0ba2e7a3c"
/// );
/// ```
pub fn cast_url_by_hash(hash: &str) -> Result<String, IntentError> {
    let hash = parse_hash(hash)?;
    Ok(format!("{CONVERSATION_BASE_URL}/{hash}"))
}

/// Parses a composer intent URL back into the request it encodes.
///
/// Query values are decoded as `application/x-www-form-urlencoded`. Unknown
/// parameters are ignored, and a repeated `channelKey` or `parentCastHash`
/// keeps its last value. The recovered request is validated with the same
/// rules as [`composer_url`].
///
/// # Errors
///
/// Returns:
/// - `IntentError::NotComposerUrl` if `url` does not start with the composer base
/// - `IntentError::MissingParameter` if there is no `text` parameter
/// - any error [`composer_url`] would return for the recovered request
///
/// # Examples
///
/// ```
/// use warpcast_intents::parse_composer_url;
///
/// let request = parse_composer_url(
///     "https://warpcast.com/~/compose?text=gm%20fam&channelKey=testinprod",
/// ).unwrap();
/// assert_eq!(request.text, "gm fam");
/// assert_eq!(request.channel(), Some("testinprod"));
/// ```
pub fn parse_composer_url(url: &str) -> Result<ComposeRequest, IntentError> {
    let not_composer = || IntentError::NotComposerUrl {
        url: url.to_string(),
    };

    let rest = url.strip_prefix(COMPOSER_BASE_URL).ok_or_else(not_composer)?;
    let query = match rest.strip_prefix('?') {
        Some(query) => query,
        None if rest.is_empty() => "",
        None => return Err(not_composer()),
    };
    // A fragment is not part of the intent.
    let query = query.split_once('#').map_or(query, |(q, _)| q);

    let params = IntentQuery::parse(query);
    let text = params
        .get(TEXT_PARAM)
        .ok_or(IntentError::MissingParameter { name: TEXT_PARAM })?;

    let request = ComposeRequest {
        text: text.to_string(),
        embeds: params
            .get_all(EMBEDS_PARAM)
            .into_iter()
            .map(str::to_string)
            .collect(),
        channel_key: non_empty(params.get_last(CHANNEL_KEY_PARAM)),
        parent_cast_hash: non_empty(params.get_last(PARENT_CAST_HASH_PARAM)),
    };

    validate(&request)?;
    Ok(request)
}

/// Validates a request, returning its parsed embeds and parent hash.
fn validate(request: &ComposeRequest) -> Result<(Vec<Embed>, Option<CastHash>), IntentError> {
    check_text(&request.text)?;
    let embeds = check_embeds(&request.embeds)?;
    // channelKey is free-form.
    let parent = request.parent().map(parse_hash).transpose()?;
    Ok((embeds, parent))
}

fn check_embeds(embeds: &[String]) -> Result<Vec<Embed>, IntentError> {
    if embeds.len() > MAX_EMBEDS {
        return Err(IntentError::TooManyEmbeds {
            max: MAX_EMBEDS,
            actual: embeds.len(),
        });
    }

    embeds
        .iter()
        .enumerate()
        .map(|(index, url)| {
            Embed::parse(url).map_err(|reason| IntentError::InvalidEmbedUrl {
                index,
                url: url.clone(),
                reason,
            })
        })
        .collect()
}

fn parse_hash(hash: &str) -> Result<CastHash, IntentError> {
    CastHash::parse(hash).map_err(|reason| IntentError::InvalidHashFormat {
        hash: hash.to_string(),
        reason,
    })
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CastHashError, EmbedError};

    const HASH: &str = "0xfc15fd3e989e384d406668dbdd58df08b3162d3c";

    #[test]
    fn text_only() {
        let url = composer_url(&ComposeRequest::new("gm")).unwrap();
        assert_eq!(url, "https://warpcast.com/~/compose?text=gm");
    }

    #[test]
    fn empty_text_is_still_written() {
        let url = composer_url(&ComposeRequest::new("")).unwrap();
        assert_eq!(url, "https://warpcast.com/~/compose?text=");
    }

    #[test]
    fn hello_world_example() {
        let request = ComposeRequest::new("Hello World!")
            .embed("https://events.xyz/events/2223b818")
            .channel_key("testinprod");
        let url = composer_url(&request).unwrap();

        assert!(url.contains("text=Hello%20World%21"));
        assert_eq!(url.matches("embeds[]=").count(), 1);
        assert!(url.contains("channelKey=testinprod"));
        assert!(!url.contains("parentCastHash"));
    }

    #[test]
    fn all_fields_in_fixed_order() {
        let request = ComposeRequest::new("hi")
            .embed("https://a.xyz")
            .embed("https://b.xyz")
            .channel_key("testinprod")
            .parent_cast_hash(HASH);
        let url = composer_url(&request).unwrap();

        assert_eq!(
            url,
            format!(
                "https://warpcast.com/~/compose?text=hi\
                 &embeds[]=https%3A%2F%2Fa.xyz\
                 &embeds[]=https%3A%2F%2Fb.xyz\
                 &channelKey=testinprod\
                 &parentCastHash={HASH}"
            )
        );
    }

    #[test]
    fn empty_optionals_are_omitted() {
        let request = ComposeRequest::new("gm").channel_key("").parent_cast_hash("");
        let url = composer_url(&request).unwrap();
        assert_eq!(url, "https://warpcast.com/~/compose?text=gm");
    }

    #[test]
    fn text_too_long_wins_over_other_errors() {
        let request = ComposeRequest::new("a".repeat(1025))
            .embed("not a url")
            .embed("ftp://x")
            .embed("https://a.xyz")
            .parent_cast_hash("0x123");
        assert!(matches!(
            composer_url(&request),
            Err(IntentError::TextTooLong { actual: 1025, .. })
        ));
    }

    #[test]
    fn too_many_embeds_even_if_valid() {
        let request = ComposeRequest::new("gm")
            .embed("https://a.xyz")
            .embed("https://b.xyz")
            .embed("https://c.xyz");
        assert_eq!(
            composer_url(&request),
            Err(IntentError::TooManyEmbeds { max: 2, actual: 3 })
        );
    }

    #[test]
    fn invalid_embed_reports_index() {
        let request = ComposeRequest::new("gm")
            .embed("https://a.xyz")
            .embed("ftp://x");
        assert_eq!(
            composer_url(&request),
            Err(IntentError::InvalidEmbedUrl {
                index: 1,
                url: "ftp://x".to_string(),
                reason: EmbedError::UnsupportedScheme {
                    scheme: "ftp".to_string()
                },
            })
        );
    }

    #[test]
    fn embed_with_whitespace_is_rejected() {
        for embed in [" https://a.xyz", "https://a.xyz\n", "https://exa\tmple.com"] {
            let request = ComposeRequest::new("gm").embed(embed);
            assert!(matches!(
                composer_url(&request),
                Err(IntentError::InvalidEmbedUrl {
                    index: 0,
                    reason: EmbedError::InvalidChar { .. },
                    ..
                })
            ));
        }
    }

    #[test]
    fn embed_error_wins_over_hash_error() {
        let request = ComposeRequest::new("gm")
            .embed("/relative/path")
            .parent_cast_hash("deadbeef");
        assert!(matches!(
            composer_url(&request),
            Err(IntentError::InvalidEmbedUrl { index: 0, .. })
        ));
    }

    #[test]
    fn invalid_parent_hash() {
        let request = ComposeRequest::new("gm").parent_cast_hash("0x123");
        assert_eq!(
            composer_url(&request),
            Err(IntentError::InvalidHashFormat {
                hash: "0x123".to_string(),
                reason: CastHashError::WrongLength {
                    expected: 40,
                    actual: 3
                },
            })
        );
    }

    #[test]
    fn channel_and_parent_are_both_sent() {
        let request = ComposeRequest::new("gm")
            .channel_key("testinprod")
            .parent_cast_hash(HASH);
        let url = composer_url(&request).unwrap();
        assert!(url.contains("&channelKey=testinprod&parentCastHash="));
    }

    #[test]
    fn channel_key_is_encoded() {
        let request = ComposeRequest::new("gm").channel_key("a b&c");
        let url = composer_url(&request).unwrap();
        assert!(url.ends_with("&channelKey=a%20b%26c"));
    }

    #[test]
    fn profile_url_uses_decimal_fid() {
        assert_eq!(profile_url(0), "https://warpcast.com/~/profiles/0");
        assert_eq!(
            profile_url(u64::MAX),
            "https://warpcast.com/~/profiles/18446744073709551615"
        );
    }

    #[test]
    fn cast_url_keeps_hash_casing() {
        let hash = "0x6C48F6FA5060edf19af7ec9fad5028b0ba2e7a3c";
        assert_eq!(
            cast_url_by_hash(hash).unwrap(),
            format!("https://warpcast.com/~/conversations/{hash}")
        );
    }

    #[test]
    fn cast_url_rejects_bad_hash() {
        assert!(matches!(
            cast_url_by_hash("deadbeef"),
            Err(IntentError::InvalidHashFormat {
                reason: CastHashError::MissingPrefix,
                ..
            })
        ));
        assert!(matches!(
            cast_url_by_hash(""),
            Err(IntentError::InvalidHashFormat {
                reason: CastHashError::Empty,
                ..
            })
        ));
    }

    #[test]
    fn parse_recovers_request() {
        let request = ComposeRequest::new("hello fam! @ispeaknerd.eth 🎲")
            .embed("https://warpcast.com/ispeaknerd.eth/0xfc15fd3e")
            .embed("https://events.xyz/events/31c474")
            .channel_key("testinprod")
            .parent_cast_hash(HASH);
        let url = composer_url(&request).unwrap();
        assert_eq!(parse_composer_url(&url).unwrap(), request);
    }

    #[test]
    fn parse_accepts_form_encoded_text() {
        let request =
            parse_composer_url("https://warpcast.com/~/compose?text=gm+fam&extra=1#frag").unwrap();
        assert_eq!(request, ComposeRequest::new("gm fam"));
    }

    #[test]
    fn parse_rejects_other_urls() {
        assert!(matches!(
            parse_composer_url("https://warpcast.com/~/profiles/9391"),
            Err(IntentError::NotComposerUrl { .. })
        ));
        assert!(matches!(
            parse_composer_url("https://warpcast.com/~/composer?text=gm"),
            Err(IntentError::NotComposerUrl { .. })
        ));
    }

    #[test]
    fn parse_requires_text() {
        assert_eq!(
            parse_composer_url("https://warpcast.com/~/compose"),
            Err(IntentError::MissingParameter { name: "text" })
        );
        assert_eq!(
            parse_composer_url("https://warpcast.com/~/compose?channelKey=x"),
            Err(IntentError::MissingParameter { name: "text" })
        );
    }

    #[test]
    fn parse_validates_recovered_request() {
        let url = "https://warpcast.com/~/compose?text=gm&embeds[]=a&embeds[]=b&embeds[]=c";
        assert!(matches!(
            parse_composer_url(url),
            Err(IntentError::TooManyEmbeds { actual: 3, .. })
        ));
    }

    #[test]
    fn parse_keeps_last_channel() {
        let url = "https://warpcast.com/~/compose?text=gm&channelKey=a&channelKey=b";
        let request = parse_composer_url(url).unwrap();
        assert_eq!(request.channel_key.as_deref(), Some("b"));
    }
}
