//! The compose request consumed by [`composer_url`](crate::composer_url).

/// A cast to pre-fill in the Warpcast composer.
///
/// Fields are plain strings; validation happens when the request is turned
/// into a URL. Empty optional fields are treated as absent.
///
/// # Examples
///
/// ```
/// use warpcast_intents::ComposeRequest;
///
/// let request = ComposeRequest::new("Hello World!")
///     .embed("https://events.xyz/events/2223b818")
///     .channel_key("testinprod");
///
/// assert_eq!(request.embeds.len(), 1);
/// assert!(!request.is_reply());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ComposeRequest {
    /// Text of the cast, at most 1024 characters.
    pub text: String,
    /// Up to two absolute http/https URLs, in display order.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub embeds: Vec<String>,
    /// Channel to post in.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub channel_key: Option<String>,
    /// Hash of the cast being replied to. Documented by Warpcast as
    /// overriding `channel_key`; both are sent when both are set.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub parent_cast_hash: Option<String>,
}

impl ComposeRequest {
    /// Creates a request with only text set.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Appends an embed.
    #[must_use]
    pub fn embed(mut self, url: impl Into<String>) -> Self {
        self.embeds.push(url.into());
        self
    }

    /// Sets the channel key.
    #[must_use]
    pub fn channel_key(mut self, key: impl Into<String>) -> Self {
        self.channel_key = Some(key.into());
        self
    }

    /// Sets the parent cast hash, making this a reply.
    #[must_use]
    pub fn parent_cast_hash(mut self, hash: impl Into<String>) -> Self {
        self.parent_cast_hash = Some(hash.into());
        self
    }

    /// Returns the channel key if it is set and non-empty.
    #[must_use]
    pub fn channel(&self) -> Option<&str> {
        self.channel_key.as_deref().filter(|k| !k.is_empty())
    }

    /// Returns the parent cast hash if it is set and non-empty.
    #[must_use]
    pub fn parent(&self) -> Option<&str> {
        self.parent_cast_hash.as_deref().filter(|h| !h.is_empty())
    }

    /// Returns true if the request replies to another cast.
    #[must_use]
    pub fn is_reply(&self) -> bool {
        self.parent().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_only_text() {
        let request = ComposeRequest::new("gm");
        assert_eq!(request.text, "gm");
        assert!(request.embeds.is_empty());
        assert_eq!(request.channel_key, None);
        assert_eq!(request.parent_cast_hash, None);
    }

    #[test]
    fn embeds_keep_order() {
        let request = ComposeRequest::new("")
            .embed("https://a.xyz")
            .embed("https://b.xyz");
        assert_eq!(request.embeds, vec!["https://a.xyz", "https://b.xyz"]);
    }

    #[test]
    fn empty_optionals_read_as_absent() {
        let request = ComposeRequest::new("gm").channel_key("").parent_cast_hash("");
        assert_eq!(request.channel(), None);
        assert_eq!(request.parent(), None);
        assert!(!request.is_reply());
    }

    #[test]
    fn parent_hash_marks_reply() {
        let request = ComposeRequest::new("gm")
            .parent_cast_hash("0xfc15fd3e989e384d406668dbdd58df08b3162d3c");
        assert!(request.is_reply());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_wire_names() {
        let request = ComposeRequest::new("gm")
            .channel_key("testinprod")
            .parent_cast_hash("0xfc15fd3e989e384d406668dbdd58df08b3162d3c");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["channelKey"], "testinprod");
        assert_eq!(
            json["parentCastHash"],
            "0xfc15fd3e989e384d406668dbdd58df08b3162d3c"
        );
        assert!(json.get("embeds").is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_accepts_text_only() {
        let request: ComposeRequest = serde_json::from_str(r#"{"text":"gm"}"#).unwrap();
        assert_eq!(request, ComposeRequest::new("gm"));
    }
}
