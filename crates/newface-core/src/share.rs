//! Social-share intent links.
//!
//! The share action only opens a pre-filled post; the composite itself is
//! not attached.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

/// Base URL of the X/Twitter web intent.
pub const TWEET_INTENT_URL: &str = "https://twitter.com/intent/tweet";

/// Bytes left as-is in a query value: unreserved characters plus `!`.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'!');

/// Caption and hashtags for a share intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareIntent {
    /// Post text, before form encoding.
    pub text: String,
    /// Hashtags without the leading `#`.
    pub hashtags: Vec<String>,
}

impl ShareIntent {
    /// Build the intent URL with form-encoded `text` and `hashtags`.
    #[must_use]
    pub fn url(&self) -> String {
        let mut url = format!("{TWEET_INTENT_URL}?text={}", form_encode(&self.text));
        if !self.hashtags.is_empty() {
            let tags = self
                .hashtags
                .iter()
                .map(String::as_str)
                .map(form_encode)
                .collect::<Vec<_>>()
                .join(",");
            url.push_str("&hashtags=");
            url.push_str(&tags);
        }
        url
    }
}

impl Default for ShareIntent {
    fn default() -> Self {
        Self {
            text: "Check out my #NewFace meme!".to_owned(),
            hashtags: vec!["NewFace".to_owned()],
        }
    }
}

/// Form-style encoding of a query value: spaces become `+`, everything
/// outside [`QUERY_VALUE`] is percent-encoded.
fn form_encode(value: &str) -> String {
    value
        .split(' ')
        .map(|word| utf8_percent_encode(word, QUERY_VALUE).to_string())
        .collect::<Vec<_>>()
        .join("+")
}
