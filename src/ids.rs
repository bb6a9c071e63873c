//! Numeric identifiers pulled out of scraped hrefs.
//!
//! Strict pattern matching only: the key, a literal `=`, then one or more digits.
//! No other query-string parsing happens here.

use crate::error::BotError;
use regex::Regex;
use std::sync::LazyLock;

static POST_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"id=(\d+)").expect("valid post id regex"));
static COMMENT_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"for=(\d+)").expect("valid comment id regex"));

/// `item?id=123` -> `"123"`.
pub fn extract_post_id(href: &str) -> Result<String, BotError> {
    capture_digits(&POST_ID, "id", href)
}

/// `vote?for=456&dir=up&...` -> `"456"`.
pub fn extract_comment_id(href: &str) -> Result<String, BotError> {
    capture_digits(&COMMENT_ID, "for", href)
}

fn capture_digits(re: &Regex, key: &'static str, href: &str) -> Result<String, BotError> {
    re.captures(href)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| BotError::malformed_link(key, href))
}
