//! Error taxonomy shared by every stage of a run.
//! None of these are retried; callers let them end the run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    /// The session cookie did not authenticate (the page still offers a login link).
    #[error("session is invalid: the front page still shows a login link")]
    Authentication,

    /// A scraped href did not carry the expected `<key>=<digits>` pair.
    /// Usually means the page markup changed.
    #[error("malformed link: no `{key}=<digits>` in {href:?}")]
    MalformedLink { key: &'static str, href: String },

    /// The sentiment endpoint failed or answered with something we cannot decode.
    #[error("sentiment service error: {0}")]
    SentimentService(String),

    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Invalid value in one of the environment-supplied options.
    #[error("invalid config value for {var}: {reason}")]
    Config { var: &'static str, reason: String },
}

impl BotError {
    pub fn malformed_link(key: &'static str, href: impl Into<String>) -> Self {
        Self::MalformedLink { key, href: href.into() }
    }
}

impl From<reqwest::Error> for BotError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(Box::new(e))
    }
}
