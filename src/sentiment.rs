//! Remote sentiment classification (text-processing.com style API).

use crate::error::BotError;
use crate::transport::{HttpRequest, HttpTransport};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Pos,
    Neg,
    Neutral,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Label::Pos => "pos",
            Label::Neg => "neg",
            Label::Neutral => "neutral",
        })
    }
}

/// Per-category probabilities, each in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Probability {
    pub pos: f64,
    pub neg: f64,
    pub neutral: f64,
}

/// One classification result as returned by the service.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub label: Label,
    pub probability: Probability,
}

impl Sentiment {
    /// Probability mass on the `pos` category.
    #[inline]
    pub fn positivity(&self) -> f64 {
        self.probability.pos
    }
}

/// Anything that can turn text into a `Sentiment`.
pub trait Classifier {
    fn classify(&self, text: &str) -> Result<Sentiment, BotError>;
}

impl<C: Classifier + ?Sized> Classifier for &C {
    fn classify(&self, text: &str) -> Result<Sentiment, BotError> {
        (**self).classify(text)
    }
}

/// Posts `text` as form data to the sentiment endpoint and decodes the JSON answer.
/// The session cookie is never attached here.
pub struct SentimentClient<T> {
    transport: T,
    endpoint: String,
    user_agent: String,
}

impl<T: HttpTransport> SentimentClient<T> {
    pub fn new(transport: T, endpoint: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self { transport, endpoint: endpoint.into(), user_agent: user_agent.into() }
    }
}

impl<T: HttpTransport> Classifier for SentimentClient<T> {
    fn classify(&self, text: &str) -> Result<Sentiment, BotError> {
        let req = HttpRequest::post_form(&self.endpoint)
            .header("User-Agent", &self.user_agent)
            .field("text", text);
        let resp = self.transport.send(&req).map_err(|e| match e {
            BotError::Transport(inner) => BotError::SentimentService(format!("request failed: {inner}")),
            other => other,
        })?;
        if !resp.is_success() {
            return Err(BotError::SentimentService(format!("HTTP {} from {}", resp.status, self.endpoint)));
        }
        decode_sentiment(&resp.body)
    }
}

/// Decode a `{label, probability: {pos, neg, neutral}}` body.
pub fn decode_sentiment(body: &str) -> Result<Sentiment, BotError> {
    serde_json::from_str(body).map_err(|e| BotError::SentimentService(format!("undecodable response: {e}")))
}
