//! Post and comment records produced by the extractor.

use crate::error::BotError;
use crate::sentiment::{Classifier, Label, Sentiment};
use std::cell::OnceCell;
use std::fmt;

/// A front-page thread. `id` is the digit run embedded in `url`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    pub url: String,
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Story #{}>", self.id)
    }
}

/// A comment from the first comments page of a thread.
///
/// Sentiment is classified at most once per instance: the first call to
/// `sentiment()` (or anything derived from it) stores the result, later calls
/// return the stored value without touching the classifier.
#[derive(Debug)]
pub struct Comment {
    pub id: String,
    pub upvote_url: String,
    pub text: String,
    sentiment: OnceCell<Sentiment>,
}

impl Comment {
    pub fn new(id: impl Into<String>, upvote_url: impl Into<String>, text: impl Into<String>) -> Self {
        Self { id: id.into(), upvote_url: upvote_url.into(), text: text.into(), sentiment: OnceCell::new() }
    }

    /// Classify on first use, then serve the cached result.
    pub fn sentiment<C: Classifier + ?Sized>(&self, classifier: &C) -> Result<&Sentiment, BotError> {
        if let Some(s) = self.sentiment.get() {
            return Ok(s);
        }
        let scored = classifier.classify(&self.text)?;
        Ok(self.sentiment.get_or_init(|| scored))
    }

    pub fn positivity<C: Classifier + ?Sized>(&self, classifier: &C) -> Result<f64, BotError> {
        Ok(self.sentiment(classifier)?.positivity())
    }

    pub fn label<C: Classifier + ?Sized>(&self, classifier: &C) -> Result<Label, BotError> {
        Ok(self.sentiment(classifier)?.label)
    }

    /// Cached sentiment, if it has been computed.
    pub fn cached_sentiment(&self) -> Option<&Sentiment> {
        self.sentiment.get()
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chars = self.text.chars().count();
        match self.sentiment.get() {
            Some(s) => write!(f, "<Comment #{} ({} chars, positivity {:.6})>", self.id, chars, s.positivity()),
            None => write!(f, "<Comment #{} ({} chars, unscored)>", self.id, chars),
        }
    }
}
