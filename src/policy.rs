//! Per-thread statistics and the upvote decision.
//!
//! Policy: a comment is upvoted iff the service labelled it `pos`. The label is
//! authoritative; positivity magnitude is never thresholded.

use crate::error::BotError;
use crate::records::Comment;
use crate::sentiment::{Classifier, Label};
use serde::Serialize;

/// Totals over one thread's comments.
/// `average_positivity` is `None` for an empty thread instead of dividing by zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct AggregateStats {
    pub count: usize,
    pub total_positivity: f64,
    pub average_positivity: Option<f64>,
    pub positive_count: usize,
    pub negative_count: usize,
}

/// Classifies any unscored comments, then sums them up.
pub fn aggregate<C: Classifier + ?Sized>(comments: &[Comment], classifier: &C) -> Result<AggregateStats, BotError> {
    let mut stats = AggregateStats { count: comments.len(), ..Default::default() };
    for c in comments {
        let s = c.sentiment(classifier)?;
        stats.total_positivity += s.positivity();
        match s.label {
            Label::Pos => stats.positive_count += 1,
            Label::Neg => stats.negative_count += 1,
            Label::Neutral => {}
        }
    }
    if stats.count > 0 {
        stats.average_positivity = Some(stats.total_positivity / stats.count as f64);
    }
    Ok(stats)
}

/// Most positive first. Stable: equal positivity keeps document order.
pub fn rank<'a, C: Classifier + ?Sized>(comments: &'a [Comment], classifier: &C) -> Result<Vec<&'a Comment>, BotError> {
    let mut scored = Vec::with_capacity(comments.len());
    for c in comments {
        scored.push((c.positivity(classifier)?, c));
    }
    // sort_by is stable; total_cmp keeps NaN from panicking.
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    Ok(scored.into_iter().map(|(_, c)| c).collect())
}

/// Comments labelled `pos`, in document order.
pub fn select_for_upvote<'a, C: Classifier + ?Sized>(
    comments: &'a [Comment],
    classifier: &C,
) -> Result<Vec<&'a Comment>, BotError> {
    let mut out = Vec::new();
    for c in comments {
        if c.label(classifier)? == Label::Pos {
            out.push(c);
        }
    }
    Ok(out)
}
