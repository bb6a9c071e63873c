//! End-to-end run: validate session -> fetch posts -> per post: fetch comments,
//! score, aggregate, upvote. Strictly sequential.

use crate::config::BotOptions;
use crate::error::BotError;
use crate::policy::{aggregate, rank, select_for_upvote, AggregateStats};
use crate::progress::PostProgress;
use crate::records::{Comment, Post};
use crate::sentiment::{Classifier, SentimentClient};
use crate::session::SessionClient;
use crate::transport::{HttpTransport, ReqwestTransport};
use std::thread::sleep;

/// Where a run currently is. `Invalid` and `Failed` are terminal, as is `Done`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Idle,
    SessionValidated,
    PostsFetched,
    CommentsFetched,
    Scored,
    Acted,
    Done,
    Invalid,
    Failed,
}

/// What happened for one selected comment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UpvoteAction {
    Sent { comment_id: String, status: u16 },
    Simulated { comment_id: String },
}

#[derive(Clone, Debug)]
pub struct PostReport {
    pub post: Post,
    pub stats: AggregateStats,
    pub upvotes: Vec<UpvoteAction>,
}

#[derive(Clone, Debug)]
pub struct RunReport {
    pub posts: Vec<PostReport>,
}

impl RunReport {
    pub fn upvotes(&self) -> impl Iterator<Item = &UpvoteAction> {
        self.posts.iter().flat_map(|p| p.upvotes.iter())
    }
}

pub struct PositivityBot<T, C> {
    opts: BotOptions,
    session: SessionClient<T>,
    classifier: C,
    state: RunState,
}

impl PositivityBot<ReqwestTransport, SentimentClient<ReqwestTransport>> {
    /// Live bot: one shared `reqwest` client for the aggregator and the sentiment API.
    pub fn connect(session_cookie: impl Into<String>, opts: BotOptions) -> Result<Self, BotError> {
        let transport = ReqwestTransport::new()?;
        let classifier = SentimentClient::new(transport.clone(), &opts.sentiment_api, &opts.user_agent);
        let session = SessionClient::new(transport, session_cookie, &opts);
        Ok(Self::new(session, classifier, opts))
    }
}

impl<T: HttpTransport, C: Classifier> PositivityBot<T, C> {
    pub fn new(session: SessionClient<T>, classifier: C, opts: BotOptions) -> Self {
        Self { opts, session, classifier, state: RunState::Idle }
    }

    pub fn state(&self) -> RunState { self.state }

    fn transition(&mut self, next: RunState) {
        tracing::debug!("state {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Check the session cookie. Moves to `SessionValidated` or `Invalid`.
    pub fn validate(&mut self) -> Result<bool, BotError> {
        let ok = match self.session.validate() {
            Ok(ok) => ok,
            Err(e) => {
                self.transition(RunState::Failed);
                return Err(e);
            }
        };
        if ok {
            tracing::info!("Session OK");
            self.transition(RunState::SessionValidated);
        } else {
            tracing::error!("Session is invalid");
            self.transition(RunState::Invalid);
        }
        Ok(ok)
    }

    /// Full run. Validates first unless `validate()` already succeeded.
    /// An invalid session ends with `BotError::Authentication`; any other
    /// error leaves the bot in `Failed`.
    pub fn run(&mut self) -> Result<RunReport, BotError> {
        if self.state != RunState::SessionValidated && !self.validate()? {
            return Err(BotError::Authentication);
        }
        match self.run_validated() {
            Ok(report) => {
                self.transition(RunState::Done);
                Ok(report)
            }
            Err(e) => {
                tracing::error!("run failed: {}", e);
                self.transition(RunState::Failed);
                Err(e)
            }
        }
    }

    fn run_validated(&mut self) -> Result<RunReport, BotError> {
        let posts = self.session.get_posts(self.opts.num_posts)?;
        tracing::info!("Fetched {} posts", posts.len());
        self.transition(RunState::PostsFetched);

        let progress = PostProgress::new(self.opts.progress, posts.len());
        let mut reports = Vec::with_capacity(posts.len());
        for post in posts {
            progress.set_current(&post.id);
            reports.push(self.process_post(post)?);
            progress.inc();
        }
        progress.finish();
        Ok(RunReport { posts: reports })
    }

    /// Comments -> stats -> upvotes for a single thread.
    pub fn process_post(&mut self, post: Post) -> Result<PostReport, BotError> {
        tracing::info!("Processing {}", post);

        let comments = self.session.get_comments(&post.url, self.opts.num_comments)?;
        tracing::info!("Fetched {} comments", comments.len());
        self.transition(RunState::CommentsFetched);

        let stats = aggregate(&comments, &self.classifier)?;
        self.transition(RunState::Scored);
        match stats.average_positivity {
            Some(avg) => tracing::info!(
                "Total positivity: {:.6}  Average positivity: {:.6}",
                stats.total_positivity,
                avg
            ),
            None => tracing::info!("No comments to score for {}", post),
        }
        tracing::info!(
            "Positive Comments: {}  Negative Comments: {}",
            stats.positive_count,
            stats.negative_count
        );
        for (i, c) in rank(&comments, &self.classifier)?.iter().enumerate() {
            tracing::debug!("#{} {}", i + 1, c);
        }

        let selected = select_for_upvote(&comments, &self.classifier)?;
        tracing::info!("Upvoting {} comments", selected.len());
        let mut upvotes = Vec::with_capacity(selected.len());
        for c in selected {
            upvotes.push(self.upvote(c)?);
        }
        self.transition(RunState::Acted);

        Ok(PostReport { post, stats, upvotes })
    }

    /// Real mode: GET the upvote URL, then pause `vote_delay`.
    /// Simulate mode: log the intent, send nothing, no pause.
    pub fn upvote(&self, comment: &Comment) -> Result<UpvoteAction, BotError> {
        if !self.opts.upvote_enabled {
            tracing::info!("Would upvote {}", comment);
            return Ok(UpvoteAction::Simulated { comment_id: comment.id.clone() });
        }
        let resp = self.session.fetch(&comment.upvote_url)?;
        tracing::info!("Upvoted {} -> HTTP {} ({} bytes)", comment, resp.status, resp.body.len());
        sleep(self.opts.vote_delay);
        Ok(UpvoteAction::Sent { comment_id: comment.id.clone(), status: resp.status })
    }
}
