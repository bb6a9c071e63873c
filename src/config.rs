use crate::error::BotError;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://news.ycombinator.com/";
pub const DEFAULT_SENTIMENT_API: &str = "http://text-processing.com/api/sentiment/";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_7_5) AppleWebKit/537.22 \
    (KHTML, like Gecko) Chrome/25.0.1364.29 Safari/537.22";

/// Run options with sensible defaults and builder chaining.
/// Built once at startup and handed to the session client and the bot.
#[derive(Clone, Debug, PartialEq)]
pub struct BotOptions {
    pub base_url: String,           // always ends with '/'
    pub sentiment_api: String,
    pub user_agent: String,
    pub num_posts: Option<usize>,   // None = every post on the front page
    pub num_comments: Option<usize>, // None = every comment on the first page
    pub upvote_enabled: bool,       // false = simulate only
    pub vote_delay: Duration,       // pause after each real upvote
    pub progress: bool,             // draw a count bar over posts
}

impl Default for BotOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            sentiment_api: DEFAULT_SENTIMENT_API.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            num_posts: Some(3),
            num_comments: Some(3),
            upvote_enabled: false,
            vote_delay: Duration::from_secs(1),
            progress: false,
        }
    }
}

impl BotOptions {
    /// Defaults overlaid with `NUM_POSTS`, `NUM_COMMENTS`, `UPVOTE_ENABLED` and `VOTE_DELAY`.
    pub fn from_env() -> Result<Self, BotError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup` instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();
        if let Some(n) = parse_count(&lookup, "NUM_POSTS")? {
            opts = opts.with_num_posts(n);
        }
        if let Some(n) = parse_count(&lookup, "NUM_COMMENTS")? {
            opts = opts.with_num_comments(n);
        }
        // Only the literal spellings enable real votes.
        let enabled = matches!(lookup("UPVOTE_ENABLED").as_deref(), Some("True") | Some("true"));
        opts = opts.with_upvote_enabled(enabled);
        if let Some(secs) = parse_count(&lookup, "VOTE_DELAY")? {
            opts = opts.with_vote_delay(Duration::from_secs(secs as u64));
        }
        Ok(opts)
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let mut url = url.into();
        if !url.ends_with('/') {
            url.push('/');
        }
        self.base_url = url;
        self
    }
    pub fn with_sentiment_api(mut self, url: impl Into<String>) -> Self {
        self.sentiment_api = url.into();
        self
    }
    pub fn with_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }
    /// `0` lifts the cap.
    pub fn with_num_posts(mut self, n: usize) -> Self {
        self.num_posts = (n > 0).then_some(n);
        self
    }
    /// `0` lifts the cap.
    pub fn with_num_comments(mut self, n: usize) -> Self {
        self.num_comments = (n > 0).then_some(n);
        self
    }
    pub fn with_upvote_enabled(mut self, yes: bool) -> Self {
        self.upvote_enabled = yes;
        self
    }
    pub fn with_vote_delay(mut self, delay: Duration) -> Self {
        self.vote_delay = delay;
        self
    }
    pub fn with_progress(mut self, yes: bool) -> Self {
        self.progress = yes;
        self
    }
}

fn parse_count<F>(lookup: &F, var: &'static str) -> Result<Option<usize>, BotError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|e| BotError::Config { var, reason: format!("{raw:?}: {e}") }),
    }
}
