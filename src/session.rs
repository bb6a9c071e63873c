use crate::config::BotOptions;
use crate::error::BotError;
use crate::extract::{extract_comments, extract_posts, shows_login_link};
use crate::records::{Comment, Post};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport};

/// Name of the cookie that carries the logged-in session.
pub const SESSION_COOKIE: &str = "user";

/// Authenticated client for the aggregator. Every request it sends carries the
/// browser User-Agent and the `user=<session>` cookie.
pub struct SessionClient<T> {
    transport: T,
    session: String,
    base_url: String,
    user_agent: String,
}

impl<T: HttpTransport> SessionClient<T> {
    pub fn new(transport: T, session: impl Into<String>, opts: &BotOptions) -> Self {
        Self {
            transport,
            session: session.into(),
            base_url: opts.base_url.clone(),
            user_agent: opts.user_agent.clone(),
        }
    }

    /// GET `url` with the identity header and session cookie. Transport errors propagate.
    pub fn fetch(&self, url: &str) -> Result<HttpResponse, BotError> {
        let req = HttpRequest::get(url)
            .header("User-Agent", &self.user_agent)
            .header("Cookie", format!("{SESSION_COOKIE}={}", self.session));
        tracing::debug!("GET {}", url);
        let resp = self.transport.send(&req)?;
        if !resp.is_success() {
            tracing::warn!("GET {} answered HTTP {}", url, resp.status);
        }
        Ok(resp)
    }

    /// False when `<base>/news` still renders a login link, i.e. the cookie did not authenticate.
    pub fn validate(&self) -> Result<bool, BotError> {
        let url = format!("{}news", self.base_url);
        tracing::info!("Requesting \"{}\"", url);
        let resp = self.fetch(&url)?;
        Ok(!shows_login_link(&resp.body))
    }

    /// Like `validate`, but an unauthenticated session becomes `BotError::Authentication`.
    pub fn ensure_valid(&self) -> Result<(), BotError> {
        if self.validate()? { Ok(()) } else { Err(BotError::Authentication) }
    }

    /// Front-page posts in ranked order, capped at `limit`.
    pub fn get_posts(&self, limit: Option<usize>) -> Result<Vec<Post>, BotError> {
        let resp = self.fetch(&self.base_url)?;
        extract_posts(&resp.body, &self.base_url, limit)
    }

    /// First page of comments for a thread, capped at `limit`.
    pub fn get_comments(&self, comments_url: &str, limit: Option<usize>) -> Result<Vec<Comment>, BotError> {
        let resp = self.fetch(comments_url)?;
        extract_comments(&resp.body, &self.base_url, limit)
    }
}
