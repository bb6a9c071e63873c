mod config;
mod error;
mod transport;
mod session;

mod extract;
mod ids;
mod records;
mod sentiment;

mod policy;
mod pipeline;
mod progress;
mod util;

pub use crate::config::{BotOptions, DEFAULT_BASE_URL, DEFAULT_SENTIMENT_API, DEFAULT_USER_AGENT};
pub use crate::error::BotError;
pub use crate::transport::{HttpRequest, HttpResponse, HttpTransport, Method, ReqwestTransport};
pub use crate::session::{SessionClient, SESSION_COOKIE};

// DOM + href extraction
pub use crate::extract::{extract_comments, extract_posts, shows_login_link};
pub use crate::ids::{extract_comment_id, extract_post_id};

pub use crate::records::{Comment, Post};
pub use crate::sentiment::{decode_sentiment, Classifier, Label, Probability, Sentiment, SentimentClient};

pub use crate::policy::{aggregate, rank, select_for_upvote, AggregateStats};
pub use crate::pipeline::{PositivityBot, PostReport, RunReport, RunState, UpvoteAction};

pub use crate::util::init_tracing_once;
