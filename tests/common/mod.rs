#![allow(dead_code)]

use hn_positivity::{
    BotError, BotOptions, Classifier, HttpRequest, HttpResponse, HttpTransport, Label, Method, Probability, Sentiment,
};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::time::Duration;

pub const BASE: &str = "http://hn.test/";
pub const SENTIMENT_API: &str = "http://sentiment.test/api/sentiment/";
pub const SESSION: &str = "tester&abc123";

/// Options pointed at the fixture host, with no pacing delay.
pub fn test_options() -> BotOptions {
    BotOptions::default()
        .with_base_url(BASE)
        .with_sentiment_api(SENTIMENT_API)
        .with_vote_delay(Duration::ZERO)
}

// -------- Scripted transport --------

enum Reply {
    Page(HttpResponse),
    Fail(&'static str),
}

/// Answers by exact URL and records every request it sees.
/// Unknown URLs get a 404 with an empty body.
#[derive(Default)]
pub struct ScriptedTransport {
    routes: HashMap<String, Reply>,
    log: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn page(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.routes.insert(url.into(), Reply::Page(HttpResponse { status: 200, body: body.into() }));
        self
    }
    pub fn status(mut self, url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        self.routes.insert(url.into(), Reply::Page(HttpResponse { status, body: body.into() }));
        self
    }
    pub fn fail(mut self, url: impl Into<String>, msg: &'static str) -> Self {
        self.routes.insert(url.into(), Reply::Fail(msg));
        self
    }
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.log.borrow().clone()
    }
    pub fn urls(&self) -> Vec<String> {
        self.log.borrow().iter().map(|r| r.url.clone()).collect()
    }
    pub fn count_matching(&self, needle: &str) -> usize {
        self.log.borrow().iter().filter(|r| r.url.contains(needle)).count()
    }
}

impl HttpTransport for ScriptedTransport {
    fn send(&self, req: &HttpRequest) -> Result<HttpResponse, BotError> {
        self.log.borrow_mut().push(req.clone());
        match self.routes.get(&req.url) {
            Some(Reply::Page(resp)) => Ok(resp.clone()),
            Some(Reply::Fail(msg)) => Err(BotError::Transport((*msg).into())),
            None => Ok(HttpResponse { status: 404, body: String::new() }),
        }
    }
}

/// Transport wired up for a full run: logged-in front page, one comments page per post.
pub fn logged_in_site() -> ScriptedTransport {
    ScriptedTransport::new()
        .page(format!("{BASE}news"), front_page(false))
        .page(BASE, front_page(false))
        .page(format!("{BASE}item?id=1001"), comments_page(1001))
        .page(format!("{BASE}item?id=1002"), comments_page(1002))
        .page(format!("{BASE}item?id=1003"), comments_page(1003))
}

pub fn is_get(req: &HttpRequest) -> bool {
    req.method == Method::Get
}

// -------- Fake classifiers --------

pub fn sentiment(label: Label, pos: f64) -> Sentiment {
    let rest = 1.0 - pos;
    Sentiment { label, probability: Probability { pos, neg: rest, neutral: 0.0 } }
}

/// Keyword-driven: "love"/"great" -> pos, "hate"/"awful" -> neg, else neutral.
/// Counts how many times it was asked.
#[derive(Default)]
pub struct KeywordClassifier {
    pub calls: Cell<usize>,
}

impl Classifier for KeywordClassifier {
    fn classify(&self, text: &str) -> Result<Sentiment, BotError> {
        self.calls.set(self.calls.get() + 1);
        let t = text.to_lowercase();
        Ok(if t.contains("love") || t.contains("great") {
            sentiment(Label::Pos, 0.9)
        } else if t.contains("hate") || t.contains("awful") {
            sentiment(Label::Neg, 0.1)
        } else {
            sentiment(Label::Neutral, 0.5)
        })
    }
}

/// Exact text -> result lookup; unknown text is a service error.
#[derive(Default)]
pub struct TableClassifier {
    table: HashMap<String, Sentiment>,
}

impl TableClassifier {
    pub fn with(mut self, text: &str, s: Sentiment) -> Self {
        self.table.insert(text.to_string(), s);
        self
    }
}

impl Classifier for TableClassifier {
    fn classify(&self, text: &str) -> Result<Sentiment, BotError> {
        self.table
            .get(text)
            .copied()
            .ok_or_else(|| BotError::SentimentService(format!("no fixture for {text:?}")))
    }
}

// -------- HTML fixtures --------

/// Front page with three stories (ids 1001..=1003). The header shows either
/// the logged-in user links or a `login` link.
pub fn front_page(logged_out: bool) -> String {
    let account = if logged_out {
        r#"<a href="login?goto=news">login</a>"#
    } else {
        r#"<a id="me" href="user?id=tester">tester</a> (1) | <a id="logout" href="logout?auth=x&amp;goto=news">logout</a>"#
    };
    let mut rows = String::new();
    for id in 1001..=1003 {
        rows.push_str(&format!(
            r#"<tr class="athing" id="{id}">
                 <td class="title"><span class="rank">{id}.</span></td>
                 <td valign="top" class="votelinks"><center><a id="up_{id}" href="vote?id={id}&amp;how=up&amp;goto=news"><div class="votearrow" title="upvote"></div></a></center></td>
                 <td class="title"><span class="titleline"><a href="https://example.com/{id}">Story {id}</a></span></td>
               </tr>
               <tr><td colspan="2"></td><td class="subtext">
                 <span class="score" id="score_{id}">{id} points</span> by <a href="user?id=author{id}" class="hnuser">author{id}</a>
                 3 hours ago |
                 <a href="hide?id={id}&amp;goto=news">hide</a> | <a href="item?id={id}">12&nbsp;comments</a>
               </td></tr>
               <tr class="spacer" style="height:5px"></tr>"#
        ));
    }
    format!(
        r#"<html><head><title>Hacker News</title></head><body><center>
        <table id="hnmain">
          <tr><td><table><tr>
            <td style="line-height:12pt"><span class="pagetop"><b class="hnname"><a href="news">Hacker News</a></b>
              <a href="newest">new</a> | <a href="front">past</a> | <a href="newcomments">comments</a></span></td>
            <td style="text-align:right"><span class="pagetop">{account}</span></td>
          </tr></table></td></tr>
          <tr><td><table class="itemlist">{rows}</table></td></tr>
        </table></center></body></html>"#
    )
}

fn comment_row(id: u32, body: Option<&str>) -> String {
    let body = match body {
        Some(text) => format!(
            r#"<br><div class="comment"><span class="commtext c00">{text}</span>
               <div class="reply"><p><font size="1"><u><a href="reply?id={id}">reply</a></u></font></p></div></div>"#
        ),
        None => r#"<span class="comhead">[flagged]</span>"#.to_string(),
    };
    format!(
        r#"<tr class="athing comtr" id="{id}"><td><table border="0"><tr>
             <td class="ind"><img src="s.gif" height="1" width="0"></td>
             <td valign="top" class="votelinks"><center><a id="up_{id}" href="vote?for={id}&amp;dir=up&amp;by=tester&amp;auth=x&amp;goto=item%3Fid%3D1001"><div class="votearrow" title="upvote"></div></a></center></td>
             <td class="default"><div style="margin-top:2px; margin-bottom:-10px;"><span class="comhead">
               <a href="user?id=u{id}" class="hnuser">u{id}</a> <span class="age"><a href="item?id={id}">1 hour ago</a></span>
             </span></div>{body}</td>
           </tr></table></td></tr>"#
    )
}

/// Comments page for story `story_id`:
///  - the story's own upvote control (no comment body in its row)
///  - 2001 "love" (pos), 2002 "hate" (neg), 2003 flagged without body,
///    2004 neutral, 2005 "great" (pos)
pub fn comments_page(story_id: u32) -> String {
    let rows = [
        comment_row(2001, Some("I love this, really nice write-up.")),
        comment_row(2002, Some("I hate how this was benchmarked.")),
        comment_row(2003, None),
        comment_row(2004, Some("Which version of the compiler was used?")),
        comment_row(2005, Some("Great explanation of the tradeoffs.")),
    ]
    .concat();
    format!(
        r#"<html><body><center><table id="hnmain">
          <tr><td><table class="fatitem">
            <tr class="athing" id="{story_id}">
              <td valign="top" class="votelinks"><center><a id="up_{story_id}" href="vote?id={story_id}&amp;how=up&amp;goto=item%3Fid%3D{story_id}"><div class="votearrow"></div></a></center></td>
              <td class="title"><span class="titleline"><a href="https://example.com/{story_id}">Story {story_id}</a></span></td>
            </tr>
          </table><br>
          <table class="comment-tree">{rows}</table></td></tr>
        </table></center></body></html>"#
    )
}
