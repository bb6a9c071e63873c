//! DOM extraction: front-page posts, comment upvote controls, login detection.
//!
//! Selectors are structural and match the aggregator's table markup:
//!  - posts: the last anchor in each `.subtext` block (the "N comments" link)
//!  - comments: every `a[id*=up_]` upvote control; its third ancestor is the
//!    comment row, which holds the `.comment` body
//!
//! Zero matches is never an error. `limit` truncates before ids are parsed,
//! so a malformed link past the limit does not fail the page.

use crate::error::BotError;
use crate::ids::{extract_comment_id, extract_post_id};
use crate::records::{Comment, Post};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static SUBTEXT_LAST_LINK: LazyLock<Selector> = LazyLock::new(|| sel(".subtext a:last-child"));
static UPVOTE_LINK: LazyLock<Selector> = LazyLock::new(|| sel(r#"a[id*="up_"]"#));
static COMMENT_BODY: LazyLock<Selector> = LazyLock::new(|| sel(".comment"));
static PAGETOP_LINK: LazyLock<Selector> = LazyLock::new(|| sel(".pagetop a"));

/// Levels between an upvote anchor and the row that owns the comment body.
const UPVOTE_TO_ROW: usize = 3;

fn sel(css: &str) -> Selector {
    Selector::parse(css).expect("static selector must parse")
}

fn take_limit<I: Iterator>(it: I, limit: Option<usize>) -> std::iter::Take<I> {
    it.take(limit.unwrap_or(usize::MAX))
}

/// Posts in document order, `url = base_url + href`.
pub fn extract_posts(html: &str, base_url: &str, limit: Option<usize>) -> Result<Vec<Post>, BotError> {
    let doc = Html::parse_document(html);
    let posts = doc.select(&SUBTEXT_LAST_LINK).map(|a| {
        let href = a.value().attr("href").unwrap_or_default();
        let id = extract_post_id(href)?;
        Ok(Post { id, url: format!("{base_url}{href}") })
    });
    let posts = take_limit(posts, limit).collect::<Result<Vec<_>, BotError>>()?;
    Ok(posts)
}

/// Comments in document order, nesting ignored. Upvote controls whose row has
/// no visible body (collapsed or dead comments) are skipped.
pub fn extract_comments(html: &str, base_url: &str, limit: Option<usize>) -> Result<Vec<Comment>, BotError> {
    let doc = Html::parse_document(html);
    let comments = doc
        .select(&UPVOTE_LINK)
        .filter_map(|a| {
            let body = nth_ancestor(a, UPVOTE_TO_ROW)?.select(&COMMENT_BODY).next()?;
            Some((a, body))
        })
        .map(|(a, body)| {
            let href = a.value().attr("href").unwrap_or_default();
            let id = extract_comment_id(href)?;
            let text: String = body.text().collect();
            Ok(Comment::new(id, format!("{base_url}{href}"), text))
        });
    let comments = take_limit(comments, limit).collect::<Result<Vec<_>, BotError>>()?;
    Ok(comments)
}

/// True when the page header still offers a login link (unauthenticated view).
pub fn shows_login_link(html: &str) -> bool {
    let doc = Html::parse_document(html);
    let found = doc
        .select(&PAGETOP_LINK)
        .any(|a| a.text().collect::<String>().contains("login"));
    found
}

/// Walk `levels` parents up. `None` when the tree runs out or the ancestor is
/// not an element (the document root).
fn nth_ancestor(el: ElementRef<'_>, levels: usize) -> Option<ElementRef<'_>> {
    if levels == 0 {
        return Some(el);
    }
    el.ancestors().nth(levels - 1).and_then(ElementRef::wrap)
}
