//! Blocking HTTP seam. Everything that touches the network goes through an
//! `HttpTransport`; the real one wraps `reqwest::blocking::Client`.

use crate::error::BotError;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A fully-described request. `form` is sent url-encoded when non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub form: Vec<(String, String)>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self { method: Method::Get, url: url.into(), headers: Vec::new(), form: Vec::new() }
    }
    pub fn post_form(url: impl Into<String>) -> Self {
        Self { method: Method::Post, url: url.into(), headers: Vec::new(), form: Vec::new() }
    }
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.form.push((name.into(), value.into()));
        self
    }
    /// First header value matching `name` (case-insensitive).
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers.iter().find(|(k, _)| k.eq_ignore_ascii_case(name)).map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[inline]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait HttpTransport {
    /// Send `req` and block until the full body has been read.
    fn send(&self, req: &HttpRequest) -> Result<HttpResponse, BotError>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    fn send(&self, req: &HttpRequest) -> Result<HttpResponse, BotError> {
        (**self).send(req)
    }
}

/// `reqwest` backed transport using the blocking client defaults.
/// Cloning shares the underlying connection pool.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, BotError> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, req: &HttpRequest) -> Result<HttpResponse, BotError> {
        let mut headers = HeaderMap::new();
        for (k, v) in &req.headers {
            let name = HeaderName::from_bytes(k.as_bytes()).map_err(|e| BotError::Transport(Box::new(e)))?;
            let value = HeaderValue::from_str(v).map_err(|e| BotError::Transport(Box::new(e)))?;
            headers.append(name, value);
        }

        let builder = match req.method {
            Method::Get => self.client.get(&req.url),
            Method::Post => self.client.post(&req.url),
        };
        let mut builder = builder.headers(headers);
        if !req.form.is_empty() {
            builder = builder.form(&req.form);
        }

        let resp = builder.send()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;
        Ok(HttpResponse { status, body })
    }
}
