//! Glue between a navigation event source and the route table.
//!
//! The event source itself (pjax-style send/complete listeners on the
//! document) belongs to the embedding application. This module owns the
//! value objects such a source produces and the dispatch seam it calls
//! at each lifecycle phase, plus the document-ready case where no
//! request has gone out yet.

use crate::route::{Method, ParseMethodError, Timing};
use crate::router::Router;

/// Form field that tunnels the real verb through a browser-limited submit.
const METHOD_OVERRIDE_FIELD: &str = "_method";

/// Resolve the method a navigation should be routed under.
///
/// Browsers cannot submit every verb directly, so frameworks carry the
/// intended verb in a `_method` form field. When that field is present
/// and non-empty it wins over the transport-level method; either source
/// is matched case-insensitively and normalized to the canonical
/// lowercase form.
pub fn effective_method(transport: &str, data: &[(String, String)]) -> Result<Method, ParseMethodError> {
    let overridden = data
        .iter()
        .find(|(name, _)| name.as_str() == METHOD_OVERRIDE_FIELD)
        .map(|(_, value)| value.as_str())
        .filter(|value| !value.is_empty());
    overridden.unwrap_or(transport).parse()
}

/// What the navigation source tells us about an outgoing request.
#[derive(Debug, Clone)]
pub struct Request {
    url: String,
    method: Method,
    headers: Vec<(String, String)>,
    data: Vec<(String, String)>,
}

impl Request {
    /// Bundle up a request from transport-level details. The stored
    /// method is the effective one, after the `_method` override.
    pub fn new(
        url: impl Into<String>,
        transport_method: &str,
        data: Vec<(String, String)>,
    ) -> Result<Self, ParseMethodError> {
        let method = effective_method(transport_method, &data)?;
        Ok(Self {
            url: url.into(),
            method,
            headers: Vec::new(),
            data,
        })
    }

    /// Attach the headers that were sent with the request.
    pub fn with_headers(mut self, headers: Vec<(String, String)>) -> Self {
        self.headers = headers;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// The submitted form fields.
    pub fn data(&self) -> &[(String, String)] {
        &self.data
    }
}

/// Response payload, as classified by the navigation source.
#[derive(Debug, Clone)]
pub enum Body {
    Html(String),
    Json(String),
}

impl Body {
    pub fn is_json(&self) -> bool {
        matches!(self, Body::Json(_))
    }

    pub fn is_html(&self) -> bool {
        !self.is_json()
    }

    pub fn content(&self) -> &str {
        match self {
            Body::Html(s) | Body::Json(s) => s,
        }
    }
}

/// What came back for a completed navigation.
#[derive(Debug, Clone)]
pub struct Response {
    headers: Vec<(String, String)>,
    body: Body,
}

impl Response {
    pub fn new(headers: Vec<(String, String)>, body: Body) -> Self {
        Self { headers, body }
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn body(&self) -> &Body {
        &self.body
    }
}

/// Everything a matched handler gets to see about the navigation.
///
/// `request` and `response` are absent for the document-ready dispatch,
/// and `response` is absent at the `before` phase.
#[derive(Debug)]
pub struct Context<'a> {
    pub request: Option<&'a Request>,
    pub response: Option<&'a Response>,
    /// Pattern of the route that matched.
    pub pattern: &'a str,
    pub method: Method,
    pub timing: Timing,
}

/// A route callback.
///
/// Implemented for every `Fn(&Context)`; use [`BoxHandler`] when routes
/// with different closure types share one table.
pub trait Handler {
    fn handle(&self, cx: &Context<'_>);
}

pub type BoxHandler = Box<dyn Handler>;

impl Handler for BoxHandler {
    fn handle(&self, cx: &Context<'_>) {
        Handler::handle(&**self, cx)
    }
}

impl<F> Handler for F
where
    F: Fn(&Context<'_>),
{
    fn handle(&self, cx: &Context<'_>) {
        (self)(cx)
    }
}

impl<H: Handler> Router<H> {
    /// Route one navigation event: match, then invoke every selected
    /// handler synchronously, in order. Returns how many handlers ran.
    ///
    /// A panicking handler unwinds straight through to the caller; the
    /// table holds no state a mid-loop unwind could corrupt.
    pub fn dispatch(&self, request: &Request, response: Option<&Response>, timing: Timing) -> usize {
        let matched = self.find(request.url(), request.method(), timing);
        for route in matched.iter() {
            let cx = Context {
                request: Some(request),
                response,
                pattern: route.pattern(),
                method: route.method(),
                timing: route.timing(),
            };
            route.handler().handle(&cx);
        }
        matched.len()
    }

    /// The document-ready case: no request has gone out, so match the
    /// current location as a synthesized `get`/`after` navigation with
    /// an empty context.
    pub fn dispatch_load(&self, url: &str) -> usize {
        let matched = self.find(url, Method::Get, Timing::After);
        for route in matched.iter() {
            let cx = Context {
                request: None,
                response: None,
                pattern: route.pattern(),
                method: route.method(),
                timing: route.timing(),
            };
            route.handler().handle(&cx);
        }
        matched.len()
    }
}
