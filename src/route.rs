use crate::pattern::{self, Matcher, RegexMatcher};
use crate::router::RouterError;

use std::fmt;
use std::str::FromStr;

/// The HTTP verbs a route can be registered under.
///
/// The set is closed: pjax-style navigation only ever routes these four
/// verbs, and the `_method` form override resolves into the same set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
            Method::Put => "put",
            Method::Delete => "delete",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unrecognized http method: {0:?}")]
pub struct ParseMethodError(pub(crate) Box<str>);

impl FromStr for Method {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("get") {
            Ok(Method::Get)
        } else if s.eq_ignore_ascii_case("post") {
            Ok(Method::Post)
        } else if s.eq_ignore_ascii_case("put") {
            Ok(Method::Put)
        } else if s.eq_ignore_ascii_case("delete") {
            Ok(Method::Delete)
        } else {
            Err(ParseMethodError(s.into()))
        }
    }
}

/// When, relative to a navigation, a route is eligible to match:
/// before the request is dispatched or after its response arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timing {
    Before,
    After,
}

impl Timing {
    pub fn as_str(self) -> &'static str {
        match self {
            Timing::Before => "before",
            Timing::After => "after",
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Timing::After
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unrecognized timing phase: {0:?}")]
pub struct ParseTimingError(Box<str>);

impl FromStr for Timing {
    type Err = ParseTimingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("before") {
            Ok(Timing::Before)
        } else if s.eq_ignore_ascii_case("after") {
            Ok(Timing::After)
        } else {
            Err(ParseTimingError(s.into()))
        }
    }
}

/// A single registration: pattern, method, timing and the caller's handler.
///
/// Every field is fixed at construction. The table never inspects the
/// handler; it only hands back matched routes for the caller to invoke.
#[derive(Debug)]
pub struct Route<T> {
    pattern: Box<str>,
    matcher: RegexMatcher,
    method: Method,
    timing: Timing,
    handler: T,
}

impl<T> Route<T> {
    /// Build a route, compiling its pattern.
    ///
    /// The only failure is a pattern that does not compile; a failed
    /// construction leaves nothing behind.
    pub fn new(pattern: &str, method: Method, timing: Timing, handler: T) -> Result<Self, RouterError> {
        let matcher = pattern::compile(pattern).map_err(|e| RouterError::bad_pattern(pattern, e))?;
        Ok(Self {
            pattern: pattern.into(),
            matcher,
            method,
            timing,
            handler,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn handler(&self) -> &T {
        &self.handler
    }

    pub fn matcher(&self) -> &RegexMatcher {
        &self.matcher
    }

    /// Pure predicate: does this route accept the given navigation?
    pub fn matches(&self, url: &str, method: Method, timing: Timing) -> bool {
        self.method == method && self.timing == timing && self.matcher.is_match(url)
    }
}
