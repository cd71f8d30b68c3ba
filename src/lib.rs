//! A front-end route matcher for pjax-style partial page navigation.
//!
//! Applications register URL pattern + HTTP method + timing-phase routes
//! on a [`Router`]; a navigation adapter then asks the table which routes
//! match a navigation before its request goes out and after its response
//! arrives, and invokes the matched handlers.
//!
//! ```
//! use pjax_router::{Method, Router, Timing};
//!
//! let mut router: Router<&str> = Router::new();
//! router
//!     .get("users", "index")
//!     .get("users/:id", "show");
//!
//! let matched = router.find("/users/15", Method::Get, Timing::After);
//! assert_eq!(matched.len(), 1);
//! assert_eq!(matched[0].handler(), &"show");
//! ```

#![forbid(unsafe_code)]

mod config;
mod event;
mod pattern;
mod route;
mod router;

pub use self::config::{Config, ConfigError, MatchBehaviour};
pub use self::event::{effective_method, Body, BoxHandler, Context, Handler, Request, Response};
pub use self::pattern::{compile, Matcher, PatternError, RegexMatcher};
pub use self::route::{Method, ParseMethodError, ParseTimingError, Route, Timing};
pub use self::router::{Matches, Router, RouterError};
