mod error;
mod matches;

pub use self::error::RouterError;
pub use self::matches::Matches;

use crate::config::{Config, MatchBehaviour};
use crate::route::{Method, Route, Timing};

/// The route table: an ordered collection of registrations plus the
/// settings that drive match selection.
///
/// Construct one instance and pass it by reference to collaborators;
/// there is no ambient global table. Registration order is semantically
/// significant: it is the order candidates are tested in, and the
/// tie-break under the `single` policy.
#[derive(Debug, Default)]
pub struct Router<T> {
    routes: Vec<Route<T>>,
    config: Config,
}

impl<T> Router<T> {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            config: Config::new(),
        }
    }

    /// Append a route. Never reorders or deduplicates.
    ///
    /// # Panics
    /// Panics when the pattern does not compile; see [`Router::try_register`].
    pub fn register(&mut self, pattern: &str, method: Method, timing: Timing, handler: T) -> &mut Self {
        match self.try_register(pattern, method, timing, handler) {
            Ok(this) => this,
            Err(e) => panic!("{}", e),
        }
    }

    /// Append a route, reporting a pattern that does not compile.
    /// On failure nothing is added.
    pub fn try_register(
        &mut self,
        pattern: &str,
        method: Method,
        timing: Timing,
        handler: T,
    ) -> Result<&mut Self, RouterError> {
        let route = Route::new(pattern, method, timing, handler)?;
        self.routes.push(route);
        Ok(self)
    }

    /// Register a `get` route with the default `after` timing.
    pub fn get(&mut self, pattern: &str, handler: T) -> &mut Self {
        self.register(pattern, Method::Get, Timing::default(), handler)
    }

    /// Register a `post` route with the default `after` timing.
    pub fn post(&mut self, pattern: &str, handler: T) -> &mut Self {
        self.register(pattern, Method::Post, Timing::default(), handler)
    }

    /// Register a `put` route with the default `after` timing.
    pub fn put(&mut self, pattern: &str, handler: T) -> &mut Self {
        self.register(pattern, Method::Put, Timing::default(), handler)
    }

    /// Register a `delete` route with the default `after` timing.
    pub fn delete(&mut self, pattern: &str, handler: T) -> &mut Self {
        self.register(pattern, Method::Delete, Timing::default(), handler)
    }

    /// Register the six routes of a minimal REST resource, in this exact
    /// order: `GET name`, `POST name`, `DELETE name/:id`, `GET name/:id`,
    /// `PUT name/:id`, `POST name/:id`.
    ///
    /// The order matters under the `single` policy.
    pub fn resource(&mut self, name: &str, handler: T) -> &mut Self
    where
        T: Clone,
    {
        let id_pattern = format!("{}/:id", name);
        self.get(name, handler.clone())
            .post(name, handler.clone())
            .delete(&id_pattern, handler.clone())
            .get(&id_pattern, handler.clone())
            .put(&id_pattern, handler.clone())
            .post(&id_pattern, handler)
    }

    /// Match a navigation against the table.
    ///
    /// Routes are tested in registration order. Under
    /// [`MatchBehaviour::Single`] (read from the config at call time) the
    /// scan stops at the first match; under [`MatchBehaviour::All`] every
    /// matching route is collected. No match is not an error: the result
    /// is simply empty.
    pub fn find(&self, url: &str, method: Method, timing: Timing) -> Matches<'_, T> {
        let mut matched = Matches::new();
        for route in &self.routes {
            if route.matches(url, method, timing) {
                matched.buf.push(route);
                if self.config.match_behaviour() == MatchBehaviour::Single {
                    break;
                }
            }
        }
        matched
    }

    /// Reset the table to empty. Configuration is untouched.
    pub fn clear(&mut self) {
        self.routes.clear();
    }

    /// The registered routes, in registration order.
    pub fn routes(&self) -> &[Route<T>] {
        &self.routes
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }
}
