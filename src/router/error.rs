use crate::pattern::PatternError;

/// Returned when a registration is rejected.
#[derive(Debug, thiserror::Error)]
#[error("invalid route pattern: {pattern:?}")]
pub struct RouterError {
    pattern: Box<str>,
    #[source]
    source: PatternError,
}

impl RouterError {
    pub(crate) fn bad_pattern(pattern: &str, source: PatternError) -> Self {
        Self {
            pattern: pattern.into(),
            source,
        }
    }

    /// The pattern that was rejected.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}
