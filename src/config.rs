use std::fmt;
use std::str::FromStr;

/// How [`Router::find`](crate::Router::find) selects among multiple
/// matching routes: stop at the first match, or collect every match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchBehaviour {
    Single,
    All,
}

impl MatchBehaviour {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchBehaviour::Single => "single",
            MatchBehaviour::All => "all",
        }
    }
}

impl Default for MatchBehaviour {
    fn default() -> Self {
        MatchBehaviour::Single
    }
}

impl fmt::Display for MatchBehaviour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchBehaviour {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(MatchBehaviour::Single),
            "all" => Ok(MatchBehaviour::All),
            _ => Err(ConfigError::InvalidMatchBehaviour { value: s.into() }),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for match behaviour: {value:?} (available options: single, all)")]
    InvalidMatchBehaviour { value: Box<str> },
    #[error("setting {key:?} is not configurable")]
    UnknownKey { key: Box<str> },
}

/// The router's settings store.
///
/// The key set is closed and pre-declared; `matchBehaviour` is the only
/// key. A rejected write leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    match_behaviour: MatchBehaviour,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn match_behaviour(&self) -> MatchBehaviour {
        self.match_behaviour
    }

    pub fn set_match_behaviour(&mut self, behaviour: MatchBehaviour) {
        self.match_behaviour = behaviour;
    }

    /// String-keyed read; `None` for keys outside the declared set.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        match key {
            "matchBehaviour" => Some(self.match_behaviour.as_str()),
            _ => None,
        }
    }

    /// String-keyed write with validation.
    ///
    /// `matchBehaviour` accepts exactly `"single"` or `"all"`; any other
    /// value, or any other key, is rejected without mutating state.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "matchBehaviour" => {
                self.match_behaviour = value.parse()?;
                Ok(())
            }
            _ => Err(ConfigError::UnknownKey { key: key.into() }),
        }
    }
}
