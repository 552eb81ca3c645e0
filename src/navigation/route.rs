//! Route paths and active-route matching

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::QadeskError;

/// How a navigation target is compared against the current route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Active only when the current route equals the target
    #[default]
    Exact,
    /// Active when the current route equals the target or is nested under it
    Prefix,
}

/// A normalized route path
///
/// Always starts with `/`, never ends with `/` (except the root itself),
/// and never contains empty segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route(String);

impl Route {
    pub fn root() -> Self {
        Route("/".to_string())
    }

    /// Wrap a path that is already normalized
    pub(crate) fn from_normalized(path: &str) -> Self {
        Route(path.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Whether this route sits strictly below `parent` (segment-aware)
    pub fn is_nested_under(&self, parent: &Route) -> bool {
        if parent.is_root() {
            return !self.is_root();
        }
        self.0
            .strip_prefix(parent.as_str())
            .is_some_and(|rest| rest.starts_with('/'))
    }
}

impl FromStr for Route {
    type Err = QadeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.chars().any(char::is_whitespace) {
            return Err(QadeskError::InvalidRoute(s.to_string()));
        }

        let segments: Vec<&str> = s.split('/').filter(|seg| !seg.is_empty()).collect();
        if segments.is_empty() {
            return Ok(Route::root());
        }

        Ok(Route(format!("/{}", segments.join("/"))))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Decide whether a navigation target is active for the current route
pub fn is_active(current: &Route, target: &Route, mode: MatchMode) -> bool {
    match mode {
        MatchMode::Exact => current == target,
        MatchMode::Prefix => current == target || current.is_nested_under(target),
    }
}

#[cfg(test)]
#[path = "route_tests.rs"]
mod route_tests;
