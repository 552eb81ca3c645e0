//! Client-side router
//!
//! Owns the current route and the back-stack. Navigation entries read
//! their active state from here; nothing else mutates the route.

use crate::navigation::nav_entry::NAV_ENTRIES;
use crate::navigation::route::{MatchMode, Route, is_active};
use crate::pages::PageKind;

/// Matching rules applied to navigation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMatching {
    pub root: MatchMode,
    pub nested: MatchMode,
}

impl Default for RouteMatching {
    fn default() -> Self {
        Self {
            root: MatchMode::Exact,
            nested: MatchMode::Prefix,
        }
    }
}

pub struct Router {
    current: Route,
    back_stack: Vec<Route>,
    matching: RouteMatching,
}

impl Router {
    pub fn new(start: Route, matching: RouteMatching) -> Self {
        Self {
            current: start,
            back_stack: Vec::new(),
            matching,
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Navigate to `to`, returning whether the route changed
    pub fn navigate(&mut self, to: Route) -> bool {
        if to == self.current {
            return false;
        }
        log::debug!("Navigating {} -> {}", self.current, to);
        let previous = std::mem::replace(&mut self.current, to);
        self.back_stack.push(previous);
        true
    }

    /// Return to the previous route, if any
    pub fn back(&mut self) -> bool {
        match self.back_stack.pop() {
            Some(previous) => {
                log::debug!("Navigating back {} -> {}", self.current, previous);
                self.current = previous;
                true
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.back_stack.is_empty()
    }

    pub fn match_mode_for(&self, target: &Route) -> MatchMode {
        if target.is_root() {
            self.matching.root
        } else {
            self.matching.nested
        }
    }

    pub fn is_active(&self, target: &Route) -> bool {
        is_active(&self.current, target, self.match_mode_for(target))
    }

    /// Page mounted at the current route, if any
    pub fn resolve(&self) -> Option<PageKind> {
        NAV_ENTRIES
            .iter()
            .find(|entry| entry.route() == self.current)
            .map(|entry| entry.page)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Route::root(), RouteMatching::default())
    }
}

#[cfg(test)]
#[path = "router_tests.rs"]
mod router_tests;
