use std::rc::Rc;

use crate::config::Config;
use crate::help::HelpPopupState;
use crate::layout::LayoutRegions;
use crate::navigation::{NAV_ENTRIES, NavigationShell, Route, RouteMatching, Router};
use crate::pages::{PageKind, QueryPage, Submission};
use crate::suggestions::SuggestionCatalog;

/// Application state
pub struct App {
    pub router: Router,
    pub shell: NavigationShell,
    pub chat: QueryPage,
    pub qa: QueryPage,
    pub help: HelpPopupState,
    pub regions: LayoutRegions,
    pub should_quit: bool,
}

impl App {
    /// Create the application with the catalog and marks from `config`,
    /// starting at `start`
    pub fn new(config: &Config, start: Route) -> Self {
        let catalog = Rc::new(config.catalog());
        let matching = RouteMatching {
            root: config.navigation.root_match,
            nested: config.navigation.nested_match,
        };

        Self::with_catalog(
            catalog,
            Router::new(start, matching),
            NavigationShell::new(config.branding.brand(), config.branding.partner()),
        )
    }

    pub fn with_catalog(catalog: Rc<SuggestionCatalog>, router: Router, shell: NavigationShell) -> Self {
        let page_for = |kind: PageKind| {
            let route = NAV_ENTRIES
                .iter()
                .find(|entry| entry.page == kind)
                .map(|entry| entry.route())
                .unwrap_or_else(Route::root);
            QueryPage::new(kind, route, Rc::clone(&catalog))
        };

        Self {
            chat: page_for(PageKind::Chat),
            qa: page_for(PageKind::InternalData),
            router,
            shell,
            help: HelpPopupState::new(),
            regions: LayoutRegions::new(),
            should_quit: false,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Page mounted at the current route
    pub fn page(&self) -> Option<&QueryPage> {
        match self.router.resolve()? {
            PageKind::Chat => Some(&self.chat),
            PageKind::InternalData => Some(&self.qa),
        }
    }

    pub fn page_mut(&mut self) -> Option<&mut QueryPage> {
        match self.router.resolve()? {
            PageKind::Chat => Some(&mut self.chat),
            PageKind::InternalData => Some(&mut self.qa),
        }
    }

    pub fn navigate(&mut self, route: Route) {
        self.router.navigate(route);
    }

    /// Brand mark activation always leads home
    pub fn activate_brand_mark(&mut self) {
        self.navigate(Route::root());
    }

    pub fn activate_nav_entry(&mut self, index: usize) {
        if let Some(entry) = NAV_ENTRIES.get(index) {
            self.navigate(entry.route());
        }
    }

    /// Let the current page apply selections reported by its suggestion list
    pub fn process_selections(&mut self) {
        if let Some(page) = self.page_mut() {
            page.process_selections();
        }
    }

    /// Every submission from both pages, oldest first
    pub fn submissions(&self) -> Vec<&Submission> {
        let mut all: Vec<&Submission> = self
            .chat
            .transcript
            .entries()
            .iter()
            .chain(self.qa.transcript.entries())
            .collect();
        all.sort_by_key(|submission| submission.submitted_at);
        all
    }
}
