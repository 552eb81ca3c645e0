use crate::navigation::route::Route;
use crate::pages::PageKind;

/// One entry of the header navigation menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEntry {
    pub label: &'static str,
    pub path: &'static str,
    pub page: PageKind,
}

impl NavigationEntry {
    pub fn route(&self) -> Route {
        Route::from_normalized(self.path)
    }
}

/// Header menu, in display order
pub const NAV_ENTRIES: [NavigationEntry; 2] = [
    NavigationEntry {
        label: "ChatGPT",
        path: "/",
        page: PageKind::Chat,
    },
    NavigationEntry {
        label: "Internal Data",
        path: "/qa",
        page: PageKind::InternalData,
    },
];
