//! Routed pages
//!
//! Each mode gets a query page: an input line, the transcript of what was
//! asked, and the suggestion list while the transcript is empty.

mod query_page;
mod transcript;

use serde::Serialize;

pub use query_page::{PageFocus, QueryPage};
pub use transcript::{Submission, Transcript};

/// Which application mode a page serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PageKind {
    #[serde(rename = "chat")]
    Chat,
    #[serde(rename = "qa")]
    InternalData,
}

impl PageKind {
    pub fn title(self) -> &'static str {
        match self {
            PageKind::Chat => " Chat ",
            PageKind::InternalData => " Internal Data Q&A ",
        }
    }

    pub fn intro(self) -> &'static str {
        match self {
            PageKind::Chat => "Chat with GPT",
            PageKind::InternalData => "Ask your internal data",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            PageKind::Chat => "Type a new question...",
            PageKind::InternalData => "Ask a question about internal data...",
        }
    }
}
