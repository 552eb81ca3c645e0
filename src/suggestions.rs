//! Suggested prompts
//!
//! A fixed, ordered catalog of prompts and the list widget that lets the
//! user pick one. Picking a prompt hands its value to the handler the list
//! was constructed with; what happens next belongs to the owning page.

mod catalog;
mod selection;
mod suggestion_item;
mod suggestion_list;

pub use catalog::{DEFAULT_SUGGESTIONS, Suggestion, SuggestionCatalog};
pub use selection::{SelectionHandler, SelectionSender};
pub use suggestion_item::SuggestionItem;
pub use suggestion_list::SuggestionList;
