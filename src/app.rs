//! Application state, event handling and rendering

mod app_events;
mod app_render;
mod app_state;
mod mouse_click;

pub use app_state::App;
pub use mouse_click::handle_click;

#[cfg(test)]
#[path = "app/app_render_tests.rs"]
mod app_render_tests;
