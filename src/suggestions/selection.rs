//! Selection handlers
//!
//! A list is given its handler at construction and calls it exactly once
//! per activation with the activated suggestion's value.

use std::sync::mpsc;

pub trait SelectionHandler {
    fn on_select(&mut self, value: &str);
}

impl<F> SelectionHandler for F
where
    F: FnMut(&str),
{
    fn on_select(&mut self, value: &str) {
        self(value)
    }
}

/// Handler that forwards selections over a channel to the owning page
#[derive(Debug, Clone)]
pub struct SelectionSender(mpsc::Sender<String>);

impl SelectionSender {
    pub fn channel() -> (Self, mpsc::Receiver<String>) {
        let (tx, rx) = mpsc::channel();
        (Self(tx), rx)
    }
}

impl SelectionHandler for SelectionSender {
    fn on_select(&mut self, value: &str) {
        if self.0.send(value.to_string()).is_err() {
            log::warn!("Dropped selection '{}': receiver is gone", value);
        }
    }
}
