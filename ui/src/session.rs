//! Reactive sign-in state shared through the Dioxus context.

use dioxus::prelude::*;
use dioxus_logger::tracing::info;

/// The signed-in flag for the current visitor.
///
/// Provided once by the root scope; every component that needs the flag reads
/// it from context. Only the root and the header's sign-in control change it.
#[derive(Clone, Copy)]
pub struct Session {
    signed_in: Signal<bool>,
}

impl Session {
    pub fn new(signed_in: Signal<bool>) -> Self {
        Self { signed_in }
    }

    pub fn is_logged(&self) -> bool {
        *self.signed_in.read()
    }

    pub fn toggle(&mut self) {
        self.signed_in.toggle();
        info!("session signed_in = {}", self.is_logged());
    }
}
