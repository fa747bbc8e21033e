//! Shared building blocks: the Pico.css wrappers, the site header and the
//! empty-state placeholder.
pub mod empty_state;
pub mod header;
pub mod pico;
