//! Interactivity layer for a static portfolio page, compiled to WebAssembly.
//!
//! The crate wires a fixed set of marker-tagged DOM elements to click and
//! input events: a sidebar toggle, a testimonial modal, a category filter with
//! a custom select, a contact-form submit gate, and single-page navigation.
//! Each feature binds independently and degrades to a logged no-op when its
//! elements are missing.
//!
//! All behavior is written against the [`dom::Document`] / [`dom::Element`]
//! seam so it runs headless against [`dom::memory`] in tests. The `hydrate`
//! feature adds the `web_sys` implementation and the WASM entry point.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | One-shot initialization of every feature |
//! | [`features`] | The five event-binding features |
//! | [`group`] | Single-selection "active" group helpers |
//! | [`dom`] | Host DOM seam and the in-memory implementation |
//! | [`markers`] | Selector and attribute vocabulary of the host markup |
//! | [`config`] | Debug switch, read from an optional JSON block |
//! | [`logging`] | Diagnostics routed through the `log` facade |
//! | [`error`] | Binding and extraction errors |

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod features;
pub mod group;
pub mod logging;
pub mod markers;
#[cfg(feature = "hydrate")]
pub mod web;

#[cfg(test)]
#[path = "log_capture_test.rs"]
mod log_capture;

pub use app::{FeatureStatus, InitReport, init};
pub use config::Config;
