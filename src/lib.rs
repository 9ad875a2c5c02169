//! # catnova-client
//!
//! Leptos + WASM frontend for the CatNova document-chat marketing site.
//! Three routes: a static landing page, a mocked document-upload flow, and a
//! mocked chat session. There is no backend — indexing progress and
//! assistant replies are simulated with randomized timers over canned data.
//!
//! Simulation decisions (tick amounts, delays, status transitions) live in
//! plain state structs and pure planning functions so they stay deterministic
//! under test; only the browser sleep shims are gated behind the `csr`
//! feature.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;
