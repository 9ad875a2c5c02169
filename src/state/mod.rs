//! Page-local state models for the mocked flows.
//!
//! DESIGN
//! ======
//! Each page owns one plain state struct wrapped in an `RwSignal`. All
//! transitions are pure methods so the simulation logic is testable without
//! a browser; timer callbacks in the pages only ever call these methods.

pub mod chat;
pub mod upload;
