//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate display formatting and simulation planning from
//! page and component logic to improve reuse and testability.

pub mod format;
pub mod timing;
