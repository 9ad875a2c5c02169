//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped state and timer scheduling and delegates
//! rendering details to `components`.

pub mod chat;
pub mod home;
pub mod upload;
