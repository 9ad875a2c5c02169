//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and the mocked-flow surfaces while reading
//! and writing page-local signal state passed in as props.

pub mod doc_sidebar;
pub mod message_bubble;
pub mod site_header;
pub mod typing_indicator;
pub mod upload_queue;
