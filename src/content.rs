//! Canned site copy and seed data.
//!
//! DESIGN
//! ======
//! Every piece of hardcoded product copy lives here so pages render from
//! typed constants instead of scattering string literals through the view
//! tree. None of this is real telemetry — it is marketing-site set dressing
//! for a product with no backend.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::state::chat::{ChatMessage, Role};
use crate::state::upload::UploadStatus;

/// Feature bullets on the landing page.
pub const FEATURES: [&str; 6] = [
    "Non-linear retrieval",
    "Multi-format indexing",
    "Encrypted channels",
    "Zero-knowledge sessions",
    "Real-time synthesis",
    "Citation grounding",
];

/// One performance-metric stat on the landing page.
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub unit: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { label: "Latency", value: "<120ms", unit: "p99" },
    Stat { label: "Throughput", value: "512", unit: "req/s" },
    Stat { label: "Documents", value: "24", unit: "max/session" },
    Stat { label: "Uptime", value: "99.9", unit: "%" },
];

/// One stage of the landing page's data-flow strip.
pub struct FlowStage {
    pub title: &'static str,
    pub desc: &'static str,
}

pub const DATA_FLOW: [FlowStage; 3] = [
    FlowStage {
        title: "→ INGESTION",
        desc: "Parallel chunk extraction, vector encoding, secure tokenization",
    },
    FlowStage {
        title: "→ INDEXING",
        desc: "Distributed caching, semantic hashing, citation tracking",
    },
    FlowStage {
        title: "→ SYNTHESIS",
        desc: "LLM pipeline, cross-reference validation, stream output",
    },
];

/// One architecture card on the landing page.
pub struct ArchCard {
    pub title: &'static str,
    pub desc: &'static str,
}

pub const ARCHITECTURE: [ArchCard; 6] = [
    ArchCard { title: "Multi-Format", desc: "PDF, DOCX, TXT, PPT with format-aware parsing" },
    ArchCard { title: "Zero-Knowledge", desc: "Encrypted channels, no storage, instant revocation" },
    ArchCard { title: "Real-Time", desc: "Sub-120ms latency, streaming synthesis, live citations" },
    ArchCard { title: "Deterministic", desc: "Reproducible outputs, grounded generation" },
    ArchCard { title: "Scalable", desc: "Distributed indexing, GPU acceleration, auto-sharding" },
    ArchCard { title: "Observable", desc: "Full audit logs, token tracking, confidence scores" },
];

/// A canned entry in the chat page's document sidebar.
pub struct DocumentEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub status: UploadStatus,
}

pub const INDEXED_DOCS: [DocumentEntry; 3] = [
    DocumentEntry { id: "1", name: "Q1_Audit_Report.pdf", status: UploadStatus::Indexed },
    DocumentEntry { id: "2", name: "Compliance_Policy_2024.docx", status: UploadStatus::Indexed },
    DocumentEntry { id: "3", name: "Risk_Assessment.pdf", status: UploadStatus::Indexed },
];

/// Canned assistant reply appended after every simulated query.
pub const CANNED_REPLY: &str = "Processing your query. Retrieving from indexed documents. \
     Analyzing and synthesizing results. — Query processed successfully.";

/// The transcript every chat session starts with.
#[must_use]
pub fn seed_messages() -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            id: "1".to_owned(),
            role: Role::Assistant,
            content: "System initialized. Ready to interrogate documents. Supported operations: \
                 semantic search, multi-document synthesis, citation grounding. Awaiting query."
                .to_owned(),
        },
        ChatMessage {
            id: "2".to_owned(),
            role: Role::User,
            content: "Summarize the key compliance findings across all documents.".to_owned(),
        },
        ChatMessage {
            id: "3".to_owned(),
            role: Role::Assistant,
            content: "Processing query across 3 documents. Retrieving relevant passages. \
                 Zero-knowledge synthesis active. — Findings: [1] Q1 audit identified 2 critical \
                 gaps in access controls. [2] Policy doc revision recommended. [3] Risk \
                 assessment escalated. Complete report ready for download."
                .to_owned(),
        },
    ]
}
