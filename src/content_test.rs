use super::*;

#[test]
fn seed_transcript_alternates_roles() {
    let messages = seed_messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0].role, Role::Assistant);
    assert_eq!(messages[1].role, Role::User);
    assert_eq!(messages[2].role, Role::Assistant);
}

#[test]
fn seed_transcript_ids_are_unique() {
    let messages = seed_messages();
    let mut ids: Vec<_> = messages.iter().map(|m| m.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), messages.len());
}

#[test]
fn sidebar_docs_are_all_indexed() {
    assert_eq!(INDEXED_DOCS.len(), 3);
    for doc in &INDEXED_DOCS {
        assert_eq!(doc.status, UploadStatus::Indexed);
        assert!(!doc.name.is_empty());
    }
}

#[test]
fn landing_copy_is_fully_populated() {
    assert!(FEATURES.iter().all(|f| !f.is_empty()));
    assert!(STATS.iter().all(|s| !s.label.is_empty() && !s.value.is_empty()));
    assert!(DATA_FLOW.iter().all(|s| !s.desc.is_empty()));
    assert!(ARCHITECTURE.iter().all(|c| !c.desc.is_empty()));
}
