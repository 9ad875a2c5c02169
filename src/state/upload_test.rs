use super::*;
use crate::util::timing::plan_upload_ticks;

fn item(name: &str) -> UploadItem {
    UploadItem::new(name, 2048.0)
}

// =============================================================
// enqueue
// =============================================================

#[test]
fn enqueue_starts_items_uploading_at_initial_progress() {
    let mut state = UploadState::default();
    let ids = state.enqueue(vec![item("a.pdf"), item("b.docx")]);
    assert_eq!(ids.len(), 2);
    assert_eq!(state.items.len(), 2);
    for queued in &state.items {
        assert_eq!(queued.status, UploadStatus::Uploading);
        assert_eq!(queued.progress, INITIAL_PROGRESS);
    }
    assert_eq!(state.items[0].display_size, "2.0 KB");
}

#[test]
fn enqueue_prepends_newest_selection() {
    let mut state = UploadState::default();
    state.enqueue(vec![item("old.pdf")]);
    state.enqueue(vec![item("new.pdf")]);
    assert_eq!(state.items[0].name, "new.pdf");
    assert_eq!(state.items[1].name, "old.pdf");
}

#[test]
fn enqueue_empty_selection_is_a_no_op() {
    let mut state = UploadState::default();
    state.enqueue(vec![item("a.pdf")]);
    let ids = state.enqueue(Vec::new());
    assert!(ids.is_empty());
    assert_eq!(state.items.len(), 1);
}

#[test]
fn enqueue_caps_queue_at_twelve_newest() {
    let mut state = UploadState::default();
    for i in 0..10 {
        state.enqueue(vec![item(&format!("old-{i}.pdf"))]);
    }
    state.enqueue(vec![item("n1.pdf"), item("n2.pdf"), item("n3.pdf")]);
    assert_eq!(state.items.len(), QUEUE_CAP);
    assert_eq!(state.items[0].name, "n1.pdf");
    assert_eq!(state.items[2].name, "n3.pdf");
    // The oldest item fell off.
    assert!(state.items.iter().all(|i| i.name != "old-0.pdf"));
}

// =============================================================
// apply_tick
// =============================================================

#[test]
fn apply_tick_moves_item_to_processing() {
    let mut state = UploadState::default();
    let ids = state.enqueue(vec![item("a.pdf")]);
    state.apply_tick(&ids[0], 20.0);
    assert_eq!(state.items[0].status, UploadStatus::Processing);
    assert_eq!(state.items[0].progress, 28.0);
}

#[test]
fn apply_tick_crossing_threshold_snaps_to_indexed_100() {
    let mut state = UploadState::default();
    let ids = state.enqueue(vec![item("a.pdf")]);
    state.apply_tick(&ids[0], 91.0); // 8 + 91 = 99 > 98
    assert_eq!(state.items[0].status, UploadStatus::Indexed);
    assert_eq!(state.items[0].progress, 100.0);
}

#[test]
fn apply_tick_at_exactly_threshold_keeps_processing() {
    let mut state = UploadState::default();
    let ids = state.enqueue(vec![item("a.pdf")]);
    state.apply_tick(&ids[0], 90.0); // 8 + 90 = 98, not past the threshold
    assert_eq!(state.items[0].status, UploadStatus::Processing);
    assert_eq!(state.items[0].progress, 98.0);
}

#[test]
fn apply_tick_indexed_item_is_terminal() {
    let mut state = UploadState::default();
    let ids = state.enqueue(vec![item("a.pdf")]);
    state.apply_tick(&ids[0], 100.0);
    let frozen = state.items[0].clone();
    state.apply_tick(&ids[0], 25.0);
    assert_eq!(state.items[0], frozen);
}

#[test]
fn apply_tick_unknown_id_is_ignored() {
    let mut state = UploadState::default();
    state.enqueue(vec![item("a.pdf")]);
    state.apply_tick("missing", 50.0);
    assert_eq!(state.items[0].progress, INITIAL_PROGRESS);
}

#[test]
fn apply_tick_progress_is_monotone_and_bounded() {
    let mut state = UploadState::default();
    let ids = state.enqueue(vec![item("a.pdf")]);
    let mut last = state.items[0].progress;
    for bump in [-5.0, 0.0, 12.5, 3.0, 30.0, 30.0, 30.0, 30.0] {
        state.apply_tick(&ids[0], bump);
        let now = state.items[0].progress;
        assert!(now >= last, "progress regressed: {last} -> {now}");
        assert!((0.0..=100.0).contains(&now));
        last = now;
    }
    assert_eq!(state.items[0].status, UploadStatus::Indexed);
    assert_eq!(state.items[0].progress, 100.0);
}

// =============================================================
// full planned simulation
// =============================================================

#[test]
fn planned_ticks_always_index_every_item() {
    // Worst case: the unit source always draws zero, so the first two ticks
    // bump nothing and the completing tick does all the work.
    let mut state = UploadState::default();
    let ids = state.enqueue(vec![item("a.pdf"), item("b.pdf")]);
    let mut unit = || 0.0;
    for id in &ids {
        for tick in plan_upload_ticks(&mut unit) {
            state.apply_tick(id, tick.bump);
        }
    }
    assert!(state.all_indexed());
    for queued in &state.items {
        assert_eq!(queued.progress, 100.0);
    }
}

// =============================================================
// all_indexed
// =============================================================

#[test]
fn all_indexed_vacuous_on_empty_queue() {
    assert!(UploadState::default().all_indexed());
}

#[test]
fn all_indexed_false_while_any_item_in_flight() {
    let mut state = UploadState::default();
    let ids = state.enqueue(vec![item("a.pdf"), item("b.pdf")]);
    state.apply_tick(&ids[0], 100.0);
    assert!(!state.all_indexed());
    state.apply_tick(&ids[1], 100.0);
    assert!(state.all_indexed());
}
