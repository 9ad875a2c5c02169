use super::*;

/// Unit source replaying a fixed sequence, repeating the last value.
fn seq(values: Vec<f64>) -> impl FnMut() -> f64 {
    let mut i = 0;
    move || {
        let v = values[i.min(values.len() - 1)];
        i += 1;
        v
    }
}

#[test]
fn plan_upload_ticks_minimum_delays_at_zero_source() {
    let mut unit = seq(vec![0.0]);
    let ticks = plan_upload_ticks(&mut unit);
    assert_eq!(ticks[0].delay_ms, 500.0);
    assert_eq!(ticks[1].delay_ms, 1100.0);
    assert_eq!(ticks[2].delay_ms, 1900.0);
    assert_eq!(ticks[0].bump, 0.0);
    assert_eq!(ticks[1].bump, 0.0);
}

#[test]
fn plan_upload_ticks_maximum_delays_near_one_source() {
    let mut unit = seq(vec![1.0]);
    let ticks = plan_upload_ticks(&mut unit);
    assert_eq!(ticks[0].delay_ms, 1200.0);
    assert_eq!(ticks[1].delay_ms, 1900.0);
    assert_eq!(ticks[2].delay_ms, 2800.0);
    assert_eq!(ticks[0].bump, MAX_TICK_BUMP);
    assert_eq!(ticks[1].bump, MAX_TICK_BUMP);
}

#[test]
fn plan_upload_ticks_final_tick_always_completes() {
    let mut zeros = seq(vec![0.0]);
    assert_eq!(plan_upload_ticks(&mut zeros)[2].bump, 100.0);
    let mut ones = seq(vec![1.0]);
    assert_eq!(plan_upload_ticks(&mut ones)[2].bump, 100.0);
}

#[test]
fn plan_upload_ticks_stage_windows_do_not_invert() {
    // Stage windows are [500,1200], [1100,1900], [1900,2800]. Adjacent
    // windows overlap, so ordering between ticks 1 and 2 is not guaranteed —
    // but stage 3 never fires before stage 1.
    let mut unit = seq(vec![1.0, 0.5, 0.0, 0.5, 0.0, 0.5]);
    let ticks = plan_upload_ticks(&mut unit);
    assert!(ticks[0].delay_ms <= 1200.0);
    assert!(ticks[2].delay_ms >= 1900.0);
}

#[test]
fn reply_delay_ms_covers_documented_range() {
    let mut low = seq(vec![0.0]);
    assert_eq!(reply_delay_ms(&mut low), 1200.0);
    let mut high = seq(vec![1.0]);
    assert_eq!(reply_delay_ms(&mut high), 2400.0);
}
