//! Randomized simulation planning for the mocked upload and chat flows.
//!
//! DESIGN
//! ======
//! All randomness flows through a caller-supplied unit source (a closure
//! yielding values in `[0, 1)`). The browser passes `js_sys::Math::random`;
//! tests pass fixed sequences, making every plan deterministic. Applying a
//! plan is a pure state transition (`state::upload::UploadState::apply_tick`,
//! `state::chat::ChatState::deliver_reply`); only the sleep between planned
//! ticks is browser-specific.

#[cfg(test)]
#[path = "timing_test.rs"]
mod timing_test;

/// One scheduled progress update for an upload item.
///
/// `delay_ms` is the offset from enqueue time, not from the previous tick —
/// all ticks for an item are scheduled up front.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlannedTick {
    pub delay_ms: f64,
    pub bump: f64,
}

/// `(base_ms, spread_ms)` for the three upload stages.
const UPLOAD_STAGES: [(f64, f64); 3] = [(500.0, 700.0), (1100.0, 800.0), (1900.0, 900.0)];

/// Largest random progress bump a single tick can apply.
pub const MAX_TICK_BUMP: f64 = 30.0;

/// Bump applied by the final stage; large enough to always cap at 100.
const COMPLETING_BUMP: f64 = 100.0;

const REPLY_DELAY_BASE_MS: f64 = 1200.0;
const REPLY_DELAY_SPREAD_MS: f64 = 1200.0;

/// Plan the three progress ticks for a newly queued upload item.
///
/// The first two ticks bump by a random amount up to [`MAX_TICK_BUMP`]; the
/// last tick always carries a completing bump so every item terminates at
/// `Indexed`/100 even when the random draws run low.
pub fn plan_upload_ticks(unit: &mut impl FnMut() -> f64) -> [PlannedTick; 3] {
    let mut ticks = UPLOAD_STAGES.map(|(base, spread)| PlannedTick {
        delay_ms: base + unit() * spread,
        bump: unit() * MAX_TICK_BUMP,
    });
    ticks[2].bump = COMPLETING_BUMP;
    ticks
}

/// Delay before the canned assistant reply lands, in milliseconds.
pub fn reply_delay_ms(unit: &mut impl FnMut() -> f64) -> f64 {
    REPLY_DELAY_BASE_MS + unit() * REPLY_DELAY_SPREAD_MS
}
