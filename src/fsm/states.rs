//! Concrete state behaviors for the release trigger.
//!
//! Transition graph:
//!
//! ```text
//!            bright sample                hold-off elapsed
//!  Waiting ────────────────▶ Armed ──────────────────────▶ Released
//!     ▲                        │                              (terminal)
//!     └────────────────────────┘
//!          any dark sample
//! ```
//!
//! `Waiting` and `Armed` bounce on the raw brightness comparison; only a
//! full, uninterrupted hold-off window promotes `Armed` to `Released`.
//! `Released` has no outgoing edges.

use log::{info, warn};

use super::context::TriggerContext;
use super::{StateDescriptor, StateId};

// ---------------------------------------------------------------------------
// Waiting — servo latched, watching for the landing light
// ---------------------------------------------------------------------------

fn waiting_enter(ctx: &mut TriggerContext) {
    ctx.commands.servo_pulse_us = ctx.config.servo_min_us;
    ctx.armed_since_us = None;
    info!(
        "Waiting: servo latched at {} us, threshold {}",
        ctx.config.servo_min_us, ctx.config.bright_threshold
    );
}

fn waiting_update(ctx: &mut TriggerContext) -> Option<StateId> {
    if ctx.is_bright() {
        return Some(StateId::Armed);
    }
    None
}

// ---------------------------------------------------------------------------
// Armed — bright signal seen, hold-off window running
// ---------------------------------------------------------------------------

fn armed_enter(ctx: &mut TriggerContext) {
    ctx.armed_since_us = Some(ctx.now_us);
    info!(
        "Armed: brightness {} >= {}, hold-off {} ms",
        ctx.brightness, ctx.config.bright_threshold, ctx.config.holdoff_ms
    );
}

fn armed_update(ctx: &mut TriggerContext) -> Option<StateId> {
    // A single dark sample disarms.  Checked before the elapsed-time test so
    // a dip on the exact tick the window would expire still wins.
    if !ctx.is_bright() {
        info!(
            "Disarmed: brightness {} < {}",
            ctx.brightness, ctx.config.bright_threshold
        );
        return Some(StateId::Waiting);
    }

    let holdoff_us = u64::from(ctx.config.holdoff_ms) * 1_000;
    match ctx.armed_elapsed_us() {
        Some(elapsed) if elapsed >= holdoff_us => Some(StateId::Released),
        Some(_) => None,
        None => {
            // Unreachable by construction (armed_enter always stamps the
            // time), but a missing stamp must never fire the release.
            warn!("Armed with no arming timestamp; restarting hold-off");
            ctx.armed_since_us = Some(ctx.now_us);
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Released — payload dropped, terminal
// ---------------------------------------------------------------------------

fn released_enter(ctx: &mut TriggerContext) {
    ctx.commands.servo_pulse_us = ctx.config.servo_max_us;
    ctx.commands.released = true;
    let armed_for_us = ctx
        .armed_since_us
        .take()
        .map_or(0, |since| ctx.now_us.saturating_sub(since));
    ctx.armed_for_us = Some(armed_for_us);
    info!(
        "RELEASED: servo to {} us after {} ms armed",
        ctx.config.servo_max_us,
        armed_for_us / 1_000
    );
}

fn released_update(_ctx: &mut TriggerContext) -> Option<StateId> {
    // Terminal.  The payload is gone; nothing to decide.
    None
}

// ---------------------------------------------------------------------------
// State table construction
// ---------------------------------------------------------------------------

/// Build the complete state table.
/// Array order MUST match `StateId` discriminant order.
pub fn build_state_table() -> [StateDescriptor; StateId::COUNT] {
    [
        StateDescriptor {
            id: StateId::Waiting,
            name: "Waiting",
            on_enter: Some(waiting_enter),
            on_exit: None,
            on_update: waiting_update,
        },
        StateDescriptor {
            id: StateId::Armed,
            name: "Armed",
            on_enter: Some(armed_enter),
            on_exit: None,
            on_update: armed_update,
        },
        StateDescriptor {
            id: StateId::Released,
            name: "Released",
            on_enter: Some(released_enter),
            on_exit: None,
            on_update: released_update,
        },
    ]
}
