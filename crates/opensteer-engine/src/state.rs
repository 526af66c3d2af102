//! Scheduler-owned persistent state.

use serde::{Deserialize, Serialize};

/// Actuation authority.
///
/// `Idle` is not an error state: the scheduler keeps emitting when due,
/// commanding zero torque so the applied value ramps back to neutral.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActuationState {
    /// No actuation authority; commands are emitted disabled with a zero
    /// request.
    #[default]
    Idle,
    /// Authority granted; the external request is scaled and applied.
    Active,
}

/// State persisted across cycles, owned exclusively by the scheduler.
///
/// Resets to its initial values on every session start; nothing survives a
/// process restart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerState {
    /// Torque commanded by the most recent emission, native units.
    pub last_applied: i32,
    /// Whether the most recent emission was rate limited. Diagnostic only.
    pub rate_limited: bool,
}
