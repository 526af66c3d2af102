//! Per-step torque limiter.
//!
//! This module bounds a requested steering torque against the configured
//! magnitude cap and per-command rate limit, with the override-yield
//! relaxation that keeps the actuator from fighting a driver who is
//! steering against it.

use serde::{Deserialize, Serialize};

use crate::limits::SteerLimits;

/// Result of limiting one requested torque step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitedTorque {
    /// The torque to command, native units.
    pub applied: i32,
    /// True when the step clamp changed the requested step. Diagnostic
    /// only; does not gate control flow.
    pub was_limited: bool,
}

/// Bound a requested torque against the previous applied value.
///
/// The requested value is clamped to `±max_torque`, then the step from
/// `previous` is clamped to `±max_delta_per_step`. When the measured
/// driver torque opposes the standing command beyond the override
/// threshold, steps that move the applied value toward zero are bounded by
/// the relaxed `yield_delta_per_step` instead.
///
/// The caller passes `requested = 0` while actuation is disabled, so the
/// applied value ramps back to neutral at the bounded rate rather than
/// snapping.
///
/// # Example
///
/// ```
/// use opensteer_limits::{SteerLimits, apply_torque_limits};
///
/// let limits = SteerLimits {
///     max_torque: 300,
///     max_delta_per_step: 50,
///     yield_delta_per_step: 100,
///     driver_override_threshold: 150,
///     command_interval: 1,
///     min_steer_speed: 3.0,
///     request_gain: 300.0,
/// };
///
/// let out = apply_torque_limits(300, 0, 0, &limits);
/// assert_eq!(out.applied, 50);
/// assert!(out.was_limited);
/// ```
#[inline]
pub fn apply_torque_limits(
    requested: i32,
    previous: i32,
    driver_torque: i32,
    limits: &SteerLimits,
) -> LimitedTorque {
    let capped = requested.clamp(-limits.max_torque, limits.max_torque);
    let step = capped.saturating_sub(previous);

    let toward_zero = (previous > 0 && step < 0) || (previous < 0 && step > 0);
    let opposing = driver_torque.saturating_abs() > limits.driver_override_threshold
        && driver_torque.signum() == -previous.signum();

    let bound = if opposing && toward_zero {
        limits.yield_delta_per_step
    } else {
        limits.max_delta_per_step
    };

    let limited_step = step.clamp(-bound, bound);

    LimitedTorque {
        applied: previous.saturating_add(limited_step),
        was_limited: limited_step != step,
    }
}
