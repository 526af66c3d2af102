//! Per-vehicle steering limit set.

use serde::{Deserialize, Serialize};

use crate::error::LimitsError;

/// Immutable per-vehicle steering limits.
///
/// Constructed once at session start from the vehicle's parameter set and
/// never mutated afterwards. All torque fields are in the actuator's native
/// units; `request_gain` maps the normalized request onto that range and
/// carries the vehicle's sign convention (it may be negative).
///
/// # Example
///
/// ```
/// use opensteer_limits::SteerLimits;
///
/// let limits = SteerLimits {
///     max_torque: 300,
///     max_delta_per_step: 7,
///     yield_delta_per_step: 17,
///     driver_override_threshold: 50,
///     command_interval: 2,
///     min_steer_speed: 3.0,
///     request_gain: 300.0,
/// };
/// assert!(limits.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteerLimits {
    /// Maximum commanded torque magnitude, native units.
    pub max_torque: i32,
    /// Maximum change of the applied torque per emitted command.
    pub max_delta_per_step: i32,
    /// Relaxed per-command bound for motion toward zero while the driver
    /// overrides against the command. Must be at least `max_delta_per_step`.
    pub yield_delta_per_step: i32,
    /// Measured driver torque beyond which an opposing driver counts as
    /// overriding.
    pub driver_override_threshold: i32,
    /// Control cycles between commands (the cadence gate period).
    pub command_interval: u32,
    /// Vehicle speed below which actuation authority is withdrawn, m/s.
    pub min_steer_speed: f32,
    /// Native units per unit of normalized request; sign carries the
    /// vehicle's steering sign convention.
    pub request_gain: f32,
}

impl SteerLimits {
    /// Validate the limit set.
    ///
    /// # Errors
    ///
    /// Returns the first [`LimitsError`] encountered. A limit set that
    /// fails validation must not be used; this indicates a configuration
    /// error, not a runtime condition.
    pub fn validate(&self) -> Result<(), LimitsError> {
        if self.max_torque <= 0 {
            return Err(LimitsError::NonPositiveMaxTorque(self.max_torque));
        }
        if self.max_delta_per_step <= 0 {
            return Err(LimitsError::NonPositiveDelta(self.max_delta_per_step));
        }
        if self.yield_delta_per_step < self.max_delta_per_step {
            return Err(LimitsError::YieldBelowDelta {
                yield_delta: self.yield_delta_per_step,
                delta: self.max_delta_per_step,
            });
        }
        if self.driver_override_threshold <= 0 {
            return Err(LimitsError::NonPositiveOverrideThreshold(
                self.driver_override_threshold,
            ));
        }
        if self.command_interval == 0 {
            return Err(LimitsError::ZeroCommandInterval);
        }
        if !self.min_steer_speed.is_finite() || self.min_steer_speed < 0.0 {
            return Err(LimitsError::InvalidMinSpeed(self.min_steer_speed));
        }
        if !self.request_gain.is_finite() || self.request_gain == 0.0 {
            return Err(LimitsError::InvalidRequestGain(self.request_gain));
        }
        Ok(())
    }
}
