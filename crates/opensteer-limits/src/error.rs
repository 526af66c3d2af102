//! Limit-set validation errors.

use thiserror::Error;

/// Errors raised when a [`crate::SteerLimits`] fails validation.
///
/// These indicate a configuration or programming error and are fatal at
/// session start; none of them can occur once a limit set has been
/// accepted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LimitsError {
    /// Maximum torque must be a positive native-unit value.
    #[error("max torque must be positive, got {0}")]
    NonPositiveMaxTorque(i32),

    /// Per-step delta must be a positive native-unit value.
    #[error("per-step torque delta must be positive, got {0}")]
    NonPositiveDelta(i32),

    /// The override-yield delta may not be tighter than the nominal delta.
    #[error("yield delta {yield_delta} must be at least the per-step delta {delta}")]
    YieldBelowDelta {
        /// Configured override-yield step bound.
        yield_delta: i32,
        /// Configured nominal step bound.
        delta: i32,
    },

    /// The driver override threshold must be a positive torque value.
    #[error("driver override threshold must be positive, got {0}")]
    NonPositiveOverrideThreshold(i32),

    /// Commands are due at least every cycle; an interval of zero never fires.
    #[error("command interval must be at least one cycle")]
    ZeroCommandInterval,

    /// Minimum actuation speed must be finite and non-negative.
    #[error("minimum steer speed must be finite and non-negative, got {0}")]
    InvalidMinSpeed(f32),

    /// Request gain must be finite and non-zero.
    #[error("request gain must be finite and non-zero, got {0}")]
    InvalidRequestGain(f32),
}
