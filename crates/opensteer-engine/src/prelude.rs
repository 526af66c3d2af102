//! Convenience re-exports for engine users.
//!
//! ```
//! use opensteer_engine::prelude::*;
//! ```

pub use crate::command::{CommandFrame, CommandPayload, SteeringCommand};
pub use crate::scheduler::{CommandScheduler, CycleInput, SteeringScheduler};
pub use crate::state::{ActuationState, ControllerState};
pub use crate::telemetry::SteerTelemetry;

pub use opensteer_limits::{LimitedTorque, LimitsError, SteerLimits, apply_torque_limits};
pub use opensteer_sync::{EchoTracker, SEQ_SLOTS, SyncState, next_seq};
