//! OpenSteer command engine - cycle-driven steering command generation
//!
//! This crate turns a normalized steering request plus per-cycle vehicle
//! telemetry into at most one rate-limited, sequence-numbered actuator
//! command per control cycle, synchronized against the safety-validation
//! layer's acceptance echo.
//!
//! # Architecture
//!
//! - [`SteerTelemetry`]: the per-cycle snapshot handed in by the vehicle
//!   interface
//! - [`CommandScheduler`]: the orchestrator - cadence gate, echo gate,
//!   rate limiting, sequence allocation, emission
//! - [`CommandPayload`]: the seam to the external frame encoder; the same
//!   engine can drive other command paths, only steering is instantiated
//!   here as [`SteeringCommand`]
//!
//! # State Machine
//!
//! ```text
//! ┌────────┐  enable ∧ no fault ∧ speed ≥ min   ┌────────┐
//! │  Idle  │───────────────────────────────────▶│ Active │
//! │        │◀───────────────────────────────────│        │
//! └────────┘        any condition lost          └────────┘
//! ```
//!
//! `Idle` still emits commands when due - with a zero request, so the
//! applied torque ramps back to neutral at the bounded rate.
//!
//! # Example
//!
//! ```
//! use opensteer_engine::prelude::*;
//!
//! let limits = SteerLimits {
//!     max_torque: 300,
//!     max_delta_per_step: 50,
//!     yield_delta_per_step: 100,
//!     driver_override_threshold: 150,
//!     command_interval: 1,
//!     min_steer_speed: 3.0,
//!     request_gain: 300.0,
//! };
//! let mut scheduler = SteeringScheduler::new(limits)?;
//!
//! let telemetry = SteerTelemetry {
//!     vehicle_speed: 15.0,
//!     last_accepted_seq: 0,
//!     ..Default::default()
//! };
//! let command = scheduler.run_cycle(&CycleInput {
//!     telemetry: &telemetry,
//!     requested_steer: 0.5,
//!     enabled: true,
//!     cycle: 0,
//! });
//! assert!(command.is_some());
//! # Ok::<(), opensteer_engine::LimitsError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod command;
pub mod prelude;
pub mod scheduler;
pub mod state;
pub mod telemetry;

pub use command::{CommandFrame, CommandPayload, SteeringCommand};
pub use scheduler::{CommandScheduler, CycleInput, SteeringScheduler};
pub use state::{ActuationState, ControllerState};
pub use telemetry::SteerTelemetry;

pub use opensteer_limits::{LimitedTorque, LimitsError, SteerLimits, apply_torque_limits};
pub use opensteer_sync::{EchoTracker, SEQ_SLOTS, SyncState, next_seq};
