//! Per-cycle vehicle telemetry snapshot.

use serde::{Deserialize, Serialize};

/// Vehicle telemetry sampled once per control cycle.
///
/// Produced by the external vehicle interface and immutable within the
/// cycle. `last_accepted_seq` is the safety-validation layer's echo of the
/// sequence identifier it most recently accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SteerTelemetry {
    /// Measured driver torque at the steering column, native units, signed.
    pub driver_torque: i32,
    /// Transient actuator fault reported by the vehicle.
    pub fault_temporary: bool,
    /// Latched actuator fault; clears only with external re-initialization.
    pub fault_permanent: bool,
    /// Vehicle speed, m/s.
    pub vehicle_speed: f32,
    /// Sequence identifier the safety layer last accepted, in `[0, 3]`.
    pub last_accepted_seq: u8,
}

impl SteerTelemetry {
    /// True when either fault flag disqualifies actuation this cycle.
    pub fn faulted(&self) -> bool {
        self.fault_temporary || self.fault_permanent
    }
}
