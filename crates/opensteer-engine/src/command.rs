//! Command descriptors and the payload seam to the frame encoder.

use serde::{Deserialize, Serialize};

/// One emitted command, before wire encoding.
///
/// Consumed immediately by the external frame-encoding collaborator; the
/// engine has no knowledge of the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandFrame {
    /// Rate-limited torque to command, native units.
    pub value: i32,
    /// Rolling sequence identifier, in `[0, 3]`.
    pub seq: u8,
    /// Whether actuation authority is asserted for this command.
    pub enabled: bool,
}

/// Assembles a concrete command from an emitted [`CommandFrame`].
///
/// The scheduler is generic over this seam so the same cadence-gated,
/// echo-synchronized engine can drive other command paths (acceleration,
/// braking) that share the rolling-identifier pattern. Only the steering
/// instantiation is provided.
pub trait CommandPayload {
    /// Build the payload for one emitted frame.
    fn assemble(frame: CommandFrame) -> Self;
}

impl CommandPayload for CommandFrame {
    fn assemble(frame: CommandFrame) -> Self {
        frame
    }
}

/// Steering actuation command handed to the frame encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SteeringCommand {
    /// Commanded steering torque, native units.
    pub torque: i32,
    /// Rolling sequence identifier the actuator validates for gaps.
    pub counter: u8,
    /// Whether the actuator should apply the commanded torque.
    pub active: bool,
}

impl CommandPayload for SteeringCommand {
    fn assemble(frame: CommandFrame) -> Self {
        Self {
            torque: frame.value,
            counter: frame.seq,
            active: frame.enabled,
        }
    }
}
