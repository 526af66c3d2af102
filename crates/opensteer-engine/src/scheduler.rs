//! The cycle-driven command scheduler.

use core::marker::PhantomData;

use opensteer_limits::{LimitsError, SteerLimits, apply_torque_limits};
use opensteer_sync::{EchoTracker, SyncState, next_seq};
use tracing::{debug, trace};

use crate::command::{CommandFrame, CommandPayload};
use crate::state::{ActuationState, ControllerState};
use crate::telemetry::SteerTelemetry;

/// Everything the scheduler consumes in one control cycle.
///
/// `cycle` is the caller's monotonic cycle counter and must advance every
/// control tick, including ticks on which no command is emitted.
#[derive(Debug, Clone, Copy)]
pub struct CycleInput<'a> {
    /// This cycle's telemetry snapshot.
    pub telemetry: &'a SteerTelemetry,
    /// Externally computed steering request, normalized (nominally
    /// `[-1.0, 1.0]`; scaled by the configured request gain).
    pub requested_steer: f32,
    /// External enable signal (actuation authority requested).
    pub enabled: bool,
    /// Monotonic control-cycle index.
    pub cycle: u64,
}

/// Cycle-driven steering command scheduler.
///
/// Once per control cycle, [`run_cycle`](Self::run_cycle) gates emission
/// to the configured cadence, consults the acceptance echo, rate-limits
/// the request and emits zero or one command. All cross-cycle state is
/// owned here; cycles must be processed strictly in order.
#[derive(Debug, Clone)]
pub struct CommandScheduler<P> {
    limits: SteerLimits,
    echo: EchoTracker,
    state: ControllerState,
    actuation: ActuationState,
    _payload: PhantomData<P>,
}

/// The steering instantiation of the scheduler.
pub type SteeringScheduler = CommandScheduler<crate::command::SteeringCommand>;

impl<P: CommandPayload> CommandScheduler<P> {
    /// Create a scheduler for one control session.
    ///
    /// # Errors
    ///
    /// Returns a [`LimitsError`] when the limit set fails validation.
    /// Configuration is checked here and nowhere else.
    pub fn new(limits: SteerLimits) -> Result<Self, LimitsError> {
        limits.validate()?;
        Ok(Self {
            limits,
            echo: EchoTracker::new(),
            state: ControllerState::default(),
            actuation: ActuationState::Idle,
            _payload: PhantomData,
        })
    }

    /// Run one control cycle, emitting zero or one command.
    ///
    /// The emitted command and the updated internal state are fully
    /// determined by this cycle's input and the previous cycle's state.
    pub fn run_cycle(&mut self, input: &CycleInput<'_>) -> Option<P> {
        self.update_actuation(input);

        if input.cycle % u64::from(self.limits.command_interval) != 0 {
            return None;
        }

        // The cadence gate runs first: a confirmation that lands between
        // command slots must still read as new at the next slot.
        if self.echo.observe(input.telemetry.last_accepted_seq) == SyncState::Pending {
            trace!(cycle = input.cycle, "previous command unconfirmed, skipping");
            return None;
        }

        let requested = match self.actuation {
            ActuationState::Active => self.scale_request(input.requested_steer),
            ActuationState::Idle => 0,
        };

        let limited = apply_torque_limits(
            requested,
            self.state.last_applied,
            input.telemetry.driver_torque,
            &self.limits,
        );
        let seq = next_seq(input.telemetry.last_accepted_seq);

        self.state.last_applied = limited.applied;
        self.state.rate_limited = limited.was_limited;

        Some(P::assemble(CommandFrame {
            value: limited.applied,
            seq,
            enabled: self.actuation == ActuationState::Active,
        }))
    }

    /// Current actuation authority.
    pub fn actuation(&self) -> ActuationState {
        self.actuation
    }

    /// Torque commanded by the most recent emission, native units.
    pub fn applied_torque(&self) -> i32 {
        self.state.last_applied
    }

    /// The most recent applied torque mapped back into request units.
    pub fn applied_ratio(&self) -> f32 {
        self.state.last_applied as f32 / self.limits.request_gain
    }

    /// Whether the most recent emission was rate limited.
    pub fn rate_limited(&self) -> bool {
        self.state.rate_limited
    }

    /// The scheduler's persisted cross-cycle state.
    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// The validated limit set this session runs under.
    pub fn limits(&self) -> &SteerLimits {
        &self.limits
    }

    /// Restore initial session state. A permanent actuator fault requires
    /// this before actuation can resume.
    pub fn reset(&mut self) {
        self.echo.reset();
        self.state = ControllerState::default();
        self.actuation = ActuationState::Idle;
    }

    fn update_actuation(&mut self, input: &CycleInput<'_>) {
        let telemetry = input.telemetry;
        let qualified = input.enabled
            && !telemetry.faulted()
            && telemetry.vehicle_speed >= self.limits.min_steer_speed;
        let next = if qualified {
            ActuationState::Active
        } else {
            ActuationState::Idle
        };
        if next != self.actuation {
            debug!(from = ?self.actuation, to = ?next, cycle = input.cycle, "actuation state changed");
            self.actuation = next;
        }
    }

    fn scale_request(&self, request: f32) -> i32 {
        let native = request * self.limits.request_gain;
        if !native.is_finite() {
            return 0;
        }
        let cap = self.limits.max_torque as f32;
        native.round().clamp(-cap, cap) as i32
    }
}
