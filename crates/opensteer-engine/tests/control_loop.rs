//! End-to-end control-loop scenarios against a simulated safety layer.
//!
//! The safety layer accepts every command and echoes its sequence
//! identifier back in the next cycle's telemetry, unless a scenario stalls
//! or resets it.

use opensteer_engine::prelude::*;
use proptest::prelude::*;

fn test_limits() -> SteerLimits {
    SteerLimits {
        max_torque: 600,
        max_delta_per_step: 50,
        yield_delta_per_step: 100,
        driver_override_threshold: 150,
        command_interval: 1,
        min_steer_speed: 3.0,
        request_gain: 500.0,
    }
}

fn scheduler() -> SteeringScheduler {
    match SteeringScheduler::new(test_limits()) {
        Ok(scheduler) => scheduler,
        Err(err) => panic!("test limits must validate: {err}"),
    }
}

fn telemetry(accepted: u8) -> SteerTelemetry {
    SteerTelemetry {
        vehicle_speed: 15.0,
        last_accepted_seq: accepted,
        ..Default::default()
    }
}

/// Drive `cycles` ticks with an immediately-confirming safety layer,
/// returning the emitted commands.
fn drive(
    scheduler: &mut SteeringScheduler,
    accepted: &mut u8,
    cycle: &mut u64,
    cycles: u64,
    requested_steer: f32,
    enabled: bool,
) -> Vec<SteeringCommand> {
    let mut emitted = Vec::new();
    for _ in 0..cycles {
        let snapshot = telemetry(*accepted);
        let command = scheduler.run_cycle(&CycleInput {
            telemetry: &snapshot,
            requested_steer,
            enabled,
            cycle: *cycle,
        });
        *cycle += 1;
        if let Some(command) = command {
            assert_eq!(command.counter, (*accepted + 1) % SEQ_SLOTS);
            *accepted = command.counter;
            emitted.push(command);
        }
    }
    emitted
}

#[test]
fn disable_ramps_to_neutral_in_bounded_steps() {
    let mut scheduler = scheduler();
    let mut accepted = 0;
    let mut cycle = 0;

    // Converge to full torque while engaged.
    drive(&mut scheduler, &mut accepted, &mut cycle, 12, 1.0, true);
    assert_eq!(scheduler.applied_torque(), 500);

    // Disengage: exactly ten disabled commands ramp 500 -> 0 at 50/step.
    let ramp = drive(&mut scheduler, &mut accepted, &mut cycle, 10, 1.0, false);
    assert_eq!(ramp.len(), 10);
    let values: Vec<i32> = ramp.iter().map(|c| c.torque).collect();
    assert_eq!(values, vec![450, 400, 350, 300, 250, 200, 150, 100, 50, 0]);
    assert!(ramp.iter().all(|c| !c.active));

    // Converged: further disabled commands hold neutral.
    let settled = drive(&mut scheduler, &mut accepted, &mut cycle, 3, 1.0, false);
    assert!(settled.iter().all(|c| c.torque == 0));
}

#[test]
fn fault_degrades_to_disabled_ramp() {
    let mut scheduler = scheduler();
    let mut accepted = 0;
    let mut cycle = 0;

    drive(&mut scheduler, &mut accepted, &mut cycle, 6, 0.3, true);
    assert_eq!(scheduler.applied_torque(), 150);

    let mut snapshot = telemetry(accepted);
    snapshot.fault_temporary = true;
    let command = scheduler.run_cycle(&CycleInput {
        telemetry: &snapshot,
        requested_steer: 0.3,
        enabled: true,
        cycle,
    });
    let Some(command) = command else {
        panic!("confirmed cycle must emit");
    };
    assert!(!command.active);
    assert_eq!(command.torque, 100);
    assert_eq!(scheduler.actuation(), ActuationState::Idle);
}

#[test]
fn stalled_echo_suppresses_emission() {
    let mut scheduler = scheduler();
    let mut accepted = 0;
    let mut cycle = 0;

    drive(&mut scheduler, &mut accepted, &mut cycle, 4, 0.5, true);

    // One more confirmed command, whose own echo then never arrives.
    let snapshot = telemetry(accepted);
    let last = scheduler.run_cycle(&CycleInput {
        telemetry: &snapshot,
        requested_steer: 0.5,
        enabled: true,
        cycle,
    });
    cycle += 1;
    let Some(last) = last else {
        panic!("confirmed cycle must emit");
    };
    let held = scheduler.applied_torque();

    // The safety layer stops echoing: three cycles, zero commands, state
    // held.
    for _ in 0..3 {
        let command = scheduler.run_cycle(&CycleInput {
            telemetry: &snapshot,
            requested_steer: 0.5,
            enabled: true,
            cycle,
        });
        cycle += 1;
        assert_eq!(command, None);
        assert_eq!(scheduler.applied_torque(), held);
    }

    // Echo resumes and emission continues where it left off.
    accepted = last.counter;
    let resumed = drive(&mut scheduler, &mut accepted, &mut cycle, 1, 0.5, true);
    assert_eq!(resumed.len(), 1);
}

#[test]
fn reengagement_follows_accepted_counter_after_gap() {
    let mut scheduler = scheduler();
    let mut accepted = 0;
    let mut cycle = 0;

    drive(&mut scheduler, &mut accepted, &mut cycle, 3, 0.2, true);

    // One final confirmed command; its echo is lost in the disengagement
    // and the safety layer later comes back at an unrelated counter value.
    let snapshot = telemetry(accepted);
    let final_cmd = scheduler.run_cycle(&CycleInput {
        telemetry: &snapshot,
        requested_steer: 0.2,
        enabled: true,
        cycle,
    });
    cycle += 1;
    assert!(final_cmd.is_some());

    for _ in 0..5 {
        let command = scheduler.run_cycle(&CycleInput {
            telemetry: &snapshot,
            requested_steer: 0.0,
            enabled: false,
            cycle,
        });
        cycle += 1;
        assert_eq!(command, None);
    }

    let reset_to = (accepted + 2) % SEQ_SLOTS;
    let snapshot = telemetry(reset_to);
    let command = scheduler.run_cycle(&CycleInput {
        telemetry: &snapshot,
        requested_steer: 0.2,
        enabled: true,
        cycle,
    });
    assert_eq!(
        command.map(|c| c.counter),
        Some((reset_to + 1) % SEQ_SLOTS)
    );
}

#[test]
fn constant_request_converges_and_holds() {
    let mut scheduler = scheduler();
    let mut accepted = 0;
    let mut cycle = 0;

    let emitted = drive(&mut scheduler, &mut accepted, &mut cycle, 30, 0.5, true);
    assert_eq!(scheduler.applied_torque(), 250);

    // Every step bounded, and once converged the value never moves.
    let mut previous = 0;
    for command in &emitted {
        assert!((command.torque - previous).abs() <= 50);
        previous = command.torque;
    }
    let tail = drive(&mut scheduler, &mut accepted, &mut cycle, 5, 0.5, true);
    assert!(tail.iter().all(|c| c.torque == 250));
    assert!(!scheduler.rate_limited());
}

#[test]
fn cadence_thins_emission_rate() {
    let mut limits = test_limits();
    limits.command_interval = 4;
    let Ok(mut scheduler) = SteeringScheduler::new(limits) else {
        panic!("test limits must validate");
    };
    let mut accepted = 0;
    let mut cycle = 0;

    let emitted = drive(&mut scheduler, &mut accepted, &mut cycle, 16, 0.5, true);
    assert_eq!(emitted.len(), 4);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Whatever the echo latency, a command is only ever emitted once the
    /// previous one has been confirmed.
    #[test]
    fn at_most_one_unconfirmed_command(latencies in proptest::collection::vec(0u8..4, 40)) {
        let mut scheduler = scheduler();
        let mut accepted: u8 = 0;
        let mut outstanding: Option<(u8, u8)> = None;
        let mut latencies = latencies.into_iter();

        for cycle in 0..200u64 {
            if let Some((seq, remaining)) = outstanding {
                if remaining == 0 {
                    accepted = seq;
                    outstanding = None;
                } else {
                    outstanding = Some((seq, remaining - 1));
                }
            }

            let snapshot = telemetry(accepted);
            let command = scheduler.run_cycle(&CycleInput {
                telemetry: &snapshot,
                requested_steer: 0.8,
                enabled: true,
                cycle,
            });

            if let Some(command) = command {
                prop_assert!(outstanding.is_none(), "emitted while unconfirmed");
                prop_assert_eq!(command.counter, (accepted + 1) % SEQ_SLOTS);
                let latency = latencies.next().unwrap_or(1);
                outstanding = Some((command.counter, latency));
            }
        }
    }
}
