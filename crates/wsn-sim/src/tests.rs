//! Integration tests for wsn-sim.

#[cfg(test)]
mod helpers {
    use wsn_core::{Point, SimulationParameters, SimulationScenario, StopCondition};

    pub fn params(
        radius:    f64,
        battery:   u32,
        interval:  u32,
        condition: StopCondition,
        max_ticks: u64,
    ) -> SimulationParameters {
        SimulationParameters::new(radius, battery, interval, condition, 0.0, max_ticks)
    }

    /// One target with one sensor sitting on it.
    pub fn single_pair() -> SimulationScenario {
        SimulationScenario::new(vec![Point::new(0.5, 0.5)], vec![Point::new(0.5, 0.5)])
    }

    /// One target between two sensors, both in range at r = 0.1.
    pub fn shared_target() -> SimulationScenario {
        SimulationScenario::new(
            vec![Point::new(0.5, 0.5)],
            vec![Point::new(0.45, 0.5), Point::new(0.55, 0.5)],
        )
    }
}

// ── Tick semantics ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tick_loop {
    use wsn_core::{SensorState, StopCondition, Tick};
    use wsn_schedule::GreedyReshuffle;

    use super::helpers::{params, shared_target, single_pair};
    use crate::{NoopObserver, SimBuilder, StopReason};

    #[test]
    fn lone_sensor_dies_after_its_battery() {
        let mut sim = SimBuilder::new(
            params(0.2, 3, 1, StopCondition::ZeroCoverage, 100),
            single_pair(),
            GreedyReshuffle,
        )
        .build()
        .unwrap();
        assert_eq!(sim.run(&mut NoopObserver), Some(StopReason::ZeroCoverage));

        let states = sim.states();
        assert_eq!(states.len(), 4);
        let batteries: Vec<u32> = states.iter().map(|s| s.sensor_battery_levels[0]).collect();
        assert_eq!(batteries, vec![3, 2, 1, 0]);
        for s in &states[..3] {
            assert_eq!(s.sensor_states[0], SensorState::On);
            assert!(s.all_targets_covered);
        }
        let last = &states[3];
        assert_eq!(last.tick, Tick(3));
        assert_eq!(last.sensor_states[0], SensorState::Dead);
        assert_eq!(last.covered_target_count, 0);
        assert_eq!(last.coverage_percentage, 0.0);
    }

    #[test]
    fn greedy_alternates_once_batteries_tie() {
        let mut sim = SimBuilder::new(
            params(0.1, 0, 1, StopCondition::ZeroCoverage, 100),
            shared_target(),
            GreedyReshuffle,
        )
        .initial_batteries(vec![2, 5])
        .build()
        .unwrap();
        sim.run(&mut NoopObserver);

        use SensorState::{Dead, Off, On};
        let states: Vec<_> = sim.states().iter().map(|s| s.sensor_states.clone()).collect();
        assert_eq!(
            states,
            vec![
                vec![Off, On],   // T0: 2 vs 5
                vec![Off, On],   // T1: 2 vs 4
                vec![Off, On],   // T2: 2 vs 3
                vec![On, Off],   // T3: 2 vs 2, lowest index wins
                vec![Off, On],   // T4: 1 vs 2
                vec![On, Off],   // T5: 1 vs 1
                vec![Dead, On],  // T6
                vec![Dead, Dead],
            ]
        );
        assert_eq!(sim.stop_reason(), Some(StopReason::ZeroCoverage));
        assert_eq!(sim.tick(), Tick(7));
    }

    #[test]
    fn battery_drains_only_while_on() {
        let mut sim = SimBuilder::new(
            params(0.1, 0, 1, StopCondition::ZeroCoverage, 100),
            shared_target(),
            GreedyReshuffle,
        )
        .initial_batteries(vec![2, 5])
        .build()
        .unwrap();
        sim.run(&mut NoopObserver);

        for pair in sim.states().windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            for i in 0..prev.sensor_count() {
                let spent = u32::from(prev.sensor_states[i].is_on());
                assert_eq!(next.sensor_battery_levels[i], prev.sensor_battery_levels[i] - spent);
            }
        }
    }

    #[test]
    fn zero_battery_sensor_starts_dead() {
        let sim = SimBuilder::new(
            params(0.1, 0, 1, StopCondition::ZeroCoverage, 100),
            shared_target(),
            GreedyReshuffle,
        )
        .initial_batteries(vec![0, 3])
        .build()
        .unwrap();
        let s0 = &sim.states()[0];
        assert_eq!(s0.sensor_states, vec![SensorState::Dead, SensorState::On]);
    }

    #[test]
    fn max_ticks_bounds_the_history() {
        let mut sim = SimBuilder::new(
            params(0.1, 1000, 1, StopCondition::Manual, 5),
            single_pair(),
            GreedyReshuffle,
        )
        .build()
        .unwrap();
        assert_eq!(sim.run(&mut NoopObserver), Some(StopReason::MaxTicks));
        assert_eq!(sim.states().len(), 6);
        assert_eq!(sim.tick(), Tick(5));
    }

    #[test]
    fn max_ticks_zero_stops_at_initialization() {
        let sim = SimBuilder::new(
            params(0.1, 10, 1, StopCondition::Manual, 0),
            single_pair(),
            GreedyReshuffle,
        )
        .build()
        .unwrap();
        assert!(sim.is_finished());
        assert_eq!(sim.stop_reason(), Some(StopReason::MaxTicks));
        assert_eq!(sim.states().len(), 1);
    }

    #[test]
    fn step_after_finish_returns_none() {
        let mut sim = SimBuilder::new(
            params(0.1, 1, 1, StopCondition::ZeroCoverage, 100),
            single_pair(),
            GreedyReshuffle,
        )
        .build()
        .unwrap();
        assert_eq!(sim.step(&mut NoopObserver).map(|s| s.tick), Some(Tick(1)));
        assert!(sim.is_finished());
        assert!(sim.step(&mut NoopObserver).is_none());
        assert_eq!(sim.states().len(), 2);
    }
}

// ── Stop rules ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stop_rules {
    use wsn_core::{Point, SimulationParameters, SimulationScenario, SimulationState, StopCondition, TargetId, Tick};
    use wsn_schedule::GreedyReshuffle;

    use super::helpers::params;
    use crate::{NoopObserver, SimBuilder, StopEvaluator, StopReason};

    #[test]
    fn no_targets_stops_below_threshold_at_tick_zero() {
        let scenario = SimulationScenario::new(vec![], vec![Point::new(0.5, 0.5)]);
        let p = SimulationParameters::new(0.1, 5, 1, StopCondition::CoverageBelowThreshold, 0.5, 100);
        let sim = SimBuilder::new(p, scenario, GreedyReshuffle).build().unwrap();
        let s0 = &sim.states()[0];
        assert_eq!(s0.coverage_percentage, 0.0);
        assert_eq!(sim.stop_reason(), Some(StopReason::CoverageBelowThreshold));
    }

    #[test]
    fn no_sensors_stops_at_tick_zero() {
        let scenario = SimulationScenario::new(vec![Point::new(0.5, 0.5)], vec![]);
        let sim = SimBuilder::new(params(0.1, 5, 1, StopCondition::Manual, 100), scenario, GreedyReshuffle)
            .build()
            .unwrap();
        assert_eq!(sim.stop_reason(), Some(StopReason::AllSensorsDead));
        assert_eq!(sim.states().len(), 1);
    }

    #[test]
    fn idle_sensors_run_to_max_ticks_without_targets() {
        let scenario = SimulationScenario::new(vec![], vec![Point::new(0.5, 0.5)]);
        let mut sim = SimBuilder::new(params(0.1, 2, 1, StopCondition::Manual, 4), scenario, GreedyReshuffle)
            .build()
            .unwrap();
        assert_eq!(sim.run(&mut NoopObserver), Some(StopReason::MaxTicks));
        assert_eq!(sim.states().len(), 5);
        assert!(sim.states().iter().all(|s| s.coverage_percentage == 0.0));
        let last = sim.states().last().unwrap();
        assert_eq!(last.sensor_battery_levels, vec![2]);
    }

    #[test]
    fn any_coverage_lost_names_the_target() {
        let scenario = SimulationScenario::new(
            vec![Point::new(0.2, 0.5), Point::new(0.8, 0.5), Point::new(0.5, 0.9)],
            vec![Point::new(0.2, 0.5), Point::new(0.8, 0.5)],
        );
        let mut sim = SimBuilder::new(
            params(0.1, 0, 1, StopCondition::AnyCoverageLost, 100),
            scenario,
            GreedyReshuffle,
        )
        .initial_batteries(vec![10, 2])
        .build()
        .unwrap();
        let reason = sim.run(&mut NoopObserver);
        assert_eq!(reason, Some(StopReason::CoverageLost { target: TargetId(1) }));
        assert_eq!(sim.tick(), Tick(2));
    }

    #[test]
    fn baseline_is_the_first_evaluated_state() {
        let p = params(0.1, 5, 1, StopCondition::AnyCoverageLost, 100);
        let mut eval = StopEvaluator::new(&p);
        assert_eq!(eval.baseline(), None);

        let first = SimulationState::new(
            Tick(0),
            vec![wsn_core::SensorState::On],
            vec![5],
            vec![true, false],
        );
        assert_eq!(eval.evaluate(&first), None);
        assert_eq!(eval.baseline(), Some(&[true, false][..]));

        // Later states never move the baseline.
        let later = SimulationState::new(
            Tick(1),
            vec![wsn_core::SensorState::On],
            vec![4],
            vec![true, true],
        );
        assert_eq!(eval.evaluate(&later), None);
        assert_eq!(eval.baseline(), Some(&[true, false][..]));
    }

    #[test]
    fn threshold_is_strict() {
        let p = SimulationParameters::new(0.1, 5, 1, StopCondition::CoverageBelowThreshold, 0.5, 100);
        let mut eval = StopEvaluator::new(&p);
        let half = SimulationState::new(
            Tick(1),
            vec![wsn_core::SensorState::On],
            vec![4],
            vec![true, false],
        );
        assert_eq!(eval.evaluate(&half), None);
        let none = SimulationState::new(
            Tick(2),
            vec![wsn_core::SensorState::On],
            vec![3],
            vec![false, false],
        );
        assert_eq!(eval.evaluate(&none), Some(StopReason::CoverageBelowThreshold));
    }

    #[test]
    fn condition_precedes_all_dead() {
        let p = params(0.1, 5, 1, StopCondition::ZeroCoverage, 100);
        let mut eval = StopEvaluator::new(&p);
        let dead = SimulationState::new(
            Tick(3),
            vec![wsn_core::SensorState::Dead],
            vec![0],
            vec![false],
        );
        assert_eq!(eval.evaluate(&dead), Some(StopReason::ZeroCoverage));
    }

    #[test]
    fn stop_reason_serializes_tagged() {
        let json = serde_json::to_string(&StopReason::CoverageLost { target: TargetId(4) }).unwrap();
        assert_eq!(json, r#"{"reason":"coverage_lost","target":4}"#);
        let json = serde_json::to_string(&StopReason::MaxTicks).unwrap();
        assert_eq!(json, r#"{"reason":"max_ticks"}"#);
    }
}

// ── Invariants and determinism ────────────────────────────────────────────────

#[cfg(test)]
mod invariants {
    use wsn_core::{SensorState, SimulationScenario, StopCondition, Tick};
    use wsn_network::compute_coverage;
    use wsn_schedule::{GreedyReshuffle, MinimalCoverReshuffle, ReshufflePolicy};

    use super::helpers::params;
    use crate::{NoopObserver, SimBuilder, Simulation};

    fn random_run<P: ReshufflePolicy>(policy: P, seed: u64) -> Simulation<P> {
        let scenario = SimulationScenario::random(30, 40, seed);
        let mut sim = SimBuilder::new(params(0.15, 10, 2, StopCondition::ZeroCoverage, 500), scenario, policy)
            .build()
            .unwrap();
        sim.run(&mut NoopObserver);
        sim
    }

    fn check<P: ReshufflePolicy>(sim: &Simulation<P>) {
        let states = sim.states();
        assert!(states.len() as u64 <= sim.params.max_ticks + 1);
        for (i, s) in states.iter().enumerate() {
            assert_eq!(s.tick, Tick(i as u64));
            for (state, &battery) in s.sensor_states.iter().zip(&s.sensor_battery_levels) {
                assert_eq!(state.is_dead(), battery == 0);
            }
            let active: Vec<_> = s
                .sensor_states
                .iter()
                .zip(&sim.sensors.position)
                .filter(|(st, _)| st.is_on())
                .map(|(_, &p)| p)
                .collect();
            assert_eq!(
                s.is_target_covered,
                compute_coverage(&active, sim.params.sensor_radius, &sim.targets)
            );
            let covered = s.is_target_covered.iter().filter(|&&c| c).count();
            assert_eq!(s.covered_target_count as usize, covered);
            assert!((0.0..=1.0).contains(&s.coverage_percentage));
        }
        for pair in states.windows(2) {
            for i in 0..pair[0].sensor_count() {
                assert!(pair[1].sensor_battery_levels[i] <= pair[0].sensor_battery_levels[i]);
                if pair[0].sensor_states[i] == SensorState::Dead {
                    assert_eq!(pair[1].sensor_states[i], SensorState::Dead);
                }
            }
        }
        assert!(sim.is_finished());
    }

    #[test]
    fn greedy_run_holds_invariants() {
        check(&random_run(GreedyReshuffle, 7));
    }

    #[test]
    fn minimal_cover_run_holds_invariants() {
        check(&random_run(MinimalCoverReshuffle, 7));
    }

    #[test]
    fn identical_inputs_give_identical_histories() {
        let a = random_run(GreedyReshuffle, 11);
        let b = random_run(GreedyReshuffle, 11);
        assert_eq!(a.states(), b.states());
        assert_eq!(a.stop_reason(), b.stop_reason());
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use wsn_core::{SimulationState, StopCondition, Tick};
    use wsn_schedule::{GreedyReshuffle, ReshuffleOutcome};

    use super::helpers::{params, single_pair};
    use crate::{SimBuilder, SimObserver, StopReason};

    #[derive(Default)]
    struct Recorder {
        initial:    usize,
        starts:     usize,
        ticks:      Vec<Tick>,
        reshuffles: Vec<Tick>,
        stops:      Vec<(Tick, StopReason)>,
        cancel_at:  Option<usize>,
    }

    impl SimObserver for Recorder {
        fn on_run_start(&mut self, history: &[SimulationState]) {
            self.initial = history.len();
            self.starts += 1;
        }
        fn on_reshuffle(&mut self, tick: Tick, _outcome: &ReshuffleOutcome) {
            self.reshuffles.push(tick);
        }
        fn on_tick_end(&mut self, state: &SimulationState) {
            self.ticks.push(state.tick);
        }
        fn on_stop(&mut self, final_tick: Tick, reason: StopReason) {
            self.stops.push((final_tick, reason));
        }
        fn cancel_requested(&mut self) -> bool {
            self.cancel_at.is_some_and(|n| self.ticks.len() >= n)
        }
    }

    #[test]
    fn hooks_fire_in_order() {
        let mut sim = SimBuilder::new(
            params(0.1, 100, 3, StopCondition::Manual, 7),
            single_pair(),
            GreedyReshuffle,
        )
        .build()
        .unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec);

        assert_eq!(rec.initial, 1);
        assert_eq!(rec.ticks, (1..=7).map(Tick).collect::<Vec<_>>());
        assert_eq!(rec.reshuffles, vec![Tick(3), Tick(6)]);
        assert_eq!(rec.stops, vec![(Tick(7), StopReason::MaxTicks)]);
    }

    #[test]
    fn cancellation_pauses_and_resumes() {
        let build = || {
            SimBuilder::new(params(0.1, 5, 1, StopCondition::ZeroCoverage, 100), single_pair(), GreedyReshuffle)
                .build()
                .unwrap()
        };
        let mut sim = build();
        let mut rec = Recorder { cancel_at: Some(2), ..Default::default() };
        assert_eq!(sim.run(&mut rec), None);
        assert_eq!(sim.states().len(), 3);
        assert!(!sim.is_finished());

        let mut rest = Recorder::default();
        assert_eq!(sim.run(&mut rest), Some(StopReason::ZeroCoverage));
        assert_eq!(rest.initial, 3);

        let mut whole = build();
        whole.run(&mut Recorder::default());
        assert_eq!(sim.states(), whole.states());
    }

    #[test]
    fn stepping_announces_tick_zero_once() {
        let mut sim = SimBuilder::new(
            params(0.1, 100, 3, StopCondition::Manual, 7),
            single_pair(),
            GreedyReshuffle,
        )
        .build()
        .unwrap();
        let mut rec = Recorder::default();
        for _ in 0..4 {
            sim.step(&mut rec);
        }

        assert_eq!(rec.starts, 1);
        assert_eq!(rec.initial, 1);
        assert_eq!(rec.ticks, (1..=4).map(Tick).collect::<Vec<_>>());
        assert_eq!(rec.reshuffles, vec![Tick(3)]);
    }

    #[test]
    fn stepping_a_run_finished_at_tick_zero_still_announces_it() {
        let mut sim = SimBuilder::new(
            params(0.1, 100, 1, StopCondition::Manual, 0),
            single_pair(),
            GreedyReshuffle,
        )
        .build()
        .unwrap();
        let mut rec = Recorder::default();
        assert!(sim.step(&mut rec).is_none());
        assert_eq!(rec.starts, 1);
        assert_eq!(rec.initial, 1);
        assert!(rec.ticks.is_empty());
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use wsn_core::{SimulationScenario, StopCondition};
    use wsn_schedule::GreedyReshuffle;

    use super::helpers::{params, shared_target};
    use crate::{SimBuilder, SimError};

    #[test]
    fn battery_count_mismatch_errors() {
        let err = SimBuilder::new(params(0.1, 5, 1, StopCondition::Manual, 10), shared_target(), GreedyReshuffle)
            .initial_batteries(vec![1, 2, 3])
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::CountMismatch { expected: 2, got: 3, .. }));
    }

    #[test]
    fn invalid_radius_is_validation_error() {
        let err = SimBuilder::new(params(0.0, 5, 1, StopCondition::Manual, 10), shared_target(), GreedyReshuffle)
            .build()
            .err()
            .unwrap();
        assert!(err.is_validation());
    }

    #[test]
    fn empty_scenario_is_validation_error() {
        let err = SimBuilder::new(
            params(0.1, 5, 1, StopCondition::Manual, 10),
            SimulationScenario::default(),
            GreedyReshuffle,
        )
        .build()
        .err()
        .unwrap();
        assert!(err.is_validation());
    }
}

// ── Manager lifecycle ─────────────────────────────────────────────────────────

#[cfg(test)]
mod manager_tests {
    use std::io::Write;

    use wsn_core::{StopCondition, Tick};
    use wsn_schedule::{MinimalCoverReshuffle, policy_by_name};

    use super::helpers::{params, single_pair};
    use crate::{Lifecycle, SimError, SimulationManager, StopReason};

    fn configured() -> SimulationManager {
        let mut m = SimulationManager::new();
        m.load_parameters(params(0.2, 3, 1, StopCondition::ZeroCoverage, 100)).unwrap();
        m.load_scenario(single_pair()).unwrap();
        m
    }

    #[test]
    fn full_run() {
        let mut m = configured();
        assert_eq!(m.lifecycle(), Lifecycle::Configured);
        m.initialize().unwrap();
        assert_eq!(m.lifecycle(), Lifecycle::Initialized);
        assert_eq!(m.simulation_states().len(), 1);

        assert_eq!(m.run().unwrap(), Some(StopReason::ZeroCoverage));
        assert_eq!(m.lifecycle(), Lifecycle::Completed);
        assert_eq!(m.current_state().map(|s| s.tick), Some(Tick(3)));
    }

    #[test]
    fn stepping_walks_the_lifecycle() {
        let mut m = configured();
        m.initialize().unwrap();
        assert_eq!(m.step().unwrap().map(|s| s.tick), Some(Tick(1)));
        assert_eq!(m.lifecycle(), Lifecycle::Running);
        m.step().unwrap();
        m.step().unwrap();
        assert_eq!(m.lifecycle(), Lifecycle::Completed);
        assert!(m.step().unwrap().is_none());
        assert_eq!(m.simulation_states().len(), 4);
    }

    #[test]
    fn run_after_completion_is_a_no_op() {
        let mut m = configured();
        m.initialize().unwrap();
        m.run().unwrap();
        let len = m.simulation_states().len();
        assert_eq!(m.run().unwrap(), Some(StopReason::ZeroCoverage));
        assert_eq!(m.simulation_states().len(), len);
    }

    #[test]
    fn missing_inputs_are_reported() {
        let mut m = SimulationManager::new();
        assert!(matches!(m.initialize(), Err(SimError::NotConfigured("parameters"))));
        m.load_parameters(params(0.1, 3, 1, StopCondition::Manual, 10)).unwrap();
        assert!(matches!(m.initialize(), Err(SimError::NotConfigured("scenario"))));
        assert!(!m.is_initialized());
    }

    #[test]
    fn run_and_step_need_initialize() {
        let mut m = configured();
        assert!(matches!(m.run(), Err(SimError::NotInitialized)));
        assert!(matches!(m.step(), Err(SimError::NotInitialized)));
        assert!(m.simulation_states().is_empty());
    }

    #[test]
    fn configuration_is_frozen_after_initialize() {
        let mut m = configured();
        m.initialize().unwrap();
        assert!(matches!(
            m.load_parameters(params(0.2, 3, 1, StopCondition::Manual, 10)),
            Err(SimError::Configuration(_))
        ));
        assert!(matches!(m.load_scenario(single_pair()), Err(SimError::Configuration(_))));
        assert!(matches!(
            m.set_policy(policy_by_name("greedy").unwrap()),
            Err(SimError::Configuration(_))
        ));
        assert!(matches!(m.initialize(), Err(SimError::AlreadyInitialized)));
    }

    #[test]
    fn reset_keeps_only_the_policy() {
        let mut m = configured().with_policy(MinimalCoverReshuffle);
        m.initialize().unwrap();
        m.run().unwrap();
        m.reset();
        assert_eq!(m.lifecycle(), Lifecycle::Uninitialized);
        assert!(m.simulation_states().is_empty());
        assert!(m.parameters().is_err());
        assert!(m.scenario().is_err());
        assert_eq!(m.policy_name(), "minimal-cover");
    }

    #[test]
    fn initialize_can_complete_immediately() {
        let mut m = SimulationManager::new();
        m.load_parameters(params(0.1, 3, 1, StopCondition::Manual, 0)).unwrap();
        m.load_scenario(single_pair()).unwrap();
        m.initialize().unwrap();
        assert_eq!(m.lifecycle(), Lifecycle::Completed);
        assert_eq!(m.stop_reason(), Some(StopReason::MaxTicks));
    }

    #[test]
    fn invalid_parameters_are_rejected_on_load() {
        let mut m = SimulationManager::new();
        let err = m.load_parameters(params(-1.0, 3, 1, StopCondition::Manual, 10)).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(m.lifecycle(), Lifecycle::Uninitialized);
    }

    #[test]
    fn random_scenario_is_reproducible() {
        let mut a = SimulationManager::new();
        let mut b = SimulationManager::new();
        a.load_random_scenario(10, 20, 99).unwrap();
        b.load_random_scenario(10, 20, 99).unwrap();
        assert_eq!(a.scenario().unwrap(), b.scenario().unwrap());
        assert_eq!(a.scenario().unwrap().sensor_count(), 20);
    }

    #[test]
    fn loads_combined_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "parameters": {{
                    "sensor_radious": 0.1,
                    "initial_battery_lvl": 3,
                    "reshuffle_interval": 1,
                    "stop_condition": "kZeroCoverage",
                    "max_ticks": 100
                }},
                "scenario": {{
                    "target_positions": [{{"x": 0.5, "y": 0.5}}],
                    "sensor_positions": [{{"x": 0.5, "y": 0.5}}]
                }}
            }}"#
        )
        .unwrap();

        let mut m = SimulationManager::new();
        m.load_from_json(file.path()).unwrap();
        assert_eq!(m.parameters().unwrap().initial_battery_level, 3);
        m.initialize().unwrap();
        m.run().unwrap();
        assert_eq!(m.current_state().map(|s| s.tick), Some(Tick(3)));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let mut m = SimulationManager::new();
        let err = m.load_from_json(file.path()).unwrap_err();
        assert!(err.is_parse());
        assert_eq!(m.lifecycle(), Lifecycle::Uninitialized);
    }

    #[test]
    fn separate_files_load_independently() {
        let mut pfile = tempfile::NamedTempFile::new().unwrap();
        write!(
            pfile,
            r#"{{"sensor_radius": 0.1, "initial_battery_level": 3, "reshuffle_interval": 1,
                "stop_condition": "ZeroCoverage", "max_ticks": 100}}"#
        )
        .unwrap();
        let mut sfile = tempfile::NamedTempFile::new().unwrap();
        write!(sfile, r#"{{"targets": [{{"x": 0.5, "y": 0.5}}], "sensors": [{{"x": 0.5, "y": 0.5}}]}}"#)
            .unwrap();

        let mut m = SimulationManager::new();
        m.load_parameters_from_json(pfile.path()).unwrap();
        m.load_scenario_from_json(sfile.path()).unwrap();
        m.initialize().unwrap();
        assert_eq!(m.run().unwrap(), Some(StopReason::ZeroCoverage));
    }
}

// ── Replay ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod replay_tests {
    use wsn_core::{StopCondition, Tick};

    use super::helpers::{params, single_pair};
    use crate::SimulationManager;

    #[test]
    fn seek_and_rewind() {
        let mut m = SimulationManager::new();
        m.load_parameters(params(0.2, 3, 1, StopCondition::ZeroCoverage, 100)).unwrap();
        m.load_scenario(single_pair()).unwrap();
        m.initialize().unwrap();
        m.run().unwrap();

        let mut replay = m.replay();
        assert_eq!(replay.len(), 4);
        assert!(replay.seek(Tick(2)));
        assert_eq!(replay.next().map(|s| s.tick), Some(Tick(2)));
        assert_eq!(replay.next().map(|s| s.tick), Some(Tick(3)));
        assert!(replay.next().is_none());

        assert!(!replay.seek(Tick(9)));
        replay.rewind();
        assert_eq!(replay.peek().map(|s| s.tick), Some(Tick::ZERO));
        assert_eq!(replay.count(), 4);
    }
}
