//! Unit tests for cc-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CallerId, HandlerId};

    #[test]
    fn index_roundtrip() {
        let id = CallerId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(CallerId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn next_is_monotonic() {
        assert_eq!(CallerId(0).next(), CallerId(1));
        assert!(HandlerId(3) < HandlerId(3).next());
    }

    #[test]
    fn display() {
        assert_eq!(CallerId(7).to_string(), "CallerId(7)");
        assert_eq!(HandlerId(2).to_string(), "HandlerId(2)");
    }
}

#[cfg(test)]
mod time {
    use crate::{CoreError, SimClock, SimTime};

    #[test]
    fn total_order() {
        assert!(SimTime(1.0) < SimTime(1.5));
        assert_eq!(SimTime(2.0), SimTime(2.0));
        assert_eq!(SimTime(3.0).max(SimTime(-1.0)), SimTime(3.0));
    }

    #[test]
    fn arithmetic() {
        assert_eq!(SimTime(5.0) + 2.5, SimTime(7.5));
        assert_eq!(SimTime(5.0) - SimTime(1.0), 4.0);
        assert_eq!(SimTime(10.0).since(SimTime(4.0)), 6.0);
    }

    #[test]
    fn clock_moves_forward_only() {
        let mut clock = SimClock::new(SimTime(0.0));
        clock.advance_to(SimTime(3.0)).unwrap();
        clock.advance_to(SimTime(3.0)).unwrap();
        assert_eq!(clock.now(), SimTime(3.0));

        let err = clock.advance_to(SimTime(2.0)).unwrap_err();
        assert!(matches!(err, CoreError::BackInTime { .. }));
        assert_eq!(clock.now(), SimTime(3.0));
    }

    #[test]
    fn clock_rejects_non_finite() {
        let mut clock = SimClock::new(SimTime(0.0));
        assert!(clock.advance_to(SimTime(f64::INFINITY)).is_err());
        assert!(clock.advance_to(SimTime(f64::NAN)).is_err());
    }

    #[test]
    fn wall_clock_display() {
        let mut clock = SimClock::new(SimTime(0.0));
        clock.advance_to(SimTime(270.0)).unwrap();
        assert_eq!(clock.wall_hm(8), (12, 30));
        assert_eq!(clock.elapsed(), 270.0);
    }
}

#[cfg(test)]
mod rng {
    use crate::RunRng;

    #[test]
    fn same_run_same_stream() {
        let mut a = RunRng::for_run(42, 3);
        let mut b = RunRng::for_run(42, 3);
        for _ in 0..100 {
            assert_eq!(a.unit().to_bits(), b.unit().to_bits());
        }
    }

    #[test]
    fn different_runs_diverge() {
        let mut a = RunRng::for_run(42, 0);
        let mut b = RunRng::for_run(42, 1);
        let xs: Vec<u64> = (0..8).map(|_| a.unit().to_bits()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.unit().to_bits()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn uniform_respects_bounds() {
        let mut rng = RunRng::new(7);
        for _ in 0..1_000 {
            let x = rng.uniform(2.0, 5.0);
            assert!((2.0..=5.0).contains(&x), "got {x}");
        }
        assert_eq!(rng.uniform(5.0, 5.0), 5.0);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = RunRng::new(1);
        assert!((0..100).all(|_| rng.gen_bool(1.0)));
        assert!((0..100).all(|_| !rng.gen_bool(0.0)));
        // Out-of-range probabilities are clamped, not rejected.
        assert!(rng.gen_bool(1.5));
    }
}

#[cfg(test)]
mod profile {
    use crate::{PiecewiseRate, RateSegment, StaffingChange, StaffingPlan};

    #[test]
    fn call_center_day_breakpoints() {
        let p = PiecewiseRate::call_center_day();
        assert_eq!(p.mean_at(0.0), 2.0);
        assert_eq!(p.mean_at(59.9), 2.0);
        assert_eq!(p.mean_at(60.0), 1.5);
        assert_eq!(p.mean_at(200.0), 1.0);
        assert_eq!(p.mean_at(300.0), 1.5);
        assert_eq!(p.mean_at(479.0), 2.0);
        assert_eq!(p.mean_at(480.0), 3.0);
        assert_eq!(p.mean_at(10_000.0), 3.0);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn constant_profile() {
        let p = PiecewiseRate::constant(1.0);
        assert_eq!(p.mean_at(0.0), 1.0);
        assert_eq!(p.mean_at(1e6), 1.0);
    }

    #[test]
    fn rejects_non_positive_mean() {
        let p = PiecewiseRate {
            segments: vec![RateSegment { until: 10.0, mean_inter_arrival: 0.0 }],
            after: 1.0,
        };
        assert!(p.validate().is_err());
        assert!(PiecewiseRate::constant(-1.0).validate().is_err());
    }

    #[test]
    fn rejects_unsorted_breakpoints() {
        let p = PiecewiseRate {
            segments: vec![
                RateSegment { until: 60.0, mean_inter_arrival: 1.0 },
                RateSegment { until: 30.0, mean_inter_arrival: 1.0 },
            ],
            after: 1.0,
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn staffing_lookup() {
        let plan = StaffingPlan::new(vec![
            StaffingChange { at: 270.0, handlers: 3 },
            StaffingChange { at: 0.0, handlers: 5 },
        ]);
        assert_eq!(plan.changes[0].at, 0.0);
        assert_eq!(plan.handlers_at(0.0, 2), 5);
        assert_eq!(plan.handlers_at(269.0, 2), 5);
        assert_eq!(plan.handlers_at(270.0, 2), 3);
        assert_eq!(StaffingPlan::default().handlers_at(100.0, 2), 2);
    }

    #[test]
    fn staffing_outside_horizon_rejected() {
        let plan = StaffingPlan::new(vec![StaffingChange { at: 600.0, handlers: 1 }]);
        assert!(plan.validate(0.0, 600.0).is_err());
        assert!(plan.validate(0.0, 601.0).is_ok());
    }
}

#[cfg(test)]
mod config {
    use crate::{ConfigError, SimConfig, TimeRange};

    #[test]
    fn default_is_valid() {
        let c = SimConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.sim_duration(), 600.0);
        assert_eq!(c.mean_call_duration(), 3.5);
    }

    #[test]
    fn non_positive_duration() {
        let c = SimConfig { end_time: 0.0, ..SimConfig::default() };
        assert!(matches!(c.validate(), Err(ConfigError::Duration { .. })));
    }

    #[test]
    fn negative_start_rejected() {
        let c = SimConfig { start_time: -10.0, end_time: 10.0, ..SimConfig::default() };
        assert_eq!(c.validate(), Err(ConfigError::Duration { start: -10.0, end: 10.0 }));
        let c = SimConfig { start_time: 30.0, end_time: 600.0, ..SimConfig::default() };
        assert!(c.validate().is_ok());
    }

    #[test]
    fn retry_probability_bounds() {
        let c = SimConfig { retry_probability: 1.2, ..SimConfig::default() };
        assert_eq!(c.validate(), Err(ConfigError::RetryProbability(1.2)));
        let c = SimConfig { retry_probability: -0.1, ..SimConfig::default() };
        assert!(c.validate().is_err());
        let c = SimConfig { retry_probability: 1.0, ..SimConfig::default() };
        assert!(c.validate().is_ok());
    }

    #[test]
    fn inverted_service_range() {
        let c = SimConfig { service_time_range: TimeRange::new(5.0, 2.0), ..SimConfig::default() };
        assert!(matches!(c.validate(), Err(ConfigError::Range { what: "service time", .. })));
    }

    #[test]
    fn zero_variance_service_is_valid() {
        let c = SimConfig { service_time_range: TimeRange::fixed(5.0), ..SimConfig::default() };
        assert!(c.validate().is_ok());
    }

    #[test]
    fn patience_must_be_positive() {
        let c = SimConfig { abandonment_threshold: Some(0.0), ..SimConfig::default() };
        assert_eq!(c.validate(), Err(ConfigError::AbandonmentThreshold(0.0)));
        let c = SimConfig { abandonment_threshold: None, ..SimConfig::default() };
        assert!(c.validate().is_ok());
    }

    #[test]
    fn zero_queue_is_valid() {
        let c = SimConfig { max_queue_size: Some(0), ..SimConfig::default() };
        assert!(c.validate().is_ok());
    }

    #[test]
    fn zero_runs_rejected() {
        let c = SimConfig { number_of_runs: 0, ..SimConfig::default() };
        assert_eq!(c.validate(), Err(ConfigError::NoRuns));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_uses_defaults() {
        let c: SimConfig =
            serde_json::from_str(r#"{ "number_of_handlers": 7, "max_queue_size": null }"#).unwrap();
        assert_eq!(c.number_of_handlers, 7);
        assert_eq!(c.max_queue_size, None);
        assert_eq!(c.end_time, 600.0);
    }
}
