//! Unit tests for cc-schedule.

use cc_core::SimTime;

use crate::{EventQueue, ScheduleError};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Run the queue to `until`, recording `(time, label)` for every event.
fn drain(queue: &mut EventQueue<&'static str>, until: f64) -> Vec<(f64, &'static str)> {
    let mut seen = Vec::new();
    queue
        .run_until(SimTime(until), |_, t, e| {
            seen.push((t.0, e));
            Ok::<_, ScheduleError>(())
        })
        .unwrap();
    seen
}

// ── EventQueue ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod event_queue {
    use super::*;

    #[test]
    fn pops_in_time_order() {
        let mut q = EventQueue::new(SimTime::ZERO);
        q.schedule(5.0, "c").unwrap();
        q.schedule(1.0, "a").unwrap();
        q.schedule(3.0, "b").unwrap();
        assert_eq!(drain(&mut q, 100.0), vec![(1.0, "a"), (3.0, "b"), (5.0, "c")]);
    }

    #[test]
    fn ties_break_by_insertion_order() {
        let mut q = EventQueue::new(SimTime::ZERO);
        q.schedule(2.0, "first").unwrap();
        q.schedule(2.0, "second").unwrap();
        q.schedule(0.0, "now").unwrap();
        q.schedule(2.0, "third").unwrap();
        let labels: Vec<_> = drain(&mut q, 10.0).into_iter().map(|(_, e)| e).collect();
        assert_eq!(labels, ["now", "first", "second", "third"]);
    }

    #[test]
    fn events_at_or_after_horizon_are_discarded() {
        let mut q = EventQueue::new(SimTime::ZERO);
        q.schedule(9.0, "in").unwrap();
        q.schedule(10.0, "at").unwrap();
        q.schedule(12.0, "after").unwrap();
        let mut executed = Vec::new();
        let stats = q
            .run_until(SimTime(10.0), |_, _, e| {
                executed.push(e);
                Ok::<_, ScheduleError>(())
            })
            .unwrap();
        assert_eq!(executed, ["in"]);
        assert_eq!(stats.executed, 1);
        assert_eq!(stats.discarded, 2);
        assert_eq!(stats.final_time, SimTime(10.0));
        assert!(q.is_empty());
    }

    #[test]
    fn clock_ends_at_horizon_when_queue_empties_early() {
        let mut q: EventQueue<&str> = EventQueue::new(SimTime(0.0));
        q.schedule(1.0, "only").unwrap();
        drain(&mut q, 50.0);
        assert_eq!(q.now(), SimTime(50.0));
    }

    #[test]
    fn handler_can_schedule_follow_ups() {
        // A self-rescheduling generator: fires every 2 minutes.
        let mut q = EventQueue::new(SimTime::ZERO);
        q.schedule(0.0, "tick").unwrap();
        let mut times = Vec::new();
        q.run_until(SimTime(7.0), |q, t, e| {
            times.push(t.0);
            q.schedule(2.0, e)?;
            Ok::<_, ScheduleError>(())
        })
        .unwrap();
        assert_eq!(times, vec![0.0, 2.0, 4.0, 6.0]);
    }

    #[test]
    fn negative_and_non_finite_delays_rejected() {
        let mut q = EventQueue::new(SimTime::ZERO);
        assert!(matches!(q.schedule(-1.0, "x"), Err(ScheduleError::InvalidDelay(_))));
        assert!(q.schedule(f64::NAN, "x").is_err());
        assert!(q.schedule(f64::INFINITY, "x").is_err());
        assert!(q.is_empty());
    }

    #[test]
    fn schedule_at_rejects_past() {
        let mut q = EventQueue::new(SimTime(10.0));
        assert!(matches!(
            q.schedule_at(SimTime(9.0), "x"),
            Err(ScheduleError::BackInTime { .. })
        ));
        q.schedule_at(SimTime(10.0), "ok").unwrap();
        assert_eq!(q.next_time(), Some(SimTime(10.0)));
    }

    #[test]
    fn handler_error_stops_the_run() {
        #[derive(Debug)]
        struct Boom;
        impl From<ScheduleError> for Boom {
            fn from(_: ScheduleError) -> Self {
                Boom
            }
        }

        let mut q = EventQueue::new(SimTime::ZERO);
        q.schedule(1.0, "ok").unwrap();
        q.schedule(2.0, "fail").unwrap();
        q.schedule(3.0, "never").unwrap();
        let mut seen = Vec::new();
        let result = q.run_until(SimTime(10.0), |_, _, e| {
            seen.push(e);
            if e == "fail" { Err(Boom) } else { Ok(()) }
        });
        assert!(result.is_err());
        assert_eq!(seen, ["ok", "fail"]);
        assert_eq!(q.now(), SimTime(2.0));
    }

    #[test]
    fn pop_before_leaves_future_events() {
        let mut q = EventQueue::new(SimTime::ZERO);
        q.schedule(5.0, "later").unwrap();
        assert!(q.pop_before(SimTime(5.0)).unwrap().is_none());
        assert_eq!(q.len(), 1);
        assert_eq!(q.now(), SimTime::ZERO);
    }
}

// ── Property tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn execution_times_never_decrease(delays in proptest::collection::vec(0.0f64..100.0, 1..200)) {
            let mut q = EventQueue::new(SimTime::ZERO);
            for (i, d) in delays.iter().enumerate() {
                q.schedule(*d, i).unwrap();
            }
            let mut last = f64::NEG_INFINITY;
            let mut last_seq_at_time: Option<(f64, usize)> = None;
            q.run_until(SimTime(1_000.0), |_, t, i| {
                prop_assert!(t.0 >= last);
                if let Some((lt, li)) = last_seq_at_time {
                    if lt == t.0 {
                        prop_assert!(i > li, "FIFO violated at {}", t.0);
                    }
                }
                last = t.0;
                last_seq_at_time = Some((t.0, i));
                Ok(())
            })?;
        }
    }
}

// ── ArrivalProfile ────────────────────────────────────────────────────────────

#[cfg(test)]
mod profile {
    use cc_core::PiecewiseRate;

    use crate::{ArrivalProfile, FnProfile};

    #[test]
    fn piecewise_rate_is_a_profile() {
        let p = PiecewiseRate::call_center_day();
        assert_eq!(p.mean_inter_arrival(150.0), 1.0);
        let by_ref: &dyn ArrivalProfile = &p;
        assert_eq!(by_ref.mean_inter_arrival(500.0), 3.0);
    }

    #[test]
    fn closure_profile() {
        let p = FnProfile(|t: f64| 1.0 + t / 100.0);
        assert_eq!(p.mean_inter_arrival(100.0), 2.0);
    }
}

// ── Loaders ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use cc_core::{PiecewiseRate, StaffingChange};

    use crate::{load_rate_reader, load_staffing_reader, ScheduleError};

    const DAY_CSV: &str = "\
from_minute,mean_inter_arrival\n\
0,2.0\n\
60,1.5\n\
120,1.0\n\
240,1.5\n\
360,2.0\n\
480,3.0\n\
";

    #[test]
    fn rate_csv_matches_builtin_day() {
        let p = load_rate_reader(Cursor::new(DAY_CSV)).unwrap();
        assert_eq!(p, PiecewiseRate::call_center_day());
    }

    #[test]
    fn rate_rows_in_any_order() {
        let csv = "from_minute,mean_inter_arrival\n60,1.0\n0,4.0\n";
        let p = load_rate_reader(Cursor::new(csv)).unwrap();
        assert_eq!(p.mean_at(10.0), 4.0);
        assert_eq!(p.mean_at(60.0), 1.0);
    }

    #[test]
    fn single_row_is_constant() {
        let p = load_rate_reader(Cursor::new("from_minute,mean_inter_arrival\n0,1.25\n")).unwrap();
        assert_eq!(p, PiecewiseRate::constant(1.25));
    }

    #[test]
    fn empty_rate_csv_is_error() {
        let err = load_rate_reader(Cursor::new("from_minute,mean_inter_arrival\n")).unwrap_err();
        assert!(matches!(err, ScheduleError::Parse(_)));
    }

    #[test]
    fn non_positive_mean_is_error() {
        let csv = "from_minute,mean_inter_arrival\n0,0\n";
        assert!(load_rate_reader(Cursor::new(csv)).is_err());
    }

    #[test]
    fn malformed_row_is_error() {
        let csv = "from_minute,mean_inter_arrival\n0,fast\n";
        assert!(matches!(load_rate_reader(Cursor::new(csv)), Err(ScheduleError::Parse(_))));
    }

    #[test]
    fn staffing_csv_sorted() {
        let csv = "at_minute,handlers\n270,3\n0,5\n";
        let plan = load_staffing_reader(Cursor::new(csv)).unwrap();
        assert_eq!(
            plan.changes,
            vec![
                StaffingChange { at: 0.0, handlers: 5 },
                StaffingChange { at: 270.0, handlers: 3 },
            ]
        );
    }

    #[test]
    fn staffing_negative_handlers_is_error() {
        let csv = "at_minute,handlers\n0,-1\n";
        assert!(load_staffing_reader(Cursor::new(csv)).is_err());
    }
}
