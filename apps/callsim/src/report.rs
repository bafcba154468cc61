//! Plain-text tables printed to stdout.

use cc_core::{SimClock, SimConfig, SimTime};
use cc_sim::{RunSummary, TrialSummary};

/// `HH:MM` of simulation minute `t` on a day whose minute 0 is `day_start_hour:00`.
fn wall_clock(t: f64, day_start_hour: u32) -> String {
    let (h, m) = SimClock::new(SimTime(t)).wall_hm(day_start_hour);
    format!("{h:02}:{m:02}")
}

pub fn print_config(config: &SimConfig, day_start_hour: u32) {
    let queue = config
        .max_queue_size
        .map_or_else(|| "unbounded".to_string(), |n| n.to_string());
    let patience = config
        .abandonment_threshold
        .map_or_else(|| "infinite".to_string(), |p| format!("{p} min"));

    println!(
        "Horizon: {}–{} min ({}–{})  |  Runs: {}  |  Seed: {}",
        config.start_time,
        config.end_time,
        wall_clock(config.start_time, day_start_hour),
        wall_clock(config.end_time, day_start_hour),
        config.number_of_runs,
        config.seed
    );
    println!(
        "Handlers: {}  |  Queue seats: {queue}  |  Service: {}–{} min  |  Patience: {patience}",
        config.number_of_handlers, config.service_time_range.min, config.service_time_range.max
    );
    println!(
        "Retry: p={} up to {} time(s), after {}–{} min",
        config.retry_probability,
        config.max_retries,
        config.retry_delay_range.min,
        config.retry_delay_range.max
    );
    if !config.staffing.is_empty() {
        let changes: Vec<String> = config
            .staffing
            .changes
            .iter()
            .map(|c| format!("{} from {}", c.handlers, wall_clock(c.at, day_start_hour)))
            .collect();
        println!(
            "Staffing: {} at open, {}; {} at close",
            config.number_of_handlers,
            changes.join(", "),
            config.staffing.handlers_at(config.end_time, config.number_of_handlers)
        );
    }
}

pub fn print_runs<'a>(runs: impl IntoIterator<Item = &'a RunSummary>) {
    println!(
        "{:<5} {:>7} {:>9} {:>9} {:>8} {:>10} {:>11} {:>9} {:>9}",
        "Run", "Calls", "Completed", "Abandoned", "Bounced", "Mean wait", "Mean talk", "Max queue", "Calls/h"
    );
    println!("{}", "-".repeat(86));
    for r in runs {
        println!(
            "{:<5} {:>7} {:>9} {:>9} {:>8} {:>10.2} {:>11.2} {:>9} {:>9.1}",
            r.run,
            r.total_calls,
            r.completed_calls,
            r.abandoned_calls,
            r.bounced_calls,
            r.mean_queue_time,
            r.mean_service_time,
            r.max_queue_length,
            r.calls_per_hour,
        );
    }
}

pub fn print_trial(summary: &TrialSummary) {
    let m = &summary.means;
    println!("Across {} run(s):", summary.runs.len());
    println!("  mean calls        : {:.1}", m.total_calls);
    println!("  mean completed    : {:.1}", m.completed_calls);
    println!("  mean abandoned    : {:.1}", m.abandoned_calls);
    println!("  mean bounced      : {:.1}", m.bounced_calls);
    println!("  mean wait         : {:.2} min", m.mean_queue_time);
    println!("  mean talk time    : {:.2} min", m.mean_service_time);
    println!("  mean calls/hour   : {:.1}", m.calls_per_hour);
    println!("  max queue (any)   : {}", summary.max_queue_length);
}
