use chrono::{Duration, Utc};
use chrono_tz::Europe::Warsaw;
use spacedrep::{SchedulerConfig, Sm2Scheduler, Sm2State};

fn setup_logger() -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{} {}] {}", record.level(), record.target(), message))
        })
        .level(log::LevelFilter::Debug)
        .chain(std::io::stdout())
        .apply()?;
    Ok(())
}

fn schedule_new_card() -> Result<(), Box<dyn std::error::Error>> {
    // Create a new card with the default easiness of 2.5
    let mut scheduler = Sm2Scheduler::default();

    // Review it a few times, always on the day it was due
    let mut attempted_at = Utc::now();
    for quality in [5, 4, 3, 5] {
        let (due, interval) = scheduler.compute_next_due_interval(attempted_at, quality)?;
        println!(
            "Quality {quality}: next review in {} days, on {}",
            interval.num_days(),
            due.with_timezone(&Warsaw).format("%Y-%m-%d %H:%M %Z")
        );
        attempted_at = due;
    }

    println!("State: {:?}", scheduler.state());
    Ok(())
}

fn schedule_existing_card() -> Result<(), Box<dyn std::error::Error>> {
    // A card that was last scheduled for today after two successful reviews
    let state = Sm2State {
        interval: 6,
        repetitions: 2,
        easiness: 2.36,
    };
    let due = Utc::now();
    let mut scheduler = Sm2Scheduler::resume(state, Some(due));

    // The learner answers three days late and fails; the next review is anchored to the
    // original due date
    let (next_due, interval) =
        scheduler.compute_next_due_interval(due + Duration::days(3), 1)?;
    println!(
        "Forgotten: next review in {} day, on {}",
        interval.num_days(),
        next_due.with_timezone(&Warsaw)
    );
    println!("State: {:?}", scheduler.state());
    Ok(())
}

fn schedule_from_config() -> Result<(), Box<dyn std::error::Error>> {
    let config: SchedulerConfig =
        serde_json::from_str(r#"{"algorithm": "sm2", "sm2": {"easiness": 1.8}}"#)?;
    let mut scheduler = config.build()?;
    let (due, _) = scheduler.compute_next_due_interval(Utc::now(), 4)?;
    println!("Configured card due on {}", due.with_timezone(&Warsaw));

    if let Err(err) = SchedulerConfig::default().build() {
        println!("Without an algorithm: {err}");
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger()?;

    println!("Scheduling a new card:");
    schedule_new_card()?;

    println!("\nScheduling an existing card:");
    schedule_existing_card()?;

    println!("\nScheduling from a config:");
    schedule_from_config()?;

    Ok(())
}
