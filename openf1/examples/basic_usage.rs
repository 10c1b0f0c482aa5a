//! Basic blocking walkthrough: meetings, sessions, drivers, laps, weather.
//!
//! Hits the live API:
//! `cargo run --example basic_usage`

use openf1::{Error, Filter, OpenF1Client, Query};

fn main() -> Result<(), Error> {
    let f1 = OpenF1Client::new()?;

    println!("=== 2024 Meetings ===");
    let meetings = f1.meetings(Query::new().eq("year", 2024))?;
    for m in meetings.iter().take(5) {
        println!(
            "  {} - {}, {}",
            m.meeting_name.as_deref().unwrap_or("?"),
            m.location.as_deref().unwrap_or("?"),
            m.country_name.as_deref().unwrap_or("?"),
        );
    }
    let Some(meeting_key) = meetings.first().and_then(|m| m.meeting_key) else {
        println!("  No meetings found.");
        return Ok(());
    };

    println!("\n=== Sessions for the first meeting ===");
    let sessions = f1.sessions(Query::new().eq("meeting_key", meeting_key))?;
    for s in &sessions {
        println!(
            "  {} ({})",
            s.session_name.as_deref().unwrap_or("?"),
            s.session_type.as_deref().unwrap_or("?"),
        );
    }
    let Some(session_key) = sessions
        .iter()
        .find(|s| s.session_type.as_deref() == Some("Race"))
        .and_then(|s| s.session_key)
    else {
        println!("  No race session found.");
        return Ok(());
    };

    println!("\n=== Drivers in Race (session_key={session_key}) ===");
    let mut drivers = f1.drivers(Query::new().eq("session_key", session_key))?;
    drivers.sort_by_key(|d| d.driver_number.unwrap_or(0));
    for d in &drivers {
        println!(
            "  #{} {} - {}",
            d.driver_number.unwrap_or(0),
            d.full_name.as_deref().unwrap_or("?"),
            d.team_name.as_deref().unwrap_or("?"),
        );
    }

    println!("\n=== Laps 1-5 for driver #1 ===");
    let laps = f1.laps(
        Query::new()
            .eq("session_key", session_key)
            .eq("driver_number", 1)
            .filter("lap_number", Filter::new().gte(1).lte(5)),
    )?;
    for lap in &laps {
        let duration = lap
            .lap_duration
            .map(|d| format!("{d:.3}s"))
            .unwrap_or_else(|| "N/A".to_string());
        println!("  Lap {}: {duration}", lap.lap_number.unwrap_or(0));
    }

    println!("\n=== Weather ===");
    if let Some(w) = f1.weather(Query::new().eq("session_key", session_key))?.first() {
        println!(
            "  Air: {:?}°C, Track: {:?}°C, Humidity: {:?}%, Wind: {:?} m/s",
            w.air_temperature, w.track_temperature, w.humidity, w.wind_speed,
        );
    }

    Ok(())
}
