//! Multi-endpoint race analysis over the async client.
//!
//! Hits the live API:
//! `cargo run --example race_analysis`

use std::collections::BTreeMap;

use openf1::{AsyncOpenF1Client, Error, Gap, Query};

#[tokio::main]
async fn main() -> Result<(), Error> {
    analyze_race(2024, "Bahrain").await
}

async fn analyze_race(year: u32, meeting_name_contains: &str) -> Result<(), Error> {
    let f1 = AsyncOpenF1Client::new()?;

    let meetings = f1.meetings(Query::new().eq("year", year)).await?;
    let needle = meeting_name_contains.to_lowercase();
    let Some(meeting) = meetings.iter().find(|m| {
        m.meeting_name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(&needle))
    }) else {
        println!("No meeting found matching '{meeting_name_contains}' in {year}");
        return Ok(());
    };
    println!(
        "Race: {}",
        meeting.meeting_official_name.as_deref().unwrap_or("?")
    );
    println!(
        "Circuit: {}, {}\n",
        meeting.circuit_short_name.as_deref().unwrap_or("?"),
        meeting.country_name.as_deref().unwrap_or("?"),
    );

    let sessions = f1
        .sessions(
            Query::new()
                .eq("meeting_key", meeting.meeting_key.unwrap_or(0))
                .eq("session_type", "Race"),
        )
        .await?;
    let Some(session_key) = sessions.first().and_then(|s| s.session_key) else {
        println!("No race session found.");
        return Ok(());
    };

    let mut results = f1
        .session_result(Query::new().eq("session_key", session_key))
        .await?;
    results.sort_by_key(|r| r.position.unwrap_or(99));
    println!("=== Race Results ===");
    for r in &results {
        let gap = match (&r.position, &r.gap_to_leader) {
            (Some(1), _) => "WINNER".to_string(),
            (_, Some(Gap::Seconds(s))) => format!("+{s}"),
            (_, Some(Gap::Text(t))) => t.clone(),
            _ => String::new(),
        };
        println!(
            "  P{}: {} [{}] {gap}",
            r.position.unwrap_or(0),
            r.full_name.as_deref().unwrap_or("?"),
            r.team_name.as_deref().unwrap_or("?"),
        );
    }

    let drivers = f1.drivers(Query::new().eq("session_key", session_key)).await?;
    let acronyms: BTreeMap<u32, &str> = drivers
        .iter()
        .filter_map(|d| Some((d.driver_number?, d.name_acronym.as_deref()?)))
        .collect();

    let pits = f1.pit(Query::new().eq("session_key", session_key)).await?;
    println!("\n=== Pit Stops ({} total) ===", pits.len());
    let mut driver_pits: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
    for p in &pits {
        if let (Some(num), Some(duration)) = (p.driver_number, p.pit_duration) {
            driver_pits.entry(num).or_default().push(duration);
        }
    }
    for (num, durations) in &driver_pits {
        let label = acronyms.get(num).copied().unwrap_or("?");
        let stops: Vec<String> = durations.iter().map(|d| format!("{d:.1}s")).collect();
        println!("  {label}: {} stop(s) - [{}]", durations.len(), stops.join(", "));
    }

    let stints = f1.stints(Query::new().eq("session_key", session_key)).await?;
    println!("\n=== Tire Strategy (top 3) ===");
    for r in results.iter().take(3) {
        let Some(num) = r.driver_number else { continue };
        let mut driver_stints: Vec<_> =
            stints.iter().filter(|s| s.driver_number == Some(num)).collect();
        driver_stints.sort_by_key(|s| s.stint_number.unwrap_or(0));
        let compounds: Vec<&str> = driver_stints
            .iter()
            .map(|s| s.compound.as_deref().unwrap_or("?"))
            .collect();
        let label = acronyms.get(&num).copied().unwrap_or("?");
        println!("  {label}: {}", compounds.join(" -> "));
    }

    let weather = f1.weather(Query::new().eq("session_key", session_key)).await?;
    let temps: Vec<f64> = weather.iter().filter_map(|w| w.air_temperature).collect();
    if let (Some(min), Some(max)) = (
        temps.iter().cloned().reduce(f64::min),
        temps.iter().cloned().reduce(f64::max),
    ) {
        println!("\n=== Weather ===");
        println!("  Air temp: {min:.1}C - {max:.1}C");
        let rain = weather.iter().any(|w| w.rainfall.unwrap_or(0) > 0);
        println!("  Rain: {}", if rain { "Yes" } else { "No" });
    }

    Ok(())
}
