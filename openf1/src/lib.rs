//! Typed client for the OpenF1 REST API.
//!
//! # Overview
//! Fetches Formula 1 session, telemetry, and timing data from
//! `https://api.openf1.org/v1` and returns it as strongly-typed records.
//! Every upstream resource (laps, drivers, weather, and fifteen more) maps to
//! one client method taking a [`Query`] of equality and comparison
//! constraints.
//!
//! # Design
//! - Two client flavors with identical request semantics: [`OpenF1Client`]
//!   blocks the calling thread, [`AsyncOpenF1Client`] suspends the calling
//!   task. Both are built from [`ClientBuilder`].
//! - Comparison filters are encoded in the parameter name, matching the
//!   upstream convention: `Filter::new().gte(5).lte(10)` on `lap_number`
//!   becomes `lap_number>=5&lap_number<=10`.
//! - Responses validate strictly: one malformed element fails the whole call
//!   with [`Error::Validation`], no partial results. Unknown upstream fields
//!   are ignored.
//! - A single attempt per call and exactly one [`Error`] per failure; the
//!   connection pool lives as long as the client and is released on drop.

pub mod client;
pub mod error;
pub mod filter;
pub mod types;

mod transport;

pub use client::{AsyncOpenF1Client, ClientBuilder, OpenF1Client};
pub use error::Error;
pub use filter::{Filter, Query};
pub use types::{
    CarData, ChampionshipDriver, ChampionshipTeam, Driver, Gap, Interval, Lap, Location, Meeting,
    Overtake, Pit, Position, RaceControl, Session, SessionResult, StartingGrid, Stint, TeamRadio,
    Weather,
};
