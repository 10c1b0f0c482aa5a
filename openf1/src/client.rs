//! Client facade for the OpenF1 API.
//!
//! # Design
//! One method per upstream resource (18 total), each a thin composition of
//! query building, transport, and response validation. `OpenF1Client` blocks
//! the calling thread; `AsyncOpenF1Client` suspends the calling task. The two
//! share `ClientBuilder` and produce identical request parameters for
//! identical arguments; only the execution mode differs.
//!
//! Calls are stateless with respect to each other. The only thing shared
//! between calls is the pooled connection inside the transport, which is
//! released when the client is dropped.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::Error;
use crate::filter::Query;
use crate::transport::{AsyncTransport, BlockingTransport, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::types::{
    CarData, ChampionshipDriver, ChampionshipTeam, Driver, Interval, Lap, Location, Meeting,
    Overtake, Pit, Position, RaceControl, Session, SessionResult, StartingGrid, Stint, TeamRadio,
    Weather,
};

/// Parse a JSON array response into typed records, preserving order.
///
/// Strict-or-nothing: one malformed element fails the whole call, no partial
/// results are returned.
fn parse_records<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, Error> {
    serde_json::from_str(body).map_err(|e| {
        Error::Validation(format!(
            "failed to validate {} response: {e}",
            std::any::type_name::<T>()
        ))
    })
}

/// Configuration for either client flavor.
///
/// Defaults: base URL `https://api.openf1.org/v1`, timeout 30 seconds.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the API base URL (mainly for tests and proxies).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build a blocking client.
    pub fn build_blocking(self) -> Result<OpenF1Client, Error> {
        Ok(OpenF1Client {
            transport: BlockingTransport::new(&self.base_url, self.timeout)?,
        })
    }

    /// Build an async client.
    pub fn build(self) -> Result<AsyncOpenF1Client, Error> {
        Ok(AsyncOpenF1Client {
            transport: AsyncTransport::new(&self.base_url, self.timeout)?,
        })
    }
}

/// Blocking client for the OpenF1 API.
///
/// Usage:
/// ```no_run
/// use openf1::{Filter, OpenF1Client, Query};
///
/// # fn main() -> Result<(), openf1::Error> {
/// let f1 = OpenF1Client::new()?;
/// let laps = f1.laps(
///     Query::new()
///         .eq("session_key", 9161)
///         .eq("driver_number", 1)
///         .filter("lap_number", Filter::new().gte(5).lte(10)),
/// )?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct OpenF1Client {
    transport: BlockingTransport,
}

impl OpenF1Client {
    /// Build a client with default base URL and timeout.
    pub fn new() -> Result<Self, Error> {
        ClientBuilder::new().build_blocking()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    fn get<T: DeserializeOwned>(&self, endpoint: &str, query: Query) -> Result<Vec<T>, Error> {
        let pairs = query.into_pairs()?;
        let body = self.transport.get(endpoint, &pairs)?;
        parse_records(&body)
    }

    /// Get car telemetry data (speed, throttle, brake, RPM, gear, DRS).
    pub fn car_data(&self, query: Query) -> Result<Vec<CarData>, Error> {
        self.get("/car_data", query)
    }

    /// Get driver championship standings.
    pub fn championship_drivers(&self, query: Query) -> Result<Vec<ChampionshipDriver>, Error> {
        self.get("/championship_drivers", query)
    }

    /// Get team championship standings.
    pub fn championship_teams(&self, query: Query) -> Result<Vec<ChampionshipTeam>, Error> {
        self.get("/championship_teams", query)
    }

    /// Get driver information for a session.
    pub fn drivers(&self, query: Query) -> Result<Vec<Driver>, Error> {
        self.get("/drivers", query)
    }

    /// Get real-time gaps between drivers.
    pub fn intervals(&self, query: Query) -> Result<Vec<Interval>, Error> {
        self.get("/intervals", query)
    }

    /// Get lap data with sector times and speeds.
    pub fn laps(&self, query: Query) -> Result<Vec<Lap>, Error> {
        self.get("/laps", query)
    }

    /// Get car positions on track (3D coordinates).
    pub fn location(&self, query: Query) -> Result<Vec<Location>, Error> {
        self.get("/location", query)
    }

    /// Get Grand Prix weekends and test events.
    pub fn meetings(&self, query: Query) -> Result<Vec<Meeting>, Error> {
        self.get("/meetings", query)
    }

    /// Get position change events.
    pub fn overtakes(&self, query: Query) -> Result<Vec<Overtake>, Error> {
        self.get("/overtakes", query)
    }

    /// Get pit stop information.
    pub fn pit(&self, query: Query) -> Result<Vec<Pit>, Error> {
        self.get("/pit", query)
    }

    /// Get driver position changes throughout a session.
    pub fn position(&self, query: Query) -> Result<Vec<Position>, Error> {
        self.get("/position", query)
    }

    /// Get race control messages (flags, safety cars, incidents).
    pub fn race_control(&self, query: Query) -> Result<Vec<RaceControl>, Error> {
        self.get("/race_control", query)
    }

    /// Get session information (practice, qualifying, sprint, race).
    pub fn sessions(&self, query: Query) -> Result<Vec<Session>, Error> {
        self.get("/sessions", query)
    }

    /// Get final standings after a session.
    pub fn session_result(&self, query: Query) -> Result<Vec<SessionResult>, Error> {
        self.get("/session_result", query)
    }

    /// Get race starting grid positions.
    pub fn starting_grid(&self, query: Query) -> Result<Vec<StartingGrid>, Error> {
        self.get("/starting_grid", query)
    }

    /// Get tire stint information.
    pub fn stints(&self, query: Query) -> Result<Vec<Stint>, Error> {
        self.get("/stints", query)
    }

    /// Get driver-team radio communications.
    pub fn team_radio(&self, query: Query) -> Result<Vec<TeamRadio>, Error> {
        self.get("/team_radio", query)
    }

    /// Get track weather conditions.
    pub fn weather(&self, query: Query) -> Result<Vec<Weather>, Error> {
        self.get("/weather", query)
    }
}

/// Async client for the OpenF1 API.
///
/// Usage:
/// ```no_run
/// use openf1::{AsyncOpenF1Client, Query};
///
/// # async fn run() -> Result<(), openf1::Error> {
/// let f1 = AsyncOpenF1Client::new()?;
/// let drivers = f1.drivers(Query::new().eq("session_key", 9161)).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AsyncOpenF1Client {
    transport: AsyncTransport,
}

impl AsyncOpenF1Client {
    /// Build a client with default base URL and timeout.
    pub fn new() -> Result<Self, Error> {
        ClientBuilder::new().build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str, query: Query) -> Result<Vec<T>, Error> {
        let pairs = query.into_pairs()?;
        let body = self.transport.get(endpoint, &pairs).await?;
        parse_records(&body)
    }

    /// Get car telemetry data (speed, throttle, brake, RPM, gear, DRS).
    pub async fn car_data(&self, query: Query) -> Result<Vec<CarData>, Error> {
        self.get("/car_data", query).await
    }

    /// Get driver championship standings.
    pub async fn championship_drivers(
        &self,
        query: Query,
    ) -> Result<Vec<ChampionshipDriver>, Error> {
        self.get("/championship_drivers", query).await
    }

    /// Get team championship standings.
    pub async fn championship_teams(&self, query: Query) -> Result<Vec<ChampionshipTeam>, Error> {
        self.get("/championship_teams", query).await
    }

    /// Get driver information for a session.
    pub async fn drivers(&self, query: Query) -> Result<Vec<Driver>, Error> {
        self.get("/drivers", query).await
    }

    /// Get real-time gaps between drivers.
    pub async fn intervals(&self, query: Query) -> Result<Vec<Interval>, Error> {
        self.get("/intervals", query).await
    }

    /// Get lap data with sector times and speeds.
    pub async fn laps(&self, query: Query) -> Result<Vec<Lap>, Error> {
        self.get("/laps", query).await
    }

    /// Get car positions on track (3D coordinates).
    pub async fn location(&self, query: Query) -> Result<Vec<Location>, Error> {
        self.get("/location", query).await
    }

    /// Get Grand Prix weekends and test events.
    pub async fn meetings(&self, query: Query) -> Result<Vec<Meeting>, Error> {
        self.get("/meetings", query).await
    }

    /// Get position change events.
    pub async fn overtakes(&self, query: Query) -> Result<Vec<Overtake>, Error> {
        self.get("/overtakes", query).await
    }

    /// Get pit stop information.
    pub async fn pit(&self, query: Query) -> Result<Vec<Pit>, Error> {
        self.get("/pit", query).await
    }

    /// Get driver position changes throughout a session.
    pub async fn position(&self, query: Query) -> Result<Vec<Position>, Error> {
        self.get("/position", query).await
    }

    /// Get race control messages (flags, safety cars, incidents).
    pub async fn race_control(&self, query: Query) -> Result<Vec<RaceControl>, Error> {
        self.get("/race_control", query).await
    }

    /// Get session information (practice, qualifying, sprint, race).
    pub async fn sessions(&self, query: Query) -> Result<Vec<Session>, Error> {
        self.get("/sessions", query).await
    }

    /// Get final standings after a session.
    pub async fn session_result(&self, query: Query) -> Result<Vec<SessionResult>, Error> {
        self.get("/session_result", query).await
    }

    /// Get race starting grid positions.
    pub async fn starting_grid(&self, query: Query) -> Result<Vec<StartingGrid>, Error> {
        self.get("/starting_grid", query).await
    }

    /// Get tire stint information.
    pub async fn stints(&self, query: Query) -> Result<Vec<Stint>, Error> {
        self.get("/stints", query).await
    }

    /// Get driver-team radio communications.
    pub async fn team_radio(&self, query: Query) -> Result<Vec<TeamRadio>, Error> {
        self.get("/team_radio", query).await
    }

    /// Get track weather conditions.
    pub async fn weather(&self, query: Query) -> Result<Vec<Weather>, Error> {
        self.get("/weather", query).await
    }
}
