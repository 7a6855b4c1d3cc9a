//! Advisory connection state for the upstream trackers.
//!
//! The state only drives the data-source badge shown to users; it never
//! gates which source implementation handles a request.

use serde::Serialize;
use tokio::sync::{Mutex, RwLock};

use super::search::KnowledgeSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    Unknown,
    Probing,
    Connected,
    Disconnected,
}

/// Badge label distinguishing live results from canned demo content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    Real,
    Demo,
}

/// Owns the `Unknown -> Probing -> {Connected, Disconnected}` lifecycle.
///
/// A probe fetches the project and space listings concurrently and
/// reports `Connected` when either comes back non-empty. `Disconnected`
/// is not terminal; `reconnect` re-enters `Probing`. Overlapping probes
/// are coalesced: the second caller waits for the in-flight probe and
/// adopts its outcome.
pub struct ConnectionMonitor<S>
where
    S: KnowledgeSource,
{
    source: S,
    state: RwLock<ConnectionState>,
    probe_flight: Mutex<()>,
}

impl<S> ConnectionMonitor<S>
where
    S: KnowledgeSource,
{
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: RwLock::new(ConnectionState::Unknown),
            probe_flight: Mutex::new(()),
        }
    }

    pub async fn state(&self) -> ConnectionState {
        *self.state.read().await
    }

    #[tracing::instrument(skip(self))]
    pub async fn probe(&self) -> ConnectionState {
        let _flight = match self.probe_flight.try_lock() {
            Ok(guard) => guard,
            Err(_) => {
                // Coalesce with the probe already in flight.
                let _wait = self.probe_flight.lock().await;
                return *self.state.read().await;
            }
        };

        *self.state.write().await = ConnectionState::Probing;

        let (projects, spaces) =
            tokio::join!(self.source.list_projects(), self.source.list_spaces());

        let reachable = matches!(&projects, Ok(p) if !p.is_empty())
            || matches!(&spaces, Ok(s) if !s.is_empty());
        let next = if reachable {
            ConnectionState::Connected
        } else {
            ConnectionState::Disconnected
        };

        if let Err(err) = &projects {
            tracing::debug!("Project probe failed: {err}");
        }
        if let Err(err) = &spaces {
            tracing::debug!("Space probe failed: {err}");
        }
        tracing::info!("Probe finished, connection state: {next:?}");

        *self.state.write().await = next;
        next
    }

    /// Explicit reconnect requested by the caller.
    pub async fn reconnect(&self) -> ConnectionState {
        self.probe().await
    }

    pub async fn data_source(&self) -> DataSource {
        match self.state().await {
            ConnectionState::Connected => DataSource::Real,
            _ => DataSource::Demo,
        }
    }
}
