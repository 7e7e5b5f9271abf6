/// Public library interface for the FocusFlow habit tracker
///
/// All habit and activity state lives in memory and is re-seeded from the
/// demo data generator at every start; the only thing that survives a
/// restart is the sign-in flag. The state containers are owned here and
/// handed to the serving layer, which mediates every operation.

use std::path::PathBuf;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

// Internal modules
pub mod domain;
pub mod store;
pub mod analytics;
pub mod seed;
pub mod auth;
pub mod tools;
mod mcp;

// Re-export public types for easy access
pub use domain::*;
pub use store::{ActivityLog, HabitStore, ToggleOutcome, MAX_ACTIVITIES};
pub use auth::{AuthError, SessionGate};

/// Errors that can occur during server operation
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Domain validation error: {0}")]
    Domain(#[from] domain::DomainError),

    #[error("Auth error: {0}")]
    Auth(#[from] auth::AuthError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The assembled application: both state containers, the session gate, and
/// the RNG behind the simulated sign-in flow
pub struct FocusFlowServer {
    store: HabitStore,
    activity: ActivityLog,
    gate: SessionGate,
    rng: StdRng,
}

impl FocusFlowServer {
    /// Build the application state for one session
    ///
    /// Habits, notes, and the empty activity feed are seeded fresh; the live
    /// ID counter starts above the seeded watermark.
    pub fn new(state_dir: PathBuf, data_seed: u64) -> Self {
        let today = Utc::now().naive_utc().date();
        let data = seed::demo_data(data_seed, today);

        tracing::info!(
            habits = data.habits.len(),
            archived = data.archived.len(),
            notes = data.notes.len(),
            "seeded demo data"
        );

        let store = HabitStore::from_parts(
            data.habits,
            data.archived,
            data.notes,
            IdSource::starting_at(data.next_id),
            today,
        );

        Self {
            store,
            activity: ActivityLog::new(IdSource::starting_at(1)),
            gate: SessionGate::new(&state_dir),
            rng: StdRng::seed_from_u64(data_seed),
        }
    }

    /// Run the MCP server over stdin/stdout until the client disconnects
    pub async fn run(self) -> Result<(), ServerError> {
        tracing::info!(
            "Server starting with {} active habits",
            self.store.habits().len()
        );

        let mut server = mcp::McpServer::new(self);
        server.run().await
    }

    pub fn store(&self) -> &HabitStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut HabitStore {
        &mut self.store
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    pub fn activity_mut(&mut self) -> &mut ActivityLog {
        &mut self.activity
    }

    /// Both containers at once, for operations that mutate one and then
    /// report to the other
    pub fn containers_mut(&mut self) -> (&mut HabitStore, &mut ActivityLog) {
        (&mut self.store, &mut self.activity)
    }

    pub fn gate(&self) -> &SessionGate {
        &self.gate
    }

    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}
