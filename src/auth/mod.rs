/// Simulated authentication gate
///
/// The only state this application persists across restarts is a single
/// boolean flag. Sign-in is a pretend magic-link flow: an artificial delay
/// stands in for network latency and one send in ten fails so the retry path
/// stays exercised. None of this touches the habit or activity containers.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rand::Rng;
use thiserror::Error;
use tracing::info;

/// File name of the persisted flag
pub const AUTH_FLAG_FILE: &str = "focusflow_authenticated";

/// Simulated latency of sending the magic link
const SEND_DELAY: Duration = Duration::from_millis(1500);
/// Simulated latency of the link round trip
const SIGN_IN_DELAY: Duration = Duration::from_millis(1500);
/// One send in ten fails
const DELIVERY_FAILURE_RATE: f64 = 0.1;

/// Errors from the sign-in flow
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("We couldn't send the link. Please try again.")]
    Delivery,

    #[error("Failed to access session state: {0}")]
    Io(#[from] std::io::Error),
}

/// Persisted sign-in flag
///
/// The flag lives in a file under the state directory; its presence with the
/// content `true` means the session is authenticated.
pub struct SessionGate {
    path: PathBuf,
}

impl SessionGate {
    pub fn new(state_dir: &Path) -> Self {
        Self { path: state_dir.join(AUTH_FLAG_FILE) }
    }

    /// Whether the user has completed sign-in
    pub fn is_authenticated(&self) -> bool {
        fs::read_to_string(&self.path)
            .map(|contents| contents.trim() == "true")
            .unwrap_or(false)
    }

    /// Record a completed sign-in
    pub fn set_authenticated(&self) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, "true")?;
        Ok(())
    }

    /// Drop the session; absence of the flag means signed out
    pub fn sign_out(&self) -> Result<(), AuthError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AuthError::Io(e)),
        }
    }
}

/// Pretend to email a magic link
///
/// Waits out the simulated latency, then fails one time in ten. A failure
/// leaves no state behind; the caller simply tries again.
pub async fn send_magic_link(email: &str, rng: &mut impl Rng) -> Result<(), AuthError> {
    validate_email(email)?;

    tokio::time::sleep(SEND_DELAY).await;

    if rng.gen::<f64>() < DELIVERY_FAILURE_RATE {
        info!(email, "simulated magic link delivery failure");
        return Err(AuthError::Delivery);
    }

    info!(email, "magic link sent");
    Ok(())
}

/// Pretend the user clicked the link, then persist the flag
pub async fn complete_sign_in(gate: &SessionGate) -> Result<(), AuthError> {
    tokio::time::sleep(SIGN_IN_DELAY).await;
    gate.set_authenticated()?;
    info!("sign-in complete");
    Ok(())
}

fn validate_email(email: &str) -> Result<(), AuthError> {
    let trimmed = email.trim();
    let valid = trimmed
        .split_once('@')
        .map(|(local, domain)| !local.is_empty() && domain.contains('.'))
        .unwrap_or(false);

    if valid {
        Ok(())
    } else {
        Err(AuthError::InvalidEmail(email.to_string()))
    }
}
