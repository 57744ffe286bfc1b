//! OS-level URI opener.

use async_trait::async_trait;
use tracing::warn;

use crate::config::OpenerConfig;

/// The platform handler for external URI schemes.
///
/// Dispatch carries no completion signal; implementations log failures and
/// swallow them.
#[async_trait]
pub trait UriOpener: Send + Sync {
    async fn open_uri(&self, uri: &str);
}

/// Opens URIs with the platform's default scheme handler.
pub struct SystemOpener {
    command: String,
}

impl SystemOpener {
    pub fn new(config: OpenerConfig) -> Self {
        let command = config
            .command
            .unwrap_or_else(|| default_command().to_string());
        Self { command }
    }
}

fn default_command() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "explorer"
    } else {
        "xdg-open"
    }
}

#[async_trait]
impl UriOpener for SystemOpener {
    async fn open_uri(&self, uri: &str) {
        // The child is left to run on its own; we only care that the
        // hand-off happened.
        if let Err(e) = tokio::process::Command::new(&self.command).arg(uri).spawn() {
            warn!(command = %self.command, error = %e, "Failed to hand URI to system opener");
        }
    }
}
