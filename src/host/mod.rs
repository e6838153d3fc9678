//! Host shell integration
//!
//! The embedding shell (button chrome, theming, readiness signalling) is an
//! injected capability: all call sites depend on the [`HostShell`] trait,
//! never on a concrete host being present. [`TerminalHost`] is the real
//! implementation when stdout is a terminal; [`NoopHost`] is the default
//! everywhere else. Host failures never propagate past the bridge.

pub mod bridge;
pub mod terminal;

pub use bridge::HostButtonBridge;
pub use terminal::TerminalHost;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Header accent pushed to the host shell on mount.
pub const HEADER_COLOR: &str = "#000000";

/// Callback invoked on every host button press.
pub type PressCallback = Arc<dyn Fn() + Send + Sync>;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("host shell is not available")]
    Unavailable,
    #[error("host shell is already initialized")]
    AlreadyInitialized,
    #[error("host button is not mounted")]
    ButtonNotMounted,
}

/// Theme and label configuration of the host main button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonParams {
    pub label: String,
    pub bg_color: String,
    pub fg_color: String,
    pub visible: bool,
    pub enabled: bool,
}

impl Default for ButtonParams {
    fn default() -> Self {
        Self {
            label: "VIEW TRADES".to_string(),
            bg_color: "#000000".to_string(),
            fg_color: "#FFFFFF".to_string(),
            visible: true,
            enabled: true,
        }
    }
}

/// Guard for the single live button-press subscription. Unsubscribes on
/// drop.
pub struct ButtonSubscription {
    unsubscribe: Option<Box<dyn FnOnce() + Send>>,
}

impl ButtonSubscription {
    pub fn new(unsubscribe: impl FnOnce() + Send + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// A subscription with nothing behind it (no-op host).
    pub fn inert() -> Self {
        Self { unsubscribe: None }
    }
}

impl Drop for ButtonSubscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl fmt::Debug for ButtonSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonSubscription")
            .field("live", &self.unsubscribe.is_some())
            .finish()
    }
}

/// Surface consumed from the embedding shell.
pub trait HostShell: Send + Sync {
    fn init(&self) -> Result<(), HostError>;
    fn signal_ready(&self) -> Result<(), HostError>;
    fn expand_display(&self) -> Result<(), HostError>;
    fn set_header_color(&self, hex: &str) -> Result<(), HostError>;
    fn mount_button(&self) -> Result<(), HostError>;
    fn set_button_params(&self, params: ButtonParams) -> Result<(), HostError>;
    fn subscribe_button_press(
        &self,
        callback: PressCallback,
    ) -> Result<ButtonSubscription, HostError>;
}

/// Default host: every call succeeds and does nothing.
#[derive(Debug, Default)]
pub struct NoopHost;

impl HostShell for NoopHost {
    fn init(&self) -> Result<(), HostError> {
        Ok(())
    }

    fn signal_ready(&self) -> Result<(), HostError> {
        Ok(())
    }

    fn expand_display(&self) -> Result<(), HostError> {
        Ok(())
    }

    fn set_header_color(&self, _hex: &str) -> Result<(), HostError> {
        Ok(())
    }

    fn mount_button(&self) -> Result<(), HostError> {
        Ok(())
    }

    fn set_button_params(&self, _params: ButtonParams) -> Result<(), HostError> {
        Ok(())
    }

    fn subscribe_button_press(
        &self,
        _callback: PressCallback,
    ) -> Result<ButtonSubscription, HostError> {
        Ok(ButtonSubscription::inert())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_host_swallows_everything() {
        let host = NoopHost;
        assert!(host.init().is_ok());
        assert!(host.signal_ready().is_ok());
        assert!(host.set_header_color(HEADER_COLOR).is_ok());
        assert!(host.mount_button().is_ok());
        assert!(host.set_button_params(ButtonParams::default()).is_ok());

        let sub = host
            .subscribe_button_press(Arc::new(|| panic!("noop host must never press")))
            .unwrap();
        drop(sub);
    }

    #[test]
    fn subscription_guard_runs_once_on_drop() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let count = Arc::new(AtomicUsize::new(0));
        let counted = count.clone();
        let sub = ButtonSubscription::new(move || {
            counted.fetch_add(1, Ordering::SeqCst);
        });
        drop(sub);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
