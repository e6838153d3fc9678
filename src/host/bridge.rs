use std::sync::Arc;

use tracing::{debug, warn};

use super::{ButtonParams, ButtonSubscription, HostError, HostShell, PressCallback, HEADER_COLOR};

/// Relays the host main button into the session and announces
/// readiness/theme outward.
///
/// Every host call is fallible and every failure degrades to a no-op with a
/// log line; a missing or broken host must never take the session down.
pub struct HostButtonBridge {
    host: Arc<dyn HostShell>,
    subscription: Option<ButtonSubscription>,
}

impl HostButtonBridge {
    pub fn new(host: Arc<dyn HostShell>) -> Self {
        Self {
            host,
            subscription: None,
        }
    }

    /// Announce to the host and subscribe the press relay.
    ///
    /// Announcement happens exactly once per mount; any previous
    /// subscription is dropped first so at most one is ever live.
    pub fn mount(&mut self, on_press: PressCallback) {
        self.unmount();
        self.announce();

        match self.host.subscribe_button_press(on_press) {
            Ok(subscription) => self.subscription = Some(subscription),
            Err(err) => warn!(%err, "host button subscription failed"),
        }
    }

    /// Drop the live subscription, if any.
    pub fn unmount(&mut self) {
        if self.subscription.take().is_some() {
            debug!("host button subscription dropped");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    fn announce(&self) {
        match self.host.init() {
            Ok(()) => {}
            // an embedding provider may have initialized the shell already
            Err(HostError::AlreadyInitialized) => debug!("host shell already initialized"),
            Err(err) => warn!(%err, "host init failed"),
        }

        if let Err(err) = self.host.signal_ready() {
            warn!(%err, "host ready signal failed");
        }
        if let Err(err) = self.host.expand_display() {
            warn!(%err, "host expand failed");
        }
        if let Err(err) = self.host.set_header_color(HEADER_COLOR) {
            warn!(%err, "host header color failed");
        }
        if let Err(err) = self.host.mount_button() {
            warn!(%err, "host button mount failed");
        }
        if let Err(err) = self.host.set_button_params(ButtonParams::default()) {
            warn!(%err, "host button params failed");
        }
    }
}

impl Drop for HostButtonBridge {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::TerminalHost;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct BrokenHost;

    impl HostShell for BrokenHost {
        fn init(&self) -> Result<(), HostError> {
            Err(HostError::Unavailable)
        }

        fn signal_ready(&self) -> Result<(), HostError> {
            Err(HostError::Unavailable)
        }

        fn expand_display(&self) -> Result<(), HostError> {
            Err(HostError::Unavailable)
        }

        fn set_header_color(&self, _hex: &str) -> Result<(), HostError> {
            Err(HostError::Unavailable)
        }

        fn mount_button(&self) -> Result<(), HostError> {
            Err(HostError::Unavailable)
        }

        fn set_button_params(&self, _params: ButtonParams) -> Result<(), HostError> {
            Err(HostError::Unavailable)
        }

        fn subscribe_button_press(
            &self,
            _callback: PressCallback,
        ) -> Result<ButtonSubscription, HostError> {
            Err(HostError::Unavailable)
        }
    }

    fn press_counter() -> (PressCallback, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let counted = count.clone();
        let callback: PressCallback = Arc::new(move || {
            counted.fetch_add(1, Ordering::SeqCst);
        });
        (callback, count)
    }

    #[test]
    fn mount_announces_and_relays_presses() {
        let host = Arc::new(TerminalHost::new());
        let mut bridge = HostButtonBridge::new(host.clone());
        let (callback, count) = press_counter();

        bridge.mount(callback);
        assert!(bridge.is_mounted());
        assert!(host.is_ready());
        assert_eq!(host.header_color().as_deref(), Some(HEADER_COLOR));
        assert_eq!(host.button_params(), Some(ButtonParams::default()));

        host.press();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn remount_keeps_a_single_live_subscription() {
        let host = Arc::new(TerminalHost::new());
        let mut bridge = HostButtonBridge::new(host.clone());
        let (first, first_count) = press_counter();
        let (second, second_count) = press_counter();

        bridge.mount(first);
        bridge.mount(second);

        host.press();
        assert_eq!(first_count.load(Ordering::SeqCst), 0);
        assert_eq!(second_count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unmount_stops_the_relay() {
        let host = Arc::new(TerminalHost::new());
        let mut bridge = HostButtonBridge::new(host.clone());
        let (callback, count) = press_counter();

        bridge.mount(callback);
        bridge.unmount();
        assert!(!bridge.is_mounted());

        host.press();
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn a_broken_host_degrades_to_a_noop() {
        let mut bridge = HostButtonBridge::new(Arc::new(BrokenHost));
        let (callback, count) = press_counter();

        bridge.mount(callback);
        assert!(!bridge.is_mounted());
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
