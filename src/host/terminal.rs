use std::io::IsTerminal;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

use tracing::debug;

use super::{ButtonParams, ButtonSubscription, HostError, HostShell, PressCallback};

type CallbackSlot = Mutex<Option<(u64, PressCallback)>>;

/// Host shell backed by the terminal itself.
///
/// The TUI chrome reads the recorded button params back to draw the main
/// button, and the run loop feeds the mapped key through [`press`] so the
/// press travels the same subscribe path an embedded shell would use.
///
/// [`press`]: TerminalHost::press
pub struct TerminalHost {
    initialized: AtomicBool,
    ready: AtomicBool,
    expanded: AtomicBool,
    button_mounted: AtomicBool,
    header_color: Mutex<Option<String>>,
    button: Mutex<Option<ButtonParams>>,
    callback: Arc<CallbackSlot>,
    next_subscription_id: AtomicU64,
}

impl TerminalHost {
    pub fn new() -> Self {
        Self {
            initialized: AtomicBool::new(false),
            ready: AtomicBool::new(false),
            expanded: AtomicBool::new(false),
            button_mounted: AtomicBool::new(false),
            header_color: Mutex::new(None),
            button: Mutex::new(None),
            callback: Arc::new(Mutex::new(None)),
            next_subscription_id: AtomicU64::new(0),
        }
    }

    /// The real host only exists when stdout is a terminal.
    pub fn detect() -> Option<Arc<Self>> {
        if std::io::stdout().is_terminal() {
            Some(Arc::new(Self::new()))
        } else {
            None
        }
    }

    /// Button params as last pushed by the bridge, for the footer chrome.
    pub fn button_params(&self) -> Option<ButtonParams> {
        self.button.lock().ok().and_then(|guard| guard.clone())
    }

    pub fn header_color(&self) -> Option<String> {
        self.header_color.lock().ok().and_then(|guard| guard.clone())
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    /// Dispatch a button press to the registered callback, if any.
    pub fn press(&self) {
        let callback = self
            .callback
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().map(|(_, callback)| callback.clone()));
        match callback {
            Some(callback) => callback(),
            None => debug!("host button pressed with no subscriber"),
        }
    }
}

impl Default for TerminalHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostShell for TerminalHost {
    fn init(&self) -> Result<(), HostError> {
        if self.initialized.swap(true, Ordering::SeqCst) {
            return Err(HostError::AlreadyInitialized);
        }
        Ok(())
    }

    fn signal_ready(&self) -> Result<(), HostError> {
        self.ready.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn expand_display(&self) -> Result<(), HostError> {
        self.expanded.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn set_header_color(&self, hex: &str) -> Result<(), HostError> {
        let mut guard = self.header_color.lock().map_err(|_| HostError::Unavailable)?;
        *guard = Some(hex.to_string());
        Ok(())
    }

    fn mount_button(&self) -> Result<(), HostError> {
        self.button_mounted.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn set_button_params(&self, params: ButtonParams) -> Result<(), HostError> {
        if !self.button_mounted.load(Ordering::SeqCst) {
            return Err(HostError::ButtonNotMounted);
        }
        let mut guard = self.button.lock().map_err(|_| HostError::Unavailable)?;
        *guard = Some(params);
        Ok(())
    }

    fn subscribe_button_press(
        &self,
        callback: PressCallback,
    ) -> Result<ButtonSubscription, HostError> {
        let id = self.next_subscription_id.fetch_add(1, Ordering::SeqCst);
        {
            let mut guard = self.callback.lock().map_err(|_| HostError::Unavailable)?;
            *guard = Some((id, callback));
        }

        // The guard only clears the slot while its own registration is
        // still the live one.
        let slot: Weak<CallbackSlot> = Arc::downgrade(&self.callback);
        Ok(ButtonSubscription::new(move || {
            if let Some(slot) = slot.upgrade() {
                if let Ok(mut guard) = slot.lock() {
                    if matches!(*guard, Some((live, _)) if live == id) {
                        *guard = None;
                    }
                }
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counting_callback() -> (PressCallback, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let counted = count.clone();
        let callback: PressCallback = Arc::new(move || {
            counted.fetch_add(1, Ordering::SeqCst);
        });
        (callback, count)
    }

    #[test]
    fn init_is_single_shot() {
        let host = TerminalHost::new();
        assert!(host.init().is_ok());
        assert!(matches!(host.init(), Err(HostError::AlreadyInitialized)));
    }

    #[test]
    fn button_params_require_a_mounted_button() {
        let host = TerminalHost::new();
        assert!(matches!(
            host.set_button_params(ButtonParams::default()),
            Err(HostError::ButtonNotMounted)
        ));

        host.mount_button().unwrap();
        host.set_button_params(ButtonParams::default()).unwrap();
        assert_eq!(host.button_params(), Some(ButtonParams::default()));
    }

    #[test]
    fn press_reaches_the_registered_callback() {
        let host = TerminalHost::new();
        let (callback, count) = counting_callback();

        host.press();
        assert_eq!(count.load(Ordering::SeqCst), 0);

        let _sub = host.subscribe_button_press(callback).unwrap();
        host.press();
        host.press();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn dropping_the_subscription_unsubscribes() {
        let host = TerminalHost::new();
        let (callback, count) = counting_callback();

        let sub = host.subscribe_button_press(callback).unwrap();
        drop(sub);
        host.press();
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn a_replaced_subscription_does_not_clobber_the_live_one() {
        let host = TerminalHost::new();
        let (first, first_count) = counting_callback();
        let (second, second_count) = counting_callback();

        let first_sub = host.subscribe_button_press(first).unwrap();
        let _second_sub = host.subscribe_button_press(second).unwrap();

        // stale guard dropping must not detach the live callback
        drop(first_sub);
        host.press();
        assert_eq!(first_count.load(Ordering::SeqCst), 0);
        assert_eq!(second_count.load(Ordering::SeqCst), 1);
    }
}
