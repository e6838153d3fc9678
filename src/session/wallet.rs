use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::SessionConfig;

/// Provisioning status of the simulated custodial wallet.
///
/// Normal progression is `Idle -> Creating -> SuccessScreen -> Created`;
/// once `Created` it never reverts. `Failed` is reachable from `Creating`
/// only through an injected fault and requires an explicit [`reset`].
///
/// [`reset`]: WalletLifecycle::reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletStatus {
    Idle,
    Creating,
    SuccessScreen,
    Created,
    Failed,
}

/// Lifecycle events delivered through the wallet channel.
///
/// `CreationSucceeded` and `Finalized` are produced by the two auto-advance
/// timers; `CreationFailed` only ever comes from fault injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletEvent {
    CreationSucceeded,
    CreationFailed,
    Finalized,
}

/// Outcome of the wallet button gesture.
///
/// The same gesture means different things depending on status: it starts
/// provisioning from `Idle`, but once the wallet is `Created` it asks the
/// caller to open the portfolio instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletAction {
    Started,
    OpenPortfolio,
    Ignored,
}

/// Wallet provisioning state machine.
///
/// Timed transitions are spawned tasks that sleep and push a [`WalletEvent`]
/// into the channel handed out by [`WalletLifecycle::new`]; the caller feeds
/// received events back through [`apply`](WalletLifecycle::apply). At most
/// one timer is armed at a time, and the finalize timer is armed only by the
/// `Creating -> SuccessScreen` transition itself, so the two can never race.
pub struct WalletLifecycle {
    status: WalletStatus,
    creating_delay: Duration,
    success_delay: Duration,
    events_tx: UnboundedSender<WalletEvent>,
    timer: Option<JoinHandle<()>>,
}

impl WalletLifecycle {
    pub fn new(config: &SessionConfig) -> (Self, UnboundedReceiver<WalletEvent>) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let lifecycle = Self {
            status: WalletStatus::Idle,
            creating_delay: config.creating_delay(),
            success_delay: config.success_delay(),
            events_tx,
            timer: None,
        };
        (lifecycle, events_rx)
    }

    pub fn status(&self) -> WalletStatus {
        self.status
    }

    /// True while a provisioning attempt is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(
            self.status,
            WalletStatus::Creating | WalletStatus::SuccessScreen
        )
    }

    /// The wallet button gesture.
    ///
    /// Starts provisioning from `Idle` and arms the creation timer. While an
    /// attempt is in flight the gesture is ignored, so a second timer pair
    /// can never be started. From `Created` it returns the navigate
    /// side-channel instead of touching wallet state.
    pub fn request_create(&mut self) -> WalletAction {
        match self.status {
            WalletStatus::Idle => {
                self.status = WalletStatus::Creating;
                self.arm(self.creating_delay, WalletEvent::CreationSucceeded);
                info!("wallet provisioning started");
                WalletAction::Started
            }
            WalletStatus::Created => WalletAction::OpenPortfolio,
            status => {
                debug!(?status, "wallet gesture ignored");
                WalletAction::Ignored
            }
        }
    }

    /// Apply a lifecycle event received from the wallet channel.
    ///
    /// Events that are not valid for the current status are stale (e.g. a
    /// timer that fired just before a fault was injected) and are dropped.
    pub fn apply(&mut self, event: WalletEvent) {
        match (self.status, event) {
            (WalletStatus::Creating, WalletEvent::CreationSucceeded) => {
                self.status = WalletStatus::SuccessScreen;
                self.arm(self.success_delay, WalletEvent::Finalized);
                info!("wallet created, showing success screen");
            }
            (WalletStatus::SuccessScreen, WalletEvent::Finalized) => {
                self.status = WalletStatus::Created;
                self.cancel_timer();
                info!("wallet provisioning complete");
            }
            (WalletStatus::Creating, WalletEvent::CreationFailed) => {
                self.status = WalletStatus::Failed;
                self.cancel_timer();
                warn!("wallet provisioning failed");
            }
            (status, event) => {
                debug!(?status, ?event, "stale wallet event dropped");
            }
        }
    }

    /// Leave the `Failed` dead end. No-op in any other status.
    pub fn reset(&mut self) -> bool {
        if self.status == WalletStatus::Failed {
            self.status = WalletStatus::Idle;
            info!("wallet lifecycle reset");
            true
        } else {
            false
        }
    }

    /// Cancel any armed timer. A timer must not fire into a torn-down
    /// session.
    pub fn teardown(&mut self) {
        self.cancel_timer();
    }

    fn arm(&mut self, delay: Duration, event: WalletEvent) {
        self.cancel_timer();
        let tx = self.events_tx.clone();
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(event).is_err() {
                debug!(?event, "wallet channel closed before timer fired");
            }
        }));
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Drop for WalletLifecycle {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time;

    fn fast_config() -> SessionConfig {
        SessionConfig {
            creating_delay_ms: 2000,
            success_delay_ms: 1500,
            ..SessionConfig::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn happy_path_walks_every_state_once() {
        let (mut wallet, mut rx) = WalletLifecycle::new(&fast_config());
        let mut seen = vec![wallet.status()];

        assert_eq!(wallet.request_create(), WalletAction::Started);
        seen.push(wallet.status());

        time::advance(Duration::from_millis(2000)).await;
        wallet.apply(rx.recv().await.unwrap());
        seen.push(wallet.status());

        time::advance(Duration::from_millis(1500)).await;
        wallet.apply(rx.recv().await.unwrap());
        seen.push(wallet.status());

        assert_eq!(
            seen,
            vec![
                WalletStatus::Idle,
                WalletStatus::Creating,
                WalletStatus::SuccessScreen,
                WalletStatus::Created,
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn reentrant_gestures_do_not_start_a_second_timer_pair() {
        let (mut wallet, mut rx) = WalletLifecycle::new(&fast_config());

        assert_eq!(wallet.request_create(), WalletAction::Started);
        assert_eq!(wallet.request_create(), WalletAction::Ignored);

        time::advance(Duration::from_millis(2000)).await;
        wallet.apply(rx.recv().await.unwrap());
        assert_eq!(wallet.status(), WalletStatus::SuccessScreen);
        assert_eq!(wallet.request_create(), WalletAction::Ignored);

        time::advance(Duration::from_millis(1500)).await;
        wallet.apply(rx.recv().await.unwrap());
        assert_eq!(wallet.status(), WalletStatus::Created);

        // the single in-flight sequence produced exactly two events
        time::advance(Duration::from_millis(5000)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn created_gesture_becomes_a_navigate_signal() {
        let (mut wallet, mut rx) = WalletLifecycle::new(&fast_config());
        wallet.request_create();
        time::advance(Duration::from_millis(2000)).await;
        wallet.apply(rx.recv().await.unwrap());
        time::advance(Duration::from_millis(1500)).await;
        wallet.apply(rx.recv().await.unwrap());

        assert_eq!(wallet.request_create(), WalletAction::OpenPortfolio);
        assert_eq!(wallet.status(), WalletStatus::Created);
    }

    #[tokio::test(start_paused = true)]
    async fn injected_fault_is_a_dead_end_until_reset() {
        let (mut wallet, mut rx) = WalletLifecycle::new(&fast_config());
        wallet.request_create();

        wallet.apply(WalletEvent::CreationFailed);
        assert_eq!(wallet.status(), WalletStatus::Failed);
        assert_eq!(wallet.request_create(), WalletAction::Ignored);

        // the aborted creation timer never delivers its event
        time::advance(Duration::from_millis(5000)).await;
        assert!(rx.try_recv().is_err());

        assert!(wallet.reset());
        assert_eq!(wallet.status(), WalletStatus::Idle);
        assert_eq!(wallet.request_create(), WalletAction::Started);
    }

    #[tokio::test(start_paused = true)]
    async fn stale_success_event_is_dropped_after_fault() {
        let (mut wallet, _rx) = WalletLifecycle::new(&fast_config());
        wallet.request_create();
        wallet.apply(WalletEvent::CreationFailed);

        // as if the timer had fired just before the fault was applied
        wallet.apply(WalletEvent::CreationSucceeded);
        assert_eq!(wallet.status(), WalletStatus::Failed);
    }

    #[tokio::test(start_paused = true)]
    async fn teardown_cancels_the_armed_timer() {
        let (mut wallet, mut rx) = WalletLifecycle::new(&fast_config());
        wallet.request_create();
        wallet.teardown();

        time::advance(Duration::from_millis(5000)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn reset_is_a_noop_outside_failed() {
        let (mut wallet, _rx) = WalletLifecycle::new(&fast_config());
        assert!(!wallet.reset());
        wallet.request_create();
        assert!(!wallet.reset());
        assert_eq!(wallet.status(), WalletStatus::Creating);
    }
}
