use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::{debug, error};

/// Events driving the run loop.
#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Tick,
    /// Relayed by the host button bridge.
    HostPress,
    Error(String),
}

/// Background pump translating terminal input and a tick interval into the
/// session event channel. The bridge clones [`sender`](EventHandler::sender)
/// to inject host presses into the same stream.
pub struct EventHandler {
    tx: UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
    _task: tokio::task::JoinHandle<()>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let pump_tx = tx.clone();
        let _task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick_rate);

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        if pump_tx.send(Event::Tick).is_err() {
                            debug!("Event channel closed, stopping tick handler");
                            break;
                        }
                    }
                    _ = tokio::time::sleep(Duration::from_millis(1)) => {
                        // Check for key events frequently
                        if let Ok(true) = event::poll(Duration::from_millis(0)) {
                            match event::read() {
                                Ok(CrosstermEvent::Key(key)) => {
                                    if pump_tx.send(Event::Key(key)).is_err() {
                                        debug!("Event channel closed, stopping input handler");
                                        break;
                                    }
                                }
                                Ok(_) => {
                                    // Ignore other event types
                                }
                                Err(e) => {
                                    error!("Failed to read terminal event: {}", e);
                                    let _ = pump_tx.send(Event::Error(format!(
                                        "Terminal read error: {}",
                                        e
                                    )));
                                }
                            }
                        }
                    }
                }
            }

            debug!("Event handler task ended");
        });

        Self { tx, rx, _task }
    }

    /// Sender for out-of-band events (host presses).
    pub fn sender(&self) -> UnboundedSender<Event> {
        self.tx.clone()
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}
