use crate::Result;
use crate::clock::Clock;
use chrono::NaiveDateTime;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, channel};
use std::thread::JoinHandle;
use std::time::Duration;
use tracing::debug;

/// Background thread that samples a [`Clock`] on a fixed period.
///
/// The thread only produces instants; the consumer drains [`Ticker::receiver`]
/// and feeds each one to the reducer on its own thread. Dropping the ticker
/// stops and joins the thread.
pub struct Ticker {
    rx: Receiver<NaiveDateTime>,
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn spawn(clock: Arc<dyn Clock>, period: Duration) -> Result<Self> {
        let (tx, rx) = channel();
        let (stop_tx, stop_rx) = channel::<()>();

        let handle = std::thread::Builder::new()
            .name("lifeclock-ticker".to_string())
            .spawn(move || {
                debug!(period_ms = period.as_millis() as u64, "ticker started");
                loop {
                    match stop_rx.recv_timeout(period) {
                        Err(RecvTimeoutError::Timeout) => {
                            if tx.send(clock.now()).is_err() {
                                break;
                            }
                        }
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                debug!("ticker stopped");
            })?;

        Ok(Self {
            rx,
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        })
    }

    pub fn receiver(&self) -> &Receiver<NaiveDateTime> {
        &self.rx
    }

    pub fn stop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
