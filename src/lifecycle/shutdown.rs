//! Shutdown fan-out.

use tokio::sync::broadcast;

/// Broadcasts a single "stop" to the server and any helper tasks.
///
/// Subscribe before triggering; a receiver created afterwards misses it.
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    pub fn trigger(&self) {
        if self.tx.send(()).is_err() {
            tracing::debug!("Shutdown triggered with nothing listening");
        }
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves once `rx` sees a shutdown, or its sender is gone.
pub async fn wait(mut rx: broadcast::Receiver<()>) {
    let _ = rx.recv().await;
}
