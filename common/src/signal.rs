use tokio::signal::unix::SignalKind;
use tokio::sync::mpsc;

/// Multiplexes any number of Unix signals onto a single channel.
pub struct SignalHandler {
    signal_send: mpsc::Sender<SignalKind>,
    signal_recv: mpsc::Receiver<SignalKind>,
}

impl SignalHandler {
    pub fn new() -> Self {
        let (signal_send, signal_recv) = mpsc::channel(1);
        Self {
            signal_send,
            signal_recv,
        }
    }

    /// Registers a signal to listen for. Panics if the signal listener cannot
    /// be installed, which only happens outside a tokio runtime.
    pub fn with_signal(self, kind: SignalKind) -> Self {
        let mut signal = tokio::signal::unix::signal(kind).expect("failed to create signal");

        let send = self.signal_send.clone();
        tokio::spawn(async move {
            loop {
                signal.recv().await;
                if send.send(kind).await.is_err() {
                    break;
                }
            }
        });

        self
    }

    /// Waits for the next registered signal to arrive.
    pub async fn recv(&mut self) -> SignalKind {
        self.signal_recv
            .recv()
            .await
            .expect("failed to receive signal")
    }
}

#[cfg(test)]
mod tests;
