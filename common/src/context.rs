use std::sync::Arc;

use tokio::sync::{broadcast, oneshot};

/// A cancellation context handed to every long lived task.
///
/// The context owns a sender that is dropped when the last clone of the
/// context goes out of scope, which is how the [`Handler`] knows that all
/// tasks holding the context have finished.
struct RawContext {
    _sender: oneshot::Sender<()>,
    cancel_receiver: broadcast::Receiver<()>,
}

#[derive(Clone)]
pub struct Context(Arc<RawContext>);

impl Context {
    #[must_use]
    pub fn new() -> (Self, Handler) {
        let (sender, recv) = oneshot::channel();
        let (cancel_sender, cancel_receiver) = broadcast::channel(1);

        (
            Self(Arc::new(RawContext {
                _sender: sender,
                cancel_receiver,
            })),
            Handler {
                recv,
                cancel_sender,
            },
        )
    }

    /// Resolves when the context is cancelled.
    pub async fn done(&self) {
        let mut recv = self.0.cancel_receiver.resubscribe();
        let _ = recv.recv().await;
    }
}

/// The other half of a [`Context`], held by whoever coordinates shutdown.
pub struct Handler {
    recv: oneshot::Receiver<()>,
    cancel_sender: broadcast::Sender<()>,
}

impl Handler {
    /// Waits for every clone of the context to be dropped without cancelling
    /// them.
    pub async fn done(&mut self) {
        let _ = (&mut self.recv).await;
    }

    /// Cancels the context and waits for all tasks holding it to finish.
    pub async fn cancel(self) {
        drop(self.cancel_sender);

        let _ = self.recv.await;
    }
}

#[cfg(test)]
mod tests;
