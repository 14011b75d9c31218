// src/services/dispatch.rs

//! Runs page fetches on the runtime and hands results back to one consumer.
//!
//! The consumer owns its [`ListController`](crate::pipeline::ListController)
//! and is the only one that mutates it: fetches run on spawned tasks, and
//! their outcomes come back through a channel for the consumer to `apply`.

use std::sync::Arc;

use tokio::sync::mpsc;

use super::CatalogRepository;
use crate::pipeline::{FetchOutcome, PendingFetch};

/// Spawns fetches and queues their outcomes for the consumer.
pub struct FetchDispatcher {
    repo: Arc<dyn CatalogRepository>,
    tx: mpsc::UnboundedSender<FetchOutcome>,
    rx: mpsc::UnboundedReceiver<FetchOutcome>,
}

impl FetchDispatcher {
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { repo, tx, rx }
    }

    /// Run `pending` on a background task.
    pub fn dispatch(&self, pending: PendingFetch) {
        let repo = Arc::clone(&self.repo);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = pending.run(repo.as_ref()).await;
            // The consumer may have gone away; nothing left to deliver to.
            let _ = tx.send(outcome);
        });
    }

    /// Wait for the next completed fetch.
    pub async fn next_outcome(&mut self) -> Option<FetchOutcome> {
        self.rx.recv().await
    }

    /// A completed fetch, if one is already queued.
    pub fn try_next_outcome(&mut self) -> Option<FetchOutcome> {
        self.rx.try_recv().ok()
    }
}
