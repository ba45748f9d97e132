//! Bounded dispatch queue decoupling detection from action execution.
//!
//! A slow or failing dispatcher must never stall message intake, so
//! chains go through a bounded `mpsc` channel to a worker task. Outcomes
//! are published on a broadcast channel instead of being silently dropped.

use std::sync::Arc;

use {
    anyhow::Result,
    async_trait::async_trait,
    tokio::sync::{broadcast, mpsc},
    tracing::{debug, warn},
};

use crate::config::ActionDescriptor;

/// Executes a stamped action chain. Retry policy lives behind this trait,
/// not in the moderation core.
#[async_trait]
pub trait ActionDispatcher: Send + Sync {
    async fn process(&self, chain: Vec<ActionDescriptor>) -> Result<()>;
}

/// Outcome of one dispatched chain.
#[derive(Debug, Clone)]
pub struct DispatchOutcome {
    /// Number of actions in the chain.
    pub actions: usize,
    /// Dispatcher error, if the chain failed.
    pub error: Option<String>,
}

const DEFAULT_QUEUE_CAPACITY: usize = 256;
const OUTCOME_CAPACITY: usize = 64;

/// Handle for submitting action chains to the dispatch worker.
///
/// Cloneable; all clones feed the same worker.
#[derive(Clone)]
pub struct DispatchQueue {
    tx: mpsc::Sender<Vec<ActionDescriptor>>,
    outcomes: broadcast::Sender<DispatchOutcome>,
}

impl DispatchQueue {
    /// Spawn the worker task and return the submit handle.
    pub fn spawn(dispatcher: Arc<dyn ActionDispatcher>) -> Self {
        Self::with_capacity(dispatcher, DEFAULT_QUEUE_CAPACITY)
    }

    pub fn with_capacity(dispatcher: Arc<dyn ActionDispatcher>, capacity: usize) -> Self {
        let (tx, mut rx) = mpsc::channel::<Vec<ActionDescriptor>>(capacity);
        let (outcomes, _) = broadcast::channel(OUTCOME_CAPACITY);
        let outcome_tx = outcomes.clone();

        tokio::spawn(async move {
            while let Some(chain) = rx.recv().await {
                let actions = chain.len();
                let error = dispatcher.process(chain).await.err();
                match &error {
                    Some(err) => warn!(actions, error = %err, "action dispatch failed"),
                    None => debug!(actions, "action chain dispatched"),
                }
                let _ = outcome_tx.send(DispatchOutcome {
                    actions,
                    error: error.map(|e| e.to_string()),
                });
            }
        });

        Self { tx, outcomes }
    }

    /// Queue a chain for dispatch without blocking.
    ///
    /// Returns `false` when the queue is full or the worker is gone; the
    /// chain is dropped with a warning in that case.
    pub fn submit(&self, chain: Vec<ActionDescriptor>) -> bool {
        match self.tx.try_send(chain) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "dispatch queue rejected action chain");
                false
            },
        }
    }

    /// Subscribe to per-chain dispatch outcomes.
    pub fn outcomes(&self) -> broadcast::Receiver<DispatchOutcome> {
        self.outcomes.subscribe()
    }
}
