/// Mail outbox — queues mail intents from the synchronous console and
/// delivers them on a background task through a pluggable transport.
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use labconsole_core::{ConsoleError, MailIntent};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

// ---------------------------------------------------------------------------
// Transport trait
// ---------------------------------------------------------------------------

/// Hands a mail intent to the environment.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    async fn deliver(&self, intent: &MailIntent) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Outbox
// ---------------------------------------------------------------------------

/// Cheap-to-clone sending half of the outbox.
#[derive(Clone)]
pub struct MailOutbox {
    tx: mpsc::UnboundedSender<MailIntent>,
}

impl MailOutbox {
    /// Spawn the delivery task. It exits once every `MailOutbox` clone is
    /// dropped and the queue is drained, returning the number of successful
    /// deliveries.
    pub fn spawn(transport: Arc<dyn MailTransport>) -> (Self, JoinHandle<usize>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run_outbox(rx, transport));
        (Self { tx }, handle)
    }

    /// Queue an intent without waiting for delivery.
    pub fn enqueue(&self, intent: MailIntent) -> Result<(), ConsoleError> {
        self.tx.send(intent).map_err(|_| ConsoleError::OutboxClosed)
    }
}

async fn run_outbox(
    mut rx: mpsc::UnboundedReceiver<MailIntent>,
    transport: Arc<dyn MailTransport>,
) -> usize {
    let mut delivered = 0;
    while let Some(intent) = rx.recv().await {
        match transport.deliver(&intent).await {
            Ok(()) => {
                delivered += 1;
                info!(transport = transport.name(), subject = %intent.subject, "[Outbox] Mail intent handed off");
            }
            Err(e) => {
                warn!(transport = transport.name(), error = %e, "[Outbox] Mail dispatch failed");
            }
        }
    }
    delivered
}

// ---------------------------------------------------------------------------
// Transports
// ---------------------------------------------------------------------------

/// Opens the `mailto:` URI with the platform's default mail handler.
pub struct SystemMailClient;

#[async_trait]
impl MailTransport for SystemMailClient {
    fn name(&self) -> &str {
        "system"
    }

    async fn deliver(&self, intent: &MailIntent) -> Result<()> {
        let uri = intent.mailto_uri();
        tokio::task::spawn_blocking(move || open::that(uri))
            .await
            .context("mail client launcher panicked")?
            .map_err(|e| ConsoleError::MailDispatch {
                transport: self.name().to_string(),
                message: e.to_string(),
            })?;
        Ok(())
    }
}

/// Only logs the intent. Used for dry runs and headless hosts.
pub struct LogTransport;

#[async_trait]
impl MailTransport for LogTransport {
    fn name(&self) -> &str {
        "log"
    }

    async fn deliver(&self, intent: &MailIntent) -> Result<()> {
        info!(
            subject = %intent.subject,
            body_len = intent.body.len(),
            uri_len = intent.mailto_uri().len(),
            "[Outbox] Dry run, mail not opened"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Collect {
        seen: Mutex<Vec<MailIntent>>,
    }

    #[async_trait]
    impl MailTransport for Collect {
        fn name(&self) -> &str {
            "collect"
        }

        async fn deliver(&self, intent: &MailIntent) -> Result<()> {
            if intent.to == "fail@x" {
                anyhow::bail!("refused");
            }
            self.seen.lock().unwrap().push(intent.clone());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_outbox_delivers_in_order_and_drains() {
        let transport = Arc::new(Collect::default());
        let (outbox, handle) = MailOutbox::spawn(transport.clone());

        outbox.enqueue(MailIntent::new("a@x", "one")).unwrap();
        outbox.enqueue(MailIntent::new("fail@x", "two")).unwrap();
        outbox.enqueue(MailIntent::new("b@x", "three")).unwrap();
        drop(outbox);

        let delivered = handle.await.unwrap();
        assert_eq!(delivered, 2);
        let seen = transport.seen.lock().unwrap();
        let bodies: Vec<&str> = seen.iter().map(|i| i.body.as_str()).collect();
        assert_eq!(bodies, vec!["one", "three"]);
    }

    #[tokio::test]
    async fn test_enqueue_after_worker_exit_fails() {
        let (outbox, handle) = MailOutbox::spawn(Arc::new(LogTransport));
        handle.abort();
        let _ = handle.await;
        assert!(matches!(
            outbox.enqueue(MailIntent::new("a@x", "late")),
            Err(ConsoleError::OutboxClosed)
        ));
    }
}
