use crate::{errors::CatalogError, filter::FilterSpec, models::Dao, store::Catalog};
use std::{sync::Arc, time::Duration};
use tokio::{
    sync::{mpsc, watch},
    time::sleep,
};
use tracing::debug;

pub const DEFAULT_DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);
pub const MIN_DEBOUNCE_WINDOW: Duration = Duration::from_millis(100);
pub const MAX_DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);

pub fn clamp_window(window: Duration) -> Duration {
    window.clamp(MIN_DEBOUNCE_WINDOW, MAX_DEBOUNCE_WINDOW)
}

/// Input side of a debounced channel. Dropping it flushes the pending value.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    sender: mpsc::UnboundedSender<T>,
}

impl<T> Debouncer<T> {
    pub fn submit(&self, value: T) -> Result<(), CatalogError> {
        self.sender
            .send(value)
            .map_err(|_| CatalogError::SessionClosed)
    }
}

/// Spawns a last-write-wins debouncer: a value is emitted once no newer value
/// has been submitted for `window`. Must be called inside a tokio runtime.
pub fn debounce<T: Send + 'static>(window: Duration) -> (Debouncer<T>, mpsc::Receiver<T>) {
    let (sender, input) = mpsc::unbounded_channel();
    let (output, settled) = mpsc::channel(1);
    tokio::spawn(run_debouncer(window, input, output));
    (Debouncer { sender }, settled)
}

async fn run_debouncer<T>(
    window: Duration,
    mut input: mpsc::UnboundedReceiver<T>,
    output: mpsc::Sender<T>,
) {
    while let Some(mut pending) = input.recv().await {
        loop {
            tokio::select! {
                next = input.recv() => match next {
                    Some(value) => pending = value,
                    None => {
                        let _ = output.send(pending).await;
                        return;
                    }
                },
                _ = sleep(window) => {
                    if output.send(pending).await.is_err() {
                        return;
                    }
                    break;
                }
            }
        }
    }
}

/// Debounced filter evaluation over a shared catalog. Settled specs are run
/// through the filter engine and the latest result is published on a watch
/// channel.
pub struct FilterSession {
    debouncer: Debouncer<FilterSpec>,
    results: watch::Receiver<Vec<Dao>>,
}

impl FilterSession {
    pub fn spawn(catalog: Arc<Catalog>, window: Duration) -> Self {
        let (debouncer, mut settled) = debounce::<FilterSpec>(window);
        let (publisher, results) = watch::channel(catalog.daos().to_vec());

        tokio::spawn(async move {
            while let Some(spec) = settled.recv().await {
                let filtered = catalog.filter_daos(&spec);
                debug!(
                    category = ?spec.category,
                    statuses = spec.status.len(),
                    query = %spec.search_query,
                    matched = filtered.len(),
                    "Filter settled"
                );
                if publisher.send(filtered).is_err() {
                    break;
                }
            }
        });

        Self { debouncer, results }
    }

    pub fn update(&self, spec: FilterSpec) -> Result<(), CatalogError> {
        self.debouncer.submit(spec)
    }

    pub fn results(&self) -> watch::Receiver<Vec<Dao>> {
        self.results.clone()
    }

    pub fn current(&self) -> Vec<Dao> {
        self.results.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    #[test]
    fn test_clamp_window() {
        assert_eq!(clamp_window(Duration::from_millis(10)), MIN_DEBOUNCE_WINDOW);
        assert_eq!(
            clamp_window(Duration::from_millis(200)),
            Duration::from_millis(200)
        );
        assert_eq!(clamp_window(Duration::from_secs(2)), MAX_DEBOUNCE_WINDOW);
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_emits_only_last_value() {
        let (debouncer, mut settled) = debounce(Duration::from_millis(300));
        debouncer.submit("d").unwrap();
        debouncer.submit("de").unwrap();
        debouncer.submit("def").unwrap();

        assert_eq!(settled.recv().await, Some("def"));
        assert!(
            timeout(Duration::from_secs(1), settled.recv())
                .await
                .is_err()
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_value_restarts_window() {
        let (debouncer, mut settled) = debounce(Duration::from_millis(300));

        debouncer.submit(1).unwrap();
        sleep(Duration::from_millis(400)).await;
        assert_eq!(settled.try_recv().ok(), Some(1));

        debouncer.submit(2).unwrap();
        sleep(Duration::from_millis(200)).await;
        assert!(settled.try_recv().is_err());
        debouncer.submit(3).unwrap();
        sleep(Duration::from_millis(200)).await;
        // 400ms after the first of the two, but only 200ms after the last.
        assert!(settled.try_recv().is_err());

        assert_eq!(settled.recv().await, Some(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_flushes_pending_value() {
        let (debouncer, mut settled) = debounce(Duration::from_millis(300));
        debouncer.submit(7).unwrap();
        drop(debouncer);

        assert_eq!(settled.recv().await, Some(7));
        assert_eq!(settled.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_filter_session_publishes_settled_result() {
        let session = FilterSession::spawn(Arc::new(Catalog::sample()), DEFAULT_DEBOUNCE_WINDOW);
        assert_eq!(session.current().len(), 12);

        let mut results = session.results();
        session
            .update(FilterSpec::new().with_search("p"))
            .unwrap();
        session
            .update(FilterSpec::new().with_search("pixel"))
            .unwrap();

        results.changed().await.unwrap();
        let ids: Vec<_> = results.borrow().iter().map(|dao| dao.id.clone()).collect();
        assert_eq!(ids, vec!["2".to_string(), "9".to_string()]);
        assert_eq!(session.current().len(), 2);
    }
}
