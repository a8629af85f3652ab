
use crate::model::Result;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// Last-known-good snapshot of one table, plus an in-flight flag for the
/// dashboard's loading indicator. The flag is true exactly while a refresh
/// is pending; a failed refresh leaves the previous rows in place.
pub struct TableView<E> {
    rows: RwLock<Vec<E>>,
    in_flight: AtomicBool,
}

impl<E: Clone> TableView<E> {
    pub fn new() -> Self {
        TableView {
            rows: RwLock::new(Vec::new()),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub async fn refresh_with<F, Fut>(&self, fetch: F) -> Result<Vec<E>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<E>>>,
    {
        self.in_flight.store(true, Ordering::SeqCst);
        let res = fetch().await;
        self.in_flight.store(false, Ordering::SeqCst);

        let rows = res?;
        *self.rows.write().await = rows.clone();
        Ok(rows)
    }

    pub async fn last(&self) -> Vec<E> {
        self.rows.read().await.clone()
    }
}

impl<E: Clone> Default for TableView<E> {
    fn default() -> Self {
        Self::new()
    }
}
