use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::OnceCell;

use battlecard::{load_all, LoadError, ReferenceData};

/// Shared server state: the data directory plus the reference tables, loaded
/// on first use and retained for the process lifetime.
#[derive(Clone)]
pub struct AppState {
    data_dir: PathBuf,
    tables: Arc<OnceCell<ReferenceData>>,
}

impl AppState {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            tables: Arc::new(OnceCell::new()),
        }
    }

    /// A successful load is cached; a failed one leaves the cell empty so
    /// the next request gets a fresh attempt.
    pub async fn reference_data(&self) -> Result<&ReferenceData, LoadError> {
        self.tables
            .get_or_try_init(|| load_all(&self.data_dir))
            .await
    }
}
