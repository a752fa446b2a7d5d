//! Storage initialization
//!
//! Handles first-run setup: directory creation and default category seeding.

use tracing::debug;

use crate::config::paths::TrackerPaths;
use crate::error::FintrackError;

use super::{ExpenseStore, StorageBackend};

/// Open the data file with `backend`, creating and seeding it on first use
///
/// Safe to call on every start; an existing file is left untouched.
pub fn initialize_storage(
    paths: &TrackerPaths,
    backend: StorageBackend,
) -> Result<Box<dyn ExpenseStore>, FintrackError> {
    paths.ensure_data_dir()?;

    let fresh = needs_initialization(paths);
    let store = backend.create_store(paths.data_file());
    store.initialize()?;

    debug!(
        path = %paths.data_file().display(),
        ?backend,
        fresh,
        "storage ready"
    );

    Ok(store)
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &TrackerPaths) -> bool {
    !paths.is_initialized()
}
