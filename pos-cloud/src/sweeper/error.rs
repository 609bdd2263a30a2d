use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Sweep errors
///
/// - `Query`: the candidate query failed, the whole run is aborted
/// - `Transition`: one store failed, the run continues
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("Failed to query expired stores: {0}")]
    Query(#[source] BoxError),

    #[error("Failed to expire store {store_id}: {source}")]
    Transition {
        store_id: String,
        #[source]
        source: BoxError,
    },
}
