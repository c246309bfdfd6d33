use std::sync::Arc;

/// Per-repository outcome of an issue fetch
#[derive(Debug, Clone)]
pub enum ProviderResult<T> {
    /// The operation succeeded and data was found.
    Found(T),

    /// The requested repository was not found.
    RepoNotFound,

    /// An error occurred during the operation for this repository.
    Error(Arc<ohno::AppError>),
}
