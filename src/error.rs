use thiserror::Error;

use crate::dataset::DatasetId;

pub type Result<T> = std::result::Result<T, ResolveError>;

/// Outcomes of a title lookup other than a match.
///
/// The first three are routine and map to user-facing replies; `Internal`
/// is the only hard failure.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no title given")]
    EmptyQuery,

    #[error("dataset `{dataset}` is unavailable: {reason}")]
    DatasetUnavailable { dataset: DatasetId, reason: String },

    #[error("could not find `{hint}`")]
    NotFound { hint: String },

    #[error("internal error: {0}")]
    Internal(String),
}

impl ResolveError {
    pub(crate) fn unavailable(dataset: &DatasetId, reason: impl std::fmt::Display) -> Self {
        Self::DatasetUnavailable {
            dataset: dataset.clone(),
            reason: reason.to_string(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyQuery => "EMPTY_QUERY",
            Self::DatasetUnavailable { .. } => "DATASET_UNAVAILABLE",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// `true` for outcomes a caller answers with a normal reply.
    pub fn is_routine(&self) -> bool {
        !matches!(self, Self::Internal(_))
    }
}
