use crate::constraint::ConstraintError;

/// Errors reported while generating samples or building histograms.
///
/// None of these are fatal to a run: each one skips the plot step that
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid {name}: {source}")]
    InvalidParameter {
        name: &'static str,
        #[source]
        source: ConstraintError,
    },

    #[error("event {} is outside the valid range 1..={events}", .index + 1)]
    IndexOutOfRange { index: usize, events: usize },

    #[error("no data for {0}")]
    EmptyData(&'static str),
}

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A parameter is outside its structurally valid range.
    InvalidParameter,

    /// An aggregation produced no samples.
    EmptyData,
}

impl Error {
    pub(crate) fn invalid(name: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidParameter { name, source }
    }

    /// Returns the broad classification of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidParameter { .. } | Self::IndexOutOfRange { .. } => {
                ErrorKind::InvalidParameter
            }
            Self::EmptyData(_) => ErrorKind::EmptyData,
        }
    }
}
