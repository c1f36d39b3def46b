use std::{io, path::PathBuf};

pub use self::{core::*, engine::*, source::*};

pub mod core;
pub mod engine;
pub mod source;

/// Failure of a [`SampleSource`] to produce the next sample.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum SampleError {
    #[display("failed to read match data: {}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[display("failed to parse match data: {}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[display("match index is empty")]
    EmptyIndex,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum GameError {
    #[display("cannot {operation} while {state}")]
    InvalidState {
        operation: Operation,
        state: SessionState,
    },
    #[display("no sample available")]
    DataUnavailable(SampleError),
    #[display("prediction {prediction} exceeds the goal limit")]
    Validation {
        #[error(not(source))]
        prediction: Scoreline,
    },
}

/// Session operation that is only valid in a specific [`SessionState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Operation {
    #[display("submit a prediction")]
    SubmitPrediction,
    #[display("advance to the next round")]
    Advance,
}
