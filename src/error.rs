use thiserror::Error;

/// Errors produced while constructing visual encodings.
///
/// Only construction-time problems are errors: a malformed color scale would
/// corrupt every downstream lookup, so it is rejected eagerly. Runtime
/// degeneracies (missing values, collapsed ranges, empty samples) resolve to
/// documented sentinel outputs instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodingError {
    #[error("at least {required} colors are required to build a color scale, got {actual}")]
    NotEnoughColors { required: usize, actual: usize },
}
