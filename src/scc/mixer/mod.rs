use ndarray::{ArrayView1, ArrayViewMut1};
use thiserror::Error;

mod simple;
pub use simple::SimpleMixer;

/// Errors that are reported by a [`Mixer`] to the SCC routine that owns it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MixerError {
    /// A mixing parameter outside of its valid domain was passed at construction.
    #[error("invalid mixing parameter: {name} = {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    /// A call was made with a vector length that does not fit the current episode.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The mixer was used before it was reset.
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
}

/// Trait that allows mixing of partial charge differences for the acceleration
/// of the SCC routine
///
/// A mixer is reset once at the start of every SCC calculation with the number of
/// mixed quantities and is then called exactly once per iteration.
pub trait Mixer {
    /// Name of the mixing scheme, used for the output of the SCC routine.
    fn name(&self) -> &'static str;

    /// Starts a new mixing episode for vectors of length `n`.
    fn reset(&mut self, n: usize) -> Result<(), MixerError>;

    /// Mixes the residual of the current iteration into `estimate`.
    fn mix(
        &mut self,
        estimate: ArrayViewMut1<f64>,
        residual: ArrayView1<f64>,
    ) -> Result<(), MixerError>;
}

/// Checks that both vectors have the length of the current mixing episode.
pub(crate) fn check_lengths(
    n: usize,
    estimate: &ArrayViewMut1<f64>,
    residual: &ArrayView1<f64>,
) -> Result<(), MixerError> {
    if estimate.len() != n || residual.len() != n {
        return Err(MixerError::InvalidArgument(format!(
            "expected vectors of length {}, found estimate of length {} and residual of length {}",
            n,
            estimate.len(),
            residual.len()
        )));
    }
    Ok(())
}

/// Checks that the length of a new mixing episode is positive.
pub(crate) fn check_episode_length(n: usize) -> Result<(), MixerError> {
    if n == 0 {
        return Err(MixerError::InvalidArgument(String::from(
            "the number of mixed quantities has to be positive",
        )));
    }
    Ok(())
}
