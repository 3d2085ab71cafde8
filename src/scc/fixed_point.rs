use crate::io::SccConfig;
use crate::scc::logging::*;
use crate::scc::mixer::{Mixer, MixerError};
use crate::utils::Timer;
use log::{debug, log_enabled, Level};
use ndarray::prelude::*;
use ndarray_stats::QuantileExt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SccError {
    #[error(
        "SCC-Routine failed in Iteration: {iterations}. The largest residual \
         at the last iteration was {max_residual}"
    )]
    NotConverged { iterations: usize, max_residual: f64 },
    #[error("the residual in iteration {iteration} contains non-finite values")]
    NonFiniteResidual { iteration: usize },
    #[error("the update returned {found} values, but {expected} charges are mixed")]
    LengthMismatch { expected: usize, found: usize },
    #[error(transparent)]
    Mixer(#[from] MixerError),
}

/// Outcome of a converged SCC iteration
#[derive(Debug, Clone)]
pub struct FixedPointResult {
    pub solution: Array1<f64>,
    pub iterations: usize,
    pub max_residual: f64,
}

/// Iterates q = update(q) until the largest element of the residual update(q) - q
/// drops below `scf_charge_conv`. Between the iterations the residual is mixed into
/// the current estimate by `mixer`, which is reset at the start.
///
/// `update` computes the new charges from the current estimate, e.g. by building
/// and diagonalizing the charge dependent Hamiltonian.
pub fn run_fixed_point<F>(
    mixer: &mut dyn Mixer,
    guess: Array1<f64>,
    config: &SccConfig,
    mut update: F,
) -> Result<FixedPointResult, SccError>
where
    F: FnMut(ArrayView1<f64>) -> Array1<f64>,
{
    let timer: Timer = Timer::start();
    let n: usize = guess.len();
    let max_iter: usize = config.scf_max_cycles;
    let conv: f64 = config.scf_charge_conv;

    mixer.reset(n)?;
    if log_enabled!(Level::Info) {
        print_scc_init(mixer.name(), n, max_iter, conv);
    }

    let mut q: Array1<f64> = guess;
    let mut max_residual: f64 = f64::INFINITY;

    for i in 0..max_iter {
        let q_out: Array1<f64> = update(q.view());
        if q_out.len() != n {
            return Err(SccError::LengthMismatch {
                expected: n,
                found: q_out.len(),
            });
        }
        let residual: Array1<f64> = &q_out - &q;
        // max() fails on NaN comparisons, a single NaN or inf is caught by the finiteness check
        max_residual = match residual.mapv(f64::abs).max() {
            Ok(value) if value.is_finite() => *value,
            _ => return Err(SccError::NonFiniteResidual { iteration: i + 1 }),
        };
        if log_enabled!(Level::Info) {
            print_scc_iteration(i, max_residual);
        }

        if max_residual < conv {
            if log_enabled!(Level::Info) {
                print_scc_end(&timer, i + 1, true);
            }
            return Ok(FixedPointResult {
                solution: q,
                iterations: i + 1,
                max_residual,
            });
        }
        mixer.mix(q.view_mut(), residual.view())?;
        debug!("charges after mixing in iteration {}: {}", i + 1, q);
    }

    if log_enabled!(Level::Info) {
        print_scc_end(&timer, max_iter, false);
    }
    Err(SccError::NotConverged {
        iterations: max_iter,
        max_residual,
    })
}
