use crate::defaults;
use crate::scc::mixer::{check_episode_length, check_lengths, Mixer, MixerError};
use log::trace;
use ndarray::{ArrayView1, ArrayViewMut1};

/// Simple linear mixer
///
/// The new estimate is obtained as q_next = q + alpha * dq, where dq is the
/// residual of the current iteration. Apart from the mixing coefficient the mixer
/// carries no state between iterations.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleMixer {
    // mixing parameter
    alpha: f64,
    // length of the mixed vectors, None until the first reset
    n: Option<usize>,
}

impl SimpleMixer {
    pub fn new(alpha: f64) -> Result<SimpleMixer, MixerError> {
        if !(alpha > 0.0) || !alpha.is_finite() {
            return Err(MixerError::InvalidParameter {
                name: "mixing_coefficient",
                value: alpha,
            });
        }
        Ok(SimpleMixer { alpha, n: None })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Default for SimpleMixer {
    fn default() -> Self {
        SimpleMixer {
            alpha: defaults::LINEAR_MIXING_COEFFICIENT,
            n: None,
        }
    }
}

impl Mixer for SimpleMixer {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn reset(&mut self, n: usize) -> Result<(), MixerError> {
        check_episode_length(n)?;
        self.n = Some(n);
        Ok(())
    }

    fn mix(
        &mut self,
        mut estimate: ArrayViewMut1<f64>,
        residual: ArrayView1<f64>,
    ) -> Result<(), MixerError> {
        let n: usize = self
            .n
            .ok_or(MixerError::InvalidState("mix was called before reset"))?;
        check_lengths(n, &estimate, &residual)?;
        trace!("simple mixing of {} values with alpha = {}", n, self.alpha);
        estimate.scaled_add(self.alpha, &residual);
        Ok(())
    }
}
