//! Charge mixers for the self-consistent-charge iteration of DFTB calculations.
//!
//! A [`Mixer`] takes the current charge estimate together with the residual of the
//! last SCC step and updates the estimate in place. The concrete mixing policy is
//! chosen at configuration time, see [`MixerConfig`].
pub mod defaults;
pub mod io;
pub mod scc;
pub mod utils;

pub use io::settings::{Configuration, MixerConfig, MixerKind, SccConfig};
pub use scc::mixer::{Mixer, MixerError, SimpleMixer};
pub use scc::{run_fixed_point, FixedPointResult, SccError};
