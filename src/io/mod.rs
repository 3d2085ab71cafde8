pub(crate) mod settings;

pub use settings::{Configuration, MixerConfig, MixerKind, SccConfig};
