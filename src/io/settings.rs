use crate::defaults::*;
use crate::scc::mixer::{Mixer, MixerError, SimpleMixer};
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

fn default_verbose() -> i8 {
    0
}
fn default_scf_max_cycles() -> usize {
    MAX_ITER
}
fn default_scf_charge_conv() -> f64 {
    SCF_CHARGE_CONV
}
fn default_mixer_kind() -> MixerKind {
    MixerKind::Simple
}
fn default_mixing_coefficient() -> f64 {
    LINEAR_MIXING_COEFFICIENT
}
fn default_mixer_config() -> MixerConfig {
    MixerConfig {
        kind: default_mixer_kind(),
        mixing_coefficient: default_mixing_coefficient(),
    }
}
fn default_scc_config() -> SccConfig {
    SccConfig {
        scf_max_cycles: default_scf_max_cycles(),
        scf_charge_conv: default_scf_charge_conv(),
        mixer: default_mixer_config(),
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Configuration {
    #[serde(default = "default_verbose")]
    pub verbose: i8,
    #[serde(default = "default_scc_config")]
    pub scf: SccConfig,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            verbose: default_verbose(),
            scf: default_scc_config(),
        }
    }
}

impl FromStr for Configuration {
    type Err = anyhow::Error;

    fn from_str(config_string: &str) -> Result<Self> {
        toml::from_str(config_string).context("Unable to parse the configuration")
    }
}

impl Configuration {
    /// Reads the configuration from `path`. If the file does not exist the default
    /// settings are used.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path: &Path = path.as_ref();
        if !path.exists() {
            info!(
                "config file {} not found, the default settings are used",
                path.display()
            );
            return Ok(Self::default());
        }
        let config_string: String = fs::read_to_string(path)
            .with_context(|| format!("Unable to read config file {}", path.display()))?;
        let config: Self = config_string
            .parse()
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        debug!("read configuration from {}", path.display());
        Ok(config)
    }

    /// Reads `scc_mixer.toml` from `dir`. If it does not exist the default
    /// settings are written to it.
    pub fn new_in<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let config_file_path: PathBuf = dir.as_ref().join(CONFIG_FILE_NAME);
        let config: Self = Self::load(&config_file_path)?;
        if !config_file_path.exists() {
            config.write(&config_file_path)?;
        }
        Ok(config)
    }

    /// Same as [`Configuration::new_in`] for the current working directory.
    pub fn new() -> Result<Self> {
        Self::new_in(".")
    }

    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path: &Path = path.as_ref();
        let config_string: String =
            toml::to_string(self).context("Unable to serialize the configuration")?;
        fs::write(path, config_string)
            .with_context(|| format!("Unable to write config file {}", path.display()))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SccConfig {
    #[serde(default = "default_scf_max_cycles")]
    pub scf_max_cycles: usize,
    #[serde(default = "default_scf_charge_conv")]
    pub scf_charge_conv: f64,
    #[serde(default = "default_mixer_config")]
    pub mixer: MixerConfig,
}

impl Default for SccConfig {
    fn default() -> Self {
        default_scc_config()
    }
}

/// Mixing schemes that can be selected in the config file
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MixerKind {
    Simple,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MixerConfig {
    #[serde(default = "default_mixer_kind")]
    pub kind: MixerKind,
    #[serde(default = "default_mixing_coefficient")]
    pub mixing_coefficient: f64,
}

impl Default for MixerConfig {
    fn default() -> Self {
        default_mixer_config()
    }
}

impl MixerConfig {
    /// Constructs the configured mixer. The mixing parameters are validated here,
    /// so an invalid config file is rejected before the SCC routine starts.
    pub fn build(&self) -> Result<Box<dyn Mixer>, MixerError> {
        match self.kind {
            MixerKind::Simple => Ok(Box::new(SimpleMixer::new(self.mixing_coefficient)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::prelude::*;

    #[test]
    fn empty_config_gives_defaults() {
        let config: Configuration = "".parse().unwrap();
        assert_eq!(config, Configuration::default());
        assert_eq!(config.scf.scf_max_cycles, MAX_ITER);
        assert_eq!(config.scf.scf_charge_conv, SCF_CHARGE_CONV);
        assert_eq!(config.scf.mixer.kind, MixerKind::Simple);
        assert_eq!(config.scf.mixer.mixing_coefficient, LINEAR_MIXING_COEFFICIENT);
    }

    #[test]
    fn partial_mixer_section() {
        let config: Configuration = "[scf.mixer]\nmixing_coefficient = 0.2\n".parse().unwrap();
        assert_eq!(config.scf.mixer.kind, MixerKind::Simple);
        assert_eq!(config.scf.mixer.mixing_coefficient, 0.2);
        assert_eq!(config.scf.scf_max_cycles, MAX_ITER);
    }

    #[test]
    fn unknown_mixer_is_rejected() {
        let result = "[scf.mixer]\nkind = \"broyden\"\n".parse::<Configuration>();
        assert!(result.is_err());
    }

    #[test]
    fn build_validates_coefficient() {
        let config = MixerConfig {
            kind: MixerKind::Simple,
            mixing_coefficient: -0.5,
        };
        assert!(matches!(
            config.build(),
            Err(MixerError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn built_mixer_is_usable() {
        let mut mixer = MixerConfig::default().build().unwrap();
        assert_eq!(mixer.name(), "simple");
        mixer.reset(2).unwrap();
        let mut q: Array1<f64> = array![0.0, 1.0];
        mixer.mix(q.view_mut(), array![1.0, 1.0].view()).unwrap();
        assert_eq!(
            q,
            array![LINEAR_MIXING_COEFFICIENT, 1.0 + LINEAR_MIXING_COEFFICIENT]
        );
    }
}
