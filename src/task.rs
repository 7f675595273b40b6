//! Bundle of run-level settings and algorithm hyperparameters.
use crate::{general::GeneralConfig, noisy_dqn::NoisyDqnConfig};
use anyhow::Result;
use log::info;
use serde::{Deserialize, Serialize};
use std::{
    default::Default,
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of a task, pairing [`GeneralConfig`] with [`NoisyDqnConfig`].
///
/// A task is the unit a run is parameterized with. Constructing the default
/// bundle has no side effects and instances share no state.
#[derive(Debug, Default, Deserialize, Serialize, PartialEq, Clone)]
pub struct TaskConfig {
    /// Run-level settings.
    pub general: GeneralConfig,

    /// Algorithm hyperparameters.
    pub algo: NoisyDqnConfig,
}

impl TaskConfig {
    /// Sets the run-level settings.
    pub fn general(mut self, v: GeneralConfig) -> Self {
        self.general = v;
        self
    }

    /// Sets the algorithm hyperparameters.
    pub fn algo(mut self, v: NoisyDqnConfig) -> Self {
        self.algo = v;
        self
    }

    /// Constructs [`TaskConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path_ = path.as_ref().to_owned();
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        info!("Load task config from {}", path_.display());
        Ok(b)
    }

    /// Saves [`TaskConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path_ = path.as_ref().to_owned();
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        info!("Save task config into {}", path_.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::general::Mode;
    use tempdir::TempDir;

    #[test]
    fn test_serde_task_config() -> Result<()> {
        let config = TaskConfig::default()
            .general(GeneralConfig::default().mode(Mode::Test).seed(7))
            .algo(NoisyDqnConfig::default().batch_size(32));

        let dir = TempDir::new("task_config")?;
        let path = dir.path().join("task_config.yaml");

        config.save(&path)?;
        let config_ = TaskConfig::load(&path)?;
        assert_eq!(config, config_);
        Ok(())
    }

    #[test]
    fn test_default_bundle() {
        let config = TaskConfig::default();
        assert_eq!(config.general, GeneralConfig::default());
        assert_eq!(config.algo, NoisyDqnConfig::default());
    }
}
