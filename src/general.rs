//! Run-level configuration.
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    default::Default,
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Run mode of a task.
#[derive(Clone, Debug, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Optimizes the agent.
    Train,

    /// Evaluates a trained agent without optimization steps.
    Test,
}

/// Device on which networks are placed.
///
/// This enum is added because backend device types do not support
/// serialization.
#[derive(Clone, Debug, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    /// The main CPU device.
    Cpu,

    /// The main GPU device.
    Cuda,
}

/// Run-level settings shared by training and evaluation.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct GeneralConfig {
    /// Name of the environment.
    pub env_name: String,

    /// Name of the algorithm.
    pub algo_name: String,

    /// Run mode, training or testing.
    pub mode: Mode,

    /// Random seed.
    pub seed: u64,

    /// Device on which networks are placed.
    pub device: Device,

    /// The number of episodes for training.
    pub train_episodes: usize,

    /// The number of episodes for testing.
    pub test_episodes: usize,

    /// The maximum number of environment steps per episode.
    pub max_steps: usize,

    /// If `true`, model parameters are restored from [`load_path`](Self::load_path).
    pub load_checkpoint: bool,

    /// Directory from which model parameters are restored.
    pub load_path: String,

    /// Shows the reward figure after the run.
    pub show_fig: bool,

    /// Saves the reward figure after the run.
    pub save_fig: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            env_name: "CartPole-v1".to_string(),
            algo_name: "DQN".to_string(),
            mode: Mode::Train,
            seed: 1,
            device: Device::Cuda,
            train_episodes: 200,
            test_episodes: 10,
            max_steps: 200,
            load_checkpoint: false,
            load_path: "tasks".to_string(),
            show_fig: false,
            save_fig: true,
        }
    }
}

impl GeneralConfig {
    /// Sets the name of the environment.
    pub fn env_name(mut self, v: impl Into<String>) -> Self {
        self.env_name = v.into();
        self
    }

    /// Sets the name of the algorithm.
    pub fn algo_name(mut self, v: impl Into<String>) -> Self {
        self.algo_name = v.into();
        self
    }

    /// Sets the run mode.
    pub fn mode(mut self, v: Mode) -> Self {
        self.mode = v;
        self
    }

    /// Sets the random seed.
    pub fn seed(mut self, v: u64) -> Self {
        self.seed = v;
        self
    }

    /// Sets the device.
    pub fn device(mut self, v: Device) -> Self {
        self.device = v;
        self
    }

    /// Sets the number of episodes for training.
    pub fn train_episodes(mut self, v: usize) -> Self {
        self.train_episodes = v;
        self
    }

    /// Sets the number of episodes for testing.
    pub fn test_episodes(mut self, v: usize) -> Self {
        self.test_episodes = v;
        self
    }

    /// Sets the maximum number of steps per episode.
    pub fn max_steps(mut self, v: usize) -> Self {
        self.max_steps = v;
        self
    }

    /// Restores model parameters from [`load_path`](Self::load_path) before the run.
    pub fn load_checkpoint(mut self, v: bool) -> Self {
        self.load_checkpoint = v;
        self
    }

    /// Sets the directory from which model parameters are restored.
    pub fn load_path(mut self, v: impl Into<String>) -> Self {
        self.load_path = v.into();
        self
    }

    /// Shows the reward figure after the run.
    pub fn show_fig(mut self, v: bool) -> Self {
        self.show_fig = v;
        self
    }

    /// Saves the reward figure after the run.
    pub fn save_fig(mut self, v: bool) -> Self {
        self.save_fig = v;
        self
    }

    /// Constructs [`GeneralConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`GeneralConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = GeneralConfig::default();
        assert_eq!(config.env_name, "CartPole-v1");
        assert_eq!(config.algo_name, "DQN");
        assert_eq!(config.mode, Mode::Train);
        assert_eq!(config.seed, 1);
        assert_eq!(config.device, Device::Cuda);
        assert_eq!(config.train_episodes, 200);
        assert_eq!(config.test_episodes, 10);
        assert_eq!(config.max_steps, 200);
        assert!(!config.load_checkpoint);
        assert_eq!(config.load_path, "tasks");
        assert!(!config.show_fig);
        assert!(config.save_fig);
    }

    #[test]
    fn test_default_is_idempotent() {
        assert_eq!(GeneralConfig::default(), GeneralConfig::default());
    }

    #[test]
    fn test_setters_override_single_field() {
        let config = GeneralConfig::default().mode(Mode::Test).seed(42);
        assert_eq!(config.mode, Mode::Test);
        assert_eq!(config.seed, 42);
        assert_eq!(config.env_name, "CartPole-v1");
    }

    #[test]
    fn test_lowercase_serde_forms() -> Result<()> {
        assert_eq!(serde_yaml::from_str::<Mode>("train")?, Mode::Train);
        assert_eq!(serde_yaml::from_str::<Mode>("test")?, Mode::Test);
        assert_eq!(serde_yaml::from_str::<Device>("cpu")?, Device::Cpu);
        assert_eq!(serde_yaml::from_str::<Device>("cuda")?, Device::Cuda);
        assert!(serde_yaml::to_string(&Device::Cuda)?.contains("cuda"));
        Ok(())
    }
}
