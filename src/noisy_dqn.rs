//! Hyperparameters of the NoisyDQN agent.
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    default::Default,
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Hyperparameters of the NoisyDQN agent.
///
/// Covers the prioritized replay buffer (`alpha`, `beta_start`,
/// `beta_frames`), the epsilon-greedy exploration schedule, the Q-network
/// width and the optimization settings. Values are not range-checked here;
/// the training loop owning this record is responsible for that.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct NoisyDqnConfig {
    /// Exponent for prioritization. A value of 0 results in uniform sampling.
    pub alpha: f32,

    /// Initial value of the importance sampling exponent.
    pub beta_start: f32,

    /// The number of frames over which `beta` is annealed to 1.
    pub beta_frames: usize,

    /// Epsilon at the start of training.
    ///
    /// Setting `epsilon_start` equal to `epsilon_end` gives a fixed epsilon.
    pub epsilon_start: f64,

    /// Epsilon at the end of the decay.
    pub epsilon_end: f64,

    /// Decay rate of epsilon in environment steps.
    pub epsilon_decay: usize,

    /// The number of units in hidden layers of the Q-network.
    pub hidden_dim: i64,

    /// Discount factor.
    pub gamma: f64,

    /// Learning rate.
    pub lr: f64,

    /// Capacity of the replay buffer.
    pub buffer_size: usize,

    /// Batch size.
    pub batch_size: usize,

    /// Interval of target network updates in environment steps.
    pub target_update: usize,
}

impl Default for NoisyDqnConfig {
    fn default() -> Self {
        Self {
            alpha: 0.6,
            beta_start: 0.4,
            beta_frames: 600,
            epsilon_start: 0.95,
            epsilon_end: 0.01,
            epsilon_decay: 500,
            hidden_dim: 256,
            gamma: 0.95,
            lr: 0.0001,
            buffer_size: 100_000,
            batch_size: 64,
            target_update: 800,
        }
    }
}

impl NoisyDqnConfig {
    /// Sets the prioritization exponent.
    pub fn alpha(mut self, v: f32) -> Self {
        self.alpha = v;
        self
    }

    /// Sets the initial importance sampling exponent.
    pub fn beta_start(mut self, v: f32) -> Self {
        self.beta_start = v;
        self
    }

    /// Sets the number of frames for beta annealing.
    pub fn beta_frames(mut self, v: usize) -> Self {
        self.beta_frames = v;
        self
    }

    /// Sets the epsilon value at the start.
    pub fn epsilon_start(mut self, v: f64) -> Self {
        self.epsilon_start = v;
        self
    }

    /// Sets the epsilon value at the end of the decay.
    pub fn epsilon_end(mut self, v: f64) -> Self {
        self.epsilon_end = v;
        self
    }

    /// Sets the decay rate of epsilon.
    pub fn epsilon_decay(mut self, v: usize) -> Self {
        self.epsilon_decay = v;
        self
    }

    /// Sets the number of units in hidden layers.
    pub fn hidden_dim(mut self, v: i64) -> Self {
        self.hidden_dim = v;
        self
    }

    /// Sets the discount factor.
    pub fn gamma(mut self, v: f64) -> Self {
        self.gamma = v;
        self
    }

    /// Sets the learning rate.
    pub fn lr(mut self, v: f64) -> Self {
        self.lr = v;
        self
    }

    /// Sets the capacity of the replay buffer.
    pub fn buffer_size(mut self, v: usize) -> Self {
        self.buffer_size = v;
        self
    }

    /// Sets the batch size.
    pub fn batch_size(mut self, v: usize) -> Self {
        self.batch_size = v;
        self
    }

    /// Sets the interval of target network updates.
    pub fn target_update(mut self, v: usize) -> Self {
        self.target_update = v;
        self
    }

    /// Constructs [`NoisyDqnConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`NoisyDqnConfig`].
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
        let config = NoisyDqnConfig::default();
        assert_eq!(config.alpha, 0.6);
        assert_eq!(config.beta_start, 0.4);
        assert_eq!(config.beta_frames, 600);
        assert_eq!(config.epsilon_start, 0.95);
        assert_eq!(config.epsilon_end, 0.01);
        assert_eq!(config.epsilon_decay, 500);
        assert_eq!(config.hidden_dim, 256);
        assert_eq!(config.gamma, 0.95);
        assert_eq!(config.lr, 0.0001);
        assert_eq!(config.buffer_size, 100_000);
        assert_eq!(config.batch_size, 64);
        assert_eq!(config.target_update, 800);
    }

    #[test]
    fn test_default_is_idempotent() {
        assert_eq!(NoisyDqnConfig::default(), NoisyDqnConfig::default());
    }

    #[test]
    fn test_setters_override_single_field() {
        let config = NoisyDqnConfig::default().batch_size(128).gamma(0.99);
        assert_eq!(config.batch_size, 128);
        assert_eq!(config.gamma, 0.99);
        assert_eq!(config.buffer_size, 100_000);
    }
}
