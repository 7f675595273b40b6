#![warn(missing_docs)]
//! Hyperparameter configuration for a NoisyDQN agent.
//!
//! This crate holds the configuration records a training run of the agent is
//! parameterized with: run-level settings ([`GeneralConfig`]), algorithm
//! hyperparameters ([`NoisyDqnConfig`]) and the bundle of the two
//! ([`TaskConfig`]). All records are plain data with fixed defaults,
//! overridable through consuming setters, and persist as YAML.
pub mod general;
pub mod noisy_dqn;

mod task;
pub use general::{Device, GeneralConfig, Mode};
pub use noisy_dqn::NoisyDqnConfig;
pub use task::TaskConfig;
