//! Reinforcement-learning environment.
//!
//! ## Overview
//!
//! - **FarkleEnv**: steps a `FarkleEngine` with a 128-way discrete action
//! - **EnvAction**: keep mask plus roll/bank decision
//! - **StepResult**: observation, shaped reward, episode flags, diagnostics
//!
//! ## Usage
//!
//! ```rust,ignore
//! use farkle_engine::training::{EnvConfig, FarkleEnv};
//!
//! let mut env = FarkleEnv::new(EnvConfig::default())?;
//! let mut obs = env.reset(Some(42))?;
//!
//! loop {
//!     let action = policy.act(&obs);
//!     let result = env.step(action)?;
//!     obs = result.observation;
//!     if result.terminated || result.truncated {
//!         break;
//!     }
//! }
//! ```

pub mod env;

pub use env::{EnvAction, EnvConfig, FarkleEnv, StepInfo, StepResult, ACTION_SPACE_SIZE};
