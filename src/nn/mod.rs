//! Policy network input encoding.
//!
//! ## Usage
//!
//! ```
//! use farkle_engine::core::EngineConfig;
//! use farkle_engine::nn::{ObservationEncoder, OBSERVATION_SIZE};
//! use farkle_engine::rules::FarkleEngine;
//!
//! let engine = FarkleEngine::new(&EngineConfig::new().with_seed(1)).unwrap();
//! let obs = ObservationEncoder::new().encode(&engine);
//! assert_eq!(obs.len(), OBSERVATION_SIZE);
//! ```

pub mod encoder;

pub use encoder::{Observation, ObservationEncoder, OBSERVATION_SIZE};
