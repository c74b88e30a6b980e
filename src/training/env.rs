//! Step-based training environment.
//!
//! Wraps a `FarkleEngine` behind a 128-way discrete action space and a
//! shaped reward so an agent can learn the game through the same turn
//! operations a human player uses.
//!
//! ## Action space
//!
//! `action = keep_mask + 64 * bank`, where bit `i` of `keep_mask` asks for
//! die `i` to be kept. Actions `0..64` keep then roll, `64..128` keep then
//! bank.

use serde::{Deserialize, Serialize};

use crate::core::{DieId, EngineConfig, EngineError, FaceSource, GameRng, WINNING_SCORE};
use crate::dice::DieState;
use crate::nn::{Observation, ObservationEncoder};
use crate::rules::{FarkleEngine, GameStatus};

/// Number of discrete actions.
pub const ACTION_SPACE_SIZE: usize = 128;

const BANK_OFFSET: usize = 64;

/// Configuration for a `FarkleEnv`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Table and dice seed for the wrapped engine.
    pub engine: EngineConfig,

    /// Charged for each die the agent asked for but could not keep, for a
    /// roll without a new keep, and for an empty bank.
    pub illegal_action_penalty: f32,

    /// Subtracted when the agent's roll farkles.
    pub farkle_penalty: f32,

    /// Reward for the winning bank.
    pub win_reward: f32,

    /// Banked points are divided by this before being added to the reward.
    pub points_scale: f32,

    /// Score features in observations are divided by this.
    pub observation_scale: f32,

    /// Steps before an episode is truncated. `None` never truncates.
    pub max_steps: Option<usize>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            illegal_action_penalty: 10.0,
            farkle_penalty: 0.5,
            win_reward: 10.0,
            points_scale: 1000.0,
            observation_scale: WINNING_SCORE as f32,
            max_steps: None,
        }
    }
}

impl EnvConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the engine configuration.
    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }

    /// Set the illegal action penalty.
    pub fn with_illegal_action_penalty(mut self, penalty: f32) -> Self {
        self.illegal_action_penalty = penalty;
        self
    }

    /// Set the penalty for a farkled roll.
    pub fn with_farkle_penalty(mut self, penalty: f32) -> Self {
        self.farkle_penalty = penalty;
        self
    }

    /// Set the reward for the winning bank.
    pub fn with_win_reward(mut self, reward: f32) -> Self {
        self.win_reward = reward;
        self
    }

    /// Set the divisor for banked points.
    pub fn with_points_scale(mut self, scale: f32) -> Self {
        self.points_scale = scale;
        self
    }

    /// Set the divisor for score features in observations.
    pub fn with_observation_scale(mut self, scale: f32) -> Self {
        self.observation_scale = scale;
        self
    }

    /// Set the episode step limit.
    pub fn with_max_steps(mut self, steps: usize) -> Self {
        self.max_steps = Some(steps);
        self
    }
}

/// A decoded discrete action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnvAction {
    /// Bit `i` set: the agent wants die `i` kept.
    pub keep_mask: u8,
    /// Bank after keeping; otherwise roll.
    pub bank: bool,
}

impl EnvAction {
    /// Decode an action index.
    ///
    /// ```
    /// use farkle_engine::training::EnvAction;
    ///
    /// let action = EnvAction::from_index(64 + 0b101).unwrap();
    /// assert!(action.bank);
    /// assert_eq!(action.keep_mask, 0b101);
    /// assert_eq!(action.index(), 69);
    /// assert!(EnvAction::from_index(128).is_err());
    /// ```
    pub fn from_index(index: usize) -> Result<Self, EngineError> {
        if index >= ACTION_SPACE_SIZE {
            return Err(EngineError::InvalidAction(index));
        }
        Ok(Self {
            keep_mask: (index % BANK_OFFSET) as u8,
            bank: index >= BANK_OFFSET,
        })
    }

    /// Encode back to an action index.
    #[must_use]
    pub fn index(self) -> usize {
        self.keep_mask as usize % BANK_OFFSET + if self.bank { BANK_OFFSET } else { 0 }
    }

    /// Whether the mask asks for die `id`.
    #[must_use]
    pub fn wants(self, id: DieId) -> bool {
        self.keep_mask & id.mask_bit() != 0
    }
}

/// Diagnostics for one step.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepInfo {
    /// False if any part of the action was illegal.
    pub legal_move: bool,
    /// The roll farkled and the dice passed on.
    pub farkle: bool,
    /// The bank won the game.
    pub win: bool,
    /// Points banked this step (0 after a farkle), if the step banked or farkled.
    pub turn_points: Option<u32>,
}

/// Result of one step.
#[derive(Clone, Debug, PartialEq)]
pub struct StepResult {
    pub observation: Observation,
    pub reward: f32,
    pub terminated: bool,
    pub truncated: bool,
    pub info: StepInfo,
}

/// Farkle training environment.
///
/// ## Example
///
/// ```
/// use farkle_engine::training::{EnvConfig, FarkleEnv};
/// use farkle_engine::core::EngineConfig;
///
/// let config = EnvConfig::new().with_engine(EngineConfig::new().with_seed(7));
/// let mut env = FarkleEnv::new(config).unwrap();
///
/// let result = env.step(0).unwrap(); // roll without keeping anything
/// assert!(!result.info.legal_move);
/// assert!(result.reward < 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct FarkleEnv<S: FaceSource = GameRng> {
    engine: FarkleEngine<S>,
    config: EnvConfig,
    encoder: ObservationEncoder,
    steps: usize,
}

impl FarkleEnv<GameRng> {
    /// Build an environment with a fresh engine.
    pub fn new(config: EnvConfig) -> Result<Self, EngineError> {
        let engine = FarkleEngine::new(&config.engine)?;
        Ok(Self::with_engine(engine, config))
    }

    /// Start a new game. A seed overrides the configured one for this game.
    pub fn reset(&mut self, seed: Option<u64>) -> Result<Observation, EngineError> {
        let mut engine_config = self.config.engine.clone();
        if seed.is_some() {
            engine_config.seed = seed;
        }
        self.engine = FarkleEngine::new(&engine_config)?;
        self.steps = 0;
        Ok(self.observation())
    }
}

impl<S: FaceSource> FarkleEnv<S> {
    /// Wrap an existing engine.
    pub fn with_engine(engine: FarkleEngine<S>, config: EnvConfig) -> Self {
        Self {
            engine,
            encoder: ObservationEncoder::new().with_score_scale(config.observation_scale),
            config,
            steps: 0,
        }
    }

    #[must_use]
    pub fn engine(&self) -> &FarkleEngine<S> {
        &self.engine
    }

    #[must_use]
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Current state from the acting player's perspective.
    #[must_use]
    pub fn observation(&self) -> Observation {
        self.encoder.encode(&self.engine)
    }

    /// Apply a discrete action.
    ///
    /// The keep mask is applied die by die through `toggle_keep`, then the
    /// engine rolls or banks. A farkle passes the dice to the next player
    /// before returning; that player's opening roll may itself farkle.
    ///
    /// A clear bit only releases a die that was already kept when the step
    /// began. Dice pulled in by a grouped keep during the step stay kept, so
    /// asking for one die of a triple keeps all three.
    ///
    /// ```
    /// use farkle_engine::core::ScriptedFaces;
    /// use farkle_engine::rules::FarkleEngine;
    /// use farkle_engine::training::{EnvConfig, FarkleEnv};
    ///
    /// let engine = FarkleEngine::with_source(2, ScriptedFaces::new([1, 1, 1, 2, 3, 4, 5, 2, 3])).unwrap();
    /// let mut env = FarkleEnv::with_engine(engine, EnvConfig::default());
    ///
    /// env.step(0b1).unwrap(); // only die 0 requested
    /// assert_eq!(env.engine().turn_score(), 1000);
    /// ```
    pub fn step(&mut self, action: usize) -> Result<StepResult, EngineError> {
        let action = EnvAction::from_index(action)?;
        let penalty = self.config.illegal_action_penalty;

        let mut info = StepInfo {
            legal_move: true,
            ..StepInfo::default()
        };
        let mut reward = 0.0f32;
        let mut charged = 0.0f32;
        let mut newly_kept = 0usize;

        // Dice promoted by a grouped keep during this loop stay kept.
        let held: Vec<bool> = self.engine.dice().iter().map(|d| d.state == DieState::Kept).collect();

        for id in DieId::all() {
            let state = self.engine.dice()[id].state;
            if action.wants(id) {
                match state {
                    DieState::Banked => {
                        charged += penalty;
                        info.legal_move = false;
                    }
                    DieState::Rolled => {
                        self.engine.toggle_keep(id);
                        if self.engine.dice()[id].state == DieState::Kept {
                            newly_kept += 1;
                        } else {
                            charged += penalty;
                            info.legal_move = false;
                        }
                    }
                    DieState::Kept => {}
                }
            } else if state == DieState::Kept && held[id.index()] {
                self.engine.toggle_keep(id);
            }
        }

        let mut banked_points = 0;
        if action.bank {
            if self.engine.pending_score() == 0 {
                reward = -penalty;
                info.legal_move = false;
            } else {
                banked_points = self.engine.pending_score();
                self.engine.bank();
                info.turn_points = Some(banked_points);
            }
        } else {
            let hot_hand = self.engine.dice().count_in(DieState::Rolled) == 0;
            if newly_kept == 0 && !hot_hand {
                charged += penalty;
                info.legal_move = false;
            }
            self.engine.roll();
        }

        reward -= charged;

        let mut terminated = false;
        match self.engine.status() {
            GameStatus::Farkle => {
                reward -= self.config.farkle_penalty;
                info.farkle = true;
                info.turn_points = Some(0);
                self.engine.pass_turn();
            }
            GameStatus::Win => {
                reward = self.config.win_reward;
                info.win = true;
                terminated = true;
            }
            GameStatus::Rolling | GameStatus::Bust => {}
        }

        if banked_points > 0 {
            reward += banked_points as f32 / self.config.points_scale;
        }

        self.steps += 1;
        let truncated = !terminated && self.config.max_steps.is_some_and(|max| self.steps >= max);

        if !info.legal_move {
            log::trace!("illegal action {:?}, penalty {}", action, charged);
        }

        Ok(StepResult {
            observation: self.observation(),
            reward,
            terminated,
            truncated,
            info,
        })
    }
}
