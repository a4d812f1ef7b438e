//! Probability engine for Spirit Guide / Surging Flame opening hands.
//!
//! Every memoized function lives on [`Evaluator`], which owns the caches.
//! The submodules are layered leaf to root: `combinatorics` -> `surge` ->
//! `scry` -> `levels` -> `decision`. Nothing calls back up the stack.

pub mod combinatorics;
pub mod decision;
pub mod levels;
pub mod scry;
pub mod surge;

pub use combinatorics::binomial_coeff;
pub use decision::{win_percent, Action, Placement, Recommendation, ScryPlan};
pub use levels::{hand_gen, Level};
pub use scry::{plays_in_hand, Revealed};
pub use surge::TopCard;

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Cards in the deck
pub const DECK_SIZE: i32 = 60;

/// Opening hand size, also the largest hand the model reasons about
pub const OPENING_HAND: i32 = 7;

/// Whether we take the first turn or draw a card before it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Play,
    Draw,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Play => write!(f, "play"),
            Self::Draw => write!(f, "draw"),
        }
    }
}

pub(crate) type SurgeKey = (i32, i32, i32, i32, TopCard);

/// Evaluation context holding one memo table per recursive function.
///
/// Tables only ever grow. Every value is a pure function of its key, so a
/// fresh evaluator and a warm one return bit-identical results.
#[derive(Debug, Default)]
pub struct Evaluator {
    pub(crate) hypogeo: HashMap<(i32, i32, i32, i32), f64>,
    pub(crate) surge: HashMap<SurgeKey, f64>,
    pub(crate) hand_play: HashMap<(i32, i32, i32), f64>,
    pub(crate) hand_draw: HashMap<(i32, i32, i32), f64>,
    // keyed on (n, x): a mulligan throws the current hand away
    pub(crate) mull_play: HashMap<(i32, i32), f64>,
    pub(crate) mull_draw: HashMap<(i32, i32), f64>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of memoized entries across all tables
    pub fn cached_states(&self) -> usize {
        self.hypogeo.len()
            + self.surge.len()
            + self.hand_play.len()
            + self.hand_draw.len()
            + self.mull_play.len()
            + self.mull_draw.len()
    }

    /// Drop every memoized value
    pub fn clear(&mut self) {
        self.hypogeo.clear();
        self.surge.clear();
        self.hand_play.clear();
        self.hand_draw.clear();
        self.mull_play.clear();
        self.mull_draw.clear();
    }
}
