//! Keep or mulligan recommendations.

use super::levels::hand_gen;
use super::scry::Revealed;
use super::{Evaluator, Side, DECK_SIZE, OPENING_HAND};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Keep,
    Mulligan,
}

/// Where a scried card should go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Top,
    Bottom,
}

impl Placement {
    // Ties keep the card on top.
    fn choose(top: f64, bottom: f64) -> Self {
        if top >= bottom {
            Self::Top
        } else {
            Self::Bottom
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keep => write!(f, "keep"),
            Self::Mulligan => write!(f, "mulligan"),
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => write!(f, "top"),
            Self::Bottom => write!(f, "bottom"),
        }
    }
}

/// Scry instructions for each card that might be revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScryPlan {
    pub spirit_guide: Placement,
    pub surging_flame: Placement,
}

/// Advice for one concrete hand
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub side: Side,
    pub cards: i32,
    pub spirit_guides: i32,
    pub action: Action,
    /// Only present for a kept hand smaller than seven cards
    pub scry: Option<ScryPlan>,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "If you're on the {} and you have {} Spirit Guide and {} Surging Flame, you should {}",
            self.side,
            self.spirit_guides,
            self.cards - self.spirit_guides,
            self.action
        )?;
        if let Some(plan) = &self.scry {
            write!(
                f,
                ", scry a Spirit Guide to the {} and scry a Surging Flame to the {}",
                plan.spirit_guide, plan.surging_flame
            )?;
        }
        write!(f, ".")
    }
}

/// Win probability as a percentage with two decimals, e.g. `97.90`
pub fn win_percent(p: f64) -> String {
    format!("{:.2}", p * 100.0)
}

impl Evaluator {
    /// Keep (ties included) when playing the hand out beats the mulligan
    pub fn should_i_keep_play(&mut self, n: i32, x: i32, k: i32) -> Recommendation {
        let keep = self.hand_will_win_play(n, x, k, true, DECK_SIZE);
        let mull = self.level_3_mull_odds_play(n, x, k);

        let (action, scry) = if keep >= mull {
            let scry = (n < OPENING_HAND).then(|| {
                let (top, bottom) = self.scry_options(n, x, k, Revealed::Accelerant);
                let spirit_guide = Placement::choose(top, bottom);
                let (top, bottom) = self.scry_options(n, x, k, Revealed::NonAccelerant);
                let surging_flame = Placement::choose(top, bottom);
                ScryPlan { spirit_guide, surging_flame }
            });
            (Action::Keep, scry)
        } else {
            (Action::Mulligan, None)
        };

        Recommendation { side: Side::Play, cards: n, spirit_guides: k, action, scry }
    }

    /// Draw-side counterpart of [`Evaluator::should_i_keep_play`].
    ///
    /// The keep value ignores the scry and is compared against the
    /// play-side mulligan recursion, matching `level_3_hand_odds_draw`.
    pub fn should_i_keep_draw(&mut self, n: i32, x: i32, k: i32) -> Recommendation {
        let keep = self.hand_will_win_play(n, x, k, false, DECK_SIZE);
        let mull = self.level_3_mull_odds_play(n, x, k);

        let (action, scry) = if keep >= mull {
            let scry = (n < OPENING_HAND).then(|| {
                let (top, bottom) = self.draw_scry_options(n, x, k, Revealed::Accelerant);
                let spirit_guide = Placement::choose(top, bottom);
                let (top, bottom) = self.draw_scry_options(n, x, k, Revealed::NonAccelerant);
                let surging_flame = Placement::choose(top, bottom);
                ScryPlan { spirit_guide, surging_flame }
            });
            (Action::Keep, scry)
        } else {
            (Action::Mulligan, None)
        };

        Recommendation { side: Side::Draw, cards: n, spirit_guides: k, action, scry }
    }

    pub fn recommend(&mut self, n: i32, x: i32, k: i32, side: Side) -> Recommendation {
        let advice = match side {
            Side::Play => self.should_i_keep_play(n, x, k),
            Side::Draw => self.should_i_keep_draw(n, x, k),
        };
        log::debug!("{} memoized states after ({}, {}) on the {}", self.cached_states(), n, k, side);
        advice
    }

    /// Recommendation for a hand as a sentence
    pub fn mull_thing(&mut self, n: i32, x: i32, k: i32, side: Side) -> String {
        self.recommend(n, x, k, side).to_string()
    }

    /// Recommendation for every possible hand, smallest first
    pub fn mull_guide(&mut self, x: i32, side: Side) -> Vec<Recommendation> {
        hand_gen().map(|(n, k)| self.recommend(n, x, k, side)).collect()
    }
}
