//! Hand evaluation at three levels of reasoning.
//!
//! Level 1 only asks whether a hand can ever win. Level 2 plays the hand out
//! with the best scry. Level 3 also weighs every hand against mulliganing
//! into a fresh hand one card smaller.

use super::scry::Revealed;
use super::surge::TopCard;
use super::{Evaluator, Side, DECK_SIZE, OPENING_HAND};
use serde::Serialize;
use std::fmt;

/// Depth of reasoning used for a deck-level win rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Level {
    One,
    Two,
    Three,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::One, Level::Two, Level::Three];

    pub fn from_number(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => write!(f, "level 1"),
            Self::Two => write!(f, "level 2"),
            Self::Three => write!(f, "level 3"),
        }
    }
}

/// Every hand `(n, k)` with `0 <= k <= n <= 7`
pub fn hand_gen() -> impl Iterator<Item = (i32, i32)> {
    (0..=OPENING_HAND).flat_map(|n| (0..=n).map(move |k| (n, k)))
}

impl Evaluator {
    // ---- level 1 -------------------------------------------------------

    /// Probability that an `n` card hand holds no guide, one guide, or only guides
    pub fn level_1_mull(&mut self, n: i32, x: i32) -> f64 {
        [0, 1, n]
            .into_iter()
            .fold(0.0, |acc, i| acc + self.hypogeo(DECK_SIZE, n, x, i))
    }

    pub fn level_1_hand_odds(&mut self, n: i32, x: i32) -> f64 {
        1.0 - self.level_1_mull(n, x)
    }

    /// Probability of mulliganing every hand from 7 down to `n + 1` on the play
    pub fn mull_to_play(&mut self, n: i32, x: i32) -> f64 {
        ((n + 1)..=OPENING_HAND).fold(1.0, |acc, i| acc * self.level_1_mull(i, x))
    }

    /// Probability of mulliganing every hand from 7 down to `n + 1` on the draw
    pub fn mull_to_draw(&mut self, n: i32, x: i32) -> f64 {
        ((n + 1)..=OPENING_HAND).fold(1.0, |acc, i| acc * self.hypogeo(DECK_SIZE, i, x, 0))
    }

    pub fn level_1_win_play(&mut self, x: i32) -> f64 {
        (0..=OPENING_HAND).fold(0.0, |acc, n| {
            acc + self.level_1_hand_odds(n, x) * self.mull_to_play(n, x)
        })
    }

    pub fn level_1_win_draw(&mut self, x: i32) -> f64 {
        let never = (0..=OPENING_HAND).fold(1.0, |acc, n| acc * self.hypogeo(DECK_SIZE, n, x, 0));
        1.0 - never
    }

    // ---- level 2 -------------------------------------------------------

    /// Win probability of a kept hand on the play.
    ///
    /// With `scry` and fewer than seven cards, the mulligan scry picks the
    /// better of top and bottom for whichever card is revealed.
    pub fn hand_will_win_play(&mut self, n: i32, x: i32, k: i32, scry: bool, big_n: i32) -> f64 {
        if n < OPENING_HAND && scry {
            Revealed::ALL.into_iter().fold(0.0, |acc, card| {
                let reveal = self.reveal_odds(n, x, k, card, big_n);
                let top = self.keep_on_top(n, x, k, card.into(), big_n);
                let bottom = self.push_to_bottom(n, x, k, card, big_n);
                acc + reveal * top.max(bottom)
            })
        } else {
            self.keep_on_top(n, x, k, TopCard::Unknown, big_n)
        }
    }

    /// Win probability on the play once the scried card went to the bottom
    /// and the next card is drawn into an `n + 1` card hand.
    pub fn hand_will_win_play_scry_bottom(&mut self, n: i32, x: i32, k: i32, big_n: i32) -> f64 {
        let guide = self.reveal_odds(n, x, k, Revealed::Accelerant, big_n);
        let guide_odds = self.hand_will_win_play(n + 1, x - 1, k + 1, false, big_n);
        let flame = self.reveal_odds(n, x, k, Revealed::NonAccelerant, big_n);
        let flame_odds = self.hand_will_win_play(n + 1, x, k, false, big_n);
        guide * guide_odds + flame * flame_odds
    }

    /// Scry result on the draw when `card` is revealed: `(top, bottom)`
    pub fn draw_scry_options(&mut self, n: i32, x: i32, k: i32, card: Revealed) -> (f64, f64) {
        match card {
            Revealed::Accelerant => (
                self.hand_will_win_play(n + 1, x - k, k + 1, false, DECK_SIZE),
                self.hand_will_win_play_scry_bottom(n, x - 1, k, DECK_SIZE - 1),
            ),
            Revealed::NonAccelerant => (
                self.hand_will_win_play(n + 1, x, k, false, DECK_SIZE),
                self.hand_will_win_play_scry_bottom(n, x, k, DECK_SIZE - 1),
            ),
        }
    }

    /// Win probability of a kept hand on the draw.
    ///
    /// The draw step puts the scried card (or the one under it) into hand.
    pub fn hand_will_win_draw(&mut self, n: i32, x: i32, k: i32, big_n: i32) -> f64 {
        if n < OPENING_HAND {
            Revealed::ALL.into_iter().fold(0.0, |acc, card| {
                let reveal = self.reveal_odds(n, x, k, card, big_n);
                let (top, bottom) = self.draw_scry_options(n, x, k, card);
                acc + reveal * top.max(bottom)
            })
        } else {
            let flame = self.reveal_odds(n, x, k, Revealed::NonAccelerant, big_n);
            let flame_odds = self.hand_will_win_play(n + 1, x, k, true, DECK_SIZE);
            let guide = self.reveal_odds(n, x, k, Revealed::Accelerant, big_n);
            let guide_odds = self.hand_will_win_play(n + 1, x, k + 1, true, DECK_SIZE);
            flame * flame_odds + guide * guide_odds
        }
    }

    /// Expected level 2 win probability of a random `n` card hand on the play
    pub fn level_2_hand_odds_play(&mut self, n: i32, x: i32) -> f64 {
        (0..n).fold(0.0, |acc, i| {
            acc + self.hypogeo(DECK_SIZE, n, x, i) * self.hand_will_win_play(n, x, i, true, DECK_SIZE)
        })
    }

    /// Expected level 2 win probability of a random `n` card hand on the draw
    pub fn level_2_hand_odds_draw(&mut self, n: i32, x: i32) -> f64 {
        (0..n).fold(0.0, |acc, i| {
            acc + self.hypogeo(DECK_SIZE, n, x, i) * self.hand_will_win_draw(n, x, i, DECK_SIZE)
        })
    }

    pub fn level_2_win_play(&mut self, x: i32) -> f64 {
        (0..=OPENING_HAND).fold(0.0, |acc, n| {
            acc + self.level_2_hand_odds_play(n, x) * self.mull_to_play(n, x)
        })
    }

    pub fn level_2_win_draw(&mut self, x: i32) -> f64 {
        (0..=OPENING_HAND).fold(0.0, |acc, n| {
            acc + self.mull_to_draw(n, x) * self.level_2_hand_odds_draw(n, x)
        })
    }

    // ---- level 3 -------------------------------------------------------

    /// Win probability on the play of mulliganing `n` cards into `n - 1`
    pub fn level_3_mull_odds_play(&mut self, n: i32, x: i32, _k: i32) -> f64 {
        if let Some(&p) = self.mull_play.get(&(n, x)) {
            return p;
        }
        let p = (0..n).fold(0.0, |acc, i| {
            acc + self.level_3_hand_odds_play(n - 1, x, i) * self.hypogeo(DECK_SIZE, n - 1, x, i)
        });
        self.mull_play.insert((n, x), p);
        p
    }

    /// Win probability on the play of the better of keeping and mulliganing
    pub fn level_3_hand_odds_play(&mut self, n: i32, x: i32, k: i32) -> f64 {
        if n < 3 {
            return 0.0;
        }
        if let Some(&p) = self.hand_play.get(&(n, x, k)) {
            return p;
        }
        let keep = self.hand_will_win_play(n, x, k, true, DECK_SIZE);
        let mull = self.level_3_mull_odds_play(n, x, k);
        let p = keep.max(mull);
        self.hand_play.insert((n, x, k), p);
        p
    }

    /// Win probability on the draw of mulliganing `n` cards into `n - 1`
    pub fn level_3_mull_odds_draw(&mut self, n: i32, x: i32, _k: i32) -> f64 {
        if let Some(&p) = self.mull_draw.get(&(n, x)) {
            return p;
        }
        let p = (0..n).fold(0.0, |acc, i| {
            acc + self.level_3_hand_odds_draw(n - 1, x, i) * self.hypogeo(DECK_SIZE, n - 1, x, i)
        });
        self.mull_draw.insert((n, x), p);
        p
    }

    /// Win probability on the draw of the better of keeping and mulliganing.
    ///
    /// The mulligan side is valued with the play-side recursion.
    pub fn level_3_hand_odds_draw(&mut self, n: i32, x: i32, k: i32) -> f64 {
        if n < 1 {
            return 0.0;
        }
        if let Some(&p) = self.hand_draw.get(&(n, x, k)) {
            return p;
        }
        let keep = self.hand_will_win_draw(n, x, k, DECK_SIZE);
        let mull = self.level_3_mull_odds_play(n, x, k);
        let p = keep.max(mull);
        self.hand_draw.insert((n, x, k), p);
        p
    }

    pub fn level_3_win_play(&mut self, x: i32) -> f64 {
        (0..=OPENING_HAND).fold(0.0, |acc, k| {
            acc + self.level_3_hand_odds_play(OPENING_HAND, x, k) * self.hypogeo(DECK_SIZE, OPENING_HAND, x, k)
        })
    }

    pub fn level_3_win_draw(&mut self, x: i32) -> f64 {
        (0..=OPENING_HAND).fold(0.0, |acc, k| {
            acc + self.level_3_hand_odds_draw(OPENING_HAND, x, k) * self.hypogeo(DECK_SIZE, OPENING_HAND, x, k)
        })
    }

    /// Level 3 win probability of a concrete hand
    pub fn level_3_hand_odds(&mut self, n: i32, x: i32, k: i32, side: Side) -> f64 {
        match side {
            Side::Play => self.level_3_hand_odds_play(n, x, k),
            Side::Draw => self.level_3_hand_odds_draw(n, x, k),
        }
    }

    /// Deck-level win probability with `x` Spirit Guides
    pub fn win_rate(&mut self, level: Level, side: Side, x: i32) -> f64 {
        match (level, side) {
            (Level::One, Side::Play) => self.level_1_win_play(x),
            (Level::One, Side::Draw) => self.level_1_win_draw(x),
            (Level::Two, Side::Play) => self.level_2_win_play(x),
            (Level::Two, Side::Draw) => self.level_2_win_draw(x),
            (Level::Three, Side::Play) => self.level_3_win_play(x),
            (Level::Three, Side::Draw) => self.level_3_win_draw(x),
        }
    }
}
