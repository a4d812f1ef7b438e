//! Chain probability of resolving enough Surging Flames.
//!
//! Each try reveals four cards off the top of the library. Every Spirit
//! Guide among them is spent, every Surging Flame is cast again and hands
//! back a try. The chain wins once more than [`WIN_THRESHOLD`] casts have
//! been counted and loses when the tries run out.

use super::Evaluator;

/// Casts that must be exceeded for the chain to win
pub const WIN_THRESHOLD: i32 = 9;

/// What we know about the top card of the library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopCard {
    Unknown,
    Accelerant,
    NonAccelerant,
}

impl Evaluator {
    /// Probability that the chain reaches the win threshold.
    ///
    /// * `big_n` - cards left in the library
    /// * `x` - Spirit Guides left in the library
    /// * `t` - tries remaining
    /// * `c` - casts counted so far
    /// * `top` - knowledge about the top card
    pub fn surge_odds(&mut self, big_n: i32, x: i32, t: i32, c: i32, top: TopCard) -> f64 {
        if c > WIN_THRESHOLD {
            return 1.0;
        }
        // a negative budget only comes from a hand with more guides than cards
        if t <= 0 {
            return 0.0;
        }
        let key = (big_n, x, t, c, top);
        if let Some(&p) = self.surge.get(&key) {
            return p;
        }

        // i counts the flames among the four revealed cards
        let p = match top {
            TopCard::Accelerant => (0..4).fold(0.0, |acc, i| {
                let w = self.hypogeo(big_n - 1, 3, x - 1, 3 - i);
                acc + self.weighted(w, big_n - 4, x - (4 - i), t - 1 + i, c + i)
            }),
            TopCard::NonAccelerant => (0..4).fold(0.0, |acc, i| {
                let w = self.hypogeo(big_n - 1, 3, x, 3 - i);
                acc + self.weighted(w, big_n - 4, x - (3 - i), t - 1 + i, c + i + 1)
            }),
            TopCard::Unknown => (0..5).fold(0.0, |acc, i| {
                let w = self.hypogeo(big_n, 4, x, 4 - i);
                acc + self.weighted(w, big_n - 4, x - (4 - i), t - 1 + i, c + i)
            }),
        };
        self.surge.insert(key, p);
        p
    }

    // Impossible branches contribute exactly 0 without recursing.
    fn weighted(&mut self, w: f64, big_n: i32, x: i32, t: i32, c: i32) -> f64 {
        if w == 0.0 {
            return 0.0;
        }
        w * self.surge_odds(big_n, x, t, c, TopCard::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_reached_wins() {
        let mut eval = Evaluator::new();
        assert_eq!(eval.surge_odds(53, 21, 0, 10, TopCard::Unknown), 1.0);
        assert_eq!(eval.surge_odds(0, 0, 3, 12, TopCard::Accelerant), 1.0);
    }

    #[test]
    fn test_no_tries_loses() {
        let mut eval = Evaluator::new();
        for c in 0..=WIN_THRESHOLD {
            assert_eq!(eval.surge_odds(53, 21, 0, c, TopCard::Unknown), 0.0);
            assert_eq!(eval.surge_odds(53, 21, 0, c, TopCard::NonAccelerant), 0.0);
        }
    }

    #[test]
    fn test_known_values() {
        let mut eval = Evaluator::new();
        let unknown = eval.surge_odds(53, 21, 2, 2, TopCard::Unknown);
        let guide = eval.surge_odds(53, 21, 2, 2, TopCard::Accelerant);
        let flame = eval.surge_odds(53, 21, 2, 2, TopCard::NonAccelerant);
        assert!((unknown - 0.9997402043483613).abs() < 1e-12);
        assert!((guide - 0.9993541544509948).abs() < 1e-12);
        assert!((flame - 0.9990053472545255).abs() < 1e-12);
    }

    #[test]
    fn test_bounded_probability() {
        let mut eval = Evaluator::new();
        for big_n in (0..=53).step_by(7) {
            for x in 0..=big_n {
                for t in 0..4 {
                    for top in [TopCard::Unknown, TopCard::Accelerant, TopCard::NonAccelerant] {
                        let p = eval.surge_odds(big_n, x, t, t, top);
                        assert!((0.0..=1.0 + 1e-12).contains(&p), "surge_odds({big_n}, {x}, {t}) = {p}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_more_flames_never_hurts() {
        // x counts Spirit Guides, so fewer guides means more flames to chain
        let mut eval = Evaluator::new();
        for t in 1..4 {
            let mut last = 0.0;
            for x in (0..=40).rev() {
                let p = eval.surge_odds(53, x, t, t, TopCard::Unknown);
                assert!(p + 1e-12 >= last, "x={x} t={t}: {p} < {last}");
                last = p;
            }
        }
    }

    #[test]
    fn test_negative_budget_terminates() {
        let mut eval = Evaluator::new();
        assert_eq!(eval.surge_odds(55, 23, -1, -1, TopCard::Unknown), 0.0);
    }
}
