//! Resolving a single scry: keep the revealed card on top or bottom it.

use super::surge::TopCard;
use super::{Evaluator, DECK_SIZE};

/// Identity of a card revealed by scry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Revealed {
    Accelerant,
    NonAccelerant,
}

impl Revealed {
    /// Both identities, accelerant first
    pub const ALL: [Revealed; 2] = [Revealed::Accelerant, Revealed::NonAccelerant];

    /// Spirit Guides this card removes from the library when bottomed
    pub fn accelerants(self) -> i32 {
        match self {
            Self::Accelerant => 1,
            Self::NonAccelerant => 0,
        }
    }
}

impl From<Revealed> for TopCard {
    fn from(card: Revealed) -> Self {
        match card {
            Revealed::Accelerant => TopCard::Accelerant,
            Revealed::NonAccelerant => TopCard::NonAccelerant,
        }
    }
}

/// How many Surging Flames a hand of `n` cards with `k` Spirit Guides can cast.
///
/// Two guides pay for one flame.
pub fn plays_in_hand(n: i32, k: i32) -> i32 {
    k.div_euclid(2).min(n - k)
}

impl Evaluator {
    /// Win probability when the top card (if known) stays where it is
    pub fn keep_on_top(&mut self, n: i32, x: i32, k: i32, top: TopCard, big_n: i32) -> f64 {
        let plays = plays_in_hand(n, k);
        self.surge_odds(big_n - n, x - k, plays, plays, top)
    }

    /// Win probability after the revealed card goes to the bottom.
    ///
    /// The bottomed card leaves the reachable library and the new top card
    /// is unknown again.
    pub fn push_to_bottom(&mut self, n: i32, x: i32, k: i32, card: Revealed, big_n: i32) -> f64 {
        let plays = plays_in_hand(n, k);
        self.surge_odds(big_n - 1 - n, x - card.accelerants() - k, plays, plays, TopCard::Unknown)
    }

    /// Probability that the next card of the library is `card`
    pub fn reveal_odds(&mut self, n: i32, x: i32, k: i32, card: Revealed, big_n: i32) -> f64 {
        self.hypogeo(big_n - n, 1, x - k, card.accelerants())
    }

    /// `(keep_on_top, push_to_bottom)` for a full 60 card deck
    pub fn scry_options(&mut self, n: i32, x: i32, k: i32, card: Revealed) -> (f64, f64) {
        (
            self.keep_on_top(n, x, k, card.into(), DECK_SIZE),
            self.push_to_bottom(n, x, k, card, DECK_SIZE),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plays_in_hand() {
        assert_eq!(plays_in_hand(7, 0), 0);
        assert_eq!(plays_in_hand(7, 2), 1);
        assert_eq!(plays_in_hand(7, 5), 2);
        assert_eq!(plays_in_hand(6, 6), 0);
        assert_eq!(plays_in_hand(4, 3), 1);
    }

    #[test]
    fn test_known_scry_values() {
        let mut eval = Evaluator::new();
        let (top, bottom) = eval.scry_options(6, 23, 2, Revealed::Accelerant);
        assert!((top - 0.9474396856017231).abs() < 1e-12);
        assert!((bottom - 0.9818819446700182).abs() < 1e-12);

        let (top, bottom) = eval.scry_options(6, 23, 2, Revealed::NonAccelerant);
        assert!((top - 0.9378266199093627).abs() < 1e-12);
        assert!((bottom - 0.9772257526542627).abs() < 1e-12);
    }

    #[test]
    fn test_reveal_odds_sum_to_one() {
        let mut eval = Evaluator::new();
        let total: f64 = Revealed::ALL
            .iter()
            .map(|&card| eval.reveal_odds(6, 23, 2, card, DECK_SIZE))
            .sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_top_card_conversion() {
        assert_eq!(TopCard::from(Revealed::Accelerant), TopCard::Accelerant);
        assert_eq!(TopCard::from(Revealed::NonAccelerant), TopCard::NonAccelerant);
    }
}
