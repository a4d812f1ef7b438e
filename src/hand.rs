use crate::odds::{DECK_SIZE, OPENING_HAND};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HandError {
    #[error("A hand holds at most {max} cards, got {cards}", max = OPENING_HAND)]
    TooManyCards { cards: i32 },
    #[error("{accelerants} Spirit Guides do not fit in a {cards} card hand")]
    TooManyAccelerants { accelerants: i32, cards: i32 },
    #[error("A {size} card deck cannot hold {accelerants} Spirit Guides", size = DECK_SIZE)]
    DeckTooSmall { accelerants: i32 },
}

/// A validated opening hand: `cards` total, `spirit_guides` of them accelerants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    cards: i32,
    spirit_guides: i32,
}

impl Hand {
    pub fn new(cards: u32, spirit_guides: u32) -> Result<Self, HandError> {
        let cards = cards.min(i32::MAX as u32) as i32;
        let spirit_guides = spirit_guides.min(i32::MAX as u32) as i32;
        if cards > OPENING_HAND {
            return Err(HandError::TooManyCards { cards });
        }
        if spirit_guides > cards {
            return Err(HandError::TooManyAccelerants { accelerants: spirit_guides, cards });
        }
        Ok(Hand { cards, spirit_guides })
    }

    /// Build a hand from the two counts a player reads off their cards
    pub fn from_counts(spirit_guides: u32, flames: u32) -> Result<Self, HandError> {
        Self::new(spirit_guides.saturating_add(flames), spirit_guides)
    }

    pub fn cards(&self) -> i32 {
        self.cards
    }

    pub fn spirit_guides(&self) -> i32 {
        self.spirit_guides
    }
}

/// Check that a deck list with `accelerants` Spirit Guides fits in the deck
pub fn validate_deck(accelerants: u32) -> Result<i32, HandError> {
    let accelerants = accelerants.min(i32::MAX as u32) as i32;
    if accelerants > DECK_SIZE {
        return Err(HandError::DeckTooSmall { accelerants });
    }
    Ok(accelerants)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_counts() {
        let hand = Hand::from_counts(2, 4).expect("valid hand");
        assert_eq!(hand.cards(), 6);
        assert_eq!(hand.spirit_guides(), 2);
    }

    #[test]
    fn test_too_many_cards() {
        assert_eq!(Hand::from_counts(4, 4), Err(HandError::TooManyCards { cards: 8 }));
    }

    #[test]
    fn test_more_guides_than_cards() {
        assert_eq!(
            Hand::new(3, 5),
            Err(HandError::TooManyAccelerants { accelerants: 5, cards: 3 })
        );
    }

    #[test]
    fn test_validate_deck() {
        assert_eq!(validate_deck(23), Ok(23));
        assert_eq!(validate_deck(60), Ok(60));
        assert_eq!(validate_deck(61), Err(HandError::DeckTooSmall { accelerants: 61 }));
    }

    #[test]
    fn test_error_messages() {
        let err = Hand::from_counts(4, 4).unwrap_err();
        assert_eq!(err.to_string(), "A hand holds at most 7 cards, got 8");
    }
}
