//! Search for the Spirit Guide count that maximizes a deck-level win rate.

use crate::odds::{Evaluator, Level, Side, DECK_SIZE};
use indicatif::ProgressBar;
use rayon::prelude::*;
use serde::Serialize;

/// Best deck found by [`best_choice`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BestDeck {
    pub level: Level,
    pub side: Side,
    pub accelerants: i32,
    pub win_rate: f64,
}

/// Win rate for every Spirit Guide count from 0 to 60.
///
/// Each count gets its own evaluator so the pool shares no caches.
pub fn win_rates(level: Level, side: Side, progress: &ProgressBar) -> Vec<f64> {
    (0..=DECK_SIZE)
        .into_par_iter()
        .map(|x| {
            let rate = Evaluator::new().win_rate(level, side, x);
            progress.inc(1);
            rate
        })
        .collect()
}

/// Spirit Guide count with the highest win rate; the first strict maximum wins
pub fn best_choice(level: Level, side: Side, show_progress: bool) -> BestDeck {
    let progress = if show_progress {
        ProgressBar::new(DECK_SIZE as u64 + 1)
    } else {
        ProgressBar::hidden()
    };
    let rates = win_rates(level, side, &progress);
    progress.finish_and_clear();

    let (mut accelerants, mut win_rate) = (0, 0.0);
    for (x, &rate) in rates.iter().enumerate() {
        if rate > win_rate {
            accelerants = x as i32;
            win_rate = rate;
        }
    }
    log::info!("{:<32}{:<16}{:>4} guides {:.6}", "best deck", format!("{} {}", level, side), accelerants, win_rate);

    BestDeck { level, side, accelerants, win_rate }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_choice_level_1() {
        let play = best_choice(Level::One, Side::Play, false);
        assert_eq!(play.accelerants, 36);
        assert!((play.win_rate - 0.9998062491475506).abs() < 1e-12);

        let draw = best_choice(Level::One, Side::Draw, false);
        assert_eq!(draw.accelerants, 43);
        assert_eq!(draw.win_rate, 1.0);
    }

    #[test]
    fn test_win_rates_cover_every_count() {
        let rates = win_rates(Level::One, Side::Play, &ProgressBar::hidden());
        assert_eq!(rates.len(), 61);
        assert!(rates[9..=56].iter().all(|r| (0.0..=1.0 + 1e-12).contains(r)));
    }

    #[test]
    fn test_level_1_play_degenerate_counts() {
        // level_1_mull counts the 0 and 1 guide hands twice when n <= 1
        let rates = win_rates(Level::One, Side::Play, &ProgressBar::hidden());
        assert_eq!(rates[0], -1.0);
        assert!((rates[1] - -1.0333333333333332).abs() < 1e-12);
        assert!((rates[8] - -0.09724694149924301).abs() < 1e-12);
        assert!((rates[57] - -0.03381106499404807).abs() < 1e-12);
        assert_eq!(rates[60], -3.0);
    }

    #[test]
    fn test_best_choice_skips_negative_rates() {
        let best = best_choice(Level::One, Side::Play, false);
        let rates = win_rates(Level::One, Side::Play, &ProgressBar::hidden());
        assert!(rates.iter().any(|&r| r < 0.0));
        assert!(best.win_rate > 0.0);
        assert!(rates.iter().all(|&r| r <= best.win_rate));
        let first = rates.iter().position(|&r| r == best.win_rate);
        assert_eq!(first, Some(best.accelerants as usize));
    }

    #[test]
    fn test_best_deck_json() {
        let best = best_choice(Level::One, Side::Draw, false);
        let json = serde_json::to_value(best).expect("serialize");
        assert_eq!(json["accelerants"], 43);
        assert_eq!(json["side"], "draw");
        assert_eq!(json["level"], "One");
    }
}
