use clap::{Parser, Subcommand};
use dialoguer::{Confirm, Input};
use serde::Serialize;
use surge_mulligan::hand::{validate_deck, Hand};
use surge_mulligan::odds::{win_percent, Evaluator, Level, Recommendation, Revealed, Side};
use surge_mulligan::optimize::best_choice;

#[derive(Parser)]
#[command(name = "surge-mulligan")]
#[command(about = "Mulligan and scry advisor for Spirit Guide / Surging Flame", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Spirit Guides in the 60 card deck
    #[arg(short, long, default_value = "23", global = true)]
    accelerants: u32,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate hands interactively (default)
    Ask,

    /// Evaluate a single hand
    Advise {
        /// Spirit Guides in hand
        #[arg(short, long)]
        spirit_guides: u32,

        /// Surging Flames in hand
        #[arg(short, long)]
        flames: u32,

        /// On the draw instead of on the play
        #[arg(long)]
        draw: bool,

        /// Print JSON instead of a sentence
        #[arg(long)]
        json: bool,
    },

    /// Print advice for every possible hand
    Guide {
        /// On the draw instead of on the play
        #[arg(long)]
        draw: bool,

        /// Print JSON instead of sentences
        #[arg(long)]
        json: bool,
    },

    /// Deck win rates at every level of reasoning
    Deck {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Find the Spirit Guide count with the best win rate
    Optimize {
        /// Level of reasoning: 1, 2 or 3
        #[arg(short, long, default_value = "3")]
        level: u8,

        /// On the draw instead of on the play
        #[arg(long)]
        draw: bool,

        /// Print JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Compare keeping a scried card on top against bottoming it
    Scry {
        /// Spirit Guides in hand
        #[arg(short, long, default_value = "2")]
        spirit_guides: u32,

        /// Surging Flames in hand
        #[arg(short, long, default_value = "4")]
        flames: u32,
    },
}

#[derive(Serialize)]
struct Advice {
    recommendation: Recommendation,
    win_probability: f64,
}

#[derive(Serialize)]
struct LevelRates {
    level: Level,
    play: f64,
    draw: f64,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let x = match validate_deck(cli.accelerants) {
        Ok(x) => x,
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Advise { spirit_guides, flames, draw, json }) => {
            let hand = parse_hand(spirit_guides, flames);
            advise(&mut Evaluator::new(), hand, x, side(draw), json);
        }
        Some(Commands::Guide { draw, json }) => guide(x, side(draw), json),
        Some(Commands::Deck { json }) => deck(x, json),
        Some(Commands::Optimize { level, draw, json }) => optimize(level, side(draw), json),
        Some(Commands::Scry { spirit_guides, flames }) => {
            scry(parse_hand(spirit_guides, flames), x);
        }
        Some(Commands::Ask) | None => {
            if let Err(e) = ask(x) {
                eprintln!("✗ {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn side(draw: bool) -> Side {
    if draw {
        Side::Draw
    } else {
        Side::Play
    }
}

fn parse_hand(spirit_guides: u32, flames: u32) -> Hand {
    match Hand::from_counts(spirit_guides, flames) {
        Ok(hand) => hand,
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    }
}

fn advise(eval: &mut Evaluator, hand: Hand, x: i32, side: Side, json: bool) {
    let (n, k) = (hand.cards(), hand.spirit_guides());
    let recommendation = eval.recommend(n, x, k, side);
    let win_probability = eval.level_3_hand_odds(n, x, k, side);

    if json {
        let advice = Advice { recommendation, win_probability };
        match serde_json::to_string_pretty(&advice) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("✗ Failed to serialize advice: {}", e),
        }
    } else {
        println!("{}", recommendation);
        println!("You currently have a {}% chance of winning.", win_percent(win_probability));
    }
}

fn ask(x: i32) -> Result<(), dialoguer::Error> {
    let mut eval = Evaluator::new();
    loop {
        let spirit_guides: u32 = Input::new()
            .with_prompt("How many Simian Spirit Guide?")
            .interact_text()?;
        let flames: u32 = Input::new()
            .with_prompt("How many Surging Flame?")
            .interact_text()?;
        let on_the_play = Confirm::new()
            .with_prompt("On the play?")
            .default(true)
            .interact()?;

        match Hand::from_counts(spirit_guides, flames) {
            Ok(hand) => advise(&mut eval, hand, x, side(!on_the_play), false),
            Err(e) => eprintln!("✗ {}", e),
        }

        let again = Confirm::new()
            .with_prompt("Would you like to evaluate another hand?")
            .default(true)
            .interact()?;
        if !again {
            return Ok(());
        }
    }
}

fn guide(x: i32, side: Side, json: bool) {
    let guide = Evaluator::new().mull_guide(x, side);
    if json {
        match serde_json::to_string_pretty(&guide) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("✗ Failed to serialize guide: {}", e),
        }
        return;
    }
    for advice in &guide {
        println!("{}", advice);
    }
}

fn deck(x: i32, json: bool) {
    let mut eval = Evaluator::new();
    let rates: Vec<LevelRates> = Level::ALL
        .iter()
        .map(|&level| LevelRates {
            level,
            play: eval.win_rate(level, Side::Play, x),
            draw: eval.win_rate(level, Side::Draw, x),
        })
        .collect();

    if json {
        match serde_json::to_string_pretty(&rates) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("✗ Failed to serialize win rates: {}", e),
        }
        return;
    }

    println!("\n=== Deck Win Rates ({} Spirit Guides) ===\n", x);
    println!("{:10} {:>10} {:>10}", "Reasoning", "Play", "Draw");
    println!("{:-<32}", "");
    for r in &rates {
        println!("{:10} {:>9.2}% {:>9.2}%", r.level.to_string(), r.play * 100.0, r.draw * 100.0);
    }
}

fn optimize(level: u8, side: Side, json: bool) {
    let level = match Level::from_number(level) {
        Some(level) => level,
        None => {
            eprintln!("✗ Unknown level '{}'. Use 1, 2 or 3.", level);
            std::process::exit(1);
        }
    };

    let start = std::time::Instant::now();
    let best = best_choice(level, side, !json);
    if json {
        match serde_json::to_string_pretty(&best) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("✗ Failed to serialize best deck: {}", e),
        }
        return;
    }
    println!("\n=== Best Spirit Guide Count ({}, on the {}) ===\n", level, side);
    println!("Spirit Guides: {}", best.accelerants);
    println!("Win rate: {:.4}%", best.win_rate * 100.0);
    println!("\nCompleted in {:.2?}", start.elapsed());
}

fn scry(hand: Hand, x: i32) {
    let mut eval = Evaluator::new();
    let (n, k) = (hand.cards(), hand.spirit_guides());
    println!("{:14} {:>12} {:>12}", "Revealed", "Top", "Bottom");
    for card in Revealed::ALL {
        let (top, bottom) = eval.scry_options(n, x, k, card);
        let name = match card {
            Revealed::Accelerant => "Spirit Guide",
            Revealed::NonAccelerant => "Surging Flame",
        };
        println!("{:14} {:>12.10} {:>12.10}", name, top, bottom);
    }
}
