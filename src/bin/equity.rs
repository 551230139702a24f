//! Equity Calculator Binary
//!
//! Computes win and tie frequencies for 2 to 6 hands on a partial board.
//!
//! ```text
//! equity AsAh KsKh --board "2c 7d 9h"
//! equity --variant omaha AsAhKsKh 2c3c4d5d --json
//! ```

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use poker_equity::*;

#[derive(Parser)]
#[command(author, version, about = "Multiway poker equity calculator", long_about = None)]
struct Args {
    /// one hole per player, e.g. AsKd
    #[arg(required = true, num_args = 2..=6)]
    hands: Vec<String>,
    /// community cards dealt so far, e.g. "2c 7d 9h"
    #[arg(short, long, default_value = "")]
    board: String,
    /// texas-holdem, short-deck, super-holdem or omaha-holdem
    #[arg(short, long, default_value = "texas-holdem")]
    variant: String,
    /// fix the random seed for reproducible simulations
    #[arg(short, long)]
    seed: Option<u64>,
    /// override the variant's Monte Carlo trial count
    #[arg(short, long)]
    trials: Option<usize>,
    /// share tie credit among tied players instead of crediting each fully
    #[arg(long)]
    split_ties: bool,
    /// print the result as JSON
    #[arg(long)]
    json: bool,
    /// debug logging
    #[arg(long)]
    verbose: bool,
}

impl Args {
    fn settings(&self, variant: Variant) -> anyhow::Result<Settings> {
        let mut settings = Settings::default();
        if let Some(seed) = self.seed {
            settings = settings.with_seed(seed);
        }
        if let Some(trials) = self.trials {
            settings = settings.with_trials(variant, trials);
        }
        if self.split_ties {
            settings = settings.with_ties(TiePolicy::Split);
        }
        if let Ok(deadline) = std::env::var("EQUITY_DEADLINE") {
            let deadline = parse_duration(&deadline)
                .with_context(|| format!("EQUITY_DEADLINE must look like 30s, 5m or 2h, got {:?}", deadline))?;
            settings = settings.with_deadline(deadline);
        }
        Ok(settings)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    poker_equity::log(args.verbose, false)?;
    let variant = Variant::try_from(args.variant.as_str())?;
    let holes = args
        .hands
        .iter()
        .map(|hand| Hole::try_from(hand.as_str()).with_context(|| format!("parse hand {:?}", hand)))
        .collect::<anyhow::Result<Vec<Hole>>>()?;
    let board = Board::try_from(args.board.as_str()).context("parse board")?;
    let settings = args.settings(variant)?;
    let request = Request::new(holes, board, variant)?;
    let equity = compute(&request, &settings)?;
    match args.json {
        true => println!("{}", serde_json::to_string_pretty(&equity)?),
        false => print(&request, &equity),
    }
    Ok(())
}

fn print(request: &Request, equity: &Equity) {
    let oracle = Showdown::from(request.variant().rules());
    let extractor = Extractor::new(&oracle, request.variant());
    let board = Hand::from(request.board());
    let best = equity.equities().iter().cloned().fold(0., f64::max);
    println!("{} {}", request.variant().to_string().bold(), request.board());
    println!("{:<6}{:<12}{:>9}{:>9}  {}", "seat", "hole", "win", "tie", "hand");
    for (i, hole) in request.holes().iter().enumerate() {
        let win = format!("{:>8.2}%", equity.equities()[i] * 100.);
        let win = match equity.equities()[i] == best && best > 0. {
            true => win.green(),
            false => win.normal(),
        };
        let hand = extractor
            .reveal(Hand::from(hole), board)
            .map(|(_, score)| oracle.label(&score))
            .unwrap_or_default();
        println!(
            "{:<6}{:<12}{}{:>8.2}%  {}",
            i + 1,
            hole.to_string(),
            win,
            equity.ties()[i] * 100.,
            hand.dimmed()
        );
    }
    println!("{}", format!("{} trials by {}", equity.trials(), equity.method()).dimmed());
}
