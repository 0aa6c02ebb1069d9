// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use std::time::Instant;

use showdown_eval::{Card, Deck, HAND_SIZE, HandRank, HandValue, get_winners};

#[derive(Debug, Parser)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Deal random hands and settle the showdown.
    Deal {
        /// Number of players.
        #[clap(long, short, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=10))]
        players: u8,
        /// Number of rounds to deal.
        #[clap(long, short, default_value_t = 1)]
        rounds: u32,
        /// Seed for reproducible deals.
        #[clap(long, short)]
        seed: Option<u64>,
    },
    /// Evaluate the given hands, each hand is 7 cards like "AS KD 10H 2C 3C 4S 9D".
    Eval {
        /// The hands to compare.
        #[clap(required = true)]
        hands: Vec<String>,
    },
    /// Sample random hands and count their categories.
    Stats {
        /// Number of hands to sample.
        #[clap(long, default_value_t = 100_000)]
        hands: u32,
        /// Seed for reproducible samples.
        #[clap(long, short)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Deal {
            players,
            rounds,
            seed,
        } => deal(players as usize, rounds, &mut make_rng(seed)),
        Command::Eval { hands } => eval(&hands),
        Command::Stats { hands, seed } => stats(hands, &mut make_rng(seed)),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Deals two hole cards to each player and five board cards for each round.
fn deal(players: usize, rounds: u32, rng: &mut StdRng) -> Result<()> {
    let mut deck = Deck::new_and_shuffled(rng);

    for round in 1..=rounds {
        let holes = (0..players)
            .map(|_| deck.draw(2))
            .collect::<Result<Vec<_>, _>>()?;
        let board = deck.draw(5)?;

        let hands = holes
            .into_iter()
            .map(|mut cards| {
                cards.extend_from_slice(&board);
                cards
            })
            .collect::<Vec<_>>();

        println!("Round {round} board: {}", format_cards(&board));
        print_showdown(&hands)?;

        deck = deck.reset_with(rng);
    }

    info!("Dealt {rounds} rounds to {players} players");
    Ok(())
}

/// Parses and compares hands from the command line.
fn eval(hands: &[String]) -> Result<()> {
    let hands = hands
        .iter()
        .map(|hand| parse_hand(hand))
        .collect::<Result<Vec<_>>>()?;

    print_showdown(&hands)
}

/// Samples random 7 cards hands and prints the categories frequencies.
fn stats(hands: u32, rng: &mut StdRng) -> Result<()> {
    let now = Instant::now();
    let mut counts = [0usize; 9];

    for _ in 0..hands {
        let cards = Deck::new_and_shuffled(rng).draw(HAND_SIZE)?;
        let rank = HandValue::eval(&cards)?.rank();
        counts[rank as usize] += 1;
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {elapsed:.3}s");
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for rank in HandRank::PRIORITY.into_iter().rev() {
        let count = counts[rank as usize];
        let freq = 100.0 * count as f64 / total.max(1) as f64;
        println!("{:<17}{count:>10} {freq:>7.3}%", format!("{rank}:"));
    }

    Ok(())
}

fn print_showdown(hands: &[Vec<Card>]) -> Result<()> {
    let winners = get_winners(hands)?;

    for (idx, cards) in hands.iter().enumerate() {
        let value = HandValue::eval(cards)?;
        let mark = if winners.contains(&idx) { "*" } else { " " };
        println!("{mark} Player {idx}: {:<60} {value}", format_cards(cards));
    }

    println!();
    Ok(())
}

fn parse_hand(hand: &str) -> Result<Vec<Card>> {
    let cards = hand
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<Card>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Invalid hand {hand:?}"))?;

    if cards.len() != HAND_SIZE {
        bail!("Hand {hand:?} has {} cards, expected {HAND_SIZE}", cards.len());
    }

    Ok(cards)
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_eval::{Rank, Suit};

    #[test]
    fn parse_hand_separators() {
        let cards = parse_hand("AS, KD 10h,2C 3c  4S 9D").unwrap();
        assert_eq!(cards.len(), 7);
        assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Hearts));
    }

    #[test]
    fn parse_hand_errors() {
        assert!(parse_hand("AS KD 10H 2C 3C 4S").is_err());
        assert!(parse_hand("AS KD 10H 2C 3C 4S 1D").is_err());
    }

    #[test]
    fn seeded_deal_runs() {
        deal(10, 3, &mut make_rng(Some(5))).unwrap();
    }

    #[test]
    fn stats_runs() {
        stats(100, &mut make_rng(Some(5))).unwrap();
    }
}
