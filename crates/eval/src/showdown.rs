// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown winners resolution.
use log::debug;

use showdown_cards::Card;

use crate::{error::Result, ranks::Tally, value::HandRank};

/// Returns the indices of the winning hands.
///
/// Categories are checked from the straight flush down to the high card, the
/// first category held by at least one hand decides the showdown and all the
/// hands with the highest strength in that category win. Every hand must have
/// 7 cards, the indices are returned in ascending order and an empty list of
/// hands has no winners.
pub fn get_winners<H: AsRef<[Card]>>(hands: &[H]) -> Result<Vec<usize>> {
    let tallies = hands
        .iter()
        .map(|hand| Tally::new(hand.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    for rank in HandRank::PRIORITY {
        let strengths = tallies
            .iter()
            .map(|tally| rank.check_tally(tally))
            .collect::<Vec<_>>();

        let Some(best) = strengths.iter().flatten().max().copied() else {
            continue;
        };

        let winners = strengths
            .iter()
            .enumerate()
            .filter(|(_, strength)| **strength == Some(best))
            .map(|(idx, _)| idx)
            .collect::<Vec<_>>();

        debug!("Showdown won by {winners:?} with {rank} ({best})");
        return Ok(winners);
    }

    Ok(Vec::new())
}
