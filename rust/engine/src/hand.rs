use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::errors::GameError;

/// Poker hand category for a completed 5-card column, weakest to strongest.
/// The discriminants are the fixed numeric weights used in match records.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

/// The result of evaluating one 5-card column.
///
/// `tiebreak` is the category-specific key, most significant rank first,
/// zero-padded to five entries. Comparing the padded arrays elementwise
/// realizes the "missing elements count as 0" rule.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub category: Category,
    pub tiebreak: [u8; 5],
}

/// Evaluates an unordered 5-card hand into a category and tie-break key.
///
/// # Errors
///
/// Returns [`GameError::InvalidHandSize`] for any other hand size. The
/// engine only ever evaluates completed columns; anything else is a host
/// programming error and must not be masked by a default category.
pub fn evaluate_hand(cards: &[Card]) -> Result<Evaluation, GameError> {
    if cards.len() != 5 {
        return Err(GameError::InvalidHandSize {
            actual: cards.len(),
        });
    }

    let mut rank_counts = [0u8; 15]; // 2..=14 used
    for c in cards {
        rank_counts[rank_val(c.rank) as usize] += 1;
    }
    let mut values: Vec<u8> = cards.iter().map(|c| rank_val(c.rank)).collect();
    values.sort_unstable_by(|a, b| b.cmp(a));

    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_high = detect_straight_high(&rank_counts);
    let is_royal =
        straight_high.is_some() && values.contains(&14) && values.contains(&13);

    if is_flush {
        if is_royal {
            return Ok(Evaluation {
                category: Category::RoyalFlush,
                tiebreak: pad(&values),
            });
        }
        if let Some(high) = straight_high {
            return Ok(Evaluation {
                category: Category::StraightFlush,
                tiebreak: straight_key(high),
            });
        }
    }

    // Rank multiples, strongest grouping first: count desc, then rank desc.
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .filter(|&r| rank_counts[r as usize] > 0)
        .map(|r| (rank_counts[r as usize], r))
        .collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));

    if groups[0].0 == 4 {
        let quad = groups[0].1;
        let kicker = groups[1].1;
        return Ok(Evaluation {
            category: Category::FourOfAKind,
            tiebreak: pad(&[quad, kicker]),
        });
    }
    if groups[0].0 == 3 && groups[1].0 == 2 {
        return Ok(Evaluation {
            category: Category::FullHouse,
            tiebreak: pad(&[groups[0].1, groups[1].1]),
        });
    }
    if is_flush {
        return Ok(Evaluation {
            category: Category::Flush,
            tiebreak: pad(&values),
        });
    }
    if let Some(high) = straight_high {
        return Ok(Evaluation {
            category: Category::Straight,
            tiebreak: straight_key(high),
        });
    }
    if groups[0].0 == 3 {
        let trip = groups[0].1;
        let mut key = vec![trip];
        key.extend(values.iter().copied().filter(|&v| v != trip));
        return Ok(Evaluation {
            category: Category::ThreeOfAKind,
            tiebreak: pad(&key),
        });
    }
    if groups[0].0 == 2 && groups[1].0 == 2 {
        let high = groups[0].1;
        let low = groups[1].1;
        let kicker = groups[2].1;
        return Ok(Evaluation {
            category: Category::TwoPair,
            tiebreak: pad(&[high, low, kicker]),
        });
    }
    if groups[0].0 == 2 {
        let pair = groups[0].1;
        let mut key = vec![pair];
        key.extend(values.iter().copied().filter(|&v| v != pair));
        return Ok(Evaluation {
            category: Category::OnePair,
            tiebreak: pad(&key),
        });
    }

    Ok(Evaluation {
        category: Category::HighCard,
        tiebreak: pad(&values),
    })
}

/// Compares two evaluations: higher category wins outright, otherwise the
/// zero-padded tie-break keys decide elementwise.
///
/// `Ordering::Equal` means the keys tie at every position; the match scorer
/// resolves that case in favor of the first-given hand.
pub fn compare_hands(a: &Evaluation, b: &Evaluation) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.tiebreak.cmp(&b.tiebreak),
        ord => ord,
    }
}

fn rank_val(r: Rank) -> u8 {
    r as u8
}

fn pad(key: &[u8]) -> [u8; 5] {
    let mut out = [0u8; 5];
    for (slot, &v) in out.iter_mut().zip(key.iter()) {
        *slot = v;
    }
    out
}

/// Detects a 5-card run over the rank counts, returning the high card.
/// The wheel (A-2-3-4-5) counts as a 5-high straight even though the Ace
/// normally sorts high.
fn detect_straight_high(rank_counts: &[u8; 15]) -> Option<u8> {
    let distinct = (2..=14u8).filter(|&r| rank_counts[r as usize] > 0).count();
    if distinct != 5 {
        return None;
    }
    let lowest = (2..=14u8).find(|&r| rank_counts[r as usize] > 0)?;
    let highest = (2..=14u8).rev().find(|&r| rank_counts[r as usize] > 0)?;
    if highest - lowest == 4 {
        return Some(highest);
    }
    let wheel = [14u8, 2, 3, 4, 5]
        .iter()
        .all(|&r| rank_counts[r as usize] > 0);
    if wheel {
        Some(5)
    } else {
        None
    }
}

/// Tie-break key for a straight: the five ranks descending, with the wheel
/// keyed as 5-4-3-2-1 so it loses to every higher straight.
fn straight_key(high: u8) -> [u8; 5] {
    [high, high - 1, high - 2, high - 3, high - 4]
}
