use crate::cards::{full_deck, Card};
use crate::rng::Lcg;

/// Derives the full shuffled deck for a match seed.
///
/// Pure and total: the same seed always yields the exact same ordering,
/// which is the linchpin of replay correctness. The canonical deck is
/// permuted with a Fisher–Yates pass from the last index down to 1, each
/// step swapping index `i` with `floor(next_f64() * (i + 1))`.
pub fn shuffled_deck(seed: u64) -> Vec<Card> {
    let mut cards = full_deck();
    let mut rng = Lcg::new(seed);
    for i in (1..cards.len()).rev() {
        let j = (rng.next_f64() * (i as f64 + 1.0)).floor() as usize;
        cards.swap(i, j);
    }
    cards
}

/// A shuffled deck consumed strictly front-to-back.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            cards: shuffled_deck(seed),
            position: 0,
        }
    }

    /// Removes and returns the next card, or `None` when exhausted.
    pub fn deal_card(&mut self) -> Option<Card> {
        if self.position >= self.cards.len() {
            None
        } else {
            let c = self.cards[self.position];
            self.position += 1;
            Some(c)
        }
    }

    /// Discards one card from the front. The burned card is never visible
    /// to either player and never appears in any column.
    pub fn burn_card(&mut self) -> Option<Card> {
        self.deal_card()
    }

    /// Peeks at the next undealt card without consuming it.
    pub fn peek(&self) -> Option<Card> {
        self.cards.get(self.position).copied()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    /// The undealt suffix of the deck, next card first.
    pub fn undealt(&self) -> &[Card] {
        &self.cards[self.position.min(self.cards.len())..]
    }
}
