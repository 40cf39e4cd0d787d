//! # pokerduel-engine: Duel Poker Game Engine Core
//!
//! A deterministic engine for the two-player column poker duel: each player
//! fills five 5-card columns one drawn card at a time, and every completed
//! column is scored as an independent poker hand. The whole match derives
//! from a shared seed plus an append-only log of placement moves, which is
//! what lets two independently polling clients stay in lockstep.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`rng`] - The protocol LCG stream and match seed generation
//! - [`deck`] - Deterministic seeded shuffling and front-to-back dealing
//! - [`board`] - Seats and the 2x5 append-only column board
//! - [`hand`] - 5-card hand evaluation and strength comparison
//! - [`rules`] - The balanced-fill placement rule
//! - [`game`] - The move log, replay engine, and turn state machine
//! - [`score`] - Column-by-column match scoring
//! - [`store`] - Shared match descriptors and the optimistic append guard
//! - [`logger`] - Match record serialization (JSONL)
//! - [`errors`] - Error types for game operations
//!
//! ## Deterministic Replay
//!
//! The same `(seed, log)` pair always derives the same state, no matter how
//! often it is replayed:
//!
//! ```rust
//! use pokerduel_engine::game::replay;
//!
//! let a = replay(42, &[]).unwrap();
//! let b = replay(42, &[]).unwrap();
//! assert_eq!(a.board(), b.board());
//! assert_eq!(a.drawn_card(), b.drawn_card());
//! ```
//!
//! ## Hand Evaluation
//!
//! ```rust
//! use pokerduel_engine::cards::{Card, Rank, Suit};
//! use pokerduel_engine::hand::{evaluate_hand, Category};
//!
//! let royal = [
//!     Card { suit: Suit::Spades, rank: Rank::Ten },
//!     Card { suit: Suit::Spades, rank: Rank::Jack },
//!     Card { suit: Suit::Spades, rank: Rank::Queen },
//!     Card { suit: Suit::Spades, rank: Rank::King },
//!     Card { suit: Suit::Spades, rank: Rank::Ace },
//! ];
//! let eval = evaluate_hand(&royal).unwrap();
//! assert_eq!(eval.category, Category::RoyalFlush);
//! ```
//!
//! ## Making Moves
//!
//! State is value-in/value-out; a rejected move leaves the caller's state
//! untouched:
//!
//! ```rust
//! use pokerduel_engine::board::Seat;
//! use pokerduel_engine::game::GameState;
//!
//! let state = GameState::new_match(42).unwrap();
//! assert_eq!(state.next_player(), Seat::One);
//! let (state, mv) = state.apply_move(Seat::One, 0).unwrap();
//! assert_eq!(mv.column, 0);
//! assert_eq!(state.next_player(), Seat::Two);
//! ```

pub mod board;
pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod rng;
pub mod rules;
pub mod score;
pub mod store;
