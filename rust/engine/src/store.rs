//! Shared match descriptor and the optimistic append guard.
//!
//! The descriptor is the only mutable artifact exchanged between
//! participants; everything else is re-derived locally from `(seed, moves)`
//! via [`crate::game::replay`]. The store behind it is a host concern — a
//! remote key-value service, or the in-memory implementation here when both
//! players share a process — but the append contract is part of the core:
//! a writer must present the log length it last observed, and loses the
//! turn slot if another writer appended in the interim.

use std::collections::HashMap;
use std::sync::Mutex;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::game::Move;

pub const ROOM_CODE_LEN: usize = 4;

/// Room-code alphabet; ambiguous characters (I, O, 0, 1) are excluded.
const ROOM_CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// The persisted face of a match. The core reads `seed` and `moves`,
/// appends to `moves`, and flips the connection flags on join; it does not
/// own storage, transport, or addressing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDescriptor {
    pub seed: u64,
    pub moves: Vec<Move>,
    pub one_connected: bool,
    pub two_connected: bool,
}

impl MatchDescriptor {
    /// Descriptor for a freshly created match: creator connected, empty log.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            moves: Vec::new(),
            one_connected: true,
            two_connected: false,
        }
    }
}

/// Generates a 4-character room code.
pub fn generate_room_code() -> String {
    let mut rng = rand::rng();
    (0..ROOM_CODE_LEN)
        .map(|_| {
            let i = rng.random_range(0..ROOM_CODE_ALPHABET.len());
            ROOM_CODE_ALPHABET[i] as char
        })
        .collect()
}

/// Storage seam for match descriptors.
///
/// `append_move` carries the synchronization contract: the append succeeds
/// only if the stored log still has exactly `observed_len` entries, so two
/// clients racing for the same turn slot resolve to one winner and one
/// [`GameError::StaleWrite`]. The loser re-derives state from the fresh
/// descriptor and retries.
pub trait MatchStore {
    /// Creates a match and returns its room code.
    fn create(&self, seed: u64) -> Result<String, GameError>;

    /// Joins as player two. Fails with [`GameError::MatchNotFound`] for an
    /// unknown code and [`GameError::MatchFull`] if a second player is
    /// already connected.
    fn join(&self, code: &str) -> Result<MatchDescriptor, GameError>;

    /// Snapshot of the current descriptor.
    fn fetch(&self, code: &str) -> Result<MatchDescriptor, GameError>;

    /// Optimistic append: succeeds only while the stored log length still
    /// equals `observed_len`, returning the updated descriptor.
    fn append_move(
        &self,
        code: &str,
        observed_len: usize,
        mv: Move,
    ) -> Result<MatchDescriptor, GameError>;
}

/// In-process store. Doubles as the degenerate local-play backend (both
/// players share the same log) and the harness for append-race tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rooms: Mutex<HashMap<String, MatchDescriptor>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MatchStore for MemoryStore {
    fn create(&self, seed: u64) -> Result<String, GameError> {
        let mut rooms = self.rooms.lock().unwrap_or_else(|e| e.into_inner());
        loop {
            let code = generate_room_code();
            if !rooms.contains_key(&code) {
                rooms.insert(code.clone(), MatchDescriptor::new(seed));
                return Ok(code);
            }
        }
    }

    fn join(&self, code: &str) -> Result<MatchDescriptor, GameError> {
        let mut rooms = self.rooms.lock().unwrap_or_else(|e| e.into_inner());
        let room = rooms.get_mut(code).ok_or_else(|| GameError::MatchNotFound {
            code: code.to_string(),
        })?;
        if room.two_connected {
            return Err(GameError::MatchFull {
                code: code.to_string(),
            });
        }
        room.two_connected = true;
        Ok(room.clone())
    }

    fn fetch(&self, code: &str) -> Result<MatchDescriptor, GameError> {
        let rooms = self.rooms.lock().unwrap_or_else(|e| e.into_inner());
        rooms
            .get(code)
            .cloned()
            .ok_or_else(|| GameError::MatchNotFound {
                code: code.to_string(),
            })
    }

    fn append_move(
        &self,
        code: &str,
        observed_len: usize,
        mv: Move,
    ) -> Result<MatchDescriptor, GameError> {
        let mut rooms = self.rooms.lock().unwrap_or_else(|e| e.into_inner());
        let room = rooms.get_mut(code).ok_or_else(|| GameError::MatchNotFound {
            code: code.to_string(),
        })?;
        if room.moves.len() != observed_len {
            return Err(GameError::StaleWrite {
                observed: observed_len,
                actual: room.moves.len(),
            });
        }
        room.moves.push(mv);
        Ok(room.clone())
    }
}
