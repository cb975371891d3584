//! Vòng tracking: whether a full rotation has passed since a play last stood.
//!
//! A contest starts when a play stands unbeaten (the leader). Every other
//! player then acts once, by playing or passing. A player "has vòng" once
//! every other active player has acted in the current contest. Cutting with
//! three consecutive pairs or four of a kind is gated on this.
//!
//! All transitions take the state by reference and return a fresh value.

use serde::Serialize;
use tracing::debug;

use super::rules::{require_player_count, require_player_index, PlayerId};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VongState {
    num_players: u8,
    leader: PlayerId,
    /// Players who have acted in this contest, by seat.
    acted: Vec<bool>,
    /// Players still holding cards, by seat.
    active: Vec<bool>,
}

impl VongState {
    pub fn num_players(&self) -> u8 {
        self.num_players
    }

    pub fn leader(&self) -> PlayerId {
        self.leader
    }

    pub fn has_acted(&self, who: PlayerId) -> bool {
        self.acted.get(who as usize).copied().unwrap_or(false)
    }

    pub fn is_active(&self, who: PlayerId) -> bool {
        self.active.get(who as usize).copied().unwrap_or(false)
    }

    /// Seats that have acted since the contest started, ascending.
    pub fn acted_players(&self) -> Vec<PlayerId> {
        (0..self.num_players).filter(|&p| self.has_acted(p)).collect()
    }
}

/// Start a contest with `leader`'s play standing.
pub fn initialize(num_players: u8, leader: PlayerId) -> Result<VongState, DomainError> {
    let num_players = require_player_count(num_players)?;
    require_player_index(num_players, leader)?;
    let mut acted = vec![false; num_players as usize];
    acted[leader as usize] = true;
    Ok(VongState {
        num_players,
        leader,
        acted,
        active: vec![true; num_players as usize],
    })
}

/// Start a new contest for a new standing play, keeping finished players out.
pub fn reset(state: &VongState, leader: PlayerId) -> Result<VongState, DomainError> {
    require_player_index(state.num_players, leader)?;
    let mut acted = vec![false; state.num_players as usize];
    acted[leader as usize] = true;
    debug!(leader, "vong contest reset");
    Ok(VongState {
        num_players: state.num_players,
        leader,
        acted,
        active: state.active.clone(),
    })
}

/// Record that `who` played or passed. Idempotent within a contest.
pub fn mark_player_played(state: &VongState, who: PlayerId) -> Result<VongState, DomainError> {
    require_player_index(state.num_players, who)?;
    let mut next = state.clone();
    next.acted[who as usize] = true;
    debug!(player = who, acted = ?next.acted_players(), "vong mark played");
    Ok(next)
}

/// Remove `who` from the rotation once they have emptied their hand.
pub fn mark_player_finished(state: &VongState, who: PlayerId) -> Result<VongState, DomainError> {
    require_player_index(state.num_players, who)?;
    let mut next = state.clone();
    next.active[who as usize] = false;
    debug!(player = who, "vong player finished");
    Ok(next)
}

/// Whether every other active player has acted since the contest started.
pub fn has_vong(state: &VongState, who: PlayerId) -> Result<bool, DomainError> {
    require_player_index(state.num_players, who)?;
    Ok((0..state.num_players)
        .filter(|&p| p != who && state.is_active(p))
        .all(|p| state.has_acted(p)))
}
