//! Penalty ledger: points paid and received per player over a round.

use serde::Serialize;
use tracing::debug;

use super::rules::{require_player_count, require_player_index, PlayerId};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPenalties {
    pub penalties_paid: u32,
    pub penalties_received: u32,
}

impl PlayerPenalties {
    pub fn net(&self) -> i64 {
        i64::from(self.penalties_received) - i64::from(self.penalties_paid)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PenaltyTrackingState {
    num_players: u8,
    players: Vec<PlayerPenalties>,
}

impl PenaltyTrackingState {
    pub fn num_players(&self) -> u8 {
        self.num_players
    }

    pub fn player(&self, who: PlayerId) -> Result<PlayerPenalties, DomainError> {
        require_player_index(self.num_players, who)?;
        Ok(self.players[who as usize])
    }
}

/// One row of [`penalty_summary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PenaltySummary {
    pub player: PlayerId,
    pub paid: u32,
    pub received: u32,
    pub net: i64,
}

fn add_points(current: u32, points: u32, who: PlayerId) -> Result<u32, DomainError> {
    current.checked_add(points).ok_or_else(|| {
        DomainError::validation(
            ValidationKind::PenaltyOverflow,
            format!("Penalty tally for player {who} overflowed adding {points}"),
        )
    })
}

pub fn initialize_penalty_tracking(num_players: u8) -> Result<PenaltyTrackingState, DomainError> {
    let num_players = require_player_count(num_players)?;
    Ok(PenaltyTrackingState {
        num_players,
        players: vec![PlayerPenalties::default(); num_players as usize],
    })
}

pub fn record_penalty_payment(
    state: &PenaltyTrackingState,
    who: PlayerId,
    points: u32,
) -> Result<PenaltyTrackingState, DomainError> {
    require_player_index(state.num_players, who)?;
    let mut next = state.clone();
    let entry = &mut next.players[who as usize];
    entry.penalties_paid = add_points(entry.penalties_paid, points, who)?;
    Ok(next)
}

pub fn record_penalty_receipt(
    state: &PenaltyTrackingState,
    who: PlayerId,
    points: u32,
) -> Result<PenaltyTrackingState, DomainError> {
    require_player_index(state.num_players, who)?;
    let mut next = state.clone();
    let entry = &mut next.players[who as usize];
    entry.penalties_received = add_points(entry.penalties_received, points, who)?;
    Ok(next)
}

/// Move `base_penalty + inherited_penalty` from `payer` (whose play was cut)
/// to `receiver` (the cutter) in one step.
///
/// `inherited_penalty` is what the payer had collected from an earlier cut
/// in the same chain (see `CutChain`). Either both tallies change or neither.
pub fn record_cutting_with_transfer(
    state: &PenaltyTrackingState,
    payer: PlayerId,
    receiver: PlayerId,
    base_penalty: u32,
    inherited_penalty: u32,
) -> Result<PenaltyTrackingState, DomainError> {
    require_player_index(state.num_players, payer)?;
    require_player_index(state.num_players, receiver)?;
    if payer == receiver {
        return Err(DomainError::validation(
            ValidationKind::SelfCut,
            format!("Player {payer} cannot cut their own play"),
        ));
    }
    let total = add_points(base_penalty, inherited_penalty, payer)?;

    let mut next = state.clone();
    let paid = add_points(next.players[payer as usize].penalties_paid, total, payer)?;
    let received = add_points(
        next.players[receiver as usize].penalties_received,
        total,
        receiver,
    )?;
    next.players[payer as usize].penalties_paid = paid;
    next.players[receiver as usize].penalties_received = received;

    debug!(
        payer,
        receiver,
        base_penalty,
        inherited_penalty,
        total,
        "cut penalty transferred"
    );
    Ok(next)
}

/// Received minus paid; negative when a player has paid more than collected.
pub fn player_net_penalty_score(
    state: &PenaltyTrackingState,
    who: PlayerId,
) -> Result<i64, DomainError> {
    Ok(state.player(who)?.net())
}

pub fn penalty_summary(state: &PenaltyTrackingState) -> Vec<PenaltySummary> {
    state
        .players
        .iter()
        .zip(0..)
        .map(|(p, player)| PenaltySummary {
            player,
            paid: p.penalties_paid,
            received: p.penalties_received,
            net: p.net(),
        })
        .collect()
}
