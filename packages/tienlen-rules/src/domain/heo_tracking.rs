//! Tracking of consecutive single-heo plays across turns.
//!
//! A run of single heos (1–4 cards) is what the power combinations cut, and
//! the run's point total is the penalty. Any play that is not a single heo
//! ends the run, including a pair or triple of heos.

use serde::Serialize;
use tracing::debug;

use super::cards_logic::heo_penalty_sum;
use super::cards_types::Card;
use super::combinations::CardCombination;
use super::rules::{require_player_count, MAX_TRACKED_HEOS};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleHeoTrackingState {
    consecutive_single_heos: Vec<Card>,
    num_players: u8,
}

impl SingleHeoTrackingState {
    /// Rebuild a state from stored parts. The run length is not checked here;
    /// penalty calculation rejects impossible runs.
    pub fn from_parts(num_players: u8, heos: Vec<Card>) -> Result<Self, DomainError> {
        Ok(Self {
            consecutive_single_heos: heos,
            num_players: require_player_count(num_players)?,
        })
    }

    pub fn num_players(&self) -> u8 {
        self.num_players
    }

    pub fn consecutive_single_heos(&self) -> &[Card] {
        &self.consecutive_single_heos
    }
}

pub fn initialize(num_players: u8) -> Result<SingleHeoTrackingState, DomainError> {
    SingleHeoTrackingState::from_parts(num_players, Vec::new())
}

/// Fold a newly accepted play into the run.
pub fn record_play(
    state: &SingleHeoTrackingState,
    combination: &CardCombination,
) -> SingleHeoTrackingState {
    let consecutive_single_heos = match combination {
        CardCombination::Single(card) if card.is_heo() => {
            let mut run = state.consecutive_single_heos.clone();
            run.push(*card);
            run
        }
        _ => Vec::new(),
    };
    debug!(
        kind = %combination.kind(),
        run = consecutive_single_heos.len(),
        "heo run recorded"
    );
    SingleHeoTrackingState {
        consecutive_single_heos,
        num_players: state.num_players,
    }
}

/// Drop the run, e.g. when a new trick starts.
pub fn clear(state: &SingleHeoTrackingState) -> SingleHeoTrackingState {
    SingleHeoTrackingState {
        consecutive_single_heos: Vec::new(),
        num_players: state.num_players,
    }
}

pub fn consecutive_single_heo_count(state: &SingleHeoTrackingState) -> usize {
    state.consecutive_single_heos.len()
}

/// Point total of the tracked run.
pub fn calculate_heo_penalty(state: &SingleHeoTrackingState) -> Result<u32, DomainError> {
    let run = &state.consecutive_single_heos;
    if run.len() > MAX_TRACKED_HEOS {
        return Err(DomainError::validation(
            ValidationKind::TooManyTrackedHeos,
            format!(
                "Tracked {} consecutive single heos, at most {MAX_TRACKED_HEOS} exist",
                run.len()
            ),
        ));
    }
    heo_penalty_sum(run)
}
