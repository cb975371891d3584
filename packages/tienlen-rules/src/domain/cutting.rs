//! Cutting ("chặt"): overriding a standing play with a power combination.
//!
//! Only three or four consecutive pairs and four of a kind may cut. Three
//! pairs and four of a kind need vòng; four pairs never do. Three heos are
//! immune to everything. Rejections are returned as [`CutResult`] values;
//! `Err` is reserved for contract violations such as a bad player index.

use serde::Serialize;
use tracing::debug;

use super::cards_logic::{heo_penalty_points, heo_penalty_sum};
use super::cards_types::Card;
use super::combinations::CardCombination;
use super::comparison::beats;
use super::heo_tracking::{calculate_heo_penalty, SingleHeoTrackingState};
use super::rules::{require_player_index, PlayerId, POWER_CUT_PENALTY};
use super::vong::{has_vong, VongState};
use crate::errors::domain::{DomainError, ValidationKind};
use crate::errors::error_code::ErrorCode;

/// Which row of the cutting table allowed a cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CutRule {
    ThreePairsOverHeos,
    ThreePairsOverThreePairs,
    FourOfKindOverHeos,
    FourOfKindOverThreePairs,
    FourOfKindOverFourOfKind,
    FourPairsOverHeo,
    FourPairsOverPairOfHeos,
    FourPairsOverThreePairs,
    FourPairsOverFourOfKind,
    FourPairsOverFourPairs,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CutResult {
    pub can_cut: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penalty_points: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heo_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<CutRule>,
}

impl CutResult {
    fn allowed(rule: CutRule, penalty_points: u32, heo_count: usize) -> Self {
        Self {
            can_cut: true,
            error_code: None,
            reason: None,
            penalty_points: Some(penalty_points),
            heo_count: Some(heo_count),
            rule: Some(rule),
        }
    }

    fn rejected(code: ErrorCode, reason: impl Into<String>) -> Self {
        Self {
            can_cut: false,
            error_code: Some(code),
            reason: Some(reason.into()),
            penalty_points: None,
            heo_count: None,
            rule: None,
        }
    }
}

/// The power combinations that may cut at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cutter {
    ThreePairs,
    FourPairs,
    FourOfKind,
}

impl Cutter {
    fn classify(combo: &CardCombination) -> Option<Cutter> {
        match combo {
            CardCombination::FourOfKind(_) => Some(Cutter::FourOfKind),
            CardCombination::ConsecutivePairs(run) => match run.len() {
                3 => Some(Cutter::ThreePairs),
                4 => Some(Cutter::FourPairs),
                _ => None,
            },
            _ => None,
        }
    }

    fn needs_vong(self) -> bool {
        !matches!(self, Cutter::FourPairs)
    }

    fn label(self) -> &'static str {
        match self {
            Cutter::ThreePairs => "Three consecutive pairs",
            Cutter::FourPairs => "Four consecutive pairs",
            Cutter::FourOfKind => "Four of a kind",
        }
    }
}

/// Length and point total of the heo run a single-heo target stands for.
///
/// When the tracker's run ends with the target card the whole run is being
/// cut; otherwise the target is a lone heo.
fn heo_run(target: Card, tracking: &SingleHeoTrackingState) -> Result<(usize, u32), DomainError> {
    match tracking.consecutive_single_heos().last() {
        Some(&last) if last == target => Ok((
            tracking.consecutive_single_heos().len(),
            calculate_heo_penalty(tracking)?,
        )),
        _ => Ok((1, heo_penalty_points(target)?)),
    }
}

/// Decide whether `cutting` may cut `target` for `acting_player`.
pub fn can_cut(
    cutting: &CardCombination,
    target: &CardCombination,
    vong_state: &VongState,
    acting_player: PlayerId,
    heo_tracking: &SingleHeoTrackingState,
) -> Result<CutResult, DomainError> {
    require_player_index(vong_state.num_players(), acting_player)?;
    if heo_tracking.num_players() != vong_state.num_players() {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerCount,
            format!(
                "Heo tracker is for {} players but vòng state is for {}",
                heo_tracking.num_players(),
                vong_state.num_players()
            ),
        ));
    }
    let result = adjudicate(cutting, target, vong_state, acting_player, heo_tracking)?;
    debug!(
        player = acting_player,
        cutter = %cutting.kind(),
        target = %target.kind(),
        can_cut = result.can_cut,
        code = ?result.error_code,
        penalty = ?result.penalty_points,
        "cut adjudicated"
    );
    Ok(result)
}

fn adjudicate(
    cutting: &CardCombination,
    target: &CardCombination,
    vong_state: &VongState,
    acting_player: PlayerId,
    heo_tracking: &SingleHeoTrackingState,
) -> Result<CutResult, DomainError> {
    if target.is_triple_heos() {
        return Ok(CutResult::rejected(
            ErrorCode::ThreeHeoImmune,
            "Three heos cannot be cut",
        ));
    }

    let Some(cutter) = Cutter::classify(cutting) else {
        return Ok(CutResult::rejected(
            ErrorCode::CannotCut,
            format!(
                "{} ({} cards) cannot cut; only three or four consecutive pairs or four of a kind can",
                cutting.kind(),
                cutting.cards().len()
            ),
        ));
    };

    let verdict = match_target(cutter, cutting, target, heo_tracking)?;
    if !verdict.can_cut {
        return Ok(verdict);
    }

    if cutter.needs_vong() && !has_vong(vong_state, acting_player)? {
        return Ok(CutResult::rejected(
            ErrorCode::VongRequired,
            format!(
                "{} can only cut after a full round (vòng) has passed",
                cutter.label()
            ),
        ));
    }

    Ok(verdict)
}

/// Look up the (cutter, target) pairing in the cutting table.
fn match_target(
    cutter: Cutter,
    cutting: &CardCombination,
    target: &CardCombination,
    heo_tracking: &SingleHeoTrackingState,
) -> Result<CutResult, DomainError> {
    let target_pairs = target.consecutive_pairs_len();

    let result = match (cutter, target) {
        (Cutter::ThreePairs | Cutter::FourOfKind, CardCombination::Single(card))
            if card.is_heo() =>
        {
            let (count, penalty) = heo_run(*card, heo_tracking)?;
            let rule = if cutter == Cutter::ThreePairs {
                CutRule::ThreePairsOverHeos
            } else {
                CutRule::FourOfKindOverHeos
            };
            CutResult::allowed(rule, penalty, count)
        }
        (Cutter::FourPairs, CardCombination::Single(card)) if card.is_heo() => {
            let (count, penalty) = heo_run(*card, heo_tracking)?;
            if count != 1 {
                return Ok(CutResult::rejected(
                    ErrorCode::InvalidCutTarget,
                    format!(
                        "Four consecutive pairs cut a single heo, not a run of {count}"
                    ),
                ));
            }
            CutResult::allowed(CutRule::FourPairsOverHeo, penalty, 1)
        }
        (Cutter::FourPairs, CardCombination::Pair(group)) if group.rank().is_heo() => {
            CutResult::allowed(
                CutRule::FourPairsOverPairOfHeos,
                heo_penalty_sum(group.cards())?,
                0,
            )
        }
        (Cutter::ThreePairs, _) if target_pairs == Some(3) => {
            if !beats(cutting, target)? {
                return Ok(not_lower(cutter));
            }
            CutResult::allowed(CutRule::ThreePairsOverThreePairs, POWER_CUT_PENALTY, 0)
        }
        (Cutter::FourOfKind, _) if target_pairs == Some(3) => {
            CutResult::allowed(CutRule::FourOfKindOverThreePairs, POWER_CUT_PENALTY, 0)
        }
        (Cutter::FourOfKind, CardCombination::FourOfKind(_)) => {
            if !beats(cutting, target)? {
                return Ok(not_lower(cutter));
            }
            CutResult::allowed(CutRule::FourOfKindOverFourOfKind, POWER_CUT_PENALTY, 0)
        }
        (Cutter::FourPairs, _) if target_pairs == Some(3) => {
            CutResult::allowed(CutRule::FourPairsOverThreePairs, POWER_CUT_PENALTY, 0)
        }
        (Cutter::FourPairs, CardCombination::FourOfKind(_)) => {
            CutResult::allowed(CutRule::FourPairsOverFourOfKind, POWER_CUT_PENALTY, 0)
        }
        (Cutter::FourPairs, _) if target_pairs == Some(4) => {
            if !beats(cutting, target)? {
                return Ok(not_lower(cutter));
            }
            CutResult::allowed(CutRule::FourPairsOverFourPairs, POWER_CUT_PENALTY, 0)
        }
        _ => CutResult::rejected(
            ErrorCode::InvalidCutTarget,
            format!(
                "{} cannot cut {} of length {}",
                cutter.label(),
                target.kind(),
                target.length()
            ),
        ),
    };
    Ok(result)
}

fn not_lower(cutter: Cutter) -> CutResult {
    CutResult::rejected(
        ErrorCode::CutTargetNotLower,
        format!(
            "{} only cuts the same combination of strictly lower rank",
            cutter.label()
        ),
    )
}

/// Penalty carried by the standing cut within a trick ("chặt chồng").
///
/// When a player whose cut is standing gets cut in turn, they pay the new
/// base penalty plus everything they had collected in the chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CutChain {
    carried: u32,
    owner: Option<PlayerId>,
}

impl CutChain {
    /// Penalty `cut_player` must fold into their payment if cut now.
    pub fn inherited_for(&self, cut_player: PlayerId) -> u32 {
        match self.owner {
            Some(owner) if owner == cut_player => self.carried,
            _ => 0,
        }
    }

    /// Chain after `cutter` collected `transferred` points.
    pub fn record(&self, cutter: PlayerId, transferred: u32) -> CutChain {
        CutChain {
            carried: transferred,
            owner: Some(cutter),
        }
    }

    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    pub fn carried(&self) -> u32 {
        self.carried
    }
}
