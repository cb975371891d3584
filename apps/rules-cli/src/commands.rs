//! Command handlers: JSON request in, JSON verdict out.
//!
//! Requests use the engine's wire format (card tokens such as `"3S"`, camelCase
//! fields). A rejected move or cut is a normal result; only malformed input
//! becomes a [`CliError`].

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tienlen_rules::domain::heo_tracking::SingleHeoTrackingState;
use tienlen_rules::domain::rules::PlayerId;
use tienlen_rules::domain::{
    can_cut, detect_combination, is_four_heos, is_valid_move, legal_plays, try_parse_cards, vong,
    Card, CardCombination, MoveValidationContext, VongState,
};
use tracing::{debug, info};

use crate::error::CliError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MoveRequest {
    pub cards: Vec<Card>,
    pub hand: Vec<Card>,
    #[serde(default)]
    pub last_play: Option<Vec<Card>>,
    #[serde(default)]
    pub is_leading: bool,
    #[serde(default)]
    pub is_initial_round: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HintRequest {
    pub hand: Vec<Card>,
    #[serde(default)]
    pub last_play: Option<Vec<Card>>,
    #[serde(default)]
    pub is_leading: bool,
    #[serde(default)]
    pub is_initial_round: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CutRequest {
    pub cutting: Vec<Card>,
    pub target: Vec<Card>,
    pub num_players: u8,
    pub acting_player: PlayerId,
    /// Player whose play currently stands.
    pub leader: PlayerId,
    /// Players who played or passed since the standing play.
    #[serde(default)]
    pub acted: Vec<PlayerId>,
    /// Players who have emptied their hand.
    #[serde(default)]
    pub finished: Vec<PlayerId>,
    /// Consecutive single heos played up to and including the target.
    #[serde(default)]
    pub heo_run: Vec<Card>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DetectResponse {
    combination: Option<CardCombination>,
    four_heos: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HintResponse {
    plays: Vec<CardCombination>,
}

/// Read the request body from `path`, or stdin when absent or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(p) if p != Path::new("-") => {
            std::fs::read_to_string(p).map_err(|source| CliError::Io {
                detail: format!("cannot read {}", p.display()),
                source,
            })
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| CliError::Io {
                    detail: "cannot read stdin".to_string(),
                    source,
                })?;
            Ok(buf)
        }
    }
}

fn parse_request<T: DeserializeOwned>(body: &str) -> Result<T, CliError> {
    serde_json::from_str(body).map_err(|source| CliError::Json {
        detail: source.to_string(),
        source,
    })
}

fn to_json<T: Serialize>(value: &T) -> Result<Value, CliError> {
    serde_json::to_value(value).map_err(CliError::encode)
}

fn require_combination(cards: &[Card], field: &str) -> Result<CardCombination, CliError> {
    detect_combination(cards)
        .ok_or_else(|| CliError::bad_request(format!("{field} is not a valid combination")))
}

fn last_play(cards: Option<&[Card]>) -> Result<Option<CardCombination>, CliError> {
    cards
        .map(|cards| require_combination(cards, "lastPlay"))
        .transpose()
}

pub fn validate(body: &str) -> Result<Value, CliError> {
    let req: MoveRequest = parse_request(body)?;
    let last = last_play(req.last_play.as_deref())?;
    let result = is_valid_move(&MoveValidationContext {
        cards: &req.cards,
        hand: &req.hand,
        last_play: last.as_ref(),
        is_leading: req.is_leading,
        is_initial_round: req.is_initial_round,
    });
    info!(valid = result.is_valid, code = ?result.error_code, "validate");
    to_json(&result)
}

pub fn hints(body: &str) -> Result<Value, CliError> {
    let req: HintRequest = parse_request(body)?;
    let last = last_play(req.last_play.as_deref())?;
    let plays = legal_plays(
        &req.hand,
        last.as_ref(),
        req.is_leading,
        req.is_initial_round,
    );
    info!(count = plays.len(), "hints");
    to_json(&HintResponse { plays })
}

fn vong_state(req: &CutRequest) -> Result<VongState, CliError> {
    let mut state = vong::initialize(req.num_players, req.leader)?;
    for &who in &req.acted {
        state = vong::mark_player_played(&state, who)?;
    }
    for &who in &req.finished {
        state = vong::mark_player_finished(&state, who)?;
    }
    debug!(acted = ?state.acted_players(), "vong state rebuilt");
    Ok(state)
}

pub fn cut(body: &str) -> Result<Value, CliError> {
    let req: CutRequest = parse_request(body)?;
    let cutting = require_combination(&req.cutting, "cutting")?;
    let target = require_combination(&req.target, "target")?;
    let state = vong_state(&req)?;
    let tracking = SingleHeoTrackingState::from_parts(req.num_players, req.heo_run.clone())?;
    let result = can_cut(&cutting, &target, &state, req.acting_player, &tracking)?;
    info!(can_cut = result.can_cut, code = ?result.error_code, "cut");
    to_json(&result)
}

pub fn detect(tokens: &[String]) -> Result<Value, CliError> {
    let cards = try_parse_cards(tokens)?;
    let response = DetectResponse {
        combination: detect_combination(&cards),
        four_heos: is_four_heos(&cards),
    };
    to_json(&response)
}
