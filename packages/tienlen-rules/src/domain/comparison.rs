//! Same-kind combination ordering.

use std::cmp::Ordering;

use super::combinations::CardCombination;
use crate::errors::domain::{DomainError, ValidationKind};

/// Order two combinations of the same kind.
///
/// Runs compare by length first, then by highest card; every other kind
/// compares by highest card alone. Crossing kinds is the cutting
/// adjudicator's job and fails here.
pub fn compare_combinations(
    a: &CardCombination,
    b: &CardCombination,
) -> Result<Ordering, DomainError> {
    if a.kind() != b.kind() {
        return Err(DomainError::validation(
            ValidationKind::CombinationKindMismatch,
            format!("Cannot compare {} with {}", a.kind(), b.kind()),
        ));
    }

    let ordering = match (a, b) {
        (CardCombination::Straight(x), CardCombination::Straight(y))
        | (CardCombination::ConsecutivePairs(x), CardCombination::ConsecutivePairs(y)) => x
            .len()
            .cmp(&y.len())
            .then_with(|| a.rank_key().cmp(&b.rank_key())),
        _ => a.rank_key().cmp(&b.rank_key()),
    };
    Ok(ordering)
}

/// True when `a` strictly beats `b`.
pub fn beats(a: &CardCombination, b: &CardCombination) -> Result<bool, DomainError> {
    Ok(compare_combinations(a, b)? == Ordering::Greater)
}

/// Three-way result as the wire format reports it: 1, 0 or -1.
pub fn ordering_sign(ordering: Ordering) -> i8 {
    ordering as i8
}
