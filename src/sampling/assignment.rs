//! Independent per-slot weighted draws

use crate::io::error::Result;
use crate::sampling::weights::WeightSet;
use rand::Rng;

/// Draw `count` labels, one independent weighted draw per slot
///
/// Each slot consumes exactly one uniform `f64` from `rng`, so a seeded
/// generator reproduces the same sequence.
///
/// # Errors
///
/// Returns `InvalidWeights` if the weight set cannot be normalized, even
/// when `count` is zero
pub fn assign<L: Copy, R: Rng>(
    count: usize,
    weights: &WeightSet<L>,
    rng: &mut R,
) -> Result<Vec<L>> {
    let distribution = weights.normalize()?;

    let labels: Vec<L> = (0..count)
        .map(|_| distribution.select(rng.random::<f64>()))
        .collect();

    tracing::debug!(
        category = weights.category(),
        count,
        rule = ?weights.rule(),
        "labels assigned"
    );

    Ok(labels)
}

/// Count how many drawn labels equal `label`
pub fn tally<L: PartialEq>(drawn: &[L], label: &L) -> usize {
    drawn.iter().filter(|&candidate| candidate == label).count()
}
