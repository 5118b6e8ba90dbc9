//! Weight tables and their normalized distributions

use crate::io::error::{Result, invalid_weights};

/// How a normalized distribution maps a uniform draw onto a label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawRule {
    /// Half-open walk over cumulative probability mass in entry order
    Cumulative,
    /// Single test against the first entry's probability, else the second
    Bernoulli,
}

/// Ordered relative weights for the labels of one category
///
/// Weights need not sum to anything in particular; they are divided by
/// their total when normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightSet<L> {
    category: &'static str,
    entries: Vec<(L, f64)>,
    rule: DrawRule,
}

impl<L: Copy> WeightSet<L> {
    /// Weight set drawn by walking `entries` in the given order
    pub const fn cumulative(category: &'static str, entries: Vec<(L, f64)>) -> Self {
        Self {
            category,
            entries,
            rule: DrawRule::Cumulative,
        }
    }

    /// Two-label weight set drawn by testing `checked` first
    ///
    /// Restricted to exactly two labels; larger sets need the cumulative walk.
    pub fn binary(category: &'static str, checked: (L, f64), fallback: (L, f64)) -> Self {
        Self {
            category,
            entries: vec![checked, fallback],
            rule: DrawRule::Bernoulli,
        }
    }

    /// Category name used in error messages
    pub const fn category(&self) -> &'static str {
        self.category
    }

    /// Draw rule applied after normalization
    pub const fn rule(&self) -> DrawRule {
        self.rule
    }

    /// Labels and raw weights in draw order
    pub fn entries(&self) -> &[(L, f64)] {
        &self.entries
    }

    /// Sum of all raw weights
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|&(_, weight)| weight).sum()
    }

    /// Validate the weights and divide each by their total
    ///
    /// # Errors
    ///
    /// Returns `InvalidWeights` if:
    /// - The set has no entries
    /// - Any weight is negative, NaN or infinite
    /// - The weights sum to zero
    pub fn normalize(&self) -> Result<Distribution<L>> {
        if self.entries.is_empty() {
            return Err(invalid_weights(self.category, &"no labels to draw from"));
        }

        if let Some(&(_, weight)) = self
            .entries
            .iter()
            .find(|&&(_, weight)| !weight.is_finite() || weight < 0.0)
        {
            return Err(invalid_weights(
                self.category,
                &format!("weight {weight} is not a finite non-negative number"),
            ));
        }

        let largest = self
            .entries
            .iter()
            .map(|&(_, weight)| weight)
            .fold(0.0, f64::max);
        if largest <= 0.0 {
            return Err(invalid_weights(self.category, &"weights sum to zero"));
        }

        // Scaled weights lie in [0, 1], so their sum cannot overflow even
        // when the raw total would
        let scaled_total: f64 = self
            .entries
            .iter()
            .map(|&(_, weight)| weight / largest)
            .sum();
        let probabilities: Vec<(L, f64)> = self
            .entries
            .iter()
            .map(|&(label, weight)| (label, weight / largest / scaled_total))
            .collect();

        // Floating-point shortfall at r -> 1 lands on the last label that can
        // actually be drawn
        let fallback = probabilities
            .iter()
            .rev()
            .find(|&&(_, p)| p > 0.0)
            .map(|&(label, _)| label)
            .ok_or_else(|| invalid_weights(self.category, &"weights sum to zero"))?;

        Ok(Distribution {
            probabilities,
            fallback,
            rule: self.rule,
        })
    }
}

/// Normalized probabilities ready for drawing
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution<L> {
    probabilities: Vec<(L, f64)>,
    fallback: L,
    rule: DrawRule,
}

impl<L: Copy> Distribution<L> {
    /// Labels and normalized probabilities in draw order
    pub fn probabilities(&self) -> &[(L, f64)] {
        &self.probabilities
    }

    /// Map a uniform value in `[0, 1)` to a label
    pub fn select(&self, r: f64) -> L {
        match self.rule {
            DrawRule::Cumulative => {
                let mut cumulative = 0.0;
                for &(label, p) in &self.probabilities {
                    cumulative += p;
                    if r < cumulative {
                        return label;
                    }
                }
                self.fallback
            }
            DrawRule::Bernoulli => match self.probabilities.as_slice() {
                [(checked, p), ..] if r < *p => *checked,
                [_, (other, _)] => *other,
                _ => self.fallback,
            },
        }
    }
}
