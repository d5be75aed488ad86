//! Variable management for the pigeonhole encoding

use crate::error::GeneratorError;

/// Maps "pigeon `i` sits in hole `j`" propositions to DIMACS variables.
///
/// Pigeons are numbered `1..=holes + 1` and holes `1..=holes`. The variable
/// for pigeon `i` and hole `j` is `holes * (i - 1) + j`, so all variables of
/// one pigeon are contiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementVariables {
    holes: u64,
}

impl PlacementVariables {
    /// Create a variable map for `holes` holes and `holes + 1` pigeons
    pub fn new(holes: u64) -> Result<Self, GeneratorError> {
        if holes == 0 {
            return Err(GeneratorError::invalid_argument(
                "the number of holes must be greater than zero",
            ));
        }

        // Every variable index must be representable as a positive literal.
        let total = holes
            .checked_add(1)
            .and_then(|pigeons| pigeons.checked_mul(holes))
            .filter(|&total| i64::try_from(total).is_ok());
        if total.is_none() {
            return Err(GeneratorError::invalid_argument(format!(
                "{} holes need more variables than a DIMACS literal can hold",
                holes
            )));
        }

        Ok(Self { holes })
    }

    pub fn holes(&self) -> u64 {
        self.holes
    }

    pub fn pigeons(&self) -> u64 {
        self.holes + 1
    }

    /// Variable for pigeon `pigeon` occupying hole `hole`, both 1-based
    pub fn placement(&self, pigeon: u64, hole: u64) -> i64 {
        debug_assert!((1..=self.pigeons()).contains(&pigeon));
        debug_assert!((1..=self.holes).contains(&hole));
        (self.holes * (pigeon - 1) + hole) as i64
    }

    /// Total number of variables, `holes * (holes + 1)`
    pub fn variable_count(&self) -> u64 {
        self.holes * self.pigeons()
    }
}
