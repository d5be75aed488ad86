//! Clause generation for the pigeonhole encoding

use super::PlacementVariables;
use crate::error::GeneratorError;
use itertools::{Either, Itertools};
use std::fmt;

/// A pigeonhole clause (disjunction of literals).
///
/// Neither family needs a literal buffer: binary clauses carry their two
/// literals and a pigeon's placement variables are contiguous, so the
/// positive clause is the range `first..=last`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clause {
    /// Two negated placements that must not both hold
    Binary(i64, i64),
    /// Positive literals `first, first + 1, ..., last`
    Range { first: i64, last: i64 },
}

impl Clause {
    /// Create a binary clause (two literals)
    pub fn binary(lit1: i64, lit2: i64) -> Self {
        Clause::Binary(lit1, lit2)
    }

    /// Create a clause of the consecutive positive literals `first..=last`
    pub fn range(first: i64, last: i64) -> Self {
        Clause::Range { first, last }
    }

    pub fn literals(&self) -> impl Iterator<Item = i64> {
        match *self {
            Clause::Binary(lit1, lit2) => Either::Left([lit1, lit2].into_iter()),
            Clause::Range { first, last } => Either::Right(first..=last),
        }
    }

    pub(crate) fn len(&self) -> u64 {
        match *self {
            Clause::Binary(..) => 2,
            Clause::Range { first, last } => (last - first + 1).max(0) as u64,
        }
    }

    /// True if no literal in the clause is negated
    pub fn is_positive(&self) -> bool {
        self.literals().all(|lit| lit > 0)
    }

    pub fn negative_count(&self) -> usize {
        self.literals().filter(|&lit| lit < 0).count()
    }
}

/// DIMACS clause line without the trailing newline, e.g. `-1 -4 0`
impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for literal in self.literals() {
            write!(f, "{} ", literal)?;
        }
        write!(f, "0")
    }
}

/// Generates the two clause families of the pigeonhole principle.
///
/// Clauses are produced lazily and hold no heap data, so streaming an
/// instance needs constant memory beyond the loop state.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintGenerator {
    variables: PlacementVariables,
    clause_count: u64,
}

impl ConstraintGenerator {
    /// Create a generator for `holes` holes, rejecting sizes whose clause
    /// count would not fit in a `u64`
    pub fn new(holes: u64) -> Result<Self, GeneratorError> {
        let variables = PlacementVariables::new(holes)?;

        let clause_count = Self::hole_clause_count(holes)
            .and_then(|at_most| at_most.checked_add(variables.pigeons()))
            .ok_or_else(|| {
                GeneratorError::invalid_argument(format!(
                    "{} holes need more clauses than can be counted",
                    holes
                ))
            })?;

        Ok(Self {
            variables,
            clause_count,
        })
    }

    /// `holes * C(holes + 1, 2)`, or `None` on overflow
    fn hole_clause_count(holes: u64) -> Option<u64> {
        let pairs = holes.checked_mul(holes.checked_add(1)?)? / 2;
        holes.checked_mul(pairs)
    }

    pub fn variables(&self) -> &PlacementVariables {
        &self.variables
    }

    /// Total number of clauses, `(n + 1) + n * (n * (n + 1) / 2)`
    pub fn clause_count(&self) -> u64 {
        self.clause_count
    }

    /// Number of binary clauses in the at-most-one-pigeon-per-hole family
    pub fn at_most_one_count(&self) -> u64 {
        self.clause_count - self.at_least_one_count()
    }

    /// Number of clauses in the at-least-one-hole-per-pigeon family
    pub fn at_least_one_count(&self) -> u64 {
        self.variables.pigeons()
    }

    /// For every hole, one binary clause per pair of pigeons forbidding
    /// both from sitting in it. Ordered by hole, then first pigeon, then
    /// second pigeon.
    pub fn at_most_one_pigeon_per_hole(&self) -> impl Iterator<Item = Clause> {
        let vars = self.variables;

        (1..=vars.holes()).flat_map(move |hole| {
            (1..=vars.pigeons())
                .tuple_combinations::<(u64, u64)>()
                .map(move |(first, second)| {
                    Clause::binary(
                        -vars.placement(first, hole),
                        -vars.placement(second, hole),
                    )
                })
        })
    }

    /// For every pigeon, one clause listing all holes it may occupy
    pub fn at_least_one_hole_per_pigeon(&self) -> impl Iterator<Item = Clause> {
        let vars = self.variables;

        (1..=vars.pigeons()).map(move |pigeon| {
            Clause::range(vars.placement(pigeon, 1), vars.placement(pigeon, vars.holes()))
        })
    }
}
