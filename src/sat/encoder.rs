//! DIMACS encoder for pigeonhole instances

use super::{Clause, ConstraintGenerator};
use crate::error::GeneratorError;
use crate::utils::HeaderFormatter;
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::{Duration, Instant};

/// Streams a pigeonhole instance in DIMACS CNF format
#[derive(Debug, Clone, Copy)]
pub struct PigeonholeEncoder {
    constraint_generator: ConstraintGenerator,
    comments: bool,
}

impl PigeonholeEncoder {
    /// Create an encoder for `holes` holes and `holes + 1` pigeons
    pub fn new(holes: u64) -> Result<Self, GeneratorError> {
        Ok(Self {
            constraint_generator: ConstraintGenerator::new(holes)?,
            comments: true,
        })
    }

    /// Enable or disable the comment block in front of the problem line
    pub fn with_comments(mut self, comments: bool) -> Self {
        self.comments = comments;
        self
    }

    pub fn holes(&self) -> u64 {
        self.constraint_generator.variables().holes()
    }

    pub fn variable_count(&self) -> u64 {
        self.constraint_generator.variables().variable_count()
    }

    pub fn clause_count(&self) -> u64 {
        self.constraint_generator.clause_count()
    }

    /// Header lines: the optional comment block followed by `p cnf V C`
    pub fn header_lines(&self) -> Vec<String> {
        let variables = self.variable_count();
        let clauses = self.clause_count();

        let mut lines = if self.comments {
            HeaderFormatter::comment_lines(self.holes(), variables, clauses)
        } else {
            Vec::new()
        };
        lines.push(HeaderFormatter::problem_line(variables, clauses));
        lines
    }

    /// Write the full instance to `writer` in a single pass
    pub fn encode<W: Write>(&self, writer: W) -> Result<EncodingStatistics, GeneratorError> {
        let start_time = Instant::now();
        let mut writer = BufWriter::new(writer);

        info!(
            "Encoding PHP({}, {}): {} variables, {} clauses",
            self.holes() + 1,
            self.holes(),
            self.variable_count(),
            self.clause_count()
        );

        for line in self.header_lines() {
            writeln!(writer, "{}", line)?;
        }

        let mut tally = ClauseTally::default();

        debug!("Writing at-most-one-pigeon-per-hole clauses");
        for clause in self.constraint_generator.at_most_one_pigeon_per_hole() {
            tally.record(&clause);
            writeln!(writer, "{}", clause)?;
        }

        debug!("Writing at-least-one-hole-per-pigeon clauses");
        for clause in self.constraint_generator.at_least_one_hole_per_pigeon() {
            tally.record(&clause);
            writeln!(writer, "{}", clause)?;
        }

        tally.verify(&self.constraint_generator)?;
        writer.flush()?;

        let statistics = EncodingStatistics {
            holes: self.holes(),
            pigeons: self.holes() + 1,
            total_variables: self.variable_count(),
            total_clauses: tally.clauses,
            positive_clauses: tally.positive,
            binary_negative_clauses: tally.binary_negative,
            total_literals: tally.literals,
            encode_time: start_time.elapsed(),
        };
        info!(
            "Wrote {} clauses in {:.3}s",
            statistics.total_clauses,
            statistics.encode_time.as_secs_f64()
        );

        Ok(statistics)
    }
}

#[derive(Debug, Default)]
struct ClauseTally {
    clauses: u64,
    positive: u64,
    binary_negative: u64,
    literals: u64,
}

impl ClauseTally {
    fn record(&mut self, clause: &Clause) {
        self.clauses += 1;
        self.literals += clause.len();
        if clause.is_positive() {
            self.positive += 1;
        } else if clause.len() == 2 && clause.negative_count() == 2 {
            self.binary_negative += 1;
        }
    }

    /// Compare what was written against the announced totals and family sizes
    fn verify(&self, generator: &ConstraintGenerator) -> Result<(), GeneratorError> {
        let family_sizes_match = self.positive == generator.at_least_one_count()
            && self.binary_negative == generator.at_most_one_count();

        if self.clauses != generator.clause_count() || !family_sizes_match {
            return Err(GeneratorError::ClauseCountMismatch {
                announced: generator.clause_count(),
                written: self.clauses,
            });
        }

        Ok(())
    }
}

/// Statistics about an emitted instance
#[derive(Debug, Clone)]
pub struct EncodingStatistics {
    pub holes: u64,
    pub pigeons: u64,
    pub total_variables: u64,
    pub total_clauses: u64,
    pub positive_clauses: u64,
    pub binary_negative_clauses: u64,
    pub total_literals: u64,
    pub encode_time: Duration,
}

impl std::fmt::Display for EncodingStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Pigeonhole Encoding Statistics:")?;
        writeln!(f, "  Pigeons: {}", self.pigeons)?;
        writeln!(f, "  Holes: {}", self.holes)?;
        writeln!(f, "  Total variables: {}", self.total_variables)?;
        writeln!(f, "  Total clauses: {}", self.total_clauses)?;
        writeln!(f, "    At least one hole: {}", self.positive_clauses)?;
        writeln!(f, "    At most one pigeon: {}", self.binary_negative_clauses)?;
        writeln!(f, "  Total literals: {}", self.total_literals)?;
        writeln!(f, "  Encode time: {:.3}s", self.encode_time.as_secs_f64())?;
        Ok(())
    }
}
