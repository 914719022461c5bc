//! Module `types` provides the basic building blocks shared by all the
//! other modules: literals, clause ids, flags, errors, and the problem
//! description used to size every sub-module.

/// methods on clause id
pub mod cid;
/// methods on literals
pub mod lit;

pub use self::{cid::*, lit::*};

pub use crate::{assign::AssignReason, config::Config};

use std::fmt;

/// 'Variable' identifier, or variable index, starting with one.
pub type VarId = usize;

/// Decision level representation.
pub type DecisionLevel = u32;

/// API for object instantiation based on `Config` and `CNFDescription`.
/// This is implemented by all the solver sub-modules.
pub trait Instantiate {
    /// make and return an object from `Config` and `CNFDescription`.
    fn instantiate(config: &Config, cnf: &CNFDescription) -> Self;
}

/// API for flag manipulation on clauses.
pub trait FlagIF {
    type FlagType;
    /// return true if the flag is on.
    fn is(&self, flag: Self::FlagType) -> bool;
    /// set the flag.
    fn set(&mut self, f: Self::FlagType, b: bool);
    /// toggle the flag on.
    fn turn_on(&mut self, flag: Self::FlagType);
    /// toggle the flag off.
    fn turn_off(&mut self, flag: Self::FlagType);
}

bitflags::bitflags! {
    /// Misc flags used by [`Clause`](`crate::cdb::Clause`).
    #[derive(Clone, Debug, Default, Eq, PartialEq)]
    pub struct FlagClause: u8 {
        /// a clause was generated by conflict analysis.
        const LEARNT = 0b0000_0001;
    }
}

/// Internal errors.
#[derive(Debug, Eq, PartialEq)]
pub enum SolverError {
    /// the conflict budget is exhausted; the result is UNKNOWN.
    ConflictLimit,
    /// exceptions caused by file operations.
    IOError,
    /// a malformed DIMACS input, with the parser's message.
    ParseFailure(String),
    /// a contradiction at decision level zero.
    RootLevelConflict(Lit),
    /// a generated assignment doesn't satisfy the formula.
    SolverBug,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolverError::ParseFailure(mes) => write!(f, "ParseFailure({mes})"),
            e => write!(f, "{e:?}"),
        }
    }
}

/// A return type used by solver functions.
pub type MaybeInconsistent = Result<(), SolverError>;

/// Data storage about a problem.
#[derive(Clone, Debug, PartialEq)]
pub struct CNFDescription {
    pub num_of_variables: usize,
    pub num_of_clauses: usize,
    pub pathname: String,
}

impl Default for CNFDescription {
    fn default() -> CNFDescription {
        CNFDescription {
            num_of_variables: 0,
            num_of_clauses: 0,
            pathname: "--".to_string(),
        }
    }
}

impl fmt::Display for CNFDescription {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let CNFDescription {
            num_of_variables: nv,
            num_of_clauses: nc,
            pathname: path,
        } = &self;
        write!(f, "CNF({nv}, {nc}, {path})")
    }
}

impl<V: AsRef<[i32]>> From<&[V]> for CNFDescription {
    fn from(vec: &[V]) -> Self {
        let num_of_variables = vec
            .iter()
            .map(|clause| clause.as_ref().iter().map(|l| l.abs()).max().unwrap_or(0))
            .max()
            .unwrap_or(0) as usize;
        CNFDescription {
            num_of_variables,
            num_of_clauses: vec.len(),
            pathname: "--".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cnf_description_from_vec() {
        let v: Vec<Vec<i32>> = vec![vec![1, -3], vec![8, 2], vec![-5]];
        let cnf = CNFDescription::from(v.as_slice());
        assert_eq!(cnf.num_of_variables, 8);
        assert_eq!(cnf.num_of_clauses, 3);
    }
}
