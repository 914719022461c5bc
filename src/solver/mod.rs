//! Module `solver` provides the top-level API as a SAT solver.
mod build;
mod conflict;
mod search;
mod validate;

pub use self::validate::ValidateIF;

use crate::{assign::AssignStack, cdb::ClauseDB, state::State, types::*};

/// Normal results returned by Solver.
#[derive(Debug, Eq, PartialEq)]
pub enum Certificate {
    /// the formula is satisfiable; the vec is a model, a signed integer
    /// for every variable from 1 up.
    SAT(Vec<i32>),
    /// the formula is unsatisfiable.
    UNSAT,
}

/// The return type of `Solver::solve`.
/// This captures the following three cases:
/// * `Ok(Certificate::SAT)` -- solved with a satisfiable assignment,
/// * `Ok(Certificate::UNSAT)` -- proved unsatisfiability, and
/// * `Err(SolverError::ConflictLimit)` -- gave up by budget exhaustion.
pub type SolverResult = Result<Certificate, SolverError>;

/// The SAT solver object consisting of 3 sub modules.
/// ```
/// use sprat::{solver::*, types::*};
///
/// let mut s = Solver::from(vec![vec![1, 2], vec![-1, 2], vec![1, -2]]);
/// assert_eq!(s.solve(), Ok(Certificate::SAT(vec![1, 2])));
/// ```
#[derive(Debug, Default)]
pub struct Solver {
    /// assignment management
    pub asg: AssignStack,
    /// clause container
    pub cdb: ClauseDB,
    /// misc data holder
    pub state: State,
}

/// API for SAT solver like `build`, `solve` and so on.
pub trait SatSolverIF {
    /// add a clause, given as a slice of signed integers, to the solver.
    fn add_clause(&mut self, clause: &[i32]);
    /// make a solver and load a CNF into it.
    ///
    /// # Errors
    ///
    /// `SolverError::IOError` or `SolverError::ParseFailure` by failing
    /// to load a CNF file.
    fn build(config: &Config) -> Result<Solver, SolverError>;
    /// search an assignment.
    ///
    /// # Errors
    ///
    /// `SolverError::ConflictLimit` when the conflict budget runs out.
    fn solve(&mut self) -> SolverResult;
}
