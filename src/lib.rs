//! # sprat
//!
//! A conflict-driven clause-learning (CDCL) SAT solver:
//!
//! - unit propagation with two watched literals per clause,
//! - first-UIP conflict analysis with self-subsumption minimization,
//! - non-chronological backjumping and clause learning,
//! - a deterministic fixed-order decision heuristic,
//! - a strict DIMACS CNF front end with SAT-competition style output.
//!
//! # Examples
//!
//! ```
//! use sprat::{solver::*, types::*};
//!
//! let mut s = Solver::from(vec![vec![1, 2], vec![-1, 2], vec![1, -2]]);
//! if let Ok(Certificate::SAT(model)) = s.solve() {
//!     assert_eq!(model, vec![1, 2]);
//! } else {
//!     panic!("it should be satisfiable");
//! }
//! ```
/// assignment management, propagation and decision
pub mod assign;
/// clause database
pub mod cdb;
/// DIMACS CNF reader
pub mod cnf;
/// solver configuration and CLI
pub mod config;
/// struct Solver
pub mod solver;
/// progress report and statistics
pub mod state;
/// plumbing layer
pub mod types;

pub use crate::{
    config::Config,
    solver::{Certificate, SatSolverIF, Solver, SolverResult, ValidateIF},
    types::{CNFDescription, SolverError},
};
