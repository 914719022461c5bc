//! Conflict-Driven Clause Learning search engine
use {
    super::{conflict::handle_conflict, Certificate, Solver, SolverResult},
    crate::{
        assign::{AssignIF, AssignStack, PropagateIF, VarManipulateIF, VarSelectIF},
        cdb::{ClauseDB, ClauseDBIF},
        state::State,
        types::*,
    },
};

/// API for the search side of the SAT solver.
pub trait SatSolverSearchIF {
    /// search an assignment.
    ///
    /// # Errors
    ///
    /// `SolverError::ConflictLimit` when the conflict budget runs out;
    /// solver state stays consistent so statistics can still be read.
    fn solve(&mut self) -> SolverResult;
}

impl SatSolverSearchIF for Solver {
    /// # Examples
    ///
    /// ```
    /// use sprat::{config::Config, solver::*};
    ///
    /// let config = Config::from("tests/cnfs/implication-chain.cnf");
    /// if let Ok(mut s) = Solver::build(&config) {
    ///     let res = s.solve();
    ///     assert!(res.is_ok());
    ///     assert_ne!(res.unwrap(), Certificate::UNSAT);
    /// }
    /// ```
    fn solve(&mut self) -> SolverResult {
        let Solver {
            ref mut asg,
            ref mut cdb,
            ref mut state,
        } = self;
        if !state.ok {
            // an empty clause was found while loading
            return Ok(Certificate::UNSAT);
        }
        match search(asg, cdb, state) {
            Ok(true) => {
                if cdb.validate(&asg.assign_ref()).is_some() {
                    return Err(SolverError::SolverBug);
                }
                let model = (1..=asg.num_vars)
                    .map(|vi| match asg.assign(vi) {
                        Some(false) => -(vi as i32),
                        // unassigned variables take their default positive value
                        _ => vi as i32,
                    })
                    .collect::<Vec<i32>>();
                Ok(Certificate::SAT(model))
            }
            Ok(false) => Ok(Certificate::UNSAT),
            Err(SolverError::RootLevelConflict(_)) => Ok(Certificate::UNSAT),
            Err(e) => Err(e),
        }
    }
}

/// main loop; returns `Ok(true)` for SAT, `Ok(false)` for UNSAT.
fn search(asg: &mut AssignStack, cdb: &mut ClauseDB, state: &mut State) -> Result<bool, SolverError> {
    loop {
        if let Some(cc) = asg.propagate(cdb) {
            if asg.decision_level() == 0 {
                return Ok(false);
            }
            handle_conflict(asg, cdb, state, cc)?;
        } else if asg.stack_len() == asg.num_vars {
            return Ok(true);
        } else if state.config.conflict_limit.map_or(false, |limit| limit <= asg.num_conflict) {
            return Err(SolverError::ConflictLimit);
        } else {
            let lit = asg.select_decision_literal();
            asg.assign_by_decision(lit);
            if asg.num_decision.is_power_of_two() {
                state.report(asg, 'd');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trivial_sat() {
        let mut s = Solver::from(vec![vec![1]]);
        assert_eq!(s.solve(), Ok(Certificate::SAT(vec![1])));
    }
    #[test]
    fn test_trivial_unsat() {
        let mut s = Solver::from(vec![vec![1], vec![-1]]);
        assert_eq!(s.solve(), Ok(Certificate::UNSAT));
        assert_eq!(s.asg.num_decision, 0);
    }
    #[test]
    fn test_empty_formula_is_sat() {
        let mut s = Solver::from(Vec::<Vec<i32>>::new());
        assert_eq!(s.solve(), Ok(Certificate::SAT(vec![])));
    }
    #[test]
    fn test_budget_exhaustion() {
        let mut s = Solver::from(vec![vec![1, 2], vec![-1, 2], vec![1, -2], vec![-1, -2]]);
        s.state.config.conflict_limit = Some(0);
        assert_eq!(s.solve(), Err(SolverError::ConflictLimit));
        // the state is still consistent for reporting
        assert_eq!(s.asg.num_conflict, 0);
    }
}
