//! implement a model checker on the loaded formula
use {
    super::Solver,
    crate::{
        assign::{AssignIF, PropagateIF},
        cdb::ClauseDBIF,
        types::{Lit, MaybeInconsistent},
    },
};

/// API for SAT validation: load an assignment and check it against the
/// original clauses.
pub trait ValidateIF {
    /// load an assignment set into the solver.
    ///
    /// # Errors
    ///
    /// `SolverError::RootLevelConflict` if the set assigns some variable
    /// both ways.
    fn inject_assignment(&mut self, vec: &[i32]) -> MaybeInconsistent;
    /// return `None` if the loaded assignment is a model of the problem;
    /// otherwise return an unsatisfied clause as a `Vec<i32>`.
    fn validate(&self) -> Option<Vec<i32>>;
}

impl ValidateIF for Solver {
    /// inject an assignment set into the solver.
    ///
    /// # Example
    ///
    /// ```
    /// use sprat::{config::Config, solver::*, types::*};
    ///
    /// let cnf = CNFDescription {
    ///     num_of_variables: 4,
    ///     ..CNFDescription::default()
    /// };
    /// let mut s = Solver::instantiate(&Config::default(), &cnf);
    /// assert_eq!(s.inject_assignment(&[1i32, -2, 3]), Ok(()));
    /// ```
    fn inject_assignment(&mut self, vec: &[i32]) -> MaybeInconsistent {
        for i in vec {
            self.asg.assign_at_root_level(Lit::from(*i))?;
        }
        Ok(())
    }
    /// ```
    /// use sprat::{config::Config, solver::*, types::*};
    ///
    /// let cnf = CNFDescription {
    ///     num_of_variables: 2,
    ///     ..CNFDescription::default()
    /// };
    /// let mut s = Solver::instantiate(&Config::default(), &cnf);
    /// s.add_clause(&[1, 2]);
    /// s.inject_assignment(&[-1i32, 2]).expect("consistent");
    /// assert_eq!(s.validate(), None);
    /// ```
    fn validate(&self) -> Option<Vec<i32>> {
        self.cdb
            .validate(&self.asg.assign_ref())
            .map(|cid| Vec::<i32>::from(&self.cdb[cid]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, types::*};

    #[test]
    fn test_validate_rejects_non_model() {
        let cnf = CNFDescription {
            num_of_variables: 2,
            ..CNFDescription::default()
        };
        let mut s = Solver::instantiate(&Config::default(), &cnf);
        crate::solver::SatSolverIF::add_clause(&mut s, &[1, 2]);
        s.inject_assignment(&[-1, -2]).expect("consistent");
        assert_eq!(s.validate(), Some(vec![1, 2]));
    }
}
