//! Solver builder
use {
    super::{SatSolverIF, Solver, SolverResult},
    crate::{
        assign::{AssignIF, AssignStack, PropagateIF, VarManipulateIF},
        cdb::{ClauseDB, ClauseDBIF},
        cnf::{self, Cnf},
        state::State,
        types::*,
    },
    std::{io, path::Path},
};

impl Instantiate for Solver {
    /// ```
    /// use sprat::{config::Config, solver::Solver, types::*};
    /// let s = Solver::instantiate(&Config::default(), &CNFDescription::default());
    /// ```
    fn instantiate(config: &Config, cnf: &CNFDescription) -> Solver {
        Solver {
            asg: AssignStack::instantiate(config, cnf),
            cdb: ClauseDB::instantiate(config, cnf),
            state: State::instantiate(config, cnf),
        }
    }
}

impl TryFrom<&Path> for Solver {
    type Error = SolverError;
    /// return a new solver built for a CNF file.
    ///
    /// # Example
    /// ```
    /// use std::path::Path;
    /// use sprat::solver::Solver;
    ///
    /// let mut s = Solver::try_from(Path::new("tests/cnfs/implication-chain.cnf"))
    ///     .expect("fail to load");
    /// ```
    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let cnf = cnf::load(path)?;
        let config = Config::from(path);
        Ok(Solver::instantiate(&config, &cnf.description).inject(cnf))
    }
}

impl From<Vec<Vec<i32>>> for Solver {
    /// make a solver from a vec representation of a CNF.
    fn from(vec: Vec<Vec<i32>>) -> Self {
        let cnf = CNFDescription::from(vec.as_slice());
        let mut solver = Solver::instantiate(&Config::default(), &cnf);
        for c in vec.iter() {
            solver.add_clause(c);
        }
        solver
    }
}

impl Solver {
    /// make a solver from a config: reads the configured file, or stdin
    /// when no file is given.
    pub fn solver_build(config: &Config) -> Result<Solver, SolverError> {
        let cnf = match &config.cnf_file {
            Some(path) => cnf::load(path)?,
            None => cnf::parse(io::stdin().lock(), "<stdin>")?,
        };
        Ok(Solver::instantiate(config, &cnf.description).inject(cnf))
    }
    /// load the parsed clauses. An empty clause, or a unit falsified at
    /// the root level, marks the formula unsatisfiable on the spot.
    pub fn inject(mut self, cnf: Cnf) -> Solver {
        for c in cnf.clauses.iter() {
            self.add_clause(c);
        }
        self
    }
}

impl SatSolverIF for Solver {
    fn build(config: &Config) -> Result<Solver, SolverError> {
        Solver::solver_build(config)
    }
    fn solve(&mut self) -> SolverResult {
        <Solver as super::search::SatSolverSearchIF>::solve(self)
    }
    // Clauses are normalized on the way in: sorted, deduplicated,
    // tautologies and root-satisfied clauses dropped, root-falsified
    // literals removed. What remains goes through the size-directed
    // dispatch of the clause store.
    fn add_clause(&mut self, clause: &[i32]) {
        let Solver {
            ref mut asg,
            ref mut cdb,
            ref mut state,
        } = self;
        debug_assert_eq!(asg.decision_level(), 0);
        let mut lits = clause.iter().map(Lit::from).collect::<Vec<Lit>>();
        lits.sort_unstable();
        let mut j = 0;
        let mut last: Option<Lit> = None;
        for i in 0..lits.len() {
            let li = lits[i];
            if last == Some(li) {
                continue; // duplicated literal
            }
            if last == Some(!li) {
                return; // tautology; sorting made the pair adjacent
            }
            match asg.assigned(li) {
                Some(true) => return, // already satisfied at the root level
                Some(false) => continue, // falsified at the root level
                None => {
                    lits[j] = li;
                    j += 1;
                    last = Some(li);
                }
            }
        }
        lits.truncate(j);
        match lits.len() {
            0 => {
                state.ok = false; // an empty clause renders the formula unsatisfiable
            }
            1 => {
                if asg.assign_at_root_level(lits[0]).is_err() {
                    state.ok = false;
                }
            }
            _ => {
                cdb.new_clause(&mut lits, false);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cdb::ClauseIF;

    #[test]
    fn test_add_clause_normalization() {
        let mut s = Solver::instantiate(
            &Config::default(),
            &CNFDescription {
                num_of_variables: 3,
                ..CNFDescription::default()
            },
        );
        s.add_clause(&[1, -1, 2]); // tautology, dropped
        assert_eq!(s.cdb.num_clause, 0);
        s.add_clause(&[2, 2, 3]); // duplicate literal collapses
        assert_eq!(s.cdb.num_clause, 1);
        assert_eq!(s.cdb.iter().next().map(|c| c.len()), Some(2));
    }

    #[test]
    fn test_add_clause_root_simplification() {
        let mut s = Solver::instantiate(
            &Config::default(),
            &CNFDescription {
                num_of_variables: 3,
                ..CNFDescription::default()
            },
        );
        s.add_clause(&[1]); // unit, asserted
        assert_eq!(s.asg.assign(1), Some(true));
        assert_eq!(s.asg.num_asserted_vars, 1);
        s.add_clause(&[1, 2]); // satisfied at root, dropped
        assert_eq!(s.cdb.num_clause, 0);
        s.add_clause(&[-1, 2, 3]); // -1 is falsified, stored as a 2-clause
        assert_eq!(s.cdb.num_clause, 1);
        s.add_clause(&[-1]); // conflicts with the asserted unit
        assert!(!s.state.ok);
    }

    #[test]
    fn test_empty_clause_marks_unsat() {
        let mut s = Solver::from(vec![Vec::<i32>::new()]);
        assert!(!s.state.ok);
        assert_eq!(s.solve(), Ok(super::super::Certificate::UNSAT));
        assert_eq!(s.asg.num_decision, 0);
    }
}
