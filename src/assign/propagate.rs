//! implement boolean constraint propagation and backjump
use {
    super::{AssignIF, AssignReason, AssignStack, VarManipulateIF},
    crate::{
        cdb::{ClauseDB, ClauseDBIF, ClauseIF},
        types::*,
    },
};

/// API for Boolean constraint propagation like
/// [`propagate`](`crate::assign::PropagateIF::propagate`),
/// [`assign_by_decision`](`crate::assign::PropagateIF::assign_by_decision`),
/// and [`cancel_until`](`crate::assign::PropagateIF::cancel_until`).
pub trait PropagateIF {
    /// add an assignment at root level.
    ///
    /// # Errors
    ///
    /// emit `SolverError::RootLevelConflict` if the negation is already
    /// asserted.
    fn assign_at_root_level(&mut self, l: Lit) -> MaybeInconsistent;
    /// unsafe enqueue (assign by implication); callers must assure
    /// the consistency after this assignment.
    fn assign_by_implication(&mut self, l: Lit, reason: AssignReason);
    /// unsafe assume (assign by decision); callers must assure
    /// the consistency after this assignment.
    fn assign_by_decision(&mut self, l: Lit);
    /// execute *backjump*.
    fn cancel_until(&mut self, lv: DecisionLevel);
    /// execute *boolean constraint propagation* or *unit propagation*.
    fn propagate(&mut self, cdb: &mut ClauseDB) -> Option<ClauseId>;
}

impl PropagateIF for AssignStack {
    fn assign_at_root_level(&mut self, l: Lit) -> MaybeInconsistent {
        debug_assert_eq!(self.decision_level(), 0);
        match self.assigned(l) {
            None => {
                self.assign_core(l, AssignReason::Decision(0));
                Ok(())
            }
            Some(true) => Ok(()),
            Some(false) => Err(SolverError::RootLevelConflict(l)),
        }
    }
    fn assign_by_implication(&mut self, l: Lit, reason: AssignReason) {
        debug_assert!(matches!(reason, AssignReason::Implication(_)));
        self.assign_core(l, reason);
    }
    fn assign_by_decision(&mut self, l: Lit) {
        debug_assert!(self.assigned(l).is_none());
        self.trail_lim.push(self.trail.len());
        self.num_decision += 1;
        // a stale stamp from a previous conflict must not look fresh
        self.var[l.vi()].stamp = 0;
        let dl = self.decision_level();
        self.assign_core(l, AssignReason::Decision(dl));
    }
    fn cancel_until(&mut self, lv: DecisionLevel) {
        if self.decision_level() <= lv {
            return;
        }
        let lim = self.trail_lim[lv as usize];
        for i in (lim..self.trail.len()).rev() {
            let l = self.trail[i];
            let vi = l.vi();
            debug_assert_eq!(self.var[vi].assign, Some(bool::from(l)));
            // level and reason are left behind as dead data
            self.var[vi].assign = None;
            if vi < self.searched {
                self.searched = vi;
            }
        }
        self.trail.truncate(lim);
        self.trail_lim.truncate(lv as usize);
        // everything below `lim` was propagated before the jumped-over
        // levels were opened
        self.q_head = lim;
    }
    /// UNIT PROPAGATION.
    ///
    /// Propagation of one trail literal runs to completion before the next
    /// is consumed; a conflict aborts the remainder of the queue. The
    /// watcher lists are iterated by index so that the swap-with-last
    /// removal in `transform_by_updating_watch` stays sound.
    fn propagate(&mut self, cdb: &mut ClauseDB) -> Option<ClauseId> {
        while let Some(&p) = self.trail.get(self.q_head) {
            self.q_head += 1;
            self.num_propagation += 1;
            #[cfg(feature = "logging")]
            println!("c DEBUG {} propagating {}", self.decision_level(), p);
            let false_lit = !p;
            let mut wi = 0;
            'next_clause: while wi < cdb.num_watches(false_lit) {
                let ci = cdb.watch(false_lit, wi);
                let other = {
                    let c = &cdb[ci];
                    debug_assert!(c.lit0() == false_lit || c.lit1() == false_lit);
                    if c.lit0() == false_lit {
                        c.lit1()
                    } else {
                        c.lit0()
                    }
                };
                let other_value = self.assigned(other);
                if other_value == Some(true) {
                    // the clause is satisfied; keep the watch
                    wi += 1;
                    continue 'next_clause;
                }
                //
                //## Search an un-falsified literal
                //
                let new_pos = {
                    let c = &cdb[ci];
                    (2..c.len()).find(|&k| self.assigned(c[k]) != Some(false))
                };
                if let Some(k) = new_pos {
                    #[cfg(feature = "logging")]
                    println!("c DEBUG {} new watch {} for {}", self.decision_level(), cdb[ci][k], ci);
                    cdb.transform_by_updating_watch(false_lit, wi, k);
                    // the entry at `wi` was replaced by the last one;
                    // don't advance
                    continue 'next_clause;
                }
                // no replacement: the clause is unit or conflicting on
                // `other`, and the watch on `false_lit` is retained.
                // Keep the witness at the first position.
                if cdb[ci].lit0() == false_lit {
                    cdb.swap_watch(ci);
                }
                if other_value == Some(false) {
                    self.num_conflict += 1;
                    #[cfg(feature = "logging")]
                    println!("c DEBUG {} conflicting {}", self.decision_level(), ci);
                    return Some(ci);
                }
                #[cfg(feature = "logging")]
                println!("c DEBUG {} forced {} by {}", self.decision_level(), other, ci);
                self.assign_by_implication(other, AssignReason::Implication(ci));
                wi += 1;
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(i: i32) -> Lit {
        Lit::from(i)
    }
    fn setup(nv: usize, clauses: &[Vec<i32>]) -> (AssignStack, ClauseDB) {
        let cnf = CNFDescription {
            num_of_variables: nv,
            num_of_clauses: clauses.len(),
            ..CNFDescription::default()
        };
        let config = Config::default();
        let asg = AssignStack::instantiate(&config, &cnf);
        let mut cdb = ClauseDB::instantiate(&config, &cnf);
        for c in clauses {
            let mut lits = c.iter().map(Lit::from).collect::<Vec<_>>();
            cdb.new_clause(&mut lits, false);
        }
        (asg, cdb)
    }

    #[test]
    fn test_propagate_unit_chain() {
        let (mut asg, mut cdb) = setup(4, &[vec![-1, 2], vec![-2, 3], vec![-3, 4]]);
        asg.assign_by_decision(lit(1));
        assert_eq!(asg.propagate(&mut cdb), None);
        assert_eq!(asg.stack_len(), 4);
        for i in 1..=4 {
            assert_eq!(asg.assigned(Lit::from(i as i32)), Some(true));
            assert_eq!(asg.level(i), 1);
        }
        assert!(matches!(asg.reason(4), AssignReason::Implication(_)));
    }

    #[test]
    fn test_propagate_conflict() {
        let (mut asg, mut cdb) = setup(2, &[vec![-1, 2], vec![-1, -2]]);
        asg.assign_by_decision(lit(1));
        let cc = asg.propagate(&mut cdb);
        assert!(cc.is_some());
        assert_eq!(asg.num_conflict, 1);
    }

    #[test]
    fn test_propagate_moves_watch() {
        let (mut asg, mut cdb) = setup(3, &[vec![1, 2, 3]]);
        asg.assign_by_decision(lit(-1));
        assert_eq!(asg.propagate(&mut cdb), None);
        // the falsified watch moved to variable 3
        assert_eq!(cdb.num_watches(lit(1)), 0);
        assert_eq!(cdb.num_watches(lit(3)), 1);
        asg.assign_by_decision(lit(-3));
        assert_eq!(asg.propagate(&mut cdb), None);
        // now the clause is unit on 2
        assert_eq!(asg.assigned(lit(2)), Some(true));
    }
}
