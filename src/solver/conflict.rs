//! Conflict analysis
use crate::{
    assign::{AssignIF, AssignReason, AssignStack, PropagateIF, VarManipulateIF},
    cdb::{ClauseDB, ClauseDBIF, ClauseIF},
    state::State,
    types::*,
};

/// resolve a conflict: learn a clause by first-UIP analysis, backjump,
/// and assert the asserting literal.
pub fn handle_conflict(
    asg: &mut AssignStack,
    cdb: &mut ClauseDB,
    state: &mut State,
    ci: ClauseId,
) -> MaybeInconsistent {
    let dl = asg.decision_level();
    debug_assert!(0 < dl, "analysis at the root level");
    let bl = conflict_analyze(asg, cdb, state, ci);
    debug_assert!(bl < dl);
    if 1 < dl - bl {
        state.num_backjump += 1;
    }
    asg.cancel_until(bl);
    let l0 = state.new_learnt[0];
    debug_assert_eq!(asg.assigned(l0), None);
    if state.new_learnt.len() == 1 {
        //
        //## A NEW ASSERTION by UNIT LEARNT CLAUSE GENERATION
        //
        debug_assert_eq!(bl, 0);
        asg.assign_at_root_level(l0)?;
    } else {
        // the learnt clause becomes unit right after the backjump; its
        // asserting literal sits at the first watch position and the
        // second-highest level literal at the other
        debug_assert_eq!(
            state.new_learnt.iter().skip(1).map(|l| asg.level(l.vi())).max(),
            Some(bl)
        );
        let cid = cdb.new_clause(&mut state.new_learnt, true);
        asg.assign_by_implication(l0, AssignReason::Implication(cid));
    }
    Ok(())
}

///
/// ## Conflict Analysis
///
/// Derive the first-UIP clause from a conflicting clause, walking the
/// implication graph along the trail. A variable is "seen" by this
/// conflict iff its stamp equals the current conflict ordinal, which
/// provides a fresh stamp domain per conflict without any clearing.
fn conflict_analyze(
    asg: &mut AssignStack,
    cdb: &mut ClauseDB,
    state: &mut State,
    ci: ClauseId,
) -> DecisionLevel {
    let learnt = &mut state.new_learnt;
    learnt.clear();
    let dl = asg.decision_level();
    let token = asg.num_conflict;
    let mut path_cnt = 0;
    #[cfg(feature = "logging")]
    println!("c DEBUG {} analyzing conflict {} at {}", dl, ci, token);
    for q in cdb[ci].iter() {
        analyze_literal(asg, learnt, &mut path_cnt, dl, token, *q);
    }
    debug_assert!(0 < path_cnt, "a conflict without current level literals");
    // Resolve stamped trail literals backward until a single path to the
    // conflict remains on the current level.
    let mut ti = asg.stack_len() - 1;
    while 1 < path_cnt {
        let vi = asg.stack(ti).vi();
        if asg.var(vi).stamp == token {
            debug_assert_eq!(asg.level(vi), dl);
            if let AssignReason::Implication(rid) = asg.reason(vi) {
                for q in cdb[rid].iter() {
                    analyze_literal(asg, learnt, &mut path_cnt, dl, token, *q);
                }
            }
            path_cnt -= 1;
        }
        debug_assert!(0 < ti, "conflict analysis reached the trail bottom");
        ti -= 1;
    }
    // the next stamped literal below is the first unique implication point
    while asg.var(asg.stack(ti).vi()).stamp != token {
        debug_assert!(0 < ti, "no UIP on the current level");
        ti -= 1;
    }
    let p = asg.stack(ti);
    debug_assert_eq!(asg.level(p.vi()), dl);
    #[cfg(feature = "logging")]
    println!("c DEBUG {} first UIP is {}", dl, p);
    minimize_learnt(asg, cdb, learnt, token);
    learnt.insert(0, !p);
    // find the backtrack level from the remaining literals and move its
    // literal next to the asserting one
    let mut level_to_return = 0;
    if 1 < learnt.len() {
        let mut max_i = 1;
        level_to_return = asg.level(learnt[max_i].vi());
        for (i, l) in learnt.iter().enumerate().skip(2) {
            let lv = asg.level(l.vi());
            if level_to_return < lv {
                level_to_return = lv;
                max_i = i;
            }
        }
        learnt.swap(1, max_i);
    }
    level_to_return
}

/// stamp one literal of a conflicting or antecedent clause: literals on
/// the current level extend the path count, the others join the learnt
/// candidate. Root level and already seen variables are skipped.
fn analyze_literal(
    asg: &mut AssignStack,
    learnt: &mut Vec<Lit>,
    path_cnt: &mut usize,
    dl: DecisionLevel,
    token: usize,
    q: Lit,
) {
    let vi = q.vi();
    if asg.var(vi).stamp == token {
        return;
    }
    let lvl = asg.level(vi);
    if lvl == 0 {
        return;
    }
    debug_assert!(lvl <= dl);
    debug_assert_eq!(asg.assigned(q), Some(false));
    asg.var_mut(vi).stamp = token;
    if lvl == dl {
        *path_cnt += 1;
    } else {
        learnt.push(q);
    }
}

/// simple self-subsumption minimization: a candidate literal is redundant
/// when every other literal of its antecedent is assigned at the root
/// level or stamped by this conflict. Stamps survive the removal, so
/// every check reads the original candidate set; decisions are never
/// removable.
fn minimize_learnt(asg: &AssignStack, cdb: &ClauseDB, learnt: &mut Vec<Lit>, token: usize) {
    learnt.retain(|l| {
        let vi = l.vi();
        match asg.reason(vi) {
            AssignReason::Implication(rid) => !cdb[rid]
                .iter()
                .all(|q| q.vi() == vi || asg.level(q.vi()) == 0 || asg.var(q.vi()).stamp == token),
            _ => true,
        }
    });
}

#[cfg(test)]
mod tests {
    use crate::{
        assign::{AssignIF, AssignReason, PropagateIF, VarManipulateIF},
        solver::{Certificate, SatSolverIF, Solver},
    };

    // 1 and 2 force a conflict between 3-clauses after two decisions;
    // the learnt clause asserts at a lower level.
    #[test]
    fn test_learnt_clause_is_asserting() {
        let mut s = Solver::from(vec![
            vec![-1, -2, 3],
            vec![-1, -2, -3],
            vec![1, 2],
            vec![-1, 2],
            vec![1, -2],
        ]);
        assert_eq!(s.solve(), Ok(Certificate::UNSAT));
        assert!(0 < s.asg.num_conflict);
    }

    #[test]
    fn test_uip_assigned_by_learnt_clause() {
        // deciding 1 then 2 runs into (-1 -2 3)(-1 -2 -3); the first UIP
        // is 2, so the learnt clause (-1 -2) re-assigns -2 at level 1
        let mut s = Solver::from(vec![vec![-1, -2, 3], vec![-1, -2, -3], vec![1, 3]]);
        let cc = loop {
            if let Some(cc) = s.asg.propagate(&mut s.cdb) {
                break cc;
            }
            let lit = crate::assign::VarSelectIF::select_decision_literal(&mut s.asg);
            s.asg.assign_by_decision(lit);
        };
        assert_eq!(s.asg.decision_level(), 2);
        assert_eq!(s.asg.num_conflict, 1);
        assert!(super::handle_conflict(&mut s.asg, &mut s.cdb, &mut s.state, cc).is_ok());
        assert_eq!(s.asg.decision_level(), 1);
        assert_eq!(s.asg.assigned(crate::types::Lit::from(-2i32)), Some(true));
        assert!(matches!(s.asg.reason(2), AssignReason::Implication(_)));
        assert_eq!(s.cdb.num_learnt, 1);
    }
}
