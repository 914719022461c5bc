//! main struct AssignStack
use {
    super::{AssignReason, Var},
    crate::types::*,
    std::{fmt, slice::Iter},
};

/// A record of assignments. It's called 'trail' in Glucose.
#[derive(Clone, Debug, Default)]
pub struct AssignStack {
    /// vars
    pub(super) var: Vec<Var>,
    /// record of assignments
    pub(super) trail: Vec<Lit>,
    /// the trail index at which each decision level began
    pub(super) trail_lim: Vec<usize>,
    /// the-number-of-assigned-and-propagated-vars
    pub(super) q_head: usize,
    /// the decider's cursor; everything below it is assigned
    pub(super) searched: VarId,

    //
    //## Statistics
    //
    /// the number of vars.
    pub num_vars: usize,
    /// the number of level-zero assigned vars.
    pub num_asserted_vars: usize,
    /// the number of decisions.
    pub num_decision: usize,
    /// the number of propagated trail literals.
    pub num_propagation: usize,
    /// the number of conflicts found by propagation.
    pub num_conflict: usize,
}

impl Instantiate for AssignStack {
    fn instantiate(_config: &Config, cnf: &CNFDescription) -> AssignStack {
        let nv = cnf.num_of_variables;
        AssignStack {
            var: Var::new_vars(nv),
            trail: Vec::with_capacity(nv),
            searched: 1,
            num_vars: nv,
            ..AssignStack::default()
        }
    }
}

/// API for reading the assignment and the trail.
pub trait AssignIF {
    /// return the `i`-th trail literal.
    fn stack(&self, i: usize) -> Lit;
    /// return the number of assigned vars.
    fn stack_len(&self) -> usize;
    /// return the trail index at which decision level `n + 1` began.
    fn len_upto(&self, n: DecisionLevel) -> usize;
    /// return an iterator over the trail.
    fn stack_iter(&self) -> Iter<'_, Lit>;
    /// return the current decision level.
    fn decision_level(&self) -> DecisionLevel;
    /// return `true` if there are unpropagated assignments.
    fn remains(&self) -> bool;
    /// return the assignments as a var-indexed vector.
    fn assign_ref(&self) -> Vec<Option<bool>>;
}

impl AssignIF for AssignStack {
    fn stack(&self, i: usize) -> Lit {
        self.trail[i]
    }
    fn stack_len(&self) -> usize {
        self.trail.len()
    }
    fn len_upto(&self, n: DecisionLevel) -> usize {
        self.trail_lim.get(n as usize).map_or(0, |n| *n)
    }
    fn stack_iter(&self) -> Iter<'_, Lit> {
        self.trail.iter()
    }
    fn decision_level(&self) -> DecisionLevel {
        self.trail_lim.len() as DecisionLevel
    }
    fn remains(&self) -> bool {
        self.q_head < self.trail.len()
    }
    fn assign_ref(&self) -> Vec<Option<bool>> {
        self.var.iter().map(|v| v.assign).collect::<Vec<_>>()
    }
}

/// Var manipulation.
pub trait VarManipulateIF {
    /// return *the value* of a literal.
    fn assigned(&self, l: Lit) -> Option<bool>;
    /// return the assignment of a var.
    fn assign(&self, vi: VarId) -> Option<bool>;
    /// return the assign level of a var.
    fn level(&self, vi: VarId) -> DecisionLevel;
    /// return the reason of assignment.
    fn reason(&self, vi: VarId) -> AssignReason;
    /// return the var.
    fn var(&self, vi: VarId) -> &Var;
    /// return the var, mutably.
    fn var_mut(&mut self, vi: VarId) -> &mut Var;
}

impl VarManipulateIF for AssignStack {
    #[inline]
    fn assigned(&self, l: Lit) -> Option<bool> {
        match self.var[l.vi()].assign {
            Some(x) if !bool::from(l) => Some(!x),
            x => x,
        }
    }
    #[inline]
    fn assign(&self, vi: VarId) -> Option<bool> {
        self.var[vi].assign
    }
    #[inline]
    fn level(&self, vi: VarId) -> DecisionLevel {
        self.var[vi].level
    }
    #[inline]
    fn reason(&self, vi: VarId) -> AssignReason {
        self.var[vi].reason
    }
    #[inline]
    fn var(&self, vi: VarId) -> &Var {
        &self.var[vi]
    }
    #[inline]
    fn var_mut(&mut self, vi: VarId) -> &mut Var {
        &mut self.var[vi]
    }
}

impl AssignStack {
    /// the common tail of every assignment path: make `l` true, record
    /// the current decision level and the reason, and push the trail.
    pub(super) fn assign_core(&mut self, l: Lit, reason: AssignReason) {
        let vi = l.vi();
        debug_assert!(0 < vi && vi <= self.num_vars);
        debug_assert!(self.var[vi].assign.is_none(), "double assignment of {l}");
        let lvl = self.decision_level();
        let v = &mut self.var[vi];
        v.assign = Some(bool::from(l));
        v.level = lvl;
        v.reason = reason;
        self.trail.push(l);
        if lvl == 0 {
            self.num_asserted_vars += 1;
        }
    }
}

impl fmt::Display for AssignStack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "ASG:: trail({}):{:?}, level: {}, asserted: {}",
            self.trail.len(),
            i32s(&self.trail),
            self.decision_level(),
            self.num_asserted_vars,
        )
    }
}
