//! Decision var selection
use {
    super::{AssignIF, AssignStack},
    crate::types::*,
};

/// API for decision var selection.
///
/// The heuristic is a deterministic fixed-order cursor: the smallest
/// unassigned variable index, positive phase. `cancel_until` lowers the
/// cursor whenever it unassigns a variable below it, so the next call
/// finds the gap again.
pub trait VarSelectIF {
    /// select a new decision literal.
    fn select_decision_literal(&mut self) -> Lit;
}

impl VarSelectIF for AssignStack {
    fn select_decision_literal(&mut self) -> Lit {
        debug_assert!(self.stack_len() < self.num_vars);
        while self.var[self.searched].assign.is_some() {
            debug_assert!(self.searched <= self.num_vars);
            self.searched += 1;
        }
        Lit::from((self.searched, true))
    }
}
