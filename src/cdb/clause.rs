use {
    crate::types::*,
    std::{
        fmt,
        ops::{Index, IndexMut},
        slice::Iter,
    },
};

/// A representation of 'clause'.
///
/// The first two literals are the watched ones; moving a watch swaps
/// literals within the clause, so the stored order is not the input order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Clause {
    /// the literals in a clause.
    pub(super) lits: Vec<Lit>,
    /// flags
    pub(super) flags: FlagClause,
}

/// API for Clause, providing literal accessors.
pub trait ClauseIF {
    /// return the 1st watch.
    fn lit0(&self) -> Lit;
    /// return the 2nd watch.
    fn lit1(&self) -> Lit;
    /// return an iterator over its literals.
    fn iter(&self) -> Iter<'_, Lit>;
    /// return the number of literals.
    fn len(&self) -> usize;
    /// return true if it contains no literals.
    fn is_empty(&self) -> bool;
    /// return `true` if the clause was learned by conflict analysis.
    fn is_learnt(&self) -> bool;
    /// return `true` if some literal is true under a var-indexed model.
    fn is_satisfied_under(&self, model: &[Option<bool>]) -> bool;
}

impl ClauseIF for Clause {
    #[inline]
    fn lit0(&self) -> Lit {
        self.lits[0]
    }
    #[inline]
    fn lit1(&self) -> Lit {
        self.lits[1]
    }
    fn iter(&self) -> Iter<'_, Lit> {
        self.lits.iter()
    }
    fn len(&self) -> usize {
        self.lits.len()
    }
    fn is_empty(&self) -> bool {
        self.lits.is_empty()
    }
    fn is_learnt(&self) -> bool {
        self.is(FlagClause::LEARNT)
    }
    fn is_satisfied_under(&self, model: &[Option<bool>]) -> bool {
        self.lits
            .iter()
            .any(|l| model[l.vi()] == Some(bool::from(*l)))
    }
}

impl Index<usize> for Clause {
    type Output = Lit;
    #[inline]
    fn index(&self, i: usize) -> &Lit {
        &self.lits[i]
    }
}

impl IndexMut<usize> for Clause {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Lit {
        &mut self.lits[i]
    }
}

impl<'a> IntoIterator for &'a Clause {
    type Item = &'a Lit;
    type IntoIter = Iter<'a, Lit>;
    fn into_iter(self) -> Self::IntoIter {
        self.lits.iter()
    }
}

impl From<&Clause> for Vec<i32> {
    fn from(c: &Clause) -> Vec<i32> {
        c.lits.iter().map(|l| i32::from(*l)).collect::<Vec<i32>>()
    }
}

impl FlagIF for Clause {
    type FlagType = FlagClause;
    #[inline]
    fn is(&self, flag: Self::FlagType) -> bool {
        self.flags.contains(flag)
    }
    #[inline]
    fn set(&mut self, f: Self::FlagType, b: bool) {
        self.flags.set(f, b);
    }
    #[inline]
    fn turn_on(&mut self, flag: Self::FlagType) {
        self.flags.insert(flag);
    }
    #[inline]
    fn turn_off(&mut self, flag: Self::FlagType) {
        self.flags.remove(flag);
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let st = |flag, mes| if self.is(flag) { mes } else { "" };
        write!(
            f,
            "{{{:?}{}}}",
            i32s(&self.lits),
            st(FlagClause::LEARNT, ", learnt"),
        )
    }
}
