use crate::rule::Case;
use crate::{Fof, Term};
use alloc::vec::Vec;
use core::fmt::{self, Display};
use hashbrown::HashSet;

/// Branch of a tableau, standing for the conjunction of its formulas.
///
/// Two theories are equal iff they contain equal formulas in the same order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Theory(Vec<Fof>);

impl Display for Theory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut iter = self.0.iter();
        if let Some(fm) = iter.next() {
            write!(f, "{}", fm)?;
            for fm in iter {
                write!(f, ", {}", fm)?;
            }
        }
        write!(f, "}}")
    }
}

impl From<Fof> for Theory {
    fn from(fm: Fof) -> Self {
        Self(Vec::from([fm]))
    }
}

impl Theory {
    /// Add a formula before all others.
    pub fn push_front(&mut self, fm: Fof) {
        self.0.insert(0, fm)
    }

    /// Add formulas one after the other before all others,
    /// so that the last formula ends up first.
    pub fn extend_front(&mut self, fms: impl IntoIterator<Item = Fof>) {
        fms.into_iter().for_each(|fm| self.push_front(fm))
    }

    /// Remove the formula at the given position.
    pub fn remove(&mut self, i: usize) -> Fof {
        self.0.remove(i)
    }

    /// Return true if the theory contains some formula as well as its negation.
    pub fn contradictory(&self) -> bool {
        let fms: HashSet<&Fof> = self.0.iter().collect();
        self.0.iter().any(|fm| match fm {
            Fof::Neg(x) => fms.contains(&**x),
            _ => false,
        })
    }

    /// Return true if the theory contains only literals.
    pub fn expanded(&self) -> bool {
        self.0.iter().all(Fof::is_literal)
    }

    /// Return the position and the case of the first non-literal formula.
    ///
    /// The case is determined on the normalised formula (see [`Fof::adjust`]).
    pub fn pick(&self) -> Option<(usize, Case)> {
        let cases = self.0.iter().map(|fm| Case::of(&fm.adjust()));
        cases.enumerate().find_map(|(i, case)| Some((i, case?)))
    }

    /// Return all terms occurring in the theory.
    pub fn terms(&self) -> impl Iterator<Item = Term> + '_ {
        self.0.iter().flat_map(|fm| fm.terms())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn theory(fms: &[&str]) -> Theory {
        Theory(fms.iter().map(|s| s.parse().unwrap()).collect())
    }

    #[test]
    fn contradictions() {
        assert!(theory(&["p", "q", "~p"]).contradictory());
        assert!(theory(&["~P(x,y)", "P(x,y)"]).contradictory());
        assert!(theory(&["(p/\\q)", "~(p/\\q)"]).contradictory());
        assert!(!theory(&["P(x,y)", "~P(y,x)"]).contradictory());
        assert!(!theory(&["~~p", "p"]).contradictory());
        assert!(!theory(&["p"]).contradictory());
    }

    #[test]
    fn pick_first_non_literal() {
        let th = theory(&["p", "~Q(x,y)", "AxP(x,x)", "(p\\/q)"]);
        assert!(!th.expanded());
        assert_eq!(th.pick(), Some((2, Case::Forall)));
        assert_eq!(theory(&["p", "~q"]).pick(), None);
        assert!(theory(&["p", "~q"]).expanded());
    }

    #[test]
    fn front() {
        let mut th = theory(&["p"]);
        th.extend_front(["q", "r"].iter().map(|s| s.parse().unwrap()));
        assert_eq!(th.to_string(), "{r, q, p}");
        assert_eq!(th, theory(&["r", "q", "p"]));
        assert_ne!(th, theory(&["q", "r", "p"]));
    }
}
