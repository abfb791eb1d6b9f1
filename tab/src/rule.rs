//! Tableau expansion rules.

use crate::fof::{Fof, Op, Quantifier};
use crate::term::Var;
use alloc::vec::Vec;
use core::fmt::{self, Display};

/// Rule family.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Family {
    /// conjunctive: one successor
    Alpha,
    /// disjunctive: two successors
    Beta,
    /// universal: instantiate with all terms
    Gamma,
    /// existential: instantiate with a fresh constant
    Delta,
}

/// Shape of a non-literal formula, which determines the rule that expands it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Case {
    /// `(L/\R)`
    Conj,
    /// `~~X`
    NegNeg,
    /// `~(L\/R)`
    NegDisj,
    /// `~(L=>R)`
    NegImpl,
    /// `(L\/R)`
    Disj,
    /// `~(L/\R)`
    NegConj,
    /// `(L=>R)`
    Impl,
    /// `Ex X`
    Exists,
    /// `~Ax X`
    NegForall,
    /// `Ax X`
    Forall,
    /// `~Ex X`
    NegExists,
}

/// Formulas obtained by expanding a formula.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expansion {
    /// Add the formulas to the branch, in the given order.
    Alpha(Vec<Fof>),
    /// Split the branch; the left successor receives the first formula.
    Beta(Fof, Fof),
    /// Instantiate the variable in the formula with a fresh constant.
    Delta(Var, Fof),
    /// Instantiate the variable in the formula with every known term.
    Gamma(Var, Fof),
}

impl Case {
    /// Determine the case of a formula, returning `None` for literals.
    pub fn of(fm: &Fof) -> Option<Self> {
        use Fof::{Bin, Neg, Quant};
        use Quantifier::{Exists, Forall};
        let case = match fm {
            Bin(_, Op::Conj, _) => Self::Conj,
            Bin(_, Op::Disj, _) => Self::Disj,
            Bin(_, Op::Impl, _) => Self::Impl,
            Quant(Exists, _, _) => Self::Exists,
            Quant(Forall, _, _) => Self::Forall,
            Neg(x) => match &**x {
                Neg(_) => Self::NegNeg,
                Bin(_, Op::Conj, _) => Self::NegConj,
                Bin(_, Op::Disj, _) => Self::NegDisj,
                Bin(_, Op::Impl, _) => Self::NegImpl,
                Quant(Exists, _, _) => Self::NegExists,
                Quant(Forall, _, _) => Self::NegForall,
                Fof::Prop(_) | Fof::Atom(..) => return None,
            },
            Fof::Prop(_) | Fof::Atom(..) => return None,
        };
        Some(case)
    }

    pub fn family(self) -> Family {
        use Case::*;
        match self {
            Conj | NegNeg | NegDisj | NegImpl => Family::Alpha,
            Disj | NegConj | Impl => Family::Beta,
            Forall | NegExists => Family::Gamma,
            Exists | NegForall => Family::Delta,
        }
    }

    /// Decompose a formula of this case.
    ///
    /// Return `None` if the formula does not have the shape of the case.
    pub fn apply(self, fm: Fof) -> Option<Expansion> {
        use Expansion::{Alpha, Beta, Delta, Gamma};
        use Fof::{Bin, Neg, Quant};
        use Quantifier::{Exists, Forall};
        let expansion = match (self, fm) {
            (Self::Conj, Bin(l, Op::Conj, r)) => Alpha(Vec::from([*l, *r])),
            (Self::Disj, Bin(l, Op::Disj, r)) => Beta(*l, *r),
            (Self::Impl, Bin(l, Op::Impl, r)) => Beta(-*l, *r),
            (Self::Exists, Quant(Exists, v, x)) => Delta(v, *x),
            (Self::Forall, Quant(Forall, v, x)) => Gamma(v, *x),
            (case, Neg(x)) => match (case, *x) {
                (Self::NegNeg, Neg(x)) => Alpha(Vec::from([*x])),
                (Self::NegDisj, Bin(l, Op::Disj, r)) => Alpha(Vec::from([-*l, -*r])),
                (Self::NegImpl, Bin(l, Op::Impl, r)) => Alpha(Vec::from([*l, -*r])),
                (Self::NegConj, Bin(l, Op::Conj, r)) => Beta(-*l, -*r),
                (Self::NegForall, Quant(Forall, v, x)) => Delta(v, -*x),
                (Self::NegExists, Quant(Exists, v, x)) => Gamma(v, -*x),
                _ => return None,
            },
            _ => return None,
        };
        Some(expansion)
    }
}

impl Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Case::*;
        let s = match self {
            Conj => "/\\",
            NegNeg => "~~",
            NegDisj => "~\\/",
            NegImpl => "~=>",
            Disj => "\\/",
            NegConj => "~/\\",
            Impl => "=>",
            Exists => "E",
            NegForall => "~A",
            Forall => "A",
            NegExists => "~E",
        };
        s.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::{Const, Term};
    use alloc::string::ToString;

    fn fm(s: &str) -> Fof {
        s.parse().unwrap()
    }

    #[test]
    fn cases() {
        use Case::*;
        let cases = [
            ("(p/\\q)", Conj),
            ("~~p", NegNeg),
            ("~(p\\/q)", NegDisj),
            ("~(p=>q)", NegImpl),
            ("(p\\/q)", Disj),
            ("~(p/\\q)", NegConj),
            ("(p=>q)", Impl),
            ("ExP(x,x)", Exists),
            ("~AxP(x,x)", NegForall),
            ("AxP(x,x)", Forall),
            ("~ExP(x,x)", NegExists),
        ];
        for (s, case) in cases {
            assert_eq!(Case::of(&fm(s)), Some(case), "{}", s);
            assert_eq!(s.starts_with('~'), case.to_string().starts_with('~'));
        }
        for s in ["p", "~p", "Q(x,y)", "~Q(x,y)"] {
            assert_eq!(Case::of(&fm(s)), None);
        }
    }

    #[test]
    fn families() {
        assert_eq!(Case::NegImpl.family(), Family::Alpha);
        assert_eq!(Case::NegConj.family(), Family::Beta);
        assert_eq!(Case::NegExists.family(), Family::Gamma);
        assert_eq!(Case::NegForall.family(), Family::Delta);
    }

    #[test]
    fn alpha() {
        let e = Case::NegImpl.apply(fm("~(p=>q)"));
        assert_eq!(e, Some(Expansion::Alpha(Vec::from([fm("p"), fm("~q")]))));
        let e = Case::NegDisj.apply(fm("~(p\\/~q)"));
        assert_eq!(e, Some(Expansion::Alpha(Vec::from([fm("~p"), fm("~~q")]))));
        let e = Case::NegNeg.apply(fm("~~(p/\\q)"));
        assert_eq!(e, Some(Expansion::Alpha(Vec::from([fm("(p/\\q)")]))));
    }

    #[test]
    fn beta() {
        let e = Case::Impl.apply(fm("(p=>q)"));
        assert_eq!(e, Some(Expansion::Beta(fm("~p"), fm("q"))));
        let e = Case::NegConj.apply(fm("~(p/\\q)"));
        assert_eq!(e, Some(Expansion::Beta(fm("~p"), fm("~q"))));
    }

    #[test]
    fn quantifiers() {
        let e = Case::NegForall.apply(fm("~AyQ(y,x)"));
        assert_eq!(e, Some(Expansion::Delta(Var::Y, fm("~Q(y,x)"))));
        let e = Case::NegExists.apply(fm("~EyQ(y,x)"));
        assert_eq!(e, Some(Expansion::Gamma(Var::Y, fm("~Q(y,x)"))));
    }

    #[test]
    fn constants_do_not_change_the_case() {
        let f = fm("~Ax(P(x,y)\\/Q(y,y))");
        let f = f.subst(Var::Y, Term::C(Const(3)));
        assert_eq!(Case::of(&f.adjust()), Case::of(&f));
        assert_eq!(Case::Conj.apply(f), None);
    }
}
