//! Syntactic classification of formula strings.
//!
//! Classification works directly on the string:
//! binary formulas are split at their main connective,
//! and the parts are classified recursively.
//! Every string is traversed once, building its formula along the way.

use crate::fof::{self, Fof, Quantifier};
use core::fmt::{self, Display};

/// Maximal nesting depth of formulas.
///
/// Strings that nest deeper are not formulas.
pub const MAX_DEPTH: usize = 1000;

/// Binary connectives; every connective is two characters long.
pub const CONNECTIVES: [&str; 3] = ["=>", "\\/", "/\\"];

/// Syntactic kind of a string.
///
/// The discriminants are the codes reported by the command-line driver.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    NotAFormula = 0,
    Atom = 1,
    /// negation of a first-order formula
    NegFo = 2,
    Universal = 3,
    Existential = 4,
    /// binary connective first-order formula
    BinFo = 5,
    Prop = 6,
    /// negated proposition or negation of a propositional formula
    NegProp = 7,
    /// binary connective propositional formula
    BinProp = 8,
}

impl Kind {
    pub fn is_formula(self) -> bool {
        self != Self::NotAFormula
    }

    pub fn is_binary(self) -> bool {
        matches!(self, Self::BinFo | Self::BinProp)
    }

    fn of(fm: &Fof, first_order: bool) -> Self {
        match (fm, first_order) {
            (Fof::Prop(_), _) => Self::Prop,
            (Fof::Atom(..), _) => Self::Atom,
            (Fof::Neg(_), true) => Self::NegFo,
            (Fof::Neg(_), false) => Self::NegProp,
            (Fof::Quant(Quantifier::Forall, ..), _) => Self::Universal,
            (Fof::Quant(Quantifier::Exists, ..), _) => Self::Existential,
            (Fof::Bin(..), true) => Self::BinFo,
            (Fof::Bin(..), false) => Self::BinProp,
        }
    }
}

impl From<Kind> for u8 {
    fn from(k: Kind) -> Self {
        k as u8
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Kind::*;
        let s = match self {
            NotAFormula => "not a formula",
            Atom => "an atom",
            NegFo => "a negation of a first order logic formula",
            Universal => "a universally quantified formula",
            Existential => "an existentially quantified formula",
            BinFo => "a binary connective first order formula",
            Prop => "a proposition",
            NegProp => "a negation of a propositional formula",
            BinProp => "a binary connective propositional formula",
        };
        s.fmt(f)
    }
}

fn is_prop(c: u8) -> bool {
    matches!(c, b'p' | b'q' | b'r' | b's')
}

fn is_pred(c: u8) -> bool {
    matches!(c, b'P' | b'Q' | b'R' | b'S')
}

fn is_var(c: u8) -> bool {
    matches!(c, b'x' | b'y' | b'z' | b'w')
}

fn is_connective(s: &[u8]) -> bool {
    CONNECTIVES.iter().any(|c| c.as_bytes() == s)
}

fn fo_char(c: u8) -> bool {
    is_var(c) || is_pred(c) || matches!(c, b'~' | b'(' | b')' | b' ' | b',' | b'E' | b'A')
}

fn prop_char(c: u8) -> bool {
    is_prop(c) || matches!(c, b'~' | b'(' | b')')
}

/// Return true if the string is nonempty and consists only of
/// characters accepted by `alphabet` and of binary connectives.
fn shaped(s: &str, alphabet: impl Fn(u8) -> bool) -> bool {
    let s = s.as_bytes();
    let mut i = 0;
    while i < s.len() {
        if alphabet(s[i]) {
            i += 1
        } else if s.get(i..i + 2).map_or(false, is_connective) {
            i += 2
        } else {
            return false;
        }
    }
    !s.is_empty()
}

/// Return true if the string is a first-order formula.
pub fn first_order(s: &str) -> bool {
    shaped(s, fo_char) && matches!(fof::parse(s, MAX_DEPTH), Some((_, true)))
}

/// Return true if the string is a propositional formula.
pub fn propositional(s: &str) -> bool {
    shaped(s, prop_char) && matches!(fof::parse(s, MAX_DEPTH), Some((_, false)))
}

/// Return the position of the main connective.
///
/// The main connective is the first connective that
/// has exactly one unmatched opening parenthesis to its left.
/// Return `None` if there is no such connective or
/// if a closing parenthesis has no matching opening one.
///
/// ~~~
/// # use tab::syntax::main_connective;
/// assert_eq!(main_connective("((p\\/q)=>r)"), Some(7));
/// assert_eq!(main_connective("p)(q/\\r"), None);
/// assert_eq!(main_connective("(p)"), None);
/// ~~~
pub fn main_connective(s: &str) -> Option<usize> {
    let s = s.as_bytes();
    let mut depth: usize = 0;
    for (i, c) in s.iter().enumerate() {
        if depth == 1 && s.get(i..i + 2).map_or(false, is_connective) {
            return Some(i);
        }
        match c {
            b'(' => depth += 1,
            b')' => depth = depth.checked_sub(1)?,
            _ => (),
        }
    }
    None
}

/// Split a string at its main connective into left side, connective, and right side.
///
/// The left side starts after the first character, and
/// the right side ends before the last character.
///
/// ~~~
/// # use tab::syntax::split;
/// assert_eq!(split("(p/\\~q)"), Some(("p", "/\\", "~q")));
/// assert_eq!(split("(P(x,y)=>ExQ(x,x))"), Some(("P(x,y)", "=>", "ExQ(x,x)")));
/// assert_eq!(split("(p/\\"), None);
/// ~~~
pub fn split(s: &str) -> Option<(&str, &str, &str)> {
    let i = main_connective(s)?;
    let end = s.len().checked_sub(1)?;
    Some((s.get(1..i)?, s.get(i..i + 2)?, s.get(i + 2..end)?))
}

/// Left side of a binary formula.
pub fn lhs(s: &str) -> Option<&str> {
    split(s).map(|(l, _, _)| l)
}

/// Main connective of a binary formula.
pub fn con(s: &str) -> Option<&str> {
    split(s).map(|(_, c, _)| c)
}

/// Right side of a binary formula.
pub fn rhs(s: &str) -> Option<&str> {
    split(s).map(|(_, _, r)| r)
}

/// Return the syntactic kind of a string.
///
/// ~~~
/// use tab::syntax::{classify, Kind};
/// assert_eq!(classify("~(p=>q)"), Kind::NegProp);
/// assert_eq!(classify("AxEy(P(x,y)\\/~Q(y,x))"), Kind::Universal);
/// assert_eq!(classify("(p/\\q"), Kind::NotAFormula);
/// ~~~
pub fn classify(s: &str) -> Kind {
    match fof::parse(s, MAX_DEPTH) {
        Some((fm, first_order)) => Kind::of(&fm, first_order),
        None => Kind::NotAFormula,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{format, string::String, vec::Vec};

    fn atoms() -> Vec<String> {
        let mut atoms = Vec::new();
        for p in ["P", "Q", "R", "S"] {
            for v1 in ["x", "y", "z", "w"] {
                for v2 in ["x", "y", "z", "w"] {
                    atoms.push(format!("{}({},{})", p, v1, v2))
                }
            }
        }
        atoms
    }

    #[test]
    fn fixed_sets() {
        for p in ["p", "q", "r", "s"] {
            assert_eq!(classify(p), Kind::Prop);
            assert_eq!(classify(&format!("~{}", p)), Kind::NegProp);
        }
        let atoms = atoms();
        assert_eq!(atoms.len(), 64);
        for a in atoms {
            assert_eq!(classify(&a), Kind::Atom);
            assert_eq!(classify(&format!("~{}", a)), Kind::NegFo);
        }
    }

    #[test]
    fn kinds() {
        assert_eq!(classify("ExP(x,x)"), Kind::Existential);
        assert_eq!(classify("Aw~S(w,z)"), Kind::Universal);
        assert_eq!(classify("~~p"), Kind::NegProp);
        assert_eq!(classify("~AxP(x,x)"), Kind::NegFo);
        assert_eq!(classify("(p=>(q\\/~r))"), Kind::BinProp);
        assert_eq!(classify("(ExP(x,y)/\\~Q(y,y))"), Kind::BinFo);
    }

    #[test]
    fn malformed() {
        for s in [
            "", "~", "E", "Ex", "(", ")", "()", "(p)", "pq", "P(x,a)", "P(x,y,z)", "(p/\\q",
            "p/\\q)", "(p/\\q/\\r)", "(p/\\q))", "((p/\\q)", "(p/\\P(x,y))", "Ex P(x,x)",
            "ExP(a,a)", "Exp", "~P(x,x", "(p/\\q)\\/(r/\\s)", "(p=>é)", "é",
        ] {
            assert_eq!(classify(s), Kind::NotAFormula, "{}", s);
        }
    }

    #[test]
    fn quantifier_with_non_formula_tail() {
        assert_eq!(classify("Ex"), Kind::NotAFormula);
        assert_eq!(classify("Ax(p/\\q)"), Kind::NotAFormula);
        assert_eq!(classify("Exx"), Kind::NotAFormula);
    }

    #[test]
    fn shapes() {
        assert!(first_order("(P(x,y)=>Q(y,x))"));
        assert!(!first_order("p"));
        assert!(propositional("(p\\/~q)"));
        assert!(!propositional("P(x,y)"));
        // shape alone is not enough
        assert!(!first_order("xx"));
        assert!(!propositional("(("));
    }

    #[test]
    fn nesting_limit() {
        let negs = |n| format!("{}p", "~".repeat(n));
        assert_eq!(classify(&negs(MAX_DEPTH - 1)), Kind::NegProp);
        assert_eq!(classify(&negs(MAX_DEPTH)), Kind::NotAFormula);
        assert_eq!(classify(&negs(20 * MAX_DEPTH)), Kind::NotAFormula);
        assert!(!propositional(&negs(20 * MAX_DEPTH)));

        let quants = |n| format!("{}P(x,x)", "Ex".repeat(n));
        assert_eq!(classify(&quants(MAX_DEPTH - 1)), Kind::Existential);
        assert_eq!(classify(&quants(MAX_DEPTH)), Kind::NotAFormula);
    }

    #[test]
    fn split_reconstructs() {
        for s in ["(p\\/q)", "((p/\\q)=>~r)", "(AxP(x,x)\\/(ExQ(x,y)/\\~R(z,w)))", "(~(p=>q)/\\s)"] {
            assert!(classify(s).is_binary());
            let (l, c, r) = split(s).unwrap();
            assert_eq!(format!("({}{}{})", l, c, r), s);
        }
    }

    #[test]
    fn unbalanced() {
        assert_eq!(main_connective(")(p/\\q)"), None);
        assert_eq!(main_connective("(p/\\q"), Some(2));
        assert_eq!(lhs("(p/\\q"), Some("p"));
        assert_eq!(rhs("(p/\\"), None);
        assert_eq!(con("p"), None);
    }
}
