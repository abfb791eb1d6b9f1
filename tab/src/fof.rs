use crate::syntax;
use crate::term::{Term, Var};
use alloc::{boxed::Box, string::String, string::ToString, vec::Vec};
use core::fmt::{self, Display};
use core::ops::Neg;
use core::str::FromStr;

/// Proposition symbol.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Prop {
    P,
    Q,
    R,
    S,
}

/// Binary predicate symbol.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Pred {
    P,
    Q,
    R,
    S,
}

/// Binary connective.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Impl,
    Disj,
    Conj,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quantifier {
    Forall,
    Exists,
}

/// Propositional or first-order formula.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Fof {
    Prop(Prop),
    Atom(Pred, Term, Term),
    Neg(Box<Fof>),
    Bin(Box<Fof>, Op, Box<Fof>),
    Quant(Quantifier, Var, Box<Fof>),
}

/// Error for strings that are not well-formed formulas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotAFormula(pub String);

impl Display for NotAFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not a formula", self.0)
    }
}

impl Prop {
    pub fn from_byte(c: u8) -> Option<Self> {
        match c {
            b'p' => Some(Self::P),
            b'q' => Some(Self::Q),
            b'r' => Some(Self::R),
            b's' => Some(Self::S),
            _ => None,
        }
    }
}

impl Pred {
    pub fn from_byte(c: u8) -> Option<Self> {
        match c {
            b'P' => Some(Self::P),
            b'Q' => Some(Self::Q),
            b'R' => Some(Self::R),
            b'S' => Some(Self::S),
            _ => None,
        }
    }
}

impl Op {
    pub fn token(self) -> &'static str {
        match self {
            Self::Impl => "=>",
            Self::Disj => "\\/",
            Self::Conj => "/\\",
        }
    }

    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "=>" => Some(Self::Impl),
            "\\/" => Some(Self::Disj),
            "/\\" => Some(Self::Conj),
            _ => None,
        }
    }
}

impl Display for Prop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::P => 'p',
            Self::Q => 'q',
            Self::R => 'r',
            Self::S => 's',
        };
        write!(f, "{}", c)
    }
}

impl Display for Pred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::P => 'P',
            Self::Q => 'Q',
            Self::R => 'R',
            Self::S => 'S',
        };
        write!(f, "{}", c)
    }
}

impl Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.token().fmt(f)
    }
}

impl Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forall => write!(f, "A"),
            Self::Exists => write!(f, "E"),
        }
    }
}

impl Display for Fof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Fof::*;
        match self {
            Prop(p) => p.fmt(f),
            Atom(p, t1, t2) => write!(f, "{}({},{})", p, t1, t2),
            Neg(fm) => write!(f, "~{}", fm),
            Bin(l, o, r) => write!(f, "({}{}{})", l, o, r),
            Quant(q, v, fm) => write!(f, "{}{}{}", q, v, fm),
        }
    }
}

impl Neg for Fof {
    type Output = Self;
    fn neg(self) -> Self {
        Self::Neg(Box::new(self))
    }
}

impl Fof {
    pub fn bin(l: Self, o: Op, r: Self) -> Self {
        Self::Bin(Box::new(l), o, Box::new(r))
    }

    pub fn quant(q: Quantifier, v: Var, fm: Self) -> Self {
        Self::Quant(q, v, Box::new(fm))
    }

    /// Return true for propositions, atoms, and their negations.
    pub fn is_literal(&self) -> bool {
        match self {
            Self::Prop(_) | Self::Atom(..) => true,
            Self::Neg(fm) => matches!(**fm, Self::Prop(_) | Self::Atom(..)),
            _ => false,
        }
    }

    pub fn map_terms(self, f: &mut impl FnMut(Term) -> Term) -> Self {
        use Fof::*;
        match self {
            Prop(_) => self,
            Atom(p, t1, t2) => Atom(p, f(t1), f(t2)),
            Neg(fm) => -fm.map_terms(f),
            Bin(l, o, r) => Self::bin(l.map_terms(f), o, r.map_terms(f)),
            Quant(q, v, fm) => Self::quant(q, v, fm.map_terms(f)),
        }
    }

    /// Replace the free occurrences of `v` by `tm`.
    ///
    /// Occurrences below a quantifier that binds `v` again are left alone.
    ///
    /// ~~~
    /// # use tab::Fof;
    /// # use tab::term::{Const, Term, Var};
    /// let fm: Fof = "(P(x,y)/\\ExQ(x,x))".parse().unwrap();
    /// let a = Term::C(Const(0));
    /// assert_eq!(fm.subst(Var::X, a).to_string(), "(P(a,y)/\\ExQ(x,x))");
    /// ~~~
    pub fn subst(self, v: Var, tm: Term) -> Self {
        use Fof::*;
        match self {
            Prop(_) => self,
            Atom(p, t1, t2) => Atom(p, t1.subst(v, tm), t2.subst(v, tm)),
            Neg(fm) => -fm.subst(v, tm),
            Bin(l, o, r) => Self::bin(l.subst(v, tm), o, r.subst(v, tm)),
            Quant(q, w, fm) if w == v => Quant(q, w, fm),
            Quant(q, w, fm) => Self::quant(q, w, fm.subst(v, tm)),
        }
    }

    /// Return a copy of the formula where every constant is
    /// replaced by the placeholder variable `x`.
    ///
    /// This normalisation only serves to recognise the shape of a formula;
    /// the formula itself is not modified.
    pub fn adjust(&self) -> Self {
        self.clone().map_terms(&mut Term::adjust)
    }

    /// Return the formula and all its subformulas, in prefix order.
    pub fn subforms(&self) -> impl Iterator<Item = &Fof> + '_ {
        use Fof::*;
        let mut stack = Vec::from([self]);
        core::iter::from_fn(move || {
            let fm = stack.pop()?;
            match fm {
                Prop(_) | Atom(..) => (),
                Neg(x) | Quant(_, _, x) => stack.push(x),
                Bin(l, _, r) => {
                    stack.push(r);
                    stack.push(l)
                }
            }
            Some(fm)
        })
    }

    /// Return all terms in the formula,
    /// including the variables bound by quantifiers.
    pub fn terms(&self) -> impl Iterator<Item = Term> + '_ {
        let terms = self.subforms().flat_map(|fm| match fm {
            Self::Atom(_, t1, t2) => [Some(*t1), Some(*t2)],
            Self::Quant(_, v, _) => [Some(Term::V(*v)), None],
            _ => [None, None],
        });
        terms.flatten()
    }
}

/// Build the formula denoted by a string, and tell whether it is first-order.
///
/// Return `None` if the string is not a formula or
/// if its nesting exceeds `depth`.
pub(crate) fn parse(s: &str, depth: usize) -> Option<(Fof, bool)> {
    let depth = depth.checked_sub(1)?;
    let parsed = match s.as_bytes() {
        [p] => (Fof::Prop(Prop::from_byte(*p)?), false),
        [p, b'(', v1, b',', v2, b')'] if p.is_ascii_uppercase() => {
            let (v1, v2) = (Var::from_byte(*v1)?, Var::from_byte(*v2)?);
            (Fof::Atom(Pred::from_byte(*p)?, Term::V(v1), Term::V(v2)), true)
        }
        [q @ (b'E' | b'A'), v, ..] => {
            let v = Var::from_byte(*v)?;
            let q = match *q {
                b'E' => Quantifier::Exists,
                _ => Quantifier::Forall,
            };
            // quantifiers only bind in first-order formulas
            match parse(&s[2..], depth)? {
                (fm, true) => (Fof::quant(q, v, fm), true),
                (_, false) => return None,
            }
        }
        [b'~', ..] => {
            let (fm, fo) = parse(&s[1..], depth)?;
            (-fm, fo)
        }
        [b'(', .., b')'] => {
            let (l, c, r) = syntax::split(s)?;
            let (l, lfo) = parse(l, depth)?;
            let (r, rfo) = parse(r, depth)?;
            if lfo != rfo {
                return None;
            }
            (Fof::bin(l, Op::from_token(c)?, r), lfo)
        }
        _ => return None,
    };
    Some(parsed)
}

impl FromStr for Fof {
    type Err = NotAFormula;

    /// Convert a well-formed formula to a tree.
    ///
    /// ~~~
    /// # use tab::Fof;
    /// let s = "Ax(P(x,y)=>~Ey~(q\\/r))";
    /// assert!(s.parse::<Fof>().is_err());
    /// let s = "Ax(P(x,y)=>~EyQ(y,x))";
    /// assert_eq!(s.parse::<Fof>().unwrap().to_string(), s);
    /// ~~~
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fm = parse(s, syntax::MAX_DEPTH).map(|(fm, _)| fm);
        fm.ok_or_else(|| NotAFormula(s.to_string()))
    }
}
