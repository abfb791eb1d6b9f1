use core::fmt::{self, Display};

/// Variable symbol.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Var {
    X,
    Y,
    Z,
    W,
}

impl Var {
    pub fn from_byte(c: u8) -> Option<Self> {
        match c {
            b'x' => Some(Self::X),
            b'y' => Some(Self::Y),
            b'z' => Some(Self::Z),
            b'w' => Some(Self::W),
            _ => None,
        }
    }
}

impl Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::X => 'x',
            Self::Y => 'y',
            Self::Z => 'z',
            Self::W => 'w',
        };
        write!(f, "{}", c)
    }
}

/// Constant symbol, identified by its position in the constant pool.
///
/// The first ten constants are written `a` to `j`, later ones `c10`, `c11`, ...
///
/// ~~~
/// # use tab::term::Const;
/// assert_eq!(Const(0).to_string(), "a");
/// assert_eq!(Const(9).to_string(), "j");
/// assert_eq!(Const(10).to_string(), "c10");
/// ~~~
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Const(pub usize);

impl Display for Const {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const LETTERS: &[u8] = b"abcdefghij";
        match LETTERS.get(self.0) {
            Some(c) => write!(f, "{}", *c as char),
            None => write!(f, "c{}", self.0),
        }
    }
}

/// A fresh symbol generator.
pub trait Fresh {
    type State;
    fn fresh(st: &mut Self::State) -> Self;
}

impl Fresh for Const {
    type State = usize;
    fn fresh(st: &mut Self::State) -> Self {
        let fresh = Const(*st);
        *st += 1;
        fresh
    }
}

/// Argument of a predicate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Term {
    /// Variable
    V(Var),
    /// Constant
    C(Const),
}

impl Term {
    /// Replace the variable `v` by `tm`.
    pub fn subst(self, v: Var, tm: Term) -> Self {
        match self {
            Self::V(w) if w == v => tm,
            _ => self,
        }
    }

    /// Map constants to the placeholder variable `x`, keeping variables.
    pub fn adjust(self) -> Self {
        match self {
            Self::C(_) => Self::V(Var::X),
            Self::V(_) => self,
        }
    }
}

impl From<Var> for Term {
    fn from(v: Var) -> Self {
        Self::V(v)
    }
}

impl From<Const> for Term {
    fn from(c: Const) -> Self {
        Self::C(c)
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V(v) => v.fmt(f),
            Self::C(c) => c.fmt(f),
        }
    }
}

#[test]
fn fresh_constants() {
    let mut st = 0;
    assert_eq!(Const::fresh(&mut st), Const(0));
    assert_eq!(Const::fresh(&mut st), Const(1));
    assert_eq!(st, 2);
}

#[test]
fn subst_only_hits_the_variable() {
    let a = Term::C(Const(0));
    assert_eq!(Term::V(Var::X).subst(Var::X, a), a);
    assert_eq!(Term::V(Var::Y).subst(Var::X, a), Term::V(Var::Y));
    assert_eq!(a.subst(Var::X, Term::V(Var::Z)), a);
}
