//! Classification and semantic tableau satisfiability
//! for a small propositional and first-order language.
//!
//! ~~~
//! use tab::syntax::{classify, Kind};
//! use tab::{decide, Verdict};
//!
//! assert_eq!(classify("(p/\\~p)"), Kind::BinProp);
//! assert_eq!(decide("(p/\\~p)"), Verdict::Unsatisfiable);
//! assert_eq!(decide("ExAy(P(x,y)=>Q(y,x))"), Verdict::Satisfiable);
//! ~~~
#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod fof;
mod pool;
pub mod rule;
pub mod search;
mod stats;
pub mod syntax;
pub mod term;
mod theory;

pub use fof::Fof;
pub use pool::Pool;
pub use search::{Opt, Search, Verdict};
pub use stats::Stats;
pub use syntax::Kind;
pub use term::Term;
pub use theory::Theory;

use alloc::vec::Vec;
use log::debug;

/// Default number of constants available for existential instantiation.
pub const MAX_CONSTANTS: usize = 10;

/// Decide whether a formula is satisfiable.
///
/// Strings that are not formulas are reported as unsatisfiable;
/// use [`syntax::classify`] to tell them apart.
pub fn decide(s: &str) -> Verdict {
    match s.parse::<Fof>() {
        Ok(fm) => Search::new(fm, Opt::default()).run(),
        Err(e) => {
            debug!("{}", e);
            Verdict::Unsatisfiable
        }
    }
}

/// Remove duplicates, keeping the first occurrence of each element.
fn keep_first<T: Eq>(v: impl Iterator<Item = T>) -> Vec<T> {
    let mut result = Vec::new();
    for x in v {
        if result.iter().all(|y| x != *y) {
            result.push(x)
        }
    }
    result
}

#[test]
fn keep_first_order() {
    let v = keep_first(Vec::from([3, 1, 3, 2, 1]).into_iter());
    assert_eq!(v, Vec::from([3, 1, 2]));
}
