//! Output lines for classification and satisfiability.

use crate::input::Input;
use log::{info, warn};
use serde_json::{json, Value};
use tab::syntax::{self, classify};
use tab::{Fof, Opt, Search, Verdict};

/// Describe the kind of a formula and, for binary formulas, its parts.
///
/// ~~~
/// use tabsat::report::classified;
/// assert_eq!(classified("r"), "r is a proposition.");
/// assert_eq!(
///     classified("(p=>q)"),
///     "(p=>q) is a binary connective propositional formula. \
///      Its left hand side is p, its connective is =>, and its right hand side is q."
/// );
/// ~~~
pub fn classified(fm: &str) -> String {
    let kind = classify(fm);
    let mut out = format!("{} is {}.", fm, kind);
    if kind.is_binary() {
        if let Some((l, c, r)) = syntax::split(fm) {
            out += &format!(
                " Its left hand side is {}, its connective is {}, and its right hand side is {}.",
                l, c, r
            );
        }
    }
    out
}

/// Describe the outcome of a satisfiability query.
///
/// `None` stands for a string that is not a formula.
pub fn decided(fm: &str, verdict: Option<Verdict>) -> String {
    match verdict {
        Some(v) => format!("{} {}.", fm, v),
        None => format!("{} is not a formula.", fm),
    }
}

/// Decide the satisfiability of a formula, returning search statistics.
///
/// Return `None` if the string is not a formula.
pub fn decide(s: &str, opt: &Opt) -> Option<(Verdict, tab::Stats)> {
    if !classify(s).is_formula() {
        return None;
    }
    let fm: Fof = s.parse().ok()?;
    let mut search = Search::new(fm, opt.clone());
    let verdict = search.run();
    info!("{} {}", s, verdict);
    Some((verdict, search.stats().clone()))
}

/// Process all formulas of an input.
///
/// Return the output lines as well as statistics for every search.
pub fn process(input: &Input, opt: &Opt) -> (Vec<String>, Vec<Value>) {
    if !(input.mode.parse || input.mode.sat) {
        warn!("input selects neither PARSE nor SAT");
    }
    let mut lines = Vec::new();
    let mut stats = Vec::new();
    for fm in &input.formulas {
        if input.mode.parse {
            lines.push(classified(fm))
        }
        if input.mode.sat {
            let result = decide(fm, opt);
            if let Some((verdict, st)) = &result {
                let code = u8::from(*verdict);
                stats.push(json!({ "formula": fm, "verdict": code, "stats": st }))
            }
            lines.push(decided(fm, result.map(|(v, _)| v)))
        }
    }
    (lines, stats)
}
