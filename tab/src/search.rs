use crate::rule::Expansion;
use crate::{Fof, Pool, Stats, Term, Theory};
use alloc::vec::Vec;
use core::fmt::{self, Display};
use log::{debug, trace, warn};

/// Search options.
#[derive(Clone, Debug)]
pub struct Opt {
    /// number of constants available for existential instantiation
    pub constants: usize,
}

impl Default for Opt {
    fn default() -> Self {
        Self {
            constants: crate::MAX_CONSTANTS,
        }
    }
}

/// Outcome of a satisfiability query.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Verdict {
    Unsatisfiable = 0,
    Satisfiable = 1,
    /// the constant pool was exhausted before a decision was reached
    Inconclusive = 2,
}

impl From<Verdict> for u8 {
    fn from(v: Verdict) -> Self {
        v as u8
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Unsatisfiable => "is not satisfiable",
            Self::Satisfiable => "is satisfiable",
            Self::Inconclusive => "may or may not be satisfiable",
        };
        s.fmt(f)
    }
}

/// Tableau search for a saturated, non-contradictory branch.
///
/// ~~~
/// use tab::{Opt, Search, Verdict};
/// let fm = "(ExP(x,x)/\\Ex~P(x,x))".parse().unwrap();
/// let mut search = Search::new(fm, Opt::default());
/// assert_eq!(search.run(), Verdict::Satisfiable);
/// assert_eq!(search.stats().constants, 2);
/// ~~~
pub struct Search {
    root: Fof,
    /// pending branches, the most recently added one last
    tableau: Vec<Theory>,
    pool: Pool,
    stats: Stats,
}

impl Search {
    pub fn new(fm: Fof, opt: Opt) -> Self {
        Self {
            root: fm,
            tableau: Vec::new(),
            pool: Pool::new(opt.constants),
            stats: Stats::default(),
        }
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Search until a branch is saturated, all branches are closed,
    /// or more constants are needed than the pool holds.
    ///
    /// Every run starts from the initial formula with fresh statistics,
    /// so repeated runs yield the same verdict and statistics.
    /// Afterwards, the tableau is empty and all constants are available again.
    pub fn run(&mut self) -> Verdict {
        self.tableau = Vec::from([Theory::from(self.root.clone())]);
        self.stats = Stats::default();
        self.pool.reset();
        let verdict = self.search();
        debug!("verdict: {:?}, stats: {:?}", verdict, self.stats);
        self.stats.constants = self.pool.picked();
        self.pool.reset();
        self.tableau.clear();
        verdict
    }

    fn search(&mut self) -> Verdict {
        loop {
            let terms = self.closed_terms();
            let mut theory = match self.tableau.pop() {
                Some(theory) => theory,
                None => return Verdict::Unsatisfiable,
            };
            self.stats.branches += 1;
            trace!("theory: {}", theory);

            if theory.expanded() && !theory.contradictory() {
                debug!("saturated: {}", theory);
                return Verdict::Satisfiable;
            }

            let (i, case) = match theory.pick() {
                Some(picked) => picked,
                None => {
                    self.stats.closed += 1;
                    continue;
                }
            };
            let fm = theory.remove(i);
            debug!("expand {} by {} ({} pending)", fm, case, self.tableau.len());
            self.stats.count(case.family());

            let expansion = match case.apply(fm) {
                Some(expansion) => expansion,
                None => {
                    warn!("rule {} does not apply", case);
                    continue;
                }
            };
            match expansion {
                Expansion::Alpha(fms) => {
                    theory.extend_front(fms);
                    self.add(theory)
                }
                Expansion::Beta(l, r) => {
                    let mut left = theory.clone();
                    left.push_front(l);
                    theory.push_front(r);
                    self.add(left);
                    self.add(theory)
                }
                Expansion::Delta(v, fm) => {
                    let c = match self.pool.fresh() {
                        Some(c) => c,
                        None => {
                            debug!("constant pool exhausted");
                            return Verdict::Inconclusive;
                        }
                    };
                    theory.push_front(fm.subst(v, Term::C(c)));
                    self.add(theory)
                }
                Expansion::Gamma(v, fm) => {
                    // every constant that can ever be introduced is in the pool,
                    // so the quantified formula is not needed anymore afterwards
                    let pool = self.pool.constants().map(Term::C);
                    let insts = crate::keep_first(pool.chain(terms));
                    theory.extend_front(insts.into_iter().map(|tm| fm.clone().subst(v, tm)));
                    self.add(theory)
                }
            }
        }
    }

    /// Return the terms of all pending branches, in order of first occurrence.
    fn closed_terms(&self) -> Vec<Term> {
        crate::keep_first(self.tableau.iter().flat_map(|th| th.terms()))
    }

    /// Add a branch to the tableau unless it is contradictory or already pending.
    fn add(&mut self, theory: Theory) {
        if theory.contradictory() {
            trace!("closed: {}", theory);
            self.stats.closed += 1
        } else if self.tableau.contains(&theory) {
            trace!("duplicate: {}", theory);
            self.stats.duplicates += 1
        } else {
            self.tableau.push(theory)
        }
    }
}
