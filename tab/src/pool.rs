use crate::term::{Const, Fresh};

/// Constants available for existential instantiation.
///
/// Constants are handed out in pool order.
/// Once all of them are picked, no further constant is available.
///
/// ~~~
/// # use tab::Pool;
/// let mut pool = Pool::new(2);
/// assert!(pool.fresh().is_some());
/// assert!(pool.fresh().is_some());
/// assert!(pool.fresh().is_none());
/// pool.reset();
/// assert_eq!(pool.picked(), 0);
/// ~~~
#[derive(Clone, Debug)]
pub struct Pool {
    size: usize,
    picked: usize,
}

impl Pool {
    pub fn new(size: usize) -> Self {
        Self { size, picked: 0 }
    }

    /// Pick the next unused constant.
    pub fn fresh(&mut self) -> Option<Const> {
        (self.picked < self.size).then(|| Const::fresh(&mut self.picked))
    }

    /// Return all constants of the pool, picked or not.
    pub fn constants(&self) -> impl Iterator<Item = Const> {
        (0..self.size).map(Const)
    }

    /// Return the number of constants picked so far.
    pub fn picked(&self) -> usize {
        self.picked
    }

    /// Make all constants available again.
    pub fn reset(&mut self) {
        self.picked = 0
    }
}

#[test]
fn pool_order() {
    use alloc::vec::Vec;
    let mut pool = Pool::new(3);
    let all: Vec<_> = pool.constants().collect();
    let picked: Vec<_> = core::iter::from_fn(|| pool.fresh()).collect();
    assert_eq!(all, picked);
    assert_eq!(pool.picked(), 3);
    assert_eq!(pool.fresh(), None);
}
