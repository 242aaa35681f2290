//! Built-in cost policies.
//!
//! - [`UnitCost`]     : classic Levenshtein costs (0 for equal, 1 otherwise).
//! - [`CostFns`]      : three independent callables, each replaceable on its own.
//! - [`OverrideCost`] : a directional table of per-pair match costs layered
//!   over a fallback policy.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::traits::{CostPolicy, Score};

/// Match cost of the unit model: 0 for equal values, 1 otherwise.
#[inline]
pub fn unit_match<T: PartialEq + ?Sized>(a: &T, b: &T) -> u32 {
    if a == b {
        0
    } else {
        1
    }
}

/// Insert cost of the unit model.
#[inline]
pub fn unit_insert<T: ?Sized>(_a: &T) -> u32 {
    1
}

/// Delete cost of the unit model.
#[inline]
pub fn unit_delete<T: ?Sized>(_b: &T) -> u32 {
    1
}

/// Default cost policy: equality-based match, unit insert and delete.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnitCost;

impl<T: PartialEq + ?Sized> CostPolicy<T> for UnitCost {
    type Cost = u32;

    #[inline]
    fn match_cost(&self, a: &T, b: &T) -> u32 {
        unit_match(a, b)
    }

    #[inline]
    fn insert_cost(&self, a: &T) -> u32 {
        unit_insert(a)
    }

    #[inline]
    fn delete_cost(&self, b: &T) -> u32 {
        unit_delete(b)
    }
}

/// Cost policy assembled from three separate callables.
///
/// Each callable can be swapped without touching the other two:
/// ```
/// use dp_match::{cost::UnitFns, Aligner};
///
/// let vowels_free = UnitFns::unit().with_match(|a: &char, b: &char| {
///     let vowel = |c: &char| "aeiou".contains(*c);
///     if a == b || (vowel(a) && vowel(b)) { 0u32 } else { 1 }
/// });
/// let s: Vec<char> = "bat".chars().collect();
/// let t: Vec<char> = "bit".chars().collect();
/// let row = Aligner::new(vowels_free).align(&s, &t, false);
/// assert_eq!(row.final_score(), 0);
/// ```
#[derive(Clone, Copy)]
pub struct CostFns<M, I, D> {
    match_fn: M,
    insert_fn: I,
    delete_fn: D,
}

/// [`CostFns`] holding the unit model as plain function pointers.
pub type UnitFns<T> = CostFns<fn(&T, &T) -> u32, fn(&T) -> u32, fn(&T) -> u32>;

impl<T: PartialEq> UnitFns<T> {
    /// The unit model, ready to have one of its parts replaced.
    pub fn unit() -> Self {
        CostFns {
            match_fn: unit_match::<T>,
            insert_fn: unit_insert::<T>,
            delete_fn: unit_delete::<T>,
        }
    }
}

impl<M, I, D> CostFns<M, I, D> {
    pub fn new<T, C>(match_fn: M, insert_fn: I, delete_fn: D) -> Self
    where
        M: Fn(&T, &T) -> C,
        I: Fn(&T) -> C,
        D: Fn(&T) -> C,
    {
        Self {
            match_fn,
            insert_fn,
            delete_fn,
        }
    }

    /// Replace the match callable, keeping insert and delete.
    pub fn with_match<T, C, M2>(self, match_fn: M2) -> CostFns<M2, I, D>
    where
        M2: Fn(&T, &T) -> C,
    {
        CostFns {
            match_fn,
            insert_fn: self.insert_fn,
            delete_fn: self.delete_fn,
        }
    }

    /// Replace the insert callable, keeping match and delete.
    pub fn with_insert<T, C, I2>(self, insert_fn: I2) -> CostFns<M, I2, D>
    where
        I2: Fn(&T) -> C,
    {
        CostFns {
            match_fn: self.match_fn,
            insert_fn,
            delete_fn: self.delete_fn,
        }
    }

    /// Replace the delete callable, keeping match and insert.
    pub fn with_delete<T, C, D2>(self, delete_fn: D2) -> CostFns<M, I, D2>
    where
        D2: Fn(&T) -> C,
    {
        CostFns {
            match_fn: self.match_fn,
            insert_fn: self.insert_fn,
            delete_fn,
        }
    }
}

impl<T, C, M, I, D> CostPolicy<T> for CostFns<M, I, D>
where
    C: Score,
    M: Fn(&T, &T) -> C,
    I: Fn(&T) -> C,
    D: Fn(&T) -> C,
{
    type Cost = C;

    #[inline]
    fn match_cost(&self, a: &T, b: &T) -> C {
        (self.match_fn)(a, b)
    }

    #[inline]
    fn insert_cost(&self, a: &T) -> C {
        (self.insert_fn)(a)
    }

    #[inline]
    fn delete_cost(&self, b: &T) -> C {
        (self.delete_fn)(b)
    }
}

/// Directional table of explicit match costs.
///
/// Stored as outer value -> inner value -> cost. The first cost registered
/// for a pair wins; `(v1, v2)` says nothing about `(v2, v1)`.
#[derive(Clone, Debug)]
pub struct OverrideTable<T, C> {
    entries: FxHashMap<T, FxHashMap<T, C>>,
}

impl<T, C> Default for OverrideTable<T, C> {
    fn default() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }
}

impl<T: Eq + Hash, C: Copy> OverrideTable<T, C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `cost` for `(v1, v2)` unless the pair already has one.
    ///
    /// Returns `true` if the cost was stored, `false` if the call was a no-op.
    pub fn register(&mut self, v1: T, v2: T, cost: C) -> bool {
        let inner = self.entries.entry(v1).or_default();
        if inner.contains_key(&v2) {
            return false;
        }
        inner.insert(v2, cost);
        true
    }

    /// Register `(v1, v2)` and `(v2, v1)`, each with insert-if-absent rules.
    pub fn register_symmetric(&mut self, v1: T, v2: T, cost: C) -> (bool, bool)
    where
        T: Clone,
    {
        let forward = self.register(v1.clone(), v2.clone(), cost);
        let backward = self.register(v2, v1, cost);
        (forward, backward)
    }

    /// The override stored for `(v1, v2)`, if any.
    #[inline]
    pub fn lookup(&self, v1: &T, v2: &T) -> Option<C> {
        self.entries.get(v1)?.get(v2).copied()
    }

    /// Number of registered pairs.
    pub fn len(&self) -> usize {
        self.entries.values().map(|inner| inner.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(|inner| inner.is_empty())
    }
}

impl<T: Eq + Hash, C: Copy> Extend<(T, T, C)> for OverrideTable<T, C> {
    fn extend<It: IntoIterator<Item = (T, T, C)>>(&mut self, iter: It) {
        for (v1, v2, cost) in iter {
            self.register(v1, v2, cost);
        }
    }
}

impl<T: Eq + Hash, C: Copy> FromIterator<(T, T, C)> for OverrideTable<T, C> {
    fn from_iter<It: IntoIterator<Item = (T, T, C)>>(iter: It) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

/// Override table layered over a fallback policy.
///
/// `match_cost` consults the table first and falls back to the wrapped
/// policy; insert and delete costs always come from the wrapped policy.
/// [`OverrideCost::new`] wraps a bare match function with unit insert and
/// delete costs; [`OverrideCost::with_inner`] wraps any policy.
///
/// ```
/// use dp_match::{cost::OverrideCost, CostPolicy};
///
/// let mut costs = OverrideCost::default();
/// assert!(costs.register('i', 'e', 0));
/// assert!(!costs.register('i', 'e', 5));
/// assert_eq!(costs.match_cost(&'i', &'e'), 0);
/// assert_eq!(costs.match_cost(&'e', &'i'), 1);
/// ```
#[derive(Clone)]
pub struct OverrideCost<T, P>
where
    P: CostPolicy<T>,
{
    table: OverrideTable<T, P::Cost>,
    fallback: P,
}

/// Policy built by [`OverrideCost::new`]: a match function with unit
/// insert and delete costs.
pub type MatchFnCost<T, F> = CostFns<F, fn(&T) -> u32, fn(&T) -> u32>;

impl<T: Eq + Hash> Default for OverrideCost<T, UnitCost> {
    fn default() -> Self {
        Self::with_inner(UnitCost)
    }
}

impl<T, F> OverrideCost<T, MatchFnCost<T, F>>
where
    T: Eq + Hash,
    F: Fn(&T, &T) -> u32,
{
    /// Layer overrides over `fallback_match`, with unit insert and delete.
    pub fn new(fallback_match: F) -> Self {
        Self::with_inner(CostFns {
            match_fn: fallback_match,
            insert_fn: unit_insert::<T>,
            delete_fn: unit_delete::<T>,
        })
    }
}

impl<T, P> OverrideCost<T, P>
where
    T: Eq + Hash,
    P: CostPolicy<T>,
{
    /// Layer overrides over `fallback`, which also supplies insert and
    /// delete costs.
    pub fn with_inner(fallback: P) -> Self {
        Self::with_table(fallback, OverrideTable::new())
    }

    pub fn with_table(fallback: P, table: OverrideTable<T, P::Cost>) -> Self {
        Self { table, fallback }
    }

    /// See [`OverrideTable::register`].
    pub fn register(&mut self, v1: T, v2: T, cost: P::Cost) -> bool {
        self.table.register(v1, v2, cost)
    }

    /// See [`OverrideTable::register_symmetric`].
    pub fn register_symmetric(&mut self, v1: T, v2: T, cost: P::Cost) -> (bool, bool)
    where
        T: Clone,
    {
        self.table.register_symmetric(v1, v2, cost)
    }

    pub fn table(&self) -> &OverrideTable<T, P::Cost> {
        &self.table
    }

    pub fn fallback(&self) -> &P {
        &self.fallback
    }

    pub fn into_parts(self) -> (OverrideTable<T, P::Cost>, P) {
        (self.table, self.fallback)
    }
}

impl<T, P> CostPolicy<T> for OverrideCost<T, P>
where
    T: Eq + Hash,
    P: CostPolicy<T>,
{
    type Cost = P::Cost;

    #[inline]
    fn match_cost(&self, a: &T, b: &T) -> Self::Cost {
        match self.table.lookup(a, b) {
            Some(cost) => cost,
            None => self.fallback.match_cost(a, b),
        }
    }

    #[inline]
    fn insert_cost(&self, a: &T) -> Self::Cost {
        self.fallback.insert_cost(a)
    }

    #[inline]
    fn delete_cost(&self, b: &T) -> Self::Cost {
        self.fallback.delete_cost(b)
    }
}
