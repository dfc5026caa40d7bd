// File: crates/barchart-core/src/reconcile.rs
// Summary: Keyed enter/update/exit reconciliation between drawn shapes and fresh data.
// Notes:
// - Works over any shape type `S`; the bar chart uses scene nodes, tests use plain values.
// - Duplicate keys follow first-wins: a repeated datum key enters as a new shape, a
//   repeated existing key exits.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::view_model::DataPoint;

/// Outcome of matching existing shapes against new data.
#[derive(Debug)]
pub struct Join<'d, K, D, S> {
    /// Data with no existing shape, with their index in `data`.
    pub enter: Vec<(usize, K, &'d D)>,
    /// Data matched to an existing shape.
    pub update: Vec<(usize, K, &'d D, S)>,
    /// Shapes whose key is absent from the new data, in their previous order.
    pub exit: Vec<(K, S)>,
}

/// Match `existing` keyed shapes against `data` keyed by `key`.
pub fn join<'d, K, D, S>(
    existing: Vec<(K, S)>,
    data: &'d [D],
    key: impl Fn(usize, &D) -> K,
) -> Join<'d, K, D, S>
where
    K: Eq + Hash + Clone,
{
    let mut exit = Vec::new();
    let mut by_key: HashMap<K, (usize, S)> = HashMap::with_capacity(existing.len());
    let mut order = Vec::with_capacity(existing.len());
    for (i, (k, s)) in existing.into_iter().enumerate() {
        if by_key.contains_key(&k) {
            exit.push((i, k, s));
        } else {
            order.push(k.clone());
            by_key.insert(k, (i, s));
        }
    }

    let mut enter = Vec::new();
    let mut update = Vec::new();
    let mut seen: HashSet<K> = HashSet::with_capacity(data.len());
    for (i, d) in data.iter().enumerate() {
        let k = key(i, d);
        if !seen.insert(k.clone()) {
            enter.push((i, k, d));
            continue;
        }
        match by_key.remove(&k) {
            Some((_, s)) => update.push((i, k, d, s)),
            None => enter.push((i, k, d)),
        }
    }

    for k in order {
        if let Some((i, s)) = by_key.remove(&k) {
            exit.push((i, k, s));
        }
    }
    exit.sort_by_key(|(i, _, _)| *i);

    Join {
        enter,
        update,
        exit: exit.into_iter().map(|(_, k, s)| (k, s)).collect(),
    }
}

/// Counts from one reconciliation pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JoinStats {
    pub entered: usize,
    pub updated: usize,
    pub exited: usize,
}

/// Shapes tracked by key, kept in the order of the data last applied.
#[derive(Debug)]
pub struct KeyedShapes<K, S> {
    entries: Vec<(K, S)>,
}

impl<K, S> Default for KeyedShapes<K, S> {
    fn default() -> Self { Self { entries: Vec::new() } }
}

impl<K: Eq + Hash + Clone, S> KeyedShapes<K, S> {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn shapes(&self) -> impl Iterator<Item = &S> {
        self.entries.iter().map(|(_, s)| s)
    }

    /// Forget every tracked shape and hand them back.
    pub fn clear(&mut self) -> Vec<(K, S)> {
        std::mem::take(&mut self.entries)
    }

    /// Reconcile against `data`: `enter` creates a shape for new keys, `update`
    /// refreshes matched shapes, `exit` disposes of shapes whose key vanished.
    pub fn apply<D>(
        &mut self,
        data: &[D],
        key: impl Fn(usize, &D) -> K,
        mut enter: impl FnMut(usize, &D) -> S,
        mut update: impl FnMut(usize, &D, &S),
        mut exit: impl FnMut(S),
    ) -> JoinStats {
        let joined = join(std::mem::take(&mut self.entries), data, key);
        let stats = JoinStats {
            entered: joined.enter.len(),
            updated: joined.update.len(),
            exited: joined.exit.len(),
        };
        for (_, s) in joined.exit {
            exit(s);
        }
        let mut next: Vec<(usize, K, S)> = Vec::with_capacity(data.len());
        for (i, k, d, s) in joined.update {
            update(i, d, &s);
            next.push((i, k, s));
        }
        for (i, k, d) in joined.enter {
            let s = enter(i, d);
            next.push((i, k, s));
        }
        next.sort_by_key(|(i, _, _)| *i);
        self.entries = next.into_iter().map(|(_, k, s)| (k, s)).collect();
        stats
    }
}

/// How bars are matched to data points across updates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarKey {
    /// By position in the row sequence.
    #[default]
    Index,
    /// By category label.
    Category,
}

/// Key a bar is tracked under.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum BarId {
    Index(usize),
    Category(String),
}

impl BarKey {
    pub fn id(self, index: usize, point: &DataPoint) -> BarId {
        match self {
            BarKey::Index => BarId::Index(index),
            BarKey::Category => BarId::Category(point.category.clone()),
        }
    }
}
