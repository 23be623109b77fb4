//! Greedy column balancing for masonry feeds.
//!
//! Items are taken in feed order and each one goes to the column with the
//! smallest score, where a column's score is its total weight multiplied by
//! the number of items already in it. Ties go to the lowest column index.
//!
//! [`relayout`] is a pure function of the items, the viewport width and the
//! previous state. When neither the item signature nor the column count has
//! changed, the previous state is handed back untouched so the UI does not
//! jitter.

use super::breakpoints::Breakpoints;
use super::weight::{LayoutItem, WeightStrategy};
use std::hash::{DefaultHasher, Hash, Hasher};
use tracing::{debug, trace};

/// One vertical bucket of the masonry layout.
///
/// Holds indices into the item slice the layout was computed from, in feed
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Column {
    items: Vec<usize>,
    total_weight: u64,
}

impl Column {
    /// Indices of the items assigned to this column, in feed order.
    pub fn items(&self) -> &[usize] {
        &self.items
    }

    /// Number of items in this column.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if no item was assigned here.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of the weights of the items in this column.
    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Placement score: total weight × item count.
    pub fn score(&self) -> u64 {
        self.total_weight.saturating_mul(self.items.len() as u64)
    }

    fn push(&mut self, index: usize, weight: u64) {
        self.items.push(index);
        self.total_weight = self.total_weight.saturating_add(weight);
    }
}

/// Knobs that decide how a layout is computed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutPolicy {
    /// Width → column count table.
    pub breakpoints: Breakpoints,
    /// Weight proxy for item height.
    pub weight: WeightStrategy,
}

impl LayoutPolicy {
    /// Create a policy.
    pub fn new(breakpoints: Breakpoints, weight: WeightStrategy) -> Self {
        Self {
            breakpoints,
            weight,
        }
    }
}

/// What the no-op check remembers about one item.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Fingerprint<K> {
    key: K,
    weight: u64,
    content: u64,
}

/// Result of a layout pass plus what it was computed from.
///
/// The signature holds the key, weight and a content hash of every item in
/// order. Two calls with equal signatures and equal column counts produce the
/// same columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutState<K> {
    columns: Vec<Column>,
    signature: Vec<Fingerprint<K>>,
}

impl<K: Clone + Eq> LayoutState<K> {
    fn compute(signature: Vec<Fingerprint<K>>, column_count: usize) -> Self {
        let columns = place(signature.iter().map(|item| item.weight), column_count);
        Self { columns, signature }
    }

    fn is_current(&self, signature: &[Fingerprint<K>], column_count: usize) -> bool {
        self.columns.len() == column_count && self.signature == signature
    }

    /// Columns in display order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of items laid out.
    pub fn item_count(&self) -> usize {
        self.signature.len()
    }

    /// Column holding the item at `index`, if any.
    pub fn column_of(&self, index: usize) -> Option<usize> {
        self.columns
            .iter()
            .position(|column| column.items.contains(&index))
    }

    /// Resolve column indices back to the items they point at.
    ///
    /// `items` must be the slice this state was computed from. Indices past
    /// the end of `items` are skipped.
    pub fn columns_of<'a, T>(&self, items: &'a [T]) -> Vec<Vec<&'a T>> {
        self.columns
            .iter()
            .map(|column| column.items.iter().filter_map(|&i| items.get(i)).collect())
            .collect()
    }
}

/// Distribute weights over `column_count` columns with the greedy rule.
///
/// A `column_count` of zero is treated as one.
pub fn place(weights: impl IntoIterator<Item = u64>, column_count: usize) -> Vec<Column> {
    let mut columns = vec![Column::default(); column_count.max(1)];

    for (index, weight) in weights.into_iter().enumerate() {
        // min_by_key keeps the first minimum, so ties go to the lowest index.
        let target = columns
            .iter()
            .enumerate()
            .min_by_key(|(_, column)| column.score())
            .map_or(0, |(i, _)| i);
        trace!(index, weight, target, "placing item");
        columns[target].push(index, weight);
    }

    columns
}

fn content_hash(text: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    hasher.finish()
}

fn signature<T: LayoutItem>(items: &[T], weight: WeightStrategy) -> Vec<Fingerprint<T::Key>> {
    items
        .iter()
        .map(|item| Fingerprint {
            key: item.layout_key(),
            weight: weight.weigh(item),
            content: content_hash(item.layout_text()),
        })
        .collect()
}

/// Lay out `items` for a viewport of `viewport_width`.
///
/// Returns `previous` unchanged if the item signature and the column count
/// are the same as last time; otherwise computes fresh columns.
pub fn relayout<T: LayoutItem>(
    items: &[T],
    viewport_width: i64,
    policy: &LayoutPolicy,
    previous: Option<LayoutState<T::Key>>,
) -> LayoutState<T::Key> {
    let column_count = policy.breakpoints.column_count(viewport_width);
    let signature = signature(items, policy.weight);

    match previous {
        Some(state) if state.is_current(&signature, column_count) => state,
        _ => LayoutState::compute(signature, column_count),
    }
}

/// What a call to [`FeedLayoutEngine::relayout`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutOutcome {
    /// Columns were rebuilt.
    Recomputed,
    /// Nothing relevant changed; the previous columns were kept.
    Unchanged,
}

/// Stateful host-side wrapper around [`relayout`].
///
/// Owns the policy and the last layout. Created when a view is first shown,
/// reset when it is torn down.
#[derive(Debug, Clone)]
pub struct FeedLayoutEngine<K> {
    policy: LayoutPolicy,
    state: Option<LayoutState<K>>,
    recompute_count: u64,
}

impl<K: Clone + Eq + std::fmt::Debug> FeedLayoutEngine<K> {
    /// Create an engine with no layout yet.
    pub fn new(policy: LayoutPolicy) -> Self {
        Self {
            policy,
            state: None,
            recompute_count: 0,
        }
    }

    /// Lay out `items` for `viewport_width`, reusing the last layout when
    /// nothing relevant changed.
    pub fn relayout<T>(&mut self, items: &[T], viewport_width: i64) -> LayoutOutcome
    where
        T: LayoutItem<Key = K>,
    {
        let column_count = self.policy.breakpoints.column_count(viewport_width);
        let signature = signature(items, self.policy.weight);

        if let Some(state) = &self.state {
            if state.is_current(&signature, column_count) {
                debug!(
                    viewport_width,
                    column_count,
                    items = items.len(),
                    "layout unchanged"
                );
                return LayoutOutcome::Unchanged;
            }
        }

        self.state = Some(LayoutState::compute(signature, column_count));
        self.recompute_count += 1;
        debug!(
            viewport_width,
            column_count,
            items = items.len(),
            recomputes = self.recompute_count,
            "layout recomputed"
        );
        LayoutOutcome::Recomputed
    }

    /// The current layout, if one was computed.
    pub fn state(&self) -> Option<&LayoutState<K>> {
        self.state.as_ref()
    }

    /// Current columns resolved to items. Empty before the first relayout.
    pub fn columns_of<'a, T>(&self, items: &'a [T]) -> Vec<Vec<&'a T>> {
        self.state
            .as_ref()
            .map(|state| state.columns_of(items))
            .unwrap_or_default()
    }

    /// How many times columns were actually rebuilt.
    pub fn recompute_count(&self) -> u64 {
        self.recompute_count
    }

    /// Drop the cached layout; the next relayout recomputes.
    pub fn reset(&mut self) {
        self.state = None;
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
