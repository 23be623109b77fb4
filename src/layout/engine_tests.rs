//! Tests for the greedy column engine.

use super::*;
use crate::layout::breakpoints::Breakpoint;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Post {
    id: u32,
    text: String,
}

impl LayoutItem for Post {
    type Key = u32;

    fn layout_key(&self) -> u32 {
        self.id
    }

    fn layout_text(&self) -> &str {
        &self.text
    }
}

fn posts(lengths: &[usize]) -> Vec<Post> {
    lengths
        .iter()
        .enumerate()
        .map(|(i, &len)| Post {
            id: i as u32,
            text: "x".repeat(len),
        })
        .collect()
}

fn assignment(state: &LayoutState<u32>) -> Vec<Vec<usize>> {
    state.columns().iter().map(|c| c.items().to_vec()).collect()
}

// ===== Concrete scenarios =====

#[test]
fn equal_items_spread_one_per_column() {
    let items = posts(&[10, 10, 10, 10]);
    let state = relayout(&items, 1200, &LayoutPolicy::default(), None);

    assert_eq!(assignment(&state), vec![vec![0], vec![1], vec![2], vec![3]]);
}

#[test]
fn heavy_first_item_pushes_followers_to_second_column() {
    let items = posts(&[50, 10, 10]);
    let state = relayout(&items, 768, &LayoutPolicy::default(), None);

    assert_eq!(assignment(&state), vec![vec![0], vec![1, 2]]);
    assert_eq!(state.columns()[0].score(), 50);
    assert_eq!(state.columns()[1].score(), 40);
}

#[test]
fn score_multiplies_weight_by_count() {
    // col0: 10 → score 10; col1: 3 → score 3; third item goes to col1 (3*1 < 10*1)
    // col1: 3+3=6, two items → score 12 > 10, fourth item goes to col0.
    let items = posts(&[10, 3, 3, 1]);
    let state = relayout(&items, 768, &LayoutPolicy::default(), None);

    assert_eq!(assignment(&state), vec![vec![0, 3], vec![1, 2]]);
}

#[test]
fn empty_items_give_empty_columns() {
    let items: Vec<Post> = Vec::new();
    for (width, expected) in [(0, 1), (768, 2), (992, 3), (1200, 4)] {
        let state = relayout(&items, width, &LayoutPolicy::default(), None);
        assert_eq!(state.column_count(), expected);
        assert!(state.columns().iter().all(Column::is_empty));
    }
}

#[test]
fn fewer_items_than_columns_leaves_trailing_columns_empty() {
    let items = posts(&[5, 7]);
    let state = relayout(&items, 1300, &LayoutPolicy::default(), None);

    assert_eq!(state.column_count(), 4);
    assert_eq!(assignment(&state), vec![vec![0], vec![1], vec![], vec![]]);
}

#[test]
fn zero_weight_items_tie_at_zero_and_stack_in_first_column() {
    // Empty posts never raise a column's score above zero.
    let items = posts(&[0, 0, 0]);
    let state = relayout(&items, 768, &LayoutPolicy::default(), None);

    assert_eq!(assignment(&state), vec![vec![0, 1, 2], vec![]]);
}

#[test]
fn negative_width_is_single_column() {
    let items = posts(&[1, 2, 3]);
    let state = relayout(&items, -40, &LayoutPolicy::default(), None);

    assert_eq!(assignment(&state), vec![vec![0, 1, 2]]);
}

// ===== Idempotence =====

#[test]
fn unchanged_inputs_return_previous_state() {
    let items = posts(&[20, 5, 9, 14]);
    let policy = LayoutPolicy::default();

    let first = relayout(&items, 1000, &policy, None);
    let second = relayout(&items, 1000, &policy, Some(first.clone()));

    assert_eq!(first, second);
}

#[test]
fn width_change_within_same_bucket_keeps_layout() {
    let items = posts(&[20, 5, 9, 14]);
    let mut engine = FeedLayoutEngine::new(LayoutPolicy::default());

    assert_eq!(engine.relayout(&items, 1000), LayoutOutcome::Recomputed);
    assert_eq!(engine.relayout(&items, 1100), LayoutOutcome::Unchanged);
    assert_eq!(engine.recompute_count(), 1);
}

#[test]
fn width_change_across_bucket_recomputes() {
    let items = posts(&[20, 5, 9, 14]);
    let mut engine = FeedLayoutEngine::new(LayoutPolicy::default());

    engine.relayout(&items, 1000);
    assert_eq!(engine.relayout(&items, 1250), LayoutOutcome::Recomputed);
    assert_eq!(engine.state().map(LayoutState::column_count), Some(4));
}

#[test]
fn added_item_recomputes() {
    let mut items = posts(&[20, 5, 9]);
    let mut engine = FeedLayoutEngine::new(LayoutPolicy::default());
    engine.relayout(&items, 800);

    items.push(Post {
        id: 99,
        text: "new post".to_string(),
    });

    assert_eq!(engine.relayout(&items, 800), LayoutOutcome::Recomputed);
    assert_eq!(engine.state().map(LayoutState::item_count), Some(4));
}

#[test]
fn removed_item_recomputes() {
    let mut items = posts(&[20, 5, 9]);
    let mut engine = FeedLayoutEngine::new(LayoutPolicy::default());
    engine.relayout(&items, 800);

    items.remove(0);

    assert_eq!(engine.relayout(&items, 800), LayoutOutcome::Recomputed);
}

#[test]
fn edited_content_recomputes() {
    let mut items = posts(&[20, 5, 9]);
    let mut engine = FeedLayoutEngine::new(LayoutPolicy::default());
    engine.relayout(&items, 800);

    items[1].text.push_str(" edited");

    assert_eq!(engine.relayout(&items, 800), LayoutOutcome::Recomputed);
}

#[test]
fn same_length_edit_recomputes() {
    let mut items = posts(&[20, 5, 9]);
    let mut engine = FeedLayoutEngine::new(LayoutPolicy::default());
    engine.relayout(&items, 800);

    items[1].text = "typo!".to_string();

    assert_eq!(engine.relayout(&items, 800), LayoutOutcome::Recomputed);
    assert_eq!(engine.recompute_count(), 2);
}

#[test]
fn rebuilt_identical_items_are_noop() {
    let mut engine = FeedLayoutEngine::new(LayoutPolicy::default());
    engine.relayout(&posts(&[20, 5, 9]), 800);

    assert_eq!(engine.relayout(&posts(&[20, 5, 9]), 800), LayoutOutcome::Unchanged);
    assert_eq!(engine.recompute_count(), 1);
}

#[test]
fn reordered_items_recompute() {
    let mut items = posts(&[20, 5, 9]);
    let mut engine = FeedLayoutEngine::new(LayoutPolicy::default());
    engine.relayout(&items, 800);

    items.swap(0, 2);

    assert_eq!(engine.relayout(&items, 800), LayoutOutcome::Recomputed);
}

#[test]
fn reset_forces_recompute() {
    let items = posts(&[1, 2]);
    let mut engine = FeedLayoutEngine::new(LayoutPolicy::default());
    engine.relayout(&items, 800);
    engine.reset();

    assert!(engine.state().is_none());
    assert_eq!(engine.relayout(&items, 800), LayoutOutcome::Recomputed);
    assert_eq!(engine.recompute_count(), 2);
}

// ===== Resolution back to items =====

#[test]
fn columns_of_returns_the_same_items() {
    let items = posts(&[50, 10, 10]);
    let state = relayout(&items, 768, &LayoutPolicy::default(), None);
    let columns = state.columns_of(&items);

    assert_eq!(columns.len(), 2);
    assert!(std::ptr::eq(columns[0][0], &items[0]));
    assert!(std::ptr::eq(columns[1][0], &items[1]));
    assert!(std::ptr::eq(columns[1][1], &items[2]));
}

#[test]
fn engine_columns_of_is_empty_before_first_layout() {
    let items = posts(&[3]);
    let engine: FeedLayoutEngine<u32> = FeedLayoutEngine::new(LayoutPolicy::default());

    assert!(engine.columns_of(&items).is_empty());
}

#[test]
fn column_of_finds_assigned_column() {
    let items = posts(&[50, 10, 10]);
    let state = relayout(&items, 768, &LayoutPolicy::default(), None);

    assert_eq!(state.column_of(0), Some(0));
    assert_eq!(state.column_of(2), Some(1));
    assert_eq!(state.column_of(3), None);
}

// ===== Policy =====

#[test]
fn display_width_policy_changes_weights() {
    let items = vec![
        Post {
            id: 1,
            text: "日本語日本語".to_string(),
        },
        Post {
            id: 2,
            text: "abcdefghij".to_string(),
        },
        Post {
            id: 3,
            text: "z".to_string(),
        },
    ];

    // Chars: 6 vs 10 → third item joins column 0.
    let by_chars = relayout(&items, 768, &LayoutPolicy::default(), None);
    assert_eq!(assignment(&by_chars), vec![vec![0, 2], vec![1]]);

    // Display width: 12 vs 10 → third item joins column 1.
    let policy = LayoutPolicy::new(Breakpoints::default(), WeightStrategy::DisplayWidth);
    let by_width = relayout(&items, 768, &policy, None);
    assert_eq!(assignment(&by_width), vec![vec![0], vec![1, 2]]);
}

#[test]
fn custom_breakpoints_drive_column_count() {
    let breakpoints = Breakpoints::new([Breakpoint::new(100, 5)]).unwrap();
    let policy = LayoutPolicy::new(breakpoints, WeightStrategy::Chars);
    let items = posts(&[1, 1, 1, 1, 1, 1]);

    let state = relayout(&items, 100, &policy, None);
    assert_eq!(state.column_count(), 5);
    assert_eq!(state.columns()[0].items(), &[0, 5]);
}

#[test]
fn place_treats_zero_columns_as_one() {
    let columns = place([4, 4], 0);
    assert_eq!(columns.len(), 1);
    assert_eq!(columns[0].items(), &[0, 1]);
    assert_eq!(columns[0].total_weight(), 8);
}

#[test]
fn score_saturates_instead_of_overflowing() {
    let columns = place([u64::MAX, u64::MAX, 1], 1);
    assert_eq!(columns[0].total_weight(), u64::MAX);
    assert_eq!(columns[0].score(), u64::MAX);
}
