//! Property-based tests for the table controller.

mod common;

use common::{Product, columns};
use gridview::{PageSize, SortGesture, TableController};
use proptest::prelude::*;

fn products() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec(("[a-cA-C]{0,4}", 0i64..5), 0..60).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, stock))| Product::new(i as u32, &name, "Misc", stock as f64, stock))
            .collect()
    })
}

#[derive(Debug, Clone)]
enum Op {
    Next,
    Previous,
    Jump(usize),
    PageSize(usize),
    Filter(String),
    Sort(&'static str, bool),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Next),
        Just(Op::Previous),
        (0usize..10).prop_map(Op::Jump),
        prop::sample::select(vec![10usize, 20, 30, 40, 50]).prop_map(Op::PageSize),
        "[abc]{0,2}".prop_map(Op::Filter),
        (prop::sample::select(vec!["name", "price", "stock"]), any::<bool>())
            .prop_map(|(column, additive)| Op::Sort(column, additive)),
    ]
}

fn apply(table: &mut TableController<Product>, op: Op) {
    match op {
        Op::Next => table.next_page(),
        Op::Previous => table.previous_page(),
        Op::Jump(index) => table.set_page_index(index),
        Op::PageSize(size) => table.set_page_size(size).unwrap(),
        Op::Filter(text) => table.set_filter_text(text).unwrap(),
        Op::Sort(column, additive) => {
            let gesture = if additive {
                SortGesture::Additive
            } else {
                SortGesture::Replace
            };
            table.set_sort(column, gesture).unwrap();
        }
    }
}

proptest! {
    /// Filtered rows are exactly the rows whose name contains the text.
    #[test]
    fn prop_filter_containment(rows in products(), text in "[abcABC]{0,2}") {
        let mut table = TableController::new(columns(), rows.clone());
        table.set_filter_text(text.clone()).unwrap();

        let needle = text.to_lowercase();
        let expected: Vec<u32> = rows
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .map(|p| p.id)
            .collect();
        let actual: Vec<u32> = table.filtered_rows().map(|p| p.id).collect();
        prop_assert_eq!(actual, expected);
    }

    /// Sorting orders by the key and keeps source order among ties.
    #[test]
    fn prop_sort_is_ordered_and_stable(rows in products(), descending in any::<bool>()) {
        let mut table = TableController::new(columns(), rows);
        table.set_sort("stock", SortGesture::Replace).unwrap();
        if descending {
            table.set_sort("stock", SortGesture::Replace).unwrap();
        }

        let sorted: Vec<&Product> = table.filtered_rows().collect();
        for pair in sorted.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a.stock == b.stock {
                prop_assert!(a.id < b.id);
            } else if descending {
                prop_assert!(a.stock > b.stock);
            } else {
                prop_assert!(a.stock < b.stock);
            }
        }
    }

    /// Walking every page yields the filtered rows exactly once, in order.
    #[test]
    fn prop_pages_concatenate(
        rows in products(),
        size in prop::sample::select(PageSize::OPTIONS.to_vec()),
    ) {
        let mut table = TableController::new(columns(), rows);
        table.set_page_size(size.get()).unwrap();

        let mut seen = Vec::new();
        for index in 0..table.page_count() {
            table.set_page_index(index);
            let page: Vec<u32> = table.page_rows().map(|p| p.id).collect();
            prop_assert!(page.len() <= size.get());
            prop_assert!(!page.is_empty());
            seen.extend(page);
        }
        let all: Vec<u32> = table.filtered_rows().map(|p| p.id).collect();
        prop_assert_eq!(seen, all);
    }

    /// The page cursor stays in range after any sequence of operations.
    #[test]
    fn prop_page_index_in_range(rows in products(), ops in prop::collection::vec(op(), 0..30)) {
        let mut table = TableController::new(columns(), rows);
        for op in ops {
            apply(&mut table, op);
            let view = table.view();
            prop_assert!(view.page_index < view.display_page_count);
            prop_assert!(view.rows.len() <= view.page_size.get());
            prop_assert_eq!(view.can_next_page, view.page_index + 1 < view.page_count);
        }
    }

    /// Hiding then showing a column restores the visible set.
    #[test]
    fn prop_visibility_round_trip(column in prop::sample::select(vec!["name", "category", "price", "stock"])) {
        let mut table = TableController::new(columns(), Vec::new());
        let before: Vec<String> = table.visible_columns().iter().map(|c| c.id.clone()).collect();

        table.toggle_column_visibility(column, false).unwrap();
        prop_assert!(!table.is_column_visible(column));
        table.toggle_column_visibility(column, true).unwrap();

        let after: Vec<String> = table.visible_columns().iter().map(|c| c.id.clone()).collect();
        prop_assert_eq!(before, after);
    }
}
