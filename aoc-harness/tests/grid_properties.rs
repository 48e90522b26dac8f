//! Property-based tests for the grid map

use aoc_harness::grid::Map;
use proptest::prelude::*;

fn rectangular_rows() -> impl Strategy<Value = Vec<Vec<char>>> {
    (1usize..12, 1usize..12).prop_flat_map(|(height, width)| {
        prop::collection::vec(
            prop::collection::vec(prop::char::range('!', '~'), width),
            height,
        )
    })
}

proptest! {
    /// For an R x C rectangular input, `get()` reproduces exactly R lines
    /// each of length C, in original row order.
    #[test]
    fn prop_get_reproduces_rows(rows in rectangular_rows()) {
        let height = rows.len();
        let width = rows[0].len();
        let map = Map::new(rows.clone()).unwrap();

        let rendered = map.get();
        let lines: Vec<&str> = rendered.lines().collect();
        prop_assert_eq!(lines.len(), height);
        for (line, row) in lines.iter().zip(&rows) {
            prop_assert_eq!(line.chars().count(), width);
            prop_assert_eq!(line.chars().collect::<Vec<char>>(), row.clone());
        }
        prop_assert!(rendered.ends_with('\n'));
    }

    /// `get_at_cursor()` is absent exactly when the cursor is out of map,
    /// for every reachable position including negative and overflowing
    /// coordinates.
    #[test]
    fn prop_cursor_value_matches_bounds(
        rows in rectangular_rows(),
        x in -15i64..15,
        y in -15i64..15,
    ) {
        let map = Map::with_start(rows.clone(), x, y).unwrap();

        match map.get_at_cursor() {
            None => prop_assert!(!map.cursor().is_in_map()),
            Some(value) => {
                prop_assert!(map.cursor().is_in_map());
                prop_assert_eq!(value, rows[y as usize][x as usize]);
                prop_assert!(map.cursor_equals(value));
            }
        }
    }

    /// An out-of-map cursor never equals any value.
    #[test]
    fn prop_outside_cursor_equals_nothing(
        rows in rectangular_rows(),
        y in -15i64..0,
        probe in prop::char::range('!', '~'),
    ) {
        let map = Map::with_start(rows, 0, y).unwrap();
        prop_assert!(!map.cursor_equals(probe));
    }
}
