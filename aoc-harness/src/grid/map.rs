//! Immutable-size 2D character grid with an embedded cursor

use crate::error::GridError;
use crate::grid::Cursor;
use std::collections::HashMap;

/// A rectangular character grid built once from row input.
///
/// `(0, 0)` is the top-left cell; x grows rightward along a row and y grows
/// downward across rows. The embedded [`Cursor`] is the only mutable part
/// after construction; the cells themselves are never rewritten.
///
/// Construction validates that the rows are non-empty and rectangular. A
/// pre-built cell mapping supplied through [`Map::with_cells`] is trusted
/// as-is and not checked against the rows.
///
/// # Example
///
/// ```
/// use aoc_harness::grid::Map;
///
/// let mut map = Map::from_lines(&[".@", "@."]).unwrap();
/// assert_eq!(map.get(), ".@\n@.\n");
/// assert_eq!(map.get_at_cursor(), Some('.'));
/// map.cursor_mut().move_right();
/// assert!(map.cursor_equals('@'));
/// ```
#[derive(Debug, Clone)]
pub struct Map {
    rows: Vec<Vec<char>>,
    cells: HashMap<(i64, i64), char>,
    max_x: i64,
    max_y: i64,
    cursor: Cursor,
}

impl Map {
    /// Build a map with the cursor starting at `(0, 0)`.
    pub fn new(rows: Vec<Vec<char>>) -> Result<Self, GridError> {
        Self::with_start(rows, 0, 0)
    }

    /// Build a map with the cursor starting at `(start_x, start_y)`.
    ///
    /// The start position may lie outside the grid; the cursor tracks that
    /// the same way it tracks any other out-of-bounds position.
    pub fn with_start(rows: Vec<Vec<char>>, start_x: i64, start_y: i64) -> Result<Self, GridError> {
        let (max_x, max_y) = Self::validate(&rows)?;

        let mut cells = HashMap::with_capacity((max_x * max_y) as usize);
        for (y, row) in rows.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                cells.insert((x as i64, y as i64), value);
            }
        }

        Ok(Self {
            rows,
            cells,
            max_x,
            max_y,
            cursor: Cursor::new(start_x, start_y, max_x, max_y),
        })
    }

    /// Build a map reusing a pre-built cell mapping.
    ///
    /// The mapping is trusted as-is; it is not rebuilt from or validated
    /// against the rows.
    pub fn with_cells(
        rows: Vec<Vec<char>>,
        cells: HashMap<(i64, i64), char>,
        start_x: i64,
        start_y: i64,
    ) -> Result<Self, GridError> {
        let (max_x, max_y) = Self::validate(&rows)?;
        Ok(Self {
            rows,
            cells,
            max_x,
            max_y,
            cursor: Cursor::new(start_x, start_y, max_x, max_y),
        })
    }

    /// Build a map from newline-free string rows, cursor at `(0, 0)`.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self, GridError> {
        Self::new(
            lines
                .iter()
                .map(|line| line.as_ref().chars().collect())
                .collect(),
        )
    }

    fn validate(rows: &[Vec<char>]) -> Result<(i64, i64), GridError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(GridError::Empty);
        }
        let expected = rows[0].len();
        for (row, contents) in rows.iter().enumerate().skip(1) {
            if contents.len() != expected {
                return Err(GridError::Ragged {
                    row,
                    len: contents.len(),
                    expected,
                });
            }
        }
        Ok((expected as i64, rows.len() as i64))
    }

    /// Width of the grid (length of the first row)
    pub fn max_x(&self) -> i64 {
        self.max_x
    }

    /// Height of the grid (number of rows)
    pub fn max_y(&self) -> i64 {
        self.max_y
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    /// Value stored at `(x, y)`, if the coordinate is mapped
    pub fn value_at(&self, x: i64, y: i64) -> Option<char> {
        self.cells.get(&(x, y)).copied()
    }

    /// Serialize the grid back to a newline-delimited string.
    ///
    /// One line per row in original row order; with the default cell
    /// mapping this is the exact inverse of the construction scan.
    pub fn get(&self) -> String {
        let mut full_map = String::with_capacity(((self.max_x + 1) * self.max_y) as usize);
        for y in 0..self.max_y {
            for x in 0..self.max_x {
                if let Some(value) = self.cells.get(&(x, y)) {
                    full_map.push(*value);
                }
            }
            full_map.push('\n');
        }
        full_map
    }

    /// Value under the cursor, or `None` when either axis is out of bounds
    pub fn get_at_cursor(&self) -> Option<char> {
        if self.cursor.outside_bound_x() {
            return None;
        }
        if self.cursor.outside_bound_y() {
            return None;
        }
        self.cells.get(&self.cursor.as_tuple()).copied()
    }

    /// Whether the cursor is in-map and sitting on `value`.
    ///
    /// A cursor outside the map never equals anything.
    pub fn cursor_equals(&self, value: char) -> bool {
        self.cursor.is_in_map() && self.get_at_cursor() == Some(value)
    }

    /// The rows the map was built from
    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<Vec<char>> {
        vec![
            "..@@.".chars().collect(),
            "@@@.@".chars().collect(),
            "@@@@@".chars().collect(),
            "@.@@@".chars().collect(),
            "@@.@@".chars().collect(),
        ]
    }

    #[test]
    fn test_construction_derives_dimensions_and_cells() {
        let map = Map::with_start(sample_rows(), 0, 2).unwrap();
        assert_eq!(map.max_x(), 5);
        assert_eq!(map.max_y(), 5);
        assert_eq!(map.cursor().as_tuple(), (0, 2));
        assert_eq!(map.value_at(0, 0), Some('.'));
        assert_eq!(map.value_at(2, 0), Some('@'));
        assert_eq!(map.value_at(1, 3), Some('.'));
        assert_eq!(map.value_at(5, 0), None);
    }

    #[test]
    fn test_empty_and_ragged_rows_rejected() {
        assert_eq!(Map::new(vec![]).unwrap_err(), GridError::Empty);
        assert_eq!(Map::from_lines(&[""]).unwrap_err(), GridError::Empty);

        let err = Map::from_lines(&["abc", "ab"]).unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                row: 1,
                len: 2,
                expected: 3
            }
        );
    }

    #[test]
    fn test_get_reproduces_rows() {
        let map = Map::new(sample_rows()).unwrap();
        assert_eq!(map.get(), "..@@.\n@@@.@\n@@@@@\n@.@@@\n@@.@@\n");
    }

    #[test]
    fn test_get_at_cursor_follows_moves() {
        let mut map = Map::from_lines(&[".@", "@."]).unwrap();
        assert_eq!(map.get(), ".@\n@.\n");
        assert_eq!(map.get_at_cursor(), Some('.'));

        map.cursor_mut().move_right();
        assert_eq!(map.get_at_cursor(), Some('@'));

        map.cursor_mut().move_down();
        assert_eq!(map.cursor().as_tuple(), (1, 1));
        assert!(map.cursor().is_in_map());
        assert_eq!(map.get_at_cursor(), Some('.'));

        map.cursor_mut().move_down();
        assert_eq!(map.get_at_cursor(), None);
    }

    #[test]
    fn test_cursor_equals_requires_in_map() {
        let mut map = Map::from_lines(&[".@", "@."]).unwrap();
        assert!(map.cursor_equals('.'));
        assert!(!map.cursor_equals('@'));

        map.cursor_mut().move_left();
        assert!(!map.cursor_equals('.'));
        assert!(!map.cursor_equals('@'));
    }

    #[test]
    fn test_with_cells_trusted_as_is() {
        let mut cells = HashMap::new();
        cells.insert((0, 0), 'x');
        // Deliberately missing (1, 0), (0, 1), (1, 1)
        let mut map = Map::with_cells(vec![vec!['.', '@'], vec!['@', '.']], cells, 0, 0).unwrap();
        assert_eq!(map.get_at_cursor(), Some('x'));
        map.cursor_mut().move_right();
        assert_eq!(map.get_at_cursor(), None);
        assert_eq!(map.get(), "x\n\n");
    }
}
