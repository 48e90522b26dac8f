//! Bounded 2D cursor

use std::fmt;

/// A single (x, y) position with fixed grid bounds.
///
/// Coordinates are signed and never clamped: movement may leave the grid
/// and keep going, with the out-of-bounds state tracked by the bound flags.
/// The flags are cached and recomputed on every mutation, so they are never
/// stale; an axis is out of bounds when its coordinate is negative or at or
/// past its maximum.
///
/// # Example
///
/// ```
/// use aoc_harness::grid::Cursor;
///
/// let mut cursor = Cursor::new(0, 0, 3, 3);
/// assert!(cursor.is_in_map());
/// cursor.move_left();
/// assert!(cursor.outside_bound_x());
/// cursor.move_right();
/// assert_eq!(cursor.as_tuple(), (0, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    x: i64,
    y: i64,
    max_x: i64,
    max_y: i64,
    outside_bound_x: bool,
    outside_bound_y: bool,
}

impl Cursor {
    /// Create a cursor at `(x, y)` with exclusive upper bounds `(max_x, max_y)`.
    pub fn new(x: i64, y: i64, max_x: i64, max_y: i64) -> Self {
        let mut cursor = Self {
            x,
            y,
            max_x,
            max_y,
            outside_bound_x: false,
            outside_bound_y: false,
        };
        cursor.outside_bound_x = cursor.compute_outside_x();
        cursor.outside_bound_y = cursor.compute_outside_y();
        cursor
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn y(&self) -> i64 {
        self.y
    }

    pub fn max_x(&self) -> i64 {
        self.max_x
    }

    pub fn max_y(&self) -> i64 {
        self.max_y
    }

    /// Current position as `(x, y)`
    pub fn as_tuple(&self) -> (i64, i64) {
        (self.x, self.y)
    }

    /// Whether both axes are within bounds
    pub fn is_in_map(&self) -> bool {
        !self.outside_bound_x && !self.outside_bound_y
    }

    /// Cached flag: x is negative or at/past `max_x`
    pub fn outside_bound_x(&self) -> bool {
        self.outside_bound_x
    }

    /// Cached flag: y is negative or at/past `max_y`
    pub fn outside_bound_y(&self) -> bool {
        self.outside_bound_y
    }

    /// Decrement x by one
    pub fn move_left(&mut self) {
        self.x -= 1;
        self.outside_bound_x = self.compute_outside_x();
    }

    /// Decrement y by one
    pub fn move_up(&mut self) {
        self.y -= 1;
        self.outside_bound_y = self.compute_outside_y();
    }

    /// Increment x by one
    pub fn move_right(&mut self) {
        self.x += 1;
        self.outside_bound_x = self.compute_outside_x();
    }

    /// Increment y by one
    pub fn move_down(&mut self) {
        self.y += 1;
        self.outside_bound_y = self.compute_outside_y();
    }

    /// Replace both coordinates, leaving the bounds unchanged
    pub fn jump_to(&mut self, x: i64, y: i64) {
        self.x = x;
        self.y = y;
        self.outside_bound_x = self.compute_outside_x();
        self.outside_bound_y = self.compute_outside_y();
    }

    fn compute_outside_x(&self) -> bool {
        self.x < 0 || self.x >= self.max_x
    }

    fn compute_outside_y(&self) -> bool {
        self.y < 0 || self.y >= self.max_y
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) within ({}, {})",
            self.x, self.y, self.max_x, self.max_y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_computes_flags() {
        let cursor = Cursor::new(1, 2, 5, 5);
        assert!(!cursor.outside_bound_x());
        assert!(!cursor.outside_bound_y());
        assert!(cursor.is_in_map());

        let outside = Cursor::new(5, -1, 5, 5);
        assert!(outside.outside_bound_x());
        assert!(outside.outside_bound_y());
        assert!(!outside.is_in_map());
    }

    #[test]
    fn test_moves_update_position_and_flags() {
        let mut cursor = Cursor::new(0, 0, 2, 2);

        cursor.move_left();
        assert_eq!(cursor.as_tuple(), (-1, 0));
        assert!(cursor.outside_bound_x());
        assert!(!cursor.outside_bound_y());

        cursor.move_right();
        cursor.move_right();
        cursor.move_right();
        assert_eq!(cursor.as_tuple(), (2, 0));
        assert!(cursor.outside_bound_x());

        cursor.move_down();
        cursor.move_up();
        cursor.move_up();
        assert_eq!(cursor.as_tuple(), (2, -1));
        assert!(cursor.outside_bound_y());
    }

    #[test]
    fn test_jump_to_replaces_both_axes() {
        let mut cursor = Cursor::new(10, 10, 3, 3);
        assert!(!cursor.is_in_map());

        cursor.jump_to(2, 0);
        assert_eq!(cursor.as_tuple(), (2, 0));
        assert!(cursor.is_in_map());

        cursor.jump_to(-4, 7);
        assert!(cursor.outside_bound_x());
        assert!(cursor.outside_bound_y());
    }

    #[test]
    fn test_display() {
        let cursor = Cursor::new(1, 2, 5, 6);
        assert_eq!(cursor.to_string(), "(1, 2) within (5, 6)");
    }
}
