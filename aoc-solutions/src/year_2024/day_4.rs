//! 2024 day 4: word search on a character grid

use aoc_harness::grid::Map;
use aoc_harness::{InputFormat, RunContext, SolveError, Solver, SolverPlugin};

inventory::submit! {
    SolverPlugin::new(2024, 4, || Ok(Box::new(Day4::default())), &["2024", "grid"])
}

const WORD: [char; 4] = ['X', 'M', 'A', 'S'];

/// All eight scan directions as unit steps
const DIRECTIONS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[derive(Default)]
pub struct Day4 {
    map_a: Option<Map>,
    map_b: Option<Map>,
}

impl Solver for Day4 {
    fn input_format(&self) -> InputFormat {
        InputFormat::CharRows
    }

    fn preprocess(&mut self, ctx: &mut RunContext<'_>) -> Result<(), SolveError> {
        let rows_a = ctx.input_a().as_char_rows().unwrap_or_default().to_vec();
        let rows_b = ctx.input_b().as_char_rows().unwrap_or_default().to_vec();
        let map_a = Map::new(rows_a).map_err(SolveError::failed)?;
        let map_b = Map::new(rows_b).map_err(SolveError::failed)?;
        ctx.log(
            format!("{}x{}", map_a.max_x(), map_a.max_y()),
            "grid dimensions",
        );
        self.map_a = Some(map_a);
        self.map_b = Some(map_b);
        Ok(())
    }

    fn solve_a(&mut self, ctx: &mut RunContext<'_>) -> Result<String, SolveError> {
        let map = self.map_a.as_mut().ok_or(SolveError::NotImplemented)?;
        let count = count_word(map, &WORD);
        ctx.log(count, "words found");
        Ok(count.to_string())
    }

    fn solve_b(&mut self, _ctx: &mut RunContext<'_>) -> Result<String, SolveError> {
        let map = self.map_b.as_ref().ok_or(SolveError::NotImplemented)?;
        Ok(count_crosses(map).to_string())
    }
}

/// Count every occurrence of `word` along any of the eight directions,
/// walking the map's cursor cell by cell
fn count_word(map: &mut Map, word: &[char]) -> usize {
    let mut count = 0;
    for y in 0..map.max_y() {
        for x in 0..map.max_x() {
            for (dx, dy) in DIRECTIONS {
                if word_at(map, x, y, dx, dy, word) {
                    count += 1;
                }
            }
        }
    }
    count
}

fn word_at(map: &mut Map, x: i64, y: i64, dx: i64, dy: i64, word: &[char]) -> bool {
    map.cursor_mut().jump_to(x, y);
    for (i, &letter) in word.iter().enumerate() {
        if i > 0 {
            step(map, dx, dy);
        }
        // An out-of-map cursor can never match, so walking off the edge
        // simply fails the candidate
        if !map.cursor_equals(letter) {
            return false;
        }
    }
    true
}

fn step(map: &mut Map, dx: i64, dy: i64) {
    match dx {
        -1 => map.cursor_mut().move_left(),
        1 => map.cursor_mut().move_right(),
        _ => {}
    }
    match dy {
        -1 => map.cursor_mut().move_up(),
        1 => map.cursor_mut().move_down(),
        _ => {}
    }
}

/// Count cells where two diagonal "MAS" runs cross on the 'A'
fn count_crosses(map: &Map) -> usize {
    let mut count = 0;
    for y in 0..map.max_y() {
        for x in 0..map.max_x() {
            if is_cross(map, x, y) {
                count += 1;
            }
        }
    }
    count
}

fn is_cross(map: &Map, x: i64, y: i64) -> bool {
    if map.value_at(x, y) != Some('A') {
        return false;
    }
    let falling = (map.value_at(x - 1, y - 1), map.value_at(x + 1, y + 1));
    let rising = (map.value_at(x + 1, y - 1), map.value_at(x - 1, y + 1));
    is_mas(falling) && is_mas(rising)
}

fn is_mas(ends: (Option<char>, Option<char>)) -> bool {
    matches!(ends, (Some('M'), Some('S')) | (Some('S'), Some('M')))
}
