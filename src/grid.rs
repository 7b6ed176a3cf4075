use anyhow::{bail, Result};
use itertools::Itertools;
use std::fmt::{self, Display, Formatter};

pub type Digit = u8; // 0 = empty; 1..=9 digits

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos { pub r: usize, pub c: usize }

impl Pos { pub fn idx(self) -> usize { self.r * 9 + self.c } }

/// 9x9 grid as a plain value type. Nothing here enforces the Sudoku
/// constraints on writes; the solver and generator go through
/// `can_place` before placing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub(crate) cells: [Digit; 81],
}

impl Grid {
    pub fn empty() -> Self { Self { cells: [0; 81] } }

    pub fn from_rows(rows: [[u8; 9]; 9]) -> Self {
        let mut g = Grid::empty();
        for r in 0..9 { for c in 0..9 { g.cells[r * 9 + c] = rows[r][c]; } }
        g
    }

    pub fn from_compact(s: &str) -> Result<Self> {
        if s.len() != 81 { bail!("compact string must be 81 chars") }
        let mut g = Grid::empty();
        for (i, ch) in s.chars().enumerate() {
            g.cells[i] = match ch { '.'|'0' => 0, '1'..='9' => ch as u8 - b'0', _ => bail!("invalid char {ch}") };
        }
        Ok(g)
    }

    pub fn to_compact(&self) -> String {
        self.cells.iter().map(|&d| if d==0 {'.'} else {(b'0'+d) as char}).collect()
    }

    pub fn get(&self, p: Pos) -> Digit { self.cells[p.idx()] }
    pub fn set(&mut self, p: Pos, d: Digit) { self.cells[p.idx()] = d; }
    pub fn clear(&mut self, p: Pos) { self.cells[p.idx()] = 0; }

    /// First empty cell in row-major scan order.
    pub fn find_empty(&self) -> Option<Pos> {
        self.cells.iter().position(|&d| d == 0).map(|i| Pos { r: i / 9, c: i % 9 })
    }

    /// True iff `d` appears nowhere else in the row, column, or 3x3 box
    /// of `p`. Pure; O(27).
    pub fn can_place(&self, p: Pos, d: Digit) -> bool {
        for i in 0..9 {
            if self.cells[p.r * 9 + i] == d || self.cells[i * 9 + p.c] == d { return false; }
        }
        let br = (p.r / 3) * 3;
        let bc = (p.c / 3) * 3;
        for r in br..br + 3 {
            for c in bc..bc + 3 {
                if self.cells[r * 9 + c] == d { return false; }
            }
        }
        true
    }

    pub fn is_filled(&self) -> bool { self.cells.iter().all(|&d| d != 0) }
    pub fn is_solved(&self) -> bool { self.is_filled() && self.is_valid() }
    pub fn empty_count(&self) -> usize { self.cells.iter().filter(|&&d| d == 0).count() }

    pub fn is_valid(&self) -> bool {
        // rows, cols, boxes have no duplicates ignoring zeros
        for r in 0..9 { if !no_dupes((0..9).map(|c| self.cells[r * 9 + c])) { return false; } }
        for c in 0..9 { if !no_dupes((0..9).map(|r| self.cells[r * 9 + c])) { return false; } }
        for br in (0..9).step_by(3) { for bc in (0..9).step_by(3) {
            if !no_dupes((br..br+3).cartesian_product(bc..bc+3).map(|(r, c)| self.cells[r * 9 + c])) { return false; }
        }}
        true
    }

    /// Bordered text rendering: a dashed rule before each 3-row band and
    /// at the end, `.` for empty cells, no trailing newline.
    pub fn to_pretty_string(&self) -> String {
        let mut lines: Vec<String> = Vec::with_capacity(13);
        for r in 0..9 {
            if r % 3 == 0 { lines.push(RULE.to_string()); }
            let mut row = String::new();
            for c in 0..9 {
                if c % 3 == 0 { row.push_str("| "); }
                let d = self.cells[r * 9 + c];
                row.push(if d == 0 { '.' } else { (b'0' + d) as char });
                row.push(' ');
            }
            row.push('|');
            lines.push(row);
        }
        lines.push(RULE.to_string());
        lines.iter().join("\n")
    }

    pub fn iterate_cells() -> impl Iterator<Item = Pos> {
        (0..81).map(|i| Pos { r: i / 9, c: i % 9 })
    }
}

const RULE: &str = "+-------+-------+-------+";

fn no_dupes(vals: impl Iterator<Item = Digit>) -> bool {
    let mut seen = [false; 10];
    for v in vals {
        if v != 0 {
            if seen[v as usize] { return false; }
            seen[v as usize] = true;
        }
    }
    true
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_pretty_string())
    }
}
