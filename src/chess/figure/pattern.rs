use std::fmt::{Display, Formatter};
use std::ops::Range;

use crate::chess::figure::r#move::{Distance, Move, Types};

/// Width and height of every pattern grid.
pub const PATTERN_SIZE: usize = 5;
/// Largest |dx| or |dy| a pattern can express.
pub const PATTERN_REACH: i32 = (PATTERN_SIZE / 2) as i32;

/// Constant grid of moves a kind of figure may attempt, indexed by the
/// offset `(dx, dy)` from the figure's square. Row `dy + 2`, column `dx + 2`;
/// the centre cell is the figure itself and is always empty.
///
/// Sliding figures only carry their unit directions with [`Distance::Any`],
/// walking the ray is up to the caller.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Pattern([[Move; PATTERN_SIZE]; PATTERN_SIZE]);

impl Pattern {
    pub const fn new(rows: [[Move; PATTERN_SIZE]; PATTERN_SIZE]) -> Self {
        Self(rows)
    }

    /// Returns the cell for the offset, or `None` if it lies outside the grid.
    pub fn at(&self, dx: i32, dy: i32) -> Option<&Move> {
        let (col, row) = (cell_index(dx)?, cell_index(dy)?);
        Some(&self.0[row][col])
    }

    pub fn rows(&self) -> &[[Move; PATTERN_SIZE]; PATTERN_SIZE] {
        &self.0
    }

    /// Non-empty cells with their offsets, row by row.
    pub fn cells(&self) -> Cells<'_> {
        Cells::new(self)
    }

    /// Number of non-empty cells.
    pub fn len(&self) -> usize {
        self.cells().count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells().next().is_none()
    }
}

fn cell_index(delta: i32) -> Option<usize> {
    if delta.unsigned_abs() > PATTERN_REACH as u32 {
        return None;
    }
    Some((delta + PATTERN_REACH) as usize)
}

pub struct Cells<'a> {
    pattern: &'a Pattern,
    range: Range<usize>,
}

impl<'a> Cells<'a> {
    fn new(pattern: &'a Pattern) -> Self {
        Self {
            pattern,
            range: 0..PATTERN_SIZE * PATTERN_SIZE,
        }
    }
}

impl<'a> Iterator for Cells<'a> {
    type Item = (i32, i32, &'a Move);

    fn next(&mut self) -> Option<Self::Item> {
        for i in self.range.by_ref() {
            let (row, col) = (i / PATTERN_SIZE, i % PATTERN_SIZE);
            let m = &self.pattern.0[row][col];
            if !m.is_none() {
                let dx = col as i32 - PATTERN_REACH;
                let dy = row as i32 - PATTERN_REACH;
                return Some((dx, dy, m));
            }
        }
        None
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.0.iter().enumerate() {
            for (col, m) in cells.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                if row == PATTERN_SIZE / 2 && col == PATTERN_SIZE / 2 {
                    write!(f, "[]")?;
                    continue;
                }
                let kind = match (m.can_move(), m.can_hit()) {
                    (false, false) => '.',
                    (true, false) => 'm',
                    (false, true) => 'h',
                    (true, true) => 'x',
                };
                let dist = match m.dist() {
                    _ if m.is_none() => '.',
                    Distance::No => ' ',
                    Distance::One => '1',
                    Distance::Any => '*',
                    Distance::TwoFirstTime => '2',
                };
                write!(f, "{}{}", kind, dist)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

const __: Move = Move::NONE;
const XO: Move = Move::new(Types::ANY, Distance::One);
const XA: Move = Move::new(Types::ANY, Distance::Any);
const MO: Move = Move::new(Types::MOVEMENT, Distance::One);
const M2: Move = Move::new(Types::MOVEMENT, Distance::TwoFirstTime);
const HO: Move = Move::new(Types::HIT, Distance::One);

pub static KING_MOVES: Pattern = Pattern::new([
    [__, __, __, __, __],
    [__, XO, XO, XO, __],
    [__, XO, __, XO, __],
    [__, XO, XO, XO, __],
    [__, __, __, __, __],
]);

pub static QUEEN_MOVES: Pattern = Pattern::new([
    [__, __, __, __, __],
    [__, XA, XA, XA, __],
    [__, XA, __, XA, __],
    [__, XA, XA, XA, __],
    [__, __, __, __, __],
]);

pub static CASTLE_MOVES: Pattern = Pattern::new([
    [__, __, __, __, __],
    [__, __, XA, __, __],
    [__, XA, __, XA, __],
    [__, __, XA, __, __],
    [__, __, __, __, __],
]);

pub static BISHOP_MOVES: Pattern = Pattern::new([
    [__, __, __, __, __],
    [__, XA, __, XA, __],
    [__, __, __, __, __],
    [__, XA, __, XA, __],
    [__, __, __, __, __],
]);

pub static KNIGHT_MOVES: Pattern = Pattern::new([
    [__, XO, __, XO, __],
    [XO, __, __, __, XO],
    [__, __, __, __, __],
    [XO, __, __, __, XO],
    [__, XO, __, XO, __],
]);

// white advances towards y = 0
pub static WHITE_PAWN_MOVES: Pattern = Pattern::new([
    [__, __, M2, __, __],
    [__, HO, MO, HO, __],
    [__, __, __, __, __],
    [__, __, __, __, __],
    [__, __, __, __, __],
]);

pub static BLACK_PAWN_MOVES: Pattern = Pattern::new([
    [__, __, __, __, __],
    [__, __, __, __, __],
    [__, __, __, __, __],
    [__, HO, MO, HO, __],
    [__, __, M2, __, __],
]);

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets(p: &Pattern) -> Vec<(i32, i32)> {
        p.cells().map(|(dx, dy, _)| (dx, dy)).collect()
    }

    fn assert_uniform(p: &Pattern, types: Types, dist: Distance) {
        for (dx, dy, m) in p.cells() {
            assert_eq!(types, m.types(), "types at ({}, {})", dx, dy);
            assert_eq!(dist, m.dist(), "distance at ({}, {})", dx, dy);
        }
    }

    #[test]
    fn test_at_maps_offsets() {
        assert_eq!(Some(&M2), WHITE_PAWN_MOVES.at(0, -2));
        assert_eq!(Some(&MO), WHITE_PAWN_MOVES.at(0, -1));
        assert_eq!(Some(&HO), WHITE_PAWN_MOVES.at(-1, -1));
        assert_eq!(Some(&XO), KNIGHT_MOVES.at(2, 1));
        assert_eq!(Some(&__), KNIGHT_MOVES.at(1, 1));
    }

    #[test]
    fn test_at_outside_grid() {
        assert_eq!(None, QUEEN_MOVES.at(3, 0));
        assert_eq!(None, QUEEN_MOVES.at(0, -3));
        assert_eq!(None, QUEEN_MOVES.at(i32::MIN, 0));
        assert!(QUEEN_MOVES.at(2, -2).is_some());
    }

    #[test]
    fn test_centre_is_empty() {
        for p in [
            &KING_MOVES,
            &QUEEN_MOVES,
            &CASTLE_MOVES,
            &BISHOP_MOVES,
            &KNIGHT_MOVES,
            &WHITE_PAWN_MOVES,
            &BLACK_PAWN_MOVES,
        ] {
            assert!(p.at(0, 0).unwrap().is_none());
        }
    }

    #[test]
    fn test_king() {
        assert_eq!(8, KING_MOVES.len());
        assert_uniform(&KING_MOVES, Types::ANY, Distance::One);
        assert!(offsets(&KING_MOVES)
            .iter()
            .all(|(dx, dy)| dx.abs() <= 1 && dy.abs() <= 1));
    }

    #[test]
    fn test_sliders() {
        assert_eq!(8, QUEEN_MOVES.len());
        assert_eq!(4, CASTLE_MOVES.len());
        assert_eq!(4, BISHOP_MOVES.len());
        assert_uniform(&QUEEN_MOVES, Types::ANY, Distance::Any);
        assert_uniform(&CASTLE_MOVES, Types::ANY, Distance::Any);
        assert_uniform(&BISHOP_MOVES, Types::ANY, Distance::Any);

        assert_eq!(
            vec![(0, -1), (-1, 0), (1, 0), (0, 1)],
            offsets(&CASTLE_MOVES)
        );
        assert_eq!(
            vec![(-1, -1), (1, -1), (-1, 1), (1, 1)],
            offsets(&BISHOP_MOVES)
        );
    }

    #[test]
    fn test_queen_is_castle_plus_bishop() {
        let mut union = offsets(&CASTLE_MOVES);
        union.extend(offsets(&BISHOP_MOVES));
        union.sort();
        let mut queen = offsets(&QUEEN_MOVES);
        queen.sort();
        assert_eq!(queen, union);
    }

    #[test]
    fn test_knight() {
        assert_eq!(8, KNIGHT_MOVES.len());
        assert_uniform(&KNIGHT_MOVES, Types::ANY, Distance::One);
        assert!(offsets(&KNIGHT_MOVES)
            .iter()
            .all(|(dx, dy)| dx.abs() * dy.abs() == 2));
    }

    #[test]
    fn test_pawns_mirror() {
        assert_eq!(4, WHITE_PAWN_MOVES.len());
        assert_eq!(4, BLACK_PAWN_MOVES.len());
        for (dx, dy, m) in WHITE_PAWN_MOVES.cells() {
            assert!(dy < 0);
            assert_eq!(Some(m), BLACK_PAWN_MOVES.at(dx, -dy));
        }
        for dx in [-1, 1] {
            let m = WHITE_PAWN_MOVES.at(dx, -1).unwrap();
            assert!(m.can_hit() && !m.can_move());
        }
    }

    #[test]
    fn test_display() {
        let expected = "\
.. .. .. .. ..
.. x1 x1 x1 ..
.. x1 [] x1 ..
.. x1 x1 x1 ..
.. .. .. .. ..
";
        assert_eq!(expected, KING_MOVES.to_string());
    }
}
