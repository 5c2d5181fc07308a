use std::fmt::{Display, Formatter};
use std::str::FromStr;

use log::trace;
use thiserror::Error;

use crate::chess::figure::pattern::*;

pub mod r#move;
pub mod pattern;
pub mod setup;

pub use pattern::Pattern;
pub use r#move::{Distance, Move, Types};

#[derive(Error, Debug, Eq, PartialEq)]
pub enum FigureParseError {
    #[error("Empty figure symbol")]
    Empty,
    #[error("Unknown figure symbol: {symbol:?}")]
    UnknownSymbol { symbol: String },
}

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const fn other(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum Kind {
    King,
    Queen,
    Castle,
    Knight,
    Bishop,
    Pawn,
}

impl Kind {
    pub const ALL: [Kind; 6] = [
        Kind::King,
        Kind::Queen,
        Kind::Castle,
        Kind::Knight,
        Kind::Bishop,
        Kind::Pawn,
    ];

    /// The shared pattern table for this kind. Only pawns depend on the color.
    pub fn moves(&self, color: Color) -> &'static Pattern {
        match (self, color) {
            (Kind::King, _) => &KING_MOVES,
            (Kind::Queen, _) => &QUEEN_MOVES,
            (Kind::Castle, _) => &CASTLE_MOVES,
            (Kind::Knight, _) => &KNIGHT_MOVES,
            (Kind::Bishop, _) => &BISHOP_MOVES,
            (Kind::Pawn, Color::White) => &WHITE_PAWN_MOVES,
            (Kind::Pawn, Color::Black) => &BLACK_PAWN_MOVES,
        }
    }

    /// Conventional letter, upper case for white.
    pub fn symbol(&self, color: Color) -> char {
        let c = match self {
            Kind::King => 'k',
            Kind::Queen => 'q',
            Kind::Castle => 'r',
            Kind::Knight => 'n',
            Kind::Bishop => 'b',
            Kind::Pawn => 'p',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Kind::King => "King",
            Kind::Queen => "Queen",
            Kind::Castle => "Castle",
            Kind::Knight => "Knight",
            Kind::Bishop => "Bishop",
            Kind::Pawn => "Pawn",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Kind {
    type Err = FigureParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(FigureParseError::Empty);
        }
        match s.to_ascii_lowercase().as_str() {
            "k" => Ok(Kind::King),
            "q" => Ok(Kind::Queen),
            "r" | "c" => Ok(Kind::Castle),
            "n" => Ok(Kind::Knight),
            "b" => Ok(Kind::Bishop),
            "p" => Ok(Kind::Pawn),
            _ => Err(FigureParseError::UnknownSymbol {
                symbol: s.to_string(),
            }),
        }
    }
}

/// A chess figure on the board.
///
/// Holds position and first move bookkeeping plus the capability table of its
/// kind. Nothing here is validated: coordinates may be anything, legality is
/// decided by whoever owns the figures.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Figure {
    kind: Kind,
    x: i32,
    y: i32,
    color: Color,
    name: String,
    first_move_done: bool,
    index: usize,
}

impl Figure {
    pub fn new(kind: Kind, x: i32, y: i32, color: Color, name: &str, index: usize) -> Self {
        Self {
            kind,
            x,
            y,
            color,
            name: name.to_string(),
            first_move_done: false,
            index,
        }
    }

    pub fn king(x: i32, y: i32, color: Color, name: &str, index: usize) -> Self {
        Self::new(Kind::King, x, y, color, name, index)
    }

    pub fn queen(x: i32, y: i32, color: Color, name: &str, index: usize) -> Self {
        Self::new(Kind::Queen, x, y, color, name, index)
    }

    pub fn castle(x: i32, y: i32, color: Color, name: &str, index: usize) -> Self {
        Self::new(Kind::Castle, x, y, color, name, index)
    }

    pub fn knight(x: i32, y: i32, color: Color, name: &str, index: usize) -> Self {
        Self::new(Kind::Knight, x, y, color, name, index)
    }

    pub fn bishop(x: i32, y: i32, color: Color, name: &str, index: usize) -> Self {
        Self::new(Kind::Bishop, x, y, color, name, index)
    }

    pub fn pawn(x: i32, y: i32, color: Color, name: &str, index: usize) -> Self {
        Self::new(Kind::Pawn, x, y, color, name, index)
    }

    /// Possible moves. Always the same static table for a given figure.
    pub fn moves(&self) -> &'static Pattern {
        self.kind.moves(self.color)
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Slot of this figure in the owner's collection.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn set_x(&mut self, value: i32) {
        self.x = value;
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn set_y(&mut self, value: i32) {
        self.y = value;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_first_move_done(&self) -> bool {
        self.first_move_done
    }

    /// Marks the first move as done. Never reset.
    pub fn first_move_done(&mut self) {
        if !self.first_move_done {
            trace!("{} #{} made its first move", self.name, self.index);
        }
        self.first_move_done = true;
    }

    pub fn symbol(&self) -> char {
        self.kind.symbol(self.color)
    }
}

impl Display for Figure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} at ({}, {})", self.color, self.kind, self.x, self.y)
    }
}
