use bitflags::bitflags;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Types(u8);

bitflags! {
    impl Types: u8 {
        const MOVEMENT = 0b01;
        const HIT = 0b10;

        const ANY = Self::MOVEMENT.bits() | Self::HIT.bits();
    }
}

/// How far a figure may travel in the direction of a pattern cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Distance {
    No,
    One,
    /// The offset is a ray, walked until blocked.
    Any,
    /// Exactly two squares, only while the first move is not done.
    TwoFirstTime,
}

/// One cell of a move pattern table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Move {
    types: Types,
    dist: Distance,
}

impl Move {
    pub const NONE: Move = Move::new(Types::empty(), Distance::No);

    pub const fn new(types: Types, dist: Distance) -> Self {
        Self { types, dist }
    }

    pub fn types(&self) -> Types {
        self.types
    }

    pub fn dist(&self) -> Distance {
        self.dist
    }

    /// An empty cell; `dist` carries no meaning then.
    pub fn is_none(&self) -> bool {
        self.types.is_empty()
    }

    pub fn can_move(&self) -> bool {
        self.types.contains(Types::MOVEMENT)
    }

    pub fn can_hit(&self) -> bool {
        self.types.contains(Types::HIT)
    }
}

impl Default for Move {
    fn default() -> Self {
        Move::NONE
    }
}
