use crate::core::models::{DynamicKind, StaticKind};

/// One grid position: fixed terrain plus whatever stands on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    static_kind: StaticKind,
    dynamic_kind: DynamicKind,
}

impl Cell {
    pub fn new(static_kind: StaticKind, dynamic_kind: DynamicKind) -> Cell {
        Cell { static_kind, dynamic_kind }
    }

    /// Decodes one XSB glyph. Unknown glyphs are treated as plain floor.
    pub fn from_char(c: char) -> Cell {
        use DynamicKind::*;
        use StaticKind::*;
        match c {
            '#' => Cell::new(Wall, Empty),
            '.' => Cell::new(Goal, Empty),
            '$' => Cell::new(Floor, Box),
            '*' => Cell::new(Goal, Box),
            '@' => Cell::new(Floor, Player),
            '+' => Cell::new(Goal, Player),
            _ => Cell::new(Floor, Empty),
        }
    }

    pub fn to_char(&self) -> char {
        use DynamicKind::*;
        use StaticKind::*;
        match (self.static_kind, self.dynamic_kind) {
            (Wall, _) => '#',
            (Floor, Empty) => ' ',
            (Floor, Box) => '$',
            (Floor, Player) => '@',
            (Goal, Empty) => '.',
            (Goal, Box) => '*',
            (Goal, Player) => '+',
        }
    }

    pub fn static_kind(&self) -> StaticKind {
        self.static_kind
    }

    pub fn dynamic_kind(&self) -> DynamicKind {
        self.dynamic_kind
    }

    pub fn static_value(&self) -> u8 {
        self.static_kind.value()
    }

    pub fn dynamic_value(&self) -> u8 {
        self.dynamic_kind.value()
    }

    pub fn is_player(&self) -> bool {
        self.dynamic_kind == DynamicKind::Player
    }

    pub fn is_box(&self) -> bool {
        self.dynamic_kind == DynamicKind::Box
    }

    pub fn is_wall(&self) -> bool {
        self.static_kind == StaticKind::Wall
    }

    /// Nothing can enter an occupied cell: walls count as occupied.
    pub fn is_occupied(&self) -> bool {
        self.is_wall() || self.dynamic_kind != DynamicKind::Empty
    }

    /// Hands the occupant over to `other` and leaves this cell empty.
    pub fn move_to(&mut self, other: &mut Cell) {
        other.dynamic_kind = self.dynamic_kind;
        self.dynamic_kind = DynamicKind::Empty;
    }
}
