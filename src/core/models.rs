use std::ops::{Add, Sub};
use serde::{Deserialize, Serialize};

/// Terrain of a cell. Fixed once the level is loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum StaticKind {
    Floor = 0,
    Wall = 1,
    Goal = 2,
}

/// What currently stands on a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DynamicKind {
    Empty = 0,
    Box = 1,
    Player = 2,
}

impl StaticKind {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Option<StaticKind> {
        match value {
            0 => Some(StaticKind::Floor),
            1 => Some(StaticKind::Wall),
            2 => Some(StaticKind::Goal),
            _ => None,
        }
    }
}

impl DynamicKind {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Option<DynamicKind> {
        match value {
            0 => Some(DynamicKind::Empty),
            1 => Some(DynamicKind::Box),
            2 => Some(DynamicKind::Player),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub const fn new(x: i32, y: i32) -> Vec2 {
        Vec2 { x, y }
    }

    /// `self + dir * steps`, or None when the arithmetic overflows.
    pub fn checked_step(self, dir: Vec2, steps: i32) -> Option<Vec2> {
        let x = dir.x.checked_mul(steps)?.checked_add(self.x)?;
        let y = dir.y.checked_mul(steps)?.checked_add(self.y)?;
        Some(Vec2::new(x, y))
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Unit step in grid coordinates; y grows downwards.
    pub fn delta(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0, -1),
            Direction::Down => Vec2::new(0, 1),
            Direction::Left => Vec2::new(-1, 0),
            Direction::Right => Vec2::new(1, 0),
        }
    }

    pub fn from_delta(dx: i32, dy: i32) -> Option<Direction> {
        match (dx, dy) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }
}

/// One applied step, with enough information to reverse it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub dx: i32,
    pub dy: i32,
    pub is_push: bool,
}

impl Move {
    pub fn delta(&self) -> Vec2 {
        Vec2::new(self.dx, self.dy)
    }

    pub fn direction(&self) -> Option<Direction> {
        Direction::from_delta(self.dx, self.dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    Moved { is_push: bool },
    Blocked,
}
