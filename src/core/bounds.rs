use crate::core::models::Vec2;

/// A bounding box with one corner fixed at 0,0 and assumed to have positive extent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundsOriginRoot {
    pub extent: Vec2,
}

impl BoundsOriginRoot {
    pub fn new(x: i32, y: i32) -> BoundsOriginRoot {
        BoundsOriginRoot {
            extent: Vec2 { x, y }
        }
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        pos.x >= 0 && pos.x < self.extent.x && pos.y >= 0 && pos.y < self.extent.y
    }

    pub fn area(&self) -> i32 {
        self.extent.x * self.extent.y
    }

    /// Row-major index of a position, or None when outside.
    pub fn index_of(&self, pos: &Vec2) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        Some((pos.y * self.extent.x + pos.x) as usize)
    }

    pub fn position_of(&self, index: usize) -> Vec2 {
        let index = index as i32;
        Vec2::new(index % self.extent.x, index / self.extent.x)
    }
}
