use crate::core::bounds::BoundsOriginRoot;
use crate::core::models::Vec2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedGrid<T> {
    bounds: BoundsOriginRoot,
    cells: Vec<T>,
}

impl<T> BoundedGrid<T> {
    /// Wraps row-major cells; `cells.len()` must equal the bounds area.
    pub fn from_cells(bounds: BoundsOriginRoot, cells: Vec<T>) -> Self {
        assert_eq!(cells.len(), bounds.area() as usize, "cell count must match bounds area");
        BoundedGrid {
            bounds,
            cells,
        }
    }

    pub fn size(&self) -> BoundsOriginRoot {
        self.bounds
    }

    pub fn get(&self, pos: &Vec2) -> Option<&T> {
        let index = self.bounds.index_of(pos)?;
        Some(&self.cells[index])
    }

    /// Mutable access to two distinct in-bounds cells at once.
    pub fn get_pair_mut(&mut self, a: &Vec2, b: &Vec2) -> Option<(&mut T, &mut T)> {
        let ia = self.bounds.index_of(a)?;
        let ib = self.bounds.index_of(b)?;
        if ia == ib {
            return None;
        }
        if ia < ib {
            let (low, high) = self.cells.split_at_mut(ib);
            Some((&mut low[ia], &mut high[0]))
        } else {
            let (low, high) = self.cells.split_at_mut(ia);
            Some((&mut high[0], &mut low[ib]))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item=&T> {
        self.cells.iter()
    }

    pub fn iter_positions(&self) -> impl Iterator<Item=(Vec2, &T)> {
        let bounds = self.bounds;
        self.cells.iter().enumerate().map(move |(i, c)| (bounds.position_of(i), c))
    }

    pub fn rows(&self) -> impl Iterator<Item=&[T]> {
        self.cells.chunks(self.bounds.extent.x.max(1) as usize)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_get_outside_is_none() {
        let grid = BoundedGrid::from_cells(BoundsOriginRoot::new(2, 2), vec![0u8; 4]);

        assert_eq!(grid.get(&Vec2::new(1, 1)), Some(&0));
        assert_eq!(grid.get(&Vec2::new(2, 0)), None);
        assert_eq!(grid.get(&Vec2::new(0, -1)), None);
    }

    #[test]
    fn test_pair_mut_returns_cells_in_argument_order() {
        let mut grid = BoundedGrid::from_cells(BoundsOriginRoot::new(3, 1), vec![1, 2, 3]);

        let (a, b) = grid.get_pair_mut(&Vec2::new(2, 0), &Vec2::new(0, 0)).unwrap();
        assert_eq!((*a, *b), (3, 1));
        *a = 30;
        *b = 10;

        assert_eq!(grid.iter().copied().collect::<Vec<_>>(), vec![10, 2, 30]);
        assert!(grid.get_pair_mut(&Vec2::new(1, 0), &Vec2::new(1, 0)).is_none());
        assert!(grid.get_pair_mut(&Vec2::new(1, 0), &Vec2::new(5, 0)).is_none());
    }
}
