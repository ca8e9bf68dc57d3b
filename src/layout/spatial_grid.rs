// Spatial hash grid over placed rectangles.
//
// Buckets rectangles by the cells they cover so an intersection query only
// looks at nearby entries instead of the whole history.

use crate::geometry::Rectangle;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct SpatialGrid {
    cell_size: i32,
    /// Cell coordinates -> indices into `rects`.
    cells: HashMap<(i32, i32), Vec<usize>>,
    rects: Vec<Rectangle>,
}

impl SpatialGrid {
    /// Cell size should be roughly the size of a typical rectangle.
    pub fn new(cell_size: i32) -> Self {
        Self {
            cell_size: cell_size.max(1),
            cells: HashMap::new(),
            rects: Vec::new(),
        }
    }

    fn cell_range(&self, rect: &Rectangle) -> impl Iterator<Item = (i32, i32)> {
        let min_x = rect.left().div_euclid(self.cell_size);
        let max_x = (rect.right() - 1).div_euclid(self.cell_size);
        let min_y = rect.top().div_euclid(self.cell_size);
        let max_y = (rect.bottom() - 1).div_euclid(self.cell_size);
        (min_x..=max_x).flat_map(move |cx| (min_y..=max_y).map(move |cy| (cx, cy)))
    }

    pub fn insert(&mut self, rect: Rectangle) {
        let idx = self.rects.len();
        self.rects.push(rect);
        let cells: Vec<(i32, i32)> = self.cell_range(&rect).collect();
        for cell in cells {
            self.cells.entry(cell).or_default().push(idx);
        }
    }

    /// Rectangles sharing a cell with `rect`. May contain entries that do not
    /// actually intersect it.
    pub fn query(&self, rect: &Rectangle) -> Vec<Rectangle> {
        let mut seen = std::collections::HashSet::new();
        let mut result = Vec::new();
        for cell in self.cell_range(rect) {
            if let Some(indices) = self.cells.get(&cell) {
                for &idx in indices {
                    if seen.insert(idx) {
                        result.push(self.rects[idx]);
                    }
                }
            }
        }
        result
    }

    pub fn intersects_any(&self, rect: &Rectangle) -> bool {
        self.cell_range(rect).any(|cell| {
            self.cells
                .get(&cell)
                .is_some_and(|indices| indices.iter().any(|&idx| self.rects[idx].intersects(rect)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Size};

    fn rect(x: i32, y: i32, w: i32, h: i32) -> Rectangle {
        Rectangle::new(Point::new(x, y), Size::new(w, h))
    }

    #[test]
    fn test_insert_and_query() {
        let mut grid = SpatialGrid::new(100);
        let r1 = rect(0, 0, 50, 50);
        let r2 = rect(200, 200, 50, 50);

        grid.insert(r1);
        grid.insert(r2);

        let nearby = grid.query(&rect(10, 10, 20, 20));
        assert!(nearby.contains(&r1));
        assert!(!nearby.contains(&r2));
    }

    #[test]
    fn test_query_dedupes_multi_cell_rects() {
        let mut grid = SpatialGrid::new(10);
        grid.insert(rect(0, 0, 35, 35));
        assert_eq!(grid.query(&rect(0, 0, 40, 40)).len(), 1);
    }

    #[test]
    fn test_intersects_any() {
        let mut grid = SpatialGrid::new(100);
        grid.insert(rect(0, 0, 50, 50));

        assert!(grid.intersects_any(&rect(25, 25, 50, 50)));
        assert!(!grid.intersects_any(&rect(100, 100, 50, 50)));
        // Same cell, only touching
        assert!(!grid.intersects_any(&rect(50, 0, 10, 10)));
    }

    #[test]
    fn test_negative_coordinates() {
        let mut grid = SpatialGrid::new(4);
        grid.insert(rect(-10, -10, 3, 3));
        assert!(grid.intersects_any(&rect(-9, -9, 1, 1)));
        assert!(!grid.intersects_any(&rect(-7, -10, 3, 3)));
    }
}
