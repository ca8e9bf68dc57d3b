// Circular cloud layouter.
//
// Owns the placed history and the spiral cursor. History is append-only and
// pairwise non-intersecting at all times.

use tracing::{debug, trace, warn};

use super::spatial_grid::SpatialGrid;
use super::spiral::Spiral;
use super::LayoutConfig;
use crate::error::{LayoutError, Result};
use crate::geometry::{Axis, Point, Rectangle, Size};

#[derive(Debug, Clone)]
pub struct CloudLayouter {
    center: Point,
    config: LayoutConfig,
    spiral: Spiral,
    placed: Vec<Rectangle>,
    /// Mirrors `placed` when a grid cell size is configured.
    grid: Option<SpatialGrid>,
}

impl CloudLayouter {
    pub fn new(center: Point) -> Self {
        let config = LayoutConfig::default();
        Self {
            center,
            spiral: Spiral::new(center, config.spiral_step, config.spiral_spacing),
            config,
            placed: Vec::new(),
            grid: None,
        }
    }

    pub fn with_config(center: Point, config: LayoutConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            center,
            spiral: Spiral::new(center, config.spiral_step, config.spiral_spacing),
            grid: config.grid_cell_size.map(SpatialGrid::new),
            config,
            placed: Vec::new(),
        })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Everything placed so far, in placement order.
    pub fn rectangles(&self) -> &[Rectangle] {
        &self.placed
    }

    pub fn len(&self) -> usize {
        self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    /// Bounding box of the whole cloud, `None` before the first placement.
    pub fn bounds(&self) -> Option<Rectangle> {
        self.placed.iter().copied().reduce(|acc, r| acc.union(&r))
    }

    /// Place a rectangle of `size` as close to the center as the spiral search
    /// and the pull toward the center allow.
    ///
    /// Fails with [`LayoutError::InvalidSize`] before touching any state when a
    /// dimension is not positive.
    pub fn put_next_rectangle(&mut self, size: Size) -> Result<Rectangle> {
        if !size.is_valid() {
            return Err(LayoutError::InvalidSize { width: size.width, height: size.height });
        }

        let (found, steps) = self.find_free_slot(size)?;
        let rect = self.pull_to_center(found);

        debug!(
            index = self.placed.len(),
            x = rect.location.x,
            y = rect.location.y,
            width = size.width,
            height = size.height,
            steps,
            "placed rectangle"
        );
        self.commit(rect);
        Ok(rect)
    }

    /// Walk the spiral until a rectangle centered on the anchor overlaps nothing.
    /// Rejected anchors are consumed for good.
    fn find_free_slot(&mut self, size: Size) -> Result<(Rectangle, usize)> {
        let mut steps = 0usize;
        loop {
            if let Some(limit) = self.config.max_search_steps {
                if steps >= limit {
                    warn!(width = size.width, height = size.height, steps, "spiral search exhausted");
                    return Err(LayoutError::SearchExhausted { steps });
                }
            }

            let anchor = self.spiral.next_point();
            steps += 1;

            let candidate = Rectangle::centered_at(anchor, size);
            if !self.collides(&candidate) {
                return Ok((candidate, steps));
            }
            trace!(x = anchor.x, y = anchor.y, "candidate rejected");
        }
    }

    fn pull_to_center(&self, rect: Rectangle) -> Rectangle {
        let rect = self.pull_along(rect, Axis::Horizontal);
        self.pull_along(rect, Axis::Vertical)
    }

    /// Step one unit at a time toward the center on `axis` until the centers
    /// line up or the next step would hit something.
    fn pull_along(&self, rect: Rectangle, axis: Axis) -> Rectangle {
        let mut current = rect;
        loop {
            let offset = self.center.along(axis) - current.center().along(axis);
            if offset == 0 {
                return current;
            }
            let shifted = current.shifted_by_axis(offset, axis);
            if self.collides(&shifted) {
                return current;
            }
            current = shifted;
        }
    }

    fn collides(&self, rect: &Rectangle) -> bool {
        match &self.grid {
            Some(grid) => grid.intersects_any(rect),
            None => self.placed.iter().any(|placed| placed.intersects(rect)),
        }
    }

    fn commit(&mut self, rect: Rectangle) {
        if let Some(grid) = &mut self.grid {
            grid.insert(rect);
        }
        self.placed.push(rect);
    }
}

/// Lay out `sizes` in order around `center` with a fresh layouter.
pub fn layout_cloud(center: Point, sizes: &[Size], config: &LayoutConfig) -> Result<Vec<Rectangle>> {
    let mut layouter = CloudLayouter::with_config(center, config.clone())?;
    for &size in sizes {
        layouter.put_next_rectangle(size)?;
    }
    Ok(layouter.placed)
}
