//! Silhouette geometry and containment tests
//!
//! The spawn surface is an irregular filled region. Placement only needs
//! three things from it: a bounding rectangle to sample candidates in, a
//! point-in-region test, and a guaranteed-interior anchor for fallbacks.
//! Two providers implement that contract: an exact polygon (ray casting,
//! concave shapes welcome) and an occupancy-grid mask for shapes that come
//! from rasterized art.

use glam::Vec2;

/// Axis-aligned rectangle, inclusive on all edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

/// A filled 2D region that items can be scattered across.
pub trait Silhouette {
    /// Bounding rectangle enclosing the whole region.
    fn bounds(&self) -> Rect;
    /// Whether a point lies inside the filled region.
    fn contains(&self, point: Vec2) -> bool;
    /// A point guaranteed to be inside, used when placement gives up.
    fn anchor(&self) -> Vec2;
}

/// Polygon silhouette with even-odd membership. Handles concave outlines.
#[derive(Debug, Clone)]
pub struct PolygonSilhouette {
    verts: Vec<Vec2>,
    bounds: Rect,
    anchor: Vec2,
}

impl PolygonSilhouette {
    /// Build from an outline (implicitly closed). `anchor` must be interior.
    pub fn new(verts: Vec<Vec2>, anchor: Vec2) -> Self {
        let mut min = Vec2::splat(f32::MAX);
        let mut max = Vec2::splat(f32::MIN);
        for v in &verts {
            min = min.min(*v);
            max = max.max(*v);
        }
        Self {
            verts,
            bounds: Rect::new(min, max),
            anchor,
        }
    }

    pub fn verts(&self) -> &[Vec2] {
        &self.verts
    }
}

impl Silhouette for PolygonSilhouette {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn contains(&self, point: Vec2) -> bool {
        // Ray cast toward +x, counting edge crossings (even-odd rule)
        let mut inside = false;
        let n = self.verts.len();
        let mut j = n - 1;
        for i in 0..n {
            let a = self.verts[i];
            let b = self.verts[j];
            if (a.y > point.y) != (b.y > point.y) {
                let t = (point.y - a.y) / (b.y - a.y);
                let x = a.x + t * (b.x - a.x);
                if point.x < x {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    fn anchor(&self) -> Vec2 {
        self.anchor
    }
}

/// Occupancy-grid silhouette, the moral equivalent of testing a sprite's
/// alpha channel. Cell resolution bounds the containment error.
#[derive(Debug, Clone)]
pub struct MaskSilhouette {
    bounds: Rect,
    cols: usize,
    rows: usize,
    cells: Vec<bool>,
    anchor: Vec2,
}

impl MaskSilhouette {
    /// Sample another silhouette at cell centers to build a mask.
    pub fn rasterize(source: &dyn Silhouette, cols: usize, rows: usize) -> Self {
        let bounds = source.bounds();
        let cell_w = bounds.width() / cols as f32;
        let cell_h = bounds.height() / rows as f32;
        let mut cells = Vec::with_capacity(cols * rows);
        for row in 0..rows {
            for col in 0..cols {
                let center = Vec2::new(
                    bounds.min.x + (col as f32 + 0.5) * cell_w,
                    bounds.min.y + (row as f32 + 0.5) * cell_h,
                );
                cells.push(source.contains(center));
            }
        }
        Self {
            bounds,
            cols,
            rows,
            cells,
            anchor: source.anchor(),
        }
    }

    /// Center of the cell containing a point, if the point is in bounds.
    /// Matches the sampling positions used by `rasterize` exactly.
    pub fn snap_to_cell(&self, point: Vec2) -> Option<Vec2> {
        let (col, row) = self.cell_of(point)?;
        let cell_w = self.bounds.width() / self.cols as f32;
        let cell_h = self.bounds.height() / self.rows as f32;
        Some(Vec2::new(
            self.bounds.min.x + (col as f32 + 0.5) * cell_w,
            self.bounds.min.y + (row as f32 + 0.5) * cell_h,
        ))
    }

    fn cell_of(&self, point: Vec2) -> Option<(usize, usize)> {
        if !self.bounds.contains(point) {
            return None;
        }
        let col = ((point.x - self.bounds.min.x) / self.bounds.width() * self.cols as f32) as usize;
        let row = ((point.y - self.bounds.min.y) / self.bounds.height() * self.rows as f32) as usize;
        // Points exactly on the max edge land one past the last cell
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some((col, row))
    }
}

impl Silhouette for MaskSilhouette {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn contains(&self, point: Vec2) -> bool {
        match self.cell_of(point) {
            Some((col, row)) => self.cells[row * self.cols + col],
            None => false,
        }
    }

    fn anchor(&self) -> Vec2 {
        self.anchor
    }
}

/// The stepped fir-tree silhouette items spawn on: three foliage tiers over
/// a narrow trunk. Outline runs clockwise from the tip.
pub fn tree_silhouette() -> PolygonSilhouette {
    let verts = vec![
        Vec2::new(0.0, 240.0),
        Vec2::new(78.0, 128.0),
        Vec2::new(40.0, 128.0),
        Vec2::new(108.0, 16.0),
        Vec2::new(58.0, 16.0),
        Vec2::new(140.0, -96.0),
        Vec2::new(18.0, -96.0),
        Vec2::new(18.0, -150.0),
        Vec2::new(-18.0, -150.0),
        Vec2::new(-18.0, -96.0),
        Vec2::new(-140.0, -96.0),
        Vec2::new(-58.0, 16.0),
        Vec2::new(-108.0, 16.0),
        Vec2::new(-40.0, 128.0),
        Vec2::new(-78.0, 128.0),
    ];
    PolygonSilhouette::new(verts, Vec2::new(0.0, 60.0))
}
