use super::Polygon;

/// The top-level container, owning an ordered sequence of polygons.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    polygons: Vec<Polygon>,
}

impl Grid {
    /// Constructs a grid with no polygons.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a polygon to this grid.
    pub fn push_polygon(&mut self, polygon: Polygon) {
        self.polygons.push(polygon);
    }

    /// Returns the polygons of this grid.
    #[must_use]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Returns the polygons of this grid for mutation.
    #[must_use]
    pub fn polygons_mut(&mut self) -> &mut [Polygon] {
        &mut self.polygons
    }
}
