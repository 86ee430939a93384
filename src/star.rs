use egui::{Color32, Mesh, Pos2};

use crate::renderer::RenderSurface;

/// Number of vertices in a star outline (five tips, five notches)
pub const STAR_VERTEX_COUNT: usize = 10;

/// A point in canvas space (y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_pos2(self) -> Pos2 {
        Pos2::new(self.x as f32, self.y as f32)
    }
}

impl From<Pos2> for Point {
    fn from(pos: Pos2) -> Self {
        Self::new(pos.x as f64, pos.y as f64)
    }
}

/// Computes the outline of a star `size` wide centered on `center`.
///
/// Vertices alternate outer tip / inner notch, starting at the top tip and
/// running clockwise. The ratios are hand-tuned for the brush shape and are
/// not derived from a regular pentagram.
///
/// A zero size collapses every vertex onto `center`; a negative size mirrors
/// the star through it.
pub fn compute_vertices(size: f64, center: Point) -> [Point; STAR_VERTEX_COUNT] {
    let Point { x, y } = center;
    [
        Point::new(x, y - size / 2.2),
        Point::new(x + size / 5.0, y - size / 10.0),
        Point::new(x + size / 2.0, y - size / 10.0),
        Point::new(x + size / 3.33, y + size / 5.0),
        Point::new(x + size / 2.5, y + size / 2.0),
        Point::new(x, y + size / 3.33),
        Point::new(x - size / 2.5, y + size / 2.0),
        Point::new(x - size / 3.33, y + size / 5.0),
        Point::new(x - size / 2.0, y - size / 10.0),
        Point::new(x - size / 5.0, y - size / 10.0),
    ]
}

/// A single star brush imprint. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    size: f64,
    center: Point,
    vertices: [Point; STAR_VERTEX_COUNT],
}

impl Star {
    pub fn new(size: f64, center: Point) -> Self {
        Self {
            size,
            center,
            vertices: compute_vertices(size, center),
        }
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn vertices(&self) -> &[Point; STAR_VERTEX_COUNT] {
        &self.vertices
    }

    pub fn xs(&self) -> [f64; STAR_VERTEX_COUNT] {
        self.vertices.map(|p| p.x)
    }

    pub fn ys(&self) -> [f64; STAR_VERTEX_COUNT] {
        self.vertices.map(|p| p.y)
    }

    /// Fills the outline on `surface` with whatever fill color it currently has.
    pub fn draw(&self, surface: &mut dyn RenderSurface) {
        surface.fill_polygon(&self.xs(), &self.ys(), STAR_VERTEX_COUNT);
    }

    /// Builds a filled triangle fan around the center.
    ///
    /// egui only fills convex paths correctly, but every vertex of the outline
    /// is visible from the center, so a fan covers the star exactly.
    pub fn to_mesh(&self, color: Color32) -> Mesh {
        let mut mesh = Mesh::default();
        mesh.colored_vertex(self.center.to_pos2(), color);
        for vertex in &self.vertices {
            mesh.colored_vertex(vertex.to_pos2(), color);
        }
        let n = STAR_VERTEX_COUNT as u32;
        for i in 0..n {
            mesh.add_triangle(0, 1 + i, 1 + (i + 1) % n);
        }
        mesh
    }
}
