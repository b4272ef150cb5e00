//! Static cube geometry.
//!
//! Vertices are not shared between faces so every face can carry one flat
//! color. Each face is a run of 4 vertices wound counter-clockwise when seen
//! from outside the cube, covered by two triangles sharing the `0-2` diagonal.

use tissue_engine::paint::Color;

pub const FACE_COUNT: usize = 6;
pub const VERTICES_PER_FACE: usize = 4;
pub const VERTEX_COUNT: usize = FACE_COUNT * VERTICES_PER_FACE;
pub const INDEX_COUNT: usize = FACE_COUNT * 6;

/// One face of the box: its name, first vertex, and flat color.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Face {
    pub name: &'static str,
    pub first_vertex: u16,
    pub color: Color,
}

const RED: Color = Color::rgb(1.0, 0.0, 0.0);
const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
const MAGENTA: Color = Color::rgb(1.0, 0.0, 1.0);
const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

#[rustfmt::skip]
pub const FACES: [Face; FACE_COUNT] = [
    Face { name: "front",  first_vertex: 0,  color: RED },
    Face { name: "back",   first_vertex: 4,  color: GREEN },
    Face { name: "top",    first_vertex: 8,  color: MAGENTA },
    Face { name: "bottom", first_vertex: 12, color: CYAN },
    Face { name: "right",  first_vertex: 16, color: YELLOW },
    Face { name: "left",   first_vertex: 20, color: BLUE },
];

/// Homogeneous positions (w = 1) of a unit cube centered on the origin.
#[rustfmt::skip]
pub const POSITIONS: [[f32; 4]; VERTEX_COUNT] = [
    // front (+z)
    [-0.5, -0.5,  0.5, 1.0],
    [ 0.5, -0.5,  0.5, 1.0],
    [ 0.5,  0.5,  0.5, 1.0],
    [-0.5,  0.5,  0.5, 1.0],
    // back (-z)
    [-0.5, -0.5, -0.5, 1.0],
    [-0.5,  0.5, -0.5, 1.0],
    [ 0.5,  0.5, -0.5, 1.0],
    [ 0.5, -0.5, -0.5, 1.0],
    // top (+y)
    [-0.5,  0.5, -0.5, 1.0],
    [-0.5,  0.5,  0.5, 1.0],
    [ 0.5,  0.5,  0.5, 1.0],
    [ 0.5,  0.5, -0.5, 1.0],
    // bottom (-y)
    [-0.5, -0.5, -0.5, 1.0],
    [ 0.5, -0.5, -0.5, 1.0],
    [ 0.5, -0.5,  0.5, 1.0],
    [-0.5, -0.5,  0.5, 1.0],
    // right (+x)
    [ 0.5, -0.5, -0.5, 1.0],
    [ 0.5,  0.5, -0.5, 1.0],
    [ 0.5,  0.5,  0.5, 1.0],
    [ 0.5, -0.5,  0.5, 1.0],
    // left (-x)
    [-0.5, -0.5, -0.5, 1.0],
    [-0.5, -0.5,  0.5, 1.0],
    [-0.5,  0.5,  0.5, 1.0],
    [-0.5,  0.5, -0.5, 1.0],
];

/// Per-vertex colors, 1:1 with [`POSITIONS`].
pub const COLORS: [[f32; 4]; VERTEX_COUNT] = expand_face_colors();

#[rustfmt::skip]
pub const INDICES: [u16; INDEX_COUNT] = [
    0,  1,  2,   0,  2,  3,  // front
    4,  5,  6,   4,  6,  7,  // back
    8,  9,  10,  8,  10, 11, // top
    12, 13, 14,  12, 14, 15, // bottom
    16, 17, 18,  16, 18, 19, // right
    20, 21, 22,  20, 22, 23, // left
];

const fn expand_face_colors() -> [[f32; 4]; VERTEX_COUNT] {
    let mut out = [[0.0; 4]; VERTEX_COUNT];
    let mut i = 0;
    while i < VERTEX_COUNT {
        out[i] = FACES[i / VERTICES_PER_FACE].color.to_array();
        i += 1;
    }
    out
}

/// The four positions of `face`.
#[cfg(test)]
fn face_positions(face: &Face) -> &'static [[f32; 4]] {
    let start = face.first_vertex as usize;
    &POSITIONS[start..start + VERTICES_PER_FACE]
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec3, Vec4Swizzles};

    fn pos(i: u16) -> Vec3 {
        glam::Vec4::from_array(POSITIONS[i as usize]).xyz()
    }

    #[test]
    fn table_sizes_match() {
        assert_eq!(POSITIONS.len(), 24);
        assert_eq!(COLORS.len(), POSITIONS.len());
        assert_eq!(INDICES.len(), 36);
    }

    #[test]
    fn every_index_is_in_range() {
        for tri in INDICES.chunks(3) {
            for &i in tri {
                assert!((i as usize) < VERTEX_COUNT, "index {i} out of range");
            }
        }
    }

    #[test]
    fn faces_partition_the_vertex_table() {
        for (n, face) in FACES.iter().enumerate() {
            assert_eq!(face.first_vertex as usize, n * VERTICES_PER_FACE);
        }
    }

    #[test]
    fn each_face_is_a_planar_unit_square_on_the_cube() {
        for face in &FACES {
            let verts = face_positions(face);

            for v in verts {
                assert_eq!(v[3], 1.0);
                for c in &v[..3] {
                    assert_eq!(c.abs(), 0.5, "{} has a corner off the unit cube", face.name);
                }
            }

            // Exactly one axis is constant across the group: the face plane.
            let constant_axes = (0..3)
                .filter(|&axis| verts.iter().all(|v| v[axis] == verts[0][axis]))
                .count();
            assert_eq!(constant_axes, 1, "{} is not axis-planar", face.name);

            // Four distinct corners.
            for a in 0..4 {
                for b in (a + 1)..4 {
                    assert_ne!(verts[a], verts[b], "{} repeats a corner", face.name);
                }
            }
        }
    }

    #[test]
    fn triangles_wind_outward() {
        for face in &FACES {
            let base = face.first_vertex as usize;
            let tris = &INDICES[base / 4 * 6..base / 4 * 6 + 6];
            let centroid = face_positions(face)
                .iter()
                .fold(Vec3::ZERO, |acc, v| acc + Vec3::new(v[0], v[1], v[2]))
                / 4.0;

            for tri in tris.chunks(3) {
                let (a, b, c) = (pos(tri[0]), pos(tri[1]), pos(tri[2]));
                let normal = (b - a).cross(c - a);
                assert!(
                    normal.dot(centroid) > 0.0,
                    "{} triangle {tri:?} faces inward",
                    face.name
                );
            }
        }
    }

    #[test]
    fn triangles_stay_within_their_face() {
        for (n, tri) in INDICES.chunks(6).enumerate() {
            let first = FACES[n].first_vertex;
            for &i in tri {
                assert!((first..first + 4).contains(&i));
            }
        }
    }

    #[test]
    fn each_face_has_one_color() {
        for face in &FACES {
            let start = face.first_vertex as usize;
            for c in &COLORS[start..start + VERTICES_PER_FACE] {
                assert_eq!(*c, face.color.to_array(), "{} mixes colors", face.name);
            }
        }
    }

    #[test]
    fn face_colors_are_pairwise_distinct_and_opaque() {
        for (a, fa) in FACES.iter().enumerate() {
            assert_eq!(fa.color.a, 1.0);
            for fb in &FACES[a + 1..] {
                assert_ne!(fa.color, fb.color, "{} and {} share a color", fa.name, fb.name);
            }
        }
    }
}
