//! Mesh generation for the two scene bodies.
//!
//! Buffers are flat `Vec<f32>`/`Vec<u32>` so they can cross the WASM
//! boundary without copies. Both generators emit indexed triangles with
//! equirectangular UVs; the host uploads positions/uvs/indices once and
//! only re-uploads positions when marked dirty.

use std::collections::HashMap;
use std::f32::consts::{PI, TAU};

use glam::Vec3;

/// An indexed triangle mesh: positions x3, uvs x2, indices x3 per triangle.
pub struct MeshData {
    pub positions: Vec<f32>,
    pub uvs: Vec<f32>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

const ICO_T: f32 = 1.618_034; // (1 + sqrt(5)) / 2

const ICO_VERTICES: [[f32; 3]; 12] = [
    [-1.0, ICO_T, 0.0],
    [1.0, ICO_T, 0.0],
    [-1.0, -ICO_T, 0.0],
    [1.0, -ICO_T, 0.0],
    [0.0, -1.0, ICO_T],
    [0.0, 1.0, ICO_T],
    [0.0, -1.0, -ICO_T],
    [0.0, 1.0, -ICO_T],
    [ICO_T, 0.0, -1.0],
    [ICO_T, 0.0, 1.0],
    [-ICO_T, 0.0, -1.0],
    [-ICO_T, 0.0, 1.0],
];

const ICO_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Subdivided icosahedron projected onto a sphere.
///
/// `detail` splits every icosahedron edge into `detail` segments, giving
/// 20*detail^2 triangles over 10*detail^2 + 2 shared vertices.
pub fn icosphere(radius: f32, detail: u32) -> MeshData {
    let detail = detail.max(1);
    let d = detail as f32;

    let mut mesh = MeshData {
        positions: Vec::new(),
        uvs: Vec::new(),
        indices: Vec::new(),
    };
    // Vertices on shared edges are computed with identical f32 operations
    // from both adjacent faces (integer-weight sums commute), so exact bit
    // keys deduplicate them reliably.
    let mut seen: HashMap<[u32; 3], u32> = HashMap::new();

    for face in ICO_FACES {
        let a = Vec3::from(ICO_VERTICES[face[0]]);
        let b = Vec3::from(ICO_VERTICES[face[1]]);
        let c = Vec3::from(ICO_VERTICES[face[2]]);

        // Barycentric grid over the face: row r spans from the a-b edge to
        // the a-c edge, with r+1 points in row r.
        let mut rows: Vec<Vec<u32>> = Vec::with_capacity(detail as usize + 1);
        for r in 0..=detail {
            let mut row = Vec::with_capacity(r as usize + 1);
            for k in 0..=r {
                let p = a * (d - r as f32) + b * ((r - k) as f32) + c * (k as f32);
                row.push(intern_unit_vertex(&mut mesh, &mut seen, p.normalize(), radius));
            }
            rows.push(row);
        }

        for r in 0..detail as usize {
            for k in 0..=r {
                mesh.indices
                    .extend_from_slice(&[rows[r + 1][k], rows[r + 1][k + 1], rows[r][k]]);
            }
            for k in 0..r {
                mesh.indices
                    .extend_from_slice(&[rows[r][k], rows[r + 1][k + 1], rows[r][k + 1]]);
            }
        }
    }

    mesh
}

fn intern_unit_vertex(
    mesh: &mut MeshData,
    seen: &mut HashMap<[u32; 3], u32>,
    unit: Vec3,
    radius: f32,
) -> u32 {
    let key = [unit.x.to_bits(), unit.y.to_bits(), unit.z.to_bits()];
    if let Some(&index) = seen.get(&key) {
        return index;
    }
    let index = mesh.vertex_count() as u32;
    mesh.positions
        .extend_from_slice(&[unit.x * radius, unit.y * radius, unit.z * radius]);
    let (u, v) = equirect_uv(unit);
    mesh.uvs.extend_from_slice(&[u, v]);
    seen.insert(key, index);
    index
}

fn equirect_uv(unit: Vec3) -> (f32, f32) {
    let u = 0.5 + unit.x.atan2(unit.z) / TAU;
    let v = 1.0 - unit.y.clamp(-1.0, 1.0).acos() / PI;
    (u, v)
}

/// Latitude/longitude sphere with `width_segments` meridians and
/// `height_segments` parallels. Pole rows collapse to single points, so
/// the top and bottom quad rows emit one triangle each.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let w = width_segments.max(3);
    let h = height_segments.max(2);

    let mut positions = Vec::with_capacity(((w + 1) * (h + 1) * 3) as usize);
    let mut uvs = Vec::with_capacity(((w + 1) * (h + 1) * 2) as usize);
    let mut indices = Vec::new();

    for iy in 0..=h {
        let v = iy as f32 / h as f32;
        let phi = v * PI;
        for ix in 0..=w {
            let u = ix as f32 / w as f32;
            let theta = u * TAU;
            positions.extend_from_slice(&[
                -radius * theta.cos() * phi.sin(),
                radius * phi.cos(),
                radius * theta.sin() * phi.sin(),
            ]);
            uvs.extend_from_slice(&[u, 1.0 - v]);
        }
    }

    let stride = w + 1;
    for iy in 0..h {
        for ix in 0..w {
            let a = iy * stride + ix + 1;
            let b = iy * stride + ix;
            let c = (iy + 1) * stride + ix;
            let d = (iy + 1) * stride + ix + 1;
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != h - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    MeshData {
        positions,
        uvs,
        indices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radii(mesh: &MeshData) -> impl Iterator<Item = f32> + '_ {
        mesh.positions
            .chunks_exact(3)
            .map(|p| (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt())
    }

    #[test]
    fn icosphere_shares_edge_vertices() {
        for detail in 1..=4 {
            let mesh = icosphere(30.0, detail);
            let expected = 10 * detail * detail + 2;
            assert_eq!(
                mesh.vertex_count(),
                expected as usize,
                "detail {detail}: duplicated or missing shared vertices"
            );
            assert_eq!(mesh.triangle_count(), (20 * detail * detail) as usize);
            assert_eq!(mesh.uvs.len(), mesh.vertex_count() * 2);
        }
    }

    #[test]
    fn icosphere_vertices_lie_on_sphere() {
        let mesh = icosphere(30.0, 3);
        for r in radii(&mesh) {
            assert!((r - 30.0).abs() < 1e-3, "vertex off the sphere: r={r}");
        }
    }

    #[test]
    fn icosphere_indices_in_range() {
        let mesh = icosphere(30.0, 2);
        let n = mesh.vertex_count() as u32;
        assert!(mesh.indices.iter().all(|&i| i < n));
    }

    #[test]
    fn uv_sphere_counts_match_grid() {
        let mesh = uv_sphere(150.0, 40, 40);
        assert_eq!(mesh.vertex_count(), 41 * 41);
        // One degenerate triangle dropped per quad column at each pole row.
        assert_eq!(mesh.triangle_count(), (2 * 40 * 40 - 2 * 40) as usize);
        for r in radii(&mesh) {
            assert!((r - 150.0).abs() < 1e-3);
        }
    }

    #[test]
    fn uv_sphere_uvs_cover_unit_square() {
        let mesh = uv_sphere(1.0, 8, 6);
        for uv in mesh.uvs.chunks_exact(2) {
            assert!((0.0..=1.0).contains(&uv[0]));
            assert!((0.0..=1.0).contains(&uv[1]));
        }
    }
}
