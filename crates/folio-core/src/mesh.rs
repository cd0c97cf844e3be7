//! Primitive geometry for the avatar rig.
//!
//! Shapes are centred on the origin and follow the usual conventions of
//! scene-graph libraries: cylinders stand along +Y, tori and discs lie in the
//! XY plane facing +Z, sphere angles are measured with phi around Y and
//! theta down from +Y.

use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    fn push(&mut self, position: Vec3, normal: Vec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(MeshVertex {
            position: position.to_array(),
            normal: normal.normalize_or_zero().to_array(),
        });
        index
    }

    /// Triangles for a `(rows + 1) x (cols + 1)` vertex grid starting at
    /// `base`, row-major.
    fn grid_indices(&mut self, base: u32, rows: u32, cols: u32) {
        let stride = cols + 1;
        for r in 0..rows {
            for c in 0..cols {
                let a = base + r * stride + c;
                let b = a + stride;
                self.indices.extend_from_slice(&[a, b, a + 1, b, b + 1, a + 1]);
            }
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    Cuboid {
        width: f32,
        height: f32,
        depth: f32,
    },
    Sphere {
        radius: f32,
        segments: u32,
        rings: u32,
        /// Polar extent from +Y; `PI` is a full sphere, less gives a cap.
        theta_length: f32,
    },
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        segments: u32,
    },
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    Disc {
        radius: f32,
        segments: u32,
    },
}

impl Primitive {
    pub fn sphere(radius: f32, segments: u32) -> Self {
        Self::Sphere {
            radius,
            segments,
            rings: segments,
            theta_length: PI,
        }
    }

    pub fn build(&self) -> MeshData {
        let mut mesh = MeshData::default();
        match *self {
            Self::Cuboid {
                width,
                height,
                depth,
            } => cuboid(&mut mesh, Vec3::new(width, height, depth) * 0.5),
            Self::Sphere {
                radius,
                segments,
                rings,
                theta_length,
            } => sphere(&mut mesh, radius, segments.max(3), rings.max(2), theta_length),
            Self::Cylinder {
                radius_top,
                radius_bottom,
                height,
                segments,
            } => cylinder(&mut mesh, radius_top, radius_bottom, height, segments.max(3)),
            Self::Torus {
                radius,
                tube,
                radial_segments,
                tubular_segments,
            } => torus(
                &mut mesh,
                radius,
                tube,
                radial_segments.max(3),
                tubular_segments.max(3),
            ),
            Self::Disc { radius, segments } => disc(&mut mesh, radius, segments.max(3)),
        }
        mesh
    }
}

fn cuboid(mesh: &mut MeshData, half: Vec3) {
    // (normal, u axis, v axis) per face; u x v == normal
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];
    for (normal, u, v) in faces {
        let center = normal * half;
        let du = u * half;
        let dv = v * half;
        let base = mesh.push(center - du - dv, normal);
        mesh.push(center + du - dv, normal);
        mesh.push(center + du + dv, normal);
        mesh.push(center - du + dv, normal);
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

fn sphere(mesh: &mut MeshData, radius: f32, segments: u32, rings: u32, theta_length: f32) {
    let base = mesh.vertices.len() as u32;
    for r in 0..=rings {
        let theta = theta_length * r as f32 / rings as f32;
        for s in 0..=segments {
            let phi = TAU * s as f32 / segments as f32;
            let dir = Vec3::new(
                -phi.cos() * theta.sin(),
                theta.cos(),
                phi.sin() * theta.sin(),
            );
            mesh.push(dir * radius, dir);
        }
    }
    mesh.grid_indices(base, rings, segments);
}

fn cylinder(mesh: &mut MeshData, radius_top: f32, radius_bottom: f32, height: f32, segments: u32) {
    let half = height * 0.5;
    let slope = (radius_bottom - radius_top) / height.max(f32::EPSILON);
    let base = mesh.vertices.len() as u32;
    for (y, radius) in [(half, radius_top), (-half, radius_bottom)] {
        for s in 0..=segments {
            let angle = TAU * s as f32 / segments as f32;
            let (sin, cos) = angle.sin_cos();
            let normal = Vec3::new(sin, slope, cos);
            mesh.push(Vec3::new(radius * sin, y, radius * cos), normal);
        }
    }
    mesh.grid_indices(base, 1, segments);

    for (y, radius, normal) in [(half, radius_top, Vec3::Y), (-half, radius_bottom, Vec3::NEG_Y)] {
        let center = mesh.push(Vec3::new(0.0, y, 0.0), normal);
        let ring = mesh.vertices.len() as u32;
        for s in 0..=segments {
            let angle = TAU * s as f32 / segments as f32;
            let (sin, cos) = angle.sin_cos();
            mesh.push(Vec3::new(radius * sin, y, radius * cos), normal);
        }
        for s in 0..segments {
            if normal.y > 0.0 {
                mesh.indices.extend_from_slice(&[center, ring + s, ring + s + 1]);
            } else {
                mesh.indices.extend_from_slice(&[center, ring + s + 1, ring + s]);
            }
        }
    }
}

fn torus(mesh: &mut MeshData, radius: f32, tube: f32, radial: u32, tubular: u32) {
    let base = mesh.vertices.len() as u32;
    for j in 0..=radial {
        let v = TAU * j as f32 / radial as f32;
        for i in 0..=tubular {
            let u = TAU * i as f32 / tubular as f32;
            let ring_center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            let position = Vec3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            );
            mesh.push(position, position - ring_center);
        }
    }
    mesh.grid_indices(base, radial, tubular);
}

fn disc(mesh: &mut MeshData, radius: f32, segments: u32) {
    let center = mesh.push(Vec3::ZERO, Vec3::Z);
    for s in 0..=segments {
        let angle = TAU * s as f32 / segments as f32;
        mesh.push(Vec3::new(radius * angle.cos(), radius * angle.sin(), 0.0), Vec3::Z);
    }
    for s in 0..segments {
        mesh.indices
            .extend_from_slice(&[center, center + 1 + s, center + 2 + s]);
    }
}
