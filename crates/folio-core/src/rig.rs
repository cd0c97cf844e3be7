//! The student figure: primitive parts composed into a procedural rig.
//!
//! The rig never animates bones. Each frame [`Rig::pose`] turns an
//! [`AvatarPose`] into one world matrix per part, applying the per-part
//! overrides (limb swing, ring spin, glow opacity) on top of the rest layout.

use crate::avatar::AvatarPose;
use crate::constants::AVATAR_SCALE;
use crate::mesh::Primitive;
use glam::{EulerRot, Mat4, Quat, Vec3, Vec4};
use smallvec::SmallVec;
use std::f32::consts::{FRAC_PI_2, PI};

/// Converts an sRGB hex colour (`0xRRGGBB`) to linear RGB.
pub fn hex_linear(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| {
        let c = ((hex >> shift) & 0xff) as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    [channel(16), channel(8), channel(0)]
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Linear RGB.
    pub color: [f32; 3],
    pub opacity: f32,
    pub emissive: [f32; 3],
    pub roughness: f32,
    pub metalness: f32,
    /// Unlit materials output their colour as-is.
    pub lit: bool,
}

impl Material {
    pub fn standard(hex: u32, roughness: f32, metalness: f32) -> Self {
        Self {
            color: hex_linear(hex),
            opacity: 1.0,
            emissive: [0.0; 3],
            roughness,
            metalness,
            lit: true,
        }
    }

    pub fn basic(hex: u32, opacity: f32) -> Self {
        Self {
            color: hex_linear(hex),
            opacity,
            emissive: [0.0; 3],
            roughness: 1.0,
            metalness: 0.0,
            lit: false,
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PartId {
    FloorGlow,
    Torso,
    Neck,
    Head,
    Hair,
    Backpack,
    Tie,
    LeftArm,
    RightArm,
    LeftHand,
    RightHand,
    LeftLeg,
    RightLeg,
    LeftShoe,
    RightShoe,
    LaptopBase,
    LaptopScreen,
    RingA,
    RingB,
}

/// Which transform a part hangs from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mount {
    Body,
    Laptop,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Part {
    pub id: PartId,
    pub primitive: Primitive,
    pub material: Material,
    pub mount: Mount,
    pub translation: Vec3,
    /// Euler angles, XYZ order.
    pub rotation: Vec3,
}

/// A posed part ready for drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PartInstance {
    pub part: usize,
    pub model: Mat4,
    /// Linear RGB plus final opacity.
    pub color: Vec4,
}

#[derive(Clone, Debug)]
pub struct Rig {
    parts: Vec<Part>,
    scale: f32,
    laptop_translation: Vec3,
    laptop_rotation: Vec3,
}

#[inline]
fn euler(r: Vec3) -> Quat {
    Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z)
}

#[inline]
fn local(translation: Vec3, rotation: Vec3) -> Mat4 {
    Mat4::from_rotation_translation(euler(rotation), translation)
}

impl Rig {
    /// The portfolio's student figure with a laptop and two HUD rings.
    pub fn student() -> Self {
        let skin = Material::standard(0xa66a44, 0.52, 0.05);
        let hair = Material::standard(0x101420, 0.75, 0.1);
        let shirt = Material::standard(0x2f68ff, 0.36, 0.2);
        let pants = Material::standard(0x151e32, 0.56, 0.12);
        let shoe = Material::standard(0xeff6ff, 0.35, 0.05);
        let tie = Material::standard(0x9fd2ff, 0.35, 0.45);
        let laptop = Material::standard(0x8cb6ff, 0.2, 0.8);
        let glass = Material {
            opacity: 0.42,
            emissive: {
                let [r, g, b] = hex_linear(0x3bc3ff);
                [r * 0.6, g * 0.6, b * 0.6]
            },
            ..Material::standard(0x7cf6ff, 1.0, 0.0)
        };

        let limb = |top, bottom, height| Primitive::Cylinder {
            radius_top: top,
            radius_bottom: bottom,
            height,
            segments: 16,
        };
        let cuboid = |width, height, depth| Primitive::Cuboid {
            width,
            height,
            depth,
        };
        let body = |id, primitive, material, t: [f32; 3], r: [f32; 3]| Part {
            id,
            primitive,
            material,
            mount: Mount::Body,
            translation: Vec3::from(t),
            rotation: Vec3::from(r),
        };

        let parts = vec![
            body(
                PartId::FloorGlow,
                Primitive::Disc {
                    radius: 1.2,
                    segments: 40,
                },
                Material::basic(0x5eb7ff, 0.2),
                [0.0, -1.42, 0.0],
                [-FRAC_PI_2, 0.0, 0.0],
            ),
            body(PartId::Torso, cuboid(1.05, 1.38, 0.54), shirt, [0.0, -0.1, 0.0], [0.0; 3]),
            body(PartId::Neck, limb(0.14, 0.14, 0.2), skin, [0.0, 0.72, 0.0], [0.0; 3]),
            body(PartId::Head, Primitive::sphere(0.44, 30), skin, [0.0, 1.08, 0.0], [0.0; 3]),
            body(
                PartId::Hair,
                Primitive::Sphere {
                    radius: 0.46,
                    segments: 30,
                    rings: 30,
                    theta_length: PI * 0.6,
                },
                hair,
                [0.0, 1.24, 0.0],
                [0.0; 3],
            ),
            body(PartId::Backpack, cuboid(0.84, 1.02, 0.28), pants, [0.0, -0.1, -0.38], [0.0; 3]),
            body(PartId::Tie, cuboid(0.12, 0.62, 0.04), tie, [0.0, -0.2, 0.28], [0.0; 3]),
            body(PartId::LeftArm, limb(0.11, 0.1, 0.92), shirt, [-0.66, 0.08, 0.03], [0.0, 0.0, 0.22]),
            body(PartId::RightArm, limb(0.11, 0.1, 0.92), shirt, [0.64, 0.02, 0.11], [0.58, 0.0, -0.95]),
            body(PartId::LeftHand, Primitive::sphere(0.12, 16), skin, [-0.83, -0.38, 0.02], [0.0; 3]),
            body(PartId::RightHand, Primitive::sphere(0.12, 16), skin, [0.92, -0.3, 0.28], [0.0; 3]),
            body(PartId::LeftLeg, limb(0.13, 0.12, 0.96), pants, [-0.24, -1.18, 0.03], [0.0; 3]),
            body(PartId::RightLeg, limb(0.13, 0.12, 0.96), pants, [0.24, -1.18, 0.03], [0.0; 3]),
            body(PartId::LeftShoe, cuboid(0.33, 0.14, 0.54), shoe, [-0.24, -1.73, 0.15], [0.0; 3]),
            body(PartId::RightShoe, cuboid(0.33, 0.14, 0.54), shoe, [0.24, -1.73, 0.15], [0.0; 3]),
            Part {
                id: PartId::LaptopBase,
                primitive: cuboid(0.5, 0.05, 0.38),
                material: laptop,
                mount: Mount::Laptop,
                translation: Vec3::ZERO,
                rotation: Vec3::ZERO,
            },
            Part {
                id: PartId::LaptopScreen,
                primitive: cuboid(0.5, 0.29, 0.03),
                material: glass,
                mount: Mount::Laptop,
                translation: Vec3::new(0.0, 0.17, -0.13),
                rotation: Vec3::new(-0.95, 0.0, 0.0),
            },
            body(
                PartId::RingA,
                Primitive::Torus {
                    radius: 1.26,
                    tube: 0.02,
                    radial_segments: 16,
                    tubular_segments: 100,
                },
                Material::basic(0x67f1ff, 0.42),
                [0.0, 0.2, 0.0],
                [FRAC_PI_2, 0.0, 0.0],
            ),
            body(
                PartId::RingB,
                Primitive::Torus {
                    radius: 1.55,
                    tube: 0.012,
                    radial_segments: 12,
                    tubular_segments: 100,
                },
                Material::basic(0x77a7ff, 0.32),
                [0.0, 0.0, 0.0],
                [0.0, FRAC_PI_2, 0.0],
            ),
        ];

        Self {
            parts,
            scale: AVATAR_SCALE,
            laptop_translation: Vec3::new(1.06, -0.3, 0.44),
            laptop_rotation: Vec3::new(0.0, -0.52, -0.32),
        }
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn index_of(&self, id: PartId) -> Option<usize> {
        self.parts.iter().position(|p| p.id == id)
    }

    /// World transform of the figure root.
    pub fn root_matrix(&self, pose: &AvatarPose) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            euler(Vec3::new(0.0, pose.yaw, pose.roll)),
            pose.position,
        )
    }

    /// One instance per part, in part order.
    pub fn pose(&self, pose: &AvatarPose) -> SmallVec<[PartInstance; 24]> {
        let root = self.root_matrix(pose);
        let laptop_rotation = Vec3::new(pose.laptop_x, self.laptop_rotation.y, self.laptop_rotation.z);
        let laptop = root * local(self.laptop_translation, laptop_rotation);

        self.parts
            .iter()
            .enumerate()
            .map(|(i, part)| {
                let mut rotation = part.rotation;
                let mut opacity = part.material.opacity;
                match part.id {
                    PartId::LeftArm | PartId::RightArm | PartId::LeftLeg | PartId::RightLeg => {
                        rotation.x = match part.id {
                            PartId::LeftArm => pose.left_arm_x,
                            PartId::RightArm => pose.right_arm_x,
                            PartId::LeftLeg => pose.left_leg_x,
                            _ => pose.right_leg_x,
                        };
                    }
                    PartId::RingA => rotation.z = pose.ring_a_spin,
                    PartId::RingB => rotation.x = pose.ring_b_spin,
                    PartId::FloorGlow => opacity = pose.glow_opacity,
                    _ => {}
                }
                let parent = match part.mount {
                    Mount::Body => root,
                    Mount::Laptop => laptop,
                };
                let [r, g, b] = part.material.color;
                PartInstance {
                    part: i,
                    model: parent * local(part.translation, rotation),
                    color: Vec4::new(r, g, b, opacity),
                }
            })
            .collect()
    }
}
