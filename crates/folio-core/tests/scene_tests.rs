// Host-side tests for the avatar rig, primitive meshes and scene camera.

use folio_core::*;
use glam::Vec3;

fn check_mesh(mesh: &MeshData) {
    assert!(!mesh.vertices.is_empty());
    assert_eq!(mesh.indices.len() % 3, 0);
    let n = mesh.vertices.len() as u32;
    assert!(mesh.indices.iter().all(|&i| i < n), "index out of range");
    for v in &mesh.vertices {
        let len = Vec3::from(v.normal).length();
        assert!((len - 1.0).abs() < 1e-4 || len == 0.0);
    }
}

#[test]
fn primitives_build_valid_meshes() {
    let cube = Primitive::Cuboid {
        width: 2.0,
        height: 1.0,
        depth: 0.5,
    }
    .build();
    check_mesh(&cube);
    assert_eq!(cube.vertices.len(), 24);
    assert_eq!(cube.triangle_count(), 12);
    for v in &cube.vertices {
        assert_eq!(v.position[0].abs(), 1.0);
        assert_eq!(v.position[1].abs(), 0.5);
        assert_eq!(v.position[2].abs(), 0.25);
    }

    let disc = Primitive::Disc {
        radius: 1.0,
        segments: 8,
    }
    .build();
    check_mesh(&disc);
    assert_eq!(disc.vertices.len(), 10);
    assert_eq!(disc.triangle_count(), 8);

    for part in Rig::student().parts() {
        check_mesh(&part.primitive.build());
    }
}

#[test]
fn sphere_vertices_sit_on_radius() {
    let mesh = Primitive::sphere(0.44, 12).build();
    check_mesh(&mesh);
    for v in &mesh.vertices {
        assert!((Vec3::from(v.position).length() - 0.44).abs() < 1e-4);
    }
    let cap = Primitive::Sphere {
        radius: 1.0,
        segments: 12,
        rings: 12,
        theta_length: std::f32::consts::PI * 0.6,
    }
    .build();
    let lowest = cap
        .vertices
        .iter()
        .map(|v| v.position[1])
        .fold(f32::INFINITY, f32::min);
    assert!(lowest > -0.4, "cap stops short of the bottom");
}

#[test]
fn degenerate_segment_counts_are_raised() {
    let mesh = Primitive::Cylinder {
        radius_top: 1.0,
        radius_bottom: 1.0,
        height: 1.0,
        segments: 0,
    }
    .build();
    check_mesh(&mesh);
    assert!(mesh.triangle_count() >= 3);
}

#[test]
fn rig_layout() {
    let rig = Rig::student();
    assert_eq!(rig.parts().len(), 19);
    assert_eq!(rig.index_of(PartId::FloorGlow), Some(0));
    assert_eq!(rig.index_of(PartId::RingB), Some(18));

    let transparent: Vec<PartId> = rig
        .parts()
        .iter()
        .filter(|p| p.material.is_transparent())
        .map(|p| p.id)
        .collect();
    assert_eq!(
        transparent,
        [PartId::FloorGlow, PartId::LaptopScreen, PartId::RingA, PartId::RingB]
    );
    assert!(rig
        .parts()
        .iter()
        .filter(|p| p.mount == Mount::Laptop)
        .all(|p| matches!(p.id, PartId::LaptopBase | PartId::LaptopScreen)));
}

#[test]
fn pose_applies_overrides() {
    let rig = Rig::student();
    let pose = AvatarPose {
        position: Vec3::new(1.0, 2.0, 0.0),
        glow_opacity: 0.3,
        ..AvatarPose::default()
    };
    let instances = rig.pose(&pose);
    assert_eq!(instances.len(), rig.parts().len());
    for (i, inst) in instances.iter().enumerate() {
        assert_eq!(inst.part, i);
    }

    let glow = &instances[rig.index_of(PartId::FloorGlow).unwrap()];
    assert_eq!(glow.color.w, 0.3);
    let screen = &instances[rig.index_of(PartId::LaptopScreen).unwrap()];
    assert_eq!(screen.color.w, 0.42);

    // torso sits at root + scaled offset
    let torso = &instances[rig.index_of(PartId::Torso).unwrap()];
    let origin = torso.model.transform_point3(Vec3::ZERO);
    assert!(origin.distance(Vec3::new(1.0, 2.0 - 0.1 * AVATAR_SCALE, 0.0)) < 1e-5);
}

#[test]
fn limbs_swing_with_pose() {
    let rig = Rig::student();
    let arm = rig.index_of(PartId::LeftArm).unwrap();
    let rest = rig.pose(&AvatarPose::default())[arm].model;
    let swung = rig.pose(&AvatarPose {
        left_arm_x: 0.5,
        ..AvatarPose::default()
    })[arm]
        .model;
    assert_ne!(rest, swung);
    // swinging rotates about the part origin
    assert!(rest
        .transform_point3(Vec3::ZERO)
        .distance(swung.transform_point3(Vec3::ZERO))
        < 1e-5);
}

#[test]
fn hex_colours_are_linearised() {
    assert!(hex_linear(0xffffff).iter().all(|c| (c - 1.0).abs() < 1e-6));
    assert_eq!(hex_linear(0x000000), [0.0, 0.0, 0.0]);
    let [r, g, b] = hex_linear(0x808080);
    assert!((r - 0.2158).abs() < 1e-3);
    assert_eq!(r, g);
    assert_eq!(g, b);
}

#[test]
fn camera_looks_down_negative_z() {
    let camera = Camera::avatar_view(1600.0, 900.0);
    assert!((camera.aspect - 16.0 / 9.0).abs() < 1e-6);

    let ahead = camera.project(Vec3::new(0.0, CAMERA_EYE.y, 0.0)).unwrap();
    assert!(ahead.x.abs() < 1e-5 && ahead.y.abs() < 1e-5);
    assert!(ahead.z > 0.0 && ahead.z < 1.0);

    let right = camera.project(Vec3::new(1.0, CAMERA_EYE.y, 0.0)).unwrap();
    assert!(right.x > 0.0);
    assert!(camera.project(Vec3::new(0.0, 0.0, 20.0)).is_none());
}

#[test]
fn camera_ignores_empty_viewport() {
    let mut camera = Camera::avatar_view(800.0, 800.0);
    camera.set_viewport(0.0, 600.0);
    assert_eq!(camera.aspect, 1.0);
}
