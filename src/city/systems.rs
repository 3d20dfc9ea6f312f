//! Systems for the city module.
use bevy::{
    math::primitives::{Cuboid, Plane3d, Sphere},
    prelude::*,
};

use crate::{
    city::{
        components::SiteBeacon,
        layout::CityLayout,
    },
    mission::{types::SiteKind, MissionState},
};

const GROUND_SCALE: f32 = 200.0;
const RESTAURANT_SIZE: Vec3 = Vec3::new(14.0, 9.0, 14.0);
const HOUSE_SIZE: Vec3 = Vec3::new(10.0, 6.0, 10.0);
const BEACON_RADIUS: f32 = 1.5;
const BEACON_HOVER: f32 = 4.0;
const PICKUP_BEACON_COLOR: Color = Color::srgb(1.0, 0.55, 0.0);
const DROP_OFF_BEACON_COLOR: Color = Color::srgb(0.0, 0.9, 0.5);

/// Spawns the ground plane and the sun.
pub fn spawn_city_environment(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Mesh::from(Plane3d::default()))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(70, 70, 78),
            perceptual_roughness: 0.95,
            metallic: 0.0,
            ..default()
        })),
        Transform::from_scale(Vec3::splat(GROUND_SCALE)),
        Name::new("Ground"),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 15_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(40.0, 80.0, 40.0).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Sun"),
    ));
}

/// Spawns one building and one hidden beacon per site in the layout.
pub fn spawn_sites(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    layout: Res<CityLayout>,
) {
    let beacon_mesh = meshes.add(Mesh::from(Sphere::new(BEACON_RADIUS)));

    for placement in layout.placements() {
        let site = &placement.site;
        let Some(position) = site.position else {
            warn!("Site {} ({}) has no position; not spawned", site.name, site.id);
            continue;
        };

        let (size, beacon_color) = match site.kind {
            SiteKind::Restaurant => (RESTAURANT_SIZE, PICKUP_BEACON_COLOR),
            SiteKind::House => (HOUSE_SIZE, DROP_OFF_BEACON_COLOR),
        };

        commands.spawn((
            Mesh3d(meshes.add(Mesh::from(Cuboid::new(size.x, size.y, size.z)))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: placement.color,
                perceptual_roughness: 0.7,
                metallic: 0.05,
                ..default()
            })),
            Transform::from_translation(position + Vec3::Y * size.y * 0.5),
            Name::new(site.name.clone()),
        ));

        commands.spawn((
            Mesh3d(beacon_mesh.clone()),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: beacon_color,
                emissive: beacon_color.to_linear() * 4.0,
                ..default()
            })),
            Transform::from_translation(position + Vec3::Y * (size.y + BEACON_HOVER)),
            Visibility::Hidden,
            SiteBeacon { id: site.id },
            Name::new(format!("{} beacon", site.name)),
        ));

        info!(
            "Spawned {} {} at ({:.1}, {:.1})",
            site.kind.label(),
            site.name,
            position.x,
            position.z
        );
    }
}

/// Shows the beacon of the site the player should drive to next.
pub fn update_site_beacons(
    mission: Res<MissionState>,
    mut beacons: Query<(&SiteBeacon, &mut Visibility)>,
) {
    if !mission.is_changed() {
        return;
    }

    let target = mission.order().map(|order| {
        if mission.is_carrying() {
            order.house.id
        } else {
            order.restaurant.id
        }
    });

    for (beacon, mut visibility) in beacons.iter_mut() {
        let wanted = if Some(beacon.id) == target {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        visibility.set_if_neq(wanted);
    }
}
