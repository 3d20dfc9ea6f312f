//! Systems for spawning and driving the player vehicle.
use bevy::{math::primitives::Cuboid, prelude::*};

use crate::{
    mission::{types::GameStatus, MissionRestarted, MissionState},
    player::components::{ChaseCamera, Vehicle},
};

const VEHICLE_START: Vec3 = Vec3::new(0.0, 0.6, 0.0);
const VEHICLE_SIZE: Vec3 = Vec3::new(2.0, 1.2, 4.0);
const MAP_HALF_EXTENT: f32 = 95.0;

/// Spawns the delivery vehicle and the chase camera behind it.
pub fn spawn_vehicle(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Mesh::from(Cuboid::new(
            VEHICLE_SIZE.x,
            VEHICLE_SIZE.y,
            VEHICLE_SIZE.z,
        )))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(220, 40, 40),
            perceptual_roughness: 0.4,
            metallic: 0.3,
            ..default()
        })),
        Transform::from_translation(VEHICLE_START),
        Vehicle::default(),
        Name::new("Delivery Vehicle"),
    ));

    let chase = ChaseCamera::default();
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(VEHICLE_START + chase.offset).looking_at(VEHICLE_START, Vec3::Y),
        chase,
    ));
}

/// Drives the vehicle with WASD or the arrow keys while the mission is running.
pub fn drive_vehicle(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mission: Res<MissionState>,
    mut query: Query<(&mut Vehicle, &mut Transform)>,
) {
    let Ok((mut vehicle, mut transform)) = query.single_mut() else {
        return;
    };
    if mission.status() != GameStatus::Running {
        vehicle.speed = 0.0;
        return;
    }

    let dt = time.delta_secs();
    let pressed = |keys: [KeyCode; 2]| keys.iter().any(|key| keyboard.pressed(*key));

    let mut steer = 0.0;
    if pressed([KeyCode::KeyA, KeyCode::ArrowLeft]) {
        steer += 1.0;
    }
    if pressed([KeyCode::KeyD, KeyCode::ArrowRight]) {
        steer -= 1.0;
    }
    if steer != 0.0 {
        transform.rotate_y(steer * vehicle.turn_rate * dt);
    }

    let mut throttle = 0.0;
    if pressed([KeyCode::KeyW, KeyCode::ArrowUp]) {
        throttle += 1.0;
    }
    if pressed([KeyCode::KeyS, KeyCode::ArrowDown]) {
        throttle -= 1.0;
    }
    vehicle.apply_throttle(throttle, dt);

    if vehicle.speed != 0.0 {
        let heading = transform.forward().as_vec3();
        let mut next = transform.translation + heading * vehicle.speed * dt;
        next.x = next.x.clamp(-MAP_HALF_EXTENT, MAP_HALF_EXTENT);
        next.z = next.z.clamp(-MAP_HALF_EXTENT, MAP_HALF_EXTENT);
        transform.translation = next;
    }
}

/// Eases the chase camera toward its slot behind the vehicle.
pub fn follow_vehicle(
    time: Res<Time>,
    vehicle: Query<&Transform, (With<Vehicle>, Without<ChaseCamera>)>,
    mut camera: Query<(&ChaseCamera, &mut Transform), Without<Vehicle>>,
) {
    let (Ok(target), Ok((chase, mut transform))) = (vehicle.single(), camera.single_mut()) else {
        return;
    };

    let desired = target.translation + target.rotation * chase.offset;
    let blend = (chase.smoothing * time.delta_secs()).clamp(0.0, 1.0);
    transform.translation = transform.translation.lerp(desired, blend);
    transform.look_at(target.translation, Vec3::Y);
}

/// Returns the vehicle to the depot whenever a new mission starts.
pub fn reset_vehicle_on_restart(
    mut restarted: MessageReader<MissionRestarted>,
    mut query: Query<(&mut Vehicle, &mut Transform)>,
) {
    if restarted.read().count() == 0 {
        return;
    }

    for (mut vehicle, mut transform) in query.iter_mut() {
        vehicle.speed = 0.0;
        *transform = Transform::from_translation(VEHICLE_START);
        debug!("Vehicle returned to start position");
    }
}
