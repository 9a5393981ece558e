use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;
use rapier3d::prelude::*;

use crate::components::{PhysicsBody, Sled};
use crate::config::GameConfig;
use crate::input::{read_steer_keys, SteerIntent};
use crate::materials::{apply_surface, SurfaceKind};
use crate::physics::PhysicsWorld;
use crate::system_order::PrePhysicsSet;

pub struct SledPlugin;

impl Plugin for SledPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_sled).add_systems(
            Update,
            apply_steering.in_set(PrePhysicsSet).after(read_steer_keys),
        );
    }
}

fn spawn_sled(
    mut commands: Commands,
    mut phys: ResMut<PhysicsWorld>,
    cfg: Res<GameConfig>,
    asset_server: Option<Res<AssetServer>>,
) {
    let s = &cfg.sled;
    let body = RigidBodyBuilder::dynamic()
        .translation(vector![s.spawn[0], s.spawn[1], s.spawn[2]])
        .build();
    let collider = apply_surface(
        ColliderBuilder::cuboid(s.half_extents[0], s.half_extents[1], s.half_extents[2]),
        SurfaceKind::Slick,
        &cfg.surfaces,
    )
    .mass(s.mass)
    .build();
    let handle = phys.insert_body(body, collider);

    let mut sled = commands.spawn((
        Sled,
        PhysicsBody(handle),
        Transform::from_translation(Vec3::from(s.spawn)),
        Visibility::default(),
    ));
    // The visual arrives whenever the asset load completes; the body
    // simulates either way.
    if let Some(server) = asset_server {
        sled.insert(SceneRoot(
            server.load(GltfAssetLabel::Scene(0).from_asset(s.model.clone())),
        ));
    } else {
        info!("no asset server; sled runs without a visual");
    }
    info!("sled spawned at {:?}", s.spawn);
}

/// Direct kinematic nudge applied to the sled body position, bypassing the
/// solver. Scaled by the render delta, not the physics timestep.
pub fn apply_steering(
    time: Res<Time>,
    intent: Res<SteerIntent>,
    cfg: Res<GameConfig>,
    mut phys: ResMut<PhysicsWorld>,
    q: Query<&PhysicsBody, With<Sled>>,
) {
    let dx = steer_delta(*intent, cfg.sled.steer_speed, time.delta_secs());
    if dx == 0.0 {
        return;
    }
    for body in &q {
        if let Some(rb) = phys.bodies.get_mut(body.0) {
            let mut translation = *rb.translation();
            translation.x += dx;
            rb.set_translation(translation, true);
        }
    }
}

/// Lateral displacement for one frame. Left is +X, right is -X (the camera
/// sits behind the sled looking down the slope, so these read correctly on
/// screen).
pub fn steer_delta(intent: SteerIntent, speed: f32, delta: f32) -> f32 {
    match intent {
        SteerIntent::Left => speed * delta,
        SteerIntent::Right => -speed * delta,
        SteerIntent::None => 0.0,
    }
}
