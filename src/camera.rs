use bevy::prelude::*;

use crate::components::{FollowCamera, Sled};
use crate::config::GameConfig;
use crate::physics::sync_body_transforms;
use crate::system_order::PostPhysicsSet;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera).add_systems(
            Update,
            follow_sled.in_set(PostPhysicsSet).after(sync_body_transforms),
        );
    }
}

fn setup_camera(mut commands: Commands, cfg: Res<GameConfig>) {
    commands.spawn((
        FollowCamera,
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: cfg.camera.fov_degrees.to_radians(),
            near: cfg.camera.near,
            far: cfg.camera.far,
            ..default()
        }),
        Transform::from_translation(Vec3::from(cfg.camera.offset)),
    ));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        ..default()
    });
    // Sun, so the slope and trees read as surfaces and cast shadows.
    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(20.0, 40.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// World-position follow with a fixed offset. No damping, no rotation
/// following; orientation is left to whoever else wants to drive it.
pub fn follow_sled(
    cfg: Res<GameConfig>,
    sled_q: Query<&Transform, (With<Sled>, Without<FollowCamera>)>,
    mut cam_q: Query<&mut Transform, With<FollowCamera>>,
) {
    let Ok(sled) = sled_q.single() else {
        return;
    };
    let offset = Vec3::from(cfg.camera.offset);
    for mut cam in &mut cam_q {
        cam.translation = follow_position(sled.translation, offset);
    }
}

pub fn follow_position(target: Vec3, offset: Vec3) -> Vec3 {
    target + offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follow_is_exact_offset_addition() {
        let p = follow_position(Vec3::new(1.0, -3.0, 10.0), Vec3::new(0.0, 3.0, -5.0));
        assert_eq!(p, Vec3::new(1.0, 0.0, 5.0));
    }

    #[test]
    fn camera_tracks_sled_every_frame() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(GameConfig::default());
        app.add_systems(Startup, setup_camera);
        app.add_systems(Update, follow_sled);

        let sled = app
            .world_mut()
            .spawn((Sled, Transform::from_xyz(2.0, 1.0, -40.0)))
            .id();
        app.update();

        let offset = Vec3::from(GameConfig::default().camera.offset);
        let mut cams = app
            .world_mut()
            .query_filtered::<&Transform, With<FollowCamera>>();
        let cam = cams.iter(app.world()).next().expect("camera spawned");
        assert_eq!(cam.translation, Vec3::new(2.0, 1.0, -40.0) + offset);

        // Move the sled; the camera snaps to the new offset position.
        app.world_mut().get_mut::<Transform>(sled).unwrap().translation.x = -7.5;
        app.update();
        let cam = cams.iter(app.world()).next().unwrap();
        assert_eq!(cam.translation, Vec3::new(-7.5, 1.0, -40.0) + offset);
    }
}
