use bevy::prelude::*;

use crate::auto_close::AutoClosePlugin;
use crate::camera::CameraPlugin;
use crate::config::GameConfig;
use crate::input::SteerInputPlugin;
use crate::physics::PhysicsPlugin;
use crate::sled::SledPlugin;
use crate::system_order::{PhysicsStepSet, PostPhysicsSet, PrePhysicsSet};
use crate::terrain::TerrainPlugin;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                PrePhysicsSet,
                PhysicsStepSet.after(PrePhysicsSet),
                PostPhysicsSet.after(PhysicsStepSet),
            ),
        )
        .add_plugins((
            PhysicsPlugin,
            SteerInputPlugin,
            TerrainPlugin,
            SledPlugin,
            CameraPlugin,
            AutoClosePlugin,
        ))
        .add_systems(Startup, log_config_warnings);

        #[cfg(feature = "debug")]
        app.add_systems(Update, debug_status);
    }
}

fn log_config_warnings(cfg: Res<GameConfig>) {
    for w in cfg.validate() {
        warn!("config: {w}");
    }
}

#[cfg(feature = "debug")]
fn debug_status(
    time: Res<Time>,
    mut timer: Local<f32>,
    sled_q: Query<&Transform, With<crate::components::Sled>>,
    tree_q: Query<(), With<crate::components::TreeObstacle>>,
) {
    *timer += time.delta_secs();
    if *timer > 1.0 {
        *timer = 0.0;
        if let Ok(sled) = sled_q.single() {
            info!(
                "sled at ({:.1}, {:.1}, {:.1}) trees={}",
                sled.translation.x,
                sled.translation.y,
                sled.translation.z,
                tree_q.iter().count()
            );
        }
    }
}
