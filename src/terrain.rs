use bevy::asset::LoadState;
use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rapier3d::prelude::*;

use crate::components::{Slope, TreeObstacle};
use crate::config::{GameConfig, TreesConfig};
use crate::materials::{apply_surface, SurfaceKind};
use crate::physics::PhysicsWorld;

/// Handle of the static slope body; tree colliders are attached to it.
#[derive(Resource, Debug, Clone, Copy)]
pub struct SlopeBody(pub RigidBodyHandle);

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PopulationState {
    /// Waiting for the tree model to finish loading.
    #[default]
    Pending,
    /// Trees scattered.
    Done,
    /// The model will never arrive; the slope stays bare.
    Skipped,
}

/// Tracks the deferred tree population.
#[derive(Resource, Debug, Default)]
pub struct TreePopulation {
    scene: Option<Handle<Scene>>,
    pub state: PopulationState,
}

pub struct TerrainPlugin;

impl Plugin for TerrainPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TreePopulation>()
            .add_systems(Startup, (spawn_slope, load_tree_model))
            .add_systems(Update, populate_trees.run_if(population_pending));
    }
}

fn population_pending(pop: Res<TreePopulation>) -> bool {
    pop.state == PopulationState::Pending
}

fn spawn_slope(
    mut commands: Commands,
    mut phys: ResMut<PhysicsWorld>,
    cfg: Res<GameConfig>,
    meshes: Option<ResMut<Assets<Mesh>>>,
    materials: Option<ResMut<Assets<StandardMaterial>>>,
) {
    let slope = &cfg.slope;

    let body = RigidBodyBuilder::fixed()
        .rotation(vector![slope.tilt, 0.0, 0.0])
        .build();
    let collider = apply_surface(
        ColliderBuilder::halfspace(Vector::z_axis()),
        SurfaceKind::Ground,
        &cfg.surfaces,
    )
    .build();
    let handle = phys.insert_body(body, collider);
    commands.insert_resource(SlopeBody(handle));

    let mut slope_entity = commands.spawn((
        Slope,
        Transform::from_rotation(Quat::from_axis_angle(Vec3::X, slope.tilt)),
        Visibility::default(),
    ));
    if let (Some(mut meshes), Some(mut materials)) = (meshes, materials) {
        slope_entity.insert((
            Mesh3d(meshes.add(Plane3d::new(
                Vec3::Z,
                Vec2::new(slope.width * 0.5, slope.length * 0.5),
            ))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.73, 0.73, 0.87),
                perceptual_roughness: 0.9,
                ..default()
            })),
        ));
    }
    info!("slope spawned (tilt {:.3} rad)", slope.tilt);
}

fn load_tree_model(
    asset_server: Option<Res<AssetServer>>,
    mut pop: ResMut<TreePopulation>,
    cfg: Res<GameConfig>,
) {
    match asset_server {
        Some(server) => {
            pop.scene = Some(server.load(GltfAssetLabel::Scene(0).from_asset(cfg.trees.model.clone())));
        }
        None => {
            warn!("no asset server; the slope stays bare");
            pop.state = PopulationState::Skipped;
        }
    }
}

/// Runs every frame until the tree scene either loads (scatter once, then
/// done) or fails (log once, skip). Population is purely additive: nothing is
/// ever removed or repositioned afterwards.
fn populate_trees(
    mut commands: Commands,
    asset_server: Option<Res<AssetServer>>,
    mut pop: ResMut<TreePopulation>,
    mut phys: ResMut<PhysicsWorld>,
    slope_body: Res<SlopeBody>,
    slope_q: Query<Entity, With<Slope>>,
    cfg: Res<GameConfig>,
) {
    let (Some(server), Some(scene)) = (asset_server, pop.scene.clone()) else {
        return;
    };
    match server.load_state(scene.id()) {
        LoadState::Loaded => {}
        LoadState::Failed(err) => {
            warn!("tree model load failed, the slope stays bare: {err}");
            pop.state = PopulationState::Skipped;
            return;
        }
        _ => return, // still loading
    }
    let Ok(slope_entity) = slope_q.single() else {
        return;
    };

    let seed = cfg.trees.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = StdRng::seed_from_u64(seed);
    let placements = scatter_positions(&mut rng, &cfg.trees);

    let t = &cfg.trees;
    // The model is authored for the other library's convention; one half turn
    // about local X puts it upright on the slope.
    let upright = Quat::from_axis_angle(Vec3::X, std::f32::consts::PI);
    for pos in &placements {
        // Collider offsets are in the slope body's local frame, so they share
        // the slope orientation.
        let collider = apply_surface(
            ColliderBuilder::cuboid(t.size[0] * 0.5, t.size[1] * 0.5, t.size[2] * 0.5)
                .translation(vector![pos.x, pos.y, pos.z]),
            SurfaceKind::Ground,
            &cfg.surfaces,
        )
        .build();
        phys.attach_collider(collider, slope_body.0);

        commands.entity(slope_entity).with_children(|parent| {
            parent.spawn((
                TreeObstacle,
                SceneRoot(scene.clone()),
                Transform {
                    translation: *pos,
                    rotation: upright,
                    ..default()
                },
            ));
        });
    }
    pop.state = PopulationState::Done;
    info!(count = placements.len(), seed, "trees scattered");
}

/// N independently uniform placements in the slope's local frame: lateral
/// across the span, longitudinal pushed away from the origin, constant
/// surface offset.
pub fn scatter_positions(rng: &mut impl Rng, cfg: &TreesConfig) -> Vec<Vec3> {
    (0..cfg.count)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-cfg.span * 0.5..cfg.span * 0.5),
                -rng.gen_range(cfg.min_depth..cfg.min_depth + cfg.max_depth),
                cfg.surface_offset,
            )
        })
        .collect()
}
