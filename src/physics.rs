use bevy::prelude::*;
use rapier3d::prelude::*;
// `bevy::prelude` also exports a `Real` (the time-clock marker), which shadows
// rapier's scalar `Real` under the glob import; name it explicitly so the
// physics types below resolve to rapier's `f32`.
use rapier3d::prelude::Real;

use crate::components::PhysicsBody;
use crate::config::{GameConfig, GravityConfig};
use crate::system_order::{PhysicsStepSet, PostPhysicsSet};

/// Owns the rapier world: body/collider sets plus the pipeline state needed
/// to step them. Everything else in the crate talks to physics through this
/// resource.
#[derive(Resource)]
pub struct PhysicsWorld {
    pub bodies: RigidBodySet,
    pub colliders: ColliderSet,
    gravity: Vector<Real>,
    integration: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd: CCDSolver,
}

impl PhysicsWorld {
    pub fn new(gravity: Vec3) -> Self {
        Self {
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            gravity: vector![gravity.x, gravity.y, gravity.z],
            integration: IntegrationParameters::default(),
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd: CCDSolver::new(),
        }
    }

    /// Advance the simulation by the engine's own fixed timestep, independent
    /// of the render delta.
    pub fn fixed_step(&mut self) {
        self.pipeline.step(
            &self.gravity,
            &self.integration,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd,
            None,
            &(),
            &(),
        );
    }

    pub fn fixed_dt(&self) -> f32 {
        self.integration.dt
    }

    pub fn insert_body(&mut self, body: RigidBody, collider: Collider) -> RigidBodyHandle {
        let handle = self.bodies.insert(body);
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        handle
    }

    /// Attach an extra collider to an existing body, in the body's local frame.
    pub fn attach_collider(&mut self, collider: Collider, parent: RigidBodyHandle) -> ColliderHandle {
        self.colliders
            .insert_with_parent(collider, parent, &mut self.bodies)
    }

    pub fn body_pose(&self, handle: RigidBodyHandle) -> Option<(Vec3, Quat)> {
        self.bodies
            .get(handle)
            .map(|rb| (to_vec3(rb.translation()), to_quat(rb.rotation())))
    }
}

pub fn to_vec3(v: &Vector<Real>) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

pub fn to_quat(q: &Rotation<Real>) -> Quat {
    Quat::from_xyzw(q.i, q.j, q.k, q.w)
}

pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        let gravity_y = app
            .world()
            .get_resource::<GameConfig>()
            .map(|c| c.gravity.y)
            .unwrap_or_else(|| GravityConfig::default().y);
        app.insert_resource(PhysicsWorld::new(Vec3::new(0.0, gravity_y, 0.0)))
            .add_systems(
                Update,
                (
                    step_world.in_set(PhysicsStepSet),
                    sync_body_transforms.in_set(PostPhysicsSet),
                ),
            );
    }
}

fn step_world(mut world: ResMut<PhysicsWorld>) {
    world.fixed_step();
}

/// Sole channel by which physics state becomes visible: copy each paired
/// body's pose onto the entity transform. A handle that no longer resolves is
/// a broken pairing; it is reported, never silently misread.
pub fn sync_body_transforms(
    world: Res<PhysicsWorld>,
    mut q: Query<(Entity, &PhysicsBody, &mut Transform)>,
) {
    for (entity, body, mut tf) in &mut q {
        match world.bodies.get(body.0) {
            Some(rb) => {
                tf.translation = to_vec3(rb.translation());
                tf.rotation = to_quat(rb.rotation());
            }
            None => warn!(?entity, "physics body handle no longer resolves; transform left untouched"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_dt_is_independent_of_render_delta() {
        let world = PhysicsWorld::new(Vec3::new(0.0, -9.82, 0.0));
        assert!((world.fixed_dt() - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn dynamic_body_falls_under_gravity() {
        let mut world = PhysicsWorld::new(Vec3::new(0.0, -9.82, 0.0));
        let body = RigidBodyBuilder::dynamic()
            .translation(vector![0.0, 10.0, 0.0])
            .build();
        let collider = ColliderBuilder::cuboid(0.5, 0.5, 0.5).mass(1.0).build();
        let handle = world.insert_body(body, collider);

        for _ in 0..60 {
            world.fixed_step();
        }
        let (pos, _) = world.body_pose(handle).expect("body exists");
        assert!(pos.y < 10.0, "body did not fall: y = {}", pos.y);
        // No lateral forces act on it.
        assert!(pos.x.abs() < 1e-4);
        assert!(pos.z.abs() < 1e-4);
    }

    #[test]
    fn sync_copies_body_pose_onto_transform() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);

        let mut world = PhysicsWorld::new(Vec3::ZERO);
        let body = RigidBodyBuilder::dynamic()
            .translation(vector![1.0, 2.0, 3.0])
            .build();
        let collider = ColliderBuilder::cuboid(0.5, 0.5, 0.5).mass(1.0).build();
        let handle = world.insert_body(body, collider);
        app.insert_resource(world);
        app.add_systems(Update, sync_body_transforms);

        let paired = app
            .world_mut()
            .spawn((PhysicsBody(handle), Transform::default()))
            .id();
        app.update();

        let tf = app.world().get::<Transform>(paired).unwrap();
        assert!((tf.translation - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-6);
        assert_eq!(tf.rotation, Quat::IDENTITY);
    }

    #[test]
    fn dangling_handle_leaves_transform_untouched() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);

        let mut world = PhysicsWorld::new(Vec3::ZERO);
        let body = RigidBodyBuilder::dynamic().build();
        let collider = ColliderBuilder::cuboid(0.5, 0.5, 0.5).mass(1.0).build();
        let handle = world.insert_body(body, collider);
        world
            .bodies
            .remove(handle, &mut world.islands, &mut world.colliders, &mut world.impulse_joints, &mut world.multibody_joints, true);
        app.insert_resource(world);
        app.add_systems(Update, sync_body_transforms);

        let start = Transform::from_xyz(7.0, 8.0, 9.0);
        let paired = app.world_mut().spawn((PhysicsBody(handle), start)).id();
        app.update();

        let tf = app.world().get::<Transform>(paired).unwrap();
        assert_eq!(tf.translation, start.translation);
    }
}
