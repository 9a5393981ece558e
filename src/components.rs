use bevy::prelude::*;
use rapier3d::prelude::RigidBodyHandle;

#[derive(Component)]
pub struct Sled;

#[derive(Component)]
pub struct Slope;

#[derive(Component)]
pub struct TreeObstacle;

#[derive(Component)]
pub struct FollowCamera;

/// Pairs an entity's render transform with its rigid body. The sync step
/// copies the body pose onto the `Transform` of every entity carrying this.
#[derive(Component, Debug, Copy, Clone)]
pub struct PhysicsBody(pub RigidBodyHandle);
