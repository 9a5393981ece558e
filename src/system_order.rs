//! Central system ordering labels to make update sequence explicit.
//! Stages (high-level):
//! 1. PrePhysics (steering intent + kinematic nudges before the step)
//! 2. PhysicsStep (fixed-timestep world advance)
//! 3. PostPhysics (body -> transform sync, camera follow)
//! 4. Rendering (implicit)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PrePhysicsSet; // input + displacement applied before the simulation step

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PhysicsStepSet; // the fixed step itself

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PostPhysicsSet; // transform sync + camera, after the step
