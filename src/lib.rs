pub mod auto_close;
pub mod camera;
pub mod components;
pub mod config;
pub mod game;
pub mod input;
pub mod materials;
pub mod physics;
pub mod sled;
pub mod system_order;
pub mod terrain;

// Curated re-exports
pub use components::{FollowCamera, PhysicsBody, Sled, Slope, TreeObstacle};
pub use config::{GameConfig, WindowConfig};
pub use game::GamePlugin;
pub use input::SteerIntent;
pub use physics::PhysicsWorld;
