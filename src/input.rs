use bevy::prelude::*;

use crate::config::GameConfig;
use crate::system_order::PrePhysicsSet;

/// Current directional-movement request derived from raw keyboard state.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SteerIntent {
    Left,
    Right,
    #[default]
    None,
}

/// Resolved key bindings (from the `keys` config section).
#[derive(Resource, Debug, Clone, Copy)]
pub struct SteerKeys {
    pub left: KeyCode,
    pub right: KeyCode,
}

impl Default for SteerKeys {
    fn default() -> Self {
        Self {
            left: KeyCode::KeyQ,
            right: KeyCode::KeyD,
        }
    }
}

pub struct SteerInputPlugin;

impl Plugin for SteerInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SteerIntent>()
            .init_resource::<ButtonInput<KeyCode>>()
            .add_systems(Startup, resolve_keys)
            .add_systems(Update, read_steer_keys.in_set(PrePhysicsSet));
    }
}

fn resolve_keys(mut commands: Commands, cfg: Option<Res<GameConfig>>) {
    let defaults = SteerKeys::default();
    let keys = match cfg {
        Some(cfg) => SteerKeys {
            left: parse_key(&cfg.keys.left).unwrap_or_else(|e| {
                warn!("keys.left: {e}; falling back to {:?}", defaults.left);
                defaults.left
            }),
            right: parse_key(&cfg.keys.right).unwrap_or_else(|e| {
                warn!("keys.right: {e}; falling back to {:?}", defaults.right);
                defaults.right
            }),
        },
        None => defaults,
    };
    commands.insert_resource(keys);
}

/// Key-down for a steering key always wins over the prior state; any key-up
/// clears the intent unconditionally, whichever key was released.
pub fn read_steer_keys(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<SteerKeys>,
    mut intent: ResMut<SteerIntent>,
) {
    if keys.get_just_released().next().is_some() {
        *intent = SteerIntent::None;
    }
    if keys.just_pressed(bindings.left) {
        *intent = SteerIntent::Left;
    }
    if keys.just_pressed(bindings.right) {
        *intent = SteerIntent::Right;
    }
}

pub fn parse_key(name: &str) -> Result<KeyCode, String> {
    let kc = match name {
        "Q" | "KeyQ" => KeyCode::KeyQ,
        "D" | "KeyD" => KeyCode::KeyD,
        "A" | "KeyA" => KeyCode::KeyA,
        "S" | "KeyS" => KeyCode::KeyS,
        "W" | "KeyW" => KeyCode::KeyW,
        "Z" | "KeyZ" => KeyCode::KeyZ,
        "E" | "KeyE" => KeyCode::KeyE,
        "Left" | "ArrowLeft" => KeyCode::ArrowLeft,
        "Right" | "ArrowRight" => KeyCode::ArrowRight,
        other => return Err(format!("unsupported key name '{other}' (extend parser)")),
    };
    Ok(kc)
}
