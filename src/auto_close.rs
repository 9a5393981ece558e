// Exits the app after `window.autoClose` seconds. 0.0 (default) = run
// indefinitely. Handy for demo recordings and CI smoke runs.

use bevy::prelude::*;

use crate::config::GameConfig;

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, tick_auto_close);
    }
}

fn tick_auto_close(
    time: Res<Time>,
    cfg: Res<GameConfig>,
    mut timer: Local<Option<Timer>>,
    mut ev_exit: EventWriter<AppExit>,
) {
    if cfg.window.auto_close <= 0.0 {
        return;
    }
    let t = timer
        .get_or_insert_with(|| Timer::from_seconds(cfg.window.auto_close, TimerMode::Once));
    t.tick(time.delta());
    if t.just_finished() {
        info!("auto-close timer finished, requesting app exit");
        ev_exit.write(AppExit::Success);
    }
}
