use anyhow::Context;
use bevy::prelude::*;
use clap::Parser;

use sled_rush::config::GameConfig;
use sled_rush::GamePlugin;

const DEFAULT_CONFIG_PATH: &str = "assets/config/game.ron";

#[derive(Parser, Debug)]
#[command(name = "sled_rush", about = "Steer a sled down an endless slope")]
struct Args {
    /// Config file (RON). The default path may be missing (defaults apply);
    /// an explicitly given path must parse.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Tree scatter seed (overrides trees.seed from the config)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut cfg = match &args.config {
        Some(path) => GameConfig::load_from_file(path)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => {
            let (cfg, err) = GameConfig::load_or_default(DEFAULT_CONFIG_PATH);
            if let Some(err) = err {
                eprintln!("{DEFAULT_CONFIG_PATH}: {err}; using defaults");
            }
            cfg
        }
    };
    if let Some(seed) = args.seed {
        cfg.trees.seed = Some(seed);
    }

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(cfg)
        .add_plugins(GamePlugin)
        .run();
    Ok(())
}
