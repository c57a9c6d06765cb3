//! Preset management commands.

use crate::commands::common::{PanArgs, load_preset};
use clap::{Args, Subcommand};
use sway_config::{
    Preset, ensure_user_presets_dir, factory_presets, list_system_presets, list_user_presets,
    preset_name_from_path, system_presets_dir, user_presets_dir,
};
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct PresetsArgs {
    #[command(subcommand)]
    command: PresetsCommand,
}

#[derive(Subcommand)]
enum PresetsCommand {
    /// List available presets (factory and user)
    List {
        /// Show only factory presets
        #[arg(long, conflicts_with = "user")]
        factory: bool,

        /// Show only user and system presets
        #[arg(long)]
        user: bool,
    },

    /// Print a preset as TOML
    Show {
        /// Preset name or path
        name: String,
    },

    /// Save a preset, optionally starting from another (--preset) and
    /// overriding parameters
    Save {
        /// Name for the new preset
        name: String,

        /// Output file (defaults to the user presets directory)
        path: Option<PathBuf>,

        #[command(flatten)]
        pan: PanArgs,

        /// Description of the preset
        #[arg(short, long)]
        description: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show preset directories
    Paths,
}

pub fn run(args: PresetsArgs) -> anyhow::Result<()> {
    match args.command {
        PresetsCommand::List { factory, user } => {
            list_presets(!user, !factory);
            Ok(())
        }
        PresetsCommand::Show { name } => show_preset(&name),
        PresetsCommand::Save {
            name,
            path,
            pan,
            description,
            force,
        } => save_preset(&name, path, &pan, description, force),
        PresetsCommand::Paths => {
            println!("User presets:   {}", user_presets_dir().display());
            println!("System presets: {}", system_presets_dir().display());
            Ok(())
        }
    }
}

fn list_presets(show_factory: bool, show_user: bool) {
    if show_factory {
        println!("Factory Presets:");
        println!("================");
        for (id, preset) in sway_config::FACTORY_PRESET_NAMES.iter().zip(factory_presets()) {
            println!("  {:20} - {}", id, preset.description.as_deref().unwrap_or(""));
        }
        println!();
    }

    if show_user {
        println!("User Presets:");
        println!("=============");
        let files: Vec<_> = list_user_presets()
            .into_iter()
            .chain(list_system_presets())
            .collect();
        if files.is_empty() {
            println!("  (none)");
            println!();
            println!("  Create one with: sway presets save <name> --preset ping-pong --width 0.7");
        } else {
            for path in files {
                print_file_entry(&path);
            }
        }
        println!();
    }
}

fn print_file_entry(path: &Path) {
    let name = preset_name_from_path(path).unwrap_or_else(|| "unknown".to_string());
    match Preset::load(path) {
        Ok(preset) => println!(
            "  {:20} - {}",
            name,
            preset.description.as_deref().unwrap_or("")
        ),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "unreadable preset");
            println!("  {:20} - (error loading)", name);
        }
    }
}

fn show_preset(name: &str) -> anyhow::Result<()> {
    let preset = load_preset(name)?;
    print!("{}", preset.to_toml()?);
    Ok(())
}

fn save_preset(
    name: &str,
    path: Option<PathBuf>,
    pan: &PanArgs,
    description: Option<String>,
    force: bool,
) -> anyhow::Result<()> {
    let path = match path {
        Some(path) => path,
        None => ensure_user_presets_dir()?.join(format!("{name}.toml")),
    };
    if path.exists() && !force {
        anyhow::bail!(
            "'{}' already exists. Use --force to overwrite.",
            path.display()
        );
    }

    let mut preset = pan.build_preset()?;
    preset.name = name.to_string();
    if let Some(description) = description {
        preset.description = Some(description);
    }

    preset.save(&path)?;
    tracing::info!(preset = %preset.name, path = %path.display(), "saved preset");
    println!("Saved '{}' to {}", preset.name, path.display());
    Ok(())
}
