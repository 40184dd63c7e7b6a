use std::path::PathBuf;

use clap::{Parser, Subcommand};
use strata::config::{DEFAULT_ICON_SIZE, DEFAULT_TILT_DEG};
use strata::RenderConfig;

/// Options shared by every command that renders a scene.
#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Directory containing STL layer files.
    pub stl_dir: PathBuf,

    /// Layer numbers to include.
    #[arg(long, num_args = 1.., default_values_t = [1, 3, 5, 7, 9, 11])]
    pub layers: Vec<i32>,

    /// Edge length of the master icon, in pixels.
    #[arg(long, default_value_t = DEFAULT_ICON_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
    pub size: u32,

    /// Forward tilt angle in degrees.
    #[arg(long, default_value_t = DEFAULT_TILT_DEG, allow_negative_numbers = true)]
    pub tilt_forward: f32,

    /// Left tilt angle in degrees.
    #[arg(long, default_value_t = DEFAULT_TILT_DEG, allow_negative_numbers = true)]
    pub tilt_left: f32,
}

impl RenderArgs {
    pub fn config(&self) -> RenderConfig {
        RenderConfig {
            icon_size: self.size,
            tilt_forward: self.tilt_forward,
            tilt_left: self.tilt_left,
            ..Default::default()
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct IconArgs {
    #[command(flatten)]
    pub render: RenderArgs,

    /// Output directory. Icons are written to an `icons` directory inside it.
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// File name used for the Linux hicolor icons.
    #[arg(long, default_value = "topo-gen-gui")]
    pub app_name: String,
}

#[derive(clap::Args, Debug)]
pub struct SvgArgs {
    #[command(flatten)]
    pub render: RenderArgs,

    /// Output path for the svg file.
    #[arg(short, long)]
    pub output: PathBuf,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render the master svg and package it for macOS, Windows and Linux.
    Icon(IconArgs),
    /// Render only the master svg.
    Svg(SvgArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_defaults() {
        let args = Args::try_parse_from(["strata", "icon", "layers/"]).unwrap();
        let Commands::Icon(icon) = args.command else {
            panic!("expected icon command");
        };
        assert_eq!(PathBuf::from("layers/"), icon.render.stl_dir);
        assert_eq!(vec![1, 3, 5, 7, 9, 11], icon.render.layers);
        assert_eq!(PathBuf::from("."), icon.output_dir);
        assert_eq!("topo-gen-gui", icon.app_name);
        assert_eq!(RenderConfig::default(), icon.render.config());
    }

    #[test]
    fn svg_overrides() {
        let args = Args::try_parse_from([
            "strata",
            "svg",
            "in",
            "-o",
            "out.svg",
            "--layers",
            "2",
            "4",
            "--size",
            "256",
            "--tilt-forward",
            "-15",
            "--tilt-left",
            "45.5",
        ])
        .unwrap();
        let Commands::Svg(svg) = args.command else {
            panic!("expected svg command");
        };
        assert_eq!(vec![2, 4], svg.render.layers);
        let config = svg.render.config();
        assert_eq!(256, config.icon_size);
        assert_eq!(-15.0, config.tilt_forward);
        assert_eq!(45.5, config.tilt_left);
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(Args::try_parse_from(["strata", "icon", "in", "--size", "0"]).is_err());
    }

    #[test]
    fn stl_dir_is_required() {
        assert!(Args::try_parse_from(["strata", "icon"]).is_err());
    }
}
