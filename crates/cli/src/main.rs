use std::process::ExitCode;

use clap::Parser;
use log::error;

mod args;
mod layers;
mod package;
mod raster;
mod svg;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = args::Args::parse();
    let result = match args.command {
        args::Commands::Icon(icon_args) => package::icon_command(icon_args),
        args::Commands::Svg(svg_args) => svg::svg_command(svg_args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
