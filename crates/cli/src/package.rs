use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context};
use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::ExtendedColorType;
use log::{info, warn};
use strata::RenderArtifact;

use crate::raster::Rasterizer;
use crate::{args, layers, svg};

/// Sizes and names of the images a macOS iconset must contain.
pub const ICNS_SIZES: [(u32, &str); 10] = [
    (16, "16x16"),
    (32, "16x16@2x"),
    (32, "32x32"),
    (64, "32x32@2x"),
    (128, "128x128"),
    (256, "128x128@2x"),
    (256, "256x256"),
    (512, "256x256@2x"),
    (512, "512x512"),
    (1024, "512x512@2x"),
];

pub const ICO_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

pub const HICOLOR_SIZES: [u32; 7] = [16, 32, 48, 64, 128, 256, 512];

/// What `package_all` managed to produce.
///
/// Only the master svg is required; every other format is best effort.
#[derive(Debug)]
pub struct PackageReport {
    pub svg: PathBuf,
    pub icns: Option<PathBuf>,
    pub ico: Option<PathBuf>,
    pub hicolor: Option<PathBuf>,
    pub warnings: Vec<String>,
}

impl PackageReport {
    fn record<T>(&mut self, format: &str, result: anyhow::Result<T>) -> Option<T> {
        match result {
            Ok(v) => Some(v),
            Err(e) => {
                let message = format!("{format} not created: {e:#}");
                warn!("  {message}");
                self.warnings.push(message);
                None
            }
        }
    }
}

pub fn icon_command(args: args::IconArgs) -> anyhow::Result<()> {
    let config = args.render.config();
    info!("STL directory: {}", args.render.stl_dir.display());
    info!("Output directory: {}", args.output_dir.display());
    info!("Layers: {:?}", args.render.layers);
    info!("Icon size: {0}x{0}", config.icon_size);

    let scene = layers::load_scene(&args.render.stl_dir, &args.render.layers)?;
    let artifact = strata::generate(scene, &config)?;

    let icons_dir = args.output_dir.join("icons");
    let report = package_all(&artifact, &icons_dir, &args.app_name)?;

    info!("Icon generation complete");
    info!("  Master SVG: {}", report.svg.display());
    if let Some(icns) = &report.icns {
        info!("  macOS: {}", icns.display());
    }
    if let Some(ico) = &report.ico {
        info!("  Windows: {}", ico.display());
    }
    if let Some(hicolor) = &report.hicolor {
        info!("  Linux: {}", hicolor.display());
    }
    Ok(())
}

/// Writes the master svg into `icons_dir`, then every packaged format derived from it.
///
/// Failing to write the svg is an error. Packaged formats that fail are left out
/// and reported as warnings; whatever was already written stays in place.
pub fn package_all(
    artifact: &RenderArtifact,
    icons_dir: &Path,
    app_name: &str,
) -> anyhow::Result<PackageReport> {
    std::fs::create_dir_all(icons_dir)
        .with_context(|| format!("creating {}", icons_dir.display()))?;

    let master = icons_dir.join("app_icon.svg");
    svg::write_svg(&master, artifact)?;

    let mut report = PackageReport {
        svg: master,
        icns: None,
        ico: None,
        hicolor: None,
        warnings: Vec::new(),
    };

    let svg_text = svg::render_svg(artifact);
    let Some(rasterizer) = report.record("rasterized icons", Rasterizer::from_svg(&svg_text)) else {
        return Ok(report);
    };

    let icns = icons_dir.join("app_icon.icns");
    report.icns = report
        .record(".icns", generate_icns(&rasterizer, &icns))
        .map(|_| icns);

    let ico = icons_dir.join("app_icon.ico");
    report.ico = report
        .record(".ico", generate_ico(&rasterizer, &ico))
        .map(|_| ico);

    let hicolor = icons_dir.join("hicolor");
    report.hicolor = report
        .record(
            "hicolor icons",
            generate_hicolor(&rasterizer, &hicolor, app_name),
        )
        .map(|_| hicolor);

    Ok(report)
}

/// Builds a macOS `.icns` with `iconutil`, which only exists on macOS.
pub fn generate_icns(rasterizer: &Rasterizer, output: &Path) -> anyhow::Result<()> {
    info!("Generating macOS .icns: {}", output.display());
    let iconset = output.with_extension("iconset");
    std::fs::create_dir_all(&iconset)
        .with_context(|| format!("creating {}", iconset.display()))?;

    let result = write_iconset(rasterizer, &iconset).and_then(|_| run_iconutil(&iconset, output));
    // The iconset is scratch space either way.
    let _ = std::fs::remove_dir_all(&iconset);
    result
}

fn write_iconset(rasterizer: &Rasterizer, iconset: &Path) -> anyhow::Result<()> {
    for (size, name) in ICNS_SIZES {
        rasterizer.write_png(iconset.join(format!("icon_{name}.png")), size)?;
    }
    Ok(())
}

fn run_iconutil(iconset: &Path, output: &Path) -> anyhow::Result<()> {
    let status = Command::new("iconutil")
        .arg("-c")
        .arg("icns")
        .arg(iconset)
        .arg("-o")
        .arg(output)
        .status()
        .with_context(|| {
            format!(
                "running iconutil; you can manually run: iconutil -c icns {}",
                iconset.display()
            )
        })?;
    if !status.success() {
        bail!("iconutil exited with {status}");
    }
    info!("  Created {}", output.display());
    Ok(())
}

/// Builds a Windows `.ico` holding one PNG encoded frame per size.
pub fn generate_ico(rasterizer: &Rasterizer, output: &Path) -> anyhow::Result<()> {
    info!("Generating Windows .ico: {}", output.display());
    let frames = ICO_SIZES
        .iter()
        .map(|&size| -> anyhow::Result<IcoFrame<'static>> {
            let png = rasterizer.png(size)?;
            Ok(IcoFrame::with_encoded(
                png,
                size,
                size,
                ExtendedColorType::Rgba8,
            )?)
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let file = File::create(output).with_context(|| format!("creating {}", output.display()))?;
    IcoEncoder::new(BufWriter::new(file))
        .encode_images(&frames)
        .with_context(|| format!("encoding {}", output.display()))?;
    info!("  Created {}", output.display());
    Ok(())
}

/// Writes `hicolor/<size>x<size>/apps/<app_name>.png` for the freedesktop icon theme.
pub fn generate_hicolor(
    rasterizer: &Rasterizer,
    hicolor_dir: &Path,
    app_name: &str,
) -> anyhow::Result<()> {
    info!("Generating Linux PNG icons");
    for size in HICOLOR_SIZES {
        let apps = hicolor_dir.join(format!("{size}x{size}")).join("apps");
        std::fs::create_dir_all(&apps).with_context(|| format!("creating {}", apps.display()))?;
        rasterizer.write_png(apps.join(format!("{app_name}.png")), size)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata::{generate, RenderConfig};
    use strata_test_data::TERRAIN_DIR;

    fn artifact() -> RenderArtifact {
        let scene = layers::load_scene(Path::new(TERRAIN_DIR), &[1, 3, 5]).unwrap();
        let config = RenderConfig {
            icon_size: 64,
            ..Default::default()
        };
        generate(scene, &config).unwrap()
    }

    #[test]
    fn packages_every_format_it_can() {
        let dir = tempfile::tempdir().unwrap();
        let icons = dir.path().join("icons");
        let report = package_all(&artifact(), &icons, "topo-gen-gui").unwrap();

        assert!(report.svg.is_file());
        assert_eq!(Some(icons.join("app_icon.ico")), report.ico);
        assert_eq!(Some(icons.join("hicolor")), report.hicolor);
        for size in HICOLOR_SIZES {
            let png = icons.join(format!("hicolor/{size}x{size}/apps/topo-gen-gui.png"));
            let decoded = image::open(&png).unwrap();
            assert_eq!(size, decoded.width());
        }

        // iconutil is macOS only. Without it the icns is missing and reported,
        // but everything else is still produced.
        match &report.icns {
            Some(icns) => assert!(icns.is_file()),
            None => {
                assert!(report.warnings.iter().any(|w| w.starts_with(".icns")));
                assert!(!icons.join("app_icon.iconset").exists());
            }
        }
    }

    #[test]
    fn ico_contains_every_size() {
        let dir = tempfile::tempdir().unwrap();
        let rasterizer = Rasterizer::from_svg(&svg::render_svg(&artifact())).unwrap();
        let path = dir.path().join("app.ico");
        generate_ico(&rasterizer, &path).unwrap();

        let data = std::fs::read(&path).unwrap();
        // ICONDIR header: reserved 0, type 1 (icon), image count.
        assert_eq!([0, 0, 1, 0], data[..4]);
        assert_eq!(ICO_SIZES.len() as u16, u16::from_le_bytes([data[4], data[5]]));
    }

    #[test]
    fn unwritable_output_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("icons");
        std::fs::write(&blocker, b"a file, not a directory").unwrap();
        assert!(package_all(&artifact(), &blocker, "app").is_err());
    }

    #[test]
    fn icon_command_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let args = args::IconArgs {
            render: args::RenderArgs {
                stl_dir: TERRAIN_DIR.into(),
                layers: vec![1, 3, 5, 7, 9, 11],
                size: 128,
                tilt_forward: 30.0,
                tilt_left: 30.0,
            },
            output_dir: dir.path().to_path_buf(),
            app_name: "terrain".to_string(),
        };
        icon_command(args).unwrap();
        assert!(dir.path().join("icons/app_icon.svg").is_file());
        assert!(dir.path().join("icons/app_icon.ico").is_file());
        assert!(dir
            .path()
            .join("icons/hicolor/512x512/apps/terrain.png")
            .is_file());
    }

    #[test]
    fn icon_command_fails_on_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let args = args::IconArgs {
            render: args::RenderArgs {
                stl_dir: dir.path().join("missing"),
                layers: vec![1],
                size: 128,
                tilt_forward: 30.0,
                tilt_left: 30.0,
            },
            output_dir: dir.path().to_path_buf(),
            app_name: "terrain".to_string(),
        };
        assert!(icon_command(args).is_err());
        assert!(!dir.path().join("icons").exists());
    }
}
