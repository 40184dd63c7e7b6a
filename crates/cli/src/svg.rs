use std::path::Path;

use anyhow::Context;
use log::info;
use strata::{Polygon2D, RenderArtifact};
use svg::node::element::{Polygon, Rectangle};
use svg::Document;

use crate::{args, layers};

pub fn svg_command(args: args::SvgArgs) -> anyhow::Result<()> {
    let scene = layers::load_scene(&args.render.stl_dir, &args.render.layers)?;
    let artifact = strata::generate(scene, &args.render.config())?;
    write_svg(&args.output, &artifact)
}

fn points_attr(polygon: &Polygon2D) -> String {
    polygon
        .points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builds the svg document for an artifact.
///
/// Polygons are written in emission order so later ones paint over earlier ones.
pub fn build_document(artifact: &RenderArtifact) -> Document {
    let size = artifact.canvas_size;
    // Transparent background for better compositing.
    let background = Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", size)
        .set("height", size)
        .set("fill", "none");
    artifact.polygons.iter().fold(
        Document::new()
            .set("width", size)
            .set("height", size)
            .set("viewBox", format!("0 0 {size} {size}"))
            .add(background),
        |doc, polygon| {
            doc.add(
                Polygon::new()
                    .set("points", points_attr(polygon))
                    .set("fill", polygon.fill.to_svg_fill())
                    .set("stroke", "none"),
            )
        },
    )
}

pub fn render_svg(artifact: &RenderArtifact) -> String {
    build_document(artifact).to_string()
}

pub fn write_svg<P: AsRef<Path>>(p: P, artifact: &RenderArtifact) -> anyhow::Result<()> {
    let p = p.as_ref();
    info!("Generating SVG: {}", p.display());
    svg::save(p, &build_document(artifact)).with_context(|| format!("writing {}", p.display()))?;
    info!("  Saved SVG with {} polygons", artifact.polygons.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Point2;
    use strata::Rgb;
    use strata_test_data::TERRAIN_DIR;

    fn artifact() -> RenderArtifact {
        RenderArtifact {
            canvas_size: 10,
            polygons: vec![
                Polygon2D {
                    points: vec![
                        pt(0.0, 10.0),
                        pt(10.0, 10.0),
                        pt(0.0, 0.5),
                    ],
                    fill: Rgb::new(10, 20, 30),
                },
                Polygon2D {
                    points: vec![
                        pt(1.0, 1.0),
                        pt(2.0, 1.0),
                        pt(1.0, 2.0),
                    ],
                    fill: Rgb::new(200, 100, 0),
                },
            ],
        }
    }

    fn pt(x: f32, y: f32) -> Point2<f32> {
        Point2::new(x, y)
    }

    #[test]
    fn document_structure() {
        let text = render_svg(&artifact());
        assert!(text.contains("width=\"10\""));
        assert!(text.contains("viewBox=\"0 0 10 10\""));
        assert!(text.contains("fill=\"none\""));
        assert!(text.contains("points=\"0,10 10,10 0,0.5\""));
        assert_eq!(2, text.matches("<polygon").count());
        assert_eq!(2, text.matches("stroke=\"none\"").count());
    }

    #[test]
    fn polygons_keep_emission_order() {
        let text = render_svg(&artifact());
        let first = text.find("rgb(10,20,30)").unwrap();
        let second = text.find("rgb(200,100,0)").unwrap();
        assert!(first < second);
    }

    #[test]
    fn svg_command_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("icon.svg");
        let args = args::SvgArgs {
            render: args::RenderArgs {
                stl_dir: TERRAIN_DIR.into(),
                layers: vec![1, 3],
                size: 128,
                tilt_forward: 30.0,
                tilt_left: 30.0,
            },
            output: output.clone(),
        };
        svg_command(args).unwrap();
        let text = std::fs::read_to_string(output).unwrap();
        assert!(text.contains("<svg"));
        assert!(text.contains("<polygon"));
    }

    #[test]
    fn svg_command_fails_without_meshes() {
        let dir = tempfile::tempdir().unwrap();
        let args = args::SvgArgs {
            render: args::RenderArgs {
                stl_dir: dir.path().to_path_buf(),
                layers: vec![1],
                size: 128,
                tilt_forward: 30.0,
                tilt_left: 30.0,
            },
            output: dir.path().join("icon.svg"),
        };
        assert!(svg_command(args).is_err());
        assert!(!dir.path().join("icon.svg").exists());
    }
}
