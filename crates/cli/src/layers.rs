use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context};
use log::{info, warn};
use strata::Scene;
use strata_mesh::{DefaultMesh, TriangleMesh};

/// File name conventions tried for each layer, in order.
#[derive(Debug, PartialEq, Eq)]
enum Pattern {
    /// `layer_NN*.stl`
    Prefix(String),
    /// `*layer_NN*.stl`
    Contains(String),
    /// `*-NN.stl`
    Suffix(String),
}

impl Pattern {
    fn for_layer(layer: i32) -> [Pattern; 3] {
        [
            Pattern::Prefix(format!("layer_{layer:02}")),
            Pattern::Contains(format!("layer_{layer:02}")),
            Pattern::Suffix(format!("-{layer:02}")),
        ]
    }

    fn matches(&self, file_name: &str) -> bool {
        if file_name.starts_with('.') {
            return false;
        }
        let Some(stem) = file_name.strip_suffix(".stl") else {
            return false;
        };
        match self {
            Pattern::Prefix(p) => stem.starts_with(p.as_str()),
            Pattern::Contains(p) => stem.contains(p.as_str()),
            Pattern::Suffix(p) => stem.ends_with(p.as_str()),
        }
    }
}

/// Lists the file names in `dir`, sorted so pattern matches are deterministic.
fn list_files(dir: &Path) -> anyhow::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_owned());
        }
    }
    names.sort();
    Ok(names)
}

/// Picks the candidate files for `layer`, one per naming pattern that matches.
///
/// The first match of each pattern is returned, in pattern order. A file can be
/// returned more than once if it matches several patterns.
fn candidates(names: &[String], layer: i32) -> Vec<&str> {
    Pattern::for_layer(layer)
        .iter()
        .filter_map(|p| names.iter().find(|n| p.matches(n)))
        .map(String::as_str)
        .collect()
}

/// Loads one mesh per requested layer from `dir`.
///
/// Layers without a matching file, or whose files all fail to parse, are
/// skipped with a warning. Loading nothing at all is an error.
pub fn load_scene(dir: &Path, layers: &[i32]) -> anyhow::Result<Scene> {
    if !dir.is_dir() {
        bail!("STL directory not found: {}", dir.display());
    }
    info!("Loading STL layers from {}", dir.display());

    let names = list_files(dir)?;
    let mut scene = Scene::new();
    for &layer in layers {
        let mut tried = HashSet::new();
        let mut loaded = false;
        for name in candidates(&names, layer) {
            if !tried.insert(name) {
                continue;
            }
            let path = dir.join(name);
            match strata_stl::read_stl::<DefaultMesh, _>(&path) {
                Ok(mesh) => {
                    info!(
                        "  Loading layer {layer}: {name} ({} triangles)",
                        mesh.triangle_count()
                    );
                    scene.push(mesh, layer);
                    loaded = true;
                    break;
                }
                Err(e) => warn!("  Failed to load {}: {e}", path.display()),
            }
        }
        if !loaded {
            warn!("  No usable STL file found for layer {layer}");
        }
    }

    info!("Loaded {} layers", scene.len());
    if scene.is_empty() {
        bail!("No STL files loaded from {}", dir.display());
    }
    Ok(scene)
}
