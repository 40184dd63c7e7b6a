use std::path::Path;

use anyhow::{anyhow, Context};
use log::info;
use resvg::{tiny_skia, usvg};

/// Renders the master svg to square bitmaps at any size.
pub struct Rasterizer {
    tree: usvg::Tree,
}

impl Rasterizer {
    pub fn from_svg(svg: &str) -> anyhow::Result<Self> {
        let tree = usvg::Tree::from_str(svg, &usvg::Options::default())
            .context("parsing master svg")?;
        Ok(Self { tree })
    }

    /// Renders onto a transparent `size` x `size` pixmap, scaling the svg uniformly.
    pub fn pixmap(&self, size: u32) -> anyhow::Result<tiny_skia::Pixmap> {
        let mut pixmap = tiny_skia::Pixmap::new(size, size)
            .ok_or_else(|| anyhow!("invalid raster size {size}"))?;
        let canvas = self.tree.size();
        let scale = size as f32 / canvas.width().max(canvas.height());
        resvg::render(
            &self.tree,
            tiny_skia::Transform::from_scale(scale, scale),
            &mut pixmap.as_mut(),
        );
        Ok(pixmap)
    }

    /// Renders and encodes as PNG.
    pub fn png(&self, size: u32) -> anyhow::Result<Vec<u8>> {
        self.pixmap(size)?
            .encode_png()
            .with_context(|| format!("encoding {size}x{size} png"))
    }

    pub fn write_png<P: AsRef<Path>>(&self, path: P, size: u32) -> anyhow::Result<()> {
        let path = path.as_ref();
        info!(
            "  Converting to PNG {size}x{size}: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );
        let png = self.png(size)?;
        std::fs::write(path, png).with_context(|| format!("writing {}", path.display()))
    }
}
