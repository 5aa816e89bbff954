use anyhow::{Context, Result};
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::imageops::{self, FilterType};
use image::RgbaImage;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use tiny_skia::{ColorU8, PremultipliedColorU8};

/// Resample the master image to each square size, in the order given.
///
/// Filtering runs on premultiplied pixels so transparent neighbours do not
/// bleed their (black) colour into the anti-aliased edge.
pub fn resize_variants(master: &RgbaImage, sizes: &[u32]) -> Vec<RgbaImage> {
    let premultiplied = premultiply(master);
    sizes
        .iter()
        .map(|&size| {
            debug!("Creating {}x{} variant", size, size);
            demultiply(imageops::resize(&premultiplied, size, size, FilterType::Lanczos3))
        })
        .collect()
}

fn premultiply(image: &RgbaImage) -> RgbaImage {
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        let c = ColorU8::from_rgba(r, g, b, a).premultiply();
        pixel.0 = [c.red(), c.green(), c.blue(), c.alpha()];
    }
    out
}

fn demultiply(mut image: RgbaImage) -> RgbaImage {
    for pixel in image.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        // Filter overshoot can push a channel above alpha
        pixel.0 = PremultipliedColorU8::from_rgba(r.min(a), g.min(a), b.min(a), a)
            .map(|c| {
                let c = c.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .unwrap_or([0, 0, 0, 0]);
    }
    image
}

/// Pack the variants into an in-memory ICO container, one entry per image.
pub fn encode_ico(variants: &[RgbaImage]) -> Result<Vec<u8>> {
    let mut dir = IconDir::new(ResourceType::Icon);
    for variant in variants {
        let (w, h) = variant.dimensions();
        let image = IconImage::from_rgba_data(w, h, variant.as_raw().clone());
        let entry = IconDirEntry::encode(&image)
            .with_context(|| format!("Failed to encode {}x{} icon entry", w, h))?;
        dir.add_entry(entry);
    }

    let mut buf = Vec::new();
    dir.write(&mut buf).context("Failed to serialize icon container")?;
    Ok(buf)
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    Ok(())
}

/// Encode the variants and write them to `path`, replacing any existing file.
///
/// Encoding finishes before the file is opened, so a failed encode leaves
/// nothing on disk.
pub fn write_ico(path: &Path, variants: &[RgbaImage]) -> Result<()> {
    let bytes = encode_ico(variants)?;
    ensure_parent_dir(path)?;
    fs::write(path, &bytes)
        .with_context(|| format!("Failed to write icon file {}", path.display()))?;
    info!("Wrote {} icon entries ({} bytes) to {}", variants.len(), bytes.len(), path.display());
    Ok(())
}

/// Save every variant as `icon_<w>x<h>.png` inside `dir`.
pub fn export_pngs(dir: &Path, variants: &[RgbaImage]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;

    let mut written = Vec::with_capacity(variants.len());
    for variant in variants {
        let (w, h) = variant.dimensions();
        let path = dir.join(format!("icon_{}x{}.png", w, h));
        variant
            .save(&path)
            .with_context(|| format!("Failed to save {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}
