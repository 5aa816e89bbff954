//! Procedural application icon, rendered once and packed into a
//! multi-resolution `.ico` file.

pub mod compose;
pub mod config;
pub mod constants;
pub mod container;

use anyhow::Result;
use log::debug;
use std::path::{Path, PathBuf};

use config::IconConfig;
use constants::{canvas, sizes};

/// Files written by one run
#[derive(Debug, Clone)]
pub struct IconReport {
    pub ico_path: PathBuf,
    pub png_paths: Vec<PathBuf>,
}

/// Render the icon, resize it to every icon size and write the `.ico` file.
///
/// Missing parent directories are created and an existing file is replaced.
pub fn compose_and_save(output_path: impl AsRef<Path>) -> Result<PathBuf> {
    let config = IconConfig {
        output: output_path.as_ref().to_path_buf(),
        png_dir: None,
    };
    Ok(compose_and_save_with(&config)?.ico_path)
}

pub fn compose_and_save_with(config: &IconConfig) -> Result<IconReport> {
    config.validate()?;

    debug!("Rendering {}x{} canvas", canvas::SIZE, canvas::SIZE);
    let master = compose::render_canvas(canvas::SIZE)?;
    let variants = container::resize_variants(&master, &sizes::ICON_SIZES);

    container::write_ico(&config.output, &variants)?;

    let png_paths = match &config.png_dir {
        Some(dir) => container::export_pngs(dir, &variants)?,
        None => Vec::new(),
    };

    Ok(IconReport {
        ico_path: config.output.clone(),
        png_paths,
    })
}
