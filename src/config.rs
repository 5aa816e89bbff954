use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct IconConfig {
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Also export each size as a PNG into this directory
    #[serde(default)]
    pub png_dir: Option<PathBuf>,
}

fn default_output() -> PathBuf {
    PathBuf::from("app.ico")
}

impl Default for IconConfig {
    fn default() -> Self {
        IconConfig {
            output: default_output(),
            png_dir: None,
        }
    }
}

impl IconConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: IconConfig = serde_yaml::from_str(&contents)
            .context("Failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.output.as_os_str().is_empty() {
            bail!("output path cannot be empty");
        }
        if self.output.file_name().is_none() {
            bail!("output path must name a file: {}", self.output.display());
        }

        if let Some(dir) = &self.png_dir {
            if dir.as_os_str().is_empty() {
                bail!("png_dir cannot be empty");
            }
        }

        Ok(())
    }
}
