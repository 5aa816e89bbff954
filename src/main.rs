use anyhow::Result;
use appicon::config::IconConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "appicon")]
#[command(about = "Generate the multi-resolution application icon", long_about = None)]
struct Cli {
    /// Where to write the .ico file (overrides the config file, default: app.ico)
    output: Option<PathBuf>,
    /// YAML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Also export each size as a PNG into this directory
    #[arg(long)]
    png_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => IconConfig::load(path)?,
        None => IconConfig::default(),
    };
    if let Some(output) = cli.output {
        config.output = output;
    }
    if let Some(dir) = cli.png_dir {
        config.png_dir = Some(dir);
    }

    let report = appicon::compose_and_save_with(&config)?;

    println!("✅ Icon created: {}", report.ico_path.display());
    for path in &report.png_paths {
        println!("wrote {}", path.display());
    }

    Ok(())
}
