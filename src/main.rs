//! glyphbanner - block-glyph banners for the terminal
//!
//! ```text
//!        _              _     _
//!  __ _ | | _  _  _ __ | |_  | |__  __ _  _ _   _ _   ___  _ _
//! / _` || || || || '_ \| ' \ | '_ \/ _` || ' \ | ' \ / -_)| '_|
//! \__, ||_| \_, || .__/|_||_||_.__/\__,_||_||_||_||_|\___||_|
//! |___/     |__/ |_|
//! ```

use anyhow::Context;
use clap::Parser;
use glyphbanner_config::{Config, ConfigManager};
use glyphbanner_core::{validate, FontSelector};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// glyphbanner - render text as block-glyph banners
#[derive(Parser, Debug)]
#[command(name = "glyphbanner")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text to render; read from stdin when omitted
    text: Vec<String>,

    /// Font to render with (small, mini, block)
    #[arg(short = 'f', long)]
    font: Option<String>,

    /// List the built-in fonts and exit
    #[arg(long)]
    list_fonts: bool,

    /// Validate every built-in font and exit
    #[arg(long)]
    check: bool,

    /// Save the --font choice as the default and exit
    #[arg(long, requires = "font")]
    save_font: bool,

    /// Config file path
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let manager = match &args.config {
        Some(path) => ConfigManager::with_path(path)?,
        None => ConfigManager::new()?,
    };
    let config = manager.config();

    // Set up logging; stdout is reserved for banners
    let log_level = if args.debug {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                format!(
                    "glyphbanner={0},glyphbanner_core={0},glyphbanner_config={0}",
                    log_level
                )
            }),
        ))
        .init();

    tracing::debug!("Starting glyphbanner v{}", env!("CARGO_PKG_VERSION"));
    glyphbanner_core::init()?;

    if args.list_fonts {
        for font in FontSelector::ALL {
            println!("{:<6} {} rows", font, font.height());
        }
        return Ok(());
    }

    if args.check {
        let failed = check_fonts();
        if failed > 0 {
            anyhow::bail!("{} font(s) failed validation", failed);
        }
        return Ok(());
    }

    let font = select_font(&args, &config)?;

    if args.save_font {
        manager.update(|config| config.render.font = font.to_string());
        manager.save()?;
        println!("Default font set to {}", font);
        return Ok(());
    }

    let text = if args.text.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read text from stdin")?;
        input
    } else {
        args.text.join(" ")
    };

    let banner = glyphbanner_core::render(&text, font);
    io::stdout().lock().write_all(banner.as_bytes())?;
    Ok(())
}

/// Font from the command line, else the configured default
fn select_font(args: &Args, config: &Config) -> anyhow::Result<FontSelector> {
    let name = args.font.as_deref().unwrap_or(&config.render.font);
    name.parse()
        .with_context(|| format!("Choose one of: {}", font_names()))
}

fn font_names() -> String {
    FontSelector::ALL
        .iter()
        .map(FontSelector::name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Validate every built-in font, printing one line each; returns the failure count
fn check_fonts() -> usize {
    let mut failed = 0;
    for font in FontSelector::ALL {
        match validate(font.descriptor()) {
            Ok(()) => println!("{:<6} ok", font),
            Err(e) => {
                tracing::error!(font = %font, "Font failed validation: {}", e);
                println!("{:<6} {}", font, e);
                failed += 1;
            }
        }
    }
    failed
}
