use anyhow::{Context, Result};
use clap::Parser;
use console::{Term, style};
use log::{info, warn};
use std::path::PathBuf;
use vlc_playlist_generator::component::PlaylistBuilder;
use vlc_playlist_generator::config::{Config, NamingKind, ROOT_ENV_VAR, resolve_naming_mode};
use vlc_playlist_generator::init;
use vlc_playlist_generator::menu::show_main_menu;
use vlc_playlist_generator::signal::setup_shutdown_signal;

#[derive(Parser)]
#[command(
    name = "vlc-playlist-generator",
    version,
    about = "Write an XSPF playlist into every folder that contains .mp4 files"
)]
struct Cli {
    /// Top-level folder to scan. Prompts interactively when omitted.
    #[arg(env = ROOT_ENV_VAR)]
    root: Option<PathBuf>,

    /// Playlist naming: per-directory (<folder>.xspf) or fixed (same name everywhere)
    #[arg(long, value_enum)]
    mode: Option<NamingKind>,

    /// File name used in fixed mode (default: playlist.xspf). Implies --mode fixed.
    #[arg(long)]
    playlist_name: Option<String>,
}

fn main() -> Result<()> {
    init::init();
    let cli = Cli::parse();
    let shutdown_signal = setup_shutdown_signal()?;

    let Some(root) = cli.root else {
        let term = Term::stdout();
        if !term.is_term() {
            anyhow::bail!("No root folder given; pass ROOT or set {ROOT_ENV_VAR}");
        }
        if let Err(e) = show_main_menu(&term, &shutdown_signal) {
            warn!("Program error: {e}");
            eprintln!("{} {}", style("Error:").red().bold(), e);
            return Err(e);
        }
        info!("Program exited normally");
        return Ok(());
    };

    let naming_mode = resolve_naming_mode(cli.mode, cli.playlist_name.as_deref())
        .context("Invalid naming options")?;
    let config = Config::new(root, naming_mode);

    PlaylistBuilder::from_config(&config, shutdown_signal).run(&config.root)?;
    info!("Program exited normally");
    Ok(())
}
