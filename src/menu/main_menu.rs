use crate::component::PlaylistBuilder;
use crate::config::load::validate_playlist_name;
use crate::config::{Config, DEFAULT_PLAYLIST_NAME, NamingMode};
use crate::menu::menu::confirm_run;
use crate::pause;
use crate::tools::validate_directory_exists;
use anyhow::{Result, bail};
use console::{Term, style};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// Interactive mode: asks for the folder and naming mode, then generates playlists
pub fn show_main_menu(term: &Term, shutdown_signal: &Arc<AtomicBool>) -> Result<()> {
    term.clear_screen()?;
    println!("{}", style("=== VLC Playlist Generator ===").cyan().bold());
    println!("{}", style("Press ESC to cancel").dim());

    let root = prompt_directory()?;
    validate_directory_exists(&root)?;

    let Some(naming_mode) = prompt_naming_mode(term)? else {
        println!("{}", style("Cancelled").yellow());
        return Ok(());
    };

    let config = Config::new(root, naming_mode);
    if !confirm_run(term, &config)? {
        println!("{}", style("Cancelled").yellow());
        return Ok(());
    }

    PlaylistBuilder::from_config(&config, Arc::clone(shutdown_signal)).run(&config.root)?;

    pause(term)?;
    Ok(())
}

fn prompt_directory() -> Result<PathBuf> {
    let path: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Video folder path")
        .interact_text()?;
    let path = path.trim();
    if path.is_empty() {
        bail!("No folder path given");
    }
    Ok(PathBuf::from(path))
}

fn prompt_naming_mode(term: &Term) -> Result<Option<NamingMode>> {
    let options = [
        "One playlist per folder, named after the folder (<folder>.xspf)",
        "Same file name in every folder",
    ];

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Playlist naming")
        .items(&options)
        .default(0)
        .interact_on_opt(term)?;

    match selection {
        Some(0) => Ok(Some(NamingMode::PerDirectory)),
        Some(1) => {
            let name: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Playlist file name")
                .default(DEFAULT_PLAYLIST_NAME.to_string())
                .validate_with(|input: &String| {
                    validate_playlist_name(input.trim()).map_err(|e| e.to_string())
                })
                .interact_text()?;
            Ok(Some(NamingMode::Fixed(name.trim().to_string())))
        }
        None => Ok(None),
        _ => unreachable!(),
    }
}
