use crate::config::Config;
use anyhow::Result;
use console::{Term, style};
use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;

/// Confirmation before running; `false` means the user cancelled
pub fn confirm_run(term: &Term, config: &Config) -> Result<bool> {
    println!();
    println!("{} {}", style("Root:").dim(), config.root.display());
    println!("{} {}", style("Naming mode:").dim(), config.naming_mode);

    let options = ["Generate playlists", "Cancel"];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Continue?")
        .items(&options)
        .default(0)
        .interact_on_opt(term)?;

    Ok(matches!(selection, Some(0)))
}
