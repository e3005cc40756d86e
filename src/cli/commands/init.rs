use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command
///
/// Writes the default configuration to `path` unless a file is already there.
pub fn handle(path: &Path) -> AppResult<()> {
    println!("⚙️  Initializing pmdash…");
    println!("📄 Config file : {}", path.display());

    if path.exists() {
        info("Configuration file already exists, left untouched.");
        return Ok(());
    }

    Config::default().save_to(path)?;
    success(format!("Configuration written to {}", path.display()));
    Ok(())
}
