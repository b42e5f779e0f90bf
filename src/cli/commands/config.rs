use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::classifier::ScanWindows;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            let yaml = serde_yaml::to_string(&cfg)
                .map_err(|e| AppError::Config(format!("Failed to render configuration: {e}")))?;
            println!("{}", yaml);
        }

        // ---- CHECK CONFIG ----
        if *check {
            if cfg.database.trim().is_empty() {
                return Err(AppError::Config("database path is empty".to_string()));
            }
            if cfg.data_dir.trim().is_empty() {
                return Err(AppError::Config("data_dir is empty".to_string()));
            }

            // Also validates entry/exit targets and the tolerance.
            let windows = ScanWindows::from_config(cfg)?;

            success(format!(
                "Configuration is valid. Entry window ends {}, exit window starts {}.",
                windows.entry_upper().format("%H:%M"),
                windows.exit_lower().format("%H:%M"),
            ));
        }
    }

    Ok(())
}
