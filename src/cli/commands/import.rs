use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::path::PathBuf;

/// Import class rosters from a directory of per-class JSON files.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { dir } = cmd {
        let data_dir = match dir {
            Some(d) => PathBuf::from(d),
            None => PathBuf::from(&cfg.data_dir),
        };

        println!("📥 Importing rosters from {}…\n", data_dir.display());

        let mut pool = DbPool::new(&cfg.database)?;
        let report = ImportLogic::apply(&mut pool, &data_dir)?;

        success(format!(
            "Import finished: {} new students, {} already known.",
            report.imported, report.updated
        ));

        if !report.errors.is_empty() {
            warning(format!("{} record(s) skipped:", report.errors.len()));
            for err in &report.errors {
                eprintln!("   - {}", err);
            }
        }
    }

    Ok(())
}
