use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::classifier::{Classification, ScanWindows};
use crate::core::scanner::ScanLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::date;
use crate::utils::time::parse_optional_time;

/// Register one badge scan (the scanner feed hands us a raw RA string).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Scan {
        ra,
        time,
        date: date_str,
    } = cmd
    {
        //
        // 1. Resolve scan date and time (defaults: now)
        //
        let d = match date_str {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };
        let t = match parse_optional_time(time.as_ref())? {
            Some(t) => t,
            None => chrono::Local::now().time(),
        };

        //
        // 2. Build and validate the scan windows before touching the DB
        //
        let windows = ScanWindows::from_config(cfg)?;

        //
        // 3. Execute logic
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let report = ScanLogic::apply(&mut pool, &windows, ra, d, t)?;

        match report.outcome {
            Classification::Registered { .. } => {
                success(format!(
                    "{} — {} ({}) às {}",
                    report.outcome.label(),
                    report.student.nome,
                    report.student.ra,
                    t.format("%H:%M"),
                ));
            }
            Classification::OutOfWindow => {
                // Valid outcome, not a failure: nothing was written.
                info(format!(
                    "{} — nenhum registro gravado para {}",
                    report.outcome.label(),
                    report.student.nome,
                ));
            }
        }
    }

    Ok(())
}
