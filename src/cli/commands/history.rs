use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{find_student_by_ra, load_history};
use crate::errors::{AppError, AppResult};
use crate::models::record_kind::RecordKind;
use crate::utils::colors::{GREEN, RED, RESET};
use crate::utils::table::{Column, Table};

/// Print a student's full attendance history, newest first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { ra } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let student = find_student_by_ra(&pool.conn, ra)?
            .ok_or_else(|| AppError::StudentNotFound(ra.clone()))?;

        let records = load_history(&pool.conn, student.id)?;

        println!(
            "📖 History for {} (RA {}, class {}):\n",
            student.nome, student.ra, student.codigo_turma
        );

        if records.is_empty() {
            println!("No attendance records.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column { header: "Date".into(), width: 10 },
            Column { header: "Time".into(), width: 5 },
            Column { header: "Kind".into(), width: 16 },
        ]);

        for rec in &records {
            let kind = match rec.kind {
                RecordKind::Entrada => format!("{GREEN}entrada{RESET}"),
                RecordKind::Saida => format!("{RED}saida{RESET}"),
            };
            table.add_row(vec![rec.date_str(), rec.time_str(), kind]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
