use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{update_student_class, update_student_inep};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

/// Enumerated single-field updates to the student registry.
/// Each mutable field gets its own command; there is no generic
/// field/value update path.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;

    match cmd {
        Commands::SetClass { ra, turma } => {
            if !update_student_class(&pool.conn, ra, turma)? {
                return Err(AppError::StudentNotFound(ra.clone()));
            }

            let _ = audit(
                &pool.conn,
                "set_class",
                ra,
                &format!("Moved student to class {}", turma),
            );
            success(format!("Student {} moved to class {}.", ra, turma));
        }

        Commands::SetInep { ra, inep } => {
            if !update_student_inep(&pool.conn, ra, inep)? {
                return Err(AppError::StudentNotFound(ra.clone()));
            }

            let _ = audit(
                &pool.conn,
                "set_inep",
                ra,
                &format!("Set INEP to {}", inep),
            );
            success(format!("INEP for student {} set to {}.", ra, inep));
        }

        _ => {}
    }

    Ok(())
}
