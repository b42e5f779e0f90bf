use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::insert_student;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Register a single student.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        ra,
        nome,
        turma,
        inep,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        insert_student(&pool.conn, ra, nome, turma, inep.as_deref())?;

        let _ = audit(
            &pool.conn,
            "add",
            ra,
            &format!("Registered student {} in class {}", nome, turma),
        );

        success(format!("Student '{}' registered (RA {}, class {}).", nome, ra, turma));
    }

    Ok(())
}
