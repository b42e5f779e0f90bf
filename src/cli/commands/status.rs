use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::classifier::ScanWindows;
use crate::core::classnames::load_class_names;
use crate::core::status::StatusLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{color_for_optional_field, color_for_status, RESET};
use crate::utils::date;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_optional_time;

/// Render the daily dashboard: one derived status row per student.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status {
        date: date_str,
        turma,
        json,
    } = cmd
    {
        let d = match date_str {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let windows = ScanWindows::from_config(cfg)?;
        let class_names = load_class_names(&cfg.class_names_file());

        let mut pool = DbPool::new(&cfg.database)?;
        let mut rows = StatusLogic::aggregate(&mut pool, &windows, &d, &class_names)?;

        if let Some(code) = turma {
            rows.retain(|r| &r.codigo_turma == code);
        }

        if *json {
            println!("{}", serde_json::to_string_pretty(&rows).map_err(|e| {
                AppError::Other(format!("Failed to serialize status rows: {e}"))
            })?);
            return Ok(());
        }

        println!("📋 Presence for {}:\n", d);

        let mut table = Table::new(vec![
            Column { header: "Nome".into(), width: 30 },
            Column { header: "Turma".into(), width: 20 },
            Column { header: "Status".into(), width: 26 },
            Column { header: "Entrada".into(), width: 8 },
            Column { header: "Saída".into(), width: 8 },
            Column { header: "RA".into(), width: 12 },
        ]);

        for row in &rows {
            let status = format!(
                "{}{}{}",
                color_for_status(row.status),
                row.status.label(),
                RESET
            );
            let entrada = colorize_time(format_optional_time(row.entrada));
            let saida = colorize_time(format_optional_time(row.saida));

            table.add_row(vec![
                row.nome.clone(),
                row.nome_turma.clone(),
                status,
                entrada,
                saida,
                row.ra.clone(),
            ]);
        }

        print!("{}", table.render());
        println!("\n{} students", rows.len());
    }

    Ok(())
}

fn colorize_time(t: String) -> String {
    format!("{}{}{}", color_for_optional_field(Some(t.as_str())), t, RESET)
}
