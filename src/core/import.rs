//! Roster JSON import.
//!
//! Each `<codigo_turma>.json` file in the data directory holds the exported
//! roster of one class group. New RAs are inserted; an existing RA whose
//! class differs from the file's is moved to the file's class. Errors are
//! collected per record so a single bad file never aborts the whole import.

use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{find_student_by_ra, insert_student, update_student_class};
use crate::errors::{AppError, AppResult};
use crate::models::roster::RosterEntry;
use std::fs;
use std::path::Path;

pub struct ImportLogic;

pub struct ImportReport {
    pub imported: usize,
    pub updated: usize,
    pub errors: Vec<String>,
}

impl ImportLogic {
    pub fn apply(pool: &mut DbPool, data_dir: &Path) -> AppResult<ImportReport> {
        if !data_dir.is_dir() {
            return Err(AppError::Import(format!(
                "data directory not found: {}",
                data_dir.display()
            )));
        }

        let mut report = ImportReport {
            imported: 0,
            updated: 0,
            errors: Vec::new(),
        };

        let mut files: Vec<_> = fs::read_dir(data_dir)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().map(|x| x == "json").unwrap_or(false))
            .collect();
        files.sort();

        for path in files {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();

            // The class catalogue lives in the same directory; it is not a roster.
            if file_name == "turmas-com-disciplinas.json" {
                continue;
            }

            let codigo_turma = match path.file_stem() {
                Some(stem) => stem.to_string_lossy().to_string(),
                None => continue,
            };

            let content = match fs::read_to_string(&path) {
                Ok(c) => c,
                Err(e) => {
                    report.errors.push(format!("{}: {}", file_name, e));
                    continue;
                }
            };

            let entries: Vec<RosterEntry> = match serde_json::from_str(&content) {
                Ok(v) => v,
                Err(e) => {
                    report.errors.push(format!("{}: invalid JSON: {}", file_name, e));
                    continue;
                }
            };

            for entry in entries {
                if let Err(e) = import_entry(pool, &codigo_turma, &entry, &mut report) {
                    report.errors.push(format!("{}: {}", file_name, e));
                }
            }
        }

        let _ = audit(
            &pool.conn,
            "import",
            &data_dir.to_string_lossy(),
            &format!(
                "Roster import: {} new, {} updated, {} errors",
                report.imported,
                report.updated,
                report.errors.len()
            ),
        );

        Ok(report)
    }
}

fn import_entry(
    pool: &mut DbPool,
    codigo_turma: &str,
    entry: &RosterEntry,
    report: &mut ImportReport,
) -> AppResult<()> {
    let nome = entry
        .nome
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty());
    let ra = entry.ra_str();

    let (nome, ra) = match (nome, ra) {
        (Some(n), Some(r)) => (n, r),
        _ => {
            return Err(AppError::Import("incomplete record (nome/ra)".to_string()));
        }
    };

    match find_student_by_ra(&pool.conn, &ra)? {
        None => {
            insert_student(
                &pool.conn,
                &ra,
                nome,
                codigo_turma,
                entry.inep_str().as_deref(),
            )?;
            report.imported += 1;
        }
        Some(existing) => {
            if existing.codigo_turma != codigo_turma {
                update_student_class(&pool.conn, &ra, codigo_turma)?;
            }
            report.updated += 1;
        }
    }

    Ok(())
}
