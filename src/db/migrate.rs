use crate::ui::messages::success;
use rusqlite::{Connection, Error, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if a table has a given column.
fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `alunos` table.
fn create_alunos_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS alunos (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            ra           TEXT NOT NULL UNIQUE,
            inep         TEXT UNIQUE,
            nome         TEXT NOT NULL,
            codigo_turma TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_alunos_nome ON alunos(nome);
        "#,
    )?;
    Ok(())
}

/// Create the `presenca` table.
///
/// The UNIQUE index on (aluno_id, date, kind) enforces the core invariant at
/// the storage level: at most one entrada and one saída per student per day.
fn create_presenca_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS presenca (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            aluno_id   INTEGER NOT NULL REFERENCES alunos(id),
            date       TEXT NOT NULL,
            time       TEXT NOT NULL,
            kind       TEXT NOT NULL CHECK(kind IN ('entrada','saida')),
            source     TEXT NOT NULL DEFAULT 'scan',
            created_at TEXT NOT NULL
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_presenca_day_kind
            ON presenca(aluno_id, date, kind);
        CREATE INDEX IF NOT EXISTS idx_presenca_date ON presenca(date);
        "#,
    )?;
    Ok(())
}

/// Add the `inep` column to `alunos` for databases created before INEP
/// support. Guarded by a marker row in the log table.
fn migrate_add_inep_column(conn: &Connection) -> Result<()> {
    let version = "20250301_0001_add_inep_to_alunos";

    // 1) Skip if already applied
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    if !has_column(conn, "alunos", "inep")? {
        conn.execute("ALTER TABLE alunos ADD COLUMN inep TEXT;", [])
            .map_err(|e| {
                Error::SqliteFailure(
                    rusqlite::ffi::Error::new(1),
                    Some(format!("Failed to add 'inep' column: {}", e)),
                )
            })?;
        // Partial unique index: NULL INEPs stay unconstrained.
        conn.execute_batch(
            "CREATE UNIQUE INDEX IF NOT EXISTS idx_alunos_inep
                 ON alunos(inep) WHERE inep IS NOT NULL;",
        )?;

        success(format!(
            "Migration applied: {} → added 'inep' to alunos table",
            version
        ));
    }

    // 2) Mark as applied
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added inep column to alunos')",
        [version],
    )?;

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db() and by `db --migrate`.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Ensure core tables
    if !table_exists(conn, "alunos")? {
        create_alunos_table(conn)?;
        success("Created alunos table.");
    }
    if !table_exists(conn, "presenca")? {
        create_presenca_table(conn)?;
        success("Created presenca table.");
    }

    // 3) Column-level upgrades
    migrate_add_inep_column(conn)?;

    // 4) Re-assert indices
    conn.execute_batch(
        r#"
        CREATE UNIQUE INDEX IF NOT EXISTS idx_presenca_day_kind
            ON presenca(aluno_id, date, kind);
        CREATE INDEX IF NOT EXISTS idx_presenca_date ON presenca(date);
        CREATE INDEX IF NOT EXISTS idx_alunos_nome ON alunos(nome);
        "#,
    )?;

    Ok(())
}
