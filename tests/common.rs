#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pres() -> Command {
    cargo_bin_cmd!("presenca")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_presenca.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a fresh roster directory inside the system temp dir
pub fn setup_roster_dir(name: &str) -> PathBuf {
    let mut dir: PathBuf = env::temp_dir();
    dir.push(format!("{}_presenca_rosters", name));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create roster dir");
    dir
}

/// Initialize DB and register a small student body useful for many tests
pub fn init_db_with_students(db_path: &str) {
    // init DB (creates tables and runs migrations)
    pres()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    pres()
        .args(["--db", db_path, "add", "1001", "Ana Souza", "1A"])
        .assert()
        .success();

    pres()
        .args(["--db", db_path, "add", "1002", "Bruno Lima", "1A"])
        .assert()
        .success();

    pres()
        .args(["--db", db_path, "add", "1003", "Carla Dias", "2B"])
        .assert()
        .success();
}

/// Register a scan at a fixed date/time via the CLI
pub fn scan_at(db_path: &str, ra: &str, date: &str, time: &str) {
    pres()
        .args(["--db", db_path, "scan", ra, "--date", date, "--time", time])
        .assert()
        .success();
}

/// Insert an attendance record directly, bypassing the scan windows.
/// Used to build day states the scanner alone cannot produce.
pub fn insert_record_raw(db_path: &str, ra: &str, date: &str, time: &str, kind: &str) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    let student_id: i64 = conn
        .query_row("SELECT id FROM alunos WHERE ra = ?1", [ra], |row| {
            row.get(0)
        })
        .expect("student exists");
    conn.execute(
        "INSERT INTO presenca (aluno_id, date, time, kind, source, created_at)
         VALUES (?1, ?2, ?3, ?4, 'scan', ?5)",
        rusqlite::params![student_id, date, time, kind, chrono::Utc::now().to_rfc3339()],
    )
    .expect("insert record");
}

/// All (time, kind) rows of one student for one day, time-ordered
pub fn day_records(db_path: &str, ra: &str, date: &str) -> Vec<(String, String)> {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    let mut stmt = conn
        .prepare(
            "SELECT p.time, p.kind
             FROM presenca p JOIN alunos a ON a.id = p.aluno_id
             WHERE a.ra = ?1 AND p.date = ?2
             ORDER BY p.time ASC",
        )
        .expect("prepare");
    let rows = stmt
        .query_map([ra, date], |row| Ok((row.get(0)?, row.get(1)?)))
        .expect("query");
    rows.map(|r| r.expect("row")).collect()
}

pub fn student_class(db_path: &str, ra: &str) -> String {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.query_row(
        "SELECT codigo_turma FROM alunos WHERE ra = ?1",
        [ra],
        |row| row.get(0),
    )
    .expect("student exists")
}
