mod common;

use common::{init_db_with_students, insert_record_raw, pres, scan_at, setup_test_db};
use predicates::prelude::*;
use serde_json::Value;

const DAY: &str = "2025-09-01";

fn status_json(db_path: &str, date: &str) -> Vec<Value> {
    let output = pres()
        .args(["--db", db_path, "status", "--date", date, "--json"])
        .output()
        .expect("run status");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let json_start = stdout.find('[').expect("json array in output");
    serde_json::from_str(&stdout[json_start..]).expect("valid json")
}

fn row<'a>(rows: &'a [Value], ra: &str) -> &'a Value {
    rows.iter()
        .find(|r| r["ra"] == ra)
        .unwrap_or_else(|| panic!("no row for RA {ra}"))
}

#[test]
fn every_student_defaults_to_ausente() {
    let db_path = setup_test_db("status_ausente");
    init_db_with_students(&db_path);

    let rows = status_json(&db_path, DAY);
    assert_eq!(rows.len(), 3);
    for r in &rows {
        assert_eq!(r["status"], "Ausente");
        assert_eq!(r["entrada"], Value::Null);
        assert_eq!(r["saida"], Value::Null);
    }
}

#[test]
fn full_day_statuses() {
    let db_path = setup_test_db("status_full");
    init_db_with_students(&db_path);

    // Ana: on-time entry + on-time exit → Presente
    scan_at(&db_path, "1001", DAY, "07:10");
    scan_at(&db_path, "1001", DAY, "16:25");

    // Bruno: entry only → Apenas Entrada
    scan_at(&db_path, "1002", DAY, "07:00");

    // Carla: nothing → Ausente

    let rows = status_json(&db_path, DAY);
    assert_eq!(row(&rows, "1001")["status"], "Presente");
    assert_eq!(row(&rows, "1001")["entrada"], "07:10:00");
    assert_eq!(row(&rows, "1001")["saida"], "16:25:00");
    assert_eq!(row(&rows, "1002")["status"], "Apenas Entrada");
    assert_eq!(row(&rows, "1003")["status"], "Ausente");
}

#[test]
fn exit_at_window_start_is_not_early() {
    let db_path = setup_test_db("status_exit_bound");
    init_db_with_students(&db_path);

    scan_at(&db_path, "1001", DAY, "07:00");
    scan_at(&db_path, "1001", DAY, "16:00");

    let rows = status_json(&db_path, DAY);
    assert_eq!(row(&rows, "1001")["status"], "Presente");
}

#[test]
fn late_entry_is_atraso() {
    let db_path = setup_test_db("status_atraso");
    init_db_with_students(&db_path);

    // a record past the entry window can only exist out-of-band
    insert_record_raw(&db_path, "1001", DAY, "07:45", "entrada");
    scan_at(&db_path, "1001", DAY, "16:25");

    let rows = status_json(&db_path, DAY);
    assert_eq!(row(&rows, "1001")["status"], "Atraso");
}

#[test]
fn early_exit_wins_over_late_entry() {
    let db_path = setup_test_db("status_early_exit");
    init_db_with_students(&db_path);

    insert_record_raw(&db_path, "1001", DAY, "07:45", "entrada");
    insert_record_raw(&db_path, "1001", DAY, "15:30", "saida");

    let rows = status_json(&db_path, DAY);
    assert_eq!(row(&rows, "1001")["status"], "Saída Antecipada");
}

#[test]
fn exit_without_entry_stays_ausente() {
    let db_path = setup_test_db("status_exit_only");
    init_db_with_students(&db_path);

    scan_at(&db_path, "1001", DAY, "16:25");

    let rows = status_json(&db_path, DAY);
    assert_eq!(row(&rows, "1001")["status"], "Ausente");
    assert_eq!(row(&rows, "1001")["saida"], "16:25:00");
}

#[test]
fn rows_are_ordered_by_name() {
    let db_path = setup_test_db("status_order");
    init_db_with_students(&db_path);

    let rows = status_json(&db_path, DAY);
    let names: Vec<&str> = rows.iter().map(|r| r["nome"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Ana Souza", "Bruno Lima", "Carla Dias"]);
}

#[test]
fn turma_filter_narrows_the_dashboard() {
    let db_path = setup_test_db("status_turma");
    init_db_with_students(&db_path);

    let output = pres()
        .args(["--db", &db_path, "status", "--date", DAY, "--turma", "2B", "--json"])
        .output()
        .expect("run status");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let json_start = stdout.find('[').expect("json array in output");
    let rows: Vec<Value> = serde_json::from_str(&stdout[json_start..]).expect("valid json");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["ra"], "1003");
}

#[test]
fn table_output_shows_labels_and_count() {
    let db_path = setup_test_db("status_table");
    init_db_with_students(&db_path);

    scan_at(&db_path, "1001", DAY, "07:10");

    pres()
        .args(["--db", &db_path, "status", "--date", DAY])
        .assert()
        .success()
        .stdout(predicate::str::contains("Presence for 2025-09-01"))
        .stdout(predicate::str::contains("Apenas Entrada"))
        .stdout(predicate::str::contains("Ausente"))
        .stdout(predicate::str::contains("3 students"));
}

#[test]
fn status_on_another_day_is_unaffected() {
    let db_path = setup_test_db("status_other_day");
    init_db_with_students(&db_path);

    scan_at(&db_path, "1001", DAY, "07:10");

    let rows = status_json(&db_path, "2025-09-02");
    assert_eq!(row(&rows, "1001")["status"], "Ausente");
}
