mod common;

use common::{day_records, init_db_with_students, pres, scan_at, setup_test_db};
use predicates::prelude::*;

const DAY: &str = "2025-09-01";

#[test]
fn entry_window_scan_registers_entrada() {
    let db_path = setup_test_db("scan_entry");
    init_db_with_students(&db_path);

    pres()
        .args(["--db", &db_path, "scan", "1001", "--date", DAY, "--time", "07:15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entrada registrada"))
        .stdout(predicate::str::contains("Ana Souza"));

    let rows = day_records(&db_path, "1001", DAY);
    assert_eq!(rows, vec![("07:15".to_string(), "entrada".to_string())]);
}

#[test]
fn rescan_replaces_entrada_with_latest_time() {
    let db_path = setup_test_db("scan_rescan");
    init_db_with_students(&db_path);

    scan_at(&db_path, "1001", DAY, "07:05");
    scan_at(&db_path, "1001", DAY, "07:30");

    // exactly one entrada row remains, stamped with the later time
    let rows = day_records(&db_path, "1001", DAY);
    assert_eq!(rows, vec![("07:30".to_string(), "entrada".to_string())]);
}

#[test]
fn exit_window_scan_registers_saida() {
    let db_path = setup_test_db("scan_exit");
    init_db_with_students(&db_path);

    pres()
        .args(["--db", &db_path, "scan", "1002", "--date", DAY, "--time", "16:30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saída registrada"));

    let rows = day_records(&db_path, "1002", DAY);
    assert_eq!(rows, vec![("16:30".to_string(), "saida".to_string())]);
}

#[test]
fn exit_before_target_is_flagged_as_early() {
    let db_path = setup_test_db("scan_early_exit");
    init_db_with_students(&db_path);

    // inside the exit window (>= 16:00) but before the 16:20 target
    pres()
        .args(["--db", &db_path, "scan", "1002", "--date", DAY, "--time", "16:05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saída antecipada registrada"));

    let rows = day_records(&db_path, "1002", DAY);
    assert_eq!(rows, vec![("16:05".to_string(), "saida".to_string())]);
}

#[test]
fn out_of_window_scan_writes_nothing() {
    let db_path = setup_test_db("scan_midday");
    init_db_with_students(&db_path);

    pres()
        .args(["--db", &db_path, "scan", "1001", "--date", DAY, "--time", "12:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fora do horário de registro"))
        .stdout(predicate::str::contains("nenhum registro gravado"));

    assert!(day_records(&db_path, "1001", DAY).is_empty());
}

#[test]
fn window_boundaries() {
    let db_path = setup_test_db("scan_bounds");
    init_db_with_students(&db_path);

    // 07:40 is the last minute of the entry window
    scan_at(&db_path, "1001", DAY, "07:40");
    assert_eq!(
        day_records(&db_path, "1001", DAY),
        vec![("07:40".to_string(), "entrada".to_string())]
    );

    // 16:00 is the first minute of the exit window
    scan_at(&db_path, "1002", DAY, "16:00");
    assert_eq!(
        day_records(&db_path, "1002", DAY),
        vec![("16:00".to_string(), "saida".to_string())]
    );

    // 07:41 falls in the gap
    scan_at(&db_path, "1003", DAY, "07:41");
    assert!(day_records(&db_path, "1003", DAY).is_empty());
}

#[test]
fn entry_and_exit_coexist_for_the_same_day() {
    let db_path = setup_test_db("scan_full_day");
    init_db_with_students(&db_path);

    scan_at(&db_path, "1001", DAY, "07:10");
    scan_at(&db_path, "1001", DAY, "16:25");

    let rows = day_records(&db_path, "1001", DAY);
    assert_eq!(
        rows,
        vec![
            ("07:10".to_string(), "entrada".to_string()),
            ("16:25".to_string(), "saida".to_string()),
        ]
    );
}

#[test]
fn unknown_ra_is_rejected() {
    let db_path = setup_test_db("scan_unknown");
    init_db_with_students(&db_path);

    pres()
        .args(["--db", &db_path, "scan", "9999", "--date", DAY, "--time", "07:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No student found with RA 9999"));
}

#[test]
fn malformed_time_is_rejected() {
    let db_path = setup_test_db("scan_bad_time");
    init_db_with_students(&db_path);

    pres()
        .args(["--db", &db_path, "scan", "1001", "--date", DAY, "--time", "7h20"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time format"));
}
