use crate::errors::{AppError, AppResult};
use crate::models::record::AttendanceRecord;
use crate::models::record_kind::RecordKind;
use crate::models::student::Student;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{params, Connection, OptionalExtension, Result, Row};

pub fn map_student(row: &Row) -> Result<Student> {
    Ok(Student {
        id: row.get("id")?,
        ra: row.get("ra")?,
        inep: row.get("inep")?,
        nome: row.get("nome")?,
        codigo_turma: row.get("codigo_turma")?,
    })
}

pub fn map_record(row: &Row) -> Result<AttendanceRecord> {
    let date_str: String = row.get("date")?;
    let time_str: String = row.get("time")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let time = NaiveTime::parse_from_str(&time_str, "%H:%M").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(time_str.clone())),
        )
    })?;

    let kind_str: String = row.get("kind")?;
    let kind = RecordKind::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidKind(kind_str.clone())),
        )
    })?;

    Ok(AttendanceRecord {
        id: row.get("id")?,
        student_id: row.get("aluno_id")?,
        date,
        time,
        kind,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

// ---------------------------------------------------------------------------
// Student registry
// ---------------------------------------------------------------------------

pub fn find_student_by_ra(conn: &Connection, ra: &str) -> AppResult<Option<Student>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, ra, inep, nome, codigo_turma FROM alunos WHERE ra = ?1",
    )?;
    Ok(stmt.query_row([ra], map_student).optional()?)
}

pub fn insert_student(
    conn: &Connection,
    ra: &str,
    nome: &str,
    codigo_turma: &str,
    inep: Option<&str>,
) -> AppResult<i64> {
    let res = conn.execute(
        "INSERT INTO alunos (ra, inep, nome, codigo_turma) VALUES (?1, ?2, ?3, ?4)",
        params![ra, inep, nome, codigo_turma],
    );

    match res {
        Ok(_) => Ok(conn.last_insert_rowid()),
        Err(rusqlite::Error::SqliteFailure(e, Some(msg)))
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            if msg.contains("alunos.inep") {
                Err(AppError::InepExists(inep.unwrap_or_default().to_string()))
            } else {
                Err(AppError::StudentExists(ra.to_string()))
            }
        }
        Err(e) => Err(e.into()),
    }
}

/// Explicit single-field update: move a student to another class group.
pub fn update_student_class(conn: &Connection, ra: &str, codigo_turma: &str) -> AppResult<bool> {
    let updated = conn.execute(
        "UPDATE alunos SET codigo_turma = ?1 WHERE ra = ?2",
        params![codigo_turma, ra],
    )?;
    Ok(updated > 0)
}

/// Explicit single-field update: set or change a student's INEP.
pub fn update_student_inep(conn: &Connection, ra: &str, inep: &str) -> AppResult<bool> {
    let res = conn.execute(
        "UPDATE alunos SET inep = ?1 WHERE ra = ?2",
        params![inep, ra],
    );
    match res {
        Ok(updated) => Ok(updated > 0),
        Err(rusqlite::Error::SqliteFailure(e, Some(_)))
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            Err(AppError::InepExists(inep.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

// ---------------------------------------------------------------------------
// Attendance records
// ---------------------------------------------------------------------------

pub fn find_day_record(
    conn: &Connection,
    student_id: i64,
    date: &NaiveDate,
    kind: RecordKind,
) -> AppResult<Option<AttendanceRecord>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, aluno_id, date, time, kind, source, created_at
         FROM presenca
         WHERE aluno_id = ?1 AND date = ?2 AND kind = ?3",
    )?;
    Ok(stmt
        .query_row(
            params![
                student_id,
                date.format("%Y-%m-%d").to_string(),
                kind.to_db_str()
            ],
            map_record,
        )
        .optional()?)
}

/// Replace the student's same-day same-kind record with `rec`, atomically.
///
/// Runs delete+insert inside one transaction so a failed insert can never
/// leave the day without a record of that kind.
pub fn replace_day_record(conn: &mut Connection, rec: &AttendanceRecord) -> AppResult<()> {
    let tx = conn.transaction()?;

    tx.execute(
        "DELETE FROM presenca WHERE aluno_id = ?1 AND date = ?2 AND kind = ?3",
        params![rec.student_id, rec.date_str(), rec.kind.to_db_str()],
    )?;
    tx.execute(
        "INSERT INTO presenca (aluno_id, date, time, kind, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            rec.student_id,
            rec.date_str(),
            rec.time_str(),
            rec.kind.to_db_str(),
            rec.source,
            rec.created_at,
        ],
    )?;

    tx.commit()?;
    Ok(())
}

pub fn load_day_records(
    conn: &Connection,
    student_id: i64,
    date: &NaiveDate,
) -> AppResult<Vec<AttendanceRecord>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, aluno_id, date, time, kind, source, created_at
         FROM presenca
         WHERE aluno_id = ?1 AND date = ?2
         ORDER BY time ASC",
    )?;

    let rows = stmt.query_map(
        params![student_id, date.format("%Y-%m-%d").to_string()],
        map_record,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Full attendance history for one student, newest first.
pub fn load_history(conn: &Connection, student_id: i64) -> AppResult<Vec<AttendanceRecord>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, aluno_id, date, time, kind, source, created_at
         FROM presenca
         WHERE aluno_id = ?1
         ORDER BY date DESC, time DESC",
    )?;

    let rows = stmt.query_map([student_id], map_record)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Aggregation input
// ---------------------------------------------------------------------------

/// All students with their entrada/saída times for one day, name-ordered.
///
/// The UNIQUE (aluno_id, date, kind) index guarantees each LEFT JOIN matches
/// at most one row, so the result has exactly one row per student.
pub fn load_students_with_day_records(
    conn: &Connection,
    date: &NaiveDate,
) -> AppResult<Vec<(Student, Option<NaiveTime>, Option<NaiveTime>)>> {
    let mut stmt = conn.prepare_cached(
        "SELECT a.id, a.ra, a.inep, a.nome, a.codigo_turma,
                e.time AS entrada, s.time AS saida
         FROM alunos a
         LEFT JOIN presenca e
             ON e.aluno_id = a.id AND e.date = ?1 AND e.kind = 'entrada'
         LEFT JOIN presenca s
             ON s.aluno_id = a.id AND s.date = ?1 AND s.kind = 'saida'
         ORDER BY a.nome ASC",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();
    let rows = stmt.query_map([date_str], |row| {
        let student = map_student(row)?;
        let entrada: Option<String> = row.get("entrada")?;
        let saida: Option<String> = row.get("saida")?;
        Ok((student, entrada, saida))
    })?;

    let mut out = Vec::new();
    for r in rows {
        let (student, entrada, saida) = r?;
        out.push((
            student,
            parse_stored_time(entrada)?,
            parse_stored_time(saida)?,
        ));
    }
    Ok(out)
}

fn parse_stored_time(t: Option<String>) -> AppResult<Option<NaiveTime>> {
    match t {
        Some(s) => {
            let parsed = NaiveTime::parse_from_str(&s, "%H:%M")
                .map_err(|_| AppError::InvalidTime(s.clone()))?;
            Ok(Some(parsed))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrate::run_pending_migrations;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&conn).unwrap();
        conn
    }

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn t(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    #[test]
    fn insert_and_find_student() {
        let conn = test_conn();
        let id = insert_student(&conn, "1001", "Ana Souza", "1A", None).unwrap();

        let found = find_student_by_ra(&conn, "1001").unwrap().unwrap();
        assert_eq!(found.id, id);
        assert_eq!(found.nome, "Ana Souza");
        assert!(find_student_by_ra(&conn, "9999").unwrap().is_none());
    }

    #[test]
    fn duplicate_ra_maps_to_student_exists() {
        let conn = test_conn();
        insert_student(&conn, "1001", "Ana Souza", "1A", None).unwrap();

        let err = insert_student(&conn, "1001", "Outra Pessoa", "2B", None).unwrap_err();
        assert!(matches!(err, AppError::StudentExists(_)));
    }

    #[test]
    fn duplicate_inep_maps_to_inep_exists() {
        let conn = test_conn();
        insert_student(&conn, "1001", "Ana Souza", "1A", Some("111")).unwrap();

        let err = insert_student(&conn, "1002", "Bruno Lima", "1A", Some("111")).unwrap_err();
        assert!(matches!(err, AppError::InepExists(_)));
    }

    #[test]
    fn replace_day_record_keeps_one_row_per_kind() {
        let mut conn = test_conn();
        let id = insert_student(&conn, "1001", "Ana Souza", "1A", None).unwrap();
        let day = d("2025-09-01");

        let first = AttendanceRecord::new(id, day, t("07:05"), RecordKind::Entrada);
        replace_day_record(&mut conn, &first).unwrap();
        let second = AttendanceRecord::new(id, day, t("07:30"), RecordKind::Entrada);
        replace_day_record(&mut conn, &second).unwrap();

        let rec = find_day_record(&conn, id, &day, RecordKind::Entrada)
            .unwrap()
            .unwrap();
        assert_eq!(rec.time, t("07:30"));
        assert_eq!(load_day_records(&conn, id, &day).unwrap().len(), 1);
    }

    #[test]
    fn day_records_are_time_ordered() {
        let mut conn = test_conn();
        let id = insert_student(&conn, "1001", "Ana Souza", "1A", None).unwrap();
        let day = d("2025-09-01");

        let saida = AttendanceRecord::new(id, day, t("16:25"), RecordKind::Saida);
        replace_day_record(&mut conn, &saida).unwrap();
        let entrada = AttendanceRecord::new(id, day, t("07:10"), RecordKind::Entrada);
        replace_day_record(&mut conn, &entrada).unwrap();

        let recs = load_day_records(&conn, id, &day).unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].kind, RecordKind::Entrada);
        assert_eq!(recs[1].kind, RecordKind::Saida);
    }

    #[test]
    fn day_join_returns_one_row_per_student() {
        let mut conn = test_conn();
        let ana = insert_student(&conn, "1001", "Ana Souza", "1A", None).unwrap();
        insert_student(&conn, "1002", "Bruno Lima", "1A", None).unwrap();
        let day = d("2025-09-01");

        let entrada = AttendanceRecord::new(ana, day, t("07:10"), RecordKind::Entrada);
        replace_day_record(&mut conn, &entrada).unwrap();
        let saida = AttendanceRecord::new(ana, day, t("16:25"), RecordKind::Saida);
        replace_day_record(&mut conn, &saida).unwrap();

        let rows = load_students_with_day_records(&conn, &day).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0.nome, "Ana Souza");
        assert_eq!(rows[0].1, Some(t("07:10")));
        assert_eq!(rows[0].2, Some(t("16:25")));
        assert_eq!(rows[1].1, None);
        assert_eq!(rows[1].2, None);
    }
}
