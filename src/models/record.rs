use super::record_kind::RecordKind;
use chrono::{Local, NaiveDate, NaiveTime};
use serde::Serialize;

/// A single attendance record written by the scanner.
///
/// Records are immutable once written; the only mutation the system ever
/// performs is the classifier replacing a same-day same-kind record when the
/// same badge is scanned again inside the window.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub student_id: i64,    // ⇔ presenca.aluno_id
    pub date: NaiveDate,    // ⇔ presenca.date (TEXT "YYYY-MM-DD")
    pub time: NaiveTime,    // ⇔ presenca.time (TEXT "HH:MM")
    pub kind: RecordKind,   // ⇔ presenca.kind ('entrada' | 'saida')
    pub source: String,     // ⇔ presenca.source (TEXT, default 'scan')
    pub created_at: String, // ⇔ presenca.created_at (TEXT, ISO8601)
}

impl AttendanceRecord {
    /// Constructor for records created by a scan.
    /// - Sets `source = "scan"`
    /// - Sets `created_at = now() in ISO8601`
    pub fn new(student_id: i64, date: NaiveDate, time: NaiveTime, kind: RecordKind) -> Self {
        Self {
            id: 0,
            student_id,
            date,
            time,
            kind,
            source: "scan".to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}
