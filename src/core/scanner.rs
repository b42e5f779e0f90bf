//! Scan registration flow: the consumer side of the scanner feed.
//!
//! The camera loop (out of process) decodes a badge into a raw RA string and
//! hands it over; everything from here on is the classifier contract.

use crate::core::classifier::{Classification, ScanWindows};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{find_student_by_ra, replace_day_record};
use crate::errors::{AppError, AppResult};
use crate::models::record::AttendanceRecord;
use crate::models::student::Student;
use chrono::{NaiveDate, NaiveTime};

/// High-level business logic for the `scan` command.
pub struct ScanLogic;

/// What a single scan did, for the operator display.
pub struct ScanReport {
    pub student: Student,
    pub outcome: Classification,
}

impl ScanLogic {
    /// Register one badge scan.
    ///
    /// - Unknown RA → `StudentNotFound`, no mutation.
    /// - Out-of-window time → `OutOfWindow` outcome, no mutation (not a failure).
    /// - In-window time → the same-day same-kind record is atomically replaced,
    ///   so re-scanning always leaves exactly one record stamped with the
    ///   latest time.
    pub fn apply(
        pool: &mut DbPool,
        windows: &ScanWindows,
        ra: &str,
        date: NaiveDate,
        time: NaiveTime,
    ) -> AppResult<ScanReport> {
        let student = find_student_by_ra(&pool.conn, ra)?
            .ok_or_else(|| AppError::StudentNotFound(ra.to_string()))?;

        let outcome = windows.classify(time);

        if let Some(kind) = outcome.kind() {
            let rec = AttendanceRecord::new(student.id, date, time, kind);
            replace_day_record(&mut pool.conn, &rec)?;

            // Audit trail is best-effort: a failed log line must not undo a
            // registered scan.
            let _ = audit(
                &pool.conn,
                "scan",
                &student.ra,
                &format!("{} at {} on {}", outcome.label(), rec.time_str(), rec.date_str()),
            );
        }

        Ok(ScanReport { student, outcome })
    }
}
