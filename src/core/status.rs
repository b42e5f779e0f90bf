//! Daily status aggregation: the dual of the classifier windows.
//!
//! Each student's current state is recomputed from that day's entrada/saída
//! records on every call; nothing derived is ever stored.

use crate::core::classifier::ScanWindows;
use crate::db::pool::DbPool;
use crate::db::queries::load_students_with_day_records;
use crate::errors::AppResult;
use crate::models::status::{DayStatus, StudentDayStatus};
use chrono::{NaiveDate, NaiveTime};
use std::collections::HashMap;

pub struct StatusLogic;

/// Decision table for one student's day. The check order is load-bearing:
///
/// 1. no entrada            → Ausente (even when a saída exists)
/// 2. entrada, no saída     → Apenas Entrada
/// 3. saída < exit lower    → Saída Antecipada
/// 4. entrada > entry upper → Atraso
/// 5. otherwise             → Presente
///
/// Conditions 3 and 4 can hold at the same time; early exit wins because it
/// is checked first.
pub fn derive_status(
    windows: &ScanWindows,
    entrada: Option<NaiveTime>,
    saida: Option<NaiveTime>,
) -> DayStatus {
    match (entrada, saida) {
        (None, _) => DayStatus::Ausente,
        (Some(_), None) => DayStatus::ApenasEntrada,
        (Some(ent), Some(sai)) => {
            if sai < windows.exit_lower() {
                DayStatus::SaidaAntecipada
            } else if ent > windows.entry_upper() {
                DayStatus::Atraso
            } else {
                DayStatus::Presente
            }
        }
    }
}

impl StatusLogic {
    /// Aggregate all students for one day, ordered by display name.
    ///
    /// `class_names` is the read-only catalogue loaded at startup; a class
    /// code without a catalogue entry falls back to the code itself.
    pub fn aggregate(
        pool: &mut DbPool,
        windows: &ScanWindows,
        date: &NaiveDate,
        class_names: &HashMap<String, String>,
    ) -> AppResult<Vec<StudentDayStatus>> {
        let rows = load_students_with_day_records(&pool.conn, date)?;

        let mut out = Vec::with_capacity(rows.len());
        for (student, entrada, saida) in rows {
            let status = derive_status(windows, entrada, saida);
            let nome_turma = class_names
                .get(&student.codigo_turma)
                .cloned()
                .unwrap_or_else(|| student.codigo_turma.clone());

            out.push(StudentDayStatus {
                ra: student.ra,
                nome: student.nome,
                codigo_turma: student.codigo_turma,
                nome_turma,
                status,
                entrada,
                saida,
            });
        }

        Ok(out)
    }
}
