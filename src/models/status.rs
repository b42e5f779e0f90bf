use chrono::NaiveTime;
use serde::{Serialize, Serializer};

/// Daily presence status derived from a student's entrada/saída records.
///
/// Never persisted: always recomputed from the record log, so the dashboard
/// state is fully recoverable from the events alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    Ausente,
    ApenasEntrada,
    Presente,
    Atraso,
    SaidaAntecipada,
}

impl DayStatus {
    /// Human-readable label, as shown on the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            DayStatus::Ausente => "Ausente",
            DayStatus::ApenasEntrada => "Apenas Entrada",
            DayStatus::Presente => "Presente",
            DayStatus::Atraso => "Atraso",
            DayStatus::SaidaAntecipada => "Saída Antecipada",
        }
    }
}

// JSON consumers (the web dashboard) expect the display label.
impl Serialize for DayStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// One aggregated dashboard row: a student plus the status derived for the
/// requested day. `nome_turma` falls back to the raw class code when the
/// class-name catalogue has no entry for it.
#[derive(Debug, Clone, Serialize)]
pub struct StudentDayStatus {
    pub ra: String,
    pub nome: String,
    pub codigo_turma: String,
    pub nome_turma: String,
    pub status: DayStatus,
    pub entrada: Option<NaiveTime>,
    pub saida: Option<NaiveTime>,
}
