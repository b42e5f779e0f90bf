use serde::Serialize;

/// Kind of an attendance record: a student either clocks in (entrada)
/// or clocks out (saída) once per calendar day.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum RecordKind {
    Entrada,
    Saida,
}

impl RecordKind {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            RecordKind::Entrada => "entrada",
            RecordKind::Saida => "saida",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "entrada" => Some(RecordKind::Entrada),
            "saida" => Some(RecordKind::Saida),
            _ => None,
        }
    }

}
