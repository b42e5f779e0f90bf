use serde::Deserialize;

/// One student entry inside a per-class roster file (`<codigo_turma>.json`).
///
/// The RA sometimes arrives as a bare number in exported rosters, so both
/// identifier fields accept numbers and strings.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterEntry {
    pub nome: Option<String>,
    #[serde(default)]
    pub ra: Option<serde_json::Value>,
    #[serde(default)]
    pub inep: Option<serde_json::Value>,
}

impl RosterEntry {
    pub fn ra_str(&self) -> Option<String> {
        Self::id_str(self.ra.as_ref())
    }

    pub fn inep_str(&self) -> Option<String> {
        Self::id_str(self.inep.as_ref())
    }

    fn id_str(v: Option<&serde_json::Value>) -> Option<String> {
        match v {
            Some(serde_json::Value::String(s)) if !s.trim().is_empty() => {
                Some(s.trim().to_string())
            }
            Some(serde_json::Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// One entry of the class-name catalogue (`turmas-com-disciplinas.json`).
#[derive(Debug, Clone, Deserialize)]
pub struct ClassEntry {
    #[serde(rename = "codigoTurma")]
    pub codigo_turma: String,
    #[serde(rename = "nomeTurma")]
    pub nome_turma: String,
}
