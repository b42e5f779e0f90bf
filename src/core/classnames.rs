//! Class-name catalogue: a read-only map `codigoTurma -> nomeTurma`.
//!
//! Loaded once at startup and passed explicitly to whoever renders class
//! names. A missing or malformed catalogue degrades to raw class codes,
//! never to a failure.

use crate::models::roster::ClassEntry;
use crate::ui::messages::warning;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub fn load_class_names(path: &Path) -> HashMap<String, String> {
    if !path.exists() {
        return HashMap::new();
    }

    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warning(format!(
                "Could not read class catalogue {}: {}",
                path.display(),
                e
            ));
            return HashMap::new();
        }
    };

    match serde_json::from_str::<Vec<ClassEntry>>(&content) {
        Ok(entries) => entries
            .into_iter()
            .map(|e| (e.codigo_turma, e.nome_turma))
            .collect(),
        Err(e) => {
            warning(format!(
                "Could not parse class catalogue {}: {}",
                path.display(),
                e
            ));
            HashMap::new()
        }
    }
}
