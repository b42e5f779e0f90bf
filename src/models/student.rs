use serde::Serialize;

/// A registered student.
///
/// `ra` is the primary external key used on badges; `inep` is an optional
/// secondary identifier. Students are never deleted in normal operation,
/// only their class group (and INEP) can change.
#[derive(Debug, Clone, Serialize)]
pub struct Student {
    pub id: i64,
    pub ra: String,              // ⇔ alunos.ra (TEXT UNIQUE NOT NULL)
    pub inep: Option<String>,    // ⇔ alunos.inep (TEXT UNIQUE)
    pub nome: String,            // ⇔ alunos.nome
    pub codigo_turma: String,    // ⇔ alunos.codigo_turma
}
