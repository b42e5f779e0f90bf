pub mod record;
pub mod record_kind;
pub mod roster;
pub mod status;
pub mod student;
