/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

use crate::models::status::DayStatus;

/// Dashboard color per derived status:
/// Presente → green, Atraso → yellow, Saída Antecipada → magenta,
/// Apenas Entrada → cyan, Ausente → grey.
pub fn color_for_status(status: DayStatus) -> &'static str {
    match status {
        DayStatus::Presente => GREEN,
        DayStatus::Atraso => YELLOW,
        DayStatus::SaidaAntecipada => MAGENTA,
        DayStatus::ApenasEntrada => CYAN,
        DayStatus::Ausente => GREY,
    }
}

/// Returns GREY for empty placeholders ("" or "--:--"), RESET otherwise.
pub fn color_for_optional_field<T: AsRef<str>>(value: Option<T>) -> &'static str {
    match value {
        Some(v) if !v.as_ref().trim().is_empty() && v.as_ref() != "--:--" => RESET,
        _ => GREY,
    }
}
