//! Attendance window classification.
//!
//! A badge scan is compared against two configured windows:
//!   - entrada: any time up to `entry_target + tolerance`
//!   - saída:   any time from `exit_target - tolerance` onwards
//!
//! Anything strictly between the two windows is a valid "no registration"
//! outcome: the scan is acknowledged but nothing is written.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::record_kind::RecordKind;
use crate::utils::time::parse_time;
use chrono::{Duration, NaiveTime};

/// Scan windows derived from the configured targets and tolerance.
#[derive(Debug, Clone, Copy)]
pub struct ScanWindows {
    pub entry_target: NaiveTime,
    pub exit_target: NaiveTime,
    pub tolerance: Duration,
}

/// Outcome of classifying one badge scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The scan falls inside a window and must be registered.
    Registered { kind: RecordKind, early_exit: bool },
    /// The scan falls between the two windows: nothing is written.
    OutOfWindow,
}

impl Classification {
    pub fn kind(&self) -> Option<RecordKind> {
        match self {
            Classification::Registered { kind, .. } => Some(*kind),
            Classification::OutOfWindow => None,
        }
    }

    /// Operator-facing label for this outcome.
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Registered {
                kind: RecordKind::Entrada,
                ..
            } => "Entrada registrada",
            Classification::Registered {
                kind: RecordKind::Saida,
                early_exit: true,
            } => "Saída antecipada registrada",
            Classification::Registered {
                kind: RecordKind::Saida,
                early_exit: false,
            } => "Saída registrada",
            Classification::OutOfWindow => "Fora do horário de registro",
        }
    }
}

impl ScanWindows {
    /// Build the windows from the configuration, validating the targets.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let entry_target = parse_time(&cfg.entry_target)
            .ok_or_else(|| AppError::InvalidTime(cfg.entry_target.clone()))?;
        let exit_target = parse_time(&cfg.exit_target)
            .ok_or_else(|| AppError::InvalidTime(cfg.exit_target.clone()))?;

        if cfg.tolerance_min < 0 {
            return Err(AppError::Config(format!(
                "tolerance_min must be non-negative, got {}",
                cfg.tolerance_min
            )));
        }

        let windows = Self {
            entry_target,
            exit_target,
            tolerance: Duration::minutes(cfg.tolerance_min),
        };
        windows.validate()?;
        Ok(windows)
    }

    /// The entrada and saída windows must not touch, otherwise a scan could
    /// classify both ways.
    pub fn validate(&self) -> AppResult<()> {
        if self.entry_upper() >= self.exit_lower() {
            return Err(AppError::Config(format!(
                "entry window end ({}) must come before exit window start ({}); \
                 adjust entry_target/exit_target/tolerance_min",
                self.entry_upper().format("%H:%M"),
                self.exit_lower().format("%H:%M"),
            )));
        }
        Ok(())
    }

    /// Upper bound of the entrada window (`entry_target + tolerance`).
    pub fn entry_upper(&self) -> NaiveTime {
        self.entry_target + self.tolerance
    }

    /// Lower bound of the saída window (`exit_target - tolerance`).
    pub fn exit_lower(&self) -> NaiveTime {
        self.exit_target - self.tolerance
    }

    /// Classify a scan time. Branches are mutually exclusive: `validate()`
    /// guarantees entry_upper < exit_lower.
    ///
    /// An entrada is always registered with the on-time label: the entrada
    /// branch only matches times at or before entry_upper, so a "late entry"
    /// can never be observed here. Lateness is derived by the aggregator
    /// instead (see core::status).
    pub fn classify(&self, at: NaiveTime) -> Classification {
        if at <= self.entry_upper() {
            Classification::Registered {
                kind: RecordKind::Entrada,
                early_exit: false,
            }
        } else if at >= self.exit_lower() {
            Classification::Registered {
                kind: RecordKind::Saida,
                early_exit: at < self.exit_target,
            }
        } else {
            Classification::OutOfWindow
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn windows() -> ScanWindows {
        ScanWindows {
            entry_target: NaiveTime::from_hms_opt(7, 20, 0).unwrap(),
            exit_target: NaiveTime::from_hms_opt(16, 20, 0).unwrap(),
            tolerance: Duration::minutes(20),
        }
    }

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn entry_window_classifies_as_entrada() {
        let w = windows();
        for at in [t(6, 0), t(7, 0), t(7, 20), t(7, 40)] {
            assert_eq!(w.classify(at).kind(), Some(RecordKind::Entrada));
            assert_eq!(w.classify(at).label(), "Entrada registrada");
        }
    }

    #[test]
    fn exit_window_classifies_as_saida() {
        let w = windows();
        for at in [t(16, 0), t(16, 20), t(16, 40), t(23, 59)] {
            assert_eq!(w.classify(at).kind(), Some(RecordKind::Saida));
        }
    }

    #[test]
    fn between_windows_is_no_registration() {
        let w = windows();
        for at in [t(7, 41), t(10, 0), t(12, 30), t(15, 59)] {
            assert_eq!(w.classify(at), Classification::OutOfWindow);
        }
        assert_eq!(
            w.classify(t(12, 0)).label(),
            "Fora do horário de registro"
        );
    }

    #[test]
    fn exit_before_target_is_labelled_early() {
        let w = windows();
        assert_eq!(
            w.classify(t(16, 5)).label(),
            "Saída antecipada registrada"
        );
        // exactly at the target is on time
        assert_eq!(w.classify(t(16, 20)).label(), "Saída registrada");
        assert_eq!(w.classify(t(17, 0)).label(), "Saída registrada");
    }

    #[test]
    fn overlapping_windows_are_rejected() {
        let w = ScanWindows {
            entry_target: t(7, 20),
            exit_target: t(7, 50),
            tolerance: Duration::minutes(20),
        };
        assert!(w.validate().is_err());
    }

    #[test]
    fn window_bounds() {
        let w = windows();
        assert_eq!(w.entry_upper(), t(7, 40));
        assert_eq!(w.exit_lower(), t(16, 0));
    }
}
