//! # Design Diagnostics
//!
//! Every check records what it found as a [`Diagnostic`]: an error when a
//! clause is violated, followed by warnings and info lines with the required
//! value and remediation advice. Diagnostics travel with the result and are
//! mirrored onto the `log` facade under the `seat_core` target, so a
//! consumer with a logger installed sees them as they are produced.
//!
//! Diagnostics are observational. The `safe` flag and the numbers in the
//! result are what callers should act on.

use serde::{Deserialize, Serialize};

/// Severity of a diagnostic line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    Error,
    Warning,
    Info,
    Debug,
}

impl Level {
    fn log_level(self) -> log::Level {
        match self {
            Level::Error => log::Level::Error,
            Level::Warning => log::Level::Warn,
            Level::Info => log::Level::Info,
            Level::Debug => log::Level::Debug,
        }
    }
}

/// Which part of the design produced a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Check {
    BoltGauge,
    BoltPitch,
    BoltEdgeDistance,
    OutstandingLegLength,
    OutstandingLegShear,
    OutstandingLegMoment,
    MomentLeverArm,
    BeamShear,
    Summary,
}

/// One diagnostic line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub level: Level,
    pub check: Check,

    /// Code clause reference (e.g., "Cl 8.4.1")
    pub clause: Option<String>,

    pub message: String,
}

impl Diagnostic {
    /// A clause violation: error level
    pub fn is_violation(&self) -> bool {
        self.level == Level::Error && self.check != Check::Summary
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.clause {
            Some(clause) => write!(f, "{:?}: {} [{}]", self.level, self.message, clause),
            None => write!(f, "{:?}: {}", self.level, self.message),
        }
    }
}

/// Ordered collector threaded through the design stages.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic and emit it through `log`.
    pub fn push(&mut self, level: Level, check: Check, clause: Option<&str>, message: impl Into<String>) {
        let diagnostic = Diagnostic {
            level,
            check,
            clause: clause.map(str::to_string),
            message: message.into(),
        };
        log::log!(target: "seat_core", level.log_level(), "{}", diagnostic);
        self.items.push(diagnostic);
    }

    /// Record a clause violation
    pub fn violation(&mut self, check: Check, clause: &str, message: impl Into<String>) {
        self.push(Level::Error, check, Some(clause), message);
    }

    pub fn warning(&mut self, check: Check, message: impl Into<String>) {
        self.push(Level::Warning, check, None, message);
    }

    pub fn info(&mut self, check: Check, message: impl Into<String>) {
        self.push(Level::Info, check, None, message);
    }

    pub fn debug(&mut self, check: Check, message: impl Into<String>) {
        self.push(Level::Debug, check, None, message);
    }

    pub fn has_violations(&self) -> bool {
        self.items.iter().any(Diagnostic::is_violation)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}
