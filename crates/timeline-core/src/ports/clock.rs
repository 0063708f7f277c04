use chrono::{DateTime, Utc};

/// Source of wall-clock time.
///
/// Post timestamps and admission windows both read time through this trait
/// so tests can control it.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
