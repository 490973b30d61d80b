//! `Holiday` record.

use dh_time::Date;

/// A named Danish holiday on a specific calendar day.
///
/// Immutable once constructed. `is_day_off` separates statutory paid
/// holidays from observance-only days such as Fastelavn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Holiday {
    date: Date,
    name: &'static str,
    is_day_off: bool,
}

impl Holiday {
    pub(crate) fn new(date: Date, name: &'static str, is_day_off: bool) -> Self {
        Self {
            date,
            name,
            is_day_off,
        }
    }

    /// Calendar day of the holiday.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Danish name, e.g. `"Skærtorsdag"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// `true` for a statutory paid day off, `false` for an observance.
    pub fn is_day_off(&self) -> bool {
        self.is_day_off
    }
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.date)
    }
}
