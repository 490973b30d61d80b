//! Process-wide settings.
//!
//! [`Settings`] holds the **evaluation date**: the day treated as "today"
//! when a caller asks for the current year's holidays. It is a singleton
//! accessed via a `std::sync::OnceLock`, stored as a serial day number so
//! this crate does not depend on the date type.
//!
//! The evaluation date sits behind a `Mutex` so it can be changed from any
//! thread. Tests that pin it should use [`ScopedEvaluationDate`].

use std::sync::{Mutex, MutexGuard, OnceLock};

use crate::Serial;

/// Process-wide settings used by the danish-holidays crates.
pub struct Settings {
    /// The evaluation date serial, or `None` for "use the system clock".
    evaluation_date: Mutex<Option<Serial>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            evaluation_date: Mutex::new(None),
        })
    }

    fn slot(&self) -> MutexGuard<'_, Option<Serial>> {
        // Poisoning cannot leave an `Option<i32>` half-written.
        self.evaluation_date
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Return the evaluation date serial number.
    ///
    /// Returns `None` if no evaluation date has been set.
    pub fn evaluation_date_serial(&self) -> Option<Serial> {
        *self.slot()
    }

    /// Set the evaluation date as a serial number.
    pub fn set_evaluation_date_serial(&self, serial: Serial) {
        *self.slot() = Some(serial);
    }

    /// Clear the evaluation date, resetting it to "use today".
    pub fn reset_evaluation_date(&self) {
        *self.slot() = None;
    }
}

/// Guard that pins the evaluation date and restores the previous value on
/// drop.
///
/// ```
/// use dh_core::{ScopedEvaluationDate, Settings};
///
/// {
///     let _guard = ScopedEvaluationDate::new(19_723);
///     assert_eq!(Settings::instance().evaluation_date_serial(), Some(19_723));
/// }
/// ```
#[must_use = "the evaluation date is restored as soon as the guard is dropped"]
pub struct ScopedEvaluationDate {
    previous: Option<Serial>,
}

impl ScopedEvaluationDate {
    /// Pin the evaluation date to `serial` until the guard is dropped.
    pub fn new(serial: Serial) -> Self {
        let settings = Settings::instance();
        let previous = settings.evaluation_date_serial();
        settings.set_evaluation_date_serial(serial);
        Self { previous }
    }
}

impl Drop for ScopedEvaluationDate {
    fn drop(&mut self) {
        let settings = Settings::instance();
        match self.previous {
            Some(serial) => settings.set_evaluation_date_serial(serial),
            None => settings.reset_evaluation_date(),
        }
    }
}
