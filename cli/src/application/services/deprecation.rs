//! Application service: deprecation notices.
//!
//! Each code is reported at most once per run. Codes listed in the service
//! file's `disabledDeprecations` (or `*`) and in the caller-supplied list
//! are silenced.

use std::cell::RefCell;
use std::collections::HashSet;

use crate::application::ports::ProgressReporter;
use crate::domain::deprecation::service_deprecations;
use crate::domain::service::ServiceConfig;

const DISABLE_ALL: &str = "*";

/// Deduplicating deprecation sink over a `ProgressReporter`.
pub struct DeprecationReporter<'r, R: ProgressReporter> {
    reporter: &'r R,
    disabled: HashSet<String>,
    emitted: RefCell<HashSet<&'static str>>,
}

impl<'r, R: ProgressReporter> DeprecationReporter<'r, R> {
    #[must_use]
    pub fn new(reporter: &'r R, disabled: impl IntoIterator<Item = String>) -> Self {
        Self {
            reporter,
            disabled: disabled.into_iter().collect(),
            emitted: RefCell::new(HashSet::new()),
        }
    }

    fn is_disabled(&self, code: &str) -> bool {
        self.disabled.contains(DISABLE_ALL) || self.disabled.contains(code)
    }

    /// Report `message` under `code`. Returns `true` if it was emitted.
    pub fn report(&self, code: &'static str, message: &str) -> bool {
        if self.is_disabled(code) || !self.emitted.borrow_mut().insert(code) {
            tracing::debug!(code, "deprecation suppressed");
            return false;
        }
        self.reporter
            .warn(&format!("Deprecation warning ({code}): {message}"));
        true
    }

    /// Codes emitted so far.
    #[must_use]
    pub fn emitted(&self) -> Vec<&'static str> {
        let mut codes: Vec<_> = self.emitted.borrow().iter().copied().collect();
        codes.sort_unstable();
        codes
    }
}

/// Report every deprecation found in `service`, honouring its
/// `disabledDeprecations` as well as the reporter's own list.
pub fn report_service_deprecations<R: ProgressReporter>(
    service: &ServiceConfig,
    deprecations: &DeprecationReporter<'_, R>,
) {
    for deprecation in service_deprecations(service) {
        if service
            .disabled_deprecations
            .iter()
            .any(|c| c == DISABLE_ALL || c == deprecation.code)
        {
            continue;
        }
        deprecations.report(deprecation.code, &deprecation.message);
    }
}
