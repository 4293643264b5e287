//! One-shot page initialization.
//!
//! Binds every feature against the document exactly once. Features are
//! independent: a skipped or failed feature is logged and recorded in the
//! [`InitReport`], and initialization carries on with the next one.

use crate::config::Config;
use crate::dom::Document;
use crate::error::{BindError, Feature};
use crate::features::{contact, filter, navigation, sidebar, testimonials};
use crate::logging::Diagnostics;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureStatus {
    Bound,
    Skipped(BindError),
}

/// Per-feature outcome of [`init`], in binding order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitReport {
    entries: Vec<(Feature, FeatureStatus)>,
}

impl InitReport {
    pub fn status(&self, feature: Feature) -> Option<&FeatureStatus> {
        self.entries.iter().find(|(name, _)| *name == feature).map(|(_, status)| status)
    }

    pub fn is_bound(&self, feature: Feature) -> bool {
        matches!(self.status(feature), Some(FeatureStatus::Bound))
    }

    pub fn bound_count(&self) -> usize {
        self.entries.iter().filter(|(_, status)| *status == FeatureStatus::Bound).count()
    }

    pub fn entries(&self) -> &[(Feature, FeatureStatus)] {
        &self.entries
    }

    fn record<T>(&mut self, feature: Feature, result: Result<T, BindError>, diag: Diagnostics) {
        let status = match result {
            Ok(_) => FeatureStatus::Bound,
            Err(err) => {
                if err.is_missing() {
                    diag.note(format_args!("{err}"));
                } else {
                    diag.error(format_args!("{err}"));
                }
                FeatureStatus::Skipped(err)
            }
        };
        self.entries.push((feature, status));
    }
}

/// Bind all five features against `doc`.
pub fn init<D: Document>(doc: &D, config: Config) -> InitReport {
    let diag = Diagnostics::new(config);
    let mut report = InitReport::default();
    report.record(sidebar::FEATURE, sidebar::bind(doc, diag), diag);
    report.record(testimonials::FEATURE, testimonials::bind(doc, diag), diag);
    report.record(filter::FEATURE, filter::bind(doc, diag), diag);
    report.record(contact::FEATURE, contact::bind(doc, diag), diag);
    report.record(navigation::FEATURE, navigation::bind(doc, diag), diag);
    diag.note(format_args!("{} of {} features ready", report.bound_count(), report.entries.len()));
    report
}

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;
