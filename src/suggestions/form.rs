//! Suggestion form controller.
//!
//! Owns the in-memory submission list for the page's lifetime. It is loaded
//! from storage exactly once in [`SuggestionCore::new`]; after that the
//! controller's own writes are the only thing that changes it.
//!
//! TRADE-OFFS
//! ==========
//! Storage failures never reach the user. Corrupt or unreadable data starts
//! an empty list (the bad value is left alone until the next save overwrites
//! it), and a failed save keeps the new entry in memory for this page view.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::consts::{SUCCESS_MESSAGE, VALIDATION_MESSAGE};
use crate::suggestions::store::{KeyValueStore, SubmissionLog};
use crate::suggestions::submission::{FormFields, Submission};
use crate::suggestions::view::ListView;

/// UI side effects of a form command, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormAction {
    ShowMessage(&'static str),
    /// Clear every form field.
    ResetForm,
    Render(ListView),
}

/// Suggestion board controller.
pub struct SuggestionCore<S> {
    log: SubmissionLog<S>,
    submissions: Vec<Submission>,
}

impl<S: KeyValueStore> SuggestionCore<S> {
    /// Load the persisted list once and take ownership of it.
    pub fn new(store: SubmissionLog<S>) -> Self {
        let submissions = match store.load() {
            Ok(list) => list,
            Err(e) => {
                log::warn!("{}: starting with no suggestions ({e})", e.code());
                Vec::new()
            }
        };
        log::debug!("loaded {} suggestion(s) from {:?}", submissions.len(), store.key());
        Self { log: store, submissions }
    }

    /// Current view of the list, newest first.
    #[must_use]
    pub fn render(&self) -> ListView {
        ListView::from_submissions(&self.submissions)
    }

    /// Handle a form submission at time `now_ms` (epoch milliseconds).
    ///
    /// Rejected input leaves the list and the form untouched and only shows
    /// the validation message.
    pub fn submit(&mut self, fields: FormFields, now_ms: i64) -> Vec<FormAction> {
        let submission = match fields.into_submission(now_ms) {
            Ok(submission) => submission,
            Err(e) => {
                log::debug!("suggestion rejected: {e}");
                return vec![FormAction::ShowMessage(VALIDATION_MESSAGE)];
            }
        };

        self.submissions.push(submission);
        if let Err(e) = self.log.save(&self.submissions) {
            log::warn!("{}: suggestion kept for this page only ({e})", e.code());
        }

        vec![
            FormAction::ShowMessage(SUCCESS_MESSAGE),
            FormAction::ResetForm,
            FormAction::Render(self.render()),
        ]
    }

    // --- Queries ---

    /// Submissions in insertion order, oldest first.
    #[must_use]
    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.submissions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn log(&self) -> &SubmissionLog<S> {
        &self.log
    }
}
