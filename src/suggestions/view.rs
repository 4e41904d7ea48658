//! Projection from the submission list to what the page shows.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::consts::PLACEHOLDER_MESSAGE;
use crate::suggestions::submission::Submission;

/// One rendered suggestion block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryView {
    pub name: String,
    pub destination: String,
    pub timeframe: String,
    /// Epoch milliseconds; the host formats it in the user's locale.
    pub created: i64,
    pub notes: String,
}

impl EntryView {
    /// Header line, e.g. `Ann — Kyoto`.
    #[must_use]
    pub fn header(&self) -> String {
        format!("{} — {}", self.name, self.destination)
    }

    /// Meta line with an already formatted timestamp.
    #[must_use]
    pub fn meta(&self, created_label: &str) -> String {
        format!("{} • {created_label}", self.timeframe)
    }
}

impl From<&Submission> for EntryView {
    fn from(submission: &Submission) -> Self {
        Self {
            name: submission.name.clone(),
            destination: submission.destination.clone(),
            timeframe: submission.timeframe.clone(),
            created: submission.created,
            notes: submission.notes.clone(),
        }
    }
}

/// The full contents of the submissions container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListView {
    Empty { placeholder: &'static str },
    /// Newest first.
    Entries(Vec<EntryView>),
}

impl ListView {
    /// Project an oldest-first list into a newest-first view.
    #[must_use]
    pub fn from_submissions(submissions: &[Submission]) -> Self {
        if submissions.is_empty() {
            return Self::Empty { placeholder: PLACEHOLDER_MESSAGE };
        }
        Self::Entries(submissions.iter().rev().map(EntryView::from).collect())
    }

    #[must_use]
    pub fn entries(&self) -> &[EntryView] {
        match self {
            Self::Empty { .. } => &[],
            Self::Entries(entries) => entries,
        }
    }
}
