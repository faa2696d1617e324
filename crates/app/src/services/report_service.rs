//! Report service: reads the result record for the report page.

use crate::ports::KeyValueStore;
use crate::report_view::ReportView;
use crate::session_store::SessionStore;

/// Application service turning the persisted result record into a [`ReportView`].
pub struct ReportService<S> {
    session: SessionStore<S>,
}

impl<S: KeyValueStore> ReportService<S> {
    /// Create a new service reading from `session`.
    pub fn new(session: SessionStore<S>) -> Self {
        Self { session }
    }

    /// Read the result record once and lay it out.
    ///
    /// A missing, unreadable or undecodable record yields [`ReportView::Missing`].
    /// The record is never cleared, so going back and returning renders it again.
    pub fn load(&self) -> ReportView {
        match self.session.result() {
            Ok(report) => ReportView::from(report.as_ref()),
            Err(err) => {
                tracing::warn!(error = %err, "cannot read result record");
                ReportView::Missing
            }
        }
    }
}
