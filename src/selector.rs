//! Format selector: the editor control that picks a result format.
//!
//! The selector owns no state. Each render reads the current query through the
//! policy; each selection builds an updated query, hands it to the change sink
//! and then asks the runner to re-execute. Both calls happen synchronously,
//! exactly once per selection, in that order.

use crate::catalog::FormatOption;
use crate::config::EditorConfig;
use crate::policy;
use crate::query::{Query, QueryFormat};
use serde::Serialize;
use tracing::debug;

pub const LABEL_TEXT: &str = "Format";
pub const DROPDOWN_TITLE: &str = "Select format";
pub const TEST_ID: &str = "infinity-query-format-selector";

/// Receives the updated query after a selection. The caller stores it.
pub trait QueryChangeSink {
    fn on_change(&mut self, query: Query);
}

/// Asked to re-execute the query the caller just stored.
pub trait QueryRunner {
    fn run_query(&mut self);
}

impl<F: FnMut(Query)> QueryChangeSink for F {
    fn on_change(&mut self, query: Query) {
        self(query)
    }
}

impl<F: FnMut()> QueryRunner for F {
    fn run_query(&mut self) {
        self()
    }
}

/// External capability that draws a labeled dropdown.
pub trait DropdownRenderer {
    fn render(&mut self, view: &SelectorView);
}

/// Everything a dropdown renderer needs to draw the control
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectorView {
    pub label: &'static str,
    pub label_width: u8,
    pub title: &'static str,
    pub test_id: &'static str,
    pub class_name: String,
    pub options: &'static [FormatOption],
    pub value: QueryFormat,
    pub menu_should_portal: bool,
}

pub struct FormatSelector<'q, C, R> {
    query: &'q Query,
    on_change: C,
    on_run_query: R,
}

impl<'q, C, R> FormatSelector<'q, C, R>
where
    C: QueryChangeSink,
    R: QueryRunner,
{
    pub fn new(query: &'q Query, on_change: C, on_run_query: R) -> Self {
        Self {
            query,
            on_change,
            on_run_query,
        }
    }

    pub fn query(&self) -> &Query {
        self.query
    }

    pub fn is_visible(&self) -> bool {
        policy::is_visible(self.query)
    }

    /// View model for the current query, or `None` when the control is hidden.
    ///
    /// The selected value is the stored format even when the policy does not
    /// offer it for this query type.
    pub fn view(&self, settings: &EditorConfig) -> Option<SelectorView> {
        match policy::availability(self.query) {
            policy::Availability::Hidden => None,
            policy::Availability::Options(options) => Some(SelectorView {
                label: LABEL_TEXT,
                label_width: settings.label_width,
                title: DROPDOWN_TITLE,
                test_id: TEST_ID,
                class_name: settings.select_class.clone(),
                options,
                value: self.query.format,
                menu_should_portal: settings.menu_portal,
            }),
        }
    }

    /// Draw the control. Returns false, without touching the renderer, when hidden.
    pub fn render<D: DropdownRenderer>(&self, settings: &EditorConfig, renderer: &mut D) -> bool {
        match self.view(settings) {
            Some(view) => {
                renderer.render(&view);
                true
            }
            None => false,
        }
    }

    /// Apply a user selection.
    ///
    /// Picking the value that is already selected still notifies both
    /// collaborators.
    pub fn select(&mut self, format: QueryFormat) {
        let updated = policy::apply_format(self.query, format);
        debug!(
            ref_id = %updated.ref_id(),
            query_type = %updated.query_type,
            from = %self.query.format,
            to = %format,
            "Format selected"
        );
        self.on_change.on_change(updated);
        debug!("Query re-run requested");
        self.on_run_query.run_query();
    }
}
