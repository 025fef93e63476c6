//! Format policy: which formats a query kind may use, and whether the format
//! selector is shown at all.
//!
//! Every option set is a fixed, ordered slice of the catalog. Nothing here
//! validates or repairs the format already stored on a query.

use crate::catalog::{FormatOption, DATAFRAME, RESULT_FORMATS, TABLE, TIMESERIES};
use crate::catalog::{LOGS, NODE_GRAPH_EDGES, NODE_GRAPH_NODES, TRACE};
use crate::query::{Query, QueryFormat, QueryType};
use tracing::trace;

/// Formats a UQL query can produce
static UQL_FORMATS: &[FormatOption] = &[TABLE, TIMESERIES, DATAFRAME];

/// Formats for every other data query: the catalog without `as-is`
static DATA_FORMATS: &[FormatOption] = &[
    TABLE,
    LOGS,
    TRACE,
    NODE_GRAPH_NODES,
    NODE_GRAPH_EDGES,
    TIMESERIES,
    DATAFRAME,
];

/// What the editor should show for a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Hidden,
    Options(&'static [FormatOption]),
}

/// Whether the format selector is shown for this query.
pub fn is_visible(query: &Query) -> bool {
    let visible = query.query_type.is_data_query() || query.query_type == QueryType::Uql;
    trace!(query_type = %query.query_type, visible, "Format selector visibility");
    visible
}

/// Ordered options for a query kind.
///
/// Total over every kind: anything that is neither `json` nor `uql`,
/// unrecognized kinds included, gets the catalog minus `as-is`.
pub fn format_options(query_type: &QueryType) -> &'static [FormatOption] {
    match query_type {
        QueryType::Json => RESULT_FORMATS,
        QueryType::Uql => UQL_FORMATS,
        _ => DATA_FORMATS,
    }
}

/// Visibility and options in one step. Options are only computed for visible queries.
pub fn availability(query: &Query) -> Availability {
    if is_visible(query) {
        Availability::Options(format_options(&query.query_type))
    } else {
        Availability::Hidden
    }
}

/// Whether `format` is among the options offered for `query_type`
pub fn is_format_allowed(query_type: &QueryType, format: QueryFormat) -> bool {
    format_options(query_type).iter().any(|o| o.value == format)
}

/// Copy of `query` with `format` replaced; every other field is kept as is.
pub fn apply_format(query: &Query, format: QueryFormat) -> Query {
    Query {
        format,
        ..query.clone()
    }
}
