//! Result format catalog: every format the editor can offer, in display order.

use crate::query::QueryFormat;
use serde::Serialize;

/// A selectable format: wire value plus display label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormatOption {
    pub value: QueryFormat,
    pub label: &'static str,
}

impl FormatOption {
    pub const fn new(value: QueryFormat, label: &'static str) -> Self {
        Self { value, label }
    }
}

pub const TABLE: FormatOption = FormatOption::new(QueryFormat::Table, "Table");
pub const LOGS: FormatOption = FormatOption::new(QueryFormat::Logs, "Logs");
pub const TRACE: FormatOption = FormatOption::new(QueryFormat::Trace, "Trace");
pub const NODE_GRAPH_NODES: FormatOption =
    FormatOption::new(QueryFormat::NodeGraphNodes, "Nodes - Node Graph");
pub const NODE_GRAPH_EDGES: FormatOption =
    FormatOption::new(QueryFormat::NodeGraphEdges, "Edges - Node Graph");
pub const TIMESERIES: FormatOption = FormatOption::new(QueryFormat::Timeseries, "Time Series");
pub const DATAFRAME: FormatOption = FormatOption::new(QueryFormat::Dataframe, "Data Frame");
pub const AS_IS: FormatOption = FormatOption::new(QueryFormat::AsIs, "As Is");

/// The full catalog. Option sets handed to the editor are ordered subsets of it.
pub static RESULT_FORMATS: &[FormatOption] = &[
    TABLE,
    LOGS,
    TRACE,
    NODE_GRAPH_NODES,
    NODE_GRAPH_EDGES,
    TIMESERIES,
    DATAFRAME,
    AS_IS,
];

/// Catalog entry for a format
pub fn option_for(value: QueryFormat) -> FormatOption {
    match value {
        QueryFormat::Table => TABLE,
        QueryFormat::Logs => LOGS,
        QueryFormat::Trace => TRACE,
        QueryFormat::NodeGraphNodes => NODE_GRAPH_NODES,
        QueryFormat::NodeGraphEdges => NODE_GRAPH_EDGES,
        QueryFormat::Timeseries => TIMESERIES,
        QueryFormat::Dataframe => DATAFRAME,
        QueryFormat::AsIs => AS_IS,
    }
}
