//! Query model: query kinds, result formats, and the editor query record.
//!
//! `QueryType` is closed over the kinds the editor knows about, with an
//! `Other` variant that keeps the raw tag of anything unrecognized so a query
//! survives a load/save cycle untouched.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declared kind of a query
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QueryType {
    Json,
    Csv,
    Tsv,
    Xml,
    GraphQl,
    Html,
    Uql,
    Groq,
    GoogleSheets,
    Series,
    Global,
    Transformations,
    /// Any tag the editor does not recognize, kept verbatim
    Other(UnknownTag),
}

/// Raw tag of an unrecognized query kind.
///
/// Only built by parsing a tag through `QueryType::from`, so it never holds
/// the tag of a known kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownTag(String);

impl UnknownTag {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl QueryType {
    /// Every known kind, in declaration order
    pub const KNOWN: [QueryType; 12] = [
        QueryType::Json,
        QueryType::Csv,
        QueryType::Tsv,
        QueryType::Xml,
        QueryType::GraphQl,
        QueryType::Html,
        QueryType::Uql,
        QueryType::Groq,
        QueryType::GoogleSheets,
        QueryType::Series,
        QueryType::Global,
        QueryType::Transformations,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            QueryType::Json => "json",
            QueryType::Csv => "csv",
            QueryType::Tsv => "tsv",
            QueryType::Xml => "xml",
            QueryType::GraphQl => "graphql",
            QueryType::Html => "html",
            QueryType::Uql => "uql",
            QueryType::Groq => "groq",
            QueryType::GoogleSheets => "google-sheets",
            QueryType::Series => "series",
            QueryType::Global => "global",
            QueryType::Transformations => "transformations",
            QueryType::Other(tag) => tag.as_str(),
        }
    }

    /// Kinds whose results are tabular data shaped by a result format.
    /// Series, global and transformation queries are utility kinds.
    pub fn is_data_query(&self) -> bool {
        matches!(
            self,
            QueryType::Json
                | QueryType::Csv
                | QueryType::Tsv
                | QueryType::Xml
                | QueryType::GraphQl
                | QueryType::Html
                | QueryType::Uql
                | QueryType::Groq
                | QueryType::GoogleSheets
        )
    }
}

impl From<&str> for QueryType {
    fn from(raw: &str) -> Self {
        match raw {
            "json" => QueryType::Json,
            "csv" => QueryType::Csv,
            "tsv" => QueryType::Tsv,
            "xml" => QueryType::Xml,
            "graphql" => QueryType::GraphQl,
            "html" => QueryType::Html,
            "uql" => QueryType::Uql,
            "groq" => QueryType::Groq,
            "google-sheets" => QueryType::GoogleSheets,
            "series" => QueryType::Series,
            "global" => QueryType::Global,
            "transformations" => QueryType::Transformations,
            other => QueryType::Other(UnknownTag(other.to_string())),
        }
    }
}

impl From<String> for QueryType {
    fn from(raw: String) -> Self {
        match QueryType::from(raw.as_str()) {
            QueryType::Other(_) => QueryType::Other(UnknownTag(raw)),
            known => known,
        }
    }
}

impl From<QueryType> for String {
    fn from(query_type: QueryType) -> Self {
        match query_type {
            QueryType::Other(UnknownTag(raw)) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape the query results are returned in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueryFormat {
    #[default]
    Table,
    Logs,
    Trace,
    NodeGraphNodes,
    NodeGraphEdges,
    Timeseries,
    Dataframe,
    AsIs,
}

impl QueryFormat {
    pub const ALL: [QueryFormat; 8] = [
        QueryFormat::Table,
        QueryFormat::Logs,
        QueryFormat::Trace,
        QueryFormat::NodeGraphNodes,
        QueryFormat::NodeGraphEdges,
        QueryFormat::Timeseries,
        QueryFormat::Dataframe,
        QueryFormat::AsIs,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QueryFormat::Table => "table",
            QueryFormat::Logs => "logs",
            QueryFormat::Trace => "trace",
            QueryFormat::NodeGraphNodes => "node-graph-nodes",
            QueryFormat::NodeGraphEdges => "node-graph-edges",
            QueryFormat::Timeseries => "timeseries",
            QueryFormat::Dataframe => "dataframe",
            QueryFormat::AsIs => "as-is",
        }
    }
}

impl FromStr for QueryFormat {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QueryFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| ApiError::UnknownFormat(s.to_string()))
    }
}

impl fmt::Display for QueryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Editor query record.
///
/// Only the fields the format policy reads are typed. Everything else,
/// `refId`, `source` and `data` included, stays in `extra` exactly as it was
/// decoded, explicit nulls and all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    #[serde(rename = "type")]
    pub query_type: QueryType,

    #[serde(default)]
    pub format: QueryFormat,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Query {
    pub fn new(query_type: QueryType, format: QueryFormat) -> Self {
        Self {
            query_type,
            format,
            extra: serde_json::Map::new(),
        }
    }

    pub fn with_ref_id(mut self, ref_id: impl Into<String>) -> Self {
        self.extra
            .insert("refId".to_string(), serde_json::Value::String(ref_id.into()));
        self
    }

    /// Query reference id, empty when unset
    pub fn ref_id(&self) -> &str {
        self.string_field("refId").unwrap_or("")
    }

    /// Where the query reads from (`url`, `inline`, ...)
    pub fn source(&self) -> Option<&str> {
        self.string_field("source")
    }

    /// Inline payload for `source = "inline"` queries
    pub fn inline_data(&self) -> Option<&str> {
        self.string_field("data")
    }

    fn string_field(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(serde_json::Value::as_str)
    }

    pub fn from_json(raw: &str) -> Result<Self, ApiError> {
        serde_json::from_str(raw).map_err(ApiError::InvalidQuery)
    }
}
