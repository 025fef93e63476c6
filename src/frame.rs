//! Frame metadata derived from a query's format.
//!
//! Result frames carry the query that produced them plus visualization hints:
//! `logs` frames prefer the logs panel (and are tagged as log lines when they
//! have a timestamp and a body), `trace` frames prefer the trace view.

use crate::query::{Query, QueryFormat};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub const NOT_AVAILABLE_QUERY_STRING: &str =
    "This feature is not available for this type of query yet";

/// Column value type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    String,
    NullableString,
    Time,
    NullableTime,
    Number,
    NullableNumber,
    Bool,
    NullableBool,
}

impl FieldType {
    pub fn is_time(self) -> bool {
        matches!(self, FieldType::Time | FieldType::NullableTime)
    }

    pub fn is_string(self) -> bool {
        matches!(self, FieldType::String | FieldType::NullableString)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

impl Field {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrameType {
    LogLines,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Visualization {
    Logs,
    Trace,
}

/// Query echo attached to every frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomMeta {
    pub query: Query,
    pub data: Option<String>,
    pub response_code_from_server: u16,
    /// Request duration in nanoseconds
    pub duration: u64,
    pub error: String,
}

impl CustomMeta {
    pub fn for_query(query: &Query) -> Self {
        Self {
            query: query.clone(),
            data: query.inline_data().map(str::to_string),
            response_code_from_server: 0,
            duration: 0,
            error: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executed_query_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomMeta>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub frame_type: Option<FrameType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_version: Option<[u32; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_visualization: Option<Visualization>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<FrameMeta>,
}

impl Frame {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            meta: None,
        }
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    fn meta_mut(&mut self) -> &mut FrameMeta {
        self.meta.get_or_insert_with(FrameMeta::default)
    }
}

/// Placeholder frame for query kinds that produce no data of their own
pub fn dummy_frame(query: &Query) -> Frame {
    let name = match query.ref_id() {
        "" => "response",
        ref_id => ref_id,
    };
    let mut frame = Frame::new(name);
    frame.meta = Some(FrameMeta {
        executed_query_string: Some(NOT_AVAILABLE_QUERY_STRING.to_string()),
        custom: Some(CustomMeta::for_query(query)),
        ..FrameMeta::default()
    });
    frame
}

/// Attach query metadata to a frame produced from inline data.
/// Existing frame metadata is replaced.
pub fn wrap_meta_for_inline_query<E: Display>(
    frame: Option<Frame>,
    error: Option<&E>,
    query: &Query,
) -> Frame {
    let mut frame = frame.unwrap_or_else(|| Frame::new(query.ref_id()));
    let mut custom = CustomMeta::for_query(query);
    if let Some(err) = error {
        custom.error = err.to_string();
    }
    frame.meta = Some(FrameMeta {
        executed_query_string: Some(NOT_AVAILABLE_QUERY_STRING.to_string()),
        custom: Some(custom),
        ..FrameMeta::default()
    });
    apply_trace_meta(apply_log_meta(frame, query), query)
}

/// Attach query metadata to a frame fetched from a remote source.
/// Metadata the fetch already produced is kept.
pub fn wrap_meta_for_remote_query<E: Display>(
    frame: Option<Frame>,
    error: Option<&E>,
    query: &Query,
) -> Frame {
    let mut frame = frame.unwrap_or_else(|| Frame::new(query.ref_id()));
    if frame.meta.is_none() {
        let mut custom = CustomMeta::for_query(query);
        if let Some(err) = error {
            custom.error = err.to_string();
        }
        frame.meta = Some(FrameMeta {
            custom: Some(custom),
            ..FrameMeta::default()
        });
    }
    apply_trace_meta(apply_log_meta(frame, query), query)
}

/// Logs hints. A frame only becomes log lines with both a `timestamp` time
/// field and a `body` string field.
pub fn apply_log_meta(mut frame: Frame, query: &Query) -> Frame {
    let has_log_shape = frame
        .fields
        .iter()
        .any(|f| f.name == "timestamp" && f.field_type.is_time())
        && frame
            .fields
            .iter()
            .any(|f| f.name == "body" && f.field_type.is_string());

    let meta = frame.meta_mut();
    if query.format == QueryFormat::Logs {
        if has_log_shape {
            meta.frame_type = Some(FrameType::LogLines);
            meta.type_version = Some([0, 0]);
        }
        meta.preferred_visualization = Some(Visualization::Logs);
    }
    frame
}

pub fn apply_trace_meta(mut frame: Frame, query: &Query) -> Frame {
    let meta = frame.meta_mut();
    if query.format == QueryFormat::Trace {
        meta.preferred_visualization = Some(Visualization::Trace);
    }
    frame
}
