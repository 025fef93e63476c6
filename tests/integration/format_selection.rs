//! Integration tests for format options and the selection flow

use infinity_format::config::EditorConfig;
use infinity_format::{
    availability, format_options, Availability, FormatSelector, Query, QueryFormat, QueryType,
    RESULT_FORMATS,
};
use serde_json::json;
use std::cell::RefCell;

fn values(query_type: &QueryType) -> Vec<&'static str> {
    format_options(query_type)
        .iter()
        .map(|o| o.value.as_str())
        .collect()
}

#[test]
fn test_json_selects_as_is() {
    let query: Query = serde_json::from_value(json!({ "type": "json", "format": "table" })).unwrap();
    let changes = RefCell::new(Vec::new());
    let runs = RefCell::new(0u32);

    let mut selector = FormatSelector::new(
        &query,
        |q: Query| changes.borrow_mut().push(q),
        || *runs.borrow_mut() += 1,
    );
    selector.select(QueryFormat::AsIs);

    let changes = changes.into_inner();
    assert_eq!(changes.len(), 1);
    assert_eq!(
        serde_json::to_value(&changes[0]).unwrap(),
        json!({ "type": "json", "format": "as-is" })
    );
    assert_eq!(*runs.borrow(), 1);
    assert_eq!(query.format, QueryFormat::Table);
}

#[test]
fn test_uql_option_list() {
    let query: Query = serde_json::from_value(json!({ "type": "uql", "format": "table" })).unwrap();
    let selector = FormatSelector::new(&query, |_q: Query| {}, || {});
    let view = selector.view(&EditorConfig::default()).unwrap();
    let offered: Vec<&str> = view.options.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(offered, vec!["table", "timeseries", "dataframe"]);
}

#[test]
fn test_option_sets_by_type() {
    assert_eq!(values(&QueryType::Json).len(), RESULT_FORMATS.len());
    for query_type in ["csv", "xml", "graphql", "tsv", "html", "groq", "google-sheets"] {
        let offered = values(&QueryType::from(query_type));
        assert_eq!(offered.len(), RESULT_FORMATS.len() - 1, "{}", query_type);
        assert!(!offered.contains(&"as-is"), "{}", query_type);
    }
}

#[test]
fn test_utility_kinds_are_hidden() {
    for query_type in ["series", "global", "transformations", "something-else"] {
        let query = Query::new(QueryType::from(query_type), QueryFormat::Table);
        assert_eq!(availability(&query), Availability::Hidden, "{}", query_type);
    }
}

#[test]
fn test_selection_preserves_editor_fields() {
    let original = json!({
        "refId": "A",
        "type": "csv",
        "source": "inline",
        "data": "a,b\n1,2",
        "format": "table",
        "columns": [{ "selector": "a", "text": "A", "type": "number" }],
        "filters": []
    });
    let query: Query = serde_json::from_value(original.clone()).unwrap();
    let mut stored = None;

    let mut selector = FormatSelector::new(&query, |q: Query| stored = Some(q), || {});
    selector.select(QueryFormat::Timeseries);
    drop(selector);

    let mut expected = original;
    expected["format"] = json!("timeseries");
    assert_eq!(serde_json::to_value(stored.unwrap()).unwrap(), expected);
}
