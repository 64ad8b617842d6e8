#![allow(dead_code)]

pub mod test_db;

use folio_core::ProjectRecord;

use serde_json::{Map, Value, json};

/// Field map shaped like what the admin form submits
pub fn sample_fields(title: &str) -> Map<String, Value> {
    json!({
        "id": 1,
        "title": title,
        "img": "https://example.com/img.png",
        "data_img": "https://example.com/data-img.png",
        "desc": "A sample portfolio project",
        "link": "https://example.com",
        "git": "https://github.com/example/sample",
    })
    .as_object()
    .unwrap()
    .clone()
}

pub fn sample_record(title: &str) -> ProjectRecord {
    ProjectRecord::new(sample_fields(title))
}
