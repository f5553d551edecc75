//! Typed view over the free-form table metadata.

#[cfg(test)]
#[path = "table_info_test.rs"]
mod table_info_test;

use serde_json::Value;

use crate::net::types::TableMetadata;

/// The column properties the table list displays.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnSummary {
    pub column_name: String,
    pub field_name: String,
    pub java_type: String,
    pub jdbc_type: String,
    pub primary_key: bool,
    pub nullable: bool,
    pub auto_increment: bool,
}

fn str_field(obj: &serde_json::Map<String, Value>, key: &str) -> String {
    obj.get(key).and_then(Value::as_str).unwrap_or_default().to_owned()
}

fn bool_field(obj: &serde_json::Map<String, Value>, key: &str) -> bool {
    obj.get(key).and_then(Value::as_bool).unwrap_or(false)
}

/// Columns in server order. Entries that are not objects are skipped.
pub fn columns(meta: &TableMetadata) -> Vec<ColumnSummary> {
    let Some(list) = meta.get("columns").and_then(Value::as_array) else {
        return Vec::new();
    };
    list.iter()
        .filter_map(Value::as_object)
        .map(|col| ColumnSummary {
            column_name: str_field(col, "columnName"),
            field_name: str_field(col, "fieldName"),
            java_type: str_field(col, "javaType"),
            jdbc_type: str_field(col, "jdbcType"),
            primary_key: bool_field(col, "isPrimaryKey"),
            nullable: bool_field(col, "nullable"),
            auto_increment: bool_field(col, "autoIncrement"),
        })
        .collect()
}

/// Generated class name, e.g. `OrderItem` for `order_item`.
pub fn class_name(meta: &TableMetadata) -> Option<&str> {
    meta.get("className").and_then(Value::as_str)
}

pub fn primary_key(meta: &TableMetadata) -> Option<&str> {
    meta.get("primaryKey").and_then(Value::as_str)
}
