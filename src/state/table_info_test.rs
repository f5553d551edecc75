use super::*;

use serde_json::json;

fn meta(value: serde_json::Value) -> TableMetadata {
    match value {
        Value::Object(map) => map,
        other => panic!("not an object: {other}"),
    }
}

#[test]
fn columns_read_known_properties() {
    let m = meta(json!({
        "tableName": "order_item",
        "className": "OrderItem",
        "primaryKey": "id",
        "columns": [
            { "columnName": "id", "fieldName": "id", "javaType": "Integer", "jdbcType": "INT",
              "isPrimaryKey": true, "nullable": false, "autoIncrement": true },
            { "columnName": "unit_price", "fieldName": "unitPrice", "javaType": "Double",
              "jdbcType": "DOUBLE", "nullable": true }
        ]
    }));
    let cols = columns(&m);
    assert_eq!(cols.len(), 2);
    assert!(cols[0].primary_key);
    assert!(cols[0].auto_increment);
    assert_eq!(cols[1].field_name, "unitPrice");
    assert!(cols[1].nullable);
    assert!(!cols[1].primary_key);
    assert_eq!(class_name(&m), Some("OrderItem"));
    assert_eq!(primary_key(&m), Some("id"));
}

#[test]
fn missing_columns_yield_empty_list() {
    assert!(columns(&meta(json!({ "tableName": "t" }))).is_empty());
    assert!(columns(&meta(json!({ "columns": "oops" }))).is_empty());
}

#[test]
fn non_object_columns_are_skipped() {
    let m = meta(json!({ "columns": [1, { "columnName": "a" }] }));
    let cols = columns(&m);
    assert_eq!(cols.len(), 1);
    assert_eq!(cols[0].column_name, "a");
    assert_eq!(cols[0].java_type, "");
}

#[test]
fn null_primary_key_is_none() {
    assert_eq!(primary_key(&meta(json!({ "primaryKey": null }))), None);
}
