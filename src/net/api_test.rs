use super::*;

#[test]
fn tables_endpoint_formats_expected_path() {
    assert_eq!(tables_endpoint("shop"), "/api/codegen/tables/shop");
}

#[test]
fn metadata_endpoint_encodes_segments() {
    assert_eq!(metadata_endpoint("shop", "order items"), "/api/codegen/metadata/shop/order%20items");
    assert_eq!(metadata_endpoint("a/b", "t"), "/api/codegen/metadata/a%2Fb/t");
}

#[test]
fn generate_endpoint_includes_kind() {
    assert_eq!(
        generate_endpoint(GenerationKind::Backend, "shop", "user"),
        "/api/codegen/generate/backend/shop/user"
    );
    assert_eq!(
        generate_endpoint(GenerationKind::Fullstack, "shop", "user"),
        "/api/codegen/generate/fullstack/shop/user"
    );
}

#[test]
fn batch_and_delete_endpoints() {
    assert_eq!(batch_generate_endpoint("shop"), "/api/codegen/generate/batch/shop");
    assert_eq!(delete_generated_endpoint("shop", "user"), "/api/codegen/delete/shop/user");
}

#[test]
fn user_endpoint_formats_id() {
    assert_eq!(user_endpoint(42), "/api/user/42");
}

#[test]
fn user_list_request_defaults() {
    let spec = user_list_request(&UserQuery::default());
    assert_eq!(spec.method, Method::Get);
    assert_eq!(spec.url("/"), "/api/user?page=0&size=10");
}

#[test]
fn user_list_request_skips_blank_search() {
    let query = UserQuery { search: Some("   ".into()), ..UserQuery::default() };
    assert_eq!(user_list_request(&query).url("/"), "/api/user?page=0&size=10");
}

#[test]
fn user_list_request_trims_and_encodes_search() {
    let query = UserQuery { page: 3, size: 20, search: Some(" 李 ".into()) };
    assert_eq!(user_list_request(&query).url("/"), "/api/user?page=3&size=20&search=%E6%9D%8E");
}

#[test]
fn export_request_without_search() {
    let spec = user_export_request(None);
    assert_eq!(spec.method, Method::Get);
    assert_eq!(spec.url("/"), "/api/user/export");
    assert_eq!(user_export_request(Some("  ")).url("/"), "/api/user/export");
}

#[test]
fn export_request_carries_trimmed_search() {
    assert_eq!(user_export_request(Some(" 杭州 ")).url("/"), "/api/user/export?search=%E6%9D%AD%E5%B7%9E");
}

#[test]
fn export_href_uses_client_base() {
    use std::sync::Arc;

    struct Silent;
    impl crate::net::interceptor::Notifier for Silent {
        fn error(&self, _: &str) {}
    }

    let client = HttpClient::new("https://gen.example.com/backend/", Arc::new(Silent));
    assert_eq!(
        user_export_href(&client, Some("a b")),
        "https://gen.example.com/backend/api/user/export?search=a%20b"
    );
}

#[test]
fn import_endpoint_and_field_match_backend() {
    assert_eq!(USERS_IMPORT_ENDPOINT, "/api/user/import");
    assert_eq!(IMPORT_FILE_FIELD, "file");
}
