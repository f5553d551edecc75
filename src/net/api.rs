//! REST helpers for the code-generator and user endpoints.
//!
//! Each helper builds a `RequestSpec` and sends it through the shared
//! `HttpClient`, so every call here is intercepted: failures have already
//! been reported to the user when the `Err` comes back.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::http::{HttpClient, HttpError, Method, RequestSpec};
use super::types::{
    BatchGenerateOptions, DeleteOptions, GenerateOptions, GenerationKind, Page, TableMetadata, User,
    UserQuery,
};

fn seg(value: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(value)
}

fn tables_endpoint(schema: &str) -> String {
    format!("/api/codegen/tables/{}", seg(schema))
}

fn metadata_endpoint(schema: &str, table: &str) -> String {
    format!("/api/codegen/metadata/{}/{}", seg(schema), seg(table))
}

fn generate_endpoint(kind: GenerationKind, schema: &str, table: &str) -> String {
    format!("/api/codegen/generate/{}/{}/{}", kind.as_str(), seg(schema), seg(table))
}

fn batch_generate_endpoint(schema: &str) -> String {
    format!("/api/codegen/generate/batch/{}", seg(schema))
}

fn delete_generated_endpoint(schema: &str, table: &str) -> String {
    format!("/api/codegen/delete/{}/{}", seg(schema), seg(table))
}

const USERS_ENDPOINT: &str = "/api/user";
const USERS_BATCH_ENDPOINT: &str = "/api/user/batch";
const USERS_EXPORT_ENDPOINT: &str = "/api/user/export";
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
const USERS_IMPORT_ENDPOINT: &str = "/api/user/import";

/// Multipart field the import endpoint reads the workbook from.
pub const IMPORT_FILE_FIELD: &str = "file";

fn search_term(search: Option<&str>) -> Option<&str> {
    search.map(str::trim).filter(|s| !s.is_empty())
}

fn user_export_request(search: Option<&str>) -> RequestSpec {
    let spec = RequestSpec::new(Method::Get, USERS_EXPORT_ENDPOINT);
    match search_term(search) {
        Some(search) => spec.query("search", search),
        None => spec,
    }
}

fn user_endpoint(id: i64) -> String {
    format!("{USERS_ENDPOINT}/{id}")
}

fn user_list_request(query: &UserQuery) -> RequestSpec {
    let spec = RequestSpec::new(Method::Get, USERS_ENDPOINT)
        .query("page", query.page)
        .query("size", query.size);
    match search_term(query.search.as_deref()) {
        Some(search) => spec.query("search", search),
        None => spec,
    }
}

/// Sends a request whose body has to be serialized first. Serialization
/// failures are routed through the interceptor like any other failure.
macro_rules! with_body {
    ($client:expr, $spec:expr, $body:expr) => {
        match $spec.json($body) {
            Ok(spec) => spec,
            Err(e) => return $client.reject(e),
        }
    };
}

// =============================================================================
// CODE GENERATOR
// =============================================================================

/// List table names in `schema` via `GET /api/codegen/tables/{schema}`.
///
/// # Errors
///
/// Returns the intercepted `HttpError` on failure.
pub async fn list_tables(client: &HttpClient, schema: &str) -> Result<Vec<String>, HttpError> {
    client
        .json(RequestSpec::new(Method::Get, tables_endpoint(schema)))
        .await
}

/// Fetch one table's metadata via `GET /api/codegen/metadata/{schema}/{table}`.
///
/// # Errors
///
/// Returns the intercepted `HttpError` on failure.
pub async fn table_metadata(client: &HttpClient, schema: &str, table: &str) -> Result<TableMetadata, HttpError> {
    client
        .json(RequestSpec::new(Method::Get, metadata_endpoint(schema, table)))
        .await
}

/// Generate code for one table. Returns the server's confirmation text.
///
/// # Errors
///
/// Returns the intercepted `HttpError` on failure.
pub async fn generate(
    client: &HttpClient,
    kind: GenerationKind,
    schema: &str,
    table: &str,
    options: &GenerateOptions,
) -> Result<String, HttpError> {
    let spec = with_body!(
        client,
        RequestSpec::new(Method::Post, generate_endpoint(kind, schema, table)),
        options
    );
    client.text(spec).await
}

/// Generate full-stack code for several tables at once.
///
/// # Errors
///
/// Returns the intercepted `HttpError` on failure.
pub async fn batch_generate(
    client: &HttpClient,
    schema: &str,
    options: &BatchGenerateOptions,
) -> Result<String, HttpError> {
    let spec = with_body!(
        client,
        RequestSpec::new(Method::Post, batch_generate_endpoint(schema)),
        options
    );
    client.text(spec).await
}

/// Delete previously generated code for one table.
///
/// # Errors
///
/// Returns the intercepted `HttpError` on failure.
pub async fn delete_generated(
    client: &HttpClient,
    schema: &str,
    table: &str,
    options: &DeleteOptions,
) -> Result<String, HttpError> {
    let spec = with_body!(
        client,
        RequestSpec::new(Method::Delete, delete_generated_endpoint(schema, table)),
        options
    );
    client.text(spec).await
}

// =============================================================================
// USERS
// =============================================================================

/// Fetch one page of users.
///
/// # Errors
///
/// Returns the intercepted `HttpError` on failure.
pub async fn list_users(client: &HttpClient, query: &UserQuery) -> Result<Page<User>, HttpError> {
    client.json(user_list_request(query)).await
}

/// Fetch a single user.
///
/// # Errors
///
/// Returns the intercepted `HttpError` on failure, including 404.
pub async fn get_user(client: &HttpClient, id: i64) -> Result<User, HttpError> {
    client.json(RequestSpec::new(Method::Get, user_endpoint(id))).await
}

/// Create a user. Any `id` on the input is ignored by the server.
///
/// # Errors
///
/// Returns the intercepted `HttpError` on failure.
pub async fn create_user(client: &HttpClient, user: &User) -> Result<User, HttpError> {
    let user = User { id: None, ..user.clone() };
    let spec = with_body!(client, RequestSpec::new(Method::Post, USERS_ENDPOINT), &user);
    client.json(spec).await
}

/// Replace the user with `id`.
///
/// # Errors
///
/// Returns the intercepted `HttpError` on failure, including 404.
pub async fn update_user(client: &HttpClient, id: i64, user: &User) -> Result<User, HttpError> {
    let spec = with_body!(client, RequestSpec::new(Method::Put, user_endpoint(id)), user);
    client.json(spec).await
}

/// Delete one user.
///
/// # Errors
///
/// Returns the intercepted `HttpError` on failure, including 404.
pub async fn delete_user(client: &HttpClient, id: i64) -> Result<(), HttpError> {
    client.empty(RequestSpec::new(Method::Delete, user_endpoint(id))).await
}

/// Delete several users at once.
///
/// # Errors
///
/// Returns the intercepted `HttpError` on failure.
pub async fn batch_delete_users(client: &HttpClient, ids: &[i64]) -> Result<(), HttpError> {
    let spec = with_body!(client, RequestSpec::new(Method::Delete, USERS_BATCH_ENDPOINT), ids);
    client.empty(spec).await
}

/// Download URL of the Excel export, filtered like the current listing.
///
/// The export streams a workbook, so the browser fetches it directly
/// through a link rather than through the interceptor.
pub fn user_export_href(client: &HttpClient, search: Option<&str>) -> String {
    user_export_request(search).url(client.base_url())
}

/// Upload an Excel workbook of users via `POST /api/user/import`.
/// Returns the server's import summary.
///
/// # Errors
///
/// Returns the intercepted `HttpError` on failure.
#[cfg(feature = "csr")]
pub async fn import_users(client: &HttpClient, file: &web_sys::File) -> Result<String, HttpError> {
    let form = match web_sys::FormData::new() {
        Ok(form) => form,
        Err(e) => return client.reject(HttpError::Encode(format!("{e:?}"))),
    };
    if let Err(e) = form.append_with_blob_and_filename(IMPORT_FILE_FIELD, file, &file.name()) {
        return client.reject(HttpError::Encode(format!("{e:?}")));
    }
    log::info!("importing users from {}", file.name());
    client.upload(USERS_IMPORT_ENDPOINT, form).await
}
