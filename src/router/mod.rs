//! Static route table for the console.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app` declares one `<Route>` per record here, and the title hook in
//! `title` resolves navigation targets against the same table. Matching is
//! delegated to `leptos_router`; this module only owns the declarations.
//!
//! INVARIANTS
//! ==========
//! Paths are unique and the table is never mutated after startup.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod title;

pub use title::{BrowserDocument, DocumentTitle, Navigation, before_each, install_title_hook};

use crate::pages::Page;

/// Optional per-route metadata.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    /// Text copied into `document.title` when the route is entered.
    pub title: Option<&'static str>,
}

/// One entry of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteRecord {
    pub path: &'static str,
    pub name: &'static str,
    pub page: Page,
    pub meta: RouteMeta,
}

impl RouteRecord {
    /// Path without its leading `/`, as `StaticSegment` expects it.
    pub fn segment(&self) -> &'static str {
        self.path.trim_start_matches('/')
    }
}

pub const HOME: RouteRecord = RouteRecord {
    path: "/",
    name: "HomePage",
    page: Page::Home,
    meta: RouteMeta { title: None },
};

pub const TABLE_LIST: RouteRecord = RouteRecord {
    path: "/tables",
    name: "TableList",
    page: Page::TableList,
    meta: RouteMeta { title: Some("数据库表列表") },
};

pub const CODE_GENERATOR: RouteRecord = RouteRecord {
    path: "/codegenerator",
    name: "CodeGenerator",
    page: Page::CodeGenerator,
    meta: RouteMeta { title: Some("代码生成器") },
};

pub const USER_MANAGEMENT: RouteRecord = RouteRecord {
    path: "/user",
    name: "UserManagement",
    page: Page::UserManagement,
    meta: RouteMeta { title: None },
};

/// The route table, in declaration order.
pub const ROUTES: [RouteRecord; 4] = [HOME, TABLE_LIST, CODE_GENERATOR, USER_MANAGEMENT];

/// Exact-path lookup. A single trailing slash is ignored (`/tables/`).
pub fn find(path: &str) -> Option<&'static RouteRecord> {
    let path = match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    };
    ROUTES.iter().find(|r| r.path == path)
}
