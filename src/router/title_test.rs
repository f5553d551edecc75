use super::*;

use crate::router::{CODE_GENERATOR, HOME, ROUTES, TABLE_LIST, USER_MANAGEMENT};

#[derive(Debug)]
struct MemoryDocument {
    title: String,
    writes: usize,
}

impl MemoryDocument {
    fn with_title(title: &str) -> Self {
        Self { title: title.to_owned(), writes: 0 }
    }
}

impl DocumentTitle for MemoryDocument {
    fn set_title(&mut self, title: &str) {
        title.clone_into(&mut self.title);
        self.writes += 1;
    }
}

// =============================================================
// before_each
// =============================================================

#[test]
fn titled_route_sets_document_title() {
    let mut doc = MemoryDocument::with_title("previous");
    assert_eq!(before_each(&TABLE_LIST, &mut doc), Navigation::Continue);
    assert_eq!(doc.title, "数据库表列表");

    assert_eq!(before_each(&CODE_GENERATOR, &mut doc), Navigation::Continue);
    assert_eq!(doc.title, "代码生成器");
}

#[test]
fn untitled_route_leaves_title_untouched() {
    let mut doc = MemoryDocument::with_title("代码生成器");
    assert_eq!(before_each(&USER_MANAGEMENT, &mut doc), Navigation::Continue);
    assert_eq!(doc.title, "代码生成器");
    assert_eq!(doc.writes, 0);

    assert_eq!(before_each(&HOME, &mut doc), Navigation::Continue);
    assert_eq!(doc.title, "代码生成器");
    assert_eq!(doc.writes, 0);
}

#[test]
fn every_route_continues_and_applies_only_declared_titles() {
    for route in &ROUTES {
        let mut doc = MemoryDocument::with_title("before");
        assert_eq!(before_each(route, &mut doc), Navigation::Continue);
        let expected = route.meta.title.unwrap_or("before");
        assert_eq!(doc.title, expected, "route {}", route.path);
    }
}

// =============================================================
// on_navigate
// =============================================================

#[test]
fn navigation_sequence_keeps_last_declared_title() {
    let mut doc = MemoryDocument::with_title("start");
    for path in ["/tables", "/user", "/", "/codegenerator", "/user"] {
        assert_eq!(on_navigate(path, &mut doc), Navigation::Continue);
    }
    assert_eq!(doc.title, "代码生成器");
    assert_eq!(doc.writes, 2);
}

#[test]
fn unknown_path_continues_without_title_change() {
    let mut doc = MemoryDocument::with_title("start");
    assert_eq!(on_navigate("/nowhere", &mut doc), Navigation::Continue);
    assert_eq!(doc.title, "start");
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_document_is_noop_without_csr() {
    let mut doc = BrowserDocument;
    doc.set_title("ignored");
}
