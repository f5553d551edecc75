use super::*;

use std::collections::HashSet;

#[test]
fn table_declares_four_routes_in_order() {
    let paths: Vec<_> = ROUTES.iter().map(|r| r.path).collect();
    assert_eq!(paths, ["/", "/tables", "/codegenerator", "/user"]);
}

#[test]
fn route_paths_are_unique() {
    let unique: HashSet<_> = ROUTES.iter().map(|r| r.path).collect();
    assert_eq!(unique.len(), ROUTES.len());
}

#[test]
fn route_names_are_unique() {
    let unique: HashSet<_> = ROUTES.iter().map(|r| r.name).collect();
    assert_eq!(unique.len(), ROUTES.len());
}

#[test]
fn declared_titles_match_pages() {
    assert_eq!(HOME.meta.title, None);
    assert_eq!(TABLE_LIST.meta.title, Some("数据库表列表"));
    assert_eq!(CODE_GENERATOR.meta.title, Some("代码生成器"));
    assert_eq!(USER_MANAGEMENT.meta.title, None);
}

#[test]
fn segment_strips_leading_slash() {
    assert_eq!(HOME.segment(), "");
    assert_eq!(TABLE_LIST.segment(), "tables");
    assert_eq!(CODE_GENERATOR.segment(), "codegenerator");
    assert_eq!(USER_MANAGEMENT.segment(), "user");
}

#[test]
fn find_matches_exact_path() {
    assert_eq!(find("/tables"), Some(&TABLE_LIST));
    assert_eq!(find("/"), Some(&HOME));
}

#[test]
fn find_ignores_single_trailing_slash() {
    assert_eq!(find("/user/"), Some(&USER_MANAGEMENT));
}

#[test]
fn find_rejects_prefixes_and_unknown_paths() {
    assert_eq!(find("/tables/users"), None);
    assert_eq!(find("/table"), None);
    assert_eq!(find("/missing"), None);
    assert_eq!(find(""), None);
}

#[test]
fn each_route_points_at_its_own_page() {
    assert_eq!(HOME.page, Page::Home);
    assert_eq!(TABLE_LIST.page, Page::TableList);
    assert_eq!(CODE_GENERATOR.page, Page::CodeGenerator);
    assert_eq!(USER_MANAGEMENT.page, Page::UserManagement);
}
