#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn confirm_declines_without_browser() {
    assert!(!confirm("删除?"));
}

#[test]
fn delete_prompt_mentions_count() {
    assert_eq!(delete_rows_prompt(1), "确定要删除该记录吗？");
    assert_eq!(delete_rows_prompt(3), "确定要删除选中的 3 条记录吗？");
}
