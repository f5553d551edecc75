//! Blocking confirmation prompt for destructive actions.
//!
//! Requires a browser environment; native builds always decline so nothing
//! destructive runs without a user.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

/// Ask the user to confirm `message`. Returns `false` when no browser window
/// is available or the user cancels.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}

/// Prompt text for deleting `count` rows.
pub fn delete_rows_prompt(count: usize) -> String {
    if count == 1 {
        "确定要删除该记录吗？".to_owned()
    } else {
        format!("确定要删除选中的 {count} 条记录吗？")
    }
}
