use super::*;

#[test]
fn default_config_targets_same_origin() {
    let config = AppConfig::default();
    assert_eq!(config.api_base, "/");
    assert_eq!(config.mount_id, "app");
    assert_eq!(config.app_title, "代码生成器平台");
}

#[test]
fn missing_overrides_fall_back_to_defaults() {
    assert_eq!(AppConfig::from_overrides(None, None, None), AppConfig::default());
}

#[test]
fn blank_overrides_are_ignored() {
    assert_eq!(AppConfig::from_overrides(Some("  "), Some(""), Some(" ")), AppConfig::default());
}

#[test]
fn api_base_gets_single_trailing_slash() {
    let config = AppConfig::from_overrides(Some("https://gen.example.com/backend//"), None, None);
    assert_eq!(config.api_base, "https://gen.example.com/backend/");

    let config = AppConfig::from_overrides(Some("/proxy"), None, None);
    assert_eq!(config.api_base, "/proxy/");
}

#[test]
fn mount_id_accepts_css_selector_form() {
    let config = AppConfig::from_overrides(None, Some("#root"), None);
    assert_eq!(config.mount_id, "root");
}
