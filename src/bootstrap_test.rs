use super::*;

#[test]
fn log_level_matches_build_profile() {
    let expected = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    assert_eq!(log_level(), expected);
}

#[test]
fn init_logging_is_idempotent() {
    init_logging();
    init_logging();
}

#[test]
fn errors_name_the_anchor() {
    assert_eq!(BootstrapError::MissingAnchor("app".into()).to_string(), "mount anchor #app not found");
    assert_eq!(
        BootstrapError::NotAnElement("app".into()).to_string(),
        "mount anchor #app is not an HTML element"
    );
}
