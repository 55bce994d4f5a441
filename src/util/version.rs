pub const APP_NAME: &str = "seller-pricing";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

/// Package version, with the release tag appended when it differs.
pub fn version_label() -> String {
    match GIT_TAG {
        Some(tag) if tag.trim_start_matches('v') != APP_VERSION => {
            format!("{APP_VERSION} ({tag})")
        }
        _ => APP_VERSION.to_string(),
    }
}
