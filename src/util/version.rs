pub const APP_NAME: &str = "FoodieMap";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

/// Version string shown in the footer; prefers the git tag stamped at build
/// time over the cargo package version.
pub fn version_label() -> String {
    if let Some(tag) = GIT_TAG {
        tag.to_string()
    } else {
        format!("v{APP_VERSION}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_label_is_never_empty() {
        assert!(!version_label().is_empty());
    }
}
