//! Exclusion rules for the OS image catalog.

/// Deprecated OS families, matched on the reference-code prefix.
const EXCLUDED_PREFIXES: [&str; 4] = ["UBUNTU_12", "OTHER", "WIN_2003", "WIN_2008"];
/// 32-bit variants, matched on the reference-code suffix.
const EXCLUDED_SUFFIX: &str = "_32";

/// Whether an OS description survives the catalog filters. Prefix and
/// suffix checks are case-sensitive; the LAMP-stack check is not.
pub fn is_allowed(description: &str, reference_code: &str) -> bool {
    if description.to_lowercase().contains("lamp") {
        return false;
    }
    if reference_code.ends_with(EXCLUDED_SUFFIX) {
        return false;
    }
    !EXCLUDED_PREFIXES
        .iter()
        .any(|prefix| reference_code.starts_with(prefix))
}
