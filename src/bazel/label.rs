//! Conversion of Bazel labels into workspace-relative file paths

/// Strips the leading `//` and turns the package/target `:` into a directory
/// separator.
///
/// ```
/// use pubheaders::bazel::label::normalize_path;
///
/// assert_eq!(normalize_path("//absl/strings:dir/header.h"), "absl/strings/dir/header.h");
/// ```
pub fn normalize_path(label: &str) -> String {
    label.trim_start_matches('/').replace(':', "/")
}

pub fn normalize_paths<S: AsRef<str>>(labels: &[S]) -> Vec<String> {
    labels.iter().map(|l| normalize_path(l.as_ref())).collect()
}

/// Package label for a workspace-relative directory, e.g. `absl/strings` -> `//absl/strings`
pub fn package_label(relative_dir: &str) -> String {
    format!("//{}", relative_dir.trim_matches('/'))
}
