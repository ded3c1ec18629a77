//! Unchecked storage path construction

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Append `name` to `root` by plain string concatenation.
///
/// INTENTIONALLY INSECURE: there is no containment check. `..` segments walk
/// out of `root`, and a leading `/` only produces a doubled separator rather
/// than an absolute path.
pub fn join_unchecked(root: &Path, name: &str) -> PathBuf {
    let mut joined = OsString::from(root.as_os_str());
    if !root.as_os_str().is_empty() && !root.to_string_lossy().ends_with('/') {
        joined.push("/");
    }
    joined.push(name);
    PathBuf::from(joined)
}
