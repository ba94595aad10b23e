// src/readers/helpers.rs

//! Miscellaneous helper functions for _Readers_.

use crate::common::{fpath_is_stdin, FPath};

/// Helper function for completeness.
pub fn fpath_to_path(path: &FPath) -> &std::path::Path {
    std::path::Path::new(path)
}

/// Name of `path` for user-facing messages.
pub fn fpath_display(path: &FPath) -> FPath {
    if fpath_is_stdin(path) {
        return FPath::from("<stdin>");
    }

    path.clone()
}
