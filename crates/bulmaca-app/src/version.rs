//! Build metadata.

/// Returns `pkg_version (git_sha, commit_date)` for startup logging.
///
/// Missing git metadata (e.g. a source tarball build) is reported as
/// `unknown`.
#[must_use]
pub fn build_version() -> String {
    let pkg_version = env!("CARGO_PKG_VERSION");
    let git_sha = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown");
    match option_env!("VERGEN_GIT_COMMIT_DATE") {
        Some(date) => format!("{pkg_version} ({git_sha}, {date})"),
        None => format!("{pkg_version} ({git_sha})"),
    }
}
