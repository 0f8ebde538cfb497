//! Repository file path encoding.
//!
//! The files API addresses a file by its full path collapsed into a single
//! URL segment, so every separator has to be escaped. Dots are escaped as
//! well: GitLab treats a trailing `.ext` in the route as a format suffix.

/// Encode a repository file path for the files API.
///
/// Strips one leading `/`, percent-encodes the rest as a single path segment
/// and replaces every `.` with `%2E`. Only ASCII alphanumerics and `-_~`
/// pass through; sub-delimiters such as `+@:=&$,;` are escaped too.
///
/// Not idempotent: encoding an already encoded path escapes the `%` again.
///
/// # Example
///
/// ```
/// use gitlab_vault::core::path::encode;
///
/// assert_eq!(encode("/certificates/test.txt"), "certificates%2Ftest%2Etxt");
/// ```
pub fn encode(path: &str) -> String {
    let path = path.strip_prefix('/').unwrap_or(path);
    urlencoding::encode(path).replace('.', "%2E")
}
