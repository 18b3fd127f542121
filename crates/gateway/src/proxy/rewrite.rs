/// Replaces a leading `prefix` segment of `path_and_query` with `replacement`.
///
/// Only whole segments match: `/api` and `/api/...` and `/api?...` are
/// rewritten, `/apix` is not. Returns `None` when the prefix does not apply.
pub fn rewrite_path(path_and_query: &str, prefix: &str, replacement: &str) -> Option<String> {
    let rest = path_and_query.strip_prefix(prefix)?;
    if !(rest.is_empty() || rest.starts_with('/') || rest.starts_with('?')) {
        return None;
    }
    let mut out = String::with_capacity(replacement.len() + rest.len() + 1);
    out.push_str(replacement);
    if out.is_empty() && !rest.starts_with('/') {
        out.push('/');
    }
    out.push_str(rest);
    Some(out)
}

pub fn upstream_url(upstream: &str, path_and_query: &str) -> String {
    format!("{}{}", upstream.trim_end_matches('/'), path_and_query)
}
