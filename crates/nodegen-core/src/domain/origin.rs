/// `owner/repo` slug for badge links, derived from an origin URL.
///
/// A bare account name (no slash) is completed with the project name.
pub fn repository_slug(origin_url: &str, project_name: &str) -> Option<String> {
    let url = origin_url.trim().trim_end_matches('/');
    let url = url.strip_suffix(".git").unwrap_or(url);

    let path = if let Some((_, rest)) = url.split_once("://") {
        rest.split_once('/').map_or("", |(_, path)| path)
    } else if let Some((_, path)) = url.rsplit_once(':') {
        path
    } else {
        url
    };

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        [] => None,
        [owner] => Some(format!("{owner}/{project_name}")),
        [.., owner, repo] => Some(format!("{owner}/{repo}")),
    }
}
