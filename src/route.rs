// Route path helpers shared by the router, dispatcher and address bar

pub const ROOT: &str = "/";

/// Project detail pages live under this prefix and never show the chrome
pub const PROJECT_PREFIX: &str = "/projects/";

/// Where the back button of every project page leads
pub const WORK_OVERVIEW: &str = "/work";

pub fn is_project_page(path: &str) -> bool {
    path.starts_with(PROJECT_PREFIX)
}

pub fn project_path(slug: &str) -> String {
    format!("{}{}", PROJECT_PREFIX, slug)
}

/// Normalize user-typed input from the address bar.
///
/// Trims whitespace, adds the leading slash and drops a single trailing slash,
/// so "work/", " /work " and "/work" all name the same route.
pub fn normalize(input: &str) -> String {
    let trimmed = input.trim();
    let mut path = if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    };
    if path.len() > 1 && path.ends_with('/') {
        path.pop();
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_prefix() {
        assert!(is_project_page("/projects/microimpute"));
        assert!(is_project_page(&project_path("data-schema")));
        assert!(!is_project_page("/work"));
        assert!(!is_project_page("/projects"));
        assert!(!is_project_page(ROOT));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("/work"), "/work");
        assert_eq!(normalize(" work/ "), "/work");
        assert_eq!(normalize("projects/microimpute/"), "/projects/microimpute");
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize(""), "/");
        assert_eq!(normalize("   "), "/");
    }
}
