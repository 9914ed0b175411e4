/// Построить URL-безопасный slug из отображаемого имени
///
/// # Примеры
/// ```
/// use contracts::shared::slug::slugify;
/// assert_eq!(slugify("UI/UX Design"), "ui-ux-design");
/// assert_eq!(slugify("  Data & AI "), "data-ai");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Slug: непустой, только [a-z0-9-], без дефисов по краям и подряд
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Web Development"), "web-development");
        assert_eq!(slugify("DevOps & Infrastructure"), "devops-infrastructure");
        assert_eq!(slugify("--Hello--World--"), "hello-world");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_is_valid_slug() {
        assert!(is_valid_slug("acme-portal-2024"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("Acme"));
        assert!(!is_valid_slug("-acme"));
        assert!(!is_valid_slug("acme--portal"));
        assert!(!is_valid_slug("acme portal"));
    }

    #[test]
    fn test_slugify_output_is_valid() {
        for name in ["UI/UX Design", "Data & AI", "Jane O'Neil", "2024 Roadmap"] {
            assert!(is_valid_slug(&slugify(name)), "{name}");
        }
    }
}
