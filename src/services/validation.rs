/// Email validation
pub fn validate_email(email: &str) -> bool {
    let email = email.trim();

    if email.is_empty() || email.len() > 254 {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > 64 || domain.is_empty() || domain.contains('@') {
        return false;
    }

    if email.chars().any(char::is_whitespace) {
        return false;
    }

    // Domain must have at least one dot, not at either end
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Returns the target when it stays on this site, so a crafted `redirectTo`
/// cannot bounce a freshly logged-in user to another origin.
pub fn safe_redirect(target: Option<&str>) -> Option<&str> {
    let target = target?.trim();

    let local = target.starts_with('/')
        && !target.starts_with("//")
        && !target.contains('\\')
        && !target.chars().any(char::is_control);

    local.then_some(target)
}
