//! Route paths and navigation helpers.
//!
//! Centralizes every path the guard and session layers navigate to, plus
//! the `redirect` query parameter contract used to return users to the
//! page they originally requested after logging in.

use crate::domain::Role;

pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const STUDENT_DASHBOARD: &str = "/student/dashboard";
pub const INSTRUCTOR_DASHBOARD: &str = "/instructor/dashboard";
pub const ADMIN_DASHBOARD: &str = "/admin/dashboard";
pub const CHECKOUT_SUCCESS: &str = "/checkout/success";
pub const CHECKOUT_CANCEL: &str = "/checkout/cancel";

/// Query parameter preserving the originally requested path
pub const REDIRECT_PARAM: &str = "redirect";

/// Build the login URL, preserving the requested path for the post-login
/// return trip. The login page itself is never preserved.
pub fn login_with_redirect(requested_path: &str) -> String {
    if requested_path.is_empty() || requested_path == LOGIN {
        return LOGIN.to_string();
    }
    format!("{}?{}={}", LOGIN, REDIRECT_PARAM, requested_path)
}

/// Extract the `redirect` parameter from a raw query string, if present.
pub fn redirect_param(query: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("redirect="))
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Where to navigate after a successful login: the preserved path when one
/// was set, otherwise the role's own dashboard.
pub fn post_login_path(role: Role, redirect: Option<&str>) -> String {
    match redirect {
        Some(path) if !path.is_empty() => path.to_string(),
        _ => role.dashboard_path().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_redirect_preserves_requested_path() {
        assert_eq!(
            login_with_redirect("/student/courses/42"),
            "/login?redirect=/student/courses/42"
        );
    }

    #[test]
    fn login_page_is_not_preserved() {
        assert_eq!(login_with_redirect(LOGIN), LOGIN);
        assert_eq!(login_with_redirect(""), LOGIN);
    }

    #[test]
    fn redirect_param_is_parsed_from_query() {
        assert_eq!(
            redirect_param("?redirect=/admin/courses&tab=pending"),
            Some("/admin/courses".to_string())
        );
        assert_eq!(redirect_param("tab=pending"), None);
        assert_eq!(redirect_param("redirect="), None);
    }

    #[test]
    fn post_login_falls_back_to_role_dashboard() {
        assert_eq!(
            post_login_path(Role::Student, Some("/courses/1")),
            "/courses/1"
        );
        assert_eq!(post_login_path(Role::Instructor, None), INSTRUCTOR_DASHBOARD);
        assert_eq!(post_login_path(Role::SupportAdmin, None), ADMIN_DASHBOARD);
    }
}
