//! Navigation guard for the admin portal

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/employees";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(&'static str),
}

/// Decide whether `path` may be shown
///
/// Only `/login` is public. Signed-in users skip `/` and `/login` and land
/// on the employee list.
pub fn guard(path: &str, authenticated: bool) -> RouteDecision {
    let is_login = path == LOGIN_PATH;
    let is_root = path == "/";

    match (authenticated, is_login || is_root) {
        (true, true) => RouteDecision::Redirect(HOME_PATH),
        (false, _) if !is_login => RouteDecision::Redirect(LOGIN_PATH),
        _ => RouteDecision::Allow,
    }
}
