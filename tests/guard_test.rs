//! Integration tests for the role-based route guard and the login
//! round trip, driven through the real session manager and the in-memory
//! backend.

use std::sync::Arc;

use elearn_client::config::Config;
use elearn_client::domain::Role;
use elearn_client::forms::LoginForm;
use elearn_client::guard::{GuardOutcome, RouteGuard};
use elearn_client::infra::platform::seed;
use elearn_client::infra::Platform;
use elearn_client::routes;
use elearn_client::services::{ServiceContainer, Services};
use elearn_client::session::{
    MemorySessionStore, SessionEvents, SessionManager, SessionState, SessionStore,
};

fn test_config() -> Config {
    Config {
        mock_latency_ms: 0,
        ..Config::default()
    }
}

fn services() -> Services {
    Services::in_memory(Arc::new(Platform::seeded()), &test_config())
}

fn manager(services: &Services) -> (Arc<MemorySessionStore>, SessionManager) {
    let store = Arc::new(MemorySessionStore::new());
    let manager = SessionManager::new(store.clone(), services.auth(), SessionEvents::new())
        .with_login_redirect();
    (store, manager)
}

async fn login_as(manager: &SessionManager, email: &str) {
    manager
        .login(&LoginForm {
            email: email.to_string(),
            password: seed::PASSWORD.to_string(),
        })
        .await
        .expect("seeded login should succeed");
}

// =============================================================================
// Wrong-role redirects
// =============================================================================

#[tokio::test]
async fn every_role_is_redirected_to_its_own_dashboard() {
    let services = services();

    let cases = [
        (seed::STUDENT_EMAIL, Role::Student),
        (seed::INSTRUCTOR_EMAIL, Role::Instructor),
        (seed::SUPPORT_ADMIN_EMAIL, Role::SupportAdmin),
        (seed::SYSTEM_ADMIN_EMAIL, Role::SystemAdmin),
    ];
    let guards = [
        RouteGuard::student(),
        RouteGuard::instructor(),
        RouteGuard::admin(),
    ];

    for (email, role) in cases {
        let (_, manager) = manager(&services);
        login_as(&manager, email).await;
        let resolved = manager.resolve("/somewhere").await;

        for guard in guards {
            match guard.decide(&resolved.state, "/somewhere") {
                GuardOutcome::Authorized => {}
                GuardOutcome::Redirect { to } => {
                    assert_eq!(to, role.dashboard_path(), "role {} redirect", role)
                }
                other => panic!("unexpected outcome for {}: {:?}", role, other),
            }
        }
    }
}

#[tokio::test]
async fn admin_variants_share_the_admin_dashboard_redirect() {
    let services = services();
    let guard = RouteGuard::student();

    for email in [seed::SUPPORT_ADMIN_EMAIL, seed::SYSTEM_ADMIN_EMAIL] {
        let (_, manager) = manager(&services);
        login_as(&manager, email).await;
        let resolved = manager.resolve("/student/courses").await;

        assert_eq!(
            guard.decide(&resolved.state, "/student/courses"),
            GuardOutcome::Redirect {
                to: routes::ADMIN_DASHBOARD.to_string()
            }
        );
    }
}

// =============================================================================
// Unauthenticated redirects and the post-login return trip
// =============================================================================

#[tokio::test]
async fn unauthenticated_visit_redirects_to_login_and_returns_after() {
    let services = services();
    let (_, manager) = manager(&services);

    let resolved = manager.resolve("/student/courses/42").await;
    assert_eq!(resolved.state, SessionState::Unauthenticated);

    let login_url = resolved.navigate.expect("should navigate to login");
    assert_eq!(login_url, "/login?redirect=/student/courses/42");

    // The login page extracts the parameter and returns the user there
    let (_, query) = login_url.split_once('?').unwrap();
    let redirect = routes::redirect_param(query);
    assert_eq!(redirect.as_deref(), Some("/student/courses/42"));

    login_as(&manager, seed::STUDENT_EMAIL).await;
    let target = routes::post_login_path(Role::Student, redirect.as_deref());
    assert_eq!(target, "/student/courses/42");
}

#[tokio::test]
async fn guard_shows_loading_before_resolution_completes() {
    let services = services();
    let (_, manager) = manager(&services);

    // Before resolve() the manager still reports Loading
    assert_eq!(
        RouteGuard::student().decide(&manager.current(), "/student/home"),
        GuardOutcome::Loading
    );
}

// =============================================================================
// Logout
// =============================================================================

#[tokio::test]
async fn logout_clears_the_store_and_protected_routes_redirect_again() {
    let services = services();
    let (store, manager) = manager(&services);

    login_as(&manager, seed::STUDENT_EMAIL).await;
    assert!(store.load().await.unwrap().is_some());

    manager.sign_out().await.unwrap();

    // Token and user are gone together
    assert!(store.load().await.unwrap().is_none());

    let resolved = manager.resolve("/student/dashboard").await;
    assert_eq!(
        RouteGuard::student().decide(&resolved.state, "/student/dashboard"),
        GuardOutcome::RedirectToLogin {
            to: "/login?redirect=/student/dashboard".to_string()
        }
    );
}
