//! Integration tests for the checkout round trip: create, confirm or
//! cancel, and the resulting transaction history.

use std::sync::Arc;

use uuid::Uuid;

use elearn_client::config::{Config, CHECKOUT_SESSION_PARAM, HOSTED_CHECKOUT_BASE_URL};
use elearn_client::domain::{Course, TransactionStatus};
use elearn_client::errors::AppError;
use elearn_client::infra::platform::seed;
use elearn_client::infra::Platform;
use elearn_client::services::{CourseService, PaymentService, ServiceContainer, Services};

fn test_config() -> Config {
    Config {
        mock_latency_ms: 0,
        ..Config::default()
    }
}

async fn token_for(platform: &Platform, email: &str) -> String {
    let account = platform
        .account_by_email(email)
        .await
        .expect("seeded account");
    platform.open_session(account.user).await.token
}

async fn paid_course(platform: &Platform) -> Course {
    platform
        .courses
        .find(|c| !c.is_free() && c.is_published())
        .await
        .expect("seeded paid course")
}

// =============================================================================
// Checkout creation
// =============================================================================

#[tokio::test]
async fn checkout_redirects_to_the_hosted_page_with_the_session_id() {
    let platform = Arc::new(Platform::seeded());
    let services = Services::in_memory(platform.clone(), &test_config());
    let token = token_for(&platform, seed::STUDENT_EMAIL).await;
    let course = paid_course(&platform).await;

    let checkout = services
        .payments()
        .create_checkout(&token, course.id)
        .await
        .unwrap();

    assert_eq!(checkout.course_id, course.id);
    assert_eq!(checkout.amount_cents, course.price_cents);
    assert_eq!(
        checkout.redirect_url,
        format!(
            "{}?{}={}",
            HOSTED_CHECKOUT_BASE_URL, CHECKOUT_SESSION_PARAM, checkout.session_id
        )
    );
}

#[tokio::test]
async fn free_courses_do_not_go_through_checkout() {
    let platform = Arc::new(Platform::seeded());
    let services = Services::in_memory(platform.clone(), &test_config());
    let token = token_for(&platform, seed::STUDENT_EMAIL).await;

    let free = platform
        .courses
        .find(|c| c.is_free())
        .await
        .expect("seeded free course");

    let err = services
        .payments()
        .create_checkout(&token, free.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
}

// =============================================================================
// Confirmation
// =============================================================================

#[tokio::test]
async fn confirmation_records_the_payment_and_enrolls_the_student() {
    let platform = Arc::new(Platform::seeded());
    let services = Services::in_memory(platform.clone(), &test_config());
    let token = token_for(&platform, seed::STUDENT_EMAIL).await;
    let course = paid_course(&platform).await;
    let payments = services.payments();

    let checkout = payments.create_checkout(&token, course.id).await.unwrap();
    let transaction = payments
        .confirm(&token, &checkout.session_id)
        .await
        .unwrap();

    assert_eq!(transaction.status, TransactionStatus::Paid);
    assert_eq!(transaction.course_id, course.id);
    assert_eq!(transaction.amount_cents, course.price_cents);

    // The enrollment now exists and the transaction shows in history
    let enrollments = services.courses().my_enrollments(&token).await.unwrap();
    assert!(enrollments.iter().any(|e| e.course_id == course.id));

    let history = payments.transactions(&token).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, transaction.id);

    // The session was consumed; confirming it again is not found
    let err = payments
        .confirm(&token, &checkout.session_id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}

#[tokio::test]
async fn another_user_cannot_confirm_someone_elses_checkout() {
    let platform = Arc::new(Platform::seeded());
    let services = Services::in_memory(platform.clone(), &test_config());
    let student = token_for(&platform, seed::STUDENT_EMAIL).await;
    let instructor = token_for(&platform, seed::INSTRUCTOR_EMAIL).await;
    let course = paid_course(&platform).await;
    let payments = services.payments();

    let checkout = payments.create_checkout(&student, course.id).await.unwrap();

    let err = payments
        .confirm(&instructor, &checkout.session_id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden));
}

#[tokio::test]
async fn an_enrolled_student_cannot_start_a_second_checkout() {
    let platform = Arc::new(Platform::seeded());
    let services = Services::in_memory(platform.clone(), &test_config());
    let token = token_for(&platform, seed::STUDENT_EMAIL).await;
    let course = paid_course(&platform).await;
    let payments = services.payments();

    let checkout = payments.create_checkout(&token, course.id).await.unwrap();
    payments.confirm(&token, &checkout.session_id).await.unwrap();

    let err = payments
        .create_checkout(&token, course.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
}

// =============================================================================
// Cancellation
// =============================================================================

#[tokio::test]
async fn cancellation_records_a_cancelled_transaction_without_enrolling() {
    let platform = Arc::new(Platform::seeded());
    let services = Services::in_memory(platform.clone(), &test_config());
    let token = token_for(&platform, seed::STUDENT_EMAIL).await;
    let course = paid_course(&platform).await;
    let payments = services.payments();

    let checkout = payments.create_checkout(&token, course.id).await.unwrap();
    let transaction = payments.cancel(&checkout.session_id).await.unwrap();

    assert_eq!(transaction.status, TransactionStatus::Cancelled);
    assert!(services
        .courses()
        .my_enrollments(&token)
        .await
        .unwrap()
        .is_empty());

    // The cancelled attempt still shows in history
    let history = payments.transactions(&token).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].status, TransactionStatus::Cancelled);
}

#[tokio::test]
async fn an_unknown_session_id_is_not_found() {
    let platform = Arc::new(Platform::seeded());
    let services = Services::in_memory(platform.clone(), &test_config());
    let token = token_for(&platform, seed::STUDENT_EMAIL).await;

    let err = services
        .payments()
        .confirm(&token, &Uuid::new_v4().simple().to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}
