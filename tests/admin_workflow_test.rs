//! Integration tests for the two approval workflows: instructor
//! applications and course review.

use std::sync::Arc;

use elearn_client::config::Config;
use elearn_client::domain::{ApprovalStatus, CourseDraft, CourseStatus, Role};
use elearn_client::errors::AppError;
use elearn_client::forms::ApplicationForm;
use elearn_client::infra::platform::seed;
use elearn_client::infra::Platform;
use elearn_client::services::{
    AdminService, AuthService, CourseService, InstructorService, ReviewDecision,
    ServiceContainer, Services,
};
use elearn_client::types::PaginationParams;

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

// =============================================================================
// Instructor applications
// =============================================================================

#[tokio::test]
async fn approving_an_application_promotes_the_applicant() {
    let platform = Arc::new(Platform::seeded());
    let services = Services::in_memory(platform.clone(), &test_config());
    let admin = token_for(&platform, seed::SUPPORT_ADMIN_EMAIL).await;
    let student = token_for(&platform, seed::STUDENT_EMAIL).await;

    let pending = services
        .admin()
        .pending_applications(&admin, &PaginationParams::default())
        .await
        .unwrap();
    assert_eq!(pending.meta.total, 1);
    let application = &pending.data[0];

    let reviewed = services
        .admin()
        .review_application(&admin, application.id, ReviewDecision::Approve)
        .await
        .unwrap();
    assert_eq!(reviewed.status, ApprovalStatus::Approved);
    assert!(reviewed.reviewed_by.is_some());

    // The applicant's next session resolution sees the new role
    let user = services.auth().who_am_i(&student).await.unwrap();
    assert_eq!(user.role, Role::Instructor);

    // The queue is now empty and re-reviewing is rejected
    let pending = services
        .admin()
        .pending_applications(&admin, &PaginationParams::default())
        .await
        .unwrap();
    assert!(pending.data.is_empty());

    let err = services
        .admin()
        .review_application(&admin, application.id, ReviewDecision::Approve)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
}

#[tokio::test]
async fn rejection_requires_a_reason_and_keeps_the_student_role() {
    let platform = Arc::new(Platform::seeded());
    let services = Services::in_memory(platform.clone(), &test_config());
    let admin = token_for(&platform, seed::SYSTEM_ADMIN_EMAIL).await;
    let student = token_for(&platform, seed::STUDENT_EMAIL).await;
    let console = services.admin();

    let pending = console
        .pending_applications(&admin, &PaginationParams::default())
        .await
        .unwrap();
    let application_id = pending.data[0].id;

    let err = console
        .review_application(
            &admin,
            application_id,
            ReviewDecision::Reject {
                reason: "   ".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let reviewed = console
        .review_application(
            &admin,
            application_id,
            ReviewDecision::Reject {
                reason: "The attached CV is unreadable".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(
        reviewed.status,
        ApprovalStatus::Rejected {
            reason: "The attached CV is unreadable".to_string()
        }
    );

    let user = services.auth().who_am_i(&student).await.unwrap();
    assert_eq!(user.role, Role::Student);
}

#[tokio::test]
async fn non_admins_cannot_touch_the_review_queues() {
    let platform = Arc::new(Platform::seeded());
    let services = Services::in_memory(platform.clone(), &test_config());
    let console = services.admin();

    for email in [seed::STUDENT_EMAIL, seed::INSTRUCTOR_EMAIL] {
        let token = token_for(&platform, email).await;

        let err = console
            .pending_applications(&token, &PaginationParams::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden), "for {}", email);
    }
}

#[tokio::test]
async fn a_student_with_a_pending_application_cannot_apply_again() {
    let platform = Arc::new(Platform::seeded());
    let services = Services::in_memory(platform.clone(), &test_config());
    let student = token_for(&platform, seed::STUDENT_EMAIL).await;

    let form = ApplicationForm {
        motivation: "I have been teaching programming as a volunteer for two years."
            .to_string(),
        cv_path: "uploads/cv/resume.pdf".to_string(),
    };

    // The seeded platform already holds a pending application
    let err = services
        .instructors()
        .apply(&student, &form)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn a_short_motivation_is_rejected_locally() {
    let platform = Arc::new(Platform::seeded());
    let services = Services::in_memory(platform.clone(), &test_config());
    let student = token_for(&platform, seed::STUDENT_EMAIL).await;

    let form = ApplicationForm {
        motivation: "Let me teach".to_string(),
        cv_path: "uploads/cv/resume.pdf".to_string(),
    };

    let err = services
        .instructors()
        .apply(&student, &form)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

// =============================================================================
// Course review
// =============================================================================

#[tokio::test]
async fn a_submitted_course_goes_live_only_after_approval() {
    let platform = Arc::new(Platform::seeded());
    let services = Services::in_memory(platform.clone(), &test_config());
    let instructor = token_for(&platform, seed::INSTRUCTOR_EMAIL).await;
    let admin = token_for(&platform, seed::SUPPORT_ADMIN_EMAIL).await;

    let draft = services
        .instructors()
        .create_course(
            &instructor,
            CourseDraft {
                title: "Git from the Ground Up".to_string(),
                description: "Commits, branches, and collaboration.".to_string(),
                price_cents: 0,
                lessons: vec!["First commits".to_string(), "Branching".to_string()],
            },
        )
        .await
        .unwrap();
    assert_eq!(draft.status, CourseStatus::Draft);

    // Drafts are invisible to students
    let err = services.courses().course(draft.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));

    let submitted = services
        .instructors()
        .submit_for_review(&instructor, draft.id)
        .await
        .unwrap();
    assert_eq!(submitted.status, CourseStatus::PendingReview);

    let queue = services
        .admin()
        .pending_courses(&admin, &PaginationParams::default())
        .await
        .unwrap();
    assert!(queue.data.iter().any(|c| c.id == draft.id));

    let published = services
        .admin()
        .review_course(&admin, draft.id, ReviewDecision::Approve)
        .await
        .unwrap();
    assert!(published.is_published());

    // Now it shows up in the catalog
    let course = services.courses().course(draft.id).await.unwrap();
    assert_eq!(course.title, "Git from the Ground Up");
}

#[tokio::test]
async fn a_rejected_course_carries_the_reason_and_can_be_resubmitted() {
    let platform = Arc::new(Platform::seeded());
    let services = Services::in_memory(platform.clone(), &test_config());
    let instructor = token_for(&platform, seed::INSTRUCTOR_EMAIL).await;
    let admin = token_for(&platform, seed::SYSTEM_ADMIN_EMAIL).await;

    let pending = platform
        .courses
        .find(|c| c.status == CourseStatus::PendingReview)
        .await
        .expect("seeded pending course");

    let rejected = services
        .admin()
        .review_course(
            &admin,
            pending.id,
            ReviewDecision::Reject {
                reason: "Lesson plan is too thin".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(rejected.status, CourseStatus::Rejected);
    assert_eq!(
        rejected.rejection_reason.as_deref(),
        Some("Lesson plan is too thin")
    );

    // The owner sees the rejection and may resubmit
    let mine = services.instructors().my_courses(&instructor).await.unwrap();
    let own = mine.iter().find(|c| c.id == pending.id).unwrap();
    assert_eq!(own.status, CourseStatus::Rejected);

    let resubmitted = services
        .instructors()
        .submit_for_review(&instructor, pending.id)
        .await
        .unwrap();
    assert_eq!(resubmitted.status, CourseStatus::PendingReview);
    assert!(resubmitted.rejection_reason.is_none());
}

#[tokio::test]
async fn only_the_owner_submits_a_course_for_review() {
    let platform = Arc::new(Platform::seeded());
    let services = Services::in_memory(platform.clone(), &test_config());
    let owner = token_for(&platform, seed::INSTRUCTOR_EMAIL).await;
    let admin = token_for(&platform, seed::SUPPORT_ADMIN_EMAIL).await;
    let student = token_for(&platform, seed::STUDENT_EMAIL).await;

    let draft = services
        .instructors()
        .create_course(
            &owner,
            CourseDraft {
                title: "Another Course".to_string(),
                description: "More lessons.".to_string(),
                price_cents: 0,
                lessons: vec!["One".to_string()],
            },
        )
        .await
        .unwrap();

    // Promote the seeded student to instructor so the role check passes
    // but the ownership check still fails
    let application = services
        .admin()
        .pending_applications(&admin, &PaginationParams::default())
        .await
        .unwrap()
        .data
        .remove(0);
    services
        .admin()
        .review_application(&admin, application.id, ReviewDecision::Approve)
        .await
        .unwrap();

    let err = services
        .instructors()
        .submit_for_review(&student, draft.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden));
}
