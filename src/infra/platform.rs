//! Shared in-memory platform state.
//!
//! One `Platform` instance stands in for the backend: every service facade
//! operates on the same repositories and token table, so authorization,
//! enrollment, and approval flows behave consistently across facades.

use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    AuthenticatedUser, Course, CourseStatus, Enrollment, Flashcard, FlashcardDeck,
    InstructorApplication, Quiz, QuizQuestion, ReviewRecord, Role, Session, Transaction,
};
use crate::errors::{AppError, AppResult};
use crate::infra::repositories::{InMemoryRepository, Repository};

/// A user account as the backend stores it.
///
/// The in-memory backend keeps the password verbatim; real credential
/// storage is the backend's concern, not this client's.
#[derive(Debug, Clone)]
pub struct UserAccount {
    pub user: AuthenticatedUser,
    pub password: String,
}

/// The complete in-memory backend state
pub struct Platform {
    pub users: InMemoryRepository<UserAccount>,
    pub courses: InMemoryRepository<Course>,
    pub enrollments: InMemoryRepository<Enrollment>,
    pub quizzes: InMemoryRepository<Quiz>,
    pub decks: InMemoryRepository<FlashcardDeck>,
    pub reviews: InMemoryRepository<ReviewRecord>,
    pub transactions: InMemoryRepository<Transaction>,
    pub applications: InMemoryRepository<InstructorApplication>,
    /// Issued bearer tokens, token -> user id
    tokens: RwLock<HashMap<String, Uuid>>,
    /// Open checkout sessions, session id -> checkout
    pub checkouts: RwLock<HashMap<String, crate::domain::CheckoutSession>>,
}

impl Platform {
    /// An empty platform with no accounts or content
    pub fn empty() -> Self {
        Self {
            users: InMemoryRepository::new(),
            courses: InMemoryRepository::new(),
            enrollments: InMemoryRepository::new(),
            quizzes: InMemoryRepository::new(),
            decks: InMemoryRepository::new(),
            reviews: InMemoryRepository::new(),
            transactions: InMemoryRepository::new(),
            applications: InMemoryRepository::new(),
            tokens: RwLock::new(HashMap::new()),
            checkouts: RwLock::new(HashMap::new()),
        }
    }

    /// A platform pre-populated with one account per role and a small
    /// published catalog. See the [`seed`] module for the fixed credentials.
    pub fn seeded() -> Self {
        let student = UserAccount {
            user: AuthenticatedUser::new(
                seed::STUDENT_EMAIL.to_string(),
                "An Nguyen".to_string(),
                Role::Student,
            ),
            password: seed::PASSWORD.to_string(),
        };
        let instructor = UserAccount {
            user: AuthenticatedUser::new(
                seed::INSTRUCTOR_EMAIL.to_string(),
                "Binh Tran".to_string(),
                Role::Instructor,
            ),
            password: seed::PASSWORD.to_string(),
        };
        let support_admin = UserAccount {
            user: AuthenticatedUser::new(
                seed::SUPPORT_ADMIN_EMAIL.to_string(),
                "Chi Le".to_string(),
                Role::SupportAdmin,
            ),
            password: seed::PASSWORD.to_string(),
        };
        let system_admin = UserAccount {
            user: AuthenticatedUser::new(
                seed::SYSTEM_ADMIN_EMAIL.to_string(),
                "Dung Pham".to_string(),
                Role::SystemAdmin,
            ),
            password: seed::PASSWORD.to_string(),
        };

        let instructor_id = instructor.user.id;
        let student_id = student.user.id;

        let mut intro = seed::course(
            instructor_id,
            "Introduction to Programming",
            "Variables, control flow, and your first programs.",
            0,
            &["Getting set up", "Variables and types", "Control flow"],
        );
        let quiz = Quiz::new(
            intro.id,
            "Introduction to Programming - Final Quiz",
            vec![
                QuizQuestion::new(
                    "Which keyword declares an immutable binding?",
                    vec!["var".into(), "let".into(), "const fn".into()],
                    1,
                ),
                QuizQuestion::new(
                    "What does a loop do?",
                    vec![
                        "Runs code once".into(),
                        "Repeats code".into(),
                        "Deletes code".into(),
                    ],
                    1,
                ),
                QuizQuestion::new(
                    "What is a function?",
                    vec![
                        "A reusable block of code".into(),
                        "A kind of variable".into(),
                        "A file".into(),
                    ],
                    0,
                ),
            ],
        );
        intro.quiz_id = Some(quiz.id);

        let web = seed::course(
            instructor_id,
            "Advanced Web Development",
            "APIs, deployment, and real-world project structure.",
            499_000,
            &["HTTP in depth", "Building an API"],
        );
        let data = seed::course(
            instructor_id,
            "Data Structures in Practice",
            "Lists, trees, and maps with hands-on exercises.",
            299_000,
            &["Arrays and lists", "Trees and maps"],
        );
        let mut pending = seed::course(
            instructor_id,
            "Machine Learning Basics",
            "A first tour of models, features, and evaluation.",
            399_000,
            &["What is a model?"],
        );
        pending.status = CourseStatus::PendingReview;

        let deck = FlashcardDeck {
            id: Uuid::new_v4(),
            owner_id: instructor_id,
            title: "Everyday English Vocabulary".to_string(),
            description: "Common words for daily conversation.".to_string(),
            cards: vec![
                Flashcard::new("apple", "quả táo"),
                Flashcard::new("book", "quyển sách"),
                Flashcard::new("teacher", "giáo viên"),
            ],
        };

        let application = InstructorApplication::new(
            student_id,
            "I have tutored mathematics for three years and want to publish my material."
                .to_string(),
            "uploads/cv/an-nguyen.pdf".to_string(),
        );

        Self {
            users: InMemoryRepository::from_rows(vec![
                (student.user.id, student),
                (instructor.user.id, instructor),
                (support_admin.user.id, support_admin),
                (system_admin.user.id, system_admin),
            ]),
            courses: InMemoryRepository::from_rows(vec![
                (intro.id, intro),
                (web.id, web),
                (data.id, data),
                (pending.id, pending),
            ]),
            enrollments: InMemoryRepository::new(),
            quizzes: InMemoryRepository::from_rows(vec![(quiz.id, quiz)]),
            decks: InMemoryRepository::from_rows(vec![(deck.id, deck)]),
            reviews: InMemoryRepository::new(),
            transactions: InMemoryRepository::new(),
            applications: InMemoryRepository::from_rows(vec![(application.id, application)]),
            tokens: RwLock::new(HashMap::new()),
            checkouts: RwLock::new(HashMap::new()),
        }
    }

    // =========================================================================
    // Accounts & tokens
    // =========================================================================

    /// Look up an account by email
    pub async fn account_by_email(&self, email: &str) -> Option<UserAccount> {
        self.users.find(|account| account.user.email == email).await
    }

    /// Issue an opaque bearer token for the user and return the session
    pub async fn open_session(&self, user: AuthenticatedUser) -> Session {
        let token = Uuid::new_v4().simple().to_string();
        self.tokens.write().await.insert(token.clone(), user.id);
        Session::new(token, user)
    }

    /// Revoke a token; returns whether it was known
    pub async fn revoke_token(&self, token: &str) -> bool {
        self.tokens.write().await.remove(token).is_some()
    }

    /// Resolve a bearer token to the current user record.
    ///
    /// Unknown and revoked tokens both surface as `Unauthorized`, which is
    /// what drives session expiry on the client side.
    pub async fn authenticate(&self, token: &str) -> AppResult<AuthenticatedUser> {
        let user_id = {
            let tokens = self.tokens.read().await;
            tokens.get(token).copied()
        };
        let user_id = user_id.ok_or(AppError::Unauthorized)?;

        let account = self
            .users
            .get(user_id)
            .await
            .ok_or(AppError::Unauthorized)?;

        if !account.user.is_active() {
            return Err(AppError::Forbidden);
        }
        Ok(account.user)
    }

    /// Resolve a token and require an admin role
    pub async fn authenticate_admin(&self, token: &str) -> AppResult<AuthenticatedUser> {
        let user = self.authenticate(token).await?;
        if !user.is_admin() {
            return Err(AppError::Forbidden);
        }
        Ok(user)
    }

    /// Resolve a token and require a specific role
    pub async fn authenticate_role(&self, token: &str, role: Role) -> AppResult<AuthenticatedUser> {
        let user = self.authenticate(token).await?;
        if user.role != role {
            return Err(AppError::Forbidden);
        }
        Ok(user)
    }

    // =========================================================================
    // Enrollment
    // =========================================================================

    /// Find the user's enrollment in a course
    pub async fn enrollment_for(&self, user_id: Uuid, course_id: Uuid) -> Option<Enrollment> {
        self.enrollments
            .find(|e| e.user_id == user_id && e.course_id == course_id)
            .await
    }
}

/// Fixed credentials of the seeded accounts, for demos and tests.
pub mod seed {
    use chrono::Utc;
    use uuid::Uuid;

    use crate::domain::{Course, CourseStatus, Lesson};

    pub const STUDENT_EMAIL: &str = "student@elearn.vn";
    pub const INSTRUCTOR_EMAIL: &str = "instructor@elearn.vn";
    pub const SUPPORT_ADMIN_EMAIL: &str = "support@elearn.vn";
    pub const SYSTEM_ADMIN_EMAIL: &str = "sysadmin@elearn.vn";
    pub const PASSWORD: &str = "password123";

    /// Build a published course owned by the given instructor
    pub fn course(
        instructor_id: Uuid,
        title: &str,
        description: &str,
        price_cents: i64,
        lessons: &[&str],
    ) -> Course {
        Course {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: description.to_string(),
            instructor_id,
            price_cents,
            thumbnail_path: Some(format!(
                "uploads/thumbnails/{}.jpg",
                title.to_lowercase().replace(' ', "-")
            )),
            status: CourseStatus::Published,
            lessons: lessons
                .iter()
                .enumerate()
                .map(|(i, t)| Lesson::new(*t, i as u32 + 1))
                .collect(),
            quiz_id: None,
            created_at: Utc::now(),
            rejection_reason: None,
        }
    }
}
