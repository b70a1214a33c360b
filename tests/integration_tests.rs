mod common;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use dewey_ebooks::{
    create_router,
    dto::navigation::{
        ErrorResponse, GradePageResponse, LessonQuery, LessonResponse, ProgramPageResponse, SubjectPageResponse,
    },
    models::curriculum::Language,
    services::navigation::NavigationService,
};
use common::{builtin_catalog, setup_test_app};

fn create_test_router() -> Router {
    create_router(setup_test_app())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn test_program_page_endpoint() {
    let (status, body) = get(create_test_router(), "/digital/resource/program").await;

    assert_eq!(status, StatusCode::OK);
    let page: ProgramPageResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(page.lang, Language::En);
    assert_eq!(page.campuses.len(), 5);
    assert_eq!(page.programs.len(), 3);
    assert!(page.programs[0].available);
    assert_eq!(page.programs[0].value, "cambodia");
    assert!(!page.programs[1].available);
    assert!(page.programs[1].label.ends_with("(coming soon)"));
}

#[tokio::test]
async fn test_program_page_in_khmer() {
    let (status, body) = get(create_test_router(), "/digital/resource/program?lang=km").await;

    assert_eq!(status, StatusCode::OK);
    let page: ProgramPageResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(page.lang, Language::Km);
    assert_eq!(page.programs[0].label, "កម្មវិធីសិក្សាខ្មែរ");
}

#[tokio::test]
async fn test_grade_page_endpoint() {
    let (status, body) = get(create_test_router(), "/digital/resource/grades?program=cambodia&lang=km").await;

    assert_eq!(status, StatusCode::OK);
    let page: GradePageResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(page.program.as_deref(), Some("cambodia"));
    assert_eq!(page.grades.len(), 12);
    assert_eq!(page.grades[11].value, "12");
    assert_eq!(page.grades[11].label, "ថ្នាក់ទី ១២");
}

#[tokio::test]
async fn test_subject_page_endpoint() {
    let (status, body) = get(create_test_router(), "/digital/resource/subjects?program=cambodia&grade=4").await;

    assert_eq!(status, StatusCode::OK);
    let page: SubjectPageResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(page.grade_label, "Grade 4");
    assert_eq!(page.program_label, "Cambodia Curriculum");
    assert!(page.subjects.iter().any(|s| s.value == "math" && s.label == "Mathematics"));
}

#[tokio::test]
async fn test_subject_page_without_grade() {
    let (status, body) = get(create_test_router(), "/digital/resource/subjects?program=america").await;

    assert_eq!(status, StatusCode::OK);
    let page: SubjectPageResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(page.grade_label, "-");
    assert!(page.subjects.is_empty());
}

#[tokio::test]
async fn test_lesson_endpoint() {
    let (status, body) = get(
        create_test_router(),
        "/digital/resource/lessons?program=cambodia&grade=4&subject=Math",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let lesson: LessonResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(lesson.heading, "Grade 4: Cambodia Program");
    assert_eq!(lesson.subject, "Subject Math");
    assert_eq!(
        lesson.pdf.map(|link| link.url),
        Some("https://drive.google.com/drive/folders/1XYND_ahzAg8bXXaKscAnUbJklxy7w-qM".to_string())
    );
    assert_eq!(
        lesson.flipbook.map(|link| link.url),
        Some("https://online.fliphtml5.com/ayjcf/xjbv/".to_string())
    );
    assert!(lesson.parts.is_empty());
}

#[tokio::test]
async fn test_lesson_endpoint_with_parts() {
    let (status, body) = get(
        create_test_router(),
        "/digital/resource/lessons?program=cambodia&grade=1&subject=science&lang=km",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let lesson: LessonResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(lesson.heading, "ថ្នាក់ទី ១: ខ្មែរ កម្មវិធីសិក្សា");
    assert!(lesson.pdf.is_none());
    assert!(lesson.flipbook.is_none());
    assert_eq!(lesson.parts.len(), 2);
    assert_eq!(lesson.parts[1].label, "Part 2");
    assert!(lesson.parts[1].pdf.is_none());
    assert_eq!(
        lesson.parts[1].flipbook.as_ref().map(|link| link.label.as_str()),
        Some("មើល Flipbook Part 2")
    );
}

#[tokio::test]
async fn test_lesson_endpoint_invalid_grade() {
    let (status, body) = get(
        create_test_router(),
        "/digital/resource/lessons?program=cambodia&grade=13&subject=math",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "INVALID_GRADE");
    assert_eq!(error.message, "Invalid grade: 13.");
    assert_eq!(error.support_url, "https://t.me/DrHelloWorld");
}

#[tokio::test]
async fn test_lesson_endpoint_coming_soon_program() {
    let (status, body) = get(
        create_test_router(),
        "/digital/resource/lessons?program=america&grade=4&subject=math",
    )
    .await;

    // Placeholder records carry no link at all
    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "NO_MATERIALS_FOR_SUBJECT");
    assert_eq!(
        error.message,
        "No materials available for math in America Program for Grade 4."
    );
}

#[tokio::test]
async fn test_lesson_endpoint_without_query() {
    let (status, body) = get(create_test_router(), "/digital/resource/lessons").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "INVALID_GRADE");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (status, body) = get(create_test_router(), "/digital/resource/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    let doc: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(doc["paths"]["/digital/resource/lessons"].is_object());
}

#[test]
fn test_lesson_ai_tools_and_messages() {
    let catalog = builtin_catalog();

    let lesson = NavigationService::lesson(
        &catalog,
        "https://support.test/",
        LessonQuery {
            program: Some("cambodia".to_string()),
            grade: Some("10".to_string()),
            subject: Some("AI-Education".to_string()),
            lang: None,
        },
    )
    .unwrap();
    let labels: Vec<_> = lesson.ai_tools.iter().map(|tool| tool.label.as_str()).collect();
    assert_eq!(labels, vec!["Toolbaz AI", "MagicSchool AI", "EduAide AI", "Teachy AI"]);
    assert!(lesson.pdf.is_none());

    let error = NavigationService::lesson(
        &catalog,
        "https://support.test/",
        LessonQuery {
            program: Some("extra".to_string()),
            grade: Some("4".to_string()),
            subject: Some("math".to_string()),
            lang: Some("en".to_string()),
        },
    )
    .unwrap_err();
    assert_eq!(error.error, "INVALID_PROGRAM");
    assert_eq!(error.message, "Invalid program: extra for Grade 4.");
    assert_eq!(error.support_url, "https://support.test/");
}

#[tokio::test]
async fn test_lesson_endpoint_virtual_lab_has_no_materials() {
    let (status, body) = get(
        create_test_router(),
        "/digital/resource/lessons?program=cambodia&grade=1&subject=virtual-lab",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "NO_MATERIALS_FOR_SUBJECT");
    assert_eq!(
        error.message,
        "No materials available for virtual-lab in Cambodia Program for Grade 1."
    );
}

#[tokio::test]
async fn test_program_page_only_exact_km_is_khmer() {
    let (status, body) = get(create_test_router(), "/digital/resource/program?lang=KM").await;

    assert_eq!(status, StatusCode::OK);
    let page: ProgramPageResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(page.lang, Language::En);
}
