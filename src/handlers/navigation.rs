use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Json, Response},
};
use utoipa::OpenApi;

use crate::{
    dto::navigation::{
        ErrorResponse, GradePageResponse, GradeQuery, LanguageQuery, LessonQuery, LessonResponse,
        LinkResponse, OptionResponse, PartResponse, ProgramOptionResponse, ProgramPageResponse,
        SubjectPageResponse, SubjectQuery,
    },
    models::curriculum::Language,
    services::navigation::NavigationService,
    AppState,
};

/// Dewey Digital Resource API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        program_page,
        grade_page,
        subject_page,
        lesson_page
    ),
    components(
        schemas(Language, OptionResponse, ProgramOptionResponse, ProgramPageResponse, GradePageResponse, SubjectPageResponse, LinkResponse, PartResponse, LessonResponse, ErrorResponse)
    ),
    tags(
        (name = "navigation", description = "E-book catalog navigation")
    ),
    info(
        title = "Dewey Digital Resource API",
        version = "0.1.0",
        description = "Program, grade, subject and lesson lookup for the digital e-book catalog"
    )
)]
pub struct ApiDoc;

fn pretty_json_response<T: serde::Serialize>(data: T) -> Response {
    match serde_json::to_string_pretty(&data) {
        Ok(json) => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, "application/json")
            .body(json.into())
            .unwrap_or_default(),
        Err(e) => {
            tracing::error!("Failed to serialize response: {}", e);
            let mut response = Response::new("Failed to serialize response".into());
            *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            response
        }
    }
}

#[utoipa::path(
    get,
    path = "/digital/resource/program",
    tag = "navigation",
    params(LanguageQuery),
    responses(
        (status = 200, description = "Campuses and programs", body = ProgramPageResponse)
    )
)]
pub async fn program_page(Query(query): Query<LanguageQuery>) -> Response {
    pretty_json_response(NavigationService::program_page(query))
}

#[utoipa::path(
    get,
    path = "/digital/resource/grades",
    tag = "navigation",
    params(GradeQuery),
    responses(
        (status = 200, description = "Grades for the selected program", body = GradePageResponse)
    )
)]
pub async fn grade_page(Query(query): Query<GradeQuery>) -> Response {
    pretty_json_response(NavigationService::grade_page(query))
}

#[utoipa::path(
    get,
    path = "/digital/resource/subjects",
    tag = "navigation",
    params(SubjectQuery),
    responses(
        (status = 200, description = "Subjects for the selected grade and program", body = SubjectPageResponse)
    )
)]
pub async fn subject_page(Query(query): Query<SubjectQuery>) -> Response {
    pretty_json_response(NavigationService::subject_page(query))
}

#[utoipa::path(
    get,
    path = "/digital/resource/lessons",
    tag = "navigation",
    params(LessonQuery),
    responses(
        (status = 200, description = "Lesson materials", body = LessonResponse),
        (status = 404, description = "Invalid grade, invalid program or no materials", body = ErrorResponse)
    )
)]
pub async fn lesson_page(
    State(state): State<AppState>,
    Query(query): Query<LessonQuery>,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    match NavigationService::lesson(&state.catalog, &state.config.support.contact_url, query) {
        Ok(lesson) => Ok(pretty_json_response(lesson)),
        Err(error) => {
            tracing::warn!("Lesson lookup failed: {} ({})", error.error, error.message);
            Err((StatusCode::NOT_FOUND, Json(error)))
        }
    }
}
