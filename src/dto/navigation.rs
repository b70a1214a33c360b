use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::curriculum::Language;

/// Query strings of the navigation pages. Every field is optional; missing
/// values resolve to "not found" rather than a request error.

#[derive(Debug, Default, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LanguageQuery {
    pub lang: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GradeQuery {
    pub program: Option<String>,
    pub lang: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SubjectQuery {
    pub program: Option<String>,
    pub grade: Option<String>,
    pub lang: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LessonQuery {
    pub program: Option<String>,
    pub grade: Option<String>,
    pub subject: Option<String>,
    pub lang: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OptionResponse {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProgramOptionResponse {
    pub value: String,
    pub label: String,
    pub available: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProgramPageResponse {
    pub lang: Language,
    pub title: String,
    pub campuses: Vec<OptionResponse>,
    pub programs: Vec<ProgramOptionResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GradePageResponse {
    pub lang: Language,
    pub program: Option<String>,
    pub program_label: String,
    pub grades: Vec<OptionResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubjectPageResponse {
    pub lang: Language,
    pub program: Option<String>,
    pub grade: Option<String>,
    pub program_label: String,
    pub grade_label: String,
    pub subjects: Vec<OptionResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LinkResponse {
    pub url: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PartResponse {
    pub label: String,
    pub pdf: Option<LinkResponse>,
    pub flipbook: Option<LinkResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LessonResponse {
    pub lang: Language,
    pub title: String,
    pub heading: String,
    pub subject: String,
    pub access_materials: String,
    /// Set only when the subject is not split into parts.
    pub pdf: Option<LinkResponse>,
    pub flipbook: Option<LinkResponse>,
    pub parts: Vec<PartResponse>,
    pub ai_tools_heading: String,
    pub ai_tools: Vec<LinkResponse>,
    pub virtual_labs_heading: String,
    pub virtual_labs: Vec<LinkResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub hint: String,
    pub support_url: String,
}
