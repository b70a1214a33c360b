use tracing::debug;

use crate::{
    dto::navigation::{
        ErrorResponse, GradePageResponse, GradeQuery, LanguageQuery, LessonQuery, LessonResponse,
        LinkResponse, OptionResponse, PartResponse, ProgramOptionResponse, ProgramPageResponse,
        SubjectPageResponse, SubjectQuery,
    },
    models::curriculum::{
        grade_label, subject_menu, to_khmer_number, Language, LessonText, Program, CAMPUSES, GRADES,
    },
    services::catalog::{normalize_subject, NotFoundReason, Resolution, ResolvedLink, ResourceCatalog},
};

/// Builds the localized payload of each step of the e-book wizard:
/// program & campus -> grade -> subject -> lesson materials.
pub struct NavigationService;

impl NavigationService {
    pub fn program_page(query: LanguageQuery) -> ProgramPageResponse {
        let lang = Language::from_query(query.lang.as_deref());

        let campuses = CAMPUSES
            .iter()
            .map(|campus| OptionResponse {
                value: campus.id.to_string(),
                label: lang.pick(campus.en, campus.km).to_string(),
            })
            .collect();

        let programs = Program::ALL
            .iter()
            .map(|program| {
                let mut label = program.curriculum_name(lang).to_string();
                if !program.is_available() {
                    label.push_str(lang.pick("(coming soon)", "(មកដល់ឆាប់ៗនេះ)"));
                }
                ProgramOptionResponse {
                    value: program.id().to_string(),
                    label,
                    available: program.is_available(),
                }
            })
            .collect();

        ProgramPageResponse {
            lang,
            title: lang.pick("Program & Campus", "ជ្រើសរើសកម្មវីធី និង ទីតាំង").to_string(),
            campuses,
            programs,
        }
    }

    pub fn grade_page(query: GradeQuery) -> GradePageResponse {
        let lang = Language::from_query(query.lang.as_deref());

        let grades = GRADES
            .iter()
            .map(|grade| OptionResponse {
                value: grade.to_string(),
                label: grade_label(grade, lang),
            })
            .collect();

        GradePageResponse {
            lang,
            program_label: Self::program_label(query.program.as_deref(), lang),
            program: query.program,
            grades,
        }
    }

    pub fn subject_page(query: SubjectQuery) -> SubjectPageResponse {
        let lang = Language::from_query(query.lang.as_deref());

        let subjects = match (query.grade.as_deref(), query.program.as_deref()) {
            (Some(grade), Some(program)) => subject_menu(grade, program)
                .iter()
                .map(|subject| OptionResponse {
                    value: subject.value.to_string(),
                    label: subject.label(lang).to_string(),
                })
                .collect(),
            _ => Vec::new(),
        };

        SubjectPageResponse {
            lang,
            program_label: Self::program_label(query.program.as_deref(), lang),
            grade_label: query
                .grade
                .as_deref()
                .map(|grade| grade_label(grade, lang))
                .unwrap_or_else(|| "-".to_string()),
            program: query.program,
            grade: query.grade,
            subjects,
        }
    }

    /// Resolves the lesson materials for the query. Records without a single
    /// usable link are reported the same way as a missing subject.
    pub fn lesson(
        catalog: &ResourceCatalog,
        support_url: &str,
        query: LessonQuery,
    ) -> Result<LessonResponse, ErrorResponse> {
        let lang = Language::from_query(query.lang.as_deref());
        let text = LessonText::for_language(lang);
        let grade = query.grade.unwrap_or_default();
        let program = query.program.unwrap_or_default();
        let subject = normalize_subject(query.subject.as_deref().unwrap_or_default());

        debug!("Resolving lesson: grade={:?} program={:?} subject={:?}", grade, program, subject);

        let resource = match catalog.resolve(&grade, &program, &subject).for_display() {
            Resolution::Found(resource) => resource,
            Resolution::NotFound(reason) => {
                return Err(Self::not_found(reason, &grade, &program, &subject, lang, support_url));
            }
        };

        let part_label = |index: usize, level: Option<&str>| match level {
            Some(level) => level.to_string(),
            None => format!("{} {}", text.part, index + 1),
        };

        let parts = resource
            .parts
            .iter()
            .enumerate()
            .map(|(index, part)| {
                let label = part_label(index, part.level.as_deref());
                PartResponse {
                    pdf: part.pdf_url.clone().map(|url| LinkResponse {
                        url,
                        label: format!("{} {}", text.view_pdf, label),
                    }),
                    flipbook: part.flipbook_url.clone().map(|url| LinkResponse {
                        url,
                        label: format!("{} {}", text.view_flipbook, label),
                    }),
                    label,
                }
            })
            .collect();

        Ok(LessonResponse {
            lang,
            title: text.title.to_string(),
            heading: Self::lesson_heading(&grade, &program, lang),
            subject: format!("{} {}", text.subject_label, capitalize(&subject)),
            access_materials: text.access_materials.to_string(),
            pdf: resource.pdf_url.map(|url| LinkResponse {
                url,
                label: text.view_pdf.to_string(),
            }),
            flipbook: resource.flipbook_url.map(|url| LinkResponse {
                url,
                label: text.view_flipbook.to_string(),
            }),
            parts,
            ai_tools_heading: text.ai_tools.to_string(),
            ai_tools: Self::named_links(resource.ai_tools, text.ai_tool),
            virtual_labs_heading: text.virtual_labs.to_string(),
            virtual_labs: Self::named_links(resource.virtual_lab_links, text.virtual_lab),
        })
    }

    fn named_links(links: Vec<ResolvedLink>, fallback: &str) -> Vec<LinkResponse> {
        links
            .into_iter()
            .enumerate()
            .map(|(index, link)| LinkResponse {
                label: link
                    .display_name
                    .unwrap_or_else(|| format!("{} {}", fallback, index + 1)),
                url: link.url,
            })
            .collect()
    }

    /// "Grade 4: Cambodia Program" / "ថ្នាក់ទី ៤: ខ្មែរ កម្មវិធីសិក្សា".
    fn lesson_heading(grade: &str, program: &str, lang: Language) -> String {
        let text = LessonText::for_language(lang);
        match lang {
            Language::En => format!("{} {}: {} {}", text.grade_label, grade, capitalize(program), text.program_label),
            Language::Km => format!(
                "{} {}: {} {}",
                text.grade_label,
                to_khmer_number(grade),
                Program::from_id(program).unwrap_or(Program::Extra).short_name(lang),
                text.program_label
            ),
        }
    }

    fn program_label(program: Option<&str>, lang: Language) -> String {
        match program {
            Some(program) => Program::from_id(program)
                .unwrap_or(Program::Extra)
                .curriculum_name(lang)
                .to_string(),
            None => "-".to_string(),
        }
    }

    pub fn not_found(
        reason: NotFoundReason,
        grade: &str,
        program: &str,
        subject: &str,
        lang: Language,
        support_url: &str,
    ) -> ErrorResponse {
        let text = LessonText::for_language(lang);
        let message = match reason {
            NotFoundReason::InvalidGrade => format!("{} {}.", text.invalid_grade, grade),
            NotFoundReason::InvalidProgram => format!(
                "{} {} {} {} {}.",
                text.invalid_program, program, text.for_grade, text.grade_label, grade
            ),
            NotFoundReason::NoMaterialsForSubject => format!(
                "{} {} {} {} {} {} {} {}.",
                text.no_materials,
                subject,
                text.inside,
                Program::from_id(program).unwrap_or(Program::Extra).short_name(lang),
                text.program_label,
                text.for_grade,
                text.grade_label,
                grade
            ),
        };

        ErrorResponse {
            error: reason.code().to_string(),
            message,
            hint: format!("{} {} {}", text.check_details, text.contact_support, text.assistance),
            support_url: support_url.to_string(),
        }
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
