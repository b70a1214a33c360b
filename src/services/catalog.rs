use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;
use tracing::info;
use utoipa::ToSchema;

use crate::models::{
    catalog_data::CATALOG,
    resource::{BaseUrls, GradeTable, LinkItem, PartEntry, ResourceEntry},
};

/// Problems found while indexing a catalog table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate grade key: {0}")]
    DuplicateGrade(String),

    #[error("Duplicate program key {program} under grade {grade}")]
    DuplicateProgram { grade: String, program: String },

    #[error("Duplicate subject key {subject} under grade {grade} / {program}")]
    DuplicateSubject {
        grade: String,
        program: String,
        subject: String,
    },

    /// The key would never match a lookup because lookups normalize first.
    #[error("Subject key {subject:?} under grade {grade} / {program} is not normalized")]
    UnnormalizedSubject {
        grade: String,
        program: String,
        subject: String,
    },

    #[error("Empty parts list for grade {grade} / {program} / {subject}")]
    EmptyParts {
        grade: String,
        program: String,
        subject: String,
    },

    #[error("Part {index} of grade {grade} / {program} / {subject} has neither a PDF nor a flipbook field")]
    PartialPart {
        grade: String,
        program: String,
        subject: String,
        index: usize,
    },

    #[error("Link {index} of grade {grade} / {program} / {subject} has an empty URL")]
    EmptyLink {
        grade: String,
        program: String,
        subject: String,
        index: usize,
    },
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Why a (grade, program, subject) triple produced nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotFoundReason {
    InvalidGrade,
    InvalidProgram,
    NoMaterialsForSubject,
}

impl NotFoundReason {
    pub fn code(&self) -> &'static str {
        match self {
            NotFoundReason::InvalidGrade => "INVALID_GRADE",
            NotFoundReason::InvalidProgram => "INVALID_PROGRAM",
            NotFoundReason::NoMaterialsForSubject => "NO_MATERIALS_FOR_SUBJECT",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPart {
    pub pdf_url: Option<String>,
    pub flipbook_url: Option<String>,
    pub level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLink {
    pub url: String,
    pub display_name: Option<String>,
}

/// Absolute, display-ready links for one catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ResolvedResource {
    pub pdf_url: Option<String>,
    pub flipbook_url: Option<String>,
    pub parts: Vec<ResolvedPart>,
    pub ai_tools: Vec<ResolvedLink>,
    pub virtual_lab_links: Vec<ResolvedLink>,
}

impl ResolvedResource {
    /// True when there is nothing to show at all.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
            && self.pdf_url.is_none()
            && self.flipbook_url.is_none()
            && self.ai_tools.is_empty()
            && self.virtual_lab_links.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(ResolvedResource),
    NotFound(NotFoundReason),
}

impl Resolution {
    /// Folds a record without any usable link into `NoMaterialsForSubject`.
    pub fn for_display(self) -> Self {
        match self {
            Resolution::Found(resource) if resource.is_empty() => {
                Resolution::NotFound(NotFoundReason::NoMaterialsForSubject)
            }
            other => other,
        }
    }

    pub fn found(&self) -> Option<&ResolvedResource> {
        match self {
            Resolution::Found(resource) => Some(resource),
            Resolution::NotFound(_) => None,
        }
    }

    pub fn reason(&self) -> Option<NotFoundReason> {
        match self {
            Resolution::Found(_) => None,
            Resolution::NotFound(reason) => Some(*reason),
        }
    }
}

/// Lookup form of a subject: lowercase with every whitespace character removed.
pub fn normalize_subject(subject: &str) -> String {
    subject
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

type SubjectMap = HashMap<&'static str, ResourceEntry>;
type ProgramMap = HashMap<&'static str, SubjectMap>;

/// Read-only grade -> program -> subject index over a static table.
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it
/// after `new` returns.
#[derive(Debug)]
pub struct ResourceCatalog {
    grades: HashMap<&'static str, ProgramMap>,
    bases: BaseUrls,
}

impl ResourceCatalog {
    pub fn new(table: &'static [GradeTable], bases: BaseUrls) -> CatalogResult<Self> {
        let mut grades: HashMap<&'static str, ProgramMap> = HashMap::with_capacity(table.len());
        let mut records = 0usize;

        for grade_table in table {
            let grade = grade_table.grade;
            if grades.contains_key(grade) {
                return Err(CatalogError::DuplicateGrade(grade.to_string()));
            }

            let mut programs = ProgramMap::with_capacity(grade_table.programs.len());
            for program_table in grade_table.programs {
                let program = program_table.program;
                if programs.contains_key(program) {
                    return Err(CatalogError::DuplicateProgram {
                        grade: grade.to_string(),
                        program: program.to_string(),
                    });
                }

                let mut subjects = SubjectMap::with_capacity(program_table.subjects.len());
                for (subject, entry) in program_table.subjects {
                    Self::check_entry(grade, program, subject, entry)?;
                    if subjects.insert(*subject, *entry).is_some() {
                        return Err(CatalogError::DuplicateSubject {
                            grade: grade.to_string(),
                            program: program.to_string(),
                            subject: subject.to_string(),
                        });
                    }
                }
                records += subjects.len();
                programs.insert(program, subjects);
            }
            grades.insert(grade, programs);
        }

        info!("Resource catalog loaded: {} grades, {} subject records", grades.len(), records);

        Ok(Self { grades, bases })
    }

    /// Catalog over the compiled-in table.
    pub fn builtin(bases: BaseUrls) -> CatalogResult<Self> {
        Self::new(CATALOG, bases)
    }

    fn check_entry(grade: &str, program: &str, subject: &str, entry: &ResourceEntry) -> CatalogResult<()> {
        let context = || (grade.to_string(), program.to_string(), subject.to_string());

        if normalize_subject(subject) != subject {
            let (grade, program, subject) = context();
            return Err(CatalogError::UnnormalizedSubject { grade, program, subject });
        }

        if let Some(parts) = entry.parts {
            if parts.is_empty() {
                let (grade, program, subject) = context();
                return Err(CatalogError::EmptyParts { grade, program, subject });
            }
            if let Some(index) = parts
                .iter()
                .position(|part| part.pdf_id.is_none() && part.flipbook_path.is_none())
            {
                let (grade, program, subject) = context();
                return Err(CatalogError::PartialPart { grade, program, subject, index });
            }
        }

        for links in [entry.ai_tools, entry.virtual_lab_links] {
            if let Some(index) = links.iter().position(|link| link.relative_url.trim().is_empty()) {
                let (grade, program, subject) = context();
                return Err(CatalogError::EmptyLink { grade, program, subject, index });
            }
        }

        Ok(())
    }

    /// Validates the triple level by level and builds absolute URLs for the
    /// matching record. Never fails: every outcome is a `Resolution`.
    pub fn resolve(&self, grade: &str, program: &str, subject: &str) -> Resolution {
        let subject = normalize_subject(subject);

        let Some(programs) = self.grades.get(grade) else {
            return Resolution::NotFound(NotFoundReason::InvalidGrade);
        };
        let Some(subjects) = programs.get(program) else {
            return Resolution::NotFound(NotFoundReason::InvalidProgram);
        };
        let Some(entry) = subjects.get(subject.as_str()) else {
            return Resolution::NotFound(NotFoundReason::NoMaterialsForSubject);
        };

        Resolution::Found(self.resolve_entry(entry))
    }

    /// URL construction for a single record. Non-empty parts suppress the
    /// single PDF/flipbook pair.
    pub fn resolve_entry(&self, entry: &ResourceEntry) -> ResolvedResource {
        let parts: Vec<ResolvedPart> = entry
            .parts
            .unwrap_or_default()
            .iter()
            .map(|part| self.resolve_part(part))
            .collect();

        let (pdf_url, flipbook_url) = if parts.is_empty() {
            (
                BaseUrls::join(&self.bases.pdf_base, entry.single_pdf_id),
                BaseUrls::join(&self.bases.flipbook_base, entry.single_flipbook_path),
            )
        } else {
            (None, None)
        };

        ResolvedResource {
            pdf_url,
            flipbook_url,
            parts,
            ai_tools: Self::resolve_links(&self.bases.ai_tools_base, entry.ai_tools),
            virtual_lab_links: Self::resolve_links(&self.bases.virtual_lab_base, entry.virtual_lab_links),
        }
    }

    fn resolve_part(&self, part: &PartEntry) -> ResolvedPart {
        ResolvedPart {
            pdf_url: BaseUrls::join(&self.bases.pdf_base, part.pdf_id),
            flipbook_url: BaseUrls::join(&self.bases.flipbook_base, part.flipbook_path),
            level: part.level.map(str::to_string),
        }
    }

    fn resolve_links(base: &str, links: &[LinkItem]) -> Vec<ResolvedLink> {
        links
            .iter()
            .filter_map(|link| {
                BaseUrls::join(base, Some(link.relative_url)).map(|url| ResolvedLink {
                    url,
                    display_name: link.display_name.map(str::to_string),
                })
            })
            .collect()
    }

    /// Raw record lookup; the subject is normalized first.
    pub fn entry(&self, grade: &str, program: &str, subject: &str) -> Option<&ResourceEntry> {
        self.grades
            .get(grade)?
            .get(program)?
            .get(normalize_subject(subject).as_str())
    }

    /// Grade keys in numeric order; non-numeric keys sort last.
    pub fn grades(&self) -> Vec<&'static str> {
        let mut grades: Vec<&'static str> = self.grades.keys().copied().collect();
        grades.sort_by_key(|grade| (grade.parse::<u32>().unwrap_or(u32::MAX), *grade));
        grades
    }

    pub fn programs(&self, grade: &str) -> Vec<&'static str> {
        let mut programs: Vec<&'static str> = self
            .grades
            .get(grade)
            .map(|programs| programs.keys().copied().collect())
            .unwrap_or_default();
        programs.sort_unstable();
        programs
    }

    pub fn subjects(&self, grade: &str, program: &str) -> Vec<&'static str> {
        let mut subjects: Vec<&'static str> = self
            .grades
            .get(grade)
            .and_then(|programs| programs.get(program))
            .map(|subjects| subjects.keys().copied().collect())
            .unwrap_or_default();
        subjects.sort_unstable();
        subjects
    }

    /// Number of subject records across all grades and programs.
    pub fn len(&self) -> usize {
        self.grades
            .values()
            .flat_map(|programs| programs.values())
            .map(|subjects| subjects.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
