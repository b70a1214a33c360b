use serde::{Deserialize, Serialize};

/// Placeholder stored in the catalog when a resource is intentionally absent.
pub const SENTINEL: &str = "#";

pub const PDF_BASE: &str = "https://drive.google.com/drive/folders/";
pub const FLIPBOOK_BASE: &str = "https://online.fliphtml5.com/";
pub const AI_TOOLS_BASE: &str = "https://";
pub const VIRTUAL_LAB_BASE: &str = "https://";

/// Named external link, stored relative to its category base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkItem {
    pub relative_url: &'static str,
    pub display_name: Option<&'static str>,
}

/// One sub-resource of a subject split into levels ("Basic"/"Advance") or sections ("Part 1").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartEntry {
    pub pdf_id: Option<&'static str>,
    pub flipbook_path: Option<&'static str>,
    pub level: Option<&'static str>,
}

/// Leaf record of the catalog for one (grade, program, subject) triple.
///
/// `parts` is `None` when the subject is not split. When it holds parts they
/// take precedence over the single pdf/flipbook pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResourceEntry {
    pub single_pdf_id: Option<&'static str>,
    pub single_flipbook_path: Option<&'static str>,
    pub parts: Option<&'static [PartEntry]>,
    pub ai_tools: &'static [LinkItem],
    pub virtual_lab_links: &'static [LinkItem],
}

/// Subjects of one program within a grade, in catalog order.
#[derive(Debug, Clone, Copy)]
pub struct ProgramTable {
    pub program: &'static str,
    pub subjects: &'static [(&'static str, ResourceEntry)],
}

#[derive(Debug, Clone, Copy)]
pub struct GradeTable {
    pub grade: &'static str,
    pub programs: &'static [ProgramTable],
}

/// Prefixes for each resource category. Loaded from configuration so the
/// hosts can be swapped without touching the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseUrls {
    pub pdf_base: String,
    pub flipbook_base: String,
    pub ai_tools_base: String,
    pub virtual_lab_base: String,
}

impl Default for BaseUrls {
    fn default() -> Self {
        Self {
            pdf_base: PDF_BASE.to_string(),
            flipbook_base: FLIPBOOK_BASE.to_string(),
            ai_tools_base: AI_TOOLS_BASE.to_string(),
            virtual_lab_base: VIRTUAL_LAB_BASE.to_string(),
        }
    }
}

impl BaseUrls {
    /// `base` followed by the stored value. Sentinel, empty and missing
    /// values yield `None`.
    pub fn join(base: &str, value: Option<&str>) -> Option<String> {
        configured(value).map(|value| format!("{}{}", base, value))
    }
}

/// Returns the stored value unless it is missing, blank or the sentinel.
pub fn configured(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty() && *v != SENTINEL)
}

impl LinkItem {
    pub const fn new(relative_url: &'static str) -> Self {
        Self {
            relative_url,
            display_name: None,
        }
    }

    pub const fn named(relative_url: &'static str, display_name: &'static str) -> Self {
        Self {
            relative_url,
            display_name: Some(display_name),
        }
    }
}

impl PartEntry {
    pub const fn new(pdf_id: &'static str, flipbook_path: &'static str, level: &'static str) -> Self {
        Self {
            pdf_id: Some(pdf_id),
            flipbook_path: Some(flipbook_path),
            level: Some(level),
        }
    }

    pub fn is_unset(&self) -> bool {
        configured(self.pdf_id).is_none() && configured(self.flipbook_path).is_none()
    }
}

impl ResourceEntry {
    /// Subject listed in the menu but with nothing published yet.
    pub const UNSET: Self = Self::single(SENTINEL, SENTINEL);

    pub const fn single(pdf_id: &'static str, flipbook_path: &'static str) -> Self {
        Self {
            single_pdf_id: Some(pdf_id),
            single_flipbook_path: Some(flipbook_path),
            parts: None,
            ai_tools: &[],
            virtual_lab_links: &[],
        }
    }

    pub const fn split(parts: &'static [PartEntry]) -> Self {
        Self {
            single_pdf_id: None,
            single_flipbook_path: None,
            parts: Some(parts),
            ai_tools: &[],
            virtual_lab_links: &[],
        }
    }

    pub const fn with_single(self, pdf_id: &'static str, flipbook_path: &'static str) -> Self {
        Self {
            single_pdf_id: Some(pdf_id),
            single_flipbook_path: Some(flipbook_path),
            ..self
        }
    }

    pub const fn with_ai_tools(self, ai_tools: &'static [LinkItem]) -> Self {
        Self { ai_tools, ..self }
    }

    pub const fn with_virtual_labs(self, virtual_lab_links: &'static [LinkItem]) -> Self {
        Self {
            virtual_lab_links,
            ..self
        }
    }

    pub fn has_parts(&self) -> bool {
        self.parts.map_or(false, |parts| !parts.is_empty())
    }
}
