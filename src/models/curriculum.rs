use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Display language of the navigation pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Km,
}

impl Language {
    /// Exactly "km" selects Khmer; anything else falls back to English.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("km") => Language::Km,
            _ => Language::En,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Km => "km",
        }
    }

    pub fn pick(&self, en: &'static str, km: &'static str) -> &'static str {
        match self {
            Language::En => en,
            Language::Km => km,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Program {
    Cambodia,
    America,
    Extra,
}

impl Program {
    pub const ALL: [Program; 3] = [Program::Cambodia, Program::America, Program::Extra];

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "cambodia" => Some(Program::Cambodia),
            "america" => Some(Program::America),
            "extra" => Some(Program::Extra),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Program::Cambodia => "cambodia",
            Program::America => "america",
            Program::Extra => "extra",
        }
    }

    /// Only the Cambodian curriculum is open; the others are announced as coming soon.
    pub fn is_available(&self) -> bool {
        matches!(self, Program::Cambodia)
    }

    pub fn curriculum_name(&self, lang: Language) -> &'static str {
        match self {
            Program::Cambodia => lang.pick("Cambodia Curriculum", "កម្មវិធីសិក្សាខ្មែរ"),
            Program::America => lang.pick("American Curriculum", "កម្មវិធីសិក្សាអាមេរិកកាំង"),
            Program::Extra => lang.pick("Extra Curricular Curriculum", "កម្មវិធីសិក្សាបន្ថែម"),
        }
    }

    /// Short name used inside sentences ("... in Cambodia Program ...").
    pub fn short_name(&self, lang: Language) -> &'static str {
        match self {
            Program::Cambodia => lang.pick("Cambodia", "ខ្មែរ"),
            Program::America => lang.pick("America", "អាមេរិកកាំង"),
            Program::Extra => lang.pick("other", "បន្ថែម"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Campus {
    pub id: &'static str,
    pub en: &'static str,
    pub km: &'static str,
}

pub const CAMPUSES: &[Campus] = &[
    Campus { id: "iconic", en: "Iconic Branch", km: "សាលាឌូវី សាខាអាយខនិក" },
    Campus { id: "ochar", en: "Ochar Branch", km: "សាលាឌូវី សាខាអូរចារ" },
    Campus { id: "bmc", en: "Banteay Meanchey", km: "សាខាបន្ទាយមានជ័យ" },
    Campus { id: "childcare", en: "Childcare House", km: "ឌូវី ឆាយលឃែរ ហោស៍" },
    Campus { id: "kindergarten", en: "Kindergarten", km: "មត្តេយ្យ ឌូវី" },
];

/// Grades offered in the grade menu.
pub const GRADES: [&str; 12] = ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12"];

/// Converts ASCII digits to Khmer digits, leaving other characters untouched.
pub fn to_khmer_number(value: &str) -> String {
    const KHMER_DIGITS: [char; 10] = ['០', '១', '២', '៣', '៤', '៥', '៦', '៧', '៨', '៩'];
    value
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => KHMER_DIGITS[d as usize],
            None => c,
        })
        .collect()
}

/// "Grade 7" / "ថ្នាក់ទី ៧".
pub fn grade_label(grade: &str, lang: Language) -> String {
    match lang {
        Language::En => format!("Grade {}", grade),
        Language::Km => format!("ថ្នាក់ទី {}", to_khmer_number(grade)),
    }
}

/// Entry of the subject menu shown after a grade is picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectOption {
    pub value: &'static str,
    pub en: &'static str,
    pub km: &'static str,
}

impl SubjectOption {
    const fn new(value: &'static str, en: &'static str, km: &'static str) -> Self {
        Self { value, en, km }
    }

    pub fn label(&self, lang: Language) -> &'static str {
        lang.pick(self.en, self.km)
    }
}

const MATH: SubjectOption = SubjectOption::new("math", "Mathematics", "គណិតវិទ្យា");
const SCIENCE: SubjectOption = SubjectOption::new("science", "Science", "វិទ្យាសាស្ត្រ");
const SOCIAL: SubjectOption = SubjectOption::new("social", "Social Science", "សិក្សាសង្គម");
const SCIENCE_SOCIAL: SubjectOption =
    SubjectOption::new("social", "Social Science", "វិទ្យាសាស្ត្រ-សិក្សាសង្គម");
const KHMER: SubjectOption = SubjectOption::new("khmer", "Khmer Language", "ភាសាខ្មែរ");
const KHMER_LITERATURE: SubjectOption =
    SubjectOption::new("khmer", "Khmer Language", "អក្សរសាស្ត្រខ្មែរ");
const ENGLISH: SubjectOption = SubjectOption::new("english", "English", "ភាសាអង់គ្លេស");
const HISTORY: SubjectOption = SubjectOption::new("history", "History", "ប្រវិត្តិសាស្ត្រ");
const GEOGRAPHY: SubjectOption = SubjectOption::new("geography", "Geography", "ភូមិវិទ្យា");
const BIOLOGY: SubjectOption = SubjectOption::new("biology", "Biology", "ជីវវិទ្យា");
const PHYSICS: SubjectOption = SubjectOption::new("physics", "Physics", "រូបវិទ្យា");
const CHEMISTRY: SubjectOption = SubjectOption::new("chemistry", "Chemistry", "គីមីវិទ្យា");
const VIRTUAL_LAB: SubjectOption =
    SubjectOption::new("virtual-lab", "Virtual Lab", "មន្ទីរពិសោធន៍និម្មិត");
const AI_EDUCATION: SubjectOption = SubjectOption::new("ai-education", "AI Education", "ការអប់រំ AI");

/// Subject menu per (grade, program). A menu entry does not guarantee a
/// catalog record; missing records surface as "no materials" on the lesson page.
pub const SUBJECT_MENU: &[(&str, &str, &[SubjectOption])] = &[
    ("1", "cambodia", &[MATH, SCIENCE, SOCIAL, KHMER, VIRTUAL_LAB, AI_EDUCATION]),
    ("2", "cambodia", &[MATH, SCIENCE, SCIENCE_SOCIAL, KHMER, VIRTUAL_LAB, AI_EDUCATION]),
    (
        "3",
        "cambodia",
        &[
            MATH,
            SCIENCE,
            SCIENCE_SOCIAL,
            SubjectOption::new("reading", "Reading", "អំណាន"),
            KHMER,
            VIRTUAL_LAB,
            AI_EDUCATION,
        ],
    ),
    (
        "4",
        "cambodia",
        &[
            SubjectOption::new("chaching", "Cha Ching", "កម្មវិធីសិក្សា-ឆាឈីង"),
            MATH,
            SubjectOption::new("history", "History Of Science", "ប្រវិត្តិសាស្ត្រ"),
            KHMER,
            ENGLISH,
            SCIENCE,
            SCIENCE_SOCIAL,
            VIRTUAL_LAB,
            AI_EDUCATION,
        ],
    ),
    ("5", "cambodia", &[MATH, KHMER, ENGLISH, SCIENCE, SOCIAL, VIRTUAL_LAB, AI_EDUCATION]),
    ("6", "cambodia", &[MATH, HISTORY, KHMER, ENGLISH, SCIENCE, SOCIAL, VIRTUAL_LAB, AI_EDUCATION]),
    ("7", "cambodia", &[MATH, KHMER, ENGLISH, SCIENCE, SCIENCE_SOCIAL, VIRTUAL_LAB, AI_EDUCATION]),
    ("8", "cambodia", &[MATH, KHMER, ENGLISH, SCIENCE, SCIENCE_SOCIAL]),
    ("9", "cambodia", &[MATH, KHMER, ENGLISH, SCIENCE, SCIENCE_SOCIAL]),
    (
        "10",
        "cambodia",
        &[
            MATH,
            SubjectOption::new("history", "History Of Science", "ប្រវិត្តវិទ្យា"),
            GEOGRAPHY,
            SubjectOption::new("geology", "Earth And Environmental Science", "ផែនដីវិទ្យា"),
            BIOLOGY,
            PHYSICS,
            CHEMISTRY,
            SubjectOption::new("morality", "Morality-Civics", "សីលធម៌-ពលរដ្ធវិជ្ជា"),
            KHMER,
            ENGLISH,
            SubjectOption::new("homeeconomic", "Home Economic", "គេហវិទ្យា"),
            VIRTUAL_LAB,
            AI_EDUCATION,
        ],
    ),
    (
        "11",
        "cambodia",
        &[
            MATH,
            CHEMISTRY,
            BIOLOGY,
            HISTORY,
            SubjectOption::new("geology", "Geology", "ភូគព្ភវិទ្យា"),
            GEOGRAPHY,
            PHYSICS,
            SubjectOption::new("morality", "Morality", "សីលធម៌"),
            ENGLISH,
            KHMER_LITERATURE,
            VIRTUAL_LAB,
            AI_EDUCATION,
        ],
    ),
    (
        "12",
        "cambodia",
        &[
            MATH,
            SubjectOption::new("economics", "Economics", "សេដ្ធកិច្ចវិទ្យា"),
            CHEMISTRY,
            BIOLOGY,
            HISTORY,
            SubjectOption::new("geology", "Earth And Environmental Science", "ផែនដីវិទ្យានិងបរិស្ថានវិទ្យា"),
            GEOGRAPHY,
            PHYSICS,
            SubjectOption::new("morality", "Morality-Civics", "សីលធម៌"),
            ENGLISH,
            KHMER_LITERATURE,
            VIRTUAL_LAB,
            AI_EDUCATION,
        ],
    ),
];

pub fn subject_menu(grade: &str, program: &str) -> &'static [SubjectOption] {
    SUBJECT_MENU
        .iter()
        .find(|(g, p, _)| *g == grade && *p == program)
        .map(|(_, _, subjects)| *subjects)
        .unwrap_or(&[])
}

/// Fixed strings of the lesson page.
#[derive(Debug)]
pub struct LessonText {
    pub title: &'static str,
    pub grade_label: &'static str,
    pub program_label: &'static str,
    pub subject_label: &'static str,
    pub access_materials: &'static str,
    pub ai_tools: &'static str,
    pub virtual_labs: &'static str,
    pub view_pdf: &'static str,
    pub view_flipbook: &'static str,
    pub part: &'static str,
    pub ai_tool: &'static str,
    pub virtual_lab: &'static str,
    pub no_materials: &'static str,
    pub invalid_program: &'static str,
    pub invalid_grade: &'static str,
    pub inside: &'static str,
    pub for_grade: &'static str,
    pub check_details: &'static str,
    pub contact_support: &'static str,
    pub assistance: &'static str,
}

static EN_TEXT: LessonText = LessonText {
    title: "Lesson Materials",
    grade_label: "Grade",
    program_label: "Program",
    subject_label: "Subject",
    access_materials: "Access the lesson materials:",
    ai_tools: "AI Education Tools:",
    virtual_labs: "Virtual Labs:",
    view_pdf: "View PDF",
    view_flipbook: "View Flipbook",
    part: "Part",
    ai_tool: "AI Tool",
    virtual_lab: "Virtual Lab",
    no_materials: "No materials available for",
    invalid_program: "Invalid program:",
    invalid_grade: "Invalid grade:",
    inside: "in",
    for_grade: "for",
    check_details: "Please check the grade, program, or subject, or",
    contact_support: "contact support",
    assistance: "for assistance.",
};

static KM_TEXT: LessonText = LessonText {
    title: "សម្ភារៈសិក្សា",
    grade_label: "ថ្នាក់ទី",
    program_label: "កម្មវិធីសិក្សា",
    subject_label: "មុខវិជ្ជា",
    access_materials: "ចូលប្រើសម្ភារៈសិក្សា:",
    ai_tools: "ឧបករណ៍អប់រំ AI:",
    virtual_labs: "មន្ទីរពិសោធន៍និម្មិត:",
    view_pdf: "មើល PDF",
    view_flipbook: "មើល Flipbook",
    part: "ផ្នែក",
    ai_tool: "ឧបករណ៍ AI",
    virtual_lab: "មន្ទីរពិសោធន៍",
    no_materials: "គ្មានសម្ភារៈសម្រាប់",
    invalid_program: "កម្មវិធីមិនត្រឹមត្រូវ:",
    invalid_grade: "ថ្នាក់មិនត្រឹមត្រូវ:",
    inside: "ក្នុង",
    for_grade: "សម្រាប់",
    check_details: "សូមពិនិត្យថ្នាក់, កម្មវិធី, ឬមុខវិជ្ជា, ឬ",
    contact_support: "ទាក់ទងផ្នែកជំនួយ",
    assistance: "សម្រាប់ជំនួយ។",
};

impl LessonText {
    pub fn for_language(lang: Language) -> &'static LessonText {
        match lang {
            Language::En => &EN_TEXT,
            Language::Km => &KM_TEXT,
        }
    }
}
