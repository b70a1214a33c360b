use dewey_ebooks::models::{
    curriculum::{grade_label, subject_menu, to_khmer_number, Language, LessonText, Program, CAMPUSES, GRADES},
    resource::{configured, BaseUrls, LinkItem, PartEntry, ResourceEntry, SENTINEL},
};

#[test]
fn test_khmer_numbers() {
    assert_eq!(to_khmer_number("0"), "០");
    assert_eq!(to_khmer_number("12"), "១២");
    assert_eq!(to_khmer_number("Grade 7"), "Grade ៧");
    assert_eq!(to_khmer_number(""), "");
}

#[test]
fn test_grade_label() {
    assert_eq!(grade_label("4", Language::En), "Grade 4");
    assert_eq!(grade_label("10", Language::Km), "ថ្នាក់ទី ១០");
}

#[test]
fn test_language_from_query() {
    assert_eq!(Language::from_query(Some("km")), Language::Km);
    assert_eq!(Language::from_query(Some(" KM ")), Language::En);
    assert_eq!(Language::from_query(Some("Km")), Language::En);
    assert_eq!(Language::from_query(Some("en")), Language::En);
    assert_eq!(Language::from_query(Some("fr")), Language::En);
    assert_eq!(Language::from_query(None), Language::En);
    assert_eq!(Language::Km.code(), "km");
}

#[test]
fn test_programs() {
    assert_eq!(Program::from_id("cambodia"), Some(Program::Cambodia));
    assert_eq!(Program::from_id("Cambodia"), None);
    assert_eq!(Program::from_id("extra").map(|p| p.id()), Some("extra"));

    let available: Vec<_> = Program::ALL.iter().filter(|p| p.is_available()).collect();
    assert_eq!(available, vec![&Program::Cambodia]);

    assert_eq!(Program::America.curriculum_name(Language::En), "American Curriculum");
    assert_eq!(Program::Cambodia.short_name(Language::Km), "ខ្មែរ");
}

#[test]
fn test_menus() {
    assert_eq!(GRADES.len(), 12);
    assert_eq!(CAMPUSES.len(), 5);

    let grade_4: Vec<_> = subject_menu("4", "cambodia").iter().map(|s| s.value).collect();
    assert_eq!(grade_4.first(), Some(&"chaching"));
    assert!(grade_4.contains(&"ai-education"));

    let economics = subject_menu("12", "cambodia")
        .iter()
        .find(|s| s.value == "economics")
        .expect("grade 12 economics in menu");
    assert_eq!(economics.label(Language::En), "Economics");

    assert!(subject_menu("4", "america").is_empty());
    assert!(subject_menu("13", "cambodia").is_empty());
}

#[test]
fn test_lesson_text_languages() {
    assert_eq!(LessonText::for_language(Language::En).part, "Part");
    assert_eq!(LessonText::for_language(Language::Km).part, "ផ្នែក");
}

#[test]
fn test_resource_entry_builders() {
    let unset = ResourceEntry::UNSET;
    assert_eq!(unset.single_pdf_id, Some(SENTINEL));
    assert_eq!(unset.single_flipbook_path, Some(SENTINEL));
    assert!(!unset.has_parts());

    const PARTS: &[PartEntry] = &[PartEntry::new("pdf", "flip/", "Basic")];
    let split = ResourceEntry::split(PARTS).with_single("#", "#");
    assert!(split.has_parts());
    assert_eq!(split.single_pdf_id, Some("#"));

    const TOOLS: &[LinkItem] = &[LinkItem::named("tool.test/", "Tool"), LinkItem::new("other.test/")];
    let tools = ResourceEntry::UNSET.with_ai_tools(TOOLS);
    assert_eq!(tools.ai_tools.len(), 2);
    assert_eq!(tools.ai_tools[1].display_name, None);
    assert!(ResourceEntry::split(&[]).parts.is_some());
    assert!(!ResourceEntry::split(&[]).has_parts());
}

#[test]
fn test_part_entry_is_unset() {
    assert!(PartEntry::new("#", "#", "Part 1").is_unset());
    assert!(!PartEntry::new("#", "flip/", "Part 2").is_unset());
}

#[test]
fn test_configured_values() {
    assert_eq!(configured(Some("abc")), Some("abc"));
    assert_eq!(configured(Some("#")), None);
    assert_eq!(configured(Some("  ")), None);
    assert_eq!(configured(None), None);
}

#[test]
fn test_base_url_join() {
    assert_eq!(BaseUrls::join("https://a.test/", Some("x/y/")), Some("https://a.test/x/y/".to_string()));
    assert_eq!(BaseUrls::join("https://a.test/", Some("#")), None);
    assert_eq!(BaseUrls::join("https://a.test/", Some("")), None);
    // Always a plain concatenation, even for values that look absolute
    assert_eq!(
        BaseUrls::join("https://a.test/", Some("https://b.test/book/#p=1")),
        Some("https://a.test/https://b.test/book/#p=1".to_string())
    );
    assert_eq!(
        BaseUrls::join("https://a.test/", Some("ebook.spm-edoc.com/ereading/EnglishGrade10/#p=1")),
        Some("https://a.test/ebook.spm-edoc.com/ereading/EnglishGrade10/#p=1".to_string())
    );

    let defaults = BaseUrls::default();
    assert_eq!(defaults.pdf_base, "https://drive.google.com/drive/folders/");
    assert_eq!(defaults.flipbook_base, "https://online.fliphtml5.com/");
}
