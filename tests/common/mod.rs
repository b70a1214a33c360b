#![allow(dead_code)]

use dewey_ebooks::{config::AppConfig, models::resource::BaseUrls, AppState, ResourceCatalog};
use std::sync::Arc;

pub const FAKE_PDF: &str = "https://pdf.test/";
pub const FAKE_FLIPBOOK: &str = "https://flip.test/";
pub const FAKE_AI: &str = "https://ai.test/";
pub const FAKE_LAB: &str = "https://lab.test/";

pub fn setup_test_app() -> AppState {
    let config = Arc::new(AppConfig::default());
    AppState::new(config).expect("builtin catalog should be valid")
}

pub fn fake_bases() -> BaseUrls {
    BaseUrls {
        pdf_base: FAKE_PDF.to_string(),
        flipbook_base: FAKE_FLIPBOOK.to_string(),
        ai_tools_base: FAKE_AI.to_string(),
        virtual_lab_base: FAKE_LAB.to_string(),
    }
}

pub fn builtin_catalog() -> ResourceCatalog {
    ResourceCatalog::builtin(BaseUrls::default()).expect("builtin catalog should be valid")
}
