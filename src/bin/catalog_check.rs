use anyhow::Result;

use dewey_ebooks::{
    config::AppConfig,
    services::catalog::{Resolution, ResourceCatalog},
};

/// Validates the compiled-in catalog and reports records that would render
/// as "no materials". With three arguments (grade program subject) it also
/// prints the resolved links for that triple.
fn main() -> Result<()> {
    dotenv::dotenv().ok();

    println!("Checking e-book catalog...");

    let config = AppConfig::load()?;

    let catalog = match ResourceCatalog::builtin(config.resources.clone()) {
        Ok(catalog) => catalog,
        Err(e) => {
            println!("❌ Catalog is invalid: {}", e);
            std::process::exit(1);
        }
    };
    println!("✓ Catalog is valid: {} subject records", catalog.len());

    let mut empty = Vec::new();
    for grade in catalog.grades() {
        for program in catalog.programs(grade) {
            let subjects = catalog.subjects(grade, program);
            let mut displayable = 0;
            for subject in &subjects {
                match catalog.resolve(grade, program, subject).for_display() {
                    Resolution::Found(_) => displayable += 1,
                    Resolution::NotFound(_) => empty.push(format!("{}/{}/{}", grade, program, subject)),
                }
            }
            println!(
                "  📁 Grade {:>2} {:<10} {:>2} subjects, {:>2} with materials",
                grade,
                program,
                subjects.len(),
                displayable
            );
        }
    }

    if !empty.is_empty() {
        println!("⚠️  {} records have no usable link:", empty.len());
        for key in &empty {
            println!("    - {}", key);
        }
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let [grade, program, subject] = args.as_slice() {
        println!();
        match catalog.resolve(grade, program, subject).for_display() {
            Resolution::Found(resource) => println!("{}", serde_json::to_string_pretty(&resource)?),
            Resolution::NotFound(reason) => println!("❌ {}", reason.code()),
        }
    }

    Ok(())
}
