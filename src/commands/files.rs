//! Report what is on disk in the content directories

use anyhow::Result;

use crate::content::inventory::Inventory;
use crate::Folio;

pub fn run(folio: &Folio) -> Result<()> {
    let inventory = Inventory::scan(
        &folio.base_dir,
        &[folio.articles_dir.as_path(), folio.public_dir.as_path()],
    );

    println!("Project root: {}", inventory.project_root.display());
    for (name, report) in &inventory.directories {
        if !report.exists {
            println!("  {} (missing: {})", name, report.path.display());
            continue;
        }

        println!(
            "  {} ({} files, {} markdown)",
            name,
            report.files.len(),
            report.markdown_files.len()
        );
        for file in &report.markdown_files {
            println!("    {}", file);
        }
        if let Some(error) = &report.error {
            println!("    error: {}", error);
        }
    }

    tracing::debug!("{} markdown files in total", inventory.markdown_count());
    Ok(())
}
