use appiconset::{IconConfig, logger, run};

fn main() -> Result<(), appiconset::IconError> {
    logger::init_logging();

    println!("🎨 App icon generator");
    println!("{}", "=".repeat(50));

    let config = IconConfig::default();
    let summary = run(&config)?;

    let shown = std::fs::canonicalize(&summary.output_dir).unwrap_or(summary.output_dir);
    println!("\n{}", "=".repeat(50));
    println!("✅ Generated {} icons and {}", summary.images.len(), config.manifest_name);
    println!("📁 Output: {}", shown.display());
    Ok(())
}
