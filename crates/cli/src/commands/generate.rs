use anyhow::{Context, Result};
use campaign_core::{CampaignConfig, blog_posts};

/// Generate the static site into the configured output directory
pub async fn run(config: &CampaignConfig) -> Result<()> {
    println!("🔨 Generating static site...");
    println!("   Vendor: {}", config.paths.vendor.display());
    println!("   Output: {}", config.paths.output.display());
    println!();

    let written = campaign_generator::generate(&config.paths, &config.site, blog_posts())
        .context("Static site generation failed")?;

    for path in &written {
        println!("   ✓ Generated: {}", path.display());
    }

    println!();
    println!("✅ Static site generation complete! ({} files)", written.len());
    println!();
    println!("To serve the site with the donation API:");
    println!("   campaign");
    println!();

    Ok(())
}
