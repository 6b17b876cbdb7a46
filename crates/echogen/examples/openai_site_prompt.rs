//! Generate a full recreation document for an analysed website via OpenAI.
//!
//! ```sh
//! OPENAI_API_KEY=sk-... cargo run --example openai_site_prompt
//! ```

use echogen::openai::OpenAiAdapterBuilder;
use echogen::types::analysis::{DesignAnalysis, SiteAnalysis, WebsiteInfo};
use echogen::types::generate_document;
use echogen::{ModelRegistry, Orchestrator};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let backend = OpenAiAdapterBuilder::new_from_env().build()?;
    let orchestrator = Orchestrator::new(backend, ModelRegistry::recommended());

    let analysis = SiteAnalysis {
        website_info: WebsiteInfo {
            url: Some("https://example-portfolio.dev".into()),
            website_type: Some("portfolio".into()),
            primary_purpose: Some("showcase freelance design work".into()),
            target_audience: Some("potential clients".into()),
            industry_category: Some("creative services".into()),
        },
        design: DesignAnalysis {
            color_scheme: Some("dark".into()),
            mood: Some("bold".into()),
            primary_colors: vec!["#101010".into(), "#ff5500".into()],
            font_type: Some("sans-serif".into()),
            layout_type: Some("single page".into()),
            responsive: Some(true),
            ..Default::default()
        },
        ..Default::default()
    };

    let document = generate_document(&orchestrator, &analysis).await;

    println!("{}", document.to_text());
    println!("{}", serde_json::to_string_pretty(&document.to_json())?);
    Ok(())
}
