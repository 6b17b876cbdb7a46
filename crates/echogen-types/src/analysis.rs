//! Typed records describing a scraped website.
//!
//! Upstream analysis tooling produces these; the section builders in
//! [`crate::sections`] turn them into prompt text. Every field is optional
//! or defaults to empty: an analysis is rarely complete, and a missing
//! value simply drops out of the rendered prompt instead of failing it.

use serde::{Deserialize, Serialize};

/// Identity of the analysed site.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebsiteInfo {
    pub url: Option<String>,
    pub website_type: Option<String>,
    pub primary_purpose: Option<String>,
    pub target_audience: Option<String>,
    pub industry_category: Option<String>,
}

/// How the site appears to make money.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BusinessModel {
    pub business_type: Option<String>,
    #[serde(default)]
    pub monetization_strategy: Vec<String>,
    pub value_proposition: Option<String>,
}

/// Visual design characteristics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DesignAnalysis {
    pub color_scheme: Option<String>,
    pub mood: Option<String>,
    #[serde(default)]
    pub primary_colors: Vec<String>,
    pub font_type: Option<String>,
    pub typography_strategy: Option<String>,
    pub layout_type: Option<String>,
    pub layout_pattern: Option<String>,
    pub responsive: Option<bool>,
    #[serde(default)]
    pub design_patterns: Vec<String>,
    #[serde(default)]
    pub ui_components: Vec<String>,
}

/// Observed features and interaction surface.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FunctionalityAnalysis {
    #[serde(default)]
    pub core_features: Vec<String>,
    pub button_count: Option<u32>,
    pub link_count: Option<u32>,
    pub input_count: Option<u32>,
    pub interaction_complexity: Option<String>,
    pub has_search: Option<bool>,
    #[serde(default)]
    pub social_features: Vec<String>,
    #[serde(default)]
    pub ecommerce_features: Vec<String>,
}

/// Detected stack and technical signals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TechnicalAnalysis {
    #[serde(default)]
    pub frontend_technologies: Vec<String>,
    #[serde(default)]
    pub frameworks: Vec<String>,
    #[serde(default)]
    pub modern_features: Vec<String>,
    #[serde(default)]
    pub seo_signals: Vec<String>,
    #[serde(default)]
    pub security_features: Vec<String>,
}

/// Content structure and presentation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentAnalysis {
    pub content_density: Option<String>,
    pub structure_type: Option<String>,
    pub word_count: Option<u32>,
    #[serde(default)]
    pub content_types: Vec<String>,
    #[serde(default)]
    pub multimedia: Vec<String>,
}

/// User-experience signals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UxAnalysis {
    #[serde(default)]
    pub entry_points: Vec<String>,
    #[serde(default)]
    pub conversion_points: Vec<String>,
    pub journey_complexity: Option<String>,
    pub mobile_responsive: Option<bool>,
    pub mobile_optimization: Option<String>,
    #[serde(default)]
    pub accessibility_features: Vec<String>,
    #[serde(default)]
    pub engagement_features: Vec<String>,
}

/// The complete analysis bundle for one site.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteAnalysis {
    #[serde(default)]
    pub website_info: WebsiteInfo,
    #[serde(default)]
    pub business_model: BusinessModel,
    #[serde(default)]
    pub design: DesignAnalysis,
    #[serde(default)]
    pub functionality: FunctionalityAnalysis,
    #[serde(default)]
    pub technical: TechnicalAnalysis,
    #[serde(default)]
    pub content: ContentAnalysis,
    #[serde(default)]
    pub ux: UxAnalysis,
}
