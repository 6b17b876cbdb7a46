//! Per-section prompt construction.
//!
//! Each recreation document is assembled from six generated sections. A
//! section pairs a persona preamble with the relevant slice of the
//! [`SiteAnalysis`] and a numbered coverage checklist, rendered through
//! [`PromptBuilder`] and tagged with the task type the orchestrator should
//! route it under.

use echogen_core::task::TaskType;
use echogen_prompt::{PromptBuilder, TaskPrompt};

use crate::analysis::SiteAnalysis;

/// The sections of a recreation document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Design,
    Functionality,
    Technical,
    Content,
    UserExperience,
    ExecutiveSummary,
}

impl SectionKind {
    /// Every content section, in document order. The executive summary is
    /// produced separately because it summarises the others' subject matter.
    pub const CONTENT_SECTIONS: [SectionKind; 5] = [
        SectionKind::Design,
        SectionKind::Functionality,
        SectionKind::Technical,
        SectionKind::Content,
        SectionKind::UserExperience,
    ];

    /// Task type the orchestrator routes this section under.
    pub fn task_type(&self) -> TaskType {
        match self {
            SectionKind::Design => TaskType::DESIGN,
            SectionKind::Functionality => TaskType::FUNCTIONALITY,
            SectionKind::Technical => TaskType::TECHNICAL,
            SectionKind::Content => TaskType::CONTENT,
            SectionKind::UserExperience => TaskType::UX,
            SectionKind::ExecutiveSummary => TaskType::ANALYSIS,
        }
    }

    /// Heading used in the assembled document.
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Design => "Design Requirements",
            SectionKind::Functionality => "Functionality Requirements",
            SectionKind::Technical => "Technical Implementation",
            SectionKind::Content => "Content Strategy",
            SectionKind::UserExperience => "User Experience Guidelines",
            SectionKind::ExecutiveSummary => "Executive Summary",
        }
    }
}

/// Render the generation prompt for one section of the document.
pub fn section_prompt(kind: SectionKind, analysis: &SiteAnalysis) -> TaskPrompt {
    let text = match kind {
        SectionKind::Design => design_prompt(analysis),
        SectionKind::Functionality => functionality_prompt(analysis),
        SectionKind::Technical => technical_prompt(analysis),
        SectionKind::Content => content_prompt(analysis),
        SectionKind::UserExperience => ux_prompt(analysis),
        SectionKind::ExecutiveSummary => executive_summary_prompt(analysis),
    };
    TaskPrompt::new(kind.task_type(), text)
}

fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("unknown")
}

fn list(values: &[String]) -> String {
    if values.is_empty() {
        "none detected".to_owned()
    } else {
        values.join(", ")
    }
}

fn design_prompt(analysis: &SiteAnalysis) -> String {
    let design = &analysis.design;
    PromptBuilder::new()
        .line(
            "You are an expert UI/UX designer. Based on the website analysis below, write a \
             detailed design prompt that would help recreate a similar visual design and \
             user interface.",
        )
        .blank()
        .subheading("Design Analysis")
        .key_value("Colour scheme", opt(&design.color_scheme))
        .key_value("Mood", opt(&design.mood))
        .key_value("Primary colours", list(&design.primary_colors))
        .key_value("Typography", opt(&design.font_type))
        .key_value("Typography strategy", opt(&design.typography_strategy))
        .key_value("Layout type", opt(&design.layout_type))
        .key_value("Layout pattern", opt(&design.layout_pattern))
        .key_value("Design patterns", list(&design.design_patterns))
        .key_value("UI components", list(&design.ui_components))
        .blank()
        .line("The design prompt must cover:")
        .numbered([
            "Overall visual style and aesthetic",
            "Colour scheme and palette",
            "Typography choices and hierarchy",
            "Layout structure and grid system",
            "UI components and design patterns",
            "Responsive design considerations",
            "Visual hierarchy and information organisation",
        ])
        .finish()
}

fn functionality_prompt(analysis: &SiteAnalysis) -> String {
    let functionality = &analysis.functionality;
    PromptBuilder::new()
        .line(
            "You are an expert web developer and product manager. Based on the website \
             analysis below, write a detailed functionality prompt describing the features \
             and user interactions a similar site needs.",
        )
        .blank()
        .subheading("Functionality Analysis")
        .key_value("Core features", list(&functionality.core_features))
        .key_value(
            "Interaction complexity",
            opt(&functionality.interaction_complexity),
        )
        .key_value("Buttons", functionality.button_count.unwrap_or(0))
        .key_value("Links", functionality.link_count.unwrap_or(0))
        .key_value("Form inputs", functionality.input_count.unwrap_or(0))
        .key_value(
            "Search",
            if functionality.has_search.unwrap_or(false) {
                "present"
            } else {
                "not detected"
            },
        )
        .key_value("Social features", list(&functionality.social_features))
        .key_value("E-commerce features", list(&functionality.ecommerce_features))
        .blank()
        .line("The functionality prompt must cover:")
        .numbered([
            "Core features and capabilities",
            "User interaction patterns",
            "Navigation structure and user flows",
            "Form handling and data collection",
            "Search and filtering capabilities",
            "Interactive elements and their behaviours",
        ])
        .finish()
}

fn technical_prompt(analysis: &SiteAnalysis) -> String {
    let technical = &analysis.technical;
    PromptBuilder::new()
        .line(
            "You are an expert software architect. Based on the website analysis below, \
             write a detailed technical implementation prompt covering stack, performance, \
             security and modern web practices.",
        )
        .blank()
        .subheading("Technical Analysis")
        .key_value(
            "Frontend technologies",
            list(&technical.frontend_technologies),
        )
        .key_value("Frameworks detected", list(&technical.frameworks))
        .key_value("Modern features", list(&technical.modern_features))
        .key_value("SEO signals", list(&technical.seo_signals))
        .key_value("Security features", list(&technical.security_features))
        .blank()
        .line("The technical prompt must cover:")
        .numbered([
            "Recommended technology stack",
            "Frontend framework and libraries",
            "Performance optimisation strategies",
            "SEO implementation requirements",
            "Security considerations",
            "Deployment and hosting recommendations",
        ])
        .finish()
}

fn content_prompt(analysis: &SiteAnalysis) -> String {
    let content = &analysis.content;
    PromptBuilder::new()
        .line(
            "You are an expert content strategist. Based on the website analysis below, \
             write a detailed content prompt covering structure, organisation and \
             presentation strategy.",
        )
        .blank()
        .subheading("Content Analysis")
        .key_value("Content density", opt(&content.content_density))
        .key_value("Structure type", opt(&content.structure_type))
        .key_value("Word count", content.word_count.unwrap_or(0))
        .key_value("Content types", list(&content.content_types))
        .key_value("Multimedia", list(&content.multimedia))
        .blank()
        .line("The content prompt must cover:")
        .numbered([
            "Content structure and organisation",
            "Types of content to include",
            "Information architecture principles",
            "Multimedia integration approach",
            "Copywriting tone and style guidelines",
        ])
        .finish()
}

fn ux_prompt(analysis: &SiteAnalysis) -> String {
    let ux = &analysis.ux;
    PromptBuilder::new()
        .line(
            "You are an expert UX researcher. Based on the website analysis below, write a \
             detailed user-experience prompt covering journeys, accessibility and \
             engagement.",
        )
        .blank()
        .subheading("UX Analysis")
        .key_value("Entry points", list(&ux.entry_points))
        .key_value("Conversion points", list(&ux.conversion_points))
        .key_value("Journey complexity", opt(&ux.journey_complexity))
        .key_value(
            "Mobile responsive",
            ux.mobile_responsive.unwrap_or(false),
        )
        .key_value("Mobile optimisation", opt(&ux.mobile_optimization))
        .key_value("Accessibility features", list(&ux.accessibility_features))
        .key_value("Engagement features", list(&ux.engagement_features))
        .blank()
        .line("The UX prompt must cover:")
        .numbered([
            "User journey mapping and flow design",
            "Accessibility requirements and inclusive design",
            "Mobile-first and responsive UX considerations",
            "Conversion optimisation strategies",
            "User engagement and retention features",
        ])
        .finish()
}

fn executive_summary_prompt(analysis: &SiteAnalysis) -> String {
    let info = &analysis.website_info;
    let business = &analysis.business_model;
    PromptBuilder::new()
        .line(
            "You are an expert project manager and technical writer. Create a cohesive \
             executive summary that ties together all aspects of recreating this website.",
        )
        .blank()
        .subheading("Website Information")
        .key_value("Type", opt(&info.website_type))
        .key_value("Purpose", opt(&info.primary_purpose))
        .key_value("Target audience", opt(&info.target_audience))
        .key_value("Industry", opt(&info.industry_category))
        .blank()
        .subheading("Business Model")
        .key_value("Business type", opt(&business.business_type))
        .key_value("Monetisation", list(&business.monetization_strategy))
        .key_value("Value proposition", opt(&business.value_proposition))
        .blank()
        .line("The executive summary must cover:")
        .numbered([
            "Overall project vision and goals",
            "Key requirements and constraints",
            "A high-level implementation roadmap",
            "Critical success factors",
            "Suggested timeline and milestones",
        ])
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{DesignAnalysis, WebsiteInfo};

    #[test]
    fn section_prompts_carry_their_task_type() {
        let analysis = SiteAnalysis::default();
        for kind in SectionKind::CONTENT_SECTIONS {
            let prompt = section_prompt(kind, &analysis);
            assert_eq!(prompt.task, kind.task_type());
            assert!(!prompt.text.is_empty());
        }
    }

    #[test]
    fn design_prompt_embeds_analysis_values() {
        let analysis = SiteAnalysis {
            design: DesignAnalysis {
                color_scheme: Some("dark".into()),
                primary_colors: vec!["#0f0f0f".into(), "#ff5500".into()],
                ..Default::default()
            },
            ..Default::default()
        };
        let prompt = section_prompt(SectionKind::Design, &analysis);
        assert!(prompt.text.contains("dark"));
        assert!(prompt.text.contains("#ff5500"));
        assert!(prompt.text.contains("unknown"), "missing fields degrade gracefully");
    }

    #[test]
    fn executive_summary_uses_site_identity() {
        let analysis = SiteAnalysis {
            website_info: WebsiteInfo {
                website_type: Some("portfolio".into()),
                primary_purpose: Some("showcase work".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let prompt = section_prompt(SectionKind::ExecutiveSummary, &analysis);
        assert_eq!(prompt.task, TaskType::ANALYSIS);
        assert!(prompt.text.contains("portfolio"));
        assert!(prompt.text.contains("showcase work"));
    }
}
