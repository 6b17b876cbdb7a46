//! Static fallback templates, returned when every model candidate is
//! exhausted without an accepted result.
//!
//! Generation failure must stay invisible to end users: instead of an error
//! they receive pre-authored boilerplate covering the general topic of the
//! task. The texts mirror the per-section content the orchestrator would
//! normally produce, just without any site-specific detail.

use crate::task::TaskType;

/// Pre-authored template for `task`. Always non-empty.
pub fn fallback_for(task: &TaskType) -> &'static str {
    match task.as_str() {
        "design" => DESIGN,
        "functionality" => FUNCTIONALITY,
        "technical" => TECHNICAL,
        "content" => CONTENT,
        "ux" => UX,
        "analysis" => ANALYSIS,
        _ => GENERIC,
    }
}

const DESIGN: &str = "\
Design a modern, responsive website with a clear visual identity.

Visual style:
- Choose a restrained colour palette with one accent colour and a neutral base.
- Use a legible sans-serif typeface with a consistent heading hierarchy.
- Keep spacing generous and align content to a simple grid.

Layout:
- Header with primary navigation, content area, and footer.
- Responsive behaviour down to small viewports, with a collapsing menu.

Components:
- Standard web components: navigation, buttons, forms and content sections.
- Consistent interaction states, including hover and focus styling.";

const FUNCTIONALITY: &str = "\
Implement the core functionality expected of a site in this category.

Features:
- Clear primary navigation with intuitive user flows.
- Forms with client-side validation and helpful error messages.
- Search or filtering where the content volume justifies it.

Interactions:
- Keep interactive elements predictable and responsive to input.
- Provide visible feedback for every user action (loading, success, failure states).";

const TECHNICAL: &str = "\
Technical implementation guidelines:

- Build on semantic HTML5, modern CSS and JavaScript.
- Prefer an established frontend framework appropriate to the project size.
- Optimise for fast first load: compress assets, lazy-load media, cache aggressively.
- Follow web standards, accessibility requirements and cross-browser compatibility.
- Automate deployment and keep the implementation behind version control.";

const CONTENT: &str = "\
Content strategy guidelines:

- Organise content under clear headings with a logical hierarchy.
- Keep copy concise; lead with the information users came for.
- Mix text with relevant imagery and, where useful, short multimedia content.
- Maintain a consistent tone of voice across all pages.
- Ensure every page supports a concrete user goal.";

const UX: &str = "\
User experience guidelines:

- Map the primary user journey from entry point to conversion and remove friction.
- Follow WCAG guidance: keyboard navigation, alternative text, sufficient contrast.
- Treat mobile as a first-class experience, not an afterthought.
- Keep page weight low; perceived performance is part of the user experience.
- Validate assumptions with usability testing before polishing visuals.";

const ANALYSIS: &str = "\
Project vision:
Create a modern website that serves its primary purpose for the target audience.

Key requirements:
- Responsive design across devices, fast load times and professional appearance.
- Functionality scoped to concrete user goals.

Implementation strategy:
- Use modern web technologies, iterate in small increments and test continuously.
- Ensure accessibility compliance and verify behaviour across browsers.

Success factors:
- A user-centred design process, performance budgets and maintainable code.";

const GENERIC: &str = "\
Produce a complete, self-contained description of the requested aspect of the
website, covering purpose, structure and concrete implementation guidance.
Follow modern web development best practices, keep the result actionable for
a developer, and note any assumptions that need validation.";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::MIN_ACCEPTED_LEN;

    #[test]
    fn every_template_is_substantial() {
        for name in [
            "design",
            "functionality",
            "technical",
            "content",
            "ux",
            "analysis",
            "something_else",
        ] {
            let text = fallback_for(&TaskType::new(name));
            assert!(text.len() >= MIN_ACCEPTED_LEN, "template for `{name}` too short");
        }
    }
}
