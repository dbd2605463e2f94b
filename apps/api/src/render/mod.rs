//! Template renderer — pure mapping from a resume to a printable HTML
//! document in one of three layouts.
//!
//! All variants share one omission rule: a section whose backing field or
//! sequence is empty is absent from the output, never an empty heading, and
//! no variant shows a field another variant hides.

pub mod templates;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeData;

/// The three supported layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateVariant {
    /// Two-column header with photo and a colored accent rule.
    Modern,
    /// Centered serif header with pipe-separated contact details.
    Classic,
    /// Compact stacked list with uppercase section labels.
    Minimal,
}

impl TemplateVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateVariant::Modern => "modern",
            TemplateVariant::Classic => "classic",
            TemplateVariant::Minimal => "minimal",
        }
    }
}

impl FromStr for TemplateVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "modern" => Ok(TemplateVariant::Modern),
            "classic" => Ok(TemplateVariant::Classic),
            "minimal" => Ok(TemplateVariant::Minimal),
            other => Err(format!(
                "unknown template '{other}' (expected modern, classic, or minimal)"
            )),
        }
    }
}

/// Renders the resume into a complete standalone HTML document.
///
/// Pure and infallible: identical input yields byte-identical output, the
/// input is never mutated, and an entirely empty resume still produces a
/// valid (near-blank) page.
pub fn render(data: &ResumeData, variant: TemplateVariant) -> String {
    match variant {
        TemplateVariant::Modern => templates::modern(data),
        TemplateVariant::Classic => templates::classic(data),
        TemplateVariant::Minimal => templates::minimal(data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{EducationEntry, ExperienceEntry};

    const ALL_VARIANTS: [TemplateVariant; 3] = [
        TemplateVariant::Modern,
        TemplateVariant::Classic,
        TemplateVariant::Minimal,
    ];

    fn full_resume() -> ResumeData {
        ResumeData {
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "555-0100".to_string(),
            location: "Lisbon".to_string(),
            photo: "data:image/png;base64,AAAA".to_string(),
            portfolio_link: "https://jane.dev".to_string(),
            summary: "Engineer with a decade of shipping.".to_string(),
            experience: vec![ExperienceEntry {
                id: "1".to_string(),
                company: "Acme".to_string(),
                position: "Engineer".to_string(),
                start_date: "2020".to_string(),
                end_date: "2023".to_string(),
                description: "built things".to_string(),
            }],
            education: vec![EducationEntry {
                id: "1".to_string(),
                school: "State University".to_string(),
                degree: "BSc".to_string(),
                field: "Computer Science".to_string(),
                graduation_date: "2019".to_string(),
            }],
            skills: vec!["Go".to_string(), "Rust".to_string()],
            certifications: vec!["CKA".to_string()],
        }
    }

    #[test]
    fn test_render_is_pure() {
        let data = full_resume();
        for variant in ALL_VARIANTS {
            assert_eq!(render(&data, variant), render(&data, variant));
        }
    }

    #[test]
    fn test_empty_resume_renders_without_sections() {
        let empty = ResumeData::default();
        for variant in ALL_VARIANTS {
            let html = render(&empty, variant);
            assert!(html.starts_with("<!DOCTYPE html>"));
            for section in ["summary", "experience", "education", "skills", "certifications"] {
                assert!(
                    !html.contains(&format!("class=\"{section}\"")),
                    "{} should omit the {section} section for an empty resume",
                    variant.as_str()
                );
            }
        }
    }

    #[test]
    fn test_full_resume_renders_every_section_in_every_variant() {
        let data = full_resume();
        for variant in ALL_VARIANTS {
            let html = render(&data, variant);
            for section in ["summary", "experience", "education", "skills", "certifications"] {
                assert!(
                    html.contains(&format!("class=\"{section}\"")),
                    "{} is missing the {section} section",
                    variant.as_str()
                );
            }
            assert!(html.contains("Jane Doe"));
            assert!(html.contains("https://jane.dev"));
            // No variant hides a field another shows: education field
            // included, per the shared contract.
            assert!(html.contains("Computer Science"));
        }
    }

    #[test]
    fn test_one_experience_no_education_no_skills() {
        let data = ResumeData {
            experience: vec![ExperienceEntry {
                id: "1".to_string(),
                company: "Acme".to_string(),
                position: "Engineer".to_string(),
                start_date: "2020".to_string(),
                end_date: "2023".to_string(),
                description: "built things".to_string(),
            }],
            ..Default::default()
        };
        for variant in [TemplateVariant::Minimal, TemplateVariant::Modern] {
            let html = render(&data, variant);
            assert!(!html.contains("class=\"education\""));
            assert!(!html.contains("class=\"skills\""));
            assert!(html.contains("class=\"experience\""));
            assert!(html.contains("Acme"));
        }
    }

    #[test]
    fn test_user_text_is_html_escaped() {
        let data = ResumeData {
            full_name: "Jane <script>alert(1)</script>".to_string(),
            ..Default::default()
        };
        for variant in ALL_VARIANTS {
            let html = render(&data, variant);
            assert!(!html.contains("<script>alert(1)</script>"));
            assert!(html.contains("&lt;script&gt;"));
        }
    }

    #[test]
    fn test_blank_skill_entries_are_skipped() {
        let data = ResumeData {
            full_name: "Jane Doe".to_string(),
            skills: vec!["Go".to_string(), "".to_string(), "Rust".to_string()],
            ..Default::default()
        };
        for variant in ALL_VARIANTS {
            let html = render(&data, variant);
            assert!(html.contains("Go"));
            assert!(html.contains("Rust"));
        }
    }

    #[test]
    fn test_variant_tag_parsing() {
        assert_eq!("modern".parse(), Ok(TemplateVariant::Modern));
        assert_eq!("classic".parse(), Ok(TemplateVariant::Classic));
        assert_eq!("minimal".parse(), Ok(TemplateVariant::Minimal));
        assert!("Modern".parse::<TemplateVariant>().is_err());
        assert!("brutalist".parse::<TemplateVariant>().is_err());
    }

    #[test]
    fn test_variant_serde_is_lowercase() {
        let variant: TemplateVariant = serde_json::from_str(r#""classic""#).unwrap();
        assert_eq!(variant, TemplateVariant::Classic);
        assert_eq!(
            serde_json::to_string(&TemplateVariant::Minimal).unwrap(),
            r#""minimal""#
        );
    }
}
