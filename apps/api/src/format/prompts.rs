//! Prompt construction for the resume reformat call.
//!
//! The builder is deterministic: the same resume always serializes to the
//! same prompt string, with literal placeholders standing in for empty
//! fields so the model never sees a dangling label.

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::models::resume::ResumeData;

/// Placeholder for an empty scalar field.
pub const NOT_PROVIDED: &str = "Not provided";
/// Placeholder lines for empty sequences.
pub const NO_EXPERIENCE: &str = "No experience provided";
pub const NO_EDUCATION: &str = "No education provided";
pub const NO_SKILLS: &str = "No skills provided";
pub const NO_CERTIFICATIONS: &str = "No certifications provided";

const FORMAT_PROMPT_HEADER: &str = "\
Please improve and format the following resume data to be more professional, impactful, and ATS-optimized.
Enhance the descriptions with strong action verbs and quantifiable achievements where possible.
Keep the same structure but improve the content quality.
";

const FORMAT_PROMPT_FOOTER: &str = r#"
Please provide the improved content in JSON format with the same structure, focusing on:
1. Professional language and tone
2. Strong action verbs for experience descriptions
3. Quantifiable achievements and metrics
4. ATS-friendly formatting
5. Concise and impactful summaries

Return ONLY valid JSON with no additional text. The JSON object must have exactly this layout:
{"fullName": string, "email": string, "phone": string, "location": string, "summary": string, "experience": [{"company": string, "position": string, "startDate": string, "endDate": string, "description": string}], "education": [{"school": string, "degree": string, "field": string, "graduationDate": string}], "skills": [string], "certifications": [string]}"#;

/// System prompt for the reformat call — persona plus the JSON-only rules.
pub fn format_system() -> String {
    format!("You are a professional resume writer and ATS optimization expert. {JSON_ONLY_SYSTEM}")
}

/// Serializes a resume into the fixed-format prompt block: identity fields,
/// summary, experience entries in input order, education entries, then
/// skills and certifications as single joined lines.
pub fn build_format_prompt(data: &ResumeData) -> String {
    let mut prompt = String::new();
    prompt.push_str(FORMAT_PROMPT_HEADER);

    prompt.push_str("\nResume Data:\n");
    prompt.push_str(&format!("- Full Name: {}\n", scalar(&data.full_name)));
    prompt.push_str(&format!("- Email: {}\n", scalar(&data.email)));
    prompt.push_str(&format!("- Phone: {}\n", scalar(&data.phone)));
    prompt.push_str(&format!("- Location: {}\n", scalar(&data.location)));
    prompt.push_str(&format!("- Summary: {}\n", scalar(&data.summary)));

    prompt.push_str("\nExperience:\n");
    if data.experience.is_empty() {
        prompt.push_str(NO_EXPERIENCE);
        prompt.push('\n');
    } else {
        for exp in &data.experience {
            prompt.push_str(&format!("- Company: {}\n", scalar(&exp.company)));
            prompt.push_str(&format!("  Position: {}\n", scalar(&exp.position)));
            prompt.push_str(&format!(
                "  Duration: {} to {}\n",
                scalar(&exp.start_date),
                scalar(&exp.end_date)
            ));
            prompt.push_str(&format!("  Description: {}\n", scalar(&exp.description)));
        }
    }

    prompt.push_str("\nEducation:\n");
    if data.education.is_empty() {
        prompt.push_str(NO_EDUCATION);
        prompt.push('\n');
    } else {
        for edu in &data.education {
            prompt.push_str(&format!("- School: {}\n", scalar(&edu.school)));
            prompt.push_str(&format!("  Degree: {}\n", scalar(&edu.degree)));
            prompt.push_str(&format!("  Field: {}\n", scalar(&edu.field)));
            prompt.push_str(&format!("  Graduation: {}\n", scalar(&edu.graduation_date)));
        }
    }

    prompt.push_str(&format!("\nSkills: {}\n", joined(&data.skills, NO_SKILLS)));
    prompt.push_str(&format!(
        "\nCertifications: {}\n",
        joined(&data.certifications, NO_CERTIFICATIONS)
    ));

    prompt.push_str(FORMAT_PROMPT_FOOTER);
    prompt
}

fn scalar(value: &str) -> &str {
    if value.trim().is_empty() {
        NOT_PROVIDED
    } else {
        value
    }
}

fn joined(values: &[String], placeholder: &'static str) -> String {
    if values.is_empty() {
        placeholder.to_string()
    } else {
        values.join(", ")
    }
}
