//! The canonical resume shape shared by the preview renderer and the
//! AI reformat round trip. Wire names are camelCase to match the form payload.

use serde::{Deserialize, Serialize};

/// A single resume held in memory for the duration of one request.
/// Every field is optional on the wire; absent fields decode to their
/// defaults so a sparse form payload is always a valid instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Opaque embedded image payload (a data URL from the form).
    /// Carried through verbatim, never interpreted.
    pub photo: String,
    pub portfolio_link: String,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
}

/// One work-experience entry. `id` is caller-supplied list identity for
/// stable edits on the client; it is never required to be globally unique.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

/// One education entry, same `id` convention as [`ExperienceEntry`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub field: String,
    pub graduation_date: String,
}

impl ResumeData {
    /// True when the resume carries nothing worth sending to the model:
    /// no name, no experience entries, and no education entries.
    pub fn is_empty_for_reformat(&self) -> bool {
        self.full_name.trim().is_empty() && self.experience.is_empty() && self.education.is_empty()
    }
}
