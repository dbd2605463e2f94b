//! The three layout builders. Each one maps the same resume fields to HTML;
//! they differ only in structure and typography, never in which fields are
//! shown. Every builder applies the shared omission rule via [`has`].

use crate::models::resume::ResumeData;

const BASE_CSS: &str = "\
body { margin: 0; padding: 2rem; background: #fff; color: #0f172a; }
h1, h2, h3, p { margin: 0; }
section { margin-top: 1.25rem; }
a { color: #2563eb; text-decoration: none; }
.dates { color: #475569; }
";

const MODERN_CSS: &str = "\
body { font-family: 'Helvetica Neue', Arial, sans-serif; font-size: 0.875rem; }
header { display: flex; gap: 1rem; border-bottom: 2px solid #2563eb; padding-bottom: 1rem; }
.photo { width: 96px; height: 96px; border-radius: 0.5rem; object-fit: cover; border: 1px solid #cbd5e1; }
h1 { font-size: 1.875rem; }
h2 { font-size: 1.125rem; margin-bottom: 0.5rem; }
.contact span { margin-right: 1rem; color: #475569; }
.entry { margin-bottom: 1rem; }
.entry-head { display: flex; justify-content: space-between; }
.company, .school { color: #475569; }
.pill { display: inline-block; background: #dbeafe; color: #1e3a8a; border-radius: 9999px; padding: 0.25rem 0.75rem; margin: 0 0.5rem 0.5rem 0; font-size: 0.75rem; }
";

const CLASSIC_CSS: &str = "\
body { font-family: Georgia, 'Times New Roman', serif; font-size: 0.875rem; }
header { text-align: center; border-bottom: 1px solid #94a3b8; padding-bottom: 0.75rem; }
.photo { width: 80px; height: 80px; border-radius: 50%; object-fit: cover; border: 1px solid #cbd5e1; }
h1 { font-size: 1.5rem; }
h2 { font-size: 0.875rem; text-transform: uppercase; letter-spacing: 0.05em; }
.contact { font-size: 0.75rem; color: #334155; }
.entry { margin-top: 0.5rem; }
.entry-head { display: flex; justify-content: space-between; }
.company, .school { font-style: italic; }
.description { font-size: 0.75rem; margin-top: 0.25rem; }
";

const MINIMAL_CSS: &str = "\
body { font-family: Arial, sans-serif; font-size: 0.75rem; }
.photo { width: 64px; height: 64px; border-radius: 0.25rem; object-fit: cover; border: 1px solid #cbd5e1; }
h1 { font-size: 1.25rem; }
h2 { font-size: 0.75rem; }
.contact div { color: #475569; }
.entry { margin-top: 0.25rem; }
.entry-head { display: flex; justify-content: space-between; }
.company, .school { color: #475569; }
";

/// Two-column header with photo and accent rule; pill-style skills.
pub(crate) fn modern(data: &ResumeData) -> String {
    let mut body = String::new();

    body.push_str("<header>\n");
    if has(&data.photo) {
        body.push_str(&format!(
            "<img class=\"photo\" src=\"{}\" alt=\"Profile\">\n",
            esc(&data.photo)
        ));
    }
    body.push_str("<div class=\"identity\">\n");
    if has(&data.full_name) {
        body.push_str(&format!("<h1>{}</h1>\n", esc(&data.full_name)));
    }
    let contact: Vec<String> = [&data.email, &data.phone, &data.location]
        .iter()
        .filter(|v| has(v))
        .map(|v| format!("<span>{}</span>", esc(v)))
        .collect();
    if !contact.is_empty() {
        body.push_str(&format!("<div class=\"contact\">{}</div>\n", contact.join("")));
    }
    if has(&data.portfolio_link) {
        body.push_str(&format!(
            "<div class=\"portfolio\"><a href=\"{0}\">Portfolio: {0}</a></div>\n",
            esc(&data.portfolio_link)
        ));
    }
    body.push_str("</div>\n</header>\n");

    if has(&data.summary) {
        body.push_str(&format!(
            "<section class=\"summary\">\n<h2>Professional Summary</h2>\n<p>{}</p>\n</section>\n",
            esc(&data.summary)
        ));
    }

    if !data.experience.is_empty() {
        body.push_str("<section class=\"experience\">\n<h2>Experience</h2>\n");
        for exp in &data.experience {
            body.push_str("<article class=\"entry\">\n<div class=\"entry-head\">\n<div>\n");
            if has(&exp.position) {
                body.push_str(&format!("<h3>{}</h3>\n", esc(&exp.position)));
            }
            if has(&exp.company) {
                body.push_str(&format!("<p class=\"company\">{}</p>\n", esc(&exp.company)));
            }
            body.push_str("</div>\n");
            push_dates(&mut body, &exp.start_date, &exp.end_date);
            body.push_str("</div>\n");
            if has(&exp.description) {
                body.push_str(&format!(
                    "<p class=\"description\">{}</p>\n",
                    esc(&exp.description)
                ));
            }
            body.push_str("</article>\n");
        }
        body.push_str("</section>\n");
    }

    if !data.education.is_empty() {
        body.push_str("<section class=\"education\">\n<h2>Education</h2>\n");
        for edu in &data.education {
            body.push_str("<article class=\"entry\">\n<div class=\"entry-head\">\n<div>\n");
            if has(&edu.degree) {
                body.push_str(&format!("<h3>{}</h3>\n", esc(&edu.degree)));
            }
            if has(&edu.school) {
                body.push_str(&format!("<p class=\"school\">{}</p>\n", esc(&edu.school)));
            }
            if has(&edu.field) {
                body.push_str(&format!("<p class=\"field\">{}</p>\n", esc(&edu.field)));
            }
            body.push_str("</div>\n");
            if has(&edu.graduation_date) {
                body.push_str(&format!(
                    "<span class=\"dates\">{}</span>\n",
                    esc(&edu.graduation_date)
                ));
            }
            body.push_str("</div>\n</article>\n");
        }
        body.push_str("</section>\n");
    }

    let skills = present(&data.skills);
    if !skills.is_empty() {
        body.push_str("<section class=\"skills\">\n<h2>Skills</h2>\n<div>\n");
        for skill in &skills {
            body.push_str(&format!("<span class=\"pill\">{}</span>\n", esc(skill)));
        }
        body.push_str("</div>\n</section>\n");
    }

    let certifications = present(&data.certifications);
    if !certifications.is_empty() {
        body.push_str("<section class=\"certifications\">\n<h2>Certifications</h2>\n<div>\n");
        for cert in &certifications {
            body.push_str(&format!("<span class=\"pill\">{}</span>\n", esc(cert)));
        }
        body.push_str("</div>\n</section>\n");
    }

    page("modern", MODERN_CSS, &body)
}

/// Centered serif header; contact details joined with pipes, skills with
/// bullet separators.
pub(crate) fn classic(data: &ResumeData) -> String {
    let mut body = String::new();

    body.push_str("<header>\n");
    if has(&data.photo) {
        body.push_str(&format!(
            "<img class=\"photo\" src=\"{}\" alt=\"Profile\">\n",
            esc(&data.photo)
        ));
    }
    if has(&data.full_name) {
        body.push_str(&format!("<h1>{}</h1>\n", esc(&data.full_name)));
    }
    let contact: Vec<String> = [&data.email, &data.phone, &data.location]
        .iter()
        .filter(|v| has(v))
        .map(|v| esc(v))
        .collect();
    if !contact.is_empty() {
        body.push_str(&format!(
            "<div class=\"contact\">{}</div>\n",
            contact.join(" | ")
        ));
    }
    if has(&data.portfolio_link) {
        body.push_str(&format!(
            "<div class=\"portfolio\"><a href=\"{0}\">{0}</a></div>\n",
            esc(&data.portfolio_link)
        ));
    }
    body.push_str("</header>\n");

    if has(&data.summary) {
        body.push_str(&format!(
            "<section class=\"summary\">\n<h2>Professional Summary</h2>\n<p>{}</p>\n</section>\n",
            esc(&data.summary)
        ));
    }

    if !data.experience.is_empty() {
        body.push_str("<section class=\"experience\">\n<h2>Experience</h2>\n");
        for exp in &data.experience {
            body.push_str("<div class=\"entry\">\n<div class=\"entry-head\">\n");
            if has(&exp.position) {
                body.push_str(&format!("<strong>{}</strong>\n", esc(&exp.position)));
            }
            push_dates(&mut body, &exp.start_date, &exp.end_date);
            body.push_str("</div>\n");
            if has(&exp.company) {
                body.push_str(&format!("<p class=\"company\">{}</p>\n", esc(&exp.company)));
            }
            if has(&exp.description) {
                body.push_str(&format!(
                    "<p class=\"description\">{}</p>\n",
                    esc(&exp.description)
                ));
            }
            body.push_str("</div>\n");
        }
        body.push_str("</section>\n");
    }

    if !data.education.is_empty() {
        body.push_str("<section class=\"education\">\n<h2>Education</h2>\n");
        for edu in &data.education {
            body.push_str("<div class=\"entry\">\n<div class=\"entry-head\">\n");
            if has(&edu.degree) {
                body.push_str(&format!("<strong>{}</strong>\n", esc(&edu.degree)));
            }
            if has(&edu.graduation_date) {
                body.push_str(&format!(
                    "<span class=\"dates\">{}</span>\n",
                    esc(&edu.graduation_date)
                ));
            }
            body.push_str("</div>\n");
            if has(&edu.school) {
                body.push_str(&format!("<p class=\"school\">{}</p>\n", esc(&edu.school)));
            }
            if has(&edu.field) {
                body.push_str(&format!("<p class=\"field\">{}</p>\n", esc(&edu.field)));
            }
            body.push_str("</div>\n");
        }
        body.push_str("</section>\n");
    }

    let skills = present(&data.skills);
    if !skills.is_empty() {
        let joined: Vec<String> = skills.iter().map(|s| esc(s)).collect();
        body.push_str(&format!(
            "<section class=\"skills\">\n<h2>Skills</h2>\n<p>{}</p>\n</section>\n",
            joined.join(" \u{2022} ")
        ));
    }

    let certifications = present(&data.certifications);
    if !certifications.is_empty() {
        let joined: Vec<String> = certifications.iter().map(|s| esc(s)).collect();
        body.push_str(&format!(
            "<section class=\"certifications\">\n<h2>Certifications</h2>\n<p>{}</p>\n</section>\n",
            joined.join(" \u{2022} ")
        ));
    }

    page("classic", CLASSIC_CSS, &body)
}

/// Compact stacked list with uppercase section labels.
pub(crate) fn minimal(data: &ResumeData) -> String {
    let mut body = String::new();

    body.push_str("<header>\n");
    if has(&data.photo) {
        body.push_str(&format!(
            "<img class=\"photo\" src=\"{}\" alt=\"Profile\">\n",
            esc(&data.photo)
        ));
    }
    if has(&data.full_name) {
        body.push_str(&format!("<h1>{}</h1>\n", esc(&data.full_name)));
    }
    body.push_str("<div class=\"contact\">\n");
    for value in [&data.email, &data.phone, &data.location] {
        if has(value) {
            body.push_str(&format!("<div>{}</div>\n", esc(value)));
        }
    }
    if has(&data.portfolio_link) {
        body.push_str(&format!(
            "<div><a href=\"{0}\">{0}</a></div>\n",
            esc(&data.portfolio_link)
        ));
    }
    body.push_str("</div>\n</header>\n");

    if has(&data.summary) {
        body.push_str(&format!(
            "<section class=\"summary\">\n<h2>SUMMARY</h2>\n<p>{}</p>\n</section>\n",
            esc(&data.summary)
        ));
    }

    if !data.experience.is_empty() {
        body.push_str("<section class=\"experience\">\n<h2>EXPERIENCE</h2>\n");
        for exp in &data.experience {
            body.push_str("<div class=\"entry\">\n<div class=\"entry-head\">\n");
            if has(&exp.position) {
                body.push_str(&format!("<strong>{}</strong>\n", esc(&exp.position)));
            }
            push_dates(&mut body, &exp.start_date, &exp.end_date);
            body.push_str("</div>\n");
            if has(&exp.company) {
                body.push_str(&format!("<p class=\"company\">{}</p>\n", esc(&exp.company)));
            }
            if has(&exp.description) {
                body.push_str(&format!(
                    "<p class=\"description\">{}</p>\n",
                    esc(&exp.description)
                ));
            }
            body.push_str("</div>\n");
        }
        body.push_str("</section>\n");
    }

    if !data.education.is_empty() {
        body.push_str("<section class=\"education\">\n<h2>EDUCATION</h2>\n");
        for edu in &data.education {
            body.push_str("<div class=\"entry\">\n<div class=\"entry-head\">\n");
            if has(&edu.degree) {
                body.push_str(&format!("<strong>{}</strong>\n", esc(&edu.degree)));
            }
            if has(&edu.graduation_date) {
                body.push_str(&format!(
                    "<span class=\"dates\">{}</span>\n",
                    esc(&edu.graduation_date)
                ));
            }
            body.push_str("</div>\n");
            if has(&edu.school) {
                body.push_str(&format!("<p class=\"school\">{}</p>\n", esc(&edu.school)));
            }
            if has(&edu.field) {
                body.push_str(&format!("<p class=\"field\">{}</p>\n", esc(&edu.field)));
            }
            body.push_str("</div>\n");
        }
        body.push_str("</section>\n");
    }

    let skills = present(&data.skills);
    if !skills.is_empty() {
        let joined: Vec<String> = skills.iter().map(|s| esc(s)).collect();
        body.push_str(&format!(
            "<section class=\"skills\">\n<h2>SKILLS</h2>\n<p>{}</p>\n</section>\n",
            joined.join(", ")
        ));
    }

    let certifications = present(&data.certifications);
    if !certifications.is_empty() {
        let joined: Vec<String> = certifications.iter().map(|s| esc(s)).collect();
        body.push_str(&format!(
            "<section class=\"certifications\">\n<h2>CERTIFICATIONS</h2>\n<p>{}</p>\n</section>\n",
            joined.join(", ")
        ));
    }

    page("minimal", MINIMAL_CSS, &body)
}

fn page(variant: &str, variant_css: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Resume</title>\n<style>\n{BASE_CSS}{variant_css}</style>\n</head>\n\
         <body class=\"resume {variant}\">\n{body}</body>\n</html>\n"
    )
}

fn has(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Non-blank entries of a string sequence, in input order.
fn present(values: &[String]) -> Vec<&String> {
    values.iter().filter(|v| has(v)).collect()
}

fn push_dates(body: &mut String, start: &str, end: &str) {
    let range = match (has(start), has(end)) {
        (true, true) => format!("{} - {}", esc(start), esc(end)),
        (true, false) => esc(start),
        (false, true) => esc(end),
        (false, false) => return,
    };
    body.push_str(&format!("<span class=\"dates\">{range}</span>\n"));
}

fn esc(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
