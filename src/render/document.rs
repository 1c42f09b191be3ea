use super::text::{escape_html, format_text};
use crate::resume::GenerationResult;

const DOCUMENT_STYLE: &str = "\
body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; max-width: 800px; margin: 40px auto; padding: 20px; }
h1 { color: #2c3e50; border-bottom: 3px solid #3498db; padding-bottom: 10px; }
h3 { color: #34495e; border-bottom: 2px solid #bdc3c7; padding-bottom: 5px; margin-top: 30px; }
.resume-section { margin-bottom: 25px; }
.keyword { background: #ecf0f1; padding: 2px 8px; border-radius: 12px; font-size: 0.9em; margin-right: 5px; }";

const NO_TIPS: &str = "No specific tips available. Make sure to include relevant keywords from the job description.";

fn section(title: &str, body: &str) -> String {
    format!(
        "<div class=\"resume-section\"><h3>{title}</h3><div class=\"resume-content\">{}</div></div>",
        format_text(body)
    )
}

pub fn render_sections(result: &GenerationResult) -> String {
    let mut html = String::new();
    html.push_str(&section("Professional Summary", &result.optimized_summary));
    html.push_str(&section("Work Experience", &result.optimized_experience));
    html.push_str(&section("Skills", &result.optimized_skills));

    if result.has_full_text() {
        html.push_str(&section("Complete Résumé", &result.full_resume_text));
    }

    html
}

pub fn render_ats_tips(result: &GenerationResult) -> String {
    let mut html = String::new();

    if !result.ats_keywords.is_empty() {
        html.push_str("<p><strong>ATS Keywords Found:</strong></p><div class=\"keyword-list\">");
        for keyword in &result.ats_keywords {
            html.push_str(&format!("<span class=\"keyword\">{}</span>", escape_html(keyword)));
        }
        html.push_str("</div>");
    }

    if !result.suggestions.is_empty() {
        html.push_str("<div class=\"suggestions\"><p><strong>AI Suggestions:</strong></p><ul>");
        for suggestion in &result.suggestions {
            html.push_str(&format!("<li>{}</li>", escape_html(suggestion)));
        }
        html.push_str("</ul></div>");
    }

    if html.is_empty() {
        html = format!("<p>{NO_TIPS}</p>");
    }

    html
}

/// Standalone page for download.
pub fn render_document(name: &str, result: &GenerationResult) -> String {
    let name = name.trim();
    let title = if name.is_empty() {
        "Résumé".to_string()
    } else {
        format!("{}'s Résumé", escape_html(name))
    };
    let heading = if name.is_empty() {
        String::new()
    } else {
        format!("<h1>{}</h1>\n", escape_html(name))
    };

    format!(
        "<!DOCTYPE html>
<html>
<head>
<meta charset=\"utf-8\">
<title>{title}</title>
<style>
{DOCUMENT_STYLE}
</style>
</head>
<body>
{heading}{sections}
{tips}
</body>
</html>
",
        sections = render_sections(result),
        tips = render_ats_tips(result),
    )
}

/// Text for copying to the clipboard.
pub fn plain_text(result: &GenerationResult) -> String {
    let mut parts = vec![
        format!("Professional Summary\n{}", result.optimized_summary.trim()),
        format!("Work Experience\n{}", result.optimized_experience.trim()),
        format!("Skills\n{}", result.optimized_skills.trim()),
    ];
    if result.has_full_text() {
        parts.push(format!("Complete Résumé\n{}", result.full_resume_text.trim()));
    }
    parts.join("\n\n")
}

/// `Jane  Doe` becomes `jane-doe-resume.html`; an empty name gives
/// `resume-resume.html`.
pub fn download_filename(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.trim().chars().flat_map(char::to_lowercase) {
        let c = if c.is_whitespace() { '-' } else { c };
        if !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')) {
            continue;
        }
        if c == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(c);
    }

    let slug = slug.trim_matches(|c| c == '-' || c == '.');
    let slug = if slug.is_empty() { "resume" } else { slug };

    format!("{slug}-resume.html")
}
