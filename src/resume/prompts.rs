//! Prompt templates for résumé generation and section rewrites.
//!
//! User text is interpolated verbatim. Nothing is escaped, so a profile field
//! can carry instructions of its own into the prompt.

use super::types::ProfileInput;

pub const GENERATION_SYSTEM_PROMPT: &str = "You are an expert resume writer and career coach. \
Create optimized, professional resumes tailored to specific job descriptions.";

pub const IMPROVEMENT_SYSTEM_PROMPT: &str =
    "You are a professional resume editor. Provide specific, actionable improvements.";

/// Substituted for an optional link the user left blank.
pub const NOT_PROVIDED: &str = "Not provided";

fn or_not_provided(value: Option<&str>) -> &str {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(NOT_PROVIDED)
}

pub fn build_generation_prompt(profile: &ProfileInput, job_description: &str) -> String {
    format!(
        "Create a professional resume based on the following information:

Personal Information:
Name: {name}
Email: {email}
Phone: {phone}
Location: {location}
LinkedIn: {linkedin}
GitHub: {github}

Summary: {summary}

Work Experience:
{experience}

Education:
{education}

Skills:
{skills}

Target Job Description:
{job_description}

Please generate:
1. A professional summary tailored to the job
2. Optimized bullet points for work experience
3. Skills section prioritized for this role
4. Any additional sections that would strengthen this resume
5. Keywords to include for ATS optimization

Format the response in a structured JSON format with these sections:
- optimizedSummary
- optimizedExperience
- optimizedSkills
- atsKeywords
- suggestions
- fullResumeText",
        name = profile.name,
        email = profile.email,
        phone = profile.phone,
        location = profile.location,
        linkedin = or_not_provided(profile.linkedin.as_deref()),
        github = or_not_provided(profile.github.as_deref()),
        summary = profile.summary,
        experience = profile.experience,
        education = profile.education,
        skills = profile.skills,
        job_description = job_description,
    )
}

pub fn build_improvement_prompt(current_text: &str, section: &str) -> String {
    format!(
        "Improve the following {section} for a resume to be more professional, impactful, and results-oriented:

\"{current_text}\"

Provide 3 improved versions with different tones (professional, achievement-focused, concise)."
    )
}
