use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Placeholder for the structured fields when the model answered in prose.
pub const SENTINEL: &str = "See full response";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub summary: String,
    pub experience: String,
    pub education: String,
    pub skills: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub user_info: ProfileInput,
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub optimized_summary: String,
    pub optimized_experience: String,
    pub optimized_skills: String,
    pub ats_keywords: Vec<String>,
    pub suggestions: Vec<String>,
    pub full_resume_text: String,
}

impl GenerationResult {
    /// Result for a completion that was not a JSON object.
    pub fn fallback(raw: impl Into<String>) -> Self {
        Self {
            optimized_summary: SENTINEL.to_string(),
            optimized_experience: SENTINEL.to_string(),
            optimized_skills: SENTINEL.to_string(),
            ats_keywords: Vec::new(),
            suggestions: Vec::new(),
            full_resume_text: raw.into(),
        }
    }

    /// Reads the known fields out of an arbitrary object without rejecting it.
    ///
    /// Missing text fields become empty; non-string scalars are written out as
    /// JSON. List fields accept an array or a single string.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        Self {
            optimized_summary: text_field(object, "optimizedSummary"),
            optimized_experience: text_field(object, "optimizedExperience"),
            optimized_skills: text_field(object, "optimizedSkills"),
            ats_keywords: list_field(object, "atsKeywords"),
            suggestions: list_field(object, "suggestions"),
            full_resume_text: text_field(object, "fullResumeText"),
        }
    }

    pub fn has_full_text(&self) -> bool {
        !self.full_resume_text.is_empty() && self.full_resume_text != SENTINEL
    }
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn text_field(object: &Map<String, Value>, key: &str) -> String {
    object.get(key).map(value_to_text).unwrap_or_default()
}

fn list_field(object: &Map<String, Value>, key: &str) -> Vec<String> {
    match object.get(key) {
        Some(Value::Array(items)) => items.iter().map(value_to_text).collect(),
        Some(Value::String(s)) if !s.is_empty() => vec![s.clone()],
        _ => Vec::new(),
    }
}

/// What came back from a generation call.
///
/// `Structured` carries the model's object untouched; the model is trusted to
/// have followed the requested schema. `Raw` carries text that was not a JSON
/// object and serializes as [`GenerationResult::fallback`].
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome {
    Structured(Map<String, Value>),
    Raw(String),
}

impl GenerationOutcome {
    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Structured(_))
    }

    pub fn to_result(&self) -> GenerationResult {
        match self {
            Self::Structured(object) => GenerationResult::from_object(object),
            Self::Raw(text) => GenerationResult::fallback(text.clone()),
        }
    }
}

impl Serialize for GenerationOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Structured(object) => object.serialize(serializer),
            Self::Raw(text) => GenerationResult::fallback(text.as_str()).serialize(serializer),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementRequest {
    #[serde(default)]
    pub current_text: String,
    #[serde(default)]
    pub section: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImprovementResult {
    pub suggestions: Vec<String>,
}
