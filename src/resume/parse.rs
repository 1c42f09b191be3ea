use super::types::{GenerationOutcome, ImprovementResult};
use serde_json::Value;

/// Strict parse of the whole completion as a JSON object.
///
/// Anything else, including valid JSON that is not an object, is kept as raw
/// text.
pub fn parse_generation(raw: &str) -> GenerationOutcome {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(object)) => GenerationOutcome::Structured(object),
        _ => GenerationOutcome::Raw(raw.to_string()),
    }
}

/// One suggestion per paragraph, in order and untrimmed.
pub fn split_suggestions(raw: &str) -> ImprovementResult {
    ImprovementResult {
        suggestions: raw.split("\n\n").map(str::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::{GenerationResult, SENTINEL};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_valid_object_is_structured_and_unchanged() {
        let raw = r#"{"optimizedSummary":"A","optimizedExperience":"B","optimizedSkills":"C","atsKeywords":["x"],"suggestions":["y"],"fullResumeText":"Z"}"#;

        let outcome = parse_generation(raw);

        assert!(outcome.is_structured());
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({
                "optimizedSummary": "A",
                "optimizedExperience": "B",
                "optimizedSkills": "C",
                "atsKeywords": ["x"],
                "suggestions": ["y"],
                "fullResumeText": "Z"
            })
        );
    }

    #[test]
    fn test_object_with_missing_fields_passes_through() {
        let outcome = parse_generation(r#"{"fullResumeText":"only this"}"#);

        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"fullResumeText": "only this"})
        );
    }

    #[test]
    fn test_plain_text_falls_back() {
        let outcome = parse_generation("Just a paragraph.");

        assert_eq!(outcome, GenerationOutcome::Raw("Just a paragraph.".to_string()));
        let result = outcome.to_result();
        assert_eq!(result.full_resume_text, "Just a paragraph.");
        assert_eq!(result.optimized_summary, SENTINEL);
        assert_eq!(result.optimized_experience, SENTINEL);
        assert_eq!(result.optimized_skills, SENTINEL);
        assert!(result.ats_keywords.is_empty());
        assert!(result.suggestions.is_empty());
    }

    #[rstest]
    #[case("42")]
    #[case("[\"a\", \"b\"]")]
    #[case("\"quoted\"")]
    #[case("null")]
    #[case("```json\n{\"optimizedSummary\":\"A\"}\n```")]
    #[case("")]
    fn test_non_object_text_falls_back(#[case] raw: &str) {
        let outcome = parse_generation(raw);
        assert_eq!(outcome.to_result(), GenerationResult::fallback(raw));
    }

    #[test]
    fn test_split_three_paragraphs() {
        let result = split_suggestions("First.\n\nSecond.\n\nThird.");
        assert_eq!(result.suggestions, vec!["First.", "Second.", "Third."]);
    }

    #[test]
    fn test_split_keeps_segments_verbatim() {
        let result = split_suggestions("1. Professional:\nLed X\n\n\n\n2. Concise: X\n");
        assert_eq!(
            result.suggestions,
            vec!["1. Professional:\nLed X", "", "2. Concise: X\n"]
        );
    }

    #[test]
    fn test_split_without_breaks_is_single_suggestion() {
        let result = split_suggestions("Only one version.");
        assert_eq!(result.suggestions, vec!["Only one version."]);
    }
}
