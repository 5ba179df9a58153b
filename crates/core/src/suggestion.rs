//! Prompt construction and reply parsing for the place-suggestion gateway.
//!
//! The generative service is asked for a JSON array of place objects. Models
//! frequently wrap their reply in markdown code fences despite instructions,
//! so parsing first strips any ```json / ``` fencing and trims whitespace.
//! Anything that still fails to parse is surfaced as
//! [`SuggestionParseError`] carrying the raw reply for diagnostics; no
//! recovery beyond the fence strip is attempted.

use serde::{Deserialize, Serialize};

/// One suggested place, as requested from the generative service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceSuggestion {
    /// Name of the place.
    pub name: String,
    /// Short description, at most a couple of sentences.
    pub description: String,
    /// Approximate rating out of 5.
    pub rating: f64,
    /// Category, e.g. "Historical", "Nature", "Adventure", "Food".
    #[serde(rename = "type")]
    pub kind: String,
}

/// The generative reply was not parseable as a suggestion array.
#[derive(Debug, thiserror::Error)]
#[error("generative reply was not valid suggestion JSON")]
pub struct SuggestionParseError {
    /// The unmodified reply text, surfaced to the caller for diagnostics.
    pub raw: String,
}

/// Build the natural-language prompt asking for 5-8 places near `location`.
pub fn build_prompt(location: &str) -> String {
    format!(
        "I am a tourist in {location}. Please suggest 5-8 top tourist places near me.\n\
         Return the response ONLY in valid JSON format.\n\
         The JSON should be an array of objects, where each object has these fields:\n\
         - name: string (Name of the place)\n\
         - description: string (Short enticing description, max 2 sentences)\n\
         - rating: number (Approximate rating out of 5, e.g., 4.5)\n\
         - type: string (e.g., \"Historical\", \"Nature\", \"Adventure\", \"Food\")\n\n\
         Do not include any markdown formatting like ```json. Just the raw JSON string."
    )
}

/// Strip markdown code fences from `text` and parse it as a suggestion array.
pub fn parse_suggestions(text: &str) -> Result<Vec<PlaceSuggestion>, SuggestionParseError> {
    let cleaned = text.replace("```json", "").replace("```", "");
    serde_json::from_str(cleaned.trim()).map_err(|_| SuggestionParseError {
        raw: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fenced_json_reply() {
        let reply = "```json\n[{\"name\":\"X\",\"description\":\"Y\",\"rating\":4.5,\"type\":\"Historical\"}]\n```";

        let suggestions = parse_suggestions(reply).expect("fenced JSON should parse");
        assert_eq!(
            suggestions,
            vec![PlaceSuggestion {
                name: "X".to_string(),
                description: "Y".to_string(),
                rating: 4.5,
                kind: "Historical".to_string(),
            }]
        );
    }

    #[test]
    fn parses_bare_json_reply() {
        let reply = r#"[{"name":"A","description":"B","rating":3.0,"type":"Food"}]"#;

        let suggestions = parse_suggestions(reply).expect("bare JSON should parse");
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].kind, "Food");
    }

    #[test]
    fn malformed_reply_surfaces_raw_text() {
        let reply = "Sorry, I cannot help with that.";

        let err = parse_suggestions(reply).expect_err("prose must not parse");
        assert_eq!(err.raw, reply);
    }

    #[test]
    fn prompt_names_the_location_and_the_fields() {
        let prompt = build_prompt("Lisbon");

        assert!(prompt.contains("tourist in Lisbon"));
        assert!(prompt.contains("5-8"));
        for field in ["name", "description", "rating", "type"] {
            assert!(prompt.contains(field), "prompt must request field {field}");
        }
    }
}
