//! Prompt text and response schema sent with every generation request.

use serde_json::{Value, json};

pub fn build_prompt(theme: &str) -> String {
    format!(
        "Create a color palette with 5-6 colors for the theme: \"{theme}\". \
         For each color, provide a name and a short description of its mood or use case. \
         The hex code must be a valid 6-digit hex string starting with #."
    )
}

/// Gemini `responseSchema`: an array of `{hex, name, description}` objects.
pub fn response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "hex": {
                    "type": "STRING",
                    "description": "The hex color code, e.g., #RRGGBB"
                },
                "name": {
                    "type": "STRING",
                    "description": "A creative name for the color."
                },
                "description": {
                    "type": "STRING",
                    "description": "A short description of the color's mood or application."
                }
            },
            "required": ["hex", "name", "description"]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_quotes_theme() {
        let p = build_prompt("Retro Arcade");
        assert!(p.starts_with("Create a color palette with 5-6 colors for the theme: \"Retro Arcade\". For each"));
        assert!(p.ends_with("valid 6-digit hex string starting with #."));
    }

    #[test]
    fn test_schema_requires_all_fields() {
        let s = response_schema();
        assert_eq!(s["type"], "ARRAY");
        assert_eq!(s["items"]["required"], json!(["hex", "name", "description"]));
        for field in ["hex", "name", "description"] {
            assert_eq!(s["items"]["properties"][field]["type"], "STRING");
        }
    }
}
