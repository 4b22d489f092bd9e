//! CLI-specific renderings
//!
//! Token lists have two renderings of their own ("simple", "json"); trees go through
//! the library's format registry so every registered format is available by name.

use sentex_config::TokenFormat;
use sentex_parser::sentex::formats::FormatRegistry;
use sentex_parser::sentex::parsing::ParseTree;
use sentex_parser::sentex::token::Token;

/// Names accepted by `tokens --format`
pub const TOKEN_FORMATS: &[&str] = &["simple", "json"];

pub fn token_format(name: &str) -> Result<TokenFormat, String> {
    match name {
        "simple" => Ok(TokenFormat::Simple),
        "json" => Ok(TokenFormat::Json),
        _ => Err(format!("Unknown token format: {}", name)),
    }
}

/// Render classified tokens; `simple` is one `<word> <CLASS>` line per token
pub fn render_tokens(tokens: &[Token], format: TokenFormat) -> Result<String, String> {
    match format {
        TokenFormat::Simple => Ok(tokens.iter().map(|t| format!("{}\n", t)).collect()),
        TokenFormat::Json => serde_json::to_string_pretty(tokens)
            .map_err(|e| format!("JSON serialization failed: {}", e)),
    }
}

pub fn render_tree(tree: &ParseTree, format: &str) -> Result<String, String> {
    FormatRegistry::with_defaults()
        .serialize(tree, format)
        .map_err(|e| e.to_string())
}

/// `(name, description)` for every registered tree format
pub fn tree_formats() -> Vec<(String, String)> {
    FormatRegistry::with_defaults()
        .describe()
        .map(|(name, text)| (name.to_string(), text.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentex_parser::sentex::parsing::parse;
    use sentex_parser::sentex::testing::sample_dictionary;
    use sentex_parser::sentex::token::WordClass;

    #[test]
    fn test_simple_tokens_use_dictionary_line_format() {
        let tokens = vec![
            Token::new(WordClass::Determiner, "the", 0),
            Token::new(WordClass::Noun, "cat", 4),
        ];

        assert_eq!(
            render_tokens(&tokens, TokenFormat::Simple).unwrap(),
            "the DETERMINER\ncat NOUN\n"
        );
    }

    #[test]
    fn test_json_tokens() {
        let tokens = vec![Token::new(WordClass::Verb, "runs", 0)];
        let output = render_tokens(&tokens, TokenFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["class"], "VERB");
        assert_eq!(value[0]["text"], "runs");
        assert_eq!(value[0]["position"], 0);
    }

    #[test]
    fn test_token_format_names() {
        for name in TOKEN_FORMATS {
            assert!(token_format(name).is_ok());
        }
        assert!(token_format("xml").is_err());
    }

    #[test]
    fn test_unknown_tree_format() {
        let tree = parse("he ran", &sample_dictionary()).unwrap();
        let error = render_tree(&tree, "dot").unwrap_err();
        assert!(error.contains("dot"));
    }

    #[test]
    fn test_tree_formats_are_described() {
        let formats = tree_formats();
        let names: Vec<_> = formats.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["json", "tag", "treeviz", "yaml"]);
        for (name, description) in &formats {
            assert!(!description.is_empty(), "{} has no description", name);
        }
    }
}
