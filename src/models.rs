use serde::{Deserialize, Serialize};

/// Comparison applied to a candidate's character length when the request
/// carries a `word_length`. A value outside this set is rejected during
/// deserialization, before it reaches the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Operator {
    #[default]
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "<=")]
    Le,
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::Ge => ">=",
            Operator::Le => "<=",
        }
    }
}

/// Whether the match pattern is drawn from the start or the end of the
/// input word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPosition {
    Start,
    #[default]
    End,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WordSearchRequest {
    pub input_word: String,
    pub match_length: usize,
    #[serde(default)]
    pub word_length: Option<usize>,
    #[serde(default)]
    pub operator: Operator,
    #[serde(default)]
    pub match_position: MatchPosition,
}

#[derive(Debug, Serialize)]
pub struct WordSearchResponse {
    pub message: String,
    pub input_word: String,
    pub match_length: usize,
    pub word_length: Option<usize>,
    pub operator: Operator,
    pub match_position: MatchPosition,
    pub total_matches: usize,
    pub output_file: String,
}

fn default_max_results() -> usize {
    50
}

#[derive(Debug, Clone, Deserialize)]
pub struct SynonymRequest {
    pub word: String,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

#[derive(Debug, Serialize)]
pub struct SynonymResponse {
    pub message: String,
    pub input_word: String,
    pub total_matches: usize,
    pub output_file: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_request_defaults() {
        let request: WordSearchRequest =
            serde_json::from_str(r#"{"input_word": "അവൻ", "match_length": 2}"#).unwrap();
        assert_eq!(request.operator, Operator::Eq);
        assert_eq!(request.match_position, MatchPosition::End);
        assert_eq!(request.word_length, None);
    }

    #[test]
    fn unknown_operator_is_rejected() {
        let result = serde_json::from_str::<WordSearchRequest>(
            r#"{"input_word": "അവൻ", "match_length": 2, "operator": "!="}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn operators_round_trip_their_symbols() {
        for (symbol, operator) in [
            ("=", Operator::Eq),
            (">", Operator::Gt),
            ("<", Operator::Lt),
            (">=", Operator::Ge),
            ("<=", Operator::Le),
        ] {
            let parsed: Operator = serde_json::from_str(&format!("\"{symbol}\"")).unwrap();
            assert_eq!(parsed, operator);
            assert_eq!(operator.as_str(), symbol);
        }
    }

    #[test]
    fn synonym_request_default_budget() {
        let request: SynonymRequest = serde_json::from_str(r#"{"word": "അവൻ"}"#).unwrap();
        assert_eq!(request.max_results, 50);
    }
}
