pub mod models;
pub mod translator;
pub mod word_service;
pub mod word_store;

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::models::{MatchPosition, SynonymRequest, WordSearchRequest};

/// Dump written by `POST /search`, served by `GET /download`.
pub const SEARCH_OUTPUT_FILE: &str = "output.txt";
/// Dump written by `POST /synonyms`, served by `GET /download-synonyms`.
pub const SYNONYM_OUTPUT_FILE: &str = "synonyms_output.txt";

pub const SEARCH_DOWNLOAD_NAME: &str = "malayalam_words_results.txt";
pub const SYNONYM_DOWNLOAD_NAME: &str = "malayalam_synonyms_results.txt";

pub fn search_output_path(results_dir: &Path) -> PathBuf {
    results_dir.join(SEARCH_OUTPUT_FILE)
}

pub fn synonym_output_path(results_dir: &Path) -> PathBuf {
    results_dir.join(SYNONYM_OUTPUT_FILE)
}

/// Writes the search dump: header lines describing the query, a blank line,
/// then one matched word per line. Each search overwrites the previous dump.
pub fn save_search_results(
    results_dir: &Path,
    request: &WordSearchRequest,
    results: &[String],
) -> io::Result<()> {
    let target_path = search_output_path(results_dir);
    fs::create_dir_all(results_dir)?;

    let mut output = BufWriter::new(File::create(&target_path)?);
    writeln!(output, "Input word: {}", request.input_word)?;
    let position = match request.match_position {
        MatchPosition::Start => "first",
        MatchPosition::End => "last",
    };
    writeln!(output, "Matching {} {} letters", position, request.match_length)?;
    if let Some(word_length) = request.word_length {
        writeln!(
            output,
            "Word length: {} {} characters",
            request.operator.as_str(),
            word_length
        )?;
    }
    writeln!(output, "Total matches: {}", results.len())?;
    writeln!(output)?;
    for word in results {
        writeln!(output, "{word}")?;
    }
    output.flush()
}

/// Same layout for the synonym dump.
pub fn save_synonym_results(
    results_dir: &Path,
    request: &SynonymRequest,
    results: &[String],
) -> io::Result<()> {
    let target_path = synonym_output_path(results_dir);
    fs::create_dir_all(results_dir)?;

    let mut output = BufWriter::new(File::create(&target_path)?);
    writeln!(output, "Input word: {}", request.word)?;
    writeln!(output, "Maximum results: {}", request.max_results)?;
    writeln!(output, "Total synonyms found: {}", results.len())?;
    writeln!(output)?;
    for word in results {
        writeln!(output, "{word}")?;
    }
    output.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Operator;

    #[test]
    fn search_dump_has_query_header_and_one_word_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let request = WordSearchRequest {
            input_word: "അവൻ".to_string(),
            match_length: 2,
            word_length: Some(3),
            operator: Operator::Ge,
            match_position: MatchPosition::End,
        };
        let results = vec!["ഇവൻ".to_string(), "ഏവൻ".to_string()];

        save_search_results(dir.path(), &request, &results).unwrap();

        let dump = fs::read_to_string(search_output_path(dir.path())).unwrap();
        let expected = "Input word: അവൻ\n\
                        Matching last 2 letters\n\
                        Word length: >= 3 characters\n\
                        Total matches: 2\n\
                        \n\
                        ഇവൻ\n\
                        ഏവൻ\n";
        assert_eq!(dump, expected);
    }

    #[test]
    fn search_dump_omits_length_line_without_a_target() {
        let dir = tempfile::tempdir().unwrap();
        let request = WordSearchRequest {
            input_word: "അവൻ".to_string(),
            match_length: 1,
            word_length: None,
            operator: Operator::Eq,
            match_position: MatchPosition::Start,
        };

        save_search_results(dir.path(), &request, &[]).unwrap();

        let dump = fs::read_to_string(search_output_path(dir.path())).unwrap();
        assert!(dump.contains("Matching first 1 letters"));
        assert!(!dump.contains("Word length:"));
        assert!(dump.contains("Total matches: 0"));
    }

    #[test]
    fn synonym_dump_layout() {
        let dir = tempfile::tempdir().unwrap();
        let request = SynonymRequest {
            word: "മരം".to_string(),
            max_results: 5,
        };
        let results = vec!["മരംവെട്ടി".to_string()];

        save_synonym_results(dir.path(), &request, &results).unwrap();

        let dump = fs::read_to_string(synonym_output_path(dir.path())).unwrap();
        let expected = "Input word: മരം\n\
                        Maximum results: 5\n\
                        Total synonyms found: 1\n\
                        \n\
                        മരംവെട്ടി\n";
        assert_eq!(dump, expected);
    }

    #[test]
    fn saving_creates_the_results_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("results");
        let request = SynonymRequest {
            word: "മരം".to_string(),
            max_results: 5,
        };

        save_synonym_results(&nested, &request, &[]).unwrap();
        assert!(synonym_output_path(&nested).exists());
    }
}
