use regex::{Regex, RegexBuilder};

use crate::error::{EngineError, Result};

/// How the free-text query is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueryMode {
    /// Metacharacters are escaped; the query matches as a plain substring.
    #[default]
    Literal,
    /// The raw query is compiled as a regular expression. Power-user mode;
    /// a pattern that fails to compile degrades to an empty result instead
    /// of an error.
    Regex,
}

/// Compile the query for case-insensitive matching.
pub(crate) fn compile_query(query: &str, mode: QueryMode) -> Result<Regex> {
    let pattern = match mode {
        QueryMode::Literal => regex::escape(query),
        QueryMode::Regex => query.to_string(),
    };

    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| EngineError::InvalidRegex { pattern, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_mode_escapes_metacharacters() {
        let re = compile_query("1/2 (environ)", QueryMode::Literal).unwrap();
        assert!(re.is_match("ajouter 1/2 (environ) citron"));

        let re = compile_query("a.c", QueryMode::Literal).unwrap();
        assert!(!re.is_match("abc"));
        assert!(re.is_match("a.c"));
    }

    #[test]
    fn regex_mode_keeps_metacharacters() {
        let re = compile_query("pom+e", QueryMode::Regex).unwrap();
        assert!(re.is_match("pomme"));
        assert!(re.is_match("pome"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let re = compile_query("Tomate", QueryMode::Literal).unwrap();
        assert!(re.is_match("tomates pelées"));
    }

    #[test]
    fn unbalanced_group_fails_in_regex_mode_only() {
        assert!(matches!(
            compile_query("(pomme", QueryMode::Regex),
            Err(EngineError::InvalidRegex { .. })
        ));
        assert!(compile_query("(pomme", QueryMode::Literal).is_ok());
    }
}
