//! Search term validation

use crate::error::Error;
use crate::Result;

/// A validated search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    term: String,
}

impl SearchQuery {
    /// Trim `raw` and check it is non-empty and at most `max_chars` characters.
    pub fn parse(raw: &str, max_chars: usize) -> Result<Self> {
        let term = raw.trim();
        if term.is_empty() {
            return Err(Error::InvalidArgument(
                "search term must not be empty".to_string(),
            ));
        }

        let len = term.chars().count();
        if len > max_chars {
            return Err(Error::InvalidArgument(format!(
                "search term is {} characters long (max {})",
                len, max_chars
            )));
        }

        Ok(Self { term: term.to_string() })
    }

    pub fn term(&self) -> &str {
        &self.term
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_and_blank() {
        for raw in ["", "   ", "\t\n"] {
            let err = SearchQuery::parse(raw, 256).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)), "{:?}", raw);
        }
    }

    #[test]
    fn test_length_limit() {
        assert!(SearchQuery::parse(&"a".repeat(256), 256).is_ok());
        assert!(matches!(
            SearchQuery::parse(&"a".repeat(257), 256),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_length_counts_characters() {
        // 256 two-byte characters are still within the limit
        assert!(SearchQuery::parse(&"é".repeat(256), 256).is_ok());
    }

    #[test]
    fn test_trims_whitespace() {
        let query = SearchQuery::parse("  Perseids \n", 256).unwrap();
        assert_eq!(query.term(), "Perseids");
    }
}
