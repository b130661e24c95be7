//! `.env` marker file parsing.
//!
//! The marker file doubles as the project's configuration unit: the `config`
//! module exposes every key parsed here.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::Path;

/// Parser for `KEY=value` environment files.
///
/// # Supported Formats
///
/// - Simple: `KEY=value`
/// - Exported: `export KEY=value`
/// - Quoted: `KEY="value with spaces"` or `KEY='single quoted'`
/// - Trailing comments: `KEY=value # note`, `KEY="value" # note`
/// - Full-line comments and blank lines are skipped
///
/// # Example
///
/// ```
/// use envprobe::config::EnvFileParser;
///
/// let content = r#"
/// # Wallet
/// export WALLET_PATH="./wallets/main.json"
/// NETWORK=devnet # default
/// "#;
///
/// let vars = EnvFileParser::parse(content).unwrap();
/// assert_eq!(vars.get("WALLET_PATH").map(String::as_str), Some("./wallets/main.json"));
/// assert_eq!(vars.get("NETWORK").map(String::as_str), Some("devnet"));
/// ```
pub struct EnvFileParser;

impl EnvFileParser {
    /// Parse env file content into an ordered map. Later keys win.
    pub fn parse(content: &str) -> Result<BTreeMap<String, String>> {
        let mut vars = BTreeMap::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = Self::parse_line(line) {
                vars.insert(key, value);
            }
        }

        Ok(vars)
    }

    fn parse_line(line: &str) -> Option<(String, String)> {
        let line = line.strip_prefix("export ").unwrap_or(line);
        let (key, value) = line.split_once('=')?;
        let key = key.trim();
        if key.is_empty() || key.contains(char::is_whitespace) {
            return None;
        }

        Some((key.to_string(), Self::value(value.trim())))
    }

    fn value(raw: &str) -> String {
        for quote in ['"', '\''] {
            // A quoted value ends at its closing quote; anything after it is ignored.
            if let Some(rest) = raw.strip_prefix(quote) {
                if let Some(end) = rest.find(quote) {
                    return rest[..end].to_string();
                }
            }
        }

        match raw.find(" #") {
            Some(idx) => raw[..idx].trim_end().to_string(),
            None => raw.to_string(),
        }
    }

    /// Load and parse an env file from a path.
    pub fn load(path: &Path) -> Result<BTreeMap<String, String>> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        Self::parse(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn parses_simple_pairs() {
        let vars = EnvFileParser::parse("A=1\nB=two\n").unwrap();
        assert_eq!(vars.get("A"), Some(&"1".to_string()));
        assert_eq!(vars.get("B"), Some(&"two".to_string()));
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let content = "\n# comment\nKEY=value\n\n# another\n";
        let vars = EnvFileParser::parse(content).unwrap();
        assert_eq!(vars.len(), 1);
    }

    #[test]
    fn strips_export_prefix() {
        let vars = EnvFileParser::parse("export TOKEN=abc").unwrap();
        assert_eq!(vars.get("TOKEN"), Some(&"abc".to_string()));
    }

    #[test]
    fn unquotes_values() {
        let content = "D=\"double quoted\"\nS='single # not a comment'";
        let vars = EnvFileParser::parse(content).unwrap();
        assert_eq!(vars.get("D"), Some(&"double quoted".to_string()));
        assert_eq!(vars.get("S"), Some(&"single # not a comment".to_string()));
    }

    #[test]
    fn quoted_value_ends_at_closing_quote() {
        let content = "WALLET_PATH=\"./wallets/main.json\" # primary\nNAME='a b'   # note";
        let vars = EnvFileParser::parse(content).unwrap();
        assert_eq!(vars.get("WALLET_PATH"), Some(&"./wallets/main.json".to_string()));
        assert_eq!(vars.get("NAME"), Some(&"a b".to_string()));
    }

    #[test]
    fn unterminated_quote_is_kept_literally() {
        let vars = EnvFileParser::parse("K=\"open").unwrap();
        assert_eq!(vars.get("K"), Some(&"\"open".to_string()));
    }

    #[test]
    fn drops_trailing_comment_on_unquoted_value() {
        let vars = EnvFileParser::parse("NETWORK=devnet   # default").unwrap();
        assert_eq!(vars.get("NETWORK"), Some(&"devnet".to_string()));
    }

    #[test]
    fn keeps_equals_in_value() {
        let vars = EnvFileParser::parse("URL=https://x.test?a=b&c=d").unwrap();
        assert_eq!(vars.get("URL"), Some(&"https://x.test?a=b&c=d".to_string()));
    }

    #[test]
    fn empty_value_is_kept() {
        let vars = EnvFileParser::parse("EMPTY=").unwrap();
        assert_eq!(vars.get("EMPTY"), Some(&String::new()));
    }

    #[test]
    fn ignores_lines_without_key() {
        let vars = EnvFileParser::parse("=orphan\njust words\nOK=1").unwrap();
        assert_eq!(vars.len(), 1);
        assert!(vars.contains_key("OK"));
    }

    #[test]
    fn later_keys_override_earlier() {
        let vars = EnvFileParser::parse("K=first\nK=second").unwrap();
        assert_eq!(vars.get("K"), Some(&"second".to_string()));
    }

    #[test]
    fn load_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");
        fs::write(&path, "WALLET_PATH=/tmp/w.json\n").unwrap();

        let vars = EnvFileParser::load(&path).unwrap();
        assert_eq!(vars.get("WALLET_PATH"), Some(&"/tmp/w.json".to_string()));
    }

    #[test]
    fn load_fails_for_directory() {
        let temp = TempDir::new().unwrap();
        let err = EnvFileParser::load(temp.path()).unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }
}
