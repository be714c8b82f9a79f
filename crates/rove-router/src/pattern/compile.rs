//! Lowering of pattern tokens to a compiled matcher and key schema.
//!
//! The compiler turns the splitter/tokenizer output into one anchored
//! [`Regex`] plus an ordered key schema describing what each capture group
//! carries: a named parameter, or a positional "hole" (wildcards, inline
//! regex captures, catch-all remainders).
//!
//! # Examples
//!
//! ```
//! use rove_router::pattern::{compile, CompileOptions};
//!
//! let compiled = compile("/user/:id", CompileOptions::default()).unwrap();
//! assert!(compiled.regex().is_match("/user/42"));
//! assert_eq!(compiled.keys().len(), 1);
//! assert_eq!(compiled.keys()[0].as_ref().unwrap().name, "id");
//! ```

use std::fmt::Write as _;

use regex::Regex;

use rove_core::{RoveError, RoveResult, Settings};

use super::splitter::{split_pattern, Piece};
use super::token::{tokenize, ParamToken, Token};

/// A named capture key in a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    /// The parameter name the capture is written under.
    pub name: String,
    /// Whether the capture may be absent from a matching path.
    pub optional: bool,
}

/// Per-pattern compile options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Match case-sensitively (default: insensitive).
    pub sensitive: bool,
    /// Treat a trailing slash as significant (default: lenient).
    pub strict: bool,
}

impl From<&Settings> for CompileOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            sensitive: settings.case_sensitive,
            strict: settings.strict_slash,
        }
    }
}

/// A lowered pattern: the anchored matcher plus its ordered key schema.
///
/// Invariant: `keys()[i]` corresponds exactly to capture group `i + 1` of
/// `regex()`; `None` marks a positional hole.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
    keys: Vec<Option<Key>>,
}

impl CompiledPattern {
    /// Returns the compiled matcher.
    pub const fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Returns the ordered key schema, one slot per capture group.
    pub fn keys(&self) -> &[Option<Key>] {
        &self.keys
    }
}

/// Compiles a path pattern into a [`CompiledPattern`].
///
/// The matcher is anchored for whole-string matching and, unless
/// `options.strict` is set, tolerates one trailing slash. Unless
/// `options.sensitive` is set, matching is case-insensitive.
///
/// # Errors
///
/// Returns [`RoveError::PatternCompile`] for unbalanced inline-regex
/// parentheses and for fragments the regex engine rejects.
pub fn compile(pattern: &str, options: CompileOptions) -> RoveResult<CompiledPattern> {
    let pieces = split_pattern(pattern)?;

    let mut source = String::from("^");
    let mut keys: Vec<Option<Key>> = Vec::new();

    for piece in &pieces {
        match piece {
            Piece::Group(group) => {
                // The outer parenthesis becomes a non-capturing wrapper; any
                // capture groups inside the fragment stay positional.
                source.push_str("(?:");
                source.push_str(&group[1..]);
                for _ in 0..count_capture_groups(&group[1..]) {
                    keys.push(None);
                }
            }
            Piece::Literal(text) => {
                for token in tokenize(text) {
                    match token {
                        Token::Literal(lit) => source.push_str(&regex::escape(&lit)),
                        Token::OneOrMore => {
                            source.push_str("(.+)");
                            keys.push(None);
                        }
                        Token::ZeroOrMore => {
                            source.push_str("(.*)");
                            keys.push(None);
                        }
                        Token::Param(param) => lower_param(&param, &mut source, &mut keys),
                    }
                }
            }
        }
    }

    if !options.strict {
        source.push_str("/?");
    }
    source.push('$');

    let source = if options.sensitive {
        source
    } else {
        format!("(?i){source}")
    };

    let regex = Regex::new(&source)
        .map_err(|e| RoveError::pattern_compile(pattern, e.to_string()))?;

    // The key schema must line up with the matcher's capture groups; a
    // mismatch can only come from an inline fragment the hole counter
    // read differently than the regex engine.
    let group_count = regex.captures_len() - 1;
    if group_count != keys.len() {
        return Err(RoveError::pattern_compile(
            pattern,
            format!(
                "key schema has {} slots but matcher has {group_count} capture groups",
                keys.len()
            ),
        ));
    }

    Ok(CompiledPattern { regex, keys })
}

/// Lowers one named-parameter token.
///
/// Without the optional marker the leading slash is emitted literally before
/// the capture wrapper; with it, the slash folds inside the wrapper so it
/// disappears from the matched text when the parameter is omitted. A
/// catch-all marker appends a positional remainder group that swallows the
/// rest of the path, slash separators included. The remainder group is
/// optional as a whole, so a path that ends at the parameter leaves the
/// group non-participating and its positional slot records `None` rather
/// than an empty string.
fn lower_param(param: &ParamToken, source: &mut String, keys: &mut Vec<Option<Key>>) {
    let class = if param.leading_dot {
        "([^/.]+?)"
    } else {
        "([^/]+?)"
    };
    let dot = if param.leading_dot { r"\." } else { "" };

    if param.optional {
        let slash = if param.leading_slash { "/" } else { "" };
        write!(source, "(?:{slash}{dot}{class})?").ok();
    } else {
        if param.leading_slash {
            source.push('/');
        }
        write!(source, "(?:{dot}{class})").ok();
    }
    keys.push(Some(Key {
        name: param.name.clone(),
        optional: param.optional,
    }));

    if param.catch_all {
        source.push_str("(/.*)?");
        keys.push(None);
    }
}

/// Counts the capture groups a regex fragment opens.
///
/// Skips escaped parentheses, parentheses inside character classes, and
/// non-capturing `(?...)` constructs; `(?P<name>` and `(?<name>` groups do
/// capture and are counted.
fn count_capture_groups(fragment: &str) -> usize {
    let bytes = fragment.as_bytes();
    let mut count = 0;
    let mut escaped = false;
    let mut in_class = false;

    for (i, &b) in bytes.iter().enumerate() {
        if escaped {
            escaped = false;
            continue;
        }
        match b {
            b'\\' => escaped = true,
            b'[' if !in_class => in_class = true,
            b']' if in_class => in_class = false,
            b'(' if !in_class => {
                let named = matches!(bytes.get(i + 2), Some(b'P' | b'<'));
                if bytes.get(i + 1) != Some(&b'?') || named {
                    count += 1;
                }
            }
            _ => {}
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compiled(pattern: &str) -> CompiledPattern {
        compile(pattern, CompileOptions::default()).unwrap()
    }

    #[test]
    fn test_literal_pattern() {
        let c = compiled("/about");
        assert!(c.regex().is_match("/about"));
        assert!(c.regex().is_match("/about/"));
        assert!(!c.regex().is_match("/about/x"));
        assert!(c.keys().is_empty());
    }

    #[test]
    fn test_named_param_key_schema() {
        let c = compiled("/user/:id");
        assert_eq!(c.keys().len(), 1);
        let key = c.keys()[0].as_ref().unwrap();
        assert_eq!(key.name, "id");
        assert!(!key.optional);
    }

    #[test]
    fn test_optional_param_slash_folds_inside() {
        let c = compiled("/user/:id?");
        // With the param omitted, the preceding slash must be absent too.
        assert!(c.regex().is_match("/user"));
        assert!(c.regex().is_match("/user/"));
        assert!(c.regex().is_match("/user/42"));
        assert!(c.keys()[0].as_ref().unwrap().optional);
    }

    #[test]
    fn test_wildcards_are_holes() {
        let c = compiled("/files/*");
        assert_eq!(c.keys().len(), 1);
        assert!(c.keys()[0].is_none());
        let caps = c.regex().captures("/files/a/b").unwrap();
        assert_eq!(caps.get(1).unwrap().as_str(), "a/b");
    }

    #[test]
    fn test_plus_requires_one_char() {
        let c = compiled("/files/+");
        assert!(!c.regex().is_match("/files/"));
        assert!(c.regex().is_match("/files/a"));
    }

    #[test]
    fn test_inline_regex_matches_positionally() {
        // The outer parenthesis becomes non-capturing: the fragment
        // constrains matching but leaves no key and no capture of its own.
        let c = compiled(r"/page/(\d{3})");
        assert!(c.keys().is_empty());
        assert!(c.regex().is_match("/page/123"));
        assert!(!c.regex().is_match("/page/12"));
        assert!(!c.regex().is_match("/page/1234"));
    }

    #[test]
    fn test_inline_regex_inner_captures_are_holes() {
        let c = compiled(r"/v((\d+)\.(\d+))");
        assert_eq!(c.keys().len(), 2);
        assert!(c.keys().iter().all(Option::is_none));
        let caps = c.regex().captures("/v1.2").unwrap();
        assert_eq!(caps.get(1).unwrap().as_str(), "1");
        assert_eq!(caps.get(2).unwrap().as_str(), "2");
    }

    #[test]
    fn test_catch_all_appends_remainder_hole() {
        let c = compiled("/files/:root*");
        assert_eq!(c.keys().len(), 2);
        assert!(c.keys()[0].is_some());
        assert!(c.keys()[1].is_none());
        let caps = c.regex().captures("/files/a/b/c").unwrap();
        assert_eq!(caps.get(1).unwrap().as_str(), "a");
        assert_eq!(caps.get(2).unwrap().as_str(), "/b/c");
    }

    #[test]
    fn test_dotted_param_excludes_dots() {
        let c = compiled("/file/:name.:ext");
        let caps = c.regex().captures("/file/readme.md").unwrap();
        assert_eq!(caps.get(1).unwrap().as_str(), "readme");
        assert_eq!(caps.get(2).unwrap().as_str(), "md");
    }

    #[test]
    fn test_case_insensitive_by_default() {
        let c = compiled("/User/:id");
        assert!(c.regex().is_match("/user/5"));
    }

    #[test]
    fn test_sensitive_option() {
        let c = compile(
            "/User/:id",
            CompileOptions {
                sensitive: true,
                strict: false,
            },
        )
        .unwrap();
        assert!(!c.regex().is_match("/user/5"));
        assert!(c.regex().is_match("/User/5"));
    }

    #[test]
    fn test_strict_option() {
        let c = compile(
            "/a",
            CompileOptions {
                sensitive: false,
                strict: true,
            },
        )
        .unwrap();
        assert!(c.regex().is_match("/a"));
        assert!(!c.regex().is_match("/a/"));
    }

    #[test]
    fn test_unbalanced_pattern_fails() {
        assert!(compile("/a/(b", CompileOptions::default()).is_err());
    }

    #[test]
    fn test_invalid_inline_regex_fails() {
        assert!(compile(r"/a/(\d{)", CompileOptions::default()).is_err());
    }

    #[test]
    fn test_literal_metacharacters_escaped() {
        let c = compiled("/price/$10");
        assert!(c.regex().is_match("/price/$10"));
        assert!(!c.regex().is_match("/price/10"));
    }

    #[test]
    fn test_options_from_settings() {
        let settings = Settings {
            case_sensitive: true,
            strict_slash: true,
            ..Settings::default()
        };
        let options = CompileOptions::from(&settings);
        assert!(options.sensitive);
        assert!(options.strict);
    }

    #[test]
    fn test_count_capture_groups() {
        assert_eq!(count_capture_groups(r"\d{3})"), 0);
        assert_eq!(count_capture_groups(r"(\d+))"), 1);
        assert_eq!(count_capture_groups(r"(?:a)(b)"), 1);
        assert_eq!(count_capture_groups(r"\((a)"), 1);
        assert_eq!(count_capture_groups(r"[(](a)"), 1);
        assert_eq!(count_capture_groups(r"(?P<x>a)"), 1);
    }
}
