//! Tokenization of literal pattern pieces into typed segment nodes.
//!
//! The splitter hands this module the non-regex pieces of a pattern. A single
//! left-to-right pass lexes them into typed tokens, so that e.g. the `*` in
//! `:name*` belongs to the parameter token and is never confused with a
//! standalone wildcard.
//!
//! ## Token grammar
//!
//! | Token        | Syntax                 |
//! |--------------|------------------------|
//! | named param  | `[/][.]:name[?][*]`    |
//! | one-or-more  | `+`                    |
//! | zero-or-more | `*`                    |
//! | literal      | anything else          |
//!
//! A parameter name is one or more ASCII word characters (`[A-Za-z0-9_]`).
//! A `:` not followed by a word character is plain literal text.

/// A named-parameter token and its modifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamToken {
    /// The capture name (e.g. `id` for `:id`).
    pub name: String,
    /// Whether a `/` immediately precedes the token. For optional params the
    /// slash folds inside the capture wrapper so it vanishes with the param.
    pub leading_slash: bool,
    /// Whether a `.` immediately precedes the name; narrows the character
    /// class to exclude dots (used for dotted segments such as filenames).
    pub leading_dot: bool,
    /// Whether the param may be absent (`?` marker).
    pub optional: bool,
    /// Whether a catch-all remainder follows the param (`*` marker).
    pub catch_all: bool,
}

/// One typed segment of a literal pattern piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Plain text, matched literally.
    Literal(String),
    /// `+`: greedy unnamed match of one or more characters.
    OneOrMore,
    /// `*`: greedy unnamed match of zero or more characters (may be empty).
    ZeroOrMore,
    /// A named parameter.
    Param(ParamToken),
}

/// Lexes a literal pattern piece into typed tokens.
///
/// # Examples
///
/// ```
/// use rove_router::pattern::token::{tokenize, Token};
///
/// let tokens = tokenize("/user/:id?");
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0], Token::Literal("/user".to_string()));
/// assert!(matches!(&tokens[1], Token::Param(p) if p.name == "id" && p.optional));
/// ```
pub fn tokenize(piece: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut rest = piece;

    while !rest.is_empty() {
        if let Some(stripped) = rest.strip_prefix('+') {
            flush_literal(&mut literal, &mut tokens);
            tokens.push(Token::OneOrMore);
            rest = stripped;
            continue;
        }
        if let Some(stripped) = rest.strip_prefix('*') {
            flush_literal(&mut literal, &mut tokens);
            tokens.push(Token::ZeroOrMore);
            rest = stripped;
            continue;
        }
        if let Some((param, remainder)) = lex_param(rest) {
            flush_literal(&mut literal, &mut tokens);
            tokens.push(Token::Param(param));
            rest = remainder;
            continue;
        }

        // No token starts here: one more character of literal text.
        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            literal.push(ch);
        }
        rest = chars.as_str();
    }

    flush_literal(&mut literal, &mut tokens);
    tokens
}

fn flush_literal(literal: &mut String, tokens: &mut Vec<Token>) {
    if !literal.is_empty() {
        tokens.push(Token::Literal(std::mem::take(literal)));
    }
}

/// Tries to lex a param token (`[/][.]:name[?][*]`) at the start of `input`.
fn lex_param(input: &str) -> Option<(ParamToken, &str)> {
    let mut rest = input;

    let leading_slash = rest.starts_with('/');
    if leading_slash {
        rest = &rest[1..];
    }
    let leading_dot = rest.starts_with('.');
    if leading_dot {
        rest = &rest[1..];
    }
    rest = rest.strip_prefix(':')?;

    let name_len = rest
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
        .count();
    if name_len == 0 {
        return None;
    }
    let name = rest[..name_len].to_string();
    rest = &rest[name_len..];

    let optional = rest.starts_with('?');
    if optional {
        rest = &rest[1..];
    }
    let catch_all = rest.starts_with('*');
    if catch_all {
        rest = &rest[1..];
    }

    Some((
        ParamToken {
            name,
            leading_slash,
            leading_dot,
            optional,
            catch_all,
        },
        rest,
    ))
}
