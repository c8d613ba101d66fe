use lazy_static::lazy_static;
use regex::Regex;

use crate::MK_TOKEN;

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Receives the text matched by its pattern at the lexer position.
pub type RegexHandler = fn(&mut Lexer, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Every regex is anchored with \A, so a match always starts at the lexer position.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"\A\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"\A\p{L}[\p{L}0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"\A[0-9]+").unwrap(), handler: number_handler },
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    /// Byte offset into `source`, always on a char boundary.
    pos: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            tokens: vec![],
            source: String::from(source),
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) {
    lexer.advance_n(matched.len());
}

fn number_handler(lexer: &mut Lexer, matched: &str) {
    lexer.push(MK_TOKEN!(TokenKind::Number, matched));
    lexer.advance_n(matched.len());
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) {
    if RESERVED_LOOKUP.contains_key(matched) {
        lexer.push(MK_TOKEN!(TokenKind::Keyword, matched));
    } else {
        lexer.push(MK_TOKEN!(TokenKind::Identifier, matched));
    }

    lexer.advance_n(matched.len());
}

/// Anything no pattern claims becomes a one character symbol.
fn single_char_handler(lexer: &mut Lexer, current: char) {
    lexer.push(MK_TOKEN!(TokenKind::Symbol, current.to_string()));
    lexer.advance_n(current.len_utf8());
}

/// Scans `source` into tokens, always ending with a single `EndOfInput`.
///
/// Scanning never fails: every character is either whitespace or part of
/// some token.
#[tracing::instrument(level = "trace", skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::new(source);

    while let Some(current) = lex.at() {
        let matched = PATTERNS.iter().find_map(|pattern| {
            pattern
                .regex
                .find(lex.remainder())
                .map(|found| (pattern.handler, found.as_str().to_string()))
        });

        match matched {
            Some((handler, text)) => handler(&mut lex, &text),
            None => single_char_handler(&mut lex, current),
        }
    }

    lex.push(MK_TOKEN!(TokenKind::EndOfInput, ""));
    tracing::trace!(count = lex.tokens.len(), "Tokenized source");
    lex.tokens
}
