pub mod analysis;
pub mod parser;
pub mod tags;
pub mod token;

use kielo_morph::Inflector;

use crate::analysis::{analyze, Analysis};
use crate::parser::{parse_with_spans, RawToken};
use crate::token::{Token, TokenKind};

pub use parser::{answers_match, normalize_answer};

/// Text → structured tokens.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    parse_with_spans(input)
        .into_iter()
        .map(|(span, raw)| {
            let kind = match raw {
                RawToken::Punct(c) => TokenKind::Punctuation(c),
                RawToken::Word(_) => TokenKind::Word,
            };
            Token {
                span,
                text: &input[span.start..span.end],
                kind,
            }
        })
        .collect()
}

/// Tokenizes text and looks every word up in the inflector's curated paradigms.
pub struct Lexer<'a> {
    inflector: &'a Inflector,
}

impl<'a> Lexer<'a> {
    pub fn new(inflector: &'a Inflector) -> Self {
        Self { inflector }
    }

    pub fn annotate<'t>(&self, input: &'t str) -> Vec<(Token<'t>, Vec<Analysis>)> {
        tokenize(input)
            .into_iter()
            .map(|token| {
                let analyses = match token.kind {
                    TokenKind::Word => analyze(self.inflector, token.text),
                    TokenKind::Punctuation(_) => Vec::new(),
                };
                (token, analyses)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kielo_protocol::{Case, Cell};

    #[test]
    fn lexer_annotates_known_words() {
        let inflector = Inflector::builtin().unwrap();
        let lexer = Lexer::new(&inflector);
        let tokens = lexer.annotate("Talossa on mies.");

        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].0.text, "Talossa");
        assert_eq!(tokens[0].1[0].citation, "talo");
        assert_eq!(tokens[0].1[0].cell, Cell::Noun { case: Case::Inessive });
        assert_eq!(tokens[1].1[0].citation, "olla");
        assert_eq!(tokens[2].1[0].citation, "mies");
        assert_eq!(tokens[3].0.kind, TokenKind::Punctuation('.'));
        assert!(tokens[3].1.is_empty());
    }
}
