use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{multispace0, one_of},
    combinator::map,
    IResult,
};

use crate::token::Span;

/// Letters, plus the hyphen and apostrophe that occur inside Finnish compounds and loans.
fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || c == '-' || c == '\''
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawToken<'a> {
    Word(&'a str),
    Punct(char),
}

fn raw_token(input: &str) -> IResult<&str, RawToken<'_>> {
    alt((
        map(take_while1(is_word_char), RawToken::Word),
        map(one_of(".,;:?!\"()"), RawToken::Punct),
    ))(input)
}

/// Splits `original_input` into words and punctuation with byte spans. Unrecognized characters
/// (digits, symbols) are skipped.
pub fn parse_with_spans(original_input: &str) -> Vec<(Span, RawToken<'_>)> {
    let mut input = original_input;
    let mut result = Vec::new();

    loop {
        let (next_input, _) = match multispace0::<&str, nom::error::Error<&str>>(input) {
            Ok(res) => res,
            Err(_) => break,
        };
        input = next_input;

        if input.is_empty() {
            break;
        }

        match raw_token(input) {
            Ok((next_input, token)) => {
                let len = input.len() - next_input.len();
                let start = original_input.len() - input.len();
                result.push((Span::new(start, start + len), token));
                input = next_input;
            }
            Err(_) => match input.chars().next() {
                Some(c) => input = &input[c.len_utf8()..],
                None => break,
            },
        }
    }

    result
}

/// The words of an answer, lowercased. Every non-whitespace character is kept.
pub fn answer_words(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_lowercase).collect()
}

/// `"  Olen   Sanonut "` → `"olen sanonut"`
pub fn normalize_answer(input: &str) -> String {
    answer_words(input).join(" ")
}

/// Word-by-word comparison of two answers, ignoring case and spacing only.
pub fn answers_match(expected: &str, given: &str) -> bool {
    answer_words(expected) == answer_words(given)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn spans_point_into_the_input() {
        let input = "Minä olen, hän on.";
        let tokens = parse_with_spans(input);
        assert_eq!(tokens.len(), 6);
        let (span, token) = tokens[0];
        assert_eq!(&input[span.start..span.end], "Minä");
        assert_eq!(token, RawToken::Word("Minä"));
        assert_eq!(tokens[2].1, RawToken::Punct(','));
        assert_eq!(tokens[5].1, RawToken::Punct('.'));
    }

    #[test]
    fn answers_normalize() {
        assert_eq!(normalize_answer("  Olen   Sanonut "), "olen sanonut");
        assert_eq!(normalize_answer("KÄDESSÄ"), "kädessä");
        assert!(answers_match("olen sanonut", "OLEN\tsanonut"));
        assert!(!answers_match("olen sanonut", "olen"));
        assert_eq!(answer_words("123 ?"), ["123", "?"]);
    }

    #[test]
    fn stray_characters_are_not_forgiven() {
        for given in ["talon!", "1talon", "talon 42", "$talon%", "talon."] {
            assert!(!answers_match("talon", given), "{given:?} accepted");
        }
        assert!(!answers_match("on sanottu", "on, sanottu"));
        assert!(answers_match("on sanottu", " On  SANOTTU\n"));
    }

    proptest! {
        #[test]
        fn tokenizer_never_panics(input in "\\PC{0,40}") {
            for (span, _) in parse_with_spans(&input) {
                prop_assert!(input.is_char_boundary(span.start));
                prop_assert!(input.is_char_boundary(span.end));
            }
        }

        #[test]
        fn normalization_is_idempotent(input in "[a-zA-ZäöÄÖ0-9 ,.!\t]{0,30}") {
            let once = normalize_answer(&input);
            prop_assert_eq!(normalize_answer(&once), once.clone());
        }
    }
}
