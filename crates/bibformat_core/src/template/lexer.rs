/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Tokenizer for template segments.
//!
//! Markers are recognised left to right and whichever opens first wins, so
//! a `%` inside a `^...^...^` marker or inside backticks is plain text.

use std::ops::Range;

/// Which markers are structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexMode {
    /// A whole segment, before the field is located. Only backticks and
    /// `^S^P^` are structural; `%` may straddle the field name and is
    /// handled once `pre` and `post` are split apart.
    Segment,
    /// `pre` or `post` text: `%A%` and `%A%B%` are structural too.
    Affix,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Text(String),
    /// Text between backticks, backticks removed.
    Escaped(String),
    Dependent {
        primary: String,
        alternative: Option<String>,
    },
    Plural {
        singular: String,
        plural: String,
    },
    /// A marker character with no closing partner. Kept as literal text.
    Unterminated(char),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte range in the input.
    pub span: Range<usize>,
}

impl Token {
    fn new(kind: TokenKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }

    /// Whether field names may be searched for inside this token.
    pub fn is_text(&self) -> bool {
        matches!(self.kind, TokenKind::Text(_))
    }
}

/// Split `input` into tokens.
pub fn lex(input: &str, mode: LexMode) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut text_start: Option<usize> = None;
    let mut pos = 0;

    let flush = |tokens: &mut Vec<Token>, start: &mut Option<usize>, end: usize| {
        if let Some(s) = start.take() {
            if s < end {
                tokens.push(Token::new(TokenKind::Text(input[s..end].to_string()), s..end));
            }
        }
    };

    while let Some(c) = input[pos..].chars().next() {
        match c {
            '`' => {
                flush(&mut tokens, &mut text_start, pos);
                let body_start = pos + 1;
                match input[body_start..].find('`') {
                    Some(rel) => {
                        let close = body_start + rel;
                        tokens.push(Token::new(
                            TokenKind::Escaped(input[body_start..close].to_string()),
                            pos..close + 1,
                        ));
                        pos = close + 1;
                    }
                    None => {
                        tokens.push(Token::new(
                            TokenKind::Escaped(input[body_start..].to_string()),
                            pos..input.len(),
                        ));
                        pos = input.len();
                    }
                }
            }
            '^' => {
                flush(&mut tokens, &mut text_start, pos);
                match three_part(input, pos, '^') {
                    Some((first, second, end)) => {
                        tokens.push(Token::new(
                            TokenKind::Plural {
                                singular: first.to_string(),
                                plural: second.to_string(),
                            },
                            pos..end,
                        ));
                        pos = end;
                    }
                    None => {
                        tokens.push(Token::new(TokenKind::Unterminated('^'), pos..pos + 1));
                        pos += 1;
                    }
                }
            }
            '%' if mode == LexMode::Affix => {
                flush(&mut tokens, &mut text_start, pos);
                let body_start = pos + 1;
                match input[body_start..].find('%') {
                    None => {
                        tokens.push(Token::new(TokenKind::Unterminated('%'), pos..pos + 1));
                        pos += 1;
                    }
                    Some(rel) => {
                        let second = body_start + rel;
                        let primary = input[body_start..second].to_string();
                        match input[second + 1..].find('%') {
                            Some(rel_alt) => {
                                let third = second + 1 + rel_alt;
                                tokens.push(Token::new(
                                    TokenKind::Dependent {
                                        primary,
                                        alternative: Some(input[second + 1..third].to_string()),
                                    },
                                    pos..third + 1,
                                ));
                                pos = third + 1;
                            }
                            None => {
                                tokens.push(Token::new(
                                    TokenKind::Dependent {
                                        primary,
                                        alternative: None,
                                    },
                                    pos..second + 1,
                                ));
                                pos = second + 1;
                            }
                        }
                    }
                }
            }
            _ => {
                if text_start.is_none() {
                    text_start = Some(pos);
                }
                pos += c.len_utf8();
            }
        }
    }
    flush(&mut tokens, &mut text_start, input.len());
    tokens
}

/// Find `<d>A<d>B<d>` starting at `start`; returns `(A, B, end)`.
fn three_part(input: &str, start: usize, delimiter: char) -> Option<(&str, &str, usize)> {
    let body = start + delimiter.len_utf8();
    let second = body + input[body..].find(delimiter)?;
    let after_second = second + delimiter.len_utf8();
    let third = after_second + input[after_second..].find(delimiter)?;
    Some((
        &input[body..second],
        &input[after_second..third],
        third + delimiter.len_utf8(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str, mode: LexMode) -> Vec<TokenKind> {
        lex(input, mode).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn plural_marker_then_text() {
        assert_eq!(
            kinds("^p.^pp.^pages", LexMode::Segment),
            vec![
                TokenKind::Plural {
                    singular: "p.".into(),
                    plural: "pp.".into()
                },
                TokenKind::Text("pages".into()),
            ]
        );
    }

    #[test]
    fn percent_is_text_in_segment_mode() {
        assert_eq!(
            kinds("%, %title", LexMode::Segment),
            vec![TokenKind::Text("%, %title".into())]
        );
    }

    #[test]
    fn dependent_with_and_without_alternative() {
        assert_eq!(
            kinds("%: %", LexMode::Affix),
            vec![TokenKind::Dependent {
                primary: ": ".into(),
                alternative: None
            }]
        );
        assert_eq!(
            kinds("x%. %, %y", LexMode::Affix),
            vec![
                TokenKind::Text("x".into()),
                TokenKind::Dependent {
                    primary: ". ".into(),
                    alternative: Some(", ".into())
                },
                TokenKind::Text("y".into()),
            ]
        );
    }

    #[test]
    fn backticks_escape_markers() {
        assert_eq!(
            kinds("`%title^`.", LexMode::Affix),
            vec![
                TokenKind::Escaped("%title^".into()),
                TokenKind::Text(".".into()),
            ]
        );
    }

    #[test]
    fn unterminated_markers_are_reported() {
        assert_eq!(
            kinds("5% off", LexMode::Affix),
            vec![
                TokenKind::Text("5".into()),
                TokenKind::Unterminated('%'),
                TokenKind::Text(" off".into()),
            ]
        );
        assert_eq!(
            kinds("a^b", LexMode::Segment),
            vec![
                TokenKind::Text("a".into()),
                TokenKind::Unterminated('^'),
                TokenKind::Text("b".into()),
            ]
        );
    }

    #[test]
    fn spans_cover_input() {
        let input = "(`ed.`^s^p^";
        let tokens = lex(input, LexMode::Segment);
        assert_eq!(tokens.first().map(|t| t.span.start), Some(0));
        assert_eq!(tokens.last().map(|t| t.span.end), Some(input.len()));
    }
}
