//! Bracket alphabet
//!
//! The six symbols the generator understands, split into three openers and
//! three closers. Every closer maps to exactly one opener.

use crate::error::InputError;
use serde::{Serialize, Serializer};
use std::fmt;

/// One of the six bracket characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bracket {
    OpenParen,
    CloseParen,
    OpenSquare,
    CloseSquare,
    OpenCurly,
    CloseCurly,
}

impl Bracket {
    pub const ALL: [Bracket; 6] = [
        Bracket::OpenParen,
        Bracket::CloseParen,
        Bracket::OpenSquare,
        Bracket::CloseSquare,
        Bracket::OpenCurly,
        Bracket::CloseCurly,
    ];

    /// Classify a character, `None` if it is not a bracket
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '(' => Some(Bracket::OpenParen),
            ')' => Some(Bracket::CloseParen),
            '[' => Some(Bracket::OpenSquare),
            ']' => Some(Bracket::CloseSquare),
            '{' => Some(Bracket::OpenCurly),
            '}' => Some(Bracket::CloseCurly),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Bracket::OpenParen => '(',
            Bracket::CloseParen => ')',
            Bracket::OpenSquare => '[',
            Bracket::CloseSquare => ']',
            Bracket::OpenCurly => '{',
            Bracket::CloseCurly => '}',
        }
    }

    pub fn is_opener(self) -> bool {
        matches!(
            self,
            Bracket::OpenParen | Bracket::OpenSquare | Bracket::OpenCurly
        )
    }

    pub fn is_closer(self) -> bool {
        !self.is_opener()
    }

    /// The opener this bracket pairs with. Openers pair with themselves.
    pub fn opener(self) -> Bracket {
        match self {
            Bracket::CloseParen => Bracket::OpenParen,
            Bracket::CloseSquare => Bracket::OpenSquare,
            Bracket::CloseCurly => Bracket::OpenCurly,
            opener => opener,
        }
    }

    /// Whether `self` (a closer) closes `opener`
    pub fn closes(self, opener: Bracket) -> bool {
        self.is_closer() && self.opener() == opener
    }

    /// Human-readable family name, shared by an opener and its closer
    pub fn name(self) -> &'static str {
        match self.opener() {
            Bracket::OpenParen => "Parenthesis",
            Bracket::OpenSquare => "Square Bracket",
            _ => "Curly Brace",
        }
    }
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Bracket {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Bracket::from_char(c).ok_or(c)
    }
}

impl Serialize for Bracket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.as_char())
    }
}

/// Parse a string made only of bracket characters.
///
/// Fails on the first character outside the alphabet.
pub fn parse_brackets(input: &str) -> Result<Vec<Bracket>, InputError> {
    input
        .chars()
        .enumerate()
        .map(|(position, ch)| {
            Bracket::from_char(ch).ok_or(InputError::InvalidCharacter { ch, position })
        })
        .collect()
}

/// Drop every character that is not a bracket
pub fn sanitize(input: &str) -> String {
    input
        .chars()
        .filter(|c| Bracket::from_char(*c).is_some())
        .collect()
}

/// Render a bracket sequence back to a string
pub fn brackets_to_string(brackets: &[Bracket]) -> String {
    brackets.iter().map(|b| b.as_char()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_round_trip() {
        for b in Bracket::ALL {
            assert_eq!(Bracket::from_char(b.as_char()), Some(b));
        }
        assert_eq!(Bracket::from_char('a'), None);
        assert_eq!(Bracket::try_from('<'), Err('<'));
    }

    #[test]
    fn test_classification() {
        let openers: Vec<char> = Bracket::ALL
            .iter()
            .filter(|b| b.is_opener())
            .map(|b| b.as_char())
            .collect();
        assert_eq!(openers, vec!['(', '[', '{']);
        assert!(Bracket::CloseCurly.is_closer());
    }

    #[test]
    fn test_pairing() {
        assert!(Bracket::CloseParen.closes(Bracket::OpenParen));
        assert!(Bracket::CloseSquare.closes(Bracket::OpenSquare));
        assert!(Bracket::CloseCurly.closes(Bracket::OpenCurly));
        assert!(!Bracket::CloseParen.closes(Bracket::OpenSquare));
        // an opener never "closes" anything, even itself
        assert!(!Bracket::OpenParen.closes(Bracket::OpenParen));
    }

    #[test]
    fn test_names() {
        assert_eq!(Bracket::OpenParen.name(), "Parenthesis");
        assert_eq!(Bracket::CloseSquare.name(), "Square Bracket");
        assert_eq!(Bracket::OpenCurly.name(), "Curly Brace");
    }

    #[test]
    fn test_parse_rejects_foreign_characters() {
        let err = parse_brackets("([x])").unwrap_err();
        assert!(matches!(err, InputError::InvalidCharacter { ch: 'x', position: 2 }));
        assert!(parse_brackets("").unwrap().is_empty());
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("a(b]c{ }"), "(]{}");
        assert_eq!(brackets_to_string(&parse_brackets("{[]}").unwrap()), "{[]}");
    }
}
