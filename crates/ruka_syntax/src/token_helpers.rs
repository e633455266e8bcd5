//! Small helper APIs for working with `Token` / `Kind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy
//! to work with registry-backed tokens.

use ruka_core::{Keyword, Mode};

use crate::lexer::{Kind, Token};

impl Kind {
    /// Return the keyword, if this is a keyword token.
    pub fn keyword(&self) -> Option<Keyword> {
        match self {
            Kind::Keyword(k) => Some(*k),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        matches!(self, Kind::Keyword(k) if *k == keyword)
    }

    /// Return the parameter mode, if this is a mode token.
    pub fn mode(&self) -> Option<Mode> {
        match self {
            Kind::Mode(m) => Some(*m),
            _ => None,
        }
    }

    /// Return `true` if this is the given parameter mode.
    pub fn is_mode(&self, mode: Mode) -> bool {
        matches!(self, Kind::Mode(m) if *m == mode)
    }

    /// Return `true` for literal tokens (string, character, integer, float).
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Kind::String(_) | Kind::Character(_) | Kind::Integer(_) | Kind::Float(_)
        )
    }

    /// Return `true` for punctuation, operator, and assignment tokens.
    pub fn is_symbol(&self) -> bool {
        !self.is_structural() && self.spelling().is_some() && self.keyword().is_none() && self.mode().is_none()
    }

    /// Return `true` for `Newline`, `Illegal`, and `Eof`.
    pub fn is_structural(&self) -> bool {
        matches!(self, Kind::Newline | Kind::Illegal | Kind::Eof)
    }
}

impl Token {
    /// Convenience wrapper for `self.kind().keyword()`.
    pub fn keyword(&self) -> Option<Keyword> {
        self.kind().keyword()
    }

    /// Convenience wrapper for `self.kind().mode()`.
    pub fn mode(&self) -> Option<Mode> {
        self.kind().mode()
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind(), Kind::Eof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Position;

    #[test]
    fn test_kind_predicates() {
        assert!(Kind::Keyword(Keyword::Defer).is_keyword(Keyword::Defer));
        assert!(!Kind::Keyword(Keyword::Defer).is_keyword(Keyword::Do));
        assert!(Kind::Mode(Mode::Move).is_mode(Mode::Move));
        assert_eq!(Kind::Identifier("x".into()).keyword(), None);
        assert!(Kind::Character(b'a').is_literal());
        assert!(!Kind::Identifier("a".into()).is_literal());
    }

    #[test]
    fn test_symbol_and_structural_are_disjoint() {
        assert!(Kind::BackwardApp.is_symbol());
        assert!(!Kind::BackwardApp.is_structural());
        assert!(Kind::Eof.is_structural());
        assert!(!Kind::Eof.is_symbol());
        assert!(!Kind::Keyword(Keyword::And).is_symbol());
        assert!(!Kind::Float("1.0".into()).is_symbol());
    }

    #[test]
    fn test_token_wrappers() {
        let tok = Token::new(Kind::Mode(Mode::Comptime), "t.ruka", Position::new(4, 2));
        assert_eq!(tok.mode(), Some(Mode::Comptime));
        assert_eq!(tok.keyword(), None);
        assert!(Token::new(Kind::Eof, "t.ruka", Position::new(9, 1)).is_eof());
    }
}
