//! Edge case tests for the Scheme lexer, beyond the per-module unit tests.

#[cfg(test)]
mod tests {
    use crate::{tokenize, Token};

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| t.token)
            .filter(|t| *t != Token::Eof)
            .collect()
    }

    #[test]
    fn edge_empty_source() {
        assert!(kinds("").is_empty());
    }

    #[test]
    fn edge_only_atmosphere() {
        assert!(kinds("   \n ; a comment\n  ").is_empty());
    }

    #[test]
    fn edge_single_char_identifier() {
        assert_eq!(kinds("x"), vec![Token::Identifier(schemec_util::Symbol::intern("x"))]);
    }

    #[test]
    fn edge_long_identifier() {
        let name = "a".repeat(5000);
        let tokens = kinds(&name);
        assert_eq!(tokens, vec![Token::Identifier(schemec_util::Symbol::intern(&name))]);
    }

    #[test]
    fn edge_peculiar_identifiers() {
        assert_eq!(kinds("+ - ..."), vec![
            Token::Identifier(schemec_util::Symbol::intern("+")),
            Token::Identifier(schemec_util::Symbol::intern("-")),
            Token::Identifier(schemec_util::Symbol::intern("...")),
        ]);
    }

    #[test]
    fn edge_nested_parens() {
        let tokens = kinds("((()))");
        assert_eq!(tokens.iter().filter(|t| **t == Token::LParen).count(), 3);
        assert_eq!(tokens.iter().filter(|t| **t == Token::RParen).count(), 3);
    }

    #[test]
    fn edge_quote_abbreviation_forms() {
        let tokens = kinds("'a `b ,c ,@d");
        assert_eq!(
            tokens,
            vec![
                Token::Quote,
                Token::Identifier(schemec_util::Symbol::intern("a")),
                Token::Quasiquote,
                Token::Identifier(schemec_util::Symbol::intern("b")),
                Token::Unquote,
                Token::Identifier(schemec_util::Symbol::intern("c")),
                Token::UnquoteSplicing,
                Token::Identifier(schemec_util::Symbol::intern("d")),
            ]
        );
    }

    #[test]
    fn edge_number_formats() {
        assert_eq!(kinds("0"), vec![Token::Number(0.0)]);
        assert_eq!(kinds("-0.5"), vec![Token::Number(-0.5)]);
        assert_eq!(kinds(".25"), vec![Token::Number(0.25)]);
        assert_eq!(kinds("10."), vec![Token::Number(10.0)]);
    }

    #[test]
    fn edge_identifiers_are_case_folded() {
        assert_eq!(
            kinds("Lambda"),
            vec![Token::Identifier(schemec_util::Symbol::intern("lambda"))]
        );
    }

    #[test]
    fn edge_vector_literal() {
        assert_eq!(kinds("#()"), vec![Token::VecOpen, Token::RParen]);
    }

    #[test]
    fn edge_booleans() {
        assert_eq!(kinds("#t #f"), vec![Token::Boolean(true), Token::Boolean(false)]);
    }

    #[test]
    fn edge_named_and_literal_characters() {
        assert_eq!(
            kinds("#\\space #\\newline #\\a"),
            vec![
                Token::Character(' '),
                Token::Character('\n'),
                Token::Character('a'),
            ]
        );
    }

    #[test]
    fn edge_empty_string_literal() {
        assert_eq!(kinds("\"\""), vec![Token::String(schemec_util::Symbol::intern(""))]);
    }

    #[test]
    fn edge_comment_then_form() {
        assert_eq!(kinds("; header comment\n(f x)"), vec![
            Token::LParen,
            Token::Identifier(schemec_util::Symbol::intern("f")),
            Token::Identifier(schemec_util::Symbol::intern("x")),
            Token::RParen,
        ]);
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn err_bad_character_constant() {
        assert!(tokenize("#\\foo").is_err());
    }

    #[test]
    fn err_unterminated_string() {
        assert!(tokenize("\"unterminated").is_err());
    }

    #[test]
    fn err_unknown_string_escape() {
        assert!(tokenize("\"abc\\q\"").is_err());
    }

    #[test]
    fn err_unexpected_character() {
        assert!(tokenize("(+ 1 2 ] 3)").is_err());
    }

    #[test]
    fn err_malformed_dot_run() {
        assert!(tokenize("..x").is_err());
    }

    #[test]
    fn err_sign_followed_by_non_delimiter_non_digit() {
        assert!(tokenize("+!x").is_err());
    }

    #[test]
    fn err_number_followed_by_non_delimiter() {
        assert!(tokenize("5x").is_err());
    }

    #[test]
    fn err_discards_partial_tokens_on_failure() {
        // "(a b" lexes fine, but the "]" afterward fails the whole call —
        // no partial token list survives.
        let result = tokenize("(a b ]");
        assert!(result.is_err());
    }
}
