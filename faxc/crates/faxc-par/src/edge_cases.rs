//! Edge case tests for schemec-par

#[cfg(test)]
mod tests {
    use crate::{parse, read_datum, Ast, CondClause, Datum, Formals};
    use schemec_lex::{tokenize, Token};
    use schemec_util::Handler;

    fn parse_source(source: &str) -> Result<Vec<Ast>, crate::ParseError> {
        let tokens = tokenize(source).expect("source should lex");
        parse(&tokens)
    }

    // ==================== EDGE CASES ====================

    /// EDGE CASE: Empty source
    #[test]
    fn test_edge_empty_source() {
        let ast = parse_source("").unwrap();
        assert!(ast.is_empty());
    }

    /// EDGE CASE: Whitespace and comments only
    #[test]
    fn test_edge_whitespace_and_comments_only() {
        let ast = parse_source("   \n\t ; a comment\n  ").unwrap();
        assert!(ast.is_empty());
    }

    /// EDGE CASE: Deeply nested procedure calls, operator itself a call
    #[test]
    fn test_edge_deeply_nested_calls() {
        let ast = parse_source("((((f))))").unwrap();
        assert_eq!(ast.len(), 1);
        assert!(matches!(&ast[0], Ast::ProcedureCall(_)));
    }

    /// EDGE CASE: lambda with zero formals and single-expression body
    #[test]
    fn test_edge_lambda_no_formals() {
        let ast = parse_source("(lambda () 42)").unwrap();
        match &ast[0] {
            Ast::Lambda(l) => assert_eq!(l.formals, Formals::Fixed(Vec::new())),
            other => panic!("expected lambda, got {other:?}"),
        }
    }

    /// EDGE CASE: lambda whose formals are a single rest-arg identifier
    #[test]
    fn test_edge_lambda_all_rest() {
        let ast = parse_source("(lambda everything everything)").unwrap();
        assert!(matches!(&ast[0], Ast::Lambda(l) if matches!(l.formals, Formals::Rest(_))));
    }

    /// EDGE CASE: quote of a deeply nested list, not evaluated
    #[test]
    fn test_edge_quote_nested_list() {
        let ast = parse_source("'(a (b (c (d))))").unwrap();
        assert!(matches!(&ast[0], Ast::Quote(_)));
    }

    /// EDGE CASE: improper list inside quote
    #[test]
    fn test_edge_quoted_improper_list() {
        let ast = parse_source("'(a . b)").unwrap();
        match &ast[0] {
            Ast::Quote(Datum::List(children)) => assert_eq!(children.len(), 3),
            other => panic!("expected quoted improper list, got {other:?}"),
        }
    }

    /// EDGE CASE: cond with only an else clause
    #[test]
    fn test_edge_cond_only_else() {
        let ast = parse_source("(cond (else 1))").unwrap();
        match &ast[0] {
            Ast::Cond(c) => {
                assert!(c.clauses.is_empty());
                assert!(c.else_seq.is_some());
            }
            other => panic!("expected cond, got {other:?}"),
        }
    }

    /// EDGE CASE: cond test clause with no consequent, value of test returned
    #[test]
    fn test_edge_cond_bare_test_clause() {
        let ast = parse_source("(cond (#t))").unwrap();
        match &ast[0] {
            Ast::Cond(c) => assert!(matches!(c.clauses[0], CondClause::Test(_))),
            other => panic!("expected cond, got {other:?}"),
        }
    }

    /// EDGE CASE: deeply nested let forms
    #[test]
    fn test_edge_nested_lets() {
        let ast = parse_source("(let ((x 1)) (let ((y 2)) (let ((z 3)) (+ x y z))))").unwrap();
        assert_eq!(ast.len(), 1);
    }

    /// EDGE CASE: do loop with no commands
    #[test]
    fn test_edge_do_no_commands() {
        let ast = parse_source("(do ((i 0 (+ i 1))) ((= i 5) i))").unwrap();
        match &ast[0] {
            Ast::Do(d) => assert!(d.commands.is_empty()),
            other => panic!("expected do, got {other:?}"),
        }
    }

    /// EDGE CASE: vector of vectors
    #[test]
    fn test_edge_vector_of_vectors() {
        let tokens = tokenize("#(#(1 2) #(3 4))").unwrap();
        let handler = Handler::new();
        let (datum, _) = read_datum(&tokens, 0, &handler).unwrap();
        match datum {
            Datum::Vector(outer) => {
                assert_eq!(outer.len(), 2);
                assert!(matches!(outer[0], Datum::Vector(_)));
            }
            other => panic!("expected vector, got {other:?}"),
        }
    }

    /// EDGE CASE: string with escaped quote and backslash
    #[test]
    fn test_edge_string_escapes() {
        let ast = parse_source(r#""a\"b\\c""#).unwrap();
        assert!(matches!(&ast[0], Ast::String(_)));
    }

    /// EDGE CASE: unterminated list reports an error rather than panicking
    #[test]
    fn test_edge_unterminated_list_is_error() {
        assert!(parse_source("(a b").is_err());
    }

    /// EDGE CASE: extra closing paren reports an error
    #[test]
    fn test_edge_dangling_rparen_is_error() {
        assert!(parse_source("(+ 1 2))").is_err());
    }

    /// EDGE CASE: a keyword used as an operator is rejected
    #[test]
    fn test_edge_keyword_as_operator_is_error() {
        assert!(parse_source("(lambda 1 2)").is_err());
    }

    /// EDGE CASE: set! to a reserved keyword is rejected
    #[test]
    fn test_edge_set_bang_keyword_target_is_error() {
        assert!(parse_source("(set! if 1)").is_err());
    }

    /// EDGE CASE: named let with zero bindings
    #[test]
    fn test_edge_named_let_zero_bindings() {
        let ast = parse_source("(let loop () 1)").unwrap();
        match &ast[0] {
            Ast::Let(l) => {
                assert!(l.name.is_some());
                assert!(l.bindings.is_empty());
            }
            other => panic!("expected let, got {other:?}"),
        }
    }

    /// EDGE CASE: case with no else and no clauses still parses
    #[test]
    fn test_edge_case_no_clauses() {
        let ast = parse_source("(case x)").unwrap();
        match &ast[0] {
            Ast::Case(c) => {
                assert!(c.clauses.is_empty());
                assert!(c.else_seq.is_none());
            }
            other => panic!("expected case, got {other:?}"),
        }
    }

    /// EDGE CASE: comment immediately before closing paren
    #[test]
    fn test_edge_comment_before_close() {
        let ast = parse_source("(+ 1 2 ; trailing comment\n)").unwrap();
        assert_eq!(ast.len(), 1);
    }

    /// EDGE CASE: character literal tokens round-trip through the reader
    #[test]
    fn test_edge_character_literal() {
        let ast = parse_source(r"#\a").unwrap();
        assert!(matches!(&ast[0], Ast::Character('a')));
    }

    /// EDGE CASE: peculiar identifiers are valid variables, not numbers
    #[test]
    fn test_edge_peculiar_identifiers() {
        let ast = parse_source("(+ -1)").unwrap();
        match &ast[0] {
            Ast::ProcedureCall(c) => assert!(matches!(c.operands[0], Ast::Number(n) if n == -1.0)),
            other => panic!("expected procedure call, got {other:?}"),
        }
        let ast = parse_source("...").unwrap();
        assert!(matches!(&ast[0], Ast::Variable(_)));
    }

    /// EDGE CASE: Token::Dot appearing where an expression is expected
    #[test]
    fn test_edge_dot_outside_list_is_error() {
        let tokens = tokenize(". x").unwrap();
        assert!(tokens.iter().any(|t| t.token == Token::Dot));
        assert!(parse(&tokens).is_err());
    }
}
