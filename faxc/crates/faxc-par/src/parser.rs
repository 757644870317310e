//! The program parser: classifies datums into typed AST nodes.
//!
//! Dispatch is an ordered list of guarded alternatives, each doing a
//! bounded lookahead at `tokens[i]`/`tokens[i+1]`. A guard failing means
//! "not my form" — try the next alternative. Once a guard matches, the
//! corresponding `parse_*` function commits: any further mismatch is a
//! hard error reported through the `Handler` and signaled by returning
//! `None`. Keyword forms are always tried before `procedure_call`, so a
//! user binding named e.g. `if` can never shadow the syntactic form —
//! this is by design (see DESIGN.md).

use schemec_lex::{SpannedToken, Token};
use schemec_util::symbol::{
    KW_AND, KW_ARROW, KW_BEGIN, KW_CASE, KW_COND, KW_DEFINE, KW_DELAY, KW_DO, KW_ELSE, KW_IF,
    KW_LAMBDA, KW_LET, KW_LET_STAR, KW_LETREC, KW_OR, KW_QUASIQUOTE, KW_QUOTE, KW_SET,
};
use schemec_util::{DiagnosticCode, Handler, Span, Symbol};

use crate::ast::*;
use crate::datum::read_datum;

pub struct Parser<'a> {
    tokens: &'a [SpannedToken],
    handler: &'a Handler,
}

/// Parses the full token stream into a sequence of top-level programs.
///
/// Each entry is either an expression or a definition. Reports the first
/// structural mismatch via `handler` and returns `None`; the caller
/// checks `handler.has_errors()` to distinguish that from legitimate
/// empty input.
pub fn parse_program(tokens: &[SpannedToken], handler: &Handler) -> Option<Vec<Ast>> {
    let parser = Parser { tokens, handler };
    let mut items = Vec::new();
    let mut idx = 0;
    while !matches!(parser.token_at(idx), Token::Eof) {
        let (node, next) = parser.parse_expression(idx)?;
        items.push(node);
        idx = next;
    }
    Some(items)
}

impl<'a> Parser<'a> {
    fn token_at(&self, i: usize) -> Token {
        self.tokens.get(i).map(|t| t.token).unwrap_or(Token::Eof)
    }

    fn span_at(&self, i: usize) -> Span {
        self.tokens
            .get(i)
            .or_else(|| self.tokens.last())
            .map(|t| t.span)
            .unwrap_or_default()
    }

    fn ident_at(&self, i: usize) -> Option<Symbol> {
        match self.token_at(i) {
            Token::Identifier(sym) => Some(sym),
            _ => None,
        }
    }

    fn guard_keyword(&self, i: usize, kw: Symbol) -> bool {
        matches!(self.token_at(i), Token::LParen) && self.ident_at(i + 1) == Some(kw)
    }

    fn report_error(&self, i: usize, message: impl Into<String>, code: DiagnosticCode) {
        self.handler
            .build_error(self.span_at(i), message)
            .code(code)
            .emit(self.handler);
    }

    fn expect_rparen(&self, i: usize) -> Option<usize> {
        if matches!(self.token_at(i), Token::RParen) {
            Some(i + 1)
        } else {
            self.report_error(i, "Expected closing parenthesis", DiagnosticCode::E_PARSE_EXPECTED_CLOSING_PAREN);
            None
        }
    }

    fn expect_variable(&self, i: usize) -> Option<Symbol> {
        match self.ident_at(i) {
            Some(sym) if !sym.is_known() => Some(sym),
            _ => {
                self.report_error(i, "Expecting <variable>", DiagnosticCode::E_PARSE_EXPECTING_TOKEN);
                None
            }
        }
    }

    /// Parses a sequence of expressions up to (not including) the `)` at
    /// `tokens[idx]`. Requires at least one expression.
    fn parse_sequence(&self, mut idx: usize) -> Option<(Vec<Ast>, usize)> {
        let mut exprs = Vec::new();
        while !matches!(self.token_at(idx), Token::RParen) {
            if matches!(self.token_at(idx), Token::Eof) {
                self.report_error(idx, "Unexpected end of input", DiagnosticCode::E_PARSE_UNEXPECTED_EOF);
                return None;
            }
            let (expr, next) = self.parse_expression(idx)?;
            exprs.push(expr);
            idx = next;
        }
        if exprs.is_empty() {
            self.report_error(idx, "Expecting expression", DiagnosticCode::E_PARSE_EXPECTING_TOKEN);
            return None;
        }
        Some((exprs, idx))
    }

    /// Top-of-grammar dispatcher: `variable | literal | procedure_call |
    /// lambda | conditional | assignment | derived | definition`.
    fn parse_expression(&self, i: usize) -> Option<(Ast, usize)> {
        match self.token_at(i) {
            Token::Identifier(sym) if !sym.is_known() => Some((Ast::Variable(sym), i + 1)),
            Token::Boolean(b) => Some((Ast::Boolean(b), i + 1)),
            Token::Number(n) => Some((Ast::Number(n), i + 1)),
            Token::String(s) => Some((Ast::String(s), i + 1)),
            Token::Character(c) => Some((Ast::Character(c), i + 1)),
            Token::LParen => self.parse_list_form(i),
            Token::Eof => {
                self.report_error(i, "Unexpected end of input", DiagnosticCode::E_PARSE_UNEXPECTED_EOF);
                None
            }
            _ => {
                self.report_error(i, "Expecting expression", DiagnosticCode::E_PARSE_UNEXPECTED_TOKEN);
                None
            }
        }
    }

    fn parse_list_form(&self, i: usize) -> Option<(Ast, usize)> {
        if matches!(self.token_at(i + 1), Token::RParen) {
            self.report_error(i, "Expecting expression", DiagnosticCode::E_PARSE_UNEXPECTED_TOKEN);
            return None;
        }

        if let Some(sym) = self.ident_at(i + 1) {
            if sym == KW_DEFINE {
                return self.parse_definition(i).map(|(d, n)| (Ast::Definition(d), n));
            } else if sym == KW_LAMBDA {
                return self.parse_lambda(i);
            } else if sym == KW_IF {
                return self.parse_conditional(i);
            } else if sym == KW_SET {
                return self.parse_assignment(i);
            } else if sym == KW_COND {
                return self.parse_cond(i);
            } else if sym == KW_CASE {
                return self.parse_case(i);
            } else if sym == KW_AND {
                return self.parse_and_or(i, true);
            } else if sym == KW_OR {
                return self.parse_and_or(i, false);
            } else if sym == KW_LET {
                return self.parse_let(i, LetKind::Let);
            } else if sym == KW_LET_STAR {
                return self.parse_let(i, LetKind::LetStar);
            } else if sym == KW_LETREC {
                return self.parse_let(i, LetKind::LetRec);
            } else if sym == KW_BEGIN {
                return self.parse_begin(i);
            } else if sym == KW_DO {
                return self.parse_do(i);
            } else if sym == KW_DELAY {
                return self.parse_delay(i);
            } else if sym == KW_QUOTE {
                return self.parse_quote(i);
            } else if sym == KW_QUASIQUOTE {
                return self.parse_quasiquote(i);
            } else if sym.is_known() {
                // `else`, `=>`, `unquote`, `unquote-splicing` used as an
                // operator — reserved, never a procedure_call head.
                self.report_error(i + 1, "Expecting expression", DiagnosticCode::E_PARSE_UNEXPECTED_TOKEN);
                return None;
            }
        }

        self.parse_procedure_call(i)
    }

    fn parse_procedure_call(&self, i: usize) -> Option<(Ast, usize)> {
        let span = self.span_at(i);
        let (operator, mut idx) = self.parse_expression(i + 1)?;
        let mut operands = Vec::new();
        while !matches!(self.token_at(idx), Token::RParen) {
            if matches!(self.token_at(idx), Token::Eof) {
                self.report_error(idx, "Unexpected end of input", DiagnosticCode::E_PARSE_UNEXPECTED_EOF);
                return None;
            }
            let (operand, next) = self.parse_expression(idx)?;
            operands.push(operand);
            idx = next;
        }
        let idx = self.expect_rparen(idx)?;
        Some((
            Ast::ProcedureCall(ProcedureCall { operator: Box::new(operator), operands, span }),
            idx,
        ))
    }

    /// `(define variable expression)` or `(define (name . formals) body)`.
    fn parse_definition(&self, i: usize) -> Option<(Definition, usize)> {
        let span = self.span_at(i);
        let idx = i + 2;
        match self.token_at(idx) {
            Token::LParen => {
                let name = self.expect_variable(idx + 1)?;
                let (formals, next) = self.parse_formals_list(idx + 2)?;
                let (body, next) = self.parse_body(next)?;
                let next = next;
                let next = self.expect_rparen(next)?;
                let lambda_span = self.span_at(idx);
                let value = Ast::Lambda(Lambda { formals, body, span: lambda_span });
                Some((Definition { name, value: Box::new(value), span }, next))
            }
            _ => {
                let name = self.expect_variable(idx)?;
                let (value, next) = self.parse_expression(idx + 1)?;
                let next = self.expect_rparen(next)?;
                Some((Definition { name, value: Box::new(value), span }, next))
            }
        }
    }

    /// Reads the contents of a definition-only `(begin ...)` used as the
    /// `(begin definition*)` sugar inside a body's definition prefix. `i`
    /// is the index of the `(` (guard already confirmed `begin` follows).
    fn parse_begin_definitions(&self, i: usize) -> Option<(Vec<Definition>, usize)> {
        let mut idx = i + 2;
        let mut defs = Vec::new();
        loop {
            match self.token_at(idx) {
                Token::RParen => return Some((defs, idx + 1)),
                Token::Eof => {
                    self.report_error(idx, "Unexpected end of input", DiagnosticCode::E_PARSE_UNEXPECTED_EOF);
                    return None;
                }
                _ => {
                    if !self.guard_keyword(idx, KW_DEFINE) {
                        self.report_error(idx, "Expecting <definition>", DiagnosticCode::E_PARSE_EXPECTING_TOKEN);
                        return None;
                    }
                    let (d, next) = self.parse_definition(idx)?;
                    defs.push(d);
                    idx = next;
                }
            }
        }
    }

    /// A (possibly empty) prefix of internal definitions followed by one
    /// or more expressions. Stops at (but doesn't consume) the `)`.
    fn parse_body(&self, mut idx: usize) -> Option<(Body, usize)> {
        let mut definitions = Vec::new();
        loop {
            if self.guard_keyword(idx, KW_DEFINE) {
                let (d, next) = self.parse_definition(idx)?;
                definitions.push(d);
                idx = next;
            } else if self.guard_keyword(idx, KW_BEGIN) {
                let (mut ds, next) = self.parse_begin_definitions(idx)?;
                definitions.append(&mut ds);
                idx = next;
            } else {
                break;
            }
        }
        let (exprs, idx) = self.parse_sequence(idx)?;
        Some((Body { definitions, exprs }, idx))
    }

    /// `formals := ( variable* ) | ( variable+ . variable ) | variable`
    fn parse_formals(&self, i: usize) -> Option<(Formals, usize)> {
        match self.token_at(i) {
            Token::LParen => self.parse_formals_list(i + 1),
            _ => {
                let variable = self.expect_variable(i)?;
                Some((Formals::Rest(variable), i + 1))
            }
        }
    }

    /// Reads formals after the opening `(` has already been consumed.
    fn parse_formals_list(&self, mut idx: usize) -> Option<(Formals, usize)> {
        let mut vars = Vec::new();
        loop {
            match self.token_at(idx) {
                Token::RParen => return Some((Formals::Fixed(vars), idx + 1)),
                Token::Dot => {
                    if vars.is_empty() {
                        self.report_error(idx, "Bad identifier observed", DiagnosticCode::E_PARSE_UNEXPECTED_TOKEN);
                        return None;
                    }
                    let rest = self.expect_variable(idx + 1)?;
                    let idx = self.expect_rparen(idx + 2)?;
                    return Some((Formals::FixedWithRest(vars, rest), idx));
                }
                Token::Eof => {
                    self.report_error(idx, "Unexpected end of input", DiagnosticCode::E_PARSE_UNEXPECTED_EOF);
                    return None;
                }
                _ => {
                    vars.push(self.expect_variable(idx)?);
                    idx += 1;
                }
            }
        }
    }

    fn parse_lambda(&self, i: usize) -> Option<(Ast, usize)> {
        let span = self.span_at(i);
        let (formals, idx) = self.parse_formals(i + 2)?;
        let (body, idx) = self.parse_body(idx)?;
        let idx = self.expect_rparen(idx)?;
        Some((Ast::Lambda(Lambda { formals, body, span }), idx))
    }

    fn parse_conditional(&self, i: usize) -> Option<(Ast, usize)> {
        let span = self.span_at(i);
        let (test, idx) = self.parse_expression(i + 2)?;
        let (consequent, idx) = self.parse_expression(idx)?;
        let (alternate, idx) = if matches!(self.token_at(idx), Token::RParen) {
            (None, idx)
        } else {
            let (alt, idx) = self.parse_expression(idx)?;
            (Some(Box::new(alt)), idx)
        };
        let idx = self.expect_rparen(idx)?;
        Some((
            Ast::Conditional(Conditional { test: Box::new(test), consequent: Box::new(consequent), alternate, span }),
            idx,
        ))
    }

    fn parse_assignment(&self, i: usize) -> Option<(Ast, usize)> {
        let span = self.span_at(i);
        let variable = self.expect_variable(i + 2)?;
        let (value, idx) = self.parse_expression(i + 3)?;
        let idx = self.expect_rparen(idx)?;
        Some((Ast::Assignment(Assignment { variable, value: Box::new(value), span }), idx))
    }

    /// Parses one `( test )` / `( test => recipient )` / `( test expr+ )`
    /// clause, or the `( else expr+ )` clause when `is_else` is true.
    fn parse_cond_clause(&self, i: usize, is_else: bool) -> Option<(Option<CondClause>, Vec<Ast>, usize)> {
        if is_else {
            let (seq, idx) = self.parse_sequence(i + 2)?;
            let idx = self.expect_rparen(idx)?;
            return Some((None, seq, idx));
        }
        let (test, idx) = self.parse_expression(i + 1)?;
        if matches!(self.token_at(idx), Token::RParen) {
            let idx = idx + 1;
            return Some((Some(CondClause::Test(Box::new(test))), Vec::new(), idx));
        }
        if self.ident_at(idx) == Some(KW_ARROW) {
            let (recipient, idx) = self.parse_expression(idx + 1)?;
            let idx = self.expect_rparen(idx)?;
            return Some((Some(CondClause::Arrow(Box::new(test), Box::new(recipient))), Vec::new(), idx));
        }
        let (seq, idx) = self.parse_sequence(idx)?;
        let idx = self.expect_rparen(idx)?;
        Some((Some(CondClause::Sequence(Box::new(test), seq)), Vec::new(), idx))
    }

    fn parse_cond(&self, i: usize) -> Option<(Ast, usize)> {
        let span = self.span_at(i);
        let mut idx = i + 2;
        let mut clauses = Vec::new();
        let mut else_seq = None;
        loop {
            match self.token_at(idx) {
                Token::RParen => {
                    idx += 1;
                    break;
                }
                Token::LParen => {
                    let is_else = self.ident_at(idx + 1) == Some(KW_ELSE);
                    let (clause, seq, next) = self.parse_cond_clause(idx, is_else)?;
                    match clause {
                        Some(c) => clauses.push(c),
                        None => {
                            else_seq = Some(seq);
                            idx = next;
                            break;
                        }
                    }
                    idx = next;
                }
                Token::Eof => {
                    self.report_error(idx, "Unexpected end of input", DiagnosticCode::E_PARSE_UNEXPECTED_EOF);
                    return None;
                }
                _ => {
                    self.report_error(idx, "Expecting <cond clause>", DiagnosticCode::E_PARSE_EXPECTING_TOKEN);
                    return None;
                }
            }
        }
        if clauses.is_empty() && else_seq.is_none() {
            self.report_error(idx, "No cond clause and not else specified", DiagnosticCode::E_PARSE_NO_COND_CLAUSE);
            return None;
        }
        Some((Ast::Cond(Cond { clauses, else_seq, span }), idx))
    }

    fn parse_case(&self, i: usize) -> Option<(Ast, usize)> {
        let span = self.span_at(i);
        let (key, mut idx) = self.parse_expression(i + 2)?;
        let mut clauses = Vec::new();
        let mut else_seq = None;
        loop {
            match self.token_at(idx) {
                Token::RParen => {
                    idx += 1;
                    break;
                }
                Token::LParen if self.ident_at(idx + 1) == Some(KW_ELSE) => {
                    let (seq, next) = self.parse_sequence(idx + 2)?;
                    let next = self.expect_rparen(next)?;
                    else_seq = Some(seq);
                    idx = next;
                    break;
                }
                Token::LParen => {
                    if !matches!(self.token_at(idx + 1), Token::LParen) {
                        self.report_error(idx + 1, "Expected closing parenthesis", DiagnosticCode::E_PARSE_EXPECTED_CLOSING_PAREN);
                        return None;
                    }
                    let mut datums = Vec::new();
                    let mut j = idx + 2;
                    loop {
                        match self.token_at(j) {
                            Token::RParen => {
                                j += 1;
                                break;
                            }
                            Token::Eof => {
                                self.report_error(j, "Unexpected end of input", DiagnosticCode::E_PARSE_UNEXPECTED_EOF);
                                return None;
                            }
                            _ => {
                                let (d, next) = read_datum(self.tokens, j, self.handler)?;
                                datums.push(d);
                                j = next;
                            }
                        }
                    }
                    let (exprs, next) = self.parse_sequence(j)?;
                    let next = self.expect_rparen(next)?;
                    clauses.push(CaseClause { datums, exprs });
                    idx = next;
                }
                Token::Eof => {
                    self.report_error(idx, "Unexpected end of input", DiagnosticCode::E_PARSE_UNEXPECTED_EOF);
                    return None;
                }
                _ => {
                    self.report_error(idx, "Expecting <case clause>", DiagnosticCode::E_PARSE_EXPECTING_TOKEN);
                    return None;
                }
            }
        }
        Some((Ast::Case(Case { key: Box::new(key), clauses, else_seq, span }), idx))
    }

    fn parse_and_or(&self, i: usize, is_and: bool) -> Option<(Ast, usize)> {
        let span = self.span_at(i);
        let mut idx = i + 2;
        let mut exprs = Vec::new();
        while !matches!(self.token_at(idx), Token::RParen) {
            if matches!(self.token_at(idx), Token::Eof) {
                self.report_error(idx, "Unexpected end of input", DiagnosticCode::E_PARSE_UNEXPECTED_EOF);
                return None;
            }
            let (e, next) = self.parse_expression(idx)?;
            exprs.push(e);
            idx = next;
        }
        let idx = self.expect_rparen(idx)?;
        Some((if is_and { Ast::And(exprs, span) } else { Ast::Or(exprs, span) }, idx))
    }

    fn parse_let(&self, i: usize, kind: LetKind) -> Option<(Ast, usize)> {
        let span = self.span_at(i);
        let mut idx = i + 2;
        let mut name = None;
        if kind == LetKind::Let {
            if let Some(sym) = self.ident_at(idx) {
                if !sym.is_known() {
                    name = Some(sym);
                    idx += 1;
                }
            }
        }
        if !matches!(self.token_at(idx), Token::LParen) {
            self.report_error(idx, "Expecting <binding list>", DiagnosticCode::E_PARSE_EXPECTING_TOKEN);
            return None;
        }
        idx += 1;
        let mut bindings = Vec::new();
        loop {
            match self.token_at(idx) {
                Token::RParen => {
                    idx += 1;
                    break;
                }
                Token::LParen => {
                    let variable = self.expect_variable(idx + 1)?;
                    let (init, next) = self.parse_expression(idx + 2)?;
                    let next = self.expect_rparen(next)?;
                    bindings.push(Binding { variable, init: Box::new(init) });
                    idx = next;
                }
                Token::Eof => {
                    self.report_error(idx, "Unexpected end of input", DiagnosticCode::E_PARSE_UNEXPECTED_EOF);
                    return None;
                }
                _ => {
                    self.report_error(idx, "Expecting <binding spec>", DiagnosticCode::E_PARSE_EXPECTING_TOKEN);
                    return None;
                }
            }
        }
        let (body, idx) = self.parse_body(idx)?;
        let idx = self.expect_rparen(idx)?;
        Some((Ast::Let(Let { kind, name, bindings, body, span }), idx))
    }

    fn parse_begin(&self, i: usize) -> Option<(Ast, usize)> {
        let span = self.span_at(i);
        let (exprs, idx) = self.parse_sequence(i + 2)?;
        let idx = self.expect_rparen(idx)?;
        Some((Ast::Begin(Begin { exprs, span }), idx))
    }

    fn parse_do(&self, i: usize) -> Option<(Ast, usize)> {
        let span = self.span_at(i);
        let mut idx = i + 2;
        if !matches!(self.token_at(idx), Token::LParen) {
            self.report_error(idx, "Expecting <iteration spec list>", DiagnosticCode::E_PARSE_EXPECTING_TOKEN);
            return None;
        }
        idx += 1;
        let mut specs = Vec::new();
        loop {
            match self.token_at(idx) {
                Token::RParen => {
                    idx += 1;
                    break;
                }
                Token::LParen => {
                    let variable = self.expect_variable(idx + 1)?;
                    let (init, next) = self.parse_expression(idx + 2)?;
                    let (step, next) = if matches!(self.token_at(next), Token::RParen) {
                        (None, next)
                    } else {
                        let (s, next) = self.parse_expression(next)?;
                        (Some(Box::new(s)), next)
                    };
                    let next = self.expect_rparen(next)?;
                    specs.push(IterationSpec { variable, init: Box::new(init), step });
                    idx = next;
                }
                Token::Eof => {
                    self.report_error(idx, "Unexpected end of input", DiagnosticCode::E_PARSE_UNEXPECTED_EOF);
                    return None;
                }
                _ => {
                    self.report_error(idx, "Expecting <iteration spec>", DiagnosticCode::E_PARSE_EXPECTING_TOKEN);
                    return None;
                }
            }
        }
        if !matches!(self.token_at(idx), Token::LParen) {
            self.report_error(idx, "Expecting <test>", DiagnosticCode::E_PARSE_EXPECTING_TOKEN);
            return None;
        }
        let (test, idx) = self.parse_expression(idx + 1)?;
        let (result, idx) = self.parse_sequence(idx)?;
        let idx = self.expect_rparen(idx)?;
        let mut commands = Vec::new();
        let mut idx = idx;
        while !matches!(self.token_at(idx), Token::RParen) {
            if matches!(self.token_at(idx), Token::Eof) {
                self.report_error(idx, "Unexpected end of input", DiagnosticCode::E_PARSE_UNEXPECTED_EOF);
                return None;
            }
            let (e, next) = self.parse_expression(idx)?;
            commands.push(e);
            idx = next;
        }
        let idx = self.expect_rparen(idx)?;
        Some((Ast::Do(Do { specs, test: Box::new(test), result, commands, span }), idx))
    }

    fn parse_delay(&self, i: usize) -> Option<(Ast, usize)> {
        let (expr, idx) = self.parse_expression(i + 2)?;
        let idx = self.expect_rparen(idx)?;
        Some((Ast::Delay(Box::new(expr)), idx))
    }

    fn parse_quote(&self, i: usize) -> Option<(Ast, usize)> {
        let (datum, idx) = read_datum(self.tokens, i + 2, self.handler)?;
        let idx = self.expect_rparen(idx)?;
        Some((Ast::Quote(datum), idx))
    }

    fn parse_quasiquote(&self, i: usize) -> Option<(Ast, usize)> {
        let (datum, idx) = read_datum(self.tokens, i + 2, self.handler)?;
        let idx = self.expect_rparen(idx)?;
        Some((Ast::Quasiquote(datum), idx))
    }
}
