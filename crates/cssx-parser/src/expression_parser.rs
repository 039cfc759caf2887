//! Expression parser
//!
//! Recursive descent over a single fragment of input.
//!
//! Supported syntax:
//! - Calls: `:name(arg, arg, ...)`, nested freely
//! - String literals: `"href"`, `'x'`, backslash makes the next character literal
//! - Number literals: `2`, `-3`, `0.5`, `-.5`
//! - Anything else is raw selector text up to a top-level `,` or `)`

use crate::options::ParserOptions;
use crate::scanner::{is_digit, is_ident_part, is_ident_start, trim_ws, Cursor, ScanState};
use cssx_core::ast::{CallExpr, Expr, NumberLit, SelectorExpr, StringLit};
use cssx_core::error::{ParseErrorKind, Result};

/// Expression parser
pub struct ExpressionParser<'a> {
    cursor: Cursor<'a>,
    max_depth: usize,
    depth: usize,
}

impl<'a> ExpressionParser<'a> {
    /// Parser over a whole top-level input
    pub fn new(input: &'a str, options: &ParserOptions) -> Self {
        Self::with_base(input, 0, options)
    }

    /// Parser over a fragment that starts at `base` in the original input
    pub fn with_base(input: &'a str, base: usize, options: &ParserOptions) -> Self {
        Self {
            cursor: Cursor::new(input, base),
            max_depth: options.max_nesting_depth,
            depth: 0,
        }
    }

    /// Next unread byte, or 0 at end of input
    pub fn peek(&self) -> u8 {
        self.cursor.peek()
    }

    /// Fail unless only whitespace remains
    pub fn expect_end(&mut self) -> Result<()> {
        self.cursor.skip_ws();
        if !self.cursor.eof() {
            return Err(self.cursor.error(ParseErrorKind::TrailingInput));
        }
        Ok(())
    }

    /// Parse one expression, dispatching on the next significant character
    pub fn parse_expr(&mut self) -> Result<Expr> {
        self.cursor.skip_ws();
        if self.cursor.eof() {
            return Err(self.cursor.error(ParseErrorKind::UnexpectedEof));
        }

        match self.cursor.peek() {
            b',' | b')' => Err(self.cursor.error(ParseErrorKind::ExpectedExpression)),
            b':' => self.parse_call().map(Expr::Call),
            b'"' | b'\'' => self.parse_string().map(Expr::Str),
            ch if is_digit(ch) || self.has_negative_number_start() => {
                self.parse_number().map(Expr::Number)
            }
            _ => self.parse_selector().map(Expr::Selector),
        }
    }

    /// Parse `':' identifier '(' [expr (',' expr)*] ')'`
    pub fn parse_call(&mut self) -> Result<CallExpr> {
        let start = self.cursor.pos();
        if self.cursor.peek() != b':' {
            return Err(self.cursor.error(ParseErrorKind::ExpectedColon));
        }
        if self.depth >= self.max_depth {
            return Err(self.cursor.error_at(
                ParseErrorKind::NestingTooDeep {
                    limit: self.max_depth,
                },
                start,
            ));
        }
        self.cursor.bump();

        self.depth += 1;
        let call = self.parse_call_body(start);
        self.depth -= 1;
        call
    }

    fn parse_call_body(&mut self, start: usize) -> Result<CallExpr> {
        let name = self.parse_ident()?;
        self.cursor.skip_ws();
        if self.cursor.peek() != b'(' {
            return Err(self.cursor.error(ParseErrorKind::ExpectedOpenParen));
        }
        self.cursor.bump();
        self.cursor.skip_ws();

        let pos = self.cursor.rebase(start);
        let mut args = Vec::new();
        if self.cursor.peek() == b')' {
            self.cursor.bump();
            return Ok(CallExpr { name, args, pos });
        }

        loop {
            args.push(self.parse_expr()?);
            self.cursor.skip_ws();
            if self.cursor.eof() {
                return Err(self.cursor.error(ParseErrorKind::ExpectedCloseParen));
            }
            match self.cursor.peek() {
                b',' => {
                    self.cursor.bump();
                    self.cursor.skip_ws();
                    // No trailing comma
                    if self.cursor.peek() == b')' {
                        return Err(self.cursor.error(ParseErrorKind::ExpectedExpression));
                    }
                }
                b')' => {
                    self.cursor.bump();
                    log::trace!("parsed call :{}/{} at {}", name, args.len(), pos);
                    return Ok(CallExpr { name, args, pos });
                }
                _ => {
                    return Err(self.cursor.error(ParseErrorKind::ExpectedCommaOrCloseParen));
                }
            }
        }
    }

    fn parse_ident(&mut self) -> Result<String> {
        self.cursor.skip_ws();
        if self.cursor.eof() || !is_ident_start(self.cursor.peek()) {
            return Err(self.cursor.error(ParseErrorKind::ExpectedIdentifier));
        }
        let start = self.cursor.pos();
        self.cursor.bump();
        while !self.cursor.eof() && is_ident_part(self.cursor.peek()) {
            self.cursor.bump();
        }
        Ok(self.cursor.slice(start, self.cursor.pos()).to_string())
    }

    fn parse_string(&mut self) -> Result<StringLit> {
        let start = self.cursor.pos();
        let quote = self.cursor.bump();
        let mut value = String::new();
        let mut chunk = self.cursor.pos();

        while !self.cursor.eof() {
            let ch = self.cursor.peek();
            if ch == b'\\' {
                value.push_str(self.cursor.slice(chunk, self.cursor.pos()));
                self.cursor.bump();
                if self.cursor.eof() {
                    break;
                }
                // The escaped character starts the next verbatim chunk
                chunk = self.cursor.pos();
                self.cursor.bump();
            } else if ch == quote {
                value.push_str(self.cursor.slice(chunk, self.cursor.pos()));
                self.cursor.bump();
                return Ok(StringLit {
                    value,
                    pos: self.cursor.rebase(start),
                });
            } else {
                self.cursor.bump();
            }
        }

        Err(self.cursor.error(ParseErrorKind::UnterminatedString))
    }

    fn parse_number(&mut self) -> Result<NumberLit> {
        let start = self.cursor.pos();
        if self.cursor.peek() == b'-' {
            self.cursor.bump();
        }
        let digits_before = self.consume_digits();
        let mut digits_after = 0;
        if self.cursor.peek() == b'.' {
            self.cursor.bump();
            digits_after = self.consume_digits();
        }
        if digits_before == 0 && digits_after == 0 {
            return Err(self.cursor.error_at(ParseErrorKind::InvalidNumber, start));
        }

        let text = self.cursor.slice(start, self.cursor.pos());
        let value: f64 = text
            .parse()
            .map_err(|_| self.cursor.error_at(ParseErrorKind::InvalidNumber, start))?;
        // Out of f64 range saturates to infinity rather than failing
        if !value.is_finite() {
            return Err(self.cursor.error_at(ParseErrorKind::InvalidNumber, start));
        }
        Ok(NumberLit {
            value,
            pos: self.cursor.rebase(start),
        })
    }

    /// Scan raw selector text up to a `,` or `)` outside strings, brackets
    /// and parens
    fn parse_selector(&mut self) -> Result<SelectorExpr> {
        let start = self.cursor.pos();
        let mut state = ScanState::default();

        while !self.cursor.eof() {
            let ch = self.cursor.peek();
            if state.at_top_level() && (ch == b',' || ch == b')') {
                break;
            }
            state.advance(ch);
            self.cursor.bump();
        }

        let (raw, leading) = trim_ws(self.cursor.slice(start, self.cursor.pos()));
        if raw.is_empty() {
            return Err(self.cursor.error_at(ParseErrorKind::ExpectedSelector, start));
        }
        Ok(SelectorExpr {
            raw: raw.to_string(),
            pos: self.cursor.rebase(start + leading),
        })
    }

    fn consume_digits(&mut self) -> usize {
        let mut count = 0;
        while !self.cursor.eof() && is_digit(self.cursor.peek()) {
            self.cursor.bump();
            count += 1;
        }
        count
    }

    /// `-` immediately followed by a digit or `.`
    fn has_negative_number_start(&self) -> bool {
        if self.cursor.peek() != b'-' {
            return false;
        }
        let next = self.cursor.peek_at(1);
        is_digit(next) || next == b'.'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Expr> {
        ExpressionParser::new(input, &ParserOptions::default()).parse_expr()
    }

    #[test]
    fn test_parse_number_literal() {
        assert_eq!(parse("42").unwrap(), Expr::number(42.0, 0));
        assert_eq!(parse("3.5").unwrap(), Expr::number(3.5, 0));
        assert_eq!(parse("-2").unwrap(), Expr::number(-2.0, 0));
        assert_eq!(parse("-.5").unwrap(), Expr::number(-0.5, 0));
    }

    #[test]
    fn test_invalid_number() {
        let err = parse("-.").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidNumber);
        assert_eq!(err.pos, 0);
    }

    #[test]
    fn test_number_out_of_range() {
        let input = format!(":nth({})", "9".repeat(400));
        let err = parse(&input).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidNumber);
        assert_eq!(err.pos, 5);

        let err = parse(&format!("-{}", "9".repeat(400))).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidNumber);
        assert_eq!(err.pos, 0);
    }

    #[test]
    fn test_parse_string_literal() {
        assert_eq!(parse(r#""hello world""#).unwrap(), Expr::string("hello world", 0));
        assert_eq!(parse("'single'").unwrap(), Expr::string("single", 0));
    }

    #[test]
    fn test_string_escapes_are_copied_verbatim() {
        // Backslash keeps the next character and drops itself; no escape codes
        assert_eq!(parse(r#""a\"b""#).unwrap(), Expr::string(r#"a"b"#, 0));
        assert_eq!(parse(r#""a\nb""#).unwrap(), Expr::string("anb", 0));
        assert_eq!(parse(r#""a\\b""#).unwrap(), Expr::string(r"a\b", 0));
        assert_eq!(parse(r#""é\ü""#).unwrap(), Expr::string("éü", 0));
    }

    #[test]
    fn test_unterminated_string() {
        let err = parse(r#""abc"#).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnterminatedString);
        assert_eq!(err.pos, 4);

        let err = parse(r#""abc\"#).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnterminatedString);
    }

    #[test]
    fn test_parse_call() {
        let expr = parse(":count(.product)").unwrap();
        if let Expr::Call(CallExpr { name, args, pos }) = expr {
            assert_eq!(name, "count");
            assert_eq!(pos, 0);
            assert_eq!(args, vec![Expr::selector(".product", 7)]);
        } else {
            panic!("Expected call");
        }
    }

    #[test]
    fn test_parse_call_with_multiple_args() {
        let expr = parse(":nth(2, .section .item)").unwrap();
        if let Expr::Call(CallExpr { name, args, .. }) = expr {
            assert_eq!(name, "nth");
            assert_eq!(args, vec![Expr::number(2.0, 5), Expr::selector(".section .item", 8)]);
        } else {
            panic!("Expected call");
        }
    }

    #[test]
    fn test_selector_keeps_embedded_delimiters() {
        let expr = parse(r#":first(a[href*="x,y"])"#).unwrap();
        if let Expr::Call(CallExpr { args, .. }) = expr {
            assert_eq!(args, vec![Expr::selector(r#"a[href*="x,y"]"#, 7)]);
        } else {
            panic!("Expected call");
        }

        let expr = parse(":first(li:not(.a, .b))").unwrap();
        if let Expr::Call(CallExpr { args, .. }) = expr {
            assert_eq!(args, vec![Expr::selector("li:not(.a, .b)", 7)]);
        } else {
            panic!("Expected call");
        }
    }

    #[test]
    fn test_selector_is_trimmed() {
        let expr = parse(":first(  h1  )").unwrap();
        if let Expr::Call(CallExpr { args, .. }) = expr {
            assert_eq!(args, vec![Expr::selector("h1", 9)]);
        } else {
            panic!("Expected call");
        }
    }

    #[test]
    fn test_call_errors() {
        let cases = [
            (":", ParseErrorKind::ExpectedIdentifier, 1),
            (":1a()", ParseErrorKind::ExpectedIdentifier, 1),
            (":text", ParseErrorKind::ExpectedOpenParen, 5),
            (":text(", ParseErrorKind::UnexpectedEof, 6),
            (":text(h1", ParseErrorKind::ExpectedCloseParen, 8),
            (":attr(\"a\", )", ParseErrorKind::ExpectedExpression, 11),
            (":attr(,)", ParseErrorKind::ExpectedExpression, 6),
            (":attr(\"href\" :first(a))", ParseErrorKind::ExpectedCommaOrCloseParen, 13),
        ];
        for (input, kind, pos) in cases {
            let err = parse(input).unwrap_err();
            assert_eq!(err.kind, kind, "input {:?}", input);
            assert_eq!(err.pos, pos, "input {:?}", input);
        }
    }

    #[test]
    fn test_bare_delimiters_are_not_expressions() {
        assert_eq!(parse(")").unwrap_err().kind, ParseErrorKind::ExpectedExpression);
        assert_eq!(parse(",").unwrap_err().kind, ParseErrorKind::ExpectedExpression);
    }

    #[test]
    fn test_nesting_limit() {
        let options = ParserOptions::default().with_max_nesting_depth(2);
        let ok = ExpressionParser::new(":a(:b(h1))", &options).parse_expr();
        assert!(ok.is_ok());

        let err = ExpressionParser::new(":a(:b(:c(h1)))", &options)
            .parse_expr()
            .unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NestingTooDeep { limit: 2 });
        assert_eq!(err.pos, 6);
    }

    #[test]
    fn test_positions_are_rebased() {
        let mut parser = ExpressionParser::with_base(":nth(2)", 20, &ParserOptions::default());
        let call = parser.parse_call().unwrap();
        assert_eq!(call.pos, 20);
        assert_eq!(call.args[0].pos(), 25);

        let mut parser = ExpressionParser::with_base(":nth(", 20, &ParserOptions::default());
        assert_eq!(parser.parse_call().unwrap_err().pos, 25);
    }
}
