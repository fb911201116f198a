//! Expression parsing for the calculator.
//!
//! Recursive descent over the keypad's operator set:
//!
//! ```text
//! expression ::= term (('+' | '-') term)*
//! term       ::= factor (('*' | '/') factor)*
//! factor     ::= '-' factor | NUMBER
//! ```
//!
//! `*` and `/` bind tighter than `+` and `-`; operators of equal
//! precedence associate left to right. There is no parenthesis or
//! percent token here; `%` is expanded to `/100` before parsing.

use super::EvalError;

/// Binary operator in the keypad's alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    fn apply(self, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
        match self {
            BinOp::Add => Ok(lhs + rhs),
            BinOp::Sub => Ok(lhs - rhs),
            BinOp::Mul => Ok(lhs * rhs),
            BinOp::Div => {
                if rhs == 0.0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(lhs / rhs)
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Token {
    Number(f64),
    Op(BinOp),
}

/// Parsed expression tree.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Expr {
    Number(f64),
    Neg(Box<Expr>),
    Bin {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    /// Evaluate the tree. The only runtime failure is division by zero;
    /// everything else was rejected at parse time.
    pub(super) fn eval(&self) -> Result<f64, EvalError> {
        match self {
            Expr::Number(n) => Ok(*n),
            Expr::Neg(inner) => Ok(-inner.eval()?),
            Expr::Bin { op, lhs, rhs } => op.apply(lhs.eval()?, rhs.eval()?),
        }
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(start, ch)) = chars.peek() {
        match ch {
            c if c.is_ascii_whitespace() => {
                chars.next();
            }
            '0'..='9' | '.' => {
                let mut end = start;
                let mut seen_dot = false;
                while let Some(&(i, c)) = chars.peek() {
                    if c.is_ascii_digit() || (c == '.' && !seen_dot) {
                        seen_dot |= c == '.';
                        end = i + c.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                let literal = &input[start..end];
                let value = literal
                    .parse()
                    .map_err(|_| EvalError::Parse(format!("invalid number {literal:?}")))?;
                tokens.push(Token::Number(value));
            }
            '+' => {
                chars.next();
                tokens.push(Token::Op(BinOp::Add));
            }
            '-' => {
                chars.next();
                tokens.push(Token::Op(BinOp::Sub));
            }
            '*' => {
                chars.next();
                tokens.push(Token::Op(BinOp::Mul));
            }
            '/' => {
                chars.next();
                tokens.push(Token::Op(BinOp::Div));
            }
            other => {
                return Err(EvalError::Parse(format!("unexpected character {other:?}")));
            }
        }
    }

    Ok(tokens)
}

/// Parse an expanded expression string into a tree.
pub(super) fn parse(input: &str) -> Result<Expr, EvalError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(EvalError::Empty);
    }

    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.expression()?;

    if parser.pos < parser.tokens.len() {
        return Err(EvalError::Parse("unexpected trailing token".into()));
    }

    Ok(expr)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn expression(&mut self) -> Result<Expr, EvalError> {
        let mut lhs = self.term()?;
        loop {
            let op = match self.peek() {
                Some(Token::Op(op @ (BinOp::Add | BinOp::Sub))) => *op,
                _ => break,
            };
            self.pos += 1;
            let rhs = self.term()?;
            lhs = Expr::Bin {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Expr, EvalError> {
        let mut lhs = self.factor()?;
        loop {
            let op = match self.peek() {
                Some(Token::Op(op @ (BinOp::Mul | BinOp::Div))) => *op,
                _ => break,
            };
            self.pos += 1;
            let rhs = self.factor()?;
            lhs = Expr::Bin {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn factor(&mut self) -> Result<Expr, EvalError> {
        match self.peek() {
            Some(Token::Op(BinOp::Sub)) => {
                self.pos += 1;
                Ok(Expr::Neg(Box::new(self.factor()?)))
            }
            Some(&Token::Number(value)) => {
                self.pos += 1;
                Ok(Expr::Number(value))
            }
            Some(Token::Op(_)) => Err(EvalError::Parse("expected a number".into())),
            None => Err(EvalError::Parse("unexpected end of expression".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: f64) -> Expr {
        Expr::Number(n)
    }

    fn bin(op: BinOp, lhs: Expr, rhs: Expr) -> Expr {
        Expr::Bin {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    #[test]
    fn tokenize_integer_and_decimal() {
        assert_eq!(tokenize("42").unwrap(), vec![Token::Number(42.0)]);
        assert_eq!(tokenize("3.14").unwrap(), vec![Token::Number(3.14)]);
        assert_eq!(tokenize(".5").unwrap(), vec![Token::Number(0.5)]);
    }

    #[test]
    fn tokenize_operators() {
        assert_eq!(
            tokenize("1+2-3*4/5").unwrap(),
            vec![
                Token::Number(1.0),
                Token::Op(BinOp::Add),
                Token::Number(2.0),
                Token::Op(BinOp::Sub),
                Token::Number(3.0),
                Token::Op(BinOp::Mul),
                Token::Number(4.0),
                Token::Op(BinOp::Div),
                Token::Number(5.0),
            ]
        );
    }

    #[test]
    fn tokenize_rejects_unknown_symbol() {
        assert!(matches!(tokenize("2@3"), Err(EvalError::Parse(_))));
    }

    #[test]
    fn tokenize_rejects_lone_dot() {
        assert!(matches!(tokenize("."), Err(EvalError::Parse(_))));
    }

    #[test]
    fn tokenize_splits_second_dot_into_new_number() {
        // "5..5" lexes as 5.0 then 0.5; the parser rejects the pair later.
        assert_eq!(
            tokenize("5..5").unwrap(),
            vec![Token::Number(5.0), Token::Number(0.5)]
        );
    }

    #[test]
    fn parse_single_number() {
        assert_eq!(parse("42").unwrap(), num(42.0));
    }

    #[test]
    fn parse_left_associative_chain() {
        // 1-2-3 is (1-2)-3, not 1-(2-3)
        assert_eq!(
            parse("1-2-3").unwrap(),
            bin(BinOp::Sub, bin(BinOp::Sub, num(1.0), num(2.0)), num(3.0))
        );
    }

    #[test]
    fn parse_multiplication_binds_tighter() {
        assert_eq!(
            parse("10-2*3").unwrap(),
            bin(BinOp::Sub, num(10.0), bin(BinOp::Mul, num(2.0), num(3.0)))
        );
    }

    #[test]
    fn parse_unary_minus() {
        assert_eq!(parse("-5").unwrap(), Expr::Neg(Box::new(num(5.0))));
    }

    #[test]
    fn parse_unary_minus_after_operator() {
        assert_eq!(
            parse("2*-3").unwrap(),
            bin(BinOp::Mul, num(2.0), Expr::Neg(Box::new(num(3.0))))
        );
    }

    #[test]
    fn parse_double_negation() {
        assert_eq!(
            parse("--5").unwrap(),
            Expr::Neg(Box::new(Expr::Neg(Box::new(num(5.0)))))
        );
    }

    #[test]
    fn parse_empty_and_whitespace() {
        assert_eq!(parse(""), Err(EvalError::Empty));
        assert_eq!(parse("   "), Err(EvalError::Empty));
    }

    #[test]
    fn parse_trailing_operator() {
        assert!(matches!(parse("2+"), Err(EvalError::Parse(_))));
    }

    #[test]
    fn parse_leading_binary_operator() {
        assert!(matches!(parse("+"), Err(EvalError::Parse(_))));
        assert!(matches!(parse("*2"), Err(EvalError::Parse(_))));
    }

    #[test]
    fn parse_adjacent_numbers() {
        assert!(matches!(parse("1 2"), Err(EvalError::Parse(_))));
    }

    #[test]
    fn eval_respects_precedence() {
        assert_eq!(parse("10-2*3").unwrap().eval(), Ok(4.0));
        assert_eq!(parse("2+3*4").unwrap().eval(), Ok(14.0));
    }

    #[test]
    fn eval_division_by_zero() {
        assert_eq!(parse("5/0").unwrap().eval(), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn eval_negation() {
        assert_eq!(parse("-5+3").unwrap().eval(), Ok(-2.0));
        assert_eq!(parse("--5").unwrap().eval(), Ok(5.0));
    }
}
