//! # Calculator Core
//!
//! The expression evaluator and the keypad state it serves.
//!
//! Input arrives as a raw string accumulated one button press at a time
//! (`"10+5%"`). [`evaluate`] expands every `%` to `/100`, parses the
//! result as ordinary arithmetic, and folds any failure into the fixed
//! display marker `"Error"`. Nothing panics past this boundary, and the
//! function is pure: same input, same output, no state.
//!
//! The percent expansion is a blind textual substitution: `"10+5%"`
//! becomes `"10+5/100"` (that is `10.05`), not "10 plus 5% of 10".

mod parser;

use std::fmt;

use log::debug;

/// Display text shown when an expression cannot produce a number.
pub const ERROR_MARKER: &str = "Error";

/// Why an expression failed to evaluate. Callers that only need the
/// display string can use [`evaluate`], which folds all of these into
/// [`ERROR_MARKER`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The expression was empty or all whitespace.
    Empty,
    /// The expression did not lex or parse (unknown symbol, trailing
    /// operator, missing operand).
    Parse(String),
    /// The right-hand side of a division was exactly zero.
    DivisionByZero,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::Empty => write!(f, "empty expression"),
            EvalError::Parse(msg) => write!(f, "parse error: {msg}"),
            EvalError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for EvalError {}

/// Evaluate a keypad expression into its display text.
///
/// On success, the numeric result is formatted with `f64`'s shortest
/// round-trip form (`"5"`, `"0.5"`, `"10.05"`). On any failure,
/// including division by zero, the result is [`ERROR_MARKER`].
pub fn evaluate(input: &str) -> String {
    match try_evaluate(input) {
        Ok(value) => format!("{value}"),
        Err(err) => {
            debug!("evaluate({input:?}) failed: {err}");
            ERROR_MARKER.to_string()
        }
    }
}

/// Result-returning variant of [`evaluate`] for callers that care which
/// way the expression failed.
pub fn try_evaluate(input: &str) -> Result<f64, EvalError> {
    let expanded = expand_percent(input);
    parser::parse(&expanded)?.eval()
}

/// `"50%"` → `"50/100"`. Applied before parsing, wherever `%` appears.
fn expand_percent(input: &str) -> String {
    input.replace('%', "/100")
}

/// One calculator button.
///
/// `Clear` and `Equals` are control keys consumed by [`Keypad::press`];
/// every other key appends a character to the input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Dot,
    Add,
    Sub,
    Mul,
    Div,
    Percent,
    Clear,
    Equals,
}

const DIGIT_LEGENDS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

impl Key {
    /// Map a typed character to its key, if it names one.
    pub fn from_char(c: char) -> Option<Key> {
        match c {
            '0'..='9' => Some(Key::Digit(c as u8 - b'0')),
            '.' => Some(Key::Dot),
            '+' => Some(Key::Add),
            '-' => Some(Key::Sub),
            '*' => Some(Key::Mul),
            '/' => Some(Key::Div),
            '%' => Some(Key::Percent),
            'c' | 'C' => Some(Key::Clear),
            '=' => Some(Key::Equals),
            _ => None,
        }
    }

    /// The label printed on the button face.
    pub fn legend(self) -> &'static str {
        match self {
            Key::Digit(d) => DIGIT_LEGENDS[usize::from(d)],
            Key::Dot => ".",
            Key::Add => "+",
            Key::Sub => "-",
            Key::Mul => "*",
            Key::Div => "/",
            Key::Percent => "%",
            Key::Clear => "C",
            Key::Equals => "=",
        }
    }

    /// The character appended to the input buffer, for non-control keys.
    fn input_char(self) -> Option<char> {
        match self {
            Key::Digit(d) => Some(char::from(b'0' + d)),
            Key::Dot => Some('.'),
            Key::Add => Some('+'),
            Key::Sub => Some('-'),
            Key::Mul => Some('*'),
            Key::Div => Some('/'),
            Key::Percent => Some('%'),
            Key::Clear | Key::Equals => None,
        }
    }
}

/// Two-field calculator state: the accumulating input buffer and the most
/// recent evaluation result.
///
/// For any key sequence without `=` or `C`, the buffer is exactly the
/// concatenation of the pressed tokens in order. `=` evaluates the buffer
/// into `result` and clears the buffer; `C` clears both. The previous
/// result stays on display while the next expression is typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keypad {
    pub input: String,
    pub result: Option<String>,
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one button press.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Equals => {
                self.result = Some(evaluate(&self.input));
                self.input.clear();
            }
            Key::Clear => {
                self.input.clear();
                self.result = None;
            }
            key => {
                if let Some(c) = key.input_char() {
                    self.input.push(c);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition() {
        assert_eq!(evaluate("2+3"), "5");
    }

    #[test]
    fn multiplication_before_subtraction() {
        assert_eq!(evaluate("10-2*3"), "4");
    }

    #[test]
    fn percent_expands_to_division_by_hundred() {
        assert_eq!(evaluate("50%"), "0.5");
    }

    #[test]
    fn percent_mid_expression_is_textual() {
        // 10+5% is 10 + 5/100, not "10 plus 5% of 10"
        assert_eq!(evaluate("10+5%"), "10.05");
    }

    #[test]
    fn division_by_zero_is_the_error_marker() {
        assert_eq!(evaluate("5/0"), ERROR_MARKER);
        assert_eq!(try_evaluate("5/0"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn malformed_expressions_are_the_error_marker() {
        assert_eq!(evaluate(""), ERROR_MARKER);
        assert_eq!(evaluate("+"), ERROR_MARKER);
        assert_eq!(evaluate("2+"), ERROR_MARKER);
        assert_eq!(evaluate("2++3"), ERROR_MARKER);
        assert_eq!(evaluate("abc"), ERROR_MARKER);
    }

    #[test]
    fn leading_minus_is_negation() {
        assert_eq!(evaluate("-5+3"), "-2");
    }

    #[test]
    fn decimals_round_trip() {
        assert_eq!(evaluate("1.5*2"), "3");
        assert_eq!(evaluate("7/2"), "3.5");
    }

    #[test]
    fn evaluation_is_idempotent() {
        for input in ["2+3", "10+5%", "5/0", ""] {
            assert_eq!(evaluate(input), evaluate(input));
        }
    }

    #[test]
    fn key_from_char_round_trips_through_legend() {
        for c in ['0', '7', '.', '+', '-', '*', '/', '%', '='] {
            let key = Key::from_char(c).unwrap();
            assert_eq!(key.legend(), c.to_string());
        }
        assert_eq!(Key::from_char('c'), Some(Key::Clear));
        assert_eq!(Key::from_char('x'), None);
    }

    #[test]
    fn buffer_is_concatenation_of_pressed_tokens() {
        let mut pad = Keypad::new();
        for key in [
            Key::Digit(1),
            Key::Digit(0),
            Key::Add,
            Key::Digit(5),
            Key::Percent,
        ] {
            pad.press(key);
        }
        assert_eq!(pad.input, "10+5%");
        assert_eq!(pad.result, None);
    }

    #[test]
    fn equals_evaluates_and_clears_the_buffer() {
        let mut pad = Keypad::new();
        for key in [Key::Digit(2), Key::Add, Key::Digit(3), Key::Equals] {
            pad.press(key);
        }
        assert_eq!(pad.result.as_deref(), Some("5"));
        assert!(pad.input.is_empty());
    }

    #[test]
    fn result_persists_while_the_next_expression_is_typed() {
        let mut pad = Keypad::new();
        for key in [Key::Digit(2), Key::Add, Key::Digit(3), Key::Equals] {
            pad.press(key);
        }
        pad.press(Key::Digit(7));
        assert_eq!(pad.result.as_deref(), Some("5"));
        assert_eq!(pad.input, "7");
    }

    #[test]
    fn clear_resets_both_fields() {
        let mut pad = Keypad::new();
        for key in [Key::Digit(9), Key::Equals, Key::Digit(1)] {
            pad.press(key);
        }
        pad.press(Key::Clear);
        assert_eq!(pad, Keypad::new());
    }

    #[test]
    fn equals_on_empty_buffer_shows_the_error_marker() {
        let mut pad = Keypad::new();
        pad.press(Key::Equals);
        assert_eq!(pad.result.as_deref(), Some(ERROR_MARKER));
    }
}
