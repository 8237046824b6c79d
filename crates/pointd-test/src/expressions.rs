//! Expression inputs as a player would type them into a points field.

/// A well-formed expression and the value it evaluates to.
#[derive(Debug, Clone, Copy)]
pub struct ExpressionCase {
    pub input: &'static str,
    pub expected: f64,
}

impl ExpressionCase {
    pub const fn new(input: &'static str, expected: f64) -> Self {
        ExpressionCase { input, expected }
    }
}

/// Which family of failure a malformed expression should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedKind {
    MismatchedParentheses,
    MissingOperands,
    TooManyArguments,
    EmptyExpression,
    InvalidNumber,
}

/// An expression that must be rejected.
#[derive(Debug, Clone, Copy)]
pub struct MalformedCase {
    pub input: &'static str,
    pub kind: MalformedKind,
}

impl MalformedCase {
    pub const fn new(input: &'static str, kind: MalformedKind) -> Self {
        MalformedCase { input, kind }
    }
}

pub const VALID_EXPRESSIONS: &[ExpressionCase] = &[
    ExpressionCase::new("12", 12.0),
    ExpressionCase::new("12+8*2", 28.0),
    ExpressionCase::new("(2+3)*4", 20.0),
    ExpressionCase::new("10-4-3", 3.0),
    ExpressionCase::new("100/10/2", 5.0),
    ExpressionCase::new("2*(3+4)*5", 70.0),
    ExpressionCase::new("((7))", 7.0),
    ExpressionCase::new(" 150 + 75 ", 225.0),
    ExpressionCase::new("\t3\t*\t3", 9.0),
    ExpressionCase::new("1.5*4", 6.0),
    ExpressionCase::new("2,5+0,5", 3.0),
    ExpressionCase::new("200+150+125-50", 425.0),
];

pub const MALFORMED_EXPRESSIONS: &[MalformedCase] = &[
    MalformedCase::new("2+*3", MalformedKind::MissingOperands),
    MalformedCase::new("+", MalformedKind::MissingOperands),
    MalformedCase::new("4*", MalformedKind::MissingOperands),
    MalformedCase::new("(1+2", MalformedKind::MismatchedParentheses),
    MalformedCase::new("1+2)", MalformedKind::MismatchedParentheses),
    MalformedCase::new(")(", MalformedKind::MismatchedParentheses),
    MalformedCase::new("2 3", MalformedKind::TooManyArguments),
    MalformedCase::new("(1)(2)", MalformedKind::TooManyArguments),
    MalformedCase::new("", MalformedKind::EmptyExpression),
    MalformedCase::new("()", MalformedKind::EmptyExpression),
    MalformedCase::new("1.2.3", MalformedKind::InvalidNumber),
    MalformedCase::new(",", MalformedKind::InvalidNumber),
];
