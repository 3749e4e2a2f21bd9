use std::fmt;


/// One of the four binary arithmetic operators accepted in RPN input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticOperator {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithmeticOperator {
    /// Every supported operator, in precedence order
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Get the operator written as the given single character, if any
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// Binding strength of the operator, higher binds tighter
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// LaTeX math-mode command used to typeset the operator
    pub const fn latex(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => r"\times",
            Self::Div => r"\div",
        }
    }

    /// Whether `a op (b op c)` may be written without parentheses as `a op b op c`.
    /// Subtraction and division regroup differently when nested on the right.
    pub const fn is_commutative(self) -> bool {
        !matches!(self, Self::Sub | Self::Div)
    }
}

impl fmt::Display for ArithmeticOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Add => '+',
                Self::Sub => '-',
                Self::Mul => '*',
                Self::Div => '/',
            }
        )
    }
}
