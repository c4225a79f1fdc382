//! Operators and builtin function selectors.
//!
//! All types are `Copy` and carry their source-level symbol for trace output.

/// Arithmetic binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    /// Floating-point remainder; the sign follows the dividend.
    Mod,
    Pow,
}

impl ArithOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
        }
    }

    /// Returns the word used for this operator in trace output.
    pub const fn trace_name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "subtract",
            Self::Mul => "multiply",
            Self::Div => "divide",
            Self::Mod => "modulo",
            Self::Pow => "power",
        }
    }
}

/// Comparison operators. Evaluate to `1.0` or `0.0`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CompareOp {
    Gt,
    Lt,
    NotEq,
    Eq,
    GtEq,
    LtEq,
}

impl CompareOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Gt => ">",
            Self::Lt => "<",
            Self::NotEq => "!=",
            Self::Eq => "==",
            Self::GtEq => ">=",
            Self::LtEq => "<=",
        }
    }

    /// Look up an operator by its source symbol.
    ///
    /// Front ends use this to turn a comparison token into an operator.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            ">" => Some(Self::Gt),
            "<" => Some(Self::Lt),
            "!=" => Some(Self::NotEq),
            "==" => Some(Self::Eq),
            ">=" => Some(Self::GtEq),
            "<=" => Some(Self::LtEq),
            _ => None,
        }
    }
}

/// Single-argument builtin functions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryBuiltin {
    Sqrt,
    Exp,
    Log,
    /// Writes the operand to the output stream and passes it through.
    Display,
}

impl UnaryBuiltin {
    /// The name a program uses to call this builtin.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt",
            Self::Exp => "exp",
            Self::Log => "log",
            Self::Display => "display",
        }
    }

    /// Look up a builtin by its call name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sqrt" => Some(Self::Sqrt),
            "exp" => Some(Self::Exp),
            "log" => Some(Self::Log),
            "display" => Some(Self::Display),
            _ => None,
        }
    }
}

/// Two-argument builtin functions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryBuiltin {
    Pow,
}

impl BinaryBuiltin {
    /// The name a program uses to call this builtin.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pow => "pow",
        }
    }

    /// Look up a builtin by its call name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pow" => Some(Self::Pow),
            _ => None,
        }
    }
}
