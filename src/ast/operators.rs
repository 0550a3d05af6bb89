use std::fmt;

/// Binary arithmetic and bit operators joining two atoms.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathOperator {
    Add,
    Sub,
    Mul,
    Div,
    IntDiv,
    Mod,
    BitAnd,
    BitOr,
    BitXor,
    ShiftLeft,
    ShiftRight,
}

impl MathOperator {
    pub fn literal(&self) -> &'static str {
        match self {
            MathOperator::Add => "+",
            MathOperator::Sub => "-",
            MathOperator::Mul => "*",
            MathOperator::Div => "/",
            MathOperator::IntDiv => "DIV",
            MathOperator::Mod => "%",
            MathOperator::BitAnd => "&",
            MathOperator::BitOr => "|",
            MathOperator::BitXor => "^",
            MathOperator::ShiftLeft => "<<",
            MathOperator::ShiftRight => ">>",
        }
    }

    pub fn parse(token: &str) -> Option<MathOperator> {
        let op = match token {
            "+" => MathOperator::Add,
            "-" => MathOperator::Sub,
            "*" => MathOperator::Mul,
            "/" => MathOperator::Div,
            "%" => MathOperator::Mod,
            "&" => MathOperator::BitAnd,
            "|" => MathOperator::BitOr,
            "^" => MathOperator::BitXor,
            "<<" => MathOperator::ShiftLeft,
            ">>" => MathOperator::ShiftRight,
            t if t.eq_ignore_ascii_case("DIV") => MathOperator::IntDiv,
            t if t.eq_ignore_ascii_case("MOD") => MathOperator::Mod,
            _ => return None,
        };
        Some(op)
    }
}

impl fmt::Display for MathOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal())
    }
}

impl fmt::Debug for MathOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MathOperator({})", self)
    }
}

/// Prefix operators of a unary atom.
///
/// Keyword operators carry their trailing space so the operand can be glued
/// directly after the token.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Minus,
    Plus,
    BitNot,
    Bang,
    Not,
    Binary,
}

impl UnaryOperator {
    pub fn literal(&self) -> &'static str {
        match self {
            UnaryOperator::Minus => "-",
            UnaryOperator::Plus => "+",
            UnaryOperator::BitNot => "~",
            UnaryOperator::Bang => "!",
            UnaryOperator::Not => "NOT ",
            UnaryOperator::Binary => "BINARY ",
        }
    }

    pub fn parse(token: &str) -> Option<UnaryOperator> {
        let op = match token.trim_end() {
            "-" => UnaryOperator::Minus,
            "+" => UnaryOperator::Plus,
            "~" => UnaryOperator::BitNot,
            "!" => UnaryOperator::Bang,
            t if t.eq_ignore_ascii_case("NOT") => UnaryOperator::Not,
            t if t.eq_ignore_ascii_case("BINARY") => UnaryOperator::Binary,
            _ => return None,
        };
        Some(op)
    }

    pub fn is_negation(&self) -> bool {
        matches!(self, UnaryOperator::Bang | UnaryOperator::Not)
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal().trim_end())
    }
}

impl fmt::Debug for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnaryOperator({})", self)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    NullSafeEq,
}

impl ComparisonOperator {
    pub fn literal(&self) -> &'static str {
        match self {
            ComparisonOperator::Eq => "=",
            ComparisonOperator::NotEq => "<>",
            ComparisonOperator::Lt => "<",
            ComparisonOperator::LtEq => "<=",
            ComparisonOperator::Gt => ">",
            ComparisonOperator::GtEq => ">=",
            ComparisonOperator::NullSafeEq => "<=>",
        }
    }

    pub fn parse(token: &str) -> Option<ComparisonOperator> {
        let op = match token {
            "=" => ComparisonOperator::Eq,
            "<>" | "!=" => ComparisonOperator::NotEq,
            "<" => ComparisonOperator::Lt,
            "<=" => ComparisonOperator::LtEq,
            ">" => ComparisonOperator::Gt,
            ">=" => ComparisonOperator::GtEq,
            "<=>" => ComparisonOperator::NullSafeEq,
            _ => return None,
        };
        Some(op)
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal())
    }
}

impl fmt::Debug for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComparisonOperator({})", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOperator {
    And,
    Or,
    Xor,
}

impl LogicalOperator {
    pub fn literal(&self) -> &'static str {
        match self {
            LogicalOperator::And => "AND",
            LogicalOperator::Or => "OR",
            LogicalOperator::Xor => "XOR",
        }
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal())
    }
}
