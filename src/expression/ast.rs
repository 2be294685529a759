/// One of the four binary operators available to a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// All operators in enumeration order
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' | '×' => Some(Operator::Mul),
            '/' | '÷' => Some(Operator::Div),
            _ => None,
        }
    }

    /// Applies the operator with IEEE-754 semantics; division is real division
    #[inline]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Sub => left - right,
            Operator::Mul => left * right,
            Operator::Div => left / right,
        }
    }
}

/// Represents an arithmetic expression built from the four operands
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number(f64),
    Add(Box<Expression>, Box<Expression>),
    Sub(Box<Expression>, Box<Expression>),
    Mul(Box<Expression>, Box<Expression>),
    Div(Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn binary(op: Operator, left: Expression, right: Expression) -> Self {
        let (l, r) = (Box::new(left), Box::new(right));
        match op {
            Operator::Add => Expression::Add(l, r),
            Operator::Sub => Expression::Sub(l, r),
            Operator::Mul => Expression::Mul(l, r),
            Operator::Div => Expression::Div(l, r),
        }
    }

    /// The root operator, or `None` for a bare number
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Expression::Number(_) => None,
            Expression::Add(_, _) => Some(Operator::Add),
            Expression::Sub(_, _) => Some(Operator::Sub),
            Expression::Mul(_, _) => Some(Operator::Mul),
            Expression::Div(_, _) => Some(Operator::Div),
        }
    }

    /// Leaf values in left-to-right order
    pub fn leaves(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(4);
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves(&self, out: &mut Vec<f64>) {
        match self {
            Expression::Number(n) => out.push(*n),
            Expression::Add(l, r)
            | Expression::Sub(l, r)
            | Expression::Mul(l, r)
            | Expression::Div(l, r) => {
                l.collect_leaves(out);
                r.collect_leaves(out);
            }
        }
    }
}
