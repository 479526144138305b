//! Restricted arithmetic expressions in one variable `x`.
//!
//! User text is parsed into an [`Expr`] tree and evaluated by a small
//! interpreter. Only the operators `+ - * / ^` and the functions listed in
//! [`Builtin`] exist, so nothing the user types is ever executed as code.

mod error;
mod parser;

pub use error::{EvalError, ParseError};
pub use parser::parse;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Builtin {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Sqrt,
    Abs,
    Exp,
    Ln,
    Log,
    Log2,
    Floor,
    Ceil,
    Round,
    Sign,
    Min,
    Max,
    Pow,
    Atan2,
}

impl Builtin {
    pub const ALL: [Builtin; 23] = [
        Builtin::Sin,
        Builtin::Cos,
        Builtin::Tan,
        Builtin::Asin,
        Builtin::Acos,
        Builtin::Atan,
        Builtin::Sinh,
        Builtin::Cosh,
        Builtin::Tanh,
        Builtin::Sqrt,
        Builtin::Abs,
        Builtin::Exp,
        Builtin::Ln,
        Builtin::Log,
        Builtin::Log2,
        Builtin::Floor,
        Builtin::Ceil,
        Builtin::Round,
        Builtin::Sign,
        Builtin::Min,
        Builtin::Max,
        Builtin::Pow,
        Builtin::Atan2,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Sin => "sin",
            Builtin::Cos => "cos",
            Builtin::Tan => "tan",
            Builtin::Asin => "asin",
            Builtin::Acos => "acos",
            Builtin::Atan => "atan",
            Builtin::Sinh => "sinh",
            Builtin::Cosh => "cosh",
            Builtin::Tanh => "tanh",
            Builtin::Sqrt => "sqrt",
            Builtin::Abs => "abs",
            Builtin::Exp => "exp",
            Builtin::Ln => "ln",
            Builtin::Log => "log",
            Builtin::Log2 => "log2",
            Builtin::Floor => "floor",
            Builtin::Ceil => "ceil",
            Builtin::Round => "round",
            Builtin::Sign => "sign",
            Builtin::Min => "min",
            Builtin::Max => "max",
            Builtin::Pow => "pow",
            Builtin::Atan2 => "atan2",
        }
    }

    pub fn lookup(name: &str) -> Option<Builtin> {
        Builtin::ALL.into_iter().find(|b| b.name() == name)
    }

    pub fn arity(self) -> usize {
        match self {
            Builtin::Min | Builtin::Max | Builtin::Pow | Builtin::Atan2 => 2,
            _ => 1,
        }
    }

    fn apply(self, args: &[f64]) -> Result<f64, EvalError> {
        let a = args[0];
        let out = match self {
            Builtin::Sin => a.sin(),
            Builtin::Cos => a.cos(),
            Builtin::Tan => a.tan(),
            Builtin::Asin | Builtin::Acos if !(-1.0..=1.0).contains(&a) => {
                return Err(EvalError::Domain(self.name()));
            }
            Builtin::Asin => a.asin(),
            Builtin::Acos => a.acos(),
            Builtin::Atan => a.atan(),
            Builtin::Sinh => a.sinh(),
            Builtin::Cosh => a.cosh(),
            Builtin::Tanh => a.tanh(),
            Builtin::Sqrt if a < 0.0 => return Err(EvalError::Domain(self.name())),
            Builtin::Sqrt => a.sqrt(),
            Builtin::Abs => a.abs(),
            Builtin::Exp => a.exp(),
            Builtin::Ln | Builtin::Log | Builtin::Log2 if a <= 0.0 => {
                return Err(EvalError::Domain(self.name()));
            }
            Builtin::Ln => a.ln(),
            Builtin::Log => a.log10(),
            Builtin::Log2 => a.log2(),
            Builtin::Floor => a.floor(),
            Builtin::Ceil => a.ceil(),
            Builtin::Round => a.round(),
            Builtin::Sign if a == 0.0 => 0.0,
            Builtin::Sign => a.signum(),
            Builtin::Min => a.min(args[1]),
            Builtin::Max => a.max(args[1]),
            Builtin::Pow => a.powf(args[1]),
            Builtin::Atan2 => a.atan2(args[1]),
        };
        Ok(out)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Const(f64),
    Var,
    Neg(Box<Expr>),
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Call { func: Builtin, args: Vec<Expr> },
}

impl Expr {
    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        let v = match self {
            Expr::Const(c) => *c,
            Expr::Var => x,
            Expr::Neg(inner) => -inner.eval(x)?,
            Expr::Binary { op, lhs, rhs } => {
                let l = lhs.eval(x)?;
                let r = rhs.eval(x)?;
                match op {
                    BinOp::Add => l + r,
                    BinOp::Sub => l - r,
                    BinOp::Mul => l * r,
                    BinOp::Div if r == 0.0 => return Err(EvalError::DivisionByZero),
                    BinOp::Div => l / r,
                    BinOp::Pow => l.powf(r),
                }
            }
            Expr::Call { func, args } => {
                let vals = args
                    .iter()
                    .map(|a| a.eval(x))
                    .collect::<Result<Vec<_>, _>>()?;
                func.apply(&vals)?
            }
        };
        if v.is_finite() {
            Ok(v)
        } else {
            Err(EvalError::NonFinite)
        }
    }
}

/// The active function: a parsed expression plus the text it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct Function {
    source: String,
    expr: Expr,
}

impl Function {
    pub fn compile(source: &str) -> Result<Self, ParseError> {
        let expr = parse(source)?;
        Ok(Self {
            source: source.trim().to_string(),
            expr,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        self.expr.eval(x)
    }
}

impl Default for Function {
    fn default() -> Self {
        Self {
            source: "sin(x)".into(),
            expr: Expr::Call {
                func: Builtin::Sin,
                args: vec![Expr::Var],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(src: &str, x: f64) -> Result<f64, EvalError> {
        Function::compile(src).unwrap().eval(x)
    }

    #[test]
    fn square_at_two() {
        let v = eval("x*x", 2.0).unwrap();
        assert!((v - 4.0).abs() < 1e-12);
    }

    #[test]
    fn default_is_sine() {
        let f = Function::default();
        assert_eq!(f, Function::compile("sin(x)").unwrap());
        assert!((f.eval(std::f64::consts::FRAC_PI_2).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn builtins_and_constants() {
        assert!((eval("sqrt(x) + abs(-3)", 16.0).unwrap() - 7.0).abs() < 1e-12);
        assert!((eval("max(x, 2) * min(1, x)", 5.0).unwrap() - 5.0).abs() < 1e-12);
        assert!((eval("cos(pi)", 0.0).unwrap() + 1.0).abs() < 1e-12);
        assert!((eval("ln(e^2)", 0.0).unwrap() - 2.0).abs() < 1e-12);
        assert!((eval("log(1000) + log2(8)", 0.0).unwrap() - 6.0).abs() < 1e-12);
        assert_eq!(eval("sign(x)", -0.3).unwrap(), -1.0);
        assert_eq!(eval("sign(x)", 0.0).unwrap(), 0.0);
    }

    #[test]
    fn division_by_zero_is_reported() {
        assert_eq!(eval("1/x", 0.0), Err(EvalError::DivisionByZero));
        assert!((eval("1/x", 4.0).unwrap() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn domain_errors() {
        assert_eq!(eval("sqrt(x)", -1.0), Err(EvalError::Domain("sqrt")));
        assert_eq!(eval("ln(x)", 0.0), Err(EvalError::Domain("ln")));
        assert_eq!(eval("asin(x)", 2.0), Err(EvalError::Domain("asin")));
    }

    #[test]
    fn overflow_is_non_finite() {
        assert_eq!(eval("exp(x)", 1000.0), Err(EvalError::NonFinite));
        assert_eq!(eval("(-8)^(1/3)", 0.0), Err(EvalError::NonFinite));
    }

    #[test]
    fn builtin_lookup_round_trips_names() {
        for b in Builtin::ALL {
            assert_eq!(Builtin::lookup(b.name()), Some(b));
        }
        assert_eq!(Builtin::lookup("alert"), None);
    }
}
