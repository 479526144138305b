// Tokenizer and recursive-descent parser.
//
// expr    := term (('+' | '-') term)*
// term    := unary (('*' | '/') unary)*
// unary   := ('-' | '+') unary | power
// power   := primary ('^' unary)?
// primary := number | ident | ident '(' args ')' | '(' expr ')'

use super::{BinOp, Builtin, Expr, ParseError};

// Parens, signs, exponents and call arguments all nest through `unary`.
pub const MAX_DEPTH: usize = 256;
// Bounds left-leaning chains like `x+x+...`, which parse iteratively but evaluate recursively.
pub const MAX_TOKENS: usize = 2048;

#[derive(Clone, Debug, PartialEq)]
enum Tok {
    Num(f64),
    Ident(String),
    Op(char),
    LParen,
    RParen,
    Comma,
}

impl Tok {
    fn describe(&self) -> String {
        match self {
            Tok::Num(n) => n.to_string(),
            Tok::Ident(s) => s.clone(),
            Tok::Op(c) => c.to_string(),
            Tok::LParen => "(".into(),
            Tok::RParen => ")".into(),
            Tok::Comma => ",".into(),
        }
    }
}

fn tokenize(src: &str) -> Result<Vec<(Tok, usize)>, ParseError> {
    let bytes = src.as_bytes();
    let mut out = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i] as char;
        let start = i;
        match c {
            ' ' | '\t' | '\r' | '\n' => i += 1,
            '0'..='9' | '.' => {
                while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
                    i += 1;
                }
                // exponent: 2e-3, 1E5
                if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
                    let mut j = i + 1;
                    if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
                        j += 1;
                    }
                    if j < bytes.len() && bytes[j].is_ascii_digit() {
                        while j < bytes.len() && bytes[j].is_ascii_digit() {
                            j += 1;
                        }
                        i = j;
                    }
                }
                let text = &src[start..i];
                let n = text.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                    text: text.to_string(),
                    pos: start,
                })?;
                out.push((Tok::Num(n), start));
            }
            'a'..='z' | 'A'..='Z' | '_' => {
                while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                    i += 1;
                }
                out.push((Tok::Ident(src[start..i].to_string()), start));
            }
            '*' if bytes.get(i + 1) == Some(&b'*') => {
                out.push((Tok::Op('^'), start));
                i += 2;
            }
            '+' | '-' | '*' | '/' | '^' => {
                out.push((Tok::Op(c), start));
                i += 1;
            }
            '(' => {
                out.push((Tok::LParen, start));
                i += 1;
            }
            ')' => {
                out.push((Tok::RParen, start));
                i += 1;
            }
            ',' => {
                out.push((Tok::Comma, start));
                i += 1;
            }
            _ => {
                let ch = src[start..].chars().next().unwrap_or(c);
                return Err(ParseError::UnexpectedChar { ch, pos: start });
            }
        }
    }
    Ok(out)
}

struct Parser {
    toks: Vec<(Tok, usize)>,
    at: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Tok> {
        self.toks.get(self.at).map(|(t, _)| t)
    }

    fn next(&mut self) -> Option<(Tok, usize)> {
        let t = self.toks.get(self.at).cloned();
        if t.is_some() {
            self.at += 1;
        }
        t
    }

    fn unexpected(tok: &Tok, pos: usize) -> ParseError {
        ParseError::UnexpectedToken {
            found: tok.describe(),
            pos,
        }
    }

    fn expect(&mut self, want: Tok) -> Result<(), ParseError> {
        match self.next() {
            Some((t, _)) if t == want => Ok(()),
            Some((t, pos)) => Err(Self::unexpected(&t, pos)),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    fn expr(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.term()?;
        while let Some(Tok::Op(c @ ('+' | '-'))) = self.peek() {
            let op = if *c == '+' { BinOp::Add } else { BinOp::Sub };
            self.at += 1;
            let rhs = self.term()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.unary()?;
        while let Some(Tok::Op(c @ ('*' | '/'))) = self.peek() {
            let op = if *c == '*' { BinOp::Mul } else { BinOp::Div };
            self.at += 1;
            let rhs = self.unary()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::TooDeep { limit: MAX_DEPTH });
        }
        self.depth += 1;
        let out = self.signed();
        self.depth -= 1;
        out
    }

    fn signed(&mut self) -> Result<Expr, ParseError> {
        match self.peek() {
            Some(Tok::Op('-')) => {
                self.at += 1;
                Ok(Expr::Neg(Box::new(self.unary()?)))
            }
            Some(Tok::Op('+')) => {
                self.at += 1;
                self.unary()
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<Expr, ParseError> {
        let base = self.primary()?;
        if let Some(Tok::Op('^')) = self.peek() {
            self.at += 1;
            // right-associative; exponent may carry its own sign (2^-x)
            let exp = self.unary()?;
            return Ok(Expr::Binary {
                op: BinOp::Pow,
                lhs: Box::new(base),
                rhs: Box::new(exp),
            });
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        let (tok, pos) = self.next().ok_or(ParseError::UnexpectedEnd)?;
        match tok {
            Tok::Num(n) => Ok(Expr::Const(n)),
            Tok::LParen => {
                let inner = self.expr()?;
                self.expect(Tok::RParen)?;
                Ok(inner)
            }
            Tok::Ident(name) if self.peek() == Some(&Tok::LParen) => self.call(name, pos),
            Tok::Ident(name) => match name.as_str() {
                "x" => Ok(Expr::Var),
                "pi" => Ok(Expr::Const(std::f64::consts::PI)),
                "e" => Ok(Expr::Const(std::f64::consts::E)),
                _ => Err(ParseError::UnknownIdent { name: name.clone(), pos }),
            },
            other => Err(Self::unexpected(&other, pos)),
        }
    }

    fn call(&mut self, name: String, pos: usize) -> Result<Expr, ParseError> {
        let func = Builtin::lookup(&name).ok_or(ParseError::UnknownFunction { name, pos })?;
        self.expect(Tok::LParen)?;
        let mut args = Vec::new();
        if self.peek() == Some(&Tok::RParen) {
            self.at += 1;
        } else {
            loop {
                args.push(self.expr()?);
                match self.next() {
                    Some((Tok::Comma, _)) => continue,
                    Some((Tok::RParen, _)) => break,
                    Some((t, p)) => return Err(Self::unexpected(&t, p)),
                    None => return Err(ParseError::UnexpectedEnd),
                }
            }
        }
        if args.len() != func.arity() {
            return Err(ParseError::Arity {
                name: func.name(),
                expected: func.arity(),
                found: args.len(),
            });
        }
        Ok(Expr::Call { func, args })
    }
}

pub fn parse(src: &str) -> Result<Expr, ParseError> {
    let toks = tokenize(src)?;
    if toks.is_empty() {
        return Err(ParseError::Empty);
    }
    if toks.len() > MAX_TOKENS {
        return Err(ParseError::TooLong { limit: MAX_TOKENS });
    }
    let mut p = Parser {
        toks,
        at: 0,
        depth: 0,
    };
    let expr = p.expr()?;
    match p.next() {
        None => Ok(expr),
        Some((t, pos)) => Err(Parser::unexpected(&t, pos)),
    }
}
