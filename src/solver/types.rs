use std::fmt::Display;
use std::ops::{BitXor, Not};

/// Representation for DL so I'm consistent
pub type DecisionLevel = u32;

/// Representation of a variable; ids run 1..=n_vars, so 0 is never a real variable.
pub type Var = usize;

/// How to compute n lits from v vars? Slot 0 (and thus lits 0 and 1) stays unused so that
/// DIMACS ids can index directly.
pub fn lits_from_vars(n_vars: usize) -> usize {
    (n_vars + 1) * 2
}

/// Representation of a Literal, using the DIMACS convention: the magnitude names the variable
/// and a negative value is the negated variable.
#[derive(Hash, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Lit {
    pub v: i64,
}

impl Lit {
    // Here, a TRUE sign == NEGATIVE
    pub fn new(var: Var, sign: bool) -> Lit {
        let v = var as i64;
        Lit {
            v: if sign { -v } else { v },
        }
    }

    pub fn from_dimacs(v: i64) -> Lit {
        Lit { v }
    }

    // Returns true if sign is negative.
    pub fn sign(&self) -> bool {
        self.v < 0
    }

    pub fn var(&self) -> Var {
        self.v.unsigned_abs() as Var
    }

    // Index into per-literal tables: 2 * var + sign
    #[inline(always)]
    pub fn idx(&self) -> usize {
        self.var() * 2 + self.sign() as usize
    }
}

impl Not for Lit {
    type Output = Self;
    fn not(self) -> Lit {
        Self { v: -self.v }
    }
}

impl Display for Lit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.v)
    }
}

// Represent false, true, or UNDEF (i.e. not yet assigned). We prefer this over an Option<Bool>,
// since we only really have 3 values (i.e. u8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum LBool {
    True = 0,  // 0
    False = 1, // 1
    #[default]
    Undef = 2, // 2
}

impl LBool {
    /// Value a variable takes when a literal with this sign is asserted.
    pub fn from_sign(s: bool) -> LBool {
        LBool::from(s as u8)
    }
}

impl From<LBool> for bool {
    #[inline(always)]
    fn from(value: LBool) -> Self {
        matches!(value, LBool::True)
    }
}

impl From<u8> for LBool {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => Self::True,
            1 => Self::False,
            _ => Self::Undef,
        }
    }
}

// Undef stays Undef under xor (2 ^ 1 == 3 -> Undef)
impl BitXor for LBool {
    type Output = Self;
    fn bitxor(self, rhs: Self) -> LBool {
        LBool::from((self as u8).bitxor(rhs as u8))
    }
}

// Status markers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    Unknown,
    SAT,
    UNSAT,
}

impl SolveStatus {
    /// Exit code expected by SAT competition style callers.
    pub fn exit_code(&self) -> i32 {
        match self {
            SolveStatus::Unknown => 0,
            SolveStatus::SAT => 20,
            SolveStatus::UNSAT => 10,
        }
    }
}

impl Display for SolveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SolveStatus::Unknown => "UNKNOWN",
            SolveStatus::SAT => "SAT",
            SolveStatus::UNSAT => "UNSAT",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lit_encoding() {
        let p = Lit::new(3, false);
        let n = !p;
        assert_eq!(p.v, 3);
        assert_eq!(n, Lit::from_dimacs(-3));
        assert!(!p.sign() && n.sign());
        assert_eq!(p.var(), n.var());
        assert_eq!(p.idx(), 6);
        assert_eq!(n.idx(), 7);
        assert_eq!(n.to_string(), "-3");
    }

    #[test]
    fn lit_values_through_xor() {
        let assigned = LBool::from_sign(false);
        assert_eq!(assigned, LBool::True);
        assert_eq!(assigned ^ LBool::from(1), LBool::False);
        assert_eq!(LBool::from_sign(true) ^ LBool::from(1), LBool::True);
        assert_eq!(LBool::Undef ^ LBool::from(1), LBool::Undef);
        assert_eq!(LBool::Undef ^ LBool::from(0), LBool::Undef);
    }

    #[test]
    fn exit_codes() {
        assert_eq!(SolveStatus::SAT.exit_code(), 20);
        assert_eq!(SolveStatus::UNSAT.exit_code(), 10);
    }
}
