//! 替换打分：给定一对符号（有序、大小写不敏感）返回得分。

mod matrix;

pub use matrix::SubstitutionMatrix;

use crate::error::{AlignError, Result};

/// 符号对打分接口。
///
/// `score` 对于表中不存在的符号必须返回 [`AlignError::UnknownSymbol`]，
/// 不能静默地当作 0 分处理。
pub trait Scorer {
    fn score(&self, a: u8, b: u8) -> Result<i32>;

    /// 在建矩阵之前一次性检查整条序列，报告第一个未知符号的位置
    fn check_sequence(&self, seq: &[u8], label: &str) -> Result<()> {
        for (pos, &sym) in seq.iter().enumerate() {
            if self.score(sym, sym).is_err() {
                return Err(AlignError::unknown(sym, format!("{} at position {}", label, pos)));
            }
        }
        Ok(())
    }
}

impl<S: Scorer + ?Sized> Scorer for &S {
    #[inline]
    fn score(&self, a: u8, b: u8) -> Result<i32> {
        (**self).score(a, b)
    }

    fn check_sequence(&self, seq: &[u8], label: &str) -> Result<()> {
        (**self).check_sequence(seq, label)
    }
}

/// 固定的 match/mismatch 打分，任意字节都有定义
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchMismatch {
    pub match_score: i32,
    pub mismatch_score: i32,
}

impl MatchMismatch {
    pub fn new(match_score: i32, mismatch_score: i32) -> Self {
        Self { match_score, mismatch_score }
    }
}

impl Default for MatchMismatch {
    /// 教科书上的 +1 / -1
    fn default() -> Self {
        Self { match_score: 1, mismatch_score: -1 }
    }
}

impl Scorer for MatchMismatch {
    #[inline]
    fn score(&self, a: u8, b: u8) -> Result<i32> {
        if a.eq_ignore_ascii_case(&b) {
            Ok(self.match_score)
        } else {
            Ok(self.mismatch_score)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_mismatch_is_case_insensitive() {
        let s = MatchMismatch::default();
        assert_eq!(s.score(b'A', b'A').unwrap(), 1);
        assert_eq!(s.score(b'a', b'A').unwrap(), 1);
        assert_eq!(s.score(b'A', b'C').unwrap(), -1);
    }

    #[test]
    fn check_sequence_reports_first_unknown_position() {
        let table: SubstitutionMatrix = "A C\nA 1 -1\nC -1 1\n".parse().unwrap();
        assert!(table.check_sequence(b"ACCA", "sequence 1").is_ok());

        let err = table.check_sequence(b"ACNA", "sequence 2").unwrap_err();
        match err {
            AlignError::UnknownSymbol { symbol, location } => {
                assert_eq!(symbol, 'N');
                assert_eq!(location, "sequence 2 at position 2");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn scorer_works_through_references() {
        fn total<S: Scorer>(s: S) -> i32 {
            s.score(b'G', b'G').unwrap() + s.score(b'G', b'T').unwrap()
        }
        let s = MatchMismatch::new(5, -4);
        assert_eq!(total(&s), 1);
        assert_eq!(total(s), 1);
    }
}
