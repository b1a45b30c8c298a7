use std::fmt;
use std::ops::Index;

use crate::error::{AlignError, Result};
use crate::scoring::Scorer;

/// Needleman-Wunsch 动态规划得分矩阵。
///
/// `(len1 + 1) × (len2 + 1)` 个单元，行优先展平存储；
/// 单元 `(i, j)` 是 `seq1[..i]` 与 `seq2[..j]` 的最优全局比对得分。
/// 构建完成后不可变。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<i32>,
}

impl ScoreMatrix {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<i32> {
        if i < self.rows && j < self.cols {
            Some(self.cells[i * self.cols + j])
        } else {
            None
        }
    }

    pub fn row(&self, i: usize) -> &[i32] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    /// 右下角单元，即整条序列的最优得分
    pub fn final_score(&self) -> i32 {
        self.cells[self.cells.len() - 1]
    }
}

impl Index<(usize, usize)> for ScoreMatrix {
    type Output = i32;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &i32 {
        &self.cells[i * self.cols + j]
    }
}

impl fmt::Display for ScoreMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            let line: Vec<String> = self.row(i).iter().map(i32::to_string).collect();
            writeln!(f, "{}", line.join("\t"))?;
        }
        Ok(())
    }
}

/// 空序列或只含空白的序列不能参与比对
pub(crate) fn check_not_blank(seq: &[u8], label: &str) -> Result<()> {
    if seq.iter().all(u8::is_ascii_whitespace) {
        return Err(AlignError::invalid(format!("{} is empty", label)));
    }
    Ok(())
}

/// 按线性 gap 罚分的 Needleman-Wunsch 递推填充得分矩阵。
///
/// `gap_penalty` 直接相加（通常为负数）。填充阶段只保留三个候选的最大值，
/// 平局的取舍留给回溯。任何单元溢出 `i32` 都返回 `InvalidInput`，不做截断。
pub fn build_score_matrix<S: Scorer + ?Sized>(
    seq1: &[u8],
    seq2: &[u8],
    gap_penalty: i32,
    scorer: &S,
) -> Result<ScoreMatrix> {
    check_not_blank(seq1, "sequence 1")?;
    check_not_blank(seq2, "sequence 2")?;

    let m = seq1.len();
    let n = seq2.len();
    let rows = m + 1;
    let cols = n + 1;

    let boundary = |k: usize| -> Result<i32> {
        i32::try_from(k)
            .ok()
            .and_then(|k| k.checked_mul(gap_penalty))
            .ok_or_else(|| AlignError::invalid(format!("gap penalty {} overflows at length {}", gap_penalty, k)))
    };

    let mut cells = vec![0i32; rows * cols];
    for j in 1..cols {
        cells[j] = boundary(j)?;
    }
    for i in 1..rows {
        cells[i * cols] = boundary(i)?;
    }

    for i in 1..rows {
        let a = seq1[i - 1];
        for j in 1..cols {
            let idx = i * cols + j;
            let diag_idx = (i - 1) * cols + (j - 1);
            let up_idx = (i - 1) * cols + j;
            let left_idx = idx - 1;

            let overflow = || AlignError::invalid(format!("score overflow at cell ({}, {})", i, j));
            let diag = cells[diag_idx].checked_add(scorer.score(a, seq2[j - 1])?).ok_or_else(overflow)?;
            let left = cells[left_idx].checked_add(gap_penalty).ok_or_else(overflow)?;
            let top = cells[up_idx].checked_add(gap_penalty).ok_or_else(overflow)?;
            cells[idx] = diag.max(left).max(top);
        }
    }

    Ok(ScoreMatrix { rows, cols, cells })
}
