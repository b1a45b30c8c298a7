use crate::error::{AlignError, Result};
use crate::scoring::Scorer;

use super::matrix::ScoreMatrix;

pub const GAP: char = '-';
pub const MATCH_MARK: char = '|';
const NO_MARK: char = ' ';

/// 一条最优全局比对：带 gap 的序列 1、匹配标记行、带 gap 的序列 2，以及得分。
/// 三行等长。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alignment {
    pub aligned1: String,
    pub match_line: String,
    pub aligned2: String,
    pub score: i32,
}

impl Alignment {
    /// 比对列数，即回溯步数
    pub fn len(&self) -> usize {
        self.match_line.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.match_line.is_empty()
    }

    pub fn matches(&self) -> usize {
        self.match_line.chars().filter(|&c| c == MATCH_MARK).count()
    }

    pub fn gaps(&self) -> usize {
        self.aligned1.chars().chain(self.aligned2.chars()).filter(|&c| c == GAP).count()
    }

    /// 匹配列占全部列的比例
    pub fn identity(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.matches() as f64 / self.len() as f64
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Move {
    Top,
    Diag,
    Left,
}

/// "Highroad" 回溯：从右下角走回原点，平局时优先 TOP，其次 DIAGONAL，最后 LEFT。
///
/// - TOP：输出 seq1 的符号，seq2 一侧为 gap
/// - DIAGONAL：两侧都输出符号，大小写不敏感相等时标记 `|`
/// - LEFT：seq1 一侧为 gap，输出 seq2 的符号
///
/// 矩阵必须由同样的序列、gap 罚分和打分器构建，否则返回 `InvalidInput`。
pub fn highroad_traceback<S: Scorer + ?Sized>(
    seq1: &[u8],
    seq2: &[u8],
    matrix: &ScoreMatrix,
    gap_penalty: i32,
    scorer: &S,
) -> Result<Alignment> {
    if matrix.rows() != seq1.len() + 1 || matrix.cols() != seq2.len() + 1 {
        return Err(AlignError::invalid(format!(
            "score matrix is {}x{} but sequences need {}x{}",
            matrix.rows(),
            matrix.cols(),
            seq1.len() + 1,
            seq2.len() + 1
        )));
    }

    let mut top_line: Vec<char> = Vec::with_capacity(seq1.len() + seq2.len());
    let mut mid_line: Vec<char> = Vec::with_capacity(seq1.len() + seq2.len());
    let mut bot_line: Vec<char> = Vec::with_capacity(seq1.len() + seq2.len());

    let mut i = seq1.len();
    let mut j = seq2.len();

    while i > 0 || j > 0 {
        let score = matrix[(i, j)];

        // 溢出的候选不可能重现任何单元
        let top = if i > 0 { matrix[(i - 1, j)].checked_add(gap_penalty) } else { None };
        let diag = if i > 0 && j > 0 {
            matrix[(i - 1, j - 1)].checked_add(scorer.score(seq1[i - 1], seq2[j - 1])?)
        } else {
            None
        };
        let left = if j > 0 { matrix[(i, j - 1)].checked_add(gap_penalty) } else { None };

        let mv = if top == Some(score) {
            Move::Top
        } else if diag == Some(score) {
            Move::Diag
        } else if left == Some(score) {
            Move::Left
        } else {
            return Err(AlignError::invalid(format!(
                "score matrix cell ({}, {}) = {} has no consistent predecessor",
                i, j, score
            )));
        };

        match mv {
            Move::Top => {
                top_line.push(char::from(seq1[i - 1]));
                mid_line.push(NO_MARK);
                bot_line.push(GAP);
                i -= 1;
            }
            Move::Diag => {
                let (a, b) = (seq1[i - 1], seq2[j - 1]);
                top_line.push(char::from(a));
                mid_line.push(if a.eq_ignore_ascii_case(&b) { MATCH_MARK } else { NO_MARK });
                bot_line.push(char::from(b));
                i -= 1;
                j -= 1;
            }
            Move::Left => {
                top_line.push(GAP);
                mid_line.push(NO_MARK);
                bot_line.push(char::from(seq2[j - 1]));
                j -= 1;
            }
        }
    }

    // 回溯是从尾到头进行的
    Ok(Alignment {
        aligned1: top_line.into_iter().rev().collect(),
        match_line: mid_line.into_iter().rev().collect(),
        aligned2: bot_line.into_iter().rev().collect(),
        score: matrix.final_score(),
    })
}
