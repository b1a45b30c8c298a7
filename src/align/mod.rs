pub mod matrix;
pub mod traceback;

pub use matrix::{build_score_matrix, ScoreMatrix};
pub use traceback::{highroad_traceback, Alignment, GAP, MATCH_MARK};

use log::debug;

use crate::error::Result;
use crate::scoring::Scorer;

/// 一次全局比对的完整结果，独占其得分矩阵
#[derive(Clone, Debug)]
pub struct GlobalAlignment {
    pub alignment: Alignment,
    pub matrix: ScoreMatrix,
    pub gap_penalty: i32,
}

impl GlobalAlignment {
    pub fn score(&self) -> i32 {
        self.alignment.score
    }
}

/// 线性 gap 罚分的全局比对：先拒绝空白序列并检查符号，再建矩阵，最后 highroad 回溯
pub fn align_global<S: Scorer + ?Sized>(
    seq1: &[u8],
    seq2: &[u8],
    gap_penalty: i32,
    scorer: &S,
) -> Result<GlobalAlignment> {
    matrix::check_not_blank(seq1, "sequence 1")?;
    matrix::check_not_blank(seq2, "sequence 2")?;
    scorer.check_sequence(seq1, "sequence 1")?;
    scorer.check_sequence(seq2, "sequence 2")?;

    let matrix = build_score_matrix(seq1, seq2, gap_penalty, scorer)?;
    debug!("score matrix: {} x {}, final score {}", matrix.rows(), matrix.cols(), matrix.final_score());

    let alignment = highroad_traceback(seq1, seq2, &matrix, gap_penalty, scorer)?;
    debug!(
        "alignment: {} columns, {} matches, {} gaps, identity {:.3}",
        alignment.len(),
        alignment.matches(),
        alignment.gaps(),
        alignment.identity()
    );

    Ok(GlobalAlignment { alignment, matrix, gap_penalty })
}
