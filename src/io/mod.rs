pub mod fasta;
pub mod pair;

pub use pair::{read_sequence_pair, read_sequence_pair_file, SequencePair, SequenceRecord};

use crate::error::{AlignError, Result};

/// 解析命令行给出的 gap 罚分，只接受（可带符号的）整数
pub fn parse_gap_penalty(text: &str) -> Result<i32> {
    let t = text.trim();
    t.parse::<i32>()
        .map_err(|_| AlignError::invalid(format!("gap penalty must be an integer, got {:?}", text)))
}
