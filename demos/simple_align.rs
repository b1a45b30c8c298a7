//! 演示如何在 library 模式下使用 nw-rust 进行全局比对。
//!
//! 运行方式：
//! ```bash
//! cargo run --example simple_align
//! ```

use nw_rust::align::align_global;
use nw_rust::report::{write_report, write_score_matrix};
use nw_rust::scoring::{MatchMismatch, SubstitutionMatrix};

const DNA_TABLE: &str = include_str!("../data/dna.txt");

fn main() -> anyhow::Result<()> {
    // 1. 经典教科书例子：+1 / -1，gap -1
    let seq1 = b"GATTACA";
    let seq2 = b"GCATGCU";
    let res = align_global(seq1, seq2, -1, &MatchMismatch::default())?;

    println!("序列 1: {}", String::from_utf8_lossy(seq1));
    println!("序列 2: {}", String::from_utf8_lossy(seq2));
    println!("得分矩阵 {} x {}:", res.matrix.rows(), res.matrix.cols());
    let mut stdout = std::io::stdout();
    write_score_matrix(&mut stdout, &res.matrix, seq1, seq2)?;
    println!();
    write_report(&mut stdout, seq1, &res)?;

    // 2. 使用替换矩阵文件
    let table: SubstitutionMatrix = DNA_TABLE.parse()?;
    let seq1 = b"ACGTTGCAACGT";
    let seq2 = b"acgtgcaTCGT";
    let res = align_global(seq1, seq2, -2, &table)?;
    println!();
    write_report(&mut stdout, seq1, &res)?;
    println!(
        "\n比对列数={}, 匹配={}, gap={}, identity={:.1}%",
        res.alignment.len(),
        res.alignment.matches(),
        res.alignment.gaps(),
        res.alignment.identity() * 100.0
    );

    println!("\n完成！");
    Ok(())
}
