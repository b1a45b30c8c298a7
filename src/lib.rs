//! # nw-rust
//!
//! Rust 实现的 Needleman-Wunsch 全局序列比对器（线性 gap 罚分）。
//!
//! 本 crate 提供：
//!
//! - **替换打分**：从文本表格加载的替换矩阵（大小写不敏感，O(1) 查表），以及固定 match/mismatch 打分
//! - **矩阵构建**：`(len1 + 1) × (len2 + 1)` 的动态规划得分矩阵
//! - **Highroad 回溯**：平局时按 TOP > DIAGONAL > LEFT 的优先级重建唯一一条最优比对
//! - **输入输出**：空行分隔或 FASTA 格式的序列对、文本报告
//!
//! ## 快速示例
//!
//! ```rust
//! use nw_rust::align::align_global;
//! use nw_rust::scoring::MatchMismatch;
//!
//! let res = align_global(b"GATTACA", b"GCATGCU", -1, &MatchMismatch::default()).unwrap();
//! assert_eq!(res.score(), 0);
//! assert_eq!(res.alignment.aligned1, "G-ATTACA");
//! assert_eq!(res.alignment.match_line, "| ||  | ");
//! assert_eq!(res.alignment.aligned2, "GCATG-CU");
//! ```
//!
//! ## 模块说明
//!
//! - [`scoring`] — `Scorer` 接口、替换矩阵、match/mismatch 打分
//! - [`align`] — 得分矩阵构建与 highroad 回溯
//! - [`io`] — 序列对与 gap 罚分解析
//! - [`report`] — 文本报告与得分矩阵输出
//! - [`util`] — 序列类型判断（DNA / 蛋白）
//! - [`error`] — 错误类型

pub mod error;
pub mod scoring;
pub mod align;
pub mod io;
pub mod report;
pub mod util;
