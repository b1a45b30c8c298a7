use std::io::BufRead;
use std::path::Path;

use log::warn;

use crate::error::{AlignError, Result};

use super::fasta::FastaReader;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    /// FASTA 输入时的记录名；空行分隔的输入没有名字
    pub id: Option<String>,
    /// FASTA 头中记录名之后的描述
    pub desc: Option<String>,
    pub seq: Vec<u8>,
}

impl SequenceRecord {
    /// 日志中使用的名字：`id desc`、`id`，无名时为 `fallback`
    pub fn label(&self, fallback: &str) -> String {
        match (&self.id, &self.desc) {
            (Some(id), Some(desc)) => format!("{} {}", id, desc),
            (Some(id), None) => id.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencePair {
    pub first: SequenceRecord,
    pub second: SequenceRecord,
}

/// 从一个文本源读取两条序列。
///
/// 支持两种布局：
/// - FASTA：第一行非空内容以 `>` 开头，取前两条记录
/// - 纯文本：序列块之间以空行分隔，块内各行拼接并去掉所有空白
///
/// 多余的序列会被忽略（记录一条 warning）。
pub fn read_sequence_pair<R: BufRead>(mut reader: R, origin: &str) -> Result<SequencePair> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| AlignError::missing(origin, e.to_string()))?;

    let is_fasta = text
        .lines()
        .find(|l| !l.trim().is_empty())
        .is_some_and(|l| l.starts_with('>'));

    let records = if is_fasta { fasta_records(&text, origin)? } else { blank_line_blocks(&text) };
    let found = records.len();
    if found > 2 {
        warn!("{}: ignoring {} sequence(s) after the first two", origin, found - 2);
    }

    let mut it = records.into_iter();
    match (it.next(), it.next()) {
        (Some(first), Some(second)) => Ok(SequencePair { first, second }),
        _ => Err(AlignError::missing(origin, format!("expected two sequences, found {}", found))),
    }
}

pub fn read_sequence_pair_file<P: AsRef<Path>>(path: P) -> Result<SequencePair> {
    let path = path.as_ref();
    let origin = path.display().to_string();
    let f = std::fs::File::open(path).map_err(|e| AlignError::missing(&origin, e.to_string()))?;
    read_sequence_pair(std::io::BufReader::new(f), &origin)
}

fn fasta_records(text: &str, origin: &str) -> Result<Vec<SequenceRecord>> {
    let mut reader = FastaReader::new(text.as_bytes(), origin);
    let mut records = Vec::new();
    while let Some(rec) = reader.next_record()? {
        records.push(SequenceRecord { id: Some(rec.id), desc: rec.desc, seq: rec.seq });
    }
    Ok(records)
}

fn blank_line_blocks(text: &str) -> Vec<SequenceRecord> {
    let mut records = Vec::new();
    let mut cur: Vec<u8> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !cur.is_empty() {
                records.push(SequenceRecord { id: None, desc: None, seq: std::mem::take(&mut cur) });
            }
            continue;
        }
        cur.extend(line.bytes().filter(|b| !b.is_ascii_whitespace()));
    }
    if !cur.is_empty() {
        records.push(SequenceRecord { id: None, desc: None, seq: cur });
    }
    records
}
