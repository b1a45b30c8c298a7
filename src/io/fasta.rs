use std::io::BufRead;

use crate::error::{AlignError, Result};

#[derive(Debug, Clone)]
pub struct FastaRecord {
    pub id: String,
    pub desc: Option<String>,
    pub seq: Vec<u8>,
}

/// 逐条读取 FASTA 记录。序列行中的空白被去掉，符号保持原样（不改大小写、不替换）。
pub struct FastaReader<'a, R: BufRead> {
    reader: R,
    origin: &'a str,
    buf: String,
    done: bool,
    peek_header: Option<String>,
}

impl<'a, R: BufRead> FastaReader<'a, R> {
    pub fn new(reader: R, origin: &'a str) -> Self {
        Self {
            reader,
            origin,
            buf: String::new(),
            done: false,
            peek_header: None,
        }
    }

    fn read_line(&mut self) -> Result<usize> {
        self.buf.clear();
        self.reader
            .read_line(&mut self.buf)
            .map_err(|e| AlignError::missing(self.origin, e.to_string()))
    }

    pub fn next_record(&mut self) -> Result<Option<FastaRecord>> {
        if self.done {
            return Ok(None);
        }

        // Find header line
        let header = if let Some(h) = self.peek_header.take() {
            h
        } else {
            loop {
                if self.read_line()? == 0 {
                    self.done = true;
                    return Ok(None);
                }
                if let Some(rest) = self.buf.strip_prefix('>') {
                    break rest.trim().to_string();
                }
                if !self.buf.trim().is_empty() {
                    return Err(AlignError::missing(
                        self.origin,
                        format!("sequence data before the first FASTA header: {:?}", self.buf.trim()),
                    ));
                }
            }
        };

        let mut parts = header.splitn(2, char::is_whitespace);
        let id = parts.next().unwrap_or("").to_string();
        let desc = parts
            .next()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let mut seq: Vec<u8> = Vec::new();
        loop {
            if self.read_line()? == 0 {
                self.done = true;
                break;
            }
            if let Some(rest) = self.buf.strip_prefix('>') {
                self.peek_header = Some(rest.trim().to_string());
                break;
            }
            seq.extend(self.buf.bytes().filter(|b| !b.is_ascii_whitespace()));
        }

        Ok(Some(FastaRecord { id, desc, seq }))
    }
}
