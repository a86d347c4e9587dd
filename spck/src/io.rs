//! Reading and writing persisted code files
//!
//! The durable artifact is a plain text file: one line per row, the
//! ascending column indices of the 1-entries separated by single spaces,
//! with a trailing space before each newline. No header and no dimension
//! counts are stored; a consumer infers them from context.
//!
//! With the `serde` feature, a JSON description carrying both the
//! row-major and column-major adjacency can be written alongside.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Write a row view to a code file.
///
/// Byte format per row: each column index followed by one space, then a
/// newline. An empty row becomes a bare newline.
pub fn write_code_file<P: AsRef<Path>>(path: P, rows: &[Vec<usize>]) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for row in rows {
        for j in row {
            write!(out, "{j} ")?;
        }
        writeln!(out)?;
    }
    out.flush()
}

/// Read a row view back from a code file.
///
/// Tokens are whitespace-separated column indices; a blank line is an
/// empty row. Anything that does not parse as an index is an
/// `InvalidData` error.
pub fn read_code_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Vec<usize>>> {
    let reader = BufReader::new(File::open(path)?);
    let mut rows = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let row = line
            .split_whitespace()
            .map(|tok| {
                tok.parse::<usize>().map_err(|_| {
                    io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("invalid column index {tok:?}"),
                    )
                })
            })
            .collect::<io::Result<Vec<usize>>>()?;
        rows.push(row);
    }
    Ok(rows)
}

/// Row-major and column-major adjacency of a code, as stored in the JSON
/// sidecar next to the text artifact.
///
/// `parities[i]` lists the symbols involved in parity check i;
/// `symbols[j]` lists the parity checks symbol j participates in.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CodeDescription {
    pub parities: Vec<Vec<usize>>,
    pub symbols: Vec<Vec<usize>>,
}

#[cfg(feature = "serde")]
impl CodeDescription {
    /// Build both adjacencies from a row view over n columns.
    pub fn from_rows(rows: &[Vec<usize>], n: usize) -> Self {
        Self {
            parities: rows.to_vec(),
            symbols: spck_core::columns_from_rows(rows, n),
        }
    }
}

/// Write a code description as JSON.
#[cfg(feature = "serde")]
pub fn write_description<P: AsRef<Path>>(path: P, description: &CodeDescription) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut out, description)?;
    out.flush()
}

/// Read a code description back from JSON.
#[cfg(feature = "serde")]
pub fn read_description<P: AsRef<Path>>(path: P) -> io::Result<CodeDescription> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}
