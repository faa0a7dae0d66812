//! Reading and writing whitespace separated integers.

use std::io::{BufRead, Write};

use log::debug;

use crate::error::{Error, Result};
use crate::gaps::GapSequence;

/// Reads every whitespace separated integer from `reader`, across all lines.
pub fn read_numbers<R: BufRead>(reader: R) -> Result<Vec<i64>> {
    let mut numbers = Vec::new();

    for (line_idx, line) in reader.lines().enumerate() {
        let line = line?;
        for token in line.split_whitespace() {
            let value = token.parse::<i64>().map_err(|_| Error::Parse {
                line: line_idx + 1,
                token: token.to_owned(),
            })?;
            numbers.push(value);
        }
    }

    Ok(numbers)
}

/// Writes `numbers` space separated, followed by a newline.
pub fn write_numbers<W: Write>(mut writer: W, numbers: &[i64]) -> Result<()> {
    for (i, value) in numbers.iter().enumerate() {
        if i != 0 {
            writer.write_all(b" ")?;
        }
        write!(writer, "{value}")?;
    }
    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(())
}

/// Reads all numbers from `reader`, sorts them with `sequence` and writes them to `writer`.
///
/// Returns how many numbers were sorted. Nothing is written if the input is malformed.
pub fn sort_stream<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    sequence: GapSequence,
) -> Result<usize> {
    let mut numbers = read_numbers(reader)?;
    debug!(
        "read {} numbers, sorting with {} ({} gaps)",
        numbers.len(),
        sequence,
        sequence.gaps(numbers.len()).count()
    );

    crate::shellsort::sort(&mut numbers, sequence);
    write_numbers(writer, &numbers)?;

    Ok(numbers.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_across_lines() {
        let input = "23 12 1\n  8\t34 54\n\n2 3\n";
        assert_eq!(
            read_numbers(input.as_bytes()).unwrap(),
            [23, 12, 1, 8, 34, 54, 2, 3]
        );
    }

    #[test]
    fn reads_negative_and_empty() {
        assert_eq!(read_numbers("-5 +7 0".as_bytes()).unwrap(), [-5, 7, 0]);
        assert!(read_numbers("".as_bytes()).unwrap().is_empty());
        assert!(read_numbers(" \n\n ".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn malformed_token() {
        match read_numbers("1 2\n3 x4 5".as_bytes()) {
            Err(Error::Parse { line, token }) => {
                assert_eq!(line, 2);
                assert_eq!(token, "x4");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn writes_space_separated() {
        let mut out = Vec::new();
        write_numbers(&mut out, &[1, -2, 30]).unwrap();
        assert_eq!(out, b"1 -2 30\n");

        let mut out = Vec::new();
        write_numbers(&mut out, &[]).unwrap();
        assert_eq!(out, b"\n");
    }

    #[test]
    fn sorts_stream() {
        for sequence in GapSequence::ALL {
            let mut out = Vec::new();
            let input = "23 12 1 8\n34 54 2 3\n";
            let count = sort_stream(input.as_bytes(), &mut out, sequence).unwrap();

            assert_eq!(count, 8);
            assert_eq!(out, b"1 2 3 8 12 23 34 54\n");
        }
    }

    #[test]
    fn malformed_stream_writes_nothing() {
        let mut out = Vec::new();
        let res = sort_stream("3 2 one".as_bytes(), &mut out, GapSequence::Knuth);

        assert!(matches!(res, Err(Error::Parse { line: 1, .. })));
        assert!(out.is_empty());
    }
}
