use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::error::Result;

/// Reads one sequence per line, taking each line as its raw bytes.
pub fn read_sequences(path: impl AsRef<Path>) -> Result<Vec<Vec<u8>>> {
    read_sequences_from(BufReader::new(File::open(path)?))
}

pub fn read_sequences_from(mut input: impl BufRead) -> Result<Vec<Vec<u8>>> {
    let mut sequences = Vec::new();
    let mut line = Vec::new();

    while input.read_until(b'\n', &mut line)? > 0 {
        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }
        sequences.push(std::mem::take(&mut line));
    }

    Ok(sequences)
}

#[cfg(test)]
mod tests {
    use super::read_sequences_from;

    #[test]
    fn lines_become_byte_sequences() {
        let sequences = read_sequences_from(&b"banana\r\n\nvanilla\npeanut"[..]).unwrap();
        assert_eq!(
            sequences,
            [
                b"banana".to_vec(),
                Vec::new(),
                b"vanilla".to_vec(),
                b"peanut".to_vec()
            ]
        );
    }

    #[test]
    fn non_utf8_bytes_are_kept() {
        let sequences = read_sequences_from(&[0xff, 0xfe, b'\n'][..]).unwrap();
        assert_eq!(sequences, [vec![0xff, 0xfe]]);
    }

    #[test]
    fn empty_input() {
        assert!(read_sequences_from(&b""[..]).unwrap().is_empty());
    }
}
