use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;

use crate::{bulk_matcher::OverlapMatrix, error::Result, top_n_matcher::ReferenceMatch};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated text.
    #[default]
    Tsv,
    /// The serialised result structure as CBOR.
    Cbor,
}

#[derive(Serialize)]
struct QueryTopN<'matches> {
    query: usize,
    matches: &'matches [ReferenceMatch],
}

pub fn write_top_n(
    top_n: &[Vec<ReferenceMatch>],
    format: OutputFormat,
    output: &mut (impl Write + ?Sized),
) -> Result<()> {
    match format {
        OutputFormat::Tsv => {
            writeln!(output, "query\trank\treference\tscore\tlength_difference")?;
            for (query, matches) in top_n.iter().enumerate() {
                for (rank, reference_match) in matches.iter().enumerate() {
                    writeln!(
                        output,
                        "{query}\t{}\t{}\t{}\t{}",
                        rank + 1,
                        reference_match.reference,
                        reference_match.score(),
                        reference_match.length_difference(),
                    )?;
                }
            }
        }
        OutputFormat::Cbor => {
            let top_n: Vec<_> = top_n
                .iter()
                .enumerate()
                .map(|(query, matches)| QueryTopN { query, matches })
                .collect();
            ciborium::into_writer(&top_n, &mut *output)?;
        }
    }

    output.flush()?;
    Ok(())
}

pub fn write_matrix(
    matrix: &OverlapMatrix,
    format: OutputFormat,
    output: &mut (impl Write + ?Sized),
) -> Result<()> {
    match format {
        OutputFormat::Tsv => {
            for row in matrix.iter_rows() {
                let mut separator = "";
                for count in row {
                    write!(output, "{separator}{count}")?;
                    separator = "\t";
                }
                writeln!(output)?;
            }
        }
        OutputFormat::Cbor => ciborium::into_writer(matrix, &mut *output)?,
    }

    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{
        bigram_index::BigramIndex,
        bulk_matcher::{BulkMatcher, OverlapMatrix},
        top_n_matcher::{ReferenceMatch, Scoring, TopNMatcher},
    };

    use super::{write_matrix, write_top_n, OutputFormat};

    #[test]
    fn matrix_as_tsv() {
        let index = BigramIndex::<u8>::from_sequences([[1u8, 1, 2], [1, 2, 3]]);
        let matrix = BulkMatcher::new(&index)
            .match_references(&[vec![1u8, 1, 2, 3], vec![1, 1, 3], vec![1, 2, 3]]);

        let mut output = Vec::new();
        write_matrix(&matrix, OutputFormat::Tsv, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "2\t2\n1\t0\n1\t2\n");
    }

    #[test]
    fn top_n_as_tsv() {
        let index = BigramIndex::<u8>::from_sequences([b"abc".as_slice(), b"zz".as_slice()]);
        let mut matcher = TopNMatcher::new(&index, 2, Scoring::Weighted);
        matcher.match_references([b"xab".as_slice(), b"abc".as_slice()]);

        let mut output = Vec::new();
        write_top_n(&matcher.into_top_n(), OutputFormat::Tsv, &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "query\trank\treference\tscore\tlength_difference\n\
             0\t1\t1\t2\t0\n\
             0\t2\t0\t1\t0\n\
             1\t1\t0\t0\t1\n\
             1\t2\t1\t0\t1\n"
        );
    }

    #[test]
    fn matrix_as_cbor() {
        let matrix = OverlapMatrix::zeros(2, 3);

        let mut output = Vec::new();
        write_matrix(&matrix, OutputFormat::Cbor, &mut output).unwrap();
        let decoded: OverlapMatrix = ciborium::from_reader(output.as_slice()).unwrap();
        assert_eq!(decoded, matrix);
    }

    #[test]
    fn top_n_as_cbor() {
        let top_n = vec![vec![ReferenceMatch::new(4, 3, 1)], Vec::new()];

        let mut output = Vec::new();
        write_top_n(&top_n, OutputFormat::Cbor, &mut output).unwrap();
        assert!(!output.is_empty());
    }
}
