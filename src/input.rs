//! Sequences to scan: seeded random DNA or records read from FASTA/FASTQ.

use std::path::Path;

use needletail::parse_fastx_file;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::constants::DNA_ALPHABET;
use crate::error::{MinimizerError, Result};

/// Uniform random sequence over `ACGT`, reproducible from `seed`.
pub fn random_sequence(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| DNA_ALPHABET[rng.gen_range(0..DNA_ALPHABET.len())])
        .collect()
}

/// Concatenate the records of a FASTA/FASTQ file (optionally gzipped), keeping
/// at most `max_len` symbols. `None` reads everything.
///
/// Symbols are kept as they appear in the file.
pub fn read_sequence(path: &Path, max_len: Option<usize>) -> Result<Vec<u8>> {
    let limit = max_len.unwrap_or(usize::MAX);
    std::fs::metadata(path).map_err(|e| MinimizerError::io(path, "open", e))?;
    let mut reader = parse_fastx_file(path).map_err(|e| {
        MinimizerError::format(path, format!("failed to open sequence file: {}", e))
    })?;

    let mut sequence = Vec::new();
    let mut num_records = 0usize;
    while sequence.len() < limit {
        let record = match reader.next() {
            Some(Ok(rec)) => rec,
            Some(Err(e)) => {
                return Err(MinimizerError::format(
                    path,
                    format!("error reading record {}: {}", num_records, e),
                ))
            }
            None => break,
        };
        let seq = record.seq();
        let take = seq.len().min(limit - sequence.len());
        sequence.extend_from_slice(&seq[..take]);
        num_records += 1;
    }

    log::info!(
        "Read {} symbols from {} record(s) of {}",
        sequence.len(),
        num_records,
        path.display()
    );
    Ok(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_random_sequence_is_reproducible() {
        let a = random_sequence(1000, 42);
        let b = random_sequence(1000, 42);
        let c = random_sequence(1000, 43);
        assert_eq!(a.len(), 1000);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.iter().all(|c| DNA_ALPHABET.contains(c)));
    }

    #[test]
    fn test_random_sequence_uses_whole_alphabet() {
        let seq = random_sequence(1000, 7);
        for &c in DNA_ALPHABET {
            assert!(seq.contains(&c));
        }
    }

    #[test]
    fn test_read_sequence_concatenates_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("refs.fasta");
        let mut f = File::create(&path).unwrap();
        writeln!(f, ">one\nACGT\nACGT\n>two\nTTTT").unwrap();
        drop(f);

        assert_eq!(read_sequence(&path, None).unwrap(), b"ACGTACGTTTTT");
        assert_eq!(read_sequence(&path, Some(6)).unwrap(), b"ACGTAC");
    }

    #[test]
    fn test_read_sequence_rejects_garbage() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "this is not a sequence file\n").unwrap();
        let err = read_sequence(&path, None).unwrap_err();
        assert!(matches!(err, MinimizerError::Format { .. }));
    }

    #[test]
    fn test_read_sequence_missing_file() {
        let dir = tempdir().unwrap();
        let err = read_sequence(&dir.path().join("missing.fa"), None).unwrap_err();
        assert!(matches!(err, MinimizerError::Io { .. }));
    }
}
