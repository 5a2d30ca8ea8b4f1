//! Static word-vector table (GloVe / word2vec text format).
//!
//! Each line holds a word followed by its float components. An optional
//! first line `<count> <dim>` (word2vec header) is skipped. A phrase vector
//! is the mean of the vectors of its known words, as split by the tokenizer.

use std::collections::HashMap;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ndarray::Array1;
use tracing::{info, warn};
use triage_core::{Error, Result};

use crate::embedder::EmbedderBackend;

/// In-memory word-vector table.
pub struct WordVectors {
    vectors: HashMap<String, Array1<f32>>,
    dimension: usize,
}

impl WordVectors {
    /// Load a vector table from a text file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|e| {
            Error::ModelUnavailable(format!("Word vectors not found at {}: {}", path.display(), e))
        })?;
        let vectors = Self::from_reader(BufReader::new(file))?;
        info!(
            "Loaded {} word vectors (dim={}) from {}",
            vectors.len(),
            vectors.dimension,
            path.display()
        );
        Ok(vectors)
    }

    /// Parse a vector table from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut vectors = HashMap::new();
        let mut dimension = 0;

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            let mut fields = line.split_whitespace();
            let Some(word) = fields.next() else {
                continue;
            };
            let values: std::result::Result<Vec<f32>, _> = fields.map(str::parse::<f32>).collect();
            let values = match values {
                Ok(v) => v,
                Err(_) => {
                    warn!("Skipping malformed vector line {}", line_no + 1);
                    continue;
                }
            };

            // word2vec header: "<count> <dim>"
            if line_no == 0 && values.len() == 1 && word.parse::<usize>().is_ok() {
                continue;
            }
            if values.is_empty() {
                continue;
            }
            if dimension == 0 {
                dimension = values.len();
            } else if values.len() != dimension {
                warn!(
                    "Skipping vector line {}: expected {} components, found {}",
                    line_no + 1,
                    dimension,
                    values.len()
                );
                continue;
            }

            vectors.insert(word.to_lowercase(), Array1::from_vec(values));
        }

        if vectors.is_empty() {
            return Err(Error::ModelUnavailable(
                "Word vector table contains no vectors".to_string(),
            ));
        }

        Ok(Self { vectors, dimension })
    }

    /// Build a table from in-memory entries.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<f32>)>,
        S: Into<String>,
    {
        let mut vectors = HashMap::new();
        let mut dimension = 0;
        for (word, values) in entries {
            let word: String = word.into();
            if dimension == 0 {
                dimension = values.len();
            }
            if values.len() != dimension || dimension == 0 {
                return Err(Error::ModelUnavailable(format!(
                    "Inconsistent vector dimension for {:?}",
                    word
                )));
            }
            vectors.insert(word.to_lowercase(), Array1::from_vec(values));
        }
        if vectors.is_empty() {
            return Err(Error::ModelUnavailable(
                "Word vector table contains no vectors".to_string(),
            ));
        }
        Ok(Self { vectors, dimension })
    }

    /// Number of words in the table.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

impl EmbedderBackend for WordVectors {
    fn embed(&self, words: &[&str]) -> Option<Array1<f32>> {
        let mut sum = Array1::<f32>::zeros(self.dimension);
        let mut count = 0usize;

        for word in words {
            if let Some(v) = self.vectors.get(*word) {
                sum += v;
                count += 1;
            }
        }

        if count == 0 {
            return None;
        }
        Some(sum / count as f32)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use std::io::Cursor;

    #[test]
    fn test_parse_glove_format() {
        let data = "fire 1.0 0.0 0.0\nwater 0.0 1.0 0.0\n";
        let vectors = WordVectors::from_reader(Cursor::new(data)).unwrap();
        assert_eq!(vectors.len(), 2);
        assert_eq!(vectors.dimension(), 3);
        assert_eq!(vectors.embed(&["fire"]), Some(array![1.0, 0.0, 0.0]));
    }

    #[test]
    fn test_skips_word2vec_header_and_bad_lines() {
        let data = "3 2\nFire 1.0 0.0\nbroken 1.0 x\nshort 1.0\nwater 0.0 1.0\n";
        let vectors = WordVectors::from_reader(Cursor::new(data)).unwrap();
        assert_eq!(vectors.len(), 2);
        assert!(vectors.embed(&["fire"]).is_some());
        assert!(vectors.embed(&["broken"]).is_none());
        assert!(vectors.embed(&["short"]).is_none());
    }

    #[test]
    fn test_empty_table_is_unavailable() {
        let result = WordVectors::from_reader(Cursor::new(""));
        assert!(matches!(result, Err(Error::ModelUnavailable(_))));
    }

    #[test]
    fn test_phrase_is_mean_of_known_words() {
        let vectors =
            WordVectors::from_entries([("gas", vec![1.0, 0.0]), ("leak", vec![0.0, 1.0])]).unwrap();
        let v = vectors.embed(&["gas", "leak", "from", "nowhere"]).unwrap();
        assert_eq!(v, array![0.5, 0.5]);
        assert!(vectors.embed(&["nothing", "known"]).is_none());
        assert!(vectors.embed(&[]).is_none());
    }

    #[test]
    fn test_hyphenated_phrase_uses_each_word() {
        // "long-term" tokenizes to ["long", "-", "term"]; the caller passes
        // the content words, so both halves contribute.
        let vectors =
            WordVectors::from_entries([("long", vec![1.0, 0.0]), ("term", vec![0.0, 1.0])]).unwrap();
        assert_eq!(vectors.embed(&["long", "term"]), Some(array![0.5, 0.5]));
        assert!(vectors.embed(&["long-term"]).is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vectors.txt");
        std::fs::write(&path, "blast 0.5 0.5\n").unwrap();
        let vectors = WordVectors::load(&path).unwrap();
        assert_eq!(vectors.len(), 1);

        let missing = WordVectors::load(&dir.path().join("absent.txt"));
        assert!(matches!(missing, Err(Error::ModelUnavailable(_))));
    }
}
