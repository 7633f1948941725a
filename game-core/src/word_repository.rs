use anyhow::{Context, Result, anyhow};
use game_types::{MAX_WORD_LENGTH, MIN_WORD_LENGTH, WordAnalysis, WordListStatistics};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::GameError;

/// Target candidates plus the dictionary of accepted guesses.
///
/// Starts out not ready; a successful load or `from_word_lists` makes it
/// ready. Lookups on a repository that is not ready answer `false` or
/// `DataUnavailable` rather than panicking.
#[derive(Debug, Default)]
pub struct WordRepository {
    gameplay_words: Vec<String>,
    validation_words: HashSet<String>,
    ready: bool,
}

impl WordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from newline separated lists. Blank lines and `#` comments are
    /// ignored.
    pub fn from_word_lists(gameplay: &str, validation: &str) -> Result<Self, GameError> {
        let mut repository = Self::new();
        repository.install(parse_word_lines(gameplay), parse_word_lines(validation), 1)?;
        Ok(repository)
    }

    /// Load both lists from files under `directory`.
    pub async fn load<P: AsRef<Path>>(
        directory: P,
        gameplay_file: &str,
        validation_file: &str,
        min_words: usize,
    ) -> Result<Self, GameError> {
        let mut repository = Self::new();
        repository
            .initialize(directory, gameplay_file, validation_file, min_words)
            .await?;
        Ok(repository)
    }

    /// (Re)load the lists. On failure the repository is left not ready.
    pub async fn initialize<P: AsRef<Path>>(
        &mut self,
        directory: P,
        gameplay_file: &str,
        validation_file: &str,
        min_words: usize,
    ) -> Result<(), GameError> {
        let directory = directory.as_ref();
        info!("Loading words from directory: {}", directory.display());

        let gameplay = read_word_file(&directory.join(gameplay_file))
            .await
            .map_err(|e| self.fail(e))?;
        let validation = read_word_file(&directory.join(validation_file))
            .await
            .map_err(|e| self.fail(e))?;

        self.install(gameplay, validation, min_words)
    }

    fn fail(&mut self, error: anyhow::Error) -> GameError {
        warn!("Failed to load word lists: {:#}", error);
        self.ready = false;
        GameError::data_unavailable(format!("{error:#}"))
    }

    fn install(
        &mut self,
        gameplay: Vec<String>,
        validation: Vec<String>,
        min_words: usize,
    ) -> Result<(), GameError> {
        let mut seen = HashSet::new();
        let gameplay_words: Vec<String> = gameplay
            .into_iter()
            .filter_map(|word| normalize_word(&word))
            .filter(|word| (MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&word.len()))
            .filter(|word| seen.insert(word.clone()))
            .collect();

        let mut validation_words: HashSet<String> = validation
            .into_iter()
            .filter_map(|word| normalize_word(&word))
            .collect();

        if gameplay_words.len() < min_words {
            return Err(self.fail(anyhow!(
                "gameplay list has {} usable words, need at least {}",
                gameplay_words.len(),
                min_words
            )));
        }
        if validation_words.len() < min_words {
            return Err(self.fail(anyhow!(
                "validation list has {} usable words, need at least {}",
                validation_words.len(),
                min_words
            )));
        }

        // A target must always be an acceptable guess.
        validation_words.extend(gameplay_words.iter().cloned());

        info!(
            "Loaded {} gameplay words and {} validation words",
            gameplay_words.len(),
            validation_words.len()
        );

        self.gameplay_words = gameplay_words;
        self.validation_words = validation_words;
        self.ready = true;
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn is_length_available(&self, length: usize) -> bool {
        self.ready && self.gameplay_words.iter().any(|word| word.len() == length)
    }

    /// Pick a gameplay word of `length` letters, uppercase.
    pub fn random_word_of_length<R: Rng + ?Sized>(
        &self,
        length: usize,
        rng: &mut R,
    ) -> Result<String, GameError> {
        if !self.ready {
            return Err(GameError::data_unavailable("word repository not initialized"));
        }

        let candidates: Vec<&String> = self
            .gameplay_words
            .iter()
            .filter(|word| word.len() == length)
            .collect();

        let word = candidates
            .choose(rng)
            .ok_or(GameError::WordUnavailable { length })?;
        debug!("Drew target word of length {} from {} candidates", length, candidates.len());
        Ok((*word).clone())
    }

    /// Case-insensitive dictionary lookup.
    pub fn is_valid_word(&self, text: &str) -> bool {
        self.ready
            && normalize_word(text).is_some_and(|word| self.validation_words.contains(&word))
    }

    pub fn word_count_by_length(&self, length: usize) -> usize {
        self.gameplay_words
            .iter()
            .filter(|word| word.len() == length)
            .count()
    }

    pub fn statistics(&self) -> WordListStatistics {
        let lengths: BTreeSet<usize> = self.gameplay_words.iter().map(|w| w.len()).collect();

        WordListStatistics {
            total_gameplay_words: self.gameplay_words.len(),
            total_validation_words: self.validation_words.len(),
            min_length: lengths.first().copied(),
            max_length: lengths.last().copied(),
            available_lengths: lengths.into_iter().collect(),
        }
    }

    pub fn analysis(&self) -> WordAnalysis {
        let mut by_length = BTreeMap::new();
        let mut by_first_letter = BTreeMap::new();

        for word in &self.gameplay_words {
            *by_length.entry(word.len()).or_insert(0) += 1;
            if let Some(first) = word.chars().next() {
                *by_first_letter.entry(first).or_insert(0) += 1;
            }
        }

        WordAnalysis {
            by_length,
            by_first_letter,
        }
    }
}

/// Trimmed, uppercased word, or `None` if it holds anything but ASCII letters.
fn normalize_word(raw: &str) -> Option<String> {
    let word = raw.trim();
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(word.to_ascii_uppercase())
}

fn parse_word_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// JSON arrays for `.json` files, one word per line otherwise.
async fn read_word_file(path: &Path) -> Result<Vec<String>> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read word list {}", path.display()))?;

    if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(&contents)
            .with_context(|| format!("corrupted word list {}", path.display()))
    } else {
        Ok(parse_word_lines(&contents))
    }
}
