use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WordListStatistics {
    pub total_gameplay_words: usize,
    pub total_validation_words: usize,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub available_lengths: Vec<usize>,
}

/// Frequency breakdown of the gameplay list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WordAnalysis {
    pub by_length: BTreeMap<usize, usize>,
    pub by_first_letter: BTreeMap<char, usize>,
}
