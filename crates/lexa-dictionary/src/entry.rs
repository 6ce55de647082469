use lexa_types::WordEntry;

/// How the frontend should voice a word; playback itself happens elsewhere
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pronunciation {
    /// Recorded audio from the dictionary
    Audio(String),
    /// No recording available, synthesize speech for the word
    Speech(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeaningSummary {
    pub part_of_speech: String,
    pub definitions: Vec<String>,
}

/// Display-ready view of a [`WordEntry`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySummary {
    pub word: String,
    pub phonetic: Option<String>,
    pub pronunciation: Pronunciation,
    pub meanings: Vec<MeaningSummary>,
}

impl EntrySummary {
    pub fn from_entry(entry: &WordEntry, definitions_per_meaning: usize) -> Self {
        // Only the first phonetic's text is shown
        let phonetic = entry
            .phonetics
            .first()
            .and_then(|p| p.text.clone())
            .filter(|text| !text.is_empty());

        let pronunciation = entry
            .phonetics
            .iter()
            .filter_map(|p| p.audio.as_deref())
            .find(|audio| !audio.is_empty())
            .map(|audio| Pronunciation::Audio(audio.to_string()))
            .unwrap_or_else(|| Pronunciation::Speech(entry.word.clone()));

        let meanings = entry
            .meanings
            .iter()
            .map(|meaning| MeaningSummary {
                part_of_speech: meaning.part_of_speech.clone().unwrap_or_default(),
                definitions: meaning
                    .definitions
                    .iter()
                    .take(definitions_per_meaning)
                    .map(|d| d.definition.clone())
                    .collect(),
            })
            .collect();

        Self {
            word: entry.word.clone(),
            phonetic,
            pronunciation,
            meanings,
        }
    }
}
