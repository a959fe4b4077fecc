//! Document conformance checks
//!
//! Verifies that a generated document stays inside the bounds of the
//! distribution it was generated from. Used by `--verify` runs and by tests.

use super::SyntheticDocument;
use crate::config::workload::CorpusConfig;
use crate::random::in_alphabet;

/// A way in which a document falls outside its distribution
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConformanceError {
    #[error("document {ordinal}: {count} terms outside [{min}, {max}]")]
    TermCount { ordinal: u64, count: usize, min: u32, max: u32 },

    #[error("document {ordinal}: term '{term}' length outside [{min}, {max}]")]
    TermLength { ordinal: u64, term: String, min: u32, max: u32 },

    #[error("document {ordinal}: term '{term}' uses letters beyond the first {char_range}")]
    TermAlphabet { ordinal: u64, term: String, char_range: u32 },

    #[error("document {ordinal}: {found} value slots, expected {expected}")]
    SlotCount { ordinal: u64, found: usize, expected: u32 },

    #[error("document {ordinal}: slot {slot} value '{value}' length outside [{min}, {max}]")]
    ValueLength { ordinal: u64, slot: u32, value: String, min: u32, max: u32 },

    #[error("document {ordinal}: slot {slot} value '{value}' uses letters beyond the first {char_range}")]
    ValueAlphabet { ordinal: u64, slot: u32, value: String, char_range: u32 },
}

/// Check one document against `config`, returning the first violation found
pub fn check_document(doc: &SyntheticDocument, config: &CorpusConfig) -> Result<(), ConformanceError> {
    let ordinal = doc.ordinal;

    let count = doc.terms.len();
    if count < config.minterms as usize || count > config.maxterms as usize {
        return Err(ConformanceError::TermCount {
            ordinal,
            count,
            min: config.minterms,
            max: config.maxterms,
        });
    }

    for term in &doc.terms {
        if !length_within(term, config.mintermlen, config.maxtermlen) {
            return Err(ConformanceError::TermLength {
                ordinal,
                term: term.clone(),
                min: config.mintermlen,
                max: config.maxtermlen,
            });
        }
        if !term.chars().all(|c| in_alphabet(c, config.termcharrange)) {
            return Err(ConformanceError::TermAlphabet {
                ordinal,
                term: term.clone(),
                char_range: config.termcharrange,
            });
        }
    }

    if doc.values.len() != config.slots_used as usize {
        return Err(ConformanceError::SlotCount {
            ordinal,
            found: doc.values.len(),
            expected: config.slots_used,
        });
    }

    for (slot, value) in doc.populated_values() {
        if !length_within(value, config.slotval_minlen, config.slotval_maxlen) {
            return Err(ConformanceError::ValueLength {
                ordinal,
                slot,
                value: value.to_string(),
                min: config.slotval_minlen,
                max: config.slotval_maxlen,
            });
        }
        let char_range = config.slot_char_range(slot);
        if !value.chars().all(|c| in_alphabet(c, char_range)) {
            return Err(ConformanceError::ValueAlphabet {
                ordinal,
                slot,
                value: value.to_string(),
                char_range,
            });
        }
    }

    Ok(())
}

fn length_within(word: &str, min: u32, max: u32) -> bool {
    let len = word.chars().count();
    len >= min as usize && len <= max as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::scenario::randomidx1;
    use crate::corpus::CorpusGenerator;

    fn doc(terms: &[&str], values: &[Option<&str>]) -> SyntheticDocument {
        SyntheticDocument {
            ordinal: 0,
            data: "random document 0".to_string(),
            terms: terms.iter().map(|t| t.to_string()).collect(),
            values: values.iter().map(|v| v.map(str::to_string)).collect(),
        }
    }

    fn tiny_config() -> CorpusConfig {
        CorpusConfig {
            minterms: 1,
            maxterms: 3,
            mintermlen: 1,
            maxtermlen: 4,
            termcharrange: 3,
            slots_used: 2,
            slotval_minlen: 1,
            slotval_maxlen: 2,
            ..randomidx1().corpus
        }
    }

    #[test]
    fn test_generated_documents_conform() {
        let mut corpus = randomidx1().corpus;
        corpus.runsize = 50;

        for doc in CorpusGenerator::new(corpus.clone()) {
            check_document(&doc, &corpus).unwrap();
        }
    }

    #[test]
    fn test_valid_handmade_document() {
        let d = doc(&["abc", "c"], &[Some("ab"), None]);
        assert_eq!(check_document(&d, &tiny_config()), Ok(()));
    }

    #[test]
    fn test_term_count_violation() {
        let d = doc(&[], &[None, None]);
        assert!(matches!(
            check_document(&d, &tiny_config()),
            Err(ConformanceError::TermCount { count: 0, .. })
        ));
    }

    #[test]
    fn test_term_length_violation() {
        let d = doc(&["abcab"], &[None, None]);
        assert!(matches!(
            check_document(&d, &tiny_config()),
            Err(ConformanceError::TermLength { .. })
        ));
    }

    #[test]
    fn test_term_alphabet_violation() {
        let d = doc(&["abd"], &[None, None]);
        let err = check_document(&d, &tiny_config()).unwrap_err();
        assert!(matches!(err, ConformanceError::TermAlphabet { char_range: 3, .. }));
        assert!(err.to_string().contains("'abd'"));
    }

    #[test]
    fn test_slot_count_violation() {
        let d = doc(&["a"], &[None]);
        assert!(matches!(
            check_document(&d, &tiny_config()),
            Err(ConformanceError::SlotCount { found: 1, expected: 2, .. })
        ));
    }

    #[test]
    fn test_value_alphabet_grows_with_slot() {
        // slot 0 allows a-b, slot 1 allows a-c
        let ok = doc(&["a"], &[Some("ba"), Some("c")]);
        assert!(check_document(&ok, &tiny_config()).is_ok());

        let bad = doc(&["a"], &[Some("c"), None]);
        assert!(matches!(
            check_document(&bad, &tiny_config()),
            Err(ConformanceError::ValueAlphabet { slot: 0, char_range: 2, .. })
        ));
    }

    #[test]
    fn test_value_length_violation() {
        let d = doc(&["a"], &[None, Some("abc")]);
        assert!(matches!(
            check_document(&d, &tiny_config()),
            Err(ConformanceError::ValueLength { slot: 1, .. })
        ));
    }
}
