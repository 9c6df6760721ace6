//! Error type shared by all view computations.

/// Result alias for fallible view operations.
pub type Result<T> = std::result::Result<T, ViewError>;

/// Errors raised on malformed input.
///
/// Every operation fails fast on the first problem it encounters.
/// For a full report of a data snapshot, use
/// [`validate_snapshot`](crate::validation::validate_snapshot).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ViewError {
    /// A time string is not of the form `HH:MM` with numeric parts.
    #[error("slot {slot}: malformed time '{raw}'")]
    TimeParse { slot: usize, raw: String },

    /// A slot ends before it starts and the layout rejects such spans.
    #[error("slot {slot}: time range {from}-{to} ends before it starts")]
    NegativeSpan {
        slot: usize,
        from: String,
        to: String,
    },

    /// A matrix row has a different width than the first row.
    #[error("matrix row {row} has {found} entries, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A scene's character and line-count arrays differ in length.
    #[error("scene '{scene}' has {characters} characters but {line_counts} line counts")]
    RaggedScene {
        scene: String,
        characters: usize,
        line_counts: usize,
    },

    /// An index points past the end of the collection it refers to.
    #[error("{what} index {index} out of range (len {len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_parse_message_names_slot_and_raw() {
        let err = ViewError::TimeParse {
            slot: 2,
            raw: "9h30".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("slot 2"));
        assert!(msg.contains("9h30"));
    }

    #[test]
    fn test_index_out_of_range_message() {
        let err = ViewError::IndexOutOfRange {
            what: "scene",
            index: 7,
            len: 3,
        };
        assert_eq!(err.to_string(), "scene index 7 out of range (len 3)");
    }
}
