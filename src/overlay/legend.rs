use std::collections::BTreeMap;

/// Which labels to print on the first key row
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum LegendSet {
    /// Logarithms, factorial and inverse trigonometry
    #[default]
    Scientific,
    /// Shifts and rotates
    Shift,
}

const SCIENTIFIC_ROW: [(u32, &str); 6] = [
    (11, "ln e^x"),
    (12, "log 10^x"),
    (13, "? fact"),
    (14, "sin -1"),
    (15, "cos -1"),
    (16, "tan -1"),
];

const SHIFT_ROW: [(u32, &str); 6] = [
    (11, "SL"),
    (12, "SR"),
    (13, "RL"),
    (14, "RR"),
    (15, "RLn"),
    (16, "RRn"),
];

const COMMON: [(u32, &str); 30] = [
    (17, "MASKL"),
    (18, "MASKR"),
    (19, "RMD"),
    (10, "XOR"),
    (21, "x<>(i)"),
    (22, "x<>I"),
    (23, "SH HEX"),
    (24, "SH DEC"),
    (25, "SH OCT"),
    (26, "SH BIN"),
    (27, "SB"),
    (28, "CB"),
    (29, "B?"),
    (20, "AND"),
    (31, "(i)"),
    (32, "I"),
    (33, "CL PRGM"),
    (34, "CL REG"),
    (35, "CL PRFX"),
    (36, "WINDOW"),
    (37, "1s COMP"),
    (38, "2s COMP"),
    (39, "UNSIGNED"),
    (30, "NOT"),
    (44, "WSIZE"),
    (45, "FLOAT"),
    (47, "MEM"),
    (48, "STATUS"),
    (49, "EEX"),
    (40, "OR"),
];

/// Labels printed above keys, looked up by user key code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendTable {
    labels: BTreeMap<u32, &'static str>,
}

impl LegendTable {
    /// Build a table from `(key code, label)` pairs. A later label for the
    /// same key replaces an earlier one.
    pub fn new<I: IntoIterator<Item = (u32, &'static str)>>(labels: I) -> LegendTable {
        LegendTable {
            labels: labels.into_iter().collect(),
        }
    }

    pub fn for_set(set: LegendSet) -> LegendTable {
        let first_row = match set {
            LegendSet::Scientific => SCIENTIFIC_ROW,
            LegendSet::Shift => SHIFT_ROW,
        };
        LegendTable::new(first_row.into_iter().chain(COMMON))
    }

    /// The label for a key; keys without a label, or with an empty one, get [None]
    pub fn label(&self, code: u32) -> Option<&'static str> {
        self.labels.get(&code).copied().filter(|l| !l.is_empty())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for LegendTable {
    fn default() -> Self {
        LegendTable::for_set(LegendSet::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sets_differ_only_in_the_first_row() {
        let scientific = LegendTable::for_set(LegendSet::Scientific);
        let shift = LegendTable::for_set(LegendSet::Shift);
        assert_eq!(scientific.len(), 36);
        assert_eq!(shift.len(), 36);
        assert_eq!(scientific.label(11), Some("ln e^x"));
        assert_eq!(shift.label(11), Some("SL"));
        for code in 17..=49 {
            assert_eq!(scientific.label(code), shift.label(code));
        }
    }

    #[test]
    fn last_column_keys_have_their_own_labels() {
        let table = LegendTable::default();
        assert_eq!(table.label(10), Some("XOR"));
        assert_eq!(table.label(20), Some("AND"));
        assert_eq!(table.label(30), Some("NOT"));
        assert_eq!(table.label(40), Some("OR"));
    }

    #[test]
    fn unlabelled_keys() {
        let table = LegendTable::new([(41, ""), (42, "A")]);
        assert_eq!(table.label(41), None);
        assert_eq!(table.label(42), Some("A"));
        assert_eq!(table.label(43), None);
        assert!(!table.is_empty());
    }
}
