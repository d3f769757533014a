use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Number of vertices that receive an alphabetic label.
pub const ALPHABET_SIZE: usize = 26;

/// A display label of a vertex (relation element), derived from its index.
///
/// Indices `0..26` map to `A..Z`. Larger indices fall back to their decimal representation,
/// so the mapping stays a bijection. The index is always authoritative: labels are computed
/// on demand and never stored as keys.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct VertexLabel(usize);

impl VertexLabel {
    pub fn new(index: usize) -> VertexLabel {
        VertexLabel(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for VertexLabel {
    fn from(value: usize) -> Self {
        VertexLabel(value)
    }
}

impl Display for VertexLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0 < ALPHABET_SIZE {
            let letter = char::from(b'A' + self.0 as u8);
            write!(f, "{letter}")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl FromStr for VertexLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if let [letter @ b'A'..=b'Z'] = bytes {
            return Ok(VertexLabel(usize::from(letter - b'A')));
        }
        match s.parse::<usize>() {
            Ok(index) if index >= ALPHABET_SIZE => Ok(VertexLabel(index)),
            _ => Err(format!("`{s}` is not a vertex label")),
        }
    }
}

/// The label of the vertex with the given index.
pub fn label(index: usize) -> String {
    VertexLabel(index).to_string()
}

/// Labels of the first `count` vertices.
pub fn labels(count: usize) -> Vec<String> {
    (0..count).map(label).collect()
}

#[cfg(test)]
mod tests {
    use super::{VertexLabel, label, labels};

    #[test]
    fn alphabetic_then_numeric() {
        assert_eq!(label(0), "A");
        assert_eq!(label(25), "Z");
        assert_eq!(label(26), "26");
        assert_eq!(labels(3), vec!["A", "B", "C"]);
    }

    #[test]
    fn parse_is_inverse() {
        for index in [0, 7, 25, 26, 100] {
            let parsed: VertexLabel = label(index).parse().unwrap();
            assert_eq!(parsed.index(), index);
        }
        assert!("3".parse::<VertexLabel>().is_err());
        assert!("AB".parse::<VertexLabel>().is_err());
        assert!("a".parse::<VertexLabel>().is_err());
    }
}
