use std::fmt;

/// Length of the tag that opens every snapshot file.
pub const TAG_LEN: usize = 4;

/// The kind of root a snapshot file holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SnapshotKind {
    /// A full library.
    Library,
    /// A library report (summary only).
    Report,
    /// A single book without its authors.
    Book,
    /// A single reader without their registration number.
    Reader,
}

impl SnapshotKind {
    /// The file tag for this kind.
    pub const fn tag(&self) -> [u8; TAG_LEN] {
        match self {
            Self::Library => *b"LCLB",
            Self::Report => *b"LCRP",
            Self::Book => *b"LCBK",
            Self::Reader => *b"LCRD",
        }
    }

    /// Parse a file tag.
    pub fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"LCLB" => Some(Self::Library),
            b"LCRP" => Some(Self::Report),
            b"LCBK" => Some(Self::Book),
            b"LCRD" => Some(Self::Reader),
            _ => None,
        }
    }
}

impl fmt::Display for SnapshotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Library => write!(f, "library"),
            Self::Report => write!(f, "report"),
            Self::Book => write!(f, "book"),
            Self::Reader => write!(f, "reader"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_parse_back() {
        for kind in [
            SnapshotKind::Library,
            SnapshotKind::Report,
            SnapshotKind::Book,
            SnapshotKind::Reader,
        ] {
            assert_eq!(SnapshotKind::from_tag(&kind.tag()), Some(kind));
        }
    }

    #[test]
    fn unknown_tag() {
        assert_eq!(SnapshotKind::from_tag(b"ZZZZ"), None);
        assert_eq!(SnapshotKind::from_tag(b"LC"), None);
    }
}
