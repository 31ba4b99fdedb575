use std::fmt;

/// A book author.
///
/// Authors have no identity of their own: two authors with the same name and
/// year are the same author.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Author {
    name: String,
    year: Option<i32>,
}

impl Author {
    /// Create an author from a full name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            year: None,
        }
    }

    /// Create an author from a first/last name pair.
    pub fn from_parts(first_name: &str, last_name: &str) -> Self {
        Self::new(format!("{first_name} {last_name}"))
    }

    /// Attach a year (birth or first publication, depending on the source).
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// The author's full name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The optional year attached to this author.
    pub fn year(&self) -> Option<i32> {
        self.year
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}", self.name)?;
        if let Some(year) = self.year {
            write!(f, ", Year: {year}")?;
        }
        Ok(())
    }
}
