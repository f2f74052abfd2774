//! Searchable column allow-list
//!
//! A column identifier cannot be passed through a bind parameter, so the
//! only safe way to accept one from a caller is membership in a closed
//! enumeration. Parsing is the allow-list check: anything that is not one of
//! the five variants never reaches query construction.

use std::fmt;
use std::str::FromStr;

/// Column identifier rejected by the allow-list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidColumn {
    /// The rejected identifier, verbatim
    pub column: String,
}

impl fmt::Display for InvalidColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid search column: {}", self.column)
    }
}

impl std::error::Error for InvalidColumn {}

/// A searchable catalog column
///
/// # Example
///
/// ```rust
/// use catalog_service::repository::SearchColumn;
///
/// let column: SearchColumn = "brand".parse().unwrap();
/// assert_eq!(column, SearchColumn::Brand);
/// assert_eq!(column.as_str(), "brand");
///
/// assert!("price".parse::<SearchColumn>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchColumn {
    /// Product name
    Name,
    /// Category label
    Category,
    /// Manufacturer brand
    Brand,
    /// Manufacturer model identifier
    Model,
    /// Free-text description
    Description,
}

impl SearchColumn {
    /// All permitted search columns
    pub const ALL: [SearchColumn; 5] = [
        Self::Name,
        Self::Category,
        Self::Brand,
        Self::Model,
        Self::Description,
    ];

    /// The column name as it appears in the schema
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Category => "category",
            Self::Brand => "brand",
            Self::Model => "model",
            Self::Description => "description",
        }
    }
}

impl fmt::Display for SearchColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchColumn {
    type Err = InvalidColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "category" => Ok(Self::Category),
            "brand" => Ok(Self::Brand),
            "model" => Ok(Self::Model),
            "description" => Ok(Self::Description),
            other => Err(InvalidColumn {
                column: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_allowed_column_parses() {
        for column in SearchColumn::ALL {
            let parsed: SearchColumn = column.as_str().parse().unwrap();
            assert_eq!(parsed, column);
        }
    }

    #[test]
    fn test_unknown_columns_are_rejected() {
        for column in ["price", "id", "created_at", "", "NAME", " name"] {
            let err = column.parse::<SearchColumn>().unwrap_err();
            assert_eq!(err.column, column);
        }
    }

    #[test]
    fn test_injection_attempt_is_rejected() {
        let err = "name; DROP TABLE products--"
            .parse::<SearchColumn>()
            .unwrap_err();
        assert_eq!(err.column, "name; DROP TABLE products--");
    }

    #[test]
    fn test_display_matches_schema_name() {
        assert_eq!(format!("{}", SearchColumn::Description), "description");
    }
}
