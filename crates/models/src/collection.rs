use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Names one of the two record collections held by the catalog
///
/// The string form doubles as the persisted collection name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Collection {
    Courses,
    Faculty,
}

impl Collection {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    pub fn all() -> Vec<Collection> {
        Collection::iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_collection_names() {
        assert_eq!(Collection::Courses.as_str(), "courses");
        assert_eq!(Collection::Faculty.to_string(), "faculty");
        assert_eq!(Collection::from_str("courses"), Ok(Collection::Courses));
        assert!(Collection::from_str("students").is_err());
        assert_eq!(Collection::all().len(), 2);
    }
}
