use std::fmt::{self, Debug, Formatter};

/// Keyword of the substitution cipher, hidden from `Debug` output.
///
/// An empty keyword counts as no keyword at all.
#[derive(Default, Clone)]
pub struct Keyword(Option<String>);

impl Keyword {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref().filter(|k| !k.is_empty())
    }
}

impl Debug for Keyword {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.as_deref() {
            Some(keyword) => write!(f, "Keyword({})", "*".repeat(keyword.len())),
            None => write!(f, "Keyword(None)"),
        }
    }
}

impl From<Option<String>> for Keyword {
    fn from(keyword: Option<String>) -> Self {
        Self(keyword)
    }
}

impl From<&str> for Keyword {
    fn from(keyword: &str) -> Self {
        Self(Some(keyword.to_string()))
    }
}

impl From<String> for Keyword {
    fn from(keyword: String) -> Self {
        Self(Some(keyword))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_treat_empty_keywords_as_none() {
        let keyword: Keyword = None.into();
        assert_eq!(keyword.as_deref(), None);

        let keyword: Keyword = "".into();
        assert_eq!(keyword.as_deref(), None);

        let keyword: Keyword = "Secret".into();
        assert_eq!(keyword.as_deref(), Some("Secret"));
    }

    #[test]
    fn should_mask_the_keyword_in_debug_output() {
        let keyword: Keyword = None.into();
        assert_eq!(format!("{:?}", keyword), "Keyword(None)");

        let keyword: Keyword = String::from("Secret").into();
        assert_eq!(format!("{:?}", keyword), "Keyword(******)");
    }
}
