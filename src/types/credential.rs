use std::fmt;

/// An API key held for the life of a session.
///
/// The key is opaque: the only check applied is that it is not empty.  It is
/// never printed; `Debug` shows a masked form.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a key, trimming surrounding whitespace left by copy and paste.
    pub fn new(key: impl Into<String>) -> Self {
        let key: String = key.into();
        Self(key.trim().to_string())
    }

    /// The empty credential.
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Returns true if no key has been provided.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw key, for building the authorization header.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// A display-safe rendition of the key, e.g. `sk-a…wxyz`.
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.is_empty() {
            "(not set)".to_string()
        } else if chars.len() <= 8 {
            "*".repeat(chars.len())
        } else {
            let head: String = chars[..4].iter().collect();
            let tail: String = chars[chars.len() - 4..].iter().collect();
            format!("{head}…{tail}")
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&self.masked()).finish()
    }
}

impl From<String> for Credential {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

impl From<&str> for Credential {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace() {
        assert!(Credential::empty().is_empty());
        assert!(Credential::new("   ").is_empty());
        assert!(!Credential::new(" sk-1 ").is_empty());
        assert_eq!(Credential::new(" sk-1 ").expose(), "sk-1");
    }

    #[test]
    fn debug_never_leaks_key() {
        let key = Credential::new("sk-abcdefghijklmnop");
        let debug = format!("{key:?}");
        assert!(!debug.contains("abcdefghijklmnop"));
        assert_eq!(key.masked(), "sk-a…mnop");
        assert_eq!(Credential::new("short").masked(), "*****");
        assert_eq!(Credential::empty().masked(), "(not set)");
    }
}
