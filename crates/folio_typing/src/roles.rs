//! Role list
//!
//! The fixed rotation of strings the typewriter displays. Lengths and
//! prefixes are measured in `char`s so multibyte roles never split a
//! code point.

use crate::error::{Result, TypingError};

/// Roles shown when no configuration overrides them
pub const DEFAULT_ROLES: [&str; 5] = [
    "Full Stack Developer",
    "Creative Problem Solver",
    "Scalable Systems Builder",
    "System Design Enthusiast",
    "Logical Thinker",
];

/// A validated, non-empty, immutable list of roles
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleList {
    roles: Vec<Role>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Role {
    text: String,
    /// Length in chars, cached since every step compares against it
    len: usize,
}

impl RoleList {
    /// Create a role list
    ///
    /// Fails if `roles` is empty or if any role has no characters.
    pub fn new<I, S>(roles: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roles = roles
            .into_iter()
            .enumerate()
            .map(|(index, role)| {
                let text = role.into();
                let len = text.chars().count();
                if len == 0 {
                    return Err(TypingError::EmptyRole { index });
                }
                Ok(Role { text, len })
            })
            .collect::<Result<Vec<_>>>()?;

        if roles.is_empty() {
            return Err(TypingError::EmptyRoleList);
        }

        Ok(Self { roles })
    }

    /// Number of roles (always at least one)
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Never true for a constructed list
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Role text at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn role(&self, index: usize) -> &str {
        &self.roles[index].text
    }

    /// Length in chars of the role at `index`
    pub fn char_len(&self, index: usize) -> usize {
        self.roles[index].len
    }

    /// First `count` chars of the role at `index`
    ///
    /// `count` past the end yields the whole role.
    pub fn prefix(&self, index: usize, count: usize) -> &str {
        let text = &self.roles[index].text;
        match text.char_indices().nth(count) {
            Some((byte, _)) => &text[..byte],
            None => text,
        }
    }

    /// Iterate over the role texts in rotation order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(|r| r.text.as_str())
    }

    /// Index of the role following `index`, wrapping to the start
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.roles.len()
    }
}

impl Default for RoleList {
    fn default() -> Self {
        Self {
            roles: DEFAULT_ROLES
                .iter()
                .map(|text| Role {
                    text: (*text).to_string(),
                    len: text.chars().count(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_list() {
        let err = RoleList::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, TypingError::EmptyRoleList));
    }

    #[test]
    fn test_rejects_empty_role() {
        let err = RoleList::new(["Engineer", ""]).unwrap_err();
        assert!(matches!(err, TypingError::EmptyRole { index: 1 }));
    }

    #[test]
    fn test_default_roles() {
        let roles = RoleList::default();
        assert_eq!(roles.len(), 5);
        assert_eq!(roles.role(0), "Full Stack Developer");
        assert_eq!(roles.role(4), "Logical Thinker");
        assert_eq!(roles.char_len(4), 15);
    }

    #[test]
    fn test_prefix_respects_char_boundaries() {
        let roles = RoleList::new(["Café ☕"]).unwrap();
        assert_eq!(roles.char_len(0), 6);
        assert_eq!(roles.prefix(0, 0), "");
        assert_eq!(roles.prefix(0, 4), "Café");
        assert_eq!(roles.prefix(0, 6), "Café ☕");
        assert_eq!(roles.prefix(0, 99), "Café ☕");
    }

    #[test]
    fn test_next_index_wraps() {
        let roles = RoleList::new(["A", "B", "C"]).unwrap();
        assert_eq!(roles.next_index(0), 1);
        assert_eq!(roles.next_index(2), 0);

        let single = RoleList::new(["Go"]).unwrap();
        assert_eq!(single.next_index(0), 0);
    }
}
