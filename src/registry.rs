use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HabitError {
    #[error("habit name must not be empty")]
    EmptyHabitName,
    #[error("habit {0:?} already exists")]
    DuplicateHabit(String),
}

/// Ordered set of habit names, kept in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HabitRegistry {
    names: Vec<String>,
}

impl HabitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a habit. The name is trimmed first; the trimmed form is what
    /// gets stored and compared.
    pub fn add(&mut self, name: &str) -> Result<&str, HabitError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(HabitError::EmptyHabitName);
        }
        if self.contains(name) {
            return Err(HabitError::DuplicateHabit(name.to_string()));
        }
        let index = self.names.len();
        self.names.push(name.to_string());
        Ok(&self.names[index])
    }

    /// Removes `name` if present. Completions are left alone; see
    /// `Tracker::delete_habit` for the cascading variant.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|existing| existing != name);
        self.names.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    pub fn list(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_keeps_insertion_order() {
        let mut registry = HabitRegistry::new();
        registry.add("Read").unwrap();
        registry.add("Run").unwrap();
        registry.add("Meditate").unwrap();
        assert_eq!(registry.list(), ["Read", "Run", "Meditate"]);
    }

    #[test]
    fn add_rejects_duplicates_case_sensitively() {
        let mut registry = HabitRegistry::new();
        registry.add("Read").unwrap();
        assert_eq!(
            registry.add("Read"),
            Err(HabitError::DuplicateHabit("Read".to_string()))
        );
        assert_eq!(
            registry.add("  Read "),
            Err(HabitError::DuplicateHabit("Read".to_string()))
        );
        registry.add("read").unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn add_rejects_blank_names() {
        let mut registry = HabitRegistry::new();
        assert_eq!(registry.add(""), Err(HabitError::EmptyHabitName));
        assert_eq!(registry.add(" \t\n"), Err(HabitError::EmptyHabitName));
        assert!(registry.is_empty());
    }

    #[test]
    fn add_stores_trimmed_name() {
        let mut registry = HabitRegistry::new();
        assert_eq!(registry.add("  Stretch  "), Ok("Stretch"));
        assert!(registry.contains("Stretch"));
        assert!(!registry.contains("  Stretch  "));
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut registry = HabitRegistry::new();
        registry.add("Read").unwrap();
        assert!(!registry.remove("Run"));
        assert!(registry.remove("Read"));
        assert!(!registry.remove("Read"));
        assert!(registry.is_empty());
    }
}
