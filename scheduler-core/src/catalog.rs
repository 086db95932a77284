use std::collections::HashSet;
use std::time::Duration;

use crate::{CatalogError, Resource};

/// Fixed, ordered set of bookable resources.
///
/// Order is the column order of the timeline and the index used for any
/// per-resource display offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceCatalog {
    resources: Vec<Resource>,
}

impl ResourceCatalog {
    pub fn new(resources: Vec<Resource>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(resources.len());
        for resource in &resources {
            if !seen.insert(resource.id.as_str()) {
                return Err(CatalogError::DuplicateId(resource.id.clone()));
            }
        }

        Ok(Self { resources })
    }

    /// Rooms A to E.
    #[must_use]
    pub fn sample() -> Self {
        let resources = vec![
            Resource::new("a", "Room A", "hsl(var(--primary))"),
            Resource::new("b", "Room B", "hsl(120, 70%, 50%)"),
            Resource::new("c", "Room C", "hsl(48, 95%, 60%)"),
            Resource::new("d", "Room D", "hsl(280, 70%, 60%)"),
            Resource::new("e", "Room E", "hsl(200, 70%, 50%)"),
        ];

        Self { resources }
    }

    #[must_use]
    pub fn list(&self) -> &[Resource] {
        &self.resources
    }

    pub fn get(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|resource| resource.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.resources.iter().position(|resource| resource.id == id)
    }

    /// Stagger applied when the events of a resource appear: 100ms per column,
    /// starting at the first.
    pub fn display_delay(&self, id: &str) -> Option<Duration> {
        let position = self.position(id)?;
        let steps = u32::try_from(position + 1).ok()?;
        Some(Duration::from_millis(100) * steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_keeps_declaration_order() {
        let catalog = ResourceCatalog::sample();
        let ids = catalog
            .list()
            .iter()
            .map(|resource| resource.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = ResourceCatalog::new(vec![
            Resource::new("a", "Room A", "red"),
            Resource::new("a", "Room A again", "blue"),
        ]);
        assert_eq!(result, Err(CatalogError::DuplicateId("a".into())));
    }

    #[test]
    fn lookups() {
        let catalog = ResourceCatalog::sample();
        assert_eq!(catalog.get("c").map(|r| r.title.as_str()), Some("Room C"));
        assert!(catalog.contains("e"));
        assert!(!catalog.contains("z"));
        assert_eq!(catalog.position("d"), Some(3));
        assert_eq!(catalog.position("z"), None);
    }

    #[test]
    fn display_delay_follows_column_index() {
        let catalog = ResourceCatalog::sample();
        assert_eq!(catalog.display_delay("a"), Some(Duration::from_millis(100)));
        assert_eq!(catalog.display_delay("e"), Some(Duration::from_millis(500)));
        assert_eq!(catalog.display_delay("missing"), None);
    }
}
