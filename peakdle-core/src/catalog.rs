use peakdle_types::{Entity, GameError, Guess};

/// A mode's ordered entity list. Supplied as already-validated external
/// data; beyond name uniqueness nothing is checked. Entities are sorted
/// alphabetically so the daily index is stable for a given dataset.
#[derive(Debug, Clone)]
pub struct Catalog {
    entities: Vec<Entity>,
}

impl Catalog {
    pub fn new(mut entities: Vec<Entity>) -> Self {
        entities.sort_by(|a, b| a.name.cmp(&b.name));
        Self { entities }
    }

    /// Parse a catalog from a JSON array of entity records.
    pub fn from_json(data: &str) -> Result<Self, GameError> {
        let entities: Vec<Entity> =
            serde_json::from_str(data).map_err(|err| GameError::CatalogParse(err.to_string()))?;
        Ok(Self::new(entities))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Case-insensitive lookup by display name.
    pub fn find(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.matches_name(name))
    }

    /// The selectable pool: everything not already guessed this session.
    pub fn remaining<'a>(&'a self, guessed: &[Guess]) -> Vec<&'a Entity> {
        self.entities
            .iter()
            .filter(|entity| {
                !guessed
                    .iter()
                    .any(|guess| guess.entity.matches_name(&entity.name))
            })
            .collect()
    }
}
