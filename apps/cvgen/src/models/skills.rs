use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Skill categories in insertion order.
///
/// Serialized as a JSON object (`{"frontend": [...], "backend": [...]}`) whose
/// key order is the order categories were inserted. A plain `HashMap` would
/// reshuffle categories between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillMap {
    categories: Vec<(String, Vec<String>)>,
}

impl SkillMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a category. Re-inserting an existing category replaces its
    /// items but keeps its original position.
    pub fn insert(&mut self, category: impl Into<String>, items: Vec<String>) {
        let category = category.into();
        match self.categories.iter_mut().find(|(c, _)| *c == category) {
            Some((_, existing)) => *existing = items,
            None => self.categories.push((category, items)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(c, items)| (c.as_str(), items.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl<C: Into<String>> FromIterator<(C, Vec<String>)> for SkillMap {
    fn from_iter<I: IntoIterator<Item = (C, Vec<String>)>>(iter: I) -> Self {
        let mut map = SkillMap::new();
        for (category, items) in iter {
            map.insert(category, items);
        }
        map
    }
}

impl Serialize for SkillMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (category, items) in &self.categories {
            map.serialize_entry(category, items)?;
        }
        map.end()
    }
}

struct SkillMapVisitor;

impl<'de> Visitor<'de> for SkillMapVisitor {
    type Value = SkillMap;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of skill category to a list of skill names")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = SkillMap::new();
        while let Some((category, items)) = access.next_entry::<String, Vec<String>>()? {
            map.insert(category, items);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for SkillMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SkillMapVisitor)
    }
}
