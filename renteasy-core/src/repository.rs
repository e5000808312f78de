use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::property::Property;

/// Repository trait for property data access
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    async fn get_property(
        &self,
        id: Uuid,
    ) -> Result<Option<Property>, Box<dyn std::error::Error + Send + Sync>>;

    async fn list_properties(
        &self,
    ) -> Result<Vec<Property>, Box<dyn std::error::Error + Send + Sync>>;
}

/// In-memory property store used by tests and embedding services that do not
/// need a backing database.
pub struct InMemoryPropertyRepository {
    properties: HashMap<Uuid, Property>,
}

impl InMemoryPropertyRepository {
    pub fn new() -> Self {
        Self {
            properties: HashMap::new(),
        }
    }

    pub fn insert(&mut self, property: Property) {
        self.properties.insert(property.id, property);
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl Default for InMemoryPropertyRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PropertyRepository for InMemoryPropertyRepository {
    async fn get_property(
        &self,
        id: Uuid,
    ) -> Result<Option<Property>, Box<dyn std::error::Error + Send + Sync>> {
        let property = self.properties.get(&id).cloned();
        if property.is_none() {
            tracing::debug!(property_id = %id, "property not found in memory store");
        }
        Ok(property)
    }

    async fn list_properties(
        &self,
    ) -> Result<Vec<Property>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.properties.values().cloned().collect())
    }
}
