use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use super::{Entity, Repository};

pub struct InMemoryRepository<T> {
    items: RwLock<HashMap<Uuid, T>>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity + 'static> Repository<T> for InMemoryRepository<T> {
    fn get(&self, id: Uuid) -> Option<T> {
        self.items.read().expect("repository lock poisoned").get(&id).cloned()
    }

    fn list(&self) -> Vec<T> {
        self.items
            .read()
            .expect("repository lock poisoned")
            .values()
            .cloned()
            .collect()
    }

    fn upsert(&self, item: T) -> T {
        self.items
            .write()
            .expect("repository lock poisoned")
            .insert(item.id(), item.clone());
        item
    }

    fn delete(&self, id: Uuid) -> bool {
        self.items
            .write()
            .expect("repository lock poisoned")
            .remove(&id)
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::models::test::{Test, TestType};

    fn writing_test() -> Test {
        let now = Utc::now();
        Test {
            id: Uuid::new_v4(),
            title: "Essay".to_string(),
            description: None,
            test_type: TestType::Writing,
            questions: vec![],
            writing_prompt: Some("Describe your home town".to_string()),
            audio_file: None,
            created_by: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn upsert_then_get_and_delete() {
        let repo = InMemoryRepository::new();
        let test = repo.upsert(writing_test());

        assert!(repo.get(test.id).is_some());
        assert_eq!(repo.list().len(), 1);

        let mut renamed = test.clone();
        renamed.title = "Essay (revised)".to_string();
        repo.upsert(renamed);
        assert_eq!(repo.get(test.id).unwrap().title, "Essay (revised)");
        assert_eq!(repo.list().len(), 1);

        assert!(repo.delete(test.id));
        assert!(!repo.delete(test.id));
        assert!(repo.get(test.id).is_none());
    }
}
