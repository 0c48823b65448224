use uuid::Uuid;

pub mod in_memory;

pub use in_memory::InMemoryRepository;

use crate::models::admin::Admin;
use crate::models::exam_session::ExamSession;
use crate::models::student::Student;
use crate::models::teacher::Teacher;
use crate::models::test::Test;
use crate::models::test_completed::TestCompleted;

pub trait Entity: Clone + Send + Sync {
    fn id(&self) -> Uuid;
}

#[cfg_attr(test, mockall::automock)]
pub trait Repository<T: Entity + 'static>: Send + Sync {
    fn get(&self, id: Uuid) -> Option<T>;
    fn list(&self) -> Vec<T>;
    fn upsert(&self, item: T) -> T;
    fn delete(&self, id: Uuid) -> bool;
}

impl Entity for Test {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Entity for Student {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Entity for Teacher {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Entity for Admin {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Entity for ExamSession {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Entity for TestCompleted {
    fn id(&self) -> Uuid {
        self.id
    }
}
