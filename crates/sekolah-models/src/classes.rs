//! Teacher ↔ class assignments.

use crate::ids::{ClassId, UserId};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// One row of the teacher/class association table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeacherClass {
    pub teacher_id: UserId,
    pub class_id: ClassId,
}

/// Many-to-many mapping from teachers to the classes they directly teach.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeacherClasses {
    by_teacher: HashMap<UserId, HashSet<ClassId>>,
}

impl TeacherClasses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&mut self, teacher_id: UserId, class_id: ClassId) {
        self.by_teacher.entry(teacher_id).or_default().insert(class_id);
    }

    /// Classes assigned to `teacher_id`, sorted so callers get a stable order.
    pub fn class_ids_for(&self, teacher_id: UserId) -> Vec<ClassId> {
        let mut ids: Vec<ClassId> = self
            .by_teacher
            .get(&teacher_id)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();
        ids.sort();
        ids
    }

    pub fn teaches(&self, teacher_id: UserId, class_id: ClassId) -> bool {
        self.by_teacher
            .get(&teacher_id)
            .is_some_and(|set| set.contains(&class_id))
    }
}

impl FromIterator<TeacherClass> for TeacherClasses {
    fn from_iter<I: IntoIterator<Item = TeacherClass>>(iter: I) -> Self {
        let mut classes = TeacherClasses::new();
        for row in iter {
            classes.assign(row.teacher_id, row.class_id);
        }
        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignments_are_per_teacher() {
        let t1 = UserId::from_u128(1);
        let t2 = UserId::from_u128(2);
        let c1 = ClassId::from_u128(10);
        let c2 = ClassId::from_u128(20);

        let classes: TeacherClasses = [
            TeacherClass { teacher_id: t1, class_id: c2 },
            TeacherClass { teacher_id: t1, class_id: c1 },
            TeacherClass { teacher_id: t1, class_id: c1 },
            TeacherClass { teacher_id: t2, class_id: c2 },
        ]
        .into_iter()
        .collect();

        assert_eq!(classes.class_ids_for(t1), vec![c1, c2]);
        assert_eq!(classes.class_ids_for(t2), vec![c2]);
        assert!(classes.teaches(t2, c2));
        assert!(!classes.teaches(t2, c1));
    }

    #[test]
    fn test_unknown_teacher_has_no_classes() {
        let classes = TeacherClasses::new();
        assert!(classes.class_ids_for(UserId::new()).is_empty());
    }
}
