//! Read-only collaborator interfaces and an in-memory implementation.
//!
//! Decisions that need records they were not handed (meeting edits) fetch
//! them through these traits. A lookup that returns `Ok(None)` and one that
//! fails are both treated as "not found" by the caller.

use sekolah_core::StoreError;
use sekolah_models::{
    MeetingId, MeetingOrgChain, MeetingRecord, StudentId, StudentWithOrg, TeacherClass,
    TeacherClasses, UserId, UserProfile,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::future::Future;
use std::path::Path;
use tracing::{info, instrument};
use validator::{Validate, ValidationErrors};

pub trait ProfileStore: Send + Sync {
    fn get_profile_by_id(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Option<UserProfile>, StoreError>> + Send;
}

pub trait MeetingStore: Send + Sync {
    /// The meeting's creator, classes and flattened organisational chain.
    fn get_meeting_with_org_chain(
        &self,
        meeting_id: MeetingId,
    ) -> impl Future<Output = Result<Option<MeetingOrgChain>, StoreError>> + Send;
}

/// Serialized snapshot of everything the in-memory store serves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub profiles: Vec<UserProfile>,
    #[serde(default)]
    pub students: Vec<StudentWithOrg>,
    #[serde(default)]
    pub meetings: Vec<MeetingRecord>,
    #[serde(default)]
    pub teacher_classes: Vec<TeacherClass>,
}

impl Dataset {
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let raw = tokio::fs::read_to_string(path).await?;
        Self::from_json(&raw)
    }

    /// Profiles whose organisational pointers do not form a chain.
    pub fn invalid_profiles(&self) -> Vec<(UserId, ValidationErrors)> {
        self.profiles
            .iter()
            .filter_map(|p| p.validate().err().map(|e| (p.id, e)))
            .collect()
    }
}

/// HashMap-backed store built from a [`Dataset`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    profiles: HashMap<UserId, UserProfile>,
    students: HashMap<StudentId, StudentWithOrg>,
    meetings: HashMap<MeetingId, MeetingOrgChain>,
    teacher_classes: TeacherClasses,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[instrument(skip(dataset), fields(
        profiles = dataset.profiles.len(),
        students = dataset.students.len(),
        meetings = dataset.meetings.len(),
    ))]
    pub fn from_dataset(dataset: Dataset) -> Self {
        let mut store = Self::new();
        for profile in dataset.profiles {
            store.insert_profile(profile);
        }
        for student in dataset.students {
            store.insert_student(student);
        }
        for record in dataset.meetings {
            store.insert_meeting_record(record);
        }
        store.teacher_classes = dataset.teacher_classes.into_iter().collect();
        info!("In-memory store loaded");
        store
    }

    pub fn insert_profile(&mut self, profile: UserProfile) {
        self.profiles.insert(profile.id, profile);
    }

    pub fn insert_student(&mut self, student: StudentWithOrg) {
        self.students.insert(student.id, student);
    }

    /// Normalise a raw joined meeting row and store its flat chain.
    pub fn insert_meeting_record(&mut self, record: MeetingRecord) {
        let id = record.id;
        self.meetings.insert(id, record.into());
    }

    pub fn insert_meeting(&mut self, meeting_id: MeetingId, chain: MeetingOrgChain) {
        self.meetings.insert(meeting_id, chain);
    }

    pub fn assign_class(&mut self, assignment: TeacherClass) {
        self.teacher_classes
            .assign(assignment.teacher_id, assignment.class_id);
    }

    pub fn profile(&self, user_id: UserId) -> Option<&UserProfile> {
        self.profiles.get(&user_id)
    }

    pub fn student(&self, student_id: StudentId) -> Option<&StudentWithOrg> {
        self.students.get(&student_id)
    }

    pub fn meeting(&self, meeting_id: MeetingId) -> Option<&MeetingOrgChain> {
        self.meetings.get(&meeting_id)
    }

    pub fn students(&self) -> Vec<StudentWithOrg> {
        let mut students: Vec<StudentWithOrg> = self.students.values().cloned().collect();
        students.sort_by_key(|s| s.id);
        students
    }

    pub fn teacher_classes(&self) -> &TeacherClasses {
        &self.teacher_classes
    }
}

impl ProfileStore for InMemoryStore {
    async fn get_profile_by_id(&self, user_id: UserId) -> Result<Option<UserProfile>, StoreError> {
        Ok(self.profiles.get(&user_id).cloned())
    }
}

impl MeetingStore for InMemoryStore {
    async fn get_meeting_with_org_chain(
        &self,
        meeting_id: MeetingId,
    ) -> Result<Option<MeetingOrgChain>, StoreError> {
        Ok(self.meetings.get(&meeting_id).cloned())
    }
}
