//! Students with their organisational location.

use crate::ids::{ClassId, DaerahId, DesaId, KelompokId, StudentId};
use crate::org::OrgLocated;
use sekolah_core::serde::deserialize_optional_id;
use serde::{Deserialize, Serialize};

/// Enrollment status of a student.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudentStatus {
    #[default]
    Active,
    Graduated,
    Inactive,
}

/// A student row joined with its organisational IDs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentWithOrg {
    pub id: StudentId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub daerah_id: Option<DaerahId>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub desa_id: Option<DesaId>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub kelompok_id: Option<KelompokId>,
    /// Class the student attends, used by per-record attendance checks.
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub class_id: Option<ClassId>,
    #[serde(default)]
    pub status: StudentStatus,
    #[serde(default)]
    pub deleted_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl StudentWithOrg {
    pub fn new(id: StudentId) -> Self {
        Self {
            id,
            name: None,
            daerah_id: None,
            desa_id: None,
            kelompok_id: None,
            class_id: None,
            status: StudentStatus::Active,
            deleted_at: None,
        }
    }

    /// Place the student in a full daerah/desa/kelompok chain.
    pub fn located(mut self, daerah_id: DaerahId, desa_id: DesaId, kelompok_id: KelompokId) -> Self {
        self.daerah_id = Some(daerah_id);
        self.desa_id = Some(desa_id);
        self.kelompok_id = Some(kelompok_id);
        self
    }

    pub fn in_class(mut self, class_id: ClassId) -> Self {
        self.class_id = Some(class_id);
        self
    }

    pub fn is_soft_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

impl OrgLocated for StudentWithOrg {
    fn daerah_id(&self) -> Option<DaerahId> {
        self.daerah_id
    }

    fn desa_id(&self) -> Option<DesaId> {
        self.desa_id
    }

    fn kelompok_id(&self) -> Option<KelompokId> {
        self.kelompok_id
    }
}
