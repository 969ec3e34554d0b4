//! Meetings and their organisational chain.
//!
//! The backend delivers a meeting joined through class → kelompok → desa, and
//! a to-one relation in that join may arrive either as an object or as a
//! one-element array. [`MeetingRecord`] accepts both shapes; converting it
//! into [`MeetingOrgChain`] flattens the join so access checks only ever see
//! plain optional IDs.

use crate::ids::{ClassId, DaerahId, DesaId, KelompokId, MeetingId, UserId};
use crate::org::OrgLocated;
use sekolah_core::serde::deserialize_optional_id;
use serde::{Deserialize, Serialize};

/// A to-one relation that may be delivered as a single object or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// The related row, if any. Extra elements of a list are ignored.
    pub fn into_first(self) -> Option<T> {
        match self {
            OneOrMany::One(value) => Some(value),
            OneOrMany::Many(values) => values.into_iter().next(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesaRecord {
    pub id: DesaId,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub daerah_id: Option<DaerahId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KelompokRecord {
    pub id: KelompokId,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub desa_id: Option<DesaId>,
    #[serde(default)]
    pub desa: Option<OneOrMany<DesaRecord>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub id: ClassId,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub kelompok_id: Option<KelompokId>,
    #[serde(default)]
    pub kelompok: Option<OneOrMany<KelompokRecord>>,
}

/// A meeting row as returned by the joined query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRecord {
    pub id: MeetingId,
    /// Creating teacher.
    pub teacher_id: UserId,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub class_id: Option<ClassId>,
    #[serde(default)]
    pub class_ids: Option<Vec<ClassId>>,
    #[serde(default)]
    pub class: Option<OneOrMany<ClassRecord>>,
}

/// Flat, denormalised view of a meeting's owner, classes and location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingOrgChain {
    pub teacher_id: UserId,
    pub class_id: Option<ClassId>,
    #[serde(default)]
    pub class_ids: Vec<ClassId>,
    pub kelompok_id: Option<KelompokId>,
    pub desa_id: Option<DesaId>,
    pub daerah_id: Option<DaerahId>,
}

impl MeetingOrgChain {
    /// Every class the meeting covers, primary class first, without duplicates.
    pub fn all_class_ids(&self) -> Vec<ClassId> {
        let mut ids: Vec<ClassId> = self.class_id.into_iter().collect();
        for id in &self.class_ids {
            if !ids.contains(id) {
                ids.push(*id);
            }
        }
        ids
    }
}

impl From<MeetingRecord> for MeetingOrgChain {
    fn from(record: MeetingRecord) -> Self {
        let class = record.class.and_then(OneOrMany::into_first);

        let (class_kelompok_id, kelompok) = match class {
            Some(class) => (class.kelompok_id, class.kelompok.and_then(OneOrMany::into_first)),
            None => (None, None),
        };
        let kelompok_id = class_kelompok_id.or_else(|| kelompok.as_ref().map(|k| k.id));

        let (kelompok_desa_id, desa) = match kelompok {
            Some(kelompok) => (kelompok.desa_id, kelompok.desa.and_then(OneOrMany::into_first)),
            None => (None, None),
        };
        let desa_id = kelompok_desa_id.or_else(|| desa.as_ref().map(|d| d.id));
        let daerah_id = desa.and_then(|d| d.daerah_id);

        Self {
            teacher_id: record.teacher_id,
            class_id: record.class_id,
            class_ids: record.class_ids.unwrap_or_default(),
            kelompok_id,
            desa_id,
            daerah_id,
        }
    }
}

impl OrgLocated for MeetingOrgChain {
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
