#![allow(dead_code)]

use sekolah::access::InMemoryStore;
use sekolah::models::meetings::{ClassRecord, DesaRecord, KelompokRecord};
use sekolah::models::{
    ClassId, DaerahId, DesaId, KelompokId, MeetingId, MeetingRecord, OneOrMany, PermissionFlags,
    Role, StudentId, StudentWithOrg, TeacherClass, UserId, UserProfile,
};

/// A fixed two-daerah hierarchy:
///
/// ```text
/// daerah_a ─┬─ desa_a1 ─┬─ kelompok_a1x ─ class_a1x
///           │           └─ kelompok_a1y ─ class_a1y
///           └─ desa_a2 ─── kelompok_a2x ─ class_a2x
/// daerah_b ─── desa_b1 ─── kelompok_b1x ─ class_b1x
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TestOrg {
    pub daerah_a: DaerahId,
    pub daerah_b: DaerahId,
    pub desa_a1: DesaId,
    pub desa_a2: DesaId,
    pub desa_b1: DesaId,
    pub kelompok_a1x: KelompokId,
    pub kelompok_a1y: KelompokId,
    pub kelompok_a2x: KelompokId,
    pub kelompok_b1x: KelompokId,
    pub class_a1x: ClassId,
    pub class_a1y: ClassId,
    pub class_a2x: ClassId,
    pub class_b1x: ClassId,
}

impl TestOrg {
    pub fn new() -> Self {
        Self {
            daerah_a: DaerahId::new(),
            daerah_b: DaerahId::new(),
            desa_a1: DesaId::new(),
            desa_a2: DesaId::new(),
            desa_b1: DesaId::new(),
            kelompok_a1x: KelompokId::new(),
            kelompok_a1y: KelompokId::new(),
            kelompok_a2x: KelompokId::new(),
            kelompok_b1x: KelompokId::new(),
            class_a1x: ClassId::new(),
            class_a1y: ClassId::new(),
            class_a2x: ClassId::new(),
            class_b1x: ClassId::new(),
        }
    }

    pub fn superadmin(&self) -> UserProfile {
        UserProfile::new(UserId::new(), Role::Superadmin)
    }

    pub fn student_user(&self) -> UserProfile {
        UserProfile::new(UserId::new(), Role::Student)
            .with_daerah(self.daerah_a)
            .with_desa(self.desa_a1)
            .with_kelompok(self.kelompok_a1x)
    }

    pub fn coordinator(&self) -> UserProfile {
        UserProfile::new(UserId::new(), Role::MaterialCoordinator)
    }

    /// Profile of `role` at daerah A.
    pub fn at_daerah_a(&self, role: Role) -> UserProfile {
        UserProfile::new(UserId::new(), role).with_daerah(self.daerah_a)
    }

    /// Profile of `role` at desa A1.
    pub fn at_desa_a1(&self, role: Role) -> UserProfile {
        self.at_daerah_a(role).with_desa(self.desa_a1)
    }

    /// Profile of `role` at kelompok A1x.
    pub fn at_kelompok_a1x(&self, role: Role) -> UserProfile {
        self.at_desa_a1(role).with_kelompok(self.kelompok_a1x)
    }

    pub fn student_in_a1x(&self) -> StudentWithOrg {
        StudentWithOrg::new(StudentId::new())
            .located(self.daerah_a, self.desa_a1, self.kelompok_a1x)
            .in_class(self.class_a1x)
    }

    pub fn student_in_a1y(&self) -> StudentWithOrg {
        StudentWithOrg::new(StudentId::new())
            .located(self.daerah_a, self.desa_a1, self.kelompok_a1y)
            .in_class(self.class_a1y)
    }

    pub fn student_in_a2x(&self) -> StudentWithOrg {
        StudentWithOrg::new(StudentId::new())
            .located(self.daerah_a, self.desa_a2, self.kelompok_a2x)
            .in_class(self.class_a2x)
    }

    pub fn student_in_b1x(&self) -> StudentWithOrg {
        StudentWithOrg::new(StudentId::new())
            .located(self.daerah_b, self.desa_b1, self.kelompok_b1x)
            .in_class(self.class_b1x)
    }

    /// Meeting in kelompok A1x created by `teacher_id`.
    ///
    /// The class/kelompok/desa joins use the array shape when `as_array` is set.
    pub fn meeting_in_a1x(&self, teacher_id: UserId, as_array: bool) -> MeetingRecord {
        fn wrap<T>(value: T, as_array: bool) -> OneOrMany<T> {
            if as_array {
                OneOrMany::Many(vec![value])
            } else {
                OneOrMany::One(value)
            }
        }

        MeetingRecord {
            id: MeetingId::new(),
            teacher_id,
            class_id: Some(self.class_a1x),
            class_ids: Some(vec![self.class_a1x]),
            class: Some(wrap(
                ClassRecord {
                    id: self.class_a1x,
                    kelompok_id: Some(self.kelompok_a1x),
                    kelompok: Some(wrap(
                        KelompokRecord {
                            id: self.kelompok_a1x,
                            desa_id: Some(self.desa_a1),
                            desa: Some(wrap(
                                DesaRecord {
                                    id: self.desa_a1,
                                    daerah_id: Some(self.daerah_a),
                                },
                                as_array,
                            )),
                        },
                        as_array,
                    )),
                },
                as_array,
            )),
        }
    }
}

pub fn all_flags() -> PermissionFlags {
    PermissionFlags {
        can_archive_students: true,
        can_transfer_students: true,
        can_soft_delete_students: true,
        can_hard_delete_students: true,
        can_manage_materials: true,
    }
}

/// Store seeded with the given profiles, meetings and class assignments.
pub fn store_with(
    profiles: &[UserProfile],
    meetings: &[MeetingRecord],
    assignments: &[TeacherClass],
) -> InMemoryStore {
    let mut store = InMemoryStore::new();
    for profile in profiles {
        store.insert_profile(profile.clone());
    }
    for meeting in meetings {
        store.insert_meeting_record(meeting.clone());
    }
    for assignment in assignments {
        store.assign_class(*assignment);
    }
    store
}
