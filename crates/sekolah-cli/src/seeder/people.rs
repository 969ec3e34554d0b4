//! User and student generation.
//!
//! Staff are generated per organisational tier so every scope the access
//! layer distinguishes is represented in a seeded dataset.

use fake::Fake;
use fake::faker::name::en::*;
use rand::Rng;
use rayon::prelude::*;
use sekolah_models::{
    ClassId, DaerahId, DesaId, PermissionFlags, Role, StudentId, StudentStatus, StudentWithOrg,
    TeacherClass, UserId, UserProfile,
};

use super::models::KelompokSeed;

fn full_name() -> String {
    let first_name: String = FirstName().fake();
    let last_name: String = LastName().fake();
    format!("{} {}", first_name, last_name)
}

fn random_permissions() -> PermissionFlags {
    let mut rng = rand::thread_rng();
    PermissionFlags {
        can_archive_students: rng.gen_bool(0.5),
        can_transfer_students: rng.gen_bool(0.5),
        can_soft_delete_students: rng.gen_bool(0.3),
        can_hard_delete_students: rng.gen_bool(0.1),
        can_manage_materials: false,
    }
}

fn profile(role: Role) -> UserProfile {
    UserProfile::new(UserId::new(), role).with_name(full_name())
}

/// Generates the unscoped accounts: one superadmin and one material coordinator.
pub fn generate_global_users() -> Vec<UserProfile> {
    vec![
        profile(Role::Superadmin),
        profile(Role::MaterialCoordinator).with_permissions(PermissionFlags {
            can_manage_materials: true,
            ..Default::default()
        }),
    ]
}

/// Generates one admin and one teacher scoped to each daerah.
pub fn generate_daerah_staff(daerah_ids: &[DaerahId]) -> Vec<UserProfile> {
    daerah_ids
        .par_iter()
        .flat_map(|&daerah_id| {
            vec![
                profile(Role::Admin)
                    .with_daerah(daerah_id)
                    .with_permissions(random_permissions()),
                profile(Role::Teacher).with_daerah(daerah_id),
            ]
        })
        .collect()
}

/// Generates one admin and one teacher scoped to each desa.
pub fn generate_desa_staff(desa_ids: &[(DaerahId, DesaId)]) -> Vec<UserProfile> {
    desa_ids
        .par_iter()
        .flat_map(|&(daerah_id, desa_id)| {
            vec![
                profile(Role::Admin)
                    .with_daerah(daerah_id)
                    .with_desa(desa_id)
                    .with_permissions(random_permissions()),
                profile(Role::Teacher).with_daerah(daerah_id).with_desa(desa_id),
            ]
        })
        .collect()
}

/// Generates the admin and teachers of each kelompok.
///
/// Teachers are assigned to the kelompok's classes round-robin; the returned
/// assignments feed the dataset's teacher ↔ class table.
pub fn generate_kelompok_staff(
    seeds: &[KelompokSeed],
    teachers_per_kelompok: usize,
) -> (Vec<UserProfile>, Vec<TeacherClass>) {
    seeds
        .par_iter()
        .map(|seed| {
            let mut users = Vec::with_capacity(teachers_per_kelompok + 1);
            let mut assignments = Vec::with_capacity(teachers_per_kelompok);

            users.push(
                profile(Role::Admin)
                    .with_daerah(seed.daerah_id)
                    .with_desa(seed.desa_id)
                    .with_kelompok(seed.kelompok_id)
                    .with_permissions(random_permissions()),
            );

            for teacher_idx in 0..teachers_per_kelompok {
                let teacher = profile(Role::Teacher)
                    .with_daerah(seed.daerah_id)
                    .with_desa(seed.desa_id)
                    .with_kelompok(seed.kelompok_id)
                    .with_permissions(random_permissions());

                if !seed.class_ids.is_empty() {
                    assignments.push(TeacherClass {
                        teacher_id: teacher.id,
                        class_id: seed.class_ids[teacher_idx % seed.class_ids.len()],
                    });
                }
                users.push(teacher);
            }

            (users, assignments)
        })
        .reduce(
            || (Vec::new(), Vec::new()),
            |(mut users, mut assignments), (more_users, more_assignments)| {
                users.extend(more_users);
                assignments.extend(more_assignments);
                (users, assignments)
            },
        )
}

/// Generates students for every class of every kelompok.
pub fn generate_students(seeds: &[KelompokSeed], students_per_class: usize) -> Vec<StudentWithOrg> {
    seeds
        .par_iter()
        .flat_map(|seed| {
            let mut students = Vec::with_capacity(seed.class_ids.len() * students_per_class);
            for &class_id in &seed.class_ids {
                for _ in 0..students_per_class {
                    students.push(generate_student(seed, class_id));
                }
            }
            students
        })
        .collect()
}

fn generate_student(seed: &KelompokSeed, class_id: ClassId) -> StudentWithOrg {
    let mut rng = rand::thread_rng();
    let mut student = StudentWithOrg::new(StudentId::new())
        .located(seed.daerah_id, seed.desa_id, seed.kelompok_id)
        .in_class(class_id);

    student.name = Some(full_name());
    student.status = match rng.gen_range(0..10) {
        0 => StudentStatus::Graduated,
        1 => StudentStatus::Inactive,
        _ => StudentStatus::Active,
    };
    student
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeder::models::SeedConfig;
    use crate::seeder::org::generate_hierarchy;

    #[test]
    fn test_global_users() {
        let users = generate_global_users();
        assert_eq!(users.len(), 2);
        assert!(users.iter().all(|u| u.daerah_id.is_none()));
        assert!(users[1].permissions.can_manage_materials);
    }

    #[test]
    fn test_kelompok_staff_chain_is_consistent() {
        let seeds = generate_hierarchy(&SeedConfig::default());
        let (users, assignments) = generate_kelompok_staff(&seeds, 3);

        assert_eq!(users.len(), seeds.len() * 4);
        assert_eq!(assignments.len(), seeds.len() * 3);
        assert!(users.iter().all(|u| u.has_consistent_chain()));
        assert!(users.iter().all(|u| u.kelompok_id.is_some()));
    }

    #[test]
    fn test_students_follow_their_kelompok() {
        let config = SeedConfig::default();
        let seeds = generate_hierarchy(&config);
        let students = generate_students(&seeds, 4);

        assert_eq!(students.len(), seeds.len() * config.classes_per_kelompok * 4);
        for student in &students {
            let seed = seeds
                .iter()
                .find(|s| Some(s.kelompok_id) == student.kelompok_id)
                .expect("student kelompok exists");
            assert_eq!(student.desa_id, Some(seed.desa_id));
            assert_eq!(student.daerah_id, Some(seed.daerah_id));
            assert!(seed.class_ids.contains(&student.class_id.expect("class set")));
        }
    }
}
