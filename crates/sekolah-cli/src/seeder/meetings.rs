//! Meeting generation.
//!
//! Records are emitted in the raw joined shape, alternating between a to-one
//! relation serialised as an object and as a one-element array, so loading a
//! seeded dataset exercises both normalisation paths.

use rayon::prelude::*;
use sekolah_models::meetings::{ClassRecord, DesaRecord, KelompokRecord};
use sekolah_models::{MeetingId, MeetingRecord, OneOrMany, TeacherClass};

use super::models::KelompokSeed;

fn wrap<T>(value: T, as_array: bool) -> OneOrMany<T> {
    if as_array {
        OneOrMany::Many(vec![value])
    } else {
        OneOrMany::One(value)
    }
}

/// Builds a meeting record for a teacher's assigned class.
pub fn generate_meeting(seed: &KelompokSeed, assignment: &TeacherClass, as_array: bool) -> MeetingRecord {
    let desa = DesaRecord {
        id: seed.desa_id,
        daerah_id: Some(seed.daerah_id),
    };
    let kelompok = KelompokRecord {
        id: seed.kelompok_id,
        desa_id: Some(seed.desa_id),
        desa: Some(wrap(desa, as_array)),
    };
    let class = ClassRecord {
        id: assignment.class_id,
        kelompok_id: Some(seed.kelompok_id),
        kelompok: Some(wrap(kelompok, !as_array)),
    };

    MeetingRecord {
        id: MeetingId::new(),
        teacher_id: assignment.teacher_id,
        class_id: Some(assignment.class_id),
        class_ids: Some(vec![assignment.class_id]),
        class: Some(wrap(class, as_array)),
    }
}

/// Generates `meetings_per_teacher` meetings for every teacher ↔ class assignment.
pub fn generate_meetings(
    seeds: &[KelompokSeed],
    assignments: &[TeacherClass],
    meetings_per_teacher: usize,
) -> Vec<MeetingRecord> {
    assignments
        .par_iter()
        .flat_map(|assignment| {
            let Some(seed) = seeds
                .iter()
                .find(|s| s.class_ids.contains(&assignment.class_id))
            else {
                return Vec::new();
            };

            (0..meetings_per_teacher)
                .map(|idx| generate_meeting(seed, assignment, idx % 2 == 1))
                .collect()
        })
        .collect()
}
