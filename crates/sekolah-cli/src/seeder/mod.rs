//! Dataset seeding.
//!
//! Generates a fake organisation (daerah → desa → kelompok → classes) with
//! staff at every tier, students and meetings, and writes it as the JSON
//! dataset the CLI and [`InMemoryStore`](sekolah_access::InMemoryStore) load.

pub mod meetings;
pub mod models;
pub mod org;
pub mod people;

use std::path::Path;
use std::time::Instant;

use sekolah_access::Dataset;

pub use models::{KelompokSeed, SeedConfig};

/// Generates a complete dataset in memory.
pub fn generate_dataset(config: &SeedConfig) -> Dataset {
    let start_time = Instant::now();

    println!(
        "🏫 Generating {} daerah, {} kelompok...",
        config.daerah,
        config.total_kelompok()
    );
    let seeds = org::generate_hierarchy(config);
    let daerah_ids = org::distinct_daerah(&seeds);
    let desa_ids = org::distinct_desa(&seeds);

    println!("👥 Generating staff...");
    let mut profiles = people::generate_global_users();
    profiles.extend(people::generate_daerah_staff(&daerah_ids));
    profiles.extend(people::generate_desa_staff(&desa_ids));
    let (kelompok_staff, teacher_classes) =
        people::generate_kelompok_staff(&seeds, config.teachers_per_kelompok);
    profiles.extend(kelompok_staff);
    println!("   ✓ {} users", profiles.len());

    println!(
        "🎓 Generating {} students ({} per class)...",
        config.total_students(),
        config.students_per_class
    );
    let students = people::generate_students(&seeds, config.students_per_class);

    println!("📅 Generating meetings...");
    let meetings =
        meetings::generate_meetings(&seeds, &teacher_classes, config.meetings_per_teacher);
    println!("   ✓ {} meetings", meetings.len());

    println!("✅ Generated dataset in {:?}", start_time.elapsed());

    Dataset {
        profiles,
        students,
        meetings,
        teacher_classes,
    }
}

/// Generates a dataset and writes it to `path` as pretty-printed JSON.
pub async fn seed_to_file(path: &Path, config: &SeedConfig) -> anyhow::Result<Dataset> {
    let dataset = generate_dataset(config);
    let json = serde_json::to_string_pretty(&dataset)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, json).await?;

    println!("💾 Wrote {}", path.display());
    Ok(dataset)
}
