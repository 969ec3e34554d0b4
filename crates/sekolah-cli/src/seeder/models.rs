//! Data models for dataset seeding configuration.
//!
//! This module contains configuration structures for controlling how
//! fake organisation data is generated.

use sekolah_models::{ClassId, DaerahId, DesaId, KelompokId};

/// One generated kelompok with its place in the hierarchy and its classes.
#[derive(Debug, Clone)]
pub struct KelompokSeed {
    pub daerah_id: DaerahId,
    pub desa_id: DesaId,
    pub kelompok_id: KelompokId,
    pub class_ids: Vec<ClassId>,
}

/// Complete configuration for dataset seeding.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub daerah: usize,
    pub desa_per_daerah: usize,
    pub kelompok_per_desa: usize,
    pub classes_per_kelompok: usize,
    pub teachers_per_kelompok: usize,
    pub students_per_class: usize,
    pub meetings_per_teacher: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            daerah: 2,
            desa_per_daerah: 3,
            kelompok_per_desa: 3,
            classes_per_kelompok: 2,
            teachers_per_kelompok: 2,
            students_per_class: 10,
            meetings_per_teacher: 2,
        }
    }
}

impl SeedConfig {
    /// Creates a new seed configuration with the specified number of daerah.
    pub fn new(daerah: usize) -> Self {
        Self {
            daerah,
            ..Default::default()
        }
    }

    pub fn total_kelompok(&self) -> usize {
        self.daerah * self.desa_per_daerah * self.kelompok_per_desa
    }

    pub fn total_students(&self) -> usize {
        self.total_kelompok() * self.classes_per_kelompok * self.students_per_class
    }
}
