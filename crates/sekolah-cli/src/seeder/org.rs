//! Organisation hierarchy generation.

use rayon::prelude::*;
use sekolah_models::{ClassId, DaerahId, DesaId, KelompokId};

use super::models::{KelompokSeed, SeedConfig};

/// Generates the daerah → desa → kelompok tree, one seed per kelompok.
pub fn generate_hierarchy(config: &SeedConfig) -> Vec<KelompokSeed> {
    let desa_per_daerah = config.desa_per_daerah;
    let kelompok_per_desa = config.kelompok_per_desa;
    let classes_per_kelompok = config.classes_per_kelompok;

    (0..config.daerah)
        .into_par_iter()
        .flat_map(|_| {
            let daerah_id = DaerahId::new();
            (0..desa_per_daerah)
                .flat_map(|_| {
                    let desa_id = DesaId::new();
                    (0..kelompok_per_desa).map(move |_| KelompokSeed {
                        daerah_id,
                        desa_id,
                        kelompok_id: KelompokId::new(),
                        class_ids: (0..classes_per_kelompok).map(|_| ClassId::new()).collect(),
                    })
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Distinct daerah IDs, in first-seen order.
pub fn distinct_daerah(seeds: &[KelompokSeed]) -> Vec<DaerahId> {
    let mut ids: Vec<DaerahId> = Vec::new();
    for seed in seeds {
        if !ids.contains(&seed.daerah_id) {
            ids.push(seed.daerah_id);
        }
    }
    ids
}

/// Distinct (daerah, desa) pairs, in first-seen order.
pub fn distinct_desa(seeds: &[KelompokSeed]) -> Vec<(DaerahId, DesaId)> {
    let mut ids: Vec<(DaerahId, DesaId)> = Vec::new();
    for seed in seeds {
        if !ids.iter().any(|(_, desa)| *desa == seed.desa_id) {
            ids.push((seed.daerah_id, seed.desa_id));
        }
    }
    ids
}
