//! # Sekolah CLI
//!
//! Dataset seeding and decision reporting used by the `sekolah-cli` binary.
//!
//! ## Usage
//!
//! ```ignore
//! use sekolah_cli::seeder::{seed_to_file, SeedConfig};
//!
//! let config = SeedConfig::new(3); // 3 daerah with defaults
//! seed_to_file(Path::new("data/dataset.json"), &config).await?;
//! ```

pub mod report;
pub mod seeder;
