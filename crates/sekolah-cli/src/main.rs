use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use dotenvy::dotenv;
use sekolah_access::{
    Dataset, InMemoryStore, StudentAction, can_access_feature, can_edit_attendance_record,
    can_edit_or_delete_meeting, can_manage_materials, can_perform_student_action,
    can_teacher_access_student, get_data_filter, get_teacher_scope, is_hierarchical_teacher,
    is_material_coordinator,
};
use sekolah_cli::report::Decision;
use sekolah_cli::seeder::{self, SeedConfig};
use sekolah_config::{AccessConfig, LoggingConfig};
use sekolah_models::{MeetingId, StudentId, UserId};
use sekolah_observability::{init_metrics, init_tracing};
use tracing::warn;

#[derive(Parser)]
#[command(name = "sekolah-cli")]
#[command(about = "Sekolah CLI - Evaluate hierarchical access decisions", long_about = None)]
struct Cli {
    /// Dataset to evaluate against (defaults to SEKOLAH_DATASET)
    #[arg(short = 'd', long, global = true)]
    data: Option<PathBuf>,

    /// Print Prometheus metrics after the command
    #[arg(long, global = true)]
    metrics: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a user's teacher scope
    Scope {
        #[arg(short = 'u', long)]
        user: UserId,
    },
    /// Check whether a teacher can access a student
    StudentAccess {
        #[arg(short = 'u', long)]
        user: UserId,

        #[arg(short = 's', long)]
        student: StudentId,
    },
    /// Check whether a user can open a feature
    Feature {
        #[arg(short = 'u', long)]
        user: UserId,

        /// Feature name, e.g. dashboard or manage_classes
        #[arg(short = 'f', long)]
        feature: String,
    },
    /// Derive a user's data filter
    Filter {
        #[arg(short = 'u', long)]
        user: UserId,

        /// Also list the students the filter lets through
        #[arg(long)]
        apply: bool,
    },
    /// Check whether a user can edit or delete a meeting
    Meeting {
        #[arg(short = 'm', long)]
        meeting: MeetingId,

        #[arg(short = 'u', long)]
        user: UserId,
    },
    /// Check whether a user can edit a student's attendance in a meeting
    Attendance {
        #[arg(short = 'm', long)]
        meeting: MeetingId,

        #[arg(short = 'u', long)]
        user: UserId,

        #[arg(short = 's', long)]
        student: StudentId,
    },
    /// Check a user's material management gates
    Materials {
        #[arg(short = 'u', long)]
        user: UserId,
    },
    /// Check whether a user can archive, transfer or delete a student
    StudentAction {
        #[arg(short = 'u', long)]
        user: UserId,

        #[arg(short = 's', long)]
        student: StudentId,

        #[arg(short = 'a', long, value_enum)]
        action: ActionArg,
    },
    /// Report profiles whose daerah/desa/kelompok pointers are inconsistent
    Validate,
    /// Generate a fake dataset
    Seed {
        /// Output path (defaults to the dataset path)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Number of daerah to create
        #[arg(long, default_value = "2")]
        daerah: usize,

        /// Number of desa per daerah
        #[arg(long, default_value = "3")]
        desa: usize,

        /// Number of kelompok per desa
        #[arg(long, default_value = "3")]
        kelompok: usize,

        /// Number of classes per kelompok
        #[arg(long, default_value = "2")]
        classes: usize,

        /// Number of teachers per kelompok
        #[arg(long, default_value = "2")]
        teachers: usize,

        /// Number of students per class
        #[arg(long, default_value = "10")]
        students: usize,

        /// Number of meetings per teacher
        #[arg(long, default_value = "2")]
        meetings: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ActionArg {
    Archive,
    Transfer,
    SoftDelete,
    HardDelete,
}

impl From<ActionArg> for StudentAction {
    fn from(arg: ActionArg) -> Self {
        match arg {
            ActionArg::Archive => StudentAction::Archive,
            ActionArg::Transfer => StudentAction::Transfer,
            ActionArg::SoftDelete => StudentAction::SoftDelete,
            ActionArg::HardDelete => StudentAction::HardDelete,
        }
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let logging = LoggingConfig::from_env();
    init_tracing(&logging);

    let cli = Cli::parse();
    let access = AccessConfig::from_env();
    let data_path = cli.data.unwrap_or(access.dataset_path);

    let metrics = if cli.metrics {
        let handle = init_metrics(&logging);
        if handle.is_none() {
            warn!("Metrics requested but OBSERVABILITY_ENABLED is off");
        }
        handle
    } else {
        None
    };

    let result = match cli.command {
        Commands::Seed {
            output,
            daerah,
            desa,
            kelompok,
            classes,
            teachers,
            students,
            meetings,
        } => {
            let config = SeedConfig {
                daerah,
                desa_per_daerah: desa,
                kelompok_per_desa: kelompok,
                classes_per_kelompok: classes,
                teachers_per_kelompok: teachers,
                students_per_class: students,
                meetings_per_teacher: meetings,
            };
            handle_seed(&output.unwrap_or(data_path), &config).await
        }
        Commands::Validate => handle_validate(&data_path, access.strict_chain).await,
        command => match load_store(&data_path, access.strict_chain).await {
            Ok(store) => handle_decision(&store, command).await,
            Err(e) => Err(e),
        },
    };

    if let Err(e) = result {
        eprintln!("\n❌ Error: {:#}", e);
        std::process::exit(1);
    }

    if let Some(handle) = metrics {
        println!("{}", handle.render());
    }
}

async fn load_store(path: &Path, strict_chain: bool) -> anyhow::Result<InMemoryStore> {
    let dataset = Dataset::load(path)
        .await
        .with_context(|| format!("Failed to load dataset {}", path.display()))?;

    let invalid = dataset.invalid_profiles();
    if !invalid.is_empty() {
        if strict_chain {
            bail!(
                "{} profiles have an inconsistent organisation chain (run `validate`)",
                invalid.len()
            );
        }
        for (user_id, errors) in &invalid {
            warn!(%user_id, %errors, "Profile has an inconsistent organisation chain");
        }
    }

    Ok(InMemoryStore::from_dataset(dataset))
}

async fn handle_decision(store: &InMemoryStore, command: Commands) -> anyhow::Result<()> {
    let decision = match command {
        Commands::Scope { user } => scope_decision(store, user).tracked(),
        Commands::StudentAccess { user, student } => {
            student_access_decision(store, user, student).tracked()
        }
        Commands::Feature { user, feature } => feature_decision(store, user, feature).tracked(),
        Commands::Filter { user, apply } => filter_decision(store, user, apply).tracked(),
        // Counted by the access layer itself
        Commands::Meeting { meeting, user } => {
            let allowed = can_edit_or_delete_meeting(store, store, meeting, user).await;
            Decision::new("edit_meeting", allowed)
        }
        Commands::Attendance {
            meeting,
            user,
            student,
        } => attendance_decision(store, meeting, user, student).tracked(),
        Commands::Materials { user } => {
            let profile = store.profile(user);
            Decision::new("manage_materials", can_manage_materials(profile))
                .with_detail(serde_json::json!({
                    "is_material_coordinator": is_material_coordinator(profile),
                }))
                .tracked()
        }
        Commands::StudentAction {
            user,
            student,
            action,
        } => student_action_decision(store, user, student, action.into()).tracked(),
        Commands::Validate | Commands::Seed { .. } => bail!("not a decision command"),
    };

    println!("{}", decision.to_json()?);
    Ok(())
}

fn scope_decision(store: &InMemoryStore, user: UserId) -> Decision {
    let Some(profile) = store.profile(user) else {
        return Decision::missing("scope", "profile");
    };

    let scope = get_teacher_scope(profile);
    Decision::new("scope", scope.is_some()).with_detail(serde_json::json!({
        "role": profile.role,
        "scope": scope,
        "hierarchical": is_hierarchical_teacher(profile),
    }))
}

fn student_access_decision(store: &InMemoryStore, user: UserId, student: StudentId) -> Decision {
    match (store.profile(user), store.student(student)) {
        (Some(profile), Some(student)) => Decision::new(
            "student_access",
            can_teacher_access_student(profile, student),
        ),
        (None, _) => Decision::missing("student_access", "profile"),
        (_, None) => Decision::missing("student_access", "student"),
    }
}

fn feature_decision(store: &InMemoryStore, user: UserId, feature: String) -> Decision {
    let Some(profile) = store.profile(user) else {
        return Decision::missing("feature", "profile");
    };

    Decision::new("feature", can_access_feature(profile, &feature))
        .with_detail(serde_json::json!({ "feature": feature }))
}

fn filter_decision(store: &InMemoryStore, user: UserId, apply: bool) -> Decision {
    let Some(profile) = store.profile(user) else {
        return Decision::missing("filter", "profile");
    };

    let filter = get_data_filter(profile);
    let mut detail = serde_json::json!({ "filter": filter });
    if apply {
        let students = store.students();
        let visible: Vec<StudentId> = match &filter {
            Some(filter) => filter.apply(&students).into_iter().map(|s| s.id).collect(),
            None => Vec::new(),
        };
        detail["students"] = serde_json::json!(visible);
    }
    Decision::new("filter", filter.is_some()).with_detail(detail)
}

fn attendance_decision(
    store: &InMemoryStore,
    meeting: MeetingId,
    user: UserId,
    student: StudentId,
) -> Decision {
    match (store.profile(user), store.meeting(meeting), store.student(student)) {
        (Some(profile), Some(chain), Some(student)) => Decision::new(
            "edit_attendance",
            can_edit_attendance_record(profile, chain, store.teacher_classes(), student.class_id),
        ),
        (None, _, _) => Decision::missing("edit_attendance", "profile"),
        (_, None, _) => Decision::missing("edit_attendance", "meeting"),
        (_, _, None) => Decision::missing("edit_attendance", "student"),
    }
}

fn student_action_decision(
    store: &InMemoryStore,
    user: UserId,
    student: StudentId,
    action: StudentAction,
) -> Decision {
    match (store.profile(user), store.student(student)) {
        (Some(profile), Some(student)) => Decision::new(
            "student_action",
            can_perform_student_action(profile, student, action),
        )
        .with_detail(serde_json::json!({ "action": action.as_str() })),
        (None, _) => Decision::missing("student_action", "profile"),
        (_, None) => Decision::missing("student_action", "student"),
    }
}

async fn handle_validate(path: &Path, strict_chain: bool) -> anyhow::Result<()> {
    let dataset = Dataset::load(path)
        .await
        .with_context(|| format!("Failed to load dataset {}", path.display()))?;

    let invalid = dataset.invalid_profiles();
    println!(
        "🔍 Checked {} profiles, {} students, {} meetings",
        dataset.profiles.len(),
        dataset.students.len(),
        dataset.meetings.len()
    );

    if invalid.is_empty() {
        println!("✅ All organisation chains are consistent");
        return Ok(());
    }

    for (user_id, errors) in &invalid {
        println!("   ✗ {}: {}", user_id, errors);
    }

    if strict_chain {
        bail!("{} profiles have an inconsistent organisation chain", invalid.len());
    }
    println!("⚠️  {} profiles have an inconsistent organisation chain", invalid.len());
    Ok(())
}

async fn handle_seed(path: &Path, config: &SeedConfig) -> anyhow::Result<()> {
    seeder::seed_to_file(path, config).await?;
    Ok(())
}
