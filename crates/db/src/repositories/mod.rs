//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async queries
//! that accept `&PgPool` as the first argument.

mod ordered;

pub mod about_repo;
pub mod contact_repo;
pub mod education_repo;
pub mod experience_repo;
pub mod hero_repo;
pub mod profile_repo;
pub mod project_repo;
pub mod service_repo;
pub mod settings_repo;
pub mod skill_repo;
pub mod soft_skill_repo;
pub mod stats_repo;
pub mod user_repo;

pub use about_repo::AboutRepo;
pub use contact_repo::ContactRepo;
pub use education_repo::EducationRepo;
pub use experience_repo::ExperienceRepo;
pub use hero_repo::HeroRepo;
pub use profile_repo::ProfileRepo;
pub use project_repo::ProjectRepo;
pub use service_repo::ServiceRepo;
pub use settings_repo::SettingsRepo;
pub use skill_repo::SkillRepo;
pub use soft_skill_repo::SoftSkillRepo;
pub use stats_repo::StatsRepo;
pub use user_repo::UserRepo;
