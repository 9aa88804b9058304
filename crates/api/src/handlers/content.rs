//! Handler for `/content`: every section in one document.
//!
//! The public site renders from this single read instead of twelve.

use axum::extract::State;
use axum::Json;
use folio_db::models::about::AboutSection;
use folio_db::models::contact::ContactInfo;
use folio_db::models::education::Education;
use folio_db::models::experience::Experience;
use folio_db::models::hero::HeroSection;
use folio_db::models::profile::Profile;
use folio_db::models::project::Project;
use folio_db::models::service::Service;
use folio_db::models::settings::SiteSettings;
use folio_db::models::skill::Skill;
use folio_db::models::soft_skill::SoftSkill;
use folio_db::models::stats::Stats;
use folio_db::repositories::{
    AboutRepo, ContactRepo, EducationRepo, ExperienceRepo, HeroRepo, ProfileRepo, ProjectRepo,
    ServiceRepo, SettingsRepo, SkillRepo, SoftSkillRepo, StatsRepo,
};
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Aggregate of all public content. Singletons never saved are `null`;
/// lists hold active rows only.
#[derive(Debug, Serialize)]
pub struct SiteContent {
    pub hero: Option<HeroSection>,
    pub about: Option<AboutSection>,
    pub profile: Option<Profile>,
    pub contact: Option<ContactInfo>,
    pub stats: Option<Stats>,
    pub settings: Option<SiteSettings>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub services: Vec<Service>,
    pub soft_skills: Vec<SoftSkill>,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
}

/// GET /api/content
pub async fn get_all(State(state): State<AppState>) -> AppResult<Json<SiteContent>> {
    let pool = &state.pool;
    let (hero, about, profile, contact, stats, settings) = tokio::try_join!(
        HeroRepo::get(pool),
        AboutRepo::get(pool),
        ProfileRepo::get(pool),
        ContactRepo::get(pool),
        StatsRepo::get(pool),
        SettingsRepo::get(pool),
    )?;
    let (projects, skills, services, soft_skills, education, experience) = tokio::try_join!(
        ProjectRepo::list_active(pool),
        SkillRepo::list_active(pool),
        ServiceRepo::list_active(pool),
        SoftSkillRepo::list_active(pool),
        EducationRepo::list_active(pool),
        ExperienceRepo::list_active(pool),
    )?;

    Ok(Json(SiteContent {
        hero,
        about,
        profile,
        contact,
        stats,
        settings,
        projects,
        skills,
        services,
        soft_skills,
        education,
        experience,
    }))
}
