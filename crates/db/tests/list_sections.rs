//! Integration tests for the ordered list repositories.
//!
//! - Create appends to the end unless an explicit order is given
//! - Active/all listings and display order
//! - Partial update and delete
//! - Reorder is all-or-nothing

use sqlx::PgPool;
use folio_db::models::project::{CreateProject, UpdateProject};
use folio_db::models::service::CreateService;
use folio_db::models::skill::{CreateSkill, UpdateSkill};
use folio_db::repositories::{ProjectRepo, ServiceRepo, SkillRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(title: &str) -> CreateProject {
    CreateProject {
        title: title.to_string(),
        ..Default::default()
    }
}

fn new_service(title: &str) -> CreateService {
    CreateService {
        title: title.to_string(),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_appends_order_index(pool: PgPool) {
    let a = ProjectRepo::create(&pool, &new_project("A")).await.unwrap();
    let b = ProjectRepo::create(&pool, &new_project("B")).await.unwrap();
    let c = ProjectRepo::create(&pool, &new_project("C")).await.unwrap();

    assert_eq!(a.order_index, 0);
    assert_eq!(b.order_index, 1);
    assert_eq!(c.order_index, 2);
    assert!(a.is_active);
    assert!(!a.is_featured);
    assert_eq!(a.github_url, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_explicit_order_index_is_kept(pool: PgPool) {
    let input = CreateService {
        order_index: Some(7),
        ..new_service("Consulting")
    };
    let created = ServiceRepo::create(&pool, &input).await.unwrap();
    assert_eq!(created.order_index, 7);

    let next = ServiceRepo::create(&pool, &new_service("Audit")).await.unwrap();
    assert_eq!(next.order_index, 8);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_active_hides_inactive(pool: PgPool) {
    ProjectRepo::create(&pool, &new_project("Visible")).await.unwrap();
    ProjectRepo::create(
        &pool,
        &CreateProject {
            is_active: Some(false),
            ..new_project("Hidden")
        },
    )
    .await
    .unwrap();

    let active = ProjectRepo::list_active(&pool).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].title, "Visible");

    let all = ProjectRepo::list_all(&pool).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_featured(pool: PgPool) {
    ProjectRepo::create(
        &pool,
        &CreateProject {
            is_featured: Some(true),
            ..new_project("Star")
        },
    )
    .await
    .unwrap();
    ProjectRepo::create(&pool, &new_project("Plain")).await.unwrap();

    let featured = ProjectRepo::list_featured(&pool).await.unwrap();
    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0].title, "Star");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_skill_items_round_trip(pool: PgPool) {
    let skill = SkillRepo::create(
        &pool,
        &CreateSkill {
            name: "Backend".into(),
            items: Some(vec!["Rust".into(), "PostgreSQL".into()]),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(skill.items, vec!["Rust", "PostgreSQL"]);

    let empty = SkillRepo::create(
        &pool,
        &CreateSkill {
            name: "Tools".into(),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(empty.items.is_empty());

    let updated = SkillRepo::update(
        &pool,
        skill.id,
        &UpdateSkill {
            items: Some(vec!["Go".into()]),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.items, vec!["Go"]);
    assert_eq!(updated.name, "Backend");
}

// ---------------------------------------------------------------------------
// Update / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_is_partial(pool: PgPool) {
    let created = ProjectRepo::create(
        &pool,
        &CreateProject {
            category: Some("Web".into()),
            github_url: Some("https://github.com/me/site".into()),
            ..new_project("Site")
        },
    )
    .await
    .unwrap();

    let updated = ProjectRepo::update(
        &pool,
        created.id,
        &UpdateProject {
            title: Some("Site v2".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .expect("row exists");
    assert_eq!(updated.title, "Site v2");
    assert_eq!(updated.category, "Web");
    assert_eq!(updated.github_url.as_deref(), Some("https://github.com/me/site"));

    let cleared = ProjectRepo::update(
        &pool,
        created.id,
        &UpdateProject {
            github_url: Some(String::new()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(cleared.github_url, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_returns_none(pool: PgPool) {
    let result = ProjectRepo::update(&pool, 999_999, &UpdateProject::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete(pool: PgPool) {
    let created = ServiceRepo::create(&pool, &new_service("Gone")).await.unwrap();
    assert!(ServiceRepo::delete(&pool, created.id).await.unwrap());
    assert!(!ServiceRepo::delete(&pool, created.id).await.unwrap());
    assert!(ServiceRepo::find_by_id(&pool, created.id).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Reorder
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reorder_assigns_positions(pool: PgPool) {
    let a = ProjectRepo::create(&pool, &new_project("A")).await.unwrap();
    let b = ProjectRepo::create(&pool, &new_project("B")).await.unwrap();
    let c = ProjectRepo::create(&pool, &new_project("C")).await.unwrap();

    let unknown = ProjectRepo::reorder(&pool, &[c.id, a.id, b.id]).await.unwrap();
    assert_eq!(unknown, None);

    let titles: Vec<String> = ProjectRepo::list_all(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(titles, vec!["C", "A", "B"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reorder_unknown_id_writes_nothing(pool: PgPool) {
    let a = ProjectRepo::create(&pool, &new_project("A")).await.unwrap();
    let b = ProjectRepo::create(&pool, &new_project("B")).await.unwrap();

    let unknown = ProjectRepo::reorder(&pool, &[b.id, 424_242, a.id]).await.unwrap();
    assert_eq!(unknown, Some(424_242));

    let after_a = ProjectRepo::find_by_id(&pool, a.id).await.unwrap().unwrap();
    let after_b = ProjectRepo::find_by_id(&pool, b.id).await.unwrap().unwrap();
    assert_eq!(after_a.order_index, 0);
    assert_eq!(after_b.order_index, 1);
}
