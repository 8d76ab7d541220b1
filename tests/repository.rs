use chrono::NaiveDate;
use diesel::prelude::*;
use idea_directory::db::DbPool;
use idea_directory::domain::types::{BusinessType, Category, IdeaId, SortBy, TagName};
use idea_directory::repository::{DieselRepository, IdeaListQuery, IdeaReader, IdeaWriter};
use idea_directory::schema::ideas;

mod common;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, day).expect("valid date")
}

#[allow(clippy::too_many_arguments)]
fn insert_idea(
    pool: &DbPool,
    title: &str,
    category: &str,
    business_type: &str,
    tags: &[&str],
    source_name: &str,
    source_date: NaiveDate,
    clicks: i32,
) -> i32 {
    let mut conn = pool.get().expect("Failed to get connection");
    diesel::insert_into(ideas::table)
        .values((
            ideas::title.eq(title),
            ideas::description.eq(format!("{title} description")),
            ideas::problem.eq("problem"),
            ideas::solution.eq("solution"),
            ideas::category.eq(category),
            ideas::business_type.eq(business_type),
            ideas::subcategories.eq(serde_json::to_string(tags).unwrap()),
            ideas::source_name.eq(source_name),
            ideas::source_date.eq(source_date),
            ideas::clicks.eq(clicks),
        ))
        .returning(ideas::id)
        .get_result::<i32>(&mut conn)
        .expect("Failed to insert idea")
}

fn seed(pool: &DbPool) -> Vec<i32> {
    vec![
        insert_idea(
            pool,
            "Recipe Sharing App",
            "Food & Drink",
            "Mobile App",
            &["recipes", "community"],
            "Marta",
            date(10),
            5,
        ),
        insert_idea(
            pool,
            "Inventory Tracker",
            "Productivity",
            "SaaS",
            &["inventory"],
            "Jonas",
            date(3),
            12,
        ),
        insert_idea(
            pool,
            "Coffee Subscription",
            "Food & Drink",
            "Marketplace",
            &["coffee", "community"],
            "Marta",
            date(20),
            2,
        ),
    ]
}

#[test]
fn test_list_ideas_filters() {
    let test_db = common::TestDb::new();
    let pool = test_db.pool();
    seed(&pool);
    let repo = DieselRepository::new(pool);

    let (total, items) = repo
        .list_ideas(IdeaListQuery::default().category(Category::FoodAndDrink))
        .expect("Failed to list ideas");
    assert_eq!(total, 2);
    assert!(items.iter().all(|i| i.category == Category::FoodAndDrink));

    let (total, items) = repo
        .list_ideas(IdeaListQuery::default().business_type(BusinessType::Saas))
        .expect("Failed to list ideas");
    assert_eq!(total, 1);
    assert_eq!(items[0].title.as_str(), "Inventory Tracker");

    // Search is case-insensitive and also matches the creator name.
    let (total, items) = repo
        .list_ideas(IdeaListQuery::default().search("RECIPE"))
        .expect("Failed to list ideas");
    assert_eq!(total, 1);
    assert_eq!(items[0].title.as_str(), "Recipe Sharing App");

    let (total, _) = repo
        .list_ideas(IdeaListQuery::default().search("marta"))
        .expect("Failed to list ideas");
    assert_eq!(total, 2);

    // The date bound is inclusive.
    let (total, items) = repo
        .list_ideas(IdeaListQuery::default().since(date(10)))
        .expect("Failed to list ideas");
    assert_eq!(total, 2);
    assert!(items.iter().all(|i| i.source_date >= date(10)));

    let (total, items) = repo
        .list_ideas(IdeaListQuery::default().tag(TagName::new("community").unwrap()))
        .expect("Failed to list ideas");
    assert_eq!(total, 2);
    assert!(
        items
            .iter()
            .all(|i| i.has_tag(&TagName::new("community").unwrap()))
    );

    // Filter axes combine with AND.
    let (total, items) = repo
        .list_ideas(
            IdeaListQuery::default()
                .category(Category::FoodAndDrink)
                .tag(TagName::new("coffee").unwrap()),
        )
        .expect("Failed to list ideas");
    assert_eq!(total, 1);
    assert_eq!(items[0].title.as_str(), "Coffee Subscription");
}

#[test]
fn test_list_ideas_sorting() {
    let test_db = common::TestDb::new();
    let pool = test_db.pool();
    seed(&pool);
    let repo = DieselRepository::new(pool);

    let titles = |sort: SortBy| -> Vec<String> {
        let (_, items) = repo
            .list_ideas(IdeaListQuery::default().sort(sort))
            .expect("Failed to list ideas");
        items
            .into_iter()
            .map(|i| i.title.as_str().to_string())
            .collect()
    };

    assert_eq!(
        titles(SortBy::NewestFirst),
        vec![
            "Coffee Subscription",
            "Recipe Sharing App",
            "Inventory Tracker"
        ]
    );
    assert_eq!(
        titles(SortBy::OldestFirst),
        vec![
            "Inventory Tracker",
            "Recipe Sharing App",
            "Coffee Subscription"
        ]
    );
    assert_eq!(
        titles(SortBy::MostClicked),
        vec![
            "Inventory Tracker",
            "Recipe Sharing App",
            "Coffee Subscription"
        ]
    );
    assert_eq!(
        titles(SortBy::LeastClicked),
        vec![
            "Coffee Subscription",
            "Recipe Sharing App",
            "Inventory Tracker"
        ]
    );
}

#[test]
fn test_list_ideas_pagination() {
    let test_db = common::TestDb::new();
    let pool = test_db.pool();
    seed(&pool);
    let repo = DieselRepository::new(pool);

    let (total, first) = repo
        .list_ideas(
            IdeaListQuery::default()
                .sort(SortBy::OldestFirst)
                .paginate(1, 2),
        )
        .expect("Failed to list ideas");
    assert_eq!(total, 3);
    assert_eq!(first.len(), 2);

    let (total, second) = repo
        .list_ideas(
            IdeaListQuery::default()
                .sort(SortBy::OldestFirst)
                .paginate(2, 2),
        )
        .expect("Failed to list ideas");
    assert_eq!(total, 3);
    assert_eq!(second.len(), 1);

    // Pages concatenate to the unpaginated listing without overlap.
    assert_ne!(first[0].id, second[0].id);
    assert_ne!(first[1].id, second[0].id);
}

#[test]
fn test_get_idea_by_id() {
    let test_db = common::TestDb::new();
    let pool = test_db.pool();
    let ids = seed(&pool);
    let repo = DieselRepository::new(pool);

    let idea = repo
        .get_idea_by_id(IdeaId::new(ids[0]).unwrap())
        .expect("Failed to get idea")
        .expect("Idea not found");
    assert_eq!(idea.title.as_str(), "Recipe Sharing App");
    assert_eq!(idea.subcategories.len(), 2);
    assert_eq!(idea.clicks.get(), 5);

    let missing = repo
        .get_idea_by_id(IdeaId::new(9999).unwrap())
        .expect("Failed to get idea");
    assert!(missing.is_none());
}

#[test]
fn test_increment_clicks() {
    let test_db = common::TestDb::new();
    let pool = test_db.pool();
    let ids = seed(&pool);
    let repo = DieselRepository::new(pool);
    let id = IdeaId::new(ids[2]).unwrap();

    assert_eq!(repo.increment_clicks(id).expect("Failed to increment"), 1);
    assert_eq!(repo.increment_clicks(id).expect("Failed to increment"), 1);

    let idea = repo
        .get_idea_by_id(id)
        .expect("Failed to get idea")
        .expect("Idea not found");
    assert_eq!(idea.clicks.get(), 4);

    let affected = repo
        .increment_clicks(IdeaId::new(9999).unwrap())
        .expect("Failed to increment");
    assert_eq!(affected, 0);
}

#[test]
fn test_list_creators_and_tags_are_distinct_and_sorted() {
    let test_db = common::TestDb::new();
    let pool = test_db.pool();
    seed(&pool);
    let repo = DieselRepository::new(pool);

    let creators: Vec<String> = repo
        .list_creators()
        .expect("Failed to list creators")
        .into_iter()
        .map(|c| c.as_str().to_string())
        .collect();
    assert_eq!(creators, vec!["Jonas", "Marta"]);

    let tags: Vec<String> = repo
        .list_tags()
        .expect("Failed to list tags")
        .into_iter()
        .map(|t| t.as_str().to_string())
        .collect();
    assert_eq!(
        tags,
        vec!["coffee", "community", "inventory", "recipes"]
    );
}

#[test]
fn test_list_related_candidates() {
    let test_db = common::TestDb::new();
    let pool = test_db.pool();
    let ids = seed(&pool);
    // Shares neither category nor business type with the reference.
    insert_idea(
        &pool,
        "Freelance Ledger",
        "Business",
        "API Product",
        &[],
        "Iris",
        date(5),
        50,
    );
    // Shares the business type and outclicks every other candidate.
    insert_idea(
        &pool,
        "Commute Planner",
        "Lifestyle",
        "Mobile App",
        &[],
        "Iris",
        date(6),
        30,
    );
    let repo = DieselRepository::new(pool);

    let reference = repo
        .get_idea_by_id(IdeaId::new(ids[0]).unwrap())
        .expect("Failed to get idea")
        .expect("Idea not found");

    let candidates = repo
        .list_related_candidates(&reference, 10)
        .expect("Failed to list candidates");

    // The reference itself and the idea sharing neither label are excluded;
    // the rest arrive ordered by clicks descending.
    let titles: Vec<&str> = candidates.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["Commute Planner", "Coffee Subscription"]);

    let capped = repo
        .list_related_candidates(&reference, 1)
        .expect("Failed to list candidates");
    assert_eq!(capped.len(), 1);
    assert_eq!(capped[0].title.as_str(), "Commute Planner");
}
