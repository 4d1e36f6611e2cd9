use super::*;
use factory::article::ArticleFactory;

/// Tests paging over a collection larger than one page.
///
/// Verifies that the requested page holds at most `limit` rows and that the metadata
/// reports the total, the page count and both neighbours.
///
/// Expected: Ok with 5 of 12 articles on page 2 of 3
#[tokio::test]
async fn pages_through_articles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_editor(db).await?;
    for _ in 0..12 {
        factory::create_article(db, author.id).await?;
    }

    let repo = ArticleRepository::new(db);
    let mut list = params(ArticleFilter::default());
    list.page = Some(2);
    list.limit = Some(5);
    let page = repo.list(&list).await?;

    assert_eq!(page.items.len(), 5);
    assert_eq!(page.meta.page, 2);
    assert_eq!(page.meta.limit, 5);
    assert_eq!(page.meta.total, 12);
    assert_eq!(page.meta.total_pages, 3);
    assert!(page.meta.has_next);
    assert!(page.meta.has_prev);

    Ok(())
}

/// Tests the default page size for articles.
///
/// Expected: Ok with 10 of 11 articles and a next page
#[tokio::test]
async fn uses_default_limit_of_ten() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_editor(db).await?;
    for _ in 0..11 {
        factory::create_article(db, author.id).await?;
    }

    let page = ArticleRepository::new(db)
        .list(&params(ArticleFilter::default()))
        .await?;

    assert_eq!(page.items.len(), 10);
    assert_eq!(page.meta.total_pages, 2);
    assert!(page.meta.has_next);
    assert!(!page.meta.has_prev);

    Ok(())
}

/// Tests a page past the end of the collection.
///
/// Expected: Ok with no rows but the real total
#[tokio::test]
async fn returns_empty_page_past_the_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_editor(db).await?;
    factory::create_article(db, author.id).await?;

    let mut list = params(ArticleFilter::default());
    list.page = Some(4);
    let page = ArticleRepository::new(db).list(&list).await?;

    assert!(page.items.is_empty());
    assert_eq!(page.meta.total, 1);
    assert!(!page.meta.has_next);

    Ok(())
}

/// Tests combining the status and featured filters.
///
/// Seeds 10 articles of which exactly 3 are both published and featured; the others
/// are published only, featured drafts or plain drafts.
///
/// Expected: Ok with exactly the 3 matching articles
#[tokio::test]
async fn filters_by_status_and_featured() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_editor(db).await?;
    let mut expected = Vec::new();
    for _ in 0..3 {
        let article = ArticleFactory::new(db, author.id)
            .status("published")
            .featured(true)
            .build()
            .await?;
        expected.push(article.id);
    }
    for _ in 0..3 {
        ArticleFactory::new(db, author.id)
            .status("published")
            .build()
            .await?;
    }
    for _ in 0..2 {
        ArticleFactory::new(db, author.id)
            .featured(true)
            .build()
            .await?;
    }
    for _ in 0..2 {
        factory::create_article(db, author.id).await?;
    }

    let page = ArticleRepository::new(db)
        .list(&params(ArticleFilter {
            status: Some(ArticleStatus::Published),
            featured: Some(true),
            ..Default::default()
        }))
        .await?;

    let mut ids: Vec<i32> = page.items.iter().map(|a| a.id).collect();
    ids.sort();
    assert_eq!(page.meta.total, 3);
    assert_eq!(ids, expected);

    Ok(())
}

/// Tests that search ignores letter case.
///
/// Expected: Ok with the article titled "Justice for All" found by "justice"
#[tokio::test]
async fn search_is_case_insensitive() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_editor(db).await?;
    let justice = ArticleFactory::new(db, author.id)
        .title("Justice for All")
        .build()
        .await?;
    ArticleFactory::new(db, author.id)
        .title("Harvest Report")
        .build()
        .await?;

    let page = ArticleRepository::new(db)
        .list(&params(ArticleFilter {
            search: Some("justice".to_string()),
            ..Default::default()
        }))
        .await?;

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, justice.id);

    Ok(())
}

/// Tests that search also looks at the article body.
///
/// Expected: Ok with the article whose content mentions the term
#[tokio::test]
async fn search_matches_content() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_editor(db).await?;
    let article = ArticleFactory::new(db, author.id)
        .content("Notes on the constitution")
        .build()
        .await?;
    factory::create_article(db, author.id).await?;

    let page = ArticleRepository::new(db)
        .list(&params(ArticleFilter {
            search: Some("Constitution".to_string()),
            ..Default::default()
        }))
        .await?;

    assert_eq!(page.meta.total, 1);
    assert_eq!(page.items[0].id, article.id);

    Ok(())
}

/// Tests filtering by tag.
///
/// Verifies that an article matches when it carries any of the requested tags and that
/// listed articles come back with their tags.
///
/// Expected: Ok with the two tagged articles
#[tokio::test]
async fn filters_by_any_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_editor(db).await?;
    let law = ArticleFactory::new(db, author.id)
        .tags(&["law"])
        .build()
        .await?;
    let history = ArticleFactory::new(db, author.id)
        .tags(&["history", "oromia"])
        .build()
        .await?;
    ArticleFactory::new(db, author.id)
        .tags(&["sport"])
        .build()
        .await?;

    let page = ArticleRepository::new(db)
        .list(&params(ArticleFilter {
            tags: Some(vec!["law".to_string(), "oromia".to_string()]),
            ..Default::default()
        }))
        .await?;

    let mut ids: Vec<i32> = page.items.iter().map(|a| a.id).collect();
    ids.sort();
    assert_eq!(ids, vec![law.id, history.id]);

    let tagged = page.items.iter().find(|a| a.id == history.id).unwrap();
    let mut tags = tagged.tags.clone();
    tags.sort();
    assert_eq!(tags, vec!["history".to_string(), "oromia".to_string()]);

    Ok(())
}

/// Tests a tag filter that no article carries.
///
/// Expected: Ok with an empty page
#[tokio::test]
async fn unknown_tag_yields_empty_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_editor(db).await?;
    ArticleFactory::new(db, author.id)
        .tags(&["law"])
        .build()
        .await?;

    let page = ArticleRepository::new(db)
        .list(&params(ArticleFilter {
            tags: Some(vec!["missing".to_string()]),
            ..Default::default()
        }))
        .await?;

    assert!(page.items.is_empty());
    assert_eq!(page.meta.total, 0);

    Ok(())
}

/// Tests sorting by a whitelisted column in both directions.
///
/// Expected: Ok with articles ordered by view count
#[tokio::test]
async fn sorts_by_view_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_editor(db).await?;
    for views in [5, 50, 20] {
        ArticleFactory::new(db, author.id)
            .view_count(views)
            .build()
            .await?;
    }

    let repo = ArticleRepository::new(db);
    let desc = ListParams::new(
        ArticleFilter::default(),
        Some("viewCount"),
        Some("desc"),
        None,
        None,
    );
    let page = repo.list(&desc).await?;
    let views: Vec<i32> = page.items.iter().map(|a| a.view_count).collect();
    assert_eq!(views, vec![50, 20, 5]);

    let asc = ListParams::new(
        ArticleFilter::default(),
        Some("viewCount"),
        Some("asc"),
        None,
        None,
    );
    let page = repo.list(&asc).await?;
    let views: Vec<i32> = page.items.iter().map(|a| a.view_count).collect();
    assert_eq!(views, vec![5, 20, 50]);

    Ok(())
}

/// Tests that an unknown sort column falls back to newest first.
///
/// Expected: Ok with the most recently created article first
#[tokio::test]
async fn unknown_sort_falls_back_to_newest() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_editor(db).await?;
    let old = ArticleFactory::new(db, author.id)
        .created_at(chrono::Utc::now() - chrono::Duration::days(3))
        .build()
        .await?;
    let new = factory::create_article(db, author.id).await?;

    let list = ListParams::new(
        ArticleFilter::default(),
        Some("password"),
        Some("asc"),
        None,
        None,
    );
    let page = ArticleRepository::new(db).list(&list).await?;

    assert_eq!(page.items[0].id, new.id);
    assert_eq!(page.items[1].id, old.id);

    Ok(())
}

/// Tests filtering by kind.
///
/// Expected: Ok with only blog posts
#[tokio::test]
async fn filters_by_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_editor(db).await?;
    ArticleFactory::new(db, author.id).kind("blog").build().await?;
    factory::create_article(db, author.id).await?;

    let page = ArticleRepository::new(db)
        .list(&params(ArticleFilter {
            kind: Some(ArticleKind::Blog),
            ..Default::default()
        }))
        .await?;

    assert_eq!(page.meta.total, 1);
    assert_eq!(page.items[0].kind, ArticleKind::Blog);

    Ok(())
}

/// Tests a page number far beyond any real collection.
///
/// The page is capped so the row offset still fits the database's integer type.
///
/// Expected: Ok with an empty page at the highest accepted page number
#[tokio::test]
async fn caps_extreme_page_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_editor(db).await?;
    factory::create_article(db, author.id).await?;

    let mut list = params(ArticleFilter::default());
    list.page = Some(u64::MAX);
    list.limit = Some(100);
    let page = ArticleRepository::new(db).list(&list).await?;

    assert!(page.items.is_empty());
    assert_eq!(page.meta.page, MAX_PAGE);
    assert_eq!(page.meta.total, 1);
    assert!(!page.meta.has_next);
    assert!(page.meta.has_prev);

    Ok(())
}

/// Tests paging through rows that tie on the sort column.
///
/// Five articles share `created_at` and `view_count`, so only the id decides their
/// order. Walking the pages two at a time must visit every article exactly once.
///
/// Expected: Ok with all ids in descending order, then ascending order
#[tokio::test]
async fn breaks_sort_ties_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_editor(db).await?;
    let created_at = chrono::Utc::now() - chrono::Duration::days(1);
    let mut seeded = Vec::new();
    for _ in 0..5 {
        let article = ArticleFactory::new(db, author.id)
            .created_at(created_at)
            .view_count(7)
            .build()
            .await?;
        seeded.push(article.id);
    }
    seeded.sort();

    let repo = ArticleRepository::new(db);
    for (order, expected) in [
        ("desc", seeded.iter().rev().copied().collect::<Vec<_>>()),
        ("asc", seeded.clone()),
    ] {
        let mut walked = Vec::new();
        for page_number in 1..=3 {
            let mut list = ListParams::new(
                ArticleFilter::default(),
                Some("viewCount"),
                Some(order),
                Some(page_number),
                Some(2),
            );
            list.filter.author_id = Some(author.id);
            let page = repo.list(&list).await?;
            walked.extend(page.items.iter().map(|a| a.id));
        }

        assert_eq!(walked, expected, "order {}", order);
    }

    Ok(())
}

/// Tests that `%` and `_` in a search term match themselves.
///
/// Expected: Ok with only the title containing "100%" matched, and nothing for "_"
#[tokio::test]
async fn search_treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_editor(db).await?;
    ArticleFactory::new(db, author.id)
        .title("Plain title")
        .build()
        .await?;
    let literacy = ArticleFactory::new(db, author.id)
        .title("Growth of 100% literacy")
        .build()
        .await?;

    let repo = ArticleRepository::new(db);
    let search = |term: &str| {
        params(ArticleFilter {
            search: Some(term.to_string()),
            ..Default::default()
        })
    };

    let page = repo.list(&search("100%")).await?;
    assert_eq!(page.meta.total, 1);
    assert_eq!(page.items[0].id, literacy.id);

    let page = repo.list(&search("%")).await?;
    assert_eq!(page.meta.total, 1);

    let page = repo.list(&search("_")).await?;
    assert_eq!(page.meta.total, 0);

    Ok(())
}
