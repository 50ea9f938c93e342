use super::*;

/// Tests the default public search.
///
/// Verifies private posts and posts that are not open are excluded when neither an owner
/// nor a status filter is given.
///
/// Expected: only open public posts, newest first
#[tokio::test]
async fn default_search_returns_open_public_posts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let older = factory::create_post(db, owner.id).await?;
    PostFactory::new(db, owner.id).is_public(false).build().await?;
    PostFactory::new(db, owner.id).status("closed").build().await?;
    let newer = factory::create_post(db, owner.id).await?;

    let (ids, total) = search_ids(db, PostSearchParams::default()).await?;

    assert_eq!(ids, vec![newer.id, older.id]);
    assert_eq!(total, 2);

    Ok(())
}

/// Tests an owner scoped search.
///
/// Verifies the owner sees their private and non-open posts and never someone else's.
///
/// Expected: all three of the owner's posts
#[tokio::test]
async fn owner_search_sees_private_posts_of_any_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let open = factory::create_post(db, owner.id).await?;
    let private = PostFactory::new(db, owner.id).is_public(false).build().await?;
    let cancelled = PostFactory::new(db, owner.id)
        .status("cancelled")
        .build()
        .await?;
    factory::create_post(db, other.id).await?;

    let (mut ids, total) = search_ids(
        db,
        PostSearchParams {
            user_id: Some(owner.id),
            ..Default::default()
        },
    )
    .await?;
    ids.sort();

    assert_eq!(ids, vec![open.id, private.id, cancelled.id]);
    assert_eq!(total, 3);

    Ok(())
}

/// Tests category and iRating filters against a mixed set of posts.
///
/// Five open public oval posts, three of them requiring at least 2000 iRating, plus two
/// closed oval posts and one sports car post.
///
/// Expected: the three high iRating open oval posts, total 3
#[tokio::test]
async fn filters_by_category_and_min_irating() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let mut expected = Vec::new();
    for irating in [1500, 2000, 2500, 1000, 3000] {
        let post = PostFactory::new(db, owner.id)
            .categories(["oval"])
            .min_irating(irating)
            .build()
            .await?;
        if irating >= 2000 {
            expected.push(post.id);
        }
    }
    for _ in 0..2 {
        PostFactory::new(db, owner.id)
            .categories(["oval"])
            .min_irating(2500)
            .status("closed")
            .build()
            .await?;
    }
    PostFactory::new(db, owner.id).min_irating(4000).build().await?;

    let (mut ids, total) = search_ids(
        db,
        PostSearchParams {
            categories: vec![PostCategory::Oval],
            min_irating: Some(2000),
            ..Default::default()
        },
    )
    .await?;
    ids.sort();

    assert_eq!(ids, expected);
    assert_eq!(total, 3);

    Ok(())
}

/// Tests the page window.
///
/// Expected: limit 2 offset 1 over five matches returns the 2nd and 3rd, total 5
#[tokio::test]
async fn applies_limit_and_offset_to_items_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let mut created = Vec::new();
    for _ in 0..5 {
        created.push(factory::create_post(db, owner.id).await?.id);
    }
    // Default order is newest first.
    created.reverse();

    let (ids, total) = search_ids(
        db,
        PostSearchParams {
            limit: 2,
            offset: 1,
            ..Default::default()
        },
    )
    .await?;

    assert_eq!(ids, vec![created[1], created[2]]);
    assert_eq!(total, 5);

    let (ids, total) = search_ids(
        db,
        PostSearchParams {
            limit: 10,
            offset: 4,
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(ids, vec![created[4]]);
    assert_eq!(total, 5);

    let (ids, total) = search_ids(
        db,
        PostSearchParams {
            offset: 5,
            ..Default::default()
        },
    )
    .await?;
    assert!(ids.is_empty());
    assert_eq!(total, 5);

    Ok(())
}

/// Tests that posts matching several requested cars appear once.
///
/// Verifies both the page and the total are computed over distinct posts.
///
/// Expected: two posts, total 2, no duplicate ids
#[tokio::test]
async fn car_filter_does_not_duplicate_posts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let car_a = factory::create_car(db, "Car A").await?;
    let car_b = factory::create_car(db, "Car B").await?;
    let car_c = factory::create_car(db, "Car C").await?;
    let both = PostFactory::new(db, owner.id)
        .car_ids([car_a.id, car_b.id])
        .build()
        .await?;
    let one = PostFactory::new(db, owner.id)
        .car_ids([car_b.id, car_c.id])
        .build()
        .await?;
    PostFactory::new(db, owner.id)
        .car_ids([car_c.id])
        .build()
        .await?;

    let (ids, total) = search_ids(
        db,
        PostSearchParams {
            car_ids: vec![car_a.id, car_b.id],
            ..Default::default()
        },
    )
    .await?;

    assert_eq!(ids, vec![one.id, both.id]);
    assert_eq!(total, 2);

    Ok(())
}

/// Tests that the car filter also pages over distinct posts.
///
/// Expected: limit 1 returns one post per page while total stays 2
#[tokio::test]
async fn car_filter_pages_over_distinct_posts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let car_a = factory::create_car(db, "Car A").await?;
    let car_b = factory::create_car(db, "Car B").await?;
    let first = PostFactory::new(db, owner.id)
        .car_ids([car_a.id, car_b.id])
        .build()
        .await?;
    let second = PostFactory::new(db, owner.id)
        .car_ids([car_a.id, car_b.id])
        .build()
        .await?;

    let mut seen = Vec::new();
    for offset in 0..2 {
        let (ids, total) = search_ids(
            db,
            PostSearchParams {
                car_ids: vec![car_a.id, car_b.id],
                limit: 1,
                offset,
                ..Default::default()
            },
        )
        .await?;
        assert_eq!(total, 2);
        seen.extend(ids);
    }

    assert_eq!(seen, vec![second.id, first.id]);

    Ok(())
}

/// Tests minimum license expansion against stored posts.
///
/// Expected: min C returns the same posts as the exact set C, B, A, P
#[tokio::test]
async fn min_license_level_matches_exact_set() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    for level in ["R", "D", "C", "B", "A", "P"] {
        PostFactory::new(db, owner.id)
            .min_license_level(level)
            .build()
            .await?;
    }

    let (by_min, min_total) = search_ids(
        db,
        PostSearchParams {
            min_license_level: Some(LicenseLevel::C),
            ..Default::default()
        },
    )
    .await?;
    let (by_set, set_total) = search_ids(
        db,
        PostSearchParams {
            license_levels: vec![
                LicenseLevel::C,
                LicenseLevel::B,
                LicenseLevel::A,
                LicenseLevel::P,
            ],
            ..Default::default()
        },
    )
    .await?;

    assert_eq!(by_min, by_set);
    assert_eq!(min_total, 4);
    assert_eq!(set_total, 4);

    Ok(())
}

/// Tests multi-valued set filters combined across fields.
///
/// Values within a field are ORed and fields are ANDed.
///
/// Expected: only the post matching both the series and the language filter
#[tokio::test]
async fn combines_set_filters_with_and() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let imsa = factory::create_series(db, "IMSA").await?;
    let gt_endurance = factory::create_series(db, "GT Endurance").await?;
    factory::create_language(db, "en", "English").await?;
    factory::create_language(db, "de", "German").await?;
    let matching = PostFactory::new(db, owner.id)
        .series_ids([gt_endurance.id])
        .language_codes(["de"])
        .build()
        .await?;
    PostFactory::new(db, owner.id)
        .series_ids([imsa.id])
        .build()
        .await?;
    PostFactory::new(db, owner.id)
        .series_ids([imsa.id])
        .language_codes(["en"])
        .build()
        .await?;
    PostFactory::new(db, owner.id)
        .language_codes(["de"])
        .build()
        .await?;

    let (ids, total) = search_ids(
        db,
        PostSearchParams {
            series_ids: vec![imsa.id, gt_endurance.id],
            language_codes: vec!["de".to_string()],
            ..Default::default()
        },
    )
    .await?;

    assert_eq!(ids, vec![matching.id]);
    assert_eq!(total, 1);

    Ok(())
}

/// Tests text search, event and date range filters together with sorting.
///
/// Expected: posts with a matching event window, sorted by event start ascending
#[tokio::test]
async fn filters_by_text_event_and_date_range() -> Result<(), DbErr> {
    use chrono::{TimeZone, Utc};

    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let event = factory::create_event(db, "Daytona 24").await?;
    let jan_10 = Utc.with_ymd_and_hms(2027, 1, 10, 12, 0, 0).unwrap();
    let jan_20 = Utc.with_ymd_and_hms(2027, 1, 20, 12, 0, 0).unwrap();
    let feb_01 = Utc.with_ymd_and_hms(2027, 2, 1, 12, 0, 0).unwrap();

    let late = PostFactory::new(db, owner.id)
        .title("Daytona endurance team")
        .event_id(event.id)
        .event_start_at(jan_20)
        .build()
        .await?;
    let early = PostFactory::new(db, owner.id)
        .body("Need a third endurance driver")
        .event_id(event.id)
        .event_start_at(jan_10)
        .build()
        .await?;
    PostFactory::new(db, owner.id)
        .title("Endurance crew outside the window")
        .event_id(event.id)
        .event_start_at(feb_01)
        .build()
        .await?;
    PostFactory::new(db, owner.id)
        .title("endurance without event")
        .event_start_at(jan_10)
        .build()
        .await?;

    let (ids, total) = search_ids(
        db,
        PostSearchParams {
            search: Some("endurance".to_string()),
            has_event: Some(true),
            event_start_from: Some(jan_10),
            event_start_to: Some(jan_20),
            sort_by: SortField::EventStartAt,
            sort_direction: SortDirection::Asc,
            ..Default::default()
        },
    )
    .await?;

    assert_eq!(ids, vec![early.id, late.id]);
    assert_eq!(total, 2);

    Ok(())
}

/// Tests that `%` and `_` in the search text match only themselves.
///
/// Expected: only the posts containing the literal text
#[tokio::test]
async fn search_treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let literal = PostFactory::new(db, owner.id)
        .title("Giving 100% every stint")
        .build()
        .await?;
    PostFactory::new(db, owner.id)
        .title("100 laps effort")
        .build()
        .await?;
    let underscore = PostFactory::new(db, owner.id)
        .body("Running the GT_3 split")
        .build()
        .await?;
    PostFactory::new(db, owner.id)
        .body("Running the GT-3 split")
        .build()
        .await?;

    let (ids, total) = search_ids(
        db,
        PostSearchParams {
            search: Some("100%".to_string()),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(ids, vec![literal.id]);
    assert_eq!(total, 1);

    let (ids, total) = search_ids(
        db,
        PostSearchParams {
            search: Some("GT_3".to_string()),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(ids, vec![underscore.id]);
    assert_eq!(total, 1);

    Ok(())
}

/// Tests the id tie-break for equal sort values.
///
/// Expected: posts with equal iRating ordered by id ascending regardless of direction
#[tokio::test]
async fn breaks_ties_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let a = PostFactory::new(db, owner.id).min_irating(2000).build().await?;
    let b = PostFactory::new(db, owner.id).min_irating(2000).build().await?;
    let top = PostFactory::new(db, owner.id).min_irating(3000).build().await?;

    let (ids, _) = search_ids(
        db,
        PostSearchParams {
            sort_by: SortField::MinIrating,
            ..Default::default()
        },
    )
    .await?;

    assert_eq!(ids, vec![top.id, a.id, b.id]);

    Ok(())
}

/// Tests that the total stays the same for any page window.
///
/// Expected: identical totals for every limit and offset combination
#[tokio::test]
async fn total_is_independent_of_window() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    for _ in 0..4 {
        factory::create_post(db, owner.id).await?;
    }

    for (limit, offset) in [(1, 0), (2, 3), (100, 0), (3, 10)] {
        let (ids, total) = search_ids(
            db,
            PostSearchParams {
                limit,
                offset,
                statuses: vec![PostStatus::Open],
                ..Default::default()
            },
        )
        .await?;

        assert_eq!(total, 4);
        let expected = if offset < total {
            limit.min(total - offset)
        } else {
            0
        };
        assert_eq!(ids.len() as u64, expected);
    }

    Ok(())
}
