use super::*;

/// Tests batch lookup with a mix of known and unknown ids.
///
/// Expected: Ok with only the known entries, unknown ids skipped
#[tokio::test]
async fn skips_unknown_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let gt3 = factory::create_car_class(db, "GT3").await?;
    let gt4 = factory::create_car_class(db, "GT4").await?;

    let repo = CatalogRepository::new(db);
    let mut found = repo
        .find_by_ids(CatalogKind::CarClass, &[gt4.id, 999, gt3.id])
        .await?;
    found.sort_by_key(|c| c.id);

    assert_eq!(found.len(), 2);
    assert_eq!(found[0].id, gt3.id);
    assert_eq!(found[1].name, "GT4");

    Ok(())
}

/// Tests batch lookup with no ids.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn empty_ids_return_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_event(db, "Daytona 24").await?;

    let repo = CatalogRepository::new(db);

    assert!(repo.find_by_ids(CatalogKind::Event, &[]).await?.is_empty());
    assert!(repo.languages_by_codes(&[]).await?.is_empty());

    Ok(())
}

/// Tests language lookup by code.
///
/// Expected: Ok with the matching language only
#[tokio::test]
async fn finds_languages_by_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_language(db, "en", "English").await?;
    factory::create_language(db, "fr", "French").await?;

    let found = CatalogRepository::new(db)
        .languages_by_codes(&["fr".to_string(), "xx".to_string()])
        .await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "French");

    Ok(())
}
