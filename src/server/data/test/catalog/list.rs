use super::*;

/// Tests that catalog lists are ordered by name.
///
/// Expected: Ok with the entries sorted alphabetically, independent of insert order
#[tokio::test]
async fn lists_catalog_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_track(db, "Spa-Francorchamps").await?;
    factory::create_track(db, "Daytona").await?;
    factory::create_track(db, "Monza").await?;
    factory::create_car(db, "Porsche 911 GT3 R").await?;

    let repo = CatalogRepository::new(db);
    let tracks = repo.list(CatalogKind::Track).await?;
    let names: Vec<&str> = tracks.iter().map(|t| t.name.as_str()).collect();

    assert_eq!(names, vec!["Daytona", "Monza", "Spa-Francorchamps"]);
    assert_eq!(repo.list(CatalogKind::Car).await?.len(), 1);
    assert!(repo.list(CatalogKind::Series).await?.is_empty());

    Ok(())
}

/// Tests listing languages.
///
/// Expected: Ok with languages sorted by name and carrying their codes
#[tokio::test]
async fn lists_languages_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_language(db, "de", "German").await?;
    factory::create_language(db, "en", "English").await?;

    let languages = CatalogRepository::new(db).languages().await?;

    assert_eq!(languages.len(), 2);
    assert_eq!(languages[0].code, "en");
    assert_eq!(languages[1].code, "de");

    Ok(())
}
