use super::*;

/// Tests batch loading association sets for several posts.
///
/// Verifies each post gets its own sets and a post without rows gets empty sets.
///
/// Expected: Ok with one entry per requested id
#[tokio::test]
async fn loads_sets_for_many_posts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let car_a = factory::create_car(db, "Car A").await?;
    let car_b = factory::create_car(db, "Car B").await?;
    factory::create_language(db, "de", "German").await?;
    let first = PostFactory::new(db, owner.id)
        .car_ids([car_b.id, car_a.id])
        .language_codes(["de"])
        .build()
        .await?;
    let second = PostFactory::new(db, owner.id)
        .categories(["oval"])
        .build()
        .await?;

    let sets = PostAssociationRepository::new(db)
        .get_for_posts(&[first.id, second.id, 999])
        .await?;

    assert_eq!(sets.len(), 3);
    assert_eq!(sets[&first.id].car_ids, vec![car_a.id, car_b.id]);
    assert_eq!(sets[&first.id].language_codes, vec!["de".to_string()]);
    assert_eq!(sets[&second.id].categories, vec![PostCategory::Oval]);
    assert!(sets[&second.id].car_ids.is_empty());
    assert_eq!(sets[&999], PostAssociations::default());

    Ok(())
}
