use super::*;

/// Tests inserting a pet with every optional column set.
///
/// Expected: Ok and the stored row carries the same values
#[tokio::test]
async fn creates_pet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;

    let created = PetRepository::new(db).create(create_param(owner.id)).await?;

    let stored = entity::prelude::Pet::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.owner_id, owner.id);
    assert_eq!(stored.name, "Barsik");
    assert_eq!(stored.breed.as_deref(), Some("Siberian"));
    assert_eq!(stored.birth_date, NaiveDate::from_ymd_opt(2020, 5, 17));

    Ok(())
}

/// Tests inserting a pet whose owner does not exist.
///
/// Expected: Err from the foreign key and no row inserted
#[tokio::test]
async fn fails_for_unknown_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PetRepository::new(db).create(create_param(999)).await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Pet::find().count(db).await?, 0);

    Ok(())
}
