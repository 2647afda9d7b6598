use super::*;

/// Tests deleting a pet without visits.
///
/// Expected: Ok(1)
#[tokio::test]
async fn deletes_pet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let pet = factory::create_pet(db, owner.id).await?;

    let affected = PetRepository::new(db).delete(pet.id).await?;

    assert_eq!(affected, 1);
    assert_eq!(entity::prelude::Pet::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a pet referenced by a visit cannot be deleted.
///
/// Expected: Err from the foreign key and the pet is kept
#[tokio::test]
async fn fails_to_delete_pet_with_visits() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, pet, _, _) = factory::helpers::create_visit_with_dependencies(db).await?;

    let result = PetRepository::new(db).delete(pet.id).await;

    assert!(result.is_err());
    assert!(entity::prelude::Pet::find_by_id(pet.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
