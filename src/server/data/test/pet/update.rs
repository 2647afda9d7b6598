use super::*;

/// Tests that a full replacement clears optional columns left out of the update.
///
/// Expected: Ok(1) with breed, birth date and color reset to `NULL`
#[tokio::test]
async fn clears_omitted_optional_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let repo = PetRepository::new(db);
    let pet = repo.create(create_param(owner.id)).await?;

    let affected = repo
        .update(UpdatePetParam {
            id: pet.id,
            owner_id: owner.id,
            name: "Barsik".to_string(),
            species: "Cat".to_string(),
            breed: None,
            gender: "M".to_string(),
            birth_date: None,
            color: None,
        })
        .await?;

    assert_eq!(affected, 1);

    let stored = entity::prelude::Pet::find_by_id(pet.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.breed, None);
    assert_eq!(stored.birth_date, None);
    assert_eq!(stored.color, None);

    Ok(())
}

/// Tests moving a pet to another owner.
///
/// Expected: Ok(1) with the new owner id stored
#[tokio::test]
async fn reassigns_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first_owner = factory::create_owner(db).await?;
    let second_owner = factory::create_owner(db).await?;
    let pet = factory::create_pet(db, first_owner.id).await?;

    let mut param = create_param(second_owner.id);
    param.name = pet.name.clone();
    let affected = PetRepository::new(db)
        .update(UpdatePetParam {
            id: pet.id,
            owner_id: param.owner_id,
            name: param.name,
            species: param.species,
            breed: param.breed,
            gender: param.gender,
            birth_date: param.birth_date,
            color: param.color,
        })
        .await?;

    assert_eq!(affected, 1);

    let stored = entity::prelude::Pet::find_by_id(pet.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.owner_id, second_owner.id);

    Ok(())
}
