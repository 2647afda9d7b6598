use super::*;

/// Tests listing pets with nullable columns left empty.
///
/// Expected: Ok with the pet and `None` for breed, birth date and color
#[tokio::test]
async fn returns_pets_with_null_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let pet = factory::create_pet(db, owner.id).await?;

    let result = PetRepository::new(db).get_all().await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, pet.id);
    assert_eq!(result[0].owner_id, owner.id);
    assert_eq!(result[0].breed, None);
    assert_eq!(result[0].birth_date, None);
    assert_eq!(result[0].color, None);

    Ok(())
}
