use super::*;

/// Tests listing doctors from an empty table.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_list_without_doctors() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Doctor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = DoctorRepository::new(db).get_all().await?;

    assert!(result.is_empty());

    Ok(())
}

/// Tests that every stored doctor is returned with all columns.
///
/// Expected: Ok with both doctors in insertion order
#[tokio::test]
async fn returns_all_doctors() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Doctor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::doctor::DoctorFactory::new(db)
        .full_name("Aigerim Sadykova")
        .specialization("Surgeon")
        .experience(12)
        .build()
        .await?;
    let second = factory::create_doctor(db).await?;

    let result = DoctorRepository::new(db).get_all().await?;

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].id, first.id);
    assert_eq!(result[0].full_name, "Aigerim Sadykova");
    assert_eq!(result[0].specialization, "Surgeon");
    assert_eq!(result[0].experience, 12);
    assert_eq!(result[1].id, second.id);

    Ok(())
}
