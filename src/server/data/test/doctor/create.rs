use super::*;

/// Tests inserting a doctor.
///
/// Verifies that the row is persisted and the id is assigned by the database.
///
/// Expected: Ok with one row in the table
#[tokio::test]
async fn creates_doctor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Doctor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = DoctorRepository::new(db)
        .create(CreateDoctorParam {
            full_name: "Nurlan Abenov".to_string(),
            specialization: "Dentist".to_string(),
            experience: 0,
            phone: "+7 777 555 0101".to_string(),
        })
        .await?;

    let stored = entity::prelude::Doctor::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.full_name, "Nurlan Abenov");
    assert_eq!(stored.experience, 0);
    assert_eq!(entity::prelude::Doctor::find().count(db).await?, 1);

    Ok(())
}

/// Tests that consecutive inserts receive distinct ids.
///
/// Expected: Ok with two different ids
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Doctor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = DoctorRepository::new(db);

    let param = CreateDoctorParam {
        full_name: "Same Name".to_string(),
        specialization: "Therapist".to_string(),
        experience: 2,
        phone: "1".to_string(),
    };
    let first = repo.create(param.clone()).await?;
    let second = repo.create(param).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
