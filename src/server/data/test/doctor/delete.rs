use super::*;

/// Tests deleting a doctor by id.
///
/// Expected: Ok(1) and the row no longer exists
#[tokio::test]
async fn deletes_doctor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Doctor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doctor = factory::create_doctor(db).await?;

    let affected = DoctorRepository::new(db).delete(doctor.id).await?;

    assert_eq!(affected, 1);
    assert!(entity::prelude::Doctor::find_by_id(doctor.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting an id that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn delete_of_missing_doctor_affects_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Doctor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let affected = DoctorRepository::new(db).delete(42).await?;

    assert_eq!(affected, 0);

    Ok(())
}

/// Tests that a doctor referenced by a visit cannot be deleted.
///
/// Expected: Err from the foreign key and the doctor is kept
#[tokio::test]
async fn fails_to_delete_doctor_with_visits() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, doctor, _) = factory::helpers::create_visit_with_dependencies(db).await?;

    let result = DoctorRepository::new(db).delete(doctor.id).await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Doctor::find().count(db).await?, 1);

    Ok(())
}
