use super::*;

/// Tests replacing every column of an existing doctor.
///
/// Expected: Ok(1) and the stored row matches the new values
#[tokio::test]
async fn updates_existing_doctor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Doctor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doctor = factory::create_doctor(db).await?;

    let affected = DoctorRepository::new(db)
        .update(UpdateDoctorParam {
            id: doctor.id,
            full_name: "Renamed".to_string(),
            specialization: "Cardiologist".to_string(),
            experience: 20,
            phone: "999".to_string(),
        })
        .await?;

    assert_eq!(affected, 1);

    let stored = entity::prelude::Doctor::find_by_id(doctor.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.full_name, "Renamed");
    assert_eq!(stored.specialization, "Cardiologist");
    assert_eq!(stored.experience, 20);
    assert_eq!(stored.phone, "999");

    Ok(())
}

/// Tests updating an id that does not exist.
///
/// Expected: Ok(0) and the table is unchanged
#[tokio::test]
async fn update_of_missing_doctor_affects_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Doctor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doctor = factory::create_doctor(db).await?;

    let affected = DoctorRepository::new(db)
        .update(UpdateDoctorParam {
            id: doctor.id + 1000,
            full_name: "Nobody".to_string(),
            specialization: "None".to_string(),
            experience: 1,
            phone: "0".to_string(),
        })
        .await?;

    assert_eq!(affected, 0);

    let stored = entity::prelude::Doctor::find_by_id(doctor.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored, doctor);

    Ok(())
}
