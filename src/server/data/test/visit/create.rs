use super::*;

/// Tests inserting a visit without a date.
///
/// Expected: Ok with the visit dated today
#[tokio::test]
async fn defaults_visit_date_to_today() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let pet = factory::create_pet(db, owner.id).await?;
    let doctor = factory::create_doctor(db).await?;

    let before = Local::now().date_naive();
    let created = VisitRepository::new(db)
        .create(CreateVisitParam {
            pet_id: pet.id,
            doctor_id: doctor.id,
            visit_date: None,
            diagnosis: None,
            recommendations: None,
        })
        .await?;
    let after = Local::now().date_naive();

    assert!(created.visit_date >= before && created.visit_date <= after);
    assert_eq!(created.diagnosis, None);

    Ok(())
}

/// Tests inserting a visit with an explicit date.
///
/// Expected: Ok with the supplied date stored
#[tokio::test]
async fn keeps_supplied_visit_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let pet = factory::create_pet(db, owner.id).await?;
    let doctor = factory::create_doctor(db).await?;
    let date = NaiveDate::from_ymd_opt(2023, 11, 2).unwrap();

    let created = VisitRepository::new(db)
        .create(CreateVisitParam {
            pet_id: pet.id,
            doctor_id: doctor.id,
            visit_date: Some(date),
            diagnosis: Some("Otitis".to_string()),
            recommendations: Some("Drops twice a day".to_string()),
        })
        .await?;

    let stored = entity::prelude::Visit::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.visit_date, date);
    assert_eq!(stored.recommendations.as_deref(), Some("Drops twice a day"));

    Ok(())
}

/// Tests inserting a visit for a doctor that does not exist.
///
/// Expected: Err from the foreign key and no row inserted
#[tokio::test]
async fn fails_for_unknown_doctor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let pet = factory::create_pet(db, owner.id).await?;

    let result = VisitRepository::new(db)
        .create(CreateVisitParam {
            pet_id: pet.id,
            doctor_id: 404,
            visit_date: None,
            diagnosis: None,
            recommendations: None,
        })
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Visit::find().count(db).await?, 0);

    Ok(())
}
