use super::*;

/// Tests updating a visit without a date.
///
/// Expected: Ok(1) with the stored date untouched and text columns replaced
#[tokio::test]
async fn keeps_date_when_omitted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, pet, doctor, visit) = factory::helpers::create_visit_with_dependencies(db).await?;

    let affected = VisitRepository::new(db)
        .update(UpdateVisitParam {
            id: visit.id,
            pet_id: pet.id,
            doctor_id: doctor.id,
            visit_date: None,
            diagnosis: None,
            recommendations: Some("Rest".to_string()),
        })
        .await?;

    assert_eq!(affected, 1);

    let stored = entity::prelude::Visit::find_by_id(visit.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.visit_date, visit.visit_date);
    assert_eq!(stored.diagnosis, None);
    assert_eq!(stored.recommendations.as_deref(), Some("Rest"));

    Ok(())
}

/// Tests updating a visit with a new date.
///
/// Expected: Ok(1) with the new date stored
#[tokio::test]
async fn overwrites_supplied_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, pet, doctor, visit) = factory::helpers::create_visit_with_dependencies(db).await?;
    let date = NaiveDate::from_ymd_opt(2025, 3, 8).unwrap();

    let affected = VisitRepository::new(db)
        .update(UpdateVisitParam {
            id: visit.id,
            pet_id: pet.id,
            doctor_id: doctor.id,
            visit_date: Some(date),
            diagnosis: visit.diagnosis.clone(),
            recommendations: None,
        })
        .await?;

    assert_eq!(affected, 1);

    let stored = entity::prelude::Visit::find_by_id(visit.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.visit_date, date);

    Ok(())
}
