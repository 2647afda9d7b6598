use super::*;

/// Tests listing visits.
///
/// Expected: Ok with the visit and its references
#[tokio::test]
async fn returns_all_visits() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, pet, doctor, visit) = factory::helpers::create_visit_with_dependencies(db).await?;

    let result = VisitRepository::new(db).get_all().await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, visit.id);
    assert_eq!(result[0].pet_id, pet.id);
    assert_eq!(result[0].doctor_id, doctor.id);
    assert_eq!(result[0].visit_date, visit.visit_date);
    assert_eq!(result[0].diagnosis.as_deref(), Some("Healthy"));

    Ok(())
}
