use super::*;

/// Tests deleting a visit, which frees its pet for deletion.
///
/// Expected: Ok(1) and no visits remain
#[tokio::test]
async fn deletes_visit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, pet, _, visit) = factory::helpers::create_visit_with_dependencies(db).await?;

    let affected = VisitRepository::new(db).delete(visit.id).await?;

    assert_eq!(affected, 1);
    assert_eq!(entity::prelude::Visit::find().count(db).await?, 0);
    assert_eq!(
        crate::server::data::pet::PetRepository::new(db)
            .delete(pet.id)
            .await?,
        1
    );

    Ok(())
}
