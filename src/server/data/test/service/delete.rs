use super::*;

/// Tests deleting a service.
///
/// Expected: Ok(1) and a second delete affects nothing
#[tokio::test]
async fn deletes_service_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Service)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = factory::create_service(db).await?;
    let repo = ServiceRepository::new(db);

    assert_eq!(repo.delete(service.id).await?, 1);
    assert_eq!(repo.delete(service.id).await?, 0);

    Ok(())
}
