use super::*;

/// Tests changing a service's name and price.
///
/// Expected: Ok(1) with the new values stored
#[tokio::test]
async fn updates_service() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Service)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = factory::create_service(db).await?;

    let affected = ServiceRepository::new(db)
        .update(UpdateServiceParam {
            id: service.id,
            service_name: "X-ray".to_string(),
            cost: 12000.0,
        })
        .await?;

    assert_eq!(affected, 1);

    let stored = entity::prelude::Service::find_by_id(service.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.service_name, "X-ray");
    assert_eq!(stored.cost, 12000.0);

    Ok(())
}

/// Tests updating a service id that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn update_of_missing_service_affects_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Service)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let affected = ServiceRepository::new(db)
        .update(UpdateServiceParam {
            id: 7,
            service_name: "Ghost".to_string(),
            cost: 1.0,
        })
        .await?;

    assert_eq!(affected, 0);

    Ok(())
}
