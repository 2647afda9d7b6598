use super::*;

/// Tests inserting a free service.
///
/// Expected: Ok with a zero cost stored
#[tokio::test]
async fn creates_service_with_zero_cost() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Service)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = ServiceRepository::new(db)
        .create(CreateServiceParam {
            service_name: "Consultation".to_string(),
            cost: 0.0,
        })
        .await?;

    let stored = entity::prelude::Service::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.service_name, "Consultation");
    assert_eq!(stored.cost, 0.0);

    Ok(())
}
