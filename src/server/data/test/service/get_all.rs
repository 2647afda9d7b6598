use super::*;

/// Tests listing the price list.
///
/// Expected: Ok with both services and their costs
#[tokio::test]
async fn returns_all_services() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Service)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::service::ServiceFactory::new(db)
        .service_name("Vaccination")
        .cost(7500.5)
        .build()
        .await?;
    factory::create_service(db).await?;

    let result = ServiceRepository::new(db).get_all().await?;

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].service_name, "Vaccination");
    assert_eq!(result[0].cost, 7500.5);
    assert_eq!(result[1].cost, 5000.0);

    Ok(())
}
