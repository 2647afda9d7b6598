use super::*;

/// Tests listing owners, including nullable contact columns.
///
/// Expected: Ok with both owners and their optional columns preserved
#[tokio::test]
async fn returns_all_owners() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Owner)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let with_contacts = factory::owner::OwnerFactory::new(db)
        .full_name("Dana Omarova")
        .email(Some("dana@example.kz".to_string()))
        .build()
        .await?;
    let without_contacts = factory::owner::OwnerFactory::new(db)
        .phone(None)
        .email(None)
        .address(None)
        .build()
        .await?;

    let result = OwnerRepository::new(db).get_all().await?;

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].id, with_contacts.id);
    assert_eq!(result[0].full_name, "Dana Omarova");
    assert_eq!(result[0].email.as_deref(), Some("dana@example.kz"));
    assert_eq!(result[1].id, without_contacts.id);
    assert_eq!(result[1].phone, None);
    assert_eq!(result[1].address, None);

    Ok(())
}

/// Tests listing owners from an empty table.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_list_without_owners() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Owner)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = OwnerRepository::new(db).get_all().await?;

    assert!(result.is_empty());

    Ok(())
}
