//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a visit together with every row it depends on.
///
/// Creates, with default values:
/// 1. Owner
/// 2. Pet belonging to the owner
/// 3. Doctor
/// 4. Visit for the pet with the doctor
///
/// # Returns
/// - `Ok((owner, pet, doctor, visit))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_visit_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::owner::Model,
        entity::pet::Model,
        entity::doctor::Model,
        entity::visit::Model,
    ),
    DbErr,
> {
    let owner = crate::factory::owner::create_owner(db).await?;
    let pet = crate::factory::pet::create_pet(db, owner.id).await?;
    let doctor = crate::factory::doctor::create_doctor(db).await?;
    let visit = crate::factory::visit::create_visit(db, pet.id, doctor.id).await?;

    Ok((owner, pet, doctor, visit))
}
