use super::*;

/// Tests changing a member's role and deactivating them.
///
/// Expected: Ok with the new role and the account inactive
#[tokio::test]
async fn updates_role_and_active_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_user(db).await?;
    let repo = MemberRepository::new(db);

    let promoted = repo
        .update(UpdateMemberParams {
            id: member.id,
            role: Some(Role::Editor),
            is_active: None,
        })
        .await?;
    assert_eq!(promoted.role, Role::Editor);
    assert!(promoted.is_active);

    let deactivated = repo
        .update(UpdateMemberParams {
            id: member.id,
            role: None,
            is_active: Some(false),
        })
        .await?;
    assert_eq!(deactivated.role, Role::Editor);
    assert!(!deactivated.is_active);

    Ok(())
}

/// Tests updating a member that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MemberRepository::new(db)
        .update(UpdateMemberParams {
            id: 42,
            role: Some(Role::Admin),
            is_active: None,
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
