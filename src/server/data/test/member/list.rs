use super::*;

/// Tests filtering members by role and activation.
///
/// Expected: Ok with only the active editors
#[tokio::test]
async fn filters_by_role_and_active_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let editor = factory::create_editor(db).await?;
    UserFactory::new(db).role("editor").active(false).build().await?;
    factory::create_admin(db).await?;
    factory::create_user(db).await?;

    let page = MemberRepository::new(db)
        .list(&ListParams::new(
            MemberFilter {
                role: Some(Role::Editor),
                is_active: Some(true),
                ..Default::default()
            },
            None,
            None,
            None,
            None,
        ))
        .await?;

    assert_eq!(page.meta.total, 1);
    assert_eq!(page.items[0].id, editor.id);
    assert_eq!(page.items[0].role, Role::Editor);

    Ok(())
}

/// Tests searching members by name or email and sorting by name.
///
/// Expected: Ok with both Abebe accounts, ordered by name
#[tokio::test]
async fn searches_name_and_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let by_name = UserFactory::new(db).name("Abebe Bikila").build().await?;
    let by_email = UserFactory::new(db)
        .name("A. B.")
        .email("abebe@example.com")
        .build()
        .await?;
    UserFactory::new(db).name("Tirunesh Dibaba").build().await?;

    let page = MemberRepository::new(db)
        .list(&ListParams::new(
            MemberFilter {
                search: Some("ABEBE".to_string()),
                ..Default::default()
            },
            Some("name"),
            Some("asc"),
            None,
            None,
        ))
        .await?;

    let ids: Vec<i32> = page.items.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![by_email.id, by_name.id]);

    Ok(())
}
