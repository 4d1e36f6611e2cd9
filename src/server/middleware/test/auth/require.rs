use super::*;

/// Tests an anonymous session.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at a member that no longer exists.
///
/// Expected: Err(AuthError::UserNotInDatabase) with the session's id
#[tokio::test]
async fn rejects_deleted_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(404).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(404)))
    ));

    Ok(())
}

/// Tests a deactivated member.
///
/// Expected: Err(AuthError::InactiveAccount) even without permissions
#[tokio::test]
async fn rejects_inactive_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = UserFactory::new(db).role("admin").active(false).build().await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    match result {
        Err(AppError::AuthErr(AuthError::InactiveAccount(id))) => assert_eq!(id, user.id),
        other => panic!("Expected InactiveAccount error, got: {:?}", other),
    }

    Ok(())
}

/// Tests a plain member asking for editor access.
///
/// Expected: Err(AuthError::AccessDenied) naming the member's role
#[tokio::test]
async fn denies_editor_permission_to_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Editor])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(id, message))) => {
            assert_eq!(id, user.id);
            assert!(message.contains("member"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}

/// Tests an editor asking for admin access.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_admin_permission_to_editor() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let editor = factory::create_editor(db).await?;
    AuthSession::new(session).set_user_id(editor.id).await?;

    let guard = AuthGuard::new(db, session);

    assert!(guard.require(&[Permission::Editor]).await.is_ok());
    assert!(matches!(
        guard.require(&[Permission::Admin]).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that admins pass both permissions.
///
/// Expected: Ok(Member) with the admin role
#[tokio::test]
async fn admin_passes_every_permission() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::create_admin(db).await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let member = AuthGuard::new(db, session)
        .require(&[Permission::Editor, Permission::Admin])
        .await?;

    assert_eq!(member.id, admin.id);
    assert_eq!(member.role, Role::Admin);

    Ok(())
}
