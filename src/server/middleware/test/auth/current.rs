use super::*;

/// Tests resolving the optional member on an anonymous session.
///
/// Expected: Ok(None)
#[tokio::test]
async fn anonymous_session_has_no_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    assert!(AuthGuard::new(db, session).current().await?.is_none());

    Ok(())
}

/// Tests resolving the optional member for a logged in and later deactivated member.
///
/// Expected: Ok(Some) while active, Ok(None) once deactivated
#[tokio::test]
async fn inactive_member_counts_as_anonymous() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let active = factory::create_user(db).await?;
    let inactive = UserFactory::new(db).active(false).build().await?;
    let auth_session = AuthSession::new(session);
    let guard = AuthGuard::new(db, session);

    auth_session.set_user_id(active.id).await?;
    let current = guard.current().await?;
    assert_eq!(current.map(|m| m.id), Some(active.id));

    auth_session.set_user_id(inactive.id).await?;
    assert!(guard.current().await?.is_none());

    Ok(())
}

/// Tests that logging out clears the member from the session.
///
/// Expected: Ok(None) from the session after clearing
#[tokio::test]
async fn clear_removes_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;
    assert_eq!(auth_session.get_user_id().await?, Some(user.id));

    auth_session.clear().await;

    assert_eq!(auth_session.get_user_id().await?, None);

    Ok(())
}
