use super::*;

/// Tests recording a reply with the status change.
///
/// Expected: Ok with reply text, replier and reply time stored
#[tokio::test]
async fn stores_reply_with_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::ContactSubmission)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let submission = factory::create_contact(db).await?;

    let replied = ContactRepository::new(db)
        .set_status(
            submission.id,
            ContactStatus::Replied,
            Some(ContactReply {
                reply: "Thank you".to_string(),
                replied_by: admin.id,
                replied_at: chrono::Utc::now(),
            }),
        )
        .await?;

    assert_eq!(replied.status, ContactStatus::Replied);
    assert_eq!(replied.reply.as_deref(), Some("Thank you"));
    assert_eq!(replied.replied_by, Some(admin.id));
    assert!(replied.replied_at.is_some());

    Ok(())
}

/// Tests deleting a submission twice.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn delete_reports_whether_a_row_was_removed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ContactSubmission)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let submission = factory::create_contact(db).await?;
    let repo = ContactRepository::new(db);

    assert!(repo.delete(submission.id).await?);
    assert!(!repo.delete(submission.id).await?);

    Ok(())
}
