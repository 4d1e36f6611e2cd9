use super::*;

/// Tests filtering submissions by status and searching the message body.
///
/// Expected: Ok with the single new submission mentioning the term
#[tokio::test]
async fn filters_new_submissions_by_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ContactSubmission)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let wanted = ContactFactory::new(db)
        .message("Requesting an interview")
        .build()
        .await?;
    ContactFactory::new(db)
        .message("Another interview request")
        .status("read")
        .build()
        .await?;
    ContactFactory::new(db).message("Book order").build().await?;

    let page = ContactRepository::new(db)
        .list(&ListParams::new(
            ContactFilter {
                status: Some(ContactStatus::New),
                search: Some("interview".to_string()),
            },
            None,
            None,
            None,
            None,
        ))
        .await?;

    assert_eq!(page.meta.total, 1);
    assert_eq!(page.items[0].id, wanted.id);

    Ok(())
}

/// Tests storing a public submission.
///
/// Expected: Ok with the submission in status new and no reply
#[tokio::test]
async fn creates_new_submission() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ContactSubmission)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let submission = ContactRepository::new(db)
        .create(CreateContactParams {
            name: "Hana".to_string(),
            email: "hana@example.com".to_string(),
            phone: None,
            subject: Some("Hello".to_string()),
            message: "Just saying hi".to_string(),
        })
        .await?;

    assert_eq!(submission.status, ContactStatus::New);
    assert!(submission.reply.is_none());
    assert!(submission.replied_at.is_none());

    Ok(())
}
