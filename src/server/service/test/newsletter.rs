use crate::{
    model::newsletter::{Locale, SubscriberStatus},
    server::{
        data::newsletter::SubscriberRepository,
        error::AppError,
        model::newsletter::{InvalidRow, SubscribeParams},
        service::newsletter::{NewsletterService, Signup},
    },
};
use test_utils::{builder::TestBuilder, factory::subscriber::SubscriberFactory};

fn signup(email: &str, locale: Locale) -> SubscribeParams {
    SubscribeParams {
        email: email.to_string(),
        name: None,
        locale,
        source: Some("footer".to_string()),
    }
}

/// Tests signing up, signing up again and coming back after unsubscribing.
///
/// Expected: Created, then Err(AppError::Conflict), then Resubscribed with the new locale
#[tokio::test]
async fn signup_lifecycle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::NewsletterSubscriber)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = NewsletterService::new(db);

    let created = service.subscribe(signup("reader@example.org", Locale::En)).await?;
    assert!(matches!(created, Signup::Created(_)));

    let duplicate = service.subscribe(signup("reader@example.org", Locale::En)).await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    let left = service.unsubscribe(" Reader@Example.org ").await?;
    assert_eq!(left.status, SubscriberStatus::Unsubscribed);

    match service.subscribe(signup("reader@example.org", Locale::Am)).await? {
        Signup::Resubscribed(subscriber) => {
            assert_eq!(subscriber.status, SubscriberStatus::Subscribed);
            assert_eq!(subscriber.locale, Locale::Am);
            assert!(subscriber.unsubscribed_at.is_none());
        }
        other => panic!("Expected Resubscribed, got: {:?}", other),
    }

    Ok(())
}

/// Tests unsubscribing an address that never signed up.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unsubscribe_unknown_address() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::NewsletterSubscriber)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = NewsletterService::new(db)
        .unsubscribe("nobody@example.org")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests importing a CSV file with mixed rows.
///
/// Verifies that columns are found in any order, quoted names keep their commas,
/// duplicates inside the file and already stored addresses are skipped, and rejected
/// rows are reported with their line numbers.
///
/// Expected: Ok with two imported, two skipped and two invalid rows
#[tokio::test]
async fn imports_csv_with_skips_and_invalid_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::NewsletterSubscriber)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    SubscriberFactory::new(db)
        .email("known@example.org")
        .build()
        .await?;

    let csv = "\
Locale,Name,Email
am,\"Bekele, Abebe\",abebe@example.org
,Chaltu,CHALTU@example.org
en,Again,abebe@example.org
en,Known,known@example.org
en,Broken,not-an-email
fr,Pierre,pierre@example.org
";

    let result = NewsletterService::new(db).import_csv(csv).await?;

    assert_eq!(result.imported, 2);
    assert_eq!(result.skipped, 2);
    assert_eq!(
        result.invalid.iter().map(|r| r.line).collect::<Vec<_>>(),
        vec![6, 7]
    );
    assert!(matches!(
        result.invalid.last(),
        Some(InvalidRow { reason, .. }) if reason.contains("fr")
    ));

    let repo = SubscriberRepository::new(db);
    let abebe = repo.find_by_email("abebe@example.org").await?.unwrap();
    assert_eq!(abebe.name.as_deref(), Some("Bekele, Abebe"));
    assert_eq!(abebe.locale, Locale::Am);
    assert_eq!(abebe.source.as_deref(), Some("import"));

    let chaltu = repo.find_by_email("chaltu@example.org").await?.unwrap();
    assert_eq!(chaltu.locale, Locale::En);

    Ok(())
}

/// Tests importing a file whose header lacks an email column.
///
/// Expected: Err(AppError::BadRequest) and nothing stored
#[tokio::test]
async fn import_requires_email_column() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::NewsletterSubscriber)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = NewsletterService::new(db);

    let result = service.import_csv("name,locale\nAbebe,am\n").await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let empty = service.import_csv("").await;
    assert!(matches!(empty, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests an address stored between the lookup and the insert of a signup.
///
/// Expected: Err(AppError::Conflict) rather than a database error
#[tokio::test]
async fn duplicate_email_insert_is_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::NewsletterSubscriber)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SubscriberRepository::new(db);
    repo.create(signup("reader@example.org", Locale::En)).await?;

    let result = repo
        .create(signup("reader@example.org", Locale::Am))
        .await
        .map_err(AppError::conflict_on_unique("reader@example.org is already subscribed"));

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
