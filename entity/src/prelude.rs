pub use super::article::Entity as Article;
pub use super::book_order::Entity as BookOrder;
pub use super::contact_submission::Entity as ContactSubmission;
pub use super::content_tag::Entity as ContentTag;
pub use super::gallery_item::Entity as GalleryItem;
pub use super::newsletter_subscriber::Entity as NewsletterSubscriber;
pub use super::plan::Entity as Plan;
pub use super::publication::Entity as Publication;
pub use super::subscription::Entity as Subscription;
pub use super::user::Entity as User;
