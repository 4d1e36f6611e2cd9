use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        article, auth, contact, gallery, member, newsletter, order, plan, publication, stats,
        subscription,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Folio API", description = "Content and commerce back office"),
    tags(
        (name = "auth", description = "Session of the logged in member"),
        (name = "article", description = "Articles and blog posts"),
        (name = "publication", description = "Books, papers, reports and speeches"),
        (name = "gallery", description = "Photos and videos"),
        (name = "contact", description = "Contact form submissions"),
        (name = "newsletter", description = "Newsletter subscribers and CSV import"),
        (name = "plan", description = "Subscription plans"),
        (name = "subscription", description = "Member subscriptions"),
        (name = "order", description = "Book orders"),
        (name = "member", description = "Member and role administration"),
        (name = "stats", description = "Dashboard figures"),
    )
)]
struct ApiDoc;

/// Builds the API router with Swagger UI served at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        // Session
        .routes(routes!(auth::get_user))
        .routes(routes!(auth::logout))
        // Articles
        .routes(routes!(article::get_published_articles))
        .routes(routes!(article::get_published_article_by_slug))
        .routes(routes!(article::like_article))
        .routes(routes!(article::get_articles, article::create_article))
        .routes(routes!(
            article::get_article,
            article::update_article,
            article::delete_article
        ))
        .routes(routes!(article::update_article_status))
        // Publications
        .routes(routes!(publication::get_published_publications))
        .routes(routes!(publication::get_published_publication_by_slug))
        .routes(routes!(publication::download_publication))
        .routes(routes!(
            publication::get_publications,
            publication::create_publication
        ))
        .routes(routes!(
            publication::get_publication,
            publication::update_publication,
            publication::delete_publication
        ))
        .routes(routes!(publication::update_publication_status))
        // Gallery
        .routes(routes!(gallery::get_published_gallery))
        .routes(routes!(gallery::get_published_gallery_item))
        .routes(routes!(gallery::get_gallery_items, gallery::create_gallery_item))
        .routes(routes!(
            gallery::get_gallery_item,
            gallery::update_gallery_item,
            gallery::delete_gallery_item
        ))
        .routes(routes!(gallery::update_gallery_item_status))
        // Contact form
        .routes(routes!(contact::submit_contact))
        .routes(routes!(contact::get_contacts))
        .routes(routes!(contact::get_contact, contact::delete_contact))
        .routes(routes!(contact::update_contact_status))
        .routes(routes!(contact::reply_contact))
        // Newsletter
        .routes(routes!(newsletter::subscribe))
        .routes(routes!(newsletter::unsubscribe))
        .routes(routes!(newsletter::get_subscribers))
        .routes(routes!(newsletter::delete_subscriber))
        .routes(routes!(newsletter::import_subscribers))
        // Plans
        .routes(routes!(plan::get_active_plans))
        .routes(routes!(plan::get_plans, plan::create_plan))
        .routes(routes!(plan::get_plan, plan::update_plan, plan::delete_plan))
        // Subscriptions
        .routes(routes!(subscription::create_subscription))
        .routes(routes!(subscription::get_my_subscriptions))
        .routes(routes!(subscription::cancel_subscription))
        .routes(routes!(subscription::get_subscriptions))
        .routes(routes!(subscription::update_subscription_status))
        // Orders
        .routes(routes!(order::place_order))
        .routes(routes!(order::get_my_orders))
        .routes(routes!(order::get_orders))
        .routes(routes!(order::get_order))
        .routes(routes!(order::update_order_status))
        // Members
        .routes(routes!(member::get_members))
        .routes(routes!(member::get_member, member::update_member))
        .routes(routes!(member::get_roles))
        // Dashboard
        .routes(routes!(stats::get_dashboard_stats))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
