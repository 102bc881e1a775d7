//! HTTP handlers and route configuration.

mod health;
mod posts;
mod users;


use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Post routes
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list_posts))
                    .route("", web::post().to(posts::create_post))
                    .route("/dashboard-stats", web::get().to(posts::dashboard_stats))
                    .route("/analytics", web::get().to(posts::analytics))
                    .route("/{id}", web::get().to(posts::get_post))
                    .route("/{id}", web::put().to(posts::update_post))
                    .route("/{id}", web::delete().to(posts::delete_post)),
            )
            // User routes
            .service(
                web::scope("/users")
                    .route("/profile", web::put().to(users::update_profile))
                    .route("/account", web::delete().to(users::delete_account)),
            ),
    );
}
