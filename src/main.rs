mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;
        use tower_http::trace::TraceLayer;

        use crate::server::{
            config::Config, service::code::OneTimeCodeService, startup, state::AppState,
        };

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        let session = startup::connect_to_session(&db, &config).await?;

        let code_service = OneTimeCodeService::new();

        tracing::info!("Starting server");

        // Log a setup link when no manager account exists yet
        startup::check_for_manager(&db, &config, &code_service).await?;

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router()
            .with_state(AppState::new(db, code_service, config.app_url.clone()))
            .layer(session)
            .layer(TraceLayer::new_for_http());
        router = router.merge(server_routes);

        Ok(router)
    })
}
