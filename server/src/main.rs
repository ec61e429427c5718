#![recursion_limit = "256"]

use anyhow::Context as _;
use leptos::prelude::*;

use civsail::context::{Context, Settings};

mod feeds;

const LEPTOS_SERVER_FN_URL_PATH: &str = "/site/api/{*fn_name}";
const EDITORIAL_ASSETS_URL_PATH: &str = "/editorials/assets";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use leptos_axum::{generate_route_list, LeptosRoutes};

    env_logger::init();

    let conf = get_configuration(None).context("Could not read the leptos configuration")?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    let settings = Settings::from_env();
    log::info!(
        "content from {:?}, editorials from {:?}",
        settings.content_path,
        settings.editorials_path
    );
    let ctx = Context::new(leptos_options.clone(), &settings)?;
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(civsail::App);
    let ctx_fn = {
        let ctx = ctx.clone();
        move || ctx.provide()
    };
    let app_fn = {
        let ctx = ctx.clone();
        move || civsail::shell(ctx.leptos_options.clone())
    };

    let leptos_server_fn_method_router =
        axum::routing::get(leptos_server_fn_axum_handler).post(leptos_server_fn_axum_handler);
    let json_feed_method_router = axum::routing::get(feeds::json::handler);
    let rss_feed_method_router = axum::routing::get(feeds::rss::handler);
    let editorial_assets = tower_http::services::ServeDir::new(&settings.editorials_path);
    let app = axum::Router::new()
        .route(LEPTOS_SERVER_FN_URL_PATH, leptos_server_fn_method_router)
        .route(feeds::json::URL_PATH, json_feed_method_router)
        .route(feeds::rss::URL_PATH, rss_feed_method_router)
        .nest_service(EDITORIAL_ASSETS_URL_PATH, editorial_assets)
        .leptos_routes_with_context(&ctx, routes, ctx_fn, app_fn)
        .fallback(leptos_axum::file_and_error_handler::<Context, _>(civsail::shell))
        .with_state(ctx);

    log::info!("listening in {:?} on http://{}", &leptos_options.env, &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Could not listen on {}", addr))?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

async fn leptos_server_fn_axum_handler(
    axum::extract::State(ctx): axum::extract::State<Context>,
    request: axum::extract::Request<axum::body::Body>,
) -> impl axum::response::IntoResponse {
    leptos_axum::handle_server_fns_with_context(move || ctx.provide(), request).await
}
