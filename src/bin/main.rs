// Bookshelf server
//
// Actix-web serves the server-rendered Leptos pages, the `/api` server
// functions, the hydration bundle and the image assets. The catalog server
// function reaches the books backend through one shared client.

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use book_shelf::web_app::app::App as WebApp;
    use leptos_actix::{generate_route_list, handle_server_fns, LeptosRoutes};
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_env_filter(filter)
        .init();

    let client = catalog_client()?;

    let conf = leptos_config::get_configuration(None).map_err(std::io::Error::other)?;
    let options = conf.leptos_options;
    let addr = options.site_addr;
    let pkg_dir = format!("{}/{}", options.site_root, options.site_pkg_dir);
    let img_dir = format!("{}/img", options.site_root);

    tracing::info!("Bookshelf listening on http://{}", addr);

    HttpServer::new(move || {
        let routes = generate_route_list(WebApp);
        let shell_options = options.clone();

        App::new()
            .app_data(web::Data::new(client.clone()))
            .route("/api/{tail:.*}", handle_server_fns())
            .service(Files::new("/pkg", pkg_dir.clone()))
            .service(Files::new("/img", img_dir.clone()))
            .leptos_routes(routes, move || shell(shell_options.clone()))
            .app_data(web::Data::new(options.clone()))
    })
    .bind(&addr)?
    .run()
    .await
}

/// Build the catalog client from the environment and install it globally
#[cfg(feature = "ssr")]
fn catalog_client() -> std::io::Result<book_shelf::web_app::api::catalog::CatalogClient> {
    use book_shelf::web_app::api::catalog::{self, CatalogClient};
    use book_shelf::web_app::api::config::AppConfig;

    let config = AppConfig::from_env();
    match config.catalog_timeout {
        Some(timeout) => tracing::info!("Catalog endpoint: {} (timeout {:?})", config.catalog_url, timeout),
        None => tracing::info!("Catalog endpoint: {}", config.catalog_url),
    }

    let client = CatalogClient::new(&config).map_err(std::io::Error::other)?;
    catalog::init_client(client.clone());
    Ok(client)
}

/// HTML document around the application
#[cfg(feature = "ssr")]
fn shell(options: leptos::prelude::LeptosOptions) -> impl leptos::prelude::IntoView {
    use book_shelf::web_app::app::App as WebApp;
    use leptos::prelude::*;
    use leptos_meta::MetaTags;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <WebApp/>
            </body>
        </html>
    }
}

#[cfg(not(feature = "ssr"))]
fn main() {
    panic!("This binary requires the 'ssr' feature. Run with: cargo leptos watch");
}
