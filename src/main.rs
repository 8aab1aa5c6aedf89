use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::sync::Arc;

mod config;
mod controllers;
mod notes;

use notes::{FileNoteStore, NoteStore};

pub struct AppState {
    pub store: Arc<dyn NoteStore>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    log::info!("notes-backend v{}", env!("CARGO_PKG_VERSION"));

    // Uploaded attachments land here; a failure is logged, not fatal.
    if let Err(e) = std::fs::create_dir_all(config::upload_dir()) {
        log::error!("Error creating upload directory: {}", e);
    }

    let store: Arc<dyn NoteStore> = Arc::new(FileNoteStore::new(config::notes_file()));

    let port = config::defaults::PORT;
    log::info!("The server is running on the port {}", port);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(AppState {
                store: Arc::clone(&store),
            }))
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::pages::config)
            .configure(controllers::notes::config)
            .configure(controllers::upload::config)
    })
    .bind(("0.0.0.0", port))?
    .run();

    let server_handle = server.handle();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
        log::info!("Received Ctrl+C, shutting down...");
        server_handle.stop(true).await;
        log::info!("Shutdown complete");
    });

    server.await
}
