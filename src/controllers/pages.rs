//! Root greeting and the static upload form page.

use actix_files::NamedFile;
use actix_web::{web, HttpResponse, Responder};

use crate::config;

async fn index() -> impl Responder {
    HttpResponse::Ok().body("The server started successfully...")
}

/// Manual upload form for the browser; carries no API behavior of its own
async fn upload_form() -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open(
        config::static_dir().join("UploadForm.html"),
    )?)
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(index)));
    cfg.service(web::resource("/UploadForm.html").route(web::get().to(upload_form)));
}
