//! Note upload endpoint — a multipart form submission carrying the
//! `note_name` and `note` text fields plus an optional file attachment.
//!
//! The attachment is written to the uploads directory under its own
//! filename; note content always comes from the `note` text field, never
//! from the attachment's bytes.

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use futures_util::StreamExt;
use std::path::Path;

use crate::config;
use crate::notes::StoreError;
use crate::AppState;

async fn upload_note(data: web::Data<AppState>, mut payload: Multipart) -> impl Responder {
    // Missing fields fall through as empty strings; the store does not
    // validate them either.
    let mut note_name = String::new();
    let mut note = String::new();

    while let Some(item) = payload.next().await {
        let mut field = match item {
            Ok(field) => field,
            Err(e) => {
                log::error!("Error processing upload: {}", e);
                return HttpResponse::BadRequest().body("Bad Request");
            }
        };

        let field_name = field
            .content_disposition()
            .get_name()
            .unwrap_or("")
            .to_string();
        let filename = field
            .content_disposition()
            .get_filename()
            .map(|s| s.to_string());

        let mut field_data: Vec<u8> = Vec::new();
        while let Some(chunk) = field.next().await {
            match chunk {
                Ok(bytes) => field_data.extend_from_slice(&bytes),
                Err(e) => {
                    log::error!("Error reading upload data: {}", e);
                    return HttpResponse::BadRequest().body("Bad Request");
                }
            }
        }

        match filename {
            Some(name) => save_attachment(&name, &field_data).await,
            None => match field_name.as_str() {
                "note_name" => note_name = String::from_utf8_lossy(&field_data).to_string(),
                "note" => note = String::from_utf8_lossy(&field_data).to_string(),
                _ => {}
            },
        }
    }

    match data.store.create(&note_name, &note).await {
        Ok(()) => HttpResponse::Created().body("Fine!"),
        Err(StoreError::Conflict) => HttpResponse::BadRequest().body("Bad Request"),
        Err(e) => {
            log::error!("Error uploading note: {}", e);
            HttpResponse::InternalServerError().body("Internal Server Error")
        }
    }
}

/// Write an attachment to the uploads directory under the client-supplied
/// filename, stripped to its final component. Failure is logged and does
/// not fail the request; the attachment is not part of the note.
async fn save_attachment(filename: &str, data: &[u8]) {
    let Some(name) = Path::new(filename).file_name() else {
        log::error!("Skipping attachment with unusable filename: {}", filename);
        return;
    };
    let dest = config::upload_dir().join(name);
    if let Err(e) = tokio::fs::write(&dest, data).await {
        log::error!("Failed to save attachment {}: {}", dest.display(), e);
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/upload").route(web::post().to(upload_note)));
}
