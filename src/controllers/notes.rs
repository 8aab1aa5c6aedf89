//! Notes REST API — list, read, update, and delete named notes.
//!
//! Creation goes through the upload endpoint so the browser form can attach
//! a file alongside the text fields.

use actix_web::{web, Either, HttpResponse, Responder};
use serde::Deserialize;

use crate::notes::StoreError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateNoteRequest {
    /// Absent field updates the note to empty content
    #[serde(default)]
    pub note: String,
}

async fn list_notes(data: web::Data<AppState>) -> impl Responder {
    match data.store.list().await {
        Ok(notes) => HttpResponse::Ok().json(notes),
        Err(e) => {
            log::error!("Error reading notes file: {}", e);
            HttpResponse::InternalServerError().body("Internal Server Error")
        }
    }
}

async fn get_note(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let note_name = path.into_inner();
    match data.store.get(&note_name).await {
        Ok(note) => HttpResponse::Ok().json(note),
        Err(StoreError::NotFound) => HttpResponse::NotFound().body("Not Found"),
        Err(e) => {
            log::error!("Error reading note: {}", e);
            HttpResponse::InternalServerError().body("Internal Server Error")
        }
    }
}

/// The body field `note` is accepted as JSON or as a urlencoded form
async fn update_note(
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: Either<web::Json<UpdateNoteRequest>, web::Form<UpdateNoteRequest>>,
) -> impl Responder {
    let note_name = path.into_inner();
    let req = body.into_inner();
    match data.store.update(&note_name, &req.note).await {
        Ok(()) => HttpResponse::Ok().body("OK"),
        Err(StoreError::NotFound) => HttpResponse::NotFound().body("Not Found"),
        Err(e) => {
            log::error!("Error updating note: {}", e);
            HttpResponse::InternalServerError().body("Internal Server Error")
        }
    }
}

async fn delete_note(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let note_name = path.into_inner();
    match data.store.delete(&note_name).await {
        Ok(()) => HttpResponse::Ok().body("OK"),
        Err(StoreError::NotFound) => HttpResponse::NotFound().body("Not Found"),
        Err(e) => {
            log::error!("Error deleting note: {}", e);
            HttpResponse::InternalServerError().body("Internal Server Error")
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/notes")
            .route("", web::get().to(list_notes))
            .route("/{note_name}", web::get().to(get_note))
            .route("/{note_name}", web::put().to(update_note))
            .route("/{note_name}", web::delete().to(delete_note)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::upload;
    use crate::notes::{MemoryNoteStore, Note, NoteStore};
    use actix_web::{test, App};
    use std::sync::Arc;

    fn app_state(store: MemoryNoteStore) -> web::Data<AppState> {
        web::Data::new(AppState {
            store: Arc::new(store),
        })
    }

    /// Multipart body with text fields only, the way the upload form posts them
    fn multipart_body(boundary: &str, fields: &[(&str, &str)]) -> String {
        let mut body = String::new();
        for (name, value) in fields {
            body.push_str(&format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                boundary, name, value
            ));
        }
        body.push_str(&format!("--{}--\r\n", boundary));
        body
    }

    #[actix_web::test]
    async fn test_note_lifecycle() {
        let state = app_state(MemoryNoteStore::new());
        let app = test::init_service(
            App::new()
                .app_data(state)
                .configure(config)
                .configure(upload::config),
        )
        .await;

        // create alpha
        let boundary = "------------------------abc123";
        let body = multipart_body(boundary, &[("note_name", "alpha"), ("note", "hello")]);
        let req = test::TestRequest::post()
            .uri("/upload")
            .insert_header((
                "content-type",
                format!("multipart/form-data; boundary={}", boundary),
            ))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);
        assert_eq!(test::read_body(resp).await, "Fine!");

        // read it back
        let req = test::TestRequest::get().uri("/notes/alpha").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let note: Note = test::read_body_json(resp).await;
        assert_eq!(note.note_name, "alpha");
        assert_eq!(note.note, "hello");

        // update via JSON body
        let req = test::TestRequest::put()
            .uri("/notes/alpha")
            .set_json(serde_json::json!({ "note": "world" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(test::read_body(resp).await, "OK");

        let req = test::TestRequest::get().uri("/notes/alpha").to_request();
        let note: Note = test::call_and_read_body_json(&app, req).await;
        assert_eq!(note.note, "world");

        // delete, then the name is gone
        let req = test::TestRequest::delete().uri("/notes/alpha").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(test::read_body(resp).await, "OK");

        let req = test::TestRequest::get().uri("/notes/alpha").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let req = test::TestRequest::get().uri("/notes").to_request();
        let notes: Vec<Note> = test::call_and_read_body_json(&app, req).await;
        assert!(notes.iter().all(|n| n.note_name != "alpha"));
    }

    #[actix_web::test]
    async fn test_duplicate_upload_is_rejected() {
        let state = app_state(MemoryNoteStore::new());
        let app = test::init_service(
            App::new()
                .app_data(state)
                .configure(config)
                .configure(upload::config),
        )
        .await;

        let boundary = "------------------------abc123";
        for (content, expected_status) in [("x", 201), ("y", 400)] {
            let body = multipart_body(boundary, &[("note_name", "beta"), ("note", content)]);
            let req = test::TestRequest::post()
                .uri("/upload")
                .insert_header((
                    "content-type",
                    format!("multipart/form-data; boundary={}", boundary),
                ))
                .set_payload(body)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), expected_status);
        }

        // first content survives
        let req = test::TestRequest::get().uri("/notes/beta").to_request();
        let note: Note = test::call_and_read_body_json(&app, req).await;
        assert_eq!(note.note, "x");
    }

    #[actix_web::test]
    async fn test_update_accepts_form_body() {
        let store = MemoryNoteStore::new();
        store.create("alpha", "hello").await.unwrap();
        let state = app_state(store);
        let app = test::init_service(App::new().app_data(state).configure(config)).await;

        let req = test::TestRequest::put()
            .uri("/notes/alpha")
            .set_form([("note", "world")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let req = test::TestRequest::get().uri("/notes/alpha").to_request();
        let note: Note = test::call_and_read_body_json(&app, req).await;
        assert_eq!(note.note, "world");
    }

    #[actix_web::test]
    async fn test_missing_names_are_404() {
        let state = app_state(MemoryNoteStore::new());
        let app = test::init_service(App::new().app_data(state).configure(config)).await;

        let req = test::TestRequest::get().uri("/notes/ghost").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
        assert_eq!(test::read_body(resp).await, "Not Found");

        let req = test::TestRequest::put()
            .uri("/notes/ghost")
            .set_json(serde_json::json!({ "note": "c" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let req = test::TestRequest::delete().uri("/notes/ghost").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn test_storage_failure_is_500_without_detail() {
        use crate::notes::FileNoteStore;

        // A file store pointed at a missing document fails every operation
        let dir = tempfile::tempdir().unwrap();
        let state = web::Data::new(AppState {
            store: Arc::new(FileNoteStore::new(dir.path().join("missing.json"))),
        });
        let app = test::init_service(App::new().app_data(state).configure(config)).await;

        let req = test::TestRequest::get().uri("/notes").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);
        assert_eq!(test::read_body(resp).await, "Internal Server Error");
    }
}
