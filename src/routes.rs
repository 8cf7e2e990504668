use std::io::Write;

use actix_files::Files;
use actix_multipart::Multipart;
use actix_web::{web, Error, HttpResponse};
use futures::{StreamExt, TryStreamExt};
use log::{error, warn};

use crate::model::Category;
use crate::pipeline;
use crate::registry::EnsembleRegistry;
use crate::storage::UploadStore;

pub fn configure_routes(cfg: &mut web::ServiceConfig, static_dir: String) {
    cfg.service(web::resource("/predict_cob").route(web::post().to(predict_cob)))
        .service(web::resource("/predict_leaf").route(web::post().to(predict_leaf)))
        .service(Files::new("/static", static_dir.clone()))
        .service(Files::new("/", static_dir).index_file("index.html"));
}

async fn predict_cob(
    registry: web::Data<EnsembleRegistry>,
    store: web::Data<UploadStore>,
    payload: Multipart,
) -> Result<HttpResponse, Error> {
    predict(Category::Cob, registry, store, payload).await
}

async fn predict_leaf(
    registry: web::Data<EnsembleRegistry>,
    store: web::Data<UploadStore>,
    payload: Multipart,
) -> Result<HttpResponse, Error> {
    predict(Category::Leaf, registry, store, payload).await
}

async fn predict(
    category: Category,
    registry: web::Data<EnsembleRegistry>,
    store: web::Data<UploadStore>,
    mut payload: Multipart,
) -> Result<HttpResponse, Error> {
    let ensemble = registry.ensemble(category);
    if ensemble.is_empty() {
        return Ok(HttpResponse::InternalServerError().body(format!(
            "No {} models available. Please ensure model files are present.",
            category.key()
        )));
    }

    let Some(upload) = read_file_field(&mut payload).await? else {
        warn!("Rejected {} request without a file field", category.key());
        return Ok(HttpResponse::BadRequest().body("No file uploaded"));
    };
    if upload.filename.is_empty() || upload.bytes.is_empty() {
        warn!("Rejected {} request with an empty upload", category.key());
        return Ok(HttpResponse::BadRequest().body("No file selected"));
    }

    match pipeline::classify_upload(
        category,
        ensemble,
        store.get_ref(),
        &upload.filename,
        &upload.bytes,
    ) {
        Ok(page) => Ok(HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(page)),
        Err(e) => {
            error!("{} prediction failed: {}", category.display_name(), e);
            Ok(HttpResponse::InternalServerError().body(format!("Error processing image: {}", e)))
        }
    }
}

struct UploadedFile {
    filename: String,
    bytes: Vec<u8>,
}

/// Pull the first `file` field out of the multipart stream. Other fields
/// are drained and ignored.
async fn read_file_field(payload: &mut Multipart) -> Result<Option<UploadedFile>, Error> {
    while let Ok(Some(mut field)) = payload.try_next().await {
        let (is_file, filename) = match field.content_disposition() {
            Some(cd) => (
                cd.get_name() == Some("file"),
                cd.get_filename().unwrap_or_default().to_string(),
            ),
            None => (false, String::new()),
        };
        if !is_file {
            continue;
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let data = chunk?;
            bytes.write_all(&data)?;
        }
        return Ok(Some(UploadedFile { filename, bytes }));
    }
    Ok(None)
}
