//! Training documentation upload service.
//!
//! Handles the two multipart endpoints of the training catalog:
//!
//! - `POST /trainings` — schedule a training, with an optional
//!   documentation image
//! - `PUT /trainings/{id}/documentation` — attach or replace the image later
//!
//! Images are streamed to `<upload_dir>/trainings/` BEFORE the database row
//! is written and are served back under `/uploads`. There is no cleanup if
//! the database write fails afterwards; an orphaned file on disk is
//! accepted over a dangling documentation URL.

use actix_multipart::Multipart;
use actix_web::{HttpResponse, post, put, web};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use futures_util::StreamExt;
use std::path::Path;
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::config::{Config, UPLOADS_URL_PREFIX};
use crate::db::{self, DbPool};
use crate::error::{AppError, AppResult};
use crate::models::Training;

/// MIME types accepted for documentation images.
const ALLOWED_IMAGE_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/webp",
    "image/heic",
    "image/heif",
];

/// Configure upload routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create_training).service(upload_documentation);
}

/// Collected multipart form state for the training endpoints.
#[derive(Default)]
struct TrainingForm {
    title: Option<String>,
    trainer: Option<String>,
    date: Option<String>,
    duration: Option<String>,
    documentation_url: Option<String>,
}

/// Schedule a new training.
///
/// POST /trainings (multipart/form-data)
///
/// Text fields: `title`, `trainer`, `date`, `duration` (hours). Optional
/// file field: `documentation`.
#[utoipa::path(
    post,
    path = "/api/trainings",
    tag = "Trainings",
    request_body(
        content = String,
        content_type = "multipart/form-data",
        description = "Fields title/trainer/date/duration plus optional documentation image"
    ),
    responses(
        (status = 201, description = "Training scheduled", body = Training),
        (status = 400, description = "Missing field or unsupported image format", body = crate::error::ErrorResponse)
    )
)]
#[post("/trainings")]
pub async fn create_training(
    pool: web::Data<DbPool>,
    config: web::Data<Config>,
    mut payload: Multipart,
) -> AppResult<HttpResponse> {
    let form = read_training_form(&mut payload, &config).await?;

    let (Some(title), Some(trainer), Some(date), Some(duration)) =
        (&form.title, &form.trainer, &form.date, &form.duration)
    else {
        return Err(AppError::InvalidInput(
            "title, trainer, date, and duration are required".to_string(),
        ));
    };

    let start_time = parse_start_time(date)
        .ok_or_else(|| AppError::InvalidInput(format!("date '{}' is not a valid date", date)))?;

    let duration_hours = duration
        .parse::<f64>()
        .map_err(|_| AppError::InvalidInput(format!("duration '{}' is not a number", duration)))?;

    let created = db::trainings::insert(
        pool.connection(),
        title,
        trainer,
        start_time,
        duration_hours,
        form.documentation_url,
    )
    .await?;

    info!("Training {} scheduled: {}", created.id, created.title);

    Ok(HttpResponse::Created().json(Training::from(created)))
}

/// Attach or replace the documentation image of a training.
///
/// PUT /trainings/{id}/documentation (multipart/form-data)
#[utoipa::path(
    put,
    path = "/api/trainings/{id}/documentation",
    tag = "Trainings",
    params(
        ("id" = i32, Path, description = "Training id")
    ),
    request_body(
        content = String,
        content_type = "multipart/form-data",
        description = "File field `documentation`"
    ),
    responses(
        (status = 200, description = "Documentation replaced", body = Training),
        (status = 400, description = "Missing file or unsupported image format", body = crate::error::ErrorResponse),
        (status = 404, description = "Training not found", body = crate::error::ErrorResponse)
    )
)]
#[put("/trainings/{id}/documentation")]
pub async fn upload_documentation(
    pool: web::Data<DbPool>,
    config: web::Data<Config>,
    path: web::Path<i32>,
    mut payload: Multipart,
) -> AppResult<HttpResponse> {
    let form = read_training_form(&mut payload, &config).await?;

    let documentation_url = form.documentation_url.ok_or_else(|| {
        AppError::InvalidInput("file documentation is required".to_string())
    })?;

    let id = path.into_inner();
    let updated =
        db::trainings::update_documentation(pool.connection(), id, &documentation_url).await?;

    info!("Training {} documentation replaced", id);

    Ok(HttpResponse::Ok().json(Training::from(updated)))
}

/// Drain a multipart payload into a [`TrainingForm`], streaming any
/// `documentation` file to disk as it arrives.
async fn read_training_form(payload: &mut Multipart, config: &Config) -> AppResult<TrainingForm> {
    let mut form = TrainingForm::default();

    while let Some(item) = payload.next().await {
        let mut field =
            item.map_err(|e| AppError::InvalidInput(format!("Multipart error: {}", e)))?;

        let content_disposition = field
            .content_disposition()
            .ok_or_else(|| AppError::InvalidInput("Missing content disposition".to_string()))?;

        let name = content_disposition.get_name().unwrap_or("").to_string();
        let filename = content_disposition.get_filename().map(|f| f.to_string());

        match (name.as_str(), filename) {
            ("documentation", Some(original_name)) => {
                let url = save_documentation(
                    &mut field,
                    &original_name,
                    &config.training_upload_dir(),
                    config.max_upload_size,
                )
                .await?;
                form.documentation_url = Some(url);
            }
            ("title", None) => form.title = Some(read_text_field(&mut field).await?),
            ("trainer", None) => form.trainer = Some(read_text_field(&mut field).await?),
            ("date", None) => form.date = Some(read_text_field(&mut field).await?),
            ("duration", None) => form.duration = Some(read_text_field(&mut field).await?),
            _ => drain_field(&mut field).await,
        }
    }

    Ok(form)
}

/// Stream one file field to the upload directory, returning its public URL.
async fn save_documentation(
    field: &mut actix_multipart::Field,
    original_name: &str,
    upload_dir: &Path,
    max_upload_size: usize,
) -> AppResult<String> {
    let content_type = field
        .content_type()
        .map(|m| m.essence_str().to_lowercase())
        .unwrap_or_default();

    if !ALLOWED_IMAGE_TYPES.contains(&content_type.as_str()) {
        drain_field(field).await;
        return Err(AppError::InvalidInput(
            "Format file tidak didukung. Gunakan JPG, PNG, WEBP, HEIC/HEIF.".to_string(),
        ));
    }

    let filename = documentation_filename(
        original_name,
        Utc::now().timestamp_millis(),
        rand::random::<u32>(),
    );

    tokio::fs::create_dir_all(upload_dir)
        .await
        .map_err(|e| AppError::FileSystem(format!("Failed to create upload directory: {}", e)))?;

    let disk_path = upload_dir.join(&filename);
    let mut file = tokio::fs::File::create(&disk_path)
        .await
        .map_err(|e| AppError::FileSystem(format!("Failed to create upload file: {}", e)))?;

    let mut size: usize = 0;
    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(|e| AppError::InvalidInput(format!("Read error: {}", e)))?;
        size += chunk.len();
        if size > max_upload_size {
            drop(file);
            tokio::fs::remove_file(&disk_path).await.ok();
            return Err(AppError::InvalidInput(format!(
                "documentation exceeds the {} byte upload limit",
                max_upload_size
            )));
        }
        file.write_all(&chunk)
            .await
            .map_err(|e| AppError::FileSystem(format!("Failed to write upload file: {}", e)))?;
    }
    file.flush()
        .await
        .map_err(|e| AppError::FileSystem(format!("Failed to flush upload file: {}", e)))?;

    info!("Documentation image saved: {} ({} bytes)", filename, size);

    Ok(format!("{}/trainings/{}", UPLOADS_URL_PREFIX, filename))
}

/// Read a text field to a UTF-8 string.
async fn read_text_field(field: &mut actix_multipart::Field) -> AppResult<String> {
    let mut data = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(|e| AppError::InvalidInput(format!("Read error: {}", e)))?;
        data.extend_from_slice(&chunk);
    }

    String::from_utf8(data)
        .map_err(|e| AppError::InvalidInput(format!("Field is not valid UTF-8: {}", e)))
}

/// Drain a multipart field without saving.
async fn drain_field(field: &mut actix_multipart::Field) {
    while let Some(chunk) = field.next().await {
        let _ = chunk;
    }
}

/// Collision-resistant filename: timestamp + random suffix, original
/// extension preserved lowercased.
fn documentation_filename(original_name: &str, unix_millis: i64, suffix: u32) -> String {
    let extension = Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
        .unwrap_or_default();

    format!("doc-{}-{}{}", unix_millis, suffix, extension)
}

/// Parse the `date` form field. The scheduling form submits
/// datetime-local values; plain dates mean midnight.
fn parse_start_time(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documentation_filename_lowercases_extension() {
        let name = documentation_filename("Foto Pelatihan.JPG", 1_700_000_000_000, 42);
        assert_eq!(name, "doc-1700000000000-42.jpg");
    }

    #[test]
    fn test_documentation_filename_without_extension() {
        let name = documentation_filename("scan", 1_700_000_000_000, 7);
        assert_eq!(name, "doc-1700000000000-7");
    }

    #[test]
    fn test_documentation_filename_preserves_webp() {
        let name = documentation_filename("evidence.webp", 123, 1);
        assert_eq!(name, "doc-123-1.webp");
    }

    #[test]
    fn test_allowed_image_types_cover_heic() {
        assert!(ALLOWED_IMAGE_TYPES.contains(&"image/heic"));
        assert!(ALLOWED_IMAGE_TYPES.contains(&"image/heif"));
        assert!(!ALLOWED_IMAGE_TYPES.contains(&"image/gif"));
        assert!(!ALLOWED_IMAGE_TYPES.contains(&"application/pdf"));
    }

    #[test]
    fn test_parse_start_time_rfc3339() {
        let parsed = parse_start_time("2026-08-07T09:30:00+07:00").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2026-08-07T02:30:00+00:00");
    }

    #[test]
    fn test_parse_start_time_datetime_local() {
        let parsed = parse_start_time("2026-08-07T09:30").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2026-08-07T09:30:00+00:00");
    }

    #[test]
    fn test_parse_start_time_plain_date() {
        let parsed = parse_start_time("2026-08-07").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2026-08-07T00:00:00+00:00");
    }

    #[test]
    fn test_parse_start_time_rejects_garbage() {
        assert!(parse_start_time("next tuesday").is_none());
        assert!(parse_start_time("").is_none());
    }
}
