//! Multipart upload receiver.
//!
//! Reads a multipart body once at the HTTP boundary. Text fields are collected by
//! name; file content is only accepted from the single `file` field and is streamed
//! straight into the asset store, so the handler receives an already staged asset.

use std::{collections::HashMap, path::Path};

use axum::extract::{multipart::Field, Multipart};
use tokio::{fs::File, io::AsyncWriteExt};

use crate::server::{data::asset::AssetStore, error::AppError, model::asset::StagedAsset};

/// Name of the only multipart field allowed to carry a file.
pub const UPLOAD_FIELD: &str = "file";

/// Text fields and the staged file of a multipart request.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub fields: HashMap<String, String>,
    pub file: Option<StagedAsset>,
}

impl UploadForm {
    /// Reads every part of a multipart body.
    ///
    /// On any error the file staged so far is discarded before returning.
    ///
    /// # Arguments
    /// - `multipart` - The request body extractor
    /// - `assets` - Store the uploaded file is written to
    ///
    /// # Returns
    /// - `Ok(UploadForm)` - Text fields and the optional staged file
    /// - `Err(AppError::BadRequest)` - A file was sent under another field name, or
    ///   more than one file was sent
    /// - `Err(AppError::MultipartErr)` - The body is malformed or over the size limit
    pub async fn read(mut multipart: Multipart, assets: &AssetStore) -> Result<Self, AppError> {
        let mut form = Self::default();

        if let Err(err) = form.collect(&mut multipart, assets).await {
            let staged = form.file.take().map(|asset| asset.path);
            assets.delete(staged.as_deref()).await;
            return Err(err);
        }

        Ok(form)
    }

    async fn collect(
        &mut self,
        multipart: &mut Multipart,
        assets: &AssetStore,
    ) -> Result<(), AppError> {
        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            let file_name = field.file_name().map(str::to_owned);

            match file_name.as_deref() {
                None => {
                    let value = field.text().await?;
                    self.fields.insert(name, value);
                }
                // Browsers send an empty, nameless part for an unset file input.
                Some("") => continue,
                Some(_) if name != UPLOAD_FIELD => {
                    return Err(AppError::BadRequest(format!(
                        "Files must be uploaded in the '{}' field, got '{}'",
                        UPLOAD_FIELD, name
                    )));
                }
                Some(_) if self.file.is_some() => {
                    return Err(AppError::BadRequest(
                        "Only one file can be uploaded per request".to_string(),
                    ));
                }
                Some(_) => {
                    self.file = Some(stage(field, assets).await?);
                }
            }
        }

        Ok(())
    }
}

async fn stage(mut field: Field<'_>, assets: &AssetStore) -> Result<StagedAsset, AppError> {
    let extension = field
        .file_name()
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(str::to_owned);

    let (path, mut file) = assets.stage(extension.as_deref()).await?;

    if let Err(err) = write_chunks(&mut field, &mut file).await {
        drop(file);
        assets.delete(Some(&path)).await;
        return Err(err);
    }

    tracing::debug!("Staged upload at {}", path);

    Ok(StagedAsset { path })
}

async fn write_chunks(field: &mut Field<'_>, file: &mut File) -> Result<(), AppError> {
    while let Some(chunk) = field.chunk().await? {
        file.write_all(&chunk).await?;
    }
    file.flush().await?;

    Ok(())
}
