use aws_sdk_s3::Client;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;
use crate::objects::{self, Precondition};

/// Load a JSON document from S3. Returns the deserialized value and its ETag.
pub async fn load_document<T: DeserializeOwned>(
    client: &Client,
    bucket: &str,
    key: &str,
) -> Result<(T, String), StorageError> {
    let output = objects::get_object(client, bucket, key).await?;
    let value: T = serde_json::from_slice(&output.body)?;
    let etag = output.etag.unwrap_or_default();
    Ok((value, etag))
}

/// Save a JSON document to S3 under `precondition`. Returns the new ETag.
pub async fn save_document<T: Serialize>(
    client: &Client,
    bucket: &str,
    key: &str,
    value: &T,
    precondition: Precondition<'_>,
) -> Result<String, StorageError> {
    let body = serde_json::to_vec(value)?;
    objects::put_json(client, bucket, key, body, precondition).await
}
