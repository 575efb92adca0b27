use aws_sdk_s3::Client;
use aws_sdk_s3::error::ProvideErrorMetadata;
use aws_smithy_types::byte_stream::ByteStream;

use crate::error::StorageError;

/// Result of a GET operation, including the body and ETag.
pub struct GetObjectOutput {
    pub body: Vec<u8>,
    pub etag: Option<String>,
}

/// Get an object from S3. A missing key maps to `StorageError::NotFound`.
pub async fn get_object(
    client: &Client,
    bucket: &str,
    key: &str,
) -> Result<GetObjectOutput, StorageError> {
    let resp = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|e| {
            let err = e.into_service_error();
            if err.is_no_such_key() {
                StorageError::NotFound {
                    key: key.to_string(),
                }
            } else {
                StorageError::GetObject(err.to_string())
            }
        })?;

    let etag = resp.e_tag().map(|s| s.to_string());
    let body = resp
        .body
        .collect()
        .await
        .map_err(|e| StorageError::GetObject(e.to_string()))?
        .into_bytes()
        .to_vec();

    Ok(GetObjectOutput { body, etag })
}

/// Write condition attached to a PUT.
#[derive(Debug, Clone, Copy)]
pub enum Precondition<'a> {
    /// Unconditional overwrite.
    None,
    /// Only create; fail if the key already exists (`If-None-Match: *`).
    Absent,
    /// Only replace the version last read (`If-Match: <etag>`).
    Matches(&'a str),
}

/// Put a JSON object to S3 under `precondition`. Returns the new ETag, or
/// `StorageError::PreconditionFailed` when the condition does not hold.
pub async fn put_json(
    client: &Client,
    bucket: &str,
    key: &str,
    body: Vec<u8>,
    precondition: Precondition<'_>,
) -> Result<String, StorageError> {
    let mut req = client
        .put_object()
        .bucket(bucket)
        .key(key)
        .content_type("application/json")
        .body(ByteStream::from(body));

    req = match precondition {
        Precondition::None => req,
        Precondition::Absent => req.if_none_match("*"),
        Precondition::Matches(etag) => req.if_match(etag),
    };

    let resp = req.send().await.map_err(|e| {
        let status = e.raw_response().map(|r| r.status().as_u16());
        let err = e.into_service_error();
        // S3 answers 412 when the condition does not hold
        if status == Some(412) || err.code() == Some("PreconditionFailed") {
            StorageError::PreconditionFailed {
                key: key.to_string(),
            }
        } else {
            StorageError::PutObject(err.to_string())
        }
    })?;

    Ok(resp.e_tag().unwrap_or_default().to_string())
}

/// List objects under a prefix. Returns keys.
pub async fn list_objects(
    client: &Client,
    bucket: &str,
    prefix: &str,
) -> Result<Vec<String>, StorageError> {
    let mut keys = Vec::new();
    let mut continuation_token: Option<String> = None;

    loop {
        let mut req = client
            .list_objects_v2()
            .bucket(bucket)
            .prefix(prefix);

        if let Some(token) = &continuation_token {
            req = req.continuation_token(token);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| StorageError::ListObjects(e.into_service_error().to_string()))?;

        for obj in resp.contents() {
            if let Some(key) = obj.key() {
                keys.push(key.to_string());
            }
        }

        if resp.is_truncated() == Some(true) {
            continuation_token = resp.next_continuation_token().map(|s| s.to_string());
        } else {
            break;
        }
    }

    Ok(keys)
}
