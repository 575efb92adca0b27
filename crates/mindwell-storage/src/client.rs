use aws_sdk_s3::Client;

/// Build an S3 client from the default AWS config.
///
/// A custom `endpoint` (MinIO, localstack) switches to path-style addressing.
pub async fn build_client(endpoint: Option<&str>) -> Client {
    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let mut builder = aws_sdk_s3::config::Builder::from(&config);

    if let Some(url) = endpoint {
        builder = builder.endpoint_url(url).force_path_style(true);
    }

    Client::from_conf(builder.build())
}
