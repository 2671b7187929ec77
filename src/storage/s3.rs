//! S3 object sink

use super::ObjectSink;
use aws_sdk_s3::Client;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use eyre::{Result, eyre};

/// Uploads objects into an S3 bucket with `PutObject`
#[derive(Debug, Clone)]
pub struct S3Sink {
    client: Client,
    bucket: String,
}

impl S3Sink {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Build a sink from the default AWS credential and region chain
    pub async fn from_env(bucket: impl Into<String>) -> Self {
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&aws_config), bucket)
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

impl ObjectSink for S3Sink {
    async fn put(&self, key: &str, body: Vec<u8>, content_type: &str) -> Result<()> {
        let size = body.len();

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|error| {
                eyre!(
                    "Failed to upload {}: {}",
                    self.describe(key),
                    DisplayErrorContext(&error)
                )
            })?;

        log::info!("Uploaded {} bytes to {}", size, self.describe(key));
        Ok(())
    }

    fn describe(&self, key: &str) -> String {
        format!("s3://{}/{}", self.bucket, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::config::{BehaviorVersion, Region};

    fn offline_client() -> Client {
        let config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .build();
        Client::from_conf(config)
    }

    #[test]
    fn test_describe() {
        let sink = S3Sink::new(offline_client(), "fake-bucket");
        assert_eq!(sink.bucket(), "fake-bucket");
        assert_eq!(sink.describe("rag-data.json"), "s3://fake-bucket/rag-data.json");
    }
}
