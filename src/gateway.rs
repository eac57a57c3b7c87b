//! Remote template gateway
//!
//! Wraps the two remote operations — list template metadata and fetch
//! one template's content by name — behind the [`TemplateStore`] trait.
//! The production implementation talks to AWS SESv2; tests substitute
//! in-memory implementations.

use crate::config::{GatewayConfig, DEFAULT_REGION};
use crate::error::{Error, Result};
use crate::types::{TemplateBody, TemplateContent, TemplateSummary};
use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_sesv2::error::{DisplayErrorContext, SdkError};
use aws_sdk_sesv2::Client;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// One `ListEmailTemplates` page; the service maximum.
const LIST_PAGE_SIZE: i32 = 100;

/// Abstraction over the remote template storage service
#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// List metadata for all remotely stored templates.
    ///
    /// Only a single page of results is fetched; truncation is logged,
    /// not followed.
    async fn list_templates(&self) -> Result<Vec<TemplateSummary>>;

    /// Fetch one template's content by name.
    ///
    /// Returns [`Error::TemplateNotFound`] when no template with that
    /// name exists remotely.
    async fn get_template(&self, name: &str) -> Result<TemplateContent>;
}

/// [`TemplateStore`] implementation backed by AWS SESv2
#[derive(Debug, Clone)]
pub struct SesTemplateStore {
    client: Client,
}

impl SesTemplateStore {
    /// Build a store from explicit gateway configuration.
    ///
    /// Credentials come from the ambient chain (environment, profile,
    /// instance metadata). The region resolves in order: an explicit
    /// configuration value, then whatever the ambient chain yields,
    /// then the fixed fallback. SDK retries are disabled: a single
    /// failed call propagates immediately.
    pub async fn connect(config: &GatewayConfig) -> Self {
        let timeouts = TimeoutConfig::builder()
            .operation_timeout(Duration::from_secs(config.timeout_secs))
            .build();

        let region = RegionProviderChain::first_try(config.region.clone().map(Region::new))
            .or_default_provider()
            .or_else(Region::new(DEFAULT_REGION));

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(region)
            .retry_config(RetryConfig::disabled())
            .timeout_config(timeouts);

        if let Some(profile) = &config.profile {
            loader = loader.profile_name(profile);
        }

        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;

        tracing::debug!(
            "Connected SESv2 client for region {}",
            sdk_config.region().map_or(DEFAULT_REGION, |r| r.as_ref())
        );

        Self {
            client: Client::new(&sdk_config),
        }
    }
}

#[async_trait]
impl TemplateStore for SesTemplateStore {
    async fn list_templates(&self) -> Result<Vec<TemplateSummary>> {
        tracing::debug!("Requesting one page of template metadata");

        let output = self
            .client
            .list_email_templates()
            .page_size(LIST_PAGE_SIZE)
            .send()
            .await
            .map_err(|err| {
                Error::gateway(format!(
                    "ListEmailTemplates failed: {}",
                    DisplayErrorContext(&err)
                ))
            })?;

        if output.next_token().is_some() {
            tracing::warn!(
                "Remote listing is truncated at {} entries; further pages are not fetched",
                LIST_PAGE_SIZE
            );
        }

        let mut summaries = Vec::new();

        for meta in output.templates_metadata() {
            let name = meta.template_name().ok_or_else(|| {
                Error::gateway("Malformed listing entry: missing template name")
            })?;

            let created_at = meta
                .created_timestamp()
                .and_then(convert_timestamp)
                .ok_or_else(|| {
                    Error::gateway(format!(
                        "Malformed listing entry for '{name}': missing or invalid creation timestamp"
                    ))
                })?;

            summaries.push(TemplateSummary::new(name, created_at));
        }

        tracing::debug!("Listed {} templates", summaries.len());

        Ok(summaries)
    }

    async fn get_template(&self, name: &str) -> Result<TemplateContent> {
        tracing::debug!("Fetching template '{}'", name);

        let output = match self
            .client
            .get_email_template()
            .template_name(name)
            .send()
            .await
        {
            Ok(output) => output,
            Err(SdkError::ServiceError(context)) if context.err().is_not_found_exception() => {
                return Err(Error::TemplateNotFound(name.to_string()));
            }
            Err(err) => {
                return Err(Error::gateway(format!(
                    "GetEmailTemplate failed for '{name}': {}",
                    DisplayErrorContext(&err)
                )));
            }
        };

        let content = output
            .template_content()
            .map(|content| TemplateBody {
                subject: content.subject().map(str::to_string),
                html: content.html().map(str::to_string),
                text: content.text().map(str::to_string),
            })
            .unwrap_or_default();

        Ok(TemplateContent {
            name: name.to_string(),
            content,
        })
    }
}

/// Convert a service timestamp to a UTC timestamp.
fn convert_timestamp(value: &aws_sdk_sesv2::primitives::DateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(value.secs(), value.subsec_nanos())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_timestamp() {
        let value = aws_sdk_sesv2::primitives::DateTime::from_secs(1_714_560_000);
        let converted = convert_timestamp(&value).unwrap();
        assert_eq!(converted.timestamp(), 1_714_560_000);
        assert_eq!(converted.timestamp_subsec_nanos(), 0);
    }
}
