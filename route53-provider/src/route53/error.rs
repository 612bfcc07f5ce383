//! Route 53 error mapping
//!
//! Reference: <https://docs.aws.amazon.com/Route53/latest/APIReference/CommonErrors.html>
//!
//! ## Error code classification
//!
//! - **Authentication**: `InvalidClientTokenId`, `SignatureDoesNotMatch`, `IncompleteSignature`,
//!   `MissingAuthenticationToken`, `InvalidSignatureException`
//! - **Permission denied**: `AccessDenied`, `AccessDeniedException`
//! - **Throttling**: `Throttling`, `ThrottlingException`, `PriorRequestNotComplete`
//! - **Hosted zones**: `NoSuchHostedZone`, `HostedZoneNotEmpty`, `HostedZoneAlreadyExists`,
//!   `ConflictingDomainExists`
//! - **Change batches**: `InvalidChangeBatch`
//! - **Parameters**: `InvalidInput`, `InvalidDomainName`, `InvalidArgument`
//! - **Quotas**: `TooManyHostedZones`, `TooManyResourceRecordSets`, `LimitsExceeded`
//!
//! ## Unmapped (fallback to Unknown)
//!
//! - Health checks, traffic policies, DNSSEC, query logging: not used by this client

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::Route53Transport;

impl ProviderErrorMapper for Route53Transport {
    fn provider_name(&self) -> &'static str {
        "route53"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            // ============ Authentication ============
            Some(
                "InvalidClientTokenId"
                | "SignatureDoesNotMatch"
                | "IncompleteSignature"
                | "MissingAuthenticationToken"
                | "InvalidSignatureException",
            ) => ProviderError::InvalidCredentials {
                raw_message: Some(raw.message),
            },

            // ============ Permission denied ============
            Some("AccessDenied" | "AccessDeniedException") => ProviderError::PermissionDenied {
                raw_message: Some(raw.message),
            },

            // ============ Throttling ============
            Some("Throttling" | "ThrottlingException" | "PriorRequestNotComplete") => {
                ProviderError::RateLimited {
                    retry_after: None,
                    raw_message: Some(raw.message),
                }
            }

            // ============ Hosted zones ============
            Some("NoSuchHostedZone") => ProviderError::ZoneNotFound {
                zone_id: context.zone_id.unwrap_or_default(),
                raw_message: Some(raw.message),
            },
            Some("HostedZoneNotEmpty") => ProviderError::ZoneNotEmpty {
                zone_id: context.zone_id.unwrap_or_default(),
                raw_message: Some(raw.message),
            },
            Some("HostedZoneAlreadyExists" | "ConflictingDomainExists") => {
                ProviderError::ZoneExists {
                    raw_message: Some(raw.message),
                }
            }

            // ============ Change batches ============
            Some("InvalidChangeBatch") => ProviderError::InvalidChangeBatch {
                messages: vec![raw.message],
            },

            // ============ Parameters ============
            Some("InvalidInput" | "InvalidArgument") => ProviderError::InvalidParameter {
                param: "request".to_string(),
                detail: raw.message,
            },
            Some("InvalidDomainName") => ProviderError::InvalidParameter {
                param: "name".to_string(),
                detail: raw.message,
            },

            // ============ Quotas ============
            Some("TooManyHostedZones" | "TooManyResourceRecordSets" | "LimitsExceeded") => {
                ProviderError::QuotaExceeded {
                    raw_message: Some(raw.message),
                }
            }

            // ============ Fallback ============
            _ => self.unknown_error(raw),
        }
    }
}
