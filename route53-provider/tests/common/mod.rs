//! Shared test helpers

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use route53_provider::xml::{ListHostedZonesResponse, from_xml};
use route53_provider::{
    HttpMethod, RequestPayload, Route53Credentials, Transport, TransportConfig, create_transport,
};

/// Skip the test when any of the environment variables is missing.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("Skipping test: missing environment variable {}", $var);
                return;
            }
        )+
    };
}

/// Assert that an `Option` is `Some` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// Assert that a `Result` is `Ok` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Unique record name under the test zone
pub fn generate_test_record_name(zone_name: &str) -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}.{}", &uuid.to_string()[..8], fqdn(zone_name))
}

/// `example.com` -> `example.com.`
pub fn fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.")
    }
}

/// Test context: a live transport plus the zone under test
pub struct TestContext {
    pub transport: Arc<dyn Transport>,
    pub zone_name: String,
    pub zone_id: Option<String>,
}

impl TestContext {
    pub fn from_env() -> Option<Self> {
        let credentials = Route53Credentials::from_env().ok()?;
        let zone_name = env::var("TEST_ZONE_NAME").ok()?;
        let transport = create_transport(credentials, TransportConfig::default()).ok()?;

        Some(Self {
            transport,
            zone_name,
            zone_id: None,
        })
    }

    /// Find the test zone's id (first page of the listing only)
    pub async fn find_zone_id(&mut self) -> Option<String> {
        if let Some(id) = &self.zone_id {
            return Some(id.clone());
        }

        let body = self
            .transport
            .send("hostedzone", RequestPayload::Empty, HttpMethod::Get)
            .await
            .ok()?;
        let page: ListHostedZonesResponse = from_xml(&body).ok()?;
        let wanted = fqdn(&self.zone_name);
        let id = page
            .hosted_zones
            .items
            .into_iter()
            .find(|z| z.name == wanted)?
            .id
            .trim_start_matches("/hostedzone/")
            .to_string();

        self.zone_id = Some(id.clone());
        Some(id)
    }
}
