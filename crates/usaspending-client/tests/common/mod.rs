#![allow(dead_code)]

use std::net::TcpListener;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use usaspending_client::endpoints::{AgencyApi, AgencyEndpoint};
use usaspending_client::{ApiResult, ClientConfig, UsaSpendingClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path prefix the mock server serves the API under
pub const API_PREFIX: &str = "/api/v2";

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("usaspending_client=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

pub fn fixture(endpoint: AgencyEndpoint) -> &'static str {
    match endpoint {
        AgencyEndpoint::Overview => include_str!("../fixtures/agency.json"),
        AgencyEndpoint::Awards => include_str!("../fixtures/agency_awards.json"),
        AgencyEndpoint::NewAwardsCount => include_str!("../fixtures/new_awards_count.json"),
        AgencyEndpoint::BudgetFunctions => include_str!("../fixtures/budget_function_list.json"),
        AgencyEndpoint::BudgetFunctionCount => {
            include_str!("../fixtures/budget_function_count.json")
        }
        AgencyEndpoint::BudgetaryResources => include_str!("../fixtures/budgetary_resources.json"),
    }
}

/// A mock USAspending server and a client pointed at it
pub struct MockApi {
    pub server: MockServer,
    pub client: UsaSpendingClient,
}

impl MockApi {
    pub async fn start() -> Self {
        Self::start_with(|config| config).await
    }

    pub async fn start_with(configure: impl FnOnce(ClientConfig) -> ClientConfig) -> Self {
        init_tracing();
        let server = MockServer::start().await;
        let config = configure(
            ClientConfig::default()
                .with_base_url(format!("{}{API_PREFIX}", server.uri()))
                .with_timeout(Duration::from_secs(5)),
        );
        let client = UsaSpendingClient::with_config(config).expect("valid client config");
        Self { server, client }
    }

    pub fn agency(&self) -> AgencyApi {
        self.client.agency()
    }

    /// Serve `body` with status 200 for `endpoint` and `id`
    pub async fn mount_json(&self, endpoint: AgencyEndpoint, id: &str, body: &str) {
        self.mount(endpoint, id, ResponseTemplate::new(200).set_body_string(body))
            .await;
    }

    pub async fn mount(&self, endpoint: AgencyEndpoint, id: &str, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(format!("{API_PREFIX}/{}", endpoint.path(id))))
            .respond_with(response.insert_header("content-type", "application/json"))
            .expect(1)
            .mount(&self.server)
            .await;
    }
}

/// Call `endpoint` and discard the decoded value
pub async fn call(api: &AgencyApi, endpoint: AgencyEndpoint, id: &str) -> ApiResult<()> {
    match endpoint {
        AgencyEndpoint::Overview => api.get(id).await.map(drop),
        AgencyEndpoint::Awards => api.awards(id).await.map(drop),
        AgencyEndpoint::NewAwardsCount => api.new_awards_count(id).await.map(drop),
        AgencyEndpoint::BudgetFunctions => api.budget_functions(id).await.map(drop),
        AgencyEndpoint::BudgetFunctionCount => api.budget_function_count(id).await.map(drop),
        AgencyEndpoint::BudgetaryResources => api.budgetary_resources(id).await.map(drop),
    }
}

/// Base URL of a port that nothing is listening on
pub fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}{API_PREFIX}")
}
