use poem_openapi::{payload::PlainText, OpenApi, Tags};

/// Liveness API
pub struct HealthApi;

/// API tags for liveness endpoints
#[derive(Tags)]
enum ApiTags {
    /// Liveness endpoints
    Health,
}

#[OpenApi]
impl HealthApi {
    /// Liveness check
    ///
    /// Returns a fixed string so deploy probes can tell the process is up
    #[oai(path = "/", method = "get", tag = "ApiTags::Health")]
    async fn index(&self) -> PlainText<String> {
        PlainText("WhereIsIt server is running".to_string())
    }
}
