//! Mock GitLab endpoints.

use super::{Test, FILES_PATH, TOKEN, VARIABLES_PATH};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

impl Test {
    /// Serve `body` as the variables listing to authenticated requests.
    pub async fn mock_variables(&self, body: &str) {
        self.mock_variables_response(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
            .await;
    }

    /// Answer authenticated variables listing requests with `response`.
    pub async fn mock_variables_response(&self, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(VARIABLES_PATH))
            .and(header("PRIVATE-TOKEN", TOKEN))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Serve `body` for the already encoded file path on the `main` branch.
    pub async fn mock_file(&self, encoded: &str, body: &str) {
        self.mock_file_response(
            encoded,
            ResponseTemplate::new(200).set_body_raw(body, "application/json"),
        )
        .await;
    }

    /// Answer authenticated requests for the encoded file path with `response`.
    pub async fn mock_file_response(&self, encoded: &str, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(format!("{}{}", FILES_PATH, encoded)))
            .and(query_param("ref", "main"))
            .and(header("PRIVATE-TOKEN", TOKEN))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }
}
