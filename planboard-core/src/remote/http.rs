//! HTTP client for the calendar backend.
//!
//! The backend is a thin proxy in front of the actual calendar servers. It
//! speaks JSON with the `{status, data|error}` envelope on every route, so
//! transport failures, HTTP failures and application errors all collapse
//! into [`BoardError`] here.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use tokio::time::timeout;

use crate::error::{BoardError, BoardResult};
use crate::remote::protocol::{
    BackendCommand, ConfirmedEvent, CreateEvent, DeleteEvent, EventDraft, EventPatch,
    EventQueryResponse, ListCalendars, QueryEvents, RemoteCalendar, Response, UpdateEvent,
};
use crate::remote::source::CalendarSource;
use crate::window::DateWindow;

const BACKEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Calendar backend reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCalendarSource {
    http: reqwest::Client,
    base_url: String,
}

impl HttpCalendarSource {
    pub fn new(base_url: &str) -> Self {
        HttpCalendarSource {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Call a typed backend command and return the result.
    ///
    /// The response type is inferred from the command's associated type,
    /// ensuring compile-time type safety.
    pub async fn call<C: BackendCommand>(&self, cmd: C) -> BoardResult<C::Response> {
        timeout(BACKEND_TIMEOUT, self.call_raw(cmd))
            .await
            .map_err(|_| BoardError::Timeout(BACKEND_TIMEOUT.as_secs()))?
    }

    /// Low-level call that sends a command and unwraps the response envelope.
    async fn call_raw<C: BackendCommand>(&self, cmd: C) -> BoardResult<C::Response> {
        let url = format!("{}{}", self.base_url, cmd.path());

        let mut request = self.http.request(C::method(), &url);
        if matches!(C::method(), Method::POST | Method::PATCH) {
            request = request.json(&cmd);
        }

        let response = request
            .send()
            .await
            .map_err(|e| BoardError::Remote(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BoardError::Remote(format!(
                "Backend returned HTTP {} for {}",
                status, url
            )));
        }

        let envelope: Response<C::Response> = response
            .json()
            .await
            .map_err(|e| BoardError::Remote(format!("Failed to parse response: {}", e)))?;

        match envelope {
            Response::Success { data } => Ok(data),
            Response::Error { error } => Err(BoardError::Remote(error)),
        }
    }
}

#[async_trait]
impl CalendarSource for HttpCalendarSource {
    async fn list_calendars(&self) -> BoardResult<Vec<RemoteCalendar>> {
        self.call(ListCalendars).await
    }

    async fn query_events(
        &self,
        calendars: &[String],
        window: DateWindow,
    ) -> BoardResult<EventQueryResponse> {
        self.call(QueryEvents {
            calendars: calendars.to_vec(),
            from: window.from,
            to: window.to,
        })
        .await
    }

    async fn create_event(
        &self,
        calendar_url: &str,
        draft: &EventDraft,
    ) -> BoardResult<ConfirmedEvent> {
        self.call(CreateEvent {
            calendar_url: calendar_url.to_string(),
            draft: draft.clone(),
        })
        .await
    }

    async fn update_event(&self, uid: &str, patch: &EventPatch) -> BoardResult<ConfirmedEvent> {
        self.call(UpdateEvent {
            uid: uid.to_string(),
            patch: patch.clone(),
        })
        .await
    }

    async fn delete_event(&self, uid: &str) -> BoardResult<bool> {
        let ack = self
            .call(DeleteEvent {
                uid: uid.to_string(),
            })
            .await?;
        Ok(ack.success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_calendars_unwraps_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/calendars"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "success",
                "data": [
                    {"url": "https://cal.example/work", "name": "Work", "color": "#ff0000"},
                    {"url": "https://cal.example/home", "name": "Home"},
                ],
            })))
            .mount(&server)
            .await;

        let source = HttpCalendarSource::new(&server.uri());
        let calendars = source.list_calendars().await.unwrap();
        assert_eq!(calendars.len(), 2);
        assert_eq!(calendars[0].name, "Work");
        assert_eq!(calendars[1].color, None);
    }

    #[tokio::test]
    async fn test_error_envelope_becomes_remote_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/calendars"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "error",
                "error": "caldav upstream unreachable",
            })))
            .mount(&server)
            .await;

        let source = HttpCalendarSource::new(&server.uri());
        let err = source.list_calendars().await.unwrap_err();
        assert!(err.to_string().contains("caldav upstream unreachable"));
    }

    #[tokio::test]
    async fn test_http_failure_becomes_remote_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/calendars"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let source = HttpCalendarSource::new(&server.uri());
        let err = source.list_calendars().await.unwrap_err();
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn test_query_posts_calendars_and_window() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/events/query"))
            .and(body_json(serde_json::json!({
                "calendars": ["https://cal.example/work"],
                "from": "2025-06-01",
                "to": "2025-06-30",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "success",
                "data": {
                    "lanes": [{"id": "lane-1", "name": "Work"}],
                    "items": [{
                        "id": "evt-1",
                        "calendar_url": "https://cal.example/work",
                        "title": "Standup",
                        "start": "2025-06-02T09:00:00Z",
                        "end": "2025-06-02T09:15:00Z",
                    }],
                },
            })))
            .mount(&server)
            .await;

        let source = HttpCalendarSource::new(&server.uri());
        let window = DateWindow::new(
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
        );
        let response = source
            .query_events(&["https://cal.example/work".to_string()], window)
            .await
            .unwrap();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].title, "Standup");
    }

    #[tokio::test]
    async fn test_delete_reports_backend_refusal() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/events/evt-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "success",
                "data": {"success": false},
            })))
            .mount(&server)
            .await;

        let source = HttpCalendarSource::new(&server.uri());
        assert!(!source.delete_event("evt-1").await.unwrap());
    }
}
