use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Announcement Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    #[serde(default)]
    pub body: String,
    /// Entity reference of the publisher, e.g. `group:default/platform`
    pub publisher: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAnnouncementRequest {
    pub title: String,
    pub excerpt: String,
    pub body: String,
    pub publisher: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAnnouncementRequest {
    pub title: String,
    pub excerpt: String,
    pub body: String,
    pub publisher: String,
}

/// Query parameters for listing announcements. The default value is the
/// unfiltered listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnouncementsFilter {
    pub max: Option<u32>,
    pub page: Option<u32>,
}

impl AnnouncementsFilter {
    /// Render as a query string including the leading `?`, or an empty
    /// string when no field is set.
    pub fn to_query(&self) -> String {
        let params: Vec<String> = [("max", self.max), ("page", self.page)]
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| format!("{}={}", key, v)))
            .collect();

        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

// ============================================================================
// Alert Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertMessage {
    pub message: String,
    pub severity: AlertSeverity,
}

impl AlertMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: AlertSeverity::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: AlertSeverity::Error,
        }
    }
}

// ============================================================================
// API Response Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSuccess<T> {
    pub data: T,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_announcement_from_json() {
        let json = r#"{
            "id": "a1",
            "title": "Maintenance",
            "excerpt": "Short outage tonight",
            "publisher": "group:default/platform",
            "created_at": "2024-03-01T10:00:00.000+00:00"
        }"#;

        let announcement: Announcement = serde_json::from_str(json).unwrap();
        assert_eq!(announcement.id, "a1");
        assert_eq!(announcement.body, "");
        assert_eq!(
            announcement.created_at,
            Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_list_keeps_server_order() {
        let json = r#"{"data": [
            {"id": "2", "title": "B", "excerpt": "", "publisher": "user:b", "created_at": "2024-01-02T00:00:00Z"},
            {"id": "1", "title": "A", "excerpt": "", "publisher": "user:a", "created_at": "2024-01-03T00:00:00Z"}
        ]}"#;

        let list: ApiSuccess<Vec<Announcement>> = serde_json::from_str(json).unwrap();
        let ids: Vec<&str> = list.data.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_filter_query() {
        assert_eq!(AnnouncementsFilter::default().to_query(), "");
        assert_eq!(
            AnnouncementsFilter { max: Some(5), page: None }.to_query(),
            "?max=5"
        );
        assert_eq!(
            AnnouncementsFilter { max: Some(5), page: Some(2) }.to_query(),
            "?max=5&page=2"
        );
    }

    #[test]
    fn test_alert_severity_serialization() {
        let alert = AlertMessage::error("server unavailable");
        let json = serde_json::to_string(&alert).unwrap();
        assert_eq!(json, r#"{"message":"server unavailable","severity":"error"}"#);
    }
}
