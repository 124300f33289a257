use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to find potential matches
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<u16>,
}

impl FindMatchesRequest {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: u16) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Request to propose a match between two users
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMatchRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "target_user_id", rename = "targetUserId")]
    pub target_user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_request_validation() {
        assert!(FindMatchesRequest::new("u1").validate().is_ok());
        assert!(FindMatchesRequest::new("u1").with_limit(100).validate().is_ok());
        assert!(FindMatchesRequest::new("").validate().is_err());
        assert!(FindMatchesRequest::new("u1").with_limit(0).validate().is_err());
        assert!(FindMatchesRequest::new("u1").with_limit(101).validate().is_err());
    }

    #[test]
    fn test_create_request_accepts_snake_case_alias() {
        let req: CreateMatchRequest =
            serde_json::from_str(r#"{ "user_id": "a", "targetUserId": "b" }"#).unwrap();
        assert_eq!(req.user_id, "a");
        assert!(req.validate().is_ok());
    }
}
