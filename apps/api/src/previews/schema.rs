use serde::Deserialize;
use validator::Validate;

use crate::errors::AppError;

/// Validated preview fields. `is_active` is an intent flag: on update it
/// requests the active-preview switch; it never bypasses the engine's
/// first-preview rule on create.
pub struct PreviewFields {
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub is_active: bool,
}

/// Body for preview create and update. The same trio of fields is required
/// in both cases; the preview id only ever comes from the path.
#[derive(Debug, Deserialize, Validate)]
pub struct PreviewBody {
    #[validate(required, length(min = 1, max = 100))]
    pub title: Option<String>,
    #[validate(required, length(min = 1, max = 5000))]
    pub description: Option<String>,
    #[validate(required, length(min = 1))]
    pub thumbnail_url: Option<String>,
    pub is_active: Option<bool>,
}

impl PreviewBody {
    pub fn into_parts(self) -> Result<PreviewFields, AppError> {
        self.validate()?;
        let (Some(title), Some(description), Some(thumbnail_url)) =
            (self.title, self.description, self.thumbnail_url)
        else {
            return Err(AppError::Validation("missing required field".to_string()));
        };
        Ok(PreviewFields {
            title,
            description,
            thumbnail_url,
            is_active: self.is_active.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_body() -> PreviewBody {
        PreviewBody {
            title: Some("Test preview one!".to_string()),
            description: Some("a catchy description".to_string()),
            thumbnail_url: Some("http://placehold.it/500x500".to_string()),
            is_active: None,
        }
    }

    #[test]
    fn test_valid_body_passes() {
        let fields = valid_body().into_parts().unwrap();
        assert!(!fields.is_active);
    }

    #[test]
    fn test_missing_description_rejected() {
        let mut body = valid_body();
        body.description = None;
        assert!(body.into_parts().is_err());
    }

    #[test]
    fn test_empty_thumbnail_rejected() {
        let mut body = valid_body();
        body.thumbnail_url = Some(String::new());
        assert!(body.into_parts().is_err());
    }

    #[test]
    fn test_title_over_limit_rejected() {
        let mut body = valid_body();
        body.title = Some("x".repeat(101));
        assert!(body.into_parts().is_err());
    }

    #[test]
    fn test_active_intent_carried() {
        let mut body = valid_body();
        body.is_active = Some(true);
        assert!(body.into_parts().unwrap().is_active);
    }
}
