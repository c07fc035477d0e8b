use serde::Deserialize;
use validator::Validate;

use crate::errors::AppError;

/// Validated field set for a video insert.
pub struct VideoFields {
    pub title: String,
    pub video_length: String,
    pub youtube_display_name: String,
    pub youtube_url: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateVideoBody {
    #[validate(required, length(min = 1, max = 30))]
    pub title: Option<String>,
    #[validate(required, length(min = 1))]
    pub video_length: Option<String>,
    #[validate(required, length(min = 3, max = 50))]
    pub youtube_display_name: Option<String>,
    pub youtube_url: Option<String>,
    #[validate(required)]
    pub tags: Option<Vec<String>>,
}

impl CreateVideoBody {
    /// Validates presence and bounds, then unwraps into the insert shape.
    /// Relational existence checks stay in the core.
    pub fn into_parts(self) -> Result<VideoFields, AppError> {
        self.validate()?;
        let (Some(title), Some(video_length), Some(youtube_display_name), Some(tags)) = (
            self.title,
            self.video_length,
            self.youtube_display_name,
            self.tags,
        ) else {
            return Err(AppError::Validation("missing required field".to_string()));
        };
        validate_tags(&tags)?;
        Ok(VideoFields {
            title,
            video_length,
            youtube_display_name,
            youtube_url: self.youtube_url,
            tags,
        })
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateVideoBody {
    #[validate(length(min = 1, max = 30))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub video_length: Option<String>,
    #[validate(length(min = 3, max = 50))]
    pub youtube_display_name: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl UpdateVideoBody {
    pub fn has_recognized_field(&self) -> bool {
        self.title.is_some()
            || self.video_length.is_some()
            || self.youtube_display_name.is_some()
            || self.tags.is_some()
    }
}

/// Tags must be non-empty and each tag alphanumeric.
pub fn validate_tags(tags: &[String]) -> Result<(), AppError> {
    if tags.is_empty() {
        return Err(AppError::Validation(
            "'tags' must contain at least one tag".to_string(),
        ));
    }
    if let Some(bad) = tags
        .iter()
        .find(|t| t.is_empty() || !t.chars().all(|c| c.is_ascii_alphanumeric()))
    {
        return Err(AppError::Validation(format!(
            "tag '{bad}' must be alphanumeric"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_body() -> CreateVideoBody {
        CreateVideoBody {
            title: Some("test".to_string()),
            video_length: Some("03:30".to_string()),
            youtube_display_name: Some("tester".to_string()),
            youtube_url: None,
            tags: Some(vec!["test1".to_string(), "test2".to_string()]),
        }
    }

    #[test]
    fn test_valid_body_passes() {
        assert!(valid_body().into_parts().is_ok());
    }

    #[test]
    fn test_missing_title_rejected() {
        let mut body = valid_body();
        body.title = None;
        assert!(body.into_parts().is_err());
    }

    #[test]
    fn test_title_over_thirty_chars_rejected() {
        let mut body = valid_body();
        body.title = Some("x".repeat(31));
        assert!(body.into_parts().is_err());
    }

    #[test]
    fn test_short_display_name_rejected() {
        let mut body = valid_body();
        body.youtube_display_name = Some("ab".to_string());
        assert!(body.into_parts().is_err());
    }

    #[test]
    fn test_empty_tags_rejected() {
        assert!(validate_tags(&[]).is_err());
    }

    #[test]
    fn test_non_alphanumeric_tag_rejected() {
        assert!(validate_tags(&["ok".to_string(), "not ok!".to_string()]).is_err());
    }

    #[test]
    fn test_alphanumeric_tags_pass() {
        assert!(validate_tags(&["foo".to_string(), "bar2".to_string()]).is_ok());
    }

    #[test]
    fn test_update_body_without_recognized_fields() {
        assert!(!UpdateVideoBody::default().has_recognized_field());
        let body = UpdateVideoBody {
            tags: Some(vec!["baz".to_string()]),
            ..Default::default()
        };
        assert!(body.has_recognized_field());
    }
}
