use serde::{Deserialize, Serialize};

/// An uploaded image as returned by the images API.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Image {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(rename = "ts")]
    pub timestamp: f64,
    pub id: String,
}

/// One page of the image listing. `after` is the opaque cursor of the next page.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ImagesPage {
    #[serde(default)]
    pub after: Option<String>,
    #[serde(default)]
    pub data: Vec<Image>,
}

impl ImagesPage {
    /// Cursor of the following page. Empty cursors count as absent.
    pub fn next_cursor(&self) -> Option<&str> {
        self.after.as_deref().filter(|after| !after.is_empty())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreateImageData {
    pub title: String,
    pub description: String,
    pub url: String,
}

/// Response body of the image hosting upload endpoint.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HostedUpload {
    pub data: HostedImage,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HostedImage {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_with_cursor() {
        let json = r#"{
            "after": "315781349582430416",
            "data": [
                {"title": "Doge", "description": "much wow", "url": "https://i.ibb.co/doge.png", "ts": 1620000000000000, "id": "1"}
            ]
        }"#;
        let page: ImagesPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.next_cursor(), Some("315781349582430416"));
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].timestamp, 1620000000000000.0);
    }

    #[test]
    fn test_fractional_timestamp() {
        let json = r#"{"title": "Cat", "description": "A cat", "url": "https://i.ibb.co/cat.jpg", "ts": 1620000000.5, "id": "2"}"#;
        let image: Image = serde_json::from_str(json).unwrap();
        assert_eq!(image.timestamp, 1620000000.5);
    }

    #[test]
    fn test_page_without_cursor() {
        let page: ImagesPage = serde_json::from_str(r#"{"after": null, "data": []}"#).unwrap();
        assert_eq!(page.next_cursor(), None);

        let page: ImagesPage = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert_eq!(page.next_cursor(), None);

        let page: ImagesPage = serde_json::from_str(r#"{"after": "", "data": []}"#).unwrap();
        assert_eq!(page.next_cursor(), None);
    }

    #[test]
    fn test_create_body_shape() {
        let body = CreateImageData {
            title: "Cat".into(),
            description: "A cat".into(),
            url: "https://i.ibb.co/cat.jpg".into(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"title": "Cat", "description": "A cat", "url": "https://i.ibb.co/cat.jpg"})
        );
    }

    #[test]
    fn test_hosted_upload_ignores_extra_fields() {
        let json = r#"{"data": {"id": "abc", "url": "https://i.ibb.co/abc/cat.jpg", "display_url": "x"}, "success": true, "status": 200}"#;
        let upload: HostedUpload = serde_json::from_str(json).unwrap();
        assert_eq!(upload.data.url, "https://i.ibb.co/abc/cat.jpg");
    }
}
