/// How image sources are turned into the URL the browser actually loads.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ImageDelivery {
    /// Load the source untouched.
    Direct,
    /// Route every source through a resizing endpoint.
    Optimizer { endpoint: String, quality: u8 },
}

pub const DEFAULT_QUALITY: u8 = 75;

impl Default for ImageDelivery {
    fn default() -> Self {
        ImageDelivery::Direct
    }
}

impl ImageDelivery {
    /// A missing or blank endpoint means images are loaded directly.
    pub fn from_endpoint(endpoint: Option<String>) -> Self {
        match endpoint {
            Some(endpoint) if !endpoint.trim().is_empty() => ImageDelivery::Optimizer {
                endpoint: endpoint.trim().to_string(),
                quality: DEFAULT_QUALITY,
            },
            _ => ImageDelivery::Direct,
        }
    }

    pub fn url(&self, src: &str, width: u32) -> String {
        match self {
            ImageDelivery::Direct => src.to_string(),
            // Inline and object URLs cannot be fetched by the optimizer.
            ImageDelivery::Optimizer { .. } if src.starts_with("data:") || src.starts_with("blob:") => {
                src.to_string()
            }
            ImageDelivery::Optimizer { endpoint, quality } => format!(
                "{}?url={}&w={}&q={}",
                endpoint,
                urlencoding::encode(src),
                width,
                quality
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_passes_through() {
        let delivery = ImageDelivery::Direct;
        assert_eq!(
            delivery.url("https://example.com/a.png", 112),
            "https://example.com/a.png"
        );
    }

    #[test]
    fn optimizer_encodes_source() {
        let delivery = ImageDelivery::from_endpoint(Some(String::from("/_image")));
        assert_eq!(
            delivery.url("https://example.com/a b.png", 112),
            "/_image?url=https%3A%2F%2Fexample.com%2Fa%20b.png&w=112&q=75"
        );
    }

    #[test]
    fn optimizer_skips_inline_images() {
        let delivery = ImageDelivery::from_endpoint(Some(String::from("/_image")));
        assert_eq!(delivery.url("data:image/png;base64,AAAA", 112), "data:image/png;base64,AAAA");
    }

    #[test]
    fn from_endpoint() {
        assert_eq!(ImageDelivery::from_endpoint(None), ImageDelivery::Direct);
        assert_eq!(
            ImageDelivery::from_endpoint(Some(String::from("  "))),
            ImageDelivery::Direct
        );
        assert_eq!(
            ImageDelivery::from_endpoint(Some(String::from("https://cdn.example.com/resize"))),
            ImageDelivery::Optimizer {
                endpoint: String::from("https://cdn.example.com/resize"),
                quality: 75,
            }
        );
    }
}
