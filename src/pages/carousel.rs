use serde::Serialize;
use serde_json::json;
use url::Url;

use crate::content::GalleryItem;

/// Manual carousel over a fixed item list, wrapping at both ends
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    items: Vec<T>,
    index: usize,
}

impl<T> Carousel<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, index: 0 }
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Previous/next controls only make sense with more than one item
    pub fn has_controls(&self) -> bool {
        self.items.len() > 1
    }

    pub fn next(&mut self) {
        if !self.items.is_empty() {
            self.index = (self.index + 1) % self.items.len();
        }
    }

    pub fn previous(&mut self) {
        if !self.items.is_empty() {
            self.index = (self.index + self.items.len() - 1) % self.items.len();
        }
    }
}

/// What a gallery slot displays
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Media {
    Video { embed_url: String },
    Image { src: String },
}

impl Media {
    /// Videos take priority over images; an item with neither shows nothing
    pub fn from_item(item: &GalleryItem) -> Option<Media> {
        if let Some(video) = item.video_url {
            return Some(Media::Video {
                embed_url: to_embed_url(video),
            });
        }
        item.src.map(|src| Media::Image {
            src: src.to_string(),
        })
    }
}

/// Convert a YouTube watch or short link into its embeddable form.
/// Any other URL, including one that is already an embed, comes back as is.
pub fn to_embed_url(raw: &str) -> String {
    let parsed = match Url::parse(raw) {
        Ok(url) => url,
        Err(_) => return raw.to_string(),
    };
    let host = parsed.host_str().unwrap_or_default();

    let video_id = if host == "youtube.com" || host.ends_with(".youtube.com") {
        if parsed.path() == "/watch" {
            parsed
                .query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.into_owned())
        } else {
            None
        }
    } else if host == "youtu.be" {
        parsed
            .path_segments()
            .and_then(|mut segments| segments.next())
            .map(str::to_string)
    } else {
        None
    };

    match video_id {
        Some(id) if !id.is_empty() => format!("https://www.youtube.com/embed/{}", id),
        _ => raw.to_string(),
    }
}

impl Carousel<GalleryItem> {
    /// Template context for the current slide; null when empty
    pub fn context(&self) -> serde_json::Value {
        let item = match self.current() {
            Some(item) => item,
            None => return serde_json::Value::Null,
        };
        json!({
            "index": self.index + 1,
            "total": self.items.len(),
            "controls": self.has_controls(),
            "media": Media::from_item(item),
            "description": item.description,
            "citation": item.citation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::gallery::{ERA_B_GALLERY, ERA_C_GALLERY};

    #[test]
    fn test_wraps_both_ends() {
        let mut carousel = Carousel::new(vec!['a', 'b', 'c']);
        carousel.previous();
        assert_eq!(carousel.current(), Some(&'c'));
        carousel.next();
        assert_eq!(carousel.current(), Some(&'a'));
        carousel.next();
        carousel.next();
        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_controls_need_two_items() {
        let mut single = Carousel::new(vec![1]);
        assert!(!single.has_controls());
        single.next();
        assert_eq!(single.current(), Some(&1));

        let mut empty: Carousel<u8> = Carousel::new(Vec::new());
        empty.next();
        empty.previous();
        assert!(empty.current().is_none());
        assert!(!empty.has_controls());
    }

    #[test]
    fn test_embed_url_conversion() {
        assert_eq!(
            to_embed_url("https://www.youtube.com/watch?v=mKAIL8DDemg"),
            "https://www.youtube.com/embed/mKAIL8DDemg"
        );
        assert_eq!(
            to_embed_url("https://youtube.com/watch?v=dLQ2tZEH6G0&t=42s#comments"),
            "https://www.youtube.com/embed/dLQ2tZEH6G0"
        );
        assert_eq!(
            to_embed_url("https://youtu.be/dLQ2tZEH6G0?t=10"),
            "https://www.youtube.com/embed/dLQ2tZEH6G0"
        );
    }

    #[test]
    fn test_other_urls_unchanged() {
        let embed = "https://www.youtube.com/embed/mKAIL8DDemg";
        assert_eq!(to_embed_url(embed), embed);
        assert_eq!(to_embed_url("https://vimeo.com/12345"), "https://vimeo.com/12345");
        assert_eq!(to_embed_url("https://www.youtube.com/watch"), "https://www.youtube.com/watch");
        assert_eq!(to_embed_url("not a url"), "not a url");
    }

    #[test]
    fn test_media_prefers_video() {
        let video = ERA_B_GALLERY.iter().find(|i| i.video_url.is_some()).unwrap();
        assert_eq!(
            Media::from_item(video),
            Some(Media::Video {
                embed_url: "https://www.youtube.com/embed/mKAIL8DDemg".to_string()
            })
        );

        let image = &ERA_C_GALLERY[0];
        assert_eq!(
            Media::from_item(image),
            Some(Media::Image { src: "/C.3.1.png".to_string() })
        );
    }
}
