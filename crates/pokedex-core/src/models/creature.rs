use std::fmt;
use std::hash::{Hash, Hasher};

use image::{GenericImageView, ImageFormat};

/// Image bytes that are known to decode.
#[derive(Clone, PartialEq, Eq)]
pub struct Image {
    bytes: Vec<u8>,
    format: ImageFormat,
    width: u32,
    height: u32,
}

impl Image {
    /// Validate raw bytes as an image of any supported encoding.
    ///
    /// Returns `None` for empty input, an unrecognised format, or data that
    /// fails to decode.
    pub fn decode(bytes: Vec<u8>) -> Option<Self> {
        if bytes.is_empty() {
            return None;
        }
        let format = image::guess_format(&bytes).ok()?;
        let decoded = image::load_from_memory_with_format(&bytes, format).ok()?;
        let (width, height) = decoded.dimensions();
        Some(Self {
            bytes,
            format,
            width,
            height,
        })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("format", &self.format)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// A fully resolved creature: every required field and both images present.
///
/// Two records are equal when their ids are equal, regardless of the other
/// fields.
#[derive(Debug, Clone)]
pub struct CreatureRecord {
    id: u32,
    name: String,
    height: Option<u32>,
    weight: Option<u32>,
    thumbnail: Image,
    artwork: Image,
}

impl CreatureRecord {
    pub fn new(
        id: u32,
        name: String,
        height: Option<u32>,
        weight: Option<u32>,
        thumbnail: Image,
        artwork: Image,
    ) -> Self {
        Self {
            id,
            name,
            height,
            weight,
            thumbnail,
            artwork,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Height in decimetres.
    pub fn height(&self) -> Option<u32> {
        self.height
    }

    /// Weight in hectograms.
    pub fn weight(&self) -> Option<u32> {
        self.weight
    }

    pub fn thumbnail(&self) -> &Image {
        &self.thumbnail
    }

    pub fn artwork(&self) -> &Image {
        &self.artwork
    }

    /// Height and weight labels for display, only when both are known.
    pub fn measurements(&self) -> Option<(String, String)> {
        match (self.height, self.weight) {
            (Some(h), Some(w)) => Some((format!("{h} dm"), format!("{w} hg"))),
            _ => None,
        }
    }
}

impl PartialEq for CreatureRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CreatureRecord {}

impl Hash for CreatureRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::new(width, height);
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    fn record(id: u32, name: &str, height: Option<u32>, weight: Option<u32>) -> CreatureRecord {
        let thumb = Image::decode(png(2, 2)).unwrap();
        let art = Image::decode(png(4, 4)).unwrap();
        CreatureRecord::new(id, name.into(), height, weight, thumb, art)
    }

    #[test]
    fn decode_valid_png() {
        let image = Image::decode(png(3, 5)).unwrap();
        assert_eq!(image.format(), ImageFormat::Png);
        assert_eq!((image.width(), image.height()), (3, 5));
        assert!(!image.bytes().is_empty());
    }

    #[test]
    fn decode_rejects_empty() {
        assert!(Image::decode(Vec::new()).is_none());
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(Image::decode(b"<html>not found</html>".to_vec()).is_none());
    }

    #[test]
    fn decode_rejects_truncated_png() {
        let mut bytes = png(8, 8);
        bytes.truncate(bytes.len() / 2);
        assert!(Image::decode(bytes).is_none());
    }

    #[test]
    fn equality_is_by_id() {
        let a = record(25, "Pikachu", Some(4), Some(60));
        let b = record(25, "Something else", None, None);
        let c = record(26, "Pikachu", Some(4), Some(60));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn measurements_need_both_values() {
        let full = record(1, "Bulbasaur", Some(7), Some(69));
        assert_eq!(
            full.measurements(),
            Some(("7 dm".to_string(), "69 hg".to_string()))
        );
        assert!(record(1, "Bulbasaur", Some(7), None).measurements().is_none());
        assert!(record(1, "Bulbasaur", None, Some(69)).measurements().is_none());
    }
}
