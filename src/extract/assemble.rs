//! Shaping extracted card fields into output records.

use super::fields::CardFields;
use crate::models::ArticleRecord;

impl From<CardFields> for ArticleRecord {
    fn from(fields: CardFields) -> Self {
        let (image_url, image_description) = match fields.image {
            Some(image) => (image.url, image.description.unwrap_or_default()),
            None => (String::new(), String::new()),
        };

        ArticleRecord {
            url: fields.link.unwrap_or_default(),
            image_url,
            image_description,
            headline: fields.headline.unwrap_or_default(),
            description: fields.description.unwrap_or_default(),
            tags: fields.tags,
        }
    }
}

/// Append-only collector of article records.
///
/// Cards are pushed in the order the locator found them. Records with
/// neither a link nor a headline are discarded on the way in.
#[derive(Debug, Default)]
pub struct RecordAssembler {
    records: Vec<ArticleRecord>,
    discarded: usize,
}

impl RecordAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one card. Returns whether it was kept.
    pub fn push(&mut self, fields: CardFields) -> bool {
        let record = ArticleRecord::from(fields);
        if record.is_retained() {
            self.records.push(record);
            true
        } else {
            self.discarded += 1;
            false
        }
    }

    /// Number of cards dropped so far.
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    /// Finish assembly.
    pub fn finish(self) -> Box<[ArticleRecord]> {
        self.records.into_boxed_slice()
    }
}
