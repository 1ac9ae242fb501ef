//! Block data model.
//!
//! A [`Block`] is one visual element of an email template. Its content is a
//! closed sum type ([`BlockContent`]) so every render site has to match
//! exhaustively; adding a new kind is a compile error everywhere it is not yet
//! handled.
//!
//! A block never changes kind. Attribute changes go through [`Block::update`],
//! which rejects content of a different kind.

pub mod content;

pub use content::*;

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::editing::EditError;

/// Stable identifier for a block within a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(Uuid);

impl BlockId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for BlockId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Fieldless discriminant of [`BlockContent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Heading,
    Text,
    Button,
    Image,
    Divider,
    Spacer,
    Stats,
}

impl BlockKind {
    /// Every kind, in the order the editor toolbar offers them
    pub const ALL: [BlockKind; 7] = [
        BlockKind::Heading,
        BlockKind::Text,
        BlockKind::Button,
        BlockKind::Image,
        BlockKind::Divider,
        BlockKind::Spacer,
        BlockKind::Stats,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BlockKind::Heading => "Heading",
            BlockKind::Text => "Text",
            BlockKind::Button => "Button",
            BlockKind::Image => "Image",
            BlockKind::Divider => "Divider",
            BlockKind::Spacer => "Spacer",
            BlockKind::Stats => "Stats",
        }
    }

    /// Content a freshly inserted block of this kind starts with
    pub fn default_content(&self) -> BlockContent {
        match self {
            BlockKind::Heading => BlockContent::Heading(HeadingBlock::default()),
            BlockKind::Text => BlockContent::Text(TextBlock::default()),
            BlockKind::Button => BlockContent::Button(ButtonBlock::default()),
            BlockKind::Image => BlockContent::Image(ImageBlock::default()),
            BlockKind::Divider => BlockContent::Divider(DividerBlock::default()),
            BlockKind::Spacer => BlockContent::Spacer(SpacerBlock::default()),
            BlockKind::Stats => BlockContent::Stats(StatsBlock::default()),
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Visual attributes of a block, tagged by kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BlockContent {
    Heading(HeadingBlock),
    Text(TextBlock),
    Button(ButtonBlock),
    Image(ImageBlock),
    Divider(DividerBlock),
    Spacer(SpacerBlock),
    Stats(StatsBlock),
}

impl BlockContent {
    pub fn kind(&self) -> BlockKind {
        match self {
            BlockContent::Heading(_) => BlockKind::Heading,
            BlockContent::Text(_) => BlockKind::Text,
            BlockContent::Button(_) => BlockKind::Button,
            BlockContent::Image(_) => BlockKind::Image,
            BlockContent::Divider(_) => BlockKind::Divider,
            BlockContent::Spacer(_) => BlockKind::Spacer,
            BlockContent::Stats(_) => BlockKind::Stats,
        }
    }
}

/// One visual element of an email template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    pub content: BlockContent,
}

impl Block {
    /// Create a block with a fresh id
    pub fn new(content: BlockContent) -> Self {
        Self {
            id: BlockId::new(),
            content,
        }
    }

    pub fn kind(&self) -> BlockKind {
        self.content.kind()
    }

    /// Replace this block's attributes. The new content must be the same kind.
    pub fn update(&mut self, content: BlockContent) -> Result<(), EditError> {
        let expected = self.kind();
        let found = content.kind();
        if expected != found {
            return Err(EditError::KindMismatch {
                id: self.id,
                expected,
                found,
            });
        }
        self.content = content;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_update_keeps_kind_and_replaces_attributes() {
        let mut block = Block::new(BlockContent::Divider(DividerBlock::default()));
        let id = block.id;

        let updated = BlockContent::Divider(DividerBlock {
            height: 4,
            color: "#ff0000".to_string(),
            margin: 8,
        });
        block.update(updated.clone()).unwrap();

        assert_eq!(block.id, id);
        assert_eq!(block.content, updated);
    }

    #[test]
    fn test_update_rejects_kind_change() {
        let mut block = Block::new(BlockContent::Spacer(SpacerBlock::default()));
        let original = block.content.clone();

        let err = block
            .update(BlockContent::Divider(DividerBlock::default()))
            .unwrap_err();

        assert!(matches!(
            err,
            EditError::KindMismatch {
                expected: BlockKind::Spacer,
                found: BlockKind::Divider,
                ..
            }
        ));
        assert_eq!(block.content, original);
    }

    #[test]
    fn test_default_content_matches_kind() {
        for kind in BlockKind::ALL {
            assert_eq!(kind.default_content().kind(), kind);
        }
    }

    #[test]
    fn test_block_json_uses_type_tag() {
        let json = r##"{
            "id": "5b0b5f0e-3c1c-4d5a-9a43-1f2d3c4b5a69",
            "content": { "type": "spacer", "height": 4, "backgroundColor": "#fff" }
        }"##;

        let block: Block = serde_json::from_str(json).unwrap();

        assert_eq!(block.kind(), BlockKind::Spacer);
        assert_eq!(
            block.content,
            BlockContent::Spacer(SpacerBlock {
                height: 4,
                background_color: "#fff".to_string(),
            })
        );
        assert_eq!(block.id.to_string(), "5b0b5f0e-3c1c-4d5a-9a43-1f2d3c4b5a69");
    }

    #[test]
    fn test_missing_attributes_fall_back_to_defaults() {
        let content: BlockContent = serde_json::from_str(r#"{ "type": "divider" }"#).unwrap();

        assert_eq!(content, BlockContent::Divider(DividerBlock::default()));
    }
}
