use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use crate::blocks::{
    Align, Block, BlockContent, BlockId, ButtonBlock, DividerBlock, HeadingBlock, SpacerBlock,
    StatsBlock, TextBlock,
};

/// Page-level settings applied around the blocks of a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TemplateSettings {
    /// Content width in pixels
    pub width: u32,
    pub background_color: String,
    pub content_background_color: String,
    pub font_family: String,
}

impl Default for TemplateSettings {
    fn default() -> Self {
        Self {
            width: 600,
            background_color: "#f3f4f6".to_string(),
            content_background_color: "#ffffff".to_string(),
            font_family: "Helvetica, Arial, sans-serif".to_string(),
        }
    }
}

/// An email template: ordered blocks plus page settings
///
/// Blocks are only changed through [`Template::apply`], so the version counter
/// always reflects the number of successful edits since load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub(crate) settings: TemplateSettings,
    #[serde(default)]
    pub(crate) blocks: Vec<Block>,
    #[serde(skip)]
    pub(crate) version: u64,
}

impl Template {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            settings: TemplateSettings::default(),
            blocks: Vec::new(),
            version: 0,
        }
    }

    pub fn with_blocks(mut self, blocks: Vec<Block>) -> Self {
        self.blocks = blocks;
        self
    }

    pub fn with_settings(mut self, settings: TemplateSettings) -> Self {
        self.settings = settings;
        self
    }

    /// A small template showing off the common block kinds
    pub fn starter(name: impl Into<String>) -> Self {
        let name = name.into();
        let blocks = vec![
            Block::new(BlockContent::Heading(HeadingBlock {
                text: name.clone(),
                ..Default::default()
            })),
            Block::new(BlockContent::Text(TextBlock {
                text: "Here is what happened this month.".to_string(),
                ..Default::default()
            })),
            Block::new(BlockContent::Divider(DividerBlock::default())),
            Block::new(BlockContent::Stats(StatsBlock {
                title: Some("Highlights".to_string()),
                ..Default::default()
            })),
            Block::new(BlockContent::Spacer(SpacerBlock::default())),
            Block::new(BlockContent::Button(ButtonBlock {
                label: "Read more".to_string(),
                align: Align::Center,
                ..Default::default()
            })),
        ];
        Self::new(name).with_blocks(blocks)
    }

    /// Parse a template from JSON bytes. Block ids must be unique.
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let text = std::str::from_utf8(bytes)?;
        let template: Template = serde_json::from_str(text)?;
        if let Some(id) = template.duplicate_block_id() {
            anyhow::bail!("block id {id} is used by more than one block");
        }
        Ok(template)
    }

    /// First block id that appears more than once, if any
    pub fn duplicate_block_id(&self) -> Option<BlockId> {
        let mut seen = HashSet::new();
        self.blocks.iter().map(|b| b.id).find(|id| !seen.insert(*id))
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn settings(&self) -> &TemplateSettings {
        &self.settings
    }

    /// Number of successful edits applied since this template was created or loaded
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_roundtrip_preserves_blocks_and_settings() {
        let original = Template::starter("Monthly update").with_settings(TemplateSettings {
            width: 640,
            ..Default::default()
        });

        let json = original.to_json_pretty().unwrap();
        let parsed = Template::from_bytes(json.as_bytes()).unwrap();

        assert_eq!(parsed, original);
    }

    #[test]
    fn test_from_bytes_with_minimal_json() {
        let json = r#"{ "id": "0f8fad5b-d9cb-469f-a165-70867728950e", "name": "Empty" }"#;

        let template = Template::from_bytes(json.as_bytes()).unwrap();

        assert_eq!(template.name, "Empty");
        assert!(template.is_empty());
        assert_eq!(template.settings(), &TemplateSettings::default());
    }

    #[test]
    fn test_from_bytes_rejects_invalid_utf8() {
        assert!(Template::from_bytes(&[0xff, 0xfe]).is_err());
    }

    #[test]
    fn test_from_bytes_rejects_repeated_block_ids() {
        let json = r#"{
            "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
            "name": "Twins",
            "blocks": [
                { "id": "5b0b5f0e-3c7a-4d8e-9a51-0f2d6c1e8b44", "content": { "type": "divider" } },
                { "id": "5b0b5f0e-3c7a-4d8e-9a51-0f2d6c1e8b44", "content": { "type": "spacer" } }
            ]
        }"#;

        let err = Template::from_bytes(json.as_bytes()).unwrap_err();

        assert!(err.to_string().contains("5b0b5f0e-3c7a-4d8e-9a51-0f2d6c1e8b44"));
    }

    #[test]
    fn test_duplicate_block_id_finds_repeat() {
        let block = Block::new(BlockContent::Divider(DividerBlock::default()));
        let twins = Template::new("Twins").with_blocks(vec![block.clone(), block.clone()]);

        assert_eq!(twins.duplicate_block_id(), Some(block.id));
        assert_eq!(Template::starter("Fresh").duplicate_block_id(), None);
    }

    #[test]
    fn test_block_lookup_by_id() {
        let template = Template::starter("Lookup");
        let second = &template.blocks()[1];

        assert_eq!(template.block(second.id), Some(second));
        assert_eq!(template.block(BlockId::new()), None);
    }
}
