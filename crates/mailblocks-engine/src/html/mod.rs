//! Block-to-HTML conversion.
//!
//! Output is table-based with inline styles, which is what email clients
//! render reliably. Every user-supplied string is escaped here, at the
//! conversion boundary: consumers such as the editor's stats preview inject the
//! result verbatim and do no validation of their own.

pub mod escape;

pub use escape::{escape_attribute, escape_text, safe_url, sanitize_css_value};

use crate::blocks::{
    Block, BlockContent, ButtonBlock, DividerBlock, HeadingBlock, ImageBlock, SpacerBlock,
    StatsBlock, TextBlock,
};
use crate::models::Template;

const TABLE_ATTRS: &str = r#"role="presentation" width="100%" cellpadding="0" cellspacing="0" border="0""#;
const MUTED_TEXT_COLOR: &str = "#6b7280";

/// Convert a single block to an HTML fragment
pub fn render_block_to_html(block: &Block) -> String {
    match &block.content {
        BlockContent::Heading(heading) => heading_html(heading),
        BlockContent::Text(text) => text_html(text),
        BlockContent::Button(button) => button_html(button),
        BlockContent::Image(image) => image_html(image),
        BlockContent::Divider(divider) => divider_html(divider),
        BlockContent::Spacer(spacer) => spacer_html(spacer),
        BlockContent::Stats(stats) => stats_html(stats),
    }
}

/// Convert a whole template to a standalone HTML email document
pub fn render_template_to_html(template: &Template) -> String {
    let settings = template.settings();
    let background = sanitize_css_value(&settings.background_color);
    let content_background = sanitize_css_value(&settings.content_background_color);
    let font_family = sanitize_css_value(&settings.font_family);
    let width = settings.width;

    let body = template
        .blocks()
        .iter()
        .map(render_block_to_html)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body style="margin:0;padding:0;background-color:{background};">
<table {TABLE_ATTRS} style="background-color:{background};">
<tr><td align="center" style="padding:24px 0;">
<table role="presentation" width="{width}" cellpadding="0" cellspacing="0" border="0" style="width:{width}px;max-width:100%;background-color:{content_background};font-family:{font_family};">
<tr><td style="padding:0 24px;">
{body}
</td></tr>
</table>
</td></tr>
</table>
</body>
</html>
"#,
        title = escape_text(&template.name),
    )
}

fn divider_html(divider: &DividerBlock) -> String {
    format!(
        r#"<table {TABLE_ATTRS}><tr><td style="padding:{margin}px 0;"><div style="border-top:{height}px solid {color};height:0;line-height:0;font-size:0;">&nbsp;</div></td></tr></table>"#,
        margin = divider.margin,
        height = divider.height,
        color = sanitize_css_value(&divider.color),
    )
}

fn spacer_html(spacer: &SpacerBlock) -> String {
    format!(
        r#"<table {TABLE_ATTRS}><tr><td style="height:{height}px;line-height:{height}px;font-size:0;background-color:{background};">&nbsp;</td></tr></table>"#,
        height = spacer.height,
        background = sanitize_css_value(&spacer.background_color),
    )
}

fn stats_html(stats: &StatsBlock) -> String {
    let columns = stats.items.len().max(1);
    let accent = sanitize_css_value(&stats.accent_color);

    let mut html = format!(
        r#"<table {TABLE_ATTRS} style="background-color:{background};">"#,
        background = sanitize_css_value(&stats.background_color),
    );

    if let Some(title) = stats.title.as_deref().filter(|t| !t.trim().is_empty()) {
        html.push_str(&format!(
            r#"<tr><td colspan="{columns}" style="padding:16px 16px 0;font-size:13px;font-weight:bold;letter-spacing:0.05em;text-transform:uppercase;text-align:center;color:{MUTED_TEXT_COLOR};">{title}</td></tr>"#,
            title = escape_text(title),
        ));
    }

    if !stats.items.is_empty() {
        let cell_width = 100 / columns;
        html.push_str("<tr>");
        for item in &stats.items {
            html.push_str(&format!(
                r#"<td width="{cell_width}%" style="padding:16px;text-align:center;vertical-align:top;"><div style="font-size:28px;font-weight:bold;line-height:1.2;color:{accent};">{value}</div><div style="padding-top:4px;font-size:13px;color:{MUTED_TEXT_COLOR};">{label}</div></td>"#,
                value = escape_text(&item.value),
                label = escape_text(&item.label),
            ));
        }
        html.push_str("</tr>");
    }

    html.push_str("</table>");
    html
}

fn heading_html(heading: &HeadingBlock) -> String {
    let level = heading.level();
    format!(
        r#"<h{level} style="margin:0;padding:8px 0;font-size:{size}px;line-height:1.3;color:{color};text-align:{align};">{text}</h{level}>"#,
        size = heading.font_size(),
        color = sanitize_css_value(&heading.color),
        align = heading.align.as_css(),
        text = escape_text(&heading.text),
    )
}

fn text_html(text: &TextBlock) -> String {
    let lines = text
        .text
        .lines()
        .map(escape_text)
        .collect::<Vec<_>>()
        .join("<br>");
    format!(
        r#"<p style="margin:0;padding:8px 0;font-size:{size}px;line-height:1.5;color:{color};text-align:{align};">{lines}</p>"#,
        size = text.font_size,
        color = sanitize_css_value(&text.color),
        align = text.align.as_css(),
    )
}

fn button_html(button: &ButtonBlock) -> String {
    format!(
        r#"<table {TABLE_ATTRS}><tr><td align="{align}" style="padding:8px 0;"><table role="presentation" cellpadding="0" cellspacing="0" border="0"><tr><td style="border-radius:6px;background-color:{background};"><a href="{href}" target="_blank" style="display:inline-block;padding:12px 24px;font-size:16px;font-weight:bold;color:{color};text-decoration:none;border-radius:6px;">{label}</a></td></tr></table></td></tr></table>"#,
        align = button.align.as_css(),
        background = sanitize_css_value(&button.background_color),
        href = safe_url(&button.href),
        color = sanitize_css_value(&button.text_color),
        label = escape_text(&button.label),
    )
}

fn image_html(image: &ImageBlock) -> String {
    let align = image.align.as_css();
    if image.src.trim().is_empty() {
        return format!(r#"<table {TABLE_ATTRS}><tr><td align="{align}"></td></tr></table>"#);
    }

    let (width_attr, width_style) = match image.width {
        Some(width) => (width.to_string(), format!("width:{width}px;")),
        None => ("100%".to_string(), "width:100%;".to_string()),
    };
    let img = format!(
        r#"<img src="{src}" alt="{alt}" width="{width_attr}" style="display:block;border:0;{width_style}max-width:100%;height:auto;">"#,
        src = safe_url(&image.src),
        alt = escape_attribute(&image.alt),
    );
    let content = match image.href.as_deref().filter(|h| !h.trim().is_empty()) {
        Some(href) => format!(
            r#"<a href="{href}" target="_blank">{img}</a>"#,
            href = safe_url(href)
        ),
        None => img,
    };

    format!(r#"<table {TABLE_ATTRS}><tr><td align="{align}" style="padding:8px 0;">{content}</td></tr></table>"#)
}
