use alloc::{format, string::String};

use crate::bitmap::PackedBitmap;

/// Places the array in flash on AVR style toolchains.
pub const PROGMEM: &str = "PROGMEM";
pub const VALUES_PER_LINE: usize = 16;
pub const IDENTIFIER_PREFIX: &str = "epd_bitmap_";

/// Metadata rendered above a byte array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockHeader<'a> {
    /// A thresholded image, named after its file.
    Image { label: &'a str },
    /// Frame `index` of a dithered cross-fade of `total` frames.
    BlendFrame { index: usize, total: usize },
}

impl BlockHeader<'_> {
    pub fn comment(&self, width: usize, height: usize) -> String {
        match *self {
            BlockHeader::Image { label } => {
                format!("// '{}', {}x{}px", strip_extension(label), width, height)
            }
            BlockHeader::BlendFrame { index, total } => format!(
                "// Dithered blend frame {}/{}, {}x{}px",
                index + 1,
                total,
                width,
                height
            ),
        }
    }

    pub fn identifier(&self) -> String {
        match *self {
            BlockHeader::Image { label } => identifier(label),
            BlockHeader::BlendFrame { index, .. } => {
                format!("{IDENTIFIER_PREFIX}dithered_blend_{index}")
            }
        }
    }
}

/// Drops a trailing `.ext`, as long as the extension is not empty and does
/// not cross a path separator.
pub fn strip_extension(label: &str) -> &str {
    match label.rfind('.') {
        Some(pos) if pos + 1 < label.len() && !label[pos + 1..].contains('/') => &label[..pos],
        _ => label,
    }
}

/// C identifier for a labelled bitmap, e.g. `logo-2.png` -> `epd_bitmap_logo_2`.
///
/// Every other character becomes one `_` per UTF-16 code unit, so characters
/// outside the BMP turn into `__`, the same names earlier web-based exports
/// produced.
pub fn identifier(label: &str) -> String {
    let mut ident = String::from(IDENTIFIER_PREFIX);
    for ch in strip_extension(label).chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            ident.push(ch);
        } else {
            ident.extend(core::iter::repeat_n('_', ch.len_utf16()));
        }
    }
    ident
}

/// Appends one complete declaration, comment line through `};`.
pub fn write_block(out: &mut String, bitmap: &PackedBitmap, header: &BlockHeader) {
    out.push_str(&header.comment(bitmap.width(), bitmap.height()));
    out.push('\n');
    out.push_str(&format!(
        "const unsigned char {} [] {} = {{\n\t",
        header.identifier(),
        PROGMEM
    ));
    let bytes = bitmap.bytes();
    for (i, byte) in bytes.iter().enumerate() {
        out.push_str(&format!("0x{byte:02x}"));
        if i + 1 < bytes.len() {
            out.push_str(", ");
        }
        if (i + 1) % VALUES_PER_LINE == 0 {
            out.push_str("\n\t");
        }
    }
    out.push_str("\n};");
}

pub fn render_block(bitmap: &PackedBitmap, header: &BlockHeader) -> String {
    let mut out = String::new();
    write_block(&mut out, bitmap, header);
    out
}

/// Final text handed to the firmware build, ready to be `#include`d.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputArtifact {
    text: String,
}

impl OutputArtifact {
    pub fn single(bitmap: &PackedBitmap, label: &str) -> Self {
        Self {
            text: render_block(bitmap, &BlockHeader::Image { label }),
        }
    }

    /// Concatenates frame blocks in the order given, each followed by a blank line.
    pub fn blend_frames<'a>(frames: impl IntoIterator<Item = &'a PackedBitmap>, total: usize) -> Self {
        let mut text = String::new();
        for (index, bitmap) in frames.into_iter().enumerate() {
            write_block(&mut text, bitmap, &BlockHeader::BlendFrame { index, total });
            text.push_str("\n\n");
        }
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}
