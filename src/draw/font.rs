//! Font descriptor for text rendering.

/// Font size used for every text mark, in canvas units.
pub const TEXT_FONT_SIZE: f64 = 16.0;

/// Font configuration for text rendering.
///
/// Describes which font to use, including family name, weight, and style.
/// The text tool always renders at [`TEXT_FONT_SIZE`].
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Sans", "Monospace", "JetBrains Mono")
    pub family: String,

    /// Font weight (e.g., "normal", "bold", "light" or numeric 100-900)
    pub weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    pub style: String,

    /// Size in canvas units
    pub size: f64,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::with_family("Sans")
    }
}

impl FontDescriptor {
    /// Creates a regular-weight descriptor at the text tool's fixed size.
    pub fn with_family(family: &str) -> Self {
        Self {
            family: family.to_string(),
            weight: "normal".to_string(),
            style: "normal".to_string(),
            size: TEXT_FONT_SIZE,
        }
    }

    /// Converts this font descriptor to a Pango font description string.
    ///
    /// Format: "Family Style Weight Size"
    /// Example: "Sans 16" or "Monospace Italic Bold 16"
    ///
    /// Pango interprets the size in points; callers that need pixel sizes
    /// use [`FontDescriptor::pango_description`] instead.
    pub fn to_pango_string(&self) -> String {
        let mut parts = vec![self.family.clone()];

        if self.style.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.style));
        }

        if self.weight.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.weight));
        }

        parts.push(format!("{}", self.size.round() as i32));

        parts.join(" ")
    }

    /// Builds a Pango description whose size is in device units (pixels).
    pub fn pango_description(&self) -> pango::FontDescription {
        let mut desc = pango::FontDescription::from_string(&self.to_pango_string());
        desc.set_absolute_size(self.size * pango::SCALE as f64);
        desc
    }
}

/// Capitalizes the first letter of a string.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
