//! Read-only node payloads handed to [`DocumentVisitor`] callbacks.
//!
//! A traversal driver owns the real document tree; these types are the
//! view of each node it exposes while walking. They carry exactly what the
//! structural serializer reads and nothing else.
//!
//! [`DocumentVisitor`]: crate::visitor::DocumentVisitor

// --- Page layout ---

/// Paper sizes a section's page setup can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperSize {
    A3,
    A4,
    A5,
    B4,
    B5,
    Executive,
    Folio,
    Ledger,
    Legal,
    Letter,
    Paper10x14,
    Paper11x17,
    Quarto,
    Statement,
    Tabloid,
    Custom,
}

impl PaperSize {
    pub fn as_str(self) -> &'static str {
        match self {
            PaperSize::A3 => "A3",
            PaperSize::A4 => "A4",
            PaperSize::A5 => "A5",
            PaperSize::B4 => "B4",
            PaperSize::B5 => "B5",
            PaperSize::Executive => "Executive",
            PaperSize::Folio => "Folio",
            PaperSize::Ledger => "Ledger",
            PaperSize::Legal => "Legal",
            PaperSize::Letter => "Letter",
            PaperSize::Paper10x14 => "Paper10x14",
            PaperSize::Paper11x17 => "Paper11x17",
            PaperSize::Quarto => "Quarto",
            PaperSize::Statement => "Statement",
            PaperSize::Tabloid => "Tabloid",
            PaperSize::Custom => "Custom",
        }
    }
}

/// Page orientation of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Portrait => "Portrait",
            Orientation::Landscape => "Landscape",
        }
    }
}

/// Page setup of one document section.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub paper_size: PaperSize,
    pub orientation: Orientation,
}

impl Default for Section {
    fn default() -> Self {
        Section {
            paper_size: PaperSize::Letter,
            orientation: Orientation::Portrait,
        }
    }
}

// --- Paragraphs and runs ---

/// Well-known style identity, independent of the style's display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleIdentifier {
    Normal,
    DefaultParagraphFont,
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    Heading5,
    Heading6,
    Title,
    Subtitle,
    Quote,
    IntenseQuote,
    Emphasis,
    Strong,
    Caption,
    ListParagraph,
    Hyperlink,
    /// Any style the document defines itself.
    User,
}

impl StyleIdentifier {
    pub fn as_str(self) -> &'static str {
        match self {
            StyleIdentifier::Normal => "Normal",
            StyleIdentifier::DefaultParagraphFont => "DefaultParagraphFont",
            StyleIdentifier::Heading1 => "Heading1",
            StyleIdentifier::Heading2 => "Heading2",
            StyleIdentifier::Heading3 => "Heading3",
            StyleIdentifier::Heading4 => "Heading4",
            StyleIdentifier::Heading5 => "Heading5",
            StyleIdentifier::Heading6 => "Heading6",
            StyleIdentifier::Title => "Title",
            StyleIdentifier::Subtitle => "Subtitle",
            StyleIdentifier::Quote => "Quote",
            StyleIdentifier::IntenseQuote => "IntenseQuote",
            StyleIdentifier::Emphasis => "Emphasis",
            StyleIdentifier::Strong => "Strong",
            StyleIdentifier::Caption => "Caption",
            StyleIdentifier::ListParagraph => "ListParagraph",
            StyleIdentifier::Hyperlink => "Hyperlink",
            StyleIdentifier::User => "User",
        }
    }
}

/// Paragraph formatting as far as the structural snapshot cares.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub style_identifier: StyleIdentifier,
    /// Display name of the applied style; free-form document text.
    pub style_name: String,
}

impl Paragraph {
    pub fn new(style_identifier: StyleIdentifier, style_name: impl Into<String>) -> Self {
        Paragraph {
            style_identifier,
            style_name: style_name.into(),
        }
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Paragraph::new(StyleIdentifier::Normal, "Normal")
    }
}

/// Character formatting of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    /// Font family name; free-form document text.
    pub name: String,
    pub style_identifier: StyleIdentifier,
    /// Size in points.
    pub size: f64,
    /// Locale identifier (LCID) of the run's language.
    pub locale_id: u32,
}

impl Default for Font {
    fn default() -> Self {
        Font {
            name: "Calibri".to_string(),
            style_identifier: StyleIdentifier::DefaultParagraphFont,
            size: 11.0,
            locale_id: 1033,
        }
    }
}

/// A run of text sharing one set of character formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    /// Raw run text, control characters included.
    pub text: String,
    pub font: Font,
}

impl Run {
    pub fn new(text: impl Into<String>) -> Self {
        Run {
            text: text.into(),
            font: Font::default(),
        }
    }

    pub fn with_font(text: impl Into<String>, font: Font) -> Self {
        Run {
            text: text.into(),
            font,
        }
    }
}

// --- Shapes ---

/// A drawing or picture shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    /// Width in points.
    pub width: f64,
    /// Height in points.
    pub height: f64,
    /// Raw image bytes when the shape carries a picture.
    pub image_data: Option<Vec<u8>>,
}

impl Shape {
    pub fn new(width: f64, height: f64) -> Self {
        Shape {
            width,
            height,
            image_data: None,
        }
    }

    pub fn with_image(width: f64, height: f64, image_data: Vec<u8>) -> Self {
        Shape {
            width,
            height,
            image_data: Some(image_data),
        }
    }

    pub fn has_image(&self) -> bool {
        self.image_data.is_some()
    }
}

// --- Headers and footers ---

/// The six header/footer slots a section can populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderFooterKind {
    HeaderPrimary,
    HeaderFirst,
    HeaderEven,
    FooterPrimary,
    FooterFirst,
    FooterEven,
}

impl HeaderFooterKind {
    pub fn is_header(self) -> bool {
        matches!(
            self,
            HeaderFooterKind::HeaderPrimary
                | HeaderFooterKind::HeaderFirst
                | HeaderFooterKind::HeaderEven
        )
    }

    /// Which pages the slot applies to.
    pub fn placement(self) -> &'static str {
        match self {
            HeaderFooterKind::HeaderPrimary | HeaderFooterKind::FooterPrimary => "Primary",
            HeaderFooterKind::HeaderFirst | HeaderFooterKind::FooterFirst => "First",
            HeaderFooterKind::HeaderEven | HeaderFooterKind::FooterEven => "Even",
        }
    }
}

/// One header or footer story of a section.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderFooter {
    pub kind: HeaderFooterKind,
    /// Whether the story is inherited from the previous section.
    pub linked_to_previous: bool,
}

// --- Bookmarks ---

/// A named bookmark boundary; the same payload marks both ends.
#[derive(Debug, Clone, PartialEq)]
pub struct Bookmark {
    /// Bookmark name; free-form document text.
    pub name: String,
}

impl Bookmark {
    pub fn new(name: impl Into<String>) -> Self {
        Bookmark { name: name.into() }
    }
}

// --- Fields ---

/// Classification of a field by its field code instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    DocProperty,
    DocVariable,
    Date,
    Time,
    Page,
    NumPages,
    MergeField,
    Hyperlink,
    Toc,
    Unknown,
}

/// The node opening a field's start/code/separator/value/end sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldStart {
    pub field_type: FieldType,
    /// Text of the field-code run that immediately follows this node, when
    /// the driver can look ahead to it. The same run is visited again as an
    /// ordinary run right after this callback.
    pub field_code: Option<String>,
}

impl FieldStart {
    pub fn new(field_type: FieldType) -> Self {
        FieldStart {
            field_type,
            field_code: None,
        }
    }

    pub fn with_code(field_type: FieldType, field_code: impl Into<String>) -> Self {
        FieldStart {
            field_type,
            field_code: Some(field_code.into()),
        }
    }
}

// --- Structured content controls ---

/// The content model a structured content control enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentControlType {
    RichText,
    PlainText,
    Picture,
    ComboBox,
    DropDownList,
    Date,
    Checkbox,
    Group,
    BuildingBlockGallery,
    RepeatingSection,
}

impl ContentControlType {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentControlType::RichText => "RichText",
            ContentControlType::PlainText => "PlainText",
            ContentControlType::Picture => "Picture",
            ContentControlType::ComboBox => "ComboBox",
            ContentControlType::DropDownList => "DropDownList",
            ContentControlType::Date => "Date",
            ContentControlType::Checkbox => "Checkbox",
            ContentControlType::Group => "Group",
            ContentControlType::BuildingBlockGallery => "BuildingBlockGallery",
            ContentControlType::RepeatingSection => "RepeatingSection",
        }
    }
}

/// A structured content control region.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentControl {
    pub control_type: ContentControlType,
    /// Author-visible title; free-form document text.
    pub title: String,
    /// Machine-readable tag; free-form document text.
    pub tag: String,
}

impl ContentControl {
    pub fn new(
        control_type: ContentControlType,
        title: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        ContentControl {
            control_type,
            title: title.into(),
            tag: tag.into(),
        }
    }
}
