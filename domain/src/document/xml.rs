//! WordprocessingML building blocks and the escaping boundary
//!
//! [`Markup`] can only be built by the functions in this module tree.
//! Free text enters it through [`run`] and [`Cell::text`], which always
//! escape. Fixed tags are the only unescaped content.

/// Replace the five XML special characters with entities.
///
/// Characters XML 1.0 cannot carry at all (C0 controls other than tab,
/// LF and CR, plus U+FFFE and U+FFFF) become U+FFFD.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c if !is_xml_char(c) => out.push(char::REPLACEMENT_CHARACTER),
            _ => out.push(c),
        }
    }
    out
}

/// XML 1.0 `Char` production
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..
    )
}

/// A fragment of document markup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    pub fn new() -> Self {
        Self(String::new())
    }

    /// Wrap markup that contains no free text
    pub(super) fn trusted(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn push(&mut self, other: Markup) {
        self.0.push_str(&other.0);
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Markup> for Markup {
    fn from_iter<I: IntoIterator<Item = Markup>>(iter: I) -> Self {
        let mut out = Markup::new();
        for m in iter {
            out.push(m);
        }
        out
    }
}

pub const COLOR_PASS: &str = "2E7D32";
pub const COLOR_FAIL: &str = "C62828";
const HEADER_FILL: &str = "D9D9D9";

/// Character formatting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStyle {
    pub bold: bool,
    pub italic: bool,
    /// Font size in half-points
    pub size: Option<u32>,
    pub color: Option<&'static str>,
}

impl RunStyle {
    pub const PLAIN: RunStyle = RunStyle {
        bold: false,
        italic: false,
        size: None,
        color: None,
    };

    pub const BOLD: RunStyle = RunStyle {
        bold: true,
        ..RunStyle::PLAIN
    };

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn size(mut self, half_points: u32) -> Self {
        self.size = Some(half_points);
        self
    }

    pub fn color(mut self, color: &'static str) -> Self {
        self.color = Some(color);
        self
    }

    fn properties(&self) -> String {
        let mut props = String::new();
        if self.bold {
            props.push_str("<w:b/>");
        }
        if self.italic {
            props.push_str("<w:i/>");
        }
        if let Some(color) = self.color {
            props.push_str(&format!("<w:color w:val=\"{}\"/>", color));
        }
        if let Some(size) = self.size {
            props.push_str(&format!("<w:sz w:val=\"{size}\"/><w:szCs w:val=\"{size}\"/>"));
        }
        if props.is_empty() {
            props
        } else {
            format!("<w:rPr>{}</w:rPr>", props)
        }
    }
}

/// Paragraph alignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl Align {
    fn as_str(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
            Align::Justify => "both",
        }
    }
}

/// Paragraph formatting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParagraphStyle {
    pub align: Align,
    /// Space after the paragraph in twips
    pub spacing_after: Option<u32>,
    pub keep_next: bool,
}

impl ParagraphStyle {
    pub const fn aligned(align: Align) -> Self {
        Self {
            align,
            spacing_after: None,
            keep_next: false,
        }
    }

    pub fn spacing_after(mut self, twips: u32) -> Self {
        self.spacing_after = Some(twips);
        self
    }

    pub fn keep_next(mut self) -> Self {
        self.keep_next = true;
        self
    }

    fn properties(&self) -> String {
        let mut props = String::new();
        if self.keep_next {
            props.push_str("<w:keepNext/>");
        }
        if let Some(after) = self.spacing_after {
            props.push_str(&format!("<w:spacing w:after=\"{}\"/>", after));
        }
        if self.align != Align::Left {
            props.push_str(&format!("<w:jc w:val=\"{}\"/>", self.align.as_str()));
        }
        if props.is_empty() {
            props
        } else {
            format!("<w:pPr>{}</w:pPr>", props)
        }
    }
}

/// A run of escaped text. Line breaks in `text` become `<w:br/>`.
pub fn run(text: &str, style: RunStyle) -> Markup {
    let body = text
        .lines()
        .map(|line| format!("<w:t xml:space=\"preserve\">{}</w:t>", escape_xml(line)))
        .collect::<Vec<_>>()
        .join("<w:br/>");
    Markup(format!("<w:r>{}{}</w:r>", style.properties(), body))
}

/// A paragraph made of runs or drawings
pub fn paragraph(content: impl IntoIterator<Item = Markup>, style: ParagraphStyle) -> Markup {
    let inner: Markup = content.into_iter().collect();
    Markup(format!("<w:p>{}{}</w:p>", style.properties(), inner.0))
}

/// Single-run paragraph
pub fn text_paragraph(text: &str, run_style: RunStyle, style: ParagraphStyle) -> Markup {
    paragraph([run(text, run_style)], style)
}

/// "Caption: value" paragraph with a bold caption
pub fn labeled_paragraph(caption: &str, value: &str) -> Markup {
    paragraph(
        [
            run(&format!("{}: ", caption), RunStyle::BOLD),
            run(value, RunStyle::PLAIN),
        ],
        ParagraphStyle::default(),
    )
}

/// Paragraph that starts a new page
pub fn page_break() -> Markup {
    Markup::trusted("<w:p><w:r><w:br w:type=\"page\"/></w:r></w:p>")
}

/// Empty paragraph
pub fn blank_line() -> Markup {
    Markup::trusted("<w:p/>")
}

/// A table cell
#[derive(Debug, Clone)]
pub struct Cell {
    content: Markup,
    shaded: bool,
}

impl Cell {
    /// Escaped text, left-aligned
    pub fn text(text: &str) -> Self {
        Self::aligned(text, Align::Left)
    }

    /// Escaped text, centered
    pub fn centered(text: &str) -> Self {
        Self::aligned(text, Align::Center)
    }

    pub fn aligned(text: &str, align: Align) -> Self {
        Self::content(text_paragraph(
            text,
            RunStyle::PLAIN,
            ParagraphStyle::aligned(align),
        ))
    }

    /// Bold, shaded header cell
    pub fn header(text: &str) -> Self {
        Self {
            content: text_paragraph(text, RunStyle::BOLD, ParagraphStyle::aligned(Align::Center)),
            shaded: true,
        }
    }

    /// Cell holding paragraphs built elsewhere
    pub fn content(content: Markup) -> Self {
        Self {
            content,
            shaded: false,
        }
    }
}

/// Bordered fixed-layout table
#[derive(Debug, Clone)]
pub struct Table {
    widths: Vec<u32>,
    rows: Vec<Markup>,
}

impl Table {
    /// Column widths in twips
    pub fn new(widths: impl Into<Vec<u32>>) -> Self {
        Self {
            widths: widths.into(),
            rows: Vec::new(),
        }
    }

    /// Header row of bold shaded captions
    pub fn header(self, captions: &[&str]) -> Self {
        let cells = captions.iter().map(|c| Cell::header(c)).collect();
        self.row(cells)
    }

    /// Append a row; missing cells are filled with empty paragraphs
    pub fn row(mut self, cells: Vec<Cell>) -> Self {
        let mut markup = String::from("<w:tr>");
        let mut cells = cells.into_iter();
        for width in &self.widths {
            let cell = cells.next().unwrap_or_else(|| Cell::content(blank_line()));
            let content = if cell.content.is_empty() {
                blank_line()
            } else {
                cell.content
            };
            markup.push_str("<w:tc><w:tcPr>");
            markup.push_str(&format!("<w:tcW w:w=\"{}\" w:type=\"dxa\"/>", width));
            if cell.shaded {
                markup.push_str(&format!(
                    "<w:shd w:val=\"clear\" w:color=\"auto\" w:fill=\"{}\"/>",
                    HEADER_FILL
                ));
            }
            markup.push_str("<w:vAlign w:val=\"center\"/></w:tcPr>");
            markup.push_str(content.as_str());
            markup.push_str("</w:tc>");
        }
        markup.push_str("</w:tr>");
        self.rows.push(Markup(markup));
        self
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn build(self) -> Markup {
        let total: u32 = self.widths.iter().sum();
        let border = |side: &str| {
            format!(
                "<w:{} w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"000000\"/>",
                side
            )
        };
        let borders: String = ["top", "left", "bottom", "right", "insideH", "insideV"]
            .iter()
            .map(|side| border(side))
            .collect();
        let grid: String = self
            .widths
            .iter()
            .map(|w| format!("<w:gridCol w:w=\"{}\"/>", w))
            .collect();

        let mut out = format!(
            "<w:tbl><w:tblPr><w:tblW w:w=\"{}\" w:type=\"dxa\"/><w:tblBorders>{}</w:tblBorders>\
             <w:tblLayout w:type=\"fixed\"/></w:tblPr><w:tblGrid>{}</w:tblGrid>",
            total, borders, grid
        );
        for row in self.rows {
            out.push_str(row.as_str());
        }
        out.push_str("</w:tbl>");
        Markup(out)
    }
}
