//! Inline pictures

use super::xml::{Markup, escape_xml};

/// English Metric Units per inch
pub const EMU_PER_INCH: u64 = 914_400;

/// Display size of the company QR on the cover
pub const LOGO_EXTENT: u64 = EMU_PER_INCH * 6 / 5;

/// Display size of a voter QR in the signature registry
pub const SIGNATURE_EXTENT: u64 = EMU_PER_INCH * 4 / 5;

/// An inline square picture referencing relationship `rel_id`.
///
/// `drawing_id` must be unique within the document.
pub fn inline_image(rel_id: &str, drawing_id: u32, name: &str, extent: u64) -> Markup {
    let rel_id = escape_xml(rel_id);
    let name = escape_xml(name);
    Markup::trusted(format!(
        "<w:r><w:drawing><wp:inline distT=\"0\" distB=\"0\" distL=\"0\" distR=\"0\">\
         <wp:extent cx=\"{extent}\" cy=\"{extent}\"/>\
         <wp:docPr id=\"{drawing_id}\" name=\"{name}\"/>\
         <wp:cNvGraphicFramePr><a:graphicFrameLocks noChangeAspect=\"1\"/></wp:cNvGraphicFramePr>\
         <a:graphic><a:graphicData uri=\"http://schemas.openxmlformats.org/drawingml/2006/picture\">\
         <pic:pic><pic:nvPicPr><pic:cNvPr id=\"{drawing_id}\" name=\"{name}\"/><pic:cNvPicPr/></pic:nvPicPr>\
         <pic:blipFill><a:blip r:embed=\"{rel_id}\"/><a:stretch><a:fillRect/></a:stretch></pic:blipFill>\
         <pic:spPr><a:xfrm><a:off x=\"0\" y=\"0\"/><a:ext cx=\"{extent}\" cy=\"{extent}\"/></a:xfrm>\
         <a:prstGeom prst=\"rect\"><a:avLst/></a:prstGeom></pic:spPr></pic:pic>\
         </a:graphicData></a:graphic></wp:inline></w:drawing></w:r>"
    ))
}

/// Relationship ids referenced by `r:embed` attributes, in document order
pub fn embedded_relationship_ids(markup: &str) -> Vec<String> {
    const NEEDLE: &str = "r:embed=\"";
    let mut ids = Vec::new();
    let mut rest = markup;
    while let Some(start) = rest.find(NEEDLE) {
        rest = &rest[start + NEEDLE.len()..];
        match rest.find('"') {
            Some(end) => {
                ids.push(rest[..end].to_string());
                rest = &rest[end..];
            }
            None => break,
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_image_references_id() {
        let m = inline_image("rId7", 3, "voter_2.png", SIGNATURE_EXTENT);
        assert!(m.as_str().contains("r:embed=\"rId7\""));
        assert!(m.as_str().contains("<wp:docPr id=\"3\" name=\"voter_2.png\"/>"));
        assert!(m.as_str().contains("cx=\"731520\""));
    }

    #[test]
    fn test_inline_image_escapes_name() {
        let m = inline_image("rId2", 1, "a\"b", LOGO_EXTENT);
        assert!(m.as_str().contains("name=\"a&quot;b\""));
    }

    #[test]
    fn test_embedded_ids_in_order() {
        let markup = format!(
            "{}<w:p/>{}",
            inline_image("rId1", 1, "logo", LOGO_EXTENT).as_str(),
            inline_image("rId5", 2, "v", SIGNATURE_EXTENT).as_str()
        );
        assert_eq!(embedded_relationship_ids(&markup), vec!["rId1", "rId5"]);
    }

    #[test]
    fn test_embedded_ids_none() {
        assert!(embedded_relationship_ids("<w:p/>").is_empty());
        assert!(embedded_relationship_ids("r:embed=\"unterminated").is_empty());
    }
}
