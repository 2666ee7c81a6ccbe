//! Code to convert an [`Image`] to an SVG string

use simple_xml_builder::XMLElement;

use super::{Elem, Image};

/// Generate the SVG root element for an [`Image`]
pub fn gen_svg(image: &Image) -> XMLElement {
    let mut root = XMLElement::new("svg");
    root.add_attribute("xmlns", "http://www.w3.org/2000/svg");
    root.add_attribute("width", &image.width.to_string());
    root.add_attribute("height", &image.height.to_string());
    root.add_attribute(
        "viewBox",
        &format!("0 0 {} {}", image.width, image.height),
    );

    // The background goes first so that it's underneath everything
    let mut background = XMLElement::new("rect");
    background.add_attribute("width", "100%");
    background.add_attribute("height", "100%");
    background.add_attribute("fill", &image.background);
    root.add_child(background);

    for e in image.elements() {
        root.add_child(gen_svg_elem(e));
    }
    root
}

/// Creates an [`XMLElement`] for a given [`Elem`]
fn gen_svg_elem(elem: &Elem) -> XMLElement {
    match elem {
        // For `Dot`, we use the SVG `<circle>` element
        Elem::Dot {
            centre,
            radius,
            color,
        } => {
            let mut xml_elem = XMLElement::new("circle");
            xml_elem.add_attribute("cx", &centre.x.to_string());
            xml_elem.add_attribute("cy", &centre.y.to_string());
            xml_elem.add_attribute("r", &radius.to_string());
            xml_elem.add_attribute("fill", color);
            xml_elem
        }
        // For `Curve`, we use a `<path>` made of one cubic segment
        Elem::Curve {
            start,
            ctrl_1,
            ctrl_2,
            end,
            color,
        } => {
            let d = format!(
                "M{} {} C{} {},{} {},{} {}",
                start.x, start.y, ctrl_1.x, ctrl_1.y, ctrl_2.x, ctrl_2.y, end.x, end.y
            );
            let mut xml_elem = XMLElement::new("path");
            xml_elem.add_attribute("d", &d);
            xml_elem.add_attribute("fill", "none"); // We need `fill="none"` to disable the fill
            xml_elem.add_attribute("stroke", color);
            xml_elem
        }
        Elem::GlyphPath { path_data, color } => {
            let mut xml_elem = XMLElement::new("path");
            xml_elem.add_attribute("d", path_data);
            xml_elem.add_attribute("fill", color);
            xml_elem
        }
    }
}
