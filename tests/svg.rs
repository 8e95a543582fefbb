//! SVG output of whole charts

use std::collections::BTreeMap;

use svg::node::element::tag::Type;
use svg::parser::Event;
use wedgeplot::render::{SvgOptions, to_svg};
use wedgeplot::{ChartData, Dash, DividerIcon, Label, LayoutOptions, MonospaceFont, Ring, Slice, Viewport};

/// Parsed element: tag name, attributes and any text content
#[derive(Debug, Clone, PartialEq)]
struct Element {
    name: String,
    attrs: BTreeMap<String, String>,
    text: String,
}

fn elements(svg: &str) -> Vec<Element> {
    let mut out: Vec<Element> = Vec::new();
    for event in svg::read(svg).unwrap() {
        match event {
            Event::Tag(name, Type::Start | Type::Empty, attributes) => out.push(Element {
                name: name.to_string(),
                attrs: attributes.iter().map(|(k, v)| (k.clone(), v.to_string())).collect(),
                text: String::new(),
            }),
            Event::Text(text) => {
                if let Some(last) = out.last_mut() {
                    last.text.push_str(text.trim());
                }
            }
            _ => {}
        }
    }
    out
}

/// Extract circle elements as (cx, cy, r)
fn extract_circles(svg: &str) -> Vec<(f64, f64, f64)> {
    elements(svg)
        .iter()
        .filter(|e| e.name == "circle")
        .map(|e| {
            let num = |attr: &str| e.attrs.get(attr).and_then(|s| s.parse().ok()).unwrap_or(f64::NAN);
            (num("cx"), num("cy"), num("r"))
        })
        .collect()
}

/// One line per element, attributes in name order, path data left out
fn outline(svg: &str) -> String {
    elements(svg)
        .iter()
        .map(|e| {
            let attrs: Vec<String> = e
                .attrs
                .iter()
                .filter(|(k, _)| k.as_str() != "d")
                .map(|(k, v)| format!("{k}=\"{v}\""))
                .collect();
            let mut line = format!("{} {}", e.name, attrs.join(" "));
            if !e.text.is_empty() {
                line.push_str(&format!(" | {}", e.text));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render(data: &ChartData, options: &SvgOptions) -> String {
    let scene = wedgeplot::chart(data, Viewport::square(300.0), &LayoutOptions::default(), &MonospaceFont::new(0.5))
        .unwrap();
    to_svg(&scene, options)
}

#[test]
fn rings_become_concentric_circles() {
    let mut data = ChartData::new();
    for i in 0..4 {
        data = data.with_ring(Ring::new(Label::new(format!("{}", 25 * (i + 1)))).with_dash(Dash::new(4.0, 2.0)));
    }
    let svg = render(&data, &SvgOptions::default());
    let circles = extract_circles(&svg);
    assert_eq!(circles, vec![
        (150.0, 150.0, 25.0),
        (150.0, 150.0, 50.0),
        (150.0, 150.0, 75.0),
        (150.0, 150.0, 100.0),
    ]);
    let dashed = elements(&svg)
        .iter()
        .filter(|e| e.attrs.get("stroke-dasharray").map(String::as_str) == Some("4,2"))
        .count();
    assert_eq!(dashed, 4);
}

#[test]
fn captions_are_painted_last() {
    let data = ChartData::new()
        .with_ring(Ring::new(Label::new("top")))
        .with_slice(Slice::new(0.5, Label::new("")));
    let elements = elements(&render(&data, &SvgOptions::default()));
    let caption = elements.iter().position(|e| e.name == "text" && e.text == "top").unwrap();
    let last_shape = elements.iter().rposition(|e| e.name == "line").unwrap();
    assert!(caption > last_shape);
    assert_eq!(caption, elements.len() - 1);
}

#[test]
fn labels_are_escaped() {
    let data = ChartData::new()
        .with_ring(Ring::new(Label::new("a<b")))
        .with_slice(Slice::new(0.5, Label::new("&")));
    let svg = render(&data, &SvgOptions::default());
    assert!(svg.contains("a&lt;b"));
    assert!(svg.contains("&amp;"));
    assert!(!svg.contains("a<b"));
    // Still well formed
    let texts = elements(&svg).into_iter().filter(|e| e.name == "text").count();
    assert_eq!(texts, 2);
}

#[test]
fn selection_only_touches_the_selected_wedge() {
    let data = ChartData::new()
        .with_slice(Slice::new(0.5, Label::new("")))
        .with_slice(Slice::new(0.5, Label::new("")))
        .with_slice(Slice::new(0.5, Label::new("")));
    let plain = elements(&render(&data, &SvgOptions::default()));
    let selected = elements(&render(&data, &SvgOptions::selected(2)));
    assert_eq!(plain.len(), selected.len());

    let diff: Vec<(&Element, &Element)> = plain
        .iter()
        .zip(selected.iter())
        .filter(|(a, b)| a != b)
        .collect();
    assert_eq!(diff.len(), 1);
    let (before, after) = diff[0];
    assert_eq!(after.name, "path");
    assert_eq!(before.attrs["d"], after.attrs["d"]);
    assert_eq!(after.attrs["stroke-width"], "4");
}

#[test]
fn full_document() {
    let data = ChartData::new()
        .with_max_radius(40.0)
        .with_ring(Ring::new(Label::new("40")))
        .with_slice(Slice::new(1.0, Label::new("")).with_fill(wedgeplot::FillStyle::new(wedgeplot::Color::named("teal"))))
        .with_divider_icon(0, DividerIcon::new("star"));
    insta::assert_snapshot!(outline(&render(&data, &SvgOptions::default())), @r##"
    svg height="300" viewBox="0 0 300 300" width="300" xmlns="http://www.w3.org/2000/svg"
    circle cx="150" cy="150" fill="none" r="40" stroke="rgb(0,0,0)" stroke-width="1"
    path fill="teal" stroke="rgb(0,0,0)" stroke-width="0.8"
    line stroke="rgb(255,255,255)" stroke-width="1.5" x1="150" x2="150" y1="150" y2="110"
    use height="35" href="#star" transform="rotate(270 150 85)" width="35" x="132.5" y="67.5"
    text dominant-baseline="hanging" fill="rgb(0,0,0)" font-size="15" x="154" y="114" | 40
    "##);
}
