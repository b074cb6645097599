//! Property tests for the import parser.

use std::collections::HashMap;

use proptest::prelude::*;
use ring_ingest::{ParseError, parse_import, parse_show};

fn area_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9]{0,6}"
}

fn class_line() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9 /]{0,14}[a-z]"
}

fn sections() -> impl Strategy<Value = Vec<(String, Vec<String>)>> {
    prop::collection::vec(
        (area_name(), prop::collection::vec(class_line(), 0..5)),
        1..6,
    )
}

fn render(sections: &[(String, Vec<String>)]) -> String {
    let mut text = String::new();
    for (area, classes) in sections {
        text.push_str(&format!("[{area}]\n"));
        for class in classes {
            text.push_str(class);
            text.push('\n');
        }
        text.push('\n');
    }
    text
}

proptest! {
    #[test]
    fn area_order_is_first_seen_header_order(sections in sections()) {
        let show = parse_show(&render(&sections)).expect("text with headers parses");

        let mut expected_order: Vec<&str> = Vec::new();
        let mut expected_classes: HashMap<&str, Vec<&str>> = HashMap::new();
        for (area, classes) in &sections {
            if !expected_order.contains(&area.as_str()) {
                expected_order.push(area);
            }
            expected_classes
                .entry(area)
                .or_default()
                .extend(classes.iter().map(String::as_str));
        }

        prop_assert_eq!(show.area_names().collect::<Vec<_>>(), expected_order);
        for area in &show.areas {
            prop_assert_eq!(area.current, 0);
            let expected = &expected_classes[area.name.as_str()];
            prop_assert_eq!(&area.classes, expected);
        }
    }

    #[test]
    fn text_without_headers_fails(lines in prop::collection::vec("[a-z0-9 ]{0,12}", 0..8)) {
        let text = lines.join("\n");
        prop_assert_eq!(parse_show(&text), Err(ParseError::NoAreasFound));
    }

    #[test]
    fn parsing_is_deterministic(sections in sections()) {
        let text = render(&sections);
        prop_assert_eq!(parse_import(&text), parse_import(&text));
    }
}

#[test]
fn end_to_end_sample() {
    let show = parse_show("[A]\nX\nY\n\n[B]\nZ").unwrap();
    assert_eq!(show.area_names().collect::<Vec<_>>(), vec!["A", "B"]);
    assert_eq!(show.area("A").unwrap().classes, vec!["X", "Y"]);
    assert_eq!(show.area("B").unwrap().classes, vec!["Z"]);
    assert_eq!(show.area("A").unwrap().current, 0);
    assert_eq!(show.area("B").unwrap().current, 0);
}
