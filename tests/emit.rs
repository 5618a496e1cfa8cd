// tests/emit.rs
//
// Serializer output is compared verbatim; the downstream script and the
// diff-friendliness of the outputs both depend on the exact shape.
//
use id_pools::config::options::{EnumKind, OutputFormat};
use id_pools::emit::{render, to_js_array, to_json_array, to_window_array};

fn pairs() -> Vec<(u32, String)> {
    vec![(1, "THE_SAD_ONION".to_string()), (4, "SAD_ONION".to_string())]
}

#[test]
fn json_array_leaves_last_element_unterminated() {
    let expected = "[\n  [1, \"THE_SAD_ONION\"],\n  [4, \"SAD_ONION\"]\n]";
    assert_eq!(to_json_array(&pairs()), expected);
}

#[test]
fn json_array_of_nothing_is_an_empty_list() {
    assert_eq!(to_json_array(&[]), "[\n]");
}

#[test]
fn js_array_keeps_trailing_commas() {
    let expected = "const CARD_ID_POOL = [\n  [1, \"THE_SAD_ONION\"],\n  [4, \"SAD_ONION\"],\n];";
    assert_eq!(to_js_array(&pairs(), "CARD_ID_POOL"), expected);
}

#[test]
fn window_array_is_globally_qualified_and_newline_terminated() {
    let out = to_window_array(&pairs(), "PILL_ID_POOL");
    assert!(out.starts_with("window.PILL_ID_POOL = [\n"));
    assert!(out.ends_with("];\n"));
}

#[test]
fn names_are_escaped_for_the_target_dialect() {
    let tricky = vec![
        (1, "HE SAID \"NO\"".to_string()),
        (2, "BACK\\SLASH".to_string()),
        (3, "CRÈME BRÛLÉE".to_string()),
    ];
    let out = to_json_array(&tricky);
    assert!(out.contains(r#"[1, "HE SAID \"NO\""]"#));
    assert!(out.contains(r#"[2, "BACK\\SLASH"]"#));
    // Non-ASCII stays readable, not \u-escaped.
    assert!(out.contains(r#"[3, "CRÈME BRÛLÉE"]"#));
}

#[test]
fn json_output_deserializes_back_to_the_same_pairs() {
    let input = pairs();
    let parsed: Vec<(u32, String)> = serde_json::from_str(&to_json_array(&input)).unwrap();
    assert_eq!(parsed, input);
}

#[test]
fn render_uses_the_default_var_unless_overridden() {
    let p = pairs();
    let out = render(EnumKind::Trinkets, &p, OutputFormat::Js, None);
    assert!(out.starts_with("const TRINKET_ID_POOL = ["));

    let out = render(EnumKind::Trinkets, &p, OutputFormat::Js, Some("MY_POOL"));
    assert!(out.starts_with("const MY_POOL = ["));
}

#[test]
fn render_json_ignores_the_var_override() {
    let p = pairs();
    let out = render(EnumKind::Cards, &p, OutputFormat::Json, Some("MY_POOL"));
    assert_eq!(out, to_json_array(&p));
}
