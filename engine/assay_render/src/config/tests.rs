use pretty_assertions::assert_eq;

use super::*;

#[test]
fn default_is_qualified() {
    assert_eq!(RenderConfig::default(), RenderConfig::qualified());
    assert_eq!(TypeNameStyle::default(), TypeNameStyle::Qualified);
}

#[test]
fn style_parses_case_insensitively() {
    assert_eq!("short".parse::<TypeNameStyle>(), Ok(TypeNameStyle::Short));
    assert_eq!(" Qualified ".parse::<TypeNameStyle>(), Ok(TypeNameStyle::Qualified));
    assert_eq!("SHORT".parse::<TypeNameStyle>(), Ok(TypeNameStyle::Short));
}

#[test]
fn style_parse_error_names_the_input() {
    let err = "long".parse::<TypeNameStyle>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown type name style `long` (expected `qualified` or `short`)"
    );
}

#[test]
fn style_display_round_trips() {
    for style in [TypeNameStyle::Qualified, TypeNameStyle::Short] {
        assert_eq!(style.to_string().parse::<TypeNameStyle>(), Ok(style));
    }
}

#[test]
fn env_value_selects_style() {
    assert_eq!(RenderConfig::from_env_value(None), RenderConfig::default());
    assert_eq!(
        RenderConfig::from_env_value(Some("short")),
        RenderConfig::short()
    );
    assert_eq!(
        RenderConfig::from_env_value(Some("nonsense")),
        RenderConfig::default()
    );
}

#[test]
fn type_name_follows_style() {
    let descriptor = TypeDescriptor::of::<Option<String>>();
    assert_eq!(
        RenderConfig::qualified().type_name(descriptor).as_str(),
        "core::option::Option<alloc::string::String>"
    );
    assert_eq!(
        RenderConfig::short().type_name(descriptor).as_str(),
        "Option<String>"
    );
}
