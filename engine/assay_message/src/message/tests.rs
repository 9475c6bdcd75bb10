use pretty_assertions::assert_eq;

use super::*;

#[test]
fn headline_substitutes_subject() {
    let message = FluentMessage::build("The {0} is different from zero.").on(&5);
    assert_eq!(
        message.to_string(),
        "\nThe checked value is different from zero.\nThe checked value:\n\t[5]"
    );
}

#[test]
fn expected_block_with_comparison() {
    let message =
        FluentMessage::build("The {0} is before the reference value whereas it must not.")
            .on(&5)
            .and()
            .expected(&10)
            .comparison("after");
    assert_eq!(
        message.to_string(),
        "\nThe checked value is before the reference value whereas it must not.\
         \nThe checked value:\n\t[5]\
         \nThe value must be after:\n\t[10]"
    );
}

#[test]
fn expected_block_without_comparison() {
    let message = FluentMessage::build("The {0} is different from the expected one.")
        .on("a")
        .and()
        .expected("b");
    assert_eq!(
        message.to_string(),
        "\nThe checked value is different from the expected one.\
         \nThe checked value:\n\t[\"a\"]\
         \nThe expected value:\n\t[\"b\"]"
    );
}

#[test]
fn blocks_only_with_closing_line() {
    let message = FluentMessage::blocks_only()
        .block("The actual value", RenderedValue::of(&23))
        .block("is an instance of", RenderedValue::verbatim("i32"))
        .closing("which is not expected.");
    assert_eq!(
        message.to_string(),
        "\nThe actual value:\n\t[23]\nis an instance of:\n\t[i32]\nwhich is not expected."
    );
}

#[test]
fn headline_only() {
    let message = FluentMessage::build("The {0} has no value, which is unexpected.")
        .for_subject("checked nullable value");
    assert_eq!(
        message.to_string(),
        "\nThe checked nullable value has no value, which is unexpected."
    );
}

#[test]
fn on_always_lands_first() {
    let message = FluentMessage::build("The {0} is wrong.")
        .expected(&2)
        .on(&1);
    assert_eq!(message.blocks()[0].kind, BlockKind::Actual);
    assert_eq!(
        message.to_string(),
        "\nThe checked value is wrong.\nThe checked value:\n\t[1]\nThe expected value:\n\t[2]"
    );
}

#[test]
fn on_twice_replaces_actual_block() {
    let message = FluentMessage::build("x").on(&1).on(&2);
    assert_eq!(message.blocks().len(), 1);
    assert_eq!(message.blocks()[0].payload, "2");
}

#[test]
fn subject_override_relabels_actual_block() {
    let message = FluentMessage::build("The {0} is empty.")
        .on(&0)
        .for_subject("checked sequence");
    assert_eq!(message.subject(), "checked sequence");
    assert_eq!(
        message.to_string(),
        "\nThe checked sequence is empty.\nThe checked sequence:\n\t[0]"
    );
}

#[test]
fn comparison_without_expected_block_is_ignored() {
    let message = FluentMessage::build("The {0} is odd.")
        .on(&3)
        .comparison("after");
    assert!(message.blocks().iter().all(|block| block.comparison.is_none()));
    assert_eq!(
        message.to_string(),
        "\nThe checked value is odd.\nThe checked value:\n\t[3]"
    );
}

#[test]
fn comparison_tags_only_the_last_expected_block() {
    let message = FluentMessage::build("The {0} is out of range.")
        .on(&7)
        .expected(&1)
        .expected(&5)
        .comparison("less than");
    let blocks = message.blocks();
    assert_eq!(blocks[1].comparison, None);
    assert_eq!(blocks[2].comparison.as_deref(), Some("less than"));
}

#[test]
fn no_trailing_newline() {
    let rendered = FluentMessage::build("The {0} is odd.").on(&3).to_string();
    assert!(rendered.starts_with('\n'));
    assert!(!rendered.ends_with('\n'));
}

#[test]
fn rendering_is_idempotent() {
    let message = FluentMessage::build("The {0} is odd.").on(&vec![1, 2]).expected(&[3]);
    assert_eq!(message.to_string(), message.to_string());
    assert_eq!(String::from(message.clone()), message.to_string());
}

#[test]
fn empty_message_renders_nothing() {
    assert_eq!(FluentMessage::blocks_only().to_string(), "");
}
