use pretty_assertions::assert_eq;

use super::*;

struct Person;

impl Reflect for Person {}

struct Child {
    person: Person,
}

impl Reflect for Child {
    fn base(&self) -> Option<&dyn Reflect> {
        Some(&self.person)
    }
}

struct Grandchild {
    child: Child,
}

impl Reflect for Grandchild {
    fn base(&self) -> Option<&dyn Reflect> {
        Some(&self.child)
    }
}

trait Named: Reflect {}

impl Named for Person {}
impl Named for Child {}

#[test]
fn descriptor_equality_uses_type_id() {
    assert_eq!(TypeDescriptor::of::<i32>(), TypeDescriptor::of::<i32>());
    assert_ne!(TypeDescriptor::of::<i32>(), TypeDescriptor::of::<i64>());
    assert!(TypeDescriptor::of::<String>().is::<String>());
    assert!(!TypeDescriptor::of::<String>().is::<str>());
}

#[test]
fn descriptor_names() {
    let descriptor = TypeDescriptor::of::<Vec<String>>();
    assert_eq!(descriptor.name(), "alloc::vec::Vec<alloc::string::String>");
    assert_eq!(descriptor.short_name(), "Vec<String>");
    assert_eq!(descriptor.to_string(), descriptor.name());
}

#[test]
fn primitives_report_their_own_type() {
    assert!(23_i32.runtime_type().is::<i32>());
    assert!("text".runtime_type().is::<str>());
    assert!(String::new().runtime_type().is::<String>());
    assert!(vec![1_u8].runtime_type().is::<Vec<u8>>());
    assert!(Some(1.5_f64).runtime_type().is::<Option<f64>>());
}

#[test]
fn shared_references_report_the_reference_type() {
    let text: &'static str = "text";
    let descriptor = <&'static str as Reflect>::runtime_type(&text);
    assert!(descriptor.is::<&str>());
    assert!(!descriptor.is::<str>());
    assert_eq!(descriptor.short_name(), "&str");
}

#[test]
fn boxed_trait_object_reveals_concrete_type() {
    let declared: Box<dyn Named> = Box::new(Child { person: Person });
    assert!(declared.runtime_type().is::<Child>());
    assert!(!declared.runtime_type().is::<Box<dyn Named>>());
}

#[test]
fn lineage_walks_bases_nearest_first() {
    let value = Grandchild {
        child: Child { person: Person },
    };
    let types: Vec<TypeDescriptor> = lineage(&value).collect();
    assert_eq!(
        types,
        vec![
            TypeDescriptor::of::<Grandchild>(),
            TypeDescriptor::of::<Child>(),
            TypeDescriptor::of::<Person>(),
        ]
    );
}

#[test]
fn lineage_of_leaf_is_itself() {
    let types: Vec<TypeDescriptor> = lineage(&Person).collect();
    assert_eq!(types, vec![TypeDescriptor::of::<Person>()]);
}

#[test]
fn short_names_strip_every_path() {
    assert_eq!(short_type_name("i32"), "i32");
    assert_eq!(short_type_name("my_tests::Person"), "Person");
    assert_eq!(
        short_type_name("core::option::Option<alloc::string::String>"),
        "Option<String>"
    );
    assert_eq!(short_type_name("(i32, a::b::C)"), "(i32, C)");
    assert_eq!(short_type_name("&[a::B]"), "&[B]");
    assert_eq!(short_type_name("dyn core::any::Any"), "dyn Any");
    assert_eq!(
        short_type_name("std::collections::HashMap<a::K, b::V>"),
        "HashMap<K, V>"
    );
}
