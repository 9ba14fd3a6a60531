use super::*;

#[test]
fn each_variant_maps_to_a_distinct_class() {
    let classes = [
        button_class(ButtonVariant::Primary),
        button_class(ButtonVariant::Secondary),
        button_class(ButtonVariant::Danger),
    ];
    for class in classes {
        assert!(class.starts_with("btn "));
    }
    assert_ne!(classes[0], classes[1]);
    assert_ne!(classes[1], classes[2]);
}

#[test]
fn default_variant_is_primary() {
    assert_eq!(button_class(ButtonVariant::default()), "btn btn--primary");
}
