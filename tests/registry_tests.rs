//! Integration tests for registry construction and lookup

use gss_functions::{
    base_functions, custom_functions, default_registry, Arity, FunctionRegistry,
};
use pretty_assertions::assert_eq;

#[test]
fn test_every_function_is_registered() {
    let registry = default_registry();
    let expected = [
        ("saturate", Arity::Fixed(2)),
        ("desaturate", Arity::Fixed(2)),
        ("grayscale", Arity::Fixed(1)),
        ("lighten", Arity::Fixed(2)),
        ("darken", Arity::Fixed(2)),
        ("mix", Arity::Fixed(3)),
        ("spin", Arity::Fixed(2)),
        ("argb", Arity::Fixed(1)),
        ("percentage", Arity::Fixed(1)),
        ("removeUnit", Arity::Fixed(1)),
        ("concat", Arity::Variadic { min: 1 }),
        ("addHsbToCssColor", Arity::Fixed(4)),
        ("divide", Arity::Variadic { min: 2 }),
        ("maxValue", Arity::Variadic { min: 1 }),
    ];
    for (name, arity) in expected {
        let function = registry
            .get(name)
            .unwrap_or_else(|| panic!("{} is not registered", name));
        assert_eq!(function.expected_args(), arity, "{}", name);
    }
}

#[test]
fn test_custom_set_overrides_base() {
    let custom = FunctionRegistry::standard();
    let base = FunctionRegistry::build(base_functions(), Vec::new());

    // HSB brightness in the base set, HSL lightness once overridden
    let args = ["#0088cc", "10"];
    assert_ne!(
        custom.call_text("darken", &args).unwrap(),
        base.call_text("darken", &args).unwrap()
    );
    assert_eq!(custom.call_text("darken", &["#0088cc", "15"]).unwrap(), "#00547F");
}

#[test]
fn test_overrides_only() {
    let registry = FunctionRegistry::build(Vec::new(), custom_functions());
    assert_eq!(registry.len(), custom_functions().len());
    assert!(!registry.contains("add"));
    assert!(registry.contains("concat"));
}

#[test]
fn test_empty_registry() {
    let registry = FunctionRegistry::build(Vec::new(), Vec::new());
    assert!(registry.is_empty());
    assert!(registry.call_text("lighten", &["#333", "15"]).is_err());
}

#[test]
fn test_registry_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FunctionRegistry>();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                default_registry()
                    .call_text("spin", &["#0088cc".to_string(), (i * 90).to_string()])
                    .unwrap()
            })
        })
        .collect();
    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results[0], "#0088CC");
    assert_eq!(results.len(), 4);
}
