//! Tests for is_render! / is_text_sink! on concrete types.
//!
//! Custom types work without any registration: the probe sees any `Render`
//! impl visible at the call site.

use tola_prims::{Render, StackSink, TextSink, is_render, is_text_sink};

#[derive(Render)]
struct Derived;

struct Manual;

impl Render for Manual {
    fn render(&self, sink: &mut dyn TextSink) {
        sink.put_str("manual");
    }
}

#[allow(dead_code)]
struct Plain;

// =============================================================================
// Render
// =============================================================================

#[test]
fn test_std_types() {
    assert!(is_render!(i32));
    assert!(is_render!(String));
    assert!(is_render!(str));
    assert!(is_render!([char]));
    assert!(is_render!(Box<dyn Render>));
    assert!(!is_render!(Vec<u8>));
    assert!(!is_render!(std::time::Duration));
}

#[test]
fn test_user_types() {
    assert!(is_render!(Derived));
    assert!(is_render!(Manual));
    assert!(is_render!(&Manual));
    assert!(is_render!([Manual; 2]));
    assert!(!is_render!(Plain));
    assert!(!is_render!(Option<Plain>));
}

#[test]
fn test_const_context() {
    const CHECKS: [bool; 2] = [is_render!(Derived), is_render!(Plain)];
    assert_eq!(CHECKS, [true, false]);
}

// =============================================================================
// TextSink
// =============================================================================

#[test]
fn test_sinks() {
    assert!(is_text_sink!(String));
    assert!(is_text_sink!(StackSink<16>));
    assert!(is_text_sink!(dyn TextSink));
    assert!(!is_text_sink!(Vec<u8>));
    assert!(!is_text_sink!(Manual));
}
