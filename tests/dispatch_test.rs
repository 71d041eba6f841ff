use inheritance_recipe::framework::dispatch::{downcast, render_all, try_downcast, Render};
use inheritance_recipe::shapes::{Circle, Oval, Shape, SharedGallery, SlicedGallery};
use std::any::Any;
use std::rc::Rc;

// --- Property: slicing is deterministic and total ---

#[test]
fn test_sliced_values_always_render_the_base_behavior() {
    let circle1 = Circle::new(7.2, "circle1");
    let oval1 = Oval::new(13.3, 1.2, "oval1");
    let circle2 = Circle::new(11.2, "circle2");
    let oval2 = Oval::new(31.3, 15.2, "oval2");

    let mut gallery = SlicedGallery::new();
    gallery.add(&circle1);
    gallery.add(&oval1);
    gallery.add(&circle2);
    gallery.add(&oval2);

    for line in gallery.render_each() {
        assert!(
            line.starts_with("Shape::render"),
            "sliced element rendered '{line}'"
        );
    }
    // The copies kept the base portion's data.
    assert!(gallery.render_each()[0].contains("circle1"));
}

#[test]
fn test_sliced_storage_is_exactly_the_base_size() {
    let circle = Circle::new(12.2, "circle3");
    let oval = Oval::new(53.3, 9.2, "oval3");

    let mut gallery = SlicedGallery::new();
    gallery.add(&circle);
    gallery.add(&oval);

    for size in gallery.storage_sizes() {
        assert_eq!(size, std::mem::size_of::<Shape>());
    }
    // The concrete types really are bigger: the copy dropped something.
    assert!(std::mem::size_of::<Oval>() > std::mem::size_of::<Shape>());
}

// --- Property: dispatch through indirections follows the dynamic type ---

#[test]
fn test_borrowed_indirections_dispatch_to_the_override() {
    let circle = Circle::new(7.2, "circle1");
    let oval = Oval::new(13.3, 1.2, "oval1");
    let shape = Shape::new("plain");

    let shapes: Vec<&dyn Render> = vec![&circle, &oval, &shape];
    let lines = render_all(&shapes);

    assert!(lines[0].starts_with("Circle::render"));
    assert!(lines[1].starts_with("Oval::render"));
    assert!(lines[2].starts_with("Shape::render"));
}

#[test]
fn test_shared_handles_dispatch_to_the_override() {
    let mut gallery = SharedGallery::new();
    gallery.add(Rc::new(Circle::new(12.2, "circle4")));
    gallery.add(Rc::new(Oval::new(10.0, 20.0, "oval4")));

    let lines = gallery.render_each();
    assert!(lines[0].starts_with("Circle::render"));
    assert!(lines[1].starts_with("Oval::render"));
}

#[test]
fn test_handle_size_is_independent_of_the_pointee() {
    // The handle is a fat pointer pair; the pointed-to object's size never
    // shows through it.
    assert_eq!(
        SharedGallery::handle_size(),
        std::mem::size_of::<Rc<dyn Render>>()
    );
    assert_ne!(SharedGallery::handle_size(), std::mem::size_of::<Oval>());
}

// --- Tie-break: a Circle routes through an Oval-typed parameter ---

fn oval_area(oval: &Oval) -> f64 {
    oval.area()
}

#[test]
fn test_circle_is_accepted_where_an_oval_is_asked_for() {
    let circle = Circle::new(2.0, "round");
    let area = oval_area(circle.as_oval());
    assert!((area - circle.area()).abs() < 1e-9);
}

// --- Property: checked downcast failure modes ---

struct Feline {
    name: String,
}

#[derive(Debug)]
struct Dog {
    name: String,
}

impl Render for Feline {
    fn render(&self) -> String {
        format!("Feline::render ({})", self.name)
    }
    fn type_label(&self) -> &'static str {
        "Feline"
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Render for Dog {
    fn render(&self) -> String {
        format!("Dog::render ({})", self.name)
    }
    fn type_label(&self) -> &'static str {
        "Dog"
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn test_pointer_style_downcast_misses_with_none() {
    let feline = Feline {
        name: "whiskers".into(),
    };
    let handle: &dyn Render = &feline;

    assert!(try_downcast::<Dog>(handle).is_none());

    // And hits when the runtime type matches.
    let back = try_downcast::<Feline>(handle).unwrap();
    assert_eq!(back.name, "whiskers");
}

#[test]
fn test_reference_style_downcast_raises_a_distinguishable_error() {
    let feline = Feline {
        name: "whiskers".into(),
    };
    let handle: &dyn Render = &feline;

    let err = downcast::<Dog>(handle).unwrap_err();
    assert_eq!(err.expected, "Dog");
    assert_eq!(err.actual, "Feline");

    assert!(downcast::<Feline>(handle).is_ok());
}

#[test]
fn test_downcast_within_the_shape_family() {
    let oval = Oval::new(3.0, 4.0, "oval");
    let handle: &dyn Render = &oval;

    // The handle holds an Oval; asking for the sibling level misses.
    assert!(try_downcast::<Circle>(handle).is_none());
    let recovered = downcast::<Oval>(handle).unwrap();
    assert_eq!(recovered.y_radius(), 4.0);
}
