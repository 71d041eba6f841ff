use crate::framework::construction;
use crate::framework::dispatch::{self, Render};
use crate::framework::error::HierarchyError;
use crate::framework::hierarchy::AccessSite;
use crate::model::{lineages, CivilEngineer, Nurse, Person, Player};
use crate::shapes::{Circle, Oval, SharedGallery, SlicedGallery};
use std::rc::Rc;
use tracing::info;

/// Walks through every rule the crate models and reports the results through
/// structured `tracing` events.
///
/// This is the library's demonstration surface: the same scenarios the test
/// suite asserts on, narrated for a human reading the log. Run it from a
/// consumer with `RUST_LOG=info` (after [`setup_tracing`](super::setup_tracing))
/// to watch constructor chaining, visibility verdicts, dispatch, and slicing
/// happen in order.
pub fn run_showcase() -> Result<(), HierarchyError> {
    // =====================================================================
    // 1. Construction chaining: base before mid before derived
    // =====================================================================

    let (mut civil, order) = construction::observe(|| {
        CivilEngineer::new(
            "Daniel Gray",
            41,
            "Green Sky Oh Blue 33St#75",
            12,
            "Road Strength",
        )
    });
    info!(?order, "constructor chain for CivilEngineer");
    info!(line = %civil.build_road(), "derived behavior");

    // =====================================================================
    // 2. Visibility verdicts from the lineage descriptors
    // =====================================================================

    let engineers = lineages::engineer_lineage();
    for row in engineers.report() {
        info!(
            type_name = %row.type_name,
            member = %row.member,
            effective = %row.effective,
            "visibility"
        );
    }

    // The re-exposed name is open on Engineer; the address never left Person.
    engineers.check_access("Engineer", "full_name", AccessSite::External)?;
    if let Err(err) = engineers.check_access("Engineer", "address", AccessSite::Declaring) {
        info!(%err, "address through Engineer");
    }

    // =====================================================================
    // 3. The other lineages in brief
    // =====================================================================

    let mut nurse = Nurse::new("Mayuri Saha", 21, "North St 2");
    let patient = Person::new("Davy Jones", 51, "Sea Bed 0");
    info!(line = %nurse.treat_unwell_person(&patient), "nurse at work");

    let player = Player::new("Samuel Jackson", 55, "Somewhere 12", "chess");
    info!(line = %player.play(), "player at work");

    // =====================================================================
    // 4. Dispatch through indirections vs. slicing through values
    // =====================================================================

    let circle = Circle::new(7.2, "circle1");
    let oval = Oval::new(13.3, 1.2, "oval1");

    let borrowed: Vec<&dyn Render> = vec![&circle, &oval];
    for line in dispatch::render_all(&borrowed) {
        info!(%line, "dispatch via borrowed indirection");
    }

    let mut shared = SharedGallery::new();
    shared.add(Rc::new(Circle::new(12.2, "circle4")));
    shared.add(Rc::new(Oval::new(10.0, 20.0, "oval4")));
    for line in shared.render_each() {
        info!(%line, handle_size = SharedGallery::handle_size(), "dispatch via shared handle");
    }

    let mut sliced = SlicedGallery::new();
    sliced.add(&circle);
    sliced.add(&oval);
    for (line, size) in sliced.render_each().iter().zip(sliced.storage_sizes()) {
        info!(%line, size, "sliced value");
    }

    // =====================================================================
    // 5. Checked downcasts, both failure styles
    // =====================================================================

    // The handle really holds an Oval, so asking for a Circle must miss.
    let anonymous: &dyn Render = &oval;
    info!(
        found = dispatch::try_downcast::<Circle>(anonymous).is_some(),
        "pointer-style cast Oval -> Circle"
    );
    if let Err(err) = dispatch::downcast::<Circle>(anonymous) {
        info!(%err, "reference-style cast Oval -> Circle");
    }

    Ok(())
}
