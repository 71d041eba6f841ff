use inheritance_recipe::framework::construction::observe;
use inheritance_recipe::framework::error::HierarchyError;
use inheritance_recipe::model::lineages;
use inheritance_recipe::model::{CivilEngineer, Engineer, Person};
use inheritance_recipe::shapes::Circle;

// --- Property: base-before-mid-before-derived ordering ---

#[test]
fn test_civil_engineer_constructs_outermost_base_first() {
    let (mut civil, order) = observe(|| {
        CivilEngineer::new(
            "Daniel Gray",
            41,
            "Green Sky Oh Blue 33St#75",
            12,
            "Road Strength",
        )
    });

    assert_eq!(order, vec!["Person", "Engineer", "CivilEngineer"]);

    // Every field holds the caller-supplied value, including the ones owned
    // by intermediate levels.
    assert_eq!(civil.full_name(), "Daniel Gray");
    assert_eq!(civil.contract_count(), 12);
    assert_eq!(civil.speciality(), "Road Strength");
    assert!(civil.build_road().contains("41 y/o"));
}

#[test]
fn test_shape_chain_constructs_outermost_base_first() {
    let (circle, order) = observe(|| Circle::new(7.2, "circle1"));
    assert_eq!(order, vec!["Shape", "Oval", "Circle"]);
    assert_eq!(circle.radius(), 7.2);
    assert_eq!(circle.description(), "circle1");
}

// --- Property: default propagation on the shorter path ---

#[test]
fn test_engineer_short_path_defaults_contract_count() {
    let eng = Engineer::new("cooldude", 69, "nowhere");
    assert_eq!(eng.contract_count(), 0);
    assert_eq!(eng.full_name(), "cooldude");
}

#[test]
fn test_person_defaults() {
    let person = Person::default();
    assert_eq!(person.full_name(), "Mysterious Person");
    assert_eq!(person.age(), 0);
}

#[test]
fn test_civil_engineer_default_speciality() {
    let civil = CivilEngineer::default();
    assert_eq!(civil.speciality(), "None");
}

// --- Initialization discipline: inherited state flows through delegation ---

#[test]
fn test_levels_may_only_initialize_their_own_members() {
    let lineage = lineages::engineer_lineage();

    lineage.may_initialize("Person", "address").unwrap();
    lineage.may_initialize("Engineer", "contract_count").unwrap();
    lineage.may_initialize("CivilEngineer", "speciality").unwrap();

    // A derived level assigning a base field directly is a construction-time
    // error, wherever it sits in the chain.
    let err = lineage
        .may_initialize("CivilEngineer", "full_name")
        .unwrap_err();
    assert_eq!(
        err,
        HierarchyError::ForbiddenInitialization {
            member: "full_name".into(),
            type_name: "CivilEngineer".into(),
            owner: "Person".into(),
        }
    );
    assert!(lineage.may_initialize("Engineer", "address").is_err());
    assert!(lineage
        .may_initialize("CivilEngineer", "contract_count")
        .is_err());
}
