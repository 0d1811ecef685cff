use super::*;

#[test]
fn seed_lists_have_two_entries_each() {
    assert_eq!(seed_projects().len(), 2);
    assert_eq!(seed_equipment().len(), 2);
}

#[test]
fn seed_ids_are_unique_per_list() {
    let projects = seed_projects();
    assert_ne!(projects[0].id(), projects[1].id());
    let equipment = seed_equipment();
    assert_ne!(equipment[0].id(), equipment[1].id());
}

#[test]
fn seed_equipment_has_no_images() {
    assert!(seed_equipment().iter().all(|e| e.image.is_none()));
}

#[test]
fn project_serializes_with_camel_case_fields() {
    let project = &seed_projects()[0];
    let json = serde_json::to_value(project).unwrap();
    assert_eq!(json["projectName"], "Site Expansion Phase 1");
    assert_eq!(json["noOfSites"], 35);
    assert!(json.get("no_of_sites").is_none());
}

#[test]
fn equipment_without_image_omits_field() {
    let json = serde_json::to_value(&seed_equipment()[1]).unwrap();
    assert!(json.get("image").is_none());
    let back: Equipment = serde_json::from_value(json).unwrap();
    assert_eq!(back.image, None);
}
