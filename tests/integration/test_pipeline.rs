//! Integration tests for the public pipeline: layout, validation, snapshot
//! decoding and search, driven only through the crate's exported API.

use chrono::NaiveDate;

use pedigree_layout::{
    Category, LayoutConfig, Person, PersonId, Relation, Snapshot, compute_layout,
    compute_layout_with_config, route_connectors, search_persons, validate,
};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn person(id: &str) -> Person {
    Person::new(id, format!("Given{id}"), "Family")
}

fn pid(id: &str) -> PersonId {
    PersonId::from(id)
}

// ── Layout properties ─────────────────────────────────────────────────────

#[test]
fn test_unrelated_persons_share_one_row_without_overlap() {
    let persons: Vec<Person> = (0..7).map(|i| person(&i.to_string())).collect();
    let cfg = LayoutConfig::default();
    let layout = compute_layout_with_config(&persons, &[], &cfg);

    assert_eq!(layout.nodes.len(), 7);
    assert!(layout.nodes.iter().all(|n| n.level == 0 && n.y == 0.0));

    let mut xs: Vec<f64> = layout.nodes.iter().map(|n| n.x).collect();
    xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
    for w in xs.windows(2) {
        assert!(w[1] - w[0] >= cfg.node_width + cfg.group_spacing);
    }
    // Centred on x = 0.
    assert_eq!(xs[0], -xs[6]);
}

#[test]
fn test_layout_is_idempotent() {
    let persons: Vec<Person> = ["a", "b", "c", "d", "e", "f"].iter().map(|id| person(id)).collect();
    let relations = vec![
        Relation::partner("p1", "a", "b"),
        Relation::parent_child("c1", "a", "c"),
        Relation::parent_child("c2", "b", "c"),
        Relation::partner("p2", "c", "d"),
        Relation::parent_child("c3", "d", "e"),
        Relation::parent_child("c4", "c", "f"),
    ];
    let first = compute_layout(&persons, &relations);
    let second = compute_layout(&persons, &relations);
    assert_eq!(first, second);
    for (a, b) in first.nodes.iter().zip(&second.nodes) {
        assert_eq!(a.x.to_bits(), b.x.to_bits());
        assert_eq!(a.y.to_bits(), b.y.to_bits());
    }
}

#[test]
fn test_every_person_laid_out_exactly_once() {
    let persons: Vec<Person> = ["g1", "g2", "p1", "p2", "k1", "k2", "solo"]
        .iter()
        .map(|id| person(id))
        .collect();
    let relations = vec![
        Relation::partner("r1", "g1", "g2"),
        Relation::parent_child("r2", "g1", "p1"),
        Relation::partner("r3", "p1", "p2"),
        Relation::parent_child("r4", "p1", "k1"),
        Relation::parent_child("r5", "p2", "k2"),
    ];
    let layout = compute_layout(&persons, &relations);

    let ids: Vec<&str> = layout.nodes.iter().map(|n| n.id().as_str()).collect();
    let expected: Vec<&str> = persons.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, expected);
    assert_eq!(layout.links, relations);
}

#[test]
fn test_partners_at_partner_spacing_symmetric_about_centre() {
    let persons = vec![person("A"), person("B")];
    let relations = vec![Relation::partner("p", "A", "B")];
    for spacing in [200.0, 260.0] {
        let cfg = LayoutConfig {
            partner_spacing: spacing,
            ..LayoutConfig::default()
        };
        let layout = compute_layout_with_config(&persons, &relations, &cfg);
        let a = layout.node(&pid("A")).unwrap();
        let b = layout.node(&pid("B")).unwrap();
        assert_eq!(a.level, b.level);
        assert_eq!(b.x - a.x, spacing);
        assert_eq!(a.x, -b.x);
    }
}

#[test]
fn test_parent_above_child_end_to_end() {
    let persons = vec![person("1"), person("2")];
    let relations = vec![Relation::parent_child("r", "1", "2")];
    let cfg = LayoutConfig::default();
    let layout = compute_layout_with_config(&persons, &relations, &cfg);

    let a = layout.node(&pid("1")).unwrap();
    let b = layout.node(&pid("2")).unwrap();
    assert_eq!((a.level, b.level), (0, 1));
    assert_eq!(a.y, 0.0);
    assert_eq!(b.y, cfg.row_height);
    assert_eq!(a.x, b.x);
    assert_eq!(layout.depth(), Some(1));
}

#[test]
fn test_partner_across_generations_keeps_first_level() {
    // x partners both g and c, a generation apart. x takes g's level first and
    // keeps it; nothing is reported.
    let persons = vec![person("g"), person("c"), person("x")];
    let relations = vec![
        Relation::parent_child("r1", "g", "c"),
        Relation::partner("r2", "g", "x"),
        Relation::partner("r3", "c", "x"),
    ];
    let layout = compute_layout(&persons, &relations);
    assert_eq!(layout.node(&pid("x")).unwrap().level, 0);
    assert_eq!(layout.node(&pid("c")).unwrap().level, 1);
    assert!(validate(&persons, &relations).is_empty());
}

#[test]
fn test_connectors_follow_layout() {
    let persons = vec![person("a"), person("b"), person("c")];
    let relations = vec![
        Relation::partner("p", "a", "b"),
        Relation::parent_child("k", "a", "c"),
        Relation::parent_child("gone", "nobody", "c"),
    ];
    let cfg = LayoutConfig::default();
    let layout = compute_layout_with_config(&persons, &relations, &cfg);
    let connectors = route_connectors(&layout, &cfg);
    let routed: Vec<&str> = connectors.iter().map(|c| c.relation.as_str()).collect();
    assert_eq!(routed, vec!["p", "k"]);
    assert_eq!(layout.links.len(), 3);
}

// ── Validation properties ─────────────────────────────────────────────────

#[test]
fn test_three_cycle_detected() {
    let persons = vec![person("A"), person("B"), person("C")];
    let relations = vec![
        Relation::parent_child("1", "A", "B"),
        Relation::parent_child("2", "B", "C"),
        Relation::parent_child("3", "C", "A"),
    ];
    let diagnostics = validate(&persons, &relations);
    assert!(!diagnostics.is_empty());
    assert!(diagnostics.iter().any(|d| d.category == Category::Cycle));

    // Layout still succeeds; nobody is a root so everyone defaults to level 0.
    let layout = compute_layout(&persons, &relations);
    assert!(layout.nodes.iter().all(|n| n.level == 0));
}

#[test]
fn test_parent_younger_than_child() {
    let persons = vec![
        person("parent").born(date("2000-01-01")),
        person("child").born(date("1999-01-01")),
    ];
    let relations = vec![Relation::parent_child("r", "parent", "child")];
    let diagnostics = validate(&persons, &relations);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].category, Category::Logic);
    assert_eq!(diagnostics[0].subject_id, pid("parent"));
}

#[test]
fn test_checks_accumulate() {
    let persons = vec![
        person("a")
            .born(date("1990-05-05"))
            .died(date("1980-01-01")),
        person("b").born(date("1970-01-01")),
    ];
    let relations = vec![
        Relation::parent_child("1", "a", "b"),
        Relation::parent_child("2", "b", "a"),
    ];
    let categories: Vec<Category> = validate(&persons, &relations)
        .into_iter()
        .map(|d| d.category)
        .collect();
    assert_eq!(
        categories,
        vec![Category::Date, Category::Logic, Category::Cycle]
    );
}

// ── Snapshot and search ───────────────────────────────────────────────────

#[test]
fn test_snapshot_json_into_pipeline() {
    let snapshot = Snapshot::from_json(
        r#"{
          "persons": [
            { "id": "1", "firstName": "Mara", "lastName": "Holt", "birthDate": "1931-02-14" },
            { "id": "2", "firstName": "Otto", "lastName": "Holt", "birthDate": "1929-09-03", "gender": "male" },
            { "id": "3", "firstName": "Lena", "lastName": "Holt", "birthDate": "1960-06-21" }
          ],
          "relations": [
            { "id": "r1", "type": "partner", "subType": "married", "person1Id": "1", "person2Id": "2" },
            { "id": "r2", "type": "parent_child", "subType": "adopted", "person1Id": "2", "person2Id": "3" }
          ]
        }"#,
    )
    .unwrap();

    let layout = compute_layout(&snapshot.persons, &snapshot.relations);
    assert_eq!(layout.node(&pid("3")).unwrap().level, 1);
    assert_eq!(layout.node(&pid("1")).unwrap().x, -100.0);
    assert!(validate(&snapshot.persons, &snapshot.relations).is_empty());

    let found = search_persons(&snapshot.persons, "holt").unwrap();
    assert_eq!(found.len(), 3);
    let found = search_persons(&snapshot.persons, "LEN").unwrap();
    assert_eq!(found[0].id, pid("3"));
}

#[test]
fn test_strict_snapshot_rejects_bad_sub_kind() {
    let err = Snapshot::from_json_strict(
        r#"{
          "persons": [
            { "id": "1", "firstName": "A", "lastName": "B" },
            { "id": "2", "firstName": "C", "lastName": "D" }
          ],
          "relations": [
            { "id": "r", "type": "partner", "subType": "adopted", "person1Id": "1", "person2Id": "2" }
          ]
        }"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("adopted"));
}

#[test]
fn test_stored_snapshot_with_empty_name_and_self_relation() {
    let snapshot = Snapshot::from_json(
        r#"{
          "persons": [
            { "id": "1", "firstName": "Cher", "lastName": "", "birthDate": "1946-05-20" },
            { "id": "2", "firstName": "Chaz", "lastName": "Bono", "birthDate": "1969-03-04" }
          ],
          "relations": [
            { "id": "r0", "type": "parent_child", "person1Id": "1", "person2Id": "1" },
            { "id": "r1", "type": "parent_child", "person1Id": "1", "person2Id": "2" }
          ]
        }"#,
    )
    .unwrap();

    let layout = compute_layout(&snapshot.persons, &snapshot.relations);
    assert_eq!(layout.node(&pid("1")).unwrap().level, 0);
    assert_eq!(layout.node(&pid("2")).unwrap().level, 1);
    assert_eq!(layout.links.len(), 1);
    assert!(validate(&snapshot.persons, &snapshot.relations).is_empty());
}

#[test]
fn test_layout_links_read_back_as_snapshot() {
    let persons = vec![person("1"), person("2"), person("3")];
    let relations = vec![
        Relation::partner("p", "1", "2"),
        Relation::parent_child("c", "1", "3"),
    ];
    let layout = compute_layout(&persons, &relations);
    let out = serde_json::to_value(&layout).unwrap();

    assert_eq!(out["links"][1]["type"], "parent_child");
    assert_eq!(out["links"][1]["person1Id"], "1");
    assert_eq!(out["links"][1]["person2Id"], "3");

    let refed = serde_json::json!({ "persons": out["nodes"], "relations": out["links"] });
    let snapshot = Snapshot::from_json(&refed.to_string()).unwrap();
    assert_eq!(snapshot.relations, relations);
    assert_eq!(snapshot.persons, persons);
}
