use vmdl::{Value, decode, value::lookup};

const CONFIG: &str = "\
# deployment settings
Project = storefront
Route = https://shop.example.com/?ref=home

Environments:
    Staging:
        Route = https://staging.example.com
    Production:
        Route = https://shop.example.com
";

#[test]
fn lookup_follows_key_path() {
    let doc = decode(CONFIG);
    assert_eq!(lookup(&doc, &["Project"]).and_then(Value::as_str), Some("storefront"));
    assert_eq!(
        lookup(&doc, &["Route"]).and_then(Value::as_str),
        Some("https://shop.example.com/?ref=home")
    );
    assert_eq!(
        lookup(&doc, &["Environments", "Staging", "Route"]).and_then(Value::as_str),
        Some("https://staging.example.com")
    );
    assert!(lookup(&doc, &["Environments", "Missing"]).is_none());
    assert!(lookup(&doc, &["Project", "Deeper"]).is_none());
    assert!(lookup(&doc, &[]).is_none());
}

#[test]
fn value_accessors_distinguish_leaf_and_section() {
    let doc = decode(CONFIG);
    let envs = &doc["Environments"];
    assert!(envs.is_section());
    assert!(!envs.is_leaf());
    assert!(envs.as_str().is_none());
    assert_eq!(envs.as_section().map(|m| m.len()), Some(2));
    assert_eq!(
        envs.get("Production").and_then(|p| p.get_str("Route")),
        Some("https://shop.example.com")
    );
    assert!(envs.get_section("Staging").is_some());
    assert!(envs.get_str("Staging").is_none());
    assert_eq!(envs.get_path(&[]), Some(envs));

    let project = &doc["Project"];
    assert!(project.is_leaf());
    assert!(project.get("anything").is_none());
    assert!(project.as_section().is_none());
}

#[test]
fn sections_can_be_edited_in_place() {
    let mut doc = decode(CONFIG);
    if let Some(envs) = doc.get_mut("Environments").and_then(Value::as_section_mut) {
        envs.shift_remove("Production");
    }
    assert_eq!(
        vmdl::encode(&doc),
        "Project = storefront\nRoute = https://shop.example.com/?ref=home\nEnvironments:\n    Staging:\n        Route = https://staging.example.com\n"
    );
}
