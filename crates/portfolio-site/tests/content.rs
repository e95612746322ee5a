use portfolio::{partition_projects, preview, ContentError, Site, ELLIPSIS};

const MINIMAL: &str = r#"{
    "profile": {
        "name": "Ben", "surname": "Smith", "title": "Engineer",
        "location": "Auckland", "bio": "Builds things.", "avatar": "/me.jpeg"
    },
    "projects": [
        { "title": "A", "description": "first", "url": "https://a.example", "featured": true },
        { "title": "B", "description": "second", "url": "https://b.example", "featured": false, "historic": true }
    ]
}"#;

#[test]
fn featured_and_other_partition_with_archived_badge() {
    let site = Site::from_json(MINIMAL).unwrap();
    let groups = partition_projects(&site.projects);

    let featured: Vec<_> = groups.featured.iter().map(|p| p.title.as_str()).collect();
    let other: Vec<_> = groups.other.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(featured, ["A"]);
    assert_eq!(other, ["B"]);
    assert!(!groups.featured[0].archived);
    assert!(groups.other[0].archived);
}

#[test]
fn partition_preserves_authored_order() {
    let site = Site::embedded().unwrap();
    let groups = partition_projects(&site.projects);
    let titles: Vec<_> = groups.featured.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["Leaflet", "National Party Website", "COVID Tracker"]);
    assert!(groups.other.is_empty());
    assert!(groups.featured[2].archived);
}

#[test]
fn experience_keeps_authored_order() {
    let site = Site::embedded().unwrap();
    let periods: Vec<_> = site.experience.iter().map(|e| e.period.as_str()).collect();
    assert_eq!(periods, ["2023 - Present", "2021 - 2023", "2020, 2021"]);
}

#[test]
fn preview_is_identity_under_the_cap() {
    let short = "A Mapbox leaflet map generator.";
    assert_eq!(preview(short, 60), short);
    assert_eq!(preview(&preview(short, 60), 60), short);
}

#[test]
fn preview_truncates_long_text_deterministically() {
    let long: String = ('a'..='z').cycle().take(100).collect();
    let first = preview(&long, 60);
    let second = preview(&long, 60);

    assert_eq!(first, second);
    assert_eq!(first.chars().count(), 60 + ELLIPSIS.len());
    assert!(first.starts_with(&long[..60]));
    assert!(first.ends_with(ELLIPSIS));
}

#[test]
fn page_overrides_are_read_from_content() {
    let json = MINIMAL.replacen(
        "\"projects\"",
        "\"page\": { \"previewChars\": 40 }, \"projects\"",
        1,
    );
    let site = Site::from_json(&json).unwrap();
    assert_eq!(site.page.preview_chars, 40);
    assert_eq!(site.page.nav_threshold, 50.0);
}

#[test]
fn rejects_malformed_json() {
    let err = Site::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ContentError::Parse(_)));
}

#[test]
fn rejects_relative_project_url() {
    let json = MINIMAL.replace("https://a.example", "/a");
    let err = Site::from_json(&json).unwrap_err();
    assert!(matches!(err, ContentError::Invalid(_)));
}

#[test]
fn rejects_duplicate_project_titles() {
    let json = MINIMAL.replace("\"title\": \"B\"", "\"title\": \"A\"");
    let err = Site::from_json(&json).unwrap_err();
    assert!(matches!(err, ContentError::DuplicateKey(ref key) if key == "A"));
}

#[test]
fn rejects_unknown_icon() {
    let json = MINIMAL.replacen(
        "\"projects\"",
        "\"socials\": [{ \"name\": \"X\", \"url\": \"https://x.example\", \"icon\": \"myspace\" }], \"projects\"",
        1,
    );
    assert!(matches!(Site::from_json(&json), Err(ContentError::Parse(_))));
}
