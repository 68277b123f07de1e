use scriptreel::{Reel, wellness_reel};

#[test]
fn showcase_reel_roundtrips_through_json() {
    let reel = wellness_reel();
    let s = serde_json::to_string_pretty(&reel).unwrap();
    let de: Reel = serde_json::from_str(&s).unwrap();

    de.validate().unwrap();
    assert_eq!(de.title, reel.title);
    assert_eq!(de.scenes.len(), 5);
    assert_eq!(de.total_duration_ms(), 20_000);

    // track shape survives: scene 1's flicker loop is still a loop
    let s2 = serde_json::to_string(&de).unwrap();
    assert_eq!(s2, serde_json::to_string(&reel).unwrap());
}

#[test]
fn minimal_reel_parses_with_defaults() {
    // optional fields (entrance, caption, layers) may be omitted entirely
    let s = r#"{
        "title": "Tiny",
        "tagline": "",
        "outro": "bye",
        "scenes": [
            { "name": "only", "duration_ms": 1000 }
        ]
    }"#;
    let reel: Reel = serde_json::from_str(s).unwrap();
    reel.validate().unwrap();
    assert!(reel.scenes[0].layers.is_empty());
    assert!(reel.scenes[0].entrance.is_none());
}

#[test]
fn zero_duration_scene_fails_validation_not_parsing() {
    let s = r#"{
        "title": "Bad",
        "tagline": "",
        "outro": "",
        "scenes": [
            { "name": "broken", "duration_ms": 0 }
        ]
    }"#;
    let reel: Reel = serde_json::from_str(s).unwrap();
    let err = reel.validate().unwrap_err();
    assert!(err.to_string().contains("duration_ms"));
}

#[test]
fn garbage_json_is_rejected() {
    assert!(serde_json::from_str::<Reel>("{\"title\": 3}").is_err());
}
