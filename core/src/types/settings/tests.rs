use crate::types::{PanelSettings, SettingsError};

fn valid_settings() -> PanelSettings {
    PanelSettings {
        service_rating: 200,
        breaker_count: 20,
        spaces: 24,
    }
}

#[test]
fn test_valid_settings_pass() {
    assert!(valid_settings().validate().is_ok());
}

#[test]
fn test_rejects_non_positive_breaker_count() {
    let mut settings = valid_settings();
    settings.breaker_count = 0;
    assert_eq!(
        settings.validate(),
        Err(SettingsError::NonPositiveBreakerCount)
    );

    settings.breaker_count = -3;
    assert_eq!(
        settings.validate(),
        Err(SettingsError::NonPositiveBreakerCount)
    );
}

#[test]
fn test_rejects_non_positive_service_rating() {
    let mut settings = valid_settings();
    settings.service_rating = 0;
    assert_eq!(
        settings.validate(),
        Err(SettingsError::NonPositiveServiceRating)
    );
}

#[test]
fn test_rejects_odd_or_non_positive_spaces() {
    let mut settings = valid_settings();
    settings.spaces = 23;
    settings.breaker_count = 10;
    assert_eq!(settings.validate(), Err(SettingsError::InvalidSpaces(23)));

    settings.spaces = -2;
    assert_eq!(settings.validate(), Err(SettingsError::InvalidSpaces(-2)));
}

#[test]
fn test_rejects_breaker_count_over_spaces() {
    let mut settings = valid_settings();
    settings.breaker_count = 26;
    assert_eq!(
        settings.validate(),
        Err(SettingsError::TooManyBreakers {
            count: 26,
            spaces: 24,
        })
    );
}

#[test]
fn test_reports_first_failure_in_form_order() {
    // Breaker count is checked before service rating, matching the
    // order the edit form walks its fields.
    let settings = PanelSettings {
        service_rating: 0,
        breaker_count: 0,
        spaces: 23,
    };
    assert_eq!(
        settings.validate(),
        Err(SettingsError::NonPositiveBreakerCount)
    );
}

#[test]
fn test_json_round_trip() {
    let settings = valid_settings();
    let json = serde_json::to_string(&settings).unwrap();

    assert!(json.contains(r#""serviceRating":200"#));
    assert!(json.contains(r#""breakerCount":20"#));
    assert!(json.contains(r#""spaces":24"#));

    let back: PanelSettings = serde_json::from_str(&json).unwrap();
    assert_eq!(back, settings);
}

#[test]
fn test_missing_spaces_parses_to_default() {
    let json = r#"{"serviceRating":100,"breakerCount":12}"#;
    let settings: PanelSettings = serde_json::from_str(json).unwrap();
    assert_eq!(settings.spaces, 24);
}
