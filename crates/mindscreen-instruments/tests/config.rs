use mindscreen_core::models::risk::RiskLevel;
use mindscreen_instruments::config::ScoringConfig;
use mindscreen_instruments::error::InstrumentError;
use mindscreen_instruments::response::ResponseSet;
use mindscreen_instruments::score_with;

#[test]
fn standard_bands_resolve_labels() {
    let config = ScoringConfig::standard();
    assert_eq!(config.depression.severity_label(-3), "Normal/Low");
    assert_eq!(config.depression.severity_label(0), "Normal/Low");
    assert_eq!(config.depression.severity_label(5), "Mild Depression");
    assert_eq!(config.depression.severity_label(27), "Severe Depression");
    assert_eq!(config.depression.severity_label(400), "Severe Depression");
    assert_eq!(config.anxiety.severity_label(15), "Severe Anxiety");
    assert_eq!(config.stress.severity_label(26), "Moderate Stress");
    assert_eq!(config.stress.severity_label(27), "High Perceived Stress");
}

#[test]
fn documented_maxima() {
    let config = ScoringConfig::standard();
    let maxima: Vec<u32> = config.scales().iter().map(|s| s.max).collect();
    assert_eq!(maxima, vec![27, 21, 40]);
}

#[test]
fn standard_config_survives_json() {
    let json = serde_json::to_string(&ScoringConfig::standard()).unwrap();
    let loaded = ScoringConfig::from_json(&json).unwrap();
    assert_eq!(loaded, ScoringConfig::standard());
}

#[test]
fn override_changes_scoring() {
    let mut config = ScoringConfig::standard();
    config.risk.medium_stress = 6;
    let json = serde_json::to_string(&config).unwrap();
    let config = ScoringConfig::from_json(&json).unwrap();

    let responses: ResponseSet = [("pss_1", "3"), ("pss_2", "3")].into_iter().collect();
    assert_eq!(score_with(&responses, &config).risk_level, RiskLevel::Medium);
    assert_eq!(
        score_with(&responses, &ScoringConfig::standard()).risk_level,
        RiskLevel::Low
    );
}

#[test]
fn unordered_bands_are_rejected() {
    let mut config = ScoringConfig::standard();
    config.anxiety.bands.swap(0, 1);
    let json = serde_json::to_string(&config).unwrap();

    let err = ScoringConfig::from_json(&json).unwrap_err();
    assert!(matches!(err, InstrumentError::InvalidConfig(_)), "{err}");
}

#[test]
fn duplicate_band_bounds_are_rejected() {
    let mut config = ScoringConfig::standard();
    config.stress.bands[1].min = config.stress.bands[0].min;
    assert!(matches!(
        config.validate(),
        Err(InstrumentError::InvalidConfig(_))
    ));
}

#[test]
fn empty_label_is_rejected() {
    let mut config = ScoringConfig::standard();
    config.depression.bands[0].label = "  ".to_string();
    assert!(matches!(
        config.validate(),
        Err(InstrumentError::InvalidConfig(_))
    ));
}

#[test]
fn swapped_scale_tables_are_rejected() {
    let mut config = ScoringConfig::standard();
    std::mem::swap(&mut config.depression, &mut config.anxiety);
    assert!(matches!(
        config.validate(),
        Err(InstrumentError::InvalidConfig(_))
    ));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = ScoringConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, InstrumentError::ConfigParse(_)));
}

#[test]
fn empty_bands_label_everything_baseline() {
    let mut config = ScoringConfig::standard();
    config.stress.bands.clear();
    config.validate().unwrap();
    assert_eq!(config.stress.severity_label(1000), "Normal/Low");
}
