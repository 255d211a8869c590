use super::*;

#[test]
fn empty_page_supports_nothing() {
    assert_eq!(PageSurvey::default().capabilities(), Capabilities::default());
}

#[test]
fn each_feature_follows_its_markup() {
    let survey = PageSurvey {
        has_notice: true,
        has_card: true,
        particle_count: 4,
        years: vec!["2023".to_owned()],
        has_progress: true,
        counters: vec![CounterSeed { count: Some("12".to_owned()), text: "0".to_owned() }],
        ..PageSurvey::default()
    };
    let caps = survey.capabilities();
    assert!(caps.notice && caps.sections && caps.particles && caps.timeline && caps.progress && caps.counters);
}

#[test]
fn blank_years_do_not_enable_timeline() {
    let survey = PageSurvey { years: vec![String::new()], ..PageSurvey::default() };
    assert!(!survey.capabilities().timeline);
}

#[test]
fn counters_without_targets_are_inert() {
    let survey = PageSurvey {
        counters: vec![
            CounterSeed { count: None, text: "—".to_owned() },
            CounterSeed { count: Some("0".to_owned()), text: "0".to_owned() },
        ],
        ..PageSurvey::default()
    };
    assert!(!survey.capabilities().counters);
}
