use fmesh_domain::flags::{
    ENV_FLAG_IS_TEST, FLAG_ALPHA_FEATURES, FLAG_AWS_LAMBDA_FEATURE_SERVER,
    FLAG_DIRECT_INGEST_TO_ONLINE_STORE, FLAG_GO_FEATURE_SERVER, FLAG_NAMES,
    FLAG_ON_DEMAND_TRANSFORMS, RuntimeFlags, is_recognized,
};

#[test]
fn constants_match_flag_strings() {
    assert_eq!(FLAG_ALPHA_FEATURES, "alpha_features");
    assert_eq!(FLAG_ON_DEMAND_TRANSFORMS, "on_demand_transforms");
    assert_eq!(FLAG_AWS_LAMBDA_FEATURE_SERVER, "aws_lambda_feature_server");
    assert_eq!(FLAG_DIRECT_INGEST_TO_ONLINE_STORE, "direct_ingest_to_online_store");
    assert_eq!(FLAG_GO_FEATURE_SERVER, "go_feature_server");
    assert_eq!(ENV_FLAG_IS_TEST, "IS_TEST");
}

#[test]
fn every_registered_name_is_recognized() {
    for name in FLAG_NAMES {
        assert!(is_recognized(name), "expected '{name}' to be recognized");
    }
}

#[test]
fn unknown_names_are_rejected() {
    assert!(!is_recognized(""));
    assert!(!is_recognized("not_a_flag"));
    assert!(!is_recognized("Alpha_Features"));
    assert!(!is_recognized("ALPHA_FEATURES"));
    assert!(!is_recognized(" alpha_features"));
    // The env gate is not a flag name.
    assert!(!is_recognized(ENV_FLAG_IS_TEST));
}

#[test]
fn test_mode_follows_variable_presence() {
    assert!(!RuntimeFlags::from_test_var(None).test_mode);
    assert!(RuntimeFlags::from_test_var(Some("1".into())).test_mode);
    // Presence alone enables test mode, the value is irrelevant.
    assert!(RuntimeFlags::from_test_var(Some("".into())).test_mode);
    assert!(RuntimeFlags::from_test_var(Some("false".into())).test_mode);
}

#[test]
fn runtime_flags_default_is_off() {
    assert_eq!(RuntimeFlags::default(), RuntimeFlags { test_mode: false });
}
