//! Integration tests for building model data through the public API

use gwf_model_data::merge::overlay;
use gwf_model_data::{
    ModelData, ModelDataError, ModelInputs, Templates, base_model_data, make_model_data,
    river_model_data, transport_model_data,
};
use serde_json::{Value, json};

#[test]
fn test_empty_overrides_return_independent_copy_of_base() {
    let mut data = make_model_data(&json!({})).unwrap();
    assert_eq!(&data, base_model_data());

    data.insert("nrow".to_string(), json!(99));
    assert_eq!(base_model_data()["nrow"], json!(15));
}

#[test]
fn test_overrides_without_flags_overlay_base() {
    let overrides = json!({ "nrow": 20, "k": [1.0, 1.0, 1.0], "extra_key": "kept" });
    let data = make_model_data(&overrides).unwrap();

    let mut expected = base_model_data().clone();
    overlay(&mut expected, overrides.as_object().unwrap());
    assert_eq!(data, expected);
    assert_eq!(data["extra_key"], json!("kept"));
    assert_eq!(data["ncol"], json!(10));
}

#[test]
fn test_transport_flag_merges_every_extension_key() {
    let data = make_model_data(&json!({ "transport": true })).unwrap();

    let expected_len = base_model_data().len() + transport_model_data().len();
    assert_eq!(data.len(), expected_len);
    for (key, value) in transport_model_data() {
        assert_eq!(&data[key.as_str()], value);
    }
}

#[test]
fn test_override_beats_transport_default() {
    let data = make_model_data(&json!({ "transport": true, "initial_concentration": 5 })).unwrap();
    assert_eq!(data["initial_concentration"], json!(5));
}

#[test]
fn test_river_and_transport_together() {
    let data = make_model_data(&json!({ "transport": true, "river": true })).unwrap();

    let expected_len =
        base_model_data().len() + transport_model_data().len() + river_model_data().len();
    assert_eq!(data.len(), expected_len);
    assert_eq!(data["river_spd"]["rivcnd"], json!(0.05));
    assert_eq!(data["porosity"], json!(0.35));
}

#[test]
fn test_river_spd_override_is_not_deep_merged() {
    let data = make_model_data(&json!({
        "river": true,
        "river_spd": { "rivcnd": 0.5 }
    }))
    .unwrap();
    assert_eq!(data["river_spd"], json!({ "rivcnd": 0.5 }));
}

#[test]
fn test_repeated_builds_are_equal_and_independent() {
    let overrides = json!({ "transport": true, "nlay": 2 });
    let mut first = make_model_data(&overrides).unwrap();
    let second = make_model_data(&overrides).unwrap();
    assert_eq!(first, second);

    first.insert("nlay".to_string(), json!(7));
    first.remove("scheme");
    assert_eq!(second["nlay"], json!(2));
    assert_eq!(second["scheme"], json!("UPSTREAM"));
}

#[test]
fn test_templates_unchanged_by_builds() {
    let base = base_model_data().clone();
    let transport = transport_model_data().clone();
    let river = river_model_data().clone();

    for overrides in [
        json!({ "transport": true }),
        json!({ "river": true, "nrow": 3 }),
        json!({ "transport": true, "river": true, "wells": {} }),
    ] {
        make_model_data(&overrides).unwrap();
    }

    assert_eq!(base_model_data(), &base);
    assert_eq!(transport_model_data(), &transport);
    assert_eq!(river_model_data(), &river);
}

#[test]
fn test_build_without_flag_after_flagged_build_has_no_extension_keys() {
    make_model_data(&json!({ "transport": true })).unwrap();
    let data = make_model_data(&json!({ "nrow": 4 })).unwrap();
    for key in transport_model_data().keys() {
        assert!(!data.contains_key(key), "{key} leaked into a plain build");
    }
}

#[test]
fn test_non_object_overrides_fail() {
    for overrides in [json!(1), json!("nrow=3"), json!([["nrow", 3]]), Value::Null] {
        let err = make_model_data(&overrides).unwrap_err();
        assert!(matches!(err, ModelDataError::InvalidConfiguration { .. }));
    }
}

#[test]
fn test_custom_base_missing_keys_surfaces_downstream() {
    let mut base = base_model_data().clone();
    base.remove("initial_head");
    let templates = Templates::default().with_base(base);

    let data = templates.make_model_data(&json!({})).unwrap();
    let err = ModelInputs::from_data(&data).unwrap_err();
    match err {
        ModelDataError::MissingRequiredDefault { key } => assert_eq!(key, "initial_head"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_custom_transport_defaults() {
    let transport = ModelData::from_iter([("porosity".to_string(), json!(0.1))]);
    let templates = Templates::default().with_transport(transport);

    let data = templates
        .make_model_data(&json!({ "transport": "yes" }))
        .unwrap();
    assert_eq!(data["porosity"], json!(0.1));
    assert!(!data.contains_key("scheme"));
}

#[test]
fn test_full_inputs_from_merged_data() {
    let data = make_model_data(&json!({
        "transport": true,
        "river": true,
        "repeat_times": 1,
        "scheme": "CENTRAL",
    }))
    .unwrap();

    let inputs = ModelInputs::from_data(&data).unwrap();
    assert_eq!(inputs.flow.nper(), Some(2));
    assert_eq!(inputs.flow.period_data().map(|periods| periods.len()), Some(2));
    assert!(inputs.transport.is_some());
    assert_eq!(inputs.river.unwrap().river_spd.cells().count(), 7);
}
