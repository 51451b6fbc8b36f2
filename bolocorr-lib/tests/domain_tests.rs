use approx::assert_relative_eq;
use bolocorr::{BcDb, BcError, DomainPolicy, QueryKind};

#[test]
fn test_domain_info_reports_table_ranges() {
    let db = BcDb::new();
    let info = db.domain_info();
    assert_eq!(info.samples, 216);
    assert_eq!(info.temperature.min, 2936.0);
    assert_eq!(info.temperature.max, 56728.0);
    assert_eq!(info.log_temperature.min, 3.4678);
    assert_eq!(info.log_temperature.max, 4.7538);
    assert_eq!(info.bv.min, -0.35);
    assert_eq!(info.bv.max, 1.80);
    assert_eq!(info.bolometric_correction.min, -5.535);
    assert_eq!(info.bolometric_correction.max, 0.035);
}

#[test]
fn test_domain_bounds_are_consistent() {
    let db = BcDb::new();
    let info = db.domain_info();
    assert!(info.temperature.min <= info.temperature.max);
    assert!(info.log_temperature.min <= info.log_temperature.max);
    assert!(info.bv.min <= info.bv.max);
    assert!(info.bolometric_correction.min <= info.bolometric_correction.max);
    // The log axis is the log of the temperature axis, up to table rounding.
    assert_relative_eq!(
        10f64.powf(info.log_temperature.min),
        info.temperature.min,
        max_relative = 1e-3
    );
    assert_relative_eq!(
        10f64.powf(info.log_temperature.max),
        info.temperature.max,
        max_relative = 1e-3
    );
}

#[test]
fn test_endpoints_are_in_domain() {
    let db = BcDb::new();
    // Closed interval: the boundary knots themselves interpolate.
    assert_relative_eq!(db.bc_from_temperature(2936.0).unwrap(), -5.535, epsilon = 1e-9);
    assert_relative_eq!(db.bc_from_temperature(56728.0).unwrap(), -4.720, epsilon = 1e-9);
    assert!(db.bc_from_log_temperature(3.4678).is_ok());
    assert!(db.bc_from_log_temperature(4.7538).is_ok());
    assert!(db.bc_from_bv_color(-0.35).is_ok());
    assert!(db.bc_from_bv_color(1.80).is_ok());
    assert!(db.temperature_from_bv(-0.35).is_ok());
    assert!(db.temperature_from_bv(1.80).is_ok());
}

#[test]
fn test_out_of_domain_is_rejected() {
    let db = BcDb::new();
    assert!(db.bc_from_temperature(2935.0).is_err());
    assert!(db.bc_from_temperature(56729.0).is_err());
    assert!(db.bc_from_log_temperature(4.76).is_err());
    assert!(db.bc_from_bv_color(1.81).is_err());
    assert!(db.temperature_from_bv(-0.36).is_err());
}

#[test]
fn test_rejection_carries_value_and_bounds() {
    let db = BcDb::new();
    match db.bc_from_temperature(2935.0) {
        Err(BcError::OutOfDomain {
            kind,
            value,
            min,
            max,
        }) => {
            assert_eq!(kind, QueryKind::Temperature);
            assert_eq!(value, 2935.0);
            assert_eq!(min, 2936.0);
            assert_eq!(max, 56728.0);
        }
        other => panic!("expected OutOfDomain, got {other:?}"),
    }
}

#[test]
fn test_rejection_message_is_specific() {
    let db = BcDb::new();
    let err = db.bc_from_temperature(2935.0).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("2935"), "message was: {msg}");
    assert!(msg.contains("2936"), "message was: {msg}");
    assert!(msg.contains("56728"), "message was: {msg}");
}

#[test]
fn test_clamp_policy_evaluates_at_bounds() {
    let db = BcDb::new();
    let out = db
        .lookup(
            QueryKind::Temperature,
            &[1000.0, 5780.0, 100000.0],
            DomainPolicy::Clamp,
        )
        .unwrap();
    assert_eq!(out.values.len(), 3);
    assert_eq!(out.warnings.len(), 2);
    assert_relative_eq!(out.values[0], -5.535, epsilon = 1e-9);
    assert_relative_eq!(out.values[2], -4.720, epsilon = 1e-9);
    assert_eq!(out.warnings[0].value, 1000.0);
    assert_eq!(out.warnings[0].min, 2936.0);
    assert_eq!(out.warnings[1].value, 100000.0);
}

#[test]
fn test_clamp_policy_reverse_lookup() {
    let db = BcDb::new();
    let out = db.inverse_lookup(&[2.5], DomainPolicy::Clamp).unwrap();
    assert_eq!(out.warnings.len(), 1);
    assert_relative_eq!(out.values[0], 2936.0, max_relative = 1e-9);
}

#[test]
fn test_in_domain_values_produce_no_warnings() {
    let db = BcDb::new();
    let out = db
        .lookup(QueryKind::BvColor, &[0.0, 0.65, 1.2], DomainPolicy::Clamp)
        .unwrap();
    assert!(out.warnings.is_empty());
}

#[test]
fn test_nan_is_never_clamped() {
    let db = BcDb::new();
    assert!(db
        .lookup(QueryKind::Temperature, &[f64::NAN], DomainPolicy::Clamp)
        .is_err());
    assert!(db.bc_from_temperature(f64::NAN).is_err());
}
