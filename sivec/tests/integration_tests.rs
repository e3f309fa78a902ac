//! Integration-level scenario tests for the `sivec` facade crate.

use sivec::*;

use approx::assert_abs_diff_eq;
use proptest::prelude::*;

// Display values picked so zeros land differently per unit: 0 degC is a
// non-zero SI value (273.15 K) while -273.15 degC is exactly SI zero.
const READINGS: [f64; 10] = [
    0.0, 123.456, 0.0, -273.15, -273.15, 0.0, -273.15, 234.567, 0.0, 0.0,
];

#[test]
fn cardinality_depends_on_the_construction_unit() {
    let kelvin = TemperatureVector::from_display(&READINGS, &units::kelvin(), StorageKind::Dense)
        .unwrap();
    let celsius =
        TemperatureVector::from_display(&READINGS, &units::celsius(), StorageKind::Dense).unwrap();

    // In kelvin the five non-zero display values stay non-zero SI values.
    assert_eq!(kelvin.cardinality(), 5);
    // In celsius every 0 degC reading becomes 273.15 K and every
    // -273.15 degC reading becomes exactly 0 K.
    assert_eq!(celsius.cardinality(), 7);

    // Representation never changes the answer.
    assert_eq!(kelvin.to_sparse().cardinality(), 5);
    assert_eq!(celsius.to_sparse().cardinality(), 7);
}

#[test]
fn dense_and_sparse_agree_everywhere() {
    let dense = LengthVector::from_display(&READINGS, &units::meter(), StorageKind::Dense).unwrap();
    let sparse = dense.to_sparse();

    assert_eq!(dense, sparse);
    assert_eq!(dense.len(), sparse.len());
    assert_eq!(dense.cardinality(), sparse.cardinality());
    assert_abs_diff_eq!(dense.zsum().si(), sparse.zsum().si(), epsilon = 1e-9);
    for i in 0..dense.len() {
        assert_eq!(dense.get_si(i).unwrap(), sparse.get_si(i).unwrap());
    }
    assert_eq!(sparse.to_dense(), dense);
}

#[test]
fn immutable_vectors_stay_untouched_on_rejected_writes() {
    let v = LengthVector::from_si(&[1.0, 2.0, 3.0], StorageKind::Sparse);
    let mut probe = v.clone();

    assert_eq!(probe.set(0, 9.0).unwrap_err(), QuantityError::ImmutabilityViolation);
    assert!(probe.ceil().is_err());
    assert!(probe.assign(|x| x + 1.0).is_err());
    assert_eq!(probe, v);

    let mut writable = v.mutable();
    writable.set(0, 9.0).unwrap();
    assert_eq!(writable.values_si(), vec![9.0, 2.0, 3.0]);
    assert_eq!(v.values_si(), vec![1.0, 2.0, 3.0]);

    let mut refrozen = writable.immutable();
    assert!(refrozen.set(0, 0.0).is_err());
}

#[test]
fn absolute_and_relative_algebra() {
    let departure = TimeVector::from_si(&[0.0, 3_600.0], StorageKind::Dense);
    let travel =
        DurationVector::from_display(&[1.0, 2.0], &units::hour(), StorageKind::Dense).unwrap();

    let arrival = departure.plus_rel(&travel).unwrap();
    assert_eq!(arrival.values_si(), vec![3_600.0, 10_800.0]);

    let back = arrival.minus_rel(&travel).unwrap();
    assert_eq!(back, departure);

    let elapsed: DurationVector = arrival.minus_abs(&departure).unwrap();
    assert_eq!(elapsed.values_si(), vec![3_600.0, 7_200.0]);
    assert_abs_diff_eq!(
        elapsed.get_in(0, &units::hour()).unwrap(),
        1.0,
        epsilon = 1e-12
    );
}

#[test]
fn mixed_units_add_through_si() {
    let km = LengthVector::from_display(&[1.0, 0.5], &units::kilometer(), StorageKind::Dense)
        .unwrap();
    let m = LengthVector::from_display(&[250.0, 0.0], &units::meter(), StorageKind::Sparse)
        .unwrap();
    let sum = km.plus(&m).unwrap();
    assert_eq!(sum.values_si(), vec![1_250.0, 500.0]);
    assert_eq!(sum.unit().symbol(), "km");
    assert_abs_diff_eq!(sum.zsum().value(), 1.75, epsilon = 1e-12);
}

#[test]
fn cross_kind_arithmetic_goes_through_sivector() {
    let force = ForceVector::from_si(&[10.0, 0.0], StorageKind::Dense);
    let arm = LengthVector::from_si(&[2.0, 5.0], StorageKind::Dense);

    let product = force.times(&arm).unwrap();
    assert_eq!(product.dims(), "kg m2 s-2".parse().unwrap());

    // The signature is ambiguous; the caller picks the kind.
    let work = product.as_quantity::<Energy>().unwrap();
    let torque = product.as_quantity::<Torque>().unwrap();
    assert_eq!(work.values_si(), vec![20.0, 0.0]);
    assert_eq!(torque.unit().symbol(), "N.m");
    assert!(product.as_quantity::<Power>().is_err());
}

#[test]
fn division_by_zero_is_data() {
    let distance = LengthVector::from_si(&[100.0, 0.0], StorageKind::Sparse);
    let elapsed = DurationVector::from_si(&[0.0, 0.0], StorageKind::Sparse);

    let speed = distance.divide(&elapsed).unwrap().as_quantity::<Speed>().unwrap();
    assert_eq!(speed.get_si(0).unwrap(), f64::INFINITY);
    assert!(speed.get_si(1).unwrap().is_nan());
}

#[test]
fn registry_mints_each_signature_once() {
    let a = SiVector::of(&[1.0], "kg m-3 s5", StorageKind::Dense).unwrap();
    let b = SiVector::of(&[2.0], "kg m-3 s5", StorageKind::Dense).unwrap();
    assert_eq!(a.unit(), b.unit());
    assert_eq!(a.unit().symbol(), "kg m-3 s5");
}

#[test]
fn grade_scale_units_convert_through_radians() {
    let slope = AngleVector::from_display(
        &[0.0, 100.0],
        &units::percent_grade(),
        StorageKind::Dense,
    )
    .unwrap();
    assert_abs_diff_eq!(
        slope.get_si(1).unwrap(),
        std::f64::consts::FRAC_PI_4,
        epsilon = 1e-12
    );
    assert_abs_diff_eq!(
        slope.get_in(1, &units::degree()).unwrap(),
        45.0,
        epsilon = 1e-9
    );
    let display: Vec<f64> = slope.iter().collect();
    assert_abs_diff_eq!(display[1], 100.0, epsilon = 1e-9);
}

#[test]
fn sparse_maps_validate_their_indices() {
    let ok = LengthVector::from_map(&[(0, 1.0), (9, 2.0)], 10, &units::meter(), StorageKind::Sparse);
    assert!(ok.is_ok());

    let out_of_range =
        LengthVector::from_map(&[(10, 1.0)], 10, &units::meter(), StorageKind::Sparse);
    assert_eq!(
        out_of_range.unwrap_err(),
        QuantityError::InvalidSparseIndex { index: 10, size: 10 }
    );

    let duplicate =
        LengthVector::from_map(&[(3, 1.0), (3, 2.0)], 10, &units::meter(), StorageKind::Dense);
    assert_eq!(
        duplicate.unwrap_err(),
        QuantityError::DuplicateSparseIndex { index: 3 }
    );
}

#[test]
fn iteration_yields_display_values_in_order() {
    let v = LengthVector::from_display(&[1.0, 0.0, 2.5], &units::kilometer(), StorageKind::Sparse)
        .unwrap();
    let display: Vec<f64> = v.iter().collect();
    assert_eq!(display, vec![1.0, 0.0, 2.5]);
    let si: Vec<f64> = v.iter_si().collect();
    assert_eq!(si, vec![1_000.0, 0.0, 2_500.0]);
}

#[test]
fn scalars_interoperate_with_vectors() {
    let readings = vec![
        LengthScalar::new(1.0, &units::kilometer()).unwrap(),
        LengthScalar::new(2.5, &units::kilometer()).unwrap(),
        LengthScalar::new(0.0, &units::kilometer()).unwrap(),
    ];
    let v = LengthVector::from_scalars(&readings, StorageKind::Sparse);
    assert_eq!(v.len(), 3);
    assert_eq!(v.cardinality(), 2);
    assert_eq!(v.get(1).unwrap(), readings[1]);
    assert_eq!(v.get(1).unwrap().to_string(), "2.5 km");
}

proptest! {
    #[test]
    fn prop_storage_kind_never_changes_results(
        values in proptest::collection::vec(
            prop_oneof![Just(0.0), -1e6..1e6f64],
            1..24,
        )
    ) {
        let dense = LengthVector::from_si(&values, StorageKind::Dense);
        let sparse = dense.to_sparse();
        prop_assert_eq!(dense.cardinality(), sparse.cardinality());
        prop_assert_eq!(dense.zsum().si(), sparse.zsum().si());
        prop_assert_eq!(
            dense.plus(&sparse).unwrap(),
            sparse.plus(&dense).unwrap()
        );
    }
}
