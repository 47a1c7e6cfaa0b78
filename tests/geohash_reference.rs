//! Cross-checks against the `geohash` crate.
//!
//! Both implementations bisect the same ranges with the same alphabet, so
//! encoded strings must agree and decoded points must fall inside the cell
//! the reference reports.

use geo_coordinate::GeoCoordinate;
use proptest::prelude::*;

fn reference_encode(coord: GeoCoordinate, length: usize) -> String {
    geohash::encode(
        geohash::Coord {
            x: coord.longitude(),
            y: coord.latitude(),
        },
        length,
    )
    .expect("reference accepts in-range coordinates")
}

#[test]
fn known_location_matches_reference() {
    let coord = GeoCoordinate::new(-122.4194, 37.7749).unwrap();
    let ours = coord.to_geohash_with_length(8).unwrap();
    assert_eq!(ours, reference_encode(coord, 8));
    assert_eq!(ours, "9q8yyk8y");
}

#[test]
fn reference_values_match_reference_crate() {
    for (lon, lat) in [
        (106.709_437, -6.329_094),
        (106.710_205, -6.330_120),
        (106.800_254, 0.177_515),
    ] {
        let coord = GeoCoordinate::new(lon, lat).unwrap();
        assert_eq!(
            coord.to_geohash_with_length(10).unwrap(),
            reference_encode(coord, 10)
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: geohash strings agree with the reference implementation.
    #[test]
    fn encode_agrees_with_reference(
        lon in -179.999f64..179.999,
        lat in -89.999f64..89.999,
        length in 1usize..=10,
    ) {
        let coord = GeoCoordinate::new(lon, lat).expect("in range");
        prop_assert_eq!(
            coord.to_geohash_with_length(length).expect("valid length"),
            reference_encode(coord, length)
        );
    }

    /// Property: our decoded point lies inside the cell the reference decodes.
    #[test]
    fn decode_lies_in_reference_cell(
        lon in -179.999f64..179.999,
        lat in -89.999f64..89.999,
        length in 1usize..=10,
    ) {
        let coord = GeoCoordinate::new(lon, lat).expect("in range");
        let text = coord.to_geohash_with_length(length).expect("valid length");

        let ours = GeoCoordinate::from_geohash(&text).expect("own output decodes");
        let (center, lon_err, lat_err) = geohash::decode(&text).expect("reference decodes");

        prop_assert!((ours.longitude() - center.x).abs() <= lon_err);
        prop_assert!((ours.latitude() - center.y).abs() <= lat_err);
    }
}
