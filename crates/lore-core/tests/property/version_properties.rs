use lore_core::models::{Version, VersionFilter};
use proptest::prelude::*;

fn any_version() -> impl Strategy<Value = Version> {
    prop_oneof![
        Just(Version::V5),
        Just(Version::V6),
        Just(Version::All),
        "[a-z]{1,6}[0-9]{0,2}".prop_map(|tag| Version::parse(&tag)),
    ]
}

proptest! {
    #[test]
    fn specific_filter_matches_iff_same_or_sentinel(
        record in any_version(),
        wanted in prop_oneof![Just(Version::V5), Just(Version::V6)],
    ) {
        let filter = VersionFilter::Only(wanted.clone());
        let expected = record == wanted || record == Version::All;
        prop_assert_eq!(filter.matches(&record), expected);
    }

    #[test]
    fn all_filter_matches_everything(record in any_version()) {
        prop_assert!(VersionFilter::All.matches(&record));
    }

    #[test]
    fn parse_never_panics(tag in ".{0,12}") {
        let _ = Version::parse(&tag);
        let _ = VersionFilter::parse(&tag);
    }
}
