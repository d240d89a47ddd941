//! Property tests for the `.properties` parser.

use proptest::prelude::*;

use modinstall::config::Properties;

fn key() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9_.]{0,24}").unwrap()
}

fn plain_value() -> impl Strategy<Value = String> {
    // No backslashes, no leading blanks, no trailing newline characters.
    proptest::string::string_regex("[A-Za-z0-9/._~-][A-Za-z0-9/._~ -]{0,40}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,512}") {
        let _ = Properties::parse(&s);
    }

    /// PROPERTY: Every separator style yields the same entry.
    #[test]
    fn property_separators_agree(k in key(), v in plain_value()) {
        for sep in ["=", ":", " = ", " : ", " "] {
            let props = Properties::parse(&format!("{}{}{}\n", k, sep, v));
            prop_assert_eq!(props.get(&k), Some(v.as_str()), "separator {:?}", sep);
        }
    }

    /// PROPERTY: Later duplicates win and comment lines are ignored.
    #[test]
    fn property_last_duplicate_wins(k in key(), a in plain_value(), b in plain_value()) {
        let content = format!("# {}={}\n{}={}\n! note\n{}={}\n", k, "ignored", k, a, k, b);
        let props = Properties::parse(&content);
        prop_assert_eq!(props.get(&k), Some(b.as_str()));
        prop_assert_eq!(props.len(), 1);
    }

    /// PROPERTY: A backslash-newline continuation joins the value.
    #[test]
    fn property_continuation_joins(k in key(), a in plain_value(), b in plain_value()) {
        let props = Properties::parse(&format!("{}={}\\\n    {}\n", k, a, b));
        let expected = format!("{}{}", a, b);
        prop_assert_eq!(props.get(&k), Some(expected.as_str()));
    }

    /// PROPERTY: Any byte sequence loads; high bytes decode as ISO-8859-1.
    #[test]
    fn property_bytes_decode_as_latin1(
        k in key(),
        raw in proptest::collection::vec(0xA0u8..=0xFF, 1..32),
        noise in proptest::collection::vec(any::<u8>(), 0..256),
    ) {
        let _ = Properties::from_bytes(&noise);

        let mut content = format!("{}=", k).into_bytes();
        content.extend_from_slice(&raw);
        content.push(b'\n');

        let props = Properties::from_bytes(&content);
        let expected: String = raw.iter().map(|&b| b as char).collect();
        prop_assert_eq!(props.get(&k), Some(expected.as_str()));
    }
}
