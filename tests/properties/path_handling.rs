//! Property tests for path expansion and release path derivation.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use modinstall::infrastructure::fs::expand_home;
use modinstall::ArtifactSpec;

fn relative_suffix() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[A-Za-z0-9._-]{1,16}").unwrap();
    proptest::collection::vec(segment, 0..=4).prop_map(|segments| segments.join("/"))
}

fn non_tilde_path_string() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9./_-]{0,64}")
        .unwrap()
        .prop_filter("must not start with ~", |s| !s.starts_with('~'))
}

fn word() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9][A-Za-z0-9._-]{0,16}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `expand_home("~/...")` expands to `home_dir()/...` when HOME is known.
    #[test]
    fn property_tilde_expands(suffix in relative_suffix()) {
        let tilde_path = if suffix.is_empty() {
            "~".to_string()
        } else {
            format!("~/{}", suffix)
        };

        let expanded = expand_home(Path::new(&tilde_path));

        if let Some(home) = dirs::home_dir() {
            let expected = if suffix.is_empty() { home } else { home.join(&suffix) };
            prop_assert_eq!(expanded, expected);
        } else {
            prop_assert_eq!(expanded, PathBuf::from(&tilde_path));
        }
    }

    /// PROPERTY: Paths without a leading tilde are left alone.
    #[test]
    fn property_non_tilde_is_identity(s in non_tilde_path_string()) {
        prop_assert_eq!(expand_home(Path::new(&s)), PathBuf::from(&s));
    }

    /// PROPERTY: The release jar is `<build>/libs/<name>-<version>.jar`,
    /// ignoring surrounding blanks.
    #[test]
    fn property_release_path(name in word(), version in word(), pad in "[ \t]{0,3}") {
        let build = PathBuf::from("/project/build");
        let padded_name = format!("{}{}{}", pad, name, pad);
        let spec = ArtifactSpec::release(build.clone(), Some(padded_name.as_str()), Some(version.as_str()));

        let resolved = spec.resolve().unwrap();
        prop_assert_eq!(resolved, build.join("libs").join(format!("{}-{}.jar", name, version)));
    }

    /// PROPERTY: A blank name or version cannot name an artifact.
    #[test]
    fn property_blank_release_is_unresolved(name in word(), blank in "[ \t]{0,3}") {
        let build = PathBuf::from("build");
        prop_assert!(ArtifactSpec::release(build.clone(), Some(name.as_str()), Some(blank.as_str())).resolve().is_err());
        prop_assert!(ArtifactSpec::release(build.clone(), Some(blank.as_str()), Some(name.as_str())).resolve().is_err());
        prop_assert!(ArtifactSpec::release(build, None, Some(name.as_str())).resolve().is_err());
    }
}
