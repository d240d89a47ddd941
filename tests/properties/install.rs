//! Property tests for the install use case on a real filesystem.

use proptest::prelude::*;

use modinstall::{
    ArtifactSpec, DeploymentDirective, InstallOptions, InstallOutcome, InstallUseCase, LocalFs,
};

fn jar_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_-]{0,15}-[0-9]{1,2}\\.[0-9]{1,2}\\.jar").unwrap()
}

fn install(directive: &DeploymentDirective) -> InstallOutcome {
    InstallUseCase::new(LocalFs::new())
        .execute(directive, &InstallOptions::default())
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: After an install the destination holds exactly one file of
    /// that name with the artifact's bytes, whatever was there before.
    #[test]
    fn property_install_leaves_exact_bytes(
        name in jar_name(),
        content in proptest::collection::vec(any::<u8>(), 0..4096),
        stale in proptest::option::of(proptest::collection::vec(any::<u8>(), 0..512)),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let build = dir.path().join("build");
        let mods = dir.path().join("mods");
        std::fs::create_dir_all(&build).unwrap();
        std::fs::create_dir_all(&mods).unwrap();

        let artifact = build.join(&name);
        std::fs::write(&artifact, &content).unwrap();
        if let Some(stale) = &stale {
            std::fs::write(mods.join(&name), stale).unwrap();
        }

        let directive = DeploymentDirective::new(ArtifactSpec::Path(artifact), Some(mods.clone()));
        let outcome = install(&directive);

        let is_installed = matches!(outcome, InstallOutcome::Installed { replaced, .. } if replaced == stale.is_some());
        prop_assert!(is_installed);
        prop_assert_eq!(std::fs::read(mods.join(&name)).unwrap(), content.clone());
        prop_assert_eq!(std::fs::read_dir(&mods).unwrap().count(), 1);

        // Idempotent
        install(&directive);
        prop_assert_eq!(std::fs::read(mods.join(&name)).unwrap(), content);
        prop_assert_eq!(std::fs::read_dir(&mods).unwrap().count(), 1);
    }

    /// PROPERTY: A missing destination is a skip and nothing is created.
    #[test]
    fn property_missing_destination_never_writes(
        name in jar_name(),
        missing in proptest::string::string_regex("[a-z]{1,8}(/[a-z]{1,8}){0,2}").unwrap(),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let artifact = dir.path().join(&name);
        std::fs::write(&artifact, b"jar").unwrap();
        let destination = dir.path().join("absent").join(&missing);

        let outcome = install(&DeploymentDirective::new(
            ArtifactSpec::Path(artifact),
            Some(destination.clone()),
        ));

        prop_assert!(outcome.is_skipped());
        prop_assert!(!dir.path().join("absent").exists());
    }

    /// PROPERTY: Without a destination the artifact is never even looked at.
    #[test]
    fn property_unset_destination_always_skips(
        raw in "(?s).{0,64}",
    ) {
        let directive = DeploymentDirective::new(ArtifactSpec::Path(raw.into()), None);
        prop_assert!(install(&directive).is_skipped());
    }
}
