//! Test fixtures - reusable content for tests.

/// Bytes standing in for a built jar
pub const JAR_V1: &[u8] = b"PK\x03\x04 mymod 1.0 build one";

/// A different build of the same jar
pub const JAR_V2: &[u8] = b"PK\x03\x04 mymod 1.0 build two, slightly longer";

pub const PROJECT_NAME: &str = "mymod";
pub const PROJECT_VERSION: &str = "1.0";
pub const JAR_NAME: &str = "mymod-1.0.jar";
