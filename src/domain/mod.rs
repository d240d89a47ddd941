//! Domain Layer
//!
//! Pure install logic types without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Deployment directive and install outcomes
//! - `value_objects/` - Immutable value types (ContentHash, Setting, ConfigWarning)
//! - `ports/` - Interface definitions for infrastructure (FileSystem, BuildRunner)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or spawns processes
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod value_objects;
