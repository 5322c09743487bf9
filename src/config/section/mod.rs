//! Configuration section definitions.
//!
//! | Section      | Purpose                                         |
//! |--------------|-------------------------------------------------|
//! | `[build]`    | Build output directory and public path          |
//! | `[sw]`       | Service worker destination + generation options |
//! | `[manifest]` | Precache manifest derivation and naming         |
//! | `[imports]`  | Runtime-import source and extra import scripts  |

mod build;
mod imports;
mod manifest;
mod sw;

pub use build::BuildConfig;
pub use imports::{ImportsConfig, WorkboxSource};
pub use manifest::ManifestConfig;
pub use sw::SwConfig;
