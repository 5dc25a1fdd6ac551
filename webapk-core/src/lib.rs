#![forbid(unsafe_code)]

pub mod config;
pub mod digest;
pub mod domain;
pub mod error;
pub mod layout;
pub mod pipeline;

pub mod template;

pub mod project {
    pub mod assets;
    pub mod scaffold;
}

pub mod pack {
    pub mod archive;
    pub mod build;
}

pub mod sign;

pub mod read {
    pub mod inspect;
    pub mod verify;
}

// Re-exports: stable API surface
pub use config::ProjectConfig;
pub use layout::ProjectLayout;
pub use pipeline::{generate, scaffold};
pub use read::inspect::{list_entries, read_entry};
pub use read::verify::verify;
