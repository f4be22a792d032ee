//! Project data shared with the editor and persisted across sessions

pub mod schema;
pub mod store;

pub use schema::{
    AutozoomSettings, RecordingMetadata, ZoomDepth, ZoomFocus, ZoomRegion, METADATA_VERSION,
};
pub use store::{metadata_path_for_video, JsonFileStore, MetadataStore, StoreError};
