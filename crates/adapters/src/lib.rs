mod decoder;
pub mod fs;
pub mod presenters;
pub mod seed;

pub use decoder::{local_path_for_uri, ImageCrateDecoder};
pub use fs::WalkdirImageSource;
pub use presenters::present_record_row;
pub use seed::{BuiltinSeed, JsonSeedFile};
