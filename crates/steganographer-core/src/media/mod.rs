pub mod carrier;
pub mod codec_options;

use std::path::Path;

pub use carrier::{Carrier, COLOR_CHANNELS};
pub use codec_options::{AlgorithmType, CodecOptions, DctCodecOptions};

pub trait Persist {
    fn save_as(&mut self, _: &Path) -> crate::Result<()>;
}
