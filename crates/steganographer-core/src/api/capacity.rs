use std::path::{Path, PathBuf};

use crate::{Carrier, CodecOptions, SteganoError};

pub fn prepare() -> CapacityApi {
    CapacityApi::default()
}

#[derive(Default, Debug)]
pub struct CapacityApi {
    image: Option<PathBuf>,
    options: CodecOptions,
}

impl CapacityApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// Number of characters a single color plane of the image can carry
    pub fn execute(self) -> Result<usize, SteganoError> {
        let Some(image) = self.image else {
            return Err(SteganoError::CarrierNotSet);
        };

        Carrier::from_file(&image)?.capacity(&self.options.algorithm()?)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::test_utils::prepare_gradient_image;
    use crate::DctCodecOptions;

    #[test]
    fn should_report_capacity_of_image_file() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let image = temp_dir.path().join("carrier.png");
        prepare_gradient_image(128, 128)
            .save(&image)
            .expect("Failed to write carrier");

        assert_eq!(prepare().with_image(&image).execute().unwrap(), 2340);
        assert_eq!(
            prepare()
                .with_image(&image)
                .with_options(CodecOptions::Dct(DctCodecOptions::default()))
                .execute()
                .unwrap(),
            35
        );
    }

    #[test]
    fn should_fail_on_unsupported_media() {
        assert!(matches!(
            prepare().with_image("Cargo.toml").execute(),
            Err(SteganoError::UnsupportedMedia)
        ));
        assert!(matches!(
            prepare().execute(),
            Err(SteganoError::CarrierNotSet)
        ));
    }
}
