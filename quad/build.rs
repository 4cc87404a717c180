use glob::glob;

#[cfg(feature = "spirv")]
use spirv_builder::{MetadataPrintout, SpirvBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    for path in glob("../shaders/*")?
        .filter_map(Result::ok)
        .filter(|path| path.is_dir())
    {
        println!("cargo:rerun-if-changed={}", path.join("src").display());

        #[cfg(feature = "spirv")]
        SpirvBuilder::new(path.as_path().as_os_str(), "spirv-unknown-spv1.5")
            .print_metadata(MetadataPrintout::Full)
            .build()?;
    }
    Ok(())
}
