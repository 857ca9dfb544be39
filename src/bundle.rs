use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};

use crate::icon;

/// Output directory for the packaging pipeline, relative to the repo root.
pub const ICONS_DIR: &str = "icons";

/// Sizes written as standalone PNGs.
pub const PNG_SIZES: [u32; 5] = [32, 128, 256, 512, 1024];

/// Resolutions embedded in `icon.ico`; the first entry is the primary frame.
pub const ICO_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

/// The ten standard entries of a macOS iconset: nominal pixel size and
/// filename, as `iconutil` expects them.
pub const ICONSET_TARGETS: [(u32, &str); 10] = [
    (16, "icon_16x16.png"),
    (32, "icon_16x16@2x.png"),
    (32, "icon_32x32.png"),
    (64, "icon_32x32@2x.png"),
    (128, "icon_128x128.png"),
    (256, "icon_128x128@2x.png"),
    (256, "icon_256x256.png"),
    (512, "icon_256x256@2x.png"),
    (512, "icon_512x512.png"),
    (1024, "icon_512x512@2x.png"),
];

/// Filename for a PNG of the given size. 256 is the retina variant of the
/// 128 icon and 1024 is the master copy, so those two carry role names.
pub fn png_filename(size: u32) -> String {
    match size {
        256 => "128x128@2x.png".to_string(),
        1024 => "icon.png".to_string(),
        s => format!("{}x{}.png", s, s),
    }
}

/// Render one size and save it as a PNG under `dir`.
pub fn write_png(dir: &Path, size: u32) -> Result<PathBuf, image::ImageError> {
    let path = dir.join(png_filename(size));
    icon::generate_icon(size).save(&path)?;
    Ok(path)
}

/// Assemble `icon.ico` holding every resolution in [`ICO_SIZES`].
pub fn write_ico(dir: &Path) -> io::Result<PathBuf> {
    let path = dir.join("icon.ico");
    let mut icons = IconDir::new(ResourceType::Icon);
    for &size in ICO_SIZES.iter() {
        let rgba = icon::generate_icon(size).into_raw();
        let icon_image = IconImage::from_rgba_data(size, size, rgba);
        icons.add_entry(IconDirEntry::encode(&icon_image)?);
    }
    let mut file = File::create(&path)?;
    icons.write(&mut file)?;
    Ok(path)
}

/// `icon.icns` stays a plain-text stub: real ICNS containers come out of
/// `iconutil` (fed by the mkiconset binary) or the packaging tool itself.
pub fn write_icns_stub(dir: &Path) -> io::Result<PathBuf> {
    let path = dir.join("icon.icns");
    let mut file = File::create(&path)?;
    writeln!(
        file,
        "# Placeholder - run mkiconset and `iconutil -c icns`, or `cargo tauri icon`, for a real ICNS"
    )?;
    Ok(path)
}

/// Write the `iconutil` input directory `icon.iconset/` under `dir`.
pub fn write_iconset(dir: &Path) -> Result<PathBuf, image::ImageError> {
    let out_dir = dir.join("icon.iconset");
    fs::create_dir_all(&out_dir)?;

    // 1) Basissprite erzeugen (1024x1024)
    let base_sz = 1024u32;
    let base = icon::generate_icon(base_sz);

    // 2) Zielgrößen (px)
    for (sz, name) in ICONSET_TARGETS {
        let resized = if sz == base_sz {
            base.clone()
        } else {
            image::imageops::resize(&base, sz, sz, image::imageops::FilterType::Lanczos3)
        };
        resized.save(out_dir.join(name))?;
    }

    Ok(out_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_mapping_is_exact() {
        assert_eq!(png_filename(32), "32x32.png");
        assert_eq!(png_filename(128), "128x128.png");
        assert_eq!(png_filename(256), "128x128@2x.png");
        assert_eq!(png_filename(512), "512x512.png");
        assert_eq!(png_filename(1024), "icon.png");
    }

    #[test]
    fn png_sizes_map_to_distinct_filenames() {
        let names: Vec<String> = PNG_SIZES.iter().map(|&s| png_filename(s)).collect();
        let mut dedup = names.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), names.len(), "duplicate output name in {:?}", names);
    }
}
