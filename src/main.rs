use std::fs;
use std::path::Path;

use icongen::bundle;

fn main() {
    let icons_dir = Path::new(bundle::ICONS_DIR);
    fs::create_dir_all(icons_dir).expect("create icons dir");

    println!("Generating placeholder icons...");

    for &size in bundle::PNG_SIZES.iter() {
        let path = bundle::write_png(icons_dir, size).expect("failed to save icon png");
        println!("  ✓ Created {}", path.display());
    }

    let path = bundle::write_ico(icons_dir).expect("failed to write icon.ico");
    println!(
        "  ✓ Created {} ({} resolutions)",
        path.display(),
        bundle::ICO_SIZES.len()
    );

    let path = bundle::write_icns_stub(icons_dir).expect("failed to write icns placeholder");
    println!(
        "  ⚠ Created {} placeholder (use mkiconset + iconutil for a proper ICNS)",
        path.display()
    );

    println!();
    println!("✅ Placeholder icons generated successfully!");
    println!();
    println!("To create custom icons:");
    println!("  1. Create a 1024x1024 PNG icon");
    println!("  2. Run: cargo tauri icon path/to/icon.png");
    println!();
    println!(
        "For the macOS icon: cargo run --bin mkiconset, then iconutil -c icns {}/icon.iconset",
        bundle::ICONS_DIR
    );
}
