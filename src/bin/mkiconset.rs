use std::path::Path;

use icongen::bundle;

fn main() {
    let out_dir =
        bundle::write_iconset(Path::new(bundle::ICONS_DIR)).expect("failed to write iconset");

    println!("Iconset written to {}", out_dir.display());
    println!("Convert with: iconutil -c icns {}", out_dir.display());
}
