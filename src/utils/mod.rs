// manna-artia/src/utils/mod.rs
use image::ImageFormat;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// `<stem>_<suffix>_<timestamp>.<ext>` next to the input, unless `output` is given.
pub fn generate_output_path(input_path: &Path, output: Option<&Path>, suffix: &str) -> PathBuf {
    match output {
        Some(path) => path.to_path_buf(),
        None => {
            let stem = input_path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("image");
            let extension = input_path
                .extension()
                .and_then(|ext| ext.to_str())
                .filter(|ext| is_supported_extension(ext))
                .unwrap_or("png");

            let timestamp = SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0);

            let mut candidate =
                input_path.with_file_name(format!("{}_{}_{}.{}", stem, suffix, timestamp, extension));
            let mut counter = 1;

            // Never overwrite an existing file
            while candidate.exists() {
                candidate = input_path.with_file_name(format!(
                    "{}_{}_{}_{}.{}",
                    stem, suffix, timestamp, counter, extension
                ));
                counter += 1;
            }

            candidate
        }
    }
}

pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let base = 1024_f64;
    let bytes_f64 = bytes as f64;
    let exponent = ((bytes_f64.log10() / base.log10()).floor() as usize).min(UNITS.len() - 1);
    let size = bytes_f64 / base.powi(exponent as i32);

    format!("{:.2} {}", size, UNITS[exponent])
}

pub fn is_supported_extension(ext: &str) -> bool {
    let extensions = ["jpg", "jpeg", "png", "gif", "bmp", "tiff", "tif", "webp"];
    extensions.contains(&ext.to_lowercase().as_str())
}

pub fn is_supported_format(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(is_supported_extension)
        .unwrap_or(false)
}

pub fn image_format_to_string(format: ImageFormat) -> String {
    match format {
        ImageFormat::Jpeg => "JPEG",
        ImageFormat::Png => "PNG",
        ImageFormat::Gif => "GIF",
        ImageFormat::WebP => "WebP",
        ImageFormat::Pnm => "PNM",
        ImageFormat::Tiff => "TIFF",
        ImageFormat::Tga => "TGA",
        ImageFormat::Bmp => "BMP",
        ImageFormat::Ico => "ICO",
        _ => "Unknown",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(512), "512.00 B");
        assert_eq!(format_file_size(1536), "1.50 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.00 MB");
    }

    #[test]
    fn test_output_path_uses_suffix() {
        let path = generate_output_path(Path::new("/tmp/photos/cat.jpg"), None, "sepia");
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("cat_sepia_"));
        assert!(name.ends_with(".jpg"));
        assert_eq!(path.parent(), Some(Path::new("/tmp/photos")));
    }

    #[test]
    fn test_explicit_output_wins() {
        let path = generate_output_path(Path::new("cat.jpg"), Some(Path::new("out.png")), "x");
        assert_eq!(path, PathBuf::from("out.png"));
    }

    #[test]
    fn test_supported_format() {
        assert!(is_supported_format(Path::new("a.JPG")));
        assert!(!is_supported_format(Path::new("a.txt")));
        assert!(!is_supported_format(Path::new("noext")));
    }
}
