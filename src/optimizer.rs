use crate::config::ImageSettings;
use crate::constants::{has_extension, DUPLICATE_MARKER, IMAGE_EXTENSIONS};
use crate::error::{readable_entry, PipelineError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgb, RgbImage};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};
use walkdir::WalkDir;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Outcome of optimizing one image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Optimized {
    pub source: PathBuf,
    /// File that now holds the image (a `.jpg` sibling for converted PNGs)
    pub output: PathBuf,
    pub size_before: u64,
    pub size_after: u64,
}

impl Optimized {
    pub fn reduction_percent(&self) -> f64 {
        if self.size_before == 0 {
            return 0.0;
        }
        (self.size_before as f64 - self.size_after as f64) / self.size_before as f64 * 100.0
    }
}

/// Totals for a directory run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptimizeSummary {
    pub found: usize,
    pub optimized: usize,
    pub failed: usize,
    pub bytes_before: u64,
    pub bytes_after: u64,
    /// Outputs still larger than the target size
    pub over_target: Vec<PathBuf>,
}

// ============================================================================
// Pixel Work
// ============================================================================

/// Dimensions that fit inside `max_width` x `max_height` keeping the aspect
/// ratio. Images already inside the box are left alone.
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width <= max_width && height <= max_height {
        return (width, height);
    }

    let scale = f64::min(
        max_width as f64 / width as f64,
        max_height as f64 / height as f64,
    );
    let w = ((width as f64 * scale).round() as u32).clamp(1, max_width);
    let h = ((height as f64 * scale).round() as u32).clamp(1, max_height);
    (w, h)
}

/// Convert to 8-bit RGB, compositing any transparency onto white
pub fn flatten_to_rgb(img: &DynamicImage) -> RgbImage {
    if !img.color().has_alpha() {
        return img.to_rgb8();
    }

    let rgba = img.to_rgba8();
    let mut rgb = RgbImage::new(rgba.width(), rgba.height());
    for (x, y, pixel) in rgba.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let alpha = a as u32;
        let blend = |c: u8| ((c as u32 * alpha + 255 * (255 - alpha) + 127) / 255) as u8;
        rgb.put_pixel(x, y, Rgb([blend(r), blend(g), blend(b)]));
    }
    rgb
}

/// Decode, flatten and downscale an image
fn prepare(path: &Path, settings: &ImageSettings) -> Result<RgbImage> {
    let img = image::open(path)?;
    let rgb = flatten_to_rgb(&img);

    let (width, height) = rgb.dimensions();
    let (w, h) = fit_within(width, height, settings.max_width, settings.max_height);
    if (w, h) == (width, height) {
        return Ok(rgb);
    }

    debug!("resizing {} from {}x{} to {}x{}", path.display(), width, height, w, h);
    Ok(imageops::resize(&rgb, w, h, FilterType::Lanczos3))
}

fn write_jpeg(img: &RgbImage, path: &Path, quality: u8) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    JpegEncoder::new_with_quality(&mut writer, quality).encode_image(img)?;
    writer.flush()?;
    Ok(())
}

// ============================================================================
// Optimization
// ============================================================================

/// Optimize one image in place.
///
/// JPEGs are re-encoded where they are. PNGs are re-encoded to a `.jpg`
/// sibling; the PNG is deleted only if the JPEG came out strictly smaller,
/// otherwise the JPEG copy is discarded. A PNG whose `.jpg` sibling already
/// exists is left as it is, and so is the sibling.
pub fn optimize_image(path: &Path, settings: &ImageSettings) -> Result<Optimized> {
    let size_before = fs::metadata(path)?.len();
    let img = prepare(path, settings)?;

    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let output = match ext.as_str() {
        "jpg" | "jpeg" => {
            write_jpeg(&img, path, settings.quality)?;
            path.to_path_buf()
        }
        "png" => {
            let jpg_path = path.with_extension("jpg");
            if jpg_path.exists() {
                warn!(
                    "{} already exists, keeping {} unconverted",
                    jpg_path.display(),
                    path.display()
                );
                return Ok(Optimized {
                    source: path.to_path_buf(),
                    output: path.to_path_buf(),
                    size_before,
                    size_after: size_before,
                });
            }
            write_jpeg(&img, &jpg_path, settings.quality)?;
            if fs::metadata(&jpg_path)?.len() < size_before {
                fs::remove_file(path)?;
                jpg_path
            } else {
                fs::remove_file(&jpg_path)?;
                path.to_path_buf()
            }
        }
        _ => return Err(PipelineError::UnsupportedFormat(path.to_path_buf())),
    };

    let size_after = fs::metadata(&output)?.len();
    Ok(Optimized {
        source: path.to_path_buf(),
        output,
        size_before,
        size_after,
    })
}

/// Images under `directory` that the optimizer should touch
pub fn collect_images(directory: &Path) -> Vec<PathBuf> {
    WalkDir::new(directory)
        .sort_by_file_name()
        .into_iter()
        .filter_map(readable_entry)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_string_lossy();
            has_extension(&name, IMAGE_EXTENSIONS) && !name.contains(DUPLICATE_MARKER)
        })
        .map(|e| e.into_path())
        .collect()
}

/// Optimize every image below `directory`, logging and skipping failures
pub fn optimize_directory(directory: &Path, settings: &ImageSettings) -> Result<OptimizeSummary> {
    if !directory.is_dir() {
        return Err(PipelineError::MissingDirectory(directory.to_path_buf()));
    }

    let images = collect_images(directory);
    let mut summary = OptimizeSummary {
        found: images.len(),
        ..Default::default()
    };

    println!("Found {} images to optimize", images.len());
    println!("{}", "=".repeat(60));

    let target_bytes = settings.target_size_kb * 1024;

    for (i, path) in images.iter().enumerate() {
        let result = match optimize_image(path, settings) {
            Ok(result) => result,
            Err(e) => {
                error!("Error optimizing {}: {}", path.display(), e);
                summary.failed += 1;
                continue;
            }
        };

        summary.optimized += 1;
        summary.bytes_before += result.size_before;
        summary.bytes_after += result.size_after;
        if result.size_after > target_bytes {
            summary.over_target.push(result.output.clone());
        }

        let reduction = result.reduction_percent();
        if (i + 1) % 10 == 0 || reduction > 50.0 {
            println!(
                "[{}/{}] {}: {:.2}MB → {:.2}MB ({:.1}% reduction)",
                i + 1,
                images.len(),
                path.file_name().unwrap_or_default().to_string_lossy(),
                result.size_before as f64 / BYTES_PER_MB,
                result.size_after as f64 / BYTES_PER_MB,
                reduction
            );
        }
    }

    Ok(summary)
}

/// Print the closing report of a directory run
pub fn print_summary(summary: &OptimizeSummary, settings: &ImageSettings) {
    let before = summary.bytes_before as f64 / BYTES_PER_MB;
    let after = summary.bytes_after as f64 / BYTES_PER_MB;
    let saved_percent = if before > 0.0 {
        (before - after) / before * 100.0
    } else {
        0.0
    };

    println!("{}", "=".repeat(60));
    println!("\nOptimization Complete!");
    println!("Images processed: {}", summary.optimized);
    if summary.failed > 0 {
        println!("Images failed: {}", summary.failed);
    }
    println!("Total size before: {:.1} MB", before);
    println!("Total size after: {:.1} MB", after);
    println!(
        "Total reduction: {:.1} MB ({:.1}%)",
        before - after,
        saved_percent
    );
    if summary.optimized > 0 {
        println!(
            "Average size per image: {:.0} KB",
            summary.bytes_after as f64 / 1024.0 / summary.optimized as f64
        );
    }
    if !summary.over_target.is_empty() {
        println!(
            "\n{} images still above {} KB:",
            summary.over_target.len(),
            settings.target_size_kb
        );
        for path in &summary.over_target {
            println!("  - {}", path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba};
    use tempfile::TempDir;

    #[test]
    fn test_fit_within() {
        assert_eq!(fit_within(400, 300, 800, 800), (400, 300));
        assert_eq!(fit_within(800, 800, 800, 800), (800, 800));
        assert_eq!(fit_within(1600, 1200, 800, 800), (800, 600));
        assert_eq!(fit_within(1000, 2000, 800, 800), (400, 800));
        assert_eq!(fit_within(5000, 1, 800, 800), (800, 1));
    }

    #[test]
    fn test_flatten_composites_onto_white() {
        let img: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::from_fn(2, 1, |x, _| {
            if x == 0 {
                Rgba([0, 0, 0, 0])
            } else {
                Rgba([10, 20, 30, 255])
            }
        });
        let rgb = flatten_to_rgb(&DynamicImage::ImageRgba8(img));
        assert_eq!(rgb.get_pixel(0, 0), &Rgb([255, 255, 255]));
        assert_eq!(rgb.get_pixel(1, 0), &Rgb([10, 20, 30]));
    }

    #[test]
    fn test_collect_images_skips_duplicates() {
        let tmp = TempDir::new().unwrap();
        for name in ["a.png", "b.JPEG", "c 2.png", "d.txt"] {
            fs::write(tmp.path().join(name), b"").unwrap();
        }
        let names: Vec<String> = collect_images(tmp.path())
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.png", "b.JPEG"]);
    }

    #[test]
    fn test_optimize_jpeg_downscales_in_place() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("berg.jpg");
        let img = RgbImage::from_fn(1600, 1200, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });
        img.save(&path).unwrap();

        let result = optimize_image(&path, &ImageSettings::default()).unwrap();
        assert_eq!(result.output, path);
        assert_eq!(image::image_dimensions(&path).unwrap(), (800, 600));
    }

    /// Deterministic pixel noise that PNG cannot compress well
    fn noise(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            let mut h = x.wrapping_mul(0x9E37_79B9) ^ y.wrapping_mul(0x85EB_CA6B);
            h ^= h >> 15;
            h = h.wrapping_mul(0x2C1B_3C6D);
            h ^= h >> 12;
            Rgb([h as u8, (h >> 8) as u8, (h >> 16) as u8])
        })
    }

    #[test]
    fn test_optimize_png_converts_when_smaller() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("baum.png");
        noise(512, 512).save(&path).unwrap();

        let result = optimize_image(&path, &ImageSettings::default()).unwrap();
        let jpg_path = path.with_extension("jpg");
        assert_eq!(result.output, jpg_path);
        assert!(!path.exists());
        assert!(jpg_path.exists());
        assert!(result.size_after < result.size_before);
        assert_eq!(image::image_dimensions(&jpg_path).unwrap(), (512, 512));
    }

    #[test]
    fn test_optimize_png_kept_when_jpeg_is_larger() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("wolke.png");
        RgbImage::from_pixel(4, 4, Rgb([240, 240, 240]))
            .save(&path)
            .unwrap();
        let original = fs::read(&path).unwrap();

        let result = optimize_image(&path, &ImageSettings::default()).unwrap();
        assert_eq!(result.output, path);
        assert_eq!(fs::read(&path).unwrap(), original);
        assert!(!path.with_extension("jpg").exists());
    }

    #[test]
    fn test_optimize_png_leaves_existing_jpg_sibling() {
        let tmp = TempDir::new().unwrap();
        let png = tmp.path().join("baum.png");
        let jpg = tmp.path().join("baum.jpg");
        RgbImage::from_pixel(16, 16, Rgb([30, 120, 30]))
            .save(&png)
            .unwrap();
        noise(64, 64).save(&jpg).unwrap();
        let jpg_bytes = fs::read(&jpg).unwrap();
        let png_bytes = fs::read(&png).unwrap();

        let result = optimize_image(&png, &ImageSettings::default()).unwrap();
        assert_eq!(result.output, png);
        assert_eq!(fs::read(&jpg).unwrap(), jpg_bytes);
        assert_eq!(fs::read(&png).unwrap(), png_bytes);
    }

    #[test]
    fn test_optimize_directory_keeps_existing_jpg_sibling() {
        let tmp = TempDir::new().unwrap();
        let png = tmp.path().join("baum.png");
        let jpg = tmp.path().join("baum.jpg");
        RgbImage::from_pixel(16, 16, Rgb([30, 120, 30]))
            .save(&png)
            .unwrap();
        noise(64, 64).save(&jpg).unwrap();

        let summary = optimize_directory(tmp.path(), &ImageSettings::default()).unwrap();
        assert_eq!(summary.failed, 0);
        assert!(png.exists());
        assert!(jpg.exists());
        assert_eq!(image::image_dimensions(&jpg).unwrap(), (64, 64));
    }

    #[test]
    fn test_collect_images_missing_directory() {
        let tmp = TempDir::new().unwrap();
        assert!(collect_images(&tmp.path().join("nope")).is_empty());
    }

    #[test]
    fn test_optimize_directory_counts_failures() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("broken.jpg"), b"not an image").unwrap();
        let img = RgbImage::from_pixel(10, 10, Rgb([200, 10, 10]));
        img.save(tmp.path().join("ok.jpg")).unwrap();

        let summary = optimize_directory(tmp.path(), &ImageSettings::default()).unwrap();
        assert_eq!(summary.found, 2);
        assert_eq!(summary.optimized, 1);
        assert_eq!(summary.failed, 1);
    }

    #[test]
    fn test_optimize_directory_missing() {
        let tmp = TempDir::new().unwrap();
        assert!(optimize_directory(&tmp.path().join("nope"), &ImageSettings::default()).is_err());
    }
}
