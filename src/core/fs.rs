//! Filesystem traversal — find column directories and the images inside them.
//!
//! Both listings come back already sorted.  Ordering is plain byte order on
//! the path, so `img10.png` lands before `img2.png` and `a b/` before `a/b/`.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Result, StitchError};

/// Suffixes recognised as images.  Matching is case-sensitive.
pub const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg"];

/// Does `name` end in one of [`IMAGE_EXTENSIONS`]?  No content sniffing.
pub fn is_image(name: &str) -> bool {
    IMAGE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Byte-wise comparison of two paths as whole strings.
///
/// `Path`'s own `Ord` compares component by component, which would put
/// `a/b` before `a b`; columns must follow raw string order instead.
pub fn lexical_cmp(a: &Path, b: &Path) -> Ordering {
    a.as_os_str()
        .as_encoded_bytes()
        .cmp(b.as_os_str().as_encoded_bytes())
}

/// Every directory below `root` (at any depth, `root` excluded), sorted.
///
/// Symlinked directories are listed by the walker as links, not dirs, so they
/// never become columns.
pub fn discover_columns(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(StitchError::NotADirectory(root.to_path_buf()));
    }

    let mut dirs = Vec::new();
    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry.map_err(|source| StitchError::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_dir() {
            dirs.push(entry.into_path());
        }
    }

    dirs.sort_by(|a, b| lexical_cmp(a, b));
    debug!(root = %root.display(), count = dirs.len(), "discovered column directories");
    Ok(dirs)
}

/// Image files directly inside `dir` (non-recursive), sorted by file name.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let io_err = |source| StitchError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut images = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let path = entry.path();
        // `is_file` follows symlinks, so a link to a regular file counts.
        if !path.is_file() {
            continue;
        }
        if is_image(&entry.file_name().to_string_lossy()) {
            images.push(path);
        }
    }

    images.sort_by(|a, b| lexical_cmp(a, b));
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn names(paths: &[PathBuf], base: &Path) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.strip_prefix(base).unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn recognises_only_exact_suffixes() {
        assert!(is_image("a.png"));
        assert!(is_image("photo.jpg"));
        assert!(is_image("photo.jpeg"));
        assert!(!is_image("a.PNG"));
        assert!(!is_image("readme.txt"));
        assert!(!is_image("png"));
        assert!(!is_image("a.png.bak"));
    }

    #[test]
    fn lexical_order_is_not_natural_order() {
        let mut v = vec![PathBuf::from("img2.png"), PathBuf::from("img10.png")];
        v.sort_by(|a, b| lexical_cmp(a, b));
        assert_eq!(v, vec![PathBuf::from("img10.png"), PathBuf::from("img2.png")]);
    }

    #[test]
    fn lexical_order_compares_whole_strings() {
        assert_eq!(
            lexical_cmp(Path::new("root/a b"), Path::new("root/a/b")),
            Ordering::Less
        );
    }

    #[test]
    fn discovers_nested_dirs_sorted_without_root() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("b")).unwrap();
        fs::create_dir_all(root.join("a/inner")).unwrap();
        fs::write(root.join("loose.png"), b"not a dir").unwrap();

        let dirs = discover_columns(root).unwrap();
        assert_eq!(names(&dirs, root), vec!["a", "a/inner", "b"]);
    }

    #[test]
    fn root_without_subdirs_yields_nothing() {
        let tmp = TempDir::new().unwrap();
        assert!(discover_columns(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_root_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = discover_columns(&tmp.path().join("nope")).unwrap_err();
        assert!(matches!(err, StitchError::NotADirectory(_)));
    }

    #[test]
    fn lists_images_only_and_sorted() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path();
        for name in ["img2.png", "img10.png", "b.jpeg", "readme.txt", "c.JPG"] {
            fs::write(dir.join(name), b"").unwrap();
        }
        fs::create_dir(dir.join("sub.png")).unwrap();

        let images = list_images(dir).unwrap();
        assert_eq!(names(&images, dir), vec!["b.jpeg", "img10.png", "img2.png"]);
    }
}
