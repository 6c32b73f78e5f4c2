//! Category file access
//!
//! Categories are read-only input for the dialog. The file is only written
//! by `init`, to seed the defaults.

use tracing::debug;

use super::file_io::{read_json_optional, write_json_atomic};
use crate::config::paths::PocketbookPaths;
use crate::error::PocketbookError;
use crate::models::{default_categories, Category};

/// Load categories from `categories.json`, or the defaults if it is missing
pub fn load_categories(paths: &PocketbookPaths) -> Result<Vec<Category>, PocketbookError> {
    let path = paths.categories_file();

    match read_json_optional::<Vec<Category>, _>(&path)? {
        Some(categories) => {
            debug!(count = categories.len(), path = %path.display(), "loaded categories");
            Ok(categories)
        }
        None => {
            debug!(path = %path.display(), "no categories file, using defaults");
            Ok(default_categories())
        }
    }
}

/// Write the default categories unless a categories file already exists
///
/// Returns whether the file was written.
pub fn seed_default_categories(paths: &PocketbookPaths) -> Result<bool, PocketbookError> {
    let path = paths.categories_file();
    if path.exists() {
        return Ok(false);
    }

    write_json_atomic(&path, &default_categories())?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;
    use tempfile::TempDir;

    fn paths() -> (TempDir, PocketbookPaths) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        (temp_dir, paths)
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let (_dir, paths) = paths();
        let categories = load_categories(&paths).unwrap();
        assert_eq!(categories.len(), default_categories().len());
    }

    #[test]
    fn test_file_order_is_preserved() {
        let (_dir, paths) = paths();
        let categories = vec![
            Category::new("Rent", "🏠", TransactionType::Expense),
            Category::new("Bonus", "🎁", TransactionType::Income),
            Category::new("Coffee", "☕", TransactionType::Expense),
        ];
        write_json_atomic(paths.categories_file(), &categories).unwrap();

        assert_eq!(load_categories(&paths).unwrap(), categories);
    }

    #[test]
    fn test_seed_does_not_overwrite() {
        let (_dir, paths) = paths();
        assert!(seed_default_categories(&paths).unwrap());

        let custom = vec![Category::new("Rent", "🏠", TransactionType::Expense)];
        write_json_atomic(paths.categories_file(), &custom).unwrap();

        assert!(!seed_default_categories(&paths).unwrap());
        assert_eq!(load_categories(&paths).unwrap(), custom);
    }
}
