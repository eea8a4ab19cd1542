//! Loading documents through a content extractor.

use std::path::Path;

use pdfsift_core::{Fragment, LayoutParams, RawPage, Result, SourceError};
use tracing::debug;

use crate::document::{Document, DocumentOptions};

/// Source of positioned text fragments.
///
/// pdfsift does not read PDF content streams itself. An extractor turns raw
/// source bytes into pages of [`Fragment`]s, applying the [`LayoutParams`]
/// it is handed. Errors come back as [`SourceError`] and reach the caller
/// unchanged inside [`pdfsift_core::Error::Source`].
///
/// # Usage
///
/// ```ignore
/// let pages = MyExtractor.extract_pages(&bytes, None, &LayoutParams::default())?;
/// let document = Document::from_pages(pages, DocumentOptions::default())?;
/// ```
pub trait Extractor {
    /// The fragment type the extractor produces.
    type Fragment: Fragment;

    /// Extract every page of `source`, in page order.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::PasswordRequired`] or
    /// [`SourceError::InvalidPassword`] for encrypted sources,
    /// [`SourceError::ExtractionNotAllowed`] when the document forbids it,
    /// and [`SourceError::Parse`] for unreadable input.
    fn extract_pages(
        &self,
        source: &[u8],
        password: Option<&str>,
        layout: &LayoutParams,
    ) -> std::result::Result<Vec<RawPage<Self::Fragment>>, SourceError>;
}

/// Options for [`load`] and [`load_file`].
#[derive(Debug)]
pub struct LoadOptions<F> {
    /// Password for encrypted sources.
    pub password: Option<String>,
    /// Forwarded verbatim to the extractor.
    pub layout: LayoutParams,
    /// How extracted pages become a document.
    pub document: DocumentOptions<F>,
}

impl<F> Default for LoadOptions<F> {
    fn default() -> Self {
        Self {
            password: None,
            layout: LayoutParams::default(),
            document: DocumentOptions::default(),
        }
    }
}

/// Extract `source` and build a [`Document`] from it.
///
/// # Errors
///
/// Returns [`pdfsift_core::Error::Source`] if extraction fails, or any error
/// of [`Document::from_pages`].
pub fn load<E: Extractor>(
    extractor: &E,
    source: &[u8],
    options: LoadOptions<E::Fragment>,
) -> Result<Document> {
    let pages = extractor.extract_pages(source, options.password.as_deref(), &options.layout)?;
    debug!(bytes = source.len(), pages = pages.len(), "extracted source");
    Document::from_pages(pages, options.document)
}

/// Read `path` and [`load`] it.
///
/// # Errors
///
/// Returns [`SourceError::Io`] (wrapped) if the file cannot be read, otherwise
/// as [`load`].
pub fn load_file<E: Extractor>(
    extractor: &E,
    path: impl AsRef<Path>,
    options: LoadOptions<E::Fragment>,
) -> Result<Document> {
    let bytes = std::fs::read(path.as_ref()).map_err(SourceError::from)?;
    load(extractor, &bytes, options)
}

/// Extractor for layouts that were extracted ahead of time and stored as
/// JSON: an array of [`RawPage`]s.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExtractor;

#[cfg(feature = "serde")]
impl Extractor for JsonExtractor {
    type Fragment = pdfsift_core::RawFragment;

    /// The layout is already fixed, so `password` and `layout` are ignored.
    fn extract_pages(
        &self,
        source: &[u8],
        _password: Option<&str>,
        _layout: &LayoutParams,
    ) -> std::result::Result<Vec<RawPage<Self::Fragment>>, SourceError> {
        serde_json::from_slice(source).map_err(|e| SourceError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdfsift_core::{BBox, Error, RawFragment};

    struct FixedExtractor {
        pages: Vec<RawPage>,
        password: Option<&'static str>,
    }

    impl Extractor for FixedExtractor {
        type Fragment = RawFragment;

        fn extract_pages(
            &self,
            _source: &[u8],
            password: Option<&str>,
            _layout: &LayoutParams,
        ) -> std::result::Result<Vec<RawPage>, SourceError> {
            match (self.password, password) {
                (None, _) => Ok(self.pages.clone()),
                (Some(_), None) => Err(SourceError::PasswordRequired),
                (Some(expected), Some(given)) if expected == given => Ok(self.pages.clone()),
                (Some(_), Some(_)) => Err(SourceError::InvalidPassword),
            }
        }
    }

    fn extractor(password: Option<&'static str>) -> FixedExtractor {
        let fragment = RawFragment::new(BBox::new(0.0, 0.0, 10.0, 10.0), "hi", "Arial", 12.0);
        FixedExtractor {
            pages: vec![RawPage::new(100.0, 100.0, vec![fragment])],
            password,
        }
    }

    #[test]
    fn load_builds_document() {
        let doc = load(&extractor(None), b"", LoadOptions::default()).unwrap();
        assert_eq!(doc.number_of_pages(), 1);
        assert_eq!(doc.elements().first().unwrap().font(), "Arial,12");
    }

    #[test]
    fn load_passes_password() {
        let options = LoadOptions {
            password: Some("secret".to_string()),
            ..LoadOptions::default()
        };
        assert!(load(&extractor(Some("secret")), b"", options).is_ok());
        assert_eq!(
            load(&extractor(Some("secret")), b"", LoadOptions::default()).unwrap_err(),
            Error::Source(SourceError::PasswordRequired)
        );
    }

    #[test]
    fn load_file_missing_path_is_io_error() {
        let err = load_file(
            &extractor(None),
            "/nonexistent/pdfsift/input.pdf",
            LoadOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Source(SourceError::Io(_))));
    }
}
