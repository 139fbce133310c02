//! PDF container serialization
//!
//! Builds the output document object-by-object with `lopdf`: one page per
//! capture, each page a MediaBox-sized dictionary whose content stream
//! draws a single image XObject under an affine transform. Capture bytes
//! are embedded untouched as DCTDecode streams; nothing is re-encoded.
//!
//! The writer owns a named temp file in the target's directory. Nothing is
//! ever written at the target path until `finalize` persists the finished
//! container with a rename, so an aborted or failed assembly leaves the
//! target exactly as it was.

use std::io::Write;
use std::path::{Path, PathBuf};

use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::compose::placed_size;
use crate::constants::{JPEG_BITS_PER_COMPONENT, PDF_VERSION};
use crate::probe::ImageInfo;
use crate::types::{AssembleError, Placement, Result};

/// Accumulates pages into an in-memory PDF and persists it atomically.
#[derive(Debug)]
pub struct DocumentWriter {
    doc: Document,
    pages_tree_id: ObjectId,
    page_refs: Vec<Object>,
    page_width_pt: f32,
    page_height_pt: f32,
    title: Option<String>,
    target: PathBuf,
    temp: NamedTempFile,
}

impl DocumentWriter {
    /// Open a writer targeting `path` with a fixed page size in points.
    ///
    /// Creates the temp file immediately so an unwritable directory fails
    /// here rather than after all pages were composed. Dropping the writer
    /// without calling [`finalize`](Self::finalize) removes the temp file
    /// and leaves the target path untouched.
    pub fn create(
        path: impl AsRef<Path>,
        page_width_pt: f32,
        page_height_pt: f32,
        title: Option<String>,
    ) -> Result<Self> {
        let target = path.as_ref().to_owned();
        let dir = target
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let temp = NamedTempFile::new_in(dir)
            .map_err(|e| AssembleError::Write(format!("cannot create temp file in {:?}: {}", dir, e)))?;

        let mut doc = Document::with_version(PDF_VERSION);
        let pages_tree_id = doc.new_object_id();

        Ok(Self {
            doc,
            pages_tree_id,
            page_refs: Vec::new(),
            page_width_pt,
            page_height_pt,
            title,
            target,
            temp,
        })
    }

    /// Number of pages added so far.
    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    /// Append one page embedding `jpeg_bytes` under `placement`.
    ///
    /// The content stream is `q W 0 0 H x y cm /Im0 Do Q`: image XObjects
    /// are drawn into the unit square, so the matrix diagonal carries the
    /// placed dimensions, not the bare scale factor.
    pub fn add_page(
        &mut self,
        jpeg_bytes: Vec<u8>,
        info: &ImageInfo,
        placement: &Placement,
    ) -> Result<()> {
        let mut xobject_dict = Dictionary::new();
        xobject_dict.set("Type", Object::Name(b"XObject".to_vec()));
        xobject_dict.set("Subtype", Object::Name(b"Image".to_vec()));
        xobject_dict.set("Width", Object::Integer(info.width as i64));
        xobject_dict.set("Height", Object::Integer(info.height as i64));
        xobject_dict.set(
            "ColorSpace",
            Object::Name(info.color_space.pdf_name().as_bytes().to_vec()),
        );
        xobject_dict.set(
            "BitsPerComponent",
            Object::Integer(JPEG_BITS_PER_COMPONENT),
        );
        xobject_dict.set("Filter", Object::Name(b"DCTDecode".to_vec()));

        // Already-compressed data; keep the stream verbatim.
        let mut image_stream = Stream::new(xobject_dict, jpeg_bytes);
        image_stream.allows_compression = false;
        let xobject_id = self.doc.add_object(image_stream);

        let (placed_w, placed_h) = placed_size(info.width, info.height, placement);
        let content = format!(
            "q {} 0 0 {} {} {} cm /Im0 Do Q",
            placed_w, placed_h, placement.x_pt, placement.y_pt
        );
        let content_id = self
            .doc
            .add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        let mut xobjects = Dictionary::new();
        xobjects.set("Im0", Object::Reference(xobject_id));
        let mut resources = Dictionary::new();
        resources.set("XObject", Object::Dictionary(xobjects));

        let page_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(self.pages_tree_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(self.page_width_pt),
                    Object::Real(self.page_height_pt),
                ]),
            ),
            ("Resources", Object::Dictionary(resources)),
            ("Contents", Object::Reference(content_id)),
        ]);
        let page_id = self.doc.add_object(page_dict);
        self.page_refs.push(Object::Reference(page_id));

        debug!(
            page = self.page_refs.len(),
            width = info.width,
            height = info.height,
            scale = placement.scale,
            "page added"
        );

        Ok(())
    }

    /// Write the pages tree, catalog, and trailer, then atomically move
    /// the finished file to the target path, replacing any previous file.
    pub fn finalize(mut self) -> Result<PathBuf> {
        let count = self.page_refs.len() as i64;
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(self.page_refs)),
            ("Count", Object::Integer(count)),
        ]);
        self.doc
            .objects
            .insert(self.pages_tree_id, Object::Dictionary(pages_dict));

        let catalog_id = self.doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(self.pages_tree_id)),
        ]));
        self.doc.trailer.set("Root", catalog_id);

        if let Some(title) = self.title.take() {
            let info_id = self.doc.add_object(Dictionary::from_iter(vec![(
                "Title",
                Object::string_literal(title),
            )]));
            self.doc.trailer.set("Info", info_id);
        }

        self.doc
            .save_to(self.temp.as_file_mut())
            .map_err(|e| AssembleError::Write(format!("cannot serialize document: {}", e)))?;
        self.temp
            .as_file_mut()
            .flush()
            .map_err(|e| AssembleError::Write(format!("cannot flush document: {}", e)))?;

        self.temp
            .persist(&self.target)
            .map_err(|e| AssembleError::Write(format!("cannot persist document: {}", e)))?;

        debug!(pages = count, path = %self.target.display(), "document finalized");
        Ok(self.target)
    }
}
