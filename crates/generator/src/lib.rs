//! Static site generation for the campaign website.
//!
//! [`generate_site`] builds every page in memory, [`write_site`] writes a built
//! site to disk, and [`generate`] runs the whole pipeline: validate content,
//! create directories, copy the vendored htmx script, then write pages and the
//! stylesheet. Any I/O failure aborts the run; files already written are left
//! in place.

pub mod error;
pub mod fragments;
pub mod pages;
pub mod template;

pub use error::{Error, Result};
pub use template::Template;

use campaign_core::BlogPost;
use campaign_core::config::{PathsConfig, SiteConfig};
use campaign_core::content::validate_posts;
use pages::{AboutPage, BlogIndexPage, BlogPostPage, HomePage};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Subdirectory holding one page per blog post
pub const BLOG_DIR: &str = "blog";
/// Subdirectory holding scripts
pub const JS_DIR: &str = "js";
/// Vendored htmx build, copied verbatim
pub const HTMX_FILE: &str = "htmx.min.js";
/// Where to fetch the htmx build when the vendor directory lacks it
pub const HTMX_DOWNLOAD_URL: &str = "https://unpkg.com/htmx.org@2/dist/htmx.min.js";

pub const DEFAULT_STYLESHEET: &str = "/* Your styles here */\n";

/// A page waiting to be written, keyed by its path relative to the output root
pub struct Page<'a> {
    pub path: PathBuf,
    pub template: Box<dyn Template + 'a>,
}

pub struct GeneratedSite<'a> {
    pub pages: Vec<Page<'a>>,
    pub assets: Vec<(PathBuf, Vec<u8>)>,
}

impl GeneratedSite<'_> {
    /// Relative paths of every page and asset, in write order
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.pages
            .iter()
            .map(|p| p.path.as_path())
            .chain(self.assets.iter().map(|(path, _)| path.as_path()))
    }
}

/// Build all pages and generated assets without touching the filesystem
pub fn generate_site<'a>(site: &'a SiteConfig, posts: &'a [BlogPost]) -> GeneratedSite<'a> {
    let mut pages = vec![
        Page {
            path: PathBuf::from("index.html"),
            template: Box::new(HomePage { site }),
        },
        Page {
            path: PathBuf::from("about.html"),
            template: Box::new(AboutPage { site }),
        },
        Page {
            path: PathBuf::from("blog.html"),
            template: Box::new(BlogIndexPage { site, posts }),
        },
    ];

    pages.extend(posts.iter().map(|post| Page {
        path: Path::new(BLOG_DIR).join(post.file_name()),
        template: Box::new(BlogPostPage { site, post }),
    }));

    GeneratedSite {
        pages,
        assets: vec![(
            PathBuf::from("style.css"),
            DEFAULT_STYLESHEET.as_bytes().to_vec(),
        )],
    }
}

/// Write a generated site under `output`, returning the paths written
pub fn write_site(site: &GeneratedSite<'_>, output: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(site.pages.len() + site.assets.len());

    for page in &site.pages {
        let path = output.join(&page.path);
        ensure_parent(&path)?;
        render_to_file(&path, page.template.as_ref())?;
        tracing::debug!(path = %path.display(), "Generated page");
        written.push(path);
    }

    for (relative, data) in &site.assets {
        let path = output.join(relative);
        ensure_parent(&path)?;
        fs::write(&path, data).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Generated asset");
        written.push(path);
    }

    Ok(written)
}

/// Generate the complete site described by `paths`.
///
/// Safe to run repeatedly: directories are created only if missing and
/// every output file is overwritten. Given the same content the output is
/// byte-identical between runs.
pub fn generate(
    paths: &PathsConfig,
    site: &SiteConfig,
    posts: &[BlogPost],
) -> Result<Vec<PathBuf>> {
    validate_posts(posts)?;

    let output = paths.output.as_path();
    for dir in [
        output.to_path_buf(),
        output.join(BLOG_DIR),
        output.join(JS_DIR),
    ] {
        create_dir(&dir)?;
    }

    let mut written = vec![copy_vendor(paths)?];

    let generated = generate_site(site, posts);
    written.extend(write_site(&generated, output)?);

    tracing::info!(
        files = written.len(),
        output = %output.display(),
        "Static site generated"
    );
    Ok(written)
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| Error::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => create_dir(parent),
        _ => Ok(()),
    }
}

fn copy_vendor(paths: &PathsConfig) -> Result<PathBuf> {
    let from = paths.vendor.join(HTMX_FILE);
    let to = paths.output.join(JS_DIR).join(HTMX_FILE);

    fs::copy(&from, &to).map_err(|source| Error::CopyVendor {
        from: from.clone(),
        to: to.clone(),
        source,
    })?;

    tracing::debug!(from = %from.display(), to = %to.display(), "Copied vendor script");
    Ok(to)
}

fn render_to_file(path: &Path, template: &dyn Template) -> Result<()> {
    let write_err = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    template.render(&mut writer).map_err(write_err)?;
    writer.flush().map_err(write_err)
}
