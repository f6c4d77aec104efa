use quick_xml::events::attributes::AttrError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("catalog parse error: {0}")]
    Parse(#[from] quick_xml::Error),
    #[error("catalog attribute error: {0}")]
    Attribute(#[from] AttrError),
    #[error("malformed catalog: {0}")]
    MalformedCatalog(String),
    #[error("pack {0} not found")]
    PackNotFound(String),
    #[error("version {version} not found for {pack}")]
    VersionNotFound { version: String, pack: String },
    #[error("pack {pack} has no {field} attribute")]
    MissingField { pack: String, field: &'static str },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("archive entry escapes the destination: {0}")]
    UnsafeArchiveEntry(String),
    #[error("archive path leaves the working directory: {0}")]
    UnsafeLocalPath(String),
    #[error("progress bar template error: {0}")]
    ProgressTemplate(#[from] indicatif::style::TemplateError),
}

pub type Result<T> = std::result::Result<T, Error>;
