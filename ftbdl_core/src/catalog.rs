use log::info;
use quick_xml::{
    events::{BytesStart, Event},
    Reader,
};
use reqwest::Client;

use crate::{models::packs::PackRecord, Error, Result};

/// Retrieves the catalog document and parses it into pack records.
pub async fn fetch_catalog(client: &Client, url: &str) -> Result<Vec<PackRecord>> {
    info!("Fetching pack catalog from {}", url);
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    let packs = parse_catalog(&body)?;
    info!("Catalog lists {} packs", packs.len());
    Ok(packs)
}

/// Parses a whole catalog document. Every direct child of the root element
/// becomes one record, whatever its tag name.
pub fn parse_catalog(xml: &str) -> Result<Vec<PackRecord>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut packs = Vec::new();
    let mut depth: usize = 0;
    let mut seen_root = false;

    loop {
        match reader.read_event()? {
            Event::Start(element) => {
                if depth == 0 {
                    open_root(&mut seen_root)?;
                } else if depth == 1 {
                    packs.push(pack_from_element(&element)?);
                }
                depth += 1;
            }
            Event::Empty(element) => {
                if depth == 0 {
                    open_root(&mut seen_root)?;
                } else if depth == 1 {
                    packs.push(pack_from_element(&element)?);
                }
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Text(text) if depth == 0 && !text.iter().all(u8::is_ascii_whitespace) => {
                return Err(Error::MalformedCatalog(
                    "text outside of the root element".to_string(),
                ));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_root {
        return Err(Error::MalformedCatalog("no root element".to_string()));
    }
    if depth != 0 {
        return Err(Error::MalformedCatalog("unclosed element".to_string()));
    }
    Ok(packs)
}

fn open_root(seen_root: &mut bool) -> Result<()> {
    if *seen_root {
        return Err(Error::MalformedCatalog(
            "more than one root element".to_string(),
        ));
    }
    *seen_root = true;
    Ok(())
}

fn pack_from_element(element: &BytesStart<'_>) -> Result<PackRecord> {
    let mut pack = PackRecord::default();
    for attribute in element.attributes() {
        let attribute = attribute?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute.unescape_value()?.into_owned();
        pack.set_attribute(&key, value);
    }
    Ok(pack)
}
