//! Page accessors: where raw segments and page metadata come from.
//!
//! The reconstruction core never touches a DOM. An accessor probes the rendered page once and
//! hands over plain [`RawSegment`]s plus a [`PageMetadata`] record.

use std::io::Read;

use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

use crate::segments::RawSegment;
use crate::{Error, Result};

/// Root element of the opened transcript panel.
pub const TRANSCRIPT_ROOT_SELECTOR: &str = "#content > ytd-transcript-renderer";

/// Shape of a chapter heading inside a transcript segment.
pub const HEADER_SELECTOR: &str = "yt-shelf-header-layout > div > div > h2 > span";

/// Shape of caption text inside a transcript segment.
pub const CAPTION_SELECTOR: &str = "yt-formatted-string";

/// Visible video heading above the player.
pub const HEADING_SELECTOR: &str = "#title > h1 > yt-formatted-string";

const PAGE_TITLE_SELECTOR: &str = "title";
const THUMBNAIL_SELECTOR: &str = r#"meta[property="og:image"]"#;
const DESCRIPTION_SELECTOR: &str = r#"meta[name="description"]"#;

/// Page-level metadata gathered alongside the transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Document `<title>`, suffix still attached.
    pub page_title: Option<String>,

    /// Visible video heading.
    pub heading: Option<String>,

    pub thumbnail_url: Option<String>,
    pub description: Option<String>,
}

/// Source of transcript segments and page metadata.
pub trait PageAccessor {
    /// All transcript segments, in document order.
    fn segments(&self) -> Result<Vec<RawSegment>>;

    fn metadata(&self) -> Result<PageMetadata>;
}

/// A rendered DOM snapshot of a watch page with the transcript panel open.
pub struct HtmlPage {
    doc: Html,
    selectors: Selectors,
}

struct Selectors {
    transcript_root: Selector,
    segment: Selector,
    header: Selector,
    caption: Selector,
    heading: Selector,
    page_title: Selector,
    thumbnail: Selector,
    description: Selector,
}

impl Selectors {
    fn new() -> Result<Self> {
        Ok(Self {
            transcript_root: parse_selector(TRANSCRIPT_ROOT_SELECTOR)?,
            segment: parse_selector("div")?,
            header: parse_selector(HEADER_SELECTOR)?,
            caption: parse_selector(CAPTION_SELECTOR)?,
            heading: parse_selector(HEADING_SELECTOR)?,
            page_title: parse_selector(PAGE_TITLE_SELECTOR)?,
            thumbnail: parse_selector(THUMBNAIL_SELECTOR)?,
            description: parse_selector(DESCRIPTION_SELECTOR)?,
        })
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|err| Error::msg(format!("invalid selector '{css}': {err}")))
}

impl HtmlPage {
    /// Parse a DOM snapshot from a string.
    pub fn parse(html: &str) -> Result<Self> {
        Ok(Self {
            doc: Html::parse_document(html),
            selectors: Selectors::new()?,
        })
    }

    /// Read a DOM snapshot from any byte stream (file, stdin, ...).
    pub fn from_reader<R: Read>(mut r: R) -> Result<Self> {
        let mut html = String::new();
        r.read_to_string(&mut html)?;
        Self::parse(&html)
    }

    fn transcript_root(&self) -> Result<ElementRef<'_>> {
        self.doc
            .select(&self.selectors.transcript_root)
            .next()
            .ok_or_else(|| Error::missing(TRANSCRIPT_ROOT_SELECTOR))
    }

    /// Probe one `div` for a header shape, then a caption shape, anywhere beneath it.
    ///
    /// Containment is the whole test: a wrapper `div` around a chapter reports that chapter
    /// too, as does each `div` inside its header layout. The leading header-candidate skip is
    /// calibrated against exactly this counting.
    fn probe(&self, div: ElementRef<'_>) -> RawSegment {
        if let Some(header) = div.select(&self.selectors.header).next() {
            return RawSegment::header(inner_text(header).trim());
        }

        match div.select(&self.selectors.caption).next() {
            Some(caption) => RawSegment::caption(inner_text(caption)),
            None => RawSegment::empty(),
        }
    }

    fn first_text(&self, selector: &Selector) -> Option<String> {
        self.doc
            .select(selector)
            .next()
            .map(|el| inner_text(el).trim().to_owned())
            .filter(|s| !s.is_empty())
    }

    fn first_content_attr(&self, selector: &Selector) -> Option<String> {
        self.doc
            .select(selector)
            .next()
            .and_then(|el| el.value().attr("content"))
            .map(str::to_owned)
    }
}

impl PageAccessor for HtmlPage {
    fn segments(&self) -> Result<Vec<RawSegment>> {
        let root = self.transcript_root()?;
        let segments: Vec<RawSegment> = root
            .select(&self.selectors.segment)
            .map(|div| self.probe(div))
            .collect();

        tracing::debug!(count = segments.len(), "probed transcript segments");
        Ok(segments)
    }

    fn metadata(&self) -> Result<PageMetadata> {
        let meta = PageMetadata {
            page_title: self.first_text(&self.selectors.page_title),
            heading: self.first_text(&self.selectors.heading),
            thumbnail_url: self.first_content_attr(&self.selectors.thumbnail),
            description: self.first_content_attr(&self.selectors.description),
        };

        if meta.thumbnail_url.is_none() {
            tracing::warn!("page has no og:image thumbnail");
        }
        if meta.description.is_none() {
            tracing::warn!("page has no description meta tag");
        }

        Ok(meta)
    }
}

fn inner_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Segments and metadata captured earlier, replayed without a DOM.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPage {
    pub segments: Vec<RawSegment>,
    #[serde(default)]
    pub metadata: PageMetadata,
}

impl CapturedPage {
    /// Load a captured page from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl PageAccessor for CapturedPage {
    fn segments(&self) -> Result<Vec<RawSegment>> {
        Ok(self.segments.clone())
    }

    fn metadata(&self) -> Result<PageMetadata> {
        Ok(self.metadata.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Learning Rust - YouTube</title>
  <meta property="og:image" content="https://i.ytimg.com/vi/abc/maxresdefault.jpg">
  <meta name="description" content="A talk about ownership.">
</head>
<body>
  <div id="title"><h1><yt-formatted-string>Learning Rust</yt-formatted-string></h1></div>
  <div id="content">
    <ytd-transcript-renderer>
      <div><yt-shelf-header-layout><div><div><h2><span> Chapter A </span></h2></div></div></yt-shelf-header-layout></div>
      <div><yt-formatted-string>so we
begin</yt-formatted-string></div>
      <div class="timestamp">0:01</div>
    </ytd-transcript-renderer>
  </div>
</body>
</html>"#;

    #[test]
    fn probes_divs_in_document_order() -> anyhow::Result<()> {
        let page = HtmlPage::parse(PAGE)?;
        let segments = page.segments()?;

        // Wrapper div and both header-layout divs contain the chapter; then caption, timestamp.
        assert_eq!(
            segments,
            vec![
                RawSegment::header("Chapter A"),
                RawSegment::header("Chapter A"),
                RawSegment::header("Chapter A"),
                RawSegment::caption("so we\nbegin"),
                RawSegment::empty(),
            ]
        );
        Ok(())
    }

    #[test]
    fn container_divs_report_their_first_nested_caption() -> anyhow::Result<()> {
        let html = r#"<div id="content"><ytd-transcript-renderer>
            <div id="body">
              <div><yt-formatted-string>one</yt-formatted-string></div>
              <div><yt-formatted-string>two</yt-formatted-string></div>
            </div>
        </ytd-transcript-renderer></div>"#;
        let segments = HtmlPage::parse(html)?.segments()?;
        assert_eq!(
            segments,
            vec![
                RawSegment::caption("one"),
                RawSegment::caption("one"),
                RawSegment::caption("two"),
            ]
        );
        Ok(())
    }

    #[test]
    fn every_enclosing_div_counts_as_a_header_candidate() -> anyhow::Result<()> {
        let html = r#"<title>V - YouTube</title>
        <div id="content"><ytd-transcript-renderer>
          <div id="segments-container">
            <ytd-transcript-section-header-renderer>
              <yt-shelf-header-layout><div><div><h2><span>Intro</span></h2></div></div></yt-shelf-header-layout>
            </ytd-transcript-section-header-renderer>
            <div><yt-formatted-string>hello there.</yt-formatted-string></div>
            <ytd-transcript-section-header-renderer>
              <yt-shelf-header-layout><div><div><h2><span>Part Two</span></h2></div></div></yt-shelf-header-layout>
            </ytd-transcript-section-header-renderer>
            <div><yt-formatted-string>more words.</yt-formatted-string></div>
          </div>
        </ytd-transcript-renderer></div>"#;
        let page = HtmlPage::parse(html)?;

        let candidates = page
            .segments()?
            .iter()
            .filter(|s| s.is_header_candidate)
            .count();
        // Container + two layout divs for "Intro", two layout divs for "Part Two".
        assert_eq!(candidates, 5);

        // The default skip consumes all three "Intro" candidates.
        let data = crate::extract(&page, &crate::Opts::default())?;
        assert_eq!(
            data.transcript.body,
            "# V\n\nhello there.\n\n###Part Two\n\n\n\n###Part Two\n\nmore words."
        );
        Ok(())
    }

    #[test]
    fn reads_metadata() -> anyhow::Result<()> {
        let page = HtmlPage::parse(PAGE)?;
        let meta = page.metadata()?;
        assert_eq!(meta.page_title.as_deref(), Some("Learning Rust - YouTube"));
        assert_eq!(meta.heading.as_deref(), Some("Learning Rust"));
        assert_eq!(
            meta.thumbnail_url.as_deref(),
            Some("https://i.ytimg.com/vi/abc/maxresdefault.jpg")
        );
        assert_eq!(meta.description.as_deref(), Some("A talk about ownership."));
        Ok(())
    }

    #[test]
    fn missing_transcript_panel_is_an_error() -> anyhow::Result<()> {
        let page = HtmlPage::parse("<html><body><p>nothing</p></body></html>")?;
        let err = page.segments().unwrap_err();
        assert!(matches!(err, Error::MissingElement { .. }));
        assert!(err.to_string().contains("ytd-transcript-renderer"));
        Ok(())
    }

    #[test]
    fn missing_metadata_is_not_an_error() -> anyhow::Result<()> {
        let page = HtmlPage::parse("<html><body></body></html>")?;
        assert_eq!(page.metadata()?, PageMetadata::default());
        Ok(())
    }

    #[test]
    fn from_reader_matches_parse() -> anyhow::Result<()> {
        let page = HtmlPage::from_reader(std::io::Cursor::new(PAGE.as_bytes()))?;
        assert_eq!(page.segments()?, HtmlPage::parse(PAGE)?.segments()?);
        Ok(())
    }

    #[test]
    fn captured_page_round_trips_through_accessor() -> anyhow::Result<()> {
        let json = r#"{
            "segments": [{"caption_text": "hi."}],
            "metadata": {"page_title": "Clip - YouTube"}
        }"#;
        let page = CapturedPage::from_json(json)?;
        assert_eq!(page.segments()?, vec![RawSegment::caption("hi.")]);
        assert_eq!(page.metadata()?.page_title.as_deref(), Some("Clip - YouTube"));
        Ok(())
    }
}
