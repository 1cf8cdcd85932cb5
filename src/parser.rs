use scraper::{ElementRef, Html, Selector};

/// Generic price lookups tried, in order, after the target's own selector.
pub const FALLBACK_SELECTORS: &[&str] = &[
    r#"[class*="price"]"#,
    r#"[id*="price"]"#,
    ".product-price",
    ".current-price",
    r#"span[itemprop="price"]"#,
    r#"meta[itemprop="price"]"#,
];

/// Pulls a number out of display text by dropping everything but digits and dots.
///
/// Currency symbols and thousands separators vanish, but so does any
/// whitespace between separate numbers: "$199.99 (32)" reads as 199.9932.
pub fn parse_price(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

/// One way of finding a price in a parsed page.
pub struct PriceStrategy {
    css: String,
    selector: Selector,
}

impl PriceStrategy {
    pub fn new(css: &str) -> Option<Self> {
        match Selector::parse(css) {
            Ok(selector) => Some(PriceStrategy {
                css: css.to_string(),
                selector,
            }),
            Err(e) => {
                log::warn!("Ignoring invalid price selector {css:?}: {e}");
                None
            }
        }
    }

    pub fn css(&self) -> &str {
        &self.css
    }

    /// Reads the first element the selector matches. A non-empty `content`
    /// attribute wins over text, which is how meta tags carry prices.
    pub fn apply(&self, doc: &Html) -> Option<f64> {
        let element = doc.select(&self.selector).next()?;
        match element.value().attr("content") {
            Some(content) if !content.trim().is_empty() => parse_price(content),
            _ => parse_price(&element_text(element)),
        }
    }
}

fn element_text(element: ElementRef) -> String {
    element.text().map(str::trim).collect()
}

/// The target's selector followed by the fixed fallbacks.
pub fn strategies(primary: &str) -> Vec<PriceStrategy> {
    std::iter::once(primary)
        .chain(FALLBACK_SELECTORS.iter().copied())
        .filter_map(PriceStrategy::new)
        .collect()
}

pub fn extract_price(html: &str, primary: &str) -> Option<f64> {
    let doc = Html::parse_document(html);
    strategies(primary).iter().find_map(|strategy| {
        let price = strategy.apply(&doc)?;
        log::debug!("Price {price} matched by {:?}", strategy.css());
        Some(price)
    })
}
